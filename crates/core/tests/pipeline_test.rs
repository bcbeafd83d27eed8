//! End-to-end tests: store, expansion, status, reports and export together.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use spendwise_core::expense::{ExpenseDefinition, ExpenseStatus, Occurrence};
use spendwise_core::export::{CsvExporter, ExportScope};
use spendwise_core::recurrence::RecurrenceExpander;
use spendwise_core::reports::{AggregationEngine, Extreme, ReportError};
use spendwise_core::status::ReminderPlanner;
use spendwise_core::store::{ExpenseStore, InMemoryExpenseStore, persist_occurrences};
use spendwise_core::ExpensePipeline;
use spendwise_shared::types::ExpenseId;

fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn rent() -> ExpenseDefinition {
    ExpenseDefinition::builder("Rent", dec!(500), "Housing")
        .date(ymd(2024, 1, 31))
        .recurring(true)
        .num_occurrences(3)
        .build()
        .unwrap()
}

fn seeded_store() -> InMemoryExpenseStore {
    let mut store = InMemoryExpenseStore::new();
    store.insert(rent()).unwrap();
    store
        .insert(
            ExpenseDefinition::builder("Groceries", dec!(82.40), "Food")
                .date(ymd(2024, 3, 12))
                .status(ExpenseStatus::Paid)
                .build()
                .unwrap(),
        )
        .unwrap();
    store
        .insert(
            ExpenseDefinition::builder("Insurance", dec!(1200), "Insurance")
                .date(ymd(2023, 11, 2))
                .due_date(ymd(2023, 12, 1))
                .build()
                .unwrap(),
        )
        .unwrap();
    store
}

// ============================================================================
// Test: recurring rent across month ends
// ============================================================================
#[test]
fn test_rent_series_clamps_to_month_end() {
    let occurrences = RecurrenceExpander::default().expand(&rent()).unwrap();
    let dates: Vec<_> = occurrences.iter().map(Occurrence::effective_date).collect();

    assert_eq!(
        dates,
        vec![
            Some(ymd(2024, 1, 31)),
            Some(ymd(2024, 2, 29)),
            Some(ymd(2024, 3, 31)),
        ]
    );

    let march = AggregationEngine::by_month_and_category(&occurrences, 2024, 3);
    assert_eq!(march.get("Housing"), Some(&dec!(500)));
    assert_eq!(AggregationEngine::total_for_year(&occurrences, 2024), dec!(1500));
}

// ============================================================================
// Test: stored records through the whole pipeline
// ============================================================================
#[test]
fn test_store_to_reports() {
    let store = seeded_store();
    let definitions = store.list_all().unwrap();
    let out = ExpensePipeline::default().run(&definitions, ymd(2024, 3, 15));

    assert!(out.is_complete());
    assert_eq!(out.occurrences.len(), 5);

    assert_eq!(AggregationEngine::distinct_years(&out.occurrences), vec![2023, 2024]);
    assert_eq!(
        AggregationEngine::by_year_and_category(&out.occurrences, 2024)
            .into_iter()
            .collect::<Vec<_>>(),
        vec![
            ("Food".to_string(), dec!(82.40)),
            ("Housing".to_string(), dec!(1500)),
        ]
    );

    let highest = AggregationEngine::extreme_year(&out.occurrences, Extreme::Highest).unwrap();
    assert_eq!((highest.year, highest.amount), (2024, dec!(1582.40)));
    let lowest = AggregationEngine::extreme_year(&out.occurrences, Extreme::Lowest).unwrap();
    assert_eq!((lowest.year, lowest.amount), (2023, dec!(1200)));
    assert_eq!(AggregationEngine::average_yearly(&out.occurrences), dec!(1391.20));

    let statuses: Vec<_> = out.occurrences.iter().map(Occurrence::status).collect();
    assert_eq!(
        statuses,
        vec![
            // Rent series has no due date on occurrence 0.
            ExpenseStatus::Unpaid,
            ExpenseStatus::Overdue,
            ExpenseStatus::Unpaid,
            ExpenseStatus::Paid,
            ExpenseStatus::Overdue,
        ]
    );
}

// ============================================================================
// Test: empty inputs
// ============================================================================
#[test]
fn test_empty_inputs() {
    let empty: Vec<Occurrence> = Vec::new();
    assert!(AggregationEngine::distinct_years(&empty).is_empty());
    assert_eq!(AggregationEngine::total_for(&empty), Decimal::ZERO);
    assert_eq!(AggregationEngine::average_yearly(&empty), Decimal::ZERO);
    assert!(matches!(
        AggregationEngine::extreme_year(&empty, Extreme::Highest),
        Err(ReportError::EmptyDataset)
    ));
    assert_eq!(CsvExporter::serialize_all(&empty).unwrap().lines().count(), 1);
}

// ============================================================================
// Test: export of a month scope reads back
// ============================================================================
#[test]
fn test_month_export_round_trip() {
    let store = seeded_store();
    let out = ExpensePipeline::default().run(&store.list_all().unwrap(), ymd(2024, 3, 15));

    let scope = ExportScope::from_parts("month", Some(2024), Some(3)).unwrap();
    let file = CsvExporter::export(&out.occurrences, scope, ymd(2024, 3, 15)).unwrap();
    assert_eq!(file.file_name, "export-2024-03.csv");
    assert_eq!(file.rows, 2);
    assert!(!file.contents.ends_with('\n'));

    let mut reader = csv::ReaderBuilder::new().from_reader(file.contents.as_bytes());
    let headers = reader.headers().unwrap().clone();
    assert_eq!(headers.get(0), Some("id"));
    assert_eq!(headers.get(6), Some("dueDate"));

    let rows: Vec<csv::StringRecord> = reader.records().map(Result::unwrap).collect();
    assert_eq!(rows[0].get(0), Some("1-2"));
    assert_eq!(rows[0].get(6), Some("2024-03-31"));
    assert_eq!(rows[1].get(0), Some("2"));
    assert_eq!(rows[1].get(1), Some("Groceries"));
    assert_eq!(rows[1].get(8), Some("paid"));
}

// ============================================================================
// Test: generated occurrences persisted as rows
// ============================================================================
#[test]
fn test_persisted_series_replaces_expansion() {
    let mut store = InMemoryExpenseStore::new();
    let parent = store.insert(rent()).unwrap();
    let stored = store.list_all().unwrap();
    let generated = RecurrenceExpander::default().expand(&stored[0]).unwrap();

    let ids = persist_occurrences(&mut store, &generated[1..]).unwrap();
    assert_eq!(ids, vec![ExpenseId::new(2), ExpenseId::new(3)]);

    let mut parent_row = store.list_all().unwrap().remove(0);
    parent_row.recurring = false;
    parent_row.num_occurrences = None;
    store.update(parent, parent_row).unwrap();

    let february = store.list_by_month(2024, 2).unwrap();
    assert_eq!(february.len(), 1);
    assert_eq!(february[0].due_date, Some(ymd(2024, 2, 29)));

    let out = ExpensePipeline::default().run(&store.list_all().unwrap(), ymd(2024, 1, 1));
    assert_eq!(AggregationEngine::total_for_year(&out.occurrences, 2024), dec!(1500));
    assert_eq!(store.delete_by_year(2024).unwrap(), 3);
}

// ============================================================================
// Test: reminders on the pipeline output
// ============================================================================
#[test]
fn test_reminders_for_reference_date() {
    let store = seeded_store();
    let today = ymd(2024, 2, 28);
    let out = ExpensePipeline::default().run(&store.list_all().unwrap(), today);

    let due = ReminderPlanner::due_reminders(&out.occurrences, today);
    assert_eq!(due.len(), 1);
    assert_eq!(due[0].effective_date(), Some(ymd(2024, 2, 29)));
    assert_eq!(due[0].occurrence_id.to_string(), "1-1");
}
