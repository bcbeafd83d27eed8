//! Command definitions and handlers.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{Local, NaiveDate};
use clap::{Args, Parser, Subcommand};
use rust_decimal::Decimal;
use serde::Serialize;
use tracing::info;

use spendwise_core::expense::{ExpenseDefinition, Occurrence, parse_date};
use spendwise_core::export::{CsvExporter, ExportScope};
use spendwise_core::recurrence::RecurrenceExpander;
use spendwise_core::reports::{AggregationEngine, TrendSummary, YearlyTrend};
use spendwise_core::status::ReminderPlanner;
use spendwise_core::store::{ExpenseStore, InMemoryExpenseStore, persist_occurrences};
use spendwise_core::ExpensePipeline;
use spendwise_shared::types::ExpenseId;
use spendwise_shared::{AppConfig, AppError, AppResult};

use crate::file_store;

#[derive(Parser, Debug)]
#[command(name = "spendwise")]
#[command(about = "Track recurring expenses, reports and CSV exports")]
pub struct Cli {
    /// Path of the JSON store (defaults to `storage.path`).
    #[arg(long, global = true, env = "SPENDWISE_STORE")]
    store: Option<PathBuf>,

    /// Reference date for status and reminders, YYYY-MM-DD (defaults to today).
    #[arg(long, global = true, value_parser = date_arg)]
    today: Option<NaiveDate>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Add an expense.
    Add(AddArgs),
    /// List occurrences with their resolved status.
    List(PeriodArgs),
    /// Monthly series per category for one year.
    Yearly {
        #[arg(long)]
        year: i32,
    },
    /// Yearly trend lines and summary.
    Trends,
    /// Occurrences whose reminder window contains the reference date.
    Reminders,
    /// Delete one expense or every expense in a period.
    Delete(DeleteArgs),
    /// Write a CSV export to the export directory.
    Export(ExportArgs),
}

#[derive(Args, Debug)]
struct AddArgs {
    #[arg(long)]
    name: String,
    #[arg(long)]
    amount: Decimal,
    #[arg(long)]
    category: String,
    #[arg(long, value_parser = date_arg)]
    date: NaiveDate,
    #[arg(long)]
    description: Option<String>,
    #[arg(long, value_parser = date_arg)]
    due_date: Option<NaiveDate>,
    #[arg(long)]
    recurring: bool,
    #[arg(long, requires = "recurring")]
    occurrences: Option<u32>,
    #[arg(long, value_parser = date_arg, requires = "recurring")]
    end_date: Option<NaiveDate>,
    #[arg(long)]
    remind_before_days: Option<u32>,
    /// Store each generated occurrence as its own expense.
    #[arg(long, requires = "recurring")]
    expand: bool,
}

#[derive(Args, Debug)]
struct PeriodArgs {
    #[arg(long)]
    year: Option<i32>,
    #[arg(long, requires = "year")]
    month: Option<u32>,
}

#[derive(Args, Debug)]
struct DeleteArgs {
    #[arg(long, conflicts_with_all = ["year", "month"], required_unless_present = "year")]
    id: Option<i64>,
    #[arg(long)]
    year: Option<i32>,
    #[arg(long, requires = "year")]
    month: Option<u32>,
}

#[derive(Args, Debug)]
struct ExportArgs {
    #[arg(long, default_value = "all")]
    scope: String,
    #[arg(long)]
    year: Option<i32>,
    #[arg(long)]
    month: Option<u32>,
}

#[derive(Serialize)]
struct TrendsReport {
    trend: YearlyTrend,
    summary: Option<TrendSummary>,
}

fn date_arg(raw: &str) -> Result<NaiveDate, String> {
    parse_date(raw).map_err(|err| err.to_string())
}

/// Executes the parsed command against the configured store.
pub fn run(cli: Cli, config: &AppConfig) -> AppResult<()> {
    let today = cli.today.unwrap_or_else(|| Local::now().date_naive());
    let path = cli
        .store
        .unwrap_or_else(|| PathBuf::from(&config.storage.path));
    let mut store = file_store::load(&path, today)?;
    let pipeline = ExpensePipeline::from_config(&config.engine);

    match cli.command {
        Command::Add(args) => {
            let ids = add(&mut store, args, config)?;
            file_store::save(&path, &store)?;
            print_json(&ids)
        }
        Command::List(period) => {
            let occurrences = occurrences(&store, &pipeline, today)?;
            let selected: Vec<_> = occurrences
                .into_iter()
                .filter(|o| period.contains(o))
                .collect();
            print_json(&selected)
        }
        Command::Yearly { year } => {
            let occurrences = occurrences(&store, &pipeline, today)?;
            print_json(&AggregationEngine::yearly_overview(&occurrences, year))
        }
        Command::Trends => {
            let occurrences = occurrences(&store, &pipeline, today)?;
            print_json(&TrendsReport {
                trend: AggregationEngine::yearly_trend(&occurrences),
                summary: AggregationEngine::trend_summary(&occurrences).ok(),
            })
        }
        Command::Reminders => {
            let occurrences = occurrences(&store, &pipeline, today)?;
            print_json(&ReminderPlanner::due_reminders(&occurrences, today))
        }
        Command::Delete(args) => {
            let removed = delete(&mut store, &args)?;
            file_store::save(&path, &store)?;
            info!(removed, "deleted expenses");
            print_json(&removed)
        }
        Command::Export(args) => {
            let scope = ExportScope::from_parts(&args.scope, args.year, args.month)?;
            let occurrences = occurrences(&store, &pipeline, today)?;
            let written = export(&occurrences, scope, today, Path::new(&config.export.directory))?;
            println!("{}", written.display());
            Ok(())
        }
    }
}

impl PeriodArgs {
    fn contains(&self, occurrence: &Occurrence) -> bool {
        match (self.year, self.month) {
            (Some(year), Some(month)) => occurrence.expense.falls_in_month(year, month),
            (Some(year), None) => occurrence.expense.falls_in_year(year),
            _ => true,
        }
    }
}

fn occurrences(
    store: &InMemoryExpenseStore,
    pipeline: &ExpensePipeline,
    today: NaiveDate,
) -> AppResult<Vec<Occurrence>> {
    let definitions = store.list_all()?;
    Ok(pipeline.run(&definitions, today).occurrences)
}

fn add(store: &mut InMemoryExpenseStore, args: AddArgs, config: &AppConfig) -> AppResult<Vec<ExpenseId>> {
    let mut builder = ExpenseDefinition::builder(args.name, args.amount, args.category)
        .date(args.date)
        .recurring(args.recurring)
        .remind_before_days(
            args.remind_before_days
                .unwrap_or(config.engine.default_remind_before_days),
        );
    if let Some(description) = args.description {
        builder = builder.description(description);
    }
    if let Some(due_date) = args.due_date {
        builder = builder.due_date(due_date);
    }
    if let Some(count) = args.occurrences {
        builder = builder.num_occurrences(count);
    }
    if let Some(end_date) = args.end_date {
        builder = builder.end_date(end_date);
    }

    let definition = builder.build()?;
    let id = store.insert(definition.clone())?;
    info!(%id, name = %definition.name, "added expense");
    if !args.expand {
        return Ok(vec![id]);
    }

    // The parent row becomes occurrence 0; the rest are stored on their own.
    let stored = ExpenseDefinition { id, ..definition };
    let expander = RecurrenceExpander::new((&config.engine).into());
    let generated = expander.expand(&stored)?;
    let mut ids = vec![id];
    ids.extend(persist_occurrences(store, generated.get(1..).unwrap_or_default())?);
    store.update(
        id,
        ExpenseDefinition {
            recurring: false,
            num_occurrences: None,
            end_date: None,
            ..stored
        },
    )?;
    Ok(ids)
}

fn delete(store: &mut InMemoryExpenseStore, args: &DeleteArgs) -> AppResult<usize> {
    match (args.id, args.year, args.month) {
        (Some(id), _, _) => {
            store.delete(ExpenseId::new(id))?;
            Ok(1)
        }
        (None, Some(year), Some(month)) => Ok(store.delete_by_month(year, month)?),
        (None, Some(year), None) => Ok(store.delete_by_year(year)?),
        (None, None, _) => Err(AppError::Validation(
            "delete needs --id or --year".to_string(),
        )),
    }
}

fn export(
    occurrences: &[Occurrence],
    scope: ExportScope,
    today: NaiveDate,
    directory: &Path,
) -> AppResult<PathBuf> {
    let file = CsvExporter::export(occurrences, scope, today)?;
    fs::create_dir_all(directory).map_err(|err| AppError::Storage(err.to_string()))?;
    let target = directory.join(&file.file_name);
    fs::write(&target, file.contents).map_err(|err| AppError::Storage(err.to_string()))?;
    info!(path = %target.display(), rows = file.rows, "export written");
    Ok(target)
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> AppResult<()> {
    let json = serde_json::to_string_pretty(value).map_err(|err| AppError::Internal(err.to_string()))?;
    println!("{json}");
    Ok(())
}
