//! JSON file persistence for the in-memory store.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use chrono::NaiveDate;
use tracing::debug;

use spendwise_core::store::{ExpenseRow, InMemoryExpenseStore};
use spendwise_shared::{AppError, AppResult};

/// Reads the store at `path`. A missing file is an empty store.
pub fn load(path: &Path, today: NaiveDate) -> AppResult<InMemoryExpenseStore> {
    let raw = match fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(err) if err.kind() == ErrorKind::NotFound => {
            debug!(path = %path.display(), "no store file, starting empty");
            return Ok(InMemoryExpenseStore::new());
        }
        Err(err) => return Err(storage_error(path, &err)),
    };

    let rows: Vec<ExpenseRow> =
        serde_json::from_str(&raw).map_err(|err| storage_error(path, &err))?;
    debug!(path = %path.display(), rows = rows.len(), "loaded store");
    Ok(InMemoryExpenseStore::from_rows(rows, today))
}

/// Writes every record of `store` to `path`.
pub fn save(path: &Path, store: &InMemoryExpenseStore) -> AppResult<()> {
    let json = serde_json::to_string_pretty(&store.to_rows())
        .map_err(|err| storage_error(path, &err))?;
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|err| storage_error(path, &err))?;
    }
    fs::write(path, json).map_err(|err| storage_error(path, &err))
}

fn storage_error(path: &Path, err: &dyn std::error::Error) -> AppError {
    AppError::Storage(format!("{}: {err}", path.display()))
}
