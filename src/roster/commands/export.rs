use crate::commands::{CmdMessage, CmdResult};
use crate::csv;
use crate::error::{Result, RosterError};
use crate::model::{PageRequest, SortSpec};
use crate::query;
use crate::records::RecordStore;
use crate::store::Persistence;
use chrono::Utc;
use std::fs;
use std::path::{Path, PathBuf};

/// Export the filtered collection (all pages, unsorted) to
/// `employees_<date>.csv` under `out_dir`. Exporting an empty set writes
/// nothing and reports a warning instead.
pub fn run<P: Persistence>(
    store: &RecordStore<P>,
    filter_term: &str,
    out_dir: &Path,
) -> Result<CmdResult> {
    let filtered = query::view(
        store.all(),
        filter_term,
        &SortSpec::unsorted(),
        &PageRequest::new(1, store.len().max(1)),
    );

    let mut result = CmdResult::default();
    if filtered.items.is_empty() {
        result.add_message(CmdMessage::warning("No employees to export"));
        return Ok(result);
    }

    let path = out_dir.join(export_filename(Utc::now().format("%Y-%m-%d")));
    fs::write(&path, csv::serialize(&filtered.items)).map_err(RosterError::Io)?;

    result.add_message(CmdMessage::success(format!(
        "Exported {} employee(s) to {}",
        filtered.items.len(),
        path.display()
    )));
    Ok(result.with_listed(filtered.items))
}

fn export_filename(date: impl std::fmt::Display) -> PathBuf {
    PathBuf::from(format!("employees_{}.csv", date))
}
