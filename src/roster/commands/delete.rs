use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::records::RecordStore;
use crate::selection::SelectionSet;
use crate::store::Persistence;

/// Delete one record. Unconditional once called; any confirmation prompt is
/// the caller's concern. The selection is pruned so it never holds a stale
/// id.
pub fn run<P: Persistence>(
    store: &mut RecordStore<P>,
    selection: &mut SelectionSet,
    id: &str,
) -> Result<CmdResult> {
    let removed = store.delete(id)?;
    selection.prune(store.all().iter().map(|e| e.id.as_str()));

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Employee \"{}\" deleted",
        removed.name
    )));
    Ok(result.with_affected(vec![removed]))
}

/// Delete every record in `ids` in one persisted write. Unknown ids are
/// ignored; the count reported is what was actually removed.
pub fn run_bulk<P: Persistence>(
    store: &mut RecordStore<P>,
    selection: &mut SelectionSet,
    ids: &[String],
) -> Result<CmdResult> {
    let removed = store.bulk_delete(ids)?;
    selection.prune(store.all().iter().map(|e| e.id.as_str()));

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Deleted {} employee(s)",
        removed
    )));
    Ok(result)
}
