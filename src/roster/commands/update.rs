use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::EmployeeFields;
use crate::records::RecordStore;
use crate::store::Persistence;

pub fn run<P: Persistence>(
    store: &mut RecordStore<P>,
    id: &str,
    fields: EmployeeFields,
) -> Result<CmdResult> {
    let employee = store.update(id, fields)?.clone();
    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Employee \"{}\" updated",
        employee.name
    )));
    Ok(result.with_affected(vec![employee]))
}
