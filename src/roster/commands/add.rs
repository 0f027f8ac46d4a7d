use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::EmployeeFields;
use crate::records::RecordStore;
use crate::store::Persistence;

pub fn run<P: Persistence>(store: &mut RecordStore<P>, fields: EmployeeFields) -> Result<CmdResult> {
    let employee = store.insert(fields)?.clone();
    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Employee \"{}\" added",
        employee.name
    )));
    Ok(result.with_affected(vec![employee]))
}
