use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::StudentPatch;
use crate::roster::Roster;

pub fn run(roster: &mut Roster, roll: u32, patch: &StudentPatch) -> Result<CmdResult> {
    if patch.is_empty() {
        let mut result = CmdResult::default();
        result.add_message(CmdMessage::info("Nothing to update."));
        return Ok(result);
    }

    let student = roster.update(roll, patch)?.clone();
    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Student updated: {} (roll {})",
        student.name(),
        roll
    )));
    Ok(result.with_affected_students(vec![student]))
}
