use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::roster::Roster;
use tracing::debug;

pub fn run(roster: &mut Roster, roll: u32) -> Result<CmdResult> {
    let removed = roster.remove(roll)?;
    debug!(roll, remaining = roster.len(), "student removed");

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Student deleted: {} (roll {})",
        removed.name(),
        roll
    )));
    Ok(result.with_affected_students(vec![removed]))
}
