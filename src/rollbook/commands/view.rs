use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::roster::Roster;

pub fn run(roster: &Roster) -> Result<CmdResult> {
    let mut result = CmdResult::default().with_listed_students(roster.all().to_vec());
    if roster.is_empty() {
        result.add_message(CmdMessage::info("No students on record."));
    }
    Ok(result)
}
