use crate::commands::{CmdMessage, CmdResult, GpaRow};
use crate::error::Result;
use crate::roster::Roster;

pub fn run(roster: &Roster) -> Result<CmdResult> {
    let rows = roster
        .all()
        .iter()
        .map(|s| GpaRow {
            roll: s.roll(),
            name: s.name().to_string(),
            gpa: s.gpa(),
        })
        .collect();

    let mut result = CmdResult::default().with_gpa_rows(rows);
    if roster.is_empty() {
        result.add_message(CmdMessage::info("No students on record."));
    }
    Ok(result)
}
