use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::roster::{Roster, SortKey};

pub fn run(roster: &mut Roster, key: SortKey) -> Result<CmdResult> {
    roster.sort_by(key);
    let label = match key {
        SortKey::Name => "name",
        SortKey::Roll => "roll number",
    };
    let mut result = CmdResult::default().with_listed_students(roster.all().to_vec());
    result.add_message(CmdMessage::success(format!("Sorted by {}.", label)));
    Ok(result)
}
