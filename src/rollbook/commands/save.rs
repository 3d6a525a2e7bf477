use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::roster::Roster;
use crate::store::RosterStore;

pub fn run<S: RosterStore>(roster: &Roster, store: &mut S) -> Result<CmdResult> {
    store.save(roster.all())?;
    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Saved {} students to {}",
        roster.len(),
        store.describe()
    )));
    Ok(result)
}
