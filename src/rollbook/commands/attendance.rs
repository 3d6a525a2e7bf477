use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::roster::Roster;

/// Marks a single student present or absent.
pub fn mark(roster: &mut Roster, roll: u32, present: bool) -> Result<CmdResult> {
    let student = roster.set_attendance(roll, present)?.clone();
    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "{} marked {}",
        student.name(),
        student.attendance()
    )));
    Ok(result.with_affected_students(vec![student]))
}

/// Marks the whole roster in store order, one flag per student.
pub fn roll_call<I>(roster: &mut Roster, marks: I) -> Result<CmdResult>
where
    I: IntoIterator<Item = bool>,
{
    let marked = roster.roll_call(marks);
    let mut result = CmdResult::default();
    if marked < roster.len() {
        result.add_message(CmdMessage::warning(format!(
            "Only {} of {} students were marked",
            marked,
            roster.len()
        )));
    }
    result.add_message(CmdMessage::success("Attendance marked."));
    Ok(result.with_affected_students(roster.all()[..marked].to_vec()))
}
