use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::StudentRecord;
use crate::roster::Roster;
use tracing::debug;

pub fn run(roster: &mut Roster, record: StudentRecord) -> Result<CmdResult> {
    let duplicate = roster.contains_roll(record.roll);
    let student = roster.add(record).clone();
    debug!(roll = student.roll(), duplicate, "student added");

    let mut result = CmdResult::default();
    if duplicate {
        result.add_message(CmdMessage::warning(format!(
            "Roll number {} is already in use; lookups will find the earlier student",
            student.roll()
        )));
    }
    result.add_message(CmdMessage::success(format!(
        "Student added: {} (roll {})",
        student.name(),
        student.roll()
    )));
    Ok(result.with_affected_students(vec![student]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::MessageLevel;
    use crate::model::{Attendance, Grade};
    use crate::roster::fixtures::RosterFixture;

    #[test]
    fn adds_with_defaults() {
        let mut roster = Roster::default();
        let result = run(&mut roster, StudentRecord::new(1, "Amy", "10A", 15, "F")).unwrap();

        assert_eq!(roster.len(), 1);
        let added = &result.affected_students[0];
        assert_eq!(added.grade(), Grade::F);
        assert_eq!(added.attendance(), Attendance::NotMarked);
        assert_eq!(result.messages.len(), 1);
        assert_eq!(result.messages[0].level, MessageLevel::Success);
    }

    #[test]
    fn duplicate_roll_is_added_with_warning() {
        let mut roster = RosterFixture::new().with_student(4, "Amy").build();
        let result = run(&mut roster, StudentRecord::new(4, "Bob", "10B", 16, "M")).unwrap();

        assert_eq!(roster.len(), 2);
        assert!(result.has_warnings());
        assert_eq!(roster.find_by_roll(4).unwrap().name(), "Amy");
    }
}
