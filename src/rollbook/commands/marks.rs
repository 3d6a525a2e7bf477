use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::Scores;
use crate::roster::Roster;

pub fn run(roster: &mut Roster, roll: u32, scores: Scores) -> Result<CmdResult> {
    let student = roster.update_scores(roll, scores)?.clone();
    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Marks updated for {}: {:.2}% grade {}",
        student.name(),
        student.average(),
        student.grade()
    )));
    Ok(result.with_affected_students(vec![student]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RollbookError;
    use crate::model::Grade;
    use crate::roster::fixtures::RosterFixture;

    #[test]
    fn entering_marks_regrades() {
        let mut roster = RosterFixture::new().with_student(1, "Amy").build();
        let result = run(&mut roster, 1, Scores::new([80.0, 85.0, 90.0, 75.0, 70.0])).unwrap();

        let amy = &result.affected_students[0];
        assert_eq!(amy.average(), 80.0);
        assert_eq!(amy.grade(), Grade::B);
        assert_eq!(result.messages[0].content, "Marks updated for Amy: 80.00% grade B");
    }

    #[test]
    fn missing_roll_is_not_found() {
        let mut roster = Roster::default();
        assert!(matches!(
            run(&mut roster, 1, Scores::default()),
            Err(RollbookError::NotFound(1))
        ));
    }
}
