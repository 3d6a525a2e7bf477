use crate::commands::CmdResult;
use crate::error::{Result, RollbookError};
use crate::roster::Roster;

pub fn run(roster: &Roster, roll: u32) -> Result<CmdResult> {
    let student = roster
        .find_by_roll(roll)
        .ok_or(RollbookError::NotFound(roll))?;
    Ok(CmdResult::default().with_listed_students(vec![student.clone()]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::roster::fixtures::RosterFixture;

    #[test]
    fn finds_first_match() {
        let roster = RosterFixture::new()
            .with_student(3, "Amy")
            .with_student(3, "Bea")
            .build();
        let result = run(&roster, 3).unwrap();
        assert_eq!(result.listed_students.len(), 1);
        assert_eq!(result.listed_students[0].name(), "Amy");
    }

    #[test]
    fn missing_roll_is_not_found() {
        let roster = RosterFixture::new().with_student(3, "Amy").build();
        assert!(matches!(run(&roster, 8), Err(RollbookError::NotFound(8))));
    }
}
