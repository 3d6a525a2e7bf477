use crate::commands::{ClassReport, CmdMessage, CmdResult};
use crate::error::Result;
use crate::roster::Roster;
use chrono::Local;

pub fn run(roster: &Roster, class_name: &str) -> Result<CmdResult> {
    let students: Vec<_> = roster.filter_by_class(class_name).cloned().collect();

    let mut result = CmdResult::default();
    if students.is_empty() {
        result.add_message(CmdMessage::info(format!(
            "No students found in class {}",
            class_name
        )));
    }
    Ok(result.with_report(ClassReport {
        class_name: class_name.to_string(),
        generated_at: Local::now(),
        students,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::roster::fixtures::RosterFixture;

    #[test]
    fn report_filters_by_class_in_store_order() {
        let roster = RosterFixture::new()
            .with_class_student(1, "Amy", "10A")
            .with_class_student(2, "Bob", "10B")
            .with_class_student(3, "Cal", "10A")
            .build();

        let result = run(&roster, "10A").unwrap();
        let report = result.report.unwrap();
        let rolls: Vec<_> = report.students.iter().map(|s| s.roll()).collect();
        assert_eq!(report.class_name, "10A");
        assert_eq!(rolls, vec![1, 3]);
        assert!(result.messages.is_empty());
    }

    #[test]
    fn unknown_class_reports_empty() {
        let roster = RosterFixture::new().with_student(1, "Amy").build();
        let result = run(&roster, "12Z").unwrap();
        assert!(result.report.unwrap().students.is_empty());
        assert_eq!(result.messages[0].content, "No students found in class 12Z");
    }

    #[test]
    fn class_match_is_exact() {
        let roster = RosterFixture::new().with_class_student(1, "Amy", "10a").build();
        let result = run(&roster, "10A").unwrap();
        assert!(result.report.unwrap().students.is_empty());
    }
}
