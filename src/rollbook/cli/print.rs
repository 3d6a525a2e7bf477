use colored::Colorize;
use rollbook::commands::{ClassReport, CmdMessage, GpaRow, MessageLevel};
use rollbook::config::{RollbookConfig, CONFIG_KEYS};
use rollbook::model::Student;
use std::io::{self, Write};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const NAME_WIDTH: usize = 18;
const CLASS_WIDTH: usize = 8;
const GENDER_WIDTH: usize = 8;

pub(super) fn print_messages<W: Write>(out: &mut W, messages: &[CmdMessage]) -> io::Result<()> {
    for message in messages {
        match message.level {
            MessageLevel::Info => writeln!(out, "{}", message.content.dimmed())?,
            MessageLevel::Success => writeln!(out, "{}", message.content.green())?,
            MessageLevel::Warning => writeln!(out, "{}", message.content.yellow())?,
            MessageLevel::Error => writeln!(out, "{}", message.content.red())?,
        }
    }
    Ok(())
}

pub(super) fn print_menu<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "{}", "--- Student Management System ---".bold())?;
    for (n, label) in MENU_LABELS.iter().enumerate() {
        writeln!(out, "{:>2}. {}", n + 1, label)?;
    }
    Ok(())
}

const MENU_LABELS: [&str; 12] = [
    "Add Student",
    "View All Students",
    "Search Student",
    "Update Student",
    "Delete Student",
    "Mark Attendance",
    "Enter Marks",
    "Calculate GPA",
    "Class Report",
    "Export to CSV",
    "Sort Students",
    "Save & Exit",
];

pub(super) fn print_students<W: Write>(out: &mut W, students: &[Student]) -> io::Result<()> {
    if students.is_empty() {
        return Ok(());
    }

    writeln!(
        out,
        "{}",
        format!(
            "{:>6}  {}  {}  {:>3}  {}  {:>7}  {:>5}  {}",
            "Roll",
            pad_to_width("Name", NAME_WIDTH),
            pad_to_width("Class", CLASS_WIDTH),
            "Age",
            pad_to_width("Gender", GENDER_WIDTH),
            "Percent",
            "Grade",
            "Attendance"
        )
        .bold()
    )?;

    for s in students {
        writeln!(
            out,
            "{:>6}  {}  {}  {:>3}  {}  {:>7.2}  {:>5}  {}",
            s.roll(),
            pad_to_width(s.name(), NAME_WIDTH),
            pad_to_width(s.class_name(), CLASS_WIDTH),
            s.age(),
            pad_to_width(s.gender(), GENDER_WIDTH),
            s.average(),
            s.grade().as_char(),
            s.attendance()
        )?;
    }
    Ok(())
}

pub(super) fn print_student_detail<W: Write>(out: &mut W, s: &Student) -> io::Result<()> {
    writeln!(out, "{} {}", s.roll().to_string().yellow(), s.name().bold())?;
    writeln!(
        out,
        "Class: {}, Age: {}, Gender: {}",
        s.class_name(),
        s.age(),
        s.gender()
    )?;
    let marks: Vec<String> = s.scores().iter().map(|m| m.to_string()).collect();
    writeln!(out, "Marks: {}", marks.join(" "))?;
    writeln!(
        out,
        "Percentage: {:.2}, Grade: {}, Attendance: {}",
        s.average(),
        s.grade(),
        s.attendance()
    )?;
    Ok(())
}

pub(super) fn print_gpa<W: Write>(out: &mut W, rows: &[GpaRow]) -> io::Result<()> {
    for row in rows {
        writeln!(
            out,
            "{:>6}  {}  GPA: {:.2}",
            row.roll,
            pad_to_width(&row.name, NAME_WIDTH),
            row.gpa
        )?;
    }
    Ok(())
}

pub(super) fn print_report<W: Write>(out: &mut W, report: &ClassReport) -> io::Result<()> {
    writeln!(
        out,
        "{}",
        format!(
            "Class {} report ({})",
            report.class_name,
            report.generated_at.format("%Y-%m-%d %H:%M")
        )
        .bold()
    )?;
    for s in &report.students {
        writeln!(
            out,
            "{:>6}  {}  {:>5}  {:>7.2}%",
            s.roll(),
            pad_to_width(s.name(), NAME_WIDTH),
            s.grade().as_char(),
            s.average()
        )?;
    }
    Ok(())
}

pub(super) fn print_config<W: Write>(out: &mut W, config: &RollbookConfig) -> io::Result<()> {
    for key in CONFIG_KEYS {
        if let Some(value) = config.get(key) {
            writeln!(out, "{} = {}", key, value)?;
        }
    }
    Ok(())
}

/// Truncates with an ellipsis or pads with spaces to exactly `width` columns.
fn pad_to_width(s: &str, width: usize) -> String {
    let mut result = String::new();
    let mut current_width = 0;

    if s.width() > width {
        for c in s.chars() {
            let char_width = c.width().unwrap_or(0);
            if current_width + char_width > width.saturating_sub(1) {
                break;
            }
            result.push(c);
            current_width += char_width;
        }
        result.push('…');
        current_width += 1;
    } else {
        result.push_str(s);
        current_width = s.width();
    }

    result.push_str(&" ".repeat(width.saturating_sub(current_width)));
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use rollbook::grading::GradePolicy;
    use rollbook::model::{Scores, StudentRecord};

    fn render<F>(f: F) -> String
    where
        F: FnOnce(&mut Vec<u8>) -> io::Result<()>,
    {
        colored::control::set_override(false);
        let mut buf = Vec::new();
        f(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    fn amy() -> Student {
        let record = StudentRecord::new(7, "Amy", "10A", 15, "F")
            .with_scores(Scores::new([90.0, 85.0, 80.0, 75.0, 70.0]));
        Student::graded(record, &GradePolicy::standard())
    }

    #[test]
    fn pad_to_width_pads_and_truncates() {
        assert_eq!(pad_to_width("Amy", 5), "Amy  ");
        assert_eq!(pad_to_width("Bartholomew", 6), "Barth…");
        assert_eq!(pad_to_width("Bartholomew", 6).width(), 6);
        assert_eq!(pad_to_width("李小龍", 4), "李… ");
    }

    #[test]
    fn student_table_has_header_and_rows() {
        let out = render(|buf| print_students(buf, &[amy()]));
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].contains("Attendance"));
        assert!(lines[1].contains("80.00"));
        assert!(lines[1].ends_with("Not Marked"));
    }

    #[test]
    fn empty_table_prints_nothing() {
        assert_eq!(render(|buf| print_students(buf, &[])), "");
    }

    #[test]
    fn menu_lists_twelve_actions() {
        let out = render(print_menu);
        assert!(out.contains(" 1. Add Student"));
        assert!(out.contains("12. Save & Exit"));
    }

    #[test]
    fn detail_shows_marks() {
        let out = render(|buf| print_student_detail(buf, &amy()));
        assert!(out.contains("Marks: 90 85 80 75 70"));
        assert!(out.contains("Grade: B"));
    }
}
