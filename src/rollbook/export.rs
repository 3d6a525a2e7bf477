//! One-way CSV export of a roster.
//!
//! The export is meant for spreadsheets and is never read back; the primary
//! store format in [`crate::store::format`] is what round-trips.

use crate::error::{Result, RollbookError};
use crate::model::Student;
use std::borrow::Cow;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

pub const DEFAULT_EXPORT_FILE: &str = "students.csv";

pub const CSV_HEADER: &str = "Roll,Name,Class,Age,Gender,Percentage,Grade,Attendance";

/// Writes the CSV export for `students`, in the order given.
pub fn write_csv<W: Write>(mut writer: W, students: &[Student]) -> Result<()> {
    writeln!(writer, "{CSV_HEADER}")?;
    for s in students {
        writeln!(
            writer,
            "{},{},{},{},{},{:.2},{},{}",
            s.roll(),
            csv_field(s.name()),
            csv_field(s.class_name()),
            s.age(),
            csv_field(s.gender()),
            s.average(),
            s.grade(),
            s.attendance()
        )?;
    }
    writer.flush()?;
    Ok(())
}

/// Writes the CSV export to `path`, replacing any existing file.
pub fn export_csv(path: &Path, students: &[Student]) -> Result<()> {
    let file = File::create(path).map_err(RollbookError::Io)?;
    write_csv(BufWriter::new(file), students)
}

/// Quotes a value if it contains a comma, quote or line break.
fn csv_field(value: &str) -> Cow<'_, str> {
    if value.contains([',', '"', '\n', '\r']) {
        Cow::Owned(format!("\"{}\"", value.replace('"', "\"\"")))
    } else {
        Cow::Borrowed(value)
    }
}
