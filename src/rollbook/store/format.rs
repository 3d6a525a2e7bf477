//! Primary store format.
//!
//! One student per line, fields separated by single spaces, in this order:
//!
//! ```text
//! name roll class age gender s1 s2 s3 s4 s5 attendance
//! Amy 1 10A 15 F 90 85.5 70 88 92 Present
//! ```
//!
//! Fields cannot contain whitespace. Attendance is written as one token;
//! the older two-word `Not Marked` is still read.

use super::Loaded;
use crate::error::{Result, RollbookError};
use crate::model::{Attendance, Scores, Student, StudentRecord, SUBJECT_COUNT};
use std::borrow::Cow;
use std::fmt::Write;
use tracing::warn;

const PROFILE_FIELDS: usize = 5;
const MIN_FIELDS: usize = PROFILE_FIELDS + SUBJECT_COUNT + 1;

pub fn encode_record(record: &StudentRecord) -> String {
    let mut line = format!(
        "{} {} {} {} {}",
        record.name, record.roll, record.class_name, record.age, record.gender
    );
    for mark in record.scores.iter() {
        // Writing to a String cannot fail.
        let _ = write!(line, " {}", mark);
    }
    let _ = write!(line, " {}", record.attendance.as_token());
    line
}

pub fn encode(students: &[Student]) -> String {
    let mut out = String::new();
    for student in students {
        out.push_str(&encode_record(student.record()));
        out.push('\n');
    }
    out
}

/// Parses one line. `line_no` is 1-based and only used for error reporting.
pub fn decode_record(line: &str, line_no: usize) -> Result<StudentRecord> {
    let malformed = |reason: String| RollbookError::Malformed {
        line: line_no,
        reason,
    };

    let fields: Vec<&str> = line.split_whitespace().collect();
    if fields.len() < MIN_FIELDS {
        return Err(malformed(format!(
            "expected {} fields, found {}",
            MIN_FIELDS,
            fields.len()
        )));
    }

    let roll = fields[1]
        .parse::<u32>()
        .map_err(|_| malformed(format!("invalid roll number '{}'", fields[1])))?;
    let age = fields[3]
        .parse::<u32>()
        .map_err(|_| malformed(format!("invalid age '{}'", fields[3])))?;

    let marks = fields[PROFILE_FIELDS..PROFILE_FIELDS + SUBJECT_COUNT]
        .iter()
        .map(|raw| {
            raw.parse::<f64>()
                .map_err(|_| malformed(format!("invalid mark '{}'", raw)))
        })
        .collect::<Result<Vec<f64>>>()?;
    let scores = Scores::try_from(marks.as_slice()).map_err(malformed)?;

    let attendance = fields[PROFILE_FIELDS + SUBJECT_COUNT..]
        .join(" ")
        .parse::<Attendance>()
        .map_err(malformed)?;

    Ok(StudentRecord::new(roll, fields[0], fields[2], age, fields[4])
        .with_scores(scores)
        .with_attendance(attendance))
}

/// Parses a whole file. Blank lines are skipped; the first malformed line
/// stops the parse and is reported in [`Loaded::malformed`].
pub fn decode(text: &str) -> Loaded {
    let mut loaded = Loaded::default();
    for (idx, line) in text.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        match decode_record(line, idx + 1) {
            Ok(record) => loaded.records.push(record),
            Err(e) => {
                warn!(error = %e, kept = loaded.records.len(), "stopped reading roster");
                loaded.malformed = Some(e);
                break;
            }
        }
    }
    loaded
}

/// Parses raw file bytes. A line that is not valid UTF-8 is read as
/// Latin-1, so one legacy byte never costs the rest of the file.
pub fn decode_bytes(bytes: &[u8]) -> Loaded {
    match std::str::from_utf8(bytes) {
        Ok(text) => decode(text),
        Err(_) => {
            let text: String = bytes
                .split_inclusive(|&b| b == b'\n')
                .enumerate()
                .map(|(idx, line)| line_text(line, idx + 1))
                .collect();
            decode(&text)
        }
    }
}

fn line_text(line: &[u8], line_no: usize) -> Cow<'_, str> {
    match std::str::from_utf8(line) {
        Ok(text) => Cow::Borrowed(text),
        Err(_) => {
            warn!(line = line_no, "line is not valid UTF-8, reading it as Latin-1");
            Cow::Owned(line.iter().map(|&b| char::from(b)).collect())
        }
    }
}
