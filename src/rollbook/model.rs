use crate::grading::GradePolicy;
use std::fmt;
use std::str::FromStr;

/// Number of subject marks kept per student.
pub const SUBJECT_COUNT: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Grade {
    A,
    B,
    C,
    D,
    F,
}

impl Grade {
    pub fn as_char(self) -> char {
        match self {
            Grade::A => 'A',
            Grade::B => 'B',
            Grade::C => 'C',
            Grade::D => 'D',
            Grade::F => 'F',
        }
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub enum Attendance {
    #[default]
    NotMarked,
    Present,
    Absent,
}

impl Attendance {
    pub fn from_present(present: bool) -> Self {
        if present {
            Attendance::Present
        } else {
            Attendance::Absent
        }
    }

    /// Single-token spelling used by the primary store format.
    pub fn as_token(self) -> &'static str {
        match self {
            Attendance::NotMarked => "NotMarked",
            Attendance::Present => "Present",
            Attendance::Absent => "Absent",
        }
    }
}

impl fmt::Display for Attendance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Attendance::NotMarked => write!(f, "Not Marked"),
            Attendance::Present => write!(f, "Present"),
            Attendance::Absent => write!(f, "Absent"),
        }
    }
}

impl FromStr for Attendance {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Present" => Ok(Attendance::Present),
            "Absent" => Ok(Attendance::Absent),
            // Older files spell it as two words.
            "NotMarked" | "Not Marked" => Ok(Attendance::NotMarked),
            other => Err(format!("unknown attendance status '{}'", other)),
        }
    }
}

/// The five subject marks of a student.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Scores([f64; SUBJECT_COUNT]);

impl Scores {
    pub fn new(marks: [f64; SUBJECT_COUNT]) -> Self {
        Self(marks)
    }

    pub fn as_array(&self) -> &[f64; SUBJECT_COUNT] {
        &self.0
    }

    pub fn iter(&self) -> impl Iterator<Item = f64> + '_ {
        self.0.iter().copied()
    }

    pub fn average(&self) -> f64 {
        self.0.iter().sum::<f64>() / SUBJECT_COUNT as f64
    }
}

impl TryFrom<&[f64]> for Scores {
    type Error = String;

    fn try_from(marks: &[f64]) -> Result<Self, Self::Error> {
        let marks: [f64; SUBJECT_COUNT] = marks.try_into().map_err(|_| {
            format!(
                "expected {} subject marks, got {}",
                SUBJECT_COUNT,
                marks.len()
            )
        })?;
        Ok(Self(marks))
    }
}

/// The persisted part of a student: everything except derived fields.
#[derive(Debug, Clone, PartialEq)]
pub struct StudentRecord {
    pub roll: u32,
    pub name: String,
    pub class_name: String,
    pub age: u32,
    pub gender: String,
    pub scores: Scores,
    pub attendance: Attendance,
}

impl StudentRecord {
    pub fn new(
        roll: u32,
        name: impl Into<String>,
        class_name: impl Into<String>,
        age: u32,
        gender: impl Into<String>,
    ) -> Self {
        Self {
            roll,
            name: name.into(),
            class_name: class_name.into(),
            age,
            gender: gender.into(),
            scores: Scores::default(),
            attendance: Attendance::default(),
        }
    }

    pub fn with_scores(mut self, scores: Scores) -> Self {
        self.scores = scores;
        self
    }

    pub fn with_attendance(mut self, attendance: Attendance) -> Self {
        self.attendance = attendance;
        self
    }
}

/// A stored student. Average and grade always reflect the current scores:
/// scores can only change together with a regrade against a policy.
#[derive(Debug, Clone, PartialEq)]
pub struct Student {
    record: StudentRecord,
    average: f64,
    grade: Grade,
}

impl Student {
    pub fn graded(record: StudentRecord, policy: &GradePolicy) -> Self {
        let average = record.scores.average();
        Self {
            grade: policy.assign(average),
            average,
            record,
        }
    }

    pub fn record(&self) -> &StudentRecord {
        &self.record
    }

    pub fn roll(&self) -> u32 {
        self.record.roll
    }

    pub fn name(&self) -> &str {
        &self.record.name
    }

    pub fn class_name(&self) -> &str {
        &self.record.class_name
    }

    pub fn age(&self) -> u32 {
        self.record.age
    }

    pub fn gender(&self) -> &str {
        &self.record.gender
    }

    pub fn scores(&self) -> &Scores {
        &self.record.scores
    }

    pub fn attendance(&self) -> Attendance {
        self.record.attendance
    }

    /// Mean of the five marks, shown to users as the percentage.
    pub fn average(&self) -> f64 {
        self.average
    }

    pub fn grade(&self) -> Grade {
        self.grade
    }

    pub fn gpa(&self) -> f64 {
        self.average / 20.0
    }

    pub(crate) fn set_scores(&mut self, scores: Scores, policy: &GradePolicy) {
        self.record.scores = scores;
        self.regrade(policy);
    }

    pub(crate) fn regrade(&mut self, policy: &GradePolicy) {
        self.average = self.record.scores.average();
        self.grade = policy.assign(self.average);
    }

    pub(crate) fn set_attendance(&mut self, attendance: Attendance) {
        self.record.attendance = attendance;
    }

    /// Overwrites the profile fields present in `patch`. Scores are left to
    /// [`Roster`](crate::roster::Roster), which owns the policy.
    pub(crate) fn apply_profile(&mut self, patch: &StudentPatch) {
        if let Some(name) = &patch.name {
            self.record.name = name.clone();
        }
        if let Some(class_name) = &patch.class_name {
            self.record.class_name = class_name.clone();
        }
        if let Some(age) = patch.age {
            self.record.age = age;
        }
        if let Some(gender) = &patch.gender {
            self.record.gender = gender.clone();
        }
    }
}

/// Fields to overwrite on an existing student. `None` leaves a field as is.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StudentPatch {
    pub name: Option<String>,
    pub class_name: Option<String>,
    pub age: Option<u32>,
    pub gender: Option<String>,
    pub scores: Option<Scores>,
}

impl StudentPatch {
    /// A patch replacing every profile field, as the update action does.
    pub fn profile(
        name: impl Into<String>,
        class_name: impl Into<String>,
        age: u32,
        gender: impl Into<String>,
    ) -> Self {
        Self {
            name: Some(name.into()),
            class_name: Some(class_name.into()),
            age: Some(age),
            gender: Some(gender.into()),
            scores: None,
        }
    }

    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}
