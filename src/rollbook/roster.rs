//! # Record Store
//!
//! [`Roster`] owns the canonical, ordered list of students for a session and
//! the [`GradePolicy`] used to keep derived fields current. Every mutation
//! that touches scores regrades the affected student before returning, so a
//! caller can never observe a stale average or grade.
//!
//! Lookups are linear scans in store order. Roll numbers are not required to
//! be unique: when duplicates exist, every by-roll operation acts on the first
//! match.

use crate::error::{Result, RollbookError};
use crate::grading::GradePolicy;
use crate::model::{Attendance, Scores, Student, StudentPatch, StudentRecord};
use std::cmp::Ordering;

/// Keys the roster can be sorted by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    Name,
    Roll,
}

#[derive(Debug, Clone, Default)]
pub struct Roster {
    students: Vec<Student>,
    policy: GradePolicy,
}

impl Roster {
    pub fn new(policy: GradePolicy) -> Self {
        Self {
            students: Vec::new(),
            policy,
        }
    }

    /// Rebuilds a roster from persisted records, recomputing derived fields.
    pub fn from_records<I>(records: I, policy: GradePolicy) -> Self
    where
        I: IntoIterator<Item = StudentRecord>,
    {
        let students = records
            .into_iter()
            .map(|record| Student::graded(record, &policy))
            .collect();
        Self { students, policy }
    }

    pub fn policy(&self) -> &GradePolicy {
        &self.policy
    }

    /// Swaps the grading policy and regrades everyone under it.
    pub fn set_policy(&mut self, policy: GradePolicy) {
        self.policy = policy;
        for student in &mut self.students {
            student.regrade(&self.policy);
        }
    }

    pub fn all(&self) -> &[Student] {
        &self.students
    }

    pub fn len(&self) -> usize {
        self.students.len()
    }

    pub fn is_empty(&self) -> bool {
        self.students.is_empty()
    }

    pub fn contains_roll(&self, roll: u32) -> bool {
        self.position(roll).is_some()
    }

    pub fn add(&mut self, record: StudentRecord) -> &Student {
        self.students.push(Student::graded(record, &self.policy));
        let last = self.students.len() - 1;
        &self.students[last]
    }

    pub fn find_by_roll(&self, roll: u32) -> Option<&Student> {
        self.students.iter().find(|s| s.roll() == roll)
    }

    pub fn update(&mut self, roll: u32, patch: &StudentPatch) -> Result<&Student> {
        let policy = &self.policy;
        let student = find_mut(&mut self.students, roll)?;
        student.apply_profile(patch);
        if let Some(scores) = patch.scores {
            student.set_scores(scores, policy);
        }
        Ok(&*student)
    }

    pub fn update_scores(&mut self, roll: u32, scores: Scores) -> Result<&Student> {
        let policy = &self.policy;
        let student = find_mut(&mut self.students, roll)?;
        student.set_scores(scores, policy);
        Ok(&*student)
    }

    pub fn set_attendance(&mut self, roll: u32, present: bool) -> Result<&Student> {
        let student = find_mut(&mut self.students, roll)?;
        student.set_attendance(Attendance::from_present(present));
        Ok(&*student)
    }

    /// Marks attendance for the whole roster in store order, one flag per
    /// student. Stops at whichever runs out first; returns how many were marked.
    pub fn roll_call<I>(&mut self, marks: I) -> usize
    where
        I: IntoIterator<Item = bool>,
    {
        let mut marked = 0;
        for (student, present) in self.students.iter_mut().zip(marks) {
            student.set_attendance(Attendance::from_present(present));
            marked += 1;
        }
        marked
    }

    pub fn remove(&mut self, roll: u32) -> Result<Student> {
        let pos = self.position(roll).ok_or(RollbookError::NotFound(roll))?;
        Ok(self.students.remove(pos))
    }

    /// Stable sort: students with equal keys keep their relative order.
    pub fn sort_by(&mut self, key: SortKey) {
        self.students.sort_by(|a, b| compare(a, b, key));
    }

    /// Students in `class_name`, in store order. Re-scans on each call.
    pub fn filter_by_class<'a>(
        &'a self,
        class_name: &'a str,
    ) -> impl Iterator<Item = &'a Student> + 'a {
        self.students
            .iter()
            .filter(move |s| s.class_name() == class_name)
    }

    fn position(&self, roll: u32) -> Option<usize> {
        self.students.iter().position(|s| s.roll() == roll)
    }
}

fn find_mut(students: &mut [Student], roll: u32) -> Result<&mut Student> {
    students
        .iter_mut()
        .find(|s| s.roll() == roll)
        .ok_or(RollbookError::NotFound(roll))
}

fn compare(a: &Student, b: &Student, key: SortKey) -> Ordering {
    match key {
        SortKey::Name => a.name().cmp(b.name()),
        SortKey::Roll => a.roll().cmp(&b.roll()),
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;

    pub struct RosterFixture {
        pub roster: Roster,
    }

    impl Default for RosterFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl RosterFixture {
        pub fn new() -> Self {
            Self {
                roster: Roster::new(GradePolicy::standard()),
            }
        }

        pub fn with_students(mut self, count: u32, class_name: &str) -> Self {
            for i in 1..=count {
                let record =
                    StudentRecord::new(i, format!("Student{}", i), class_name, 14 + i % 3, "M");
                self.roster.add(record);
            }
            self
        }

        pub fn with_student(mut self, roll: u32, name: &str) -> Self {
            self.roster.add(StudentRecord::new(roll, name, "10A", 15, "F"));
            self
        }

        pub fn with_scored_student(mut self, roll: u32, name: &str, marks: [f64; 5]) -> Self {
            let record =
                StudentRecord::new(roll, name, "10A", 15, "F").with_scores(Scores::new(marks));
            self.roster.add(record);
            self
        }

        pub fn with_class_student(mut self, roll: u32, name: &str, class_name: &str) -> Self {
            self.roster
                .add(StudentRecord::new(roll, name, class_name, 15, "F"));
            self
        }

        pub fn build(self) -> Roster {
            self.roster
        }
    }
}
