use super::{Loaded, RosterStore};
use crate::error::{Result, RollbookError};
use crate::model::{Student, StudentRecord};
use std::io;

/// In-memory storage for testing and development.
/// Does NOT persist data.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    records: Vec<StudentRecord>,
    fail_saves: bool,
    saves: usize,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_records(records: Vec<StudentRecord>) -> Self {
        Self {
            records,
            ..Self::default()
        }
    }

    /// A store whose saves fail with an I/O error, as a full disk would.
    pub fn failing() -> Self {
        Self {
            fail_saves: true,
            ..Self::default()
        }
    }

    pub fn records(&self) -> &[StudentRecord] {
        &self.records
    }

    pub fn save_count(&self) -> usize {
        self.saves
    }
}

impl RosterStore for InMemoryStore {
    fn load(&self) -> Result<Loaded> {
        Ok(Loaded {
            records: self.records.clone(),
            malformed: None,
        })
    }

    fn save(&mut self, students: &[Student]) -> Result<()> {
        if self.fail_saves {
            return Err(RollbookError::Io(io::Error::other("simulated write failure")));
        }
        self.records = students.iter().map(|s| s.record().clone()).collect();
        self.saves += 1;
        Ok(())
    }

    fn describe(&self) -> String {
        "memory".to_string()
    }
}
