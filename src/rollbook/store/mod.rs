//! # Storage Layer
//!
//! The [`RosterStore`] trait abstracts where a roster is loaded from and saved
//! to, so the API and commands never touch the filesystem directly.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: Production storage in a single text file
//!   (`students.txt` by default), one student per line.
//! - [`memory::InMemoryStore`]: In-memory storage for testing.
//!
//! ## Storage Format
//!
//! See [`format`]. Only the persisted part of each student is written; average
//! and grade are recomputed on load by whoever builds the
//! [`Roster`](crate::roster::Roster), never read back from disk.
//!
//! Saves are wholesale: the whole roster replaces the previous contents.

use crate::error::{Result, RollbookError};
use crate::model::{Student, StudentRecord};

pub mod format;
pub mod fs;
pub mod memory;

/// Records read by a load, plus the error that stopped reading early, if any.
///
/// A malformed line ends the load, but the records before it are kept.
#[derive(Debug, Default)]
pub struct Loaded {
    pub records: Vec<StudentRecord>,
    pub malformed: Option<RollbookError>,
}

/// Abstract interface for roster storage.
pub trait RosterStore {
    /// Read every stored record. A store that does not exist yet is empty.
    fn load(&self) -> Result<Loaded>;

    /// Replace the stored contents with `students`, in order.
    fn save(&mut self, students: &[Student]) -> Result<()>;

    /// Human readable location, used in messages.
    fn describe(&self) -> String;
}
