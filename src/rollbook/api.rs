//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer. It is the single
//! entry point for every roster operation, whatever UI sits on top.
//!
//! ## Role and Responsibilities
//!
//! The API facade:
//! - **Owns** the session's [`Roster`] and its storage backend
//! - **Dispatches** to the appropriate command function
//! - **Returns structured types** (`Result<CmdResult>`)
//!
//! ## What the API Does NOT Do
//!
//! - **Business logic**: That belongs in `commands/*.rs`
//! - **Terminal I/O**: No stdout, stderr, or prompting
//! - **Presentation concerns**: Returns data structures, not strings
//!
//! ## Loading
//!
//! [`RollbookApi::open`] never fails. A missing store is an empty roster; a
//! store that cannot be read, or that stops at a malformed line, yields
//! whatever was read plus a warning in [`RollbookApi::load_messages`].
//!
//! ## Generic Over RosterStore
//!
//! - Production: `RollbookApi<FileStore>`
//! - Testing: `RollbookApi<InMemoryStore>`

use crate::commands::{self, CmdMessage, CmdResult};
use crate::error::Result;
use crate::grading::GradePolicy;
use crate::model::{Scores, Student, StudentPatch, StudentRecord};
use crate::roster::{Roster, SortKey};
use crate::store::RosterStore;
use std::path::Path;
use tracing::{info, warn};

pub struct RollbookApi<S: RosterStore> {
    store: S,
    roster: Roster,
    load_messages: Vec<CmdMessage>,
}

impl<S: RosterStore> RollbookApi<S> {
    /// Loads the roster from `store`, grading every record under `policy`.
    pub fn open(store: S, policy: GradePolicy) -> Self {
        let mut load_messages = Vec::new();
        let records = match store.load() {
            Ok(loaded) => {
                if let Some(err) = loaded.malformed {
                    load_messages.push(CmdMessage::warning(format!(
                        "{}; kept the {} students read before it",
                        err,
                        loaded.records.len()
                    )));
                }
                loaded.records
            }
            Err(e) => {
                warn!(store = %store.describe(), error = %e, "could not load roster");
                load_messages.push(CmdMessage::warning(format!(
                    "Could not load {}: {}. Starting with an empty roster.",
                    store.describe(),
                    e
                )));
                Vec::new()
            }
        };

        let roster = Roster::from_records(records, policy);
        info!(store = %store.describe(), students = roster.len(), "roster opened");
        Self {
            store,
            roster,
            load_messages,
        }
    }

    pub fn load_messages(&self) -> &[CmdMessage] {
        &self.load_messages
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn students(&self) -> &[Student] {
        self.roster.all()
    }

    pub fn add_student(&mut self, record: StudentRecord) -> Result<CmdResult> {
        commands::add::run(&mut self.roster, record)
    }

    pub fn view_students(&self) -> Result<CmdResult> {
        commands::view::run(&self.roster)
    }

    pub fn search_student(&self, roll: u32) -> Result<CmdResult> {
        commands::search::run(&self.roster, roll)
    }

    pub fn update_student(&mut self, roll: u32, patch: &StudentPatch) -> Result<CmdResult> {
        commands::update::run(&mut self.roster, roll, patch)
    }

    pub fn delete_student(&mut self, roll: u32) -> Result<CmdResult> {
        commands::delete::run(&mut self.roster, roll)
    }

    pub fn mark_attendance(&mut self, roll: u32, present: bool) -> Result<CmdResult> {
        commands::attendance::mark(&mut self.roster, roll, present)
    }

    pub fn roll_call<I>(&mut self, marks: I) -> Result<CmdResult>
    where
        I: IntoIterator<Item = bool>,
    {
        commands::attendance::roll_call(&mut self.roster, marks)
    }

    pub fn enter_marks(&mut self, roll: u32, scores: Scores) -> Result<CmdResult> {
        commands::marks::run(&mut self.roster, roll, scores)
    }

    pub fn gpa_listing(&self) -> Result<CmdResult> {
        commands::gpa::run(&self.roster)
    }

    pub fn class_report(&self, class_name: &str) -> Result<CmdResult> {
        commands::report::run(&self.roster, class_name)
    }

    pub fn export_csv(&self, path: &Path) -> Result<CmdResult> {
        commands::export::run(&self.roster, path)
    }

    pub fn sort_students(&mut self, key: SortKey) -> Result<CmdResult> {
        commands::sort::run(&mut self.roster, key)
    }

    pub fn save(&mut self) -> Result<CmdResult> {
        commands::save::run(&self.roster, &mut self.store)
    }
}
