use crate::config::RollbookConfig;
use crate::model::Student;
use chrono::{DateTime, Local};
use std::path::PathBuf;

pub mod add;
pub mod attendance;
pub mod config;
pub mod delete;
pub mod export;
pub mod gpa;
pub mod marks;
pub mod report;
pub mod save;
pub mod search;
pub mod sort;
pub mod update;
pub mod view;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

/// One line of the GPA listing.
#[derive(Debug, Clone, PartialEq)]
pub struct GpaRow {
    pub roll: u32,
    pub name: String,
    pub gpa: f64,
}

/// Students of one class, in store order, as of `generated_at`.
#[derive(Debug, Clone)]
pub struct ClassReport {
    pub class_name: String,
    pub generated_at: DateTime<Local>,
    pub students: Vec<Student>,
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub affected_students: Vec<Student>,
    pub listed_students: Vec<Student>,
    pub gpa_rows: Vec<GpaRow>,
    pub report: Option<ClassReport>,
    pub written_path: Option<PathBuf>,
    pub config: Option<RollbookConfig>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_affected_students(mut self, students: Vec<Student>) -> Self {
        self.affected_students = students;
        self
    }

    pub fn with_listed_students(mut self, students: Vec<Student>) -> Self {
        self.listed_students = students;
        self
    }

    pub fn with_gpa_rows(mut self, rows: Vec<GpaRow>) -> Self {
        self.gpa_rows = rows;
        self
    }

    pub fn with_report(mut self, report: ClassReport) -> Self {
        self.report = Some(report);
        self
    }

    pub fn with_written_path(mut self, path: PathBuf) -> Self {
        self.written_path = Some(path);
        self
    }

    pub fn with_config(mut self, config: RollbookConfig) -> Self {
        self.config = Some(config);
        self
    }

    pub fn has_warnings(&self) -> bool {
        self.messages
            .iter()
            .any(|m| m.level == MessageLevel::Warning)
    }
}
