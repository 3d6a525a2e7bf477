use super::{format, Loaded, RosterStore};
use crate::error::{Result, RollbookError};
use crate::model::Student;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{debug, info};
use uuid::Uuid;

pub const DEFAULT_DATA_FILE: &str = "students.txt";

/// Roster storage backed by one text file in the primary store format.
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn parent_dir(&self) -> PathBuf {
        match self.path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
            _ => PathBuf::from("."),
        }
    }

    fn ensure_dir(&self, path: &Path) -> Result<()> {
        if !path.exists() {
            fs::create_dir_all(path).map_err(RollbookError::Io)?;
        }
        Ok(())
    }
}

impl Default for FileStore {
    fn default() -> Self {
        Self::new(DEFAULT_DATA_FILE)
    }
}

impl RosterStore for FileStore {
    fn load(&self) -> Result<Loaded> {
        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "no roster file yet, starting empty");
                return Ok(Loaded::default());
            }
            Err(e) => return Err(RollbookError::Io(e)),
        };
        let loaded = format::decode_bytes(&bytes);
        debug!(
            path = %self.path.display(),
            records = loaded.records.len(),
            "loaded roster"
        );
        Ok(loaded)
    }

    fn save(&mut self, students: &[Student]) -> Result<()> {
        let dir = self.parent_dir();
        self.ensure_dir(&dir)?;

        let content = format::encode(students);

        // Atomic write: a failed save never truncates the previous file.
        let tmp_file = dir.join(format!(".students-{}.tmp", Uuid::new_v4()));
        if let Err(e) = fs::write(&tmp_file, content) {
            let _ = fs::remove_file(&tmp_file);
            return Err(RollbookError::Io(e));
        }
        if let Err(e) = fs::rename(&tmp_file, &self.path) {
            let _ = fs::remove_file(&tmp_file);
            return Err(RollbookError::Io(e));
        }

        info!(path = %self.path.display(), records = students.len(), "saved roster");
        Ok(())
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}
