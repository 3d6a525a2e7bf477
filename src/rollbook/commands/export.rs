use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::export::export_csv;
use crate::roster::Roster;
use std::path::Path;
use tracing::info;

pub fn run(roster: &Roster, path: &Path) -> Result<CmdResult> {
    export_csv(path, roster.all())?;
    info!(path = %path.display(), records = roster.len(), "exported csv");

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Exported {} students to {}",
        roster.len(),
        path.display()
    )));
    Ok(result.with_written_path(path.to_path_buf()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RollbookError;
    use crate::roster::fixtures::RosterFixture;
    use tempfile::TempDir;

    #[test]
    fn writes_csv_and_reports_path() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("out.csv");
        let roster = RosterFixture::new().with_students(2, "9C").build();

        let result = run(&roster, &path).unwrap();

        assert_eq!(result.written_path.as_deref(), Some(path.as_path()));
        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(content.lines().count(), 3);
    }

    #[test]
    fn unwritable_target_is_io_error() {
        let dir = TempDir::new().unwrap();
        let roster = Roster::default();
        assert!(matches!(
            run(&roster, dir.path()),
            Err(RollbookError::Io(_))
        ));
    }
}
