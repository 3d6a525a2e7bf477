use crate::commands::{CmdMessage, CmdResult};
use crate::config::RollbookConfig;
use crate::error::Result;
use std::path::Path;
use tracing::info;

#[derive(Debug, Clone)]
pub enum ConfigAction {
    ShowAll,
    ShowKey(String),
    Set(String, String),
}

/// Reads or edits `config.json`. Unknown keys and rejected values come back
/// as `RollbookError::Config` and leave the file untouched.
pub fn run(config_dir: &Path, action: ConfigAction) -> Result<CmdResult> {
    let mut config = RollbookConfig::load(config_dir)?;
    let mut result = CmdResult::default();

    match action {
        ConfigAction::ShowAll => {}
        ConfigAction::ShowKey(key) => {
            result.add_message(CmdMessage::info(config.value_of(&key)?));
            return Ok(result);
        }
        ConfigAction::Set(key, value) => {
            config.set(&key, &value)?;
            config.save(config_dir)?;
            info!(key = %key, "config updated");
            result.add_message(CmdMessage::success(format!(
                "{} set to {}",
                key,
                config.value_of(&key)?
            )));
        }
    }

    Ok(result.with_config(config))
}
