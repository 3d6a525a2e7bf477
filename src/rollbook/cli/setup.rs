use clap::{ArgAction, Parser, Subcommand};
use rollbook::grading::GradingScheme;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "rollbook", bin_name = "rollbook", version)]
#[command(about = "Console student record manager", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Roster file to load at login and save on exit
    #[arg(long, value_name = "PATH", global = true, help_heading = "Options")]
    pub data_file: Option<PathBuf>,

    /// Where "Export to CSV" writes
    #[arg(long, value_name = "PATH", global = true, help_heading = "Options")]
    pub export_file: Option<PathBuf>,

    /// Grade band table: standard or strict
    #[arg(long, value_name = "SCHEME", global = true, help_heading = "Options")]
    pub grading: Option<GradingScheme>,

    /// Directory holding config.json (defaults to $ROLLBOOK_CONFIG_DIR, then the platform config dir)
    #[arg(long, value_name = "DIR", global = true, help_heading = "Options")]
    pub config_dir: Option<PathBuf>,

    /// Log more to stderr (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true, help_heading = "Options")]
    pub verbose: u8,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show or change configuration
    Config {
        /// Config key: data-file, export-file, grading, username, password
        key: Option<String>,
        /// Value to set
        value: Option<String>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn no_args_is_interactive() {
        let cli = Cli::try_parse_from(["rollbook"]).unwrap();
        assert!(cli.command.is_none());
        assert_eq!(cli.verbose, 0);
        assert!(cli.grading.is_none());
    }

    #[test]
    fn parses_options() {
        let cli = Cli::try_parse_from([
            "rollbook",
            "--data-file",
            "/tmp/s.txt",
            "--grading",
            "strict",
            "-vv",
        ])
        .unwrap();
        assert_eq!(cli.data_file, Some(PathBuf::from("/tmp/s.txt")));
        assert_eq!(cli.grading, Some(GradingScheme::Strict));
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn rejects_unknown_grading() {
        assert!(Cli::try_parse_from(["rollbook", "--grading", "curve"]).is_err());
    }

    #[test]
    fn config_subcommand_takes_key_and_value() {
        let cli = Cli::try_parse_from(["rollbook", "config", "grading", "strict"]).unwrap();
        match cli.command {
            Some(Commands::Config { key, value }) => {
                assert_eq!(key.as_deref(), Some("grading"));
                assert_eq!(value.as_deref(), Some("strict"));
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }
}
