use super::print::{
    print_config, print_gpa, print_menu, print_messages, print_report, print_student_detail,
    print_students,
};
use super::prompt::Prompter;
use super::setup::{Cli, Commands};
use clap::Parser;
use directories::ProjectDirs;
use rollbook::api::RollbookApi;
use rollbook::auth::{authenticate, Credentials};
use rollbook::commands::config::ConfigAction;
use rollbook::commands::{CmdMessage, CmdResult};
use rollbook::config::RollbookConfig;
use rollbook::error::{Result, RollbookError};
use rollbook::model::{StudentPatch, StudentRecord};
use rollbook::roster::SortKey;
use rollbook::store::fs::FileStore;
use rollbook::store::RosterStore;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};
use tracing_subscriber::{fmt, EnvFilter};

const CONFIG_DIR_ENV: &str = "ROLLBOOK_CONFIG_DIR";

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config_dir = resolve_config_dir(cli.config_dir.clone())?;
    debug!(config_dir = %config_dir.display(), "resolved config dir");

    match cli.command {
        Some(Commands::Config { key, value }) => handle_config(&config_dir, key, value),
        None => {
            let config = RollbookConfig::load(&config_dir)?;
            let data_file = cli.data_file.unwrap_or(config.data_file);
            let export_file = cli.export_file.unwrap_or(config.export_file);
            let grading = cli.grading.unwrap_or(config.grading);

            let stdin = io::stdin();
            let stdout = io::stdout();
            let mut prompter = Prompter::new(stdin.lock(), stdout.lock());
            login(&mut prompter, &config.credentials)?;

            info!(data_file = %data_file.display(), %grading, "starting session");
            let api = RollbookApi::open(FileStore::new(data_file), grading.policy());
            Session::new(api, prompter, export_file).run()?;
            Ok(())
        }
    }
}

fn init_tracing(verbose: u8) {
    let filter = match verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_level(true)
        .with_writer(io::stderr)
        .init();
}

fn resolve_config_dir(flag: Option<PathBuf>) -> Result<PathBuf> {
    if let Some(dir) = flag {
        return Ok(dir);
    }
    if let Some(dir) = std::env::var_os(CONFIG_DIR_ENV) {
        return Ok(PathBuf::from(dir));
    }
    ProjectDirs::from("", "", "rollbook")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .ok_or_else(|| RollbookError::Config("could not determine a config directory".into()))
}

fn handle_config(config_dir: &Path, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(key), None) => ConfigAction::ShowKey(key),
        (Some(key), Some(value)) => ConfigAction::Set(key, value),
    };

    let result = rollbook::commands::config::run(config_dir, action)?;
    let mut out = io::stdout().lock();
    if let Some(config) = &result.config {
        print_config(&mut out, config)?;
    }
    print_messages(&mut out, &result.messages)?;
    Ok(())
}

fn login<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
    credentials: &Credentials,
) -> Result<()> {
    let username = prompter.ask_line("Enter username")?;
    let password = prompter.ask_line("Enter password")?;
    authenticate(credentials, &username, &password)
}

enum Flow {
    Continue,
    Exit,
}

/// How a session ended.
#[derive(Debug, PartialEq, Eq)]
enum Outcome {
    Saved,
    InputClosed,
}

/// One logged-in run of the menu loop.
struct Session<S: RosterStore, R, W> {
    api: RollbookApi<S>,
    prompter: Prompter<R, W>,
    export_file: PathBuf,
}

impl<S: RosterStore, R: BufRead, W: Write> Session<S, R, W> {
    fn new(api: RollbookApi<S>, prompter: Prompter<R, W>, export_file: PathBuf) -> Self {
        Self {
            api,
            prompter,
            export_file,
        }
    }

    fn run(&mut self) -> Result<Outcome> {
        let load_messages = self.api.load_messages().to_vec();
        print_messages(self.prompter.out(), &load_messages)?;

        loop {
            print_menu(self.prompter.out())?;
            let step = self
                .prompter
                .ask_line("Choice")
                .and_then(|choice| self.dispatch(&choice));

            match step {
                Ok(Flow::Continue) => {}
                Ok(Flow::Exit) => return Ok(Outcome::Saved),
                Err(RollbookError::Input(_)) => {
                    self.abandon()?;
                    return Ok(Outcome::InputClosed);
                }
                Err(e) if e.is_recoverable() => {
                    print_messages(self.prompter.out(), &[CmdMessage::error(e.to_string())])?;
                }
                Err(e) => return Err(e),
            }
        }
    }

    /// Input closed mid-session: leave without saving.
    fn abandon(&mut self) -> Result<()> {
        warn!(
            students = self.api.students().len(),
            "input closed, leaving without saving"
        );
        writeln!(self.prompter.out())?;
        print_messages(
            self.prompter.out(),
            &[CmdMessage::warning("Input closed. Changes were not saved.")],
        )?;
        Ok(())
    }

    fn dispatch(&mut self, choice: &str) -> Result<Flow> {
        let result = match choice.parse::<u32>() {
            Ok(1) => self.add()?,
            Ok(2) => self.view()?,
            Ok(3) => self.search()?,
            Ok(4) => self.update()?,
            Ok(5) => {
                let roll = self.ask_roll()?;
                self.api.delete_student(roll)?
            }
            Ok(6) => self.mark_attendance()?,
            Ok(7) => self.enter_marks()?,
            Ok(8) => {
                let result = self.api.gpa_listing()?;
                print_gpa(self.prompter.out(), &result.gpa_rows)?;
                result
            }
            Ok(9) => self.class_report()?,
            Ok(10) => self.api.export_csv(&self.export_file)?,
            Ok(11) => self.sort()?,
            Ok(12) => {
                let result = self.api.save()?;
                print_messages(self.prompter.out(), &result.messages)?;
                writeln!(self.prompter.out(), "Exiting...")?;
                return Ok(Flow::Exit);
            }
            _ => {
                debug!(choice, "invalid menu choice");
                writeln!(self.prompter.out(), "Invalid choice.")?;
                return Ok(Flow::Continue);
            }
        };

        print_messages(self.prompter.out(), &result.messages)?;
        Ok(Flow::Continue)
    }

    fn ask_roll(&mut self) -> Result<u32> {
        self.prompter.ask_number("Enter roll number")
    }

    /// Fails with `NotFound` before any further prompting.
    fn ask_existing_roll(&mut self) -> Result<u32> {
        let roll = self.ask_roll()?;
        if !self.api.roster().contains_roll(roll) {
            return Err(RollbookError::NotFound(roll));
        }
        Ok(roll)
    }

    fn add(&mut self) -> Result<CmdResult> {
        let roll = self.ask_roll()?;
        let name = self.prompter.ask_word("Enter name")?;
        let class_name = self.prompter.ask_word("Enter class")?;
        let age = self.prompter.ask_number("Enter age")?;
        let gender = self.prompter.ask_word("Enter gender")?;
        self.api
            .add_student(StudentRecord::new(roll, name, class_name, age, gender))
    }

    fn view(&mut self) -> Result<CmdResult> {
        let result = self.api.view_students()?;
        print_students(self.prompter.out(), &result.listed_students)?;
        Ok(result)
    }

    fn search(&mut self) -> Result<CmdResult> {
        let roll = self.ask_roll()?;
        let result = self.api.search_student(roll)?;
        for student in &result.listed_students {
            print_student_detail(self.prompter.out(), student)?;
        }
        Ok(result)
    }

    fn update(&mut self) -> Result<CmdResult> {
        let roll = self.ask_existing_roll()?;
        let name = self.prompter.ask_word("Enter new name")?;
        let class_name = self.prompter.ask_word("Enter new class")?;
        let age = self.prompter.ask_number("Enter new age")?;
        let gender = self.prompter.ask_word("Enter new gender")?;
        self.api
            .update_student(roll, &StudentPatch::profile(name, class_name, age, gender))
    }

    fn mark_attendance(&mut self) -> Result<CmdResult> {
        if self.api.students().is_empty() {
            let mut result = CmdResult::default();
            result.add_message(CmdMessage::info("No students on record."));
            return Ok(result);
        }

        let labels: Vec<String> = self
            .api
            .students()
            .iter()
            .map(|s| format!("Mark attendance for {} ({}) (P/A)", s.name(), s.roll()))
            .collect();
        let mut marks = Vec::with_capacity(labels.len());
        for label in &labels {
            marks.push(self.prompter.ask_present(label)?);
        }
        self.api.roll_call(marks)
    }

    fn enter_marks(&mut self) -> Result<CmdResult> {
        let roll = self.ask_existing_roll()?;
        let scores = self.prompter.ask_scores()?;
        self.api.enter_marks(roll, scores)
    }

    fn class_report(&mut self) -> Result<CmdResult> {
        let class_name = self.prompter.ask_word("Enter class")?;
        let result = self.api.class_report(&class_name)?;
        if let Some(report) = &result.report {
            print_report(self.prompter.out(), report)?;
        }
        Ok(result)
    }

    fn sort(&mut self) -> Result<CmdResult> {
        writeln!(self.prompter.out(), "Sort by: 1. Name  2. Roll number")?;
        let key = match self.prompter.ask_number::<u32>("Choice")? {
            1 => SortKey::Name,
            2 => SortKey::Roll,
            _ => {
                writeln!(self.prompter.out(), "Invalid choice.")?;
                return Ok(CmdResult::default());
            }
        };
        let result = self.api.sort_students(key)?;
        print_students(self.prompter.out(), &result.listed_students)?;
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rollbook::grading::GradePolicy;
    use rollbook::model::{Attendance, Grade, Scores};
    use rollbook::store::memory::InMemoryStore;
    use std::io::Cursor;

    type TestSession = Session<InMemoryStore, Cursor<Vec<u8>>, Vec<u8>>;

    fn session(store: InMemoryStore, input: &str) -> TestSession {
        colored::control::set_override(false);
        let api = RollbookApi::open(store, GradePolicy::standard());
        let prompter = Prompter::new(Cursor::new(input.as_bytes().to_vec()), Vec::new());
        Session::new(api, prompter, PathBuf::from("unused.csv"))
    }

    fn output(s: &mut TestSession) -> String {
        String::from_utf8(s.prompter.out().clone()).unwrap()
    }

    fn record(roll: u32, name: &str) -> rollbook::model::StudentRecord {
        StudentRecord::new(roll, name, "10A", 15, "F")
    }

    #[test]
    fn login_accepts_default_credentials() {
        let mut p = Prompter::new(Cursor::new(b"admin\n1234\n".to_vec()), Vec::new());
        assert!(login(&mut p, &Credentials::default()).is_ok());
    }

    #[test]
    fn login_rejects_wrong_password() {
        let mut p = Prompter::new(Cursor::new(b"admin\nwrong\n".to_vec()), Vec::new());
        assert!(matches!(
            login(&mut p, &Credentials::default()),
            Err(RollbookError::AuthFailed)
        ));
    }

    #[test]
    fn add_enter_marks_and_save() {
        let mut s = session(
            InMemoryStore::new(),
            "1\n7\nAmy\n10A\n15\nF\n7\n7\n80\n85\n90\n75\n70\n12\n",
        );
        assert_eq!(s.run().unwrap(), Outcome::Saved);
        let out = output(&mut s);
        assert!(out.contains("Student added: Amy (roll 7)"));
        assert!(out.contains("Exiting..."));
        let saved = &s.api.store().records()[0];
        assert_eq!(saved.name, "Amy");
        assert_eq!(saved.scores, Scores::new([80.0, 85.0, 90.0, 75.0, 70.0]));
    }

    #[test]
    fn invalid_choice_reprompts() {
        let mut s = session(InMemoryStore::new(), "13\nabc\n12\n");
        assert_eq!(s.run().unwrap(), Outcome::Saved);
        let out = output(&mut s);
        assert_eq!(out.matches("Invalid choice.").count(), 2);
    }

    #[test]
    fn unknown_roll_reports_and_continues() {
        let mut s = session(
            InMemoryStore::with_records(vec![record(1, "Amy")]),
            "5\n9\n7\n9\n12\n",
        );
        s.run().unwrap();
        let out = output(&mut s);
        assert_eq!(out.matches("Student not found: roll number 9").count(), 2);
        assert!(!out.contains("Subject 1 marks"));
    }

    #[test]
    fn update_replaces_profile() {
        let mut s = session(
            InMemoryStore::with_records(vec![record(1, "Amy")]),
            "1\nAmelia\n11B\n16\nF\n",
        );
        s.dispatch("4").unwrap();
        let amy = s.api.roster().find_by_roll(1).unwrap();
        assert_eq!(amy.name(), "Amelia");
        assert_eq!(amy.class_name(), "11B");
        assert_eq!(amy.age(), 16);
    }

    #[test]
    fn attendance_walks_every_student() {
        let mut s = session(
            InMemoryStore::with_records(vec![record(1, "Amy"), record(2, "Bob")]),
            "P\na\n",
        );
        s.dispatch("6").unwrap();
        let marks: Vec<_> = s.api.students().iter().map(|s| s.attendance()).collect();
        assert_eq!(marks, vec![Attendance::Present, Attendance::Absent]);
    }

    #[test]
    fn sort_by_roll_and_report() {
        let mut s = session(
            InMemoryStore::with_records(vec![record(3, "Cal"), record(1, "Amy")]),
            "2\n10A\n",
        );
        s.dispatch("11").unwrap();
        let rolls: Vec<_> = s.api.students().iter().map(|s| s.roll()).collect();
        assert_eq!(rolls, vec![1, 3]);

        s.dispatch("9").unwrap();
        let out = output(&mut s);
        assert!(out.contains("Class 10A report"));
    }

    #[test]
    fn gpa_listing_prints_each_student() {
        let scored = record(1, "Amy").with_scores(Scores::new([90.0; 5]));
        let mut s = session(InMemoryStore::with_records(vec![scored]), "");
        s.dispatch("8").unwrap();
        let out = output(&mut s);
        assert!(out.contains("GPA: 4.50"));
        assert_eq!(s.api.students()[0].grade(), Grade::A);
    }

    #[test]
    fn closed_input_ends_without_saving() {
        let mut s = session(InMemoryStore::new(), "1\n4\nAmy\n");
        assert_eq!(s.run().unwrap(), Outcome::InputClosed);
        assert_eq!(s.api.students().len(), 0);
        assert_eq!(s.api.store().save_count(), 0);
        assert!(output(&mut s).contains("Changes were not saved."));
    }

    #[test]
    fn failed_save_stays_in_menu() {
        let mut s = session(InMemoryStore::failing(), "1\n4\nAmy\n10A\n15\nF\n12\n");
        assert_eq!(s.run().unwrap(), Outcome::InputClosed);
        let out = output(&mut s);
        assert!(out.contains("IO error"));
        assert!(!out.contains("Exiting..."));
        assert_eq!(s.api.students().len(), 1);
    }
}
