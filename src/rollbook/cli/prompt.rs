//! Line-oriented prompting over any reader/writer pair, so whole sessions can
//! be driven from a byte buffer in tests.

use rollbook::error::{Result, RollbookError};
use rollbook::model::{Scores, SUBJECT_COUNT};
use std::io::{BufRead, Write};
use std::str::FromStr;

pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn out(&mut self) -> &mut W {
        &mut self.output
    }

    /// Reads one line with the trailing newline removed.
    /// A closed input is an `Input` error.
    fn read_line(&mut self) -> Result<String> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(RollbookError::Input("input closed".into()));
        }
        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }

    fn ask_raw(&mut self, label: &str) -> Result<String> {
        write!(self.output, "{}: ", label)?;
        self.output.flush()?;
        self.read_line()
    }

    /// Any line, surrounding whitespace trimmed. May be empty.
    pub fn ask_line(&mut self, label: &str) -> Result<String> {
        Ok(self.ask_raw(label)?.trim().to_string())
    }

    /// A single non-empty word. Stored fields are whitespace-delimited, so
    /// anything with inner whitespace is refused and asked again.
    pub fn ask_word(&mut self, label: &str) -> Result<String> {
        loop {
            let value = self.ask_line(label)?;
            if value.is_empty() {
                writeln!(self.output, "A value is required.")?;
            } else if value.contains(char::is_whitespace) {
                writeln!(self.output, "Please enter a single word without spaces.")?;
            } else {
                return Ok(value);
            }
        }
    }

    pub fn ask_number<T: FromStr>(&mut self, label: &str) -> Result<T> {
        loop {
            match self.ask_line(label)?.parse::<T>() {
                Ok(value) => return Ok(value),
                Err(_) => writeln!(self.output, "Please enter a valid number.")?,
            }
        }
    }

    /// One mark per subject, each a finite number.
    pub fn ask_scores(&mut self) -> Result<Scores> {
        let mut marks = [0.0; SUBJECT_COUNT];
        for (i, mark) in marks.iter_mut().enumerate() {
            let label = format!("Subject {} marks", i + 1);
            *mark = loop {
                let value: f64 = self.ask_number(&label)?;
                if value.is_finite() {
                    break value;
                }
                writeln!(self.output, "Please enter a valid number.")?;
            };
        }
        Ok(Scores::new(marks))
    }

    /// `P` for present, `A` for absent, either case.
    pub fn ask_present(&mut self, label: &str) -> Result<bool> {
        loop {
            match self.ask_line(label)?.to_ascii_uppercase().as_str() {
                "P" => return Ok(true),
                "A" => return Ok(false),
                _ => writeln!(self.output, "Please enter P or A.")?,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn prompter(input: &str) -> Prompter<Cursor<Vec<u8>>, Vec<u8>> {
        Prompter::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    fn written(p: &mut Prompter<Cursor<Vec<u8>>, Vec<u8>>) -> String {
        String::from_utf8(p.out().clone()).unwrap()
    }

    #[test]
    fn number_reasks_until_parsable() {
        let mut p = prompter("abc\n\n42\n");
        let n: u32 = p.ask_number("Roll").unwrap();
        assert_eq!(n, 42);
        assert_eq!(written(&mut p).matches("Please enter a valid number.").count(), 2);
    }

    #[test]
    fn negative_roll_is_not_a_u32() {
        let mut p = prompter("-3\n3\n");
        let n: u32 = p.ask_number("Roll").unwrap();
        assert_eq!(n, 3);
    }

    #[test]
    fn word_rejects_blank_and_spaces() {
        let mut p = prompter("\nMary Ann\n  Mary  \n");
        assert_eq!(p.ask_word("Name").unwrap(), "Mary");
        let out = written(&mut p);
        assert!(out.contains("A value is required."));
        assert!(out.contains("single word"));
    }

    #[test]
    fn closed_input_is_input_error() {
        let mut p = prompter("");
        assert!(matches!(p.ask_line("Name"), Err(RollbookError::Input(_))));

        let mut p = prompter("x\n");
        assert!(matches!(
            p.ask_number::<u32>("Age"),
            Err(RollbookError::Input(_))
        ));
    }

    #[test]
    fn scores_reject_non_finite() {
        let mut p = prompter("90\nNaN\n80\n70\ninf\n60\n50\n");
        let scores = p.ask_scores().unwrap();
        assert_eq!(scores.as_array(), &[90.0, 80.0, 70.0, 60.0, 50.0]);
    }

    #[test]
    fn present_accepts_either_case() {
        let mut p = prompter("x\np\nA\n");
        assert!(p.ask_present("Amy").unwrap());
        assert!(!p.ask_present("Bob").unwrap());
        assert!(written(&mut p).contains("Please enter P or A."));
    }

    #[test]
    fn crlf_line_endings_are_trimmed() {
        let mut p = prompter("admin\r\n");
        assert_eq!(p.ask_line("Username").unwrap(), "admin");
    }
}
