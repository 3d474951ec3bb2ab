pub mod prompts;
pub mod table;

pub use table::{EMPTY_VALUE, Table, or_empty, str_or_empty};

use colored::Colorize;

use crate::error::CliError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

impl OutputFormat {
    /// Validate the global `--output` value. Only `JSON` (any case) is accepted.
    pub fn parse(value: Option<&str>) -> Result<Self, CliError> {
        match value {
            None => Ok(OutputFormat::Table),
            Some(v) if v.eq_ignore_ascii_case("json") => Ok(OutputFormat::Json),
            Some(_) => Err(CliError::invalid_output_format()),
        }
    }
}

/// Answer to a yes/no prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Confirmation {
    Confirmed,
    Declined,
}

impl Confirmation {
    /// `y`/`yes` confirm, `n`/`no` (or an empty line) decline, anything else is an error.
    pub fn from_input(input: &str) -> Result<Self, CliError> {
        match input.trim().to_ascii_lowercase().as_str() {
            "y" | "yes" => Ok(Confirmation::Confirmed),
            "n" | "no" | "" => Ok(Confirmation::Declined),
            _ => Err(CliError::InvalidConfirmation(
                "input must be 'y', 'n', 'yes' or 'no'".to_string(),
            )),
        }
    }
}

/// Terminal capabilities commands are allowed to use.
pub trait Ui {
    /// A line of regular output.
    fn print(&mut self, text: &str);

    /// The success marker printed before a result message.
    fn ok(&mut self);

    /// A non-fatal failure notice (stderr).
    fn failed(&mut self, text: &str);

    /// Ask a yes/no question and block for the answer.
    fn confirm(&mut self, prompt: &str) -> Result<Confirmation, CliError>;

    fn print_table(&mut self, table: &Table, format: OutputFormat) {
        let rendered = table.render(format);
        self.print(rendered.trim_end_matches('\n'));
    }
}

/// The real terminal: stdout for output, stderr for failures, stdin for answers.
#[derive(Debug, Default)]
pub struct TerminalUi;

impl TerminalUi {
    pub fn new() -> Self {
        Self
    }
}

impl Ui for TerminalUi {
    fn print(&mut self, text: &str) {
        println!("{}", text);
    }

    fn ok(&mut self) {
        println!("{}", "OK".green().bold());
    }

    fn failed(&mut self, text: &str) {
        eprintln!("{}", text.red());
    }

    fn confirm(&mut self, prompt: &str) -> Result<Confirmation, CliError> {
        let answer = prompts::read_answer(prompt)
            .map_err(|e| CliError::InvalidConfirmation(format!("Failed to read confirmation: {}", e)))?;
        Confirmation::from_input(&answer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_format() {
        assert_eq!(OutputFormat::parse(None).unwrap(), OutputFormat::Table);
        assert_eq!(OutputFormat::parse(Some("JSON")).unwrap(), OutputFormat::Json);
        assert_eq!(OutputFormat::parse(Some("json")).unwrap(), OutputFormat::Json);
        let err = OutputFormat::parse(Some("xml")).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Incorrect Usage: Invalid output format, only JSON is supported now."
        );
    }

    #[test]
    fn test_confirmation_tokens() {
        for yes in ["y", "Y", "yes", "YES", " Yes "] {
            assert_eq!(Confirmation::from_input(yes).unwrap(), Confirmation::Confirmed);
        }
        for no in ["n", "No", "NO", ""] {
            assert_eq!(Confirmation::from_input(no).unwrap(), Confirmation::Declined);
        }
        let err = Confirmation::from_input("maybe").unwrap_err();
        assert_eq!(err.to_string(), "input must be 'y', 'n', 'yes' or 'no'");
    }
}
