//! Steps shared by every command: arity and id checks, the confirmation
//! gate and the value formatting used when filling tables.

use chrono::{DateTime, SecondsFormat, Utc};
use log::info;

use crate::api::Managers;
use crate::error::CliError;
use crate::ui::{Confirmation, EMPTY_VALUE, OutputFormat, Ui};

/// Everything a handler needs besides its own arguments.
pub struct Context<'a> {
    managers: Result<&'a Managers, String>,
    pub ui: &'a mut dyn Ui,
    pub output: OutputFormat,
}

impl<'a> Context<'a> {
    pub fn new(managers: &'a Managers, ui: &'a mut dyn Ui, output: OutputFormat) -> Self {
        Self {
            managers: Ok(managers),
            ui,
            output,
        }
    }

    /// A context whose managers could not be built, e.g. because credentials are missing.
    /// Commands still validate their input and only fail once they reach the API.
    pub fn without_managers(reason: impl Into<String>, ui: &'a mut dyn Ui, output: OutputFormat) -> Self {
        Self {
            managers: Err(reason.into()),
            ui,
            output,
        }
    }

    pub fn managers(&self) -> Result<&'a Managers, CliError> {
        match &self.managers {
            Ok(managers) => Ok(*managers),
            Err(reason) => Err(CliError::Config(reason.clone())),
        }
    }
}

/// Parse a user supplied identifier. Only strictly positive integers are accepted.
pub fn resolve_id(raw: &str, field: &str) -> Result<u64, CliError> {
    match raw.trim().parse::<u64>() {
        Ok(id) if id > 0 => Ok(id),
        _ => Err(CliError::invalid_id(field)),
    }
}

/// Exactly one positional identifier.
pub fn single_id(args: &[String], field: &str) -> Result<u64, CliError> {
    if args.len() != 1 {
        return Err(CliError::usage("This command requires one argument."));
    }
    resolve_id(&args[0], field)
}

/// `true` when the command may go ahead. A declined prompt prints `Aborted.`.
pub fn confirm_or_abort(ui: &mut dyn Ui, force: bool, prompt: &str) -> Result<bool, CliError> {
    if force {
        return Ok(true);
    }
    match ui.confirm(prompt)? {
        Confirmation::Confirmed => {
            info!("Confirmed: {}", prompt);
            Ok(true)
        }
        Confirmation::Declined => {
            info!("Declined: {}", prompt);
            ui.print("Aborted.");
            Ok(false)
        }
    }
}

/// Both flags of an exclusive pair were given.
pub fn check_exclusive(first_set: bool, second_set: bool, first: &str, second: &str) -> Result<(), CliError> {
    if first_set && second_set {
        return Err(CliError::exclusive_flags(first, second));
    }
    Ok(())
}

/// SoftLayer timestamps carry the account's offset; show them in UTC.
pub fn format_time(value: Option<&str>) -> String {
    match value {
        None | Some("") => EMPTY_VALUE.to_string(),
        Some(raw) => match DateTime::parse_from_rfc3339(raw) {
            Ok(time) => time.with_timezone(&Utc).to_rfc3339_opts(SecondsFormat::Secs, true),
            Err(_) => raw.to_string(),
        },
    }
}

pub fn format_money(value: f64) -> String {
    format!("{:.2}", value)
}
