use anyhow::Result;
use clap::{Parser, Subcommand};
use log::info;

use super::commands::autoscale::{AutoscaleCommands, handle_autoscale_command};
use super::commands::hardware::{HardwareCommands, handle_hardware_command};
use super::pipeline::Context;
use crate::api::Managers;
use crate::error::CliError;
use crate::ui::{OutputFormat, Ui};

#[derive(Parser)]
#[command(name = "slcli", version)]
#[command(about = "Manage SoftLayer classic infrastructure autoscale groups and hardware servers")]
pub struct Cli {
    /// Output format. Only JSON is supported; tables are the default
    #[arg(long, global = true, value_name = "FORMAT")]
    pub output: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Classic infrastructure autoscale groups
    Autoscale(AutoscaleCommands),
    /// Classic infrastructure hardware servers
    Hardware(HardwareCommands),
}

impl Cli {
    pub fn output_format(&self) -> Result<OutputFormat, CliError> {
        OutputFormat::parse(self.output.as_deref())
    }
}

/// Route a parsed command to its handler.
pub async fn dispatch(command: Commands, ctx: &mut Context<'_>) -> Result<()> {
    match command {
        Commands::Autoscale(args) => {
            info!("Dispatching autoscale command");
            handle_autoscale_command(args, ctx).await
        }
        Commands::Hardware(args) => {
            info!("Dispatching hardware command");
            handle_hardware_command(args, ctx).await
        }
    }
}

/// Validate the global flags, then run the command against `managers`.
pub async fn execute(cli: Cli, managers: &Managers, ui: &mut dyn Ui) -> Result<()> {
    let output = cli.output_format()?;
    let mut ctx = Context::new(managers, ui, output);
    dispatch(cli.command, &mut ctx).await
}
