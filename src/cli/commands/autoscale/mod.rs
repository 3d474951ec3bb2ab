//! `slcli autoscale ...`

pub mod create;
pub mod delete;
pub mod detail;
pub mod edit;
pub mod list;
pub mod logs;
pub mod scale;
pub mod tag;

use anyhow::Result;
use clap::{Args, Subcommand};
use std::path::PathBuf;

use crate::cli::pipeline::Context;

/// Name used in id validation errors.
pub const GROUP_ID_FIELD: &str = "Autoscale Group ID";

#[derive(Args)]
pub struct AutoscaleCommands {
    #[command(subcommand)]
    pub command: AutoscaleSubcommands,
}

#[derive(Subcommand)]
pub enum AutoscaleSubcommands {
    /// List autoscale groups on the account
    List,
    /// Get details of an autoscale group
    Detail {
        /// Autoscale group ID
        #[arg(value_name = "IDENTIFIER")]
        args: Vec<String>,
    },
    /// Order/create a scale group
    Create(CreateArgs),
    /// Edit an autoscale group
    Edit(EditArgs),
    /// Scale an autoscale group, bypassing its cooldown period
    Scale(ScaleArgs),
    /// Delete an autoscale group and cancel its guests
    Delete {
        /// Autoscale group ID
        #[arg(value_name = "IDENTIFIER")]
        args: Vec<String>,
        /// Skip the confirmation prompt
        #[arg(short, long)]
        force: bool,
    },
    /// Show the action log of an autoscale group
    Logs {
        /// Autoscale group ID
        #[arg(value_name = "IDENTIFIER")]
        args: Vec<String>,
        /// Only show entries created after this date (YYYY-MM-DD)
        #[arg(short = 'd', long)]
        date_min: Option<String>,
    },
    /// Tag every guest of an autoscale group
    Tag {
        /// Autoscale group ID
        #[arg(value_name = "IDENTIFIER")]
        args: Vec<String>,
        /// Comma separated list of tags, replacing the current ones
        #[arg(short = 'g', long)]
        tags: Option<String>,
    },
}

#[derive(Args, Debug, Default)]
pub struct CreateArgs {
    /// Scale group's name
    #[arg(long)]
    pub name: Option<String>,
    /// Seconds this group waits after its last action before performing another
    #[arg(long)]
    pub cooldown: Option<u64>,
    /// Minimum number of guests
    #[arg(long)]
    pub min: Option<u64>,
    /// Maximum number of guests
    #[arg(long)]
    pub max: Option<u64>,
    /// ID of the regional group this scale group is assigned to
    #[arg(long)]
    pub regional: Option<u64>,
    /// Post-install script to download
    #[arg(long)]
    pub postinstall: Option<String>,
    /// OS install code. Tip: you can specify <OS>_LATEST
    #[arg(long)]
    pub os: Option<String>,
    /// Datacenter short or long name
    #[arg(long)]
    pub datacenter: Option<String>,
    /// Host portion of the FQDN
    #[arg(long)]
    pub hostname: Option<String>,
    /// Domain portion of the FQDN
    #[arg(long)]
    pub domain: Option<String>,
    /// Number of CPUs for new guests
    #[arg(long)]
    pub cpu: Option<u64>,
    /// RAM in MB for new guests
    #[arg(long)]
    pub memory: Option<u64>,
    /// The type of scale to perform (ABSOLUTE, PERCENT, RELATIVE)
    #[arg(long)]
    pub policy_relative: Option<String>,
    /// Termination policy (CLOSEST_TO_NEXT_CHARGE=1, NEWEST=2, OLDEST=3)
    #[arg(long)]
    pub termination_policy: Option<u64>,
    /// Name of the policy to attach
    #[arg(long)]
    pub policy_name: Option<String>,
    /// The number to scale by, meaning depends on the scale type
    #[arg(long, allow_negative_numbers = true)]
    pub policy_amount: Option<i64>,
    /// User defined metadata string
    #[arg(long)]
    pub userdata: Option<String>,
    /// Read user data from a file
    #[arg(long)]
    pub userfile: Option<PathBuf>,
    /// SSH key IDs to add to the root user (repeatable)
    #[arg(long = "key")]
    pub keys: Vec<u64>,
    /// Disk sizes in GB (repeatable)
    #[arg(long = "disk")]
    pub disks: Vec<u64>,
    /// Skip the confirmation prompt
    #[arg(short, long)]
    pub force: bool,
}

#[derive(Args, Debug, Default)]
pub struct EditArgs {
    /// Autoscale group ID
    #[arg(value_name = "IDENTIFIER")]
    pub args: Vec<String>,
    /// Scale group's name
    #[arg(long)]
    pub name: Option<String>,
    /// Minimum number of guests
    #[arg(long)]
    pub min: Option<u64>,
    /// Maximum number of guests
    #[arg(long)]
    pub max: Option<u64>,
    /// User defined metadata string
    #[arg(long)]
    pub userdata: Option<String>,
    /// Read user data from a file
    #[arg(long)]
    pub userfile: Option<PathBuf>,
    /// Number of CPUs for new guests
    #[arg(long)]
    pub cpu: Option<u64>,
    /// RAM in MB for new guests
    #[arg(long)]
    pub memory: Option<u64>,
}

#[derive(Args, Debug, Default)]
pub struct ScaleArgs {
    /// Autoscale group ID
    #[arg(value_name = "IDENTIFIER")]
    pub args: Vec<String>,
    /// Add guests (default)
    #[arg(long)]
    pub up: bool,
    /// Remove guests
    #[arg(long)]
    pub down: bool,
    /// Add or remove the given number of guests
    #[arg(long)]
    pub by: bool,
    /// Add or remove guests until the group has the given number
    #[arg(long)]
    pub to: bool,
    /// Number of guests for the scale action
    #[arg(long)]
    pub amount: Option<u64>,
}

pub async fn handle_autoscale_command(args: AutoscaleCommands, ctx: &mut Context<'_>) -> Result<()> {
    match args.command {
        AutoscaleSubcommands::List => list::list_command(ctx).await,
        AutoscaleSubcommands::Detail { args } => detail::detail_command(&args, ctx).await,
        AutoscaleSubcommands::Create(args) => create::create_command(args, ctx).await,
        AutoscaleSubcommands::Edit(args) => edit::edit_command(args, ctx).await,
        AutoscaleSubcommands::Scale(args) => scale::scale_command(args, ctx).await,
        AutoscaleSubcommands::Delete { args, force } => delete::delete_command(&args, force, ctx).await,
        AutoscaleSubcommands::Logs { args, date_min } => logs::logs_command(&args, date_min, ctx).await,
        AutoscaleSubcommands::Tag { args, tags } => tag::tag_command(&args, tags, ctx).await,
    }
}
