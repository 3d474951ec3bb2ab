//! `slcli hardware ...`

pub mod billing;
pub mod cancel;
pub mod columns;
pub mod create;
pub mod credentials;
pub mod detail;
pub mod edit;
pub mod guests;
pub mod list;
pub mod notifications;
pub mod power;
pub mod reload;
pub mod toggle_ipmi;
pub mod vlan_add;

use anyhow::Result;
use clap::{Args, Subcommand};
use std::path::PathBuf;

use crate::cli::pipeline::Context;
use power::PowerAction;

pub const HARDWARE_ID_FIELD: &str = "Hardware server ID";

#[derive(Args)]
pub struct HardwareCommands {
    #[command(subcommand)]
    pub command: HardwareSubcommands,
}

#[derive(Subcommand)]
pub enum HardwareSubcommands {
    /// List hardware servers
    List(ListArgs),
    /// Get details for a hardware server
    Detail {
        /// Hardware server ID
        #[arg(value_name = "IDENTIFIER")]
        args: Vec<String>,
        /// Show passwords (check over your shoulder!)
        #[arg(short, long)]
        passwords: bool,
        /// Show associated prices
        #[arg(short = 'c', long)]
        price: bool,
        /// Show associated hardware components
        #[arg(long)]
        components: bool,
    },
    /// Order/create a hardware server
    Create(CreateArgs),
    /// Edit hardware server details
    Edit(EditArgs),
    /// Cancel a hardware server
    Cancel {
        /// Hardware server ID
        #[arg(value_name = "IDENTIFIER")]
        args: Vec<String>,
        /// Cancel immediately instead of at the end of the billing period
        #[arg(short, long)]
        immediate: bool,
        /// Reason code for the cancellation, see cancel-reasons
        #[arg(short, long)]
        reason: Option<String>,
        /// Comment for the cancellation
        #[arg(short, long)]
        comment: Option<String>,
        /// Skip the confirmation prompt
        #[arg(short, long)]
        force: bool,
    },
    /// Display a list of cancellation reasons
    CancelReasons,
    /// Power on a server
    PowerOn(PowerArgs),
    /// Power off an active server
    PowerOff(PowerArgs),
    /// Power cycle a server
    PowerCycle(PowerArgs),
    /// Reboot an active server
    Reboot {
        #[command(flatten)]
        power: PowerArgs,
        /// Perform a hard reboot
        #[arg(long)]
        hard: bool,
        /// Perform a soft reboot
        #[arg(long)]
        soft: bool,
    },
    /// Reboot a server into a rescue image
    Rescue(PowerArgs),
    /// Reload the operating system on a hardware server
    Reload(ReloadArgs),
    /// Power off a hardware server and update its device firmware
    UpdateFirmware(PowerArgs),
    /// Toggle the IPMI interface on and off
    ToggleIpmi {
        /// Hardware server ID
        #[arg(value_name = "IDENTIFIER")]
        args: Vec<String>,
        /// Enable the IPMI interface
        #[arg(long)]
        enable: bool,
        /// Disable the IPMI interface
        #[arg(long)]
        disable: bool,
    },
    /// List the users notified about a hardware server
    Notifications {
        /// Hardware server ID
        #[arg(value_name = "IDENTIFIER")]
        args: Vec<String>,
    },
    /// Notify users about a hardware server
    NotificationsAdd {
        /// Hardware server ID
        #[arg(value_name = "IDENTIFIER")]
        args: Vec<String>,
        /// User IDs to notify (repeatable)
        #[arg(short, long = "users")]
        users: Vec<u64>,
    },
    /// List the virtual guests running on a hardware server
    Guests {
        /// Hardware server ID
        #[arg(value_name = "IDENTIFIER")]
        args: Vec<String>,
    },
    /// Get billing details for a hardware server
    Billing {
        /// Hardware server ID
        #[arg(value_name = "IDENTIFIER")]
        args: Vec<String>,
    },
    /// List hardware server credentials
    Credentials {
        /// Hardware server ID
        #[arg(value_name = "IDENTIFIER")]
        args: Vec<String>,
    },
    /// Create a password for a software component
    CreateCredential(CreateCredentialArgs),
    /// Trunk VLANs to the network components of a hardware server
    VlanAdd {
        /// Hardware server ID followed by one or more VLAN IDs
        #[arg(value_name = "IDENTIFIER VLANS")]
        args: Vec<String>,
    },
}

#[derive(Args, Debug, Default)]
pub struct ListArgs {
    /// Filter by tag (repeatable)
    #[arg(short = 'g', long = "tag")]
    pub tags: Vec<String>,
    /// Filter by number of CPU cores
    #[arg(short, long)]
    pub cpu: Option<u64>,
    /// Filter by memory in gigabytes
    #[arg(short, long)]
    pub memory: Option<u64>,
    /// Filter by hostname
    #[arg(short = 'H', long)]
    pub hostname: Option<String>,
    /// Filter by domain
    #[arg(short = 'D', long)]
    pub domain: Option<String>,
    /// Filter by datacenter
    #[arg(short, long)]
    pub datacenter: Option<String>,
    /// Filter by network port speed in Mbps
    #[arg(short = 'n', long)]
    pub network: Option<u64>,
    /// Filter by public IP address
    #[arg(short = 'p', long)]
    pub public_ip: Option<String>,
    /// Filter by private IP address
    #[arg(short = 'v', long)]
    pub private_ip: Option<String>,
    /// Filter by the username of the user who ordered the server
    #[arg(long)]
    pub owner: Option<String>,
    /// Filter by ID of the order which purchased the server
    #[arg(short = 'o', long)]
    pub order: Option<u64>,
    /// Column to sort by
    #[arg(long, default_value = "hostname")]
    pub sortby: String,
    /// Column to display (repeatable)
    #[arg(long = "column", alias = "columns")]
    pub columns: Vec<String>,
}

#[derive(Args, Debug, Default)]
pub struct CreateArgs {
    /// Hardware size
    #[arg(short, long)]
    pub size: Option<String>,
    /// Host portion of the FQDN
    #[arg(short = 'H', long)]
    pub hostname: Option<String>,
    /// Domain portion of the FQDN
    #[arg(short = 'D', long)]
    pub domain: Option<String>,
    /// OS install code
    #[arg(short, long)]
    pub os: Option<String>,
    /// Datacenter short name
    #[arg(short, long)]
    pub datacenter: Option<String>,
    /// Port speed
    #[arg(short, long)]
    pub port_speed: Option<u64>,
    /// Billing rate, either hourly or monthly (default hourly)
    #[arg(short, long)]
    pub billing: Option<String>,
    /// Post-install script to download
    #[arg(short = 'i', long)]
    pub post_install: Option<String>,
    /// SSH key IDs to add to the root user (repeatable)
    #[arg(short = 'k', long = "key")]
    pub keys: Vec<u64>,
    /// Private network only
    #[arg(short, long)]
    pub no_public: bool,
    /// Extra option key names (repeatable)
    #[arg(short = 'e', long = "extra")]
    pub extras: Vec<String>,
    /// Verify the order and show its cost without placing it
    #[arg(short, long)]
    pub test: bool,
    /// Template file that replaces the command-line options
    #[arg(short = 'm', long)]
    pub template: Option<PathBuf>,
    /// Export the options to a template file
    #[arg(short = 'x', long)]
    pub export: Option<PathBuf>,
    /// Skip the confirmation prompt
    #[arg(short, long)]
    pub force: bool,
}

#[derive(Args, Debug, Default)]
pub struct EditArgs {
    /// Hardware server ID
    #[arg(value_name = "IDENTIFIER")]
    pub args: Vec<String>,
    /// Host portion of the FQDN
    #[arg(short = 'H', long)]
    pub hostname: Option<String>,
    /// Domain portion of the FQDN
    #[arg(short = 'D', long)]
    pub domain: Option<String>,
    /// Tags to set, or an empty string to remove all (repeatable)
    #[arg(short = 'g', long = "tag")]
    pub tags: Vec<String>,
    /// User defined metadata string
    #[arg(short, long)]
    pub userdata: Option<String>,
    /// Read user data from a file
    #[arg(short = 'F', long)]
    pub userfile: Option<PathBuf>,
    /// Public port speed, options are: 0,10,100,1000,10000
    #[arg(short = 'p', long)]
    pub public_speed: Option<u64>,
    /// Private port speed, options are: 0,10,100,1000,10000
    #[arg(short = 'v', long)]
    pub private_speed: Option<u64>,
}

#[derive(Args, Debug, Default)]
pub struct PowerArgs {
    /// Hardware server ID
    #[arg(value_name = "IDENTIFIER")]
    pub args: Vec<String>,
    /// Skip the confirmation prompt
    #[arg(short, long)]
    pub force: bool,
}

#[derive(Args, Debug, Default)]
pub struct ReloadArgs {
    /// Hardware server ID
    #[arg(value_name = "IDENTIFIER")]
    pub args: Vec<String>,
    /// Post-install script to download
    #[arg(short = 'i', long)]
    pub postinstall: Option<String>,
    /// SSH key IDs to add to the root user (repeatable)
    #[arg(short = 'k', long = "key")]
    pub keys: Vec<u64>,
    /// Upgrade BIOS
    #[arg(short = 'b', long)]
    pub upgrade_bios: bool,
    /// Upgrade all hard drive firmware
    #[arg(short = 'w', long)]
    pub upgrade_firmware: bool,
    /// Skip the confirmation prompt
    #[arg(short, long)]
    pub force: bool,
}

#[derive(Args, Debug, Default)]
pub struct CreateCredentialArgs {
    /// Hardware server ID
    #[arg(value_name = "IDENTIFIER")]
    pub args: Vec<String>,
    /// Username of the credential
    #[arg(short = 'U', long)]
    pub username: Option<String>,
    /// Password of the credential
    #[arg(short = 'P', long)]
    pub password: Option<String>,
    /// Notes for the credential
    #[arg(short, long)]
    pub notes: Option<String>,
    /// Name of the software the credential belongs to
    #[arg(short, long)]
    pub software: Option<String>,
}

pub async fn handle_hardware_command(args: HardwareCommands, ctx: &mut Context<'_>) -> Result<()> {
    match args.command {
        HardwareSubcommands::List(args) => list::list_command(args, ctx).await,
        HardwareSubcommands::Detail {
            args,
            passwords,
            price,
            components,
        } => detail::detail_command(&args, passwords, price, components, ctx).await,
        HardwareSubcommands::Create(args) => create::create_command(args, ctx).await,
        HardwareSubcommands::Edit(args) => edit::edit_command(args, ctx).await,
        HardwareSubcommands::Cancel {
            args,
            immediate,
            reason,
            comment,
            force,
        } => cancel::cancel_command(&args, immediate, reason, comment, force, ctx).await,
        HardwareSubcommands::CancelReasons => cancel::cancel_reasons_command(ctx),
        HardwareSubcommands::PowerOn(args) => power::power_command(args, PowerAction::On, ctx).await,
        HardwareSubcommands::PowerOff(args) => power::power_command(args, PowerAction::Off, ctx).await,
        HardwareSubcommands::PowerCycle(args) => power::power_command(args, PowerAction::Cycle, ctx).await,
        HardwareSubcommands::Reboot { power, hard, soft } => power::reboot_command(power, hard, soft, ctx).await,
        HardwareSubcommands::Rescue(args) => power::power_command(args, PowerAction::Rescue, ctx).await,
        HardwareSubcommands::Reload(args) => reload::reload_command(args, ctx).await,
        HardwareSubcommands::UpdateFirmware(args) => reload::update_firmware_command(args, ctx).await,
        HardwareSubcommands::ToggleIpmi { args, enable, disable } => {
            toggle_ipmi::toggle_ipmi_command(&args, enable, disable, ctx).await
        }
        HardwareSubcommands::Notifications { args } => notifications::notifications_command(&args, ctx).await,
        HardwareSubcommands::NotificationsAdd { args, users } => {
            notifications::notifications_add_command(&args, &users, ctx).await
        }
        HardwareSubcommands::Guests { args } => guests::guests_command(&args, ctx).await,
        HardwareSubcommands::Billing { args } => billing::billing_command(&args, ctx).await,
        HardwareSubcommands::Credentials { args } => credentials::credentials_command(&args, ctx).await,
        HardwareSubcommands::CreateCredential(args) => credentials::create_credential_command(args, ctx).await,
        HardwareSubcommands::VlanAdd { args } => vlan_add::vlan_add_command(&args, ctx).await,
    }
}
