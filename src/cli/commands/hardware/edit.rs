use anyhow::Result;
use std::fs;

use super::{EditArgs, HARDWARE_ID_FIELD};
use crate::api::managers::HardwareChanges;
use crate::cli::pipeline::{Context, single_id};
use crate::error::CliError;

const PORT_SPEEDS: [u64; 5] = [0, 10, 100, 1000, 10000];

pub async fn edit_command(args: EditArgs, ctx: &mut Context<'_>) -> Result<()> {
    let hardware_id = single_id(&args.args, HARDWARE_ID_FIELD)?;
    let changes = build_changes(&args)?;

    let managers = ctx.managers()?;
    let outcomes = managers.hardware.edit(hardware_id, &changes).await;

    let mut failures = Vec::new();
    for outcome in outcomes {
        match outcome {
            Ok(message) => {
                ctx.ui.ok();
                ctx.ui.print(&message);
            }
            Err(message) => failures.push(message),
        }
    }
    if !failures.is_empty() {
        return Err(CliError::Remote(failures.join("\n")).into());
    }
    Ok(())
}

fn check_speed(speed: Option<u64>, network: &str) -> Result<(), CliError> {
    match speed {
        Some(s) if !PORT_SPEEDS.contains(&s) => Err(CliError::usage(format!(
            "{} network interface speed must be in: 0, 10, 100, 1000, 10000 (Mbps).",
            network
        ))),
        _ => Ok(()),
    }
}

/// Validate the flags and read the user data file, before any remote call.
fn build_changes(args: &EditArgs) -> Result<HardwareChanges, CliError> {
    let any_flag = args.hostname.is_some()
        || args.domain.is_some()
        || !args.tags.is_empty()
        || args.userdata.is_some()
        || args.userfile.is_some()
        || args.public_speed.is_some()
        || args.private_speed.is_some();
    if !any_flag {
        return Err(CliError::usage("Please pass at least one of the flags."));
    }
    if args.userdata.is_some() && args.userfile.is_some() {
        return Err(CliError::usage("[-u|--userdata] is not allowed with [-F|--userfile]."));
    }
    check_speed(args.public_speed, "Public")?;
    check_speed(args.private_speed, "Private")?;

    let userdata = match &args.userfile {
        Some(path) => Some(fs::read_to_string(path).map_err(|e| {
            CliError::local_io(format!("Failed to read user data file: {}.", path.display()), e)
        })?),
        None => args.userdata.clone(),
    };

    Ok(HardwareChanges {
        userdata,
        hostname: args.hostname.clone(),
        domain: args.domain.clone(),
        tags: (!args.tags.is_empty()).then(|| args.tags.join(",")),
        public_speed: args.public_speed,
        private_speed: args.private_speed,
    })
}
