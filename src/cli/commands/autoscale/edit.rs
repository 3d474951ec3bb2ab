use anyhow::Result;
use std::fs;

use super::{EditArgs, GROUP_ID_FIELD};
use crate::api::models::{GuestAttribute, ScaleGroup};
use crate::cli::pipeline::{Context, check_exclusive, single_id};
use crate::error::CliError;

const TEMPLATE_MASK: &str = "mask[virtualGuestMemberTemplate]";

pub async fn edit_command(args: EditArgs, ctx: &mut Context<'_>) -> Result<()> {
    let group_id = single_id(&args.args, GROUP_ID_FIELD)?;

    let any_set = args.name.is_some()
        || args.min.is_some()
        || args.max.is_some()
        || args.userdata.is_some()
        || args.userfile.is_some()
        || args.cpu.is_some()
        || args.memory.is_some();
    if !any_set {
        return Err(CliError::usage("Please pass at least one of the flags.").into());
    }
    check_exclusive(args.userdata.is_some(), args.userfile.is_some(), "[--userdata]", "[--userfile]")?;

    let user_data = match &args.userfile {
        Some(path) => Some(fs::read_to_string(path).map_err(|e| {
            CliError::local_io(format!("Failed to read user data from file: {}.", path.display()), e)
        })?),
        None => args.userdata.clone(),
    };

    let mut template = ScaleGroup {
        name: args.name.clone(),
        minimum_member_count: args.min,
        maximum_member_count: args.max,
        ..Default::default()
    };

    let managers = ctx.managers()?;
    if args.cpu.is_some() || args.memory.is_some() || user_data.is_some() {
        let current = managers
            .autoscale
            .get_scale_group(group_id, Some(TEMPLATE_MASK))
            .await
            .map_err(|e| CliError::api("Failed to get AutoScale group.", e))?;

        let mut guest = current.virtual_guest_member_template.unwrap_or_default();
        if let Some(cpu) = args.cpu {
            guest.start_cpus = Some(cpu);
        }
        if let Some(memory) = args.memory {
            guest.max_memory = Some(memory);
        }
        if let Some(data) = user_data {
            guest.user_data = vec![GuestAttribute { value: Some(data) }];
        }
        template.virtual_guest_member_template = Some(guest);
    }

    let updated = managers
        .autoscale
        .edit_scale_group(group_id, &template)
        .await
        .map_err(|e| CliError::api("Failed to update Auto Scale Group.", e))?;
    if updated {
        ctx.ui.ok();
    }
    Ok(())
}
