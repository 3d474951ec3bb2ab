use anyhow::Result;
use log::debug;

use super::{GROUP_ID_FIELD, ScaleArgs};
use crate::cli::pipeline::{Context, check_exclusive, single_id};
use crate::error::CliError;

const SCALED: &str = "Auto Scale Group was scaled successfully";

pub async fn scale_command(args: ScaleArgs, ctx: &mut Context<'_>) -> Result<()> {
    let group_id = single_id(&args.args, GROUP_ID_FIELD)?;
    let amount = args.amount.ok_or_else(|| CliError::missing_input("--amount"))?;
    let amount = i64::try_from(amount).map_err(|_| CliError::usage("--amount is too large."))?;
    check_exclusive(args.up, args.down, "[--up]", "[--down]")?;
    check_exclusive(args.to, args.by, "[--to]", "[--by]")?;
    if !args.to && !args.by {
        return Err(CliError::usage("--to or --by is required").into());
    }

    let managers = ctx.managers()?;
    if args.by {
        let delta = if args.down { -amount } else { amount };
        let changed = managers
            .autoscale
            .scale(group_id, delta)
            .await
            .map_err(|e| CliError::api("Failed to scale Auto Scale Group.", e))?;
        debug!("Scale by {} touched {} members", delta, changed.len());
        if changed.len() as i64 == amount {
            ctx.ui.ok();
            ctx.ui.print(SCALED);
        }
    } else {
        let members = managers
            .autoscale
            .get_virtual_guest_members(group_id)
            .await
            .map_err(|e| CliError::api("Failed to get virtual guest members.", e))?;
        let changed = managers
            .autoscale
            .scale_to(group_id, amount)
            .await
            .map_err(|e| CliError::api("Failed to scale Auto Scale Group.", e))?;

        let current = members.len() as i64;
        let mut delta = changed.len() as i64;
        if current > amount {
            delta = -delta;
        }
        debug!("Scale to {}: {} members, {} changed", amount, current, delta);
        if current + delta == amount {
            ctx.ui.ok();
            ctx.ui.print(SCALED);
        }
    }
    Ok(())
}
