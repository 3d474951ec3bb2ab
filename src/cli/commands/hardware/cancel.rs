use anyhow::Result;
use log::info;

use super::HARDWARE_ID_FIELD;
use crate::api::managers::cancellation_reasons;
use crate::cli::pipeline::{Context, confirm_or_abort, single_id};
use crate::error::CliError;
use crate::ui::Table;

const DEFAULT_REASON: &str = "unneeded";

pub async fn cancel_command(
    args: &[String],
    immediate: bool,
    reason: Option<String>,
    comment: Option<String>,
    force: bool,
    ctx: &mut Context<'_>,
) -> Result<()> {
    let hardware_id = single_id(args, HARDWARE_ID_FIELD)?;

    let prompt = format!(
        "This will cancel the hardware server: {} and cannot be undone. Continue?",
        hardware_id
    );
    if !confirm_or_abort(ctx.ui, force, &prompt)? {
        return Ok(());
    }

    let reason = reason.unwrap_or_else(|| DEFAULT_REASON.to_string());
    let comment = comment.unwrap_or_default();
    let managers = ctx.managers()?;
    managers
        .hardware
        .cancel_hardware(hardware_id, &reason, &comment, immediate)
        .await
        .map_err(|e| {
            if e.is_not_found() {
                CliError::api(format!("Unable to find hardware server with ID: {}.", hardware_id), e)
            } else {
                CliError::api(format!("Failed to cancel hardware server: {}.", hardware_id), e)
            }
        })?;
    info!("Cancelled hardware {} (immediate: {})", hardware_id, immediate);

    ctx.ui.ok();
    ctx.ui.print(&format!("Hardware server {} was cancelled.", hardware_id));
    Ok(())
}

pub fn cancel_reasons_command(ctx: &mut Context<'_>) -> Result<()> {
    let mut table = Table::new(["Code", "Reason"]);
    for (code, reason) in cancellation_reasons() {
        table.add([*code, *reason]);
    }
    ctx.ui.print_table(&table, ctx.output);
    Ok(())
}
