use anyhow::Result;

use super::HARDWARE_ID_FIELD;
use crate::cli::pipeline::{Context, single_id};
use crate::error::CliError;

pub async fn toggle_ipmi_command(args: &[String], enable: bool, disable: bool, ctx: &mut Context<'_>) -> Result<()> {
    let hardware_id = single_id(args, HARDWARE_ID_FIELD)?;
    let enabled = match (enable, disable) {
        (true, true) => return Err(CliError::usage("'--enable', '--disable' are exclusive.").into()),
        (false, false) => return Err(CliError::usage("Either '--enable' or '--disable' is required.").into()),
        (enabled, _) => enabled,
    };

    let managers = ctx.managers()?;
    managers
        .hardware
        .toggle_ipmi(hardware_id, enabled)
        .await
        .map_err(|e| {
            CliError::api(
                format!("Failed to toggle IPMI interface of hardware server '{}'.", hardware_id),
                e,
            )
        })?;

    ctx.ui.ok();
    ctx.ui.print(&format!(
        "Successfully send request to toggle IPMI interface of hardware server '{}'.",
        hardware_id
    ));
    Ok(())
}
