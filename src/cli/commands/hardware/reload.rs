//! Operating system reload and firmware update. Both are long running
//! transactions, so success only means the transaction was started.

use anyhow::Result;
use log::info;

use super::{HARDWARE_ID_FIELD, PowerArgs, ReloadArgs};
use crate::api::managers::ReloadConfig;
use crate::cli::pipeline::{Context, confirm_or_abort, single_id};
use crate::error::CliError;

impl ReloadArgs {
    fn config(&self) -> ReloadConfig {
        ReloadConfig {
            upgrade_bios: u8::from(self.upgrade_bios),
            upgrade_hard_drive_firmware: u8::from(self.upgrade_firmware),
            custom_provision_script_uri: self.postinstall.clone(),
            ssh_key_ids: self.keys.clone(),
        }
    }
}

pub async fn reload_command(args: ReloadArgs, ctx: &mut Context<'_>) -> Result<()> {
    let hardware_id = single_id(&args.args, HARDWARE_ID_FIELD)?;
    let prompt = format!(
        "This will reload operating system for hardware server: {}. Continue?",
        hardware_id
    );
    if !confirm_or_abort(ctx.ui, args.force, &prompt)? {
        return Ok(());
    }

    let config = args.config();
    ctx.managers()?
        .hardware
        .reload(hardware_id, &config)
        .await
        .map_err(|e| {
            CliError::api(
                format!("Failed to reload operating system for hardware server: {}.", hardware_id),
                e,
            )
        })?;
    info!("OS reload started for hardware {}", hardware_id);

    ctx.ui.ok();
    ctx.ui.print(&format!(
        "Started to reload operating system for hardware server: {}",
        hardware_id
    ));
    Ok(())
}

pub async fn update_firmware_command(args: PowerArgs, ctx: &mut Context<'_>) -> Result<()> {
    let hardware_id = single_id(&args.args, HARDWARE_ID_FIELD)?;
    let prompt = format!(
        "This will power off hardware server: {} and update device firmware. Continue?",
        hardware_id
    );
    if !confirm_or_abort(ctx.ui, args.force, &prompt)? {
        return Ok(());
    }

    ctx.managers()?
        .hardware
        .update_firmware(hardware_id)
        .await
        .map_err(|e| CliError::api(format!("Failed to update firmware for hardware server: {}.", hardware_id), e))?;
    info!("Firmware update started for hardware {}", hardware_id);

    ctx.ui.ok();
    ctx.ui.print(&format!("Started to update firmware for hardware server: {}.", hardware_id));
    Ok(())
}
