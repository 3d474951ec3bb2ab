//! Power state changes: on, off, cycle, reboot and rescue.

use anyhow::Result;
use log::info;

use super::{HARDWARE_ID_FIELD, PowerArgs};
use crate::api::managers::RebootKind;
use crate::cli::pipeline::{Context, confirm_or_abort, single_id};
use crate::error::CliError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PowerAction {
    On,
    Off,
    Cycle,
    Reboot(RebootKind),
    Rescue,
}

impl PowerAction {
    fn prompt(&self, id: u64) -> String {
        match self {
            PowerAction::On => format!("This will power on hardware server: {}. Continue?", id),
            PowerAction::Off => format!("This will power off hardware server: {}. Continue?", id),
            PowerAction::Cycle => format!("This will power off and then power on hardware server: {}. Continue?", id),
            PowerAction::Reboot(_) => format!("This will reboot hardware server: {}. Continue?", id),
            PowerAction::Rescue => format!("This will reboot hardware server: {} to the rescue image. Continue?", id),
        }
    }

    fn done(&self, id: u64) -> String {
        match self {
            PowerAction::On => format!("Hardware server: {} was power on.", id),
            PowerAction::Off => format!("Hardware server: {} was power off.", id),
            PowerAction::Cycle => format!("Hardware server: {} was power cycled.", id),
            PowerAction::Reboot(_) => format!("Hardware server: {} was rebooted.", id),
            PowerAction::Rescue => format!("Hardware server: {} was rebooted to a rescue image.", id),
        }
    }

    fn failure(&self, id: u64) -> String {
        let verb = match self {
            PowerAction::On => "power on",
            PowerAction::Off => "power off",
            PowerAction::Cycle => "power cycle",
            PowerAction::Reboot(_) => "reboot",
            PowerAction::Rescue => "reboot to rescue image",
        };
        format!("Failed to {} hardware server: {}.", verb, id)
    }
}

pub fn reboot_kind(hard: bool, soft: bool) -> Result<RebootKind, CliError> {
    match (hard, soft) {
        (true, true) => Err(CliError::usage("Can only specify either --hard or --soft.")),
        (true, false) => Ok(RebootKind::Hard),
        (false, true) => Ok(RebootKind::Soft),
        (false, false) => Ok(RebootKind::Default),
    }
}

pub async fn power_command(args: PowerArgs, action: PowerAction, ctx: &mut Context<'_>) -> Result<()> {
    let hardware_id = single_id(&args.args, HARDWARE_ID_FIELD)?;
    run(hardware_id, args.force, action, ctx).await
}

pub async fn reboot_command(args: PowerArgs, hard: bool, soft: bool, ctx: &mut Context<'_>) -> Result<()> {
    let hardware_id = single_id(&args.args, HARDWARE_ID_FIELD)?;
    let kind = reboot_kind(hard, soft)?;
    run(hardware_id, args.force, PowerAction::Reboot(kind), ctx).await
}

async fn run(hardware_id: u64, force: bool, action: PowerAction, ctx: &mut Context<'_>) -> Result<()> {
    if !confirm_or_abort(ctx.ui, force, &action.prompt(hardware_id))? {
        return Ok(());
    }

    let hardware = &ctx.managers()?.hardware;
    let result = match action {
        PowerAction::On => hardware.power_on(hardware_id).await,
        PowerAction::Off => hardware.power_off(hardware_id).await,
        PowerAction::Cycle => hardware.power_cycle(hardware_id).await,
        PowerAction::Reboot(kind) => hardware.reboot(hardware_id, kind).await,
        PowerAction::Rescue => hardware.rescue(hardware_id).await,
    };
    result.map_err(|e| CliError::api(action.failure(hardware_id), e))?;
    info!("{:?} sent to hardware {}", action, hardware_id);

    ctx.ui.ok();
    ctx.ui.print(&action.done(hardware_id));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reboot_kind() {
        assert_eq!(reboot_kind(false, false).unwrap(), RebootKind::Default);
        assert_eq!(reboot_kind(true, false).unwrap(), RebootKind::Hard);
        assert_eq!(reboot_kind(false, true).unwrap(), RebootKind::Soft);
        let err = reboot_kind(true, true).unwrap_err();
        assert_eq!(err.to_string(), "Incorrect Usage: Can only specify either --hard or --soft.");
    }

    #[test]
    fn test_messages_name_the_server() {
        let action = PowerAction::Reboot(RebootKind::Soft);
        assert_eq!(action.prompt(1234), "This will reboot hardware server: 1234. Continue?");
        assert_eq!(action.done(1234), "Hardware server: 1234 was rebooted.");
        assert_eq!(PowerAction::Off.failure(7), "Failed to power off hardware server: 7.");
    }
}
