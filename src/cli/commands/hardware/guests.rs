use anyhow::Result;

use super::HARDWARE_ID_FIELD;
use crate::cli::pipeline::{Context, format_time, single_id};
use crate::error::CliError;
use crate::ui::{Table, or_empty, str_or_empty};

pub async fn guests_command(args: &[String], ctx: &mut Context<'_>) -> Result<()> {
    let hardware_id = single_id(args, HARDWARE_ID_FIELD)?;

    let managers = ctx.managers()?;
    let guests = managers.hardware.get_guests(hardware_id).await.map_err(|e| {
        CliError::api(
            format!("Failed to get the guests instances for the hardware server {}.", hardware_id),
            e,
        )
    })?;

    let mut table = Table::new(["Id", "Hostname", "CPU", "Memory", "Start Date", "Status", "Power State"]);
    for guest in &guests {
        let cpu = format!(
            "{} {}",
            or_empty(guest.max_cpu),
            guest.max_cpu_units.as_deref().unwrap_or_default()
        );
        table.add([
            or_empty(guest.id),
            str_or_empty(guest.hostname.as_deref()),
            cpu.trim_end().to_string(),
            or_empty(guest.max_memory),
            format_time(guest.create_date.as_deref()),
            str_or_empty(guest.status.as_ref().and_then(|s| s.key_name.as_deref())),
            str_or_empty(guest.power_state.as_ref().and_then(|s| s.key_name.as_deref())),
        ]);
    }
    ctx.ui.print_table(&table, ctx.output);
    Ok(())
}
