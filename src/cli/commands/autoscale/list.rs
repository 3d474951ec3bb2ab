use anyhow::Result;

use crate::cli::pipeline::Context;
use crate::error::CliError;
use crate::ui::{Table, or_empty, str_or_empty};

pub async fn list_command(ctx: &mut Context<'_>) -> Result<()> {
    let managers = ctx.managers()?;
    let groups = managers
        .autoscale
        .list_scale_groups()
        .await
        .map_err(|e| CliError::api("Failed to get Auto Scale Groups.", e))?;

    let mut table = Table::new(["Id", "Name", "Status", "Min/Max", "Running"]);
    for group in &groups {
        let status = group.status.as_ref().and_then(|s| s.name.as_deref());
        table.add([
            or_empty(group.id),
            str_or_empty(group.name.as_deref()),
            str_or_empty(status),
            format!(
                "{}/{}",
                or_empty(group.minimum_member_count),
                or_empty(group.maximum_member_count)
            ),
            or_empty(group.virtual_guest_member_count),
        ]);
    }
    ctx.ui.print_table(&table, ctx.output);
    Ok(())
}
