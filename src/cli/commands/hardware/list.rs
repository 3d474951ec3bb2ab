use anyhow::Result;
use log::debug;

use super::ListArgs;
use super::columns;
use crate::api::managers::HardwareListFilter;
use crate::cli::pipeline::Context;
use crate::error::CliError;
use crate::ui::Table;

pub async fn list_command(args: ListArgs, ctx: &mut Context<'_>) -> Result<()> {
    let (shown, sort_column) = columns::select(&args.columns, &args.sortby)?;
    let mask = columns::object_mask(&shown, sort_column);
    let filter = HardwareListFilter {
        tags: args.tags,
        cpu: args.cpu,
        memory: args.memory,
        hostname: args.hostname,
        domain: args.domain,
        datacenter: args.datacenter,
        nic_speed: args.network,
        public_ip: args.public_ip,
        private_ip: args.private_ip,
        owner: args.owner,
        order_id: args.order,
    };
    debug!("Listing hardware with {:?} and {}", filter, mask);

    let managers = ctx.managers()?;
    let mut servers = managers
        .hardware
        .list_hardware(&filter, Some(&mask))
        .await
        .map_err(|e| CliError::api("Failed to get hardware servers on your account.", e))?;
    columns::sort(&mut servers, sort_column);

    let mut table = Table::new(shown.iter().map(|c| c.name));
    for server in &servers {
        table.add(shown.iter().map(|c| columns::cell(server, c)));
    }
    ctx.ui.print_table(&table, ctx.output);
    Ok(())
}
