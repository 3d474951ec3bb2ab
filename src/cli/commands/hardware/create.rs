use anyhow::Result;
use log::{debug, info};
use std::fs;
use std::path::Path;

use super::CreateArgs;
use crate::api::models::ItemPrice;
use crate::api::order::{HardwareTemplate, generate_create_template};
use crate::cli::pipeline::{Context, confirm_or_abort, format_money};
use crate::error::CliError;
use crate::ui::{OutputFormat, Table};

const RETAIL_NOTE: &str =
    "Prices reflected here are retail and do not take account level discounts and are not guaranteed.";

pub async fn create_command(args: CreateArgs, ctx: &mut Context<'_>) -> Result<()> {
    let template = match &args.template {
        Some(path) => load_template(path)?,
        None => template_from_flags(&args)?,
    };
    debug!("Hardware template: {:?}", template);

    let managers = ctx.managers()?;
    let package = managers
        .hardware
        .get_package()
        .await
        .map_err(|e| CliError::api("Failed to get product package for hardware server.", e))?;
    let order = generate_create_template(&package, &template)?;

    if args.test {
        let verified = managers
            .hardware
            .verify_order(&order)
            .await
            .map_err(|e| CliError::api("Failed to verify this order.", e))?;
        // Always text: the lines around it are plain text in every output mode.
        ctx.ui.print_table(&cost_table(&verified.prices), OutputFormat::Table);
        ctx.ui.print(RETAIL_NOTE);
        return Ok(());
    }

    if let Some(path) = &args.export {
        export_template(&template, path)?;
        ctx.ui.ok();
        ctx.ui.print(&format!("Hardware server template is exported to: {}.", path.display()));
        return Ok(());
    }

    if !confirm_or_abort(ctx.ui, args.force, "This action will incur charges on your account. Continue?")? {
        return Ok(());
    }

    let receipt = managers
        .hardware
        .place_order(&order)
        .await
        .map_err(|e| CliError::api("Failed to place this order.", e))?;
    let order_id = receipt.order_id.unwrap_or_default();
    info!("Placed hardware order {}", order_id);

    ctx.ui.ok();
    ctx.ui.print(&format!("Order {} was placed.", order_id));
    ctx.ui.print("");
    if let Some(details) = receipt.order_details.as_ref().filter(|d| !d.prices.is_empty()) {
        ctx.ui.print_table(&cost_table(&details.prices), OutputFormat::Table);
    }
    ctx.ui.print(&format!(
        "Run 'slcli hardware list --order {}' to find this hardware server after it is ready.",
        order_id
    ));
    Ok(())
}

/// Required flags are checked in the order they are documented.
pub fn template_from_flags(args: &CreateArgs) -> Result<HardwareTemplate, CliError> {
    let size = args.size.clone().ok_or_else(|| CliError::missing_input("-s|--size"))?;
    let hostname = args.hostname.clone().ok_or_else(|| CliError::missing_input("-H|--hostname"))?;
    let domain = args.domain.clone().ok_or_else(|| CliError::missing_input("-D|--domain"))?;
    let os_name = args.os.clone().ok_or_else(|| CliError::missing_input("-o|--os"))?;
    let datacenter = args.datacenter.clone().ok_or_else(|| CliError::missing_input("-d|--datacenter"))?;
    let port_speed = args.port_speed.ok_or_else(|| CliError::missing_input("-p|--port-speed"))?;

    let billing = match args.billing.as_deref() {
        None => "hourly".to_string(),
        Some(b @ ("hourly" | "monthly")) => b.to_string(),
        Some(_) => return Err(CliError::usage("-b|--billing has to be either hourly or monthly.")),
    };

    Ok(HardwareTemplate {
        size,
        hostname,
        domain,
        os_name,
        datacenter,
        port_speed,
        billing,
        no_public: args.no_public,
        post_install_url: args.post_install.clone(),
        ssh_keys: args.keys.clone(),
        extras: args.extras.clone(),
    })
}

pub fn load_template(path: &Path) -> Result<HardwareTemplate, CliError> {
    if !path.exists() {
        return Err(CliError::usage(format!("Template file: {} does not exist.", path.display())));
    }
    let content = fs::read_to_string(path)
        .map_err(|e| CliError::local_io(format!("Failed to read template file: {}.", path.display()), e))?;
    serde_json::from_str(&content)
        .map_err(|e| CliError::local_io(format!("Failed to unmarshal template file: {}.", path.display()), e))
}

pub fn export_template(template: &HardwareTemplate, path: &Path) -> Result<(), CliError> {
    let content = serde_json::to_string_pretty(template)
        .map_err(|e| CliError::local_io("Failed to marshal hardware server template.", e))?;
    fs::write(path, content).map_err(|e| {
        CliError::local_io(
            format!("Failed to write hardware server template file to: {}.", path.display()),
            e,
        )
    })
}

/// Priced items with a monthly total.
fn cost_table(prices: &[ItemPrice]) -> Table {
    let mut table = Table::new(["item", "cost"]);
    let mut total = 0.0;
    for price in prices {
        let description = price.item.as_ref().and_then(|i| i.description.as_deref());
        if let (Some(fee), Some(description)) = (price.recurring_fee, description) {
            total += fee;
            table.add([description.to_string(), format_money(fee)]);
        }
    }
    table.add(["Total monthly cost".to_string(), format_money(total)]);
    table
}
