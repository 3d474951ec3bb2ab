use anyhow::Result;

use super::HARDWARE_ID_FIELD;
use crate::cli::pipeline::{Context, format_money, format_time, single_id};
use crate::error::CliError;
use crate::ui::{Table, or_empty, str_or_empty};

const BILLING_MASK: &str = "mask[id,billingItem[id,recurringFee,nextInvoiceTotalRecurringAmount,\
provisionTransaction[createDate],nextInvoiceChildren[description,categoryCode,nextInvoiceTotalRecurringAmount]]]";

pub async fn billing_command(args: &[String], ctx: &mut Context<'_>) -> Result<()> {
    let hardware_id = single_id(args, HARDWARE_ID_FIELD)?;

    let managers = ctx.managers()?;
    let hardware = managers
        .hardware
        .get_hardware(hardware_id, Some(BILLING_MASK))
        .await
        .map_err(|e| CliError::api(format!("Failed to get hardware server {}.", hardware_id), e))?;

    let billing = hardware.billing_item.unwrap_or_default();
    let money = |amount: Option<f64>| amount.map(format_money).unwrap_or_else(|| str_or_empty(None));

    let mut table = Table::new(["Name", "Value"]);
    table.add(["Id".to_string(), or_empty(hardware.id)]);
    table.add(["Billing Item Id".to_string(), or_empty(billing.id)]);
    table.add(["Recurring Charges".to_string(), money(billing.recurring_fee)]);
    table.add(["Total".to_string(), money(billing.next_invoice_total_recurring_amount)]);
    let provisioned = billing.provision_transaction.as_ref().and_then(|t| t.create_date.as_deref());
    table.add(["Provision Date".to_string(), format_time(provisioned)]);

    let mut children = Table::new(["Description", "Category", "Recurring Price"]);
    for child in &billing.next_invoice_children {
        children.add([
            str_or_empty(child.description.as_deref()),
            str_or_empty(child.category_code.as_deref()),
            money(child.next_invoice_total_recurring_amount),
        ]);
    }
    table.add(["Prices".to_string(), children.render_text()]);

    ctx.ui.print_table(&table, ctx.output);
    Ok(())
}
