use anyhow::Result;
use std::collections::HashSet;

use super::HARDWARE_ID_FIELD;
use crate::api::models::{Hardware, HardwareComponent, SoftwarePassword};
use crate::cli::pipeline::{Context, format_money, format_time, single_id};
use crate::error::CliError;
use crate::ui::{Table, or_empty, str_or_empty};

pub async fn detail_command(
    args: &[String],
    passwords: bool,
    price: bool,
    components: bool,
    ctx: &mut Context<'_>,
) -> Result<()> {
    let hardware_id = single_id(args, HARDWARE_ID_FIELD)?;

    let managers = ctx.managers()?;
    let hardware = managers
        .hardware
        .get_hardware(hardware_id, None)
        .await
        .map_err(|e| CliError::api(format!("Failed to get hardware server: {}.", hardware_id), e))?;

    let mut table = summary_table(&hardware);

    if !hardware.network_vlans.is_empty() {
        let mut vlans = Table::new(["Type", "Number", "ID"]);
        for vlan in &hardware.network_vlans {
            vlans.add([
                str_or_empty(vlan.network_space.as_deref()),
                or_empty(vlan.vlan_number),
                or_empty(vlan.id),
            ]);
        }
        table.add(["Vlans".to_string(), vlans.render_text()]);
    }

    if price {
        add_prices(&mut table, &hardware);
    }

    if passwords {
        if let Some(os) = &hardware.operating_system {
            table.add(["Users".to_string(), credentials_table("Username", &os.passwords).render_text()]);
        }
        if !hardware.remote_management_accounts.is_empty() {
            let remote = credentials_table("IPMI_username", &hardware.remote_management_accounts);
            table.add(["Remote users".to_string(), remote.render_text()]);
        }
    }

    if components {
        let found = managers
            .hardware
            .get_components(hardware_id)
            .await
            .map_err(|e| CliError::api("Failed to get components", e))?;
        table.add(["Components".to_string(), components_table(&found).render_text()]);
    }

    ctx.ui.print_table(&table, ctx.output);
    Ok(())
}

fn summary_table(hardware: &Hardware) -> Table {
    let mut table = Table::new(["Name", "Value"]);
    table.add(["ID".to_string(), or_empty(hardware.id)]);
    table.add(["GUID".to_string(), str_or_empty(hardware.global_identifier.as_deref())]);
    table.add(["Hostname".to_string(), str_or_empty(hardware.hostname.as_deref())]);
    table.add(["Domain".to_string(), str_or_empty(hardware.domain.as_deref())]);
    table.add([
        "FQDN".to_string(),
        str_or_empty(hardware.fully_qualified_domain_name.as_deref()),
    ]);
    if hardware.hardware_status.is_some() {
        table.add(["Status".to_string(), str_or_empty(hardware.status())]);
    }
    if hardware.datacenter.is_some() {
        table.add(["Datacenter".to_string(), str_or_empty(hardware.datacenter_name())]);
    }
    table.add(["CPU cores".to_string(), or_empty(hardware.processor_physical_core_amount)]);
    table.add(["Memory".to_string(), format!("{}G", or_empty(hardware.memory_capacity))]);
    table.add(["Public IP".to_string(), str_or_empty(hardware.primary_ip_address.as_deref())]);
    table.add([
        "Private IP".to_string(),
        str_or_empty(hardware.primary_backend_ip_address.as_deref()),
    ]);
    table.add([
        "IPMI IP".to_string(),
        str_or_empty(hardware.network_management_ip_address.as_deref()),
    ]);
    if let Some(os) = hardware.os_description() {
        table.add(["OS".to_string(), str_or_empty(os.name.as_deref())]);
        table.add(["OS version".to_string(), str_or_empty(os.version.as_deref())]);
    }
    table.add(["Created".to_string(), format_time(hardware.provision_date.as_deref())]);
    if let Some(owner) = hardware.owner() {
        table.add(["Owner".to_string(), owner.to_string()]);
    }
    if let Some(notes) = hardware.notes.as_deref().filter(|n| !n.is_empty()) {
        table.add(["Note".to_string(), notes.to_string()]);
    }
    if !hardware.tag_references.is_empty() {
        table.add(["Tag".to_string(), hardware.tag_names()]);
    }
    table
}

/// Next invoice breakdown plus the summed rate.
fn add_prices(table: &mut Table, hardware: &Hardware) {
    let Some(billing) = &hardware.billing_item else { return };
    let Some(total) = billing.next_invoice_total_recurring_amount else { return };

    let mut prices = Table::new(["Item", "CategoryCode", "Recurring Price"]);
    prices.add(["Total".to_string(), str_or_empty(None), format_money(total)]);
    let mut sum = total;
    for child in &billing.next_invoice_children {
        if let Some(amount) = child.next_invoice_total_recurring_amount {
            sum += amount;
            prices.add([
                str_or_empty(child.description.as_deref()),
                str_or_empty(child.category_code.as_deref()),
                format_money(amount),
            ]);
        }
    }
    table.add(["Prices".to_string(), prices.render_text()]);
    table.add(["Price rate".to_string(), format_money(sum)]);
}

fn credentials_table(user_header: &str, credentials: &[SoftwarePassword]) -> Table {
    let mut users = Table::new([user_header, "Password"]);
    for credential in credentials {
        users.add([
            str_or_empty(credential.username.as_deref()),
            str_or_empty(credential.password.as_deref()),
        ]);
    }
    users
}

/// One row per component id, first occurrence wins.
fn components_table(components: &[HardwareComponent]) -> Table {
    let mut table = Table::new(["Name", "Firmware version", "Firmware build date", "Type"]);
    let mut seen = HashSet::new();
    for component in components {
        if let Some(id) = component.id {
            if !seen.insert(id) {
                continue;
            }
        }
        let model = component.hardware_component_model.as_ref();
        let firmware = model.and_then(|m| m.firmwares.first());
        let kind = model
            .and_then(|m| m.hardware_generic_component_model.as_ref())
            .and_then(|g| g.hardware_component_type.as_ref())
            .and_then(|t| t.key_name.as_deref());
        table.add([
            str_or_empty(model.and_then(|m| m.long_description.as_deref())),
            str_or_empty(firmware.and_then(|f| f.version.as_deref())),
            format_time(firmware.and_then(|f| f.create_date.as_deref())),
            str_or_empty(kind),
        ]);
    }
    table
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_components_are_deduplicated_by_id() {
        let components: Vec<HardwareComponent> = serde_json::from_value(json!([
            { "id": 1, "hardwareComponentModel": { "longDescription": "Disk", "firmwares": [ { "version": "1.0" } ] } },
            { "id": 1, "hardwareComponentModel": { "longDescription": "Disk again" } },
            { "id": 2, "hardwareComponentModel": { "longDescription": "NIC",
                "hardwareGenericComponentModel": { "hardwareComponentType": { "keyName": "NETWORK_CARD" } } } }
        ]))
        .unwrap();
        let table = components_table(&components);
        assert_eq!(table.rows().len(), 2);
        assert_eq!(table.rows()[0], ["Disk", "1.0", "-", "-"]);
        assert_eq!(table.rows()[1][3], "NETWORK_CARD");
    }

    #[test]
    fn test_price_rate_sums_children() {
        let hardware: Hardware = serde_json::from_value(json!({
            "billingItem": {
                "nextInvoiceTotalRecurringAmount": "10.5",
                "nextInvoiceChildren": [
                    { "description": "RAM", "categoryCode": "ram", "nextInvoiceTotalRecurringAmount": "2" },
                    { "description": "free", "categoryCode": "os" }
                ]
            }
        }))
        .unwrap();
        let mut table = Table::new(["Name", "Value"]);
        add_prices(&mut table, &hardware);
        let rate = table.rows().iter().find(|r| r[0] == "Price rate").unwrap();
        assert_eq!(rate[1], "12.50");
    }

    #[test]
    fn test_optional_rows_are_skipped() {
        let table = summary_table(&Hardware {
            id: Some(5),
            notes: Some(String::new()),
            ..Default::default()
        });
        let names: Vec<&str> = table.rows().iter().map(|r| r[0].as_str()).collect();
        assert!(!names.contains(&"Note"));
        assert!(!names.contains(&"Status"));
        assert!(!names.contains(&"Tag"));
        assert!(names.contains(&"Memory"));
    }
}
