use anyhow::Result;

use super::GROUP_ID_FIELD;
use crate::api::models::{ScaleGroup, VirtualGuest};
use crate::api::Managers;
use crate::cli::pipeline::{Context, format_time, single_id};
use crate::error::CliError;
use crate::ui::{Table, or_empty, str_or_empty};

pub async fn detail_command(args: &[String], ctx: &mut Context<'_>) -> Result<()> {
    let group_id = single_id(args, GROUP_ID_FIELD)?;

    let managers = ctx.managers()?;
    let group = managers
        .autoscale
        .get_scale_group(group_id, None)
        .await
        .map_err(|e| CliError::api("Failed to get AutoScale group.", e))?;

    let mut table = Table::new(["Name", "Value"]);
    table.add(["ID".to_string(), or_empty(group.id)]);
    let datacenter = group
        .regional_group
        .as_ref()
        .and_then(|r| r.locations.first())
        .and_then(|l| l.long_name.as_deref());
    table.add(["Datacenter".to_string(), str_or_empty(datacenter)]);
    let termination = group.termination_policy.as_ref().and_then(|t| t.name.as_deref());
    table.add(["Termination".to_string(), str_or_empty(termination)]);
    table.add(["Minimum Members".to_string(), or_empty(group.minimum_member_count)]);
    table.add(["Maximum Members".to_string(), or_empty(group.maximum_member_count)]);
    table.add(["Current Members".to_string(), or_empty(group.virtual_guest_member_count)]);
    table.add(["Cooldown".to_string(), format!("{} seconds", group.cooldown.unwrap_or(0))]);
    table.add(["Last Action".to_string(), format_time(group.last_action_date.as_deref())]);

    if !group.network_vlans.is_empty() {
        table.add(["Network Vlans".to_string(), network_vlans_table(&group).render_text()]);
    }

    let template = group.virtual_guest_member_template.clone().unwrap_or_default();
    let template_table = member_template_table(managers, &template).await?;
    table.add(["Virtual Guest Member Template".to_string(), template_table.render_text()]);

    if !group.policies.is_empty() {
        let mut policies = Table::new(["Policy", "Cooldown"]);
        for policy in &group.policies {
            policies.add([
                str_or_empty(policy.name.as_deref()),
                or_empty(policy.cooldown.or(group.cooldown)),
            ]);
        }
        table.add(["Policies".to_string(), policies.render_text()]);
    }

    if !group.virtual_guest_members.is_empty() {
        let mut guests = Table::new(["Id", "Hostname", "Created"]);
        for member in &group.virtual_guest_members {
            let guest = member.virtual_guest.as_ref();
            guests.add([
                or_empty(guest.and_then(|g| g.id)),
                str_or_empty(guest.and_then(|g| g.hostname.as_deref())),
                format_time(guest.and_then(|g| g.provision_date.as_deref())),
            ]);
        }
        table.add(["Active Guests".to_string(), guests.render_text()]);
    }

    ctx.ui.print_table(&table, ctx.output);
    Ok(())
}

fn network_vlans_table(group: &ScaleGroup) -> Table {
    let mut vlans = Table::new(["Network Type", "Vlan Name"]);
    for entry in &group.network_vlans {
        let vlan = entry.network_vlan.clone().unwrap_or_default();
        let router = vlan
            .primary_router
            .as_ref()
            .and_then(|r| r.hostname.as_deref())
            .unwrap_or_default();
        vlans.add([
            str_or_empty(vlan.network_space.as_deref()),
            format!("{}.{}", router, or_empty(vlan.vlan_number)),
        ]);
    }
    vlans
}

/// The guest template, with SSH key labels looked up one by one.
async fn member_template_table(managers: &Managers, template: &VirtualGuest) -> Result<Table> {
    let mut table = Table::new(["Name", "Value"]);
    table.add(["Hostname".to_string(), str_or_empty(template.hostname.as_deref())]);
    table.add(["Domain".to_string(), str_or_empty(template.domain.as_deref())]);
    table.add(["Core".to_string(), or_empty(template.start_cpus)]);
    table.add(["Ram".to_string(), or_empty(template.max_memory)]);
    if let Some(component) = template.network_components.first() {
        table.add(["Network".to_string(), or_empty(component.max_speed)]);
    }

    for key in &template.ssh_keys {
        let Some(key_id) = key.id else { continue };
        let ssh_key = managers
            .security
            .get_ssh_key(key_id)
            .await
            .map_err(|e| CliError::api("Failed to get SSH key.", e))?;
        table.add([format!("SSH Key {}", key_id), str_or_empty(ssh_key.label.as_deref())]);
    }

    let disk_type = if template.local_disk_flag.unwrap_or(false) { "Local" } else { "SAN" };
    for disk in &template.block_devices {
        let capacity = disk.disk_image.as_ref().and_then(|d| d.capacity);
        table.add([
            format!("{} Disk {}", disk_type, disk.device.as_deref().unwrap_or_default()),
            or_empty(capacity),
        ]);
    }

    table.add([
        "OS".to_string(),
        str_or_empty(template.operating_system_reference_code.as_deref()),
    ]);
    let post_install = match template.post_install_script_uri.as_deref() {
        Some(uri) if !uri.is_empty() => uri.to_string(),
        _ => "None".to_string(),
    };
    table.add(["Post Install".to_string(), post_install]);
    Ok(table)
}
