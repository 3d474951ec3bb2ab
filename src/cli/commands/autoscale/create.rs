use anyhow::Result;
use log::{debug, info};
use std::fs;

use super::CreateArgs;
use crate::api::managers::DatacenterName;
use crate::api::models::{
    BlockDevice, DiskImage, GuestAttribute, GuestNetworkComponent, Location, ScaleGroup, ScalePolicy,
    ScalePolicyAction, SshKey, VirtualGuest,
};
use crate::api::Managers;
use crate::cli::pipeline::{Context, check_exclusive, confirm_or_abort, format_time};
use crate::error::CliError;
use crate::ui::{Table, or_empty, str_or_empty};

/// Block device 1 is reserved for the boot disk.
const RESERVED_DEVICE: u64 = 1;

pub async fn create_command(args: CreateArgs, ctx: &mut Context<'_>) -> Result<()> {
    check_exclusive(args.userdata.is_some(), args.userfile.is_some(), "[--userdata]", "[--userfile]")?;
    let mut template = build_template(&args, args.userdata.clone())?;
    if let Some(path) = &args.userfile {
        let content = fs::read_to_string(path).map_err(|e| {
            CliError::local_io(format!("Failed to read user data from file: {}.", path.display()), e)
        })?;
        if let Some(guest) = template.virtual_guest_member_template.as_mut() {
            guest.user_data = vec![GuestAttribute { value: Some(content) }];
        }
    }

    if !confirm_or_abort(ctx.ui, args.force, "This action will incur charges on your account. Continue?")? {
        return Ok(());
    }

    let managers = ctx.managers()?;
    let datacenter = args.datacenter.as_deref().unwrap_or_default();
    let datacenter_id = resolve_datacenter(managers, datacenter).await?;
    if let Some(guest) = template.virtual_guest_member_template.as_mut() {
        guest.datacenter = Some(Location {
            id: Some(datacenter_id),
            ..Default::default()
        });
    }

    let group = managers
        .autoscale
        .create_scale_group(&template)
        .await
        .map_err(|e| CliError::api("Failed to create Auto Scale Group.", e))?;
    info!("Created scale group {:?}", group.id);

    let mut members = Table::new(["Id", "Domain", "hostname"]);
    for member in &group.virtual_guest_members {
        let guest = member.virtual_guest.as_ref();
        members.add([
            or_empty(guest.and_then(|g| g.id)),
            str_or_empty(guest.and_then(|g| g.domain.as_deref())),
            str_or_empty(guest.and_then(|g| g.hostname.as_deref())),
        ]);
    }

    let mut table = Table::new(["Name", "Value"]);
    table.add(["ID".to_string(), or_empty(group.id)]);
    table.add(["Created".to_string(), format_time(group.create_date.as_deref())]);
    table.add(["Name".to_string(), str_or_empty(group.name.as_deref())]);
    table.add(["Virtual Guest Members".to_string(), members.render_text()]);
    ctx.ui.print_table(&table, ctx.output);
    Ok(())
}

fn require<'a, T>(value: &'a Option<T>, flag: &str) -> Result<&'a T, CliError> {
    value.as_ref().ok_or_else(|| CliError::missing_input(flag))
}

/// Build the scale group from flags. The datacenter is filled in after lookup.
pub fn build_template(args: &CreateArgs, user_data: Option<String>) -> Result<ScaleGroup, CliError> {
    let name = require(&args.name, "--name")?;
    let min = require(&args.min, "--min")?;
    let max = require(&args.max, "--max")?;
    let regional = require(&args.regional, "--regional")?;
    require(&args.datacenter, "--datacenter")?;
    let os = require(&args.os, "--os")?;
    let domain = require(&args.domain, "--domain")?;
    let hostname = require(&args.hostname, "--hostname")?;
    let cpu = require(&args.cpu, "--cpu")?;
    let memory = require(&args.memory, "--memory")?;

    let policies = policy(args)?.into_iter().collect();

    let mut guest = VirtualGuest {
        hostname: Some(hostname.clone()),
        domain: Some(domain.clone()),
        operating_system_reference_code: Some(os.clone()),
        start_cpus: Some(*cpu),
        max_memory: Some(*memory),
        block_devices: block_devices(&args.disks),
        local_disk_flag: Some(false),
        hourly_billing_flag: Some(true),
        private_network_only_flag: Some(false),
        network_components: vec![GuestNetworkComponent { max_speed: Some(100) }],
        type_id: Some(1),
        post_install_script_uri: args.postinstall.clone(),
        ..Default::default()
    };
    if let Some(data) = user_data {
        guest.user_data = vec![GuestAttribute { value: Some(data) }];
    }
    guest.ssh_keys = args
        .keys
        .iter()
        .map(|id| SshKey {
            id: Some(*id),
            ..Default::default()
        })
        .collect();

    let template = ScaleGroup {
        name: Some(name.clone()),
        cooldown: args.cooldown,
        minimum_member_count: Some(*min),
        maximum_member_count: Some(*max),
        regional_group_id: Some(*regional),
        termination_policy_id: args.termination_policy,
        suspended_flag: Some(false),
        balanced_termination_flag: Some(false),
        virtual_guest_member_template: Some(guest),
        virtual_guest_member_count: Some(0),
        policies,
        ..Default::default()
    };
    debug!("Scale group template: {:?}", template);
    Ok(template)
}

/// The policy flags come as a group: all three or none.
fn policy(args: &CreateArgs) -> Result<Option<ScalePolicy>, CliError> {
    if args.policy_relative.is_none() && args.policy_amount.is_none() && args.policy_name.is_none() {
        return Ok(None);
    }
    let scale_type = require(&args.policy_relative, "--policy-relative")?;
    let amount = require(&args.policy_amount, "--policy-amount")?;
    let name = require(&args.policy_name, "--policy-name")?;
    Ok(Some(ScalePolicy {
        name: Some(name.clone()),
        scale_actions: vec![ScalePolicyAction {
            amount: Some(*amount),
            scale_type: Some(scale_type.clone()),
            ..Default::default()
        }],
        ..Default::default()
    }))
}

fn block_devices(disks: &[u64]) -> Vec<BlockDevice> {
    let mut device = 0;
    disks
        .iter()
        .map(|capacity| {
            if device == RESERVED_DEVICE {
                device += 1;
            }
            let block = BlockDevice {
                device: Some(device.to_string()),
                disk_image: Some(DiskImage {
                    capacity: Some(*capacity),
                }),
            };
            device += 1;
            block
        })
        .collect()
}

/// Short name first, then long name. Exactly one datacenter must match.
async fn resolve_datacenter(managers: &Managers, name: &str) -> Result<u64, CliError> {
    let action = format!("Failed to get Datacenter {}.", name);

    let mut found = managers
        .autoscale
        .get_datacenter_by_name(name, DatacenterName::Short)
        .await
        .map_err(|e| CliError::api(action.clone(), e))?;
    if found.is_empty() {
        found = managers
            .autoscale
            .get_datacenter_by_name(name, DatacenterName::Long)
            .await
            .map_err(|e| CliError::api(action.clone(), e))?;
    }
    match found.as_slice() {
        [location] => location.id.ok_or(CliError::Remote(action)),
        _ => Err(CliError::Remote(action)),
    }
}
