use anyhow::Result;
use log::debug;

use super::HARDWARE_ID_FIELD;
use crate::api::Managers;
use crate::api::models::{HardwareNetworkComponent, NetworkVlan};
use crate::cli::pipeline::{Context, resolve_id};
use crate::error::CliError;
use crate::ui::{Table, or_empty, str_or_empty};

const COMPONENTS_MASK: &str = "mask[id,hostname,domain,\
frontendNetworkComponents[id,name,port,macAddress,primaryIpAddress],\
backendNetworkComponents[id,name,port,macAddress,primaryIpAddress]]";

pub async fn vlan_add_command(args: &[String], ctx: &mut Context<'_>) -> Result<()> {
    if args.len() < 2 {
        return Err(CliError::usage("This command requires two or more arguments.").into());
    }
    let hardware_id = resolve_id(&args[0], HARDWARE_ID_FIELD)?;
    let vlan_ids = args[1..]
        .iter()
        .map(|raw| resolve_id(raw, "VLAN ID"))
        .collect::<Result<Vec<_>, _>>()?;

    let managers = ctx.managers()?;
    let hardware = managers
        .hardware
        .get_hardware(hardware_id, Some(COMPONENTS_MASK))
        .await
        .map_err(|e| CliError::api(format!("Failed to get hardware server: {}.", hardware_id), e))?;

    let mut public = Vec::new();
    let mut private = Vec::new();
    for vlan_id in vlan_ids {
        let vlan = managers
            .network
            .get_vlan(vlan_id)
            .await
            .map_err(|e| CliError::api(format!("Failed to get VLAN: {}.", vlan_id), e))?;
        if vlan.network_space.as_deref() == Some("PUBLIC") {
            public.push(vlan);
        } else {
            private.push(vlan);
        }
    }

    // Public VLANs can only go on a frontend component.
    let mut table = Table::new(["Id", "VLAN", "Network"]);
    for (vlans, components) in [
        (&public, &hardware.frontend_network_components),
        (&private, &hardware.backend_network_components),
    ] {
        for vlan in trunk(managers, vlans, components).await? {
            table.add([
                or_empty(vlan.id),
                or_empty(vlan.vlan_number),
                str_or_empty(vlan.name.as_deref()),
            ]);
        }
    }
    ctx.ui.print_table(&table, ctx.output);
    Ok(())
}

/// Trunk onto the first component that has a primary IP address.
async fn trunk(
    managers: &Managers,
    vlans: &[NetworkVlan],
    components: &[HardwareNetworkComponent],
) -> Result<Vec<NetworkVlan>, CliError> {
    if vlans.is_empty() {
        return Ok(Vec::new());
    }
    let Some(component_id) = components
        .iter()
        .find(|c| c.primary_ip_address.is_some())
        .and_then(|c| c.id)
    else {
        debug!("No network component with a primary IP for {} VLANs", vlans.len());
        return Ok(Vec::new());
    };
    managers
        .hardware
        .trunk_vlans(component_id, vlans)
        .await
        .map_err(|e| CliError::api(format!("Failed to add VLANs to network component {}.", component_id), e))
}
