use anyhow::Result;
use log::warn;

use super::GROUP_ID_FIELD;
use crate::cli::pipeline::{Context, single_id};
use crate::error::CliError;
use crate::api::models::ScaleMember;
use crate::ui::{Table, str_or_empty};

pub async fn tag_command(args: &[String], tags: Option<String>, ctx: &mut Context<'_>) -> Result<()> {
    let group_id = single_id(args, GROUP_ID_FIELD)?;
    let tags = tags.ok_or_else(|| CliError::missing_input("-g|--tags"))?;

    let managers = ctx.managers()?;
    let members = managers
        .autoscale
        .get_virtual_guest_members(group_id)
        .await
        .map_err(|e| CliError::api("Failed to get virtual guest members.", e))?;

    let mut table = Table::new(["Id", "Hostname", "Tags"]);
    let mut failures = 0;
    for member in &members {
        let guest = member.virtual_guest.as_ref();
        let Some(guest_id) = member.virtual_guest_id.or(guest.and_then(|g| g.id)) else {
            failures += 1;
            warn!("Scale member {:?} of group {} has no virtual guest", member.id, group_id);
            ctx.ui.failed(&missing_guest_message(member));
            continue;
        };
        match managers.virtual_server.set_tags(guest_id, &tags).await {
            Ok(()) => table.add([
                guest_id.to_string(),
                str_or_empty(guest.and_then(|g| g.hostname.as_deref())),
                tags.clone(),
            ]),
            Err(e) => {
                warn!("Tagging guest {} failed: {}", guest_id, e);
                failures += 1;
                ctx.ui.failed(&format!("Failed to set tags for virtual guest {}.\n{}", guest_id, e));
            }
        }
    }

    if failures > 0 && table.is_empty() {
        return Err(CliError::Remote(format!(
            "Failed to set tags for the guests of Auto Scale Group {}.",
            group_id
        ))
        .into());
    }
    ctx.ui.print_table(&table, ctx.output);
    Ok(())
}

fn missing_guest_message(member: &ScaleMember) -> String {
    match member.id {
        Some(id) => format!("Failed to set tags for scale member {}: no virtual guest ID.", id),
        None => "Failed to set tags for a scale member with no virtual guest ID.".to_string(),
    }
}
