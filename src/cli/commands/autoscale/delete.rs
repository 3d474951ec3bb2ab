use anyhow::Result;
use log::info;

use super::GROUP_ID_FIELD;
use crate::cli::pipeline::{Context, confirm_or_abort, single_id};
use crate::error::CliError;

pub async fn delete_command(args: &[String], force: bool, ctx: &mut Context<'_>) -> Result<()> {
    let group_id = single_id(args, GROUP_ID_FIELD)?;

    let prompt = format!(
        "This will delete Auto Scale Group: {} and cannot be undone. Continue?",
        group_id
    );
    if !confirm_or_abort(ctx.ui, force, &prompt)? {
        return Ok(());
    }

    let managers = ctx.managers()?;
    let deleted = managers
        .autoscale
        .delete(group_id)
        .await
        .map_err(|e| CliError::api("Failed to delete Auto Scale Group.", e))?;

    info!("Scale group {} deleted: {}", group_id, deleted);
    if deleted {
        ctx.ui.ok();
        ctx.ui.print("Auto Scale Group was deleted successfully");
    }
    Ok(())
}
