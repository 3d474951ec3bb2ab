use anyhow::Result;
use log::warn;

use super::HARDWARE_ID_FIELD;
use crate::api::models::HardwareNotification;
use crate::cli::pipeline::{Context, single_id};
use crate::error::CliError;
use crate::ui::{Table, or_empty, str_or_empty};

fn notification_table() -> Table {
    Table::new(["Id", "Username", "Email", "FirstName", "LastName"])
}

fn add_row(table: &mut Table, notification: &HardwareNotification) {
    let user = notification.user.as_ref();
    table.add([
        or_empty(notification.id),
        str_or_empty(user.and_then(|u| u.username.as_deref())),
        str_or_empty(user.and_then(|u| u.email.as_deref())),
        str_or_empty(user.and_then(|u| u.first_name.as_deref())),
        str_or_empty(user.and_then(|u| u.last_name.as_deref())),
    ]);
}

pub async fn notifications_command(args: &[String], ctx: &mut Context<'_>) -> Result<()> {
    let hardware_id = single_id(args, HARDWARE_ID_FIELD)?;

    let managers = ctx.managers()?;
    let notifications = managers
        .hardware
        .get_notifications(hardware_id)
        .await
        .map_err(|e| CliError::api("Failed to get User Customer Notifications.", e))?;

    let mut table = notification_table();
    for notification in &notifications {
        add_row(&mut table, notification);
    }
    ctx.ui.print_table(&table, ctx.output);
    Ok(())
}

/// One notification per user. A failing user is reported and skipped.
pub async fn notifications_add_command(args: &[String], users: &[u64], ctx: &mut Context<'_>) -> Result<()> {
    let hardware_id = single_id(args, HARDWARE_ID_FIELD)?;
    if users.is_empty() {
        return Err(CliError::missing_input("--users").into());
    }

    let managers = ctx.managers()?;
    let mut table = notification_table();
    for user_id in users {
        match managers.hardware.create_notification(hardware_id, *user_id).await {
            Ok(notification) => add_row(&mut table, &notification),
            Err(e) => {
                warn!("Notification for user {} on hardware {} failed: {}", user_id, hardware_id, e);
                ctx.ui.failed(&format!(
                    "Failed to create User Customer Notification for user {}.\n{}",
                    user_id, e
                ));
            }
        }
    }

    if table.is_empty() {
        return Err(CliError::Remote(format!(
            "Failed to create User Customer Notifications for hardware server {}.",
            hardware_id
        ))
        .into());
    }
    ctx.ui.print_table(&table, ctx.output);
    Ok(())
}
