use anyhow::Result;
use chrono::NaiveDate;

use super::GROUP_ID_FIELD;
use crate::cli::pipeline::{Context, format_time, single_id};
use crate::error::CliError;
use crate::ui::{Table, str_or_empty};

pub async fn logs_command(args: &[String], date_min: Option<String>, ctx: &mut Context<'_>) -> Result<()> {
    let group_id = single_id(args, GROUP_ID_FIELD)?;
    if let Some(date) = &date_min {
        NaiveDate::parse_from_str(date, "%Y-%m-%d").map_err(|_| {
            CliError::usage(format!("Invalid date '{}' for --date-min, expected YYYY-MM-DD.", date))
        })?;
    }

    let managers = ctx.managers()?;
    let logs = managers
        .autoscale
        .get_logs(group_id, date_min.as_deref())
        .await
        .map_err(|e| CliError::api("Failed to get logs of Auto Scale Group.", e))?;

    let mut table = Table::new(["Date", "Entry"]);
    for log in &logs {
        table.add([format_time(log.create_date.as_deref()), str_or_empty(log.description.as_deref())]);
    }
    ctx.ui.print_table(&table, ctx.output);
    Ok(())
}
