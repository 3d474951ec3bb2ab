use anyhow::Result;
use log::info;

use super::{CreateCredentialArgs, HARDWARE_ID_FIELD};
use crate::api::models::{Hardware, SoftwarePassword};
use crate::cli::pipeline::{Context, format_time, single_id};
use crate::error::CliError;
use crate::ui::{Table, or_empty, str_or_empty};

const CREDENTIALS_MASK: &str = "mask[id,operatingSystem[passwords[username,password]]]";
const SOFTWARE_MASK: &str = "mask[softwareComponents[softwareLicense[softwareDescription]]]";

pub async fn credentials_command(args: &[String], ctx: &mut Context<'_>) -> Result<()> {
    let hardware_id = single_id(args, HARDWARE_ID_FIELD)?;

    let managers = ctx.managers()?;
    let hardware = managers
        .hardware
        .get_hardware(hardware_id, Some(CREDENTIALS_MASK))
        .await
        .map_err(|e| CliError::api(format!("Failed to get hardware server {}.", hardware_id), e))?;

    let passwords = hardware
        .operating_system
        .map(|os| os.passwords)
        .unwrap_or_default();
    if passwords.is_empty() {
        return Err(CliError::Remote(format!("Failed to find credentials of hardware server {}.", hardware_id)).into());
    }

    let mut table = Table::new(["Username", "Password"]);
    for password in &passwords {
        table.add([
            str_or_empty(password.username.as_deref()),
            str_or_empty(password.password.as_deref()),
        ]);
    }
    ctx.ui.print_table(&table, ctx.output);
    Ok(())
}

pub async fn create_credential_command(args: CreateCredentialArgs, ctx: &mut Context<'_>) -> Result<()> {
    let hardware_id = single_id(&args.args, "Hardware ID")?;
    let username = args.username.ok_or_else(|| CliError::missing_input("-U|--username"))?;
    let password = args.password.ok_or_else(|| CliError::missing_input("-P|--password"))?;
    let software = args.software.ok_or_else(|| CliError::missing_input("-s|--software"))?;

    let managers = ctx.managers()?;
    let hardware = managers
        .hardware
        .get_hardware(hardware_id, Some(SOFTWARE_MASK))
        .await
        .map_err(|e| CliError::api(format!("Failed to get hardware server: {}.", hardware_id), e))?;
    let software_id = find_software(&hardware, &software).ok_or_else(|| CliError::usage("Software not found"))?;

    let template = SoftwarePassword {
        software_id: Some(software_id),
        username: Some(username),
        password: Some(password),
        notes: Some(args.notes.unwrap_or_default()),
        ..Default::default()
    };
    let created = managers
        .hardware
        .create_software_credential(&template)
        .await
        .map_err(|e| CliError::api("Failed to create Software Credential.", e))?;
    info!("Created credential {:?} on software {}", created.id, software_id);

    let mut table = Table::new(["Name", "Value"]);
    table.add(["Software Credential Id".to_string(), or_empty(created.id)]);
    table.add(["Created".to_string(), format_time(created.create_date.as_deref())]);
    table.add(["Username".to_string(), str_or_empty(created.username.as_deref())]);
    table.add(["Password".to_string(), str_or_empty(created.password.as_deref())]);
    table.add(["Notes".to_string(), str_or_empty(created.notes.as_deref())]);
    ctx.ui.print_table(&table, ctx.output);
    Ok(())
}

/// Software component id by case-insensitive name. The last match wins.
fn find_software(hardware: &Hardware, name: &str) -> Option<u64> {
    let wanted = name.trim().to_lowercase();
    hardware
        .software_components
        .iter()
        .filter(|c| c.software_name().map(str::to_lowercase).as_deref() == Some(wanted.as_str()))
        .filter_map(|c| c.id)
        .last()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_find_software_ignores_case() {
        let hardware: Hardware = serde_json::from_value(json!({
            "softwareComponents": [
                { "id": 1, "softwareLicense": { "softwareDescription": { "name": "Ubuntu" } } },
                { "id": 2, "softwareLicense": { "softwareDescription": { "name": "MySQL" } } },
                { "id": 3 }
            ]
        }))
        .unwrap();
        assert_eq!(find_software(&hardware, " mysql "), Some(2));
        assert_eq!(find_software(&hardware, "UBUNTU"), Some(1));
        assert_eq!(find_software(&hardware, "windows"), None);
    }
}
