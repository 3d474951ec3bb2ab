//! Selectable columns of `hardware list`.
//!
//! Each column knows the object mask property it needs, how to render a
//! cell and how to compare two servers when it is the sort key.

use crate::api::models::Hardware;
use crate::cli::pipeline::format_time;
use crate::error::CliError;
use crate::ui::{or_empty, str_or_empty};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Column {
    pub name: &'static str,
    pub mask: &'static str,
    pub default: bool,
    pub sortable: bool,
}

const fn column(name: &'static str, mask: &'static str, default: bool, sortable: bool) -> Column {
    Column {
        name,
        mask,
        default,
        sortable,
    }
}

pub const COLUMNS: &[Column] = &[
    column("id", "id", true, true),
    column("hostname", "hostname", true, true),
    column("domain", "domain", true, true),
    column("public_ip", "primaryIpAddress", true, true),
    column("private_ip", "primaryBackendIpAddress", true, true),
    column("datacenter", "datacenter[name]", true, true),
    column("status", "hardwareStatus[status]", true, true),
    column("guid", "globalIdentifier", false, true),
    column("cpu", "processorPhysicalCoreAmount", false, true),
    column("memory", "memoryCapacity", false, true),
    column(
        "os",
        "operatingSystem[softwareLicense[softwareDescription[name,version]]]",
        false,
        true,
    ),
    column("ipmi_ip", "networkManagementIpAddress", false, true),
    column("created", "provisionDate", false, true),
    column("created_by", "billingItem[orderItem[order[userRecord[username]]]]", false, true),
    column("tags", "tagReferences[tag[name]]", false, false),
];

pub fn find(name: &str) -> Option<&'static Column> {
    COLUMNS.iter().find(|c| c.name == name)
}

pub fn default_columns() -> Vec<&'static Column> {
    COLUMNS.iter().filter(|c| c.default).collect()
}

/// Resolve `--column` values (defaults when none given) and `--sortby`.
pub fn select(requested: &[String], sort_by: &str) -> Result<(Vec<&'static Column>, &'static Column), CliError> {
    let sort = find(sort_by)
        .filter(|c| c.sortable)
        .ok_or_else(|| CliError::usage(format!("--sortby '{}' is not supported.", sort_by)))?;

    if requested.is_empty() {
        return Ok((default_columns(), sort));
    }
    let mut columns = Vec::new();
    for name in requested.iter().flat_map(|r| r.split(',')).map(str::trim) {
        let column = find(name).ok_or_else(|| CliError::usage(format!("--column {} is not supported.", name)))?;
        if !columns.contains(&column) {
            columns.push(column);
        }
    }
    Ok((columns, sort))
}

/// Object mask covering the shown columns plus the sort key.
pub fn object_mask(columns: &[&Column], sort: &Column) -> String {
    let mut parts: Vec<&str> = columns.iter().map(|c| c.mask).collect();
    if !parts.contains(&sort.mask) {
        parts.push(sort.mask);
    }
    format!("mask[{}]", parts.join(","))
}

pub fn cell(hardware: &Hardware, column: &Column) -> String {
    match column.name {
        "id" => or_empty(hardware.id),
        "hostname" => str_or_empty(hardware.hostname.as_deref()),
        "domain" => str_or_empty(hardware.domain.as_deref()),
        "public_ip" => str_or_empty(hardware.primary_ip_address.as_deref()),
        "private_ip" => str_or_empty(hardware.primary_backend_ip_address.as_deref()),
        "datacenter" => str_or_empty(hardware.datacenter_name()),
        "status" => str_or_empty(hardware.status()),
        "guid" => str_or_empty(hardware.global_identifier.as_deref()),
        "cpu" => or_empty(hardware.processor_physical_core_amount),
        "memory" => or_empty(hardware.memory_capacity),
        "os" => str_or_empty(hardware.os_description().and_then(|d| d.name.as_deref())),
        "ipmi_ip" => str_or_empty(hardware.network_management_ip_address.as_deref()),
        "created" => format_time(hardware.provision_date.as_deref()),
        "created_by" => str_or_empty(hardware.owner()),
        "tags" => {
            let tags = hardware.tag_names();
            if tags.is_empty() { str_or_empty(None) } else { tags }
        }
        _ => str_or_empty(None),
    }
}

/// Sort key of a server. Missing values sort first.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub enum SortValue {
    Missing,
    Number(u64),
    Text(String),
}

impl From<Option<u64>> for SortValue {
    fn from(value: Option<u64>) -> Self {
        value.map_or(SortValue::Missing, SortValue::Number)
    }
}

impl From<Option<&str>> for SortValue {
    fn from(value: Option<&str>) -> Self {
        value.map_or(SortValue::Missing, |v| SortValue::Text(v.to_string()))
    }
}

pub fn sort_value(hardware: &Hardware, column: &Column) -> SortValue {
    match column.name {
        "id" => hardware.id.into(),
        "cpu" => hardware.processor_physical_core_amount.into(),
        "memory" => hardware.memory_capacity.into(),
        "hostname" => hardware.hostname.as_deref().into(),
        "domain" => hardware.domain.as_deref().into(),
        "public_ip" => hardware.primary_ip_address.as_deref().into(),
        "private_ip" => hardware.primary_backend_ip_address.as_deref().into(),
        "datacenter" => hardware.datacenter_name().into(),
        "status" => hardware.status().into(),
        "guid" => hardware.global_identifier.as_deref().into(),
        "os" => hardware.os_description().and_then(|d| d.name.as_deref()).into(),
        "ipmi_ip" => hardware.network_management_ip_address.as_deref().into(),
        "created" => hardware.provision_date.as_deref().into(),
        "created_by" => hardware.owner().into(),
        _ => SortValue::Missing,
    }
}

/// Stable ascending sort on `column`.
pub fn sort(servers: &mut [Hardware], column: &Column) {
    servers.sort_by_key(|s| sort_value(s, column));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn server(id: u64, hostname: &str, memory: Option<u64>) -> Hardware {
        Hardware {
            id: Some(id),
            hostname: Some(hostname.to_string()),
            memory_capacity: memory,
            ..Default::default()
        }
    }

    #[test]
    fn test_defaults_when_no_columns_requested() {
        let (columns, sort) = select(&[], "hostname").unwrap();
        let names: Vec<&str> = columns.iter().map(|c| c.name).collect();
        assert_eq!(
            names,
            ["id", "hostname", "domain", "public_ip", "private_ip", "datacenter", "status"]
        );
        assert_eq!(sort.name, "hostname");
    }

    #[test]
    fn test_unsupported_values() {
        let err = select(&[], "flavor").unwrap_err();
        assert_eq!(err.to_string(), "Incorrect Usage: --sortby 'flavor' is not supported.");

        let err = select(&[], "tags").unwrap_err();
        assert_eq!(err.to_string(), "Incorrect Usage: --sortby 'tags' is not supported.");

        let err = select(&["id".into(), "colour".into()], "id").unwrap_err();
        assert_eq!(err.to_string(), "Incorrect Usage: --column colour is not supported.");
    }

    #[test]
    fn test_mask_adds_hidden_sort_column() {
        let (columns, sort) = select(&["id,hostname".into()], "memory").unwrap();
        assert_eq!(object_mask(&columns, sort), "mask[id,hostname,memoryCapacity]");

        let (columns, sort) = select(&["id".into()], "id").unwrap();
        assert_eq!(object_mask(&columns, sort), "mask[id]");
    }

    #[test]
    fn test_numeric_sort_is_stable_and_missing_first() {
        let mut servers = vec![
            server(1, "c", Some(64)),
            server(2, "b", None),
            server(3, "a", Some(16)),
            server(4, "d", Some(64)),
        ];
        sort(&mut servers, find("memory").unwrap());
        let ids: Vec<u64> = servers.iter().filter_map(|s| s.id).collect();
        assert_eq!(ids, [2, 3, 1, 4]);

        sort(&mut servers, find("hostname").unwrap());
        let names: Vec<&str> = servers.iter().filter_map(|s| s.hostname.as_deref()).collect();
        assert_eq!(names, ["a", "b", "c", "d"]);
    }

    #[test]
    fn test_id_sorts_numerically() {
        let mut servers = vec![server(10, "x", None), server(9, "y", None)];
        sort(&mut servers, find("id").unwrap());
        assert_eq!(servers[0].id, Some(9));
    }
}
