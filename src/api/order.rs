//! Bare metal order generation
//!
//! Turns the flat [`HardwareTemplate`] a user supplies (via flags or an
//! imported template file) into a `SoftLayer_Container_Product_Order` by
//! picking prices out of the ordering package.

use serde::{Deserialize, Serialize};

use super::models::{ItemPrice, OrderHost, OrderSshKeys, ProductItem, ProductOrder, ProductPackage, Region};
use crate::error::CliError;

/// Categories that always get their free price added.
pub const DEFAULT_CATEGORIES: [&str; 3] = ["pri_ip_addresses", "vpn_management", "remote_management"];

const ORDER_COMPLEX_TYPE: &str = "SoftLayer_Container_Product_Order_Hardware_Server";

/// The flat document written by `--export` and read by `--template`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HardwareTemplate {
    pub size: String,
    pub hostname: String,
    pub domain: String,
    pub os_name: String,
    pub datacenter: String,
    pub port_speed: u64,
    #[serde(default = "default_billing")]
    pub billing: String,
    #[serde(default)]
    pub no_public: bool,
    #[serde(default, rename = "postInstallURL", skip_serializing_if = "Option::is_none")]
    pub post_install_url: Option<String>,
    #[serde(default)]
    pub ssh_keys: Vec<u64>,
    #[serde(default)]
    pub extras: Vec<String>,
}

fn default_billing() -> String {
    "hourly".to_string()
}

impl HardwareTemplate {
    pub fn is_hourly(&self) -> bool {
        self.billing == "hourly"
    }
}

fn matches_billing(price: &ItemPrice, hourly: bool) -> bool {
    if hourly {
        price.hourly_recurring_fee.is_some()
    } else {
        price.recurring_fee.is_some()
    }
}

fn matches_location(price: &ItemPrice, region: &Region) -> bool {
    let Some(group_id) = price.location_group_id else {
        return true;
    };
    region
        .datacenter()
        .map(|dc| dc.price_groups.iter().any(|g| g.id == Some(group_id)))
        .unwrap_or(false)
}

pub fn is_private_port_speed_item(item: &ProductItem) -> bool {
    item.has_attribute("IS_PRIVATE_NETWORK_ONLY")
}

pub fn is_bonded(item: &ProductItem) -> bool {
    !item.has_attribute("NON_LACP")
}

/// Find the package region whose datacenter short name is `name`.
pub fn get_location<'a>(package: &'a ProductPackage, name: &str) -> Result<&'a Region, CliError> {
    package
        .regions
        .iter()
        .find(|r| r.datacenter().and_then(|dc| dc.name.as_deref()) == Some(name))
        .ok_or_else(|| CliError::Invalid("Invalid datacenter name specified.".to_string()))
}

pub fn get_preset_id(package: &ProductPackage, size: &str) -> Result<u64, CliError> {
    package
        .active_presets
        .iter()
        .find(|p| p.key_name.as_deref() == Some(size))
        .and_then(|p| p.id)
        .ok_or_else(|| CliError::Invalid(format!("Could not find valid size for: {}", size)))
}

/// First price among `items` (in order) accepted by `accept`.
fn first_price<'a, I, F>(items: I, mut accept: F) -> Option<u64>
where
    I: IntoIterator<Item = &'a ProductItem>,
    F: FnMut(&ItemPrice) -> bool,
{
    items
        .into_iter()
        .flat_map(|item| item.prices.iter())
        .find(|price| accept(price))
        .and_then(|price| price.id)
}

pub fn get_default_price_id(items: &[ProductItem], category: &str, hourly: bool, region: &Region) -> Result<u64, CliError> {
    first_price(
        items.iter().filter(|i| i.category_code() == Some(category)),
        |p| {
            p.recurring_fee == Some(0.0)
                && p.hourly_recurring_fee == Some(0.0)
                && matches_billing(p, hourly)
                && matches_location(p, region)
        },
    )
    .ok_or_else(|| CliError::Invalid(format!("Could not find valid price for {} option", category)))
}

pub fn get_os_price_id(items: &[ProductItem], os: &str, region: &Region) -> Result<u64, CliError> {
    first_price(
        items.iter().filter(|i| {
            i.category_code() == Some("os")
                && i.software_description.as_ref().and_then(|d| d.reference_code.as_deref()) == Some(os)
        }),
        |p| matches_location(p, region),
    )
    .ok_or_else(|| CliError::Invalid(format!("Could not find valid price for os {}", os)))
}

/// Hourly or private-only servers take the zero capacity (unmetered) bandwidth item.
pub fn get_bandwidth_price_id(items: &[ProductItem], hourly: bool, no_public: bool, region: &Region) -> Result<u64, CliError> {
    let wants_zero = hourly || no_public;
    first_price(
        items.iter().filter(|i| {
            let capacity = i.capacity.unwrap_or(0.0);
            i.category_code() == Some("bandwidth") && (capacity == 0.0) == wants_zero
        }),
        |p| matches_billing(p, hourly) && matches_location(p, region),
    )
    .ok_or_else(|| CliError::Invalid("Could not find valid price for bandwidth option".to_string()))
}

pub fn get_port_speed_price_id(items: &[ProductItem], port_speed: u64, no_public: bool, region: &Region) -> Result<u64, CliError> {
    first_price(
        items.iter().filter(|i| {
            i.category_code() == Some("port_speed")
                && i.capacity == Some(port_speed as f64)
                && is_private_port_speed_item(i) == no_public
                && is_bonded(i)
        }),
        |p| matches_location(p, region),
    )
    .ok_or_else(|| CliError::Invalid(format!("Could not find valid price for port speed: {}", port_speed)))
}

pub fn get_extra_price_id(items: &[ProductItem], key_name: &str, hourly: bool, region: &Region) -> Result<u64, CliError> {
    first_price(
        items.iter().filter(|i| i.key_name.as_deref() == Some(key_name)),
        |p| matches_billing(p, hourly) && matches_location(p, region),
    )
    .ok_or_else(|| CliError::Invalid(format!("Could not find valid price for extra option {}", key_name)))
}

/// Build the order container for `template` out of `package`.
pub fn generate_create_template(package: &ProductPackage, template: &HardwareTemplate) -> Result<ProductOrder, CliError> {
    let hourly = template.is_hourly();
    let region = get_location(package, &template.datacenter)?;
    let items = &package.items;

    let mut price_ids = Vec::new();
    for category in DEFAULT_CATEGORIES {
        price_ids.push(get_default_price_id(items, category, hourly, region)?);
    }
    price_ids.push(get_os_price_id(items, &template.os_name, region)?);
    price_ids.push(get_bandwidth_price_id(items, hourly, template.no_public, region)?);
    price_ids.push(get_port_speed_price_id(items, template.port_speed, template.no_public, region)?);
    for extra in &template.extras {
        price_ids.push(get_extra_price_id(items, extra, hourly, region)?);
    }

    let mut order = ProductOrder {
        complex_type: Some(ORDER_COMPLEX_TYPE.to_string()),
        hardware: vec![OrderHost {
            hostname: Some(template.hostname.clone()),
            domain: Some(template.domain.clone()),
        }],
        location: region.keyname.clone(),
        prices: price_ids.into_iter().map(ItemPrice::with_id).collect(),
        package_id: package.id,
        preset_id: Some(get_preset_id(package, &template.size)?),
        use_hourly_pricing: Some(hourly),
        ..Default::default()
    };
    if let Some(url) = &template.post_install_url {
        order.provision_scripts = vec![url.clone()];
    }
    if !template.ssh_keys.is_empty() {
        order.ssh_keys = vec![OrderSshKeys {
            ssh_key_ids: template.ssh_keys.clone(),
        }];
    }
    Ok(order)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn package() -> ProductPackage {
        serde_json::from_value(json!({
            "id": 200,
            "activePresets": [ { "id": 64, "keyName": "S1270_32GB" } ],
            "regions": [ {
                "keyname": "DALLAS13",
                "location": { "location": { "name": "dal13", "priceGroups": [ { "id": 7 } ] } }
            } ],
            "items": [
                { "keyName": "IP", "itemCategory": { "categoryCode": "pri_ip_addresses" },
                  "prices": [ { "id": 1, "recurringFee": "0", "hourlyRecurringFee": "0" } ] },
                { "keyName": "VPN", "itemCategory": { "categoryCode": "vpn_management" },
                  "prices": [ { "id": 2, "recurringFee": "0", "hourlyRecurringFee": "0" } ] },
                { "keyName": "REBOOT", "itemCategory": { "categoryCode": "remote_management" },
                  "prices": [
                      { "id": 30, "recurringFee": "0", "hourlyRecurringFee": "0", "locationGroupId": 99 },
                      { "id": 3, "recurringFee": "0", "hourlyRecurringFee": "0", "locationGroupId": 7 }
                  ] },
                { "keyName": "OS_UBUNTU", "itemCategory": { "categoryCode": "os" },
                  "softwareDescription": { "referenceCode": "UBUNTU_20_64" },
                  "prices": [ { "id": 4, "recurringFee": "0" } ] },
                { "keyName": "BANDWIDTH_500", "capacity": "500", "itemCategory": { "categoryCode": "bandwidth" },
                  "prices": [ { "id": 50, "recurringFee": "0" } ] },
                { "keyName": "BANDWIDTH_0", "capacity": "0", "itemCategory": { "categoryCode": "bandwidth" },
                  "prices": [ { "id": 5, "recurringFee": "0", "hourlyRecurringFee": "0" } ] },
                { "keyName": "1G_UNBONDED", "capacity": "1000", "itemCategory": { "categoryCode": "port_speed" },
                  "attributes": [ { "attributeTypeKeyName": "NON_LACP" } ],
                  "prices": [ { "id": 60 } ] },
                { "keyName": "1G_BONDED", "capacity": "1000", "itemCategory": { "categoryCode": "port_speed" },
                  "prices": [ { "id": 6 } ] },
                { "keyName": "EXTRA_DISK", "itemCategory": { "categoryCode": "disk1" },
                  "prices": [ { "id": 8, "hourlyRecurringFee": "0.1" } ] }
            ]
        }))
        .unwrap()
    }

    fn template() -> HardwareTemplate {
        HardwareTemplate {
            size: "S1270_32GB".into(),
            hostname: "web1".into(),
            domain: "example.com".into(),
            os_name: "UBUNTU_20_64".into(),
            datacenter: "dal13".into(),
            port_speed: 1000,
            billing: "hourly".into(),
            no_public: false,
            post_install_url: None,
            ssh_keys: vec![],
            extras: vec!["EXTRA_DISK".into()],
        }
    }

    #[test]
    fn test_generate_picks_expected_prices() {
        let order = generate_create_template(&package(), &template()).unwrap();
        let ids: Vec<u64> = order.prices.iter().filter_map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5, 6, 8]);
        assert_eq!(order.location.as_deref(), Some("DALLAS13"));
        assert_eq!(order.preset_id, Some(64));
        assert_eq!(order.package_id, Some(200));
        assert_eq!(order.use_hourly_pricing, Some(true));
        assert!(order.ssh_keys.is_empty());
    }

    #[test]
    fn test_monthly_public_takes_metered_bandwidth() {
        let mut t = template();
        t.billing = "monthly".into();
        t.extras.clear();
        let order = generate_create_template(&package(), &t).unwrap();
        assert!(order.prices.iter().any(|p| p.id == Some(50)));
    }

    #[test]
    fn test_unknown_datacenter() {
        let mut t = template();
        t.datacenter = "ams01".into();
        let err = generate_create_template(&package(), &t).unwrap_err();
        assert_eq!(err.to_string(), "Invalid datacenter name specified.");
    }

    #[test]
    fn test_unknown_size() {
        let mut t = template();
        t.size = "HUGE".into();
        let err = generate_create_template(&package(), &t).unwrap_err();
        assert_eq!(err.to_string(), "Could not find valid size for: HUGE");
    }

    #[test]
    fn test_template_json_is_flat() {
        let mut t = template();
        t.post_install_url = Some("https://example.com/setup.sh".into());
        let value = serde_json::to_value(&t).unwrap();
        assert_eq!(value["osName"], json!("UBUNTU_20_64"));
        assert_eq!(value["postInstallURL"], json!("https://example.com/setup.sh"));
        assert_eq!(value["portSpeed"], json!(1000));
    }
}
