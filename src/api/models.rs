//! Data types exchanged with the SoftLayer API.
//!
//! Every field is optional: the API only returns what the object mask asks
//! for, and request templates must only carry fields the user actually set.

use serde::{Deserialize, Deserializer, Serialize};

/// SoftLayer encodes decimal amounts and capacities as JSON strings.
fn lenient_f64<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Number {
        Float(f64),
        Text(String),
    }

    match Option::<Number>::deserialize(deserializer)? {
        None => Ok(None),
        Some(Number::Float(f)) => Ok(Some(f)),
        Some(Number::Text(s)) if s.trim().is_empty() => Ok(None),
        Some(Number::Text(s)) => s.trim().parse().map(Some).map_err(serde::de::Error::custom),
    }
}

// ---------------------------------------------------------------------------
// Locations and network

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub long_name: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub price_groups: Vec<LocationGroup>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationGroup {
    pub id: Option<u64>,
    pub name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NetworkVlan {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vlan_number: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub network_space: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary_router: Option<Router>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Router {
    pub id: Option<u64>,
    pub hostname: Option<String>,
}

// ---------------------------------------------------------------------------
// Virtual guests

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VirtualGuest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hostname: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub domain: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_cpus: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_cpu: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_cpu_units: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_memory: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub local_disk_flag: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hourly_billing_flag: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub private_network_only_flag: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub datacenter: Option<Location>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub operating_system_reference_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub post_install_script_uri: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub user_data: Vec<GuestAttribute>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub ssh_keys: Vec<SshKey>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub block_devices: Vec<BlockDevice>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub network_components: Vec<GuestNetworkComponent>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub type_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub create_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provision_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub power_state: Option<NamedStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<NamedStatus>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GuestAttribute {
    pub value: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SshKey {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fingerprint: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlockDevice {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub device: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disk_image: Option<DiskImage>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiskImage {
    pub capacity: Option<u64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GuestNetworkComponent {
    pub max_speed: Option<u64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NamedStatus {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

// ---------------------------------------------------------------------------
// Autoscale

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScaleGroup {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cooldown: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub create_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_action_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub minimum_member_count: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub maximum_member_count: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub virtual_guest_member_count: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub regional_group_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub regional_group: Option<RegionalGroup>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub termination_policy_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub termination_policy: Option<NamedStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<NamedStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suspended_flag: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub balanced_termination_flag: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub virtual_guest_member_template: Option<VirtualGuest>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub virtual_guest_members: Vec<ScaleMember>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub policies: Vec<ScalePolicy>,
    #[serde(default, skip_serializing)]
    pub network_vlans: Vec<ScaleNetworkVlan>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegionalGroup {
    pub id: Option<u64>,
    pub name: Option<String>,
    #[serde(default)]
    pub locations: Vec<Location>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScaleMember {
    pub id: Option<u64>,
    pub create_date: Option<String>,
    pub virtual_guest_id: Option<u64>,
    pub virtual_guest: Option<VirtualGuest>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScalePolicy {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cooldown: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub create_date: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub scale_actions: Vec<ScalePolicyAction>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScalePolicyAction {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scale_type: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScaleNetworkVlan {
    pub network_vlan_id: Option<u64>,
    pub network_vlan: Option<NetworkVlan>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScaleGroupLog {
    pub id: Option<u64>,
    pub create_date: Option<String>,
    pub description: Option<String>,
}

// ---------------------------------------------------------------------------
// Hardware

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Hardware {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub global_identifier: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hostname: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub domain: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fully_qualified_domain_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hardware_status: Option<HardwareStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub processor_physical_core_amount: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub memory_capacity: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary_ip_address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary_backend_ip_address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub network_management_ip_address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub datacenter: Option<Location>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub operating_system: Option<OperatingSystem>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provision_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hourly_billing_flag: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub billing_item: Option<BillingItem>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tag_references: Vec<TagReference>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub network_vlans: Vec<NetworkVlan>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub frontend_network_components: Vec<HardwareNetworkComponent>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub backend_network_components: Vec<HardwareNetworkComponent>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub remote_management_accounts: Vec<SoftwarePassword>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub software_components: Vec<SoftwareComponent>,
}

impl Hardware {
    pub fn status(&self) -> Option<&str> {
        self.hardware_status.as_ref()?.status.as_deref()
    }

    pub fn datacenter_name(&self) -> Option<&str> {
        self.datacenter.as_ref()?.name.as_deref()
    }

    pub fn os_description(&self) -> Option<&SoftwareDescription> {
        self.operating_system
            .as_ref()?
            .software_license
            .as_ref()?
            .software_description
            .as_ref()
    }

    pub fn owner(&self) -> Option<&str> {
        self.billing_item
            .as_ref()?
            .order_item
            .as_ref()?
            .order
            .as_ref()?
            .user_record
            .as_ref()?
            .username
            .as_deref()
    }

    /// Tag names joined with commas, in API order.
    pub fn tag_names(&self) -> String {
        self.tag_references
            .iter()
            .filter_map(|r| r.tag.as_ref()?.name.clone())
            .collect::<Vec<_>>()
            .join(",")
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HardwareStatus {
    pub id: Option<u64>,
    pub status: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OperatingSystem {
    pub software_license: Option<SoftwareLicense>,
    #[serde(default)]
    pub passwords: Vec<SoftwarePassword>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SoftwareLicense {
    pub software_description: Option<SoftwareDescription>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SoftwareDescription {
    pub id: Option<u64>,
    pub manufacturer: Option<String>,
    pub name: Option<String>,
    pub version: Option<String>,
    pub reference_code: Option<String>,
    pub long_description: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SoftwareComponent {
    pub id: Option<u64>,
    pub software_license: Option<SoftwareLicense>,
    #[serde(default)]
    pub passwords: Vec<SoftwarePassword>,
}

impl SoftwareComponent {
    pub fn software_name(&self) -> Option<&str> {
        self.software_license
            .as_ref()?
            .software_description
            .as_ref()?
            .name
            .as_deref()
    }
}

/// Software or remote management credential.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SoftwarePassword {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub software_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub create_date: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BillingItem {
    pub id: Option<u64>,
    pub description: Option<String>,
    pub category_code: Option<String>,
    pub create_date: Option<String>,
    pub hourly_flag: Option<bool>,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub recurring_fee: Option<f64>,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub next_invoice_total_recurring_amount: Option<f64>,
    #[serde(default)]
    pub children: Vec<BillingItem>,
    #[serde(default)]
    pub next_invoice_children: Vec<BillingItem>,
    pub order_item: Option<OrderItem>,
    pub provision_transaction: Option<ProvisionTransaction>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProvisionTransaction {
    pub id: Option<u64>,
    pub create_date: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
    pub order: Option<Order>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: Option<u64>,
    pub user_record: Option<User>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TagReference {
    pub id: Option<u64>,
    pub tag: Option<Tag>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tag {
    pub id: Option<u64>,
    pub name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HardwareNetworkComponent {
    pub id: Option<u64>,
    pub name: Option<String>,
    pub port: Option<u64>,
    pub mac_address: Option<String>,
    pub primary_ip_address: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HardwareComponent {
    pub id: Option<u64>,
    pub hardware_component_model: Option<HardwareComponentModel>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HardwareComponentModel {
    pub long_description: Option<String>,
    #[serde(default)]
    pub firmwares: Vec<Firmware>,
    pub hardware_generic_component_model: Option<GenericComponentModel>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Firmware {
    pub version: Option<String>,
    pub create_date: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenericComponentModel {
    pub hardware_component_type: Option<NamedStatus>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VirtualHost {
    pub id: Option<u64>,
    #[serde(default)]
    pub guests: Vec<VirtualGuest>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: Option<u64>,
    pub username: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HardwareNotification {
    pub id: Option<u64>,
    pub hardware_id: Option<u64>,
    pub user_id: Option<u64>,
    pub user: Option<User>,
}

/// Fields accepted by `SoftLayer_Hardware_Server::editObject`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HardwareEdit {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hostname: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub domain: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

// ---------------------------------------------------------------------------
// Product ordering

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductPackage {
    pub id: Option<u64>,
    #[serde(default)]
    pub items: Vec<ProductItem>,
    #[serde(default)]
    pub active_presets: Vec<Preset>,
    #[serde(default)]
    pub regions: Vec<Region>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductItem {
    pub id: Option<u64>,
    pub key_name: Option<String>,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub capacity: Option<f64>,
    pub description: Option<String>,
    #[serde(default)]
    pub attributes: Vec<ItemAttribute>,
    pub item_category: Option<ItemCategory>,
    pub software_description: Option<SoftwareDescription>,
    #[serde(default)]
    pub prices: Vec<ItemPrice>,
}

impl ProductItem {
    pub fn category_code(&self) -> Option<&str> {
        self.item_category.as_ref()?.category_code.as_deref()
    }

    pub fn has_attribute(&self, key: &str) -> bool {
        self.attributes
            .iter()
            .any(|a| a.attribute_type_key_name.as_deref() == Some(key))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemAttribute {
    pub id: Option<u64>,
    pub attribute_type_key_name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemCategory {
    pub id: Option<u64>,
    pub category_code: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemPrice {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    #[serde(default, deserialize_with = "lenient_f64", skip_serializing_if = "Option::is_none")]
    pub recurring_fee: Option<f64>,
    #[serde(default, deserialize_with = "lenient_f64", skip_serializing_if = "Option::is_none")]
    pub hourly_recurring_fee: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location_group_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item: Option<PriceItem>,
}

impl ItemPrice {
    pub fn with_id(id: u64) -> Self {
        Self {
            id: Some(id),
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceItem {
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Preset {
    pub id: Option<u64>,
    pub key_name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Region {
    pub keyname: Option<String>,
    pub description: Option<String>,
    pub location: Option<RegionLocation>,
}

impl Region {
    pub fn datacenter(&self) -> Option<&Location> {
        self.location.as_ref()?.location.as_ref()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegionLocation {
    pub location: Option<Location>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderHost {
    pub hostname: Option<String>,
    pub domain: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderSshKeys {
    #[serde(default)]
    pub ssh_key_ids: Vec<u64>,
}

/// `SoftLayer_Container_Product_Order` for a bare metal server.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductOrder {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub complex_type: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub hardware: Vec<OrderHost>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub prices: Vec<ItemPrice>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub package_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preset_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub use_hourly_pricing: Option<bool>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub provision_scripts: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub ssh_keys: Vec<OrderSshKeys>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderReceipt {
    pub order_id: Option<u64>,
    pub order_details: Option<ProductOrder>,
}
