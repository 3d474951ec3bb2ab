use async_trait::async_trait;
use log::debug;
use serde::Serialize;

use crate::api::client::SoftLayerClient;
use crate::api::filter::{Filter, ObjectFilter, SortDirection};
use crate::api::models::{
    Hardware, HardwareComponent, HardwareEdit, HardwareNotification, NetworkVlan, OrderReceipt, ProductOrder,
    ProductPackage, SoftwarePassword, VirtualGuest, VirtualHost,
};
use crate::api::request::ApiRequest;
use crate::error::ApiError;

const HARDWARE_SERVICE: &str = "SoftLayer_Hardware_Server";

pub const LIST_MASK: &str = "id,hostname,domain,hardwareStatusId,globalIdentifier,fullyQualifiedDomainName,hardwareStatus,\
processorPhysicalCoreAmount,provisionDate,memoryCapacity,primaryBackendIpAddress,primaryIpAddress,networkManagementIpAddress,\
datacenter,operatingSystem[softwareLicense[softwareDescription[manufacturer,name,version,referenceCode]]],\
billingItem[id,nextInvoiceTotalRecurringAmount,children[nextInvoiceTotalRecurringAmount],orderItem.order.userRecord[username]],\
tagReferences[id,tag[name,id]]";

pub const DETAIL_MASK: &str = "id,globalIdentifier,fullyQualifiedDomainName,hostname,domain,provisionDate,hardwareStatus,\
processorPhysicalCoreAmount,memoryCapacity,notes,privateNetworkOnlyFlag,primaryBackendIpAddress,primaryIpAddress,\
networkManagementIpAddress,userData,datacenter,\
networkComponents[id,status,speed,maxSpeed,name,ipmiMacAddress,ipmiIpAddress,macAddress,primaryIpAddress,port,\
primarySubnet[id,netmask,broadcastAddress,networkIdentifier,gateway]],hardwareChassis[id,name],\
activeTransaction[id,transactionStatus[friendlyName,name]],\
operatingSystem[softwareLicense[softwareDescription[manufacturer,name,version,referenceCode]],passwords[username,password]],\
billingItem[id,nextInvoiceTotalRecurringAmount,children[nextInvoiceTotalRecurringAmount],\
nextInvoiceChildren[description,categoryCode,nextInvoiceTotalRecurringAmount],orderItem.order.userRecord[username]],\
hourlyBillingFlag,tagReferences[id,tag[name,id]],networkVlans[id,vlanNumber,networkSpace],\
remoteManagementAccounts[username,password]";

pub const PACKAGE_MASK: &str = "items[keyName,capacity,description,attributes[id,attributeTypeKeyName],\
itemCategory[id,categoryCode],softwareDescription[id,referenceCode,longDescription],prices],activePresets,\
regions[location[location[priceGroups]]]";

const COMPONENTS_MASK: &str = "id,hardwareComponentModel[longDescription,firmwares[version,createDate],\
hardwareGenericComponentModel[hardwareComponentType[keyName]]]";

const NOTIFICATION_MASK: &str = "mask[id,hardwareId,userId,user[id,username,firstName,lastName,email]]";

/// Cancellation reason codes and the text sent to the billing system.
pub fn cancellation_reasons() -> &'static [(&'static str, &'static str)] {
    &[
        ("unneeded", "No longer needed"),
        ("closing", "Business closing down"),
        ("cost", "Server / Upgrade Costs"),
        ("migrate_larger", "Migrating to larger server"),
        ("migrate_smaller", "Migrating to smaller server"),
        ("datacenter", "Migrating to a different SoftLayer datacenter"),
        ("performance", "Network performance / latency"),
        ("support", "Support response / timing"),
        ("sales", "Sales process / upgrades"),
        ("moving", "Moving to competitor"),
    ]
}

/// Unknown codes fall back to "unneeded".
pub fn cancellation_reason(code: &str) -> &'static str {
    let reasons = cancellation_reasons();
    reasons
        .iter()
        .find(|(key, _)| *key == code)
        .unwrap_or(&reasons[0])
        .1
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct HardwareListFilter {
    pub tags: Vec<String>,
    pub cpu: Option<u64>,
    pub memory: Option<u64>,
    pub hostname: Option<String>,
    pub domain: Option<String>,
    pub datacenter: Option<String>,
    pub nic_speed: Option<u64>,
    pub public_ip: Option<String>,
    pub private_ip: Option<String>,
    pub owner: Option<String>,
    pub order_id: Option<u64>,
}

impl HardwareListFilter {
    pub fn to_object_filter(&self) -> ObjectFilter {
        let mut filter = ObjectFilter::new();
        if !self.tags.is_empty() {
            filter.push(Filter::in_list("hardware.tagReferences.tag.name", self.tags.iter().cloned()));
        }
        if let Some(cpu) = self.cpu {
            filter.push(Filter::eq("hardware.processorPhysicalCoreAmount", cpu));
        }
        if let Some(memory) = self.memory {
            filter.push(Filter::eq("hardware.memoryCapacity", memory));
        }
        let queries = [
            (&self.hostname, "hardware.hostname"),
            (&self.domain, "hardware.domain"),
            (&self.datacenter, "hardware.datacenter.name"),
            (&self.public_ip, "hardware.primaryIpAddress"),
            (&self.private_ip, "hardware.primaryBackendIpAddress"),
        ];
        for (value, path) in queries {
            if let Some(value) = value {
                filter.push(Filter::query(path, value));
            }
        }
        if let Some(speed) = self.nic_speed {
            filter.push(Filter::eq("hardware.networkComponents.maxSpeed", speed));
        }
        if let Some(owner) = &self.owner {
            filter.push(Filter::eq("hardware.billingItem.orderItem.order.userRecord.username", owner.as_str()));
        }
        if let Some(order) = self.order_id {
            filter.push(Filter::eq("hardware.billingItem.orderItem.order.id", order));
        }
        filter.push(Filter::order_by("hardware.id", SortDirection::Desc));
        filter
    }
}

/// Changes requested by `hardware edit`. `None` means leave untouched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HardwareChanges {
    pub userdata: Option<String>,
    pub hostname: Option<String>,
    pub domain: Option<String>,
    pub tags: Option<String>,
    pub public_speed: Option<u64>,
    pub private_speed: Option<u64>,
}

/// Options for an operating system reload. Flags go over the wire as 0/1.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReloadConfig {
    pub upgrade_bios: u8,
    pub upgrade_hard_drive_firmware: u8,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_provision_script_uri: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub ssh_key_ids: Vec<u64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RebootKind {
    Default,
    Hard,
    Soft,
}

impl RebootKind {
    fn method(&self) -> &'static str {
        match self {
            RebootKind::Default => "rebootDefault",
            RebootKind::Hard => "rebootHard",
            RebootKind::Soft => "rebootSoft",
        }
    }
}

#[async_trait]
pub trait HardwareServerManager: Send + Sync {
    async fn list_hardware(&self, filter: &HardwareListFilter, mask: Option<&str>) -> Result<Vec<Hardware>, ApiError>;

    /// `mask` defaults to the detail view.
    async fn get_hardware(&self, id: u64, mask: Option<&str>) -> Result<Hardware, ApiError>;

    /// Applies every requested change independently. One entry per change:
    /// `Ok(message)` when it went through, `Err(message)` when it did not.
    async fn edit(&self, id: u64, changes: &HardwareChanges) -> Vec<Result<String, String>>;

    async fn cancel_hardware(&self, id: u64, reason: &str, comment: &str, immediate: bool) -> Result<(), ApiError>;

    async fn power_on(&self, id: u64) -> Result<(), ApiError>;
    async fn power_off(&self, id: u64) -> Result<(), ApiError>;
    async fn power_cycle(&self, id: u64) -> Result<(), ApiError>;
    async fn reboot(&self, id: u64, kind: RebootKind) -> Result<(), ApiError>;
    async fn rescue(&self, id: u64) -> Result<(), ApiError>;
    async fn toggle_ipmi(&self, id: u64, enabled: bool) -> Result<(), ApiError>;
    async fn reload(&self, id: u64, config: &ReloadConfig) -> Result<(), ApiError>;

    /// Powers the server off and updates IPMI, RAID controller, BIOS and hard drive firmware.
    async fn update_firmware(&self, id: u64) -> Result<(), ApiError>;

    /// The bare metal ordering package with items, presets and regions.
    async fn get_package(&self) -> Result<ProductPackage, ApiError>;
    async fn verify_order(&self, order: &ProductOrder) -> Result<ProductOrder, ApiError>;
    async fn place_order(&self, order: &ProductOrder) -> Result<OrderReceipt, ApiError>;

    async fn get_components(&self, id: u64) -> Result<Vec<HardwareComponent>, ApiError>;
    async fn get_notifications(&self, id: u64) -> Result<Vec<HardwareNotification>, ApiError>;
    async fn create_notification(&self, id: u64, user_id: u64) -> Result<HardwareNotification, ApiError>;
    async fn get_guests(&self, id: u64) -> Result<Vec<VirtualGuest>, ApiError>;
    async fn create_software_credential(&self, credential: &SoftwarePassword) -> Result<SoftwarePassword, ApiError>;

    /// Trunk VLANs onto a network component; returns the VLANs now trunked.
    async fn trunk_vlans(&self, component_id: u64, vlans: &[NetworkVlan]) -> Result<Vec<NetworkVlan>, ApiError>;
}

pub struct SoftLayerHardwareServerManager {
    client: SoftLayerClient,
}

impl SoftLayerHardwareServerManager {
    pub fn new(client: SoftLayerClient) -> Self {
        Self { client }
    }

    async fn hardware_call(&self, id: u64, method: &str) -> Result<(), ApiError> {
        let request = ApiRequest::new(HARDWARE_SERVICE, method).id(id);
        let _: serde_json::Value = self.client.call(&request).await?;
        Ok(())
    }

    async fn edit_step(&self, request: ApiRequest) -> Result<(), ApiError> {
        let _: serde_json::Value = self.client.call(&request).await?;
        Ok(())
    }
}

#[async_trait]
impl HardwareServerManager for SoftLayerHardwareServerManager {
    async fn list_hardware(&self, filter: &HardwareListFilter, mask: Option<&str>) -> Result<Vec<Hardware>, ApiError> {
        let request = ApiRequest::new("SoftLayer_Account", "getHardware")
            .mask(mask.unwrap_or(LIST_MASK))
            .filter(filter.to_object_filter());
        self.client.call_all(request).await
    }

    async fn get_hardware(&self, id: u64, mask: Option<&str>) -> Result<Hardware, ApiError> {
        let request = ApiRequest::new(HARDWARE_SERVICE, "getObject")
            .id(id)
            .mask(mask.unwrap_or(DETAIL_MASK));
        self.client.call(&request).await
    }

    async fn edit(&self, id: u64, changes: &HardwareChanges) -> Vec<Result<String, String>> {
        let mut outcomes = Vec::new();

        let mut record = |result: Result<(), ApiError>, what: &str| match result {
            Ok(()) => outcomes.push(Ok(format!("The {} of hardware server: {} was updated.", what, id))),
            Err(e) => outcomes.push(Err(format!(
                "Failed to update the {} of hardware server: {}.\n{}",
                what, id, e
            ))),
        };

        if let Some(userdata) = &changes.userdata {
            let result = match ApiRequest::new(HARDWARE_SERVICE, "setUserMetadata").id(id).param([userdata]) {
                Ok(request) => self.edit_step(request).await,
                Err(e) => Err(e),
            };
            record(result, "user data");
        }

        if let Some(tags) = &changes.tags {
            let result = match ApiRequest::new(HARDWARE_SERVICE, "setTags").id(id).param(tags) {
                Ok(request) => self.edit_step(request).await,
                Err(e) => Err(e),
            };
            record(result, "tags");
        }

        if changes.hostname.is_some() || changes.domain.is_some() {
            let template = HardwareEdit {
                hostname: changes.hostname.clone(),
                domain: changes.domain.clone(),
                notes: None,
            };
            let result = match ApiRequest::new(HARDWARE_SERVICE, "editObject").id(id).param(&template) {
                Ok(request) => self.edit_step(request).await,
                Err(e) => Err(e),
            };
            match result {
                Ok(()) => {
                    if changes.hostname.is_some() {
                        record(Ok(()), "hostname");
                    }
                    if changes.domain.is_some() {
                        record(Ok(()), "domain");
                    }
                }
                Err(e) => record(Err(e), "hostname/domain"),
            }
        }

        for (speed, method, what) in [
            (changes.public_speed, "setPublicNetworkInterfaceSpeed", "public network speed"),
            (changes.private_speed, "setPrivateNetworkInterfaceSpeed", "private network speed"),
        ] {
            if let Some(speed) = speed {
                let result = match ApiRequest::new(HARDWARE_SERVICE, method).id(id).param(speed) {
                    Ok(request) => self.edit_step(request).await,
                    Err(e) => Err(e),
                };
                record(result, what);
            }
        }

        outcomes
    }

    async fn cancel_hardware(&self, id: u64, reason: &str, comment: &str, immediate: bool) -> Result<(), ApiError> {
        let cancel_reason = cancellation_reason(reason);
        let hardware = self
            .get_hardware(id, Some("id,billingItem.id"))
            .await
            .map_err(|e| ApiError::new(format!("Failed to get hardware {}.\n{}", id, e)))?;
        let billing_id = hardware
            .billing_item
            .and_then(|b| b.id)
            .ok_or_else(|| ApiError::new(format!("No billing item found for hardware {}.", id)))?;

        debug!("Cancelling billing item {} for hardware {}", billing_id, id);
        let request = ApiRequest::new("SoftLayer_Billing_Item", "cancelItem")
            .id(billing_id)
            .param(immediate)?
            .param(false)?
            .param(cancel_reason)?
            .param(comment)?;
        let _: serde_json::Value = self.client.call(&request).await?;
        Ok(())
    }

    async fn power_on(&self, id: u64) -> Result<(), ApiError> {
        self.hardware_call(id, "powerOn").await
    }

    async fn power_off(&self, id: u64) -> Result<(), ApiError> {
        self.hardware_call(id, "powerOff").await
    }

    async fn power_cycle(&self, id: u64) -> Result<(), ApiError> {
        self.hardware_call(id, "powerCycle").await
    }

    async fn reboot(&self, id: u64, kind: RebootKind) -> Result<(), ApiError> {
        self.hardware_call(id, kind.method()).await
    }

    async fn rescue(&self, id: u64) -> Result<(), ApiError> {
        self.hardware_call(id, "bootToRescueLayer").await
    }

    async fn toggle_ipmi(&self, id: u64, enabled: bool) -> Result<(), ApiError> {
        let request = ApiRequest::new(HARDWARE_SERVICE, "toggleManagementInterface")
            .id(id)
            .param(enabled)?;
        let _: serde_json::Value = self.client.call(&request).await?;
        Ok(())
    }

    async fn reload(&self, id: u64, config: &ReloadConfig) -> Result<(), ApiError> {
        let request = ApiRequest::new(HARDWARE_SERVICE, "reloadOperatingSystem")
            .id(id)
            .param("FORCE")?
            .param(config)?;
        let _: serde_json::Value = self.client.call(&request).await?;
        Ok(())
    }

    async fn update_firmware(&self, id: u64) -> Result<(), ApiError> {
        let request = ApiRequest::new(HARDWARE_SERVICE, "createFirmwareUpdateTransaction")
            .id(id)
            .param(1)?
            .param(1)?
            .param(1)?
            .param(1)?;
        let _: serde_json::Value = self.client.call(&request).await?;
        Ok(())
    }

    async fn get_package(&self) -> Result<ProductPackage, ApiError> {
        let request = ApiRequest::new("SoftLayer_Product_Package", "getAllObjects")
            .mask(PACKAGE_MASK)
            .filter(ObjectFilter::new().with(Filter::eq("keyName", "BARE_METAL_SERVER")));
        let mut packages: Vec<ProductPackage> = self.client.call(&request).await?;
        if packages.len() != 1 {
            return Err(ApiError::new("Ordering package is not found"));
        }
        Ok(packages.remove(0))
    }

    async fn verify_order(&self, order: &ProductOrder) -> Result<ProductOrder, ApiError> {
        let request = ApiRequest::new("SoftLayer_Product_Order", "verifyOrder").param(order)?;
        self.client.call(&request).await
    }

    async fn place_order(&self, order: &ProductOrder) -> Result<OrderReceipt, ApiError> {
        let request = ApiRequest::new("SoftLayer_Product_Order", "placeOrder").param(order)?;
        self.client.call(&request).await
    }

    async fn get_components(&self, id: u64) -> Result<Vec<HardwareComponent>, ApiError> {
        let request = ApiRequest::new(HARDWARE_SERVICE, "getComponents")
            .id(id)
            .mask(COMPONENTS_MASK);
        self.client.call(&request).await
    }

    async fn get_notifications(&self, id: u64) -> Result<Vec<HardwareNotification>, ApiError> {
        let request = ApiRequest::new("SoftLayer_User_Customer_Notification_Hardware", "findByHardwareId")
            .mask(NOTIFICATION_MASK)
            .param(id)?;
        self.client.call(&request).await
    }

    async fn create_notification(&self, id: u64, user_id: u64) -> Result<HardwareNotification, ApiError> {
        let template = HardwareNotification {
            hardware_id: Some(id),
            user_id: Some(user_id),
            ..Default::default()
        };
        let request = ApiRequest::new("SoftLayer_User_Customer_Notification_Hardware", "createObject")
            .mask(NOTIFICATION_MASK)
            .param(&template)?;
        self.client.call(&request).await
    }

    async fn get_guests(&self, id: u64) -> Result<Vec<VirtualGuest>, ApiError> {
        let request = ApiRequest::new(HARDWARE_SERVICE, "getVirtualHost")
            .id(id)
            .mask("mask[id,guests[id,hostname,domain,maxCpu,maxCpuUnits,maxMemory,createDate,powerState,status]]");
        let host: VirtualHost = self.client.call(&request).await?;
        Ok(host.guests)
    }

    async fn create_software_credential(&self, credential: &SoftwarePassword) -> Result<SoftwarePassword, ApiError> {
        let request = ApiRequest::new("SoftLayer_Software_Component_Password", "createObject").param(credential)?;
        self.client.call(&request).await
    }

    async fn trunk_vlans(&self, component_id: u64, vlans: &[NetworkVlan]) -> Result<Vec<NetworkVlan>, ApiError> {
        let request = ApiRequest::new("SoftLayer_Network_Component", "addNetworkVlanTrunks")
            .id(component_id)
            .param(vlans)?;
        self.client.call(&request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_cancellation_reason_fallback() {
        assert_eq!(cancellation_reason("cost"), "Server / Upgrade Costs");
        assert_eq!(cancellation_reason("whatever"), "No longer needed");
    }

    #[test]
    fn test_list_filter_only_includes_set_fields() {
        let filter = HardwareListFilter {
            tags: vec!["prod".into()],
            memory: Some(64),
            hostname: Some("web*".into()),
            order_id: Some(123),
            ..Default::default()
        };
        let built = filter.to_object_filter().build();
        let hw = &built["hardware"];

        assert_eq!(hw["memoryCapacity"]["operation"], json!(64));
        assert_eq!(hw["hostname"]["operation"], json!("^= web"));
        assert_eq!(hw["billingItem"]["orderItem"]["order"]["id"]["operation"], json!(123));
        assert_eq!(hw["tagReferences"]["tag"]["name"]["operation"], json!("in"));
        assert_eq!(hw["id"]["operation"], json!("orderBy"));
        assert!(hw.get("processorPhysicalCoreAmount").is_none());
        assert!(hw.get("domain").is_none());
    }

    #[test]
    fn test_zero_cpu_is_still_a_filter() {
        let filter = HardwareListFilter {
            cpu: Some(0),
            ..Default::default()
        };
        let built = filter.to_object_filter().build();
        assert_eq!(built["hardware"]["processorPhysicalCoreAmount"]["operation"], json!(0));
    }

    #[test]
    fn test_reload_config_wire_shape() {
        let bare = serde_json::to_value(ReloadConfig::default()).unwrap();
        assert_eq!(bare, json!({"upgradeBios": 0, "upgradeHardDriveFirmware": 0}));

        let full = ReloadConfig {
            upgrade_bios: 1,
            upgrade_hard_drive_firmware: 1,
            custom_provision_script_uri: Some("https://example.com/setup.sh".into()),
            ssh_key_ids: vec![11, 12],
        };
        assert_eq!(
            serde_json::to_value(full).unwrap(),
            json!({
                "upgradeBios": 1,
                "upgradeHardDriveFirmware": 1,
                "customProvisionScriptUri": "https://example.com/setup.sh",
                "sshKeyIds": [11, 12]
            })
        );
    }
}
