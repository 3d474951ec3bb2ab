//! In-memory stand-ins for the terminal and the manager facades.
//!
//! Every fake records the calls it receives so tests can assert that a
//! command stopped before reaching the API.

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Mutex, MutexGuard};

use crate::api::managers::{
    AutoScaleManager, DatacenterName, HardwareChanges, HardwareListFilter, HardwareServerManager, Managers,
    NetworkManager, RebootKind, ReloadConfig, SecurityManager, VirtualServerManager,
};
use crate::api::models::{
    Hardware, HardwareComponent, HardwareNotification, Location, NetworkVlan, OrderReceipt, ProductOrder,
    ProductPackage, ScaleGroup, ScaleGroupLog, ScaleMember, SoftwarePassword, SshKey, VirtualGuest,
};
use crate::error::{ApiError, CliError};
use crate::ui::{Confirmation, Ui};

fn lock<T>(m: &Mutex<T>) -> MutexGuard<'_, T> {
    m.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

// ---------------------------------------------------------------------------
// UI

/// Scripted terminal. Prompts are echoed into the output like a real terminal would.
#[derive(Debug, Default)]
pub struct FakeUi {
    inputs: VecDeque<String>,
    outputs: Vec<String>,
    errors: Vec<String>,
}

impl FakeUi {
    pub fn new() -> Self {
        Self::default()
    }

    /// Answers handed out to successive confirmation prompts.
    pub fn with_inputs(inputs: &[&str]) -> Self {
        Self {
            inputs: inputs.iter().map(|s| s.to_string()).collect(),
            ..Default::default()
        }
    }

    pub fn outputs(&self) -> String {
        self.outputs.join("\n")
    }

    pub fn errors(&self) -> String {
        self.errors.join("\n")
    }
}

impl Ui for FakeUi {
    fn print(&mut self, text: &str) {
        self.outputs.push(text.to_string());
    }

    fn ok(&mut self) {
        self.outputs.push("OK".to_string());
    }

    fn failed(&mut self, text: &str) {
        self.errors.push(text.to_string());
    }

    fn confirm(&mut self, prompt: &str) -> Result<Confirmation, CliError> {
        self.outputs.push(prompt.to_string());
        let answer = self.inputs.pop_front().unwrap_or_default();
        Confirmation::from_input(&answer)
    }
}

// ---------------------------------------------------------------------------
// Scripted results

/// Queue of results for one manager method. An empty queue yields `T::default()`.
#[derive(Debug)]
pub struct Scripted<T> {
    queue: Mutex<VecDeque<Result<T, ApiError>>>,
}

impl<T> Default for Scripted<T> {
    fn default() -> Self {
        Self {
            queue: Mutex::new(VecDeque::new()),
        }
    }
}

impl<T: Default> Scripted<T> {
    pub fn returns(&self, value: T) {
        lock(&self.queue).push_back(Ok(value));
    }

    pub fn fails(&self, message: &str) {
        lock(&self.queue).push_back(Err(ApiError::new(message)));
    }

    pub fn fails_with(&self, error: ApiError) {
        lock(&self.queue).push_back(Err(error));
    }

    fn next(&self) -> Result<T, ApiError> {
        lock(&self.queue).pop_front().unwrap_or_else(|| Ok(T::default()))
    }
}

/// Log of `method arg arg` strings.
#[derive(Debug, Default)]
pub struct CallLog {
    calls: Mutex<Vec<String>>,
}

impl CallLog {
    fn record(&self, call: String) {
        lock(&self.calls).push(call);
    }

    pub fn all(&self) -> Vec<String> {
        lock(&self.calls).clone()
    }

    pub fn count(&self) -> usize {
        lock(&self.calls).len()
    }

    pub fn count_of(&self, method: &str) -> usize {
        lock(&self.calls)
            .iter()
            .filter(|c| c.split_whitespace().next() == Some(method))
            .count()
    }
}

// ---------------------------------------------------------------------------
// Autoscale

#[derive(Debug, Default)]
pub struct FakeAutoScaleManager {
    pub calls: CallLog,
    pub list_scale_groups: Scripted<Vec<ScaleGroup>>,
    pub get_scale_group: Scripted<ScaleGroup>,
    pub get_virtual_guest_members: Scripted<Vec<ScaleMember>>,
    pub get_logs: Scripted<Vec<ScaleGroupLog>>,
    pub create_scale_group: Scripted<ScaleGroup>,
    pub edit_scale_group: Scripted<bool>,
    pub scale: Scripted<Vec<ScaleMember>>,
    pub scale_to: Scripted<Vec<ScaleMember>>,
    pub delete: Scripted<bool>,
    pub get_datacenter_by_name: Scripted<Vec<Location>>,
    /// Templates passed to create and edit, in call order.
    pub templates: Mutex<Vec<ScaleGroup>>,
}

impl FakeAutoScaleManager {
    pub fn sent_templates(&self) -> Vec<ScaleGroup> {
        lock(&self.templates).clone()
    }
}

#[async_trait]
impl AutoScaleManager for FakeAutoScaleManager {
    async fn list_scale_groups(&self) -> Result<Vec<ScaleGroup>, ApiError> {
        self.calls.record("list_scale_groups".into());
        self.list_scale_groups.next()
    }

    async fn get_scale_group(&self, id: u64, mask: Option<&str>) -> Result<ScaleGroup, ApiError> {
        self.calls.record(format!("get_scale_group {} {}", id, mask.unwrap_or("default")));
        self.get_scale_group.next()
    }

    async fn get_virtual_guest_members(&self, id: u64) -> Result<Vec<ScaleMember>, ApiError> {
        self.calls.record(format!("get_virtual_guest_members {}", id));
        self.get_virtual_guest_members.next()
    }

    async fn get_logs(&self, id: u64, date_min: Option<&str>) -> Result<Vec<ScaleGroupLog>, ApiError> {
        self.calls.record(format!("get_logs {} {}", id, date_min.unwrap_or("-")));
        self.get_logs.next()
    }

    async fn create_scale_group(&self, template: &ScaleGroup) -> Result<ScaleGroup, ApiError> {
        self.calls.record("create_scale_group".into());
        lock(&self.templates).push(template.clone());
        self.create_scale_group.next()
    }

    async fn edit_scale_group(&self, id: u64, template: &ScaleGroup) -> Result<bool, ApiError> {
        self.calls.record(format!("edit_scale_group {}", id));
        lock(&self.templates).push(template.clone());
        self.edit_scale_group.next()
    }

    async fn scale(&self, id: u64, delta: i64) -> Result<Vec<ScaleMember>, ApiError> {
        self.calls.record(format!("scale {} {}", id, delta));
        self.scale.next()
    }

    async fn scale_to(&self, id: u64, number: i64) -> Result<Vec<ScaleMember>, ApiError> {
        self.calls.record(format!("scale_to {} {}", id, number));
        self.scale_to.next()
    }

    async fn delete(&self, id: u64) -> Result<bool, ApiError> {
        self.calls.record(format!("delete {}", id));
        self.delete.next()
    }

    async fn get_datacenter_by_name(&self, name: &str, kind: DatacenterName) -> Result<Vec<Location>, ApiError> {
        self.calls.record(format!("get_datacenter_by_name {} {:?}", name, kind));
        self.get_datacenter_by_name.next()
    }
}

// ---------------------------------------------------------------------------
// Hardware

#[derive(Debug, Default)]
pub struct FakeHardwareServerManager {
    pub calls: CallLog,
    pub list_hardware: Scripted<Vec<Hardware>>,
    pub get_hardware: Scripted<Hardware>,
    pub edit: Mutex<Vec<Result<String, String>>>,
    pub cancel_hardware: Scripted<()>,
    pub power: Scripted<()>,
    pub toggle_ipmi: Scripted<()>,
    pub get_package: Scripted<ProductPackage>,
    pub verify_order: Scripted<ProductOrder>,
    pub place_order: Scripted<OrderReceipt>,
    pub get_components: Scripted<Vec<HardwareComponent>>,
    pub get_notifications: Scripted<Vec<HardwareNotification>>,
    pub create_notification: Scripted<HardwareNotification>,
    pub get_guests: Scripted<Vec<VirtualGuest>>,
    pub create_software_credential: Scripted<SoftwarePassword>,
    pub trunk_vlans: Scripted<Vec<NetworkVlan>>,
    pub list_filters: Mutex<Vec<HardwareListFilter>>,
    pub changes: Mutex<Vec<HardwareChanges>>,
    pub orders: Mutex<Vec<ProductOrder>>,
    pub credentials: Mutex<Vec<SoftwarePassword>>,
}

impl FakeHardwareServerManager {
    pub fn edit_returns(&self, outcomes: Vec<Result<String, String>>) {
        *lock(&self.edit) = outcomes;
    }

    pub fn sent_filters(&self) -> Vec<HardwareListFilter> {
        lock(&self.list_filters).clone()
    }

    pub fn sent_changes(&self) -> Vec<HardwareChanges> {
        lock(&self.changes).clone()
    }

    pub fn sent_orders(&self) -> Vec<ProductOrder> {
        lock(&self.orders).clone()
    }

    pub fn sent_credentials(&self) -> Vec<SoftwarePassword> {
        lock(&self.credentials).clone()
    }
}

#[async_trait]
impl HardwareServerManager for FakeHardwareServerManager {
    async fn list_hardware(&self, filter: &HardwareListFilter, mask: Option<&str>) -> Result<Vec<Hardware>, ApiError> {
        self.calls.record(format!("list_hardware {}", mask.unwrap_or("default")));
        lock(&self.list_filters).push(filter.clone());
        self.list_hardware.next()
    }

    async fn get_hardware(&self, id: u64, mask: Option<&str>) -> Result<Hardware, ApiError> {
        self.calls.record(format!("get_hardware {} {}", id, mask.unwrap_or("default")));
        self.get_hardware.next()
    }

    async fn edit(&self, id: u64, changes: &HardwareChanges) -> Vec<Result<String, String>> {
        self.calls.record(format!("edit {}", id));
        lock(&self.changes).push(changes.clone());
        lock(&self.edit).clone()
    }

    async fn cancel_hardware(&self, id: u64, reason: &str, comment: &str, immediate: bool) -> Result<(), ApiError> {
        self.calls
            .record(format!("cancel_hardware {} {} {:?} {}", id, reason, comment, immediate));
        self.cancel_hardware.next()
    }

    async fn power_on(&self, id: u64) -> Result<(), ApiError> {
        self.calls.record(format!("power_on {}", id));
        self.power.next()
    }

    async fn power_off(&self, id: u64) -> Result<(), ApiError> {
        self.calls.record(format!("power_off {}", id));
        self.power.next()
    }

    async fn power_cycle(&self, id: u64) -> Result<(), ApiError> {
        self.calls.record(format!("power_cycle {}", id));
        self.power.next()
    }

    async fn reboot(&self, id: u64, kind: RebootKind) -> Result<(), ApiError> {
        self.calls.record(format!("reboot {} {:?}", id, kind));
        self.power.next()
    }

    async fn rescue(&self, id: u64) -> Result<(), ApiError> {
        self.calls.record(format!("rescue {}", id));
        self.power.next()
    }

    async fn toggle_ipmi(&self, id: u64, enabled: bool) -> Result<(), ApiError> {
        self.calls.record(format!("toggle_ipmi {} {}", id, enabled));
        self.toggle_ipmi.next()
    }

    async fn reload(&self, id: u64, config: &ReloadConfig) -> Result<(), ApiError> {
        self.calls.record(format!(
            "reload {} {:?} {:?} {} {}",
            id,
            config.custom_provision_script_uri,
            config.ssh_key_ids,
            config.upgrade_bios,
            config.upgrade_hard_drive_firmware
        ));
        self.power.next()
    }

    async fn update_firmware(&self, id: u64) -> Result<(), ApiError> {
        self.calls.record(format!("update_firmware {}", id));
        self.power.next()
    }

    async fn get_package(&self) -> Result<ProductPackage, ApiError> {
        self.calls.record("get_package".into());
        self.get_package.next()
    }

    async fn verify_order(&self, order: &ProductOrder) -> Result<ProductOrder, ApiError> {
        self.calls.record("verify_order".into());
        lock(&self.orders).push(order.clone());
        self.verify_order.next()
    }

    async fn place_order(&self, order: &ProductOrder) -> Result<OrderReceipt, ApiError> {
        self.calls.record("place_order".into());
        lock(&self.orders).push(order.clone());
        self.place_order.next()
    }

    async fn get_components(&self, id: u64) -> Result<Vec<HardwareComponent>, ApiError> {
        self.calls.record(format!("get_components {}", id));
        self.get_components.next()
    }

    async fn get_notifications(&self, id: u64) -> Result<Vec<HardwareNotification>, ApiError> {
        self.calls.record(format!("get_notifications {}", id));
        self.get_notifications.next()
    }

    async fn create_notification(&self, id: u64, user_id: u64) -> Result<HardwareNotification, ApiError> {
        self.calls.record(format!("create_notification {} {}", id, user_id));
        self.create_notification.next()
    }

    async fn get_guests(&self, id: u64) -> Result<Vec<VirtualGuest>, ApiError> {
        self.calls.record(format!("get_guests {}", id));
        self.get_guests.next()
    }

    async fn create_software_credential(&self, credential: &SoftwarePassword) -> Result<SoftwarePassword, ApiError> {
        self.calls.record("create_software_credential".into());
        lock(&self.credentials).push(credential.clone());
        self.create_software_credential.next()
    }

    async fn trunk_vlans(&self, component_id: u64, vlans: &[NetworkVlan]) -> Result<Vec<NetworkVlan>, ApiError> {
        let ids: Vec<String> = vlans.iter().filter_map(|v| v.id).map(|id| id.to_string()).collect();
        self.calls
            .record(format!("trunk_vlans {} {}", component_id, ids.join(",")));
        self.trunk_vlans.next()
    }
}

// ---------------------------------------------------------------------------
// Network, security, virtual server

#[derive(Debug, Default)]
pub struct FakeNetworkManager {
    pub calls: CallLog,
    pub get_vlan: Scripted<NetworkVlan>,
}

#[async_trait]
impl NetworkManager for FakeNetworkManager {
    async fn get_vlan(&self, id: u64) -> Result<NetworkVlan, ApiError> {
        self.calls.record(format!("get_vlan {}", id));
        self.get_vlan.next()
    }
}

#[derive(Debug, Default)]
pub struct FakeSecurityManager {
    pub calls: CallLog,
    pub get_ssh_key: Scripted<SshKey>,
}

#[async_trait]
impl SecurityManager for FakeSecurityManager {
    async fn get_ssh_key(&self, id: u64) -> Result<SshKey, ApiError> {
        self.calls.record(format!("get_ssh_key {}", id));
        self.get_ssh_key.next()
    }
}

#[derive(Debug, Default)]
pub struct FakeVirtualServerManager {
    pub calls: CallLog,
    pub set_tags: Scripted<()>,
}

#[async_trait]
impl VirtualServerManager for FakeVirtualServerManager {
    async fn set_tags(&self, guest_id: u64, tags: &str) -> Result<(), ApiError> {
        self.calls.record(format!("set_tags {} {}", guest_id, tags));
        self.set_tags.next()
    }
}

/// Shared fakes that can also be lent out as a [`Managers`] bundle.
#[derive(Debug, Default)]
pub struct FakeManagers {
    pub autoscale: std::sync::Arc<FakeAutoScaleManager>,
    pub hardware: std::sync::Arc<FakeHardwareServerManager>,
    pub network: std::sync::Arc<FakeNetworkManager>,
    pub security: std::sync::Arc<FakeSecurityManager>,
    pub virtual_server: std::sync::Arc<FakeVirtualServerManager>,
}

impl FakeManagers {
    pub fn new() -> Self {
        Self::default()
    }

    /// Total calls across every fake.
    pub fn total_calls(&self) -> usize {
        self.autoscale.calls.count()
            + self.hardware.calls.count()
            + self.network.calls.count()
            + self.security.calls.count()
            + self.virtual_server.calls.count()
    }

    pub fn managers(&self) -> Managers {
        Managers {
            autoscale: Box::new(Shared(self.autoscale.clone())),
            hardware: Box::new(Shared(self.hardware.clone())),
            network: Box::new(Shared(self.network.clone())),
            security: Box::new(Shared(self.security.clone())),
            virtual_server: Box::new(Shared(self.virtual_server.clone())),
        }
    }
}

/// Lets a shared fake be boxed as a trait object while the test keeps a handle.
struct Shared<T>(std::sync::Arc<T>);

#[async_trait]
impl AutoScaleManager for Shared<FakeAutoScaleManager> {
    async fn list_scale_groups(&self) -> Result<Vec<ScaleGroup>, ApiError> {
        self.0.list_scale_groups().await
    }
    async fn get_scale_group(&self, id: u64, mask: Option<&str>) -> Result<ScaleGroup, ApiError> {
        self.0.get_scale_group(id, mask).await
    }
    async fn get_virtual_guest_members(&self, id: u64) -> Result<Vec<ScaleMember>, ApiError> {
        self.0.get_virtual_guest_members(id).await
    }
    async fn get_logs(&self, id: u64, date_min: Option<&str>) -> Result<Vec<ScaleGroupLog>, ApiError> {
        self.0.get_logs(id, date_min).await
    }
    async fn create_scale_group(&self, template: &ScaleGroup) -> Result<ScaleGroup, ApiError> {
        self.0.create_scale_group(template).await
    }
    async fn edit_scale_group(&self, id: u64, template: &ScaleGroup) -> Result<bool, ApiError> {
        self.0.edit_scale_group(id, template).await
    }
    async fn scale(&self, id: u64, delta: i64) -> Result<Vec<ScaleMember>, ApiError> {
        self.0.scale(id, delta).await
    }
    async fn scale_to(&self, id: u64, number: i64) -> Result<Vec<ScaleMember>, ApiError> {
        self.0.scale_to(id, number).await
    }
    async fn delete(&self, id: u64) -> Result<bool, ApiError> {
        self.0.delete(id).await
    }
    async fn get_datacenter_by_name(&self, name: &str, kind: DatacenterName) -> Result<Vec<Location>, ApiError> {
        self.0.get_datacenter_by_name(name, kind).await
    }
}

#[async_trait]
impl HardwareServerManager for Shared<FakeHardwareServerManager> {
    async fn list_hardware(&self, filter: &HardwareListFilter, mask: Option<&str>) -> Result<Vec<Hardware>, ApiError> {
        self.0.list_hardware(filter, mask).await
    }
    async fn get_hardware(&self, id: u64, mask: Option<&str>) -> Result<Hardware, ApiError> {
        self.0.get_hardware(id, mask).await
    }
    async fn edit(&self, id: u64, changes: &HardwareChanges) -> Vec<Result<String, String>> {
        self.0.edit(id, changes).await
    }
    async fn cancel_hardware(&self, id: u64, reason: &str, comment: &str, immediate: bool) -> Result<(), ApiError> {
        self.0.cancel_hardware(id, reason, comment, immediate).await
    }
    async fn power_on(&self, id: u64) -> Result<(), ApiError> {
        self.0.power_on(id).await
    }
    async fn power_off(&self, id: u64) -> Result<(), ApiError> {
        self.0.power_off(id).await
    }
    async fn power_cycle(&self, id: u64) -> Result<(), ApiError> {
        self.0.power_cycle(id).await
    }
    async fn reboot(&self, id: u64, kind: RebootKind) -> Result<(), ApiError> {
        self.0.reboot(id, kind).await
    }
    async fn rescue(&self, id: u64) -> Result<(), ApiError> {
        self.0.rescue(id).await
    }
    async fn toggle_ipmi(&self, id: u64, enabled: bool) -> Result<(), ApiError> {
        self.0.toggle_ipmi(id, enabled).await
    }
    async fn reload(&self, id: u64, config: &ReloadConfig) -> Result<(), ApiError> {
        self.0.reload(id, config).await
    }
    async fn update_firmware(&self, id: u64) -> Result<(), ApiError> {
        self.0.update_firmware(id).await
    }
    async fn get_package(&self) -> Result<ProductPackage, ApiError> {
        self.0.get_package().await
    }
    async fn verify_order(&self, order: &ProductOrder) -> Result<ProductOrder, ApiError> {
        self.0.verify_order(order).await
    }
    async fn place_order(&self, order: &ProductOrder) -> Result<OrderReceipt, ApiError> {
        self.0.place_order(order).await
    }
    async fn get_components(&self, id: u64) -> Result<Vec<HardwareComponent>, ApiError> {
        self.0.get_components(id).await
    }
    async fn get_notifications(&self, id: u64) -> Result<Vec<HardwareNotification>, ApiError> {
        self.0.get_notifications(id).await
    }
    async fn create_notification(&self, id: u64, user_id: u64) -> Result<HardwareNotification, ApiError> {
        self.0.create_notification(id, user_id).await
    }
    async fn get_guests(&self, id: u64) -> Result<Vec<VirtualGuest>, ApiError> {
        self.0.get_guests(id).await
    }
    async fn create_software_credential(&self, credential: &SoftwarePassword) -> Result<SoftwarePassword, ApiError> {
        self.0.create_software_credential(credential).await
    }
    async fn trunk_vlans(&self, component_id: u64, vlans: &[NetworkVlan]) -> Result<Vec<NetworkVlan>, ApiError> {
        self.0.trunk_vlans(component_id, vlans).await
    }
}

#[async_trait]
impl NetworkManager for Shared<FakeNetworkManager> {
    async fn get_vlan(&self, id: u64) -> Result<NetworkVlan, ApiError> {
        self.0.get_vlan(id).await
    }
}

#[async_trait]
impl SecurityManager for Shared<FakeSecurityManager> {
    async fn get_ssh_key(&self, id: u64) -> Result<SshKey, ApiError> {
        self.0.get_ssh_key(id).await
    }
}

#[async_trait]
impl VirtualServerManager for Shared<FakeVirtualServerManager> {
    async fn set_tags(&self, guest_id: u64, tags: &str) -> Result<(), ApiError> {
        self.0.set_tags(guest_id, tags).await
    }
}
