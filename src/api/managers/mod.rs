//! Per resource family facades over the SoftLayer API.
//!
//! Commands only ever see these traits. The `SoftLayer*` types implement
//! them on top of [`SoftLayerClient`](crate::api::SoftLayerClient) and the
//! fakes in [`crate::testing`] implement them for tests.

pub mod autoscale;
pub mod hardware;
pub mod network;
pub mod security;
pub mod virtual_server;

pub use autoscale::{AutoScaleManager, DatacenterName, SoftLayerAutoScaleManager};
pub use hardware::{
    HardwareChanges, HardwareListFilter, HardwareServerManager, RebootKind, ReloadConfig,
    SoftLayerHardwareServerManager, cancellation_reason, cancellation_reasons,
};
pub use network::{NetworkManager, SoftLayerNetworkManager};
pub use security::{SecurityManager, SoftLayerSecurityManager};
pub use virtual_server::{SoftLayerVirtualServerManager, VirtualServerManager};

use super::client::SoftLayerClient;

/// Every manager a command may need, built once per invocation.
pub struct Managers {
    pub autoscale: Box<dyn AutoScaleManager>,
    pub hardware: Box<dyn HardwareServerManager>,
    pub network: Box<dyn NetworkManager>,
    pub security: Box<dyn SecurityManager>,
    pub virtual_server: Box<dyn VirtualServerManager>,
}

impl Managers {
    pub fn softlayer(client: SoftLayerClient) -> Self {
        Self {
            autoscale: Box::new(SoftLayerAutoScaleManager::new(client.clone())),
            hardware: Box::new(SoftLayerHardwareServerManager::new(client.clone())),
            network: Box::new(SoftLayerNetworkManager::new(client.clone())),
            security: Box::new(SoftLayerSecurityManager::new(client.clone())),
            virtual_server: Box::new(SoftLayerVirtualServerManager::new(client)),
        }
    }
}
