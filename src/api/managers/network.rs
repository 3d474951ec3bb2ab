use async_trait::async_trait;

use crate::api::client::SoftLayerClient;
use crate::api::models::NetworkVlan;
use crate::api::request::ApiRequest;
use crate::error::ApiError;

pub const VLAN_MASK: &str = "mask[id, vlanNumber, name, networkSpace]";

#[async_trait]
pub trait NetworkManager: Send + Sync {
    async fn get_vlan(&self, id: u64) -> Result<NetworkVlan, ApiError>;
}

pub struct SoftLayerNetworkManager {
    client: SoftLayerClient,
}

impl SoftLayerNetworkManager {
    pub fn new(client: SoftLayerClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl NetworkManager for SoftLayerNetworkManager {
    async fn get_vlan(&self, id: u64) -> Result<NetworkVlan, ApiError> {
        let request = ApiRequest::new("SoftLayer_Network_Vlan", "getObject").id(id).mask(VLAN_MASK);
        self.client.call(&request).await
    }
}
