use async_trait::async_trait;

use crate::api::client::SoftLayerClient;
use crate::api::models::SshKey;
use crate::api::request::ApiRequest;
use crate::error::ApiError;

#[async_trait]
pub trait SecurityManager: Send + Sync {
    async fn get_ssh_key(&self, id: u64) -> Result<SshKey, ApiError>;
}

pub struct SoftLayerSecurityManager {
    client: SoftLayerClient,
}

impl SoftLayerSecurityManager {
    pub fn new(client: SoftLayerClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl SecurityManager for SoftLayerSecurityManager {
    async fn get_ssh_key(&self, id: u64) -> Result<SshKey, ApiError> {
        let request = ApiRequest::new("SoftLayer_Security_Ssh_Key", "getObject").id(id);
        self.client.call(&request).await
    }
}
