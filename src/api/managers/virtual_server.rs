use async_trait::async_trait;

use crate::api::client::SoftLayerClient;
use crate::api::request::ApiRequest;
use crate::error::ApiError;

#[async_trait]
pub trait VirtualServerManager: Send + Sync {
    /// Replace the tags of a virtual guest. `tags` is comma separated.
    async fn set_tags(&self, guest_id: u64, tags: &str) -> Result<(), ApiError>;
}

pub struct SoftLayerVirtualServerManager {
    client: SoftLayerClient,
}

impl SoftLayerVirtualServerManager {
    pub fn new(client: SoftLayerClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl VirtualServerManager for SoftLayerVirtualServerManager {
    async fn set_tags(&self, guest_id: u64, tags: &str) -> Result<(), ApiError> {
        let request = ApiRequest::new("SoftLayer_Virtual_Guest", "setTags")
            .id(guest_id)
            .param(tags)?;
        let _: bool = self.client.call(&request).await?;
        Ok(())
    }
}
