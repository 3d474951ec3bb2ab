use async_trait::async_trait;

use crate::api::client::SoftLayerClient;
use crate::api::filter::{Filter, ObjectFilter};
use crate::api::models::{Location, ScaleGroup, ScaleGroupLog, ScaleMember};
use crate::api::request::ApiRequest;
use crate::error::ApiError;

const SCALE_GROUP_SERVICE: &str = "SoftLayer_Scale_Group";

pub const MEMBERS_MASK: &str = "mask[id,createDate,virtualGuestId,virtualGuest[id,hostname,domain]]";
pub const LOGS_MASK: &str = "mask[id,createDate,description,scaleGroup]";
pub const LIST_MASK: &str = "mask[id,cooldown,createDate,maximumMemberCount,minimumMemberCount,name,virtualGuestMemberTemplate,status,virtualGuestMemberCount,virtualGuestMembers]";
pub const DETAIL_MASK: &str = "mask[virtualGuestMembers[id,virtualGuest[id,hostname,domain,provisionDate]],terminationPolicy,
    virtualGuestMemberCount,virtualGuestMemberTemplate[sshKeys],
    policies[id,name,createDate,cooldown,actions,triggers,scaleActions],
    networkVlans[networkVlanId,networkVlan[networkSpace,primaryRouter[hostname]]],
    loadBalancers,regionalGroup[locations]]";

/// How a datacenter name given on the command line is matched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DatacenterName {
    /// e.g. `dal13`
    Short,
    /// e.g. `Dallas 13`
    Long,
}

#[async_trait]
pub trait AutoScaleManager: Send + Sync {
    async fn list_scale_groups(&self) -> Result<Vec<ScaleGroup>, ApiError>;

    /// `mask` defaults to the detail view of a group.
    async fn get_scale_group(&self, id: u64, mask: Option<&str>) -> Result<ScaleGroup, ApiError>;

    async fn get_virtual_guest_members(&self, id: u64) -> Result<Vec<ScaleMember>, ApiError>;

    /// `date_min` is `YYYY-MM-DD`; only newer entries are returned.
    async fn get_logs(&self, id: u64, date_min: Option<&str>) -> Result<Vec<ScaleGroupLog>, ApiError>;

    async fn create_scale_group(&self, template: &ScaleGroup) -> Result<ScaleGroup, ApiError>;

    async fn edit_scale_group(&self, id: u64, template: &ScaleGroup) -> Result<bool, ApiError>;

    /// Grow or shrink by `delta` members.
    async fn scale(&self, id: u64, delta: i64) -> Result<Vec<ScaleMember>, ApiError>;

    /// Grow or shrink to exactly `number` members.
    async fn scale_to(&self, id: u64, number: i64) -> Result<Vec<ScaleMember>, ApiError>;

    /// Delete the group and all of its members.
    async fn delete(&self, id: u64) -> Result<bool, ApiError>;

    async fn get_datacenter_by_name(&self, name: &str, kind: DatacenterName) -> Result<Vec<Location>, ApiError>;
}

pub struct SoftLayerAutoScaleManager {
    client: SoftLayerClient,
}

impl SoftLayerAutoScaleManager {
    pub fn new(client: SoftLayerClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl AutoScaleManager for SoftLayerAutoScaleManager {
    async fn list_scale_groups(&self) -> Result<Vec<ScaleGroup>, ApiError> {
        let request = ApiRequest::new("SoftLayer_Account", "getScaleGroups").mask(LIST_MASK);
        self.client.call(&request).await
    }

    async fn get_scale_group(&self, id: u64, mask: Option<&str>) -> Result<ScaleGroup, ApiError> {
        let request = ApiRequest::new(SCALE_GROUP_SERVICE, "getObject")
            .id(id)
            .mask(mask.unwrap_or(DETAIL_MASK));
        self.client.call(&request).await
    }

    async fn get_virtual_guest_members(&self, id: u64) -> Result<Vec<ScaleMember>, ApiError> {
        let request = ApiRequest::new(SCALE_GROUP_SERVICE, "getVirtualGuestMembers")
            .id(id)
            .mask(MEMBERS_MASK);
        self.client.call(&request).await
    }

    async fn get_logs(&self, id: u64, date_min: Option<&str>) -> Result<Vec<ScaleGroupLog>, ApiError> {
        let mut request = ApiRequest::new(SCALE_GROUP_SERVICE, "getLogs").id(id).mask(LOGS_MASK);
        if let Some(date) = date_min {
            request = request.filter(ObjectFilter::new().with(Filter::date_after("logs.createDate", date)));
        }
        self.client.call(&request).await
    }

    async fn create_scale_group(&self, template: &ScaleGroup) -> Result<ScaleGroup, ApiError> {
        let request = ApiRequest::new(SCALE_GROUP_SERVICE, "createObject").param(template)?;
        self.client.call(&request).await
    }

    async fn edit_scale_group(&self, id: u64, template: &ScaleGroup) -> Result<bool, ApiError> {
        let request = ApiRequest::new(SCALE_GROUP_SERVICE, "editObject").id(id).param(template)?;
        self.client.call(&request).await
    }

    async fn scale(&self, id: u64, delta: i64) -> Result<Vec<ScaleMember>, ApiError> {
        let request = ApiRequest::new(SCALE_GROUP_SERVICE, "scale").id(id).param(delta)?;
        self.client.call(&request).await
    }

    async fn scale_to(&self, id: u64, number: i64) -> Result<Vec<ScaleMember>, ApiError> {
        let request = ApiRequest::new(SCALE_GROUP_SERVICE, "scaleTo").id(id).param(number)?;
        self.client.call(&request).await
    }

    async fn delete(&self, id: u64) -> Result<bool, ApiError> {
        let request = ApiRequest::new(SCALE_GROUP_SERVICE, "forceDeleteObject").id(id);
        self.client.call(&request).await
    }

    async fn get_datacenter_by_name(&self, name: &str, kind: DatacenterName) -> Result<Vec<Location>, ApiError> {
        let path = match kind {
            DatacenterName::Short => "name",
            DatacenterName::Long => "longName",
        };
        let request = ApiRequest::new("SoftLayer_Location", "getDatacenters")
            .filter(ObjectFilter::new().with(Filter::eq(path, name)));
        self.client.call(&request).await
    }
}
