//! ApiRequest for fluent request construction
//!
//! One request is one call of one method on one SoftLayer service.

use serde::Serialize;
use serde_json::Value;

use super::filter::ObjectFilter;
use crate::error::ApiError;

#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub service: String,
    pub method: String,
    pub id: Option<u64>,
    pub mask: Option<String>,
    pub filter: Option<ObjectFilter>,
    pub parameters: Vec<Value>,
    pub limit: Option<u32>,
    pub offset: Option<u32>,
}

impl ApiRequest {
    pub fn new(service: impl Into<String>, method: impl Into<String>) -> Self {
        Self {
            service: service.into(),
            method: method.into(),
            id: None,
            mask: None,
            filter: None,
            parameters: Vec::new(),
            limit: None,
            offset: None,
        }
    }

    /// Target a specific object of the service
    pub fn id(mut self, id: u64) -> Self {
        self.id = Some(id);
        self
    }

    /// Object mask, with or without the surrounding `mask[...]`
    pub fn mask(mut self, mask: impl Into<String>) -> Self {
        let mask = mask.into();
        if !mask.is_empty() {
            self.mask = Some(mask);
        }
        self
    }

    pub fn filter(mut self, filter: ObjectFilter) -> Self {
        if !filter.is_empty() {
            self.filter = Some(filter);
        }
        self
    }

    /// Append one positional parameter
    pub fn param<T: Serialize>(mut self, value: T) -> Result<Self, ApiError> {
        self.parameters.push(serde_json::to_value(value)?);
        Ok(self)
    }

    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn offset(mut self, offset: u32) -> Self {
        self.offset = Some(offset);
        self
    }

    /// Path relative to the endpoint, e.g. `SoftLayer_Hardware_Server/12/powerOn.json`
    pub fn path(&self) -> String {
        match self.id {
            Some(id) => format!("{}/{}/{}.json", self.service, id, self.method),
            None => format!("{}/{}.json", self.service, self.method),
        }
    }

    /// Query parameters understood by the REST endpoint
    pub fn query_params(&self) -> Vec<(String, String)> {
        let mut params = Vec::new();
        if let Some(mask) = &self.mask {
            params.push(("objectMask".to_string(), normalize_mask(mask)));
        }
        if let Some(filter) = &self.filter {
            params.push(("objectFilter".to_string(), filter.to_json_string()));
        }
        if let Some(limit) = self.limit {
            params.push((
                "resultLimit".to_string(),
                format!("{},{}", self.offset.unwrap_or(0), limit),
            ));
        }
        params
    }

    /// POST body, present only when the method takes parameters
    pub fn body(&self) -> Option<Value> {
        if self.parameters.is_empty() {
            None
        } else {
            Some(serde_json::json!({ "parameters": self.parameters }))
        }
    }
}

/// Collapse whitespace and make sure the mask is wrapped in `mask[...]`.
fn normalize_mask(mask: &str) -> String {
    let compact: String = mask.split_whitespace().collect();
    if compact.starts_with("mask") {
        compact
    } else {
        format!("mask[{}]", compact)
    }
}
