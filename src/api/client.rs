use log::{debug, info};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::time::Duration;

use super::request::ApiRequest;
use crate::config::{Config, Credentials};
use crate::error::ApiError;

/// Page size used when walking paginated list methods.
pub const PAGE_SIZE: u32 = 50;

/// SoftLayer REST client with connection pooling
#[derive(Clone)]
pub struct SoftLayerClient {
    credentials: Credentials,
    endpoint: String,
    http_client: reqwest::Client,
}

#[derive(Debug, Deserialize)]
struct RemoteError {
    error: String,
    code: Option<String>,
}

impl SoftLayerClient {
    pub fn new(credentials: Credentials, endpoint: impl Into<String>, timeout: Duration) -> Result<Self, ApiError> {
        let http_client = reqwest::Client::builder()
            .pool_max_idle_per_host(4)
            .timeout(timeout)
            .connect_timeout(Duration::from_secs(10))
            .user_agent(concat!("slcli/", env!("CARGO_PKG_VERSION")))
            .build()?;

        let mut endpoint = endpoint.into();
        while endpoint.ends_with('/') {
            endpoint.pop();
        }

        Ok(Self {
            credentials,
            endpoint,
            http_client,
        })
    }

    pub fn from_config(config: &Config) -> anyhow::Result<Self> {
        let credentials = config.credentials()?;
        Ok(Self::new(
            credentials,
            config.endpoint_url.clone(),
            Duration::from_secs(config.timeout),
        )?)
    }

    /// Perform one round trip. Errors are returned as the API reported them.
    pub async fn call<T: DeserializeOwned>(&self, request: &ApiRequest) -> Result<T, ApiError> {
        let url = format!("{}/{}", self.endpoint, request.path());
        info!("Calling {}::{} id={:?}", request.service, request.method, request.id);
        debug!("Request URL: {}", url);

        let builder = match request.body() {
            Some(body) => {
                debug!("Request body: {}", body);
                self.http_client.post(&url).json(&body)
            }
            None => self.http_client.get(&url),
        };

        let response = builder
            .basic_auth(&self.credentials.username, Some(&self.credentials.api_key))
            .query(&request.query_params())
            .header("Accept", "application/json")
            .send()
            .await?;

        let status = response.status();
        debug!("Response status: {}", status);
        let text = response.text().await?;

        if status.is_success() {
            Ok(serde_json::from_str(&text)?)
        } else {
            match serde_json::from_str::<RemoteError>(&text) {
                Ok(remote) => Err(ApiError {
                    message: remote.error,
                    code: remote.code,
                }),
                Err(_) => Err(ApiError::new(format!("{}: {}", status, text.trim()))),
            }
        }
    }

    /// Walk a paginated list method until a short page comes back.
    pub async fn call_all<T: DeserializeOwned>(&self, request: ApiRequest) -> Result<Vec<T>, ApiError> {
        let mut results = Vec::new();
        let mut page = 0;
        loop {
            let paged = request.clone().limit(PAGE_SIZE).offset(page * PAGE_SIZE);
            let batch: Vec<T> = self.call(&paged).await?;
            let done = batch.len() < PAGE_SIZE as usize;
            results.extend(batch);
            if done {
                break;
            }
            page += 1;
        }
        Ok(results)
    }
}
