use crate::common::{Allowance, CryptowatchConfig, CryptowatchError};
use async_trait::async_trait;
use reqwest::StatusCode;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use url::Url;

/// Every successful response wraps its payload as `{"result": ..., "allowance": {...}}`.
#[derive(Debug, Deserialize)]
struct ApiEnvelope<T> {
    result: T,
    #[serde(default, deserialize_with = "lenient_allowance")]
    allowance: Option<Allowance>,
}

// An allowance of an unexpected shape is dropped; it never fails the call.
fn lenient_allowance<'de, D>(deserializer: D) -> Result<Option<Allowance>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let raw = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(raw.and_then(|value| serde_json::from_value(value).ok()))
}

// Common resource trait definition
#[async_trait]
pub trait ResourceTrait: Send + Sync {
    // Resource specific methods
    fn config(&self) -> &CryptowatchConfig;
    fn client(&self) -> &reqwest::Client;
    fn resource_name(&self) -> &str;

    // Default implementations

    /// Base URL plus one path segment per element; segments are percent-encoded.
    fn endpoint_url(&self, segments: &[&str]) -> Result<Url, CryptowatchError> {
        let mut url = self.config().api_base.clone();
        url.path_segments_mut()
            .map_err(|_| {
                CryptowatchError::ConfigError(format!(
                    "API base cannot carry a path: {}",
                    self.config().api_base
                ))
            })?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    /// GET `segments` with the API key and `query` attached, returning the unwrapped `result`.
    async fn get<T: DeserializeOwned>(
        &self,
        segments: &[&str],
        query: &[(&str, String)],
    ) -> Result<T, CryptowatchError> {
        let url = self.endpoint_url(segments)?;
        tracing::debug!(resource = self.resource_name(), path = url.path(), "GET");

        let response = self
            .client()
            .get(url)
            .query(&[("apikey", self.config().api_key.as_str())])
            .query(query)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        parse_response(self.resource_name(), status, &body)
    }
}

/// Map a raw HTTP status and body onto the unwrapped `result` or a typed error.
pub(crate) fn parse_response<T: DeserializeOwned>(
    resource: &str,
    status: StatusCode,
    body: &str,
) -> Result<T, CryptowatchError> {
    if !status.is_success() {
        let message = api_error_message(body);
        tracing::warn!(resource, status = status.as_u16(), error = %message, "request rejected");
        return Err(CryptowatchError::ApiError {
            status: status.as_u16(),
            message,
        });
    }

    let value: serde_json::Value = serde_json::from_str(body)
        .map_err(|e| CryptowatchError::malformed(format!("{}: body is not JSON: {}", resource, e)))?;

    // The API occasionally reports failures with a 2xx status and an error payload.
    if let Some(message) = value.get("error").and_then(|e| e.as_str()) {
        tracing::warn!(resource, status = status.as_u16(), error = message, "error payload");
        return Err(CryptowatchError::ApiError {
            status: status.as_u16(),
            message: message.to_string(),
        });
    }

    let envelope: ApiEnvelope<T> = serde_json::from_value(value)
        .map_err(|e| CryptowatchError::malformed(format!("{}: {}", resource, e)))?;

    if let Some(allowance) = &envelope.allowance {
        tracing::debug!(
            resource,
            cost = allowance.cost,
            remaining = allowance.remaining,
            "allowance"
        );
    }

    Ok(envelope.result)
}

fn api_error_message(body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|v| v.get("error").and_then(|e| e.as_str()).map(str::to_string))
        .unwrap_or_else(|| body.trim().to_string())
}

// RESOURCE MACRO
macro_rules! create_resource {
    (
        $struct_name:ident, $resource_name:expr
    ) => {
        #[derive(Debug, Clone)]
        pub struct $struct_name {
            client: reqwest::Client,
            config: $crate::common::CryptowatchConfig,
        }

        impl $struct_name {
            pub fn new(
                config: $crate::common::CryptowatchConfig,
            ) -> $crate::common::Result<Self> {
                Ok(Self {
                    client: $crate::common::create_http_client(&config)?,
                    config,
                })
            }
        }

        #[async_trait::async_trait]
        impl $crate::common::ResourceTrait for $struct_name {
            fn config(&self) -> &$crate::common::CryptowatchConfig {
                &self.config
            }

            fn client(&self) -> &reqwest::Client {
                &self.client
            }

            fn resource_name(&self) -> &str {
                $resource_name
            }
        }
    };
}

pub(crate) use create_resource;
