use async_trait::async_trait;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::time::Duration;

use crate::auth::session::SessionContext;
use crate::config::Config;
use crate::error::ApiError;

pub mod company;
pub mod employee;
pub mod leave_policy;
pub mod leave_type;
pub mod public_holiday;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl Method {
    fn as_str(&self) -> &str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
        }
    }
}

/// One request as the gateway hands it to the transport. The path is
/// relative to the configured API base URL.
#[derive(Debug, Clone)]
pub struct ApiRequest {
    pub method: Method,
    pub path: String,
    pub token: String,
    pub body: Option<Value>,
}

#[derive(Debug, Clone)]
pub struct ApiResponse {
    pub status: u16,
    pub body: Value,
}

/// The HTTP boundary. Errors are transport failures only; non-2xx
/// statuses come back as a normal response for the gateway to classify.
#[async_trait]
pub trait ApiTransport: Send + Sync {
    async fn send(&self, req: ApiRequest) -> Result<ApiResponse, ApiError>;
}

/// Production transport over reqwest.
pub struct HttpTransport {
    http: reqwest::Client,
    base_url: String,
}

impl HttpTransport {
    pub fn new(base_url: impl Into<String>, timeout_secs: u64) -> Result<Self, ApiError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .map_err(|e| ApiError::network(format!("Failed to create HTTP client: {e}")))?;

        let base_url: String = base_url.into();
        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn from_config(config: &Config) -> Result<Self, ApiError> {
        Self::new(&config.api_base_url, config.http_timeout_secs)
    }
}

#[async_trait]
impl ApiTransport for HttpTransport {
    async fn send(&self, req: ApiRequest) -> Result<ApiResponse, ApiError> {
        let url = format!("{}{}", self.base_url, req.path);

        let mut builder = match req.method {
            Method::Get => self.http.get(&url),
            Method::Post => self.http.post(&url),
            Method::Put => self.http.put(&url),
            Method::Delete => self.http.delete(&url),
        };
        builder = builder.bearer_auth(&req.token);
        if let Some(body) = &req.body {
            builder = builder.json(body);
        }

        let response = builder.send().await.map_err(|e| {
            ApiError::network(format!("{} {} failed: {}", req.method.as_str(), req.path, e))
        })?;

        let status = response.status().as_u16();
        let bytes = response
            .bytes()
            .await
            .map_err(|e| ApiError::network(format!("Failed to read response body: {e}")))?;

        // Failure bodies are not always JSON (proxies, error pages).
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or(Value::Null)
        };

        Ok(ApiResponse { status, body })
    }
}

/// Typed entry point the resource modules call through.
pub struct Api<T: ApiTransport> {
    transport: T,
}

impl Api<HttpTransport> {
    pub fn from_config(config: &Config) -> Result<Self, ApiError> {
        Ok(Self::new(HttpTransport::from_config(config)?))
    }
}

impl<T: ApiTransport> Api<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    pub(crate) async fn request<P: DeserializeOwned>(
        &self,
        ctx: &SessionContext,
        method: Method,
        path: String,
        body: Option<Value>,
    ) -> Result<P, ApiError> {
        let response = self
            .transport
            .send(ApiRequest {
                method,
                path: path.clone(),
                token: ctx.token.clone(),
                body,
            })
            .await?;

        if !(200..300).contains(&response.status) {
            return Err(classify_failure(response.status, &response.body));
        }

        serde_json::from_value(response.body).map_err(|e| {
            tracing::error!(error = %e, %path, "Failed to decode response payload");
            ApiError::network(format!("Failed to decode {path} response: {e}"))
        })
    }
}

pub(crate) fn encode_body<B: Serialize>(body: &B) -> Result<Value, ApiError> {
    serde_json::to_value(body)
        .map_err(|e| ApiError::network(format!("Failed to encode request body: {e}")))
}

/// Map a non-2xx response onto the domain failure taxonomy.
///
/// 401/403 are reserved for the auth guard path. Everything the taxonomy
/// does not name collapses into `Network`.
pub(crate) fn classify_failure(status: u16, body: &Value) -> ApiError {
    let message = error_message(body);

    match status {
        401 | 403 => ApiError::Unauthenticated,
        404 => ApiError::NotFound {
            message: message.unwrap_or_else(|| "Resource not found".to_string()),
        },
        409 => ApiError::Conflict {
            message: message.unwrap_or_else(|| "Resource already exists".to_string()),
        },
        400 | 422 => {
            let message = message.unwrap_or_else(|| "Request rejected by server".to_string());
            // Some deployments report duplicates as a plain 400.
            if message.to_lowercase().contains("already exists") {
                ApiError::Conflict { message }
            } else {
                ApiError::validation("form", message)
            }
        }
        _ => ApiError::Network {
            message: message.unwrap_or_else(|| format!("Request failed with status {status}")),
        },
    }
}

fn error_message(body: &Value) -> Option<String> {
    body.get("error")
        .or_else(|| body.get("message"))
        .and_then(Value::as_str)
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn unauthorized_statuses_map_to_unauthenticated() {
        assert_eq!(classify_failure(401, &Value::Null), ApiError::Unauthenticated);
        assert_eq!(classify_failure(403, &Value::Null), ApiError::Unauthenticated);
    }

    #[test]
    fn not_found_carries_server_message() {
        let err = classify_failure(404, &json!({"message": "Leave type not found"}));
        assert_eq!(
            err,
            ApiError::NotFound {
                message: "Leave type not found".to_string()
            }
        );
    }

    #[test]
    fn conflict_status_maps_to_conflict() {
        let err = classify_failure(409, &json!({"error": "Leave type already exists"}));
        assert!(matches!(err, ApiError::Conflict { .. }));
    }

    #[test]
    fn duplicate_reported_as_bad_request_still_maps_to_conflict() {
        let err = classify_failure(400, &json!({"error": "Leave type already exists"}));
        assert!(matches!(err, ApiError::Conflict { .. }));
    }

    #[test]
    fn bad_request_maps_to_validation() {
        let err = classify_failure(400, &json!({"error": "accrualPeriod is required"}));
        assert_eq!(err.field_errors()[0].message, "accrualPeriod is required");
    }

    #[test]
    fn server_error_maps_to_network_with_status() {
        let err = classify_failure(500, &Value::Null);
        assert_eq!(
            err,
            ApiError::network("Request failed with status 500".to_string())
        );
    }

    #[test]
    fn error_message_prefers_error_key() {
        let body = json!({"error": "nope", "message": "other"});
        assert_eq!(error_message(&body).as_deref(), Some("nope"));
    }
}
