use super::endpoints::{Auth, Endpoint};
use super::transport::{ApiRequest, RawResponse, Transport};
use crate::errors::{AppError, AppResult, GENERIC_REQUEST_ERROR};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Typed request helper shared by every screen.
///
/// Holds the access token of the session it was built from; a client
/// without a token can only reach anonymous endpoints.
#[derive(Clone)]
pub struct ApiClient {
    transport: Arc<dyn Transport>,
    token: Option<String>,
}

impl ApiClient {
    pub fn new(transport: Arc<dyn Transport>, token: Option<String>) -> Self {
        Self { transport, token }
    }

    pub fn anonymous(transport: Arc<dyn Transport>) -> Self {
        Self::new(transport, None)
    }

    /// Send the request and hand back status + body untouched.
    ///
    /// Bearer endpoints without a token fail with `InvalidSession` before
    /// anything reaches the transport.
    pub async fn execute<B: Serialize + ?Sized>(
        &self,
        endpoint: &Endpoint,
        body: Option<&B>,
    ) -> AppResult<RawResponse> {
        let bearer = match endpoint.auth {
            Auth::Anonymous => None,
            Auth::Bearer => match &self.token {
                Some(t) => Some(t.clone()),
                None => {
                    debug!(path = %endpoint.path, "no access token, skipping call");
                    return Err(AppError::InvalidSession);
                }
            },
        };

        let body = body.map(serde_json::to_value).transpose()?;

        let request = ApiRequest {
            method: endpoint.method.clone(),
            path: endpoint.path.clone(),
            query: endpoint.query.clone(),
            body,
            bearer,
        };

        let response = self.transport.send(request).await?;
        info!(
            method = %endpoint.method,
            path = %endpoint.path,
            status = response.status,
            "api call finished"
        );
        Ok(response)
    }

    /// Send and decode a 2xx body into `R`; every other status becomes an error.
    pub async fn send<B, R>(&self, endpoint: &Endpoint, body: Option<&B>) -> AppResult<R>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let response = self.execute(endpoint, body).await?;

        if response.is_success() {
            return serde_json::from_value(response.body).map_err(|e| AppError::Decode {
                endpoint: endpoint.path.clone(),
                message: e.to_string(),
            });
        }

        if response.status == 401 && endpoint.auth == Auth::Bearer {
            return Err(AppError::InvalidSession);
        }

        let detail = extract_detail(&response.body);
        warn!(path = %endpoint.path, status = response.status, %detail, "request rejected");
        Err(AppError::Request {
            status: response.status,
            detail,
        })
    }

    /// GET without a body.
    pub async fn fetch<R: DeserializeOwned>(&self, endpoint: &Endpoint) -> AppResult<R> {
        self.send::<Value, R>(endpoint, None).await
    }
}

/// The backend's `detail` string when present, else the generic message.
pub fn extract_detail(body: &Value) -> String {
    body.get("detail")
        .and_then(Value::as_str)
        .filter(|s| !s.trim().is_empty())
        .map(str::to_string)
        .unwrap_or_else(|| GENERIC_REQUEST_ERROR.to_string())
}
