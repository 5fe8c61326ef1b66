//! HTTP client for the task-management API.
//!
//! One `ApiClient` is built at startup from the configured base URL and the
//! stored bearer token, then handed to every component that talks to the
//! backend. Components never read credentials themselves.

use reqwest::{header, Client, Response};
use serde::de::DeserializeOwned;

use super::error::ApiError;
use super::models::{DataEnvelope, ErrorBody, RegisterRequest, Task};

/// Connection settings for [`ApiClient::new`].
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Base URL of the backend (e.g. `http://localhost:3000`).
    pub base_url: String,
    /// Bearer token sent with every request.
    pub token: String,
    /// Request timeout in seconds.
    pub timeout_secs: u64,
}

/// Authorized client for the task API. Cheap to clone; clones share the
/// underlying connection pool.
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    /// Build a client with the bearer token installed as a default header.
    pub fn new(config: ApiConfig) -> Result<Self, ApiError> {
        let mut headers = header::HeaderMap::new();
        let bearer = format!("Bearer {}", config.token);
        let mut token_value =
            header::HeaderValue::from_str(&bearer).map_err(|e| ApiError::InvalidToken {
                message: e.to_string(),
            })?;
        token_value.set_sensitive(true);
        headers.insert(header::AUTHORIZATION, token_value);

        let client = Client::builder()
            .default_headers(headers)
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| ApiError::Network {
                message: format!("failed to build HTTP client: {e}"),
            })?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Fetch the full detail of a single task: `GET /api/tasks/{id}`.
    pub async fn fetch_task(&self, task_id: i64) -> Result<Task, ApiError> {
        let endpoint = format!("/api/tasks/{task_id}");
        let response = self
            .client
            .get(self.url(&endpoint))
            .send()
            .await
            .map_err(|e| ApiError::network(&e))?;
        let envelope: DataEnvelope<Task> = Self::handle_response(response, &endpoint).await?;
        Ok(envelope.data)
    }

    /// Fetch the task list snapshot the table renders: `GET /api/tasks`.
    pub async fn list_tasks(&self) -> Result<Vec<Task>, ApiError> {
        let endpoint = "/api/tasks";
        let response = self
            .client
            .get(self.url(endpoint))
            .send()
            .await
            .map_err(|e| ApiError::network(&e))?;
        let envelope: DataEnvelope<Vec<Task>> = Self::handle_response(response, endpoint).await?;
        Ok(envelope.data)
    }

    /// Register a new user: `POST /api/auth/register`. The success body is
    /// opaque and discarded.
    pub async fn register_user(&self, request: &RegisterRequest) -> Result<(), ApiError> {
        let endpoint = "/api/auth/register";
        let response = self
            .client
            .post(self.url(endpoint))
            .json(request)
            .send()
            .await
            .map_err(|e| ApiError::network(&e))?;
        Self::check_status(response, endpoint).await?;
        Ok(())
    }

    /// Decode a successful response, or turn an error status into an
    /// [`ApiError::Status`] carrying the server message when one is present.
    async fn handle_response<T: DeserializeOwned>(
        response: Response,
        endpoint: &str,
    ) -> Result<T, ApiError> {
        let response = Self::check_status(response, endpoint).await?;
        response
            .json::<T>()
            .await
            .map_err(|e| ApiError::decode(endpoint, &e))
    }

    async fn check_status(response: Response, endpoint: &str) -> Result<Response, ApiError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let server_message = response
            .json::<ErrorBody>()
            .await
            .ok()
            .and_then(|body| body.message)
            .filter(|m| !m.is_empty());

        Err(match server_message {
            Some(message) => ApiError::Status {
                status: status.as_u16(),
                endpoint: endpoint.to_string(),
                message,
                server_message: true,
            },
            None => ApiError::Status {
                status: status.as_u16(),
                endpoint: endpoint.to_string(),
                message: format!("HTTP {status}"),
                server_message: false,
            },
        })
    }
}
