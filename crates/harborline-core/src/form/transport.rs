//! HTTP transport to the form endpoint.

use std::future::Future;
use std::time::Duration;

use reqwest::header::ACCEPT;

use crate::error::{SiteError, SiteResult};

/// What gets posted: the form's action URL and its field values
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormRequest {
    pub action: String,
    pub fields: Vec<(String, String)>,
}

/// Status and body of an endpoint response
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

/// Sends a form to its endpoint.
///
/// `Err` means no response was obtained at all; any HTTP status, including
/// errors, comes back as `Ok`.
pub trait FormTransport {
    fn post(&self, request: &FormRequest) -> impl Future<Output = SiteResult<RawResponse>> + Send;
}

/// Multipart POST over `reqwest`, asking for a JSON response
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    pub fn new(client: reqwest::Client) -> Self {
        Self { client }
    }

    /// Client with the site's user agent and a 30 second timeout
    pub fn with_defaults() -> SiteResult<Self> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("Harborline/", env!("CARGO_PKG_VERSION")))
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(|e| SiteError::Transport(e.to_string()))?;
        Ok(Self::new(client))
    }
}

impl FormTransport for ReqwestTransport {
    async fn post(&self, request: &FormRequest) -> SiteResult<RawResponse> {
        let form = request
            .fields
            .iter()
            .fold(reqwest::multipart::Form::new(), |form, (name, value)| {
                form.text(name.clone(), value.clone())
            });

        let response = self
            .client
            .post(&request.action)
            .header(ACCEPT, "application/json")
            .multipart(form)
            .send()
            .await
            .map_err(|e| SiteError::Transport(e.to_string()))?;

        let status = response.status().as_u16();
        let body = match response.bytes().await {
            Ok(bytes) => bytes.to_vec(),
            Err(e) => {
                tracing::warn!(status, error = %e, "Failed to read response body");
                Vec::new()
            }
        };

        Ok(RawResponse { status, body })
    }
}
