//! REST API client for the rendering-service HTTP endpoints.
//!
//! Wraps the service's smart-object replacement API (composition
//! submission and job-status polling) using [`reqwest`].

use artproof_core::types::DbId;
use serde::{Deserialize, Serialize};

use crate::config::PhotoshopConfig;
use crate::job::{RenderJobHandle, RenderJobStatus};

/// HTTP client for the rendering service.
pub struct PhotoshopApi {
    client: reqwest::Client,
    api_url: String,
    api_key: String,
}

/// A composition request for one template.
///
/// Value object assembled per dispatch call; never persisted.
#[derive(Debug, Clone, Serialize)]
pub struct SmartObjectReplace {
    /// URL of the artwork base render injected into the smart object.
    pub artwork_input_url: String,
    /// URL of the template asset receiving the artwork.
    pub template_url: String,
    /// Destination width of the composite, in pixels.
    pub width: i32,
    /// Caller-generated reference echoed back on the upload callback.
    pub client_ref: String,
    /// Metadata the service passes through to the upload callback.
    pub target: CompositionTarget,
}

/// Upload metadata delivered back with the finished composite.
///
/// The service treats this as an opaque payload; the upload callback uses
/// it to create the preview record exactly as planned at dispatch time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompositionTarget {
    pub artwork_id: DbId,
    pub upload_type: String,
    pub position: i32,
    pub for_marketing: bool,
}

/// Response returned by the `/smart-object/replace` endpoint after
/// successfully queuing a composition.
#[derive(Debug, Deserialize)]
struct SubmitResponse {
    /// Server-assigned identifier for the queued job.
    job_id: String,
}

/// Response returned by the `/jobs/{handle}/status` endpoint.
#[derive(Debug, Deserialize)]
struct StatusResponse {
    status: RenderJobStatus,
}

/// Errors from the rendering-service REST layer.
#[derive(Debug, thiserror::Error)]
pub enum PhotoshopApiError {
    /// The HTTP request itself failed (network, DNS, TLS, etc.).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The service returned a non-2xx status code.
    #[error("Rendering service error ({status}): {body}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Raw response body for debugging.
        body: String,
    },
}

impl PhotoshopApi {
    /// Create a new API client.
    pub fn new(api_url: String, api_key: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_url,
            api_key,
        }
    }

    /// Create an API client from environment-derived configuration.
    pub fn from_config(config: &PhotoshopConfig) -> Self {
        Self::new(config.api_url.clone(), config.api_key.clone())
    }

    /// Create an API client reusing an existing [`reqwest::Client`]
    /// (connection pooling across callers).
    pub fn with_client(client: reqwest::Client, api_url: String, api_key: String) -> Self {
        Self {
            client,
            api_url,
            api_key,
        }
    }

    /// Submit a smart-object replacement for composition.
    ///
    /// Sends `POST /smart-object/replace`. The call returns quickly with
    /// the server-assigned job handle; rendering happens asynchronously on
    /// the service side.
    pub async fn submit_smart_object_replace(
        &self,
        request: &SmartObjectReplace,
    ) -> Result<RenderJobHandle, PhotoshopApiError> {
        let response = self
            .client
            .post(format!("{}/smart-object/replace", self.api_url))
            .bearer_auth(&self.api_key)
            .json(request)
            .send()
            .await?;

        let submit: SubmitResponse = Self::parse_response(response).await?;
        Ok(RenderJobHandle::new(submit.job_id))
    }

    /// Poll the completion state of a composition job.
    ///
    /// Sends `GET /jobs/{handle}/status`. Pure query with no side effects
    /// on the service; safe to call repeatedly.
    pub async fn job_status(
        &self,
        handle: &RenderJobHandle,
    ) -> Result<RenderJobStatus, PhotoshopApiError> {
        let response = self
            .client
            .get(format!("{}/jobs/{}/status", self.api_url, handle))
            .bearer_auth(&self.api_key)
            .send()
            .await?;

        let status: StatusResponse = Self::parse_response(response).await?;
        Ok(status.status)
    }

    // ---- private helpers ----

    /// Ensure the response has a success status code. Returns the response
    /// unchanged on success, or a [`PhotoshopApiError::Api`] containing the
    /// status and body text on failure.
    async fn ensure_success(
        response: reqwest::Response,
    ) -> Result<reqwest::Response, PhotoshopApiError> {
        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            return Err(PhotoshopApiError::Api {
                status: status.as_u16(),
                body,
            });
        }
        Ok(response)
    }

    /// Parse a successful JSON response body into the expected type.
    async fn parse_response<T: serde::de::DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T, PhotoshopApiError> {
        let response = Self::ensure_success(response).await?;
        Ok(response.json::<T>().await?)
    }
}
