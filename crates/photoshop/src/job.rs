//! Job handle and status types for asynchronous composition jobs.

use serde::{Deserialize, Serialize};

/// Opaque identifier for an in-flight composition job.
///
/// Returned by [`PhotoshopApi::submit_smart_object_replace`]; pass it back
/// to [`PhotoshopApi::job_status`] to poll completion.
///
/// [`PhotoshopApi::submit_smart_object_replace`]: crate::api::PhotoshopApi::submit_smart_object_replace
/// [`PhotoshopApi::job_status`]: crate::api::PhotoshopApi::job_status
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RenderJobHandle(String);

impl RenderJobHandle {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for RenderJobHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for RenderJobHandle {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// Completion state of a composition job.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RenderJobStatus {
    /// Queued or still rendering.
    Pending,
    /// Finished; the result image is delivered via the upload callback.
    Complete,
    /// The service could not produce the composite.
    Failed,
}

impl RenderJobStatus {
    /// Whether the job has reached a terminal state.
    pub fn is_terminal(self) -> bool {
        !matches!(self, Self::Pending)
    }
}

/// One entry of a job-status aggregation over a render run.
#[derive(Debug, Clone, Serialize)]
pub struct JobStatusReport {
    pub job_handle: RenderJobHandle,
    pub status: RenderJobStatus,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn handle_serializes_transparently() {
        let handle = RenderJobHandle::new("job-123");
        assert_eq!(serde_json::to_string(&handle).unwrap(), "\"job-123\"");
    }

    #[test]
    fn status_deserializes_from_lowercase() {
        let status: RenderJobStatus = serde_json::from_str("\"pending\"").unwrap();
        assert_eq!(status, RenderJobStatus::Pending);

        let status: RenderJobStatus = serde_json::from_str("\"complete\"").unwrap();
        assert_eq!(status, RenderJobStatus::Complete);

        let status: RenderJobStatus = serde_json::from_str("\"failed\"").unwrap();
        assert_eq!(status, RenderJobStatus::Failed);
    }

    #[test]
    fn status_rejects_unknown_value() {
        assert!(serde_json::from_str::<RenderJobStatus>("\"stalled\"").is_err());
    }

    #[test]
    fn only_pending_is_non_terminal() {
        assert!(!RenderJobStatus::Pending.is_terminal());
        assert!(RenderJobStatus::Complete.is_terminal());
        assert!(RenderJobStatus::Failed.is_terminal());
    }
}
