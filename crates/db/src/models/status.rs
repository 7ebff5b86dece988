//! Status enum mapping to the `render_run_statuses` lookup table.
//!
//! Variant discriminants match the seed data (1-based) inserted by the
//! initial migration.

/// Status ID type matching SMALLINT in the database.
pub type StatusId = i16;

/// Render-run execution status.
#[repr(i16)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderRunStatus {
    Queued = 1,
    Running = 2,
    Completed = 3,
    Failed = 4,
}

impl RenderRunStatus {
    /// Return the database status ID.
    pub fn id(self) -> StatusId {
        self as StatusId
    }
}

impl From<RenderRunStatus> for StatusId {
    fn from(value: RenderRunStatus) -> Self {
        value as StatusId
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_ids_match_seed_data() {
        assert_eq!(RenderRunStatus::Queued.id(), 1);
        assert_eq!(RenderRunStatus::Running.id(), 2);
        assert_eq!(RenderRunStatus::Completed.id(), 3);
        assert_eq!(RenderRunStatus::Failed.id(), 4);
    }

    #[test]
    fn status_into_status_id() {
        let id: StatusId = RenderRunStatus::Queued.into();
        assert_eq!(id, 1);
    }
}
