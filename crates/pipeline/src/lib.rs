//! Preview rendering pipeline.
//!
//! Given one artwork, a pipeline run destroys the stale preview set,
//! dispatches one composition job per assigned template — standard
//! templates first, then non-model mockups, model mockups, and marketing
//! renders — and appends the two synthesized photos (sizing chart and
//! product details) at their fixed positions. Job handles collected during
//! dispatch feed the pull-based status poller.
//!
//! There is no rollback: preview destruction is the commit point, and the
//! whole run is idempotently re-runnable because it starts by destroying
//! whatever previews exist.

pub mod client;
pub mod error;
pub mod plan;
pub mod run;
pub mod selector;
pub mod status;

pub use error::{DispatchError, PipelineError};
pub use plan::{plan_dispatches, PlannedDispatch};
pub use run::{PipelineConfig, RenderOutcome, RenderPreviews};
pub use selector::RenderBatches;
