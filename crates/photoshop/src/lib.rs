//! REST client library for the external image-rendering service.
//!
//! The service composites artwork onto product templates via smart-object
//! replacement. Submission returns quickly with an opaque job handle; the
//! composition itself runs asynchronously on the service side and is
//! observed by polling. Finished composites arrive out of band through the
//! upload callback, carrying the metadata supplied at submission.

pub mod api;
pub mod config;
pub mod job;

pub use api::{CompositionTarget, PhotoshopApi, PhotoshopApiError, SmartObjectReplace};
pub use config::PhotoshopConfig;
pub use job::{JobStatusReport, RenderJobHandle, RenderJobStatus};
