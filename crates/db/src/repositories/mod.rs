//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod artwork_repo;
pub mod integration_log_repo;
pub mod render_run_repo;
pub mod template_repo;
pub mod upload_repo;

pub use artwork_repo::ArtworkRepo;
pub use integration_log_repo::IntegrationLogRepo;
pub use render_run_repo::RenderRunRepo;
pub use template_repo::TemplateRepo;
pub use upload_repo::UploadRepo;
