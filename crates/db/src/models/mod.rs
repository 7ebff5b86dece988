//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` create DTO where the entity is inserted by callers

pub mod artwork;
pub mod integration_log;
pub mod render_run;
pub mod status;
pub mod template;
pub mod upload;
