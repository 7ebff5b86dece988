//! HTTP request handlers, one module per resource.

pub mod artworks;
pub mod uploads;
