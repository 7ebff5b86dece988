//! artproof event bus.
//!
//! In-process publish/subscribe hub for platform events. The rendering
//! pipeline publishes lifecycle events (`artwork.previews_render_started`,
//! `artwork.previews_rendered`, ...) and the API publishes trigger events;
//! any component can subscribe without coupling to the publisher.

pub mod bus;

pub use bus::{EventBus, PlatformEvent};
