//! Composition request constants.

/// Destination width, in pixels, of every composited preview.
pub const COMPOSITION_WIDTH_PX: i32 = 3000;

/// Upload classification for generated preview images.
pub const UPLOAD_TYPE_PREVIEW: &str = "preview";

/// Upload classification for the per-size source images artists upload.
pub const UPLOAD_TYPE_BASE_RENDER: &str = "base_render";

/// Integration-log action recorded for every composition dispatch.
pub const ACTION_RENDER_PREVIEWS: &str = "photoshop.render_previews";
