//! Composition client: one external dispatch per template.

use artproof_core::composition::{ACTION_RENDER_PREVIEWS, COMPOSITION_WIDTH_PX, UPLOAD_TYPE_PREVIEW};
use artproof_core::shape::TemplateShape;
use artproof_core::sizes;
use artproof_core::types::DbId;
use artproof_db::models::artwork::Artwork;
use artproof_db::repositories::{IntegrationLogRepo, UploadRepo};
use artproof_photoshop::{CompositionTarget, PhotoshopApi, RenderJobHandle, SmartObjectReplace};
use sqlx::PgPool;

use crate::error::DispatchError;
use crate::plan::PlannedDispatch;

/// Dispatches planned compositions to the rendering service.
pub struct CompositionClient<'a> {
    pool: &'a PgPool,
    api: &'a PhotoshopApi,
}

impl<'a> CompositionClient<'a> {
    pub fn new(pool: &'a PgPool, api: &'a PhotoshopApi) -> Self {
        Self { pool, api }
    }

    /// Dispatch one planned composition for an artwork.
    ///
    /// Resolves the base render for the shape's primary size, submits the
    /// smart-object replacement, and records the dispatch in the
    /// integration log. The handle is persisted on the log entry so status
    /// lookup survives a process restart.
    pub async fn dispatch(
        &self,
        artwork: &Artwork,
        shape: TemplateShape,
        render_run_id: Option<DbId>,
        planned: &PlannedDispatch,
    ) -> Result<RenderJobHandle, DispatchError> {
        let size = sizes::primary_size(shape);
        let base_render = UploadRepo::find_base_render(self.pool, artwork.id, size)
            .await?
            .ok_or(DispatchError::MissingBaseRender {
                artwork_id: artwork.id,
                size,
            })?;

        let request = SmartObjectReplace {
            artwork_input_url: base_render.file_url,
            template_url: planned.template.image_url.clone(),
            width: COMPOSITION_WIDTH_PX,
            client_ref: uuid::Uuid::new_v4().to_string(),
            target: CompositionTarget {
                artwork_id: artwork.id,
                upload_type: UPLOAD_TYPE_PREVIEW.to_string(),
                position: planned.position,
                for_marketing: planned.template.for_marketing,
            },
        };

        let handle = self.api.submit_smart_object_replace(&request).await?;

        IntegrationLogRepo::record_dispatched(
            self.pool,
            artwork.id,
            Some(planned.template.id),
            render_run_id,
            ACTION_RENDER_PREVIEWS,
            handle.as_str(),
        )
        .await?;

        tracing::info!(
            artwork_id = artwork.id,
            template_id = planned.template.id,
            job_handle = %handle,
            position = planned.position,
            for_marketing = planned.template.for_marketing,
            "Composition dispatched",
        );

        Ok(handle)
    }
}
