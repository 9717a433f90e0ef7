//! The Stable Diffusion ImageGen pipeline: the adapter a chat host drives.

use std::sync::{Arc, RwLock};

use futures::{future, stream};

use crate::adapters::live::HttpImageService;
use crate::error::PipelineError;
use crate::ports::image_service::{GenerationRequest, ImageService};
use crate::ports::pipeline::{ChunkStream, PipeFuture, Pipeline, PipelineKind, TurnRequest};
use crate::render::image_markdown;
use crate::settings::Settings;

/// Display name reported to the host.
const PIPELINE_NAME: &str = "Stable Diffusion ImageGen";

/// Chat-host adapter that turns prompts into markdown image lines by calling
/// a remote text-to-image service.
///
/// Settings are held behind a lock and swapped as a whole by
/// [`Pipeline::configure`]; every call clones the current [`Arc`] once on
/// entry, so a call in flight never observes a partially applied update.
pub struct ImageGenPipeline {
    settings: RwLock<Arc<Settings>>,
    service: Arc<dyn ImageService>,
}

impl ImageGenPipeline {
    /// Create a pipeline backed by the live HTTP image service.
    #[must_use]
    pub fn new(settings: Settings) -> Self {
        Self::with_service(settings, Arc::new(HttpImageService::new()))
    }

    /// Create a pipeline backed by the given image service implementation.
    #[must_use]
    pub fn with_service(settings: Settings, service: Arc<dyn ImageService>) -> Self {
        Self { settings: RwLock::new(Arc::new(settings)), service }
    }

    /// The settings snapshot the next call will use.
    #[must_use]
    pub fn settings(&self) -> Arc<Settings> {
        Arc::clone(&self.settings.read().expect("settings lock poisoned"))
    }

    /// Request image generation for `prompt` and return the image URLs in
    /// the order the service produced them.
    ///
    /// Issues exactly one outbound call; there is no retry, caching or
    /// reordering. An empty prompt is forwarded as-is and its acceptance is
    /// the service's call. An empty result is success.
    ///
    /// # Errors
    ///
    /// Returns the failure of the outbound call: transport errors, non-2xx
    /// responses, or a response body that cannot be decoded.
    pub async fn generate(&self, prompt: &str) -> Result<Vec<String>, PipelineError> {
        let snapshot = self.settings();
        let request = GenerationRequest {
            endpoint: snapshot.endpoint.clone(),
            api_key: snapshot.api_key.clone(),
            prompt: prompt.to_string(),
            num_images: snapshot.num_images,
            size: snapshot.image_size.clone(),
            timeout_secs: snapshot.timeout_secs,
        };
        self.service.generate(&request).await
    }
}

impl Pipeline for ImageGenPipeline {
    fn kind(&self) -> PipelineKind {
        PipelineKind::Manifold
    }

    fn name(&self) -> &str {
        PIPELINE_NAME
    }

    fn configure(&self, options: &serde_json::Value) -> Result<(), PipelineError> {
        let settings = Settings::from_options(options)?;
        let mut guard = self.settings.write().expect("settings lock poisoned");
        *guard = Arc::new(settings);
        Ok(())
    }

    fn pipe(&self, turn: TurnRequest) -> PipeFuture<'_> {
        Box::pin(async move {
            tracing::debug!(
                model_id = %turn.model_id,
                history_len = turn.messages.len(),
                "pipe"
            );

            let urls = self.generate(&turn.user_message).await?;
            let chunk: Result<String, PipelineError> = Ok(image_markdown(&urls));

            let chunks: ChunkStream = Box::pin(stream::once(future::ready(chunk)));
            Ok(chunks)
        })
    }
}
