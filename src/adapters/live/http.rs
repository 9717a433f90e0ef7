//! Live adapter speaking the generations JSON protocol over HTTP.

use std::time::Duration;

use reqwest::Client;
use serde::Deserialize;

use crate::error::PipelineError;
use crate::ports::image_service::{GenerationRequest, ImageService, ServiceFuture};

/// Live image service that POSTs prompts to a generations endpoint.
///
/// The underlying [`Client`] pools connections and is safe to share across
/// concurrent calls.
pub struct HttpImageService {
    client: Client,
}

impl HttpImageService {
    /// Create a new service with a fresh connection pool.
    #[must_use]
    pub fn new() -> Self {
        Self { client: Client::new() }
    }
}

impl Default for HttpImageService {
    fn default() -> Self {
        Self::new()
    }
}

impl ImageService for HttpImageService {
    fn generate(&self, request: &GenerationRequest) -> ServiceFuture<'_> {
        let request = request.clone();
        Box::pin(async move {
            let body = serde_json::json!({
                "prompt": request.prompt,
                "num_images": request.num_images,
                "size": request.size,
            });

            let mut call = self.client.post(&request.endpoint).json(&body);
            if !request.api_key.is_empty() {
                call = call.header("Authorization", format!("Bearer {}", request.api_key));
            }
            if let Some(secs) = request.timeout_secs.filter(|s| *s > 0) {
                call = call.timeout(Duration::from_secs(secs));
            }

            tracing::debug!(
                endpoint = %request.endpoint,
                num_images = request.num_images,
                size = %request.size,
                "requesting generation"
            );

            let response = call.send().await?;

            let status = response.status();
            let response_text = response.text().await?;

            if !status.is_success() {
                return Err(PipelineError::Service {
                    status: status.as_u16(),
                    body: response_text,
                });
            }

            let descriptors: Vec<ImageDescriptor> =
                serde_json::from_str(&response_text).map_err(|e| {
                    PipelineError::Malformed(format!("{e}; body: {}", clip_body(&response_text)))
                })?;

            Ok(descriptors.into_iter().map(|d| d.url).collect())
        })
    }
}

/// Clip a response body for use in diagnostics.
fn clip_body(text: &str) -> String {
    const LIMIT: usize = 500;
    match text.char_indices().nth(LIMIT) {
        Some((idx, _)) => format!("{}...", &text[..idx]),
        None => text.to_string(),
    }
}

// --- Generations API response types ---

#[derive(Deserialize)]
struct ImageDescriptor {
    url: String,
}
