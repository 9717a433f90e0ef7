//! Outbound port for the remote text-to-image service.

use std::future::Future;
use std::pin::Pin;

use crate::error::PipelineError;

/// A single generation call, derived from the settings snapshot and the
/// prompt of one invocation and discarded afterwards.
#[derive(Debug, Clone)]
pub struct GenerationRequest {
    /// Target generations endpoint (absolute URL).
    pub endpoint: String,
    /// Bearer credential; empty means the call is sent unauthenticated.
    pub api_key: String,
    /// The text prompt describing the desired image(s).
    pub prompt: String,
    /// Number of images requested.
    pub num_images: u32,
    /// Image size token, e.g. `"1024x1024"`.
    pub size: String,
    /// Per-request timeout in seconds; `0` or `None` leaves the call unbounded.
    pub timeout_secs: Option<u64>,
}

/// Boxed future type returned by [`ImageService::generate`].
pub type ServiceFuture<'a> =
    Pin<Box<dyn Future<Output = Result<Vec<String>, PipelineError>> + Send + 'a>>;

/// Calls a remote text-to-image service and returns image URLs.
pub trait ImageService: Send + Sync {
    /// Issue exactly one generation call and return the image URLs in the
    /// order the service produced them. An empty result is a legitimate
    /// outcome, not an error.
    fn generate(&self, request: &GenerationRequest) -> ServiceFuture<'_>;
}
