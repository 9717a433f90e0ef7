//! Host-facing pipeline port: the contract a chat host drives.

use std::future::Future;
use std::pin::Pin;

use futures::Stream;
use serde::{Deserialize, Serialize};

use crate::error::PipelineError;

/// Adapter style tag a host uses when routing model listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PipelineKind {
    /// A single-backend adapter.
    Pipe,
    /// A multi-backend adapter that can serve several models.
    Manifold,
}

impl PipelineKind {
    /// The tag string a host expects, e.g. `"manifold"`.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pipe => "pipe",
            Self::Manifold => "manifold",
        }
    }
}

impl std::fmt::Display for PipelineKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single message of the conversation history a host hands over.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    /// Message author role, e.g. `"user"` or `"assistant"`.
    pub role: String,
    /// Message text.
    pub content: String,
}

/// One chat turn handed to [`Pipeline::pipe`].
///
/// Only `user_message` drives this adapter; the remaining fields exist for
/// compatibility with the host's generic multi-backend contract.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TurnRequest {
    /// The free-text prompt for this turn.
    pub user_message: String,
    /// Identifier of the model the host selected.
    #[serde(default)]
    pub model_id: String,
    /// Conversation history, most recent message last.
    #[serde(default)]
    pub messages: Vec<ChatMessage>,
    /// Raw request body from the host, passed through untouched.
    #[serde(default)]
    pub body: serde_json::Value,
}

/// Constructors
impl TurnRequest {
    /// Create a turn carrying only a user message.
    #[must_use]
    pub fn new(user_message: impl Into<String>) -> Self {
        Self {
            user_message: user_message.into(),
            model_id: String::new(),
            messages: Vec::new(),
            body: serde_json::Value::Null,
        }
    }
}

/// Chainable Setters
impl TurnRequest {
    /// Set the model identifier.
    #[must_use]
    pub fn with_model(mut self, model_id: impl Into<String>) -> Self {
        self.model_id = model_id.into();
        self
    }

    /// Set the conversation history.
    #[must_use]
    pub fn with_messages(mut self, messages: Vec<ChatMessage>) -> Self {
        self.messages = messages;
        self
    }

    /// Set the raw request body.
    #[must_use]
    pub fn with_body(mut self, body: serde_json::Value) -> Self {
        self.body = body;
        self
    }
}

/// Stream of rendered text chunks produced by [`Pipeline::pipe`].
///
/// The base implementation yields a single chunk once the service round trip
/// has completed; the stream shape leaves room for incremental delivery.
pub type ChunkStream = Pin<Box<dyn Stream<Item = Result<String, PipelineError>> + Send>>;

/// Boxed future type returned by [`Pipeline::pipe`].
pub type PipeFuture<'a> =
    Pin<Box<dyn Future<Output = Result<ChunkStream, PipelineError>> + Send + 'a>>;

/// The contract a chat host drives: identification, configuration, lifecycle
/// notifications and message handling.
pub trait Pipeline: Send + Sync {
    /// The adapter style tag.
    fn kind(&self) -> PipelineKind;

    /// Human-readable adapter name.
    fn name(&self) -> &str;

    /// Identifiers of the sub-models a manifold adapter advertises.
    fn models(&self) -> Vec<String> {
        Vec::new()
    }

    /// Replace the adapter settings with a complete new value built from
    /// host-provided options. Must never be interleaved with an in-flight
    /// [`Pipeline::pipe`] call's snapshot: a call started earlier keeps the
    /// settings it observed.
    ///
    /// # Errors
    ///
    /// Returns an error if the options do not have the expected shape.
    /// Semantically invalid values (e.g. a malformed endpoint URL) are
    /// accepted here and surface as failures on the next call using them.
    fn configure(&self, options: &serde_json::Value) -> Result<(), PipelineError>;

    /// Called by the host when it has started.
    fn on_startup(&self) {
        tracing::info!(pipeline = self.name(), "startup");
    }

    /// Called by the host when it is shutting down.
    fn on_shutdown(&self) {
        tracing::info!(pipeline = self.name(), "shutdown");
    }

    /// Called by the host after it applied a settings update.
    fn on_settings_updated(&self) {
        tracing::info!(pipeline = self.name(), "settings updated");
    }

    /// Handle one chat turn: resolves to a stream of renderable text chunks,
    /// or to an error if the turn could not be served. A new call always
    /// performs a new generation; streams are not restartable.
    fn pipe(&self, turn: TurnRequest) -> PipeFuture<'_>;
}
