//! sdpipe: a chat-host adapter for remote text-to-image services.
//!
//! The [`ImageGenPipeline`] accepts a user's prompt, calls a Stable Diffusion
//! style generations endpoint over HTTP, and yields the resulting images as
//! markdown image lines the host can stream into a chat reply.
//!
//! The crate is organized around two seams:
//!
//! - [`ports::Pipeline`] is the host-facing contract: identity, lifecycle
//!   hooks, settings updates, and the `pipe` call that produces chunks.
//! - [`ports::ImageService`] is the outbound contract: one prompt in, a list
//!   of image URLs out. [`adapters::live::HttpImageService`] is the real
//!   implementation; tests substitute their own.

pub mod adapters;
pub mod error;
pub mod pipeline;
pub mod ports;
pub mod render;
pub mod settings;

pub use error::PipelineError;
pub use pipeline::ImageGenPipeline;
pub use ports::{
    ChatMessage, ChunkStream, GenerationRequest, ImageService, PipeFuture, Pipeline, PipelineKind,
    ServiceFuture, TurnRequest,
};
pub use settings::Settings;
