//! Port traits defining external boundaries.
//!
//! Each trait represents a boundary between the adapter core and an external
//! collaborator: the chat host on the inbound side, the image service on the
//! outbound side. Implementations live in `src/adapters/` and
//! `src/pipeline.rs`.

pub mod image_service;
pub mod pipeline;

pub use image_service::{GenerationRequest, ImageService, ServiceFuture};
pub use pipeline::{ChatMessage, ChunkStream, PipeFuture, Pipeline, PipelineKind, TurnRequest};
