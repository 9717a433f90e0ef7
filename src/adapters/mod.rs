//! Adapter implementations for port traits.
//!
//! - `live/` — Real HTTP implementation of the image service port

pub mod live;
