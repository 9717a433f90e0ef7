//! Live adapters calling real external services.

pub mod http;

pub use http::HttpImageService;
