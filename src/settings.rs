//! Adapter settings with file loading and environment variable overrides.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::PipelineError;

/// Generations endpoint used when no other source configures one.
pub const DEFAULT_ENDPOINT: &str = "https://lab.volcanotester.com/images/api/v1/generations";

/// Adapter settings, read as an immutable snapshot during a call.
///
/// A settings update always replaces the whole value: fields missing from the
/// source fall back to their defaults, never to the previous value.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Generations endpoint of the image service (absolute URL).
    pub endpoint: String,

    /// Bearer credential; empty means requests are sent unauthenticated.
    pub api_key: String,

    /// Requested image size token, e.g. `"1024x1024"`.
    pub image_size: String,

    /// Requested number of images per prompt.
    pub num_images: u32,

    /// Request timeout in seconds; `0` or an explicit `null` disables it.
    pub timeout_secs: Option<u64>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            api_key: String::new(),
            image_size: "1024x1024".to_string(),
            num_images: 1,
            timeout_secs: Some(120),
        }
    }
}

impl Settings {
    /// Load settings from the given TOML file, or return defaults if the
    /// file does not exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self, PipelineError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let contents = std::fs::read_to_string(path).map_err(|e| {
            PipelineError::Config(format!("Failed to read config {}: {e}", path.display()))
        })?;
        toml::from_str(&contents).map_err(|e| {
            PipelineError::Config(format!("Failed to parse config {}: {e}", path.display()))
        })
    }

    /// Build a complete settings value from host-provided options.
    ///
    /// Recognized keys are `endpoint`, `api_key`, `image_size`, `num_images`
    /// and `timeout_secs`; missing keys take their defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the options are not an object or a field has the
    /// wrong type.
    pub fn from_options(options: &serde_json::Value) -> Result<Self, PipelineError> {
        Self::deserialize(options)
            .map_err(|e| PipelineError::Config(format!("Invalid options: {e}")))
    }

    /// Apply `SDPIPE_*` environment variable overrides in place.
    ///
    /// Non-numeric values for numeric variables are ignored.
    pub fn apply_env_overrides(&mut self) {
        if let Ok(endpoint) = std::env::var("SDPIPE_ENDPOINT") {
            self.endpoint = endpoint;
        }
        if let Ok(key) = std::env::var("SDPIPE_API_KEY") {
            self.api_key = key;
        }
        if let Ok(size) = std::env::var("SDPIPE_IMAGE_SIZE") {
            self.image_size = size;
        }
        if let Some(count) = std::env::var("SDPIPE_NUM_IMAGES").ok().and_then(|v| v.parse().ok()) {
            self.num_images = count;
        }
        if let Some(secs) = std::env::var("SDPIPE_TIMEOUT_SECS").ok().and_then(|v| v.parse().ok())
        {
            self.timeout_secs = Some(secs);
        }
    }
}

/// Discover the config file path using the resolution order:
/// 1. Explicit path (from `--config` flag)
/// 2. `SDPIPE_CONFIG` environment variable
/// 3. `~/.config/sdpipe/config.toml`
#[must_use]
pub fn discover_config_path(explicit: Option<&str>) -> PathBuf {
    if let Some(p) = explicit {
        return PathBuf::from(p);
    }

    if let Ok(p) = std::env::var("SDPIPE_CONFIG") {
        return PathBuf::from(p);
    }

    default_config_path()
}

/// Default config path: `~/.config/sdpipe/config.toml`.
fn default_config_path() -> PathBuf {
    if let Ok(home) = std::env::var("HOME") {
        PathBuf::from(home).join(".config/sdpipe/config.toml")
    } else {
        PathBuf::from("sdpipe.toml")
    }
}
