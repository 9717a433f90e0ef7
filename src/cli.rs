//! CLI argument parsing with clap.

use clap::{ArgAction, Parser};

/// Generate images from a text prompt through a Stable Diffusion service.
#[derive(Parser, Debug)]
#[command(name = "sdpipe", version, about)]
pub struct Cli {
    /// Text prompt describing the desired image.
    #[arg(conflicts_with = "prompt_file")]
    pub prompt: Option<String>,

    /// Path to a file containing the prompt text.
    #[arg(short = 'p', long, conflicts_with = "prompt")]
    pub prompt_file: Option<String>,

    /// Generations endpoint URL override.
    #[arg(long)]
    pub endpoint: Option<String>,

    /// Image size as a WxH token (e.g., 1024x1024).
    #[arg(short, long)]
    pub size: Option<String>,

    /// Number of images to generate.
    #[arg(short = 'n', long)]
    pub count: Option<u32>,

    /// Request timeout in seconds (0 disables the timeout).
    #[arg(long)]
    pub timeout_secs: Option<u64>,

    /// Config file path override.
    #[arg(long)]
    pub config: Option<String>,

    /// Increase log verbosity (-v info, -vv debug).
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Resolve the prompt from either the positional argument or the file flag.
    ///
    /// # Errors
    ///
    /// Returns an error if neither prompt nor prompt-file is provided,
    /// or if the file cannot be read.
    pub fn resolve_prompt(&self) -> Result<String, std::io::Error> {
        if let Some(ref text) = self.prompt {
            Ok(text.clone())
        } else if let Some(ref path) = self.prompt_file {
            std::fs::read_to_string(path)
        } else {
            Err(std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                "Provide a prompt string or use -p/--prompt-file",
            ))
        }
    }
}

/// Validate the image count.
///
/// # Errors
///
/// Returns an error message if the count is zero.
pub fn validate_count(count: u32) -> Result<(), String> {
    if count == 0 {
        return Err("Image count must be at least 1".to_string());
    }
    Ok(())
}

/// Validate a size token of the form `WIDTHxHEIGHT`, e.g. `1024x1024`.
///
/// # Errors
///
/// Returns an error message if the token is not two numbers joined by `x`.
pub fn validate_size_token(size: &str) -> Result<(), String> {
    let valid = size
        .split_once('x')
        .is_some_and(|(w, h)| w.parse::<u32>().is_ok() && h.parse::<u32>().is_ok());
    if valid {
        Ok(())
    } else {
        Err(format!("Invalid size '{size}'. Expected a WxH token like 1024x1024"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positional_prompt() {
        let cli = Cli::parse_from(["sdpipe", "a cat"]);
        assert_eq!(cli.prompt.as_deref(), Some("a cat"));
        assert!(cli.prompt_file.is_none());
        assert_eq!(cli.resolve_prompt().unwrap(), "a cat");
    }

    #[test]
    fn prompt_file_flag() {
        let dir = std::env::temp_dir().join("sdpipe_cli_pf_test");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("prompt.txt");
        std::fs::write(&path, "prompt from file").unwrap();

        let cli = Cli::parse_from(["sdpipe", "-p", path.to_str().unwrap()]);
        assert!(cli.prompt.is_none());
        assert!(cli.prompt_file.is_some());
        assert_eq!(cli.resolve_prompt().unwrap(), "prompt from file");

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn default_values() {
        let cli = Cli::parse_from(["sdpipe", "a cat"]);
        assert!(cli.endpoint.is_none());
        assert!(cli.size.is_none());
        assert!(cli.count.is_none());
        assert!(cli.timeout_secs.is_none());
        assert!(cli.config.is_none());
        assert_eq!(cli.verbose, 0);
    }

    #[test]
    fn all_options() {
        let cli = Cli::parse_from([
            "sdpipe",
            "--endpoint",
            "http://127.0.0.1:9999/generate",
            "-s",
            "512x512",
            "-n",
            "3",
            "--timeout-secs",
            "15",
            "-vv",
            "a landscape",
        ]);
        assert_eq!(cli.endpoint.as_deref(), Some("http://127.0.0.1:9999/generate"));
        assert_eq!(cli.size.as_deref(), Some("512x512"));
        assert_eq!(cli.count, Some(3));
        assert_eq!(cli.timeout_secs, Some(15));
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.prompt.as_deref(), Some("a landscape"));
    }

    #[test]
    fn no_prompt_errors() {
        let cli = Cli::parse_from(["sdpipe"]);
        assert!(cli.resolve_prompt().is_err());
    }

    #[test]
    fn count_validation() {
        assert!(validate_count(1).is_ok());
        assert!(validate_count(4).is_ok());
        assert!(validate_count(0).is_err());
    }

    #[test]
    fn size_token_validation() {
        assert!(validate_size_token("1024x1024").is_ok());
        assert!(validate_size_token("512x768").is_ok());
        assert!(validate_size_token("huge").is_err());
        assert!(validate_size_token("1024x").is_err());
        assert!(validate_size_token("x1024").is_err());
        assert!(validate_size_token("1024X1024").is_err());
    }
}
