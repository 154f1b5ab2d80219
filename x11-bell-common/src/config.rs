//! Sound resource resolution and logging configuration
//!
//! There is no configuration file. The sound argument and the `RUST_LOG`
//! environment variable are the only inputs.

use crate::{Error, Result};
use std::path::Path;
use tracing::debug;
use tracing_subscriber::EnvFilter;
use url::Url;

/// Filter used when `RUST_LOG` is not set. A successful run stays silent.
pub const DEFAULT_LOG_FILTER: &str = "warn";

/// Logging configuration
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Filter directive applied when the environment does not provide one
    pub default_filter: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            default_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl LoggingConfig {
    /// Build the subscriber filter: `RUST_LOG` first, then the default
    pub fn env_filter(&self) -> EnvFilter {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&self.default_filter))
    }
}

/// Turn the sound argument into a URI the media framework can open.
///
/// Arguments that already carry a scheme (`file:///...`, `http://...`) pass
/// through untouched. Anything else is a local path, made absolute against
/// the current directory and encoded as a `file://` URI.
pub fn resolve_sound_uri(arg: &str) -> Result<String> {
    if arg.trim().is_empty() {
        return Err(Error::InvalidResource("empty sound argument".to_string()));
    }

    if has_uri_scheme(arg) {
        return Ok(arg.to_string());
    }

    let path = Path::new(arg);
    let absolute = if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir()?.join(path)
    };

    let uri = Url::from_file_path(&absolute).map_err(|()| {
        Error::InvalidResource(format!("cannot express {} as a URI", absolute.display()))
    })?;
    debug!("Resolved sound path {} to {}", absolute.display(), uri);
    Ok(uri.into())
}

/// URIs GStreamer opens are always `scheme://...`. A colon alone does not
/// make a URI (`alert:1.wav`), nor does a drive letter (`C:\bell.wav`).
fn has_uri_scheme(arg: &str) -> bool {
    match Url::parse(arg) {
        Ok(url) => {
            let scheme_len = url.scheme().len();
            scheme_len > 1 && arg.get(scheme_len..).is_some_and(|rest| rest.starts_with("://"))
        }
        Err(_) => false,
    }
}
