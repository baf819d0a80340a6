//! Reading raw slider options from JSON or TOML documents.

use std::path::Path;

use slidekit_model::SliderOptions;
use tracing::debug;

use crate::error::{Result, SliderError};

pub fn from_json_str(input: &str) -> Result<SliderOptions> {
    Ok(serde_json::from_str(input)?)
}

pub fn from_toml_str(input: &str) -> Result<SliderOptions> {
    Ok(toml::from_str(input)?)
}

/// Load options from `path`, choosing the parser by file extension.
pub fn load_path(path: impl AsRef<Path>) -> Result<SliderOptions> {
    let path = path.as_ref();
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase);

    let parse: fn(&str) -> Result<SliderOptions> = match extension.as_deref() {
        Some("json") => from_json_str,
        Some("toml") => from_toml_str,
        _ => {
            return Err(SliderError::UnsupportedFormat {
                path: path.to_path_buf(),
            });
        }
    };

    let contents =
        std::fs::read_to_string(path).map_err(|source| SliderError::Io {
            path: path.to_path_buf(),
            source,
        })?;
    debug!(path = %path.display(), "loading slider options");
    parse(&contents)
}
