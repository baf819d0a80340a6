use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SliderError {
    /// No breakpoint rule covers the working width. The fallback table makes
    /// this unreachable for configurations built by
    /// [`build`](crate::config::build); hand-assembled tables can hit it.
    #[error("no breakpoint rule matches working width {width}px")]
    NoMatchingBreakpoint { width: f32 },

    #[error("invalid slider options: {0}")]
    InvalidJson(#[from] serde_json::Error),

    #[error("invalid slider options: {0}")]
    InvalidToml(#[from] toml::de::Error),

    #[error("unsupported options format for {path} (expected .json or .toml)")]
    UnsupportedFormat { path: PathBuf },

    #[error("failed to read options file {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("no tokio runtime available to schedule {task}")]
    RuntimeUnavailable { task: &'static str },

    #[error("slider has been torn down")]
    TornDown,
}

pub type Result<T> = std::result::Result<T, SliderError>;
