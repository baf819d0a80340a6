//! Option defaulting and loading.
//!
//! [`build`] turns a caller's raw [`SliderOptions`](slidekit_model::SliderOptions)
//! into a [`ResolvedConfig`](slidekit_model::ResolvedConfig); [`loader`]
//! reads raw options from JSON or TOML.

pub mod builder;
pub mod loader;

pub use builder::{FALLBACK_RULE_COUNT, MAX_RULE_SIZE, build, fallback_rules};
pub use loader::{from_json_str, from_toml_str, load_path};
