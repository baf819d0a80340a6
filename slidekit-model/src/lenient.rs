//! Forgiving deserializers for option fields.
//!
//! Slider options usually come from hand-written JSON or TOML. A field with
//! the wrong type (a string where a number belongs, `NaN`, an object) is
//! treated as absent instead of failing the whole document, so the builder
//! can fall back to its default for that field alone.

use serde::{Deserialize, Deserializer, de::IgnoredAny};

#[derive(Deserialize)]
#[serde(untagged)]
enum Lenient<T> {
    Value(T),
    Other(IgnoredAny),
}

fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(match Option::<Lenient<T>>::deserialize(deserializer)? {
        Some(Lenient::Value(value)) => Some(value),
        Some(Lenient::Other(_)) | None => None,
    })
}

/// Finite number narrowed to `f32` (pixel quantities).
pub fn number_f32<'de, D>(deserializer: D) -> Result<Option<f32>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(lenient::<D, f64>(deserializer)?
        .filter(|v| v.is_finite())
        .map(|v| v as f32))
}

/// Finite number kept at `f64` (indices, milliseconds, counts).
pub fn number_f64<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(lenient::<D, f64>(deserializer)?.filter(|v| v.is_finite()))
}

pub fn flag<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
where
    D: Deserializer<'de>,
{
    lenient::<D, bool>(deserializer)
}

pub fn text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    lenient::<D, String>(deserializer)
}
