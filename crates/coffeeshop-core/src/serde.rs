use serde::{Deserialize, Deserializer};

/// Wraps whatever the field holds in `Some`, including an explicit `null`.
///
/// Combined with `#[serde(default)]` this distinguishes a key that is absent
/// (`None`) from a key that is present, which partial updates rely on.
pub fn deserialize_present<'de, T, D>(deserializer: D) -> Result<Option<T>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    T::deserialize(deserializer).map(Some)
}
