//! Helpers for fields the server may send under more than one key.
//!
//! Some backends emit both `_id` and `id` (or `name` and `displayName`)
//! for the same value. Serde aliases reject that as a duplicate field, so
//! such types deserialize through a wire struct holding each key
//! separately and pick one here.

/// The first present, non-blank value among `candidates`.
pub(crate) fn first_present(
    candidates: impl IntoIterator<Item = Option<String>>,
) -> Option<String> {
    candidates
        .into_iter()
        .flatten()
        .find(|value| !value.trim().is_empty())
}

/// Like [`first_present`], but the field is required.
pub(crate) fn require(
    field: &'static str,
    candidates: impl IntoIterator<Item = Option<String>>,
) -> Result<String, String> {
    first_present(candidates).ok_or_else(|| format!("missing field `{field}`"))
}
