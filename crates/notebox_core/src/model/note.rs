//! Note domain model.
//!
//! # Responsibility
//! - Define the canonical note record shared by store and view layers.
//! - Own the persisted wire shape (camelCase JSON, RFC 3339 timestamps).
//!
//! # Invariants
//! - `tags` never contains duplicates once a note passed through the store.
//! - `last_modified` carries millisecond precision so that a persisted
//!   collection reloads into an identical in-memory collection.
//! - Missing or `null` optional fields in persisted records are defaulted,
//!   never rejected. Blank category and color fall back to the default
//!   category.

use crate::model::category::default_category;
use chrono::{DateTime, SubsecRound, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::HashSet;

/// Opaque note identity, derived from the creation timestamp.
pub type NoteId = String;

/// Canonical note record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    pub id: NoteId,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub content: String,
    /// Stamped on every store mutation.
    #[serde(with = "millis_rfc3339")]
    pub last_modified: DateTime<Utc>,
    #[serde(default)]
    pub is_favorite: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub tags: Vec<String>,
    #[serde(default = "default_category_name", deserialize_with = "category_name_or_default")]
    pub category: String,
    /// Denormalized category color captured at the last category assignment.
    #[serde(default = "default_category_color", deserialize_with = "category_color_or_default")]
    pub color: String,
}

impl Note {
    /// Creates an empty note in the default category.
    pub fn new(id: impl Into<NoteId>, last_modified: DateTime<Utc>) -> Self {
        let category = default_category();
        Self {
            id: id.into(),
            title: String::new(),
            content: String::new(),
            last_modified,
            is_favorite: false,
            tags: Vec::new(),
            category: category.name.to_string(),
            color: category.color.to_string(),
        }
    }

    /// Returns whether the note carries every tag in `required`.
    pub fn has_all_tags(&self, required: &[String]) -> bool {
        required.iter().all(|tag| self.tags.contains(tag))
    }

    /// Returns whether the note carries `tag`.
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|value| value == tag)
    }
}

/// Returns the current time truncated to milliseconds.
///
/// Persisted timestamps only keep milliseconds; truncating up front keeps
/// the in-memory value equal to its reloaded form.
pub fn now_millis() -> DateTime<Utc> {
    Utc::now().trunc_subsecs(3)
}

/// Removes duplicate tags, keeping first-occurrence order.
pub fn dedupe_tags(tags: &[String]) -> Vec<String> {
    let mut seen = HashSet::with_capacity(tags.len());
    tags.iter()
        .filter(|tag| seen.insert(tag.as_str()))
        .cloned()
        .collect()
}

fn default_category_name() -> String {
    default_category().name.to_string()
}

fn default_category_color() -> String {
    default_category().color.to_string()
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

fn non_blank_or<'de, D>(deserializer: D, fallback: fn() -> String) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?
        .filter(|value| !value.is_empty())
        .unwrap_or_else(fallback))
}

fn category_name_or_default<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    non_blank_or(deserializer, default_category_name)
}

fn category_color_or_default<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    non_blank_or(deserializer, default_category_color)
}

/// Serde adapter for `2024-05-01T10:20:30.123Z`-style timestamps.
pub(crate) mod millis_rfc3339 {
    use chrono::{DateTime, SecondsFormat, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(value: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&value.to_rfc3339_opts(SecondsFormat::Millis, true))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        DateTime::parse_from_rfc3339(raw.trim())
            .map(|parsed| parsed.with_timezone(&Utc))
            .map_err(|err| serde::de::Error::custom(format!("invalid timestamp `{raw}`: {err}")))
    }
}
