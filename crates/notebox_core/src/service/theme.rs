//! Persisted two-valued theme preference.
//!
//! Stored independently of note data as the UTF-8 string `light` or `dark`.

use crate::repo::kv_repo::{KvStore, RepoResult};
use log::{info, warn};

/// Storage key holding the theme preference.
pub const DEFAULT_THEME_KEY: &str = "theme";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim() {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

/// Reads the stored theme. Missing or unrecognized values yield the default.
pub fn load_theme(storage: &impl KvStore, key: &str) -> RepoResult<Theme> {
    let Some(bytes) = storage.get(key)? else {
        return Ok(Theme::default());
    };
    let parsed = std::str::from_utf8(&bytes).ok().and_then(Theme::parse);
    if parsed.is_none() {
        warn!("event=theme_load module=theme status=fallback bytes={}", bytes.len());
    }
    Ok(parsed.unwrap_or_default())
}

/// Writes `theme` immediately.
pub fn save_theme(storage: &mut impl KvStore, key: &str, theme: Theme) -> RepoResult<()> {
    storage.set(key, theme.as_str().as_bytes())
}

/// Flips the stored theme and returns the new value.
pub fn toggle_theme(storage: &mut impl KvStore, key: &str) -> RepoResult<Theme> {
    let next = load_theme(&*storage, key)?.toggled();
    save_theme(storage, key, next)?;
    info!("event=theme_toggle module=theme status=ok theme={}", next.as_str());
    Ok(next)
}
