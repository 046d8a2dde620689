//! Plain-text preview for note list rows.

use crate::view::WHITESPACE_RE;
use once_cell::sync::Lazy;
use regex::Regex;

const PREVIEW_MAX_CHARS: usize = 100;

static MARKDOWN_IMAGE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"!\[[^\]]*]\([^)]*\)").expect("valid image regex"));
static MARKDOWN_LINK_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\[([^\]]*)\]\([^)]*\)").expect("valid link regex"));
static LIST_PREFIX_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?m)^\s*(?:[-*]|\d+\.)\s+").expect("valid list regex"));
static EMPHASIS_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\*\*|[*_]").expect("valid emphasis regex"));

/// Derives a single-line preview from note content.
///
/// Images are dropped, links keep their label, list prefixes and emphasis
/// markers are removed, whitespace collapses to single spaces, and the
/// result is capped at 100 chars. Returns `None` when nothing is left.
pub fn derive_preview(content: &str) -> Option<String> {
    let without_images = MARKDOWN_IMAGE_RE.replace_all(content, " ");
    let without_links = MARKDOWN_LINK_RE.replace_all(&without_images, "$1");
    let without_lists = LIST_PREFIX_RE.replace_all(&without_links, "");
    let without_emphasis = EMPHASIS_RE.replace_all(&without_lists, "");
    let normalized = WHITESPACE_RE.replace_all(&without_emphasis, " ");
    let trimmed = normalized.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.chars().take(PREVIEW_MAX_CHARS).collect())
    }
}
