//! Naive markdown-style editing over an explicit text range.
//!
//! # Responsibility
//! - Splice formatting markers, list prefixes, links and images into note
//!   content without depending on a rendered editor widget.
//!
//! # Invariants
//! - Offsets are counted in `char`s, clamped to the content length and
//!   ordered, so any caller-provided range is safe.
//! - Functions are pure: they return new content and never mutate input.

/// Selection within note content, in `char` offsets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextRange {
    pub start: usize,
    pub end: usize,
}

impl TextRange {
    /// Builds a range, swapping bounds given in reverse.
    pub fn new(start: usize, end: usize) -> Self {
        Self {
            start: start.min(end),
            end: start.max(end),
        }
    }

    /// Empty range at `at` (a cursor).
    pub fn caret(at: usize) -> Self {
        Self { start: at, end: at }
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Bold,
    Italic,
    Underline,
}

impl Format {
    fn marker(self) -> &'static str {
        match self {
            Self::Bold => "**",
            Self::Italic => "*",
            Self::Underline => "_",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListKind {
    Bullet,
    Numbered,
}

impl ListKind {
    fn prefix(self) -> &'static str {
        match self {
            Self::Bullet => "- ",
            Self::Numbered => "1. ",
        }
    }
}

/// One editing action, as issued by a toolbar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TextEdit {
    Format { range: TextRange, format: Format },
    List { at: usize, kind: ListKind },
    Link { range: TextRange, url: String },
    Image { at: usize, url: String },
}

impl TextEdit {
    /// Applies the edit. Returns `None` when the edit is a no-op (blank url).
    pub fn apply(&self, content: &str) -> Option<String> {
        match self {
            Self::Format { range, format } => Some(apply_format(content, *range, *format)),
            Self::List { at, kind } => Some(insert_list_item(content, *at, *kind)),
            Self::Link { range, url } => insert_link(content, *range, url),
            Self::Image { at, url } => insert_image(content, *at, url),
        }
    }
}

/// Wraps the selected text in the format's markers.
pub fn apply_format(content: &str, range: TextRange, format: Format) -> String {
    let marker = format.marker();
    splice(content, range, |selected| format!("{marker}{selected}{marker}"))
}

/// Inserts a new list line at the cursor.
pub fn insert_list_item(content: &str, at: usize, kind: ListKind) -> String {
    splice(content, TextRange::caret(at), |_| format!("\n{}", kind.prefix()))
}

/// Replaces the selection with `[text](url)`; empty selections use
/// `link text` as the label.
pub fn insert_link(content: &str, range: TextRange, url: &str) -> Option<String> {
    let url = url.trim();
    if url.is_empty() {
        return None;
    }
    Some(splice(content, range, |selected| {
        let label = if selected.is_empty() {
            "link text"
        } else {
            selected
        };
        format!("[{label}]({url})")
    }))
}

/// Inserts `![Image](url)` at the cursor.
pub fn insert_image(content: &str, at: usize, url: &str) -> Option<String> {
    let url = url.trim();
    if url.is_empty() {
        return None;
    }
    Some(splice(content, TextRange::caret(at), |_| {
        format!("![Image]({url})")
    }))
}

fn splice(content: &str, range: TextRange, replace: impl FnOnce(&str) -> String) -> String {
    let start = byte_offset(content, range.start);
    let end = byte_offset(content, range.end);
    let replacement = replace(&content[start..end]);

    let mut result = String::with_capacity(content.len() + replacement.len());
    result.push_str(&content[..start]);
    result.push_str(&replacement);
    result.push_str(&content[end..]);
    result
}

fn byte_offset(content: &str, char_offset: usize) -> usize {
    content
        .char_indices()
        .nth(char_offset)
        .map_or(content.len(), |(index, _)| index)
}

#[cfg(test)]
mod tests {
    use super::{
        apply_format, insert_image, insert_link, insert_list_item, Format, ListKind, TextEdit,
        TextRange,
    };

    #[test]
    fn format_wraps_selection() {
        let range = TextRange::new(6, 11);
        assert_eq!(apply_format("hello world", range, Format::Bold), "hello **world**");
        assert_eq!(apply_format("hello world", range, Format::Italic), "hello *world*");
        assert_eq!(apply_format("hello world", range, Format::Underline), "hello _world_");
    }

    #[test]
    fn reversed_and_out_of_bounds_ranges_are_normalized() {
        let range = TextRange::new(99, 6);
        assert_eq!(apply_format("hello world", range, Format::Bold), "hello **world**");
    }

    #[test]
    fn offsets_count_chars_not_bytes() {
        let range = TextRange::new(0, 4);
        assert_eq!(apply_format("zażółć", range, Format::Italic), "*zażó*łć");
    }

    #[test]
    fn list_items_start_a_new_line() {
        assert_eq!(insert_list_item("ab", 1, ListKind::Bullet), "a\n- b");
        assert_eq!(insert_list_item("", 0, ListKind::Numbered), "\n1. ");
    }

    #[test]
    fn link_uses_placeholder_label_for_empty_selection() {
        let linked = insert_link("see ", TextRange::caret(4), "https://x.io").unwrap();
        assert_eq!(linked, "see [link text](https://x.io)");
        let labeled = insert_link("see docs", TextRange::new(4, 8), "https://x.io").unwrap();
        assert_eq!(labeled, "see [docs](https://x.io)");
    }

    #[test]
    fn blank_urls_are_no_ops() {
        assert!(insert_link("x", TextRange::caret(0), "  ").is_none());
        assert!(insert_image("x", 0, "").is_none());
        let edit = TextEdit::Image {
            at: 0,
            url: String::new(),
        };
        assert!(edit.apply("x").is_none());
    }

    #[test]
    fn image_is_inserted_at_cursor() {
        assert_eq!(
            insert_image("ab", 1, "cat.png").unwrap(),
            "a![Image](cat.png)b"
        );
    }
}
