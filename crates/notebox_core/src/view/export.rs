//! Plain-text export of a single note.
//!
//! # Invariants
//! - Exported text is `title`, a blank line, then `content`.
//! - File names never contain path separators or control characters.

use crate::model::note::Note;
use log::{error, info};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};

const UNTITLED: &str = "Untitled";

#[derive(Debug)]
pub enum ExportError {
    Io { path: PathBuf, source: std::io::Error },
}

impl Display for ExportError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "failed to write `{}`: {source}", path.display())
            }
        }
    }
}

impl Error for ExportError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
        }
    }
}

/// Text placed on the clipboard or into an exported file.
pub fn note_plain_text(note: &Note) -> String {
    format!("{}\n\n{}", note.title, note.content)
}

/// `<title>.txt`, or `Untitled.txt` for a blank title.
pub fn export_file_name(note: &Note) -> String {
    let title = note.title.trim();
    let stem: String = if title.is_empty() {
        UNTITLED.to_string()
    } else {
        title
            .chars()
            .map(|c| {
                if matches!(c, '/' | '\\' | ':') || c.is_control() {
                    '_'
                } else {
                    c
                }
            })
            .collect()
    };
    format!("{stem}.txt")
}

/// Writes the note into `dir` and returns the written path.
pub fn export_note(note: &Note, dir: impl AsRef<Path>) -> Result<PathBuf, ExportError> {
    let path = dir.as_ref().join(export_file_name(note));
    match std::fs::write(&path, note_plain_text(note)) {
        Ok(()) => {
            info!("event=note_export module=export status=ok note_id={}", note.id);
            Ok(path)
        }
        Err(source) => {
            error!(
                "event=note_export module=export status=error note_id={} error={}",
                note.id, source
            );
            Err(ExportError::Io { path, source })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{export_file_name, note_plain_text};
    use crate::model::note::{now_millis, Note};

    #[test]
    fn plain_text_joins_title_and_content() {
        let mut note = Note::new("1", now_millis());
        note.title = "Title".to_string();
        note.content = "Body".to_string();
        assert_eq!(note_plain_text(&note), "Title\n\nBody");
    }

    #[test]
    fn file_name_falls_back_and_sanitizes() {
        let mut note = Note::new("1", now_millis());
        assert_eq!(export_file_name(&note), "Untitled.txt");
        note.title = "a/b\\c".to_string();
        assert_eq!(export_file_name(&note), "a_b_c.txt");
    }
}
