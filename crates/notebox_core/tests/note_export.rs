use notebox_core::view::export::{export_note, ExportError};
use notebox_core::{MemoryKvStore, NoteStore};

#[test]
fn exported_file_holds_title_blank_line_and_content() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = NoteStore::open(MemoryKvStore::new()).unwrap();
    let mut note = store.create().unwrap();
    note.title = "Trip".to_string();
    note.content = "pack boots".to_string();
    let saved = store.update(&note).unwrap().unwrap();

    let path = export_note(&saved, dir.path()).unwrap();
    assert_eq!(path.file_name().unwrap(), "Trip.txt");
    assert_eq!(std::fs::read_to_string(path).unwrap(), "Trip\n\npack boots");
}

#[test]
fn untitled_notes_export_as_untitled() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = NoteStore::open(MemoryKvStore::new()).unwrap();
    let note = store.create().unwrap();

    let path = export_note(&note, dir.path()).unwrap();
    assert_eq!(path.file_name().unwrap(), "Untitled.txt");
}

#[test]
fn missing_directory_is_an_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = NoteStore::open(MemoryKvStore::new()).unwrap();
    let note = store.create().unwrap();

    let err = export_note(&note, dir.path().join("missing")).unwrap_err();
    assert!(matches!(err, ExportError::Io { .. }));
}
