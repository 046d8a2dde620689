//! CLI probe for notebox.
//!
//! # Responsibility
//! - Wire config, logging, SQLite storage and the note store end to end.
//! - Print a deterministic one-screen summary for local sanity checks.
//!
//! Usage: `notebox_cli [data_dir]` (defaults to `./notebox-data`).

use log::info;
use notebox_core::{
    init_logging, load_theme, AppConfig, NoteStore, SqliteKvStore, ViewController, CORE_VERSION,
};
use std::error::Error;
use std::path::PathBuf;
use std::process::ExitCode;

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("notebox_cli error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), Box<dyn Error>> {
    let data_dir = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("notebox-data"));
    std::fs::create_dir_all(&data_dir)?;
    let data_dir = data_dir.canonicalize()?;

    let config = AppConfig::load(data_dir.join("config.json"))?;
    let log_dir = data_dir.join("logs");
    init_logging(config.log_level(), &log_dir.to_string_lossy())?;

    let storage = SqliteKvStore::open(config.db_path(&data_dir))?;
    let store = NoteStore::open_with_key(storage, config.notes_key.clone())?;
    let view = ViewController::new();
    let stats = view.stats(store.notes());
    let theme = load_theme(store.storage(), &config.theme_key)?;
    info!(
        "event=cli_summary module=cli status=ok version={} notes={} tags={}",
        CORE_VERSION,
        stats.total_notes,
        store.tags().len()
    );

    println!("notebox_core version={CORE_VERSION}");
    println!(
        "notes={} words={} favorites={}",
        stats.total_notes, stats.total_words, stats.favorites
    );
    for (category, count) in &stats.per_category {
        println!("category {category}={count}");
    }
    println!("tags={}", store.tags().len());
    println!("last_edited={}", view.last_edited_label(store.notes()));
    println!("theme={}", theme.as_str());
    Ok(())
}
