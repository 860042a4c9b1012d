//! Pattern 5: Document Editor
//! Example: composite document, memoized render, pluggable storage
//!
//! Run with: cargo run --bin p6_document_editor [config.toml]

use anyhow::Context;
use colored::Colorize;
use design_patterns::storage::open_backend;
use design_patterns::{logging, DemoConfig, Document, DocumentEditor};

fn main() -> anyhow::Result<()> {
    let config = DemoConfig::from_env().context("loading demo config")?;
    logging::init(&config.log_level);

    let storage = open_backend(&config.storage);
    let mut editor = DocumentEditor::new(Document::new(), storage);

    editor.add_tab_space();
    editor.add_text("Hello!!! this my doc file");
    editor.add_new_line();
    editor.add_image("profile.png");
    editor.add_new_line();
    editor.add_text("this is a real wprld document editor example");

    println!("{}", editor.render_document());

    match editor.save() {
        Ok(()) => println!(
            "{}",
            format!("Document saved ({:?} backend)", config.storage.backend).green()
        ),
        Err(err) => println!("{} {err}", "Error:".red()),
    }
    Ok(())
}
