//! The `quizforge validate` command.

use std::path::PathBuf;

use anyhow::Result;

use quizforge_core::parser;

pub fn execute(bank_path: PathBuf) -> Result<()> {
    let bank = if bank_path.is_dir() {
        parser::load_bank_directory(&bank_path)?
    } else {
        parser::parse_bank(&bank_path)?
    };

    println!(
        "Question bank: {} categories, {} questions",
        bank.categories().count(),
        bank.len()
    );

    let warnings = parser::validate_bank(&bank);
    for w in &warnings {
        let prefix = w
            .question_id
            .as_ref()
            .map(|id| format!("  [{id}]"))
            .unwrap_or_else(|| "  ".to_string());
        println!("{prefix} WARNING: {}", w.message);
    }

    if warnings.is_empty() {
        println!("Question bank valid.");
    } else {
        println!("\n{} warning(s) found.", warnings.len());
    }

    Ok(())
}
