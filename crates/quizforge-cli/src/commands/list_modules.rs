//! The `quizforge list-modules` command.

use std::collections::BTreeMap;
use std::path::PathBuf;

use anyhow::Result;

use quizforge_core::bank::QuestionBank;
use quizforge_core::parser;

pub fn execute(bank_path: Option<PathBuf>) -> Result<()> {
    let bank = match &bank_path {
        None => QuestionBank::builtin(),
        Some(p) if p.is_dir() => parser::load_bank_directory(p)?,
        Some(p) => parser::parse_bank(p)?,
    };

    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
    for q in bank.questions() {
        *counts.entry(q.module.as_str()).or_insert(0) += 1;
    }

    if counts.is_empty() {
        println!("No modules found.");
        return Ok(());
    }

    println!("Available modules:");
    for (module, count) in &counts {
        println!("  {module} ({count} questions)");
    }

    Ok(())
}
