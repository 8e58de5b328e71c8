//! The `quizforge generate` command.

use std::path::PathBuf;

use anyhow::{Context, Result};

use quizforge_core::assessment::{assemble, Assessment};
use quizforge_core::bank::QuestionBank;
use quizforge_core::duration::estimate_duration;
use quizforge_core::model::{AssessmentType, Difficulty, DifficultyMix};
use quizforge_core::parser;
use quizforge_core::select::{allocate_quotas, select_questions};
use quizforge_export::{export_assessment, ExportFormat};

#[allow(clippy::too_many_arguments)]
pub fn execute(
    assessment_type: String,
    modules_str: String,
    questions: usize,
    mix_str: String,
    format: String,
    output: Option<PathBuf>,
    bank_path: Option<PathBuf>,
) -> Result<()> {
    anyhow::ensure!(questions >= 1, "question count must be at least 1");

    let assessment_type: AssessmentType = assessment_type
        .parse()
        .map_err(|e: String| anyhow::anyhow!("{}", e))?;
    let format: ExportFormat = format.parse().map_err(|e: String| anyhow::anyhow!("{}", e))?;

    let modules: Vec<String> = modules_str
        .split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect();
    anyhow::ensure!(!modules.is_empty(), "at least one module tag is required");

    let mix = parse_mix(&mix_str)?;

    let bank = load_bank(bank_path.as_deref())?;
    anyhow::ensure!(!bank.is_empty(), "question bank is empty");

    let quotas = allocate_quotas(questions, &mix)?;

    let mut rng = rand::thread_rng();
    let selected = select_questions(bank.questions(), &modules, questions, &mix, &mut rng)?;
    if selected.len() < questions {
        tracing::info!(
            requested = questions,
            selected = selected.len(),
            "bank had too few matching questions; assessment is under-filled"
        );
    }

    let duration = estimate_duration(&selected);
    let assessment = assemble(assessment_type, &modules, selected, duration);

    let path = export_assessment(&assessment, format, output.as_deref())?;

    println!("Assessment generated: {}", path.display());
    println!("Type: {}", assessment.assessment_type);
    println!("Questions: {}", assessment.total_questions);
    println!("Duration: {} minutes", assessment.duration_minutes);
    print_distribution(&assessment, &quotas);

    Ok(())
}

fn load_bank(path: Option<&std::path::Path>) -> Result<QuestionBank> {
    match path {
        None => Ok(QuestionBank::builtin()),
        Some(p) if p.is_dir() => parser::load_bank_directory(p),
        Some(p) => parser::parse_bank(p),
    }
}

/// Parse `easy=0.3,medium=0.5,hard=0.2` into a difficulty mix.
fn parse_mix(s: &str) -> Result<DifficultyMix> {
    let mut mix = DifficultyMix::new();
    for pair in s.split(',') {
        let pair = pair.trim();
        if pair.is_empty() {
            continue;
        }
        let (level, fraction) = pair
            .split_once('=')
            .with_context(|| format!("invalid mix entry '{pair}', expected level=fraction"))?;
        let level: Difficulty = level
            .trim()
            .parse()
            .map_err(|e: String| anyhow::anyhow!("{}", e))?;
        let fraction: f64 = fraction
            .trim()
            .parse()
            .with_context(|| format!("invalid fraction in mix entry '{pair}'"))?;
        anyhow::ensure!(fraction >= 0.0, "mix fraction for {level} must be non-negative");
        mix.insert(level, fraction);
    }
    anyhow::ensure!(!mix.is_empty(), "difficulty mix must not be empty");
    Ok(mix)
}

fn print_distribution(
    assessment: &Assessment,
    quotas: &std::collections::BTreeMap<Difficulty, usize>,
) {
    use comfy_table::{Cell, Table};

    let mut table = Table::new();
    table.set_header(vec!["Difficulty", "Requested", "Selected"]);

    for (level, quota) in quotas {
        let selected = assessment
            .difficulty_distribution
            .get(level)
            .copied()
            .unwrap_or(0);
        table.add_row(vec![
            Cell::new(level),
            Cell::new(quota),
            Cell::new(selected),
        ]);
    }

    println!("\n{table}");
}
