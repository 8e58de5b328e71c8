//! TOML question bank parser.
//!
//! Loads question banks from TOML files and directories, and validates them.

use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::bank::QuestionBank;
use crate::model::{Answer, Question};

/// Intermediate TOML structure for parsing bank files.
#[derive(Debug, Deserialize)]
struct TomlBankFile {
    bank: TomlBankHeader,
    #[serde(default)]
    questions: Vec<TomlQuestion>,
}

#[derive(Debug, Deserialize)]
struct TomlBankHeader {
    category: String,
}

#[derive(Debug, Deserialize)]
struct TomlQuestion {
    id: String,
    #[serde(rename = "type")]
    question_type: String,
    prompt: String,
    #[serde(default)]
    options: Option<Vec<String>>,
    correct_answer: toml::Value,
    #[serde(default)]
    explanation: String,
    difficulty: String,
    module: String,
}

/// Parse a single TOML file into a `QuestionBank` with one category.
pub fn parse_bank(path: &Path) -> Result<QuestionBank> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read bank file: {}", path.display()))?;

    parse_bank_str(&content, path)
}

/// Parse a TOML string into a `QuestionBank` (useful for testing).
pub fn parse_bank_str(content: &str, source_path: &Path) -> Result<QuestionBank> {
    let parsed: TomlBankFile = toml::from_str(content)
        .with_context(|| format!("failed to parse TOML: {}", source_path.display()))?;

    let questions = parsed
        .questions
        .into_iter()
        .map(|q| {
            let question_type = q
                .question_type
                .parse()
                .map_err(|e: String| anyhow::anyhow!("question '{}': {}", q.id, e))?;
            let difficulty = q
                .difficulty
                .parse()
                .map_err(|e: String| anyhow::anyhow!("question '{}': {}", q.id, e))?;
            let correct_answer = match q.correct_answer {
                toml::Value::Boolean(b) => Answer::Bool(b),
                toml::Value::String(s) => Answer::Text(s),
                other => anyhow::bail!(
                    "question '{}': correct_answer must be a string or boolean, got {}",
                    q.id,
                    other.type_str()
                ),
            };

            Ok(Question {
                id: q.id,
                question_type,
                prompt: q.prompt,
                options: q.options,
                correct_answer,
                explanation: q.explanation,
                difficulty,
                module: q.module,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    let mut bank = QuestionBank::new();
    bank.insert(parsed.bank.category, questions);
    Ok(bank)
}

/// Recursively load all `.toml` bank files from a directory into one bank.
///
/// Files that fail to parse are skipped with a warning.
pub fn load_bank_directory(dir: &Path) -> Result<QuestionBank> {
    let mut bank = QuestionBank::new();
    load_into(dir, &mut bank)?;
    Ok(bank)
}

fn load_into(dir: &Path, bank: &mut QuestionBank) -> Result<()> {
    if !dir.is_dir() {
        anyhow::bail!("not a directory: {}", dir.display());
    }

    for entry in std::fs::read_dir(dir)
        .with_context(|| format!("failed to read directory: {}", dir.display()))?
    {
        let entry = entry?;
        let path = entry.path();

        if path.is_dir() {
            load_into(&path, bank)?;
        } else if path.extension().is_some_and(|ext| ext == "toml") {
            match parse_bank(&path) {
                Ok(parsed) => bank.merge(parsed),
                Err(e) => {
                    tracing::warn!("skipping {}: {}", path.display(), e);
                }
            }
        }
    }

    Ok(())
}

/// A warning from bank validation.
#[derive(Debug, Clone)]
pub struct ValidationWarning {
    /// The question ID (if applicable).
    pub question_id: Option<String>,
    /// Warning message.
    pub message: String,
}

/// Validate a question bank for common issues.
pub fn validate_bank(bank: &QuestionBank) -> Vec<ValidationWarning> {
    use crate::model::QuestionType;

    let mut warnings = Vec::new();

    // Check for duplicate question IDs
    let mut seen_ids = std::collections::HashSet::new();
    for q in bank.questions() {
        if !seen_ids.insert(&q.id) {
            warnings.push(ValidationWarning {
                question_id: Some(q.id.clone()),
                message: format!("duplicate question ID: {}", q.id),
            });
        }
    }

    for q in bank.questions() {
        match (q.question_type, &q.options) {
            (QuestionType::MultipleChoice, None) => {
                warnings.push(ValidationWarning {
                    question_id: Some(q.id.clone()),
                    message: "multiple_choice question has no options".into(),
                });
            }
            (QuestionType::MultipleChoice, Some(options)) => {
                if options.len() < 2 {
                    warnings.push(ValidationWarning {
                        question_id: Some(q.id.clone()),
                        message: "multiple_choice question has fewer than 2 options".into(),
                    });
                }
                if let Answer::Text(correct) = &q.correct_answer {
                    if !options.contains(correct) {
                        warnings.push(ValidationWarning {
                            question_id: Some(q.id.clone()),
                            message: "correct answer is not among the options".into(),
                        });
                    }
                }
            }
            (_, Some(_)) => {
                warnings.push(ValidationWarning {
                    question_id: Some(q.id.clone()),
                    message: format!("{} question should not have options", q.question_type),
                });
            }
            _ => {}
        }

        if q.prompt.trim().is_empty() {
            warnings.push(ValidationWarning {
                question_id: Some(q.id.clone()),
                message: "prompt is empty".into(),
            });
        }

        if q.question_type == QuestionType::TrueFalse
            && !matches!(q.correct_answer, Answer::Bool(_))
        {
            warnings.push(ValidationWarning {
                question_id: Some(q.id.clone()),
                message: "true_false question should have a boolean correct answer".into(),
            });
        }
    }

    warnings
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Difficulty, QuestionType};
    use std::path::PathBuf;

    const VALID_TOML: &str = r#"
[bank]
category = "networking"

[[questions]]
id = "net_101"
type = "multiple_choice"
prompt = "Which protocol resolves IP addresses to MAC addresses?"
options = ["ARP", "DNS", "DHCP", "ICMP"]
correct_answer = "ARP"
explanation = "ARP maps layer 3 addresses onto layer 2."
difficulty = "easy"
module = "networking"

[[questions]]
id = "net_102"
type = "true_false"
prompt = "A /31 subnet has two usable host addresses for point-to-point links."
correct_answer = true
explanation = "RFC 3021 permits both addresses on point-to-point links."
difficulty = "medium"
module = "networking"
"#;

    #[test]
    fn parse_valid_toml() {
        let bank = parse_bank_str(VALID_TOML, &PathBuf::from("test.toml")).unwrap();
        assert_eq!(bank.len(), 2);
        assert!(bank.categories().any(|c| c == "networking"));

        let first = bank.questions().find(|q| q.id == "net_101").unwrap();
        assert_eq!(first.question_type, QuestionType::MultipleChoice);
        assert_eq!(first.difficulty, Difficulty::Easy);
        assert_eq!(first.options.as_ref().unwrap().len(), 4);

        let second = bank.questions().find(|q| q.id == "net_102").unwrap();
        assert_eq!(second.correct_answer, Answer::Bool(true));
    }

    #[test]
    fn parse_defaults_optional_fields() {
        let toml = r#"
[bank]
category = "minimal"

[[questions]]
id = "q1"
type = "short_answer"
prompt = "Name the loopback address."
correct_answer = "127.0.0.1"
difficulty = "easy"
module = "networking"
"#;
        let bank = parse_bank_str(toml, &PathBuf::from("test.toml")).unwrap();
        let q = bank.questions().next().unwrap();
        assert!(q.explanation.is_empty());
        assert!(q.options.is_none());
    }

    #[test]
    fn parse_rejects_unknown_type() {
        let toml = r#"
[bank]
category = "bad"

[[questions]]
id = "q1"
type = "matching"
prompt = "p"
correct_answer = "a"
difficulty = "easy"
module = "m"
"#;
        let err = parse_bank_str(toml, &PathBuf::from("bad.toml")).unwrap_err();
        assert!(err.to_string().contains("unknown question type"));
    }

    #[test]
    fn parse_rejects_non_scalar_answer() {
        let toml = r#"
[bank]
category = "bad"

[[questions]]
id = "q1"
type = "short_answer"
prompt = "p"
correct_answer = 42
difficulty = "easy"
module = "m"
"#;
        let err = parse_bank_str(toml, &PathBuf::from("bad.toml")).unwrap_err();
        assert!(err.to_string().contains("string or boolean"));
    }

    #[test]
    fn parse_malformed_toml() {
        let bad = "this is not [valid toml }{";
        assert!(parse_bank_str(bad, &PathBuf::from("bad.toml")).is_err());
    }

    #[test]
    fn validate_duplicate_ids() {
        let toml = r#"
[bank]
category = "dupes"

[[questions]]
id = "same"
type = "short_answer"
prompt = "first"
correct_answer = "a"
difficulty = "easy"
module = "m"

[[questions]]
id = "same"
type = "short_answer"
prompt = "second"
correct_answer = "b"
difficulty = "medium"
module = "m"
"#;
        let bank = parse_bank_str(toml, &PathBuf::from("test.toml")).unwrap();
        let warnings = validate_bank(&bank);
        assert!(warnings.iter().any(|w| w.message.contains("duplicate")));
    }

    #[test]
    fn validate_multiple_choice_without_options() {
        let toml = r#"
[bank]
category = "mc"

[[questions]]
id = "q1"
type = "multiple_choice"
prompt = "pick one"
correct_answer = "a"
difficulty = "easy"
module = "m"
"#;
        let bank = parse_bank_str(toml, &PathBuf::from("test.toml")).unwrap();
        let warnings = validate_bank(&bank);
        assert!(warnings.iter().any(|w| w.message.contains("no options")));
    }

    #[test]
    fn validate_correct_answer_not_in_options() {
        let toml = r#"
[bank]
category = "mc"

[[questions]]
id = "q1"
type = "multiple_choice"
prompt = "pick one"
options = ["a", "b"]
correct_answer = "c"
difficulty = "easy"
module = "m"
"#;
        let bank = parse_bank_str(toml, &PathBuf::from("test.toml")).unwrap();
        let warnings = validate_bank(&bank);
        assert!(warnings
            .iter()
            .any(|w| w.message.contains("not among the options")));
    }

    #[test]
    fn validate_builtin_bank_is_clean() {
        let warnings = validate_bank(&QuestionBank::builtin());
        assert!(warnings.is_empty(), "{warnings:?}");
    }

    #[test]
    fn load_directory() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("networking.toml"), VALID_TOML).unwrap();
        std::fs::write(dir.path().join("notes.txt"), "ignored").unwrap();

        let bank = load_bank_directory(dir.path()).unwrap();
        assert_eq!(bank.len(), 2);
    }

    #[test]
    fn load_directory_skips_bad_files() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("good.toml"), VALID_TOML).unwrap();
        std::fs::write(dir.path().join("bad.toml"), "not [valid }{").unwrap();

        let bank = load_bank_directory(dir.path()).unwrap();
        assert_eq!(bank.len(), 2);
    }

    #[test]
    fn load_nonexistent_directory_fails() {
        assert!(load_bank_directory(&PathBuf::from("/no/such/dir")).is_err());
    }
}
