//! Assessment assembly and JSON persistence.

use std::collections::BTreeMap;
use std::path::Path;

use anyhow::{Context, Result};
use chrono::Local;
use serde::{Deserialize, Serialize};

use crate::duration::estimate_duration;
use crate::model::{AssessmentType, Difficulty, Question, QuestionType};
use crate::select::difficulty_distribution;

/// A fully assembled assessment document.
///
/// Field order is the JSON key order of the exported file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Assessment {
    /// Timestamp-derived identifier, e.g. `assessment_20260829_142501`.
    pub id: String,
    #[serde(rename = "type")]
    pub assessment_type: AssessmentType,
    pub title: String,
    /// Module tags the questions were filtered to.
    pub modules: Vec<String>,
    /// Local creation time, ISO-8601 at second precision.
    pub created_date: String,
    pub duration_minutes: u32,
    pub total_questions: usize,
    /// Realized per-difficulty counts of the selected questions.
    pub difficulty_distribution: BTreeMap<Difficulty, usize>,
    pub questions: Vec<Question>,
    pub instructions: Vec<String>,
    pub grading_rubric: GradingRubric,
}

impl Assessment {
    /// Save the assessment as pretty-printed JSON (2-space indentation).
    pub fn save_json(&self, path: &Path) -> Result<()> {
        let json =
            serde_json::to_string_pretty(self).context("failed to serialize assessment")?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, json)
            .with_context(|| format!("failed to write assessment to {}", path.display()))?;
        Ok(())
    }

    /// Load an assessment from a JSON file.
    pub fn load_json(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read assessment from {}", path.display()))?;
        let assessment: Assessment =
            serde_json::from_str(&content).context("failed to parse assessment JSON")?;
        Ok(assessment)
    }
}

/// Assemble an assessment from the selected questions.
///
/// Consults nothing beyond the system clock: the id and creation date come
/// from `Local::now()`, everything else is derived from the arguments or is
/// static (instructions, rubric).
pub fn assemble(
    assessment_type: AssessmentType,
    modules: &[String],
    questions: Vec<Question>,
    duration_minutes: u32,
) -> Assessment {
    let now = Local::now();
    Assessment {
        id: format!("assessment_{}", now.format("%Y%m%d_%H%M%S")),
        assessment_type,
        title: format!("{} Assessment", assessment_type.title_case()),
        modules: modules.to_vec(),
        created_date: now.format("%Y-%m-%dT%H:%M:%S").to_string(),
        duration_minutes,
        total_questions: questions.len(),
        difficulty_distribution: difficulty_distribution(&questions),
        questions,
        instructions: instructions_for(assessment_type),
        grading_rubric: GradingRubric::standard(),
    }
}

/// Convenience wrapper: estimate the duration, then assemble.
pub fn assemble_with_estimated_duration(
    assessment_type: AssessmentType,
    modules: &[String],
    questions: Vec<Question>,
) -> Assessment {
    let duration = estimate_duration(&questions);
    assemble(assessment_type, modules, questions, duration)
}

/// Instruction list for a given assessment type: a common base extended
/// with type-specific lines.
pub fn instructions_for(assessment_type: AssessmentType) -> Vec<String> {
    let mut instructions: Vec<String> = [
        "Read each question carefully before answering",
        "Select the best answer for multiple choice questions",
        "Provide clear, concise answers for short answer questions",
        "Manage your time effectively throughout the assessment",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect();

    let specific: &[&str] = match assessment_type {
        AssessmentType::Module => &[
            "This assessment covers material from the specified training modules",
            "You may refer to your notes and lab guides",
        ],
        AssessmentType::Final => &[
            "This is a comprehensive assessment covering all course material",
            "No external resources are permitted during this assessment",
            "Ensure all answers are your own work",
        ],
        AssessmentType::Practice => &[
            "This is a practice assessment to help you prepare",
            "Take your time and review explanations after completion",
        ],
    };
    instructions.extend(specific.iter().map(|s| s.to_string()));
    instructions
}

/// The fixed grading rubric attached to every assessment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GradingRubric {
    pub grading_scale: BTreeMap<String, GradeBand>,
    pub question_weights: BTreeMap<QuestionType, f64>,
    pub passing_score: u32,
    pub retake_policy: String,
}

/// One band of the grading scale.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GradeBand {
    pub min: u32,
    pub max: u32,
    pub description: String,
}

impl GradingRubric {
    /// The standard A–F scale with fixed per-type weights.
    pub fn standard() -> Self {
        let mut grading_scale = BTreeMap::new();
        let bands = [
            ("A", 90, 100, "Excellent understanding"),
            ("B", 80, 89, "Good understanding"),
            ("C", 70, 79, "Satisfactory understanding"),
            ("D", 60, 69, "Below expectations"),
            ("F", 0, 59, "Inadequate understanding"),
        ];
        for (grade, min, max, description) in bands {
            grading_scale.insert(
                grade.to_string(),
                GradeBand {
                    min,
                    max,
                    description: description.to_string(),
                },
            );
        }

        let mut question_weights = BTreeMap::new();
        question_weights.insert(QuestionType::MultipleChoice, 1.0);
        question_weights.insert(QuestionType::TrueFalse, 0.5);
        question_weights.insert(QuestionType::ShortAnswer, 2.0);
        question_weights.insert(QuestionType::Essay, 5.0);
        question_weights.insert(QuestionType::Scenario, 10.0);

        GradingRubric {
            grading_scale,
            question_weights,
            passing_score: 70,
            retake_policy: "One retake allowed within 48 hours".to_string(),
        }
    }
}
