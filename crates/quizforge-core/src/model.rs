//! Core data model types for quizforge.
//!
//! These are the fundamental types that the entire quizforge system uses
//! to represent questions, difficulty mixes, and assessment types.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A single question record.
///
/// Immutable once loaded; the question bank owns these and assessments
/// hold clones.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Question {
    /// Unique identifier for this question.
    pub id: String,
    /// What kind of question this is.
    #[serde(rename = "type")]
    pub question_type: QuestionType,
    /// The question text shown to the candidate.
    pub prompt: String,
    /// Answer options, present only for multiple-choice questions.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<String>>,
    /// The correct answer (free text, or a boolean for true/false).
    pub correct_answer: Answer,
    /// Explanation shown when reviewing the answer key.
    #[serde(default)]
    pub explanation: String,
    /// Difficulty level used by the selection quotas.
    pub difficulty: Difficulty,
    /// Training module this question belongs to, used as a selection filter.
    pub module: String,
}

/// A correct answer — either free text or a boolean for true/false questions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Answer {
    Bool(bool),
    Text(String),
}

impl From<&str> for Answer {
    fn from(s: &str) -> Self {
        Answer::Text(s.to_string())
    }
}

impl From<bool> for Answer {
    fn from(b: bool) -> Self {
        Answer::Bool(b)
    }
}

/// Supported question types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionType {
    MultipleChoice,
    TrueFalse,
    ShortAnswer,
    Essay,
    Scenario,
}

impl fmt::Display for QuestionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QuestionType::MultipleChoice => write!(f, "multiple_choice"),
            QuestionType::TrueFalse => write!(f, "true_false"),
            QuestionType::ShortAnswer => write!(f, "short_answer"),
            QuestionType::Essay => write!(f, "essay"),
            QuestionType::Scenario => write!(f, "scenario"),
        }
    }
}

impl FromStr for QuestionType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "multiple_choice" => Ok(QuestionType::MultipleChoice),
            "true_false" => Ok(QuestionType::TrueFalse),
            "short_answer" => Ok(QuestionType::ShortAnswer),
            "essay" => Ok(QuestionType::Essay),
            "scenario" => Ok(QuestionType::Scenario),
            other => Err(format!("unknown question type: {other}")),
        }
    }
}

/// Difficulty levels.
///
/// Ordered easy < medium < hard so quota maps iterate in a stable order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Difficulty::Easy => write!(f, "easy"),
            Difficulty::Medium => write!(f, "medium"),
            Difficulty::Hard => write!(f, "hard"),
        }
    }
}

impl FromStr for Difficulty {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            other => Err(format!("unknown difficulty: {other}")),
        }
    }
}

/// Target proportions of each difficulty in a generated assessment.
///
/// Fractions are expected to be non-negative and to sum to roughly 1.0,
/// but neither is enforced at construction time.
pub type DifficultyMix = BTreeMap<Difficulty, f64>;

/// The default 30/50/20 easy/medium/hard mix.
pub fn default_difficulty_mix() -> DifficultyMix {
    let mut mix = DifficultyMix::new();
    mix.insert(Difficulty::Easy, 0.3);
    mix.insert(Difficulty::Medium, 0.5);
    mix.insert(Difficulty::Hard, 0.2);
    mix
}

/// Kinds of assessment that can be generated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AssessmentType {
    Module,
    Final,
    Practice,
}

impl AssessmentType {
    /// Title-cased form used when building the assessment title.
    pub fn title_case(&self) -> &'static str {
        match self {
            AssessmentType::Module => "Module",
            AssessmentType::Final => "Final",
            AssessmentType::Practice => "Practice",
        }
    }
}

impl fmt::Display for AssessmentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AssessmentType::Module => write!(f, "module"),
            AssessmentType::Final => write!(f, "final"),
            AssessmentType::Practice => write!(f, "practice"),
        }
    }
}

impl FromStr for AssessmentType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "module" => Ok(AssessmentType::Module),
            "final" => Ok(AssessmentType::Final),
            "practice" => Ok(AssessmentType::Practice),
            other => Err(format!("unknown assessment type: {other}")),
        }
    }
}
