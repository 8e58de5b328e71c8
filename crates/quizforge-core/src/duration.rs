//! Assessment duration estimation.

use crate::model::{Question, QuestionType};

/// Fixed buffer added to every estimate, in minutes.
const BUFFER_MINUTES: u32 = 10;

impl QuestionType {
    /// Estimated minutes a candidate needs for one question of this type.
    pub fn estimated_minutes(&self) -> f64 {
        match self {
            QuestionType::MultipleChoice => 1.5,
            QuestionType::TrueFalse => 1.0,
            QuestionType::ShortAnswer => 3.0,
            QuestionType::Essay => 10.0,
            QuestionType::Scenario => 15.0,
        }
    }
}

/// Estimate the total duration of an assessment in minutes.
///
/// Sums the per-type weights, truncates to an integer, and adds a fixed
/// 10-minute buffer. `estimate_duration(&[])` is the buffer alone.
pub fn estimate_duration(questions: &[Question]) -> u32 {
    let total: f64 = questions
        .iter()
        .map(|q| q.question_type.estimated_minutes())
        .sum();
    total as u32 + BUFFER_MINUTES
}
