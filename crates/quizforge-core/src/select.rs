//! Quota allocation and random question selection.
//!
//! This is the core of the generator: convert a difficulty mix into integer
//! quotas, sample questions per difficulty without replacement, and shuffle
//! the combined result.

use std::collections::{BTreeMap, HashSet};

use rand::seq::SliceRandom;
use rand::Rng;

use crate::error::AllocationError;
use crate::model::{Difficulty, DifficultyMix, Question};

/// Integer question quotas per difficulty level.
pub type Quotas = BTreeMap<Difficulty, usize>;

/// Compute per-difficulty quotas for `total` questions.
///
/// Each quota is `floor(total * fraction)`. Any rounding shortfall is added
/// entirely to the medium quota. Returns an error if the mix has no medium
/// entry when a shortfall exists.
pub fn allocate_quotas(total: usize, mix: &DifficultyMix) -> Result<Quotas, AllocationError> {
    let mut quotas: Quotas = mix
        .iter()
        .map(|(level, fraction)| (*level, (total as f64 * fraction) as usize))
        .collect();

    let allocated: usize = quotas.values().sum();
    let shortfall = total.saturating_sub(allocated);
    if shortfall > 0 {
        match quotas.get_mut(&Difficulty::Medium) {
            Some(quota) => *quota += shortfall,
            None => return Err(AllocationError::NoMediumBucket { shortfall }),
        }
    }

    Ok(quotas)
}

/// Select up to `total` questions from `questions`, filtered to the given
/// modules and sampled per the difficulty mix.
///
/// Sampling within a level is uniform and without replacement; the combined
/// result is shuffled, so the final order carries no difficulty grouping.
/// Levels with too few candidates are silently under-filled, so the returned
/// length may be less than `total`. Candidates are deduplicated by id, so a
/// question can appear at most once even if a malformed bank lists it under
/// two difficulty levels.
pub fn select_questions<'a, R, I>(
    questions: I,
    modules: &[String],
    total: usize,
    mix: &DifficultyMix,
    rng: &mut R,
) -> Result<Vec<Question>, AllocationError>
where
    R: Rng,
    I: IntoIterator<Item = &'a Question>,
{
    let quotas = allocate_quotas(total, mix)?;

    let module_set: HashSet<&str> = modules.iter().map(String::as_str).collect();
    let mut seen_ids = HashSet::new();
    let candidates: Vec<&Question> = questions
        .into_iter()
        .filter(|q| module_set.contains(q.module.as_str()))
        .filter(|q| seen_ids.insert(q.id.as_str()))
        .collect();

    let mut selected = Vec::with_capacity(total);
    for (level, quota) in &quotas {
        let pool: Vec<&Question> = candidates
            .iter()
            .copied()
            .filter(|q| q.difficulty == *level)
            .collect();

        let take = (*quota).min(pool.len());
        if take < *quota {
            tracing::debug!(
                level = %level,
                requested = quota,
                available = pool.len(),
                "under-filled difficulty level"
            );
        }

        selected.extend(pool.choose_multiple(rng, take).map(|q| (*q).clone()));
    }

    selected.shuffle(rng);
    Ok(selected)
}

/// Count the selected questions per difficulty level.
///
/// This is the realized distribution recorded on the assessment, which can
/// be smaller than the quotas when a level was under-filled.
pub fn difficulty_distribution(questions: &[Question]) -> Quotas {
    let mut counts = Quotas::new();
    for q in questions {
        *counts.entry(q.difficulty).or_insert(0) += 1;
    }
    counts
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{default_difficulty_mix, Answer, QuestionType};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn question(id: &str, difficulty: Difficulty, module: &str) -> Question {
        Question {
            id: id.into(),
            question_type: QuestionType::MultipleChoice,
            prompt: format!("prompt for {id}"),
            options: Some(vec!["a".into(), "b".into()]),
            correct_answer: Answer::Text("a".into()),
            explanation: String::new(),
            difficulty,
            module: module.into(),
        }
    }

    fn rng() -> StdRng {
        StdRng::seed_from_u64(42)
    }

    #[test]
    fn quotas_sum_to_total_with_medium_present() {
        let mix = default_difficulty_mix();
        for total in [0, 1, 2, 7, 20, 33, 100] {
            let quotas = allocate_quotas(total, &mix).unwrap();
            assert_eq!(quotas.values().sum::<usize>(), total, "total {total}");
        }
    }

    #[test]
    fn shortfall_goes_to_medium() {
        // 7 * 0.3 = 2.1 -> 2, 7 * 0.5 = 3.5 -> 3, 7 * 0.2 = 1.4 -> 1;
        // shortfall of 1 lands on medium.
        let quotas = allocate_quotas(7, &default_difficulty_mix()).unwrap();
        assert_eq!(quotas[&Difficulty::Easy], 2);
        assert_eq!(quotas[&Difficulty::Medium], 4);
        assert_eq!(quotas[&Difficulty::Hard], 1);
    }

    #[test]
    fn missing_medium_with_shortfall_is_an_error() {
        let mut mix = DifficultyMix::new();
        mix.insert(Difficulty::Easy, 0.5);
        mix.insert(Difficulty::Hard, 0.5);
        // 3 * 0.5 = 1.5 -> 1 each, shortfall 1.
        let err = allocate_quotas(3, &mix).unwrap_err();
        assert_eq!(err.shortfall(), 1);
    }

    #[test]
    fn missing_medium_without_shortfall_is_fine() {
        let mut mix = DifficultyMix::new();
        mix.insert(Difficulty::Easy, 0.5);
        mix.insert(Difficulty::Hard, 0.5);
        let quotas = allocate_quotas(4, &mix).unwrap();
        assert_eq!(quotas[&Difficulty::Easy], 2);
        assert_eq!(quotas[&Difficulty::Hard], 2);
    }

    #[test]
    fn selects_requested_count_when_supply_suffices() {
        let bank: Vec<Question> = (0..10)
            .map(|i| question(&format!("e{i}"), Difficulty::Easy, "networking"))
            .chain((0..10).map(|i| question(&format!("m{i}"), Difficulty::Medium, "networking")))
            .chain((0..10).map(|i| question(&format!("h{i}"), Difficulty::Hard, "networking")))
            .collect();

        let selected = select_questions(
            &bank,
            &["networking".to_string()],
            10,
            &default_difficulty_mix(),
            &mut rng(),
        )
        .unwrap();

        assert_eq!(selected.len(), 10);
        let dist = difficulty_distribution(&selected);
        assert_eq!(dist[&Difficulty::Easy], 3);
        assert_eq!(dist[&Difficulty::Medium], 5);
        assert_eq!(dist[&Difficulty::Hard], 2);
    }

    #[test]
    fn under_fills_silently_when_supply_is_short() {
        let bank = vec![
            question("e1", Difficulty::Easy, "storage"),
            question("m1", Difficulty::Medium, "storage"),
        ];
        let selected = select_questions(
            &bank,
            &["storage".to_string()],
            20,
            &default_difficulty_mix(),
            &mut rng(),
        )
        .unwrap();
        assert_eq!(selected.len(), 2);
    }

    #[test]
    fn module_filter_excludes_other_modules() {
        let bank = vec![
            question("a", Difficulty::Medium, "networking"),
            question("b", Difficulty::Medium, "storage"),
            question("c", Difficulty::Medium, "security"),
        ];
        let selected = select_questions(
            &bank,
            &["networking".to_string(), "security".to_string()],
            3,
            &default_difficulty_mix(),
            &mut rng(),
        )
        .unwrap();
        assert_eq!(selected.len(), 2);
        assert!(selected.iter().all(|q| q.module != "storage"));
    }

    #[test]
    fn no_duplicate_ids_in_selection() {
        let bank: Vec<Question> = (0..30)
            .map(|i| {
                let level = match i % 3 {
                    0 => Difficulty::Easy,
                    1 => Difficulty::Medium,
                    _ => Difficulty::Hard,
                };
                question(&format!("q{i}"), level, "introduction")
            })
            .collect();

        let selected = select_questions(
            &bank,
            &["introduction".to_string()],
            20,
            &default_difficulty_mix(),
            &mut rng(),
        )
        .unwrap();

        let mut ids: Vec<&str> = selected.iter().map(|q| q.id.as_str()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), selected.len());
    }

    #[test]
    fn duplicate_id_across_difficulties_selected_once() {
        // Same id listed under two difficulty levels in a malformed bank.
        let mut dup = question("dup", Difficulty::Easy, "introduction");
        dup.difficulty = Difficulty::Medium;
        let bank = vec![question("dup", Difficulty::Easy, "introduction"), dup];

        let selected = select_questions(
            &bank,
            &["introduction".to_string()],
            2,
            &default_difficulty_mix(),
            &mut rng(),
        )
        .unwrap();
        assert_eq!(selected.len(), 1);
    }

    #[test]
    fn shortfall_redistribution_scenario() {
        // Bank: one easy true/false tagged "security", one medium tagged
        // "introduction". Request 2 with the default mix: quotas floor to
        // {easy: 0, medium: 1, hard: 0}, shortfall 1 raises medium to 2, and
        // the medium pool only has 1 question, so exactly 1 comes back.
        let mut tf = question("sec_tf", Difficulty::Easy, "security");
        tf.question_type = QuestionType::TrueFalse;
        tf.options = None;
        tf.correct_answer = Answer::Bool(true);
        let bank = vec![tf, question("intro_m", Difficulty::Medium, "introduction")];

        let quotas = allocate_quotas(2, &default_difficulty_mix()).unwrap();
        assert_eq!(quotas[&Difficulty::Easy], 0);
        assert_eq!(quotas[&Difficulty::Medium], 2);
        assert_eq!(quotas[&Difficulty::Hard], 0);

        let selected = select_questions(
            &bank,
            &["introduction".to_string(), "security".to_string()],
            2,
            &default_difficulty_mix(),
            &mut rng(),
        )
        .unwrap();
        assert_eq!(selected.len(), 1);
        assert_eq!(selected[0].id, "intro_m");
    }

    #[test]
    fn seeded_rng_is_deterministic() {
        let bank: Vec<Question> = (0..12)
            .map(|i| question(&format!("q{i}"), Difficulty::Medium, "networking"))
            .collect();
        let mix = default_difficulty_mix();
        let modules = vec!["networking".to_string()];

        let first = select_questions(&bank, &modules, 5, &mix, &mut rng()).unwrap();
        let second = select_questions(&bank, &modules, 5, &mix, &mut rng()).unwrap();
        let first_ids: Vec<&str> = first.iter().map(|q| q.id.as_str()).collect();
        let second_ids: Vec<&str> = second.iter().map(|q| q.id.as_str()).collect();
        assert_eq!(first_ids, second_ids);
    }

    #[test]
    fn empty_bank_yields_empty_selection() {
        let bank: Vec<Question> = Vec::new();
        let selected = select_questions(
            &bank,
            &["networking".to_string()],
            10,
            &default_difficulty_mix(),
            &mut rng(),
        )
        .unwrap();
        assert!(selected.is_empty());
    }
}
