//! Multiple-choice options around a correct answer.

use optiquiz_core::{QuizError, Result};
use rand::seq::SliceRandom;
use rand::Rng;

/// Returns `count` distinct values, `correct` among them, in random order.
///
/// Every other value is `correct + δ` with `δ` drawn uniformly from
/// `-spread..=spread`, kept only if strictly positive and not already
/// chosen. Each draw counts as one attempt.
///
/// # Errors
///
/// [`QuizError::Validation`] if `count` is zero, and
/// [`QuizError::DistractorGeneration`] if `max_attempts` draws do not
/// produce enough distinct values.
///
/// # Example
///
/// ```
/// use optiquiz::generate_choices;
/// use rand::rngs::StdRng;
/// use rand::SeedableRng;
///
/// let mut rng = StdRng::seed_from_u64(9);
/// let choices = generate_choices(5, 3, 3, 1_000, &mut rng).unwrap();
///
/// assert_eq!(choices.len(), 3);
/// assert!(choices.contains(&5));
/// ```
pub fn generate_choices<R: Rng + ?Sized>(
    correct: u32,
    count: usize,
    spread: u32,
    max_attempts: usize,
    rng: &mut R,
) -> Result<Vec<u32>> {
    if count == 0 {
        return Err(QuizError::Validation(
            "at least one choice is required".into(),
        ));
    }

    let spread = i64::from(spread);
    let mut choices = Vec::with_capacity(count);
    choices.push(correct);

    let mut attempts = 0;
    while choices.len() < count {
        if attempts == max_attempts {
            return Err(QuizError::DistractorGeneration {
                correct,
                count,
                attempts,
            });
        }
        attempts += 1;

        let candidate = i64::from(correct) + rng.random_range(-spread..=spread);
        if let Ok(candidate) = u32::try_from(candidate) {
            if candidate > 0 && !choices.contains(&candidate) {
                choices.push(candidate);
            }
        }
    }

    choices.shuffle(rng);
    Ok(choices)
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;

    #[test]
    fn test_three_distinct_positive_choices() {
        for correct in 1..=40 {
            let mut rng = StdRng::seed_from_u64(u64::from(correct));
            let choices = generate_choices(correct, 3, 3, 1_000, &mut rng).unwrap();

            assert_eq!(choices.len(), 3);
            assert!(choices.contains(&correct));
            assert!(choices.iter().all(|&c| c > 0));
            let mut sorted = choices.clone();
            sorted.sort_unstable();
            sorted.dedup();
            assert_eq!(sorted.len(), 3);
            assert!(choices.iter().all(|&c| c.abs_diff(correct) <= 3));
        }
    }

    #[test]
    fn test_single_choice_is_the_answer() {
        let mut rng = StdRng::seed_from_u64(0);
        assert_eq!(generate_choices(4, 1, 3, 10, &mut rng).unwrap(), vec![4]);
    }

    #[test]
    fn test_zero_count_rejected() {
        let mut rng = StdRng::seed_from_u64(0);
        assert!(matches!(
            generate_choices(4, 0, 3, 10, &mut rng),
            Err(QuizError::Validation(_))
        ));
    }

    #[test]
    fn test_impossible_request_gives_up() {
        // only 1..=4 are reachable around 1 with spread 3
        let mut rng = StdRng::seed_from_u64(0);
        let outcome = generate_choices(1, 6, 3, 50, &mut rng);
        assert!(matches!(
            outcome,
            Err(QuizError::DistractorGeneration {
                correct: 1,
                count: 6,
                attempts: 50
            })
        ));
    }

    #[test]
    fn test_zero_spread_cannot_add_values() {
        let mut rng = StdRng::seed_from_u64(0);
        assert!(generate_choices(7, 2, 0, 20, &mut rng).is_err());
    }
}
