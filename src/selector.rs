use crate::content::Difficulty;
use crate::error::ContentError;
use rand::Rng;

/// Draw one question uniformly from the tier's list. Repeats across calls are allowed.
pub fn select<R: Rng + ?Sized>(difficulty: Difficulty, rng: &mut R) -> &'static str {
    let questions = difficulty.questions();
    questions[rng.gen_range(0..questions.len())]
}

/// Same as [`select`] for a tier given by name.
pub fn select_by_name<R: Rng + ?Sized>(
    tier: &str,
    rng: &mut R,
) -> Result<&'static str, ContentError> {
    let difficulty: Difficulty = tier.parse()?;
    Ok(select(difficulty, rng))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    #[test]
    fn test_select_always_from_tier_list() {
        let mut rng = StdRng::seed_from_u64(7);
        for tier in Difficulty::ALL {
            for _ in 0..200 {
                let q = select(tier, &mut rng);
                assert!(tier.questions().contains(&q), "{} not in {}", q, tier);
            }
        }
    }

    #[test]
    fn test_easy_question_is_one_of_the_five_literals() {
        let easy = [
            "What is the probability of rolling a 3 on a fair 6-sided die?",
            "If you flip a fair coin, what is the probability of getting heads?",
            "A bag contains 4 red and 6 blue balls. What is the probability of drawing a red ball?",
            "A die is rolled. What is the probability of getting an even number?",
            "A class has 10 boys and 15 girls. What is the probability of selecting a boy at random?",
        ];
        let mut rng = StdRng::seed_from_u64(42);
        let q = select_by_name("easy", &mut rng).unwrap();
        assert!(easy.contains(&q));
    }

    #[test]
    fn test_select_covers_whole_tier_and_repeats() {
        let mut rng = StdRng::seed_from_u64(1);
        let draws: Vec<&str> = (0..100).map(|_| select(Difficulty::Hard, &mut rng)).collect();
        let distinct: HashSet<&str> = draws.iter().copied().collect();
        assert_eq!(distinct.len(), 5);
        assert!(draws.len() > distinct.len());
    }

    #[test]
    fn test_select_by_name_invalid_tier() {
        let mut rng = StdRng::seed_from_u64(0);
        let err = select_by_name("impossible", &mut rng).unwrap_err();
        assert_eq!(err, ContentError::InvalidDifficulty("impossible".to_string()));
    }
}
