use crate::error::ContentError;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// A probability topic shown in the Learn tab.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Concept {
    pub name: &'static str,
    pub definition: &'static str,
    pub example: &'static str,
}

pub static PROBABILITY_CONCEPTS: [Concept; 4] = [
    Concept {
        name: "Basic Probability",
        definition: "Probability is a measure of how likely an event is to occur. It ranges from 0 (impossible) to 1 (certain).",
        example: "The probability of rolling a 6 on a fair 6-sided die is 1/6 ≈ 0.1667.",
    },
    Concept {
        name: "Independent & Dependent Events",
        definition: "Independent events do not affect each other’s outcomes, while dependent events do.",
        example: "Flipping a coin twice (independent) vs. drawing two cards from a deck without replacement (dependent).",
    },
    Concept {
        name: "Conditional Probability",
        definition: "Conditional probability is the probability of an event occurring given that another event has already occurred.",
        example: "If a bag has 5 red and 3 blue balls, and you draw a red first, the probability of drawing another red changes.",
    },
    Concept {
        name: "Bayes' Theorem",
        definition: "Bayes' Theorem describes how to update probabilities based on new evidence.",
        example: "If a test for a disease is 90% accurate but the disease is rare (1% of people), the probability of having the disease given a positive test is lower than 90%.",
    },
];

static EASY_QUESTIONS: [&str; 5] = [
    "What is the probability of rolling a 3 on a fair 6-sided die?",
    "If you flip a fair coin, what is the probability of getting heads?",
    "A bag contains 4 red and 6 blue balls. What is the probability of drawing a red ball?",
    "A die is rolled. What is the probability of getting an even number?",
    "A class has 10 boys and 15 girls. What is the probability of selecting a boy at random?",
];

static MEDIUM_QUESTIONS: [&str; 5] = [
    "What is the probability of getting two heads when flipping two fair coins?",
    "A box contains 5 green, 3 yellow, and 2 red balls. What is the probability of drawing a yellow ball?",
    "If you roll two dice, what is the probability that the sum is 7?",
    "A deck has 52 cards. What is the probability of drawing a king?",
    "A couple plans to have 3 children. What is the probability of having exactly two boys?",
];

static HARD_QUESTIONS: [&str; 5] = [
    "A family has 3 children. What is the probability that all are boys?",
    "A fair die is rolled twice. What is the probability of rolling an even number both times?",
    "What is the probability of drawing two aces from a shuffled deck of 52 cards?",
    "A bag contains 5 white, 4 red, and 3 blue balls. If two balls are drawn, what is the probability that both are red?",
    "In a group of 10 people, what is the probability that at least two share the same birthday?",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    #[default]
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    pub fn as_str(self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }

    /// The fixed question list for this tier. Never empty.
    pub fn questions(self) -> &'static [&'static str] {
        match self {
            Difficulty::Easy => &EASY_QUESTIONS,
            Difficulty::Medium => &MEDIUM_QUESTIONS,
            Difficulty::Hard => &HARD_QUESTIONS,
        }
    }

    /// Next tier down the radio list, stopping at `Hard`.
    pub fn next(self) -> Self {
        match self {
            Difficulty::Easy => Difficulty::Medium,
            Difficulty::Medium | Difficulty::Hard => Difficulty::Hard,
        }
    }

    /// Previous tier up the radio list, stopping at `Easy`.
    pub fn prev(self) -> Self {
        match self {
            Difficulty::Hard => Difficulty::Medium,
            Difficulty::Medium | Difficulty::Easy => Difficulty::Easy,
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Difficulty {
    type Err = ContentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            other => Err(ContentError::InvalidDifficulty(other.to_string())),
        }
    }
}

pub fn topic_names() -> impl Iterator<Item = &'static str> {
    PROBABILITY_CONCEPTS.iter().map(|c| c.name)
}

pub fn lookup_concept(name: &str) -> Result<&'static Concept, ContentError> {
    PROBABILITY_CONCEPTS
        .iter()
        .find(|c| c.name == name)
        .ok_or_else(|| ContentError::TopicNotFound(name.to_string()))
}

/// Markdown body for the Learn panel.
pub fn concept_markdown(concept: &Concept) -> String {
    format!(
        "## {}\n\n**Definition:** {}\n\n**Example:** {}",
        concept.name, concept.definition, concept.example
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_returns_exact_text_for_every_topic() {
        for concept in PROBABILITY_CONCEPTS.iter() {
            let found = lookup_concept(concept.name).unwrap();
            assert_eq!(found.definition, concept.definition);
            assert_eq!(found.example, concept.example);
        }
    }

    #[test]
    fn test_lookup_bayes() {
        let bayes = lookup_concept("Bayes' Theorem").unwrap();
        assert_eq!(
            bayes.definition,
            "Bayes' Theorem describes how to update probabilities based on new evidence."
        );
    }

    #[test]
    fn test_lookup_unknown_topic() {
        let err = lookup_concept("Markov Chains").unwrap_err();
        assert_eq!(err, ContentError::TopicNotFound("Markov Chains".to_string()));
    }

    #[test]
    fn test_topic_names_in_display_order() {
        let names: Vec<&str> = topic_names().collect();
        assert_eq!(
            names,
            vec![
                "Basic Probability",
                "Independent & Dependent Events",
                "Conditional Probability",
                "Bayes' Theorem",
            ]
        );
    }

    #[test]
    fn test_every_tier_has_five_questions() {
        for tier in Difficulty::ALL {
            assert_eq!(tier.questions().len(), 5, "tier {}", tier);
        }
    }

    #[test]
    fn test_difficulty_parse_and_display() {
        for tier in Difficulty::ALL {
            assert_eq!(tier.as_str().parse::<Difficulty>().unwrap(), tier);
            assert_eq!(tier.to_string(), tier.as_str());
        }
    }

    #[test]
    fn test_difficulty_parse_rejects_unknown_tier() {
        let err = "expert".parse::<Difficulty>().unwrap_err();
        assert_eq!(err, ContentError::InvalidDifficulty("expert".to_string()));
        assert!("Easy".parse::<Difficulty>().is_err());
    }

    #[test]
    fn test_difficulty_next_prev_saturate() {
        assert_eq!(Difficulty::Easy.prev(), Difficulty::Easy);
        assert_eq!(Difficulty::Easy.next(), Difficulty::Medium);
        assert_eq!(Difficulty::Medium.next(), Difficulty::Hard);
        assert_eq!(Difficulty::Hard.next(), Difficulty::Hard);
        assert_eq!(Difficulty::Hard.prev(), Difficulty::Medium);
    }

    #[test]
    fn test_concept_markdown_contains_labels() {
        let md = concept_markdown(&PROBABILITY_CONCEPTS[0]);
        assert!(md.starts_with("## Basic Probability"));
        assert!(md.contains("**Definition:** Probability is a measure"));
        assert!(md.contains("**Example:** The probability of rolling a 6"));
    }
}
