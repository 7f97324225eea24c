//! Built-in question bank for the quiz flow.
//!
//! Questions are fixed at build time. The core never awards coins itself:
//! the quiz screen decides the reward from the question difficulty
//! (easy x1, medium x2, hard x3) and calls `SessionStore::add_coins`.

use once_cell::sync::Lazy;
use rand::seq::SliceRandom;

/// Coins awarded for a correct answer before the difficulty multiplier.
pub const BASE_COIN_REWARD: i64 = 10;

/// Question difficulty, mapped to a coin multiplier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    /// Multiplier applied to the base coin reward.
    pub fn coin_multiplier(self) -> i64 {
        match self {
            Difficulty::Easy => 1,
            Difficulty::Medium => 2,
            Difficulty::Hard => 3,
        }
    }

    /// Coins awarded for answering a question of this difficulty.
    pub fn coin_reward(self) -> i64 {
        BASE_COIN_REWARD * self.coin_multiplier()
    }
}

/// A single multiple-choice question with four answers.
#[derive(Debug, Clone)]
pub struct Question {
    pub id: u32,
    pub prompt: &'static str,
    pub answers: [&'static str; 4],
    /// Index into `answers` of the correct one.
    pub correct_answer: usize,
    pub difficulty: Difficulty,
}

impl Question {
    /// Returns true if `index` selects the correct answer.
    pub fn is_correct(&self, index: usize) -> bool {
        index == self.correct_answer
    }
}

static BANK: Lazy<Vec<Question>> = Lazy::new(build_bank);

/// Returns the built-in question bank, in fixed order.
pub fn question_bank() -> &'static [Question] {
    &BANK
}

/// Returns a shuffled copy of the bank for one quiz run.
pub fn shuffled_questions() -> Vec<Question> {
    let mut questions = BANK.clone();
    questions.shuffle(&mut rand::thread_rng());
    questions
}

fn build_bank() -> Vec<Question> {
    use Difficulty::*;
    vec![
        Question {
            id: 1,
            prompt: "Was ist die Hauptstadt von Deutschland?",
            answers: ["München", "Hamburg", "Berlin", "Frankfurt"],
            correct_answer: 2,
            difficulty: Easy,
        },
        Question {
            id: 2,
            prompt: "Wie viele Kontinente gibt es auf der Erde?",
            answers: ["5", "6", "7", "8"],
            correct_answer: 2,
            difficulty: Easy,
        },
        Question {
            id: 3,
            prompt: "Wer hat die Relativitätstheorie entwickelt?",
            answers: [
                "Isaac Newton",
                "Albert Einstein",
                "Stephen Hawking",
                "Nikola Tesla",
            ],
            correct_answer: 1,
            difficulty: Medium,
        },
        Question {
            id: 4,
            prompt: "Welches ist das größte Säugetier der Welt?",
            answers: ["Elefant", "Blauwal", "Giraffe", "Nashorn"],
            correct_answer: 1,
            difficulty: Easy,
        },
        Question {
            id: 5,
            prompt: "In welchem Jahr fiel die Berliner Mauer?",
            answers: ["1987", "1988", "1989", "1990"],
            correct_answer: 2,
            difficulty: Medium,
        },
        Question {
            id: 6,
            prompt: "Wie viele Planeten hat unser Sonnensystem?",
            answers: ["7", "8", "9", "10"],
            correct_answer: 1,
            difficulty: Easy,
        },
        Question {
            id: 7,
            prompt: "Was ist das chemische Symbol für Gold?",
            answers: ["Go", "Gd", "Au", "Ag"],
            correct_answer: 2,
            difficulty: Medium,
        },
        Question {
            id: 8,
            prompt: "Welcher ist der längste Fluss der Welt?",
            answers: ["Amazonas", "Nil", "Mississippi", "Jangtse"],
            correct_answer: 1,
            difficulty: Hard,
        },
        Question {
            id: 9,
            prompt: "Wie viele Sekunden hat eine Stunde?",
            answers: ["3000", "3600", "4200", "3200"],
            correct_answer: 1,
            difficulty: Easy,
        },
        Question {
            id: 10,
            prompt: "Wer malte die Mona Lisa?",
            answers: [
                "Vincent van Gogh",
                "Pablo Picasso",
                "Leonardo da Vinci",
                "Michelangelo",
            ],
            correct_answer: 2,
            difficulty: Hard,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bank_is_well_formed() {
        let bank = question_bank();
        assert_eq!(bank.len(), 10);
        for question in bank {
            assert!(question.correct_answer < question.answers.len());
            assert!(!question.prompt.is_empty());
        }
    }

    #[test]
    fn test_ids_are_unique() {
        let bank = question_bank();
        let mut ids: Vec<u32> = bank.iter().map(|q| q.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), bank.len());
    }

    #[test]
    fn test_coin_multipliers() {
        assert_eq!(Difficulty::Easy.coin_multiplier(), 1);
        assert_eq!(Difficulty::Medium.coin_multiplier(), 2);
        assert_eq!(Difficulty::Hard.coin_multiplier(), 3);
        assert_eq!(Difficulty::Hard.coin_reward(), 30);
    }

    #[test]
    fn test_shuffle_keeps_all_questions() {
        let mut ids: Vec<u32> = shuffled_questions().iter().map(|q| q.id).collect();
        ids.sort_unstable();
        assert_eq!(ids, (1..=10).collect::<Vec<u32>>());
    }
}
