//! Score aggregation and result classification.
//!
//! ## Algorithm
//!
//! 1. Every pillar starts at 0.
//! 2. Each question adds its recorded rating to its pillar; a missing
//!    answer adds 0.
//! 3. The grand total is the sum of the pillar tallies.
//! 4. The lowest pillar is the minimum tally, ties resolved in favour of
//!    the first pillar in [`Pillar::ALL`] order.
//! 5. The result category is the first band in [`RESULT_BANDS`] whose
//!    threshold the total meets.
//!
//! | Total  | Category          |
//! |--------|-------------------|
//! | >= 65  | In FLOW           |
//! | >= 50  | Pockets of Chaos  |
//! | >= 35  | Stuck in the Spin |
//! | < 35   | Survival Mode     |

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

use super::answers::AnswerSet;
use crate::questions::{Pillar, Question, Rating, MAX_PILLAR_SCORE};

/// A qualitative outcome bucket selected by grand total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ResultCategory {
    /// Lowest total that lands in this band.
    #[serde(skip)]
    pub min_total: i64,
    pub title: &'static str,
    pub description: &'static str,
}

/// Bands ordered from highest threshold to lowest. First match wins.
pub static RESULT_BANDS: [ResultCategory; 4] = [
    ResultCategory {
        min_total: 65,
        title: "In FLOW",
        description: "You've built clarity into how you lead. The business runs with intention, not reaction.",
    },
    ResultCategory {
        min_total: 50,
        title: "Pockets of Chaos",
        description: "Some areas are working, but at least one pillar is dragging the rest down.",
    },
    ResultCategory {
        min_total: 35,
        title: "Stuck in the Spin",
        description: "You're busy, but not building. Most of your energy goes to maintenance, not momentum.",
    },
    ResultCategory {
        min_total: i64::MIN,
        title: "Survival Mode",
        description: "You're running on fumes. The business might look successful from the outside, but it's unsustainable.",
    },
];

impl ResultCategory {
    /// Classify a grand total. Defined for every integer.
    pub fn for_total(total: i64) -> &'static ResultCategory {
        RESULT_BANDS
            .iter()
            .find(|band| total >= band.min_total)
            .unwrap_or(&RESULT_BANDS[RESULT_BANDS.len() - 1])
    }
}

/// Per-pillar tally, stored in [`Pillar::ALL`] order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PillarScores {
    tallies: [u32; 4],
}

impl PillarScores {
    /// Sum each question's answer into its pillar.
    pub fn tally(questions: &[Question], answers: &AnswerSet) -> Self {
        let mut scores = Self::default();
        for q in questions {
            let value = answers.get(q.id).map(u32::from).unwrap_or(0);
            scores.tallies[q.pillar.index()] += value;
        }
        scores
    }

    pub fn get(&self, pillar: Pillar) -> u32 {
        self.tallies[pillar.index()]
    }

    /// `(pillar, tally)` pairs in enumeration order.
    pub fn iter(&self) -> impl Iterator<Item = (Pillar, u32)> + '_ {
        Pillar::ALL.into_iter().map(|p| (p, self.get(p)))
    }

    pub fn total(&self) -> u32 {
        self.tallies.iter().sum()
    }

    /// Pillar with the smallest tally; ties go to the earliest pillar.
    pub fn lowest(&self) -> Pillar {
        let mut lowest = Pillar::ALL[0];
        for (pillar, score) in self.iter() {
            // Strict comparison keeps the first minimum.
            if score < self.get(lowest) {
                lowest = pillar;
            }
        }
        lowest
    }
}

impl Serialize for PillarScores {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(Pillar::ALL.len()))?;
        for (pillar, score) in self.iter() {
            map.serialize_entry(pillar.label(), &score)?;
        }
        map.end()
    }
}

/// One row of the results view.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PillarResult {
    pub pillar: Pillar,
    pub score: u32,
    pub max: u32,
    /// 0.0 .. 100.0 of the pillar maximum.
    pub percent: f64,
    pub is_lowest: bool,
}

/// Everything the results view shows.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DiagnosticReport {
    pub scores: PillarScores,
    pub total: u32,
    pub max_total: u32,
    pub lowest_pillar: Pillar,
    pub category: ResultCategory,
    pub pillars: Vec<PillarResult>,
    pub answered: usize,
    pub question_count: usize,
}

pub const CONSTRAINT_MESSAGE: &str =
    "This is your leverage point. One focused shift here will unlock progress everywhere else.";

impl DiagnosticReport {
    pub fn compute(questions: &[Question], answers: &AnswerSet) -> Self {
        let scores = PillarScores::tally(questions, answers);
        let total = scores.total();
        let lowest_pillar = scores.lowest();
        let category = *ResultCategory::for_total(total as i64);

        let pillars = scores
            .iter()
            .map(|(pillar, score)| PillarResult {
                pillar,
                score,
                max: MAX_PILLAR_SCORE,
                percent: score as f64 / MAX_PILLAR_SCORE as f64 * 100.0,
                is_lowest: pillar == lowest_pillar,
            })
            .collect();

        let answered = questions.iter().filter(|q| answers.contains(q.id)).count();

        Self {
            scores,
            total,
            max_total: questions.len() as u32 * Rating::MAX as u32,
            lowest_pillar,
            category,
            pillars,
            answered,
            question_count: questions.len(),
        }
    }

    /// "Your Biggest Constraint: <pillar>"
    pub fn constraint_headline(&self) -> String {
        format!("Your Biggest Constraint: {}", self.lowest_pillar)
    }

    pub fn is_complete(&self) -> bool {
        self.answered == self.question_count
    }
}
