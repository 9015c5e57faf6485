//! The static question bank.
//!
//! Sixteen statements, four per pillar, listed pillar by pillar. The slice
//! order is the quiz traversal order.

use serde::Serialize;

use super::pillar::Pillar;
use super::rating::Rating;

/// Identifier of a question in the bank.
pub type QuestionId = u32;

/// Number of questions assigned to each pillar.
pub const QUESTIONS_PER_PILLAR: usize = 4;

/// Highest tally a single pillar can reach.
pub const MAX_PILLAR_SCORE: u32 = QUESTIONS_PER_PILLAR as u32 * Rating::MAX as u32;

/// An assessment statement the user rates on the 1-5 scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Question {
    pub id: QuestionId,
    pub pillar: Pillar,
    pub text: &'static str,
}

static QUESTIONS: [Question; 16] = [
    // Focus
    Question {
        id: 1,
        pillar: Pillar::Focus,
        text: "I spend most of my week on work that only I can do.",
    },
    Question {
        id: 2,
        pillar: Pillar::Focus,
        text: "I can clearly articulate my top 3 priorities for this quarter.",
    },
    Question {
        id: 3,
        pillar: Pillar::Focus,
        text: "I rarely get pulled into firefighting or urgent issues that others could handle.",
    },
    Question {
        id: 4,
        pillar: Pillar::Focus,
        text: "My calendar reflects my priorities, not other people's demands.",
    },
    // Leadership
    Question {
        id: 5,
        pillar: Pillar::Leadership,
        text: "My leadership team makes decisions without waiting for me.",
    },
    Question {
        id: 6,
        pillar: Pillar::Leadership,
        text: "I don't have anyone on my team I'm \"managing around.\"",
    },
    Question {
        id: 7,
        pillar: Pillar::Leadership,
        text: "Difficult conversations happen quickly, not months later.",
    },
    Question {
        id: 8,
        pillar: Pillar::Leadership,
        text: "My team challenges my thinking, not just executes my ideas.",
    },
    // Opportunity
    Question {
        id: 9,
        pillar: Pillar::Opportunity,
        text: "I've reviewed our pricing, products, and key partnerships in the last 12 months.",
    },
    Question {
        id: 10,
        pillar: Pillar::Opportunity,
        text: "I'm not protecting any client, product, or process that's past its usefulness.",
    },
    Question {
        id: 11,
        pillar: Pillar::Opportunity,
        text: "We're actively pursuing new opportunities, not just maintaining what works.",
    },
    Question {
        id: 12,
        pillar: Pillar::Opportunity,
        text: "I know exactly what we'd do differently if our biggest client left tomorrow.",
    },
    // Worth
    Question {
        id: 13,
        pillar: Pillar::Worth,
        text: "I know the true cost of my time, and I protect it accordingly.",
    },
    Question {
        id: 14,
        pillar: Pillar::Worth,
        text: "I regularly calculate hidden costs — not just the P&L.",
    },
    Question {
        id: 15,
        pillar: Pillar::Worth,
        text: "The business energises me more than it drains me.",
    },
    Question {
        id: 16,
        pillar: Pillar::Worth,
        text: "I could step away for a month, and the business would run without a crisis.",
    },
];

/// All questions in traversal order.
pub fn all_questions() -> &'static [Question] {
    &QUESTIONS
}

/// Look up a question by id.
pub fn question(id: QuestionId) -> Option<&'static Question> {
    QUESTIONS.iter().find(|q| q.id == id)
}

/// The questions for one pillar, in bank order.
pub fn questions_for(pillar: Pillar) -> impl Iterator<Item = &'static Question> {
    QUESTIONS.iter().filter(move |q| q.pillar == pillar)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn ids_are_unique() {
        let ids: HashSet<_> = all_questions().iter().map(|q| q.id).collect();
        assert_eq!(ids.len(), all_questions().len());
    }

    #[test]
    fn every_pillar_has_same_count() {
        for pillar in Pillar::ALL {
            assert_eq!(questions_for(pillar).count(), QUESTIONS_PER_PILLAR, "{pillar}");
        }
        assert_eq!(all_questions().len(), Pillar::ALL.len() * QUESTIONS_PER_PILLAR);
    }

    #[test]
    fn lookup_by_id() {
        let q = question(7).unwrap();
        assert_eq!(q.pillar, Pillar::Leadership);
        assert!(q.text.starts_with("Difficult conversations"));
        assert!(question(0).is_none());
        assert!(question(17).is_none());
    }

    #[test]
    fn traversal_groups_pillars_in_enumeration_order() {
        let order: Vec<Pillar> = all_questions()
            .chunks(QUESTIONS_PER_PILLAR)
            .map(|chunk| chunk[0].pillar)
            .collect();
        assert_eq!(order, Pillar::ALL.to_vec());
    }

    #[test]
    fn max_pillar_score_is_twenty() {
        assert_eq!(MAX_PILLAR_SCORE, 20);
    }
}
