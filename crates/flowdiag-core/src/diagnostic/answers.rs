use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::questions::{Question, QuestionId, Rating};

/// Recorded responses for one session, keyed by question id.
///
/// Unanswered questions are absent rather than stored as zero.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnswerSet {
    answers: BTreeMap<QuestionId, Rating>,
}

impl AnswerSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store an answer, returning the one it replaced.
    pub fn record(&mut self, question_id: QuestionId, rating: Rating) -> Option<Rating> {
        self.answers.insert(question_id, rating)
    }

    pub fn get(&self, question_id: QuestionId) -> Option<Rating> {
        self.answers.get(&question_id).copied()
    }

    pub fn contains(&self, question_id: QuestionId) -> bool {
        self.answers.contains_key(&question_id)
    }

    pub fn len(&self) -> usize {
        self.answers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.answers.is_empty()
    }

    pub fn clear(&mut self) {
        self.answers.clear();
    }

    /// Answers in ascending question id order.
    pub fn iter(&self) -> impl Iterator<Item = (QuestionId, Rating)> + '_ {
        self.answers.iter().map(|(id, rating)| (*id, *rating))
    }

    /// True when every question in `questions` has an answer.
    pub fn is_complete(&self, questions: &[Question]) -> bool {
        questions.iter().all(|q| self.contains(q.id))
    }
}

impl FromIterator<(QuestionId, Rating)> for AnswerSet {
    fn from_iter<I: IntoIterator<Item = (QuestionId, Rating)>>(iter: I) -> Self {
        Self {
            answers: iter.into_iter().collect(),
        }
    }
}
