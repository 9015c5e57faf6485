use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::diagnostic::DiagnosticState;
use crate::questions::{Pillar, QuestionId, Rating};

/// Every state change in the diagnostic produces an Event.
/// Front ends render from them; nothing in the core consumes them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Event {
    /// Lead accepted, quiz begins at the first question.
    LeadCaptured {
        session_id: String,
        has_business: bool,
        at: DateTime<Utc>,
    },
    AnswerRecorded {
        question_id: QuestionId,
        pillar: Pillar,
        rating: Rating,
        /// Previous answer when the question was re-answered.
        replaced: Option<Rating>,
        at: DateTime<Utc>,
    },
    QuestionAdvanced {
        from_index: usize,
        to_index: usize,
        at: DateTime<Utc>,
    },
    /// Last question advanced, results computed.
    DiagnosticCompleted {
        session_id: String,
        total: u32,
        category: String,
        lowest_pillar: Pillar,
        at: DateTime<Utc>,
    },
    SessionReset {
        from_state: DiagnosticState,
        at: DateTime<Utc>,
    },
    StateSnapshot {
        session_id: String,
        state: DiagnosticState,
        current_index: usize,
        question_count: usize,
        answered: usize,
        progress_pct: f64,
        at: DateTime<Utc>,
    },
}
