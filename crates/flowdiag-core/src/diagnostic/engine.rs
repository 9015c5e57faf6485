//! Diagnostic engine implementation.
//!
//! The engine is an owned state machine. Every command takes `&mut self`,
//! runs synchronously, and returns the [`Event`] describing what changed.
//!
//! ## State Transitions
//!
//! ```text
//! Lead --submit_lead--> Quiz --advance (last question)--> Results
//!   ^                    |  ^                               |
//!   |                    +--+ record_answer / advance       |
//!   +-------------------------- reset ----------------------+
//! ```
//!
//! ## Usage
//!
//! ```
//! use flowdiag_core::{DiagnosticEngine, DiagnosticState, LeadInfo, Rating};
//!
//! let mut engine = DiagnosticEngine::new();
//! engine.submit_lead(LeadInfo::new("Jane", "jane@acme.com", None)).unwrap();
//! while engine.state() == DiagnosticState::Quiz {
//!     engine.answer_current(Rating::new(4).unwrap()).unwrap();
//!     engine.advance();
//! }
//! assert_eq!(engine.report().unwrap().total, 64);
//! ```

use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use super::answers::AnswerSet;
use super::lead::{LeadInfo, LeadPolicy};
use super::scoring::DiagnosticReport;
use crate::error::DiagnosticError;
use crate::events::Event;
use crate::questions::{self, Question, QuestionId, Rating};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DiagnosticState {
    /// Waiting for contact details.
    Lead,
    Quiz,
    /// Report computed. Only `reset` leaves this state.
    Results,
}

impl std::fmt::Display for DiagnosticState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            DiagnosticState::Lead => "lead",
            DiagnosticState::Quiz => "quiz",
            DiagnosticState::Results => "results",
        };
        f.write_str(name)
    }
}

/// Where the user is within the quiz.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QuizProgress {
    /// 1-based position of the current question.
    pub position: usize,
    pub total: usize,
    /// 0.0 .. 100.0, counting the current question as reached.
    pub percent: f64,
    pub question: Question,
    pub can_advance: bool,
    /// "Next Question", or "See Results" on the last question.
    pub advance_label: &'static str,
}

/// Core diagnostic engine. One value is one user session.
#[derive(Debug, Clone)]
pub struct DiagnosticEngine {
    session_id: String,
    policy: LeadPolicy,
    questions: &'static [Question],
    state: DiagnosticState,
    lead: Option<LeadInfo>,
    answers: AnswerSet,
    current_index: usize,
    report: Option<DiagnosticReport>,
}

impl DiagnosticEngine {
    /// Create an engine in the `Lead` state with the default lead policy.
    pub fn new() -> Self {
        Self::with_policy(LeadPolicy::default())
    }

    pub fn with_policy(policy: LeadPolicy) -> Self {
        Self {
            session_id: new_session_id(),
            policy,
            questions: questions::all_questions(),
            state: DiagnosticState::Lead,
            lead: None,
            answers: AnswerSet::new(),
            current_index: 0,
            report: None,
        }
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn session_id(&self) -> &str {
        &self.session_id
    }

    pub fn state(&self) -> DiagnosticState {
        self.state
    }

    pub fn policy(&self) -> &LeadPolicy {
        &self.policy
    }

    pub fn lead(&self) -> Option<&LeadInfo> {
        self.lead.as_ref()
    }

    pub fn answers(&self) -> &AnswerSet {
        &self.answers
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn question_count(&self) -> usize {
        self.questions.len()
    }

    /// The question being asked. `None` outside the `Quiz` state.
    pub fn current_question(&self) -> Option<&'static Question> {
        if self.state != DiagnosticState::Quiz {
            return None;
        }
        self.questions.get(self.current_index)
    }

    pub fn is_last_question(&self) -> bool {
        self.current_index + 1 >= self.questions.len()
    }

    /// True when the current question has an answer and `advance` would act.
    pub fn can_advance(&self) -> bool {
        self.current_question()
            .map(|q| self.answers.contains(q.id))
            .unwrap_or(false)
    }

    pub fn progress(&self) -> Option<QuizProgress> {
        let question = *self.current_question()?;
        let total = self.questions.len();
        let position = self.current_index + 1;
        Some(QuizProgress {
            position,
            total,
            percent: position as f64 / total as f64 * 100.0,
            question,
            can_advance: self.can_advance(),
            advance_label: if self.is_last_question() {
                "See Results"
            } else {
                "Next Question"
            },
        })
    }

    /// The report computed on entry to `Results`.
    pub fn report(&self) -> Option<&DiagnosticReport> {
        self.report.as_ref()
    }

    /// Build a full state snapshot event.
    pub fn snapshot(&self) -> Event {
        let progress_pct = match self.state {
            DiagnosticState::Lead => 0.0,
            DiagnosticState::Quiz => self.progress().map(|p| p.percent).unwrap_or(0.0),
            DiagnosticState::Results => 100.0,
        };
        Event::StateSnapshot {
            session_id: self.session_id.clone(),
            state: self.state,
            current_index: self.current_index,
            question_count: self.questions.len(),
            answered: self.answers.len(),
            progress_pct,
            at: Utc::now(),
        }
    }

    // ── Commands ─────────────────────────────────────────────────────

    /// Accept contact details and start the quiz.
    ///
    /// On failure nothing changes and the caller should re-prompt.
    pub fn submit_lead(&mut self, lead: LeadInfo) -> Result<Event, DiagnosticError> {
        self.require_state(DiagnosticState::Lead, "submit a lead")?;

        let lead = lead.validate(&self.policy).inspect_err(|e| {
            warn!(session = %self.session_id, error = %e, "lead submission refused");
        })?;

        let has_business = lead.business.is_some();
        self.lead = Some(lead);
        self.answers.clear();
        self.current_index = 0;
        self.report = None;
        self.state = DiagnosticState::Quiz;

        info!(session = %self.session_id, has_business, "lead captured, quiz started");
        Ok(Event::LeadCaptured {
            session_id: self.session_id.clone(),
            has_business,
            at: Utc::now(),
        })
    }

    /// Record an answer for any question in the bank. Does not advance.
    pub fn record_answer(
        &mut self,
        question_id: QuestionId,
        rating: Rating,
    ) -> Result<Event, DiagnosticError> {
        self.require_state(DiagnosticState::Quiz, "record an answer")?;

        let pillar = self
            .questions
            .iter()
            .find(|q| q.id == question_id)
            .map(|q| q.pillar)
            .ok_or(DiagnosticError::UnknownQuestion(question_id))?;

        let replaced = self.answers.record(question_id, rating);
        debug!(question_id, rating = rating.value(), ?replaced, "answer recorded");

        Ok(Event::AnswerRecorded {
            question_id,
            pillar,
            rating,
            replaced,
            at: Utc::now(),
        })
    }

    /// Record an answer for the question currently shown.
    pub fn answer_current(&mut self, rating: Rating) -> Result<Event, DiagnosticError> {
        let question = self
            .current_question()
            .ok_or(DiagnosticError::InvalidTransition {
                action: "record an answer",
                state: self.state,
            })?;
        self.record_answer(question.id, rating)
    }

    /// Move past the current question, or into `Results` from the last one.
    ///
    /// Returns `None` and changes nothing when the current question has no
    /// answer yet or the engine is not in the quiz.
    pub fn advance(&mut self) -> Option<Event> {
        if !self.can_advance() {
            debug!(state = %self.state, index = self.current_index, "advance ignored");
            return None;
        }

        if !self.is_last_question() {
            let from = self.current_index;
            self.current_index += 1;
            debug!(from, to = self.current_index, "advanced");
            return Some(Event::QuestionAdvanced {
                from_index: from,
                to_index: self.current_index,
                at: Utc::now(),
            });
        }

        let report = DiagnosticReport::compute(self.questions, &self.answers);
        let event = Event::DiagnosticCompleted {
            session_id: self.session_id.clone(),
            total: report.total,
            category: report.category.title.to_string(),
            lowest_pillar: report.lowest_pillar,
            at: Utc::now(),
        };
        info!(
            session = %self.session_id,
            total = report.total,
            category = report.category.title,
            lowest = %report.lowest_pillar,
            "diagnostic completed"
        );
        self.report = Some(report);
        self.state = DiagnosticState::Results;
        Some(event)
    }

    /// Discard lead, answers and position and return to `Lead`.
    pub fn reset(&mut self) -> Event {
        let from_state = self.state;
        self.session_id = new_session_id();
        self.state = DiagnosticState::Lead;
        self.lead = None;
        self.answers.clear();
        self.current_index = 0;
        self.report = None;
        info!(from = %from_state, session = %self.session_id, "session reset");
        Event::SessionReset {
            from_state,
            at: Utc::now(),
        }
    }

    // ── Internal ─────────────────────────────────────────────────────

    fn require_state(
        &self,
        expected: DiagnosticState,
        action: &'static str,
    ) -> Result<(), DiagnosticError> {
        if self.state == expected {
            Ok(())
        } else {
            warn!(state = %self.state, action, "transition refused");
            Err(DiagnosticError::InvalidTransition {
                action,
                state: self.state,
            })
        }
    }
}

impl Default for DiagnosticEngine {
    fn default() -> Self {
        Self::new()
    }
}

fn new_session_id() -> String {
    uuid::Uuid::new_v4().to_string()
}
