//! # FLOW Diagnostic Core Library
//!
//! This library provides the business logic for the FLOW Diagnostic, a
//! lead-capture self-assessment. Front ends (the `flowdiag` CLI, or any GUI)
//! are thin layers that feed user actions into a [`DiagnosticEngine`] and
//! render the [`Event`]s and [`DiagnosticReport`] it produces.
//!
//! ## Architecture
//!
//! - **Question Bank**: sixteen static statements, four per [`Pillar`]
//! - **Diagnostic Engine**: the `Lead -> Quiz -> Results` state machine
//! - **Scoring**: per-pillar tallies, lowest pillar, result category lookup
//! - **Storage**: TOML configuration for the booking link and lead policy
//!
//! ## Key Components
//!
//! - [`DiagnosticEngine`]: session state machine
//! - [`DiagnosticReport`]: everything the results view shows
//! - [`Config`]: application configuration management
//! - [`BookingLink`]: the call-to-action target

pub mod booking;
pub mod diagnostic;
pub mod error;
pub mod events;
pub mod questions;
pub mod storage;

pub use booking::BookingLink;
pub use diagnostic::{
    AnswerSet, DiagnosticEngine, DiagnosticReport, DiagnosticState, LeadInfo, LeadPolicy,
    PillarResult, PillarScores, QuizProgress, ResultCategory,
};
pub use error::{ConfigError, CoreError, DiagnosticError, LeadField};
pub use events::Event;
pub use questions::{all_questions, Pillar, Question, QuestionId, Rating};
pub use storage::Config;
