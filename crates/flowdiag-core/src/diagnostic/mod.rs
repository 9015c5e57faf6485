mod answers;
mod engine;
mod lead;
mod scoring;

pub use answers::AnswerSet;
pub use engine::{DiagnosticEngine, DiagnosticState, QuizProgress};
pub use lead::{is_email_shaped, LeadInfo, LeadPolicy};
pub use scoring::{
    DiagnosticReport, PillarResult, PillarScores, ResultCategory, CONSTRAINT_MESSAGE,
    RESULT_BANDS,
};
