mod bank;
mod pillar;
mod rating;

pub use bank::{
    all_questions, question, questions_for, Question, QuestionId, MAX_PILLAR_SCORE,
    QUESTIONS_PER_PILLAR,
};
pub use pillar::{Pillar, PillarStyle};
pub use rating::Rating;
