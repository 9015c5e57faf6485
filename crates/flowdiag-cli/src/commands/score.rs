use clap::Args;
use std::io::{self, IsTerminal};

use flowdiag_core::diagnostic::AnswerSet;
use flowdiag_core::{all_questions, Config, DiagnosticReport, Rating};

use super::booking_or_warn;
use crate::render;

#[derive(Args)]
#[command(group = clap::ArgGroup::new("input").required(true).args(["answers", "all"]))]
pub struct ScoreArgs {
    /// Comma-separated ratings in question order, e.g. "3,4,5,..."
    /// Fewer than 16 values leaves the rest unanswered.
    #[arg(long, value_delimiter = ',')]
    answers: Vec<i64>,
    /// Give every question the same rating
    #[arg(long)]
    all: Option<i64>,
    /// Print the report as JSON
    #[arg(long)]
    json: bool,
}

/// Map ratings onto the bank in order.
fn build_answers(values: &[i64]) -> Result<AnswerSet, Box<dyn std::error::Error>> {
    let questions = all_questions();
    if values.len() > questions.len() {
        return Err(format!(
            "got {} answers but there are only {} questions",
            values.len(),
            questions.len()
        )
        .into());
    }
    let mut answers = AnswerSet::new();
    for (q, value) in questions.iter().zip(values) {
        answers.record(q.id, Rating::new(*value)?);
    }
    Ok(answers)
}

pub fn run(args: ScoreArgs) -> Result<(), Box<dyn std::error::Error>> {
    let values = match args.all {
        Some(value) => vec![value; all_questions().len()],
        None => args.answers,
    };
    let answers = build_answers(&values)?;
    let report = DiagnosticReport::compute(all_questions(), &answers);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    let config = Config::load_or_default();
    let booking = booking_or_warn(&config.booking);
    render::init_color(&config.display, io::stdout().is_terminal());
    render::report(&mut io::stdout().lock(), &report, booking.as_ref(), &config.display)?;
    Ok(())
}
