use clap::Args;
use std::io;

use flowdiag_core::questions::{all_questions, questions_for, Pillar, Question};

use crate::render;

#[derive(Args)]
pub struct QuestionsArgs {
    /// Only show one pillar (focus, leadership, opportunity, worth)
    #[arg(long)]
    pillar: Option<Pillar>,
    /// Print as JSON
    #[arg(long)]
    json: bool,
}

pub fn run(args: QuestionsArgs) -> Result<(), Box<dyn std::error::Error>> {
    let selected: Vec<&Question> = match args.pillar {
        Some(pillar) => questions_for(pillar).collect(),
        None => all_questions().iter().collect(),
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&selected)?);
    } else {
        render::question_list(&mut io::stdout().lock(), selected)?;
    }
    Ok(())
}
