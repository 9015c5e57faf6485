//! Interactive terminal session.
//!
//! Drives a [`DiagnosticEngine`] from line-oriented input. Generic over the
//! reader and writer so tests can script a whole session.

use std::io::{self, BufRead, Write};

use colored::Colorize;
use flowdiag_core::{DiagnosticEngine, DiagnosticReport, DiagnosticState, LeadInfo, Rating};
use tracing::debug;

use crate::render;

pub struct Session<'a, R, W> {
    engine: DiagnosticEngine,
    input: R,
    out: &'a mut W,
}

impl<'a, R: BufRead, W: Write> Session<'a, R, W> {
    pub fn new(engine: DiagnosticEngine, input: R, out: &'a mut W) -> Self {
        Self { engine, input, out }
    }

    /// Run from lead capture to results and return the report.
    pub fn run(mut self) -> io::Result<DiagnosticReport> {
        writeln!(self.out, "{}", "The FLOW Diagnostic".bold())?;
        writeln!(
            self.out,
            "Identify the primary constraint holding your business back."
        )?;

        self.capture_lead()?;
        while self.engine.state() == DiagnosticState::Quiz {
            self.ask_current()?;
        }

        self.engine
            .report()
            .cloned()
            .ok_or_else(|| io::Error::other("diagnostic ended without a report"))
    }

    fn capture_lead(&mut self) -> io::Result<()> {
        loop {
            writeln!(self.out)?;
            let name = self.prompt("Full Name: ")?;
            let email = self.prompt("Email Address: ")?;
            let business = self.prompt("Business Name (Optional): ")?;

            let lead = LeadInfo::new(name, email, Some(business));
            match self.engine.submit_lead(lead) {
                Ok(_) => return Ok(()),
                Err(e) => writeln!(self.out, "  ! {e}. Please try again.")?,
            }
        }
    }

    fn ask_current(&mut self) -> io::Result<()> {
        let Some(progress) = self.engine.progress() else {
            return Ok(());
        };
        render::question(&mut *self.out, &progress)?;

        loop {
            let prompt = format!("{} [1-5]: ", progress.advance_label);
            let line = self.prompt(&prompt)?;
            let rating = line
                .parse::<i64>()
                .map_err(|_| format!("'{line}' is not a number"))
                .and_then(|v| Rating::new(v).map_err(|e| e.to_string()));

            match rating {
                Ok(rating) => {
                    self.engine
                        .answer_current(rating)
                        .map_err(io::Error::other)?;
                    if self.engine.advance().is_some() {
                        return Ok(());
                    }
                    debug!("advance refused after answering");
                }
                Err(message) => writeln!(self.out, "  ! {message}")?,
            }
        }
    }

    /// Print a prompt and read one trimmed line. EOF is an error.
    fn prompt(&mut self, text: &str) -> io::Result<String> {
        write!(self.out, "{text}")?;
        self.out.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "input ended before the diagnostic finished",
            ));
        }
        Ok(line.trim().to_string())
    }
}
