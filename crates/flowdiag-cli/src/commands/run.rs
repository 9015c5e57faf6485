use std::io::{self, IsTerminal, Write};

use flowdiag_core::{Config, DiagnosticEngine};

use super::booking_or_warn;
use crate::render;
use crate::session::Session;

pub fn run(json: bool, open: bool) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load_or_default();
    let engine = DiagnosticEngine::with_policy(config.lead.clone());

    let stdin = io::stdin().lock();
    let report = if json {
        // Keep stdout for the JSON document.
        render::init_color(&config.display, io::stderr().is_terminal());
        let mut prompts = io::stderr().lock();
        Session::new(engine, stdin, &mut prompts).run()?
    } else {
        render::init_color(&config.display, io::stdout().is_terminal());
        let mut prompts = io::stdout().lock();
        Session::new(engine, stdin, &mut prompts).run()?
    };

    let booking = booking_or_warn(&config.booking);
    let mut out = io::stdout().lock();
    if json {
        writeln!(out, "{}", serde_json::to_string_pretty(&report)?)?;
    } else {
        render::report(&mut out, &report, booking.as_ref(), &config.display)?;
    }

    if open {
        if let Some(link) = &booking {
            link.open()?;
        }
    }
    Ok(())
}
