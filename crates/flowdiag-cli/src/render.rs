//! Plain-text views for the terminal.

use std::io::{self, Write};

use colored::Colorize;
use flowdiag_core::diagnostic::CONSTRAINT_MESSAGE;
use flowdiag_core::storage::DisplayConfig;
use flowdiag_core::{BookingLink, DiagnosticReport, Question, QuizProgress, Rating};

const BAR_WIDTH: usize = 20;

/// Whether output to a stream should be coloured.
pub fn color_enabled(display: &DisplayConfig, is_terminal: bool, term: Option<&str>) -> bool {
    display.color && is_terminal && term != Some("dumb")
}

/// Switch colour on or off for everything rendered after this call.
///
/// `is_terminal` must describe the stream the caller is about to write to.
pub fn init_color(display: &DisplayConfig, is_terminal: bool) {
    let term = std::env::var("TERM").ok();
    colored::control::set_override(color_enabled(display, is_terminal, term.as_deref()));
}

/// `[#####---------------]` for a 0..100 percentage.
pub fn progress_bar(percent: f64, width: usize) -> String {
    let filled = ((percent.clamp(0.0, 100.0) / 100.0) * width as f64).round() as usize;
    format!("[{}{}]", "#".repeat(filled), "-".repeat(width - filled))
}

pub fn question(out: &mut impl Write, progress: &QuizProgress) -> io::Result<()> {
    let pillar = progress.question.pillar;
    writeln!(out)?;
    writeln!(
        out,
        "Section: {}    Question {} of {}",
        pillar.label().color(pillar.style().terminal),
        progress.position,
        progress.total
    )?;
    writeln!(out, "{}", progress_bar(progress.percent, BAR_WIDTH).dimmed())?;
    writeln!(out)?;
    writeln!(out, "{}", progress.question.text.bold())?;
    for rating in Rating::ALL {
        writeln!(out, "  {}) {}", rating.value(), rating.label())?;
    }
    Ok(())
}

pub fn report(
    out: &mut impl Write,
    report: &DiagnosticReport,
    booking: Option<&BookingLink>,
    display: &DisplayConfig,
) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "{}", "YOUR RESULTS".dimmed())?;
    writeln!(out, "{}", report.category.title.bold())?;
    if display.show_descriptions {
        writeln!(out, "{}", report.category.description)?;
    }
    writeln!(out)?;

    for row in &report.pillars {
        let name = format!("{} {:<12}", row.pillar.style().glyph, row.pillar.label());
        let line = format!(
            "{name} {:>2} / {}  {}",
            row.score,
            row.max,
            progress_bar(row.percent, BAR_WIDTH)
        );
        if row.is_lowest {
            // Amber highlight for the constraint pillar.
            writeln!(out, "{}", line.bright_yellow().bold())?;
        } else {
            writeln!(out, "{}", line.color(row.pillar.style().terminal))?;
        }
    }

    writeln!(out)?;
    writeln!(out, "Total: {} / {}", report.total, report.max_total)?;
    if !report.is_complete() {
        let note = format!(
            "({} of {} questions answered; unanswered count as 0)",
            report.answered, report.question_count
        );
        writeln!(out, "{}", note.dimmed())?;
    }
    writeln!(out)?;
    writeln!(out, "{}", report.constraint_headline().bold())?;
    writeln!(out, "{CONSTRAINT_MESSAGE}")?;

    if let Some(link) = booking {
        writeln!(out)?;
        booking_link(out, link)?;
    }
    Ok(())
}

pub fn booking_link(out: &mut impl Write, link: &BookingLink) -> io::Result<()> {
    writeln!(out, "{}: {}", link.label.bold(), link.url)?;
    writeln!(out, "{}", link.blurb.dimmed())
}

pub fn question_list<'a>(
    out: &mut impl Write,
    questions: impl IntoIterator<Item = &'a Question>,
) -> io::Result<()> {
    for q in questions {
        writeln!(out, "{:>2}. [{}] {}", q.id, q.pillar, q.text)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use flowdiag_core::diagnostic::AnswerSet;
    use flowdiag_core::all_questions;

    fn plain() -> DisplayConfig {
        colored::control::set_override(false);
        DisplayConfig {
            color: false,
            show_descriptions: true,
        }
    }

    #[test]
    fn progress_bar_fills_proportionally() {
        assert_eq!(progress_bar(0.0, 4), "[----]");
        assert_eq!(progress_bar(50.0, 4), "[##--]");
        assert_eq!(progress_bar(100.0, 4), "[####]");
        assert_eq!(progress_bar(250.0, 4), "[####]");
    }

    #[test]
    fn color_follows_config_and_target_stream() {
        let on = DisplayConfig {
            color: true,
            show_descriptions: true,
        };
        let off = DisplayConfig {
            color: false,
            ..on.clone()
        };
        assert!(color_enabled(&on, true, Some("xterm-256color")));
        assert!(color_enabled(&on, true, None));
        assert!(!color_enabled(&on, false, Some("xterm-256color")));
        assert!(!color_enabled(&on, true, Some("dumb")));
        assert!(!color_enabled(&off, true, Some("xterm-256color")));
    }

    #[test]
    fn report_view_lists_pillars_and_constraint() {
        let display = plain();
        let answers: AnswerSet = all_questions()
            .iter()
            .map(|q| (q.id, Rating::new(3).unwrap()))
            .collect();
        let rep = DiagnosticReport::compute(all_questions(), &answers);
        let mut buf = Vec::new();
        report(&mut buf, &rep, None, &display).unwrap();
        let text = String::from_utf8(buf).unwrap();

        assert!(text.contains("Pockets of Chaos"));
        assert!(text.contains("Focus"));
        assert!(text.contains("12 / 20"));
        assert!(text.contains("Total: 48 / 80"));
        assert!(text.contains("Your Biggest Constraint: Focus"));
        assert!(!text.contains("questions answered"));
        assert!(!text.contains('\x1b'));
    }

    #[test]
    fn report_view_notes_partial_answers() {
        let display = plain();
        let answers: AnswerSet = [(1, Rating::new(4).unwrap())].into_iter().collect();
        let rep = DiagnosticReport::compute(all_questions(), &answers);
        let mut buf = Vec::new();
        report(&mut buf, &rep, None, &display).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(text.contains("1 of 16 questions answered"));
    }

    #[test]
    fn report_view_hides_descriptions_when_disabled() {
        let display = DisplayConfig {
            show_descriptions: false,
            ..plain()
        };
        let answers: AnswerSet = all_questions()
            .iter()
            .map(|q| (q.id, Rating::new(5).unwrap()))
            .collect();
        let rep = DiagnosticReport::compute(all_questions(), &answers);
        let mut buf = Vec::new();
        report(&mut buf, &rep, None, &display).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(text.contains("In FLOW"));
        assert!(!text.contains(rep.category.description));
    }
}
