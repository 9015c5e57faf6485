//! Basic CLI E2E tests.
//!
//! Tests invoke the built binary with HOME pointed at a temp directory so
//! config writes never touch the real user config.

use std::io::Write;
use std::process::{Command, Stdio};

/// Run a CLI command and return (exit code, stdout, stderr).
fn run_cli(home: &tempfile::TempDir, args: &[&str], stdin: &str) -> (i32, String, String) {
    let mut child = Command::new(env!("CARGO_BIN_EXE_flowdiag"))
        .args(args)
        .env("HOME", home.path())
        .env_remove("FLOW_DIAGNOSTIC_ENV")
        .env_remove("RUST_LOG")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("Failed to execute CLI command");

    child
        .stdin
        .take()
        .expect("stdin is piped")
        .write_all(stdin.as_bytes())
        .expect("Failed to write stdin");

    let output = child.wait_with_output().expect("Failed to wait for CLI");
    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    (output.status.code().unwrap_or(-1), stdout, stderr)
}

fn home() -> tempfile::TempDir {
    tempfile::tempdir().expect("Failed to create temp HOME")
}

fn session_input(name: &str, email: &str, rating: u8) -> String {
    let mut input = format!("{name}\n{email}\n\n");
    for _ in 0..16 {
        input.push_str(&format!("{rating}\n"));
    }
    input
}

#[test]
fn test_questions_list() {
    let home = home();
    let (code, stdout, _) = run_cli(&home, &["questions"], "");
    assert_eq!(code, 0, "questions failed");
    assert_eq!(stdout.lines().count(), 16);
    assert!(stdout.contains("[Focus]"));
}

#[test]
fn test_questions_json_filtered() {
    let home = home();
    let (code, stdout, _) = run_cli(&home, &["questions", "--pillar", "worth", "--json"], "");
    assert_eq!(code, 0, "questions --json failed");
    let parsed: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    let items = parsed.as_array().unwrap();
    assert_eq!(items.len(), 4);
    assert!(items.iter().all(|q| q["pillar"] == "Worth"));
}

#[test]
fn test_score_all_threes_json() {
    let home = home();
    let (code, stdout, _) = run_cli(&home, &["score", "--all", "3", "--json"], "");
    assert_eq!(code, 0, "score failed");
    let parsed: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(parsed["total"], 48);
    assert_eq!(parsed["category"]["title"], "Pockets of Chaos");
    assert_eq!(parsed["lowest_pillar"], "Focus");
}

#[test]
fn test_score_text_output() {
    let home = home();
    let (code, stdout, _) = run_cli(&home, &["score", "--all", "5"], "");
    assert_eq!(code, 0, "score failed");
    assert!(stdout.contains("In FLOW"));
    assert!(stdout.contains("Total: 80 / 80"));
    assert!(stdout.contains("Book Your FLOW Session"));
}

#[test]
fn test_score_rejects_out_of_range() {
    let home = home();
    let (code, _, stderr) = run_cli(&home, &["score", "--answers", "3,7"], "");
    assert_eq!(code, 1);
    assert!(stderr.contains("error: Rating 7 is outside the 1-5 scale"));
}

#[test]
fn test_score_requires_input() {
    let home = home();
    let (code, _, _) = run_cli(&home, &["score"], "");
    assert_ne!(code, 0);
}

#[test]
fn test_run_interactive_session() {
    let home = home();
    let input = session_input("Jane Doe", "jane@acme.com", 1);
    let (code, stdout, _) = run_cli(&home, &["run"], &input);
    assert_eq!(code, 0, "run failed");
    assert!(stdout.contains("Question 16 of 16"));
    assert!(stdout.contains("Survival Mode"));
    assert!(stdout.contains("Your Biggest Constraint: Focus"));
}

#[test]
fn test_run_json_keeps_stdout_clean() {
    let home = home();
    let input = session_input("Jane Doe", "jane@acme.com", 4);
    let (code, stdout, stderr) = run_cli(&home, &["run", "--json"], &input);
    assert_eq!(code, 0, "run --json failed");
    let parsed: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(parsed["total"], 64);
    assert_eq!(parsed["category"]["title"], "Pockets of Chaos");
    assert!(stderr.contains("Full Name"));
}

#[test]
fn test_run_fails_on_truncated_input() {
    let home = home();
    let (code, _, stderr) = run_cli(&home, &["run"], "Jane\njane@acme.com\n\n3\n");
    assert_eq!(code, 1);
    assert!(stderr.contains("input ended before the diagnostic finished"));
}

#[test]
fn test_run_with_strict_email() {
    let home = home();
    let (code, _, _) = run_cli(&home, &["config", "set", "lead.validate_email", "true"], "");
    assert_eq!(code, 0, "config set failed");

    let mut input = String::from("Jane\nnot-an-email\n\n");
    input.push_str(&session_input("Jane", "jane@acme.com", 3));
    let (code, stdout, _) = run_cli(&home, &["run"], &input);
    assert_eq!(code, 0, "run failed");
    assert!(stdout.contains("Invalid email address: not-an-email"));
    assert!(stdout.contains("Pockets of Chaos"));
}

fn write_config(home: &tempfile::TempDir, body: &str) {
    let dir = home.path().join(".config/flow-diagnostic");
    std::fs::create_dir_all(&dir).expect("Failed to create config dir");
    std::fs::write(dir.join("config.toml"), body).expect("Failed to write config");
}

#[test]
fn test_config_set_rejects_non_web_booking_url() {
    let home = home();
    let (code, stdout, stderr) = run_cli(
        &home,
        &["config", "set", "booking.url", "mailto:book@acme.com"],
        "",
    );
    assert_eq!(code, 1);
    assert!(!stdout.contains("ok"));
    assert!(stderr.contains("unsupported scheme 'mailto'"));

    let (_, stdout, _) = run_cli(&home, &["config", "get", "booking.url"], "");
    assert_eq!(stdout.trim(), "https://calendly.com/your-link");
}

#[test]
fn test_run_survives_unusable_booking_link() {
    let home = home();
    write_config(&home, "[booking]\nurl = \"mailto:book@acme.com\"\n");

    let input = session_input("Jane Doe", "jane@acme.com", 2);
    let (code, stdout, stderr) = run_cli(&home, &["run"], &input);
    assert_eq!(code, 0, "run failed: {stderr}");
    assert!(stdout.contains("Full Name"));
    assert!(stdout.contains("Survival Mode"));
    assert!(!stdout.contains("Book Your FLOW Session"));
    assert!(stderr.contains("booking link unavailable"));
}

#[test]
fn test_score_warns_about_unusable_booking_link() {
    let home = home();
    write_config(&home, "[booking]\nurl = \"ftp://acme.com/book\"\n");

    let (code, stdout, stderr) = run_cli(&home, &["score", "--all", "3"], "");
    assert_eq!(code, 0, "score failed: {stderr}");
    assert!(stdout.contains("Pockets of Chaos"));
    assert!(!stdout.contains("Book Your FLOW Session"));
    assert!(stderr.contains("booking link unavailable"));
}

#[test]
fn test_piped_output_has_no_colour() {
    let home = home();
    let (code, stdout, _) = run_cli(&home, &["score", "--all", "4"], "");
    assert_eq!(code, 0, "score failed");
    assert!(!stdout.contains('\x1b'));
}

#[test]
fn test_book_print_only() {
    let home = home();
    let (code, stdout, _) = run_cli(&home, &["book", "--print-only"], "");
    assert_eq!(code, 0, "book failed");
    assert!(stdout.contains("https://calendly.com/your-link"));
}

#[test]
fn test_config_get() {
    let home = home();
    let (code, stdout, _) = run_cli(&home, &["config", "get", "booking.label"], "");
    assert_eq!(code, 0, "config get failed");
    assert_eq!(stdout.trim(), "Book Your FLOW Session");
}

#[test]
fn test_config_set_then_get() {
    let home = home();
    let (code, _, _) = run_cli(
        &home,
        &["config", "set", "booking.url", "https://example.com/flow"],
        "",
    );
    assert_eq!(code, 0, "config set failed");
    let (_, stdout, _) = run_cli(&home, &["config", "get", "booking.url"], "");
    assert_eq!(stdout.trim(), "https://example.com/flow");
    assert!(home
        .path()
        .join(".config/flow-diagnostic/config.toml")
        .exists());
}

#[test]
fn test_config_unknown_key() {
    let home = home();
    let (code, _, stderr) = run_cli(&home, &["config", "get", "booking.nope"], "");
    assert_eq!(code, 1);
    assert!(stderr.contains("unknown key: booking.nope"));
}

#[test]
fn test_config_list() {
    let home = home();
    let (code, stdout, _) = run_cli(&home, &["config", "list"], "");
    assert_eq!(code, 0, "config list failed");
    let parsed: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(parsed["lead"]["validate_email"], false);
}

#[test]
fn test_completions() {
    let home = home();
    let (code, stdout, _) = run_cli(&home, &["completions", "bash"], "");
    assert_eq!(code, 0, "completions failed");
    assert!(stdout.contains("flowdiag"));
}
