//! Basic CLI E2E tests.
//!
//! Tests run the built `lumora-quiz` binary and check its output.

use std::io::Write;
use std::process::{Command, Stdio};

/// Run the CLI and return (stdout, stderr, exit code).
fn run_cli(args: &[&str], stdin: &str) -> (String, String, i32) {
    let mut child = Command::new(env!("CARGO_BIN_EXE_lumora-quiz"))
        .args(args)
        .env("NO_COLOR", "1")
        .env_remove("LUMORA_CATALOG")
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
    let code = output.status.code().unwrap_or(-1);

    (stdout, stderr, code)
}

#[test]
fn test_questions_lists_every_prompt() {
    let (stdout, _, code) = run_cli(&["questions"], "");
    assert_eq!(code, 0);
    assert!(stdout.contains("What's your biggest sleep challenge?"));
    assert!(stdout.contains("Which feature excites you most?"));
}

#[test]
fn test_products_lists_prices() {
    let (stdout, _, code) = run_cli(&["products"], "");
    assert_eq!(code, 0);
    for price in ["$89", "$129", "$159", "$299"] {
        assert!(stdout.contains(price), "missing {}", price);
    }
}

#[test]
fn test_recommend_tie_defaults_to_first_declared() {
    let (stdout, _, code) = run_cli(
        &["recommend", "--answers", "temperature,traveler,budget,portable", "--explain"],
        "",
    );
    assert_eq!(code, 0);
    assert!(stdout.contains("Lumora Essence"));

    let core = stdout
        .find("  core      10  <- recommended")
        .expect("core ranked with the winner marker");
    let travel = stdout.find("  travel    10\n").expect("travel tied at 10");
    assert!(core < travel, "core must be listed before travel:\n{}", stdout);
    assert!(!stdout.contains("travel    10  <- recommended"));
}

#[test]
fn test_products_single_id() {
    let (stdout, _, code) = run_cli(&["products", "max"], "");
    assert_eq!(code, 0);
    assert!(stdout.contains("Lumora Max"));
    assert!(stdout.contains("$299"));
    assert!(!stdout.contains("$89"));

    let (_, stderr, code) = run_cli(&["products", "deluxe"], "");
    assert_ne!(code, 0);
    assert!(stderr.contains("Unknown product id: deluxe"));
}

#[test]
fn test_recommend_tie_break_last() {
    let (stdout, _, code) = run_cli(
        &[
            "--tie-break",
            "last",
            "recommend",
            "--answers",
            "temperature,traveler,budget,portable",
        ],
        "",
    );
    assert_eq!(code, 0);
    assert!(stdout.contains("Lumora Voyage"));
}

#[test]
fn test_recommend_json() {
    let (stdout, _, code) = run_cli(
        &["recommend", "--answers", "light,simple,luxury,simple", "--json"],
        "",
    );
    assert_eq!(code, 0);
    let parsed: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(parsed["product"], "core");
    assert_eq!(parsed["scores"]["core"], 11);
    assert_eq!(parsed["scores"]["max"], 8);
}

#[test]
fn test_recommend_with_shipped_catalog() {
    let catalog = concat!(env!("CARGO_MANIFEST_DIR"), "/../../data/lumora.json");
    let (stdout, _, code) = run_cli(
        &["--catalog", catalog, "recommend", "--answers", "noise,tech,luxury,smart"],
        "",
    );
    assert_eq!(code, 0);
    assert!(stdout.contains("Lumora Max"));
}

#[test]
fn test_recommend_rejects_unknown_answer() {
    let (_, stderr, code) = run_cli(&["recommend", "--answers", "noise,tech,cheap,smart"], "");
    assert_ne!(code, 0);
    assert!(stderr.contains("Answer #3 (cheap)"));
}

#[test]
fn test_take_interactive() {
    let (stdout, _, code) = run_cli(&["take"], "2\n2\n2\n2\nq\n");
    assert_eq!(code, 0);
    assert!(stdout.contains("Question 1 of 4 (25%)"));
    assert!(stdout.contains("Perfect Match Found!"));
    assert!(stdout.contains("Lumora Pure"));
}
