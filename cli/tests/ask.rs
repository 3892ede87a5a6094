//! # relchat CLI Ask Integration Tests
//!
//! File: cli/tests/ask.rs
//!
//! ## Overview
//!
//! Integration tests for `relchat ask`: answers on stdout, `--explain`
//! output, the input-length guard and content files.
//!

mod common;
use common::*;
use predicates::prelude::*;

#[test]
fn test_ask_prints_multi_line_answer() {
    let env = TestEnv::new();
    env.cmd()
        .args(["ask", "What", "are", "your", "opening", "hours?"])
        .assert()
        .success()
        .stdout(
            "Our office hours are:\n• Monday-Friday: 9:00 AM - 6:00 PM\n• Saturday: 9:00 AM - 2:00 PM\n• Sunday & Public Holidays: Closed\n",
        );
}

#[test]
fn test_ask_explain_shows_intent_and_resolution() {
    let env = TestEnv::new();
    env.cmd()
        .args(["ask", "--explain", "do you fix leaking pipes"])
        .assert()
        .success()
        .stdout(
            "intent: plumbing\nresolution: refinement #2\nYes, we provide pipe repairs, leak detection, and replacement.\n",
        );
}

#[test]
fn test_ask_explain_global_default() {
    let env = TestEnv::new();
    env.cmd()
        .args(["ask", "--explain", "xyzzy zzz nonsense"])
        .assert()
        .success()
        .stdout(
            predicate::str::starts_with("intent: fallback\nresolution: global default\n")
                .and(predicate::str::contains("📞 +6585864098"))
                .and(predicate::str::contains("📧 sgsaconstruction@gmail.com")),
        );
}

/// Words past `max_input_chars` are dropped before classification.
#[test]
fn test_ask_applies_input_limit() {
    let env = TestEnv::with_config("[chat]\nmax_input_chars = 5\n");
    env.cmd()
        .args(["ask", "--explain", "xyzzy what are your hours"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("intent: fallback\n"));
}

#[test]
fn test_ask_uses_content_file() {
    let env = TestEnv::with_content(
        r#"
[company]
name = "Acme Renovations"
services = ["Painting", "Tiling"]
about = "Acme renovates homes."

[company.office_hours]
monday = "8:00 AM - 5:00 PM"
tuesday = "8:00 AM - 5:00 PM"
wednesday = "8:00 AM - 5:00 PM"
thursday = "8:00 AM - 5:00 PM"
friday = "8:00 AM - 5:00 PM"
saturday = "Closed"
sunday = "Closed"
public_holidays = "Closed"

[company.contact]
phone = "+6511112222"
site_manager_phone = "+6533334444"
emails = ["hello@acme.test"]
address = "1 Test Street"

[company.stats]
experience = "5 years"
projects_completed = "40"
client_satisfaction = "95%"
"#,
    );

    env.cmd()
        .args(["ask", "what number should I call?"])
        .assert()
        .success()
        .stdout("You can reach us at:\n• Main: +6511112222\n• Site Manager: +6533334444\n");

    env.cmd()
        .args(["ask", "what services do you offer"])
        .assert()
        .success()
        .stdout("We offer:\n• Painting\n• Tiling\n\nLearn more on our Services page!\n");

    // Knowledge base was not overridden.
    env.cmd()
        .args(["ask", "do you do grouting"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("We provide tile laying and surface works"));
}

#[test]
fn test_ask_rejects_invalid_content_file() {
    let env = TestEnv::with_content("[knowledge.plumbing]\nservices = \"Pipes.\"\n");
    env.cmd()
        .args(["ask", "hello"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid knowledge base topic"));
}
