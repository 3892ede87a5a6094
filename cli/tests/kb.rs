//! # relchat CLI Knowledge Base Integration Tests
//!
//! File: cli/tests/kb.rs
//!
//! ## Overview
//!
//! Integration tests for the `relchat kb` command group (`export`, `check`).
//!

mod common;
use common::*;
use predicates::prelude::*;
use relchat::core::{content::ContentFile, error::ChatError};
use std::fs;

#[test]
fn test_kb_export_to_stdout() {
    let env = TestEnv::new();
    env.cmd()
        .args(["kb", "export"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("[company]")
                .and(predicate::str::contains("[knowledge.generalRenovation]"))
                .and(predicate::str::contains("leakRepair")),
        );
}

#[test]
fn test_kb_export_then_check() {
    let env = TestEnv::new();
    let exported = env.dir.path().join("exported.toml");

    env.cmd()
        .args(["kb", "export", "--output"])
        .arg(&exported)
        .assert()
        .success()
        .stdout(predicate::str::contains("Content written to"));
    assert!(fs::read_to_string(&exported).unwrap().contains("[knowledge.tiling]"));

    env.cmd()
        .args(["kb", "check"])
        .arg(&exported)
        .assert()
        .success()
        .stdout(
            predicate::str::contains("is valid")
                .and(predicate::str::contains("company:   custom"))
                .and(predicate::str::contains("knowledge: custom")),
        );
}

#[test]
fn test_kb_check_reports_missing_services_facet() {
    let env = TestEnv::new();
    let path = env.dir.path().join("broken.toml");
    let exported = ContentFile::from_chatbot(&Default::default())
        .to_toml()
        .unwrap();
    // Rename the painting fallback so the topic has no `services` facet.
    let broken = exported.replacen(
        "services = \"We provide professional painting",
        "general = \"We provide professional painting",
        1,
    );
    assert_ne!(broken, exported);
    assert_eq!(
        ContentFile::parse(&broken),
        Err(ChatError::Knowledge {
            topic: "painting".into(),
            reason: "missing 'services' facet".into(),
        })
    );
    fs::write(&path, broken).unwrap();

    env.cmd()
        .args(["kb", "check"])
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "Invalid knowledge base topic 'painting': missing 'services' facet",
        ));
}

#[test]
fn test_kb_check_unknown_field() {
    let env = TestEnv::new();
    let path = env.dir.path().join("typo.toml");
    fs::write(&path, "[compnay]\nname = \"x\"\n").unwrap();

    env.cmd()
        .args(["kb", "check"])
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid content file"));
}
