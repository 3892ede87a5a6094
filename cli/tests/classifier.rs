//! # relchat Response Engine Integration Tests
//!
//! File: cli/tests/classifier.rs
//!
//! ## Overview
//!
//! Library-level tests for `relchat::chatbot`: decision order, topic and
//! global fallbacks, totality over odd input, and answering from content
//! other than the built-in site content.
//!

use relchat::chatbot::{
    knowledge::Facets, normalize, Chatbot, CompanyProfile, Intent, KnowledgeBase, Resolution,
    Topic,
};
use std::collections::BTreeMap;

fn bot() -> Chatbot {
    Chatbot::default()
}

#[test]
fn test_monday_hours() {
    assert_eq!(
        bot().respond("Are you open on Monday?"),
        "We're open on Monday from 9:00 AM - 6:00 PM. How else can we help?"
    );
}

#[test]
fn test_sunday_hours_interpolates_profile() {
    assert_eq!(
        bot().respond("what are your sunday hours"),
        "We're closed on Sunday. For urgent matters, please call our emergency line."
    );
}

#[test]
fn test_email_wins_over_address() {
    let result = bot().classify("what is your email address");
    assert_eq!(result.intent, Intent::Email);
    assert!(result.response.starts_with("You can email us at:\n• "));
}

#[test]
fn test_same_input_same_answer() {
    let first = bot().classify("Do you provide a warranty?");
    for _ in 0..3 {
        assert_eq!(bot().classify("Do you provide a warranty?"), first);
    }
}

#[test]
fn test_site_manager_without_number_falls_back_to_main_line() {
    let result = bot().classify("can I call the site manager");
    assert_eq!(result.intent, Intent::Contact);
    assert_eq!(result.resolution, Resolution::Refinement(0));
    assert!(result.response.contains("+6585864098"));
}

#[test]
fn test_refinement_beats_topic_fallback() {
    let bot = bot();
    let result = bot.classify("how many days does waterproofing take");
    assert_eq!(result.intent, Intent::Waterproofing);
    assert_eq!(
        result.response,
        bot.knowledge().answer(Topic::Waterproofing, "duration")
    );
}

#[test]
fn test_topic_fallback_is_services_text() {
    let bot = bot();
    let result = bot.classify("tell me about plumbing");
    assert_eq!(result.intent, Intent::Plumbing);
    assert_eq!(result.resolution, Resolution::TopicDefault);
    assert_eq!(result.response, bot.knowledge().services(Topic::Plumbing));
}

/// General questions placed earlier in the list win over topic words.
#[test]
fn test_general_rule_precedes_topic_rule() {
    let bot = bot();
    let result = bot.classify("how long does waterproofing take");
    assert_eq!(result.intent, Intent::Duration);
    assert_eq!(
        result.response,
        bot.knowledge().answer(Topic::GeneralRenovation, "duration")
    );
}

#[test]
fn test_case_and_surrounding_whitespace_are_ignored() {
    let bot = bot();
    let plain = bot.respond("do you do tiling");
    assert_eq!(bot.respond("   DO YOU DO TILING \t\n"), plain);
    assert_eq!(normalize(&normalize("  MiXeD  ")), normalize("  MiXeD  "));
}

#[test]
fn test_every_input_gets_a_non_empty_answer() {
    let bot = bot();
    let long = "z".repeat(100_000);
    let inputs = ["", "   ", "\u{0}\u{7}\u{1b}[0m", "🙂🙂🙂", "????", long.as_str()];
    for input in inputs {
        let result = bot.classify(input);
        assert!(!result.response.is_empty(), "empty answer for {input:?}");
    }
    assert_eq!(bot.classify("").intent, Intent::Fallback);
    assert_eq!(bot.classify(&long).resolution, Resolution::GlobalDefault);
}

#[test]
fn test_chatbot_shared_across_threads() {
    let bot = bot();
    let expected = bot.respond("what is your email");
    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|_| scope.spawn(|| bot.respond("what is your email")))
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), expected);
        }
    });
}

#[test]
fn test_answers_from_alternate_content() {
    let mut profile = CompanyProfile::default();
    profile.name = "Acme Renovations".into();
    profile.office_hours.sunday = "By Appointment".into();

    let topics: BTreeMap<Topic, Facets> = Topic::ALL
        .into_iter()
        .map(|topic| {
            let facets = Facets::from([(
                "services".to_string(),
                format!("Acme does {topic}."),
            )]);
            (topic, facets)
        })
        .collect();
    let knowledge = KnowledgeBase::from_topics(topics).unwrap();
    let bot = Chatbot::new(knowledge, profile);

    assert_eq!(
        bot.respond("open on sunday?"),
        "We're by appointment on Sunday. For urgent matters, please call our emergency line."
    );
    // Facets absent from this content fall back to the topic's services text.
    assert_eq!(bot.respond("do you fix leaking pipes"), "Acme does plumbing.");
    assert!(bot.respond("qwerty").contains("basic information about Acme Renovations"));
}
