//! # Reply Templates
//!
//! File: cli/src/chatbot/replies.rs
//!
//! ## Overview
//!
//! Replies that are assembled from the [`CompanyProfile`] instead of being a
//! single knowledge-base facet: office hours, phone and email blocks, the
//! service list, the "about" summary and the global fallback.
//!
//! Every function here is pure and knows nothing about keyword matching; the
//! rule table in `rules.rs` decides *which* template applies, this module only
//! decides *what it says*.
//!
use super::knowledge::{KnowledgeBase, Topic};
use super::profile::{CompanyProfile, Weekday};

/// Bullet used for every multi-line list.
pub const BULLET: &str = "• ";
const PHONE_MARK: &str = "📞";
const EMAIL_MARK: &str = "📧";

/// Replies rendered from company data at answer time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Template {
    /// "We're open on <Day> from <hours>."
    OpenOn(Weekday),
    /// Sunday gets its own wording since it is normally closed.
    SundayHours,
    WeekendHours,
    WeeklyHours,
    SiteManagerContact,
    PhoneNumbers,
    EmailAddresses,
    Address,
    FreeInspection,
    ServiceList,
    About,
    ProjectInquiry,
    Fallback,
}

/// # Render Template (`render`)
///
/// Produces the final text for `template`. The knowledge base is only read by
/// [`Template::FreeInspection`], which prefixes the contact block with the
/// approved inspection answer.
pub fn render(template: Template, knowledge: &KnowledgeBase, profile: &CompanyProfile) -> String {
    match template {
        Template::OpenOn(day) => open_on(profile, day),
        Template::SundayHours => sunday_hours(profile),
        Template::WeekendHours => weekend_hours(profile),
        Template::WeeklyHours => weekly_hours(profile),
        Template::SiteManagerContact => site_manager_contact(profile),
        Template::PhoneNumbers => phone_numbers(profile),
        Template::EmailAddresses => email_addresses(profile),
        Template::Address => format!("Our address is:\n{}", profile.contact.address),
        Template::FreeInspection => format!(
            "{} For details, please contact us:\n{}",
            knowledge.answer(Topic::GeneralRenovation, "inspection"),
            contact_block(profile)
        ),
        Template::ServiceList => service_list(profile),
        Template::About => about(profile),
        Template::ProjectInquiry => format!(
            "For project inquiries and quotes, please contact our team:\n{}\n\nOur team will be happy to discuss your construction needs!",
            contact_block(profile)
        ),
        Template::Fallback => fallback(profile),
    }
}

/// Joins `items` into lines starting with [`BULLET`].
pub fn bullet_list<S: AsRef<str>>(items: &[S]) -> String {
    items
        .iter()
        .map(|item| format!("{BULLET}{}", item.as_ref()))
        .collect::<Vec<_>>()
        .join("\n")
}

/// The two-line phone/email block used by inspection, inquiry and fallback replies.
pub fn contact_block(profile: &CompanyProfile) -> String {
    format!(
        "{PHONE_MARK} {}\n{EMAIL_MARK} {}",
        profile.contact.phone,
        profile.primary_email()
    )
}

pub fn open_on(profile: &CompanyProfile, day: Weekday) -> String {
    format!(
        "We're open on {} from {}. How else can we help?",
        day.name(),
        profile.office_hours.on(day)
    )
}

pub fn sunday_hours(profile: &CompanyProfile) -> String {
    format!(
        "We're {} on Sunday. For urgent matters, please call our emergency line.",
        profile.office_hours.sunday.to_lowercase()
    )
}

pub fn weekend_hours(profile: &CompanyProfile) -> String {
    format!(
        "Weekend hours: Saturday {}, Sunday {}. How can we assist?",
        profile.office_hours.saturday, profile.office_hours.sunday
    )
}

pub fn weekly_hours(profile: &CompanyProfile) -> String {
    let hours = &profile.office_hours;
    format!(
        "Our office hours are:\n{}",
        bullet_list(&[
            format!("Monday-Friday: {}", hours.monday),
            format!("Saturday: {}", hours.saturday),
            format!("Sunday & Public Holidays: {}", hours.sunday),
        ])
    )
}

pub fn site_manager_contact(profile: &CompanyProfile) -> String {
    match &profile.contact.site_manager_phone {
        Some(phone) => format!(
            "Our Site Manager's contact: {phone}. You can reach them for project-specific inquiries."
        ),
        None => format!("Contact us at: {}.", profile.contact.phone),
    }
}

pub fn phone_numbers(profile: &CompanyProfile) -> String {
    let lines = match &profile.contact.site_manager_phone {
        Some(site_manager) => bullet_list(&[
            format!("Main: {}", profile.contact.phone),
            format!("Site Manager: {site_manager}"),
        ]),
        None => bullet_list(&[&profile.contact.phone]),
    };
    format!("You can reach us at:\n{lines}")
}

pub fn email_addresses(profile: &CompanyProfile) -> String {
    format!("You can email us at:\n{}", bullet_list(&profile.contact.emails))
}

pub fn service_list(profile: &CompanyProfile) -> String {
    format!(
        "We offer:\n{}\n\nLearn more on our Services page!",
        bullet_list(&profile.services)
    )
}

pub fn about(profile: &CompanyProfile) -> String {
    let stats = &profile.stats;
    format!(
        "{}\n\nOur Stats:\n{}",
        profile.about,
        bullet_list(&[
            format!("Experience: {}", stats.experience),
            format!("Projects: {} completed", stats.projects_completed),
            format!("Client Satisfaction: {}", stats.client_satisfaction),
        ])
    )
}

pub fn fallback(profile: &CompanyProfile) -> String {
    format!(
        "Thank you for your inquiry! I'm an AI assistant here to help with basic information about {}. For specific project details or inquiries, please contact us directly:\n{}",
        profile.name,
        contact_block(profile)
    )
}
