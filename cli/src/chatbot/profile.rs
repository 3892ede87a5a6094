//! # Company Profile
//!
//! File: cli/src/chatbot/profile.rs
//!
//! ## Overview
//!
//! Static facts about the company that several rules interpolate directly:
//! office hours, phone numbers, emails, address, the service list, the
//! "about" blurb and the headline statistics. Like the knowledge base it is
//! validated once and then only read.
//!
use crate::core::error::ChatError;
use serde::{Deserialize, Serialize};

/// Company facts consulted by the hours/contact/address/services/about rules.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CompanyProfile {
    pub name: String,
    pub services: Vec<String>,
    pub about: String,
    pub office_hours: OfficeHours,
    pub contact: Contact,
    pub stats: Stats,
}

/// Opening hours as displayed text (e.g. `"9:00 AM - 6:00 PM"` or `"Closed"`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OfficeHours {
    pub monday: String,
    pub tuesday: String,
    pub wednesday: String,
    pub thursday: String,
    pub friday: String,
    pub saturday: String,
    pub sunday: String,
    pub public_holidays: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Contact {
    /// Main line, quoted by every reply that gives a phone number.
    pub phone: String,
    /// Optional direct line to the site manager.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub site_manager_phone: Option<String>,
    /// The first address is the primary one.
    pub emails: Vec<String>,
    pub address: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Stats {
    pub experience: String,
    pub projects_completed: String,
    pub client_satisfaction: String,
}

/// Days that have their own hours entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Weekday {
    /// Capitalised English day name, as used in replies.
    pub fn name(self) -> &'static str {
        match self {
            Weekday::Monday => "Monday",
            Weekday::Tuesday => "Tuesday",
            Weekday::Wednesday => "Wednesday",
            Weekday::Thursday => "Thursday",
            Weekday::Friday => "Friday",
            Weekday::Saturday => "Saturday",
            Weekday::Sunday => "Sunday",
        }
    }
}

impl OfficeHours {
    pub fn on(&self, day: Weekday) -> &str {
        match day {
            Weekday::Monday => &self.monday,
            Weekday::Tuesday => &self.tuesday,
            Weekday::Wednesday => &self.wednesday,
            Weekday::Thursday => &self.thursday,
            Weekday::Friday => &self.friday,
            Weekday::Saturday => &self.saturday,
            Weekday::Sunday => &self.sunday,
        }
    }
}

impl CompanyProfile {
    /// The email quoted in short contact blocks.
    pub fn primary_email(&self) -> &str {
        self.contact.emails.first().map(String::as_str).unwrap_or_default()
    }

    /// # Validate Profile (`validate`)
    ///
    /// Checks that every field a reply may interpolate is present, so replies
    /// never render with a blank phone number or email.
    ///
    /// ## Returns
    ///
    /// * `Ok(())` if the profile is usable.
    /// * `Err(ChatError::Profile)` describing the first problem found.
    pub fn validate(&self) -> Result<(), ChatError> {
        let required = [
            ("name", self.name.as_str()),
            ("about", self.about.as_str()),
            ("contact.phone", self.contact.phone.as_str()),
            ("contact.address", self.contact.address.as_str()),
            ("office_hours.monday", self.office_hours.monday.as_str()),
            ("office_hours.tuesday", self.office_hours.tuesday.as_str()),
            ("office_hours.wednesday", self.office_hours.wednesday.as_str()),
            ("office_hours.thursday", self.office_hours.thursday.as_str()),
            ("office_hours.friday", self.office_hours.friday.as_str()),
            ("office_hours.saturday", self.office_hours.saturday.as_str()),
            ("office_hours.sunday", self.office_hours.sunday.as_str()),
            ("office_hours.public_holidays", self.office_hours.public_holidays.as_str()),
            ("stats.experience", self.stats.experience.as_str()),
            ("stats.projects_completed", self.stats.projects_completed.as_str()),
            ("stats.client_satisfaction", self.stats.client_satisfaction.as_str()),
        ];
        if let Some((field, _)) = required.iter().find(|(_, value)| value.trim().is_empty()) {
            return Err(ChatError::Profile(format!("'{field}' must not be empty")));
        }
        if self.contact.emails.is_empty() {
            return Err(ChatError::Profile("at least one email is required".into()));
        }
        if self.contact.emails.iter().any(|e| e.trim().is_empty()) {
            return Err(ChatError::Profile("email entries must not be empty".into()));
        }
        if matches!(&self.contact.site_manager_phone, Some(p) if p.trim().is_empty()) {
            return Err(ChatError::Profile(
                "'contact.site_manager_phone' must not be empty when set".into(),
            ));
        }
        if self.services.iter().any(|s| s.trim().is_empty()) {
            return Err(ChatError::Profile("service entries must not be empty".into()));
        }
        Ok(())
    }
}

impl Default for CompanyProfile {
    fn default() -> Self {
        let weekday = "9:00 AM - 6:00 PM".to_string();
        Self {
            name: "Reliable Engineering and Construction".into(),
            office_hours: OfficeHours {
                monday: weekday.clone(),
                tuesday: weekday.clone(),
                wednesday: weekday.clone(),
                thursday: weekday.clone(),
                friday: weekday,
                saturday: "9:00 AM - 2:00 PM".into(),
                sunday: "Closed".into(),
                public_holidays: "Closed".into(),
            },
            contact: Contact {
                phone: "+6585864098".into(),
                site_manager_phone: None,
                emails: vec![
                    "sgsaconstruction@gmail.com".into(),
                    "contact@sgsa.com".into(),
                ],
                address: "Jalan Besar Plaza #02-36, Singapore 208511".into(),
            },
            services: [
                "Carpentry",
                "Electrical",
                "Plumbing",
                "Painting",
                "Hacking Demolition",
                "Tile Laying",
                "Renovation Works",
                "Waterproofing",
                "Aircon Services and Installation",
                "Ceiling and Wall Partitions",
                "Reinstatement Works",
            ]
            .into_iter()
            .map(String::from)
            .collect(),
            about: "Reliable Engineering and Construction is a leading construction company in Singapore with over 50 years of experience. We specialize in delivering exceptional construction projects with a commitment to safety, quality, and innovation.".into(),
            stats: Stats {
                experience: "50+ years".into(),
                projects_completed: "500+".into(),
                client_satisfaction: "98%".into(),
            },
        }
    }
}
