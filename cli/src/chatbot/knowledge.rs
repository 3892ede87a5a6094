//! # FAQ Knowledge Base
//!
//! File: cli/src/chatbot/knowledge.rs
//!
//! ## Overview
//!
//! The knowledge base maps each service [`Topic`] to a set of *facets*
//! (`duration`, `licensed`, `leakRepair`, ...), each holding one approved
//! answer. It is built once, validated, and never mutated afterwards.
//!
//! Invariants checked on construction:
//! - all six topics are present
//! - every topic has a non-empty `services` facet (the topic's fallback answer)
//! - no facet text is empty or whitespace-only
//!
//! A facet lookup that misses answers with the topic's `services` text, so a
//! trimmed-down knowledge base loaded from a content file still lets the
//! classifier answer every question.
//!
use crate::core::error::ChatError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Name of the facet every topic must define.
pub const SERVICES_FACET: &str = "services";

/// The service areas the knowledge base is organised by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Topic {
    GeneralRenovation,
    Electrical,
    Plumbing,
    Waterproofing,
    Painting,
    Tiling,
}

impl Topic {
    /// Every topic, in knowledge-base order.
    pub const ALL: [Topic; 6] = [
        Topic::GeneralRenovation,
        Topic::Electrical,
        Topic::Plumbing,
        Topic::Waterproofing,
        Topic::Painting,
        Topic::Tiling,
    ];

    /// The identifier used for this topic in content files.
    pub fn key(self) -> &'static str {
        match self {
            Topic::GeneralRenovation => "generalRenovation",
            Topic::Electrical => "electrical",
            Topic::Plumbing => "plumbing",
            Topic::Waterproofing => "waterproofing",
            Topic::Painting => "painting",
            Topic::Tiling => "tiling",
        }
    }
}

impl fmt::Display for Topic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Facet name → answer text for a single topic.
pub type Facets = BTreeMap<String, String>;

/// # Knowledge Base (`KnowledgeBase`)
///
/// Immutable topic → facet → answer mapping. Construct it with
/// [`KnowledgeBase::default`] for the built-in site content, or with
/// [`KnowledgeBase::from_topics`] / [`KnowledgeBase::from_toml_str`] for
/// alternate content. Both paths go through the same validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(into = "KnowledgeTables")]
pub struct KnowledgeBase {
    topics: BTreeMap<Topic, Facets>,
}

impl KnowledgeBase {
    /// # Build From Topic Tables (`from_topics`)
    ///
    /// Validates and wraps a complete topic → facets mapping.
    ///
    /// ## Returns
    ///
    /// * `Ok(KnowledgeBase)` when every invariant holds.
    /// * `Err(ChatError::Knowledge)` naming the first offending topic otherwise.
    pub fn from_topics(topics: BTreeMap<Topic, Facets>) -> Result<Self, ChatError> {
        for topic in Topic::ALL {
            let facets = topics.get(&topic).ok_or_else(|| ChatError::Knowledge {
                topic: topic.key().to_string(),
                reason: "topic is missing".to_string(),
            })?;
            if !facets.contains_key(SERVICES_FACET) {
                return Err(ChatError::Knowledge {
                    topic: topic.key().to_string(),
                    reason: format!("missing '{SERVICES_FACET}' facet"),
                });
            }
            if let Some((name, _)) = facets.iter().find(|(_, text)| text.trim().is_empty()) {
                return Err(ChatError::Knowledge {
                    topic: topic.key().to_string(),
                    reason: format!("facet '{name}' is empty"),
                });
            }
        }
        Ok(Self { topics })
    }

    /// Parses a knowledge base from a TOML document with one table per topic.
    ///
    /// Malformed TOML is a `ChatError::Content`; a well-formed document that
    /// breaks an invariant is a `ChatError::Knowledge` naming the topic.
    pub fn from_toml_str(source: &str) -> Result<Self, ChatError> {
        let tables: KnowledgeTables =
            toml::from_str(source).map_err(|e| ChatError::Content(e.to_string()))?;
        Self::try_from(tables)
    }

    /// All facets of `topic`.
    pub fn facets(&self, topic: Topic) -> &Facets {
        // Construction guarantees every topic is present.
        &self.topics[&topic]
    }

    /// Looks up a facet without falling back.
    pub fn facet(&self, topic: Topic, facet: &str) -> Option<&str> {
        self.facets(topic).get(facet).map(String::as_str)
    }

    /// # Answer Lookup (`answer`)
    ///
    /// Returns the text of `facet` under `topic`, or the topic's `services`
    /// text when the facet is not defined.
    pub fn answer(&self, topic: Topic, facet: &str) -> &str {
        let facets = self.facets(topic);
        facets
            .get(facet)
            .or_else(|| facets.get(SERVICES_FACET))
            .map(String::as_str)
            .unwrap_or_default()
    }

    /// The topic's fallback answer.
    pub fn services(&self, topic: Topic) -> &str {
        self.answer(topic, SERVICES_FACET)
    }
}

impl Default for KnowledgeBase {
    fn default() -> Self {
        let table = |entries: &[(&str, &str)]| -> Facets {
            entries
                .iter()
                .map(|(name, text)| (name.to_string(), text.to_string()))
                .collect()
        };
        let topics = BTreeMap::from([
            (Topic::GeneralRenovation, table(GENERAL_RENOVATION)),
            (Topic::Electrical, table(ELECTRICAL)),
            (Topic::Plumbing, table(PLUMBING)),
            (Topic::Waterproofing, table(WATERPROOFING)),
            (Topic::Painting, table(PAINTING)),
            (Topic::Tiling, table(TILING)),
        ]);
        Self { topics }
    }
}

/// On-disk shape of the knowledge base: one TOML table per topic.
///
/// Deserializing only checks the shape. Convert with
/// `KnowledgeBase::try_from` to validate.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct KnowledgeTables {
    #[serde(default)]
    general_renovation: Facets,
    #[serde(default)]
    electrical: Facets,
    #[serde(default)]
    plumbing: Facets,
    #[serde(default)]
    waterproofing: Facets,
    #[serde(default)]
    painting: Facets,
    #[serde(default)]
    tiling: Facets,
}

impl TryFrom<KnowledgeTables> for KnowledgeBase {
    type Error = ChatError;

    fn try_from(tables: KnowledgeTables) -> Result<Self, Self::Error> {
        let mut topics = BTreeMap::new();
        for (topic, facets) in [
            (Topic::GeneralRenovation, tables.general_renovation),
            (Topic::Electrical, tables.electrical),
            (Topic::Plumbing, tables.plumbing),
            (Topic::Waterproofing, tables.waterproofing),
            (Topic::Painting, tables.painting),
            (Topic::Tiling, tables.tiling),
        ] {
            // An absent table deserializes as empty; report it as missing.
            if !facets.is_empty() {
                topics.insert(topic, facets);
            }
        }
        KnowledgeBase::from_topics(topics)
    }
}

impl From<KnowledgeBase> for KnowledgeTables {
    fn from(kb: KnowledgeBase) -> Self {
        let mut topics = kb.topics;
        let mut take = |topic: Topic| topics.remove(&topic).unwrap_or_default();
        KnowledgeTables {
            general_renovation: take(Topic::GeneralRenovation),
            electrical: take(Topic::Electrical),
            plumbing: take(Topic::Plumbing),
            waterproofing: take(Topic::Waterproofing),
            painting: take(Topic::Painting),
            tiling: take(Topic::Tiling),
        }
    }
}

// --- Built-in site content ---

const GENERAL_RENOVATION: &[(&str, &str)] = &[
    ("inspection", "Yes, we offer a free site inspection and a no-obligation quotation."),
    ("compliance", "Yes, all our renovation works comply with HDB, BCA and PUB regulations where applicable."),
    ("projectTypes", "Yes, we undertake residential, commercial and industrial renovation projects."),
    ("services", "We provide complete renovation services including civil, carpentry, electrical, plumbing, painting and reinstatement works."),
    ("duration", "Project duration depends on scope and size; we will provide a clear timeline after site inspection."),
    ("designSupport", "Yes, we provide layout planning and design support based on your requirements."),
    ("partialRenovation", "Yes, we handle partial renovations such as kitchen, bathroom or selected areas."),
    ("warranty", "Yes, we provide workmanship warranty subject to agreed terms and conditions."),
    ("permits", "Yes, we assist with all necessary permits and submissions required for renovation works."),
    ("stayDuringRenovation", "It depends on the renovation scope; our team will advise after site assessment."),
    ("pricing", "Yes, our quotations are clear, detailed and transparent with no hidden charges."),
    ("budget", "Yes, we can propose suitable options and materials to match your budget."),
    ("hacking", "Yes, we provide hacking, demolition and reinstatement services."),
    ("workerSafety", "Yes, all our workers are trained, insured and follow site safety regulations."),
    ("startProcess", "Simply leave your contact details or request a site inspection and our team will assist you."),
    ("licensed", "Yes, all plumbing and electrical works are carried out by licensed professionals."),
    ("startImmediately", "Start dates depend on project scope and approvals; we will confirm after site inspection."),
    ("materialSelection", "Yes, we guide you on material selection based on budget and design needs."),
    ("changesDuringRenovation", "Yes, changes are possible subject to feasibility, cost and timeline adjustment."),
    ("paymentStructure", "Payments are made in stages according to project progress."),
    ("protectFurniture", "Yes, we take proper protection measures during renovation."),
    ("occupiedUnits", "Yes, we can plan works to minimise disruption where possible."),
    ("reinstatement", "Yes, we provide full reinstatement and handover-ready solutions."),
    ("nightWeekendWork", "Yes, subject to approval, we can arrange after-hours works for commercial projects."),
    ("defects", "We will attend to defects within the warranty period."),
    ("projectSupervision", "Yes, a dedicated supervisor will manage and monitor site progress."),
];

const ELECTRICAL: &[(&str, &str)] = &[
    ("services", "We provide wiring, rewiring, lighting, sockets, power points, fault repair, and troubleshooting for residential and commercial works. LED and smart system installation available. All works are performed by licensed electricians only."),
    ("licensed", "Yes, all electrical works are performed by licensed electricians only."),
    ("wiring", "Yes, we handle new wiring, rewiring, and electrical installations."),
    ("lighting", "Yes, we install indoor/outdoor lights, sockets, and power points."),
    ("faultRepair", "Yes, we provide electrical troubleshooting and repairs."),
    ("certified", "Yes, all works are done by licensed electricians with safety compliance."),
    ("smartSystems", "Yes, we can install LED, automation, and smart home electrical systems."),
    ("duration", "Depends on project size; typically 1-7 days for residential areas."),
];

const PLUMBING: &[(&str, &str)] = &[
    ("services", "We handle residential and commercial plumbing including leak repair, burst pipe repair, blockage clearance, fixture installation (taps, sinks, toilets, showers), water heater installation, and pipe replacement."),
    ("residentialCommercial", "Yes, we cater to homes, offices, and commercial spaces."),
    ("leaks", "Yes, we provide pipe repairs, leak detection, and replacement."),
    ("fixtures", "Yes, we install sinks, taps, showers, toilets, and water heaters."),
    ("blockages", "Yes, we clear blocked drains and maintain plumbing systems."),
    ("emergency", "We offer fast-response services for urgent plumbing issues."),
    ("pipeReplacement", "Yes, we replace old or damaged pipes for long-term safety."),
];

const WATERPROOFING: &[(&str, &str)] = &[
    ("services", "We provide waterproofing for bathrooms, kitchens, balconies, and rooftops. Services include leak repair and waterproofing using liquid membrane, cementitious, and bitumen systems. Old surface preparation is included. Typical duration is 1-3 days."),
    ("areas", "Yes, we provide waterproofing for all wet areas including bathrooms, kitchens, balconies, and rooftops."),
    ("types", "Liquid membrane, cementitious coating, bituminous membranes, and epoxy coatings."),
    ("duration", "Typically 1-3 days, depending on area size and complexity."),
    ("leakRepair", "Yes, we identify leaks and provide effective waterproofing repairs."),
    ("oldSurfaces", "Yes, we prepare and treat old surfaces before waterproofing."),
    ("included", "Yes, waterproofing is part of wet-area renovation services."),
];

const PAINTING: &[(&str, &str)] = &[
    ("services", "We provide professional painting services for residential and commercial properties, including interior and exterior painting, feature walls, and touch-up works."),
    ("paintType", "We use high-quality, low-VOC paints from trusted brands."),
    ("colorConsultation", "Yes, we provide colour consultation based on your space and lighting."),
    ("occupiedUnits", "Yes, we can carry out repainting with minimal disturbance."),
    ("duration", "Typically, 3-7 days, depending on area size and scope."),
    ("surfacePreparation", "Yes, surface cleaning, patching and sanding are included."),
    ("partialPainting", "Yes, partial painting works are available."),
    ("antiMould", "Yes, we offer anti-mould and moisture-resistant paint options."),
    ("protection", "Yes, we provide proper masking and protection before painting."),
];

const TILING: &[(&str, &str)] = &[
    ("services", "We provide tile laying and surface works including tile installation, replacement, grouting, and sealing for floors and walls."),
    ("supply", "We provide both tile supply and installation services."),
    ("areas", "Bathrooms, kitchens, living areas, balconies and outdoor areas."),
    ("replacement", "Yes, we provide tile replacement and repair services."),
    ("waterproofingBefore", "Yes, waterproofing is done prior to tiling for wet areas."),
    ("duration", "Usually 3-5 days, depending on tile type and area size."),
    ("layoutAdvice", "Yes, we assist with tile size, pattern and layout planning."),
    ("removeOldTiles", "Yes, hacking and disposal of old tiles can be arranged."),
    ("tileTypes", "Ceramic, porcelain, homogeneous, marble and feature tiles."),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_knowledge_base_satisfies_invariants() {
        let kb = KnowledgeBase::default();
        let rebuilt = KnowledgeBase::from_topics(kb.topics.clone());
        assert_eq!(rebuilt, Ok(kb));
    }

    #[test]
    fn missing_facet_falls_back_to_services() {
        let kb = KnowledgeBase::default();
        assert_eq!(kb.answer(Topic::Plumbing, "noSuchFacet"), kb.services(Topic::Plumbing));
        assert!(kb.facet(Topic::Plumbing, "noSuchFacet").is_none());
        assert_eq!(
            kb.answer(Topic::Tiling, "duration"),
            "Usually 3-5 days, depending on tile type and area size."
        );
    }

    #[test]
    fn rejects_topic_without_services() {
        let mut topics = KnowledgeBase::default().topics;
        topics
            .get_mut(&Topic::Painting)
            .unwrap()
            .remove(SERVICES_FACET);

        let err = KnowledgeBase::from_topics(topics).unwrap_err();
        assert_eq!(
            err,
            ChatError::Knowledge {
                topic: "painting".into(),
                reason: "missing 'services' facet".into(),
            }
        );
    }

    #[test]
    fn rejects_blank_facet_text() {
        let mut topics = KnowledgeBase::default().topics;
        topics
            .get_mut(&Topic::Electrical)
            .unwrap()
            .insert("wiring".into(), "   ".into());

        let err = KnowledgeBase::from_topics(topics).unwrap_err();
        assert!(err.to_string().contains("facet 'wiring' is empty"));
    }

    #[test]
    fn rejects_missing_topic_in_toml() {
        let source = r#"
            [generalRenovation]
            services = "General."
            [electrical]
            services = "Electrical."
            [plumbing]
            services = "Plumbing."
            [waterproofing]
            services = "Waterproofing."
            [painting]
            services = "Painting."
        "#;
        let err = KnowledgeBase::from_toml_str(source).unwrap_err();
        assert_eq!(
            err,
            ChatError::Knowledge {
                topic: "tiling".into(),
                reason: "topic is missing".into(),
            }
        );
    }

    #[test]
    fn reports_offending_topic_from_toml() {
        let text = toml::to_string_pretty(&KnowledgeBase::default()).expect("serialize");
        let broken = text.replacen(
            "services = \"We provide professional painting",
            "general = \"We provide professional painting",
            1,
        );
        assert_ne!(broken, text);

        assert_eq!(
            KnowledgeBase::from_toml_str(&broken),
            Err(ChatError::Knowledge {
                topic: "painting".into(),
                reason: "missing 'services' facet".into(),
            })
        );
    }

    #[test]
    fn malformed_toml_is_a_content_error() {
        let err = KnowledgeBase::from_toml_str("[plumbing\nservices = 1").unwrap_err();
        assert!(matches!(err, ChatError::Content(_)), "unexpected error: {err:?}");
    }

    #[test]
    fn toml_round_trip_preserves_content() {
        let kb = KnowledgeBase::default();
        let text = toml::to_string_pretty(&kb).expect("serialize");
        assert!(text.contains("[generalRenovation]"));
        assert_eq!(KnowledgeBase::from_toml_str(&text), Ok(kb));
    }
}
