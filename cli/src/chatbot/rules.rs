//! # Ordered Rule Table
//!
//! File: cli/src/chatbot/rules.rs
//!
//! ## Overview
//!
//! The decision list the classifier walks for every utterance. Each [`Rule`]
//! has a keyword trigger, an ordered list of [`Refinement`]s and a reply used
//! when no refinement matches. Matching is substring containment on the
//! normalized (trimmed, lower-cased) utterance; `"pay"` matches `"payment"`.
//!
//! ## Ordering
//!
//! [`RULES`] is evaluated top to bottom and the first rule whose trigger
//! matches is the only one considered. Refinements inside that rule work the
//! same way. Overlapping keywords are therefore resolved purely by position:
//!
//! - `"what is your email address"` hits *email* before *address*
//! - `"how long does waterproofing take"` hits the general *duration* rule
//!   before the *waterproofing* topic is reached
//! - `"waterproof"` always selects *waterproofing*, so painting's anti-mould
//!   refinement is only reached through `"mould"`, `"mold"` or `"moisture"`
//!
//! Reordering entries changes answers. Keep new rules where they belong in
//! the sequence rather than appending them.
//!
use super::knowledge::Topic;
use super::profile::Weekday;
use super::replies::Template;
use std::fmt;
use Keywords::{AllOf, Any, AnyOf};
use Topic::{Electrical, GeneralRenovation, Painting, Plumbing, Tiling, Waterproofing};

/// A keyword predicate over the normalized utterance.
#[derive(Debug, Clone, Copy)]
pub enum Keywords {
    /// At least one of the substrings occurs.
    Any(&'static [&'static str]),
    /// Every nested predicate holds.
    AllOf(&'static [Keywords]),
    /// At least one nested predicate holds.
    AnyOf(&'static [Keywords]),
}

impl Keywords {
    pub fn matches(&self, message: &str) -> bool {
        match self {
            Keywords::Any(words) => words.iter().any(|w| message.contains(w)),
            Keywords::AllOf(parts) => parts.iter().all(|p| p.matches(message)),
            Keywords::AnyOf(parts) => parts.iter().any(|p| p.matches(message)),
        }
    }
}

impl fmt::Display for Keywords {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let join = |f: &mut fmt::Formatter<'_>, parts: &[Keywords], sep: &str| -> fmt::Result {
            for (i, part) in parts.iter().enumerate() {
                if i > 0 {
                    f.write_str(sep)?;
                }
                write!(f, "({part})")?;
            }
            Ok(())
        };
        match self {
            Keywords::Any(words) => {
                let quoted: Vec<String> = words.iter().map(|w| format!("\"{w}\"")).collect();
                f.write_str(&quoted.join(" | "))
            }
            Keywords::AllOf(parts) => join(f, parts, " & "),
            Keywords::AnyOf(parts) => join(f, parts, " | "),
        }
    }
}

/// How a matched rule or refinement answers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reply {
    /// A single knowledge-base facet.
    Facet(Topic, &'static str),
    /// A facet followed by a fixed sentence.
    FacetWithNote(Topic, &'static str, &'static str),
    /// Several facets of one topic separated by a blank line.
    Facets(Topic, &'static [&'static str]),
    /// Fixed text that lives outside the knowledge base.
    Text(&'static str),
    /// Text assembled from the company profile.
    Render(Template),
}

/// A facet-level sub-rule, checked only after its parent rule matched.
#[derive(Debug, Clone, Copy)]
pub struct Refinement {
    pub trigger: Keywords,
    pub reply: Reply,
}

/// One entry of the top-level decision list.
#[derive(Debug, Clone, Copy)]
pub struct Rule {
    pub intent: Intent,
    pub trigger: Keywords,
    pub refinements: &'static [Refinement],
    /// Used when no refinement matches.
    pub otherwise: Reply,
}

/// The question category a rule answers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Intent {
    Hours,
    Contact,
    Email,
    Address,
    FreeInspection,
    Compliance,
    ProjectTypes,
    Duration,
    Design,
    PartialRenovation,
    Warranty,
    StayDuring,
    Pricing,
    Budget,
    Hacking,
    WorkerSafety,
    StartProcess,
    LicensedTrade,
    StartImmediately,
    MaterialSelection,
    ChangesDuring,
    Payment,
    ProtectFurniture,
    OccupiedUnits,
    Reinstatement,
    NightWeekendWork,
    Defects,
    Supervision,
    Electrical,
    Plumbing,
    Waterproofing,
    Painting,
    Tiling,
    ServicesList,
    AboutCompany,
    ProjectInquiry,
    Safety,
    /// No rule matched.
    Fallback,
}

impl Intent {
    pub fn name(self) -> &'static str {
        match self {
            Intent::Hours => "hours",
            Intent::Contact => "contact",
            Intent::Email => "email",
            Intent::Address => "address",
            Intent::FreeInspection => "free-inspection",
            Intent::Compliance => "compliance",
            Intent::ProjectTypes => "project-types",
            Intent::Duration => "duration",
            Intent::Design => "design",
            Intent::PartialRenovation => "partial-renovation",
            Intent::Warranty => "warranty",
            Intent::StayDuring => "stay-during",
            Intent::Pricing => "pricing",
            Intent::Budget => "budget",
            Intent::Hacking => "hacking",
            Intent::WorkerSafety => "worker-safety",
            Intent::StartProcess => "start-process",
            Intent::LicensedTrade => "licensed-trade",
            Intent::StartImmediately => "start-immediately",
            Intent::MaterialSelection => "material-selection",
            Intent::ChangesDuring => "changes-during",
            Intent::Payment => "payment",
            Intent::ProtectFurniture => "protect-furniture",
            Intent::OccupiedUnits => "occupied-units",
            Intent::Reinstatement => "reinstatement",
            Intent::NightWeekendWork => "night-weekend-work",
            Intent::Defects => "defects",
            Intent::Supervision => "supervision",
            Intent::Electrical => "electrical",
            Intent::Plumbing => "plumbing",
            Intent::Waterproofing => "waterproofing",
            Intent::Painting => "painting",
            Intent::Tiling => "tiling",
            Intent::ServicesList => "services-list",
            Intent::AboutCompany => "about-company",
            Intent::ProjectInquiry => "project-inquiry",
            Intent::Safety => "safety",
            Intent::Fallback => "fallback",
        }
    }
}

impl fmt::Display for Intent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

const HOW_LONG: Keywords = Any(&["how long", "duration", "take"]);

const fn general(intent: Intent, trigger: Keywords, facet: &'static str) -> Rule {
    Rule {
        intent,
        trigger,
        refinements: &[],
        otherwise: Reply::Facet(GeneralRenovation, facet),
    }
}

const fn refine(trigger: Keywords, topic: Topic, facet: &'static str) -> Refinement {
    Refinement {
        trigger,
        reply: Reply::Facet(topic, facet),
    }
}

/// Reply when no rule matches.
pub const GLOBAL_DEFAULT: Reply = Reply::Render(Template::Fallback);

const SAFETY_TEXT: &str = "Safety is our top priority! We maintain the highest safety standards and have a zero-accident culture. All projects follow strict safety protocols and compliance regulations. For safety inquiries, please contact us directly.";

/// The decision list, in evaluation order.
pub static RULES: &[Rule] = &[
    Rule {
        intent: Intent::Hours,
        trigger: Any(&["open", "close", "hours", "time"]),
        refinements: &[
            Refinement { trigger: Any(&["monday"]), reply: Reply::Render(Template::OpenOn(Weekday::Monday)) },
            Refinement { trigger: Any(&["saturday"]), reply: Reply::Render(Template::OpenOn(Weekday::Saturday)) },
            Refinement { trigger: Any(&["sunday"]), reply: Reply::Render(Template::SundayHours) },
            Refinement { trigger: Any(&["weekend"]), reply: Reply::Render(Template::WeekendHours) },
        ],
        otherwise: Reply::Render(Template::WeeklyHours),
    },
    Rule {
        intent: Intent::Contact,
        trigger: Any(&["phone", "contact", "call", "number"]),
        refinements: &[Refinement {
            trigger: Any(&["site manager"]),
            reply: Reply::Render(Template::SiteManagerContact),
        }],
        otherwise: Reply::Render(Template::PhoneNumbers),
    },
    Rule {
        intent: Intent::Email,
        trigger: Any(&["email", "mail"]),
        refinements: &[],
        otherwise: Reply::Render(Template::EmailAddresses),
    },
    Rule {
        intent: Intent::Address,
        trigger: Any(&["address", "location", "where"]),
        refinements: &[],
        otherwise: Reply::Render(Template::Address),
    },
    Rule {
        intent: Intent::FreeInspection,
        trigger: AnyOf(&[
            Any(&["inspection"]),
            AllOf(&[Any(&["free"]), Any(&["site", "visit", "quote", "quotation"])]),
        ]),
        refinements: &[],
        otherwise: Reply::Render(Template::FreeInspection),
    },
    Rule {
        intent: Intent::Compliance,
        trigger: Any(&["compliance", "hdb", "bca", "pub", "regulation", "permit"]),
        refinements: &[Refinement {
            trigger: Any(&["permit"]),
            reply: Reply::FacetWithNote(
                GeneralRenovation,
                "permits",
                " For specific permit requirements, please contact us for assistance.",
            ),
        }],
        otherwise: Reply::Facet(GeneralRenovation, "compliance"),
    },
    general(
        Intent::ProjectTypes,
        Any(&["project type", "residential", "commercial", "industrial"]),
        "projectTypes",
    ),
    general(
        Intent::Duration,
        Any(&["duration", "how long", "timeline", "time frame"]),
        "duration",
    ),
    general(Intent::Design, Any(&["design", "layout", "planning"]), "designSupport"),
    general(
        Intent::PartialRenovation,
        AnyOf(&[
            Any(&["partial", "kitchen only", "bathroom only"]),
            AllOf(&[Any(&["selected"]), Any(&["area"])]),
        ]),
        "partialRenovation",
    ),
    general(Intent::Warranty, Any(&["warranty", "guarantee"]), "warranty"),
    general(
        Intent::StayDuring,
        AnyOf(&[
            Any(&["stay", "live"]),
            AllOf(&[Any(&["during"]), Any(&["renovation"])]),
        ]),
        "stayDuringRenovation",
    ),
    general(
        Intent::Pricing,
        Any(&["pricing", "price", "cost", "hidden", "transparent"]),
        "pricing",
    ),
    general(Intent::Budget, Any(&["budget", "affordable", "cheap"]), "budget"),
    general(Intent::Hacking, Any(&["hacking", "demolition", "demolish"]), "hacking"),
    general(
        Intent::WorkerSafety,
        AllOf(&[Any(&["worker"]), Any(&["safety", "insured", "trained"])]),
        "workerSafety",
    ),
    general(
        Intent::StartProcess,
        AllOf(&[Any(&["start"]), Any(&["process", "renovation", "how"])]),
        "startProcess",
    ),
    general(
        Intent::LicensedTrade,
        AllOf(&[Any(&["licensed"]), Any(&["plumber", "electrician"])]),
        "licensed",
    ),
    general(
        Intent::StartImmediately,
        AllOf(&[Any(&["start"]), Any(&["immediately", "now", "when"])]),
        "startImmediately",
    ),
    general(
        Intent::MaterialSelection,
        AllOf(&[Any(&["material"]), Any(&["selection", "choose", "help"])]),
        "materialSelection",
    ),
    general(
        Intent::ChangesDuring,
        AllOf(&[Any(&["change"]), Any(&["during", "renovation"])]),
        "changesDuringRenovation",
    ),
    general(
        Intent::Payment,
        AnyOf(&[
            Any(&["payment"]),
            AllOf(&[Any(&["pay"]), Any(&["structure"])]),
        ]),
        "paymentStructure",
    ),
    general(
        Intent::ProtectFurniture,
        Any(&["protect", "furniture", "flooring"]),
        "protectFurniture",
    ),
    general(
        Intent::OccupiedUnits,
        AnyOf(&[
            Any(&["occupied"]),
            AllOf(&[Any(&["live"]), Any(&["during"])]),
        ]),
        "occupiedUnits",
    ),
    general(Intent::Reinstatement, Any(&["reinstatement"]), "reinstatement"),
    general(
        Intent::NightWeekendWork,
        Any(&["night", "weekend", "after hours"]),
        "nightWeekendWork",
    ),
    general(
        Intent::Defects,
        AnyOf(&[
            Any(&["defect"]),
            AllOf(&[Any(&["problem"]), Any(&["after"])]),
        ]),
        "defects",
    ),
    general(
        Intent::Supervision,
        Any(&["supervisor", "supervision", "monitor"]),
        "projectSupervision",
    ),
    Rule {
        intent: Intent::Electrical,
        trigger: Any(&[
            "electrical", "electric", "wiring", "rewiring", "lighting", "socket", "power point",
            "db", "circuit", "fault", "led", "smart system", "outlet",
        ]),
        refinements: &[
            Refinement {
                trigger: Any(&["licensed", "electrician", "certified"]),
                reply: Reply::Facets(Electrical, &["certified", "services"]),
            },
            refine(Any(&["wiring", "rewiring", "installation"]), Electrical, "wiring"),
            refine(Any(&["lighting", "light", "outlet"]), Electrical, "lighting"),
            refine(Any(&["fault", "short circuit", "troubleshoot"]), Electrical, "faultRepair"),
            refine(Any(&["smart", "led", "energy", "automation"]), Electrical, "smartSystems"),
            refine(HOW_LONG, Electrical, "duration"),
        ],
        otherwise: Reply::Facet(Electrical, "services"),
    },
    Rule {
        intent: Intent::Plumbing,
        trigger: Any(&[
            "plumbing", "plumber", "leak", "burst", "pipe", "blockage", "clog", "tap", "sink",
            "toilet", "shower", "water heater", "fixture", "drain", "sewage",
        ]),
        refinements: &[
            refine(Any(&["residential", "commercial", "both"]), Plumbing, "residentialCommercial"),
            refine(Any(&["leak", "burst"]), Plumbing, "leaks"),
            refine(Any(&["fixture", "tap", "toilet", "sink", "shower"]), Plumbing, "fixtures"),
            refine(Any(&["clog", "blockage", "drain", "sewage"]), Plumbing, "blockages"),
            refine(Any(&["emergency", "urgent", "quick"]), Plumbing, "emergency"),
            refine(AllOf(&[Any(&["replace"]), Any(&["pipe"])]), Plumbing, "pipeReplacement"),
        ],
        otherwise: Reply::Facet(Plumbing, "services"),
    },
    Rule {
        intent: Intent::Waterproofing,
        trigger: Any(&["waterproof", "waterproofing", "membrane", "cementitious", "bitumen", "epoxy"]),
        refinements: &[
            refine(Any(&["bathroom", "balcony", "kitchen", "rooftop"]), Waterproofing, "areas"),
            refine(
                Any(&["type", "what kind", "membrane", "cementitious", "bitumen", "epoxy"]),
                Waterproofing,
                "types",
            ),
            refine(HOW_LONG, Waterproofing, "duration"),
            refine(Any(&["leak", "repair"]), Waterproofing, "leakRepair"),
            refine(Any(&["old", "existing", "surface"]), Waterproofing, "oldSurfaces"),
            refine(Any(&["included", "part of", "renovate"]), Waterproofing, "included"),
        ],
        otherwise: Reply::Facet(Waterproofing, "services"),
    },
    Rule {
        intent: Intent::Painting,
        trigger: Any(&["paint", "painting", "painter"]),
        refinements: &[
            refine(Any(&["type", "what paint", "brand", "voc"]), Painting, "paintType"),
            refine(Any(&["color", "colour", "recommend"]), Painting, "colorConsultation"),
            refine(Any(&["occupied", "live", "during"]), Painting, "occupiedUnits"),
            refine(HOW_LONG, Painting, "duration"),
            refine(
                Any(&["preparation", "surface", "sanding", "patching"]),
                Painting,
                "surfacePreparation",
            ),
            refine(Any(&["partial", "one room", "feature wall"]), Painting, "partialPainting"),
            refine(Any(&["mould", "mold", "moisture", "waterproof"]), Painting, "antiMould"),
            refine(Any(&["protect", "furniture", "floor"]), Painting, "protection"),
        ],
        otherwise: Reply::Facet(Painting, "services"),
    },
    Rule {
        intent: Intent::Tiling,
        trigger: Any(&["tile", "tiling", "grout", "sealing"]),
        refinements: &[
            refine(Any(&["supply", "provide tile", "only installation"]), Tiling, "supply"),
            refine(Any(&["area", "where", "bathroom", "kitchen", "balcony"]), Tiling, "areas"),
            refine(Any(&["replace", "damaged", "cracked", "repair"]), Tiling, "replacement"),
            refine(
                AllOf(&[Any(&["waterproof"]), Any(&["before"])]),
                Tiling,
                "waterproofingBefore",
            ),
            refine(HOW_LONG, Tiling, "duration"),
            refine(Any(&["layout", "pattern", "advice", "design"]), Tiling, "layoutAdvice"),
            refine(Any(&["remove", "old tile", "hack"]), Tiling, "removeOldTiles"),
            refine(
                Any(&["type", "what tile", "ceramic", "porcelain", "marble"]),
                Tiling,
                "tileTypes",
            ),
        ],
        otherwise: Reply::Facet(Tiling, "services"),
    },
    Rule {
        intent: Intent::ServicesList,
        trigger: Any(&["service", "what do you", "offer", "do you do"]),
        refinements: &[],
        otherwise: Reply::Render(Template::ServiceList),
    },
    Rule {
        intent: Intent::AboutCompany,
        trigger: Any(&["about", "who are you", "company", "experience"]),
        refinements: &[],
        otherwise: Reply::Render(Template::About),
    },
    Rule {
        intent: Intent::ProjectInquiry,
        trigger: Any(&["project", "quote", "estimate", "bid"]),
        refinements: &[],
        otherwise: Reply::Render(Template::ProjectInquiry),
    },
    Rule {
        intent: Intent::Safety,
        trigger: Any(&["safety", "safe"]),
        refinements: &[],
        otherwise: Reply::Text(SAFETY_TEXT),
    },
];

/// # Select Rule (`select`)
///
/// Returns the first rule whose trigger matches `message`, together with the
/// index of the first matching refinement, if any. `message` must already be
/// normalized.
pub fn select(message: &str) -> Option<(&'static Rule, Option<usize>)> {
    RULES.iter().find(|rule| rule.trigger.matches(message)).map(|rule| {
        let refinement = rule
            .refinements
            .iter()
            .position(|r| r.trigger.matches(message));
        (rule, refinement)
    })
}
