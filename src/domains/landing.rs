//! Landing-page patterns: search, goal-based recommendation and page outlines.

use std::collections::BTreeSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::catalog::{
    Catalog, CatalogRecord, ClosedSet, CsvRow, FilterChain, Level, LoadReport, ScoreProfile,
};
use crate::error::Result;

pub const LANDING_FILE: &str = "landing_patterns.csv";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LandingCategory {
    Classic,
    Video,
    Pricing,
    Product,
    Social,
    Comparison,
    Faq,
    Layout,
    Minimal,
    Conversion,
    Interactive,
    Narrative,
    Data,
    Trust,
    Theme,
}

impl ClosedSet for LandingCategory {
    const FIELD: &'static str = "category";

    fn all() -> &'static [Self] {
        &[
            Self::Classic,
            Self::Video,
            Self::Pricing,
            Self::Product,
            Self::Social,
            Self::Comparison,
            Self::Faq,
            Self::Layout,
            Self::Minimal,
            Self::Conversion,
            Self::Interactive,
            Self::Narrative,
            Self::Data,
            Self::Trust,
            Self::Theme,
        ]
    }

    fn as_str(self) -> &'static str {
        match self {
            Self::Classic => "classic",
            Self::Video => "video",
            Self::Pricing => "pricing",
            Self::Product => "product",
            Self::Social => "social",
            Self::Comparison => "comparison",
            Self::Faq => "faq",
            Self::Layout => "layout",
            Self::Minimal => "minimal",
            Self::Conversion => "conversion",
            Self::Interactive => "interactive",
            Self::Narrative => "narrative",
            Self::Data => "data",
            Self::Trust => "trust",
            Self::Theme => "theme",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LandingSection {
    pub name: String,
    pub kind: String,
    pub content_hint: String,
    pub required: bool,
    pub order: usize,
}

impl LandingSection {
    fn new(name: &str, kind: &str, content_hint: &str, required: bool, order: usize) -> Self {
        Self {
            name: name.to_string(),
            kind: kind.to_string(),
            content_hint: content_hint.to_string(),
            required,
            order,
        }
    }

    /// Build a section from a slug such as `pricing_plans`.
    #[must_use]
    pub fn from_slug(slug: &str, order: usize) -> Self {
        let kind = infer_section_kind(slug);
        Self {
            name: title_case(&slug.replace('_', " ")),
            kind: kind.to_string(),
            content_hint: content_hint(kind).to_string(),
            required: order == 0,
            order,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CtaStrategy {
    pub primary_placement: String,
    pub secondary_placements: Vec<String>,
    pub style: String,
    pub urgency: Level,
    pub text_variations: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct LandingPattern {
    pub name: String,
    pub category: LandingCategory,
    pub description: String,
    pub sections: Vec<LandingSection>,
    pub cta_strategy: CtaStrategy,
    pub best_for: Vec<String>,
    pub conversion_tips: Vec<String>,
    pub complexity: Level,
    pub keywords: Vec<String>,
}

impl CatalogRecord for LandingPattern {
    const KIND: &'static str = "landing_pattern";

    fn from_row(row: &CsvRow<'_>) -> Result<Self> {
        let slugs = row.list("sections", ',');
        let sections = slugs
            .iter()
            .enumerate()
            .map(|(order, slug)| LandingSection::from_slug(slug, order))
            .collect();

        let cta_strategy = CtaStrategy {
            primary_placement: slugs.first().cloned().unwrap_or_else(|| "hero".to_string()),
            secondary_placements: Vec::new(),
            style: "button".to_string(),
            urgency: Level::Medium,
            text_variations: cta_variations(row.optional("best_for").unwrap_or_default()),
        };

        Ok(Self {
            name: row.non_empty("name")?.to_string(),
            category: row.parse_or("category", LandingCategory::Classic)?,
            description: row.text("description")?.trim().to_string(),
            sections,
            cta_strategy,
            best_for: row.list("best_for", ','),
            conversion_tips: row.list("conversion_tips", ','),
            complexity: row.parse_or("complexity", Level::Medium)?,
            keywords: row.list("keywords", ','),
        })
    }

    fn defaults() -> Vec<Self> {
        vec![
            Self {
                name: "Hero + Features".to_string(),
                category: LandingCategory::Classic,
                description: "Classic landing page with hero section and feature showcase"
                    .to_string(),
                sections: vec![
                    LandingSection::new("Hero", "hero", "Compelling headline and primary CTA", true, 0),
                    LandingSection::new("Features", "features", "3-6 key features with icons", false, 1),
                    LandingSection::new("Social Proof", "testimonials", "Customer testimonials", false, 2),
                    LandingSection::new("CTA", "cta", "Final call-to-action", false, 3),
                ],
                cta_strategy: CtaStrategy {
                    primary_placement: "hero".to_string(),
                    secondary_placements: strings(&["features", "cta"]),
                    style: "button".to_string(),
                    urgency: Level::Medium,
                    text_variations: strings(&["Get Started", "Learn More", "Start Free Trial"]),
                },
                best_for: strings(&["SaaS", "Marketing", "Product"]),
                conversion_tips: strings(&[
                    "Place primary CTA in hero section",
                    "Use contrasting color for CTA",
                ]),
                complexity: Level::Medium,
                keywords: strings(&["hero", "features", "classic", "landing"]),
            },
            Self {
                name: "Minimal Single CTA".to_string(),
                category: LandingCategory::Minimal,
                description: "Ultra-minimalist page with single focused action".to_string(),
                sections: vec![LandingSection::new(
                    "Single CTA",
                    "hero",
                    "One clear headline and one button",
                    true,
                    0,
                )],
                cta_strategy: CtaStrategy {
                    primary_placement: "hero".to_string(),
                    secondary_placements: Vec::new(),
                    style: "button".to_string(),
                    urgency: Level::High,
                    text_variations: strings(&["Sign Up", "Get Started", "Join Now"]),
                },
                best_for: strings(&["Newsletter", "Signup", "Waitlist"]),
                conversion_tips: strings(&["Remove all distractions", "Use plenty of whitespace"]),
                complexity: Level::Low,
                keywords: strings(&["minimal", "simple", "focused", "single"]),
            },
        ]
    }
}

// =============================================================================
// SECTION AND CTA TABLES
// =============================================================================

const SECTION_KINDS: &[(&str, &[&str])] = &[
    ("hero", &["hero", "video_hero", "split_hero", "dark_hero", "single_cta"]),
    ("features", &["features", "zigzag_features", "dark_features", "feature"]),
    ("pricing", &["pricing_plans", "pricing", "plans"]),
    ("testimonials", &["testimonials", "social_proof", "reviews"]),
    ("comparison", &["comparison_table", "comparison"]),
    ("faq", &["faq", "faq_categories", "questions"]),
    ("demo", &["interactive_demo", "video_hero", "product_gallery"]),
    ("stats", &["stats_dashboard", "trust_badges", "stats"]),
    ("cta", &["cta", "contact_cta", "repeating_ctas"]),
    ("story", &["story_sections", "timeline", "narrative"]),
];

const CONTENT_HINTS: &[(&str, &str)] = &[
    ("hero", "Compelling headline, subheadline, primary CTA, hero image/video"),
    ("features", "3-6 key features with icons, titles, descriptions"),
    ("pricing", "2-4 pricing tiers, highlight recommended plan"),
    ("testimonials", "3-5 customer quotes with photos and titles"),
    ("comparison", "Side-by-side feature comparison table"),
    ("faq", "5-10 common questions with clear answers"),
    ("demo", "Interactive or video demonstration"),
    ("stats", "Key metrics, social proof numbers"),
    ("cta", "Clear call-to-action with benefit statement"),
    ("content", "Relevant content for this section"),
];

const CTA_TEXTS: &[(&str, &[&str])] = &[
    ("SaaS", &["Start Free Trial", "Get Started", "Request Demo", "Start Now"]),
    ("E-commerce", &["Shop Now", "Browse Collection", "Add to Cart", "Buy Now"]),
    ("Marketing", &["Learn More", "Get Started", "Contact Us", "Sign Up"]),
    ("B2B", &["Request Demo", "Contact Sales", "Enterprise Plans", "Book a Call"]),
    ("Freemium", &["Start Free", "Upgrade Now", "Get Pro", "Unlock Features"]),
    ("Mobile", &["Download App", "Get on iOS", "Get on Android", "Install Now"]),
];

const DEFAULT_CTA_TEXTS: &[&str] = &["Get Started", "Learn More", "Contact Us", "Sign Up"];

fn infer_section_kind(slug: &str) -> &'static str {
    let lower = slug.to_lowercase();
    SECTION_KINDS
        .iter()
        .find(|(_, markers)| markers.iter().any(|marker| lower.contains(marker)))
        .map_or("content", |(kind, _)| kind)
}

fn content_hint(kind: &str) -> &'static str {
    CONTENT_HINTS
        .iter()
        .find(|(name, _)| *name == kind)
        .map_or("Content for this section", |(_, hint)| hint)
}

fn cta_variations(best_for: &str) -> Vec<String> {
    let lower = best_for.to_lowercase();
    let texts = CTA_TEXTS
        .iter()
        .find(|(audience, _)| lower.contains(&audience.to_lowercase()))
        .map_or(DEFAULT_CTA_TEXTS, |(_, texts)| texts);
    strings(texts)
}

/// Upper-case the first letter of every word, lower-case the rest.
fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut previous_alpha = false;
    for ch in text.chars() {
        if previous_alpha {
            out.extend(ch.to_lowercase());
        } else {
            out.extend(ch.to_uppercase());
        }
        previous_alpha = ch.is_alphabetic();
    }
    out
}

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(ToString::to_string).collect()
}

// =============================================================================
// GOAL ROUTING
// =============================================================================

struct Route {
    triggers: &'static [&'static str],
    preferred: &'static str,
    fallback: Option<&'static str>,
}

impl Route {
    fn matches(&self, text: &str) -> bool {
        self.triggers.iter().any(|trigger| text.contains(trigger))
    }
}

const GOAL_ROUTES: &[Route] = &[
    Route {
        triggers: &["signup", "register", "newsletter"],
        preferred: "Minimal Single CTA",
        fallback: Some("Hero + Features"),
    },
    Route {
        triggers: &["purchase", "buy", "order"],
        preferred: "Product Showcase",
        fallback: Some("Hero + Features"),
    },
    Route {
        triggers: &["demo", "trial"],
        preferred: "Interactive Demo",
        fallback: Some("Video-First"),
    },
    Route {
        triggers: &["pricing"],
        preferred: "Pricing Preview",
        fallback: None,
    },
];

const PRODUCT_ROUTES: &[Route] = &[Route {
    triggers: &["b2b", "enterprise", "saas"],
    preferred: "Comparison Table",
    fallback: Some("Trust Badges"),
}];

const DEFAULT_PATTERN: &str = "Hero + Features";

// =============================================================================
// PAGE STRUCTURE
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SectionOutline {
    pub name: String,
    pub kind: String,
    pub content_hint: String,
    pub order: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PrimaryCta {
    pub placement: String,
    pub style: String,
    pub texts: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SecondaryCta {
    pub placement: String,
    pub style: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CtaPlan {
    pub primary: PrimaryCta,
    pub secondary: Vec<SecondaryCta>,
}

/// Page outline derived from a pattern.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageStructure {
    pub pattern: String,
    pub description: String,
    pub sections: Vec<SectionOutline>,
    pub cta_strategy: CtaPlan,
    pub conversion_tips: Vec<String>,
    pub complexity: Level,
}

// =============================================================================
// ENGINE
// =============================================================================

#[derive(Debug)]
pub struct LandingPatterns {
    catalog: Catalog<LandingPattern>,
    profile: ScoreProfile<LandingPattern>,
}

impl LandingPatterns {
    /// Load `landing_patterns.csv` from `data_dir`.
    #[must_use]
    pub fn open(data_dir: &Path) -> Self {
        Self::open_file(&data_dir.join(LANDING_FILE))
    }

    #[must_use]
    pub fn open_file(path: &Path) -> Self {
        Self::with_catalog(Catalog::open(path))
    }

    #[must_use]
    pub fn from_records(patterns: Vec<LandingPattern>) -> Self {
        Self::with_catalog(Catalog::from_records(patterns))
    }

    fn with_catalog(catalog: Catalog<LandingPattern>) -> Self {
        Self {
            catalog,
            profile: search_profile(),
        }
    }

    #[must_use]
    pub fn patterns(&self) -> &[LandingPattern] {
        self.catalog.records()
    }

    #[must_use]
    pub const fn load_report(&self) -> &LoadReport {
        self.catalog.report()
    }

    /// Rank patterns by name, category, keyword and audience matches.
    #[must_use]
    pub fn search(&self, query: &str, max_results: usize) -> Vec<&LandingPattern> {
        self.catalog
            .search(&self.profile, query, &FilterChain::new(), Some(max_results))
            .into_iter()
            .map(|hit| hit.record)
            .collect()
    }

    /// Case-insensitive lookup by exact name.
    #[must_use]
    pub fn get_pattern(&self, name: &str) -> Option<&LandingPattern> {
        let wanted = name.to_lowercase();
        self.catalog.find(|p| p.name.to_lowercase() == wanted)
    }

    /// Pick a pattern for a conversion goal, then for a product type.
    #[must_use]
    pub fn recommend(&self, product_type: &str, goal: &str) -> Option<&LandingPattern> {
        let goal = goal.to_lowercase();
        let product = product_type.to_lowercase();

        let route = GOAL_ROUTES
            .iter()
            .find(|route| route.matches(&goal))
            .or_else(|| PRODUCT_ROUTES.iter().find(|route| route.matches(&product)));

        match route {
            Some(route) => self
                .get_pattern(route.preferred)
                .or_else(|| route.fallback.and_then(|name| self.get_pattern(name))),
            None => self.get_pattern(DEFAULT_PATTERN),
        }
    }

    #[must_use]
    pub fn generate_structure(&self, pattern: &LandingPattern) -> PageStructure {
        let mut sections: Vec<SectionOutline> = pattern
            .sections
            .iter()
            .map(|section| SectionOutline {
                name: section.name.clone(),
                kind: section.kind.clone(),
                content_hint: section.content_hint.clone(),
                order: section.order,
            })
            .collect();
        sections.sort_by_key(|section| section.order);

        let cta = &pattern.cta_strategy;
        PageStructure {
            pattern: pattern.name.clone(),
            description: pattern.description.clone(),
            sections,
            cta_strategy: CtaPlan {
                primary: PrimaryCta {
                    placement: cta.primary_placement.clone(),
                    style: cta.style.clone(),
                    texts: cta.text_variations.iter().take(3).cloned().collect(),
                },
                secondary: cta
                    .secondary_placements
                    .iter()
                    .map(|placement| SecondaryCta {
                        placement: placement.clone(),
                        style: cta.style.clone(),
                    })
                    .collect(),
            },
            conversion_tips: pattern.conversion_tips.clone(),
            complexity: pattern.complexity,
        }
    }

    #[must_use]
    pub fn list_patterns(&self) -> Vec<&str> {
        self.catalog.iter().map(|p| p.name.as_str()).collect()
    }

    #[must_use]
    pub fn list_categories(&self) -> Vec<&'static str> {
        self.catalog
            .iter()
            .map(|p| p.category.as_str())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }
}

fn search_profile() -> ScoreProfile<LandingPattern> {
    ScoreProfile::<LandingPattern>::new()
        .text("name", 10, |p| p.name.as_str())
        .text("category", 5, |p| p.category.as_str())
        .tags("keywords", 3, |p| p.keywords.as_slice())
        .tags("best_for", 2, |p| p.best_for.as_slice())
}
