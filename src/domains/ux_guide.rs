//! UX guidelines: search, quick wins, checklists and anti-patterns.

use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::catalog::{
    Catalog, CatalogRecord, ClosedSet, CsvRow, FilterChain, GroupOrder, Level, LoadReport,
    Priority, PriorityRules, ResourceTable, ScoreProfile, USER_IMPACT, one_per_group,
};
use crate::error::Result;

pub const UX_FILE: &str = "ux_guidelines.csv";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum UxDomain {
    Animation,
    A11y,
    Performance,
    Responsive,
    Forms,
    Navigation,
    Loading,
    Error,
    #[serde(rename = "Dark Mode")]
    DarkMode,
    I18n,
}

impl ClosedSet for UxDomain {
    const FIELD: &'static str = "domain";

    fn all() -> &'static [Self] {
        &[
            Self::Animation,
            Self::A11y,
            Self::Performance,
            Self::Responsive,
            Self::Forms,
            Self::Navigation,
            Self::Loading,
            Self::Error,
            Self::DarkMode,
            Self::I18n,
        ]
    }

    fn as_str(self) -> &'static str {
        match self {
            Self::Animation => "Animation",
            Self::A11y => "A11y",
            Self::Performance => "Performance",
            Self::Responsive => "Responsive",
            Self::Forms => "Forms",
            Self::Navigation => "Navigation",
            Self::Loading => "Loading",
            Self::Error => "Error",
            Self::DarkMode => "Dark Mode",
            Self::I18n => "I18n",
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct UxGuideline {
    pub domain: UxDomain,
    pub topic: String,
    pub best_practice: String,
    pub anti_pattern: String,
    pub example: String,
    /// Free-text description of who benefits and how.
    pub impact: String,
    pub complexity: Level,
}

impl CatalogRecord for UxGuideline {
    const KIND: &'static str = "ux_guideline";

    fn from_row(row: &CsvRow<'_>) -> Result<Self> {
        Ok(Self {
            domain: row.parse("domain")?,
            topic: row.non_empty("topic")?.to_string(),
            best_practice: row.text("best_practice")?.to_string(),
            anti_pattern: row.text("anti_pattern")?.to_string(),
            example: row.text("example")?.to_string(),
            impact: row.text("impact")?.to_string(),
            complexity: row.parse("complexity")?,
        })
    }

    fn defaults() -> Vec<Self> {
        vec![
            Self {
                domain: UxDomain::Animation,
                topic: "Loading".to_string(),
                best_practice: "Use skeleton screens for content loading".to_string(),
                anti_pattern: "Use spinners for all loading states".to_string(),
                example: "Skeleton while profile data loads".to_string(),
                impact: "Reduced perceived wait time".to_string(),
                complexity: Level::Medium,
            },
            Self {
                domain: UxDomain::A11y,
                topic: "Color".to_string(),
                best_practice: "Use 4.5:1 contrast ratio for text".to_string(),
                anti_pattern: "Light gray text on white background".to_string(),
                example: "Dark text on light background".to_string(),
                impact: "Readable by all users".to_string(),
                complexity: Level::Low,
            },
            Self {
                domain: UxDomain::Performance,
                topic: "Images".to_string(),
                best_practice: "Use WebP format with fallbacks".to_string(),
                anti_pattern: "Unoptimized 5MB PNGs".to_string(),
                example: "WebP with JPEG fallback".to_string(),
                impact: "Faster page load".to_string(),
                complexity: Level::Low,
            },
        ]
    }
}

/// A guideline enriched with priority, effort, impact and links.
#[derive(Debug, Clone, Serialize)]
pub struct UxRecommendation<'a> {
    pub guideline: &'a UxGuideline,
    pub priority: Priority,
    pub implementation_effort: Level,
    pub user_impact: Level,
    pub resources: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AntiPatternEntry<'a> {
    pub anti_pattern: &'a str,
    pub best_practice: &'a str,
    pub impact: &'a str,
}

const DOMAIN_RESOURCES: ResourceTable = ResourceTable::new(&[
    (
        "A11y",
        &[
            "WCAG 2.1 Guidelines: https://www.w3.org/WAI/WCAG21/quickref/",
            "WebAIM Contrast Checker: https://webaim.org/resources/contrastchecker/",
        ],
    ),
    (
        "Performance",
        &[
            "Web.dev Performance: https://web.dev/performance/",
            "Google Lighthouse: https://developers.google.com/web/tools/lighthouse",
        ],
    ),
    (
        "Responsive",
        &["MDN Responsive Design: https://developer.mozilla.org/en-US/docs/Learn/CSS/CSS_layout/Responsive_Design"],
    ),
    (
        "Animation",
        &["Motion Design Guidelines: https://material.io/design/motion"],
    ),
]);

fn guideline_priorities() -> PriorityRules<UxGuideline> {
    PriorityRules::<UxGuideline>::new(Priority::Medium)
        .rule("a11y", |g| g.domain == UxDomain::A11y, Priority::Critical)
        .rule(
            "performance",
            |g| g.domain == UxDomain::Performance,
            Priority::High,
        )
        .rule("low complexity", |g| g.complexity == Level::Low, Priority::High)
}

fn guideline_profile() -> ScoreProfile<UxGuideline> {
    ScoreProfile::<UxGuideline>::new()
        .text("topic", 10, |g| g.topic.as_str())
        .text("best_practice", 8, |g| g.best_practice.as_str())
        .text("anti_pattern", 8, |g| g.anti_pattern.as_str())
        .query_words("impact", 3, |g| g.impact.as_str())
}

#[derive(Debug)]
pub struct UxGuide {
    catalog: Catalog<UxGuideline>,
    profile: ScoreProfile<UxGuideline>,
    priorities: PriorityRules<UxGuideline>,
}

impl UxGuide {
    #[must_use]
    pub fn open(data_dir: &Path) -> Self {
        Self::open_file(&data_dir.join(UX_FILE))
    }

    #[must_use]
    pub fn open_file(path: &Path) -> Self {
        Self::with_catalog(Catalog::open(path))
    }

    #[must_use]
    pub fn from_records(guidelines: Vec<UxGuideline>) -> Self {
        Self::with_catalog(Catalog::from_records(guidelines))
    }

    fn with_catalog(catalog: Catalog<UxGuideline>) -> Self {
        Self {
            catalog,
            profile: guideline_profile(),
            priorities: guideline_priorities(),
        }
    }

    #[must_use]
    pub fn guidelines(&self) -> &[UxGuideline] {
        self.catalog.records()
    }

    #[must_use]
    pub const fn load_report(&self) -> &LoadReport {
        self.catalog.report()
    }

    #[must_use]
    pub fn search(
        &self,
        query: &str,
        domain: Option<&str>,
        max_results: usize,
    ) -> Vec<UxRecommendation<'_>> {
        let filters =
            FilterChain::<UxGuideline>::new().exact("domain", |g| g.domain.as_str(), domain);
        self.catalog
            .search(&self.profile, query, &filters, Some(max_results))
            .into_iter()
            .map(|hit| self.recommend(hit.record))
            .collect()
    }

    fn recommend<'a>(&self, guideline: &'a UxGuideline) -> UxRecommendation<'a> {
        UxRecommendation {
            guideline,
            priority: self.priorities.evaluate(guideline),
            implementation_effort: guideline.complexity,
            user_impact: USER_IMPACT.classify(&guideline.impact),
            resources: DOMAIN_RESOURCES.lookup(guideline.domain.as_str()),
        }
    }

    #[must_use]
    pub fn get_guidelines_by_domain(&self, domain: &str) -> Vec<&UxGuideline> {
        let filters =
            FilterChain::<UxGuideline>::new().exact("domain", |g| g.domain.as_str(), Some(domain));
        self.catalog.filter(&filters).collect()
    }

    /// Low-complexity guidelines with medium or high user impact, one per domain.
    #[must_use]
    pub fn get_quick_wins(
        &self,
        max_results: usize,
        order: GroupOrder,
    ) -> Vec<UxRecommendation<'_>> {
        let candidates: Vec<UxRecommendation<'_>> = self
            .catalog
            .iter()
            .filter(|g| g.complexity == Level::Low)
            .filter_map(|guideline| {
                let user_impact = USER_IMPACT.classify(&guideline.impact);
                (user_impact >= Level::Medium).then(|| UxRecommendation {
                    guideline,
                    priority: Priority::High,
                    implementation_effort: Level::Low,
                    user_impact,
                    resources: DOMAIN_RESOURCES.lookup(guideline.domain.as_str()),
                })
            })
            .collect();

        one_per_group(candidates, |rec| rec.guideline.domain, max_results, order)
    }

    /// `[ ] best practice` items grouped by domain, optionally limited to `domains`.
    #[must_use]
    pub fn get_checklist<S: AsRef<str>>(
        &self,
        domains: Option<&[S]>,
    ) -> BTreeMap<&'static str, Vec<String>> {
        let filters =
            FilterChain::<UxGuideline>::new().one_of("domain", |g| g.domain.as_str(), domains);
        let mut checklist: BTreeMap<&'static str, Vec<String>> = BTreeMap::new();
        for guideline in self.catalog.filter(&filters) {
            checklist
                .entry(guideline.domain.as_str())
                .or_default()
                .push(format!("[ ] {}", guideline.best_practice));
        }
        checklist
    }

    #[must_use]
    pub fn get_anti_patterns(&self) -> BTreeMap<&'static str, Vec<AntiPatternEntry<'_>>> {
        let mut grouped: BTreeMap<&'static str, Vec<AntiPatternEntry<'_>>> = BTreeMap::new();
        for guideline in &self.catalog {
            grouped
                .entry(guideline.domain.as_str())
                .or_default()
                .push(AntiPatternEntry {
                    anti_pattern: &guideline.anti_pattern,
                    best_practice: &guideline.best_practice,
                    impact: &guideline.impact,
                });
        }
        grouped
    }

    #[must_use]
    pub fn list_domains(&self) -> Vec<&'static str> {
        self.catalog
            .iter()
            .map(|g| g.domain.as_str())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    #[must_use]
    pub fn list_topics(&self, domain: Option<&str>) -> Vec<&str> {
        let filters =
            FilterChain::<UxGuideline>::new().exact("domain", |g| g.domain.as_str(), domain);
        self.catalog
            .filter(&filters)
            .map(|g| g.topic.as_str())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }
}
