//! The four reference domains and the aggregate that opens them together.

pub mod components;
pub mod landing;
pub mod tech_stack;
pub mod ux_guide;

use tracing::{info, warn};

use crate::catalog::{CatalogRecord, GroupOrder, LoadReport};
use crate::config::{Config, QuickWinsConfig, SearchConfig};
use crate::error::Result;

pub use components::{ComponentLibrary, DesignTokens, Framework, GeneratedComponent};
pub use landing::{LandingPattern, LandingPatterns, PageStructure};
pub use tech_stack::{MigrationStep, StackRecommendation, TechStack, TechStackGuide};
pub use ux_guide::{UxDomain, UxGuide, UxRecommendation};

/// Every domain engine, opened from one configured data directory.
#[derive(Debug)]
pub struct DesignCatalog {
    pub landing: LandingPatterns,
    pub tech: TechStackGuide,
    pub ux: UxGuide,
    pub components: ComponentLibrary,
    max_results: usize,
    quick_wins_max: usize,
    quick_wins_order: GroupOrder,
}

impl DesignCatalog {
    /// Open every store named by `config`. Store problems degrade to defaults.
    pub fn open(config: &Config) -> Result<Self> {
        let data = &config.data;
        let catalog = Self {
            landing: LandingPatterns::open_file(&data.landing_path()),
            tech: TechStackGuide::open_files(
                &data.practices_path(),
                &data.patterns_path(),
                &data.performance_path(),
            ),
            ux: UxGuide::open_file(&data.ux_path()),
            components: ComponentLibrary::open_file(&data.components_path()),
            max_results: config.search.max_results,
            quick_wins_max: config.quick_wins.max_results,
            quick_wins_order: config.quick_wins.group_order()?,
        };

        let reports = catalog.load_reports();
        let rejected: usize = reports.iter().map(|report| report.rejected.len()).sum();
        if reports.iter().any(|report| !report.is_clean()) {
            warn!(dir = %data.dir.display(), rejected, "design catalog loaded with problems");
        } else {
            info!(dir = %data.dir.display(), "design catalog loaded");
        }
        Ok(catalog)
    }

    /// Built-in defaults for every domain.
    #[must_use]
    pub fn defaults() -> Self {
        Self {
            landing: LandingPatterns::from_records(LandingPattern::defaults()),
            tech: TechStackGuide::from_records(
                tech_stack::TechBestPractice::defaults(),
                tech_stack::TechPattern::defaults(),
                tech_stack::PerformanceTip::defaults(),
            ),
            ux: UxGuide::from_records(ux_guide::UxGuideline::defaults()),
            components: ComponentLibrary::from_records(components::ComponentSnippet::defaults()),
            max_results: SearchConfig::default().max_results,
            quick_wins_max: QuickWinsConfig::default().max_results,
            quick_wins_order: GroupOrder::default(),
        }
    }

    #[must_use]
    pub const fn with_group_order(mut self, order: GroupOrder) -> Self {
        self.quick_wins_order = order;
        self
    }

    /// Reports for all six stores.
    #[must_use]
    pub fn load_reports(&self) -> Vec<&LoadReport> {
        let mut reports = vec![self.landing.load_report()];
        reports.extend(self.tech.load_reports());
        reports.push(self.ux.load_report());
        reports.push(self.components.load_report());
        reports
    }

    /// Landing patterns for `query`, capped at the configured result count.
    #[must_use]
    pub fn search_landing(&self, query: &str) -> Vec<&LandingPattern> {
        self.landing.search(query, self.max_results)
    }

    #[must_use]
    pub fn search_ux(&self, query: &str, domain: Option<&str>) -> Vec<UxRecommendation<'_>> {
        self.ux.search(query, domain, self.max_results)
    }

    #[must_use]
    pub fn search_practices(
        &self,
        stack: &str,
        query: Option<&str>,
        category: Option<&str>,
    ) -> Vec<StackRecommendation<'_>> {
        self.tech.search_practices(stack, query, category, self.max_results)
    }

    /// UX quick wins with the configured cap and group order.
    #[must_use]
    pub fn ux_quick_wins(&self) -> Vec<UxRecommendation<'_>> {
        self.ux.get_quick_wins(self.quick_wins_max, self.quick_wins_order)
    }
}
