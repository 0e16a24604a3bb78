use design_catalog::catalog::CatalogRecord;
use design_catalog::domains::UxGuide;
use design_catalog::domains::components::ComponentSnippet;
use design_catalog::domains::landing::LandingPattern;
use design_catalog::domains::tech_stack::{PerformanceTip, TechBestPractice, TechPattern};
use design_catalog::domains::ux_guide::UxGuideline;
use design_catalog::test_utils::fixtures::{CatalogFixture, LANDING_HEADER, UX_HEADER};
use design_catalog::test_utils::logging::capture_logs;
use design_catalog::{DesignCatalog, GroupOrder, RecordSource, assert_log_contains, assert_no_warnings};
use tracing::Level;

use crate::fixture_config;

#[test]
fn fixture_directory_loads_cleanly() {
    let (catalog, logs) = capture_logs("debug", || DesignCatalog::open(&fixture_config()));
    let catalog = catalog.unwrap();

    let reports = catalog.load_reports();
    assert_eq!(reports.len(), 6);
    for report in &reports {
        assert!(
            matches!(report.source, RecordSource::File { .. }),
            "{} came from {:?}",
            report.kind,
            report.source
        );
        assert!(report.is_clean(), "{} rejected rows", report.kind);
    }
    assert_eq!(catalog.landing.patterns().len(), 9);
    assert_eq!(catalog.ux.guidelines().len(), 8);
    assert_no_warnings!(logs);
    assert_log_contains!(logs, Level::INFO, "design catalog loaded");
}

#[test]
fn bad_rows_are_skipped_with_a_warning() {
    let fixture = CatalogFixture::new();
    let path = fixture.create_store(
        "ux_guidelines.csv",
        UX_HEADER,
        &[
            "A11y,Color,Use contrast,Gray on white,Dark on light,Readable by all users,low",
            "Typography,Scale,Use a type scale,Random sizes,1.25 ratio,Better hierarchy,low",
            "Forms,,Label inputs,No labels,Label above,Improved completion,low",
            "Forms,Errors,Inline errors,Alert boxes,Red text under field,Improved recovery,medium",
        ],
    );

    let (guide, logs) = capture_logs("warn", || UxGuide::open_file(&path));

    let report = guide.load_report();
    assert_eq!(report.accepted, 2);
    let lines: Vec<u64> = report.rejected.iter().map(|row| row.line).collect();
    assert_eq!(lines, vec![3, 4]);
    assert!(report.rejected[0].reason.contains("Typography"));
    assert!(!report.is_clean());

    assert_log_contains!(logs, Level::WARN, "skipping catalog row");
    let skipped = logs.filter_by_message("skipping catalog row");
    assert_eq!(skipped.len(), 2);
    assert_eq!(skipped[0].field("kind"), Some("ux_guideline"));
    assert_eq!(skipped[0].field("line"), Some("3"));
}

#[test]
fn aggregate_warns_when_any_store_has_problems() {
    let fixture = CatalogFixture::new();
    fixture.create_store(
        "landing_patterns.csv",
        LANDING_HEADER,
        &["Broken,brutalist,Unknown category,hero,hero,Agencies,,low,bold"],
    );

    let (catalog, logs) = capture_logs("info", || DesignCatalog::open(&fixture.config()));
    let catalog = catalog.unwrap();

    assert!(catalog.landing.patterns().is_empty());
    assert_eq!(catalog.landing.load_report().rejected.len(), 1);
    assert_log_contains!(logs, Level::WARN, "design catalog loaded with problems");
}

#[test]
fn missing_files_use_defaults() {
    let fixture = CatalogFixture::new();
    let (catalog, logs) = capture_logs("info", || DesignCatalog::open(&fixture.config()));
    let catalog = catalog.unwrap();

    assert!(
        catalog
            .load_reports()
            .iter()
            .all(|report| report.source == RecordSource::Defaults)
    );
    assert_eq!(catalog.landing.patterns().len(), 2);
    assert_eq!(catalog.components.snippets().len(), 3);
    assert_eq!(logs.filter_by_message("store file absent").len(), 6);
    assert_no_warnings!(logs);
}

#[test]
fn unreadable_store_falls_back() {
    let fixture = CatalogFixture::new();
    std::fs::create_dir_all(fixture.root().join("ux_guidelines.csv")).unwrap();

    let (guide, logs) = capture_logs("warn", || UxGuide::open(fixture.root()));

    assert!(matches!(
        guide.load_report().source,
        RecordSource::Fallback { .. }
    ));
    assert!(!guide.guidelines().is_empty());
    assert_log_contains!(logs, Level::WARN, "store file unreadable");
}

#[test]
fn configured_file_names_are_honoured() {
    let fixture = CatalogFixture::new();
    fixture.create_store(
        "guidelines.csv",
        UX_HEADER,
        &["Forms,Labels,Label every input,Placeholder only,Label above,Improved completion,low"],
    );
    let mut config = fixture.config();
    config.data.ux_file = "guidelines.csv".to_string();

    let catalog = DesignCatalog::open(&config).unwrap();
    assert_eq!(catalog.ux.guidelines().len(), 1);
    assert_eq!(
        catalog.ux.load_report().source,
        RecordSource::File {
            path: fixture.root().join("guidelines.csv")
        }
    );
}

#[test]
fn configured_limits_reach_the_aggregate() {
    let mut config = fixture_config();
    config.search.max_results = 1;
    config.quick_wins.max_results = 2;
    config.quick_wins.order = "insertion".to_string();

    let catalog = DesignCatalog::open(&config).unwrap();
    assert_eq!(catalog.search_landing("b2b").len(), 1);
    assert_eq!(catalog.search_practices("Next.js", None, None).len(), 1);

    let topics: Vec<&str> = catalog
        .ux_quick_wins()
        .iter()
        .map(|rec| rec.guideline.topic.as_str())
        .collect();
    assert_eq!(topics, vec!["Color", "Labels"]);
}

#[test]
fn invalid_order_fails_to_open() {
    let mut config = fixture_config();
    config.quick_wins.order = "alphabetical".to_string();
    assert!(DesignCatalog::open(&config).is_err());
}

#[test]
fn defaults_can_be_reordered() {
    let catalog = DesignCatalog::defaults().with_group_order(GroupOrder::Insertion);
    let wins = catalog.ux_quick_wins();
    assert!(!wins.is_empty());
    assert!(wins.iter().all(|rec| rec.user_impact >= design_catalog::Level::Medium));
}

fn assert_clean_text(kind: &str, label: &str, value: &str) {
    assert!(!value.trim().is_empty(), "{kind}: blank {label}");
}

fn assert_clean_list(kind: &str, label: &str, items: &[String]) {
    for item in items {
        assert!(
            !item.is_empty() && item.trim() == item,
            "{kind}: {label} item {item:?} is empty or untrimmed"
        );
    }
}

#[test]
fn built_in_defaults_hold_field_invariants() {
    let landing = LandingPattern::defaults();
    assert!(!landing.is_empty());
    for pattern in &landing {
        assert_clean_text("landing", "name", &pattern.name);
        assert!(!pattern.sections.is_empty(), "{}: no sections", pattern.name);
        for section in &pattern.sections {
            assert_clean_text("landing", "section kind", &section.kind);
        }
        assert_clean_list("landing", "best_for", &pattern.best_for);
        assert_clean_list("landing", "conversion_tips", &pattern.conversion_tips);
        assert_clean_list("landing", "keywords", &pattern.keywords);
        assert_clean_list("landing", "cta texts", &pattern.cta_strategy.text_variations);
        assert_clean_list(
            "landing",
            "secondary placements",
            &pattern.cta_strategy.secondary_placements,
        );
    }

    let practices = TechBestPractice::defaults();
    assert!(!practices.is_empty());
    for practice in &practices {
        assert_clean_text("practice", "topic", &practice.topic);
        assert_clean_text("practice", "practice", &practice.practice);
    }

    let patterns = TechPattern::defaults();
    assert!(!patterns.is_empty());
    for pattern in &patterns {
        assert_clean_text("tech pattern", "name", &pattern.name);
        assert_clean_list("tech pattern", "pros", &pattern.pros);
        assert_clean_list("tech pattern", "cons", &pattern.cons);
    }

    let tips = PerformanceTip::defaults();
    assert!(!tips.is_empty());
    for tip in &tips {
        assert_clean_text("performance", "topic", &tip.topic);
    }

    let guidelines = UxGuideline::defaults();
    assert!(!guidelines.is_empty());
    for guideline in &guidelines {
        assert_clean_text("ux", "topic", &guideline.topic);
        assert_clean_text("ux", "best_practice", &guideline.best_practice);
    }

    let snippets = ComponentSnippet::defaults();
    assert!(!snippets.is_empty());
    for snippet in &snippets {
        assert_clean_text("component", "name", &snippet.name);
        assert_clean_text("component", "code", &snippet.code);
        assert_clean_list("component", "dependencies", &snippet.dependencies);
        for prop in &snippet.props {
            assert_clean_text("component", "prop name", &prop.name);
        }
    }
}
