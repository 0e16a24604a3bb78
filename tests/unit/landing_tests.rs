use design_catalog::domains::LandingPatterns;
use design_catalog::test_utils::{TestCase, run_table_tests};

use crate::fixture_path;

fn landing() -> LandingPatterns {
    LandingPatterns::open(&fixture_path("tests/fixtures/data"))
}

#[test]
fn recommend_routes_goals_and_products() -> Result<(), String> {
    let cases = vec![
        TestCase::new("signup goal", ("SaaS", "signup"), Some("Minimal Single CTA")),
        TestCase::new("newsletter goal", ("Blog", "Grow the NEWSLETTER"), Some("Minimal Single CTA")),
        TestCase::new("purchase goal", ("Store", "buy now"), Some("Product Showcase")),
        TestCase::new("trial goal", ("Tool", "free trial"), Some("Interactive Demo")),
        TestCase::new("pricing goal", ("Tool", "see pricing"), Some("Pricing Preview")),
        TestCase::new("b2b product", ("Enterprise SaaS", "learn more"), Some("Comparison Table")),
        TestCase::new("fallback", ("Portfolio", "explore"), Some("Hero + Features")),
    ];

    let landing = landing();
    run_table_tests(cases, |(product, goal)| {
        landing
            .recommend(product, goal)
            .map(|pattern| pattern.name.as_str())
    })
}

#[test]
fn goal_routes_win_over_product_routes() {
    let landing = landing();
    let pick = landing.recommend("B2B platform", "register").unwrap();
    assert_eq!(pick.name, "Minimal Single CTA");
}

#[test]
fn search_minimal_ranks_single_cta_first() {
    let landing = landing();
    let hits = landing.search("minimal", 5);
    assert_eq!(hits[0].name, "Minimal Single CTA");
    assert_eq!(hits.len(), 1);
}

#[test]
fn search_ties_keep_file_order() {
    let landing = landing();
    let hits = landing.search("b2b", 5);
    let names: Vec<&str> = hits.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["Interactive Demo", "Comparison Table", "Trust Badges"]);
}

#[test]
fn empty_query_returns_every_pattern_up_to_max() {
    let landing = landing();
    assert_eq!(landing.search("", 100).len(), landing.patterns().len());
    assert_eq!(landing.search("", 4).len(), 4);
}

#[test]
fn structure_infers_kinds_and_cta_texts() {
    let landing = landing();
    let pattern = landing.get_pattern("trust badges").unwrap();
    let structure = landing.generate_structure(pattern);

    let kinds: Vec<&str> = structure.sections.iter().map(|s| s.kind.as_str()).collect();
    assert_eq!(kinds, vec!["hero", "stats", "stats", "cta"]);
    assert_eq!(structure.sections[3].name, "Contact Cta");
    assert_eq!(
        structure.sections[2].content_hint,
        "Key metrics, social proof numbers"
    );
    assert_eq!(
        structure.cta_strategy.primary.texts,
        vec!["Request Demo", "Contact Sales", "Enterprise Plans"]
    );
    assert!(structure.cta_strategy.secondary.is_empty());
    assert_eq!(structure.conversion_tips, vec!["Show certifications"]);
}

#[test]
fn story_sections_are_recognised() {
    let landing = landing();
    let pattern = landing.get_pattern("Story Timeline").unwrap();
    let kinds: Vec<&str> = pattern.sections.iter().map(|s| s.kind.as_str()).collect();
    assert_eq!(kinds, vec!["hero", "story", "story", "cta"]);
}

#[test]
fn list_categories_sorted_and_unique() {
    let landing = landing();
    assert_eq!(
        landing.list_categories(),
        vec![
            "classic",
            "comparison",
            "interactive",
            "minimal",
            "narrative",
            "pricing",
            "product",
            "trust",
            "video"
        ]
    );
}

#[test]
fn structure_serializes_with_lowercase_complexity() {
    let landing = landing();
    let pattern = landing.get_pattern("Minimal Single CTA").unwrap();
    let json = serde_json::to_value(landing.generate_structure(pattern)).unwrap();
    assert_eq!(json["complexity"], "low");
    assert_eq!(json["sections"][0]["kind"], "hero");
}
