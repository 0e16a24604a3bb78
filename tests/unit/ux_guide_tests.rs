use design_catalog::domains::{UxDomain, UxGuide};
use design_catalog::{GroupOrder, Level, Priority};

use crate::fixture_path;

fn guide() -> UxGuide {
    UxGuide::open(&fixture_path("tests/fixtures/data"))
}

#[test]
fn search_ranks_topic_over_practice() {
    let guide = guide();
    let hits = guide.search("contrast", None, 5);
    let summary: Vec<(UxDomain, Priority)> = hits
        .iter()
        .map(|rec| (rec.guideline.domain, rec.priority))
        .collect();
    assert_eq!(
        summary,
        vec![
            (UxDomain::DarkMode, Priority::High),
            (UxDomain::A11y, Priority::Critical),
        ]
    );
}

#[test]
fn search_domain_filter_uses_display_value() {
    let guide = guide();
    let hits = guide.search("contrast", Some("dark mode"), 5);
    assert_eq!(hits.len(), 1);
    assert!(hits[0].resources.is_empty());
}

#[test]
fn user_impact_is_classified_from_text() {
    let guide = guide();
    let impact_of = |topic: &str| {
        guide
            .search(topic, None, 1)
            .first()
            .map(|rec| rec.user_impact)
    };
    assert_eq!(impact_of("Focus"), Some(Level::High));
    assert_eq!(impact_of("Images"), Some(Level::Low));
    assert_eq!(impact_of("Labels"), Some(Level::Medium));
}

#[test]
fn quick_wins_in_insertion_order() {
    let guide = guide();
    let topics: Vec<&str> = guide
        .get_quick_wins(10, GroupOrder::Insertion)
        .iter()
        .map(|rec| rec.guideline.topic.as_str())
        .collect();
    assert_eq!(topics, vec!["Color", "Labels", "Breadcrumbs", "Contrast"]);
}

#[test]
fn quick_wins_never_repeat_a_domain() {
    let guide = guide();
    for seed in 0..20 {
        let wins = guide.get_quick_wins(3, GroupOrder::Shuffled { seed: Some(seed) });
        assert_eq!(wins.len(), 3);
        let mut domains: Vec<UxDomain> = wins.iter().map(|rec| rec.guideline.domain).collect();
        domains.sort();
        domains.dedup();
        assert_eq!(domains.len(), 3, "seed {seed} repeated a domain");
    }
}

#[test]
fn seeded_quick_wins_are_reproducible() {
    let guide = guide();
    let order = GroupOrder::Shuffled { seed: Some(99) };
    let first: Vec<String> = guide
        .get_quick_wins(4, order)
        .iter()
        .map(|rec| rec.guideline.topic.clone())
        .collect();
    let second: Vec<String> = guide
        .get_quick_wins(4, order)
        .iter()
        .map(|rec| rec.guideline.topic.clone())
        .collect();
    assert_eq!(first, second);
}

#[test]
fn checklist_for_selected_domains() {
    let guide = guide();
    let checklist = guide.get_checklist(Some(&["A11y"][..]));
    assert_eq!(checklist.len(), 1);
    assert_eq!(
        checklist["A11y"],
        vec![
            "[ ] Use 4.5:1 contrast ratio for text",
            "[ ] Keep a visible focus indicator"
        ]
    );
    assert_eq!(guide.get_checklist::<&str>(None).len(), 7);
}

#[test]
fn anti_patterns_grouped_by_domain() {
    let guide = guide();
    let grouped = guide.get_anti_patterns();
    assert_eq!(grouped["A11y"].len(), 2);
    assert_eq!(grouped["Forms"][0].anti_pattern, "Placeholder as the only label");
}

#[test]
fn listings_from_fixture() {
    let guide = guide();
    assert_eq!(
        guide.list_domains(),
        vec![
            "A11y",
            "Animation",
            "Dark Mode",
            "Forms",
            "Loading",
            "Navigation",
            "Performance"
        ]
    );
    assert_eq!(guide.list_topics(Some("A11y")), vec!["Color", "Focus"]);
    assert_eq!(guide.get_guidelines_by_domain("forms").len(), 1);
}
