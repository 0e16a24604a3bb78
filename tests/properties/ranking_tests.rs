use proptest::prelude::*;

use design_catalog::catalog::{FilterChain, ScoreProfile, rank, split_list};

#[derive(Debug, Clone)]
struct Entry {
    title: String,
    kind: String,
    tags: Vec<String>,
}

fn profile() -> ScoreProfile<Entry> {
    ScoreProfile::<Entry>::new()
        .text("title", 10, |e| e.title.as_str())
        .tags("tags", 3, |e| e.tags.as_slice())
}

fn entry_strategy() -> impl Strategy<Value = Entry> {
    (
        "[a-zA-Z ]{0,12}",
        prop::sample::select(vec!["Card", "modal", "FORM"]),
        prop::collection::vec("[a-z]{1,6}", 0..4),
    )
        .prop_map(|(title, kind, tags)| Entry {
            title,
            kind: kind.to_string(),
            tags,
        })
}

proptest! {
    #[test]
    fn ranked_scores_never_increase(
        entries in prop::collection::vec(entry_strategy(), 0..30),
        query in "[a-z]{0,3}",
    ) {
        let ranked = rank(&entries, &profile(), &query, None);
        prop_assert!(ranked.iter().all(|hit| hit.score > 0));
        prop_assert!(ranked.windows(2).all(|pair| pair[0].score >= pair[1].score));
    }

    #[test]
    fn limit_caps_result_length(
        entries in prop::collection::vec(entry_strategy(), 0..30),
        query in "[a-z]{0,2}",
        limit in 0usize..10,
    ) {
        let unlimited = rank(&entries, &profile(), &query, None).len();
        let limited = rank(&entries, &profile(), &query, Some(limit)).len();
        prop_assert_eq!(limited, unlimited.min(limit));
    }

    #[test]
    fn empty_query_matches_every_entry(
        entries in prop::collection::vec(entry_strategy(), 0..30),
    ) {
        let ranked = rank(&entries, &profile(), "", None);
        prop_assert_eq!(ranked.len(), entries.len());
    }

    #[test]
    fn query_case_does_not_change_scores(
        entries in prop::collection::vec(entry_strategy(), 1..20),
        query in "[a-z]{1,3}",
    ) {
        let profile = profile();
        for entry in &entries {
            prop_assert_eq!(
                profile.score(entry, &query),
                profile.score(entry, &query.to_uppercase())
            );
        }
    }

    #[test]
    fn filters_ignore_case(
        entries in prop::collection::vec(entry_strategy(), 0..30),
        wanted in prop::sample::select(vec!["card", "MODAL", "Form"]),
    ) {
        let filters = FilterChain::<Entry>::new().exact("kind", |e| e.kind.as_str(), Some(wanted));
        let expected = entries
            .iter()
            .filter(|e| e.kind.eq_ignore_ascii_case(wanted))
            .count();
        prop_assert_eq!(filters.apply(&entries).count(), expected);
    }

    #[test]
    fn split_list_items_are_trimmed_and_non_empty(raw in "[a-z ;]{0,40}") {
        let items = split_list(&raw, ';');
        prop_assert!(items.iter().all(|item| !item.is_empty()));
        prop_assert!(items.iter().all(|item| item.trim() == item));
    }
}
