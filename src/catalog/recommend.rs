//! Static rule tables that enrich a record into a recommendation.

use std::fmt;

use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;

use super::level::{Level, Priority};

// =============================================================================
// PRIORITY RULES
// =============================================================================

pub struct PriorityRule<R> {
    pub label: &'static str,
    pub when: fn(&R) -> bool,
    pub priority: Priority,
}

/// Ordered priority rules; the first rule whose predicate holds wins.
pub struct PriorityRules<R> {
    rules: Vec<PriorityRule<R>>,
    fallback: Priority,
}

impl<R> fmt::Debug for PriorityRules<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let labels: Vec<(&str, Priority)> = self
            .rules
            .iter()
            .map(|rule| (rule.label, rule.priority))
            .collect();
        f.debug_struct("PriorityRules")
            .field("rules", &labels)
            .field("fallback", &self.fallback)
            .finish()
    }
}

impl<R> PriorityRules<R> {
    #[must_use]
    pub const fn new(fallback: Priority) -> Self {
        Self {
            rules: Vec::new(),
            fallback,
        }
    }

    #[must_use]
    pub fn rule(mut self, label: &'static str, when: fn(&R) -> bool, priority: Priority) -> Self {
        self.rules.push(PriorityRule {
            label,
            when,
            priority,
        });
        self
    }

    #[must_use]
    pub fn evaluate(&self, record: &R) -> Priority {
        self.rules
            .iter()
            .find(|rule| (rule.when)(record))
            .map_or(self.fallback, |rule| rule.priority)
    }
}

// =============================================================================
// IMPACT KEYWORDS
// =============================================================================

/// Keyword scan that turns a free-text benefit description into a [`Level`].
#[derive(Debug, Clone, Copy)]
pub struct ImpactKeywords {
    pub high: &'static [&'static str],
    pub medium: &'static [&'static str],
}

pub const USER_IMPACT: ImpactKeywords = ImpactKeywords {
    high: &["all users", "everyone", "critical", "essential"],
    medium: &["some users", "improved", "better"],
};

impl ImpactKeywords {
    #[must_use]
    pub fn classify(&self, text: &str) -> Level {
        let lower = text.to_lowercase();
        if self.high.iter().any(|word| lower.contains(word)) {
            Level::High
        } else if self.medium.iter().any(|word| lower.contains(word)) {
            Level::Medium
        } else {
            Level::Low
        }
    }
}

// =============================================================================
// RESOURCE TABLES
// =============================================================================

/// Reference links keyed by category, stack or domain name.
#[derive(Debug, Clone, Copy)]
pub struct ResourceTable {
    entries: &'static [(&'static str, &'static [&'static str])],
}

impl ResourceTable {
    #[must_use]
    pub const fn new(entries: &'static [(&'static str, &'static [&'static str])]) -> Self {
        Self { entries }
    }

    /// Links for `key`; unknown keys yield an empty list.
    #[must_use]
    pub fn lookup(&self, key: &str) -> Vec<String> {
        self.entries
            .iter()
            .find(|(name, _)| name.eq_ignore_ascii_case(key))
            .map(|(_, links)| links.iter().map(ToString::to_string).collect())
            .unwrap_or_default()
    }
}

// =============================================================================
// GROUPED DRAW
// =============================================================================

/// Order in which groups are visited when drawing one entry per group.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroupOrder {
    /// Random group order; a seed makes the order reproducible.
    Shuffled { seed: Option<u64> },
    /// Groups in order of first appearance.
    Insertion,
}

impl Default for GroupOrder {
    fn default() -> Self {
        Self::Shuffled { seed: None }
    }
}

/// Take the first item of each group, visiting groups in `order`, until `cap` items.
///
/// Groups are formed in order of first appearance, so with
/// [`GroupOrder::Insertion`] the result is fully deterministic.
pub fn one_per_group<T, K, F>(items: Vec<T>, key: F, cap: usize, order: GroupOrder) -> Vec<T>
where
    K: PartialEq,
    F: Fn(&T) -> K,
{
    let mut groups: Vec<(K, Vec<T>)> = Vec::new();
    for item in items {
        let group_key = key(&item);
        if let Some(idx) = groups.iter().position(|(existing, _)| *existing == group_key) {
            groups[idx].1.push(item);
        } else {
            groups.push((group_key, vec![item]));
        }
    }

    match order {
        GroupOrder::Insertion => {}
        GroupOrder::Shuffled { seed: Some(seed) } => {
            groups.shuffle(&mut StdRng::seed_from_u64(seed));
        }
        GroupOrder::Shuffled { seed: None } => groups.shuffle(&mut rand::rng()),
    }

    groups
        .into_iter()
        .filter_map(|(_, bucket)| bucket.into_iter().next())
        .take(cap)
        .collect()
}
