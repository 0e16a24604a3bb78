//! Additive substring scoring.
//!
//! A [`ScoreProfile`] is a table of weighted fields. Each field that contains
//! the lower-cased query adds its weight; list fields add the weight once per
//! matching element. Records that score zero are not results.

use std::fmt;

/// How a weighted field is compared against the query.
pub enum FieldMatch<R> {
    /// One hit when the field contains the query.
    Text(fn(&R) -> &str),
    /// One hit per list element that contains the query.
    Tags(fn(&R) -> &[String]),
    /// One hit per whitespace-separated query word found in the field.
    QueryWords(fn(&R) -> &str),
}

pub struct WeightedField<R> {
    pub label: &'static str,
    pub weight: u32,
    pub matcher: FieldMatch<R>,
}

impl<R> WeightedField<R> {
    fn score(&self, record: &R, needle: &str) -> u32 {
        let hits = match &self.matcher {
            FieldMatch::Text(field) => u32::from(contains_folded(field(record), needle)),
            FieldMatch::Tags(field) => field(record)
                .iter()
                .filter(|tag| contains_folded(tag, needle))
                .fold(0u32, |acc, _| acc.saturating_add(1)),
            FieldMatch::QueryWords(field) => {
                let haystack = field(record).to_lowercase();
                needle
                    .split_whitespace()
                    .filter(|word| haystack.contains(word))
                    .fold(0u32, |acc, _| acc.saturating_add(1))
            }
        };
        hits.saturating_mul(self.weight)
    }
}

impl<R> fmt::Debug for WeightedField<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WeightedField")
            .field("label", &self.label)
            .field("weight", &self.weight)
            .finish_non_exhaustive()
    }
}

/// Per-domain table of weighted fields.
pub struct ScoreProfile<R> {
    fields: Vec<WeightedField<R>>,
}

impl<R> Default for ScoreProfile<R> {
    fn default() -> Self {
        Self { fields: Vec::new() }
    }
}

impl<R> fmt::Debug for ScoreProfile<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScoreProfile")
            .field("fields", &self.fields)
            .finish()
    }
}

impl<R> ScoreProfile<R> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn text(mut self, label: &'static str, weight: u32, field: fn(&R) -> &str) -> Self {
        self.fields.push(WeightedField {
            label,
            weight,
            matcher: FieldMatch::Text(field),
        });
        self
    }

    #[must_use]
    pub fn tags(mut self, label: &'static str, weight: u32, field: fn(&R) -> &[String]) -> Self {
        self.fields.push(WeightedField {
            label,
            weight,
            matcher: FieldMatch::Tags(field),
        });
        self
    }

    #[must_use]
    pub fn query_words(mut self, label: &'static str, weight: u32, field: fn(&R) -> &str) -> Self {
        self.fields.push(WeightedField {
            label,
            weight,
            matcher: FieldMatch::QueryWords(field),
        });
        self
    }

    #[must_use]
    pub fn fields(&self) -> &[WeightedField<R>] {
        &self.fields
    }

    /// Score `record` against a raw (not yet lower-cased) query.
    #[must_use]
    pub fn score(&self, record: &R, query: &str) -> u32 {
        self.score_folded(record, &query.to_lowercase())
    }

    fn score_folded(&self, record: &R, needle: &str) -> u32 {
        self.fields
            .iter()
            .fold(0u32, |acc, field| acc.saturating_add(field.score(record, needle)))
    }
}

/// A record paired with its score.
#[derive(Debug)]
pub struct Ranked<'a, R> {
    pub record: &'a R,
    pub score: u32,
}

impl<R> Clone for Ranked<'_, R> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<R> Copy for Ranked<'_, R> {}

/// Score candidates, drop zero scores, sort by descending score and truncate.
///
/// The sort is stable: equal scores keep candidate order.
pub fn rank<'a, R, I>(
    candidates: I,
    profile: &ScoreProfile<R>,
    query: &str,
    limit: Option<usize>,
) -> Vec<Ranked<'a, R>>
where
    R: 'a,
    I: IntoIterator<Item = &'a R>,
{
    let needle = query.to_lowercase();
    let mut ranked: Vec<Ranked<'a, R>> = candidates
        .into_iter()
        .filter_map(|record| {
            let score = profile.score_folded(record, &needle);
            (score > 0).then_some(Ranked { record, score })
        })
        .collect();

    ranked.sort_by(|a, b| b.score.cmp(&a.score));
    if let Some(limit) = limit {
        ranked.truncate(limit);
    }
    ranked
}

fn contains_folded(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(needle)
}
