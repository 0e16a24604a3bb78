//! Categorical pre-filters applied before scoring.

use std::fmt;

struct FieldFilter<R> {
    label: &'static str,
    field: fn(&R) -> &str,
    accepted: Vec<String>,
}

impl<R> FieldFilter<R> {
    fn matches(&self, record: &R) -> bool {
        let value = (self.field)(record).trim().to_lowercase();
        self.accepted.iter().any(|accepted| *accepted == value)
    }
}

/// Conjunction of case-insensitive exact-match predicates.
///
/// Unset criteria add nothing, so an empty chain accepts every record.
pub struct FilterChain<R> {
    filters: Vec<FieldFilter<R>>,
}

impl<R> Default for FilterChain<R> {
    fn default() -> Self {
        Self {
            filters: Vec::new(),
        }
    }
}

impl<R> fmt::Debug for FilterChain<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut list = f.debug_list();
        for filter in &self.filters {
            list.entry(&(filter.label, &filter.accepted));
        }
        list.finish()
    }
}

impl<R> FilterChain<R> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Require `field` to equal `expected`, when given.
    #[must_use]
    pub fn exact(self, label: &'static str, field: fn(&R) -> &str, expected: Option<&str>) -> Self {
        match expected {
            Some(value) => self.one_of(label, field, Some(std::slice::from_ref(&value))),
            None => self,
        }
    }

    /// Require `field` to equal one of `accepted`, when given.
    #[must_use]
    pub fn one_of<S: AsRef<str>>(
        mut self,
        label: &'static str,
        field: fn(&R) -> &str,
        accepted: Option<&[S]>,
    ) -> Self {
        if let Some(values) = accepted {
            self.filters.push(FieldFilter {
                label,
                field,
                accepted: values
                    .iter()
                    .map(|value| value.as_ref().trim().to_lowercase())
                    .collect(),
            });
        }
        self
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }

    #[must_use]
    pub fn matches(&self, record: &R) -> bool {
        self.filters.iter().all(|filter| filter.matches(record))
    }

    /// Records accepted by every filter. Items borrow `records`, not the chain.
    pub fn apply<'s, 'r>(
        &'s self,
        records: &'r [R],
    ) -> impl Iterator<Item = &'r R> + use<'s, 'r, R> {
        records.iter().filter(move |record| self.matches(record))
    }
}
