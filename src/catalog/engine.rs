//! `Catalog<R>`: an ordered record set with filtering and ranked search.

use std::path::Path;

use tracing::debug;

use super::filter::FilterChain;
use super::scorer::{Ranked, ScoreProfile, rank};
use super::store::{CatalogRecord, LoadReport, RecordSource, RecordStore};

/// Read-only, ordered collection of one record type.
#[derive(Debug)]
pub struct Catalog<R> {
    records: Vec<R>,
    report: LoadReport,
}

impl<R: CatalogRecord> Catalog<R> {
    /// Load from `path`, falling back to the record type's defaults.
    #[must_use]
    pub fn open(path: &Path) -> Self {
        let (records, report) = RecordStore::load::<R>(path);
        Self { records, report }
    }

    #[must_use]
    pub fn defaults() -> Self {
        let records = R::defaults();
        let report = LoadReport {
            kind: R::KIND,
            source: RecordSource::Defaults,
            accepted: records.len(),
            rejected: Vec::new(),
        };
        Self { records, report }
    }

    #[must_use]
    pub fn from_records(records: Vec<R>) -> Self {
        let report = LoadReport {
            kind: R::KIND,
            source: RecordSource::Memory,
            accepted: records.len(),
            rejected: Vec::new(),
        };
        Self { records, report }
    }
}

impl<R> Catalog<R> {
    #[must_use]
    pub fn records(&self) -> &[R] {
        &self.records
    }

    #[must_use]
    pub const fn report(&self) -> &LoadReport {
        &self.report
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, R> {
        self.records.iter()
    }

    /// Records accepted by `filters`, in store order.
    pub fn filter<'s, 'f>(
        &'s self,
        filters: &'f FilterChain<R>,
    ) -> impl Iterator<Item = &'s R> + use<'s, 'f, R> {
        filters.apply(&self.records)
    }

    /// Filter, score, sort and truncate.
    #[must_use]
    pub fn search(
        &self,
        profile: &ScoreProfile<R>,
        query: &str,
        filters: &FilterChain<R>,
        limit: Option<usize>,
    ) -> Vec<Ranked<'_, R>> {
        let ranked = rank(filters.apply(&self.records), profile, query, limit);
        debug!(
            kind = self.report.kind,
            query,
            filters = ?filters,
            hits = ranked.len(),
            "catalog search"
        );
        ranked
    }

    pub fn find(&self, predicate: impl Fn(&R) -> bool) -> Option<&R> {
        self.records.iter().find(|record| predicate(record))
    }
}

impl<'a, R> IntoIterator for &'a Catalog<R> {
    type Item = &'a R;
    type IntoIter = std::slice::Iter<'a, R>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
