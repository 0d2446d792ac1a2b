use std::collections::BTreeMap;

use serde::Serialize;

use super::index::{RecordKind, SearchIndex, SearchRecord};

/// Query hits grouped by record kind.
///
/// A blank query produces a map with no buckets at all.  Any other query
/// produces all four buckets, some of them possibly empty, so "nothing typed
/// yet" and "no matches" can be told apart.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SearchResults {
    buckets: BTreeMap<RecordKind, Vec<SearchRecord>>,
}

impl SearchResults {
    /// The result of a blank query.
    pub fn blank() -> Self {
        Self::default()
    }

    /// `true` when the query was blank and nothing was searched.
    pub fn is_blank(&self) -> bool {
        self.buckets.is_empty()
    }

    /// `true` when a query ran and matched nothing.
    pub fn is_no_match(&self) -> bool {
        !self.is_blank() && self.total() == 0
    }

    pub fn total(&self) -> usize {
        self.buckets.values().map(Vec::len).sum()
    }

    /// Hits of one kind, in index order.
    pub fn bucket(&self, kind: RecordKind) -> &[SearchRecord] {
        self.buckets.get(&kind).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn buckets(&self) -> &BTreeMap<RecordKind, Vec<SearchRecord>> {
        &self.buckets
    }

    /// Buckets worth rendering: the non-empty ones, in kind order.
    pub fn sections(&self) -> impl Iterator<Item = (RecordKind, &[SearchRecord])> {
        self.buckets
            .iter()
            .filter(|(_, hits)| !hits.is_empty())
            .map(|(kind, hits)| (*kind, hits.as_slice()))
    }
}

impl SearchIndex {
    /// Case-insensitive substring match over record titles.
    ///
    /// The query is trimmed and lower-cased first.  There is no tokenizing
    /// and no ranking; hits keep the index order within their bucket.
    pub fn query(&self, text: &str) -> SearchResults {
        let needle = text.trim().to_lowercase();
        if needle.is_empty() {
            return SearchResults::blank();
        }

        let mut buckets: BTreeMap<RecordKind, Vec<SearchRecord>> = RecordKind::ALL
            .iter()
            .map(|kind| (*kind, Vec::new()))
            .collect();

        for record in self.matching(&needle) {
            buckets
                .entry(record.kind())
                .or_default()
                .push(record.clone());
        }

        SearchResults { buckets }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::index::tests::sample_tree;

    fn titles(hits: &[SearchRecord]) -> Vec<&str> {
        hits.iter().map(SearchRecord::title).collect()
    }

    #[test]
    fn blank_query_returns_no_buckets() {
        let index = SearchIndex::build(&sample_tree());
        for q in ["", "   ", "\t\n"] {
            let results = index.query(q);
            assert!(results.is_blank());
            assert!(results.buckets().is_empty());
        }
    }

    #[test]
    fn matching_is_case_insensitive_substring() {
        let index = SearchIndex::build(&sample_tree());

        for q in ["safety", "BRIEF", "  Safety Briefing  "] {
            let results = index.query(q);
            assert!(
                titles(results.bucket(RecordKind::SubItem)).contains(&"Safety Briefing"),
                "query {q:?} should match"
            );
        }
    }

    #[test]
    fn hits_are_grouped_by_kind_in_index_order() {
        let index = SearchIndex::build(&sample_tree());
        let results = index.query("safety");

        assert_eq!(titles(results.bucket(RecordKind::Category)), ["Safety"]);
        assert_eq!(titles(results.bucket(RecordKind::SubItem)), ["Safety Briefing"]);
        assert_eq!(titles(results.bucket(RecordKind::Video)), ["Safety drill"]);
        assert_eq!(titles(results.bucket(RecordKind::File)), ["Safety handbook"]);
        assert_eq!(results.total(), 4);
    }

    #[test]
    fn all_buckets_present_even_when_empty() {
        let index = SearchIndex::build(&sample_tree());
        let results = index.query("pump");

        assert_eq!(results.buckets().len(), 4);
        assert!(results.bucket(RecordKind::File).is_empty());
        let sections: Vec<_> = results.sections().map(|(k, _)| k).collect();
        assert_eq!(sections, [RecordKind::Category, RecordKind::Video]);
    }

    #[test]
    fn no_match_is_distinct_from_blank() {
        let index = SearchIndex::build(&sample_tree());
        let results = index.query("zzz");
        assert!(results.is_no_match());
        assert!(!results.is_blank());
    }

    #[test]
    fn empty_index_never_errors() {
        let results = SearchIndex::default().query("anything");
        assert!(results.is_no_match());
    }

    #[test]
    fn repeated_queries_are_identical() {
        let index = SearchIndex::build(&sample_tree());
        assert_eq!(index.query("a"), index.query("a"));
    }
}
