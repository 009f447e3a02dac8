// crates/geodini-core/src/model/mod.rs
pub mod convert;

use crate::error::Result;
use crate::geometry::Geometry;
use serde::{Deserialize, Serialize};

/// One place returned by the search endpoint.
///
/// Identity is `id`. Uniqueness within a response is assumed by the backend
/// but nothing here relies on it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResult {
    pub id: String,
    pub name: String,
    pub subtype: String,
    pub country: String,
    /// Administrative chain, outermost first.
    pub hierarchy: Vec<String>,
    pub geometry: Option<Geometry>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_type: Option<String>,
}

impl SearchResult {
    pub fn has_geometry(&self) -> bool {
        self.geometry.is_some()
    }

    /// Drawer heading: `"<name> (<subtype>, <country>)"`.
    pub fn title(&self) -> String {
        format!("{} ({}, {})", self.name, self.subtype, self.country)
    }
}

/// Backend reranking guidance layered over the raw results.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankingHint {
    pub most_probable_id: Option<String>,
    /// Rank 1 is the first element.
    pub next_probable_ids: Vec<String>,
}

impl RankingHint {
    /// A hint that names nothing is no hint.
    pub fn is_empty(&self) -> bool {
        self.most_probable_id.is_none() && self.next_probable_ids.is_empty()
    }

    /// 1-based rank of `id` among the next-probable ids (first occurrence wins).
    pub fn next_probable_rank(&self, id: &str) -> Option<usize> {
        self.next_probable_ids
            .iter()
            .position(|candidate| candidate == id)
            .map(|pos| pos + 1)
    }
}

/// Query rewriting the backend did before searching.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QueryInterpretation {
    pub query: Option<String>,
    pub rephrased_query: Option<String>,
    pub country_code: Option<String>,
    pub exact: Option<bool>,
}

/// One completed search.
///
/// The result sequence is fixed at construction: no method reorders or
/// mutates it, so an index handed out while rendering keeps resolving to the
/// same place for the lifetime of the response.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchResponse {
    results: Vec<SearchResult>,
    elapsed_seconds: f64,
    ranking: Option<RankingHint>,
    interpretation: QueryInterpretation,
}

impl SearchResponse {
    /// Empty hints are normalized to `None`.
    pub fn new(
        results: Vec<SearchResult>,
        elapsed_seconds: f64,
        ranking: Option<RankingHint>,
    ) -> Self {
        Self {
            results,
            elapsed_seconds,
            ranking: ranking.filter(|hint| !hint.is_empty()),
            interpretation: QueryInterpretation::default(),
        }
    }

    pub fn with_interpretation(mut self, interpretation: QueryInterpretation) -> Self {
        self.interpretation = interpretation;
        self
    }

    /// Same results, backend order, no ranking.
    pub fn without_ranking(mut self) -> Self {
        self.ranking = None;
        self
    }

    /// Parses a `/search` body.
    pub fn from_json(body: &str) -> Result<Self> {
        let raw = serde_json::from_str(body)?;
        Ok(convert::from_raw(raw))
    }

    pub fn from_slice(body: &[u8]) -> Result<Self> {
        let raw = serde_json::from_slice(body)?;
        Ok(convert::from_raw(raw))
    }

    /// Results in backend order.
    pub fn results(&self) -> &[SearchResult] {
        &self.results
    }

    /// Lookup by original (backend) index.
    pub fn result(&self, index: usize) -> Option<&SearchResult> {
        self.results.get(index)
    }

    pub fn len(&self) -> usize {
        self.results.len()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    pub fn elapsed_seconds(&self) -> f64 {
        self.elapsed_seconds
    }

    pub fn ranking(&self) -> Option<&RankingHint> {
        self.ranking.as_ref()
    }

    pub fn interpretation(&self) -> &QueryInterpretation {
        &self.interpretation
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_hint_is_dropped() {
        let resp = SearchResponse::new(vec![], 0.1, Some(RankingHint::default()));
        assert!(resp.ranking().is_none());
    }

    #[test]
    fn rank_is_one_based_first_occurrence() {
        let hint = RankingHint {
            most_probable_id: None,
            next_probable_ids: vec!["c".into(), "a".into(), "c".into()],
        };
        assert_eq!(hint.next_probable_rank("c"), Some(1));
        assert_eq!(hint.next_probable_rank("a"), Some(2));
        assert_eq!(hint.next_probable_rank("z"), None);
    }

    #[test]
    fn title_format() {
        let r = SearchResult {
            id: "1".into(),
            name: "London".into(),
            subtype: "locality".into(),
            country: "CA".into(),
            hierarchy: vec![],
            geometry: None,
            source_type: None,
        };
        assert_eq!(r.title(), "London (locality, CA)");
        assert!(!r.has_geometry());
    }
}
