// crates/geodini-core/src/ranking.rs
//! Display ordering from a ranking hint.
//!
//! [`merge`] never touches the result slice; it returns borrowed rows that
//! remember where each result sits in the backend order.
use crate::model::{RankingHint, SearchResponse, SearchResult};
use serde::Serialize;

/// Presentation tag computed once by [`merge`] and only read by views.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "kind", content = "rank", rename_all = "snake_case")]
pub enum Badge {
    None,
    Preferred,
    /// 1-based rank among the next-probable ids.
    NextProbable(usize),
}

impl Badge {
    /// Partition precedence; stable sorting on this key gives the display order.
    fn sort_key(self) -> (u8, usize) {
        match self {
            Badge::Preferred => (0, 0),
            Badge::NextProbable(rank) => (1, rank),
            Badge::None => (2, 0),
        }
    }
}

/// A result in display position.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DisplayRow<'a> {
    pub result: &'a SearchResult,
    /// Position in the backend order. Map lookups go through this, never
    /// through the display position.
    pub original_index: usize,
    pub badge: Badge,
}

/// Orders `results` for display.
///
/// Without a hint the input order is kept and every badge is [`Badge::None`].
/// With one, the result named by `most_probable_id` comes first, then results
/// named in `next_probable_ids` by ascending rank, then everything else in
/// input order. Ids that match nothing are ignored.
///
/// ```rust
/// use geodini_core::ranking::{merge, Badge};
/// use geodini_core::{RankingHint, SearchResult};
///
/// let place = |id: &str| SearchResult {
///     id: id.into(), name: id.into(), subtype: String::new(), country: String::new(),
///     hierarchy: vec![], geometry: None, source_type: None,
/// };
/// let results = vec![place("a"), place("b"), place("c")];
/// let hint = RankingHint {
///     most_probable_id: Some("b".into()),
///     next_probable_ids: vec!["c".into(), "a".into()],
/// };
///
/// let rows = merge(&results, Some(&hint));
/// let order: Vec<_> = rows.iter().map(|r| (r.result.id.as_str(), r.badge)).collect();
/// assert_eq!(order, vec![
///     ("b", Badge::Preferred),
///     ("c", Badge::NextProbable(1)),
///     ("a", Badge::NextProbable(2)),
/// ]);
/// ```
pub fn merge<'a>(results: &'a [SearchResult], hint: Option<&RankingHint>) -> Vec<DisplayRow<'a>> {
    let mut rows: Vec<DisplayRow<'a>> = results
        .iter()
        .enumerate()
        .map(|(original_index, result)| DisplayRow {
            result,
            original_index,
            badge: Badge::None,
        })
        .collect();

    let Some(hint) = hint else {
        return rows;
    };

    // Only the first result carrying the preferred id is preferred.
    let preferred = hint
        .most_probable_id
        .as_deref()
        .and_then(|id| results.iter().position(|r| r.id == id));

    for row in &mut rows {
        row.badge = if Some(row.original_index) == preferred {
            Badge::Preferred
        } else if let Some(rank) = hint.next_probable_rank(&row.result.id) {
            Badge::NextProbable(rank)
        } else {
            Badge::None
        };
    }

    // stable
    rows.sort_by_key(|row| row.badge.sort_key());
    rows
}

/// [`merge`] over a response and its own hint.
pub fn merge_response(response: &SearchResponse) -> Vec<DisplayRow<'_>> {
    merge(response.results(), response.ranking())
}
