// crates/geodini-core/src/view.rs
//! What a results table shows, independent of how it is drawn.
use crate::model::SearchResponse;
use crate::ranking::{Badge, DisplayRow};
use crate::traits::ResultSurface;
use serde::Serialize;

/// Visibility of the results area.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum PanelState {
    /// Before any search, or after the input was cleared.
    Hidden,
    /// A search came back empty: indicator shown, table hidden.
    NoResults,
    Table,
}

/// Count and timing line. Always taken from the response as received, never
/// from the display order.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ResultsSummary {
    pub count: usize,
    pub elapsed_seconds: f64,
}

impl ResultsSummary {
    pub fn of(response: &SearchResponse) -> Self {
        Self {
            count: response.len(),
            elapsed_seconds: response.elapsed_seconds(),
        }
    }

    pub fn count_text(&self) -> String {
        format!("{} results found", self.count)
    }

    pub fn time_text(&self) -> String {
        format!("Query time: {:.2}s", self.elapsed_seconds)
    }
}

/// The map column of a row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum MapAction {
    /// Clickable; carries the original index and nothing else.
    Show { index: usize },
    /// Informational only: the result has no geometry.
    Unavailable,
}

/// One table row, ready to draw.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RowView<'a> {
    pub badge: Badge,
    pub name: &'a str,
    pub subtype: &'a str,
    pub country: &'a str,
    pub hierarchy: String,
    pub map_action: MapAction,
}

impl<'a> RowView<'a> {
    pub fn from_row(row: &DisplayRow<'a>, separator: &str) -> Self {
        let result = row.result;
        let map_action = if result.has_geometry() {
            MapAction::Show {
                index: row.original_index,
            }
        } else {
            MapAction::Unavailable
        };
        Self {
            badge: row.badge,
            name: &result.name,
            subtype: &result.subtype,
            country: &result.country,
            hierarchy: result.hierarchy.join(separator),
            map_action,
        }
    }

    /// Star for the preferred match, the rank number for next-probable ones.
    pub fn badge_label(&self) -> Option<String> {
        match self.badge {
            Badge::None => None,
            Badge::Preferred => Some("★".to_string()),
            Badge::NextProbable(rank) => Some(rank.to_string()),
        }
    }

    pub fn badge_tooltip(&self) -> Option<String> {
        match self.badge {
            Badge::None => None,
            Badge::Preferred => Some("AI Preferred Match".to_string()),
            Badge::NextProbable(rank) => Some(format!("AI Rank #{rank}")),
        }
    }
}

/// Renders display rows onto a [`ResultSurface`].
pub struct ResultView<S: ResultSurface> {
    surface: S,
    separator: String,
}

impl<S: ResultSurface> ResultView<S> {
    pub fn new(surface: S, separator: impl Into<String>) -> Self {
        Self {
            surface,
            separator: separator.into(),
        }
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    /// Replaces whatever rows were drawn with `rows`, in order.
    pub fn render(&mut self, rows: &[DisplayRow<'_>]) {
        self.surface.clear_rows();
        for row in rows {
            self.surface.append_row(&RowView::from_row(row, &self.separator));
        }
    }

    pub fn clear(&mut self) {
        self.surface.clear_rows();
    }

    /// Full update for a completed search: summary, banner, panel and rows.
    pub fn show_response(&mut self, response: &SearchResponse, rows: &[DisplayRow<'_>]) {
        self.surface.set_info_panel(false);
        self.surface.set_summary(&ResultsSummary::of(response));
        self.surface
            .set_ranking_banner(response.ranking().is_some() && !response.is_empty());

        if response.is_empty() {
            self.clear();
            self.surface.set_panel(PanelState::NoResults);
        } else {
            self.surface.set_panel(PanelState::Table);
            self.render(rows);
        }
    }

    /// Back to the pre-search state.
    pub fn reset(&mut self) {
        self.surface.set_panel(PanelState::Hidden);
        self.surface.set_info_panel(true);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Geometry;
    use crate::model::{RankingHint, SearchResult};
    use crate::ranking::merge_response;
    use crate::testing::RecordingSurface;
    use serde_json::json;

    fn place(id: &str, with_geometry: bool) -> SearchResult {
        SearchResult {
            id: id.to_string(),
            name: format!("Place {id}"),
            subtype: "region".to_string(),
            country: "FR".to_string(),
            hierarchy: vec!["France".to_string(), "Île-de-France".to_string()],
            geometry: with_geometry
                .then(|| Geometry::from_value(json!({"type": "Point", "coordinates": [2.3, 48.8]})))
                .flatten(),
            source_type: None,
        }
    }

    fn view() -> ResultView<RecordingSurface> {
        ResultView::new(RecordingSurface::default(), " > ")
    }

    #[test]
    fn rows_carry_original_index_not_display_position() {
        let response = SearchResponse::new(
            vec![place("a", true), place("b", true)],
            0.5,
            Some(RankingHint {
                most_probable_id: Some("b".into()),
                next_probable_ids: vec![],
            }),
        );
        let rows = merge_response(&response);
        let mut v = view();
        v.show_response(&response, &rows);

        let drawn = &v.surface().rows;
        assert_eq!(drawn[0].name, "Place b");
        assert_eq!(drawn[0].map_action, MapAction::Show { index: 1 });
        assert_eq!(drawn[1].map_action, MapAction::Show { index: 0 });
        assert_eq!(drawn[0].badge_label.as_deref(), Some("★"));
        assert!(v.surface().banner);
    }

    #[test]
    fn rerunning_a_ranked_search_inserts_one_banner_per_render() {
        let response = SearchResponse::new(
            vec![place("a", true), place("b", false)],
            0.3,
            Some(RankingHint {
                most_probable_id: None,
                next_probable_ids: vec!["b".into()],
            }),
        );
        let rows = merge_response(&response);
        let mut v = view();

        v.show_response(&response, &rows);
        assert_eq!(v.surface().banner_insertions, 1);
        v.show_response(&response, &rows);
        assert_eq!(v.surface().banner_insertions, 2);
        assert!(v.surface().banner);

        let plain = SearchResponse::new(vec![place("c", true)], 0.1, None);
        v.show_response(&plain, &merge_response(&plain));
        assert_eq!(v.surface().banner_insertions, 2);
        assert!(!v.surface().banner);
    }

    #[test]
    fn missing_geometry_is_not_clickable() {
        let response = SearchResponse::new(vec![place("a", false)], 0.1, None);
        let rows = merge_response(&response);
        let mut v = view();
        v.show_response(&response, &rows);
        assert_eq!(v.surface().rows[0].map_action, MapAction::Unavailable);
        assert!(!v.surface().banner);
    }

    #[test]
    fn hierarchy_is_joined_and_empty_stays_empty() {
        let mut r = place("a", false);
        let row = DisplayRow {
            result: &r,
            original_index: 0,
            badge: Badge::None,
        };
        assert_eq!(RowView::from_row(&row, " > ").hierarchy, "France > Île-de-France");

        r.hierarchy.clear();
        let row = DisplayRow {
            result: &r,
            original_index: 0,
            badge: Badge::None,
        };
        assert_eq!(RowView::from_row(&row, " > ").hierarchy, "");
    }

    #[test]
    fn rerender_does_not_accumulate() {
        let response = SearchResponse::new(vec![place("a", true), place("b", false)], 0.1, None);
        let rows = merge_response(&response);
        let mut v = view();
        v.render(&rows);
        v.render(&rows);
        assert_eq!(v.surface().rows.len(), 2);
    }

    #[test]
    fn empty_response_shows_indicator_and_summary() {
        let response = SearchResponse::new(vec![], 0.042, None);
        let mut v = view();
        v.show_response(&response, &[]);
        let s = v.surface();
        assert_eq!(s.panel, PanelState::NoResults);
        assert!(s.rows.is_empty());
        let summary = s.summary.unwrap();
        assert_eq!(summary.count_text(), "0 results found");
        assert_eq!(summary.time_text(), "Query time: 0.04s");
        assert!(!s.info_panel);
    }

    #[test]
    fn rank_badge_label_and_tooltip() {
        let r = place("a", false);
        let row = DisplayRow {
            result: &r,
            original_index: 4,
            badge: Badge::NextProbable(2),
        };
        let view = RowView::from_row(&row, ", ");
        assert_eq!(view.badge_label().as_deref(), Some("2"));
        assert_eq!(view.badge_tooltip().as_deref(), Some("AI Rank #2"));
    }

    #[test]
    fn reset_hides_results_and_shows_info() {
        let mut v = view();
        v.reset();
        assert_eq!(v.surface().panel, PanelState::Hidden);
        assert!(v.surface().info_panel);
    }
}
