//! Terminal renderings of the results table and the map drawer.
use geodini_core::prelude::*;
use std::io::{self, Write};

const HEADERS: [&str; 6] = ["", "Name", "Type", "Country", "Hierarchy", "Map"];

/// Collects what the view draws, then prints it as an aligned table.
#[derive(Debug)]
pub struct TerminalSurface {
    rows: Vec<[String; 6]>,
    summary: Option<ResultsSummary>,
    panel: PanelState,
    banner: bool,
}

impl Default for TerminalSurface {
    fn default() -> Self {
        Self {
            rows: Vec::new(),
            summary: None,
            panel: PanelState::Hidden,
            banner: false,
        }
    }
}

impl ResultSurface for TerminalSurface {
    fn clear_rows(&mut self) {
        self.rows.clear();
    }

    fn append_row(&mut self, row: &RowView<'_>) {
        let map = match row.map_action {
            MapAction::Show { index } => index.to_string(),
            MapAction::Unavailable => "-".to_string(),
        };
        self.rows.push([
            row.badge_label().unwrap_or_default(),
            row.name.to_string(),
            row.subtype.to_string(),
            row.country.to_string(),
            row.hierarchy.clone(),
            map,
        ]);
    }

    fn set_summary(&mut self, summary: &ResultsSummary) {
        self.summary = Some(*summary);
    }

    fn set_panel(&mut self, state: PanelState) {
        self.panel = state;
    }

    fn set_ranking_banner(&mut self, visible: bool) {
        self.banner = visible;
    }

    // The terminal has no intro panel.
    fn set_info_panel(&mut self, _visible: bool) {}
}

impl TerminalSurface {
    pub fn write_to(&self, out: &mut impl Write) -> io::Result<()> {
        if let Some(summary) = &self.summary {
            writeln!(out, "{} | {}", summary.count_text(), summary.time_text())?;
        }
        match self.panel {
            PanelState::Hidden => return Ok(()),
            PanelState::NoResults => {
                writeln!(out, "No results found.")?;
                return Ok(());
            }
            PanelState::Table => {}
        }
        if self.banner {
            writeln!(
                out,
                "AI Ranked: ★ marks the most probable match, numbers the next probable ones."
            )?;
        }

        let mut widths = HEADERS.map(|h| h.chars().count());
        for row in &self.rows {
            for (w, cell) in widths.iter_mut().zip(row) {
                *w = (*w).max(cell.chars().count());
            }
        }

        write_line(out, &HEADERS.map(str::to_string), &widths)?;
        for row in &self.rows {
            write_line(out, row, &widths)?;
        }
        Ok(())
    }
}

fn write_line(out: &mut impl Write, cells: &[String; 6], widths: &[usize; 6]) -> io::Result<()> {
    let line = cells
        .iter()
        .zip(widths)
        .map(|(cell, w)| {
            let pad = w.saturating_sub(cell.chars().count());
            format!("{cell}{}", " ".repeat(pad))
        })
        .collect::<Vec<_>>()
        .join("  ");
    writeln!(out, "{}", line.trim_end())
}

/// Records the fit instead of drawing tiles.
#[derive(Debug, Default)]
pub struct TextMap {
    pub geometry_kind: Option<String>,
    pub fitted: Option<Bounds>,
}

impl MapWidget for TextMap {
    type Overlay = ();

    fn add_overlay(&mut self, geometry: &Geometry) {
        self.geometry_kind = geometry.kind().map(str::to_string);
    }

    fn remove_overlay(&mut self, _overlay: ()) {
        self.geometry_kind = None;
        self.fitted = None;
    }

    fn fit_bounds(&mut self, bounds: Bounds) {
        self.fitted = Some(bounds);
    }

    // Nothing to measure in a terminal.
    fn schedule_remeasure(&mut self, _delay_ms: u32) {}
}

#[derive(Debug, Default)]
pub struct TextDrawer {
    pub title: Option<String>,
    pub open: bool,
}

impl DrawerPanel for TextDrawer {
    fn show(&mut self) {
        self.open = true;
    }

    fn hide(&mut self) {
        self.open = false;
    }

    fn set_title(&mut self, title: &str) {
        self.title = Some(title.to_string());
    }
}

impl TextDrawer {
    pub fn write_to(&self, map: &TextMap, out: &mut impl Write) -> io::Result<()> {
        if !self.open {
            return Ok(());
        }
        if let Some(title) = &self.title {
            writeln!(out, "{title}")?;
        }
        if let Some(kind) = &map.geometry_kind {
            writeln!(out, "Geometry: {kind}")?;
        }
        match map.fitted {
            Some(b) if b.is_degenerate() => {
                writeln!(out, "Position: [{:.5}, {:.5}]", b.min_lat, b.min_lon)
            }
            Some(b) => writeln!(
                out,
                "Bounds: SW [{:.5}, {:.5}]  NE [{:.5}, {:.5}]",
                b.min_lat, b.min_lon, b.max_lat, b.max_lon
            ),
            None => writeln!(out, "Bounds: (empty geometry)"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use geodini_core::{merge_response, MapViewController, ResultView};

    const BODY: &str = r#"{
        "results": [
            {"id": "a", "name": "Delhi", "subtype": "region", "country": "IN",
             "hierarchy": ["India", "Delhi"], "geometry": {"type": "Point", "coordinates": [77.2, 28.6]}},
            {"id": "b", "name": "New Delhi", "subtype": "locality", "country": "IN",
             "hierarchy": ["India", "Delhi", "New Delhi"], "geometry": null}
        ],
        "time_taken": 0.75,
        "most_probable": {"id": "b"}
    }"#;

    fn rendered(response: &SearchResponse) -> String {
        let mut view = ResultView::new(TerminalSurface::default(), " > ");
        view.show_response(response, &merge_response(response));
        let mut out = Vec::new();
        view.surface().write_to(&mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn table_in_ranked_order() {
        let response = SearchResponse::from_json(BODY).unwrap();
        let text = rendered(&response);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "2 results found | Query time: 0.75s");
        assert!(lines[1].starts_with("AI Ranked"));
        assert!(lines[3].starts_with("★  New Delhi"));
        assert!(lines[3].ends_with('-'));
        assert!(lines[4].contains("India > Delhi"));
        assert!(lines[4].ends_with('0'));
    }

    #[test]
    fn raw_order_has_no_banner() {
        let response = SearchResponse::from_json(BODY).unwrap().without_ranking();
        let text = rendered(&response);
        assert!(!text.contains("AI Ranked"));
        assert!(text.lines().nth(2).unwrap().contains("Delhi"));
    }

    #[test]
    fn empty_results() {
        let response = SearchResponse::from_json(r#"{"results": [], "time_taken": 0.1}"#).unwrap();
        let text = rendered(&response);
        assert_eq!(text, "0 results found | Query time: 0.10s\nNo results found.\n");
    }

    fn drawn(results: &[SearchResult], index: usize) -> String {
        let mut map = MapViewController::new(TextMap::default(), TextDrawer::default(), 0);
        map.show_geometry(results, index).unwrap();
        let mut out = Vec::new();
        map.drawer().write_to(map.widget(), &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn drawer_prints_a_point_as_one_position() {
        let response = SearchResponse::from_json(BODY).unwrap();
        let text = drawn(response.results(), 0);
        assert_eq!(
            text,
            "Delhi (region, IN)\nGeometry: Point\nPosition: [28.60000, 77.20000]\n"
        );
    }

    #[test]
    fn drawer_prints_area_bounds() {
        let body = r#"{"results": [{"id": "p", "name": "Oaxaca", "subtype": "region",
            "country": "MX", "geometry": {"type": "Polygon",
            "coordinates": [[[-98.5, 15.6], [-93.8, 15.6], [-93.8, 18.7], [-98.5, 15.6]]]}}]}"#;
        let response = SearchResponse::from_json(body).unwrap();
        let text = drawn(response.results(), 0);
        assert!(text.starts_with("Oaxaca (region, MX)\nGeometry: Polygon\n"));
        assert!(text.contains("SW [15.60000, -98.50000]  NE [18.70000, -93.80000]"));
    }
}
