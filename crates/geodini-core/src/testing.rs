// crates/geodini-core/src/testing.rs
//! In-memory surfaces for unit tests.
use crate::geometry::{Bounds, Geometry};
use crate::traits::{AddressBar, DrawerPanel, MapWidget, ResultSurface};
use crate::view::{MapAction, PanelState, ResultsSummary, RowView};
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq)]
pub struct DrawnRow {
    pub badge_label: Option<String>,
    pub name: String,
    pub hierarchy: String,
    pub map_action: MapAction,
}

#[derive(Debug)]
pub struct RecordingSurface {
    pub rows: Vec<DrawnRow>,
    pub summary: Option<ResultsSummary>,
    pub panel: PanelState,
    pub banner: bool,
    pub banner_insertions: usize,
    pub info_panel: bool,
}

impl Default for RecordingSurface {
    fn default() -> Self {
        Self {
            rows: Vec::new(),
            summary: None,
            panel: PanelState::Hidden,
            banner: false,
            banner_insertions: 0,
            info_panel: true,
        }
    }
}

impl ResultSurface for RecordingSurface {
    fn clear_rows(&mut self) {
        self.rows.clear();
    }

    fn append_row(&mut self, row: &RowView<'_>) {
        self.rows.push(DrawnRow {
            badge_label: row.badge_label(),
            name: row.name.to_string(),
            hierarchy: row.hierarchy.clone(),
            map_action: row.map_action,
        });
    }

    fn set_summary(&mut self, summary: &ResultsSummary) {
        self.summary = Some(*summary);
    }

    fn set_panel(&mut self, state: PanelState) {
        self.panel = state;
    }

    fn set_ranking_banner(&mut self, visible: bool) {
        if visible {
            self.banner_insertions += 1;
        }
        self.banner = visible;
    }

    fn set_info_panel(&mut self, visible: bool) {
        self.info_panel = visible;
    }
}

#[derive(Debug, Default)]
pub struct RecordingMap {
    next_id: usize,
    /// Overlay ids currently on the map.
    pub overlays: Vec<usize>,
    /// Every fit, immediate or deferred, in order.
    pub fitted: Vec<Bounds>,
    /// Bounds of the active overlay, as a deferred re-fit would read them.
    pub active_bounds: Option<Bounds>,
    /// Delays of re-measures scheduled and not fired yet.
    pub pending: Vec<u32>,
}

impl RecordingMap {
    /// Runs every pending re-measure, as the timer would.
    pub fn fire_remeasures(&mut self) {
        for _ in std::mem::take(&mut self.pending) {
            if let Some(bounds) = self.active_bounds {
                self.fitted.push(bounds);
            }
        }
    }
}

impl MapWidget for RecordingMap {
    type Overlay = usize;

    fn add_overlay(&mut self, _geometry: &Geometry) -> usize {
        self.next_id += 1;
        self.overlays.push(self.next_id);
        self.next_id
    }

    fn remove_overlay(&mut self, overlay: usize) {
        self.overlays.retain(|id| *id != overlay);
        self.active_bounds = None;
    }

    fn fit_bounds(&mut self, bounds: Bounds) {
        self.fitted.push(bounds);
        self.active_bounds = Some(bounds);
    }

    fn schedule_remeasure(&mut self, delay_ms: u32) {
        self.pending.push(delay_ms);
    }
}

#[derive(Debug, Default)]
pub struct RecordingDrawer {
    pub open: bool,
    pub title: Option<String>,
}

impl DrawerPanel for RecordingDrawer {
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

#[derive(Debug, Default)]
pub struct MemoryAddressBar {
    pub params: BTreeMap<String, String>,
    pub replacements: usize,
}

impl MemoryAddressBar {
    pub fn with_param(name: &str, value: &str) -> Self {
        let mut bar = Self::default();
        bar.params.insert(name.to_string(), value.to_string());
        bar
    }
}

impl AddressBar for MemoryAddressBar {
    fn query_param(&self, name: &str) -> Option<String> {
        self.params.get(name).cloned()
    }

    fn replace_query_param(&mut self, name: &str, value: Option<&str>) {
        self.replacements += 1;
        match value {
            Some(v) => {
                self.params.insert(name.to_string(), v.to_string());
            }
            None => {
                self.params.remove(name);
            }
        }
    }
}
