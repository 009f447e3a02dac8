// crates/geodini-core/src/map.rs
//! Drawer state machine and the single active overlay.
use crate::error::{GeodiniError, Result};
use crate::model::SearchResult;
use crate::traits::{DrawerPanel, MapWidget};
use serde::Serialize;
use tracing::{debug, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum DrawerState {
    Closed,
    Open,
}

/// Owns the map widget (created once, reused across searches) and the drawer
/// hosting it. At most one overlay is on the map at any time.
pub struct MapViewController<W: MapWidget, D: DrawerPanel> {
    widget: W,
    drawer: D,
    state: DrawerState,
    overlay: Option<W::Overlay>,
    remeasure_delay_ms: u32,
}

impl<W: MapWidget, D: DrawerPanel> MapViewController<W, D> {
    pub fn new(widget: W, drawer: D, remeasure_delay_ms: u32) -> Self {
        Self {
            widget,
            drawer,
            state: DrawerState::Closed,
            overlay: None,
            remeasure_delay_ms,
        }
    }

    pub fn state(&self) -> DrawerState {
        self.state
    }

    pub fn has_overlay(&self) -> bool {
        self.overlay.is_some()
    }

    pub fn widget(&self) -> &W {
        &self.widget
    }

    pub fn drawer(&self) -> &D {
        &self.drawer
    }

    /// Draws `results[index]` and opens the drawer on it.
    ///
    /// `index` is an original (backend) index. A missing result or a result
    /// without geometry is reported as an error and changes nothing: the
    /// drawer keeps its state and the previous overlay stays.
    pub fn show_geometry(&mut self, results: &[SearchResult], index: usize) -> Result<()> {
        let result = results.get(index).ok_or(GeodiniError::NoSuchResult(index))?;
        let Some(geometry) = result.geometry.as_ref() else {
            warn!(index, id = %result.id, "result has no geometry");
            return Err(GeodiniError::MissingGeometry { index });
        };

        self.clear_overlay();

        let bounds = geometry.bounds();
        let handle = self.widget.add_overlay(geometry);
        if let Some(b) = bounds {
            self.widget.fit_bounds(b);
        }
        self.overlay = Some(handle);

        self.drawer.set_title(&result.title());
        debug!(index, id = %result.id, ?bounds, "overlay shown");
        self.open();
        Ok(())
    }

    /// Opens the drawer. The re-measure is scheduled only on the
    /// `Closed -> Open` transition.
    pub fn open(&mut self) {
        if self.state == DrawerState::Open {
            return;
        }
        self.drawer.show();
        self.state = DrawerState::Open;
        self.widget.schedule_remeasure(self.remeasure_delay_ms);
    }

    /// Hides the drawer. Map and overlay are kept for the next
    /// [`show_geometry`](Self::show_geometry).
    pub fn close(&mut self) {
        if self.state == DrawerState::Closed {
            return;
        }
        self.drawer.hide();
        self.state = DrawerState::Closed;
    }

    fn clear_overlay(&mut self) {
        if let Some(previous) = self.overlay.take() {
            self.widget.remove_overlay(previous);
        }
    }
}
