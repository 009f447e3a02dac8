// crates/geodini-core/src/traits.rs
//! The surfaces the core drives.
//!
//! The browser crate implements these over the DOM and Leaflet, the CLI over
//! the terminal, and the tests over in-memory recorders. The core never holds
//! a DOM node, a map handle or a socket itself.
use crate::geometry::{Bounds, Geometry};
use crate::view::{PanelState, ResultsSummary, RowView};

/// Where result rows are drawn.
pub trait ResultSurface {
    /// Drops every rendered row.
    fn clear_rows(&mut self);

    /// Appends one row after the ones already rendered.
    fn append_row(&mut self, row: &RowView<'_>);

    fn set_summary(&mut self, summary: &ResultsSummary);

    fn set_panel(&mut self, state: PanelState);

    /// Shows or removes the "ranked by AI" banner. Showing twice must not
    /// stack two banners.
    fn set_ranking_banner(&mut self, visible: bool);

    /// The introductory panel shown before the first search.
    fn set_info_panel(&mut self, visible: bool);
}

/// The map widget inside the drawer.
pub trait MapWidget {
    /// Handle to a rendered overlay, used to remove it later.
    type Overlay;

    fn add_overlay(&mut self, geometry: &Geometry) -> Self::Overlay;

    fn remove_overlay(&mut self, overlay: Self::Overlay);

    /// Fits the viewport to `bounds`. The widget keeps them as the bounds of
    /// the active overlay until that overlay is removed.
    fn fit_bounds(&mut self, bounds: Bounds);

    /// Re-measures the container after `delay_ms`, then re-fits to the bounds
    /// of whatever overlay is active when the delay runs out.
    ///
    /// A hidden container reports zero size, so any fit done while the
    /// drawer was closed has to be repeated once it is visible. The bounds
    /// are read late because another overlay may replace the current one
    /// before the delay is over.
    fn schedule_remeasure(&mut self, delay_ms: u32);
}

/// The slide-in panel hosting the map.
pub trait DrawerPanel {
    fn show(&mut self);
    fn hide(&mut self);
    fn set_title(&mut self, title: &str);
}

/// The page address bar.
pub trait AddressBar {
    fn query_param(&self, name: &str) -> Option<String>;

    /// Sets (`Some`) or deletes (`None`) a parameter, replacing the current
    /// history entry instead of pushing a new one.
    fn replace_query_param(&mut self, name: &str, value: Option<&str>);
}

/// The in-flight cue.
pub trait LoadingIndicator {
    fn show(&self);
    fn hide(&self);
}

/// Owned guard around a [`LoadingIndicator`]: shown on acquire, hidden on
/// drop, so every exit path of a search clears it.
pub struct LoadingGuard<L: LoadingIndicator> {
    indicator: L,
}

impl<L: LoadingIndicator> LoadingGuard<L> {
    pub fn acquire(indicator: L) -> Self {
        indicator.show();
        Self { indicator }
    }
}

impl<L: LoadingIndicator> Drop for LoadingGuard<L> {
    fn drop(&mut self) {
        self.indicator.hide();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    #[derive(Clone, Default)]
    struct Spinner(Rc<Cell<i32>>);

    impl LoadingIndicator for Spinner {
        fn show(&self) {
            self.0.set(self.0.get() + 1);
        }
        fn hide(&self) {
            self.0.set(self.0.get() - 1);
        }
    }

    fn failing_search(spinner: Spinner) -> Result<(), String> {
        let _guard = LoadingGuard::acquire(spinner.clone());
        assert_eq!(spinner.0.get(), 1);
        Err("connection reset".into())
    }

    #[test]
    fn guard_hides_on_error_path() {
        let spinner = Spinner::default();
        assert!(failing_search(spinner.clone()).is_err());
        assert_eq!(spinner.0.get(), 0);
    }

    #[test]
    fn guard_hides_on_unwind() {
        let spinner = Spinner::default();
        let inner = spinner.clone();
        let outcome = std::panic::catch_unwind(std::panic::AssertUnwindSafe(move || {
            let _guard = LoadingGuard::acquire(inner);
            panic!("boom");
        }));
        assert!(outcome.is_err());
        assert_eq!(spinner.0.get(), 0);
    }
}
