// crates/geodini-core/src/controller.rs
//! Top-level controller: one session, one view, one map, one address bar.
use crate::config::ClientConfig;
use crate::error::Result;
use crate::map::MapViewController;
use crate::model::SearchResponse;
use crate::query::QuerySync;
use crate::ranking::merge_response;
use crate::session::{SearchTicket, Session};
use crate::traits::{AddressBar, DrawerPanel, MapWidget, ResultSurface};
use crate::view::ResultView;
use tracing::{debug, warn};

/// What happened to a landed search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Completion {
    /// Rendered; `rows` is the number of rows drawn.
    Applied { rows: usize },
    /// A newer search was started (or the input cleared) in the meantime.
    Stale,
}

/// Owns every piece of client state. Shells hold one of these and forward
/// user events to it; nothing lives in globals.
pub struct SearchController<S, W, D, A>
where
    S: ResultSurface,
    W: MapWidget,
    D: DrawerPanel,
    A: AddressBar,
{
    session: Session,
    view: ResultView<S>,
    map: MapViewController<W, D>,
    query: QuerySync<A>,
}

impl<S, W, D, A> SearchController<S, W, D, A>
where
    S: ResultSurface,
    W: MapWidget,
    D: DrawerPanel,
    A: AddressBar,
{
    pub fn new(config: &ClientConfig, surface: S, widget: W, drawer: D, bar: A) -> Self {
        Self {
            session: Session::new(config.discard_stale_responses),
            view: ResultView::new(surface, config.hierarchy_separator.clone()),
            map: MapViewController::new(widget, drawer, config.drawer_transition_ms),
            query: QuerySync::new(bar, config.query_param.clone()),
        }
    }

    /// Starts a search for `text`. Blank text resets the view instead and
    /// returns `None`.
    pub fn submit(&mut self, text: &str) -> Option<SearchTicket> {
        let query = text.trim();
        if query.is_empty() {
            self.input_changed("");
            return None;
        }
        self.query.reflect(query);
        Some(self.session.begin(query))
    }

    /// Applies the outcome of the search identified by `ticket`.
    ///
    /// A failure is returned for the caller to surface and leaves the
    /// previous results in place. Stale outcomes, successful or not, are
    /// dropped.
    pub fn complete(
        &mut self,
        ticket: &SearchTicket,
        outcome: Result<SearchResponse>,
    ) -> Result<Completion> {
        if !self.session.is_current(ticket) {
            if let Err(e) = &outcome {
                warn!(query = %ticket.query, error = %e, "stale search failed");
            }
            return Ok(Completion::Stale);
        }

        let response = outcome?;
        let Some(response) = self.session.accept(ticket, response) else {
            return Ok(Completion::Stale);
        };

        let rows = merge_response(response);
        debug!(
            query = %ticket.query,
            results = response.len(),
            ranked = response.ranking().is_some(),
            "rendering response"
        );
        self.view.show_response(response, &rows);
        Ok(Completion::Applied { rows: rows.len() })
    }

    /// "Show on map" for the row carrying `original_index`.
    pub fn show_on_map(&mut self, original_index: usize) -> Result<()> {
        let results = self
            .session
            .current()
            .map(SearchResponse::results)
            .unwrap_or_default();
        self.map.show_geometry(results, original_index)
    }

    pub fn close_map(&mut self) {
        self.map.close();
    }

    /// Input events. Only an empty input does anything.
    pub fn input_changed(&mut self, text: &str) {
        if text.is_empty() {
            self.session.invalidate();
            self.query.on_input_cleared(&mut self.view);
        }
    }

    /// Starts the search named in the address bar, if there is one.
    pub fn load_from_url(&mut self) -> Option<SearchTicket> {
        let query = self.query.set_from_url()?;
        self.submit(&query)
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn view(&self) -> &ResultView<S> {
        &self.view
    }

    pub fn map(&self) -> &MapViewController<W, D> {
        &self.map
    }

    pub fn query(&self) -> &QuerySync<A> {
        &self.query
    }
}
