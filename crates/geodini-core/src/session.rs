// crates/geodini-core/src/session.rs
//! The current response and the request generations that guard it.
use crate::model::SearchResponse;
use tracing::{debug, warn};

/// Issued when a search starts; handed back when its response lands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchTicket {
    pub generation: u64,
    pub query: String,
}

/// Session state owned by the top-level controller.
///
/// There is exactly one current response. It is replaced wholesale when a
/// search completes and dropped when the input is cleared.
#[derive(Debug)]
pub struct Session {
    generation: u64,
    current: Option<SearchResponse>,
    discard_stale: bool,
}

impl Session {
    pub fn new(discard_stale: bool) -> Self {
        Self {
            generation: 0,
            current: None,
            discard_stale,
        }
    }

    pub fn begin(&mut self, query: &str) -> SearchTicket {
        self.generation += 1;
        debug!(generation = self.generation, query, "search started");
        SearchTicket {
            generation: self.generation,
            query: query.to_string(),
        }
    }

    /// Whether a landing response for `ticket` should be applied.
    pub fn is_current(&self, ticket: &SearchTicket) -> bool {
        !self.discard_stale || ticket.generation == self.generation
    }

    /// Installs `response` unless it is stale. Returns the installed response.
    pub fn accept(
        &mut self,
        ticket: &SearchTicket,
        response: SearchResponse,
    ) -> Option<&SearchResponse> {
        if !self.is_current(ticket) {
            warn!(
                stale = ticket.generation,
                latest = self.generation,
                query = %ticket.query,
                "discarding stale response"
            );
            return None;
        }
        self.current = Some(response);
        self.current.as_ref()
    }

    /// Drops the current response and orphans any search in flight.
    pub fn invalidate(&mut self) {
        self.generation += 1;
        self.current = None;
    }

    pub fn current(&self) -> Option<&SearchResponse> {
        self.current.as_ref()
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn response(n: usize) -> SearchResponse {
        let results = (0..n)
            .map(|i| crate::SearchResult {
                id: i.to_string(),
                name: String::new(),
                subtype: String::new(),
                country: String::new(),
                hierarchy: vec![],
                geometry: None,
                source_type: None,
            })
            .collect();
        SearchResponse::new(results, 0.0, None)
    }

    #[test]
    fn slow_first_response_is_discarded() {
        let mut session = Session::new(true);
        let first = session.begin("paris");
        let second = session.begin("paris tx");

        assert!(session.accept(&second, response(2)).is_some());
        assert!(session.accept(&first, response(5)).is_none());
        assert_eq!(session.current().unwrap().len(), 2);
    }

    #[test]
    fn last_to_land_wins_when_not_discarding() {
        let mut session = Session::new(false);
        let first = session.begin("paris");
        let second = session.begin("paris tx");

        session.accept(&second, response(2));
        session.accept(&first, response(5));
        assert_eq!(session.current().unwrap().len(), 5);
    }

    #[test]
    fn invalidate_orphans_in_flight_search() {
        let mut session = Session::default();
        let ticket = session.begin("delhi");
        session.invalidate();
        assert!(!session.is_current(&ticket));
        assert!(session.accept(&ticket, response(1)).is_none());
        assert!(session.current().is_none());
    }
}
