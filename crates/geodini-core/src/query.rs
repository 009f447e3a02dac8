// crates/geodini-core/src/query.rs
//! Keeps the address bar in step with the search input.
use crate::traits::{AddressBar, ResultSurface};
use crate::view::ResultView;

pub struct QuerySync<A: AddressBar> {
    bar: A,
    param: String,
}

impl<A: AddressBar> QuerySync<A> {
    pub fn new(bar: A, param: impl Into<String>) -> Self {
        Self {
            bar,
            param: param.into(),
        }
    }

    pub fn address_bar(&self) -> &A {
        &self.bar
    }

    /// Query present in the address bar at load time, if any.
    pub fn set_from_url(&self) -> Option<String> {
        self.bar
            .query_param(&self.param)
            .map(|q| q.trim().to_string())
            .filter(|q| !q.is_empty())
    }

    /// Writes `query` into the address bar in place; an empty query removes
    /// the parameter.
    pub fn reflect(&mut self, query: &str) {
        let query = query.trim();
        let value = (!query.is_empty()).then_some(query);
        self.bar.replace_query_param(&self.param, value);
    }

    /// Input emptied: pre-search view, no parameter.
    pub fn on_input_cleared<S: ResultSurface>(&mut self, view: &mut ResultView<S>) {
        view.reset();
        self.bar.replace_query_param(&self.param, None);
    }
}
