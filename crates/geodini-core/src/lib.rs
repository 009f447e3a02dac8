// crates/geodini-core/src/lib.rs

pub mod common; // Raw wire types
pub mod config;
pub mod controller;
pub mod error;
pub mod geometry;
pub mod map;
pub mod model;
pub mod query;
pub mod ranking;
pub mod session;
pub mod traits;
pub mod view;

#[cfg(feature = "http")]
pub mod client;

#[cfg(test)]
pub(crate) mod testing;

// Re-exports
pub use crate::config::ClientConfig;
pub use crate::controller::{Completion, SearchController};
pub use crate::error::{GeodiniError, Result};
pub use crate::geometry::{Bounds, Geometry};
pub use crate::map::{DrawerState, MapViewController};
pub use crate::model::{QueryInterpretation, RankingHint, SearchResponse, SearchResult};
pub use crate::query::QuerySync;
pub use crate::ranking::{merge, merge_response, Badge, DisplayRow};
pub use crate::session::{SearchTicket, Session};
pub use crate::view::{MapAction, PanelState, ResultView, ResultsSummary, RowView};

#[cfg(feature = "http")]
pub use crate::client::SearchClient;

pub mod prelude {
    //! Everything a shell needs to implement the surfaces and drive a
    //! [`SearchController`](crate::SearchController).
    pub use crate::traits::{
        AddressBar, DrawerPanel, LoadingGuard, LoadingIndicator, MapWidget, ResultSurface,
    };
    pub use crate::{
        Badge, Bounds, ClientConfig, Completion, DisplayRow, Geometry, GeodiniError, MapAction,
        PanelState, ResultsSummary, RowView, SearchController, SearchResponse, SearchResult,
        SearchTicket,
    };
}
