//! geodini-cli
//! ===========
//!
//! Command-line client for the Geodini natural-language geocoding API.
//!
//! This crate primarily provides a binary (`geodini`). We include a small
//! library target so that docs.rs renders a documentation page and shows this
//! overview.
//!
//! Quick start
//! -----------
//!
//! ```text
//! cargo install geodini-cli
//! geodini search London in Canada
//! geodini search --raw --json Springfield
//! geodini show 1 the other London
//! ```
//!
//! For programmatic access to ranking and the view state machine, use the
//! `geodini-core` crate directly.
//!
//! Links
//! -----
//! - Core crate: <https://docs.rs/geodini-core>
//!
#![cfg_attr(docsrs, feature(doc_cfg))]

// This library target intentionally exposes no API; the binary is the primary
// deliverable.
