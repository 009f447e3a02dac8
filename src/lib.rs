//! geodini-rs
//!
//! Umbrella crate for the Geodini search client. Everything lives in
//! [`geodini_core`]; this crate re-exports it so the demos in `demos/` can be
//! run from the workspace root with `cargo run --example rank_fixture`.
pub use geodini_core::*;
