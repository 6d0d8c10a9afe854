//! Browser glue helpers.
//!
//! Everything touching `window`/`localStorage` lives here behind the
//! `hydrate` feature so the crate builds and tests natively.

pub mod browser;
pub mod session;
