//! REST plumbing: endpoint table, wire types, and request helpers.

pub mod api;
pub mod endpoints;
pub mod types;
