//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`auth`, `list`, `matching`) so individual
//! pages can depend on small focused models. Structs hold plain fields;
//! pages wrap them in `RwSignal`s where reactivity is needed.

pub mod auth;
pub mod list;
pub mod matching;
