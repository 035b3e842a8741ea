//! Dark Voyages domain core.
//!
//! Pure, side-effect-free queries over the static destination catalog and
//! subscription tier table, plus the rule-based concierge responder. This
//! crate has no async, no I/O, and no internal dependencies, so it can be
//! used by the API layer and any future CLI tooling alike.
//!
//! The catalog and tier tables are `&'static` configuration data: initialized
//! at compile time, never mutated, and safe for unsynchronized concurrent
//! reads from any number of callers.

pub mod catalog;
pub mod concierge;
pub mod data;
pub mod destination;
pub mod error;
pub mod rank;
pub mod tier;
