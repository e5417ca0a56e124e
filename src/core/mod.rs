//! In-memory contact log.

/// Ordered, position-addressed contact store.
pub mod store;
