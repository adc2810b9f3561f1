//! Shared test helpers
