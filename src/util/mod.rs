//! Browser-facing utilities.

pub mod theme;
