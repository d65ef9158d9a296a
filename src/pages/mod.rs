//! Top-level routed pages.

pub mod login;
pub mod tickets;
