//! Network layer: serde types shared with the backend and thin REST
//! helpers over the configured session and ticket endpoints.

pub mod api;
pub mod types;
