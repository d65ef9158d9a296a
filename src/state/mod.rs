//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`filters`, `session`) so individual
//! components can depend on small focused models. Each model is owned by
//! the root `App` component and provided as an `RwSignal` context, not
//! reachable as a process global; all mutation happens on the single UI
//! event loop.

pub mod filters;
pub mod session;
