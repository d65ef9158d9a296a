//! Reusable UI components for the ticket list page.

pub mod filter_bar;
pub mod pager;
pub mod ticket_card;
