//! One row in the ticket list.

use leptos::prelude::*;

use crate::net::types::Ticket;

/// A clickable row showing subject, requester, status, and priority.
#[component]
pub fn TicketCard(ticket: Ticket) -> impl IntoView {
    let href = format!("/ticket/{}", ticket.id);
    let status_class = format!("ticket-card__status ticket-card__status--{}", ticket.status);
    let priority_class = format!("ticket-card__priority ticket-card__priority--{}", ticket.priority);

    view! {
        <a class="ticket-card" href=href>
            <span class="ticket-card__subject">{ticket.subject}</span>
            <span class="ticket-card__requester">{ticket.requester}</span>
            <span class=status_class>{ticket.status}</span>
            <span class=priority_class>{ticket.priority}</span>
            <span class="ticket-card__updated">{ticket.updated_at}</span>
        </a>
    }
}
