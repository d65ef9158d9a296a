//! Serde types shared with the ticket backend.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

/// Authenticated user as returned by the session `user` endpoint.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct SessionUser {
    pub id: String,
    pub name: String,
    pub email: String,
}

/// Credentials posted to the session `login` endpoint.
#[derive(Clone, Debug, serde::Serialize)]
pub struct LoginCredentials {
    pub email: String,
    pub password: String,
}

/// One ticket row in the list view.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Ticket {
    pub id: String,
    pub subject: String,
    pub status: String,
    pub priority: String,
    pub requester: String,
    pub updated_at: String,
}

/// One page of tickets plus the total match count for pagination.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct TicketPage {
    pub tickets: Vec<Ticket>,
    pub total: u64,
}
