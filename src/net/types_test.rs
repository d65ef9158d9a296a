use super::*;

#[test]
fn ticket_page_deserializes_backend_payload() {
    let body = r#"{
        "tickets": [
            {
                "id": "t-100",
                "subject": "Cannot sign in",
                "status": "open",
                "priority": "high",
                "requester": "Sam Park",
                "updated_at": "2026-08-21T09:30:00Z"
            }
        ],
        "total": 41
    }"#;

    let page: TicketPage = serde_json::from_str(body).unwrap();
    assert_eq!(page.total, 41);
    assert_eq!(page.tickets.len(), 1);
    assert_eq!(page.tickets[0].subject, "Cannot sign in");
    assert_eq!(page.tickets[0].status, "open");
}

#[test]
fn login_credentials_serialize_with_expected_keys() {
    let credentials = LoginCredentials {
        email: "dana@example.com".to_owned(),
        password: "hunter2".to_owned(),
    };
    let body = serde_json::to_value(&credentials).unwrap();
    assert_eq!(body["email"], "dana@example.com");
    assert_eq!(body["password"], "hunter2");
}
