use super::*;

#[test]
fn session_state_default_has_no_user() {
    let state = SessionState::default();
    assert!(state.user.is_none());
    assert!(!state.loading);
    assert!(!state.is_authenticated());
}

#[test]
fn session_state_with_user_is_authenticated() {
    let state = SessionState {
        user: Some(SessionUser {
            id: "u-1".to_owned(),
            name: "Dana".to_owned(),
            email: "dana@example.com".to_owned(),
        }),
        loading: false,
    };
    assert!(state.is_authenticated());
}
