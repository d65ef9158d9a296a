#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::net::types::SessionUser;

/// Session state tracking the current user and the in-flight probe.
///
/// `loading` starts `true` while the session endpoint is being probed so
/// pages do not redirect before the answer arrives.
#[derive(Clone, Debug, Default)]
pub struct SessionState {
    pub user: Option<SessionUser>,
    pub loading: bool,
}

impl SessionState {
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }
}
