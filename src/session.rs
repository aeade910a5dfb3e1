//! Explicit session state: token and user are read once at sign-in and passed
//! to the gateway, never kept in ambient storage. Teardown is an explicit
//! call, so the reaction to an expired session lives with the caller that
//! owns navigation, not inside the transport layer.

use tracing::info;

use crate::contract::{AuthSession, User};

#[derive(Debug, Clone)]
pub struct SessionContext {
    token: String,
    user: User,
}

impl SessionContext {
    pub fn new(auth: AuthSession) -> Self {
        info!(user_id = auth.user.id, email = %auth.user.email, "session established");
        Self {
            token: auth.access_token,
            user: auth.user,
        }
    }

    /// The bearer token carried on every authenticated call.
    pub fn token(&self) -> &str {
        &self.token
    }

    pub fn user(&self) -> &User {
        &self.user
    }

    /// Ends the session. Consumes the context so no further authenticated
    /// calls can be made with it.
    pub fn teardown(self) {
        info!(user_id = self.user.id, "session torn down");
    }
}
