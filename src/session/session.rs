use std::sync::Arc;

use anyhow::Result;
use tracing::info;

use super::store::{SessionStore, ACCESS_TOKEN, USER_EMAIL, USER_ID};

/// Navigation side effect performed after logout.
///
/// The host environment supplies the real implementation; tests substitute a
/// recording fake.
pub trait Navigator: Send + Sync {
    fn navigate(&self, path: &str);
}

/// Authentication queries and logout over an injected session store.
pub struct Session {
    store: Arc<dyn SessionStore>,
    navigator: Arc<dyn Navigator>,
    login_path: String,
}

impl Session {
    pub fn new(store: Arc<dyn SessionStore>, navigator: Arc<dyn Navigator>) -> Self {
        Self {
            store,
            navigator,
            login_path: crate::config::DEFAULT_LOGIN_PATH.to_string(),
        }
    }

    pub fn with_login_path(mut self, path: impl Into<String>) -> Self {
        self.login_path = path.into();
        self
    }

    /// Check whether a non-empty access token is stored. Pure predicate.
    pub fn is_authenticated(&self) -> bool {
        matches!(self.store.get(ACCESS_TOKEN), Ok(Some(token)) if !token.is_empty())
    }

    /// Stored (email, user id) pair, if both are present.
    pub fn identity(&self) -> Result<Option<(String, String)>> {
        let email = self.store.get(USER_EMAIL)?;
        let user_id = self.store.get(USER_ID)?;
        Ok(email.zip(user_id))
    }

    /// Clear the identity fields and navigate to the login page.
    ///
    /// Removal is sequential, not transactional: the token goes first, so a
    /// failure part-way still leaves the session unauthenticated. Terminal
    /// for the current page context.
    pub fn logout(&self) -> Result<()> {
        self.store.remove(ACCESS_TOKEN)?;
        self.store.remove(USER_EMAIL)?;
        self.store.remove(USER_ID)?;
        info!("session cleared, redirecting to login");
        self.navigator.navigate(&self.login_path);
        Ok(())
    }
}
