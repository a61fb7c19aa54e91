//! Session info read from client storage.

use crate::role::Role;
use crate::store::KeyValueStore;
use crate::SessionError;

/// Storage key holding the logged-in username.
pub const USERNAME_KEY: &str = "username";

/// Storage key holding the role string.
pub const ROLE_KEY: &str = "role";

/// Who is browsing, as far as the client knows.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SessionInfo {
    /// Username, if someone logged in.
    pub username: Option<String>,
    /// Role, `Guest` when absent or unknown.
    pub role: Role,
}

impl SessionInfo {
    /// A visitor with no stored session.
    pub fn guest() -> Self {
        Self::default()
    }

    /// Create session info for a logged-in user.
    pub fn new(username: impl Into<String>, role: Role) -> Self {
        Self {
            username: Some(username.into()),
            role,
        }
    }

    /// Read `username` and `role` from a store.
    pub fn load(store: &impl KeyValueStore) -> Result<Self, SessionError> {
        let username = store.get(USERNAME_KEY)?.filter(|u| !u.is_empty());
        let role = Role::from_stored(store.get(ROLE_KEY)?.as_deref());
        Ok(Self { username, role })
    }

    /// Write this session into a store. A guest role clears the role key.
    pub fn save(&self, store: &mut impl KeyValueStore) -> Result<(), SessionError> {
        match &self.username {
            Some(username) => store.set(USERNAME_KEY, username)?,
            None => store.remove(USERNAME_KEY)?,
        }
        match self.role.as_str() {
            Some(role) => store.set(ROLE_KEY, role),
            None => store.remove(ROLE_KEY),
        }
    }

    /// Remove both session keys.
    pub fn clear(store: &mut impl KeyValueStore) -> Result<(), SessionError> {
        store.remove(USERNAME_KEY)?;
        store.remove(ROLE_KEY)
    }

    /// Whether a username is present.
    pub fn is_logged_in(&self) -> bool {
        self.username.is_some()
    }

    /// Name shown in greetings; empty for guests.
    pub fn display_name(&self) -> &str {
        self.username.as_deref().unwrap_or("")
    }
}
