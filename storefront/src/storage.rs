//! Local storage access for the pages.
//!
//! Failures are logged and degrade to a guest session; they never reach the UI.

use toskya_session::{BrowserStorage, Role, SessionError, SessionInfo};
use tracing::warn;

/// Read the session once from local storage.
pub fn load_session() -> SessionInfo {
    match BrowserStorage::local().and_then(|store| SessionInfo::load(&store)) {
        Ok(session) => session,
        Err(err) => {
            warn!(%err, "could not read session from storage, continuing as guest");
            SessionInfo::guest()
        }
    }
}

/// Store the username and role returned by a successful login.
pub fn persist_login(username: &str, role: Option<&str>) {
    let session = SessionInfo::new(username, Role::from_stored(role));
    let result: Result<(), SessionError> =
        BrowserStorage::local().and_then(|mut store| session.save(&mut store));
    if let Err(err) = result {
        warn!(%err, "could not persist login");
    }
}

/// Forget the stored session.
pub fn clear_session() {
    if let Err(err) = BrowserStorage::local().and_then(|mut store| SessionInfo::clear(&mut store)) {
        warn!(%err, "could not clear session");
    }
}
