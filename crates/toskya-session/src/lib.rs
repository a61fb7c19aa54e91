//! Session info for the Toskya storefront.
//!
//! The login flow writes a username and a role string into browser local
//! storage. This crate reads them back into a [`SessionInfo`] and maps the
//! role to the profile actions a page should offer.
//!
//! Nothing here is an authorization boundary: the role is whatever the
//! client stored.

mod error;
mod role;
mod session;
mod store;

pub use error::SessionError;
pub use role::{ProfileAction, Role};
pub use session::{SessionInfo, ROLE_KEY, USERNAME_KEY};
pub use store::{BrowserStorage, KeyValueStore, MemoryStore};
