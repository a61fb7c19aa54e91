//! Shopping cart module.
//!
//! Contains the cart state, its line items, and the reducer that applies
//! user actions to it.

mod action;
mod state;

pub use action::{reduce, reduce_json, CartAction};
pub use state::{CartEntry, CartState, LineItem, LineKey, MAX_QUANTITY_PER_ITEM};
