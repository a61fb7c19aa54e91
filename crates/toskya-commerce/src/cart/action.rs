//! Cart actions and the reducer.

use crate::cart::state::{CartEntry, CartState, LineItem, LineKey, MAX_QUANTITY_PER_ITEM};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use tracing::{debug, warn};

/// A user action on the cart.
///
/// Serialized with a string tag, e.g.
/// `{"type": "REMOVE_ITEM", "payload": "1-simple"}`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "payload", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CartAction {
    /// Add one unit of a product in the chosen size.
    AddItem(CartEntry),
    /// Drop a line item entirely.
    RemoveItem(LineKey),
    /// Set a line item's quantity. Zero or negative removes the item.
    UpdateQuantity {
        #[serde(rename = "uniqueId")]
        key: LineKey,
        /// Anything other than an integer, including a missing field, reads as 0.
        #[serde(default, deserialize_with = "quantity_or_zero")]
        quantity: i64,
    },
}

fn quantity_or_zero<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    match value.as_i64() {
        Some(quantity) => Ok(quantity),
        None => {
            debug!(%value, "malformed quantity read as 0");
            Ok(0)
        }
    }
}

impl CartState {
    /// Apply an action in place.
    ///
    /// Unknown keys are ignored and the total is recomputed from the items
    /// afterwards, whatever the action.
    pub fn apply(&mut self, action: CartAction) {
        match action {
            CartAction::AddItem(entry) => self.add(entry),
            CartAction::RemoveItem(key) => self.remove(&key),
            CartAction::UpdateQuantity { key, quantity } => self.update_quantity(&key, quantity),
        }
        self.recompute_total();
    }

    fn add(&mut self, entry: CartEntry) {
        if entry.price.currency != self.currency() {
            warn!(
                key = %entry.key(),
                expected = %self.currency(),
                got = %entry.price.currency,
                "ignoring add with mismatched currency"
            );
            return;
        }

        if let Some(existing) = self.get_mut(&entry.key()) {
            if existing.quantity >= MAX_QUANTITY_PER_ITEM {
                warn!(key = %existing.key, "line item already at maximum quantity");
                return;
            }
            existing.quantity += 1;
            return;
        }

        self.items.push(LineItem::from_entry(entry));
    }

    fn remove(&mut self, key: &LineKey) {
        let len_before = self.items.len();
        self.items.retain(|i| &i.key != key);
        if self.items.len() == len_before {
            debug!(%key, "remove for unknown line item ignored");
        }
    }

    fn update_quantity(&mut self, key: &LineKey, quantity: i64) {
        if quantity <= 0 {
            self.remove(key);
            return;
        }

        match self.get_mut(key) {
            Some(item) => {
                if quantity > MAX_QUANTITY_PER_ITEM {
                    warn!(%key, quantity, "quantity capped at maximum");
                }
                item.quantity = quantity.min(MAX_QUANTITY_PER_ITEM);
            }
            None => debug!(%key, quantity, "quantity update for unknown line item ignored"),
        }
    }
}

/// Map (state, action) to the next state.
pub fn reduce(mut state: CartState, action: CartAction) -> CartState {
    state.apply(action);
    state
}

/// Apply a string-tagged JSON action.
///
/// Unrecognized action kinds and malformed payloads return `state` unchanged.
pub fn reduce_json(state: CartState, action: &serde_json::Value) -> CartState {
    match CartAction::deserialize(action) {
        Ok(action) => reduce(state, action),
        Err(err) => {
            debug!(%err, "unrecognized cart action ignored");
            state
        }
    }
}
