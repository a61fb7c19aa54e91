//! Cart state and line item types.

use crate::catalog::{Product, Size};
use crate::error::CommerceError;
use crate::ids::ProductId;
use crate::money::{Currency, Money};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Maximum quantity allowed per line item.
pub const MAX_QUANTITY_PER_ITEM: i64 = 9999;

/// Composite identity of a line item: product id plus optional size.
///
/// Renders as `"<id>-<size>"`, or `"<id>"` when sizes are not offered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct LineKey {
    pub product_id: ProductId,
    pub size: Option<Size>,
}

impl LineKey {
    pub fn new(product_id: ProductId, size: Option<Size>) -> Self {
        Self { product_id, size }
    }
}

impl fmt::Display for LineKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.size {
            Some(size) => write!(f, "{}-{}", self.product_id, size),
            None => write!(f, "{}", self.product_id),
        }
    }
}

impl FromStr for LineKey {
    type Err = CommerceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || CommerceError::InvalidLineKey(s.to_string());
        match s.split_once('-') {
            Some((id, size)) => Ok(Self {
                product_id: id.parse().map_err(|_| invalid())?,
                size: Some(size.parse().map_err(|_| invalid())?),
            }),
            None => Ok(Self {
                product_id: s.parse().map_err(|_| invalid())?,
                size: None,
            }),
        }
    }
}

impl TryFrom<String> for LineKey {
    type Error = CommerceError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<LineKey> for String {
    fn from(key: LineKey) -> Self {
        key.to_string()
    }
}

/// Payload of an add-to-cart request: a product merged with its chosen size.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartEntry {
    pub product_id: ProductId,
    pub name: String,
    pub image: String,
    /// Base price before the size multiplier.
    pub price: Money,
    pub size: Option<Size>,
}

impl CartEntry {
    /// Snapshot a product with the selected size (`None` when sizes are off).
    pub fn new(product: &Product, size: Option<Size>) -> Self {
        Self {
            product_id: product.id,
            name: product.name.clone(),
            image: product.image.clone(),
            price: product.price,
            size,
        }
    }

    /// Key of the line item this entry merges into.
    pub fn key(&self) -> LineKey {
        LineKey::new(self.product_id, self.size)
    }
}

/// A line item in the cart.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LineItem {
    /// Composite identity.
    pub key: LineKey,
    /// Product name (denormalized for display).
    pub name: String,
    /// Product image URL.
    pub image: String,
    /// Chosen size, if sizes are offered.
    pub size: Option<Size>,
    /// Base price snapshotted when the item was first added.
    pub price: Money,
    /// Quantity, always in `1..=MAX_QUANTITY_PER_ITEM`.
    pub quantity: i64,
}

impl LineItem {
    pub(crate) fn from_entry(entry: CartEntry) -> Self {
        Self {
            key: entry.key(),
            name: entry.name,
            image: entry.image,
            size: entry.size,
            price: entry.price,
            quantity: 1,
        }
    }

    /// Size multiplier in hundredths (100 without a size).
    pub fn multiplier_hundredths(&self) -> u32 {
        self.size.map_or(100, |s| s.multiplier_hundredths())
    }

    /// Price of one unit: base price times the size multiplier.
    pub fn unit_price(&self) -> Money {
        self.price.scale_hundredths(self.multiplier_hundredths())
    }

    /// Contribution to the cart total: unit price times quantity.
    pub fn line_total(&self) -> Money {
        self.unit_price().saturating_mul(self.quantity)
    }
}

/// Cart contents plus the derived running total.
///
/// `total` always equals the sum of [`LineItem::line_total`] over `items`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartState {
    /// Line items in insertion order, unique by key.
    pub items: Vec<LineItem>,
    /// Sum of line totals.
    pub total: Money,
}

impl CartState {
    /// Create an empty cart priced in `currency`.
    pub fn new(currency: Currency) -> Self {
        Self {
            items: Vec::new(),
            total: Money::zero(currency),
        }
    }

    /// Currency every line item is priced in.
    pub fn currency(&self) -> Currency {
        self.total.currency
    }

    /// Check if cart is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of distinct line items.
    pub fn line_count(&self) -> usize {
        self.items.len()
    }

    /// Get a line item by key.
    pub fn get(&self, key: &LineKey) -> Option<&LineItem> {
        self.items.iter().find(|i| &i.key == key)
    }

    pub(crate) fn get_mut(&mut self, key: &LineKey) -> Option<&mut LineItem> {
        self.items.iter_mut().find(|i| &i.key == key)
    }

    /// Recompute `total` from the item sequence.
    pub(crate) fn recompute_total(&mut self) {
        self.total = Money::sum(self.items.iter().map(LineItem::line_total), self.currency());
    }
}

impl Default for CartState {
    fn default() -> Self {
        Self::new(Currency::default())
    }
}
