//! Domain types and logic for the Toskya storefront.
//!
//! - **Catalog**: products and portion sizes
//! - **Cart**: cart state and the reducer that drives it
//! - **Checkout**: order summary text and the messaging hand-off link
//! - **Config**: store configuration loaded from TOML
//!
//! # Example
//!
//! ```rust
//! use toskya_commerce::prelude::*;
//!
//! let product = Product::new(
//!     ProductId::new(1),
//!     "Toskya clasica",
//!     Money::from_decimal(7500.0, Currency::ARS),
//! );
//!
//! let state = reduce(
//!     CartState::new(Currency::ARS),
//!     CartAction::AddItem(CartEntry::new(&product, Some(Size::Simple))),
//! );
//!
//! assert_eq!(state.total.display(), "$7500.00");
//! ```

pub mod error;
pub mod ids;
pub mod money;

pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod config;

pub use error::CommerceError;
pub use ids::ProductId;
pub use money::{Currency, Money};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::CommerceError;
    pub use crate::ids::ProductId;
    pub use crate::money::{Currency, Money};

    // Catalog
    pub use crate::catalog::{Catalog, Product, Size};

    // Cart
    pub use crate::cart::{reduce, reduce_json, CartAction, CartEntry, CartState, LineItem, LineKey};

    // Checkout
    pub use crate::checkout::{handoff_link, order_message, order_summary, CheckoutConfig};

    // Config
    pub use crate::config::{MenuConfig, StoreConfig, StoreInfo};
}
