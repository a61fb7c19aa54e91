//! Store configuration.
//!
//! The storefront embeds a TOML file with the store identity, menu options,
//! checkout hand-off settings, and the product list.

use crate::catalog::{Catalog, Product};
use crate::checkout::CheckoutConfig;
use crate::error::CommerceError;
use crate::ids::ProductId;
use crate::money::{Currency, Money};
use serde::Deserialize;
use std::collections::HashSet;

/// Store identity shown in the hero section and page title.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct StoreInfo {
    pub name: String,
    #[serde(default)]
    pub tagline: String,
    #[serde(default)]
    pub hero_image: String,
    #[serde(default)]
    pub logo: String,
}

/// Menu options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuConfig {
    /// Offer the simple/doble/triple size selector.
    pub variants: bool,
    /// Currency every price is in.
    pub currency: Currency,
}

impl Default for MenuConfig {
    fn default() -> Self {
        Self {
            variants: true,
            currency: Currency::default(),
        }
    }
}

/// Validated store configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct StoreConfig {
    pub store: StoreInfo,
    pub menu: MenuConfig,
    pub checkout: CheckoutConfig,
    pub catalog: Catalog,
}

#[derive(Debug, Deserialize)]
struct RawConfig {
    store: StoreInfo,
    #[serde(default)]
    menu: RawMenu,
    checkout: CheckoutConfig,
    #[serde(default)]
    products: Vec<RawProduct>,
}

#[derive(Debug, Deserialize)]
struct RawMenu {
    #[serde(default = "default_variants")]
    variants: bool,
    #[serde(default = "default_currency_code")]
    currency: String,
}

impl Default for RawMenu {
    fn default() -> Self {
        Self {
            variants: default_variants(),
            currency: default_currency_code(),
        }
    }
}

fn default_variants() -> bool {
    true
}

fn default_currency_code() -> String {
    Currency::default().code().to_string()
}

#[derive(Debug, Deserialize)]
struct RawProduct {
    id: ProductId,
    name: String,
    #[serde(default)]
    description: String,
    price: f64,
    #[serde(default)]
    category: String,
    #[serde(default)]
    image: String,
}

impl StoreConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml_str(content: &str) -> Result<Self, CommerceError> {
        let raw: RawConfig = toml::from_str(content)?;

        let currency = Currency::from_code(&raw.menu.currency).ok_or_else(|| {
            CommerceError::Config(format!("unknown currency: {}", raw.menu.currency))
        })?;

        raw.checkout.validate()?;
        if raw.checkout.contact_id.trim().is_empty() {
            return Err(CommerceError::Config("checkout.contact_id is empty".to_string()));
        }

        let mut seen = HashSet::new();
        let mut products = Vec::with_capacity(raw.products.len());
        for p in raw.products {
            if !seen.insert(p.id) {
                return Err(CommerceError::Config(format!("duplicate product id: {}", p.id)));
            }
            if !p.price.is_finite() || p.price < 0.0 {
                return Err(CommerceError::Config(format!(
                    "product {} has invalid price {}",
                    p.id, p.price
                )));
            }
            products.push(Product {
                id: p.id,
                name: p.name,
                description: p.description,
                price: Money::from_decimal(p.price, currency),
                category: p.category,
                image: p.image,
            });
        }

        Ok(Self {
            store: raw.store,
            menu: MenuConfig {
                variants: raw.menu.variants,
                currency,
            },
            checkout: raw.checkout,
            catalog: Catalog::new(products),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MINIMAL: &str = r#"
        [store]
        name = "Toskya Burger"

        [checkout]
        contact_id = "5492281378685"

        [[products]]
        id = 1
        name = "Toskya clasica"
        price = 7500.0
        category = "Classic Burgers"
    "#;

    #[test]
    fn test_minimal_config_uses_defaults() {
        let config = StoreConfig::from_toml_str(MINIMAL).unwrap();
        assert_eq!(config.store.name, "Toskya Burger");
        assert_eq!(config.menu, MenuConfig::default());
        assert_eq!(config.checkout.messaging_url, "https://wa.me");
        assert_eq!(config.checkout.greeting, "Hola, quiero hacer un pedido:");
        assert_eq!(config.catalog.len(), 1);
        assert_eq!(config.catalog.products()[0].price.display(), "$7500.00");
    }

    #[test]
    fn test_menu_overrides() {
        let content = format!("{MINIMAL}\n[menu]\nvariants = false\ncurrency = \"usd\"\n");
        let config = StoreConfig::from_toml_str(&content).unwrap();
        assert!(!config.menu.variants);
        assert_eq!(config.menu.currency, Currency::USD);
        assert_eq!(config.catalog.products()[0].price.currency, Currency::USD);
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let content = format!("{MINIMAL}\n[[products]]\nid = 1\nname = \"Again\"\nprice = 1.0\n");
        let err = StoreConfig::from_toml_str(&content).unwrap_err();
        assert!(err.to_string().contains("duplicate product id: 1"));
    }

    #[test]
    fn test_unknown_currency_rejected() {
        let content = format!("{MINIMAL}\n[menu]\ncurrency = \"BTC\"\n");
        assert!(matches!(
            StoreConfig::from_toml_str(&content),
            Err(CommerceError::Config(_))
        ));
    }

    #[test]
    fn test_negative_price_rejected() {
        let content = MINIMAL.replace("price = 7500.0", "price = -1.0");
        assert!(StoreConfig::from_toml_str(&content).is_err());
    }

    #[test]
    fn test_malformed_toml_rejected() {
        assert!(matches!(
            StoreConfig::from_toml_str("[store"),
            Err(CommerceError::Config(_))
        ));
    }

    #[test]
    fn test_bad_messaging_url_rejected() {
        let content = MINIMAL.replace(
            "contact_id = \"5492281378685\"",
            "contact_id = \"5492281378685\"\nmessaging_url = \"nope\"",
        );
        assert!(matches!(
            StoreConfig::from_toml_str(&content),
            Err(CommerceError::InvalidHandoffUrl(_))
        ));
    }
}
