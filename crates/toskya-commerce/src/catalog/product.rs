//! Product and catalog types.

use crate::catalog::Size;
use crate::ids::ProductId;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// A product on the menu.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    /// Unique product identifier.
    pub id: ProductId,
    /// Product name.
    pub name: String,
    /// Menu description.
    pub description: String,
    /// Base price (the simple size).
    pub price: Money,
    /// Menu category (e.g., "Signature Burgers").
    pub category: String,
    /// Image URL.
    pub image: String,
}

impl Product {
    /// Create a product with an empty description, category and image.
    pub fn new(id: ProductId, name: impl Into<String>, price: Money) -> Self {
        Self {
            id,
            name: name.into(),
            description: String::new(),
            price,
            category: String::new(),
            image: String::new(),
        }
    }

    /// Unit price for a size, or the base price when sizes are not offered.
    pub fn unit_price(&self, size: Option<Size>) -> Money {
        match size {
            Some(size) => self.price.scale_hundredths(size.multiplier_hundredths()),
            None => self.price,
        }
    }
}

/// Read-only, ordered list of menu products.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Build a catalog, keeping the given order.
    pub fn new(products: Vec<Product>) -> Self {
        Self { products }
    }

    /// All products in menu order.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Distinct categories in first-seen order.
    pub fn categories(&self) -> Vec<&str> {
        let mut seen: Vec<&str> = Vec::new();
        for product in &self.products {
            if !seen.contains(&product.category.as_str()) {
                seen.push(&product.category);
            }
        }
        seen
    }

    /// Products of one category, in menu order.
    pub fn in_category<'a>(&'a self, category: &'a str) -> impl Iterator<Item = &'a Product> + 'a {
        self.products.iter().filter(move |p| p.category == category)
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Currency;

    fn burger(id: u32, price: f64, category: &str) -> Product {
        Product {
            category: category.to_string(),
            ..Product::new(ProductId::new(id), format!("Burger {id}"), Money::from_decimal(price, Currency::ARS))
        }
    }

    #[test]
    fn test_unit_price_by_size() {
        let product = burger(1, 8300.0, "Signature Burgers");
        assert_eq!(product.unit_price(None).display(), "$8300.00");
        assert_eq!(product.unit_price(Some(Size::Simple)).display(), "$8300.00");
        assert_eq!(product.unit_price(Some(Size::Doble)).display(), "$9379.00");
        assert_eq!(product.unit_price(Some(Size::Triple)).display(), "$18675.00");
    }

    #[test]
    fn test_catalog_order_and_categories() {
        let catalog = Catalog::new(vec![
            burger(2, 100.0, "Classic Burgers"),
            burger(1, 200.0, "Signature Burgers"),
            burger(3, 300.0, "Signature Burgers"),
        ]);

        assert_eq!(catalog.len(), 3);
        assert_eq!(catalog.products()[0].id, ProductId::new(2));
        assert_eq!(catalog.categories(), vec!["Classic Burgers", "Signature Burgers"]);

        let signature: Vec<u32> = catalog.in_category("Signature Burgers").map(|p| p.id.get()).collect();
        assert_eq!(signature, vec![1, 3]);
        assert_eq!(catalog.in_category("Veggie").count(), 0);
    }
}
