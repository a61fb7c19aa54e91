//! Messaging hand-off link.

use crate::cart::CartState;
use crate::checkout::order_message;
use crate::error::CommerceError;
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use serde::{Deserialize, Serialize};
use url::Url;

/// Bytes escaped in the `text` value: everything except
/// `A-Z a-z 0-9 - _ . ! ~ * ( )`. `'` is escaped too, since the URL
/// parser would escape it in a query anyway.
const TEXT_VALUE: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'(')
    .remove(b')');

/// Where checkout hands the order off to.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CheckoutConfig {
    /// Base URL of the messaging service.
    #[serde(default = "default_messaging_url")]
    pub messaging_url: String,
    /// Contact the order is addressed to, appended as a path segment.
    pub contact_id: String,
    /// First line of every order message.
    #[serde(default = "default_greeting")]
    pub greeting: String,
}

fn default_messaging_url() -> String {
    "https://wa.me".to_string()
}

fn default_greeting() -> String {
    "Hola, quiero hacer un pedido:".to_string()
}

impl CheckoutConfig {
    /// Create a config for a contact with the default service and greeting.
    pub fn new(contact_id: impl Into<String>) -> Self {
        Self {
            messaging_url: default_messaging_url(),
            contact_id: contact_id.into(),
            greeting: default_greeting(),
        }
    }

    /// Check that the base URL can carry a contact path.
    pub fn validate(&self) -> Result<(), CommerceError> {
        self.contact_url().map(|_| ())
    }

    fn contact_url(&self) -> Result<Url, CommerceError> {
        let mut url = Url::parse(&self.messaging_url)?;
        url.path_segments_mut()
            .map_err(|_| {
                CommerceError::InvalidHandoffUrl(format!(
                    "{} cannot carry a contact path",
                    self.messaging_url
                ))
            })?
            .pop_if_empty()
            .push(&self.contact_id);
        Ok(url)
    }
}

/// Build `<messaging url>/<contact id>?text=<encoded order message>`.
///
/// Spaces encode as `%20` and newlines as `%0A`. Returns `Ok(None)` for an
/// empty cart.
pub fn handoff_link(config: &CheckoutConfig, state: &CartState) -> Result<Option<Url>, CommerceError> {
    let Some(message) = order_message(&config.greeting, state) else {
        return Ok(None);
    };

    let mut url = config.contact_url()?;
    let text = utf8_percent_encode(&message, TEXT_VALUE);
    url.set_query(Some(&format!("text={text}")));
    Ok(Some(url))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cart::{CartAction, CartEntry};
    use crate::catalog::{Product, Size};
    use crate::ids::ProductId;
    use crate::money::{Currency, Money};

    fn cart_with_one_burger() -> CartState {
        let product = Product::new(ProductId::new(1), "Toskya clasica", Money::from_decimal(7500.0, Currency::ARS));
        let mut state = CartState::default();
        state.apply(CartAction::AddItem(CartEntry::new(&product, Some(Size::Simple))));
        state
    }

    fn text_param(url: &Url) -> Option<String> {
        url.query_pairs()
            .find(|(k, _)| k == "text")
            .map(|(_, v)| v.into_owned())
    }

    #[test]
    fn test_empty_cart_produces_no_link() {
        let config = CheckoutConfig::new("5492281378685");
        assert_eq!(handoff_link(&config, &CartState::default()).unwrap(), None);
    }

    #[test]
    fn test_link_targets_contact() {
        let config = CheckoutConfig::new("5492281378685");
        let url = handoff_link(&config, &cart_with_one_burger()).unwrap().unwrap();

        assert_eq!(url.host_str(), Some("wa.me"));
        assert_eq!(url.path(), "/5492281378685");
        assert!(url.as_str().starts_with("https://wa.me/5492281378685?text="));
    }

    #[test]
    fn test_link_text_decodes_to_message() {
        let config = CheckoutConfig::new("5492281378685");
        let state = cart_with_one_burger();
        let url = handoff_link(&config, &state).unwrap().unwrap();

        assert_eq!(
            text_param(&url).as_deref(),
            Some("Hola, quiero hacer un pedido:\n\n1x Toskya clasica (simple) - $7500.00\n\nTotal: $7500.00")
        );
        assert!(!url.as_str().contains('\n'));
    }

    #[test]
    fn test_link_percent_encodes_text() {
        let config = CheckoutConfig::new("5492281378685");
        let url = handoff_link(&config, &cart_with_one_burger()).unwrap().unwrap();

        assert_eq!(
            url.as_str(),
            "https://wa.me/5492281378685?text=Hola%2C%20quiero%20hacer%20un%20pedido%3A%0A%0A\
             1x%20Toskya%20clasica%20(simple)%20-%20%247500.00%0A%0ATotal%3A%20%247500.00"
        );
        assert!(!url.as_str().contains('+'));
    }

    #[test]
    fn test_link_escapes_reserved_characters() {
        let product = Product::new(ProductId::new(7), "Doble & Queso + 'Bacon'", Money::from_decimal(10.0, Currency::ARS));
        let mut state = CartState::default();
        state.apply(CartAction::AddItem(CartEntry::new(&product, None)));

        let config = CheckoutConfig::new("5492281378685");
        let url = handoff_link(&config, &state).unwrap().unwrap();

        assert!(url.as_str().contains("Doble%20%26%20Queso%20%2B%20%27Bacon%27"));
        assert_eq!(
            text_param(&url).as_deref(),
            Some("Hola, quiero hacer un pedido:\n\n1x Doble & Queso + 'Bacon' - $10.00\n\nTotal: $10.00")
        );
    }

    #[test]
    fn test_base_url_with_path() {
        let config = CheckoutConfig {
            messaging_url: "https://chat.example.com/send/".to_string(),
            contact_id: "shop".to_string(),
            greeting: "Pedido:".to_string(),
        };
        let url = handoff_link(&config, &cart_with_one_burger()).unwrap().unwrap();
        assert_eq!(url.path(), "/send/shop");
    }

    #[test]
    fn test_invalid_base_url() {
        let mut config = CheckoutConfig::new("5492281378685");
        config.messaging_url = "not a url".to_string();
        assert!(matches!(
            handoff_link(&config, &cart_with_one_burger()),
            Err(CommerceError::InvalidHandoffUrl(_))
        ));

        config.messaging_url = "mailto:orders@example.com".to_string();
        assert!(config.validate().is_err());
    }
}
