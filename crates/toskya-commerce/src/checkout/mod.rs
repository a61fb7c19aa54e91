//! Checkout module.
//!
//! Turns the cart into order text and a pre-filled messaging link. There is
//! no order API: the link is the whole checkout.

mod handoff;
mod summary;

pub use handoff::{handoff_link, CheckoutConfig};
pub use summary::{order_message, order_summary};
