//! Toskya Burger storefront
//!
//! Client-side rendered Leptos app with:
//! - A burger menu with size selection and a cart drawer
//! - Checkout through a pre-filled messaging link
//! - A role-dependent profile page
//! - A login page backed by the token API

pub mod app;
pub mod cart;
pub mod login;
pub mod menu;
pub mod profile;
pub mod storage;

use toskya_commerce::{config::StoreConfig, CommerceError};

/// Store configuration bundled into the binary.
pub const STORE_CONFIG: &str = include_str!("../config/store.toml");

/// Parse the bundled store configuration.
pub fn load_config() -> Result<StoreConfig, CommerceError> {
    StoreConfig::from_toml_str(STORE_CONFIG)
}

/// Install panic and log hooks, then mount the app on `<body>`.
pub fn mount() {
    console_error_panic_hook::set_once();
    #[cfg(target_arch = "wasm32")]
    tracing_wasm::set_as_global_default();

    match load_config() {
        Ok(config) => {
            tracing::debug!(products = config.catalog.len(), "store configuration loaded");
            leptos::mount::mount_to_body(move || {
                use leptos::prelude::*;
                view! { <app::App config=config.clone()/> }
            });
        }
        Err(err) => tracing::error!(%err, "store configuration is invalid"),
    }
}
