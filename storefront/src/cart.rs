//! Cart context and the cart drawer.

use leptos::prelude::*;
use toskya_commerce::cart::{CartAction, CartState, LineItem};
use toskya_commerce::checkout::handoff_link;
use toskya_commerce::money::Currency;
use tracing::{debug, error};

use crate::app::StoreContext;

/// The page's single cart. Every mutation goes through [`CartContext::dispatch`].
#[derive(Clone, Copy)]
pub struct CartContext {
    pub state: RwSignal<CartState>,
}

impl CartContext {
    pub fn new(currency: Currency) -> Self {
        Self {
            state: RwSignal::new(CartState::new(currency)),
        }
    }

    /// Run the reducer on the current state.
    pub fn dispatch(&self, action: CartAction) {
        debug!(?action, "cart action");
        self.state.update(|state| state.apply(action));
    }
}

/// Open the hand-off link for the current cart in a new tab.
fn checkout(cart: CartContext, store: StoreContext) {
    let link = cart
        .state
        .with_untracked(|state| store.with(|config| handoff_link(&config.checkout, state)));

    match link {
        Ok(Some(url)) => {
            if let Err(err) = window().open_with_url_and_target(url.as_str(), "_blank") {
                error!(?err, "could not open hand-off link");
            }
        }
        Ok(None) => debug!("checkout on empty cart ignored"),
        Err(err) => error!(%err, "could not build hand-off link"),
    }
}

// ============================================================================
// Cart Components
// ============================================================================

#[component]
pub fn CartPanel() -> impl IntoView {
    let cart = expect_context::<CartContext>();
    let store = expect_context::<StoreContext>();
    let (open, set_open) = signal(false);

    let line_count = move || cart.state.with(|s| s.line_count());
    let is_empty = move || cart.state.with(|s| s.is_empty());
    let total = move || cart.state.with(|s| s.total.display());

    view! {
        <div class="relative">
            <button
                on:click=move |_| set_open.update(|o| *o = !*o)
                class="fixed top-4 right-4 bg-primary text-white p-3 rounded-full z-50 hover:bg-primary/90 transition-all duration-300 shadow-lg"
                aria-label="Carrito"
            >
                <span class="text-xl">"🛒"</span>
                <Show when=move || { line_count() > 0 }>
                    <span class="absolute -top-2 -right-2 bg-destructive text-white rounded-full w-6 h-6 flex items-center justify-center text-sm animate-pulse">
                        {move || line_count().to_string()}
                    </span>
                </Show>
            </button>

            <Show when=move || open.get()>
                <div
                    class="fixed inset-0 bg-black bg-opacity-50 z-40 backdrop-blur-sm transition-all duration-300"
                    on:click=move |_| set_open.set(false)
                ></div>
                <div class="fixed top-0 right-0 h-full w-full sm:w-96 bg-white shadow-lg p-6 overflow-y-auto z-50 transform transition-transform duration-300 ease-in-out">
                    <div class="flex justify-between items-center mb-4 border-b pb-4">
                        <h2 class="text-2xl font-bold text-gray-800">"Your Cart"</h2>
                        <button
                            on:click=move |_| set_open.set(false)
                            class="text-gray-500 hover:text-gray-700 text-xl"
                        >
                            "✕"
                        </button>
                    </div>
                    <Show when=move || !is_empty() fallback=|| view! { <EmptyCart/> }>
                        <For
                            each=move || cart.state.get().items
                            key=|item| item.key
                            children=move |item: LineItem| view! { <CartLine item=item/> }
                        />
                        <div class="mt-6 border-t pt-4">
                            <div class="flex justify-between mb-4">
                                <span class="text-xl font-bold text-gray-800">"Total:"</span>
                                <span class="text-xl font-bold text-primary">{total}</span>
                            </div>
                            <button
                                on:click=move |_| checkout(cart, store)
                                class="w-full bg-primary text-white py-3 rounded-lg hover:bg-primary/90 transition-all duration-300 shadow-md"
                            >
                                "Proceed to Checkout"
                            </button>
                        </div>
                    </Show>
                </div>
            </Show>
        </div>
    }
}

#[component]
fn EmptyCart() -> impl IntoView {
    view! {
        <div class="flex flex-col items-center justify-center h-64">
            <span class="text-4xl text-gray-400 mb-4">"🛒"</span>
            <p class="text-gray-500 text-lg">"Your cart is empty"</p>
        </div>
    }
}

#[component]
fn CartLine(item: LineItem) -> impl IntoView {
    let cart = expect_context::<CartContext>();
    let key = item.key;
    let quantity = move || cart.state.with(|s| s.get(&key).map_or(0, |i| i.quantity));
    let current = move || cart.state.with_untracked(|s| s.get(&key).map_or(0, |i| i.quantity));
    let line_total = move || {
        cart.state
            .with(|s| s.get(&key).map(|i| i.line_total().display()))
            .unwrap_or_default()
    };

    view! {
        <div class="flex items-center mb-4 border-b pb-4 hover:bg-gray-50 transition-colors duration-200 p-2 rounded-lg">
            <img
                src=item.image.clone()
                alt=item.name.clone()
                class="w-20 h-20 object-cover rounded-lg shadow-sm"
            />
            <div class="ml-4 flex-1">
                <h3 class="font-semibold text-gray-800">{item.name.clone()}</h3>
                {item.size.map(|size| view! {
                    <p class="text-sm text-gray-600 capitalize">{size.as_str()}</p>
                })}
                <div class="flex items-center mt-2 bg-gray-100 rounded-lg inline-flex">
                    <button
                        on:click=move |_| cart.dispatch(CartAction::UpdateQuantity { key, quantity: current() - 1 })
                        class="bg-gray-200 px-3 py-1 rounded-l-lg hover:bg-gray-300 transition-colors"
                        disabled=move || quantity() <= 1
                    >
                        "-"
                    </button>
                    <span class="mx-4 font-medium text-gray-800">{move || quantity().to_string()}</span>
                    <button
                        on:click=move |_| cart.dispatch(CartAction::UpdateQuantity { key, quantity: current() + 1 })
                        class="bg-gray-200 px-3 py-1 rounded-r-lg hover:bg-gray-300 transition-colors"
                    >
                        "+"
                    </button>
                </div>
            </div>
            <div class="ml-4 text-right">
                <p class="font-bold text-gray-800">{line_total}</p>
                <button
                    on:click=move |_| cart.dispatch(CartAction::RemoveItem(key))
                    class="text-destructive mt-2 hover:text-destructive/80 transition-colors"
                    aria-label="Quitar"
                >
                    "🗑"
                </button>
            </div>
        </div>
    }
}
