//! Storefront page: hero, menu grid, product cards and theme toggle.

use leptos::prelude::*;
use toskya_commerce::cart::{CartAction, CartEntry};
use toskya_commerce::catalog::{Product, Size};
use tracing::debug;

use crate::app::StoreContext;
use crate::cart::{CartContext, CartPanel};

// ============================================================================
// Page Shell
// ============================================================================

/// Owns the cart for the page session and hands it to descendants.
#[component]
pub fn StorefrontPage() -> impl IntoView {
    let store = expect_context::<StoreContext>();
    let currency = store.with(|c| c.menu.currency);
    provide_context(CartContext::new(currency));

    let (dark, set_dark) = signal(true);

    view! {
        <div class:dark=move || dark.get()>
            <div class="min-h-screen bg-black text-white">
                <ThemeToggle dark=dark set_dark=set_dark/>
                <HeroSection/>
                <MenuSection/>
                <CartPanel/>
            </div>
        </div>
    }
}

#[component]
fn ThemeToggle(dark: ReadSignal<bool>, set_dark: WriteSignal<bool>) -> impl IntoView {
    view! {
        <button
            on:click=move |_| set_dark.update(|d| *d = !*d)
            class="fixed top-4 left-4 bg-primary text-white p-3 rounded-full z-50"
            aria-label="Cambiar tema"
        >
            {move || if dark.get() { "☀" } else { "☾" }}
        </button>
    }
}

// ============================================================================
// Sections
// ============================================================================

#[component]
fn HeroSection() -> impl IntoView {
    let store = expect_context::<StoreContext>();
    let info = store.with(|c| c.store.clone());

    view! {
        <div class="relative h-screen bg-black">
            <div class="absolute inset-0">
                <img
                    src=info.hero_image
                    alt="Hero background"
                    class="w-full h-full object-cover opacity-50"
                />
            </div>
            <div class="relative z-10 h-full flex flex-col items-center justify-center text-white text-center px-4">
                <img src=info.logo alt=format!("{} logo", info.name) class="w-32 h-32 rounded-full mb-6"/>
                <h1 class="text-5xl font-bold mb-4">{info.name.clone()}</h1>
                <p class="text-2xl mb-8">{info.tagline}</p>
                <a
                    href="#menu"
                    class="bg-primary hover:bg-primary/90 text-white font-bold py-3 px-8 rounded-lg transition-all"
                >
                    "View Menu"
                </a>
            </div>
        </div>
    }
}

#[component]
fn MenuSection() -> impl IntoView {
    let store = expect_context::<StoreContext>();
    let cart = expect_context::<CartContext>();
    let (variants, sections) = store.with(|c| {
        let sections: Vec<(String, Vec<Product>)> = c
            .catalog
            .categories()
            .into_iter()
            .map(|category| (category.to_string(), c.catalog.in_category(category).cloned().collect()))
            .collect();
        (c.menu.variants, sections)
    });

    let on_add = Callback::new(move |entry: CartEntry| cart.dispatch(CartAction::AddItem(entry)));

    view! {
        <div id="menu" class="container mx-auto px-4 py-12">
            <h2 class="text-3xl font-bold mb-8">"Our Menu"</h2>
            {sections
                .into_iter()
                .map(|(category, products)| {
                    let heading = (!category.is_empty())
                        .then(|| view! { <h3 class="text-2xl font-semibold mb-6">{category}</h3> });
                    view! {
                        <section class="mb-12">
                            {heading}
                            <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-8">
                                {products
                                    .into_iter()
                                    .map(|product| view! { <ProductCard product=product variants=variants on_add=on_add/> })
                                    .collect_view()}
                            </div>
                        </section>
                    }
                })
                .collect_view()}
        </div>
    }
}

// ============================================================================
// Product Components
// ============================================================================

/// One menu item. With `variants` on, keeps its own selected size.
#[component]
pub fn ProductCard(product: Product, variants: bool, on_add: Callback<CartEntry>) -> impl IntoView {
    let (size, set_size) = signal(Size::default());
    let selected = move || variants.then(|| size.get());

    let base = product.clone();
    let unit_price = move || base.unit_price(selected()).display();

    let entry_product = product.clone();
    let add = move |_| {
        let size = variants.then(|| size.get_untracked());
        on_add.run(CartEntry::new(&entry_product, size));
    };

    let selector = variants.then(|| {
        view! {
            <div class="mb-4">
                <select
                    prop:value=move || size.get().as_str()
                    on:change={move |ev| match event_target_value(&ev).parse::<Size>() {
                        Ok(choice) => set_size.set(choice),
                        Err(err) => debug!(%err, "ignoring size selection"),
                    }}
                    class="w-full p-2 border rounded-lg mb-2 text-gray-800"
                >
                    {Size::ALL
                        .iter()
                        .map(|s| view! { <option value=s.as_str()>{s.label()}</option> })
                        .collect_view()}
                </select>
            </div>
        }
    });

    view! {
        <div class="bg-white rounded-lg shadow-lg overflow-hidden border-2 border-gray-200 hover:border-primary transition-all duration-300">
            <img src=product.image.clone() alt=product.name.clone() class="w-full h-48 object-cover"/>
            <div class="p-4">
                <h3 class="text-xl font-semibold mb-2 text-gray-900">{product.name.clone()}</h3>
                <p class="text-accent mb-4">{product.description.clone()}</p>
                {selector}
                <div class="flex justify-between items-center">
                    <span class="text-lg font-bold text-gray-900">{unit_price}</span>
                    <button
                        on:click=add
                        class="bg-primary text-white px-4 py-2 rounded hover:bg-primary/90 transition-all"
                    >
                        "Add to Cart"
                    </button>
                </div>
            </div>
        </div>
    }
}
