//! Application root, shared contexts and layout.

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::components::{Route, Router, Routes, A};
use leptos_router::path;
use toskya_commerce::config::StoreConfig;

use crate::login::{LoginPage, RegisterPage};
use crate::menu::StorefrontPage;
use crate::profile::ProfileRoute;
use crate::storage;

// ============================================================================
// Contexts
// ============================================================================

/// Store configuration, provided once at the root.
#[derive(Clone, Copy)]
pub struct StoreContext(pub StoredValue<StoreConfig>);

impl StoreContext {
    pub fn with<R>(&self, f: impl FnOnce(&StoreConfig) -> R) -> R {
        self.0.with_value(f)
    }
}

/// Navigation login state, seeded from local storage.
#[derive(Clone, Copy)]
pub struct AuthState {
    pub logged_in: RwSignal<bool>,
    pub username: RwSignal<Option<String>>,
}

// ============================================================================
// App Component
// ============================================================================

#[component]
pub fn App(config: StoreConfig) -> impl IntoView {
    provide_meta_context();

    let title = config.store.name.clone();
    provide_context(StoreContext(StoredValue::new(config)));

    let session = storage::load_session();
    let auth = AuthState {
        logged_in: RwSignal::new(session.is_logged_in()),
        username: RwSignal::new(session.username),
    };
    provide_context(auth);

    let fallback = || view! { <NotFound/> }.into_view();

    view! {
        <Meta name="description" content="Hamburguesas ahumadas, pedidos por WhatsApp"/>
        <Title text=title/>

        <Router>
            <Header/>
            <main>
                <Routes fallback>
                    <Route path=path!("") view=StorefrontPage/>
                    <Route path=path!("/perfil") view=ProfileRoute/>
                    <Route
                        path=path!("/login")
                        view=move || view! {
                            <LoginPage
                                set_logged_in=auth.logged_in.write_only()
                                set_username_nav=auth.username.write_only()
                            />
                        }
                    />
                    <Route path=path!("/register") view=RegisterPage/>
                    <Route path=path!("/*any") view=NotFound/>
                </Routes>
            </main>
        </Router>
    }
}

// ============================================================================
// Layout Components
// ============================================================================

#[component]
fn Header() -> impl IntoView {
    let store = expect_context::<StoreContext>();
    let auth = expect_context::<AuthState>();
    let name = store.with(|c| c.store.name.clone());

    view! {
        <header class="fixed top-0 inset-x-0 z-30 flex justify-center gap-6 py-4 text-white pointer-events-none">
            <nav class="flex gap-6 pointer-events-auto">
                <A href="/">{name}</A>
                <A href="/perfil">"Perfil"</A>
                <Show
                    when=move || auth.logged_in.get()
                    fallback=|| view! { <A href="/login">"Ingresar"</A> }
                >
                    <span>{move || auth.username.get().unwrap_or_default()}</span>
                </Show>
            </nav>
        </header>
    }
}

/// 404 page
#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="text-center p-16">
            <h1 class="text-4xl font-bold">"404"</h1>
            <p>"Página no encontrada"</p>
            <a href="/">"Volver al menú"</a>
        </div>
    }
}
