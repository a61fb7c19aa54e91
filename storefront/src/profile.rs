//! Role-dependent profile page.

use leptos::prelude::*;
use toskya_session::{ProfileAction, SessionInfo};
use tracing::{debug, info};

use crate::app::AuthState;
use crate::storage;

/// Route wrapper: reads the stored session once and wires logout.
#[component]
pub fn ProfileRoute() -> impl IntoView {
    let auth = expect_context::<AuthState>();
    let session = RwSignal::new(storage::load_session());

    let on_logout = Callback::new(move |_: ()| {
        info!("logging out");
        storage::clear_session();
        session.set(SessionInfo::guest());
        auth.logged_in.set(false);
        auth.username.set(None);
    });

    move || view! { <ProfilePage session=session.get() on_logout=on_logout/> }
}

/// Shows the welcome line and the actions the stored role unlocks.
///
/// Display only. Nothing here is enforced.
#[component]
pub fn ProfilePage(session: SessionInfo, on_logout: Callback<()>) -> impl IntoView {
    let welcome = format!("Bienvenido, {}", session.display_name());

    let buttons = session
        .role
        .profile_actions()
        .into_iter()
        .map(|action| {
            view! {
                <button
                    class="btn"
                    on:click=move |_| match action {
                        ProfileAction::Logout => on_logout.run(()),
                        other => debug!(?other, "profile action selected"),
                    }
                >
                    {action.label()}
                </button>
            }
        })
        .collect_view();

    view! {
        <div class="container mx-auto p-4 pt-20">
            <h1 class="text-2xl font-bold mb-4">"Perfil de Usuario"</h1>
            <div class="bg-white p-4 shadow-md rounded-md">
                <h2 class="text-xl font-semibold mb-4 text-gray-900">{welcome}</h2>
                <div class="space-y-4 flex flex-col">{buttons}</div>
            </div>
        </div>
    }
}
