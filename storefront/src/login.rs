//! Login and register pages and the form they share.

use gloo_net::http::Request;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{info, warn};

use crate::storage;

/// Token endpoint used by the login page.
pub const TOKEN_ROUTE: &str = "/api/token/";

/// Registration endpoint.
pub const REGISTER_ROUTE: &str = "/api/user/register/";

/// What a submitted form does on success.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    /// Store the session and report the username.
    Login,
    /// Create the account and send the user to the login page.
    Register,
}

impl FormMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            FormMode::Login => "login",
            FormMode::Register => "register",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            FormMode::Login => "Iniciar sesión",
            FormMode::Register => "Registrarse",
        }
    }
}

/// Errors while talking to the auth API.
#[derive(Debug, Error)]
pub enum AuthFormError {
    #[error("request failed: {0}")]
    Request(#[from] gloo_net::Error),

    #[error("server rejected credentials (status {0})")]
    Rejected(u16),
}

impl AuthFormError {
    /// Line shown under the form.
    pub fn user_message(&self) -> &'static str {
        match self {
            AuthFormError::Request(_) => "No se pudo contactar al servidor",
            AuthFormError::Rejected(_) => "Usuario o contraseña incorrectos",
        }
    }
}

#[derive(Serialize)]
struct Credentials {
    username: String,
    password: String,
}

/// Fields of the auth response this app reads. Everything else is ignored.
#[derive(Debug, Default, Deserialize)]
struct AuthResponse {
    #[serde(default)]
    role: Option<String>,
}

async fn post_credentials(route: &str, creds: &Credentials) -> Result<AuthResponse, AuthFormError> {
    let response = Request::post(route).json(creds)?.send().await?;
    if !response.ok() {
        return Err(AuthFormError::Rejected(response.status()));
    }
    // Register endpoints may answer with an empty body.
    Ok(response.json::<AuthResponse>().await.unwrap_or_default())
}

// ============================================================================
// Pages
// ============================================================================

#[component]
pub fn LoginPage(
    set_logged_in: WriteSignal<bool>,
    set_username_nav: WriteSignal<Option<String>>,
) -> impl IntoView {
    let on_success = Callback::new(move |username: String| {
        set_logged_in.set(true);
        set_username_nav.set(Some(username));
    });

    view! { <AuthForm route=TOKEN_ROUTE mode=FormMode::Login on_success=on_success/> }
}

#[component]
pub fn RegisterPage() -> impl IntoView {
    view! { <AuthForm route=REGISTER_ROUTE mode=FormMode::Register/> }
}

// ============================================================================
// Form
// ============================================================================

/// Username/password form posting JSON to `route`.
#[component]
pub fn AuthForm(
    route: &'static str,
    mode: FormMode,
    #[prop(optional)] on_success: Option<Callback<String>>,
) -> impl IntoView {
    let (username, set_username) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (pending, set_pending) = signal(false);
    let (error, set_error) = signal(None::<&'static str>);
    let navigate = use_navigate();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if pending.get_untracked() {
            return;
        }
        let creds = Credentials {
            username: username.get_untracked().trim().to_string(),
            password: password.get_untracked(),
        };
        set_pending.set(true);
        set_error.set(None);

        let navigate = navigate.clone();
        spawn_local(async move {
            let result = post_credentials(route, &creds).await;
            set_pending.set(false);
            match result {
                Ok(response) => match mode {
                    FormMode::Login => {
                        info!(username = %creds.username, "logged in");
                        storage::persist_login(&creds.username, response.role.as_deref());
                        if let Some(cb) = on_success {
                            cb.run(creds.username);
                        }
                        navigate("/", Default::default());
                    }
                    FormMode::Register => {
                        info!(username = %creds.username, "account registered");
                        navigate("/login", Default::default());
                    }
                },
                Err(err) => {
                    warn!(%err, mode = mode.as_str(), "authentication failed");
                    set_error.set(Some(err.user_message()));
                }
            }
        });
    };

    view! {
        <form on:submit=on_submit class="max-w-sm mx-auto mt-24 p-6 bg-white rounded-lg shadow-md flex flex-col gap-4">
            <h1 class="text-2xl font-bold text-gray-900">{mode.title()}</h1>
            <input
                type="text"
                placeholder="Usuario"
                class="p-2 border rounded-lg text-gray-800"
                prop:value=move || username.get()
                on:input=move |ev| set_username.set(event_target_value(&ev))
            />
            <input
                type="password"
                placeholder="Contraseña"
                class="p-2 border rounded-lg text-gray-800"
                prop:value=move || password.get()
                on:input=move |ev| set_password.set(event_target_value(&ev))
            />
            {move || error.get().map(|msg| view! { <p class="text-destructive text-sm">{msg}</p> })}
            <button type="submit" class="btn" disabled=move || pending.get()>
                {move || if pending.get() { "Enviando..." } else { mode.title() }}
            </button>
        </form>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_forwards_token_route_and_mode() {
        assert_eq!(TOKEN_ROUTE, "/api/token/");
        assert_eq!(FormMode::Login.as_str(), "login");
    }

    #[test]
    fn test_auth_response_role_optional() {
        let r: AuthResponse = serde_json::from_str(r#"{"access":"a","refresh":"b"}"#).unwrap();
        assert_eq!(r.role, None);

        let r: AuthResponse = serde_json::from_str(r#"{"access":"a","role":"vendedor"}"#).unwrap();
        assert_eq!(r.role.as_deref(), Some("vendedor"));
    }

    #[test]
    fn test_credentials_serialize() {
        let creds = Credentials {
            username: "ana".into(),
            password: "secreto".into(),
        };
        let json = serde_json::to_value(&creds).unwrap();
        assert_eq!(json, serde_json::json!({"username": "ana", "password": "secreto"}));
    }

    #[test]
    fn test_rejected_message() {
        assert_eq!(
            AuthFormError::Rejected(401).user_message(),
            "Usuario o contraseña incorrectos"
        );
    }
}
