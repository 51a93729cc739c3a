//! Likeit Console
//!
//! A single-page likes console built with Leptos: a form that creates
//! "Like" records through a GraphQL API, a list that mirrors the remote
//! collection in local view state, and an auth gate in front of both.

use graphql::LikesClient;
use leptos::prelude::*;

pub mod auth;
pub mod components;
pub mod graphql;
pub mod pages;
pub mod state;
pub mod types;

#[cfg(not(target_arch = "wasm32"))]
pub mod server;

/// Endpoint used when no deployment configuration overrides it.
pub const DEFAULT_GRAPHQL_ENDPOINT: &str = "http://localhost:4000/graphql";

/// Name of the meta tag through which the shell server advertises the
/// GraphQL endpoint to the client.
pub const GRAPHQL_ENDPOINT_META: &str = "graphql-endpoint";

/// Application state for backend connectivity
#[derive(Clone)]
pub struct AppState {
    pub client: LikesClient,
}

impl AppState {
    pub fn new(graphql_endpoint: impl Into<String>) -> Self {
        Self {
            client: LikesClient::new(graphql_endpoint),
        }
    }
}

/// The GraphQL endpoint for this deployment: the meta tag of the shell
/// page when present, else the built-in default (e.g. under a bare file
/// server during development).
fn resolve_endpoint() -> String {
    #[cfg(target_arch = "wasm32")]
    if let Some(endpoint) = endpoint_from_document() {
        return endpoint;
    }

    DEFAULT_GRAPHQL_ENDPOINT.to_string()
}

#[cfg(target_arch = "wasm32")]
fn endpoint_from_document() -> Option<String> {
    use web_sys::window;

    window()?
        .document()?
        .query_selector(&format!("meta[name='{GRAPHQL_ENDPOINT_META}']"))
        .ok()
        .flatten()?
        .get_attribute("content")
        .filter(|content| !content.is_empty())
}

/// Provide global app state
#[component]
pub fn AppStateProvider(children: Children) -> impl IntoView {
    let endpoint = resolve_endpoint();
    log::info!("GraphQL endpoint: {endpoint}");
    provide_context(AppState::new(endpoint));
    children()
}

/// Get the app state from context
pub fn use_app_state() -> AppState {
    let ctx = use_context::<AppState>();
    if let Some(state) = ctx {
        state
    } else {
        panic!("App state not found. Wrap your app in AppStateProvider.")
    }
}

/// The main application component
#[component]
pub fn App() -> impl IntoView {
    view! {
        <AppStateProvider>
            <auth::SessionProvider>
                <auth::AuthGate>
                    <state::StateProvider>
                        <pages::Likes />
                    </state::StateProvider>
                </auth::AuthGate>
            </auth::SessionProvider>
        </AppStateProvider>
    }
}

/// Client-side entry point (WASM)
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);

    leptos::mount::mount_to_body(App);
}
