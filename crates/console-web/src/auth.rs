//! Session state and the auth gate
//!
//! The gate is an explicit session value passed through context: the view
//! is polymorphic over the unauthenticated and authenticated states, and
//! nothing of the wrapped app renders until a session exists. The console
//! itself reads no user data beyond the gate; the sign-in form stands in
//! for whatever identity provider backs a deployment.

use leptos::prelude::*;
use thiserror::Error;

/// A signed-in session
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    pub username: String,
}

/// Session state the view tree is polymorphic over
#[derive(Debug, Clone, Default, PartialEq)]
pub enum SessionState {
    #[default]
    Unauthenticated,
    Authenticated(Session),
}

impl SessionState {
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        matches!(self, SessionState::Authenticated(_))
    }
}

/// Sign-in failures surfaced by the form
#[derive(Debug, Error, Clone, PartialEq)]
pub enum SignInError {
    #[error("Username is required")]
    MissingUsername,

    #[error("Password is required")]
    MissingPassword,
}

/// Establish a session from credentials. Presence checks only; a real
/// deployment swaps this for its identity provider.
pub fn sign_in(username: &str, password: &str) -> Result<Session, SignInError> {
    if username.trim().is_empty() {
        return Err(SignInError::MissingUsername);
    }
    if password.is_empty() {
        return Err(SignInError::MissingPassword);
    }
    Ok(Session {
        username: username.trim().to_string(),
    })
}

/// Provides the session signal to the view tree
#[component]
pub fn SessionProvider(children: Children) -> impl IntoView {
    let session = RwSignal::new(SessionState::default());
    provide_context(session);
    children()
}

/// Hook to get the session signal
pub fn use_session() -> RwSignal<SessionState> {
    let ctx = use_context::<RwSignal<SessionState>>();
    if let Some(session) = ctx {
        session
    } else {
        panic!("Session not found. Wrap your app in SessionProvider.")
    }
}

/// Renders the sign-in form until a session exists, then the wrapped app
/// with a sign-out control alongside it.
#[component]
pub fn AuthGate(children: ChildrenFn) -> impl IntoView {
    let session = use_session();

    view! {
        {move || {
            if session.get().is_authenticated() {
                view! {
                    <div class="app-shell">
                        {children()}
                        <SignOutButton />
                    </div>
                }
                .into_any()
            } else {
                view! { <SignIn /> }.into_any()
            }
        }}
    }
}

/// Sign-in form
#[component]
pub fn SignIn() -> impl IntoView {
    let session = use_session();
    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(Option::<String>::None);

    let on_submit = move |_| match sign_in(&username.get(), &password.get()) {
        Ok(established) => {
            error.set(None);
            session.set(SessionState::Authenticated(established));
        }
        Err(err) => error.set(Some(err.to_string())),
    };

    view! {
        <div class="signin">
            <h1 class="signin-title">"Sign in"</h1>
            <input
                placeholder="Username"
                prop:value=move || username.get()
                on:input=move |ev| username.set(event_target_value(&ev))
            />
            <input
                type="password"
                placeholder="Password"
                prop:value=move || password.get()
                on:input=move |ev| password.set(event_target_value(&ev))
            />
            <button class="btn btn-primary" on:click=on_submit>
                "Sign In"
            </button>
            {move || {
                error
                    .get()
                    .map(|message| view! { <p class="signin-error">{message}</p> })
            }}
        </div>
    }
}

/// Sign-out control rendered alongside the gated app
#[component]
pub fn SignOutButton() -> impl IntoView {
    let session = use_session();

    view! {
        <button class="btn btn-signout" on:click=move |_| session.set(SessionState::Unauthenticated)>
            "Sign Out"
        </button>
    }
}
