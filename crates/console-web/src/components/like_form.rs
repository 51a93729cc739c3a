//! Like Form Component
//!
//! Controlled inputs over the draft signal; every keystroke merges one
//! field into the draft, submit hands the draft to the page state.

use crate::state::use_likes_state;
use crate::use_app_state;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Create-like form component
#[component]
pub fn LikeForm() -> impl IntoView {
    let state = use_likes_state();
    let app = use_app_state();
    let draft = state.draft;

    let on_create = move |_| {
        let client = app.client.clone();
        spawn_local(async move { state.submit(client).await });
    };

    view! {
        <div class="like-form">
            <input
                placeholder="Name"
                prop:value=move || draft.get().name
                on:input=move |ev| draft.update(|d| d.name = event_target_value(&ev))
            />
            <input
                placeholder="Type (Movie or TV Show)"
                prop:value=move || draft.get().kind
                on:input=move |ev| draft.update(|d| d.kind = event_target_value(&ev))
            />
            <input
                placeholder="Description"
                prop:value=move || draft.get().description
                on:input=move |ev| draft.update(|d| d.description = event_target_value(&ev))
            />
            <button class="btn btn-primary" on:click=on_create>
                "Create Like"
            </button>
        </div>
    }
}
