//! Likes page - the form and the list

use crate::components::{LikeCard, LikeForm, Notices};
use crate::state::use_likes_state;
use crate::types::Like;
use crate::use_app_state;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Likes page component
#[component]
pub fn Likes() -> impl IntoView {
    let state = use_likes_state();
    let app = use_app_state();

    // One-time fetch at mount; the list is never re-fetched afterwards.
    let load_client = app.client.clone();
    Effect::new(move |prev: Option<()>| {
        if prev.is_none() {
            let client = load_client.clone();
            spawn_local(async move { state.load(client).await });
        }
    });

    let delete_client = app.client.clone();
    let on_delete = Callback::new(move |like: Like| {
        let client = delete_client.clone();
        spawn_local(async move { state.delete(client, like).await });
    });

    view! {
        <div class="page">
            <div class="page-header">
                <h1 class="page-title">"Like It Like This"</h1>
            </div>

            <LikeForm />
            <Notices />

            {move || {
                state
                    .is_loading
                    .get()
                    .then(|| view! { <p class="page-loading">"Loading likes..."</p> })
            }}

            <div class="like-list">
                <For
                    each=move || state.likes.get()
                    key=|like| like.render_key()
                    children=move |like| {
                        view! { <LikeCard like=like on_delete=on_delete /> }
                    }
                />
            </div>
        </div>
    }
}
