//! Like Card Component
//!
//! Displays one like with its delete control.

use crate::types::Like;
use leptos::prelude::*;

/// Like card component
#[component]
pub fn LikeCard(
    /// The record to display
    like: Like,
    /// Invoked with the record when its delete button is pressed
    on_delete: Callback<Like>,
) -> impl IntoView {
    let target = like.clone();

    view! {
        <div class="like-card">
            <h2 class="like-name">{like.name.clone()}</h2>
            <h4 class="like-kind">{like.kind.clone().unwrap_or_default()}</h4>
            <p class="like-description">{like.description.clone()}</p>
            <button class="btn btn-danger" on:click=move |_| on_delete.run(target.clone())>
                "Delete like"
            </button>
        </div>
    }
}
