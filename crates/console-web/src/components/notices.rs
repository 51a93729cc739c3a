//! Notification banners
//!
//! Surfaces remote failures and validation warnings. Local state is never
//! rolled back on a failed call, so these notices are the only signal that
//! the list may have drifted from the backend.

use crate::state::use_likes_state;
use crate::types::NotificationKind;
use leptos::prelude::*;

fn kind_class(kind: NotificationKind) -> &'static str {
    match kind {
        NotificationKind::Error => "notice notice-error",
        NotificationKind::Warning => "notice notice-warning",
    }
}

/// Notification list component
#[component]
pub fn Notices() -> impl IntoView {
    let state = use_likes_state();

    view! {
        <div class="notices">
            {move || {
                state
                    .notifications
                    .get()
                    .into_iter()
                    .enumerate()
                    .map(|(index, note)| {
                        view! {
                            <div class=kind_class(note.kind)>
                                <strong>{note.title}</strong>
                                <span>{note.message}</span>
                                <button class="notice-dismiss" on:click=move |_| state.dismiss(index)>
                                    "×"
                                </button>
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()
            }}
        </div>
    }
}
