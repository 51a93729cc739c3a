//! State management for the likes page
//!
//! The like list is a local projection of the backend: loaded wholesale
//! once at mount, then mutated optimistically (append on create, remove on
//! delete) without ever re-fetching. The pure transitions live in free
//! functions over plain vectors; [`LikesPageState`] wraps them in signals
//! and drives the remote calls. The handlers are async so the components
//! spawn them onto the local executor; local transitions still happen
//! before the remote call resolves.

use crate::graphql::LikesClient;
use crate::types::{Like, LikeDraft, Notification};
use leptos::prelude::*;

/// Append one record at the end of the local list.
pub fn append_like(likes: &mut Vec<Like>, like: Like) {
    likes.push(like);
}

/// Remove the entry whose backend id matches. Entries without an id never
/// match and are untouched.
pub fn remove_like(likes: &mut Vec<Like>, id: &str) {
    likes.retain(|like| like.id.as_deref() != Some(id));
}

/// Remove an unconfirmed entry (no backend id yet) by its name key.
pub fn remove_unconfirmed(likes: &mut Vec<Like>, name: &str) {
    likes.retain(|like| !(like.id.is_none() && like.name == name));
}

/// Likes page state: the list, the form draft, and user feedback
#[derive(Clone, Copy)]
pub struct LikesPageState {
    /// Local projection of the remote list
    pub likes: RwSignal<Vec<Like>>,
    /// Form draft bound to the create inputs
    pub draft: RwSignal<LikeDraft>,
    /// Loading state for the initial fetch
    pub is_loading: RwSignal<bool>,
    /// Pending user notifications
    pub notifications: RwSignal<Vec<Notification>>,
}

impl LikesPageState {
    pub fn new() -> Self {
        Self {
            likes: RwSignal::new(Vec::new()),
            draft: RwSignal::new(LikeDraft::default()),
            is_loading: RwSignal::new(false),
            notifications: RwSignal::new(Vec::new()),
        }
    }

    /// Fetch the complete remote list and replace local state wholesale.
    /// Called exactly once, at mount.
    pub async fn load(&self, client: LikesClient) {
        self.is_loading.set(true);
        match client.list_likes().await {
            Ok(items) => self.likes.set(items),
            Err(err) => {
                log::error!("failed to load likes: {err}");
                self.notifications.update(|pending| {
                    pending.push(Notification::error("Load failed", err.to_string()));
                });
            }
        }
        self.is_loading.set(false);
    }

    /// Submit the current draft.
    ///
    /// No-op (besides a warning notice) when a required field is empty.
    /// Otherwise one create call is issued, the draft is appended to the
    /// local list, and the draft resets, all before the call resolves. A
    /// failed create leaves the optimistic entry in place and only
    /// surfaces an error notice.
    pub async fn submit(&self, client: LikesClient) {
        let input = self.draft.get();
        if !input.is_submittable() {
            self.notifications.update(|pending| {
                pending.push(Notification::warning(
                    "Missing fields",
                    "Name and description are required",
                ));
            });
            return;
        }

        let call = client.create_like(&input);
        self.likes
            .update(|likes| append_like(likes, input.to_record()));
        self.draft.set(LikeDraft::default());

        if let Err(err) = call.await {
            log::error!("failed to create like {:?}: {err}", input.name);
            self.notifications.update(|pending| {
                pending.push(Notification::error("Create failed", err.to_string()));
            });
        }
    }

    /// Delete one like: local removal first, remote call second.
    ///
    /// Entries the backend never confirmed (no id) are only removed
    /// locally; there is nothing remote to delete and no call is issued.
    pub async fn delete(&self, client: LikesClient, like: Like) {
        match like.id {
            Some(id) => {
                self.likes.update(|likes| remove_like(likes, &id));

                if let Err(err) = client.delete_like(&id).await {
                    log::error!("failed to delete like {id}: {err}");
                    self.notifications.update(|pending| {
                        pending.push(Notification::error("Delete failed", err.to_string()));
                    });
                }
            }
            None => {
                self.likes
                    .update(|likes| remove_unconfirmed(likes, &like.name));
            }
        }
    }

    /// Dismiss a notification by position.
    pub fn dismiss(&self, index: usize) {
        self.notifications.update(|pending| {
            if index < pending.len() {
                pending.remove(index);
            }
        });
    }
}

impl Default for LikesPageState {
    fn default() -> Self {
        Self::new()
    }
}

/// Global state provider component
#[component]
pub fn StateProvider(children: Children) -> impl IntoView {
    let likes_state = LikesPageState::new();
    provide_context(likes_state);
    children()
}

/// Hook to get the likes page state
pub fn use_likes_state() -> LikesPageState {
    let ctx = use_context::<LikesPageState>();
    ctx.unwrap_or_default()
}
