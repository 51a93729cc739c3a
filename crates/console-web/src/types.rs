//! Shared types for the likes console

use serde::{Deserialize, Serialize};

/// A liked movie or TV show.
///
/// `id` is assigned by the backend and absent until the record has been
/// persisted; entries appended optimistically after a create call start
/// without one.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Like {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    /// Movie/TV distinction, free text. Serialized as `type` on the wire.
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    pub description: String,
}

impl Like {
    /// Stable identity for rendering diffs: the backend id when present,
    /// else the name. Two unconfirmed entries sharing a name collide on
    /// their render key; documented edge case, not deduplicated.
    #[must_use]
    pub fn render_key(&self) -> String {
        self.id.clone().unwrap_or_else(|| self.name.clone())
    }
}

/// Form draft bound to the create-like inputs.
///
/// The reset template covers every field, `kind` included, so a submit
/// clears the whole form rather than leaving the type input stale.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct LikeDraft {
    pub name: String,
    #[serde(rename = "type", default, skip_serializing_if = "String::is_empty")]
    pub kind: String,
    pub description: String,
}

impl LikeDraft {
    /// Presence-only validation: `name` and `description` are required,
    /// `kind` is never validated.
    #[must_use]
    pub fn is_submittable(&self) -> bool {
        !self.name.is_empty() && !self.description.is_empty()
    }

    /// The record appended optimistically to the list when this draft is
    /// submitted. No id yet; the backend has not confirmed one.
    #[must_use]
    pub fn to_record(&self) -> Like {
        Like {
            id: None,
            name: self.name.clone(),
            kind: if self.kind.is_empty() {
                None
            } else {
                Some(self.kind.clone())
            },
            description: self.description.clone(),
        }
    }
}

/// Notification for user feedback
#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    pub kind: NotificationKind,
    pub title: String,
    pub message: String,
}

impl Notification {
    pub fn error(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Error,
            title: title.into(),
            message: message.into(),
        }
    }

    pub fn warning(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Warning,
            title: title.into(),
            message: message.into(),
        }
    }
}

/// Feedback severity. Only failures and validation warnings exist here;
/// successful calls change the list itself and need no banner.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NotificationKind {
    Error,
    Warning,
}
