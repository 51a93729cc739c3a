//! GraphQL operation documents and their response shapes
//!
//! The documents are opaque to the rest of the app: the client executes
//! them by name and decodes the matching data shape. Field names follow
//! the backend schema (`type` on the wire, `kind` in Rust).

use crate::types::Like;
use serde::Deserialize;

/// Fetches the complete list of likes. No arguments, no pagination.
pub const LIST_LIKES: &str = r#"
query ListLikes {
  listLikes {
    items {
      id
      name
      type
      description
    }
  }
}
"#;

/// Creates one like from a draft (`$input` is the like without an id).
pub const CREATE_LIKE: &str = r#"
mutation CreateLike($input: CreateLikeInput!) {
  createLike(input: $input) {
    id
    name
    type
    description
  }
}
"#;

/// Deletes one like by id.
pub const DELETE_LIKE: &str = r#"
mutation DeleteLike($input: DeleteLikeInput!) {
  deleteLike(input: $input) {
    id
  }
}
"#;

/// `data` shape of a `ListLikes` response
#[derive(Debug, Clone, Deserialize)]
pub struct ListLikesData {
    #[serde(rename = "listLikes")]
    pub list_likes: LikeConnection,
}

/// Backend list wrapper: the items come back in backend order.
#[derive(Debug, Clone, Deserialize)]
pub struct LikeConnection {
    pub items: Vec<Like>,
}

/// `data` shape of a `CreateLike` response
#[derive(Debug, Clone, Deserialize)]
pub struct CreateLikeData {
    #[serde(rename = "createLike")]
    pub create_like: Like,
}

/// `data` shape of a `DeleteLike` response
#[derive(Debug, Clone, Deserialize)]
pub struct DeleteLikeData {
    #[serde(rename = "deleteLike")]
    pub delete_like: DeletedLike,
}

/// The backend echoes the id of the deleted record.
#[derive(Debug, Clone, Deserialize)]
pub struct DeletedLike {
    pub id: String,
}
