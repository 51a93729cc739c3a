//! GraphQL client for the likes backend
//!
//! Wraps a plain HTTP transport in the three named operations the console
//! uses. The caller gets typed results or a [`GraphQlClientError`]; no
//! retries, no caching, no reconciliation happen here.

pub mod operations;

use crate::types::{Like, LikeDraft};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::json;
use thiserror::Error;

pub use operations::{
    CreateLikeData, DeleteLikeData, DeletedLike, LikeConnection, ListLikesData, CREATE_LIKE,
    DELETE_LIKE, LIST_LIKES,
};

/// Errors that can occur when talking to the GraphQL backend
#[derive(Debug, Error)]
pub enum GraphQlClientError {
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("GraphQL error: {0}")]
    Api(String),

    #[error("response contained no data for {operation}")]
    MissingData { operation: &'static str },
}

/// Standard GraphQL request envelope
#[derive(Debug, Clone, Serialize)]
pub struct GraphQlRequest<'a> {
    pub query: &'a str,
    #[serde(rename = "operationName")]
    pub operation_name: &'a str,
    pub variables: serde_json::Value,
}

/// Standard GraphQL response envelope
#[derive(Debug, Clone, Deserialize)]
pub struct GraphQlResponse<T> {
    pub data: Option<T>,
    #[serde(default)]
    pub errors: Vec<GraphQlErrorEntry>,
}

/// One entry of the `errors` array. Only the message is inspected.
#[derive(Debug, Clone, Deserialize)]
pub struct GraphQlErrorEntry {
    pub message: String,
}

/// Client for the likes GraphQL API
#[derive(Clone)]
pub struct LikesClient {
    http: reqwest::Client,
    endpoint: String,
}

impl LikesClient {
    #[must_use]
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            endpoint: endpoint.into(),
        }
    }

    /// Execute one named operation document and decode its `data` shape.
    async fn execute<T: DeserializeOwned>(
        &self,
        query: &'static str,
        operation: &'static str,
        variables: serde_json::Value,
    ) -> Result<T, GraphQlClientError> {
        let body = GraphQlRequest {
            query,
            operation_name: operation,
            variables,
        };

        let response: GraphQlResponse<T> = self
            .http
            .post(&self.endpoint)
            .json(&body)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        if !response.errors.is_empty() {
            let messages: Vec<&str> = response
                .errors
                .iter()
                .map(|entry| entry.message.as_str())
                .collect();
            return Err(GraphQlClientError::Api(messages.join("; ")));
        }

        response
            .data
            .ok_or(GraphQlClientError::MissingData { operation })
    }

    /// Fetch the complete list of likes in backend order.
    pub async fn list_likes(&self) -> Result<Vec<Like>, GraphQlClientError> {
        let data: ListLikesData = self.execute(LIST_LIKES, "ListLikes", json!({})).await?;
        Ok(data.list_likes.items)
    }

    /// Create one like from the draft; the backend returns the persisted
    /// record with its assigned id.
    pub async fn create_like(&self, input: &LikeDraft) -> Result<Like, GraphQlClientError> {
        let data: CreateLikeData = self
            .execute(CREATE_LIKE, "CreateLike", json!({ "input": input }))
            .await?;
        Ok(data.create_like)
    }

    /// Delete one like by id; returns the deleted id.
    pub async fn delete_like(&self, id: &str) -> Result<String, GraphQlClientError> {
        let data: DeleteLikeData = self
            .execute(DELETE_LIKE, "DeleteLike", json!({ "input": { "id": id } }))
            .await?;
        Ok(data.delete_like.id)
    }
}
