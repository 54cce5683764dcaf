//! The seam between the record manager and the network.
//!
//! [`RecordsApi`] is implemented over `gloo-net` by the frontend and by a
//! scripted in-memory backend in the tests. [`execute`] performs one
//! [`ApiRequest`] and turns its outcome into the completion message that is fed
//! back into [`crate::manager::update`].

use thiserror::Error;

use crate::manager::Msg;
use crate::model::record::{Record, RecordDraft, RecordId};
use crate::requests::ApiRequest;

/// A failed request. Every variant is handled the same way: it is logged and
/// the attempt ends there.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    #[error("transport error: {0}")]
    Transport(String),

    #[error("unexpected status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("could not decode response: {0}")]
    Decode(String),

    #[error("could not encode request: {0}")]
    Encode(String),
}

/// HTTP operations on the record collection.
#[allow(async_fn_in_trait)]
pub trait RecordsApi {
    /// `GET /posts`
    async fn list(&self) -> Result<Vec<Record>, ApiError>;

    /// `POST /posts`
    async fn create(&self, draft: &RecordDraft) -> Result<(), ApiError>;

    /// `PUT /posts/{id}`
    async fn update(&self, id: &RecordId, draft: &RecordDraft) -> Result<(), ApiError>;

    /// `DELETE /posts/{id}`
    async fn delete(&self, id: &RecordId) -> Result<(), ApiError>;
}

/// Performs `request` against `api` and wraps the outcome in the matching
/// completion message.
pub async fn execute<A: RecordsApi>(api: &A, request: ApiRequest) -> Msg {
    log::debug!("{} {}", request.method(), request.path());
    match request {
        ApiRequest::List { generation } => Msg::Listed {
            generation,
            result: api.list().await,
        },
        ApiRequest::Create(draft) => Msg::Created(api.create(&draft).await),
        ApiRequest::Update { id, draft } => {
            let result = api.update(&id, &draft).await;
            Msg::Updated { id, result }
        }
        ApiRequest::Delete(id) => {
            let result = api.delete(&id).await;
            Msg::Deleted { id, result }
        }
    }
}
