//! `RecordsApi` over the browser's fetch, via `gloo-net`.

use common::api::{ApiError, RecordsApi};
use common::model::record::{Record, RecordDraft, RecordId};
use common::requests::{item_path, COLLECTION_PATH};
use gloo_net::http::{Request, Response};

#[derive(Clone, Debug, PartialEq)]
pub struct HttpRecordsApi {
    base_url: String,
}

impl HttpRecordsApi {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

/// Maps transport errors and non-2xx statuses to `ApiError`.
async fn checked(response: Result<Response, gloo_net::Error>) -> Result<Response, ApiError> {
    let response = response.map_err(|e| ApiError::Transport(e.to_string()))?;
    if response.ok() {
        Ok(response)
    } else {
        Err(ApiError::Status {
            status: response.status(),
            body: response.text().await.unwrap_or_default(),
        })
    }
}

impl RecordsApi for HttpRecordsApi {
    async fn list(&self) -> Result<Vec<Record>, ApiError> {
        let response = checked(Request::get(&self.url(COLLECTION_PATH)).send().await).await?;
        response
            .json::<Vec<Record>>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }

    async fn create(&self, draft: &RecordDraft) -> Result<(), ApiError> {
        let request = Request::post(&self.url(COLLECTION_PATH))
            .json(draft)
            .map_err(|e| ApiError::Encode(e.to_string()))?;
        checked(request.send().await).await.map(|_| ())
    }

    async fn update(&self, id: &RecordId, draft: &RecordDraft) -> Result<(), ApiError> {
        let request = Request::put(&self.url(&item_path(id)))
            .json(draft)
            .map_err(|e| ApiError::Encode(e.to_string()))?;
        checked(request.send().await).await.map(|_| ())
    }

    async fn delete(&self, id: &RecordId) -> Result<(), ApiError> {
        checked(Request::delete(&self.url(&item_path(id))).send().await)
            .await
            .map(|_| ())
    }
}
