use crate::model::record::{RecordDraft, RecordId};

/// Path of the record collection on the backend.
pub const COLLECTION_PATH: &str = "/posts";

/// Ordinal of a list request. Later fetches carry larger numbers.
pub type Generation = u64;

/// An HTTP call the record manager wants performed.
///
/// Produced by [`crate::manager::update`]; performed by a
/// [`crate::api::RecordsApi`] through [`crate::api::execute`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ApiRequest {
    List { generation: Generation },
    Create(RecordDraft),
    Update { id: RecordId, draft: RecordDraft },
    Delete(RecordId),
}

impl ApiRequest {
    pub fn method(&self) -> &'static str {
        match self {
            ApiRequest::List { .. } => "GET",
            ApiRequest::Create(_) => "POST",
            ApiRequest::Update { .. } => "PUT",
            ApiRequest::Delete(_) => "DELETE",
        }
    }

    /// Path relative to the API base, e.g. `/posts/1`.
    pub fn path(&self) -> String {
        match self {
            ApiRequest::List { .. } | ApiRequest::Create(_) => COLLECTION_PATH.to_string(),
            ApiRequest::Update { id, .. } | ApiRequest::Delete(id) => item_path(id),
        }
    }
}

pub fn item_path(id: &RecordId) -> String {
    format!("{}/{}", COLLECTION_PATH, id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_routes() {
        let draft = RecordDraft::default();
        let list = ApiRequest::List { generation: 1 };
        let create = ApiRequest::Create(draft.clone());
        let update = ApiRequest::Update {
            id: RecordId::from(1),
            draft: draft.clone(),
        };
        let delete = ApiRequest::Delete(RecordId::from("abc"));

        assert_eq!((list.method(), list.path().as_str()), ("GET", "/posts"));
        assert_eq!((create.method(), create.path().as_str()), ("POST", "/posts"));
        assert_eq!((update.method(), update.path().as_str()), ("PUT", "/posts/1"));
        assert_eq!(
            (delete.method(), delete.path().as_str()),
            ("DELETE", "/posts/abc")
        );
    }
}
