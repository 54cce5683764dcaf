use crate::api::ApiError;
use crate::model::record::{DraftField, Record, RecordId};
use crate::requests::Generation;

#[derive(Clone, Debug, PartialEq)]
pub enum Msg {
    /// Fetch the collection (initial load or manual refresh).
    Load,
    /// "Add" button: deselect, reset the draft and toggle the form.
    BeginCreate,
    /// "Edit" button: open the form filled from the selected row.
    BeginEdit,
    /// Row click: select the row, or deselect it if it already is.
    ToggleSelect(RecordId),
    EditDraft(DraftField, String),
    Submit,
    /// "Delete" button: delete the selected row.
    Delete,
    DismissNotification,

    Listed {
        generation: Generation,
        result: Result<Vec<Record>, ApiError>,
    },
    Created(Result<(), ApiError>),
    Updated {
        id: RecordId,
        result: Result<(), ApiError>,
    },
    Deleted {
        id: RecordId,
        result: Result<(), ApiError>,
    },
}
