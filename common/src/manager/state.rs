//! Runtime state of the record manager.

use crate::model::record::{Record, RecordDraft, RecordId};
use crate::requests::{ApiRequest, Generation};

/// Visibility and mode of the add/edit form.
///
/// The submit button label follows the mode; which request a submit issues
/// is decided by the selection instead (see [`super::update`]).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FormState {
    #[default]
    Hidden,
    OpenForCreate,
    OpenForEdit,
}

impl FormState {
    pub fn is_open(self) -> bool {
        self != FormState::Hidden
    }

    /// Label of the submit button, `None` while the form is hidden.
    pub fn submit_label(self) -> Option<&'static str> {
        match self {
            FormState::Hidden => None,
            FormState::OpenForCreate => Some("ثبت"),
            FormState::OpenForEdit => Some("ویرایش"),
        }
    }
}

/// Messages shown in the dismissible modal.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Notification {
    RecordAdded,
    RecordUpdated,
    RecordDeleted,
    SelectRow,
}

impl Notification {
    pub fn message(self) -> &'static str {
        match self {
            Notification::RecordAdded => "سطر جدید اضافه شد",
            Notification::RecordUpdated => "سطر ویرایش شد",
            Notification::RecordDeleted => "سطر با موفقیت حذف شد",
            Notification::SelectRow => "لطفا یک سطر انتخاب کنید",
        }
    }
}

/// Main state container.
///
/// `records` is a cache of the last successful fetch and is never edited
/// locally; every successful write is followed by a refetch.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RecordManager {
    /// Rows in the order the backend returned them.
    pub records: Vec<Record>,

    /// Id of the single selected row, if any. Always refers to a row in
    /// `records`.
    pub selected: Option<RecordId>,

    pub form: FormState,

    /// Values bound to the form inputs.
    pub draft: RecordDraft,

    pub notification: Option<Notification>,

    /// Generation handed to the next list request.
    next_generation: Generation,

    /// Generation of the list response currently shown.
    applied_generation: Option<Generation>,
}

impl RecordManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected_record(&self) -> Option<&Record> {
        let id = self.selected.as_ref()?;
        self.records.iter().find(|r| r.id.as_ref() == Some(id))
    }

    pub fn is_selected(&self, id: &RecordId) -> bool {
        self.selected.as_ref() == Some(id)
    }

    /// Builds the next list request, bumping the generation counter.
    pub(super) fn list_request(&mut self) -> ApiRequest {
        let generation = self.next_generation;
        self.next_generation += 1;
        ApiRequest::List { generation }
    }

    /// Replaces the cached rows unless a newer list response is already
    /// shown. Returns `false` when the response was stale.
    pub(super) fn replace_records(&mut self, generation: Generation, records: Vec<Record>) -> bool {
        if self.applied_generation.is_some_and(|applied| applied > generation) {
            return false;
        }
        self.applied_generation = Some(generation);
        self.records = records;

        if self.selected.is_some() && self.selected_record().is_none() {
            self.selected = None;
        }
        true
    }

    /// Hides the form and clears the draft after a successful write.
    pub(super) fn close_form(&mut self) {
        self.form = FormState::Hidden;
        self.draft = RecordDraft::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: u64, title: &str) -> Record {
        Record {
            id: Some(RecordId::from(id)),
            title: title.to_string(),
            author: String::new(),
            student_number: String::new(),
        }
    }

    #[test]
    fn test_new_state_is_idle() {
        let state = RecordManager::new();
        assert!(state.records.is_empty());
        assert_eq!(state.form, FormState::Hidden);
        assert_eq!(state.selected, None);
        assert_eq!(state.notification, None);
    }

    #[test]
    fn test_list_requests_are_numbered() {
        let mut state = RecordManager::new();
        assert_eq!(state.list_request(), ApiRequest::List { generation: 0 });
        assert_eq!(state.list_request(), ApiRequest::List { generation: 1 });
    }

    #[test]
    fn test_stale_response_is_ignored() {
        let mut state = RecordManager::new();
        assert!(state.replace_records(2, vec![record(1, "new")]));
        assert!(!state.replace_records(1, vec![record(1, "old")]));
        assert_eq!(state.records, vec![record(1, "new")]);
    }

    #[test]
    fn test_replace_drops_vanished_selection() {
        let mut state = RecordManager::new();
        state.replace_records(0, vec![record(1, "a"), record(2, "b")]);
        state.selected = Some(RecordId::from(2));
        state.replace_records(1, vec![record(1, "a"), record(2, "b2")]);
        assert_eq!(state.selected_record().map(|r| r.title.as_str()), Some("b2"));

        state.replace_records(2, vec![record(1, "a")]);
        assert_eq!(state.selected, None);
    }

    #[test]
    fn test_submit_labels() {
        assert_eq!(FormState::Hidden.submit_label(), None);
        assert_eq!(FormState::OpenForCreate.submit_label(), Some("ثبت"));
        assert_eq!(FormState::OpenForEdit.submit_label(), Some("ویرایش"));
        assert!(FormState::OpenForEdit.is_open());
    }
}
