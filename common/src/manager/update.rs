//! Transition function of the record manager.
//!
//! `update` never touches the network: it mutates the state and returns the
//! requests to perform. Their completions come back as `Msg::Listed`,
//! `Msg::Created`, `Msg::Updated` and `Msg::Deleted`.
//!
//! Request failures are logged and otherwise leave the state as it was, so an
//! open form keeps its draft and the user can submit again.

use crate::model::record::RecordDraft;
use crate::requests::ApiRequest;

use super::messages::Msg;
use super::state::{FormState, Notification, RecordManager};

pub fn update(state: &mut RecordManager, msg: Msg) -> Vec<ApiRequest> {
    match msg {
        Msg::Load => vec![state.list_request()],
        Msg::BeginCreate => {
            state.selected = None;
            state.draft = RecordDraft::default();
            state.form = if state.form.is_open() {
                FormState::Hidden
            } else {
                FormState::OpenForCreate
            };
            vec![]
        }
        Msg::BeginEdit => {
            match state.selected_record().map(|r| r.to_draft()) {
                Some(draft) => {
                    state.draft = draft;
                    state.form = FormState::OpenForEdit;
                }
                None => {
                    state.notification = Some(Notification::SelectRow);
                    state.form = FormState::Hidden;
                }
            }
            vec![]
        }
        Msg::ToggleSelect(id) => {
            if state.is_selected(&id) {
                state.selected = None;
            } else if state.records.iter().any(|r| r.id.as_ref() == Some(&id)) {
                state.selected = Some(id);
            } else {
                log::debug!("ignoring selection of unknown record {}", id);
            }
            vec![]
        }
        Msg::EditDraft(field, value) => {
            state.draft.set(field, value);
            vec![]
        }
        Msg::Submit => {
            let draft = state.draft.clone();
            match state.selected.clone() {
                None => vec![ApiRequest::Create(draft)],
                Some(id) => vec![ApiRequest::Update { id, draft }],
            }
        }
        Msg::Delete => match state.selected.clone() {
            Some(id) => vec![ApiRequest::Delete(id)],
            None => {
                state.notification = Some(Notification::SelectRow);
                vec![]
            }
        },
        Msg::DismissNotification => {
            state.notification = None;
            vec![]
        }

        Msg::Listed { generation, result } => {
            match result {
                Ok(records) => {
                    if !state.replace_records(generation, records) {
                        log::debug!("discarding stale record list #{}", generation);
                    }
                }
                Err(err) => log::error!("failed to load records: {}", err),
            }
            vec![]
        }
        Msg::Created(result) => match result {
            Ok(()) => {
                state.close_form();
                state.notification = Some(Notification::RecordAdded);
                vec![state.list_request()]
            }
            Err(err) => {
                log::error!("failed to create record: {}", err);
                vec![]
            }
        },
        Msg::Updated { id, result } => match result {
            Ok(()) => {
                state.close_form();
                state.notification = Some(Notification::RecordUpdated);
                vec![state.list_request()]
            }
            Err(err) => {
                log::error!("failed to update record {}: {}", id, err);
                vec![]
            }
        },
        Msg::Deleted { id, result } => match result {
            Ok(()) => {
                state.close_form();
                if state.is_selected(&id) {
                    state.selected = None;
                }
                state.notification = Some(Notification::RecordDeleted);
                vec![state.list_request()]
            }
            Err(err) => {
                log::error!("failed to delete record {}: {}", id, err);
                vec![]
            }
        },
    }
}
