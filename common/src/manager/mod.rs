//! Record manager: the explicit state container behind the data-grid form.
//!
//! The manager follows an Elm-style split:
//! - `state`: the data the view renders (records, selection, form, draft,
//!   notification).
//! - `messages`: user intents and request completions.
//! - `update`: the pure transition from `(state, msg)` to a new state plus the
//!   HTTP calls that should be performed next.

mod messages;
mod state;
mod update;

pub use messages::Msg;
pub use state::{FormState, Notification, RecordManager};
pub use update::update;
