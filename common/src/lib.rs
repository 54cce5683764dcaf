//! Shared model and state logic for the record manager.
//!
//! Everything here is independent of the browser so it can be exercised by
//! native tests; the `frontend` crate only renders this state and performs
//! the HTTP calls described by [`requests::ApiRequest`].

pub mod api;
pub mod grid;
pub mod manager;
pub mod model;
pub mod requests;
