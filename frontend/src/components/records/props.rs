use yew::prelude::*;

/// Properties for the `RecordsComponent`.
#[derive(Properties, PartialEq, Clone)]
pub struct RecordsProps {
    /// Overrides the backend base URL (e.g. `http://localhost:3001`).
    ///
    /// When `None` the URL chosen at build time is used. Only read when the
    /// component is created.
    #[prop_or_default]
    pub api_base: Option<String>,
}
