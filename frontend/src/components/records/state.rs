//! Component state for the record manager screen.

use common::grid::GridView;
use common::manager::RecordManager;

use crate::api::HttpRecordsApi;

pub struct RecordsComponent {
    /// Records, selection, form and notification.
    pub manager: RecordManager,

    /// Sort and filters of the table. Display only.
    pub grid: GridView,

    /// Client used to perform the requests the manager asks for.
    pub api: HttpRecordsApi,

    /// Guard so the initial fetch runs once.
    pub loaded: bool,
}

impl RecordsComponent {
    pub fn new(api: HttpRecordsApi) -> Self {
        Self {
            manager: RecordManager::new(),
            grid: GridView::default(),
            api,
            loaded: false,
        }
    }
}
