use common::grid::Column;
use common::manager::Msg as ManagerMsg;

pub enum Msg {
    /// Intent or request completion handled by the record manager.
    Manager(ManagerMsg),
    ToggleSort(Column),
    SetFilter(Column, String),
}

impl From<ManagerMsg> for Msg {
    fn from(msg: ManagerMsg) -> Self {
        Msg::Manager(msg)
    }
}
