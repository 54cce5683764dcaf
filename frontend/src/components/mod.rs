pub mod notification;
pub mod records;
