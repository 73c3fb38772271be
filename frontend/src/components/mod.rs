pub mod list;
pub mod messages;
pub mod pagination;
pub mod search;
pub mod status;
