pub mod account;
pub mod admin;
pub mod dashboard;
pub mod hierarchy;
pub mod leaves;
pub mod settings;
