mod admin;
mod auth;
pub mod client;
mod dashboard;
mod hierarchy;
mod leaves;
mod public;
mod settings;
pub mod types;

pub use client::*;
pub use types::*;
