//! Headless client for the leave portal: typed REST client, list
//! components, application state and per-screen view models.

pub mod api;
pub mod components;
pub mod config;
pub mod pages;
pub mod state;
pub mod utils;

#[cfg(test)]
mod test_support;
