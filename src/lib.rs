//! Contacts library exports for testing

pub mod core;
pub mod routes;
pub mod store;
pub mod tui;
pub mod web;

#[cfg(test)]
pub mod test_support;
