//! Library entry for depatrol exposing core logic for integration tests.

pub mod app;
pub mod args;
pub mod cache;
pub mod compare;
pub mod errors;
pub mod events;
pub mod manifest;
pub mod net;
pub mod paths;
pub mod resolve;
pub mod settings;
pub mod state;
pub mod theme;
pub mod ui;
pub mod util;

#[cfg(test)]
mod test_utils;
