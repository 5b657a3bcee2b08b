//! Runtime module - terminal integration
//!
//! Owns the terminal and the message inbox, turns crossterm events into
//! messages and executes the commands `update` returns.

pub mod app;

pub use app::App;
