//! CellBlocks - terminal browser for snippet cards
//!
//! This crate provides the state, update logic and rendering for browsing a
//! CellBlocks card collection, structured as an Elm-style loop: input
//! becomes [`Msg`], [`update`](update::update) changes the [`AppModel`] and
//! returns a [`Cmd`] describing side effects for the runtime to perform.

pub mod cli;
pub mod clipboard;
pub mod commands;
pub mod config;
pub mod config_paths;
pub mod input;
pub mod messages;
pub mod model;
pub mod query;
pub mod storage;
pub mod template;
pub mod tracing;
pub mod update;
pub mod view;

// Re-export commonly used types
pub use commands::Cmd;
pub use config::AppConfig;
pub use messages::Msg;
pub use model::AppModel;
