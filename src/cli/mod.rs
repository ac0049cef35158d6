//! Terminal front end: turns command lines into ledger calls and renders results.

pub mod commands;
pub mod core;
pub mod help;
pub mod input;
pub mod io;
pub mod output;
pub mod registry;
mod shell;
pub mod shell_context;
pub mod ui;
pub mod views;

pub use shell::run_cli;
