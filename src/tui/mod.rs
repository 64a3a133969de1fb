//! Terminal UI: event loop, shell container, and components

pub mod app;
pub mod components;
pub mod events;
pub mod styles;
mod terminal;

pub use app::{App, ShellPhase};
pub use terminal::TerminalGuard;
