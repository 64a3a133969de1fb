//! termsplash: a terminal splash screen that types shell commands
//! character by character, holds a resting prompt, then cross-fades to
//! content.
//!
//! The animation core ([`splash`]) is a pure state machine over elapsed
//! time; [`tui`] wraps it in a ratatui event loop.

pub mod cli;
pub mod config;
pub mod logging;
pub mod splash;
pub mod tui;
