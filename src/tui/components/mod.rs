//! TUI components

mod content;
mod splash;

pub use content::ContentView;
pub use splash::SplashScreen;
