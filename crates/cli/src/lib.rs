//! Console front end: configuration, startup wiring, and the menu loop.

pub mod app;
pub mod config;
pub mod console;
pub mod prompt;

pub use config::{Config, ReportFormat};
pub use console::Console;
