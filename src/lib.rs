//! FocusDots - Terminal focus timer with a dot-collection display
//!
//! This library provides the core functionality for the FocusDots application.

pub mod app;
pub mod config;
pub mod history;
pub mod input;
pub mod logging;
pub mod theme;
pub mod timer;
pub mod tui;
