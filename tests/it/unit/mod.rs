//! Unit tests for the canvas components.

mod history_tests;
mod settings_tests;
mod viewport_tests;
