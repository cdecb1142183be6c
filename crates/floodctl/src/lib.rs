//! Floodctl library - exposes modules for testing

pub mod app;
pub mod commands;
pub mod logging;
