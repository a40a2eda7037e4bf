pub mod cli;
pub mod config;
pub mod error;
pub mod hotspot;
pub mod logging;
pub mod sanitize;
pub mod sink;
pub mod store;
pub mod ui;
