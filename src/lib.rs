pub mod cli;
pub mod config;
pub mod core;
pub mod exit;
pub mod fetch;
pub mod logs;
pub mod ui;
