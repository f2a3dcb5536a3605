pub mod check;
pub mod common;
pub mod completions;
pub mod config;
pub mod save;
pub mod show;
