pub mod carousel;
pub mod catalog;
pub mod cli;
pub mod config;
pub mod driver;
pub mod logging;
pub mod mvi;
pub mod tui;
