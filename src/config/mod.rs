mod loader;
mod types;

pub use loader::ConfigError;
pub use types::{
    Breakpoints, CarouselConfig, Config, GestureConfig, TerminalConfig, TimingConfig, ZoomConfig,
};
