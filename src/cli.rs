//! Command line interface.

use std::path::PathBuf;

use clap::Parser;

use crate::config::Config;

#[derive(Debug, Clone, Parser)]
#[command(name = "folio", version, about = "Browse a media catalog as a paged carousel")]
pub struct Cli {
    /// JSON catalog to display
    pub catalog: PathBuf,

    /// Config file (defaults to the platform config dir)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Write logs to this file
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Advance pages automatically
    #[arg(long)]
    pub autoplay: bool,

    /// Wrap around at the ends in the mobile layout
    #[arg(long = "loop")]
    pub loop_enabled: bool,

    /// Override the desktop page size
    #[arg(long, value_name = "N")]
    pub items_per_page: Option<usize>,

    /// Open single-image items fullscreen instead of following their link
    #[arg(long)]
    pub full_screen: bool,
}

impl Cli {
    /// Flags only ever switch features on; absent flags leave the file config alone.
    pub fn apply_overrides(&self, config: &mut Config) {
        if self.autoplay {
            config.carousel.autoplay = true;
        }
        if self.loop_enabled {
            config.carousel.loop_enabled = true;
        }
        if let Some(n) = self.items_per_page {
            config.carousel.items_per_page_default = n;
        }
        if self.full_screen {
            config.carousel.enable_full_screen_view = true;
        }
    }
}
