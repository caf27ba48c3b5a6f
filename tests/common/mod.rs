//! Shared test fixtures.

#![allow(dead_code, unused_imports)]

use folio::carousel::Carousel;
use folio::catalog::{CarouselItem, ItemId, MediaRef};
use folio::config::Config;
use std::path::PathBuf;
use std::time::{Duration, Instant};
use tempfile::TempDir;

/// Viewport widths inside each default layout band.
pub const MOBILE_WIDTH: u32 = 375;
pub const TABLET_WIDTH: u32 = 900;
pub const DESKTOP_WIDTH: u32 = 1440;

pub fn ms(n: u64) -> Duration {
    Duration::from_millis(n)
}

/// `n` items with an image and a link each.
pub fn items(n: usize) -> Vec<CarouselItem> {
    (0..n)
        .map(|i| {
            CarouselItem::new(
                ItemId::new(format!("item-{}", i)),
                MediaRef::new(format!("/static/{}.jpg", i)),
            )
            .with_title(format!("Project {}", i))
            .with_link(format!("/interior-design/project-{}", i))
        })
        .collect()
}

/// A carousel over `n` items, mounted at `width`.
pub fn mounted(n: usize, width: u32, config: &Config, now: Instant) -> Carousel {
    let mut carousel = Carousel::builder(items(n)).config(config).build();
    carousel.setup(width, now);
    carousel
}

/// Advance `carousel` in `step` increments until `until`.
pub fn run_until(carousel: &mut Carousel, from: Instant, until: Instant, step: Duration) {
    let mut now = from;
    while now < until {
        now = (now + step).min(until);
        carousel.advance(now);
    }
}

/// Write `content` to `name` inside a fresh temp dir.
pub fn temp_file(name: &str, content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join(name);
    std::fs::write(&path, content).expect("Failed to write fixture");
    (temp_dir, path)
}
