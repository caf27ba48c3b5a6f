use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Root configuration container.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub carousel: CarouselConfig,
    #[serde(default)]
    pub timing: TimingConfig,
    #[serde(default)]
    pub gesture: GestureConfig,
    #[serde(default)]
    pub zoom: ZoomConfig,
    #[serde(default)]
    pub terminal: TerminalConfig,
}

/// Viewport widths (in pixels) at which the page size changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Breakpoints {
    pub mobile: u32,
    pub tablet: u32,
    /// Upper bound of the desktop layout. Widths above it still use the
    /// default page size.
    pub desktop: u32,
}

impl Default for Breakpoints {
    fn default() -> Self {
        Self {
            mobile: 768,
            tablet: 992,
            desktop: 1200,
        }
    }
}

/// Paging and behaviour options of the carousel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CarouselConfig {
    /// Items visible at once on desktop widths (default: 4).
    #[serde(default = "default_items_per_page")]
    pub items_per_page_default: usize,
    #[serde(default)]
    pub breakpoints: Breakpoints,
    /// Items visible at once at or below the mobile breakpoint (default: 1).
    #[serde(default = "default_mobile_items")]
    pub mobile_items: usize,
    /// Items visible at once at or below the tablet breakpoint (default: 2).
    #[serde(default = "default_tablet_items")]
    pub tablet_items: usize,
    /// Slide transition length in milliseconds (default: 500).
    #[serde(default = "default_transition_ms")]
    pub transition_duration_ms: u64,
    /// Open clicked items in the fullscreen overlay (default: false).
    #[serde(default)]
    pub enable_full_screen_view: bool,
    /// Never follow item links (default: false).
    #[serde(default)]
    pub disable_navigation: bool,
    /// Wrap around at the ends (default: false).
    #[serde(default, rename = "loop")]
    pub loop_enabled: bool,
    #[serde(default)]
    pub autoplay: bool,
    /// Autoplay period in milliseconds (default: 5000).
    #[serde(default = "default_autoplay_interval_ms")]
    pub autoplay_interval_ms: u64,
}

/// Delays that are tuning knobs rather than fixed behaviour.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimingConfig {
    /// Autoplay stays paused this long after a touch or hover ends (default: 3000).
    #[serde(default = "default_interaction_cooldown_ms")]
    pub interaction_cooldown_ms: u64,
    /// Swipe flag is kept this long after touch end to swallow the synthetic click (default: 100).
    #[serde(default = "default_swipe_release_ms")]
    pub swipe_release_ms: u64,
    /// Resize events are applied after the viewport settles for this long, 0 applies immediately (default: 100).
    #[serde(default = "default_resize_debounce_ms")]
    pub resize_debounce_ms: u64,
    /// Media loader is dismissed after this long even without a ready signal (default: 5000).
    #[serde(default = "default_loading_fallback_ms")]
    pub loading_fallback_ms: u64,
    /// Full-resolution preload starts this long after setup (default: 2000).
    #[serde(default = "default_preload_delay_ms")]
    pub preload_delay_ms: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GestureConfig {
    /// Minimum horizontal travel in pixels for a swipe to navigate (default: 50).
    #[serde(default = "default_min_swipe_distance")]
    pub min_swipe_distance_px: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ZoomConfig {
    /// Zoom level a click on the unzoomed image jumps to (default: 3).
    #[serde(default = "default_click_zoom")]
    pub click_zoom: f64,
    /// Upper zoom limit (default: 8).
    #[serde(default = "default_max_zoom")]
    pub max_zoom: f64,
    /// Multiplier per wheel notch (default: 1.2).
    #[serde(default = "default_wheel_step")]
    pub wheel_step: f64,
}

/// Options of the terminal host.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TerminalConfig {
    /// Pixels one terminal column stands for when resolving the page size (default: 10).
    #[serde(default = "default_column_px")]
    pub column_px: u32,
    /// Event loop tick in milliseconds (default: 50).
    #[serde(default = "default_tick_ms")]
    pub tick_ms: u64,
}

fn default_items_per_page() -> usize {
    4
}

fn default_mobile_items() -> usize {
    1
}

fn default_tablet_items() -> usize {
    2
}

fn default_transition_ms() -> u64 {
    500
}

fn default_autoplay_interval_ms() -> u64 {
    5000
}

fn default_interaction_cooldown_ms() -> u64 {
    3000
}

fn default_swipe_release_ms() -> u64 {
    100
}

fn default_resize_debounce_ms() -> u64 {
    100
}

fn default_loading_fallback_ms() -> u64 {
    5000
}

fn default_preload_delay_ms() -> u64 {
    2000
}

fn default_min_swipe_distance() -> f64 {
    50.0
}

fn default_click_zoom() -> f64 {
    3.0
}

fn default_max_zoom() -> f64 {
    8.0
}

fn default_wheel_step() -> f64 {
    1.2
}

fn default_column_px() -> u32 {
    10
}

fn default_tick_ms() -> u64 {
    50
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            items_per_page_default: default_items_per_page(),
            breakpoints: Breakpoints::default(),
            mobile_items: default_mobile_items(),
            tablet_items: default_tablet_items(),
            transition_duration_ms: default_transition_ms(),
            enable_full_screen_view: false,
            disable_navigation: false,
            loop_enabled: false,
            autoplay: false,
            autoplay_interval_ms: default_autoplay_interval_ms(),
        }
    }
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            interaction_cooldown_ms: default_interaction_cooldown_ms(),
            swipe_release_ms: default_swipe_release_ms(),
            resize_debounce_ms: default_resize_debounce_ms(),
            loading_fallback_ms: default_loading_fallback_ms(),
            preload_delay_ms: default_preload_delay_ms(),
        }
    }
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            min_swipe_distance_px: default_min_swipe_distance(),
        }
    }
}

impl Default for ZoomConfig {
    fn default() -> Self {
        Self {
            click_zoom: default_click_zoom(),
            max_zoom: default_max_zoom(),
            wheel_step: default_wheel_step(),
        }
    }
}

impl Default for TerminalConfig {
    fn default() -> Self {
        Self {
            column_px: default_column_px(),
            tick_ms: default_tick_ms(),
        }
    }
}

impl CarouselConfig {
    pub fn transition_duration(&self) -> Duration {
        Duration::from_millis(self.transition_duration_ms)
    }

    pub fn autoplay_interval(&self) -> Duration {
        Duration::from_millis(self.autoplay_interval_ms.max(1))
    }
}

impl TimingConfig {
    pub fn interaction_cooldown(&self) -> Duration {
        Duration::from_millis(self.interaction_cooldown_ms)
    }

    pub fn swipe_release(&self) -> Duration {
        Duration::from_millis(self.swipe_release_ms)
    }

    pub fn resize_debounce(&self) -> Duration {
        Duration::from_millis(self.resize_debounce_ms)
    }

    pub fn loading_fallback(&self) -> Duration {
        Duration::from_millis(self.loading_fallback_ms)
    }

    pub fn preload_delay(&self) -> Duration {
        Duration::from_millis(self.preload_delay_ms)
    }
}

impl TerminalConfig {
    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_ms.max(1))
    }
}
