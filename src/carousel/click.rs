//! Item click routing.
//!
//! A click resolves to exactly one outcome, checked in order: the caller's
//! handler may claim it, then fullscreen eligibility is decided (per-item
//! predicate first, global flag otherwise), then the item link is followed
//! unless navigation is disabled.

use std::fmt;
use std::sync::Arc;

use crate::catalog::CarouselItem;

/// What a caller-supplied click handler wants to happen next.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickDecision {
    /// Fall through to the default behaviour.
    Continue,
    /// The handler dealt with the click; do nothing else.
    Handled,
}

pub type ItemClickHandler = Arc<dyn Fn(&CarouselItem) -> ClickDecision + Send + Sync>;
pub type FullScreenPredicate = Arc<dyn Fn(&CarouselItem) -> bool + Send + Sync>;

/// Result of routing one click.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClickOutcome {
    /// The click belonged to a swipe.
    Suppressed,
    /// The caller's handler returned [`ClickDecision::Handled`].
    Handled,
    OpenFullScreen,
    Navigate(String),
    /// Nothing applies.
    Ignored,
}

#[derive(Clone, Default)]
pub struct ClickPolicy {
    pub on_item_click: Option<ItemClickHandler>,
    pub full_screen_predicate: Option<FullScreenPredicate>,
    pub enable_full_screen_view: bool,
    pub disable_navigation: bool,
}

impl fmt::Debug for ClickPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClickPolicy")
            .field("on_item_click", &self.on_item_click.is_some())
            .field("full_screen_predicate", &self.full_screen_predicate.is_some())
            .field("enable_full_screen_view", &self.enable_full_screen_view)
            .field("disable_navigation", &self.disable_navigation)
            .finish()
    }
}

impl ClickPolicy {
    pub fn is_full_screen_eligible(&self, item: &CarouselItem) -> bool {
        match &self.full_screen_predicate {
            Some(predicate) => predicate(item),
            None => self.enable_full_screen_view,
        }
    }

    pub fn route(&self, item: &CarouselItem, is_swiping: bool) -> ClickOutcome {
        if is_swiping {
            return ClickOutcome::Suppressed;
        }

        if let Some(handler) = &self.on_item_click {
            if handler(item) == ClickDecision::Handled {
                return ClickOutcome::Handled;
            }
        }

        if self.is_full_screen_eligible(item) {
            return ClickOutcome::OpenFullScreen;
        }

        match &item.link {
            Some(link) if !self.disable_navigation => ClickOutcome::Navigate(link.clone()),
            _ => ClickOutcome::Ignored,
        }
    }
}
