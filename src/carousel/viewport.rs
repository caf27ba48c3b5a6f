//! Responsive page-size resolution.

use crate::config::{Breakpoints, CarouselConfig};

/// Layout band the viewport currently falls into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LayoutRegime {
    Mobile,
    Tablet,
    #[default]
    Desktop,
}

/// Resolved page size for a viewport width.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageSize {
    pub regime: LayoutRegime,
    /// Items shown at once, never zero.
    pub items_per_page: usize,
}

/// Maps viewport widths onto page sizes.
#[derive(Debug, Clone, PartialEq)]
pub struct PageSizeResolver {
    breakpoints: Breakpoints,
    mobile_items: usize,
    tablet_items: usize,
    default_items: usize,
}

impl PageSizeResolver {
    pub fn new(
        breakpoints: Breakpoints,
        mobile_items: usize,
        tablet_items: usize,
        default_items: usize,
    ) -> Self {
        Self {
            breakpoints,
            mobile_items: mobile_items.max(1),
            tablet_items: tablet_items.max(1),
            default_items: default_items.max(1),
        }
    }

    pub fn from_config(config: &CarouselConfig) -> Self {
        Self::new(
            config.breakpoints,
            config.mobile_items,
            config.tablet_items,
            config.items_per_page_default,
        )
    }

    pub fn regime(&self, width: u32) -> LayoutRegime {
        if width <= self.breakpoints.mobile {
            LayoutRegime::Mobile
        } else if width <= self.breakpoints.tablet {
            LayoutRegime::Tablet
        } else {
            LayoutRegime::Desktop
        }
    }

    pub fn resolve(&self, width: u32) -> PageSize {
        let regime = self.regime(width);
        let items_per_page = match regime {
            LayoutRegime::Mobile => self.mobile_items,
            LayoutRegime::Tablet => self.tablet_items,
            LayoutRegime::Desktop => self.default_items,
        };
        PageSize {
            regime,
            items_per_page,
        }
    }
}

/// Highest valid first-visible index.
pub fn max_index(item_count: usize, items_per_page: usize) -> usize {
    item_count.saturating_sub(items_per_page.max(1))
}

/// Clamps `index` after a page-size change, keeping the first visible item
/// in view when the new page size allows it.
pub fn reclamp_index(index: usize, item_count: usize, items_per_page: usize) -> usize {
    index.min(max_index(item_count, items_per_page))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resolver() -> PageSizeResolver {
        PageSizeResolver::from_config(&CarouselConfig::default())
    }

    #[test]
    fn widths_map_to_regimes_inclusively() {
        let r = resolver();
        assert_eq!(r.resolve(0).items_per_page, 1);
        assert_eq!(r.resolve(768).regime, LayoutRegime::Mobile);
        assert_eq!(r.resolve(769).regime, LayoutRegime::Tablet);
        assert_eq!(r.resolve(992).items_per_page, 2);
        assert_eq!(r.resolve(993).regime, LayoutRegime::Desktop);
        assert_eq!(r.resolve(1920).items_per_page, 4);
    }

    #[test]
    fn zero_page_sizes_clamp_to_one() {
        let r = PageSizeResolver::new(Breakpoints::default(), 0, 0, 0);
        assert_eq!(r.resolve(300).items_per_page, 1);
        assert_eq!(r.resolve(900).items_per_page, 1);
        assert_eq!(r.resolve(2000).items_per_page, 1);
    }

    #[test]
    fn reclamp_keeps_first_visible_when_possible() {
        assert_eq!(reclamp_index(3, 10, 4), 3);
        assert_eq!(reclamp_index(8, 10, 4), 6);
        assert_eq!(reclamp_index(5, 3, 4), 0);
        assert_eq!(reclamp_index(0, 0, 1), 0);
    }
}
