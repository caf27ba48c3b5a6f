//! Display records fed to the carousel.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Stable identifier of a carousel item.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(String);

impl ItemId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Opaque media reference produced by the content layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaRef {
    /// Source used in the carousel tile.
    pub src: String,
    /// Original-quality source shown in the fullscreen overlay.
    #[serde(default)]
    pub full_src: Option<String>,
}

impl MediaRef {
    pub fn new(src: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            full_src: None,
        }
    }

    pub fn with_full(mut self, full_src: impl Into<String>) -> Self {
        self.full_src = Some(full_src.into());
        self
    }

    /// Best source for fullscreen display.
    pub fn full_or_display(&self) -> &str {
        self.full_src.as_deref().unwrap_or(&self.src)
    }
}

/// A single display record.
#[derive(Debug, Clone, PartialEq)]
pub struct CarouselItem {
    pub id: ItemId,
    /// Items without image data are skipped by the carousel.
    pub image: Option<MediaRef>,
    pub title: Option<String>,
    pub caption: Option<String>,
    /// Navigation target followed on click.
    pub link: Option<String>,
    pub alt_text: Option<String>,
    pub location: Option<String>,
    /// Floor area in square meters.
    pub living_area: Option<u32>,
    /// Number of images in the project this item stands for.
    pub gallery_len: usize,
}

impl CarouselItem {
    pub fn new(id: ItemId, image: MediaRef) -> Self {
        Self {
            id,
            image: Some(image),
            title: None,
            caption: None,
            link: None,
            alt_text: None,
            location: None,
            living_area: None,
            gallery_len: 1,
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_caption(mut self, caption: impl Into<String>) -> Self {
        self.caption = Some(caption.into());
        self
    }

    pub fn with_link(mut self, link: impl Into<String>) -> Self {
        self.link = Some(link.into());
        self
    }

    pub fn with_gallery_len(mut self, gallery_len: usize) -> Self {
        self.gallery_len = gallery_len;
        self
    }

    /// True when the project behind this item has exactly one image.
    pub fn is_single_image_gallery(&self) -> bool {
        self.gallery_len == 1
    }

    /// Alternative text, falling back to the title.
    pub fn alt(&self) -> &str {
        self.alt_text
            .as_deref()
            .or(self.title.as_deref())
            .unwrap_or("")
    }

    /// Whether there is anything to show in the hover overlay of a tile.
    pub fn has_hover_content(&self) -> bool {
        self.title.as_deref().is_some_and(|t| !t.is_empty())
            || self.location.is_some()
            || self.living_area.is_some()
    }
}
