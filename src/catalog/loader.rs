//! JSON catalog ingestion.
//!
//! The content layer exports one record per project. Each record carries a
//! gallery; its first image becomes the carousel tile.

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use super::ids::IdGenerator;
use super::item::{CarouselItem, ItemId, MediaRef};

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Failed to read catalog '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse catalog '{path}': {source}")]
    ParseError {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Debug, Deserialize)]
struct CatalogFile {
    /// Prefix joined with a record's slug when it has no explicit link,
    /// e.g. `/interior-design`.
    #[serde(default)]
    link_base: Option<String>,
    #[serde(default)]
    items: Vec<ItemRecord>,
}

#[derive(Debug, Deserialize)]
struct ItemRecord {
    #[serde(default)]
    id: Option<String>,
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    location: Option<String>,
    #[serde(default)]
    living_area: Option<u32>,
    #[serde(default)]
    slug: Option<String>,
    #[serde(default)]
    link: Option<String>,
    #[serde(default)]
    gallery: Vec<GalleryImage>,
}

#[derive(Debug, Deserialize)]
struct GalleryImage {
    #[serde(default)]
    src: Option<String>,
    #[serde(default)]
    full_src: Option<String>,
    #[serde(default)]
    alt: Option<String>,
    #[serde(default)]
    caption: Option<String>,
}

/// Ordered list of display records.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Catalog {
    pub items: Vec<CarouselItem>,
}

impl Catalog {
    pub fn load_from(path: &Path, ids: &mut dyn IdGenerator) -> Result<Self, CatalogError> {
        let content = fs::read_to_string(path).map_err(|e| CatalogError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;
        let file: CatalogFile =
            serde_json::from_str(&content).map_err(|e| CatalogError::ParseError {
                path: path.to_path_buf(),
                source: e,
            })?;

        let catalog = Self::from_file(file, ids);
        tracing::info!(path = %path.display(), items = catalog.items.len(), "Loaded catalog");
        Ok(catalog)
    }

    pub fn from_json(content: &str, ids: &mut dyn IdGenerator) -> Result<Self, serde_json::Error> {
        let file: CatalogFile = serde_json::from_str(content)?;
        Ok(Self::from_file(file, ids))
    }

    fn from_file(file: CatalogFile, ids: &mut dyn IdGenerator) -> Self {
        let link_base = file.link_base.as_deref().map(|b| b.trim_end_matches('/'));
        let items = file
            .items
            .into_iter()
            .map(|record| record.into_item(link_base, ids))
            .collect();
        Self { items }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl ItemRecord {
    fn into_item(self, link_base: Option<&str>, ids: &mut dyn IdGenerator) -> CarouselItem {
        let id = match self.id {
            Some(id) if !id.is_empty() => ItemId::new(id),
            _ => ids.next_id(),
        };

        let link = self.link.or_else(|| match (link_base, self.slug.as_deref()) {
            (Some(base), Some(slug)) if !slug.is_empty() => Some(format!("{base}/{slug}")),
            _ => None,
        });

        let gallery_len = self.gallery.len();
        let cover = self.gallery.into_iter().next();
        let (image, alt_text, caption) = match cover {
            Some(cover) => {
                let image = cover.src.filter(|s| !s.is_empty()).map(|src| MediaRef {
                    src,
                    full_src: cover.full_src,
                });
                (image, cover.alt, cover.caption)
            }
            None => (None, None, None),
        };

        CarouselItem {
            id,
            image,
            title: self.title,
            caption,
            link,
            alt_text,
            location: self.location,
            living_area: self.living_area,
            gallery_len: gallery_len.max(1),
        }
    }
}
