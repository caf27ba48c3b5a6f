//! Content records: display items, id generation and catalog ingestion.

mod ids;
mod item;
mod loader;

pub use ids::{IdGenerator, RandomIds, SequentialIds};
pub use item::{CarouselItem, ItemId, MediaRef};
pub use loader::{Catalog, CatalogError};
