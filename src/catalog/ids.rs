//! Id generation for records that arrive without an id.
//!
//! Generators are owned by whoever ingests records, so two catalogs never
//! share a counter.

use uuid::Uuid;

use super::item::ItemId;

/// Source of fallback item ids.
pub trait IdGenerator {
    fn next_id(&mut self) -> ItemId;
}

/// Deterministic `prefix-N` ids, counting from zero.
#[derive(Debug, Clone)]
pub struct SequentialIds {
    prefix: String,
    next: u64,
}

impl SequentialIds {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            next: 0,
        }
    }
}

impl Default for SequentialIds {
    fn default() -> Self {
        Self::new("item")
    }
}

impl IdGenerator for SequentialIds {
    fn next_id(&mut self) -> ItemId {
        let id = ItemId::new(format!("{}-{}", self.prefix, self.next));
        self.next += 1;
        id
    }
}

/// Random UUID v4 ids.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomIds;

impl IdGenerator for RandomIds {
    fn next_id(&mut self) -> ItemId {
        ItemId::new(Uuid::new_v4().to_string())
    }
}
