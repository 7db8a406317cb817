//! Slug-keyed card documents: storage backends, the publishing repository and the
//! retention sweep.

pub mod document;
pub mod fs;
pub mod janitor;
pub mod memory;
pub mod repository;
pub mod slug;

use crate::foundation::error::CardResult;
use crate::store::document::CardDocument;

/// Read/write contract of a card document backend.
pub trait CardStore {
    fn get(&self, slug: &str) -> CardResult<Option<CardDocument>>;

    /// Insert or replace the document stored under `doc.slug`.
    fn put(&mut self, doc: CardDocument) -> CardResult<()>;

    /// Returns `false` when nothing was stored under `slug`.
    fn delete(&mut self, slug: &str) -> CardResult<bool>;

    fn list(&self) -> CardResult<Vec<CardDocument>>;

    /// Bump the view counter and return the new value.
    fn increment_views(&mut self, slug: &str) -> CardResult<u64>;
}
