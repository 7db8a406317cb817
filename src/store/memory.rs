use std::collections::BTreeMap;

use crate::foundation::error::{CardError, CardResult};
use crate::store::CardStore;
use crate::store::document::CardDocument;

/// In-process store, used by tests and one-shot CLI runs.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    docs: BTreeMap<String, CardDocument>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.docs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.docs.is_empty()
    }
}

impl CardStore for MemoryStore {
    fn get(&self, slug: &str) -> CardResult<Option<CardDocument>> {
        Ok(self.docs.get(slug).cloned())
    }

    fn put(&mut self, doc: CardDocument) -> CardResult<()> {
        self.docs.insert(doc.slug.clone(), doc);
        Ok(())
    }

    fn delete(&mut self, slug: &str) -> CardResult<bool> {
        Ok(self.docs.remove(slug).is_some())
    }

    fn list(&self) -> CardResult<Vec<CardDocument>> {
        Ok(self.docs.values().cloned().collect())
    }

    fn increment_views(&mut self, slug: &str) -> CardResult<u64> {
        let doc = self
            .docs
            .get_mut(slug)
            .ok_or_else(|| CardError::not_found(slug))?;
        doc.view_count += 1;
        Ok(doc.view_count)
    }
}
