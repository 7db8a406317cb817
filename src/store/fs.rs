use std::path::{Path, PathBuf};

use anyhow::Context as _;

use crate::foundation::error::{CardError, CardResult};
use crate::store::CardStore;
use crate::store::document::CardDocument;
use crate::store::slug::is_valid_slug;

/// One pretty-printed JSON file per slug under `root`.
#[derive(Clone, Debug)]
pub struct FsStore {
    root: PathBuf,
}

impl FsStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn path_for(&self, slug: &str) -> CardResult<PathBuf> {
        if !is_valid_slug(slug) {
            return Err(CardError::validation(format!("invalid slug '{slug}'")));
        }
        Ok(self.root.join(format!("{slug}.json")))
    }

    fn read(path: &Path) -> CardResult<CardDocument> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("read card document '{}'", path.display()))?;
        Ok(serde_json::from_str(&text)?)
    }
}

impl CardStore for FsStore {
    fn get(&self, slug: &str) -> CardResult<Option<CardDocument>> {
        let path = self.path_for(slug)?;
        if !path.exists() {
            return Ok(None);
        }
        Self::read(&path).map(Some)
    }

    #[tracing::instrument(skip(self, doc), fields(slug = %doc.slug))]
    fn put(&mut self, doc: CardDocument) -> CardResult<()> {
        let path = self.path_for(&doc.slug)?;
        std::fs::create_dir_all(&self.root)
            .with_context(|| format!("create store dir '{}'", self.root.display()))?;
        let json = serde_json::to_string_pretty(&doc)?;
        // Readers never see a partially written document.
        let tmp = path.with_extension("json.tmp");
        std::fs::write(&tmp, json).with_context(|| format!("write '{}'", tmp.display()))?;
        std::fs::rename(&tmp, &path)
            .with_context(|| format!("move '{}' into place", path.display()))?;
        Ok(())
    }

    fn delete(&mut self, slug: &str) -> CardResult<bool> {
        let path = self.path_for(slug)?;
        match std::fs::remove_file(&path) {
            Ok(()) => Ok(true),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(false),
            Err(e) => Err(anyhow::Error::new(e)
                .context(format!("delete '{}'", path.display()))
                .into()),
        }
    }

    fn list(&self) -> CardResult<Vec<CardDocument>> {
        if !self.root.exists() {
            return Ok(Vec::new());
        }
        let entries = std::fs::read_dir(&self.root)
            .with_context(|| format!("list store dir '{}'", self.root.display()))?;
        let mut docs = Vec::new();
        for entry in entries {
            let path = entry.context("read store dir entry")?.path();
            if path.extension().and_then(|e| e.to_str()) != Some("json") {
                continue;
            }
            match Self::read(&path) {
                Ok(doc) => docs.push(doc),
                Err(err) => {
                    tracing::warn!(
                        path = %path.display(),
                        error = %err,
                        "skipping unreadable card document"
                    );
                }
            }
        }
        docs.sort_by(|a, b| a.slug.cmp(&b.slug));
        Ok(docs)
    }

    fn increment_views(&mut self, slug: &str) -> CardResult<u64> {
        let mut doc = self.get(slug)?.ok_or_else(|| CardError::not_found(slug))?;
        doc.view_count += 1;
        let count = doc.view_count;
        self.put(doc)?;
        Ok(count)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/store/fs.rs"]
mod tests;
