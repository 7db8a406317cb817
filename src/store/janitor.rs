//! Retention sweep for old cards and the blobs they reference.

use std::path::{Path, PathBuf};

use chrono::{DateTime, Duration, Utc};

use crate::foundation::error::{CardError, CardResult};
use crate::store::CardStore;

pub const DEFAULT_RETENTION_DAYS: i64 = 30;
pub const DEFAULT_CLEANUP_INTERVAL_HOURS: i64 = 24;

/// Blob storage for uploaded media.
pub trait MediaStore {
    /// Whether this store owns `url`. Foreign URLs are never deleted.
    fn manages(&self, url: &str) -> bool;

    /// Delete the blob behind `url`. A blob that is already gone is not an error.
    fn delete(&mut self, url: &str) -> CardResult<()>;
}

/// Media stored as files under `root`, addressed by URLs starting with `prefix`.
#[derive(Clone, Debug)]
pub struct FsMediaStore {
    root: PathBuf,
    prefix: String,
}

impl FsMediaStore {
    pub fn new(root: impl Into<PathBuf>, prefix: impl Into<String>) -> Self {
        Self {
            root: root.into(),
            prefix: prefix.into(),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn path_for(&self, url: &str) -> CardResult<PathBuf> {
        let rel = url
            .strip_prefix(&self.prefix)
            .map(|r| r.trim_start_matches('/'))
            .filter(|r| !r.is_empty())
            .ok_or_else(|| CardError::store(format!("unmanaged media url '{url}'")))?;
        let rel = Path::new(rel);
        let escapes = rel
            .components()
            .any(|c| !matches!(c, std::path::Component::Normal(_)));
        if escapes {
            return Err(CardError::store(format!("media url escapes store: '{url}'")));
        }
        Ok(self.root.join(rel))
    }
}

impl MediaStore for FsMediaStore {
    fn manages(&self, url: &str) -> bool {
        !self.prefix.is_empty() && url.starts_with(&self.prefix)
    }

    fn delete(&mut self, url: &str) -> CardResult<()> {
        let path = self.path_for(url)?;
        match std::fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(anyhow::Error::new(e)
                .context(format!("delete media '{}'", path.display()))
                .into()),
        }
    }
}

/// Outcome of one sweep.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SweepReport {
    pub documents_deleted: usize,
    pub media_deleted: usize,
    pub media_failed: usize,
}

/// Deletes cards older than the retention window, at most once per interval.
#[derive(Clone, Debug)]
pub struct Janitor {
    retention: Duration,
    interval: Duration,
    last_sweep: Option<DateTime<Utc>>,
}

impl Default for Janitor {
    fn default() -> Self {
        Self::new(DEFAULT_RETENTION_DAYS, DEFAULT_CLEANUP_INTERVAL_HOURS)
    }
}

impl Janitor {
    pub fn new(retention_days: i64, interval_hours: i64) -> Self {
        Self {
            retention: Duration::days(retention_days.max(0)),
            interval: Duration::hours(interval_hours.max(0)),
            last_sweep: None,
        }
    }

    pub fn last_sweep(&self) -> Option<DateTime<Utc>> {
        self.last_sweep
    }

    pub fn is_due(&self, now: DateTime<Utc>) -> bool {
        self.last_sweep.is_none_or(|last| now - last >= self.interval)
    }

    /// Run [`Janitor::sweep`] unless one already ran within the interval.
    pub fn sweep_if_due<S, M>(
        &mut self,
        store: &mut S,
        media: &mut M,
        now: DateTime<Utc>,
    ) -> CardResult<Option<SweepReport>>
    where
        S: CardStore,
        M: MediaStore,
    {
        if !self.is_due(now) {
            tracing::debug!("retention sweep not due");
            return Ok(None);
        }
        self.last_sweep = Some(now);
        self.sweep(store, media, now).map(Some)
    }

    /// Delete every card created before `now - retention`, media first.
    ///
    /// Media failures are counted and logged; the documents are deleted regardless.
    #[tracing::instrument(skip(self, store, media))]
    pub fn sweep<S, M>(
        &self,
        store: &mut S,
        media: &mut M,
        now: DateTime<Utc>,
    ) -> CardResult<SweepReport>
    where
        S: CardStore,
        M: MediaStore,
    {
        let cutoff = now - self.retention;
        let expired: Vec<_> = store
            .list()?
            .into_iter()
            .filter(|doc| doc.created_at < cutoff)
            .collect();
        let mut report = SweepReport::default();
        if expired.is_empty() {
            tracing::debug!("no expired cards");
            return Ok(report);
        }

        for doc in &expired {
            let managed: Vec<&str> = doc
                .media_urls()
                .into_iter()
                .filter(|u| media.manages(u))
                .collect();
            for url in managed {
                match media.delete(url) {
                    Ok(()) => report.media_deleted += 1,
                    Err(err) => {
                        report.media_failed += 1;
                        tracing::warn!(
                            slug = %doc.slug,
                            url,
                            error = %err,
                            "failed to delete media"
                        );
                    }
                }
            }
        }
        for doc in &expired {
            if store.delete(&doc.slug)? {
                report.documents_deleted += 1;
            }
        }
        tracing::info!(
            documents = report.documents_deleted,
            media = report.media_deleted,
            media_failed = report.media_failed,
            "retention sweep finished"
        );
        Ok(report)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/store/janitor.rs"]
mod tests;
