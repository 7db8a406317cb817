use chrono::TimeZone as _;

use super::*;
use crate::model::card::{CardConfig, MediaItem};
use crate::store::document::CardDocument;
use crate::store::memory::MemoryStore;

const DAY: i64 = 86_400;

fn at(secs: i64) -> DateTime<Utc> {
    Utc.timestamp_opt(secs, 0).unwrap()
}

fn doc(sender: &str, created: i64, media: &[&str]) -> CardDocument {
    let card = CardConfig {
        event_type: "birthday".into(),
        sender_name: sender.into(),
        media: media
            .iter()
            .map(|url| MediaItem {
                url: (*url).into(),
                kind: "image".into(),
            })
            .collect(),
        ..CardConfig::default()
    };
    CardDocument::new(card, None, true, at(created))
}

#[derive(Default)]
struct RecordingMedia {
    deleted: Vec<String>,
    fail_on: Option<String>,
}

impl MediaStore for RecordingMedia {
    fn manages(&self, url: &str) -> bool {
        url.starts_with("managed://")
    }

    fn delete(&mut self, url: &str) -> CardResult<()> {
        if self.fail_on.as_deref() == Some(url) {
            return Err(CardError::store("blob backend down"));
        }
        self.deleted.push(url.to_string());
        Ok(())
    }
}

fn seeded() -> MemoryStore {
    let mut store = MemoryStore::new();
    store
        .put(doc("Old", 0, &["managed://a.png", "https://cdn.example/b.png"]))
        .unwrap();
    store.put(doc("New", 40 * DAY, &["managed://c.png"])).unwrap();
    store
}

#[test]
fn sweep_removes_expired_cards_and_their_managed_media() {
    let mut store = seeded();
    let mut media = RecordingMedia::default();
    let report = Janitor::default()
        .sweep(&mut store, &mut media, at(45 * DAY))
        .unwrap();
    assert_eq!(report.documents_deleted, 1);
    assert_eq!(report.media_deleted, 1);
    assert_eq!(media.deleted, vec!["managed://a.png"]);
    assert_eq!(store.len(), 1);
    assert!(store.get("new-wishes-you-birthday").unwrap().is_some());
}

#[test]
fn media_failures_do_not_stop_the_sweep() {
    let mut store = seeded();
    let mut media = RecordingMedia {
        fail_on: Some("managed://a.png".into()),
        ..RecordingMedia::default()
    };
    let report = Janitor::default()
        .sweep(&mut store, &mut media, at(45 * DAY))
        .unwrap();
    assert_eq!(report.media_failed, 1);
    assert_eq!(report.documents_deleted, 1);
}

#[test]
fn cards_exactly_at_the_cutoff_survive() {
    let mut store = MemoryStore::new();
    store.put(doc("Edge", 0, &[])).unwrap();
    let report = Janitor::new(30, 24)
        .sweep(&mut store, &mut RecordingMedia::default(), at(30 * DAY))
        .unwrap();
    assert_eq!(report, SweepReport::default());
    assert_eq!(store.len(), 1);
}

#[test]
fn sweep_runs_at_most_once_per_interval() {
    let mut store = seeded();
    let mut media = RecordingMedia::default();
    let mut janitor = Janitor::default();
    assert!(janitor.is_due(at(0)));
    assert!(janitor.sweep_if_due(&mut store, &mut media, at(45 * DAY)).unwrap().is_some());
    assert_eq!(janitor.last_sweep(), Some(at(45 * DAY)));
    assert!(
        janitor
            .sweep_if_due(&mut store, &mut media, at(45 * DAY + 3600))
            .unwrap()
            .is_none()
    );
    assert!(janitor.sweep_if_due(&mut store, &mut media, at(46 * DAY)).unwrap().is_some());
}

#[test]
fn fs_media_store_deletes_files_under_its_root() {
    let root = std::path::PathBuf::from("target").join("janitor_unit").join("media");
    std::fs::create_dir_all(&root).unwrap();
    std::fs::write(root.join("a.png"), b"x").unwrap();
    let mut media = FsMediaStore::new(&root, "media://");
    assert!(media.manages("media://a.png"));
    assert!(!media.manages("https://x/a.png"));
    media.delete("media://a.png").unwrap();
    assert!(!root.join("a.png").exists());
    media.delete("media://a.png").unwrap();
    assert!(media.delete("media://../escape.png").is_err());
    assert!(media.delete("https://x/a.png").is_err());
}
