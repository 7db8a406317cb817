use chrono::{DateTime, Utc};

use crate::model::card::CardConfig;
use crate::store::slug::{card_title, slug_for};

/// A persisted card: the config plus publishing metadata.
///
/// The config is flattened into the same JSON object, so a stored document reads as one
/// camelCase record.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardDocument {
    #[serde(flatten)]
    pub card: CardConfig,
    pub slug: String,
    pub title: String,
    pub event_name: String,
    pub event_emoji: String,
    #[serde(default = "default_public")]
    pub is_public: bool,
    #[serde(default)]
    pub view_count: u64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default)]
    pub first_media: String,
    #[serde(default)]
    pub first_text: String,
}

fn default_public() -> bool {
    true
}

impl CardDocument {
    /// Fresh document for `card`; derived fields are filled from the config.
    pub fn new(card: CardConfig, title: Option<&str>, is_public: bool, now: DateTime<Utc>) -> Self {
        let event_name = card.event_name();
        let slug = slug_for(&card.sender_name, &card.receiver_name, &event_name);
        let title = title
            .filter(|t| !t.trim().is_empty())
            .map(str::to_string)
            .unwrap_or_else(|| card_title(&card.sender_name, &card.receiver_name));
        let mut doc = Self {
            event_emoji: card.event_emoji(),
            card,
            slug,
            title,
            event_name,
            is_public,
            view_count: 0,
            created_at: now,
            updated_at: now,
            first_media: String::new(),
            first_text: String::new(),
        };
        doc.refresh_previews();
        doc
    }

    /// Recompute the feed preview fields from the card body.
    pub fn refresh_previews(&mut self) {
        self.first_media = self.card.media.first().map(|m| m.url.clone()).unwrap_or_default();
        self.first_text = self
            .card
            .texts
            .first()
            .map(|t| t.content.clone())
            .unwrap_or_default();
    }

    pub fn summary(&self) -> CardSummary {
        CardSummary {
            slug: self.slug.clone(),
            title: self.title.clone(),
            event_name: self.event_name.clone(),
            event_emoji: self.event_emoji.clone(),
            sender_name: self.card.sender_name.clone(),
            receiver_name: self.card.receiver_name.clone(),
            created_at: self.created_at,
            view_count: self.view_count,
            first_media: self.first_media.clone(),
            first_text: self.first_text.clone(),
        }
    }

    /// URLs of every blob the card references: media, background image, audio.
    pub fn media_urls(&self) -> Vec<&str> {
        let mut urls: Vec<&str> = self.card.media.iter().map(|m| m.url.as_str()).collect();
        urls.extend(self.card.background_settings.image_url.as_deref());
        urls.extend(self.card.audio_url.as_deref());
        urls.retain(|u| !u.is_empty());
        urls
    }
}

/// Feed entry for a public card.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CardSummary {
    pub slug: String,
    pub title: String,
    pub event_name: String,
    pub event_emoji: String,
    pub sender_name: String,
    pub receiver_name: String,
    pub created_at: DateTime<Utc>,
    pub view_count: u64,
    pub first_media: String,
    pub first_text: String,
}

#[cfg(test)]
#[path = "../../tests/unit/store/document.rs"]
mod tests;
