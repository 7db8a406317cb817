use chrono::{DateTime, Utc};

use crate::foundation::error::{CardError, CardResult};
use crate::model::card::CardConfig;
use crate::store::CardStore;
use crate::store::document::{CardDocument, CardSummary};
use crate::store::slug::{card_title, slug_for};

/// Publishing operations on top of a [`CardStore`].
pub struct CardRepository<S> {
    store: S,
}

impl<S: CardStore> CardRepository<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    pub fn into_inner(self) -> S {
        self.store
    }

    /// Save `config` under its derived slug and return the slug.
    ///
    /// Overwriting keeps the view count. The creation time is kept too, unless the sender or
    /// receiver name changed, in which case the card counts as new.
    #[tracing::instrument(skip(self, config, title), fields(sender = %config.sender_name))]
    pub fn save(
        &mut self,
        config: &CardConfig,
        title: Option<&str>,
        is_public: bool,
        now: DateTime<Utc>,
    ) -> CardResult<String> {
        config.validate()?;
        let mut doc = CardDocument::new(config.clone(), title, is_public, now);
        if let Some(existing) = self.store.get(&doc.slug)? {
            doc.view_count = existing.view_count;
            let same_names = existing.card.sender_name == config.sender_name
                && existing.card.receiver_name == config.receiver_name;
            if same_names {
                doc.created_at = existing.created_at;
            }
            tracing::debug!(slug = %doc.slug, same_names, "overwriting card");
        }
        let slug = doc.slug.clone();
        self.store.put(doc)?;
        tracing::info!(%slug, "card saved");
        Ok(slug)
    }

    /// Load the card behind `slug` and count the view.
    ///
    /// A failed view-count update is logged and does not fail the load.
    #[tracing::instrument(skip(self))]
    pub fn load(&mut self, slug: &str) -> CardResult<Option<CardConfig>> {
        if slug.is_empty() {
            tracing::warn!("load called without a slug");
            return Ok(None);
        }
        let Some(doc) = self.store.get(slug)? else {
            tracing::warn!("card not found");
            return Ok(None);
        };
        if let Err(err) = self.store.increment_views(slug) {
            tracing::warn!(error = %err, "failed to increment view count");
        }
        Ok(Some(doc.card))
    }

    /// Stored document without counting a view.
    pub fn document(&self, slug: &str) -> CardResult<Option<CardDocument>> {
        self.store.get(slug)
    }

    /// Re-address a card after its names change.
    ///
    /// Missing arguments keep the stored values. When the sender or receiver actually changes,
    /// a new document is written under the new slug with a fresh creation time; the old
    /// document stays. Otherwise the document is updated in place under `old_slug`. View
    /// count and visibility carry over either way. Returns the slug the card now lives at.
    #[tracing::instrument(skip(self, now))]
    pub fn rename(
        &mut self,
        old_slug: &str,
        sender: Option<&str>,
        receiver: Option<&str>,
        event: Option<&str>,
        now: DateTime<Utc>,
    ) -> CardResult<String> {
        let original = self
            .store
            .get(old_slug)?
            .ok_or_else(|| CardError::not_found(old_slug))?;

        let new_sender = sender.filter(|s| !s.is_empty());
        let new_receiver = receiver.filter(|s| !s.is_empty());
        let names_changed = new_sender.is_some_and(|s| s != original.card.sender_name)
            || new_receiver.is_some_and(|r| r != original.card.receiver_name);

        let mut card = original.card.clone();
        if let Some(s) = new_sender {
            card.sender_name = s.to_string();
        }
        if let Some(r) = new_receiver {
            card.receiver_name = r.to_string();
        }
        let event_name = event
            .filter(|e| !e.is_empty())
            .map(str::to_string)
            .unwrap_or_else(|| original.event_name.clone());
        if card.event_type == "custom" {
            card.custom_event_name = Some(event_name.clone());
        }

        let new_slug = slug_for(&card.sender_name, &card.receiver_name, &event_name);
        let mut doc = CardDocument {
            title: card_title(&card.sender_name, &card.receiver_name),
            event_emoji: card.event_emoji(),
            card,
            slug: new_slug.clone(),
            event_name,
            is_public: original.is_public,
            view_count: original.view_count,
            created_at: if names_changed { now } else { original.created_at },
            updated_at: now,
            first_media: String::new(),
            first_text: String::new(),
        };
        doc.refresh_previews();

        if names_changed && new_slug != old_slug {
            self.store.put(doc)?;
            tracing::info!(%new_slug, "card re-published under new slug");
            Ok(new_slug)
        } else {
            doc.slug = old_slug.to_string();
            self.store.put(doc)?;
            tracing::info!("card updated in place");
            Ok(old_slug.to_string())
        }
    }

    /// Public cards, newest first.
    pub fn public_feed(&self, limit: usize) -> CardResult<Vec<CardSummary>> {
        let mut docs: Vec<CardDocument> = self
            .store
            .list()?
            .into_iter()
            .filter(|d| d.is_public)
            .collect();
        docs.sort_by(|a, b| b.created_at.cmp(&a.created_at).then_with(|| a.slug.cmp(&b.slug)));
        Ok(docs.iter().take(limit).map(CardDocument::summary).collect())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/store/repository.rs"]
mod tests;
