//! Gallery carousel window and like bookkeeping.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::feeds::MediaItem;

/// Storage key the web crate persists likes under.
pub const LIKES_STORAGE_KEY: &str = "cpbraGalleryLikes";

/// Items shown side by side.
pub const DEFAULT_WINDOW: usize = 3;

/// Where a freshly fetched batch lands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchDirection {
    Left,
    Right,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Carousel {
    media: Vec<MediaItem>,
    current_index: usize,
    window: usize,
    loading: bool,
}

impl Default for Carousel {
    fn default() -> Self {
        Self::new(DEFAULT_WINDOW)
    }
}

impl Carousel {
    #[must_use]
    pub fn new(window: usize) -> Self {
        Self {
            media: Vec::new(),
            current_index: 0,
            window: window.max(1),
            loading: false,
        }
    }

    /// Step right. Returns a fetch request when the window nears the end of the list.
    ///
    /// Ignored while a fetch is in flight.
    pub fn next(&mut self) -> Option<FetchDirection> {
        if self.loading {
            return None;
        }
        let request = (self.current_index + self.window + 1 >= self.media.len())
            .then_some(FetchDirection::Right);
        if self.current_index + 1 < self.media.len() {
            self.current_index += 1;
        }
        request
    }

    /// Step left, or ask for a batch to prepend when already at the start.
    pub fn prev(&mut self) -> Option<FetchDirection> {
        if self.loading {
            return None;
        }
        if self.current_index == 0 {
            Some(FetchDirection::Left)
        } else {
            self.current_index -= 1;
            None
        }
    }

    pub const fn begin_fetch(&mut self) {
        self.loading = true;
    }

    /// Merge a batch. The first batch replaces an empty list; a left batch
    /// shifts the index so the visible items stay put.
    pub fn absorb(&mut self, batch: Vec<MediaItem>, direction: FetchDirection) {
        self.loading = false;
        if self.media.is_empty() {
            self.media = batch;
            return;
        }
        match direction {
            FetchDirection::Left => {
                self.current_index += batch.len();
                self.media.splice(0..0, batch);
            }
            FetchDirection::Right => self.media.extend(batch),
        }
    }

    /// Finish a failed fetch without touching the list.
    pub const fn fetch_failed(&mut self) {
        self.loading = false;
    }

    #[must_use]
    pub fn visible(&self) -> &[MediaItem] {
        let start = self.current_index.min(self.media.len());
        let end = (start + self.window).min(self.media.len());
        &self.media[start..end]
    }

    #[must_use]
    pub fn media(&self) -> &[MediaItem] {
        &self.media
    }

    #[must_use]
    pub const fn current_index(&self) -> usize {
        self.current_index
    }

    #[must_use]
    pub const fn is_loading(&self) -> bool {
        self.loading
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Reaction {
    Like,
}

/// Title -> reaction, as persisted in local storage.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Likes(BTreeMap<String, Reaction>);

impl Likes {
    /// Read stored likes. Cleared entries are stored as `null` and skipped.
    ///
    /// # Errors
    ///
    /// Returns the JSON error for unreadable data so the caller can log it.
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        let stored: BTreeMap<String, Option<Reaction>> = serde_json::from_str(raw)?;
        Ok(Self(
            stored
                .into_iter()
                .filter_map(|(title, reaction)| reaction.map(|r| (title, r)))
                .collect(),
        ))
    }

    /// # Errors
    ///
    /// Propagates serialization failures.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(&self.0)
    }

    /// Set `reaction` on `title`; setting the same reaction again clears it.
    pub fn toggle(&mut self, title: &str, reaction: Reaction) {
        if self.0.get(title) == Some(&reaction) {
            self.0.remove(title);
        } else {
            self.0.insert(title.to_string(), reaction);
        }
    }

    #[must_use]
    pub fn reaction(&self, title: &str) -> Option<Reaction> {
        self.0.get(title).copied()
    }

    #[must_use]
    pub fn is_liked(&self, title: &str) -> bool {
        self.reaction(title) == Some(Reaction::Like)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn batch(prefix: &str, n: usize) -> Vec<MediaItem> {
        (0..n)
            .map(|i| MediaItem {
                image: format!("/{prefix}{i}.jpg"),
                title: format!("{prefix}{i}"),
                description: String::new(),
            })
            .collect()
    }

    fn titles(items: &[MediaItem]) -> Vec<&str> {
        items.iter().map(|m| m.title.as_str()).collect()
    }

    #[test]
    fn first_batch_fills_window() {
        let mut carousel = Carousel::default();
        carousel.begin_fetch();
        carousel.absorb(batch("a", 5), FetchDirection::Right);
        assert!(!carousel.is_loading());
        assert_eq!(titles(carousel.visible()), ["a0", "a1", "a2"]);
    }

    #[test]
    fn next_requests_more_near_the_end() {
        let mut carousel = Carousel::default();
        carousel.absorb(batch("a", 6), FetchDirection::Right);
        assert_eq!(carousel.next(), None);
        assert_eq!(carousel.next(), None);
        assert_eq!(carousel.current_index(), 2);
        assert_eq!(carousel.next(), Some(FetchDirection::Right));
        assert_eq!(carousel.current_index(), 3);
    }

    #[test]
    fn next_stops_on_last_item() {
        let mut carousel = Carousel::default();
        carousel.absorb(batch("a", 2), FetchDirection::Right);
        carousel.next();
        carousel.next();
        assert_eq!(carousel.current_index(), 1);
        assert_eq!(titles(carousel.visible()), ["a1"]);
    }

    #[test]
    fn prev_at_start_prepends_and_keeps_view() {
        let mut carousel = Carousel::default();
        carousel.absorb(batch("a", 3), FetchDirection::Right);
        assert_eq!(carousel.prev(), Some(FetchDirection::Left));
        carousel.begin_fetch();
        carousel.absorb(batch("b", 3), FetchDirection::Left);
        assert_eq!(carousel.current_index(), 3);
        assert_eq!(titles(carousel.visible()), ["a0", "a1", "a2"]);
        assert_eq!(carousel.prev(), None);
        assert_eq!(titles(carousel.visible()), ["b2", "a0", "a1"]);
    }

    #[test]
    fn navigation_is_ignored_while_loading() {
        let mut carousel = Carousel::default();
        carousel.absorb(batch("a", 6), FetchDirection::Right);
        carousel.begin_fetch();
        assert_eq!(carousel.next(), None);
        assert_eq!(carousel.current_index(), 0);
        carousel.fetch_failed();
        assert_eq!(carousel.media().len(), 6);
    }

    #[test]
    fn empty_carousel_requests_both_ways() {
        let mut carousel = Carousel::default();
        assert!(carousel.visible().is_empty());
        assert_eq!(carousel.next(), Some(FetchDirection::Right));
        assert_eq!(carousel.prev(), Some(FetchDirection::Left));
    }

    #[test]
    fn toggling_same_reaction_clears_it() {
        let mut likes = Likes::default();
        likes.toggle("Finals", Reaction::Like);
        assert!(likes.is_liked("Finals"));
        likes.toggle("Finals", Reaction::Like);
        assert!(!likes.is_liked("Finals"));
    }

    #[test]
    fn stored_nulls_are_skipped() {
        let likes = Likes::from_json(r#"{"Finals":"like","Tryouts":null}"#).expect("likes");
        assert!(likes.is_liked("Finals"));
        assert_eq!(likes.reaction("Tryouts"), None);
        assert_eq!(likes.to_json().expect("json"), r#"{"Finals":"like"}"#);
    }
}
