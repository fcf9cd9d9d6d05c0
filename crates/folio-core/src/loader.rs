//! Progressive Loader: reveals a filtered collection in fixed-size batches.
//!
//! The loader only tracks counts. Rendering code shows
//! `view.prefix(loader.visible_count())` and places a sentinel after it; when
//! the sentinel intersects the viewport the UI asks for a [`LoadTicket`],
//! waits the configured delay, then commits the ticket.
//!
//! Changing the filtered collection resets the loader. Tickets issued before
//! the reset are stale and their commit does nothing.

use std::ops::Range;

use crate::config::GalleryConfig;
use crate::filter::FilteredView;

/// When the sentinel counts as "seen".
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Trigger {
    /// Minimum visible fraction of the sentinel
    pub threshold: f64,
    /// Margin added around the viewport before intersecting
    pub root_margin_px: u32,
}

impl Default for Trigger {
    fn default() -> Self {
        Self::from(&GalleryConfig::default())
    }
}

impl From<&GalleryConfig> for Trigger {
    fn from(config: &GalleryConfig) -> Self {
        Self {
            threshold: config.trigger_threshold,
            root_margin_px: config.root_margin_px,
        }
    }
}

impl Trigger {
    /// Whether an intersection report should start a load
    pub fn fires(&self, intersecting: bool, ratio: f64) -> bool {
        intersecting && ratio >= self.threshold
    }

    /// The margin in CSS syntax, for the observer's `rootMargin`
    pub fn root_margin_css(&self) -> String {
        format!("{}px", self.root_margin_px)
    }
}

/// Permission to commit one batch, valid until the loader resets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use = "a load ticket must be committed or the loader stays busy"]
pub struct LoadTicket {
    epoch: u64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProgressiveLoader {
    batch_size: usize,
    visible_count: usize,
    total: usize,
    in_flight: bool,
    epoch: u64,
    view_generation: Option<u64>,
}

impl ProgressiveLoader {
    /// Loader over an empty collection. A zero batch size is treated as 1.
    pub fn new(batch_size: usize) -> Self {
        let batch_size = batch_size.max(1);
        Self {
            batch_size,
            visible_count: batch_size,
            total: 0,
            in_flight: false,
            epoch: 0,
            view_generation: None,
        }
    }

    pub fn from_config(config: &GalleryConfig) -> Self {
        Self::new(config.batch_size)
    }

    /// Loader already reset to a collection of `total` items
    pub fn with_total(batch_size: usize, total: usize) -> Self {
        let mut loader = Self::new(batch_size);
        loader.reset(total);
        loader
    }

    pub fn batch_size(&self) -> usize {
        self.batch_size
    }

    /// Length of the collection being revealed
    pub fn total(&self) -> usize {
        self.total
    }

    /// Items currently revealed
    pub fn visible_count(&self) -> usize {
        self.visible_count.min(self.total)
    }

    pub fn visible_range(&self) -> Range<usize> {
        0..self.visible_count()
    }

    pub fn has_more(&self) -> bool {
        self.visible_count < self.total
    }

    /// Whether a batch is between request and commit
    pub fn is_loading(&self) -> bool {
        self.in_flight
    }

    /// Start over for a new collection of `total` items.
    ///
    /// Any outstanding ticket becomes stale.
    pub fn reset(&mut self, total: usize) {
        self.epoch += 1;
        self.total = total;
        self.visible_count = self.batch_size;
        self.in_flight = false;
        tracing::debug!(total, batch = self.batch_size, "Loader reset");
    }

    /// Reset if `view` differs from the last view seen.
    ///
    /// Returns `true` when a reset happened.
    pub fn track<T>(&mut self, view: &FilteredView<T>) -> bool {
        if self.view_generation == Some(view.generation()) {
            return false;
        }
        self.view_generation = Some(view.generation());
        self.reset(view.len());
        true
    }

    /// Ask for the next batch. `None` when everything is shown or a batch
    /// is already in flight.
    pub fn request_more(&mut self) -> Option<LoadTicket> {
        if self.in_flight || !self.has_more() {
            return None;
        }
        self.in_flight = true;
        tracing::debug!(visible = self.visible_count(), "Load more started");
        Some(LoadTicket { epoch: self.epoch })
    }

    /// Feed an intersection report for the sentinel
    pub fn observe(&mut self, trigger: &Trigger, intersecting: bool, ratio: f64) -> Option<LoadTicket> {
        if trigger.fires(intersecting, ratio) {
            self.request_more()
        } else {
            None
        }
    }

    /// Reveal the next batch. Returns `false` for a stale ticket.
    pub fn commit(&mut self, ticket: LoadTicket) -> bool {
        if ticket.epoch != self.epoch {
            tracing::debug!("Ignoring load committed after reset");
            return false;
        }
        self.visible_count = (self.visible_count + self.batch_size).min(self.total);
        self.in_flight = false;
        tracing::debug!(
            visible = self.visible_count,
            total = self.total,
            "Load more committed"
        );
        true
    }

    /// Give up on a batch without revealing anything
    pub fn abandon(&mut self, ticket: LoadTicket) {
        if ticket.epoch == self.epoch {
            self.in_flight = false;
        }
    }
}

impl Default for ProgressiveLoader {
    fn default() -> Self {
        Self::from_config(&GalleryConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn load(loader: &mut ProgressiveLoader) -> bool {
        match loader.request_more() {
            Some(ticket) => loader.commit(ticket),
            None => false,
        }
    }

    #[test]
    fn test_starts_at_one_batch() {
        let loader = ProgressiveLoader::with_total(20, 45);
        assert_eq!(loader.visible_count(), 20);
        assert!(loader.has_more());
        assert_eq!(loader.visible_range(), 0..20);
    }

    #[test]
    fn test_short_collection_shows_everything() {
        let loader = ProgressiveLoader::with_total(20, 7);
        assert_eq!(loader.visible_count(), 7);
        assert!(!loader.has_more());
    }

    #[test]
    fn test_forty_five_items_in_three_steps() {
        let mut loader = ProgressiveLoader::with_total(20, 45);
        assert!(load(&mut loader));
        assert_eq!(loader.visible_count(), 40);
        assert!(load(&mut loader));
        assert_eq!(loader.visible_count(), 45);
        assert!(!loader.has_more());
        assert!(loader.request_more().is_none());
    }

    #[test]
    fn test_single_load_in_flight() {
        let mut loader = ProgressiveLoader::with_total(10, 100);
        let ticket = loader.request_more().unwrap();
        assert!(loader.is_loading());
        assert!(loader.request_more().is_none());
        assert!(loader.commit(ticket));
        assert!(!loader.is_loading());
        assert_eq!(loader.visible_count(), 20);
    }

    #[test]
    fn test_reset_invalidates_pending_load() {
        let mut loader = ProgressiveLoader::with_total(20, 100);
        assert!(load(&mut loader));
        let stale = loader.request_more().unwrap();

        loader.reset(30);
        assert_eq!(loader.visible_count(), 20);
        assert!(!loader.is_loading());
        assert!(!loader.commit(stale));
        assert_eq!(loader.visible_count(), 20);
    }

    #[test]
    fn test_trigger_threshold() {
        let trigger = Trigger::default();
        let mut loader = ProgressiveLoader::with_total(20, 50);
        assert!(loader.observe(&trigger, true, 0.3).is_none());
        assert!(loader.observe(&trigger, false, 1.0).is_none());
        let ticket = loader.observe(&trigger, true, 0.5).unwrap();
        assert!(loader.commit(ticket));
        assert_eq!(trigger.root_margin_css(), "100px");
    }

    #[test]
    fn test_track_resets_only_on_new_view() {
        use crate::types::MediaItem;
        use std::sync::Arc;

        let source: Arc<[MediaItem]> = (0..30)
            .map(|i| MediaItem::new(format!("p{i}"), "t", "f", ""))
            .collect();
        let view = FilteredView::all(source);
        let mut loader = ProgressiveLoader::new(20);

        assert!(loader.track(&view));
        assert!(load(&mut loader));
        assert!(!loader.track(&view.clone()));
        assert_eq!(loader.visible_count(), 30);

        assert!(loader.track(&view.search("p1")));
        assert_eq!(loader.visible_count(), 11);
    }

    #[test]
    fn test_abandon_frees_the_flag() {
        let mut loader = ProgressiveLoader::with_total(5, 20);
        let ticket = loader.request_more().unwrap();
        loader.abandon(ticket);
        assert!(!loader.is_loading());
        assert_eq!(loader.visible_count(), 5);
    }
}
