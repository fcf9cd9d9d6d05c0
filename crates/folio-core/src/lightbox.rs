//! Lightbox Viewer state machine.
//!
//! The lightbox works on the same [`FilteredView`] the gallery renders,
//! independent of how many items the progressive loader has revealed.
//!
//! ```text
//!   Closed ──select──▶ Open ──next/prev──▶ Transitioning ──loaded──▶ Open
//!     ▲                 │                        │
//!     └─────close───────┴────────close───────────┘
//! ```
//!
//! Each time the current item changes a new [`LoadToken`] is issued. Image
//! load events carry the token they were issued for, so events from an item
//! the user already navigated away from are dropped.

use crate::filter::FilteredView;
use crate::types::{Identified, MediaItem};

/// How a selection is presented, chosen from the viewport width.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InteractionMode {
    /// Selection opens the lightbox
    #[default]
    Desktop,
    /// Items render inline at their natural aspect ratio; selection is ignored
    Inline,
}

impl InteractionMode {
    pub fn from_viewport_width(width: f64, breakpoint_px: u32) -> Self {
        if width < f64::from(breakpoint_px) {
            InteractionMode::Inline
        } else {
            InteractionMode::Desktop
        }
    }
}

/// Which half of the displayed image a pointer is over.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Half {
    Left,
    Right,
}

impl Half {
    /// `offset` is measured from the image's left edge
    pub fn from_offset(offset: f64, width: f64) -> Self {
        if offset < width / 2.0 {
            Half::Left
        } else {
            Half::Right
        }
    }
}

/// Cursor shown over the lightbox image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CursorHint {
    /// Navigation unavailable
    Default,
    /// Navigation available, pointer not over either half yet
    Pointer,
    Previous,
    Next,
}

const CURSOR_LEFT: &str = "url(\"data:image/svg+xml;utf8,%3Csvg xmlns='http://www.w3.org/2000/svg' width='32' height='32' viewBox='0 0 24 24' fill='none' stroke='white' stroke-width='2' stroke-linecap='round' stroke-linejoin='round'%3E%3Cpolyline points='15 18 9 12 15 6'/%3E%3C/svg%3E\") 16 16, auto";
const CURSOR_RIGHT: &str = "url(\"data:image/svg+xml;utf8,%3Csvg xmlns='http://www.w3.org/2000/svg' width='32' height='32' viewBox='0 0 24 24' fill='none' stroke='white' stroke-width='2' stroke-linecap='round' stroke-linejoin='round'%3E%3Cpolyline points='9 18 15 12 9 6'/%3E%3C/svg%3E\") 16 16, auto";

impl CursorHint {
    /// CSS `cursor` value
    pub fn css(&self) -> &'static str {
        match self {
            CursorHint::Default => "default",
            CursorHint::Pointer => "pointer",
            CursorHint::Previous => CURSOR_LEFT,
            CursorHint::Next => CURSOR_RIGHT,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Closed,
    /// Showing an item; its full-resolution image may still be pending
    Open,
    /// Navigated to a new item whose full-resolution image is pending
    Transitioning,
}

/// Full-resolution load state of the current item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageStatus {
    Pending,
    Loaded,
    /// Placeholder and spinner stay up; there is no retry
    Failed,
}

/// Identifies the image load a browser event belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LoadToken(u64);

impl std::fmt::Display for LoadToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "load-{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq)]
struct Current {
    position: usize,
    id: String,
    token: LoadToken,
    status: ImageStatus,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Lightbox {
    mode: InteractionMode,
    navigation_hints: bool,
    phase: Phase,
    current: Option<Current>,
    hover: Option<Half>,
    issued: u64,
}

impl Default for Lightbox {
    fn default() -> Self {
        Self::new(InteractionMode::Desktop, true)
    }
}

impl Lightbox {
    pub fn new(mode: InteractionMode, navigation_hints: bool) -> Self {
        Self {
            mode,
            navigation_hints,
            phase: Phase::Closed,
            current: None,
            hover: None,
            issued: 0,
        }
    }

    pub fn mode(&self) -> InteractionMode {
        self.mode
    }

    /// Switch interaction mode. Going inline closes an open lightbox.
    pub fn set_mode(&mut self, mode: InteractionMode) {
        if mode == self.mode {
            return;
        }
        self.mode = mode;
        if mode == InteractionMode::Inline {
            self.close();
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_open(&self) -> bool {
        self.phase != Phase::Closed
    }

    /// Position of the current item in the view it was opened over
    pub fn position(&self) -> Option<usize> {
        self.current.as_ref().map(|c| c.position)
    }

    pub fn current_id(&self) -> Option<&str> {
        self.current.as_ref().map(|c| c.id.as_str())
    }

    pub fn token(&self) -> Option<LoadToken> {
        self.current.as_ref().map(|c| c.token)
    }

    pub fn image_status(&self) -> Option<ImageStatus> {
        self.current.as_ref().map(|c| c.status)
    }

    fn issue_token(&mut self) -> LoadToken {
        self.issued += 1;
        LoadToken(self.issued)
    }

    fn show<T: Identified>(&mut self, view: &FilteredView<T>, position: usize, phase: Phase) -> bool {
        let Some(item) = view.get(position) else {
            return false;
        };
        let token = self.issue_token();
        self.current = Some(Current {
            position,
            id: item.id().to_string(),
            token,
            status: ImageStatus::Pending,
        });
        self.phase = phase;
        tracing::debug!(position, id = item.id(), ?phase, "Lightbox showing item");
        true
    }

    /// Select the item at `position`. Ignored in inline mode.
    pub fn open<T: Identified>(&mut self, view: &FilteredView<T>, position: usize) -> bool {
        if self.mode == InteractionMode::Inline {
            return false;
        }
        self.hover = None;
        self.show(view, position, Phase::Open)
    }

    /// Select an item by id
    pub fn open_id<T: Identified>(&mut self, view: &FilteredView<T>, id: &str) -> bool {
        match view.position(id) {
            Some(position) => self.open(view, position),
            None => false,
        }
    }

    pub fn close(&mut self) {
        if self.phase != Phase::Closed {
            tracing::debug!("Lightbox closed");
        }
        self.phase = Phase::Closed;
        self.current = None;
        self.hover = None;
    }

    fn step<T: Identified>(&mut self, view: &FilteredView<T>, forward: bool) -> bool {
        let len = view.len();
        let Some(current) = self.current.as_ref() else {
            return false;
        };
        if len < 2 {
            return false;
        }
        let position = if forward {
            (current.position + 1) % len
        } else {
            (current.position + len - 1) % len
        };
        self.show(view, position, Phase::Transitioning)
    }

    /// Next item, wrapping past the end
    pub fn next<T: Identified>(&mut self, view: &FilteredView<T>) -> bool {
        self.step(view, true)
    }

    /// Previous item, wrapping past the start
    pub fn prev<T: Identified>(&mut self, view: &FilteredView<T>) -> bool {
        self.step(view, false)
    }

    /// Click on the image: left half goes back, right half forward
    pub fn click<T: Identified>(&mut self, view: &FilteredView<T>, offset: f64, width: f64) -> bool {
        match Half::from_offset(offset, width) {
            Half::Left => self.prev(view),
            Half::Right => self.next(view),
        }
    }

    /// Pointer moved over the image
    pub fn hover(&mut self, offset: f64, width: f64) {
        if self.is_open() {
            self.hover = Some(Half::from_offset(offset, width));
        }
    }

    /// Pointer left the image
    pub fn leave(&mut self) {
        self.hover = None;
    }

    /// Cursor for a view of `len` items
    pub fn cursor(&self, len: usize) -> CursorHint {
        if !self.navigation_hints || len < 2 {
            return CursorHint::Default;
        }
        match self.hover {
            Some(Half::Left) => CursorHint::Previous,
            Some(Half::Right) => CursorHint::Next,
            None => CursorHint::Pointer,
        }
    }

    /// The full-resolution image for `token` finished loading.
    ///
    /// Returns `false` when the event belongs to an item no longer shown.
    pub fn full_res_loaded(&mut self, token: LoadToken) -> bool {
        match self.current.as_mut() {
            Some(current) if current.token == token => {
                current.status = ImageStatus::Loaded;
                self.phase = Phase::Open;
                true
            }
            _ => false,
        }
    }

    /// The full-resolution image for `token` failed to load
    pub fn full_res_failed(&mut self, token: LoadToken, url: &str) -> bool {
        match self.current.as_mut() {
            Some(current) if current.token == token => {
                tracing::warn!("Failed to load full resolution image: {}", url);
                current.status = ImageStatus::Failed;
                self.phase = Phase::Open;
                true
            }
            _ => false,
        }
    }

    /// Reconcile with a new filtered view.
    ///
    /// Keeps the current item when it is still a member (its position may
    /// move) and closes the lightbox when it is not. Returns `true` if the
    /// lightbox was closed.
    pub fn sync<T: Identified>(&mut self, view: &FilteredView<T>) -> bool {
        let Some(current) = self.current.as_mut() else {
            return false;
        };
        match view.position(&current.id) {
            Some(position) => {
                current.position = position;
                false
            }
            None => {
                tracing::debug!(id = %current.id, "Current item filtered out");
                self.close();
                true
            }
        }
    }

    /// Everything the UI needs to draw the open lightbox
    pub fn frame<'a>(&self, view: &'a FilteredView<MediaItem>) -> Option<LightboxFrame<'a>> {
        let current = self.current.as_ref()?;
        let item = view.get(current.position).filter(|item| item.id == current.id)?;
        let loaded = current.status == ImageStatus::Loaded;
        Some(LightboxFrame {
            item,
            token: current.token,
            placeholder_url: &item.thumbnail_url,
            full_res_url: &item.full_res_url,
            full_res_visible: loaded,
            show_spinner: !loaded,
            cursor: self.cursor(view.len()),
        })
    }
}

/// Render data for the open lightbox.
#[derive(Debug, Clone, PartialEq)]
pub struct LightboxFrame<'a> {
    pub item: &'a MediaItem,
    pub token: LoadToken,
    /// Thumbnail, shown immediately and blurred
    pub placeholder_url: &'a str,
    pub full_res_url: &'a str,
    /// Cross-fade the full image in; never true before its load event
    pub full_res_visible: bool,
    pub show_spinner: bool,
    pub cursor: CursorHint,
}
