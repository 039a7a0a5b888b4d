//! Modal overlay state for the game showcase page.
//!
//! The overlay is a small finite-state machine: components translate clicks
//! and key presses into [`ViewerEvent`]s and replace the current state with
//! the result of [`ViewerState::transition`].

use crate::media::{asset_url, MediaItem};
use crate::timeline::TimelineEntry;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum ViewerState {
    #[default]
    Closed,
    /// `images` is never empty and `index` always points into it.
    ShowingImage { images: Vec<String>, index: usize },
    ShowingVideo { external_id: String },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ViewerEvent {
    OpenImage { images: Vec<String>, index: usize },
    OpenVideo(String),
    Close,
    Next,
    Previous,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewerKey {
    Escape,
    ArrowLeft,
    ArrowRight,
}

impl ViewerEvent {
    /// Key presses only produce events the current state can act on.
    pub fn from_key(key: ViewerKey, state: &ViewerState) -> Option<Self> {
        match (key, state) {
            (_, ViewerState::Closed) => None,
            (ViewerKey::Escape, _) => Some(ViewerEvent::Close),
            (ViewerKey::ArrowRight, state) if state.can_navigate() => Some(ViewerEvent::Next),
            (ViewerKey::ArrowLeft, state) if state.can_navigate() => Some(ViewerEvent::Previous),
            _ => None,
        }
    }
}

impl ViewerState {
    pub fn transition(self, event: ViewerEvent) -> ViewerState {
        match (self, event) {
            (state, ViewerEvent::OpenImage { images, .. }) if images.is_empty() => state,
            (_, ViewerEvent::OpenImage { images, index }) => {
                let index = index.min(images.len() - 1);
                ViewerState::ShowingImage { images, index }
            }
            (_, ViewerEvent::OpenVideo(external_id)) => ViewerState::ShowingVideo { external_id },
            (_, ViewerEvent::Close) => ViewerState::Closed,
            (ViewerState::ShowingImage { images, index }, ViewerEvent::Next) => {
                let index = (index + 1) % images.len();
                ViewerState::ShowingImage { images, index }
            }
            (ViewerState::ShowingImage { images, index }, ViewerEvent::Previous) => {
                let index = (index + images.len() - 1) % images.len();
                ViewerState::ShowingImage { images, index }
            }
            (state, ViewerEvent::Next | ViewerEvent::Previous) => state,
        }
    }

    pub fn is_open(&self) -> bool {
        !matches!(self, ViewerState::Closed)
    }

    pub fn can_navigate(&self) -> bool {
        matches!(self, ViewerState::ShowingImage { images, .. } if images.len() > 1)
    }

    /// Current image URL with its 1-based position, for the counter.
    pub fn current_image(&self) -> Option<(&str, usize, usize)> {
        match self {
            ViewerState::ShowingImage { images, index } => images
                .get(*index)
                .map(|url| (url.as_str(), *index + 1, images.len())),
            _ => None,
        }
    }
}

/// Resolved URLs of every image in the entry, in display order.
pub fn image_set(entry: &TimelineEntry, base_path: &str) -> Vec<String> {
    entry
        .image_paths()
        .map(|path| asset_url(base_path, path))
        .collect()
}

/// Event for a click on one of the entry's media thumbnails.
pub fn open_event(entry: &TimelineEntry, base_path: &str, item: &MediaItem) -> Option<ViewerEvent> {
    match item {
        MediaItem::Image { path } => open_image_event(entry, base_path, path),
        MediaItem::Video {
            external_id: Some(id),
            ..
        } => Some(ViewerEvent::OpenVideo(id.to_string())),
        MediaItem::Video {
            external_id: None, ..
        } => None,
    }
}

pub fn open_image_event(entry: &TimelineEntry, base_path: &str, path: &str) -> Option<ViewerEvent> {
    let images = image_set(entry, base_path);
    let clicked = asset_url(base_path, path);
    let index = images.iter().position(|url| *url == clicked)?;
    Some(ViewerEvent::OpenImage { images, index })
}
