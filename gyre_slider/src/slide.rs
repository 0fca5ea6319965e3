// Copyright 2025 the Gyre Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Slide descriptors owned by the caller.

use alloc::string::String;
use alloc::vec::Vec;

/// Opaque reference to a slide's image resource.
///
/// The engine never interprets or loads this; it is handed through to the
/// rendering collaborator, which owns decoding and readiness. A slide whose
/// media is not ready is simply not drawn by the collaborator; the engine
/// needs no signal either way.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct MediaRef(String);

impl MediaRef {
    /// Wraps an opaque media handle.
    #[must_use]
    pub fn new(handle: impl Into<String>) -> Self {
        Self(handle.into())
    }

    /// Returns the handle as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for MediaRef {
    fn from(handle: &str) -> Self {
        Self::new(handle)
    }
}

impl From<String> for MediaRef {
    fn from(handle: String) -> Self {
        Self(handle)
    }
}

/// How the presentation layer should render a slide's overlay markup.
///
/// The engine only emits data; it never invokes application code. A slide
/// that wants full overlay control is tagged [`OverlayKind::Custom`] and the
/// presentation layer performs the dispatch, bypassing its default renderer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OverlayKind {
    /// Render the default overlay (subtitle, title, feature tags).
    #[default]
    Standard,
    /// The application supplies the overlay itself.
    Custom,
}

/// A single slide in the carousel.
///
/// Slides are immutable once handed to the engine and are referenced by
/// index throughout; the engine never copies or reorders them.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Slide {
    /// Caller-chosen identity, carried through change events.
    pub id: u64,
    /// Opaque image resource handle for the rendering collaborator.
    pub media: MediaRef,
    /// Main title displayed on the slide.
    pub title: String,
    /// Subtitle or location displayed alongside the title.
    pub subtitle: String,
    /// Optional short feature tags.
    pub features: Vec<String>,
    /// Overlay rendering dispatch for the presentation layer.
    pub overlay: OverlayKind,
}

impl Slide {
    /// Creates a slide with the default overlay and no feature tags.
    #[must_use]
    pub fn new(
        id: u64,
        media: impl Into<MediaRef>,
        title: impl Into<String>,
        subtitle: impl Into<String>,
    ) -> Self {
        Self {
            id,
            media: media.into(),
            title: title.into(),
            subtitle: subtitle.into(),
            features: Vec::new(),
            overlay: OverlayKind::Standard,
        }
    }

    /// Adds feature tags.
    #[must_use]
    pub fn with_features(mut self, features: impl IntoIterator<Item = String>) -> Self {
        self.features = features.into_iter().collect();
        self
    }

    /// Marks the slide as rendering its own overlay.
    #[must_use]
    pub fn with_custom_overlay(mut self) -> Self {
        self.overlay = OverlayKind::Custom;
        self
    }
}

#[cfg(test)]
mod tests {
    use alloc::string::ToString;

    use super::*;

    #[test]
    fn new_slide_uses_the_default_overlay() {
        let slide = Slide::new(7, "textures/dunes.ktx2", "Dunes", "Namib Desert");
        assert_eq!(slide.overlay, OverlayKind::Standard);
        assert!(slide.features.is_empty());
        assert_eq!(slide.media.as_str(), "textures/dunes.ktx2");
    }

    #[test]
    fn builders_set_features_and_overlay() {
        let slide = Slide::new(1, "a.jpg", "A", "B")
            .with_features(["Guided tours".to_string(), "Night sky".to_string()])
            .with_custom_overlay();
        assert_eq!(slide.features.len(), 2);
        assert_eq!(slide.overlay, OverlayKind::Custom);
    }
}
