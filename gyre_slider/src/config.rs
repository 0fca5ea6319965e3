// Copyright 2025 the Gyre Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Session configuration: cursor, timing, and theme option groups.
//!
//! The engine interprets only the timing group. Cursor and theme are carried
//! as data for the presentation layer so a session's whole configuration
//! lives in one place; they are supplied once at construction and never
//! mutated.

use alloc::string::String;

use peniko::Color;

pub use gyre_clock::Timing;

/// Options for the custom drag cursor drawn by the presentation layer.
#[derive(Clone, Debug, PartialEq)]
pub struct CursorConfig {
    /// Show the custom cursor at all.
    pub enabled: bool,
    /// Cursor diameter in device pixels.
    pub size: f64,
    /// Cursor fill color.
    pub color: Color,
    /// Label shown inside the cursor.
    pub text: String,
    /// Show chevrons flanking the label.
    pub show_arrows: bool,
    /// Label and chevron color.
    pub text_color: Color,
}

impl Default for CursorConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            size: 112.0,
            color: Color::from_rgb8(0xe6, 0x5c, 0x2e),
            text: String::from("DRAG"),
            show_arrows: true,
            text_color: Color::from_rgb8(0xff, 0xff, 0xff),
        }
    }
}

/// Container and overlay theming for the presentation layer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ThemeConfig {
    /// Container background color.
    pub background: Color,
    /// Draw the gradient overlay behind slide text.
    pub show_gradient: bool,
    /// Gradient overlay intensity in `[0, 1]`.
    pub gradient_strength: f64,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            background: Color::from_rgb8(0x0a, 0x0a, 0x0a),
            show_gradient: true,
            gradient_strength: 0.8,
        }
    }
}

/// The full per-session configuration.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SliderConfig {
    /// Drag cursor options (presentation-layer data).
    pub cursor: CursorConfig,
    /// Timing and decay parameters (consumed by the engine).
    pub timing: Timing,
    /// Theme options (presentation-layer data).
    pub theme: ThemeConfig,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cursor_defaults() {
        let cursor = CursorConfig::default();
        assert!(cursor.enabled);
        assert_eq!(cursor.size, 112.0);
        assert_eq!(cursor.text, "DRAG");
        assert!(cursor.show_arrows);
        assert_eq!(cursor.color, Color::from_rgb8(230, 92, 46));
        assert_eq!(cursor.text_color, Color::from_rgb8(255, 255, 255));
    }

    #[test]
    fn theme_defaults() {
        let theme = ThemeConfig::default();
        assert_eq!(theme.background, Color::from_rgb8(10, 10, 10));
        assert!(theme.show_gradient);
        assert_eq!(theme.gradient_strength, 0.8);
    }

    #[test]
    fn config_default_composes_the_groups() {
        let config = SliderConfig::default();
        assert!(config.timing.auto_play);
        assert_eq!(config.timing.drag_sensitivity, 0.000_8);
    }
}
