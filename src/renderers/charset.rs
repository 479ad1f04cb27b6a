//! Border glyph sets: the named preset registry, the synthetic "none" and
//! "blank" sets, and validation of caller-supplied glyphs.

use crate::config::{BorderStyle, CustomGlyphs};
use crate::error::{CardenError, Result};

// ─── BorderGlyphs ────────────────────────────────────────────────────────────

/// The six strings used to draw a box's corners and edges.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BorderGlyphs {
    pub top_left: String,
    pub top_right: String,
    pub bottom_left: String,
    pub bottom_right: String,
    pub horizontal: String,
    pub vertical: String,
}

impl BorderGlyphs {
    pub fn new(
        top_left: &str,
        top_right: &str,
        bottom_left: &str,
        bottom_right: &str,
        horizontal: &str,
        vertical: &str,
    ) -> Self {
        Self {
            top_left: top_left.to_string(),
            top_right: top_right.to_string(),
            bottom_left: bottom_left.to_string(),
            bottom_right: bottom_right.to_string(),
            horizontal: horizontal.to_string(),
            vertical: vertical.to_string(),
        }
    }

    /// Every glyph empty: the box collapses to its body lines.
    pub fn none() -> Self {
        Self::uniform("")
    }

    /// Every glyph a single space: an invisible border that still takes room.
    pub fn blank() -> Self {
        Self::uniform(" ")
    }

    fn uniform(glyph: &str) -> Self {
        Self::new(glyph, glyph, glyph, glyph, glyph, glyph)
    }

    /// Look up a named preset.
    pub fn preset(name: &str) -> Option<Self> {
        PRESETS
            .iter()
            .find(|p| p.name == name)
            .map(|p| Self::from_chars(p.chars))
    }

    fn from_chars([tl, tr, bl, br, h, v]: [char; 6]) -> Self {
        Self {
            top_left: tl.to_string(),
            top_right: tr.to_string(),
            bottom_left: bl.to_string(),
            bottom_right: br.to_string(),
            horizontal: h.to_string(),
            vertical: v.to_string(),
        }
    }

    /// Resolve a border style into concrete glyphs.
    ///
    /// Names are looked up in the registry; custom sets must carry all six
    /// glyphs as non-empty strings.
    pub fn resolve(style: &BorderStyle) -> Result<Self> {
        match style {
            BorderStyle::None => Ok(Self::none()),
            BorderStyle::Blank => Ok(Self::blank()),
            BorderStyle::Named(name) => {
                Self::preset(name).ok_or_else(|| CardenError::UnknownBorderStyle(name.clone()))
            }
            BorderStyle::Custom(custom) => validate_custom(custom),
        }
    }
}

fn validate_custom(custom: &CustomGlyphs) -> Result<BorderGlyphs> {
    fn required(value: &Option<String>, key: &'static str) -> Result<String> {
        match value {
            Some(glyph) if !glyph.is_empty() => Ok(glyph.clone()),
            _ => Err(CardenError::InvalidBorderStyle(key)),
        }
    }

    // Checked in this order so the first reported key is stable.
    let top_left = required(&custom.top_left, "topLeft")?;
    let top_right = required(&custom.top_right, "topRight")?;
    let bottom_right = required(&custom.bottom_right, "bottomRight")?;
    let bottom_left = required(&custom.bottom_left, "bottomLeft")?;
    let vertical = required(&custom.vertical, "vertical")?;
    let horizontal = required(&custom.horizontal, "horizontal")?;

    Ok(BorderGlyphs {
        top_left,
        top_right,
        bottom_left,
        bottom_right,
        horizontal,
        vertical,
    })
}

// ─── Registry ────────────────────────────────────────────────────────────────

struct Preset {
    name: &'static str,
    /// top_left, top_right, bottom_left, bottom_right, horizontal, vertical
    chars: [char; 6],
}

/// Sorted by name.
const PRESETS: &[Preset] = &[
    Preset {
        name: "classic",
        chars: ['+', '+', '+', '+', '-', '|'],
    },
    Preset {
        name: "double",
        chars: ['╔', '╗', '╚', '╝', '═', '║'],
    },
    Preset {
        name: "doubleSingle",
        chars: ['╒', '╕', '╘', '╛', '═', '│'],
    },
    Preset {
        name: "round",
        chars: ['╭', '╮', '╰', '╯', '─', '│'],
    },
    Preset {
        name: "single",
        chars: ['┌', '┐', '└', '┘', '─', '│'],
    },
    Preset {
        name: "singleDouble",
        chars: ['╓', '╖', '╙', '╜', '─', '║'],
    },
];

/// All named presets with their glyphs, sorted by name.
///
/// "none" and "blank" are not registry entries.
pub fn border_styles() -> Vec<(&'static str, BorderGlyphs)> {
    PRESETS
        .iter()
        .map(|p| (p.name, BorderGlyphs::from_chars(p.chars)))
        .collect()
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
#[path = "../../tests/rust/test_renderers_charset.rs"]
mod tests;
