//! Render configuration: spacing, alignment, float, border styles and the
//! per-region overrides that seed style resolution.

use std::fmt;
use std::str::FromStr;

use crate::error::CardenError;
use crate::renderers::charset::BorderGlyphs;

// ─── Spacing ─────────────────────────────────────────────────────────────────

/// Four-sided offset used for padding (inside the border) and margin (outside).
///
/// `Spacing::from(n)` gives `{top: n, right: 3n, bottom: n, left: 3n}`; use
/// struct-update syntax over `Spacing::default()` for a partial record:
///
/// ```
/// use carden::Spacing;
/// let s = Spacing { left: 5, ..Spacing::default() };
/// assert_eq!((s.top, s.right, s.bottom, s.left), (0, 0, 0, 5));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Spacing {
    pub top: usize,
    pub right: usize,
    pub bottom: usize,
    pub left: usize,
}

impl Spacing {
    pub fn new(top: usize, right: usize, bottom: usize, left: usize) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    /// Scalar spacing: the horizontal sides get three times the vertical amount,
    /// saturating at `usize::MAX`.
    pub fn scalar(n: usize) -> Self {
        let side = n.saturating_mul(3);
        Self::new(n, side, n, side)
    }
}

impl From<usize> for Spacing {
    fn from(n: usize) -> Self {
        Self::scalar(n)
    }
}

impl FromStr for Spacing {
    type Err = CardenError;

    /// `"n"` for the scalar rule, or `"top,right,bottom,left"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || CardenError::InvalidOption {
            option: "spacing",
            value: s.to_string(),
        };
        let parts = s
            .split(',')
            .map(|p| p.trim().parse::<usize>())
            .collect::<Result<Vec<_>, _>>()
            .map_err(|_| invalid())?;
        match parts.as_slice() {
            [n] => n
                .checked_mul(3)
                .map(|side| Self::new(*n, side, *n, side))
                .ok_or_else(invalid),
            [top, right, bottom, left] => Ok(Self::new(*top, *right, *bottom, *left)),
            _ => Err(invalid()),
        }
    }
}

// ─── Align / Float ───────────────────────────────────────────────────────────

/// Horizontal alignment of text lines within a region.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub enum Align {
    #[default]
    Left,
    Center,
    Right,
}

/// Horizontal placement of the whole box relative to the terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub enum Float {
    #[default]
    Left,
    Center,
    Right,
}

impl FromStr for Align {
    type Err = CardenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "left" => Ok(Align::Left),
            "center" => Ok(Align::Center),
            "right" => Ok(Align::Right),
            _ => Err(CardenError::InvalidOption {
                option: "align",
                value: s.to_string(),
            }),
        }
    }
}

impl FromStr for Float {
    type Err = CardenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "left" => Ok(Float::Left),
            "center" => Ok(Float::Center),
            "right" => Ok(Float::Right),
            _ => Err(CardenError::InvalidOption {
                option: "float",
                value: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for Align {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Align::Left => "left",
            Align::Center => "center",
            Align::Right => "right",
        })
    }
}

impl fmt::Display for Float {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Float::Left => "left",
            Float::Center => "center",
            Float::Right => "right",
        })
    }
}

// ─── Border style ────────────────────────────────────────────────────────────

/// Caller-supplied glyphs. Any key may be missing; completeness is checked
/// when the style is resolved.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CustomGlyphs {
    pub top_left: Option<String>,
    pub top_right: Option<String>,
    pub bottom_left: Option<String>,
    pub bottom_right: Option<String>,
    pub horizontal: Option<String>,
    pub vertical: Option<String>,
}

impl From<BorderGlyphs> for CustomGlyphs {
    fn from(g: BorderGlyphs) -> Self {
        Self {
            top_left: Some(g.top_left),
            top_right: Some(g.top_right),
            bottom_left: Some(g.bottom_left),
            bottom_right: Some(g.bottom_right),
            horizontal: Some(g.horizontal),
            vertical: Some(g.vertical),
        }
    }
}

impl FromStr for CustomGlyphs {
    type Err = CardenError;

    /// `topLeft=+,topRight=+,...`. Unknown keys are rejected; a `,` glyph
    /// cannot be expressed in this form.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut glyphs = CustomGlyphs::default();
        for pair in s.split(',').filter(|p| !p.is_empty()) {
            let invalid = || CardenError::InvalidOption {
                option: "border glyphs",
                value: pair.to_string(),
            };
            let (key, value) = pair.split_once('=').ok_or_else(invalid)?;
            let slot = match key.trim() {
                "topLeft" => &mut glyphs.top_left,
                "topRight" => &mut glyphs.top_right,
                "bottomLeft" => &mut glyphs.bottom_left,
                "bottomRight" => &mut glyphs.bottom_right,
                "horizontal" => &mut glyphs.horizontal,
                "vertical" => &mut glyphs.vertical,
                _ => return Err(invalid()),
            };
            *slot = Some(value.to_string());
        }
        Ok(glyphs)
    }
}

/// Which glyphs to draw a region's border with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BorderStyle {
    /// A preset from the registry (`single`, `double`, `round`, ...).
    Named(String),
    /// No border at all.
    None,
    /// A border of spaces.
    Blank,
    /// Caller-supplied glyphs.
    Custom(CustomGlyphs),
}

impl Default for BorderStyle {
    fn default() -> Self {
        BorderStyle::Named("single".to_string())
    }
}

impl From<&str> for BorderStyle {
    fn from(name: &str) -> Self {
        match name {
            "none" => BorderStyle::None,
            "blank" => BorderStyle::Blank,
            other => BorderStyle::Named(other.to_string()),
        }
    }
}

impl From<CustomGlyphs> for BorderStyle {
    fn from(glyphs: CustomGlyphs) -> Self {
        BorderStyle::Custom(glyphs)
    }
}

impl From<BorderGlyphs> for BorderStyle {
    fn from(glyphs: BorderGlyphs) -> Self {
        BorderStyle::Custom(glyphs.into())
    }
}

impl FromStr for BorderStyle {
    type Err = CardenError;

    /// Never fails: unknown names surface as `UnknownBorderStyle` at render time.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(BorderStyle::from(s))
    }
}

// ─── Region override ─────────────────────────────────────────────────────────

/// Per-region settings. Each field that is set wins over the matching
/// top-level field of [`RenderConfig`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegionOverride {
    pub border_style: Option<BorderStyle>,
    pub padding: Option<Spacing>,
    pub align: Option<Align>,
    pub border_color: Option<String>,
    pub background_color: Option<String>,
    pub dim_border: Option<bool>,
}

impl RegionOverride {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn border_style(mut self, style: impl Into<BorderStyle>) -> Self {
        self.border_style = Some(style.into());
        self
    }

    pub fn padding(mut self, padding: impl Into<Spacing>) -> Self {
        self.padding = Some(padding.into());
        self
    }

    pub fn align(mut self, align: Align) -> Self {
        self.align = Some(align);
        self
    }

    pub fn border_color(mut self, color: impl Into<String>) -> Self {
        self.border_color = Some(color.into());
        self
    }

    pub fn background_color(mut self, color: impl Into<String>) -> Self {
        self.background_color = Some(color.into());
        self
    }

    pub fn dim_border(mut self, dim: bool) -> Self {
        self.dim_border = Some(dim);
        self
    }
}

// ─── RenderConfig ────────────────────────────────────────────────────────────

/// Full input to a render call, minus the two texts.
///
/// Unset fields fall back to: border style `single`, padding `0`, margin `0`,
/// align `left`, float `left`, no colors, no dimming.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderConfig {
    pub padding: Option<Spacing>,
    pub margin: Option<Spacing>,
    pub border_style: Option<BorderStyle>,
    pub border_color: Option<String>,
    pub background_color: Option<String>,
    pub dim_border: Option<bool>,
    pub align: Option<Align>,
    pub float: Float,
    pub header: Option<RegionOverride>,
    pub content: Option<RegionOverride>,
}

impl RenderConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn padding(mut self, padding: impl Into<Spacing>) -> Self {
        self.padding = Some(padding.into());
        self
    }

    pub fn margin(mut self, margin: impl Into<Spacing>) -> Self {
        self.margin = Some(margin.into());
        self
    }

    pub fn border_style(mut self, style: impl Into<BorderStyle>) -> Self {
        self.border_style = Some(style.into());
        self
    }

    pub fn border_color(mut self, color: impl Into<String>) -> Self {
        self.border_color = Some(color.into());
        self
    }

    pub fn background_color(mut self, color: impl Into<String>) -> Self {
        self.background_color = Some(color.into());
        self
    }

    pub fn dim_border(mut self, dim: bool) -> Self {
        self.dim_border = Some(dim);
        self
    }

    pub fn align(mut self, align: Align) -> Self {
        self.align = Some(align);
        self
    }

    pub fn float(mut self, float: Float) -> Self {
        self.float = float;
        self
    }

    pub fn header(mut self, header: RegionOverride) -> Self {
        self.header = Some(header);
        self
    }

    pub fn content(mut self, content: RegionOverride) -> Self {
        self.content = Some(content);
        self
    }
}

#[cfg(test)]
#[path = "../tests/rust/test_config.rs"]
mod tests;
