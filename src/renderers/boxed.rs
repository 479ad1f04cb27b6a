//! Header + content box renderer.
//!
//! Pipeline: validate colors → resolve each region's style → align text →
//! add vertical padding → measure → place horizontally → draw edges and
//! bodies → join.

use tracing::{debug, trace};

use super::Renderer;
use super::charset::BorderGlyphs;
use super::color::{Color, Styler};
use super::terminal::{SystemTerminal, Terminal};
use super::text::{align_lines, visible_width, widest_line};
use crate::config::{Align, BorderStyle, Float, RegionOverride, RenderConfig, Spacing};
use crate::error::{CardenError, Result};

const NL: &str = "\n";
const PAD: &str = " ";

// ─── Color validation ────────────────────────────────────────────────────────

/// Parsed border/background colors of one configuration level.
#[derive(Debug, Clone, Copy, Default)]
struct LevelColors {
    border: Option<Color>,
    background: Option<Color>,
}

/// Colors of all three configuration levels, validated up front.
#[derive(Debug, Clone, Copy, Default)]
struct Palette {
    top: LevelColors,
    header: LevelColors,
    content: LevelColors,
}

fn parse_color(field: &'static str, token: Option<&String>) -> Result<Option<Color>> {
    let Some(token) = token else { return Ok(None) };
    Color::parse(token)
        .map(Some)
        .ok_or_else(|| CardenError::InvalidColor {
            field,
            value: token.clone(),
        })
}

fn validate_colors(config: &RenderConfig) -> Result<Palette> {
    let header = config.header.as_ref();
    let content = config.content.as_ref();

    let top = LevelColors {
        border: parse_color("borderColor", config.border_color.as_ref())?,
        background: parse_color("backgroundColor", config.background_color.as_ref())?,
    };
    let header = LevelColors {
        border: parse_color(
            "header.borderColor",
            header.and_then(|h| h.border_color.as_ref()),
        )?,
        background: parse_color(
            "header.backgroundColor",
            header.and_then(|h| h.background_color.as_ref()),
        )?,
    };
    let content = LevelColors {
        border: parse_color(
            "content.borderColor",
            content.and_then(|c| c.border_color.as_ref()),
        )?,
        background: parse_color(
            "content.backgroundColor",
            content.and_then(|c| c.background_color.as_ref()),
        )?,
    };

    Ok(Palette {
        top,
        header,
        content,
    })
}

// ─── RegionStyle ─────────────────────────────────────────────────────────────

/// Effective styling of one region after override → top-level → default
/// resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegionStyle {
    pub glyphs: BorderGlyphs,
    pub padding: Spacing,
    pub align: Align,
    pub border_color: Option<Color>,
    pub background_color: Option<Color>,
    pub dim_border: bool,
}

impl RegionStyle {
    /// Resolve every field independently: the region's value if set, else the
    /// top-level value, else the built-in default.
    fn resolve(
        config: &RenderConfig,
        region: Option<&RegionOverride>,
        own: LevelColors,
        top: LevelColors,
    ) -> Result<Self> {
        let border_style = region
            .and_then(|r| r.border_style.as_ref())
            .or(config.border_style.as_ref());
        let glyphs = match border_style {
            Some(style) => BorderGlyphs::resolve(style)?,
            None => BorderGlyphs::resolve(&BorderStyle::default())?,
        };

        Ok(Self {
            glyphs,
            padding: region
                .and_then(|r| r.padding)
                .or(config.padding)
                .unwrap_or_default(),
            align: region
                .and_then(|r| r.align)
                .or(config.align)
                .unwrap_or_default(),
            border_color: own.border.or(top.border),
            background_color: own.background.or(top.background),
            dim_border: region
                .and_then(|r| r.dim_border)
                .or(config.dim_border)
                .unwrap_or(false),
        })
    }

    /// Apply the border color, then dimming, to a piece of border.
    fn paint_border(&self, text: &str) -> String {
        let colored = match self.border_color {
            Some(color) => Styler::foreground(color).paint(text),
            None => text.to_string(),
        };
        if self.dim_border {
            Styler::dim().paint(&colored)
        } else {
            colored
        }
    }

    fn paint_background(&self, text: &str) -> String {
        match self.background_color {
            Some(color) => Styler::background(color).paint(text),
            None => text.to_string(),
        }
    }

    /// Aligned text split into lines, with blank padding lines above and below.
    fn padded_lines(&self, aligned: &str) -> Vec<String> {
        let mut lines = vec![String::new(); self.padding.top];
        lines.extend(aligned.split(NL).map(str::to_string));
        lines.extend(std::iter::repeat_n(String::new(), self.padding.bottom));
        lines
    }

    /// One interior line: left padding, the text, then spaces up to `box_width`.
    fn body_line(&self, line: &str, box_width: usize, margin_left: &str) -> String {
        let fill = box_width
            .saturating_sub(visible_width(line))
            .saturating_sub(self.padding.left);
        let inner = format!("{}{}{}", PAD.repeat(self.padding.left), line, PAD.repeat(fill));
        let side = self.paint_border(&self.glyphs.vertical);
        format!("{}{}{}{}", margin_left, side, self.paint_background(&inner), side)
    }
}

// ─── Layout helpers ──────────────────────────────────────────────────────────

/// Width a region needs: its widest line plus its horizontal padding.
pub fn region_width(aligned: &str, padding: Spacing) -> usize {
    widest_line(aligned)
        .saturating_add(padding.left)
        .saturating_add(padding.right)
}

/// Columns of blank space to the left of the box.
///
/// Center and right placement clamp at zero when the box is wider than the
/// terminal, which makes them identical to left placement with no margin.
pub fn horizontal_offset(float: Float, margin: Spacing, box_width: usize, columns: usize) -> usize {
    match float {
        Float::Left => margin.left,
        Float::Center => columns.saturating_sub(box_width) / 2,
        // Two columns for the vertical border glyphs.
        Float::Right => columns
            .saturating_sub(box_width)
            .saturating_sub(margin.right)
            .saturating_sub(2),
    }
}

// ─── BoxRenderer ─────────────────────────────────────────────────────────────

/// Renders a header region stacked on a content region inside one box.
///
/// The terminal is consulted once per render for center/right placement.
#[derive(Debug, Clone, Default)]
pub struct BoxRenderer<T: Terminal = SystemTerminal> {
    terminal: T,
}

impl BoxRenderer<SystemTerminal> {
    pub fn new() -> Self {
        Self {
            terminal: SystemTerminal,
        }
    }
}

impl<T: Terminal> BoxRenderer<T> {
    pub fn with_terminal(terminal: T) -> Self {
        Self { terminal }
    }

    /// Resolve the header and content styles without drawing anything.
    pub fn resolve_styles(&self, config: &RenderConfig) -> Result<(RegionStyle, RegionStyle)> {
        let palette = validate_colors(config)?;
        let header = RegionStyle::resolve(config, config.header.as_ref(), palette.header, palette.top)?;
        let content =
            RegionStyle::resolve(config, config.content.as_ref(), palette.content, palette.top)?;
        Ok((header, content))
    }
}

impl<T: Terminal> Renderer for BoxRenderer<T> {
    fn render(&self, header: &str, content: &str, config: &RenderConfig) -> Result<String> {
        let (hs, cs) = self.resolve_styles(config)?;
        trace!(header = ?hs, content = ?cs, "resolved region styles");

        let header_text = align_lines(header, hs.align);
        let content_text = align_lines(content, cs.align);

        let header_lines = hs.padded_lines(&header_text);
        let content_lines = cs.padded_lines(&content_text);

        let header_width = region_width(&header_text, hs.padding);
        let content_width = region_width(&content_text, cs.padding);
        let box_width = header_width.max(content_width);

        let margin = config.margin.unwrap_or_default();
        let columns = self.terminal.columns();
        let offset = horizontal_offset(config.float, margin, box_width, columns);
        let margin_left = PAD.repeat(offset);

        debug!(
            header_width,
            content_width,
            box_width,
            columns,
            offset,
            float = %config.float,
            "laid out box"
        );

        let top = hs.paint_border(&format!(
            "{}{}{}{}{}",
            NL.repeat(margin.top),
            margin_left,
            hs.glyphs.top_left,
            hs.glyphs.horizontal.repeat(box_width),
            hs.glyphs.top_right
        ));
        let bottom = cs.paint_border(&format!(
            "{}{}{}{}{}",
            margin_left,
            cs.glyphs.bottom_left,
            cs.glyphs.horizontal.repeat(box_width),
            cs.glyphs.bottom_right,
            NL.repeat(margin.bottom)
        ));

        let mut out = Vec::with_capacity(header_lines.len() + content_lines.len() + 2);
        // An edge with nothing to draw (no glyphs, no margin) takes no line.
        if !top.is_empty() {
            out.push(top);
        }
        out.extend(
            header_lines
                .iter()
                .map(|line| hs.body_line(line, box_width, &margin_left)),
        );
        out.extend(
            content_lines
                .iter()
                .map(|line| cs.body_line(line, box_width, &margin_left)),
        );
        if !bottom.is_empty() {
            out.push(bottom);
        }

        Ok(out.join(NL))
    }
}

#[cfg(test)]
#[path = "../../tests/rust/test_renderers_boxed.rs"]
mod tests;
