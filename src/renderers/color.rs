//! Color tokens and ANSI styling.
//!
//! A [`Styler`] wraps text in an open/close escape pair. Styling nests: any
//! close sequence of the same kind already inside the text is turned back
//! into the open sequence, so an inner reset does not end the outer style.
//! Line breaks close the style and reopen it on the next line.

use std::sync::LazyLock;

use regex::{Captures, Regex};

static HEX_COLOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^#(?:[0-9a-f]{3}){1,2}$").expect("hex color pattern"));

static LINE_BREAK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\r?\n").expect("line break pattern"));

/// Supported color names with their foreground SGR code.
/// The background code is always the foreground code plus ten.
const NAMED_COLORS: &[(&str, u8)] = &[
    ("black", 30),
    ("red", 31),
    ("green", 32),
    ("yellow", 33),
    ("blue", 34),
    ("magenta", 35),
    ("cyan", 36),
    ("white", 37),
    ("gray", 90),
    ("grey", 90),
    ("blackBright", 90),
    ("redBright", 91),
    ("greenBright", 92),
    ("yellowBright", 93),
    ("blueBright", 94),
    ("magentaBright", 95),
    ("cyanBright", 96),
    ("whiteBright", 97),
];

// ─── Color ───────────────────────────────────────────────────────────────────

/// A validated color: a 16-color palette entry or a truecolor value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    /// Foreground SGR code of a named color (30–37, 90–97).
    Named(u8),
    Rgb(u8, u8, u8),
}

impl Color {
    /// Parse a color name (`red`, `cyanBright`, ...) or `#rgb` / `#rrggbb`.
    pub fn parse(token: &str) -> Option<Self> {
        if is_supported_color_name(token) {
            return named_code(token).map(Color::Named);
        }
        parse_hex(token)
    }
}

fn named_code(name: &str) -> Option<u8> {
    NAMED_COLORS
        .iter()
        .find(|(n, _)| *n == name)
        .map(|(_, code)| *code)
}

fn parse_hex(token: &str) -> Option<Color> {
    if !HEX_COLOR.is_match(token) {
        return None;
    }
    let digits = &token[1..];
    let expanded: String = if digits.len() == 3 {
        digits.chars().flat_map(|c| [c, c]).collect()
    } else {
        digits.to_string()
    };
    let channel = |i: usize| u8::from_str_radix(&expanded[i..i + 2], 16).ok();
    Some(Color::Rgb(channel(0)?, channel(2)?, channel(4)?))
}

/// Whether `name` is one of the supported color names.
pub fn is_supported_color_name(name: &str) -> bool {
    named_code(name).is_some()
}

// ─── SGR sequences ───────────────────────────────────────────────────────────

/// 16-color palette entry. crossterm only emits the 256-color `38;5;n` form
/// for its named colors, so these stay as plain SGR codes.
fn palette(code: u8) -> String {
    format!("\x1b[{code}m")
}

#[cfg(not(target_arch = "wasm32"))]
mod sgr {
    use crossterm::style::{
        self, Attribute, Colored, SetAttribute, SetBackgroundColor, SetForegroundColor,
    };

    /// False when `NO_COLOR` is set; crossterm then writes a bare reset in
    /// place of any color.
    pub fn colors_enabled() -> bool {
        !Colored::ansi_color_disabled_memoized()
    }

    pub fn foreground_rgb(r: u8, g: u8, b: u8) -> String {
        SetForegroundColor(style::Color::Rgb { r, g, b }).to_string()
    }

    pub fn background_rgb(r: u8, g: u8, b: u8) -> String {
        SetBackgroundColor(style::Color::Rgb { r, g, b }).to_string()
    }

    pub fn foreground_reset() -> String {
        SetForegroundColor(style::Color::Reset).to_string()
    }

    pub fn background_reset() -> String {
        SetBackgroundColor(style::Color::Reset).to_string()
    }

    pub fn dim() -> String {
        SetAttribute(Attribute::Dim).to_string()
    }

    pub fn normal_intensity() -> String {
        SetAttribute(Attribute::NormalIntensity).to_string()
    }
}

// crossterm does not build for wasm32; emit the same bytes directly.
#[cfg(target_arch = "wasm32")]
mod sgr {
    pub fn colors_enabled() -> bool {
        true
    }

    pub fn foreground_rgb(r: u8, g: u8, b: u8) -> String {
        format!("\x1b[38;2;{r};{g};{b}m")
    }

    pub fn background_rgb(r: u8, g: u8, b: u8) -> String {
        format!("\x1b[48;2;{r};{g};{b}m")
    }

    pub fn foreground_reset() -> String {
        "\x1b[39m".to_string()
    }

    pub fn background_reset() -> String {
        "\x1b[49m".to_string()
    }

    pub fn dim() -> String {
        "\x1b[2m".to_string()
    }

    pub fn normal_intensity() -> String {
        "\x1b[22m".to_string()
    }
}

// ─── Styler ──────────────────────────────────────────────────────────────────

/// An open/close escape pair that can be applied to text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Styler {
    open: String,
    close: String,
}

impl Styler {
    /// A style that leaves text untouched.
    fn plain() -> Self {
        Self {
            open: String::new(),
            close: String::new(),
        }
    }

    /// Foreground color. Plain when `NO_COLOR` is set.
    pub fn foreground(color: Color) -> Self {
        if !sgr::colors_enabled() {
            return Self::plain();
        }
        let open = match color {
            Color::Named(code) => palette(code),
            Color::Rgb(r, g, b) => sgr::foreground_rgb(r, g, b),
        };
        Self {
            open,
            close: sgr::foreground_reset(),
        }
    }

    /// Background color. Plain when `NO_COLOR` is set.
    pub fn background(color: Color) -> Self {
        if !sgr::colors_enabled() {
            return Self::plain();
        }
        let open = match color {
            Color::Named(code) => palette(code + 10),
            Color::Rgb(r, g, b) => sgr::background_rgb(r, g, b),
        };
        Self {
            open,
            close: sgr::background_reset(),
        }
    }

    pub fn dim() -> Self {
        Self {
            open: sgr::dim(),
            close: sgr::normal_intensity(),
        }
    }

    pub fn open(&self) -> &str {
        &self.open
    }

    pub fn close(&self) -> &str {
        &self.close
    }

    /// Wrap `text` in this style. Empty text stays empty.
    pub fn paint(&self, text: &str) -> String {
        if text.is_empty() || self.open.is_empty() {
            return text.to_string();
        }
        let body = text.replace(&self.close, &self.open);
        let styled = format!("{}{}{}", self.open, body, self.close);
        LINE_BREAK
            .replace_all(&styled, |caps: &Captures| {
                format!("{}{}{}", self.close, &caps[0], self.open)
            })
            .into_owned()
    }
}

/// Dim `text`.
pub fn dim(text: &str) -> String {
    Styler::dim().paint(text)
}

#[cfg(test)]
#[path = "../../tests/rust/test_renderers_color.rs"]
mod tests;
