//! carden — render a header and a content block as one bordered box of
//! terminal text.
//!
//! Public API: [`render()`], [`BoxRenderer`] for an injected terminal width,
//! and [`border_styles()`] for the named glyph presets.
//!
//! ```
//! use carden::{BoxRenderer, FixedColumns, RenderConfig, Renderer};
//!
//! let out = BoxRenderer::with_terminal(FixedColumns(80))
//!     .render("foo", "foo", &RenderConfig::default())
//!     .unwrap();
//! assert_eq!(out, "┌───┐\n│foo│\n│foo│\n└───┘");
//! ```

pub mod config;
pub mod error;
pub mod renderers;
#[cfg(feature = "wasm")]
pub mod wasm;

pub use config::{Align, BorderStyle, CustomGlyphs, Float, RegionOverride, RenderConfig, Spacing};
pub use error::{CardenError, Result};
pub use renderers::{
    BorderGlyphs, BoxRenderer, FixedColumns, RegionStyle, Renderer, SystemTerminal, Terminal,
    border_styles,
};

/// Render `header` above `content` in a single box, measuring the current
/// terminal for center/right placement.
pub fn render(header: &str, content: &str, config: &RenderConfig) -> Result<String> {
    BoxRenderer::new().render(header, content, config)
}
