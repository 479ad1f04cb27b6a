//! Box rendering and the leaf capabilities it is built on.

pub mod boxed;
pub mod charset;
pub mod color;
pub mod terminal;
pub mod text;

pub use boxed::{BoxRenderer, RegionStyle};
pub use charset::{BorderGlyphs, border_styles};
pub use terminal::{FixedColumns, SystemTerminal, Terminal};

use crate::config::RenderConfig;
use crate::error::Result;

/// Something that turns a header, a content block and a configuration into
/// terminal-ready text.
pub trait Renderer {
    fn render(&self, header: &str, content: &str, config: &RenderConfig) -> Result<String>;
}
