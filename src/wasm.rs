//! WASM bindings for carden.
//!
//! Exposes `render`, `renderWithOptions` and `borderStyles` to JavaScript via wasm-bindgen.

use wasm_bindgen::prelude::*;

use crate::config::{Align, BorderStyle, Float, RenderConfig, Spacing};
use crate::renderers::{BoxRenderer, FixedColumns, Renderer, border_styles};
use crate::renderers::terminal::DEFAULT_COLUMNS;

/// Render a box with default settings against an 80-column terminal.
#[wasm_bindgen]
pub fn render(header: &str, content: &str) -> Result<String, JsError> {
    BoxRenderer::with_terminal(FixedColumns(DEFAULT_COLUMNS))
        .render(header, content, &RenderConfig::default())
        .map_err(|e| JsError::new(&e.to_string()))
}

/// Render a box with the common options.
///
/// - `padding`: `n` or `top,right,bottom,left`; empty string for none
/// - `border_style`: preset name, `none` or `blank`; empty string for `single`
/// - `align` / `float`: `left`, `center` or `right`; empty string for `left`
/// - `columns`: terminal width used for center/right placement
#[wasm_bindgen(js_name = "renderWithOptions")]
pub fn render_with_options(
    header: &str,
    content: &str,
    padding: &str,
    border_style: &str,
    align: &str,
    float: &str,
    columns: usize,
) -> Result<String, JsError> {
    let to_js = |e: crate::CardenError| JsError::new(&e.to_string());

    let mut config = RenderConfig::new();
    if !padding.is_empty() {
        config = config.padding(padding.parse::<Spacing>().map_err(to_js)?);
    }
    if !border_style.is_empty() {
        config = config.border_style(BorderStyle::from(border_style));
    }
    if !align.is_empty() {
        config = config.align(align.parse::<Align>().map_err(to_js)?);
    }
    if !float.is_empty() {
        config = config.float(float.parse::<Float>().map_err(to_js)?);
    }

    BoxRenderer::with_terminal(FixedColumns(columns))
        .render(header, content, &config)
        .map_err(to_js)
}

/// Names of the built-in border styles.
#[wasm_bindgen(js_name = "borderStyles")]
pub fn border_style_names() -> Vec<String> {
    border_styles()
        .into_iter()
        .map(|(name, _)| name.to_string())
        .collect()
}
