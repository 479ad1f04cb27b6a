//! Terminal width capability.

/// Columns assumed when the terminal size cannot be determined.
pub const DEFAULT_COLUMNS: usize = 80;

/// Source of the terminal's column count, consulted once per render.
pub trait Terminal {
    fn columns(&self) -> usize;
}

/// The process's controlling terminal.
///
/// Falls back to the `COLUMNS` environment variable, then to
/// [`DEFAULT_COLUMNS`].
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemTerminal;

impl Terminal for SystemTerminal {
    fn columns(&self) -> usize {
        queried_columns()
            .or_else(columns_from_env)
            .unwrap_or(DEFAULT_COLUMNS)
    }
}

/// A terminal with a known, fixed width.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedColumns(pub usize);

impl Terminal for FixedColumns {
    fn columns(&self) -> usize {
        self.0
    }
}

impl<T: Terminal + ?Sized> Terminal for &T {
    fn columns(&self) -> usize {
        (**self).columns()
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn queried_columns() -> Option<usize> {
    match crossterm::terminal::size() {
        Ok((cols, _)) if cols > 0 => Some(cols as usize),
        _ => None,
    }
}

#[cfg(target_arch = "wasm32")]
fn queried_columns() -> Option<usize> {
    None
}

fn columns_from_env() -> Option<usize> {
    parse_columns(&std::env::var("COLUMNS").ok()?)
}

fn parse_columns(raw: &str) -> Option<usize> {
    raw.trim().parse().ok().filter(|&cols| cols > 0)
}

#[cfg(test)]
#[path = "../../tests/rust/test_renderers_terminal.rs"]
mod tests;
