//! Page width and per-render layout configuration.
//!
//! The page width is process-wide and mutable, but renderers never read it
//! directly: it is captured once into a [`Layout`] at the outermost render
//! boundary and passed down explicitly from there.

use std::sync::atomic::{AtomicUsize, Ordering};

use crate::glyphs::{GlyphMode, Glyphs};

/// Page width used when nothing else has been configured.
pub const DEFAULT_PAGE_WIDTH: usize = 80;

static PAGE_WIDTH: AtomicUsize = AtomicUsize::new(DEFAULT_PAGE_WIDTH);

/// Current process-wide page width.
pub fn page_width() -> usize {
    PAGE_WIDTH.load(Ordering::Relaxed)
}

/// Sets the process-wide page width. Zero is ignored.
pub fn set_page_width(width: usize) {
    if width > 0 {
        PAGE_WIDTH.store(width, Ordering::Relaxed);
    }
}

/// Width of the attached terminal, if stdout is one.
pub fn detect_terminal_width() -> Option<usize> {
    terminal_size::terminal_size().map(|(w, _)| w.0 as usize)
}

/// Width and glyphs for one render call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    pub width: usize,
    pub glyphs: Glyphs,
}

impl Layout {
    pub fn new(width: usize, mode: GlyphMode) -> Self {
        Self {
            width: width.max(1),
            glyphs: Glyphs::for_mode(mode),
        }
    }

    /// Snapshot of the global page width with ASCII glyphs.
    pub fn current() -> Self {
        Self::new(page_width(), GlyphMode::Ascii)
    }

    pub fn with_width(mut self, width: usize) -> Self {
        self.width = width.max(1);
        self
    }

    pub fn with_glyphs(mut self, mode: GlyphMode) -> Self {
        self.glyphs = Glyphs::for_mode(mode);
        self
    }
}

impl Default for Layout {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_WIDTH, GlyphMode::Ascii)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn page_width_is_mutable_and_rejects_zero() {
        let before = page_width();
        set_page_width(60);
        assert_eq!(page_width(), 60);
        set_page_width(0);
        assert_eq!(page_width(), 60);
        assert_eq!(Layout::current().width, 60);
        set_page_width(before);
    }

    #[test]
    fn builders_override_fields() {
        let layout = Layout::default()
            .with_width(40)
            .with_glyphs(GlyphMode::Unicode);
        assert_eq!(layout.width, 40);
        assert_eq!(layout.glyphs, Glyphs::UNICODE);
        assert_eq!(Layout::default().with_width(0).width, 1);
    }
}
