//! Shape Tracking
//!
//! Tracks how many columns remain on the line being filled, so the reflow
//! pass can decide whether the next word fits or starts a new line.
//!
//! A paragraph's indentation is recorded in `indent`; every fresh line starts
//! at that offset with `max_width - indent` columns available.

use crate::config::ReflowConfig;

/// Available space on the current line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Shape {
    /// Columns remaining on the current line.
    pub width: usize,

    /// Indentation of the paragraph being filled (in columns).
    pub indent: usize,

    /// Position on the current line (from start of line).
    pub offset: usize,
}

impl Shape {
    /// Create a new shape with the given max width.
    #[inline]
    pub fn new(max_width: usize) -> Self {
        Shape {
            width: max_width,
            indent: 0,
            offset: 0,
        }
    }

    /// Create a shape from the configured width.
    #[inline]
    pub fn from_config(config: &ReflowConfig) -> Self {
        Shape::new(config.width)
    }

    /// Reduce width by `n` columns already emitted on this line.
    #[inline]
    #[must_use = "consume returns a new Shape with reduced width"]
    pub fn consume(self, n: usize) -> Self {
        Shape {
            width: self.width.saturating_sub(n),
            offset: self.offset + n,
            ..self
        }
    }

    /// Add indentation.
    #[inline]
    #[must_use = "indent returns a new Shape with increased indentation"]
    pub fn indent(self, columns: usize) -> Self {
        Shape {
            indent: self.indent + columns,
            width: self.width.saturating_sub(columns),
            ..self
        }
    }

    /// Check if `content_width` columns fit in the remaining width.
    #[inline]
    pub fn fits(&self, content_width: usize) -> bool {
        content_width <= self.width
    }

    /// Shape for the next line: offset resets to the indentation.
    #[inline]
    #[must_use = "next_line returns a new Shape for the next line"]
    pub fn next_line(self, max_width: usize) -> Self {
        Shape {
            width: max_width.saturating_sub(self.indent),
            offset: self.indent,
            indent: self.indent,
        }
    }

    /// Nothing emitted yet past the indentation.
    #[inline]
    pub fn at_line_start(&self) -> bool {
        self.offset == self.indent
    }
}
