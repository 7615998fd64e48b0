//! Reflow Configuration
//!
//! Width, indent unit and tab size used by [`Reflower`](crate::Reflower).

use crate::error::{reject, InvalidArgument, Result};
use crate::width::split_indent;

/// Default target line width.
pub const DEFAULT_WIDTH: usize = 80;

/// Default columns per tab stop.
pub const DEFAULT_TAB_SIZE: usize = 4;

/// Default string emitted per indentation level.
pub const DEFAULT_INDENT_UNIT: &str = "\t";

/// Configuration for the text transforms.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ReflowConfig {
    /// Maximum line width, in columns, for reflowed paragraphs.
    pub width: usize,

    /// String used per indent level when normalizing indentation.
    pub indent_unit: String,

    /// Columns per tab stop.
    pub tab_size: usize,
}

impl Default for ReflowConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            indent_unit: DEFAULT_INDENT_UNIT.to_string(),
            tab_size: DEFAULT_TAB_SIZE,
        }
    }
}

impl ReflowConfig {
    /// Create a new config with the specified width.
    pub fn with_width(width: usize) -> Self {
        Self {
            width,
            ..Default::default()
        }
    }

    /// Create a new config with the specified tab size.
    pub fn with_tab_size(tab_size: usize) -> Self {
        Self {
            tab_size,
            ..Default::default()
        }
    }

    /// Replace the width.
    #[must_use]
    pub fn width(mut self, width: usize) -> Self {
        self.width = width;
        self
    }

    /// Replace the tab size.
    #[must_use]
    pub fn tab_size(mut self, tab_size: usize) -> Self {
        self.tab_size = tab_size;
        self
    }

    /// Replace the indent unit.
    #[must_use]
    pub fn indent_unit(mut self, unit: impl Into<String>) -> Self {
        self.indent_unit = unit.into();
        self
    }

    /// Check every field, returning the first problem found.
    pub fn validate(&self) -> Result<()> {
        if self.width == 0 {
            return reject(InvalidArgument::ZeroWidth);
        }
        if self.tab_size == 0 {
            return reject(InvalidArgument::ZeroTabSize);
        }
        validate_unit(&self.indent_unit)
    }
}

/// An indent unit must be non-empty and made only of spaces or only of tabs.
pub(crate) fn validate_unit(unit: &str) -> Result<()> {
    let uniform = unit.chars().all(|c| c == ' ') || unit.chars().all(|c| c == '\t');
    if unit.is_empty() || !uniform {
        return reject(InvalidArgument::BadIndentUnit {
            unit: unit.to_string(),
        });
    }
    Ok(())
}

/// How a text is indented.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum IndentationStyle {
    /// One tab per level.
    Tabs,
    /// `n` spaces per level.
    Spaces(usize),
}

impl IndentationStyle {
    /// The string emitted per indent level.
    pub fn unit(self) -> String {
        match self {
            IndentationStyle::Tabs => "\t".to_string(),
            IndentationStyle::Spaces(n) => " ".repeat(n),
        }
    }

    /// Check that the style describes a usable unit.
    pub fn validate(self) -> Result<()> {
        validate_unit(&self.unit())
    }

    /// Infer the indentation style of `text`.
    ///
    /// Any tab-indented line makes the style [`Tabs`](IndentationStyle::Tabs).
    /// Otherwise the step is the greatest common divisor of all space indents.
    /// Returns `None` when no non-blank line is indented.
    ///
    /// # Example
    ///
    /// ```
    /// use misk_text::IndentationStyle;
    ///
    /// let style = IndentationStyle::detect("a\n    b\n        c\n      d");
    /// assert_eq!(style, Some(IndentationStyle::Spaces(2)));
    /// ```
    pub fn detect(text: &str) -> Option<Self> {
        let mut step = 0;
        for line in text.lines() {
            let (indent, rest) = split_indent(line);
            if indent.is_empty() || rest.is_empty() {
                continue;
            }
            if indent.starts_with('\t') {
                return Some(IndentationStyle::Tabs);
            }
            let spaces = indent.chars().take_while(|&c| c == ' ').count();
            step = gcd(step, spaces);
        }
        (step > 0).then_some(IndentationStyle::Spaces(step))
    }
}

impl std::fmt::Display for IndentationStyle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IndentationStyle::Tabs => write!(f, "tabs"),
            IndentationStyle::Spaces(n) => write!(f, "{n} spaces"),
        }
    }
}

fn gcd(a: usize, b: usize) -> usize {
    if b == 0 {
        a
    } else {
        gcd(b, a % b)
    }
}
