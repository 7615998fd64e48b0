//! Misk Text
//!
//! Pure text-shape transforms: paragraph reflow, tab/space conversion of
//! leading indentation, re-indentation between indent units, and
//! meta-variable substitution.
//!
//! # Architecture
//!
//! Every transform follows the same three steps:
//!
//! 1. **Parse**: the input is split into a [`TextBlock`], which remembers the
//!    line terminator style and whether the text ended with a newline
//! 2. **Transform**: lines are rewritten one by one (or, for reflow, per
//!    paragraph), collecting output lines through an internal line emitter
//! 3. **Render**: the block is joined back with the input's terminators
//!
//! Nothing is shared between calls. A [`Reflower`] only holds a validated
//! [`ReflowConfig`], so it can be shared across threads freely.
//!
//! # Modules
//!
//! - [`block`]: Line-oriented text representation
//! - [`config`]: Width, indent unit and tab size configuration
//! - [`error`]: The `InvalidArgument` error returned by every transform
//! - [`indent`]: Reindent, dedent and indentation style conversion
//! - [`reflow`]: Paragraph re-wrapping
//! - [`tabs`]: Tabify, untabify and tab expansion
//! - [`metavar`]: `{% name %}` style placeholder substitution

pub mod block;
pub mod config;
mod emitter;
pub mod error;
pub mod indent;
mod logging;
pub mod metavar;
pub mod reflow;
mod shape;
pub mod tabs;
mod width;

pub use block::{LineEnding, TextBlock};
pub use config::{
    IndentationStyle, ReflowConfig, DEFAULT_INDENT_UNIT, DEFAULT_TAB_SIZE, DEFAULT_WIDTH,
};
pub use error::{ErrorKind, InvalidArgument, ReflowError, Result};
pub use logging::init_tracing;
pub use metavar::replace_metavar;
pub use reflow::Reflower;

/// Re-wrap every paragraph of `text` so lines are at most `width` columns.
///
/// Paragraphs are runs of non-blank lines. Blank lines survive as empty lines,
/// words are never split, and a paragraph keeps the indentation of its first
/// line on every wrapped line, clipped when it leaves no room for a word.
///
/// # Example
///
/// ```
/// let wrapped = misk_text::reflow("the quick brown fox jumps", 10).unwrap();
/// assert_eq!(wrapped, "the quick\nbrown fox\njumps");
/// ```
pub fn reflow(text: &str, width: usize) -> Result<String> {
    Reflower::new(ReflowConfig::with_width(width))?.reflow(text)
}

/// Replace leading spaces with as many tabs as fit, keeping the remainder.
///
/// # Example
///
/// ```
/// assert_eq!(misk_text::tabify("    x", 4).unwrap(), "\tx");
/// assert_eq!(misk_text::tabify("      x", 4).unwrap(), "\t  x");
/// ```
pub fn tabify(text: &str, tab_size: usize) -> Result<String> {
    Reflower::new(ReflowConfig::with_tab_size(tab_size))?.tabify(text)
}

/// Expand tabs in leading indentation to spaces.
///
/// # Example
///
/// ```
/// assert_eq!(misk_text::untabify("\t\tx", 2).unwrap(), "    x");
/// ```
pub fn untabify(text: &str, tab_size: usize) -> Result<String> {
    Reflower::new(ReflowConfig::with_tab_size(tab_size))?.untabify(text)
}

/// Expand every tab in `text` to the next tab stop, not only leading ones.
pub fn expand_tabs(text: &str, tab_size: usize) -> Result<String> {
    Reflower::new(ReflowConfig::with_tab_size(tab_size))?.expand_tabs(text)
}

/// Re-emit indentation measured in `old_unit` using `new_unit`.
///
/// # Example
///
/// ```
/// let out = misk_text::reindent("  a\n    b", "  ", "    ").unwrap();
/// assert_eq!(out, "    a\n        b");
/// ```
pub fn reindent(text: &str, old_unit: &str, new_unit: &str) -> Result<String> {
    Reflower::default().reindent(text, old_unit, new_unit)
}

/// Strip the indentation shared by every non-blank line.
pub fn dedent(text: &str, tab_size: usize) -> Result<String> {
    Reflower::new(ReflowConfig::with_tab_size(tab_size))?.dedent(text)
}

/// Strip the shared indentation, then prefix every non-blank line with `indent`.
pub fn indent_block(text: &str, indent: &str, tab_size: usize) -> Result<String> {
    Reflower::new(ReflowConfig::with_tab_size(tab_size))?.indent_block(text, indent)
}

/// Convert the detected indentation style of `text` to `to`.
pub fn convert_indentation(text: &str, to: IndentationStyle) -> Result<String> {
    Reflower::default().convert_indentation(text, to)
}
