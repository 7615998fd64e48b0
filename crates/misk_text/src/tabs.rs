//! Tab Conversion
//!
//! Conversions between tab- and space-based indentation.
//!
//! - [`Reflower::tabify`] and [`Reflower::untabify`] only touch the leading
//!   whitespace of each line. Leading whitespace is measured in columns (tabs
//!   advance to the next tab stop) and re-emitted in the target form.
//! - [`Reflower::expand_tabs`] replaces every tab in the text.

use crate::block::TextBlock;
use crate::error::Result;
use crate::reflow::Reflower;
use crate::width::{advance, split_indent, str_width, tabbed_indent};

impl Reflower {
    /// Replace the leading whitespace of each line with as many tabs as fit
    /// whole tab stops, followed by the remaining spaces.
    ///
    /// Idempotent: tabifying already tabified text changes nothing.
    #[tracing::instrument(level = "debug", skip_all, fields(tab_size = self.config().tab_size, bytes = text.len()))]
    pub fn tabify(&self, text: &str) -> Result<String> {
        let tab_size = self.config().tab_size;
        let block = TextBlock::parse(text);
        let lines = block
            .lines()
            .iter()
            .map(|line| {
                let (indent, rest) = split_indent(line);
                let mut out = tabbed_indent(str_width(indent, tab_size), tab_size);
                out.push_str(rest);
                out
            })
            .collect();
        Ok(block.replace_lines(lines).render())
    }

    /// Replace the leading whitespace of each line with spaces, expanding
    /// each tab to the next tab stop.
    ///
    /// Undoes [`tabify`](Self::tabify) for text indented with spaces.
    #[tracing::instrument(level = "debug", skip_all, fields(tab_size = self.config().tab_size, bytes = text.len()))]
    pub fn untabify(&self, text: &str) -> Result<String> {
        let tab_size = self.config().tab_size;
        let block = TextBlock::parse(text);
        let lines = block
            .lines()
            .iter()
            .map(|line| {
                let (indent, rest) = split_indent(line);
                let mut out = " ".repeat(str_width(indent, tab_size));
                out.push_str(rest);
                out
            })
            .collect();
        Ok(block.replace_lines(lines).render())
    }

    /// Replace every tab with spaces up to the next tab stop.
    ///
    /// Columns restart after each `\n`. A lone `\r` does not reset the column.
    #[tracing::instrument(level = "debug", skip_all, fields(tab_size = self.config().tab_size, bytes = text.len()))]
    pub fn expand_tabs(&self, text: &str) -> Result<String> {
        let tab_size = self.config().tab_size;
        let mut result = String::with_capacity(text.len());
        let mut column = 0;

        for c in text.chars() {
            match c {
                '\t' => {
                    let next = advance(column, c, tab_size);
                    result.extend(std::iter::repeat(' ').take(next - column));
                    column = next;
                }
                '\n' => {
                    result.push('\n');
                    column = 0;
                }
                '\r' => {
                    // \r\n is handled by the \n arm
                    result.push('\r');
                }
                _ => {
                    result.push(c);
                    column += 1;
                }
            }
        }

        Ok(result)
    }
}
