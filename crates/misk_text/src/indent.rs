//! Re-indentation
//!
//! Operations that change how deep, or in what unit, lines are indented.
//!
//! - [`Reflower::reindent`] converts between indent units, refusing anything
//!   it would have to guess at (mixed tabs and spaces, partial units).
//! - [`Reflower::dedent`] and [`Reflower::indent_block`] move a whole block
//!   left, then optionally back right under a new prefix.
//! - [`Reflower::convert_indentation`] and
//!   [`Reflower::normalize_indentation`] detect the unit first.
//!
//! Whitespace-only lines come out empty from every operation here.

use crate::block::TextBlock;
use crate::config::{validate_unit, IndentationStyle};
use crate::error::{reject, InvalidArgument, Result};
use crate::reflow::Reflower;
use crate::width::{advance, is_blank, is_mixed, split_indent, str_width};

impl Reflower {
    /// Measure each line's depth in `old_unit`s and re-emit it with `new_unit`.
    ///
    /// Both units must be non-empty runs of only spaces or only tabs. A line
    /// whose indentation mixes tabs and spaces, or is not a whole number of
    /// `old_unit`s, is rejected with its line number.
    #[tracing::instrument(level = "debug", skip_all, fields(old_unit = ?old_unit, new_unit = ?new_unit, bytes = text.len()))]
    pub fn reindent(&self, text: &str, old_unit: &str, new_unit: &str) -> Result<String> {
        validate_unit(old_unit)?;
        validate_unit(new_unit)?;

        let block = TextBlock::parse(text);
        let reindented = block.try_map_lines(|line_no, line| {
            if is_blank(line) {
                return Ok(String::new());
            }
            let (indent, rest) = split_indent(line);
            if indent.is_empty() {
                return Ok(line.to_string());
            }
            if is_mixed(indent) {
                return reject(InvalidArgument::MixedIndentation { line: line_no });
            }
            let Some(depth) = unit_depth(indent, old_unit) else {
                return reject(InvalidArgument::UnalignedIndentation {
                    line: line_no,
                    indent: indent.to_string(),
                    unit: old_unit.to_string(),
                });
            };
            let mut out = new_unit.repeat(depth);
            out.push_str(rest);
            Ok(out)
        })?;

        Ok(reindented.render())
    }

    /// Remove the indentation every non-blank line has in common.
    ///
    /// Indentation is compared in columns, so a tab and a tab stop's worth of
    /// spaces count as the same depth.
    #[tracing::instrument(level = "debug", skip_all, fields(tab_size = self.config().tab_size, bytes = text.len()))]
    pub fn dedent(&self, text: &str) -> Result<String> {
        Ok(self.dedented(&TextBlock::parse(text)).render())
    }

    /// Remove the shared indentation, then prefix every non-blank line with
    /// `indent`.
    ///
    /// # Example
    ///
    /// ```
    /// use misk_text::Reflower;
    ///
    /// let out = Reflower::default().indent_block("    a\n      b\n", "> ").unwrap();
    /// assert_eq!(out, "> a\n>   b\n");
    /// ```
    #[tracing::instrument(level = "debug", skip_all, fields(indent = ?indent, bytes = text.len()))]
    pub fn indent_block(&self, text: &str, indent: &str) -> Result<String> {
        let block = self.dedented(&TextBlock::parse(text));
        let lines = block
            .lines()
            .iter()
            .map(|line| {
                if line.is_empty() {
                    String::new()
                } else {
                    format!("{indent}{line}")
                }
            })
            .collect();
        Ok(block.replace_lines(lines).render())
    }

    /// Reindent `text` from its detected style to `to`.
    ///
    /// Text without indented lines is returned unchanged.
    #[tracing::instrument(level = "debug", skip_all, fields(to = %to, bytes = text.len()))]
    pub fn convert_indentation(&self, text: &str, to: IndentationStyle) -> Result<String> {
        to.validate()?;
        self.reindent_detected(text, &to.unit())
    }

    /// Reindent `text` from its detected style to the configured indent unit.
    #[tracing::instrument(level = "debug", skip_all, fields(unit = ?self.config().indent_unit, bytes = text.len()))]
    pub fn normalize_indentation(&self, text: &str) -> Result<String> {
        self.reindent_detected(text, &self.config().indent_unit)
    }

    fn reindent_detected(&self, text: &str, new_unit: &str) -> Result<String> {
        match IndentationStyle::detect(text) {
            Some(from) => {
                tracing::debug!(%from, "detected indentation");
                self.reindent(text, &from.unit(), new_unit)
            }
            None => Ok(text.to_string()),
        }
    }

    fn dedented(&self, block: &TextBlock) -> TextBlock {
        let tab_size = self.config().tab_size;
        let common = block
            .lines()
            .iter()
            .filter(|line| !is_blank(line))
            .map(|line| str_width(split_indent(line).0, tab_size))
            .min()
            .unwrap_or(0);

        let lines = block
            .lines()
            .iter()
            .map(|line| {
                if is_blank(line) {
                    return String::new();
                }
                let (indent, rest) = split_indent(line);
                let mut out = strip_columns(indent, common, tab_size);
                out.push_str(rest);
                out
            })
            .collect();
        block.replace_lines(lines)
    }
}

/// Number of times `unit` repeats to make exactly `indent`.
fn unit_depth(indent: &str, unit: &str) -> Option<usize> {
    if indent.len() % unit.len() != 0 {
        return None;
    }
    let depth = indent.len() / unit.len();
    (indent == unit.repeat(depth)).then_some(depth)
}

/// Drop the first `columns` columns of `indent`.
///
/// The rest is kept as written when the cut lands on a character boundary at a
/// tab stop. Otherwise tabs after the cut would land on different stops, so
/// the remaining depth is re-emitted as spaces.
fn strip_columns(indent: &str, columns: usize, tab_size: usize) -> String {
    let mut column = 0;
    for (i, c) in indent.char_indices() {
        if column == columns && columns % tab_size == 0 {
            return indent[i..].to_string();
        }
        if column >= columns {
            break;
        }
        column = advance(column, c, tab_size);
    }
    " ".repeat(str_width(indent, tab_size) - columns)
}

#[cfg(test)]
mod tests;
