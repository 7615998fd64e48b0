//! Text Blocks
//!
//! A [`TextBlock`] is the parsed form every transform works on: the lines of
//! the input without their terminators, plus enough about those terminators to
//! render the text back the way it came in.
//!
//! # Terminators
//!
//! - The line ending is taken from the first line break. When it is `\r\n`,
//!   every line is stripped of a trailing `\r` and rendered with `\r\n`.
//! - Whether the text ended with a line break is remembered and reproduced.
//! - Empty input is a block with no lines and renders back to empty output.

use std::fmt;

/// Line terminator used when rendering a block.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum LineEnding {
    /// `\n`
    #[default]
    Lf,
    /// `\r\n`
    CrLf,
}

impl LineEnding {
    /// The terminator string.
    pub fn as_str(self) -> &'static str {
        match self {
            LineEnding::Lf => "\n",
            LineEnding::CrLf => "\r\n",
        }
    }

    /// Detect the terminator from the first line break in `text`.
    pub fn detect(text: &str) -> Self {
        match text.find('\n') {
            Some(i) if text[..i].ends_with('\r') => LineEnding::CrLf,
            _ => LineEnding::Lf,
        }
    }
}

/// An ordered sequence of lines.
///
/// Line order is preserved by every transform except reflow, which may merge
/// and split the lines of a paragraph.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TextBlock {
    lines: Vec<String>,
    trailing_newline: bool,
    line_ending: LineEnding,
}

impl TextBlock {
    /// Split `text` into lines.
    ///
    /// # Example
    ///
    /// ```
    /// use misk_text::{LineEnding, TextBlock};
    ///
    /// let block = TextBlock::parse("a\r\nb\r\n");
    /// assert_eq!(block.lines(), ["a", "b"]);
    /// assert_eq!(block.line_ending(), LineEnding::CrLf);
    /// assert!(block.has_trailing_newline());
    /// assert_eq!(block.render(), "a\r\nb\r\n");
    /// ```
    pub fn parse(text: &str) -> Self {
        if text.is_empty() {
            return Self::default();
        }

        let line_ending = LineEnding::detect(text);
        let (body, trailing_newline) = match text.strip_suffix('\n') {
            Some(body) => (body, true),
            None => (text, false),
        };

        let lines = body
            .split('\n')
            .map(|line| match line_ending {
                LineEnding::CrLf => line.strip_suffix('\r').unwrap_or(line),
                LineEnding::Lf => line,
            })
            .map(str::to_owned)
            .collect();

        Self {
            lines,
            trailing_newline,
            line_ending,
        }
    }

    /// Build a block from lines, `\n`-terminated, without a trailing newline.
    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
            trailing_newline: false,
            line_ending: LineEnding::Lf,
        }
    }

    /// Get the lines, without terminators.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Number of lines.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Check if the block has no lines.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Whether rendering ends with a line terminator.
    pub fn has_trailing_newline(&self) -> bool {
        self.trailing_newline
    }

    /// Terminator placed between (and after) lines.
    pub fn line_ending(&self) -> LineEnding {
        self.line_ending
    }

    /// Set whether rendering ends with a line terminator.
    #[must_use]
    pub fn with_trailing_newline(mut self, trailing_newline: bool) -> Self {
        self.trailing_newline = trailing_newline;
        self
    }

    /// Set the line terminator.
    #[must_use]
    pub fn with_line_ending(mut self, line_ending: LineEnding) -> Self {
        self.line_ending = line_ending;
        self
    }

    /// Same terminators, new lines.
    #[must_use]
    pub fn replace_lines(&self, lines: Vec<String>) -> Self {
        Self {
            lines,
            trailing_newline: self.trailing_newline,
            line_ending: self.line_ending,
        }
    }

    /// Rewrite each line with `f`, which receives the 1-based line number.
    ///
    /// Stops at the first error.
    pub fn try_map_lines<F, E>(&self, mut f: F) -> Result<Self, E>
    where
        F: FnMut(usize, &str) -> Result<String, E>,
    {
        let lines = self
            .lines
            .iter()
            .enumerate()
            .map(|(i, line)| f(i + 1, line))
            .collect::<Result<Vec<_>, E>>()?;
        Ok(self.replace_lines(lines))
    }

    /// Join the lines back into text.
    pub fn render(&self) -> String {
        let ending = self.line_ending.as_str();
        let mut out = self.lines.join(ending);
        if self.trailing_newline && !self.lines.is_empty() {
            out.push_str(ending);
        }
        out
    }
}

impl From<&str> for TextBlock {
    fn from(text: &str) -> Self {
        TextBlock::parse(text)
    }
}

impl fmt::Display for TextBlock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

#[cfg(test)]
mod tests;
