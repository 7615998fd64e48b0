//! Paragraph Reflow
//!
//! Greedy re-wrapping of paragraphs to a target width.
//!
//! # Algorithm
//!
//! 1. Lines are grouped into paragraphs: maximal runs of non-blank lines
//! 2. Each paragraph is split into words on whitespace
//! 3. Words are packed onto lines while they fit; a word that does not fit
//!    starts a new line, and a word wider than a whole line sits alone
//!
//! A paragraph keeps the leading whitespace of its first line as the prefix of
//! every line it produces. The prefix counts toward the width and is clipped
//! when it leaves no room for the paragraph's widest word. Blank lines between
//! paragraphs are kept, emptied of any spaces and tabs.

use crate::block::TextBlock;
use crate::config::ReflowConfig;
use crate::emitter::{Emitter, LineEmitter};
use crate::error::Result;
use crate::shape::Shape;
use crate::width::{clip_indent, is_blank, split_indent, str_width};

/// Applies the text transforms under a validated [`ReflowConfig`].
///
/// The reflower holds no state besides its configuration; every method is a
/// pure function of its arguments.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Reflower {
    config: ReflowConfig,
}

impl Reflower {
    /// Create a reflower, rejecting an unusable configuration.
    pub fn new(config: ReflowConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Get the configuration.
    pub fn config(&self) -> &ReflowConfig {
        &self.config
    }

    /// Re-wrap every paragraph of `text` to the configured width.
    ///
    /// Every output line is at most `width` columns unless it holds a single
    /// word that cannot fit, which is never split. The sequence of words is
    /// unchanged.
    #[tracing::instrument(level = "debug", skip_all, fields(width = self.config.width, bytes = text.len()))]
    pub fn reflow(&self, text: &str) -> Result<String> {
        let block = TextBlock::parse(text);
        let mut out = LineEmitter::with_capacity(block.len());
        let mut paragraph: Vec<&str> = Vec::new();
        let mut paragraphs = 0usize;

        for line in block.lines() {
            if is_blank(line) {
                if !paragraph.is_empty() {
                    self.fill_paragraph(&paragraph, &mut out);
                    paragraph.clear();
                    paragraphs += 1;
                }
                out.emit_line("");
            } else {
                paragraph.push(line);
            }
        }
        if !paragraph.is_empty() {
            self.fill_paragraph(&paragraph, &mut out);
            paragraphs += 1;
        }

        tracing::trace!(paragraphs, "reflowed");
        Ok(block.replace_lines(out.finish()).render())
    }

    /// Pack the words of one paragraph onto lines.
    ///
    /// Words are split on ASCII whitespace only, so a non-breaking space
    /// stays inside its word.
    fn fill_paragraph(&self, lines: &[&str], out: &mut impl Emitter) {
        let Some(first) = lines.first() else {
            return;
        };
        let words: Vec<&str> = lines
            .iter()
            .flat_map(|line| line.split_ascii_whitespace())
            .collect();
        if words.is_empty() {
            out.emit_newline();
            return;
        }

        let max_width = self.config.width;
        let tab_size = self.config.tab_size;
        let prefix = self.paragraph_prefix(split_indent(first).0, &words);
        let fresh = Shape::from_config(&self.config)
            .indent(str_width(&prefix, tab_size))
            .next_line(max_width);

        let mut shape = fresh;
        out.emit_indent(&prefix);

        for word in words {
            let word_width = word.chars().count();
            if shape.at_line_start() {
                out.emit(word);
                shape = shape.consume(word_width);
            } else if shape.fits(word_width + 1) {
                out.emit_space();
                out.emit(word);
                shape = shape.consume(word_width + 1);
            } else {
                out.emit_newline();
                out.emit_indent(&prefix);
                out.emit(word);
                shape = fresh.consume(word_width);
            }
        }

        out.emit_newline();
    }

    /// The indentation repeated on every line of a paragraph.
    ///
    /// The first line's indentation is clipped until the widest word that fits
    /// within the width still fits after it. Words wider than the width sit
    /// alone on their line either way.
    fn paragraph_prefix(&self, indent: &str, words: &[&str]) -> String {
        let max_width = self.config.width;
        let tab_size = self.config.tab_size;
        let widest = words
            .iter()
            .map(|word| word.chars().count())
            .filter(|&width| width <= max_width)
            .max();
        match widest {
            Some(widest) if str_width(indent, tab_size) + widest > max_width => {
                clip_indent(indent, max_width - widest, tab_size)
            }
            _ => indent.to_string(),
        }
    }
}
