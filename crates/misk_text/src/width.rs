//! Column Measurement
//!
//! Columns are counted per `char`. A tab advances to the next multiple of the
//! tab size. Callers validate the tab size before measuring.

/// Column after placing `c` at `column`.
#[inline]
pub(crate) fn advance(column: usize, c: char, tab_size: usize) -> usize {
    if c == '\t' {
        column + tab_size - (column % tab_size)
    } else {
        column + 1
    }
}

/// Width of `text` when it starts at column 0.
pub(crate) fn str_width(text: &str, tab_size: usize) -> usize {
    text.chars().fold(0, |column, c| advance(column, c, tab_size))
}

/// Characters that make up indentation.
#[inline]
pub(crate) fn is_indent_char(c: char) -> bool {
    c == ' ' || c == '\t'
}

/// Split a line into its leading spaces/tabs and the remainder.
pub(crate) fn split_indent(line: &str) -> (&str, &str) {
    let end = line.find(|c| !is_indent_char(c)).unwrap_or(line.len());
    line.split_at(end)
}

/// A line with nothing but spaces and tabs.
#[inline]
pub(crate) fn is_blank(line: &str) -> bool {
    line.chars().all(is_indent_char)
}

/// Indentation that holds both tabs and spaces.
pub(crate) fn is_mixed(indent: &str) -> bool {
    indent.contains(' ') && indent.contains('\t')
}

/// Leading part of `indent` that ends at or before column `columns`.
///
/// A tab that would cross the limit is replaced by spaces up to it.
pub(crate) fn clip_indent(indent: &str, columns: usize, tab_size: usize) -> String {
    let mut clipped = String::with_capacity(columns);
    let mut column = 0;
    for c in indent.chars() {
        let next = advance(column, c, tab_size);
        if next > columns {
            clipped.extend(std::iter::repeat(' ').take(columns - column));
            break;
        }
        clipped.push(c);
        column = next;
    }
    clipped
}

/// Re-emit `columns` of indentation as tabs followed by spaces.
pub(crate) fn tabbed_indent(columns: usize, tab_size: usize) -> String {
    let tabs = columns / tab_size;
    let spaces = columns % tab_size;
    let mut indent = String::with_capacity(tabs + spaces);
    indent.extend(std::iter::repeat('\t').take(tabs));
    indent.extend(std::iter::repeat(' ').take(spaces));
    indent
}
