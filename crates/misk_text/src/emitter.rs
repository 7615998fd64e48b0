//! Output Emitter
//!
//! Line-oriented output used while rewriting a block. Text is appended to the
//! current line; `emit_newline` closes it.

/// Trait for emitting rewritten output.
pub(crate) trait Emitter {
    /// Emit a text fragment onto the current line.
    fn emit(&mut self, text: &str);

    /// Close the current line.
    fn emit_newline(&mut self);

    /// Emit an indentation prefix.
    fn emit_indent(&mut self, indent: &str);

    /// Emit a single space.
    fn emit_space(&mut self);
}

/// Collects output as a list of lines.
#[derive(Default)]
pub(crate) struct LineEmitter {
    lines: Vec<String>,
    current: String,
}

impl LineEmitter {
    /// Create with room for `lines` output lines.
    pub fn with_capacity(lines: usize) -> Self {
        Self {
            lines: Vec::with_capacity(lines),
            current: String::new(),
        }
    }

    /// Emit a complete line.
    pub fn emit_line(&mut self, line: &str) {
        self.emit(line);
        self.emit_newline();
    }

    /// Get the finished lines. An unterminated current line is kept.
    pub fn finish(mut self) -> Vec<String> {
        if !self.current.is_empty() {
            self.lines.push(self.current);
        }
        self.lines
    }
}

impl Emitter for LineEmitter {
    fn emit(&mut self, text: &str) {
        self.current.push_str(text);
    }

    fn emit_newline(&mut self) {
        self.lines.push(std::mem::take(&mut self.current));
    }

    fn emit_indent(&mut self, indent: &str) {
        self.current.push_str(indent);
    }

    fn emit_space(&mut self) {
        self.current.push(' ');
    }
}
