//! Indented text accumulation.

const INDENT: &str = "    ";

/// An in-memory text buffer with an indentation level.
#[derive(Debug, Default)]
pub struct Contents {
    buf: String,
    level: usize,
}

impl Contents {
    pub fn new() -> Self {
        Self::default()
    }

    /// Increase the indentation level by one step.
    pub fn indent(&mut self) {
        self.level += 1;
    }

    /// Decrease the indentation level by one step.
    pub fn dedent(&mut self) {
        self.level = self.level.saturating_sub(1);
    }

    /// Append one line at the current indentation.
    pub fn push_line(&mut self, line: &str) {
        for _ in 0..self.level {
            self.buf.push_str(INDENT);
        }
        self.buf.push_str(line);
        self.buf.push('\n');
    }

    /// Append an empty separator line (never indented).
    pub fn blank_line(&mut self) {
        self.buf.push('\n');
    }

    pub fn as_str(&self) -> &str {
        &self.buf
    }

    pub fn into_string(self) -> String {
        self.buf
    }
}
