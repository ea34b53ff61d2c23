//! Indentation-aware text buffer used by the source printers.

/// Line-oriented source buffer.
///
/// Blank lines never carry trailing whitespace.
///
/// # Examples
///
/// ```
/// use mcp_forge_codegen::writer::CodeWriter;
///
/// let mut w = CodeWriter::new("    ");
/// w.line(0, "def f():");
/// w.line(1, "return 1");
/// w.blank();
/// assert_eq!(w.finish(), "def f():\n    return 1\n\n");
/// ```
#[derive(Debug, Clone)]
pub struct CodeWriter {
    buf: String,
    indent_unit: &'static str,
}

impl CodeWriter {
    /// Creates an empty writer with the given indentation unit.
    #[must_use]
    pub const fn new(indent_unit: &'static str) -> Self {
        Self {
            buf: String::new(),
            indent_unit,
        }
    }

    /// Writes one line at the given indentation depth.
    pub fn line(&mut self, depth: usize, text: impl AsRef<str>) {
        let text = text.as_ref();
        if text.is_empty() {
            self.blank();
            return;
        }
        for _ in 0..depth {
            self.buf.push_str(self.indent_unit);
        }
        self.buf.push_str(text);
        self.buf.push('\n');
    }

    /// Writes several lines at the same depth.
    pub fn lines<I, S>(&mut self, depth: usize, lines: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for line in lines {
            self.line(depth, line);
        }
    }

    /// Writes an empty line.
    pub fn blank(&mut self) {
        self.buf.push('\n');
    }

    /// Writes each line of `text` prefixed with a comment marker.
    pub fn comment(&mut self, depth: usize, marker: &str, text: &str) {
        for line in crate::escape::comment_lines(text) {
            if line.is_empty() {
                self.line(depth, marker);
            } else {
                self.line(depth, format!("{marker} {line}"));
            }
        }
    }

    /// Returns the accumulated source.
    #[must_use]
    pub fn finish(self) -> String {
        self.buf
    }
}
