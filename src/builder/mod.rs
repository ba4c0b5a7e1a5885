//! The transient accumulator that evaluates a composition into a
//! [`TemplateString`]
//!
//! A builder is created per composition, mutated once per literal or
//! directive in left-to-right order, and consumed exactly once by
//! [`build`](TemplateBuilder::build). It tracks the accumulated text and a
//! single flag recording whether the most recent directive produced no
//! content and had its line removed.

mod comment;
mod conditional;
mod sequence;

pub use sequence::DEFAULT_SEPARATOR;

use crate::template::TemplateString;

/// Accumulator for one template composition.
#[derive(Debug, Default)]
pub struct TemplateBuilder {
    buffer: String,
    last_line_was_removed: bool,
}

impl TemplateBuilder {
    /// Create an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a builder pre-sized for a composition with roughly
    /// `literal_len` bytes of literal text and `interpolation_count`
    /// directives.
    pub fn with_capacity(literal_len: usize, interpolation_count: usize) -> Self {
        Self {
            buffer: String::with_capacity(literal_len + interpolation_count * 16),
            last_line_was_removed: false,
        }
    }

    /// Append raw text without any indentation handling.
    ///
    /// If the previous directive elided its line and `text` starts with a
    /// newline, that newline is dropped so the elided blank line is not
    /// reintroduced. Appending an empty string is a complete no-op and
    /// leaves the elision flag untouched.
    pub fn append_literal(&mut self, text: &str) {
        if text.is_empty() {
            return;
        }
        if self.last_line_was_removed {
            if let Some(rest) = text.strip_prefix('\n') {
                self.buffer.push_str(rest);
            } else {
                self.buffer.push_str(text);
            }
        } else {
            self.buffer.push_str(text);
        }
        self.last_line_was_removed = false;
    }

    /// Append a value, re-indenting every line after the first to the
    /// current line's indentation.
    ///
    /// The indent is the run of spaces/tabs at the start of the partial line
    /// the buffer currently ends on. Lines of `value` that are empty stay
    /// empty; no indent is inserted into genuinely blank lines.
    pub fn append(&mut self, value: impl AsRef<str>) {
        let value = value.as_ref();
        let indent = self.current_indent();
        if indent.is_empty() {
            self.append_literal(value);
        } else {
            let indented = join_as_lines(value.split('\n'), indent);
            self.append_literal(&indented);
        }
    }

    /// Append a nested template, eliding the current line when the template
    /// is empty.
    pub fn append_template(&mut self, template: &TemplateString) {
        if template.is_empty() {
            self.remove_line_if_empty();
        } else {
            self.append(template.as_str());
        }
    }

    /// Append a section template. Behaves as [`append_template`], except
    /// that an empty section also consumes the newline preceding it, so a
    /// skipped section leaves no gap between its neighbors.
    ///
    /// [`append_template`]: Self::append_template
    pub fn append_section(&mut self, section: &TemplateString) {
        self.append_template(section);
        if section.is_empty() && self.buffer.ends_with('\n') {
            self.buffer.pop();
        }
    }

    /// Append a JSON value, pretty-printed, re-indented like any other
    /// multi-line interpolation.
    pub fn append_json(&mut self, value: &serde_json::Value) {
        // `Value` serialization is infallible.
        let json = serde_json::to_string_pretty(value).unwrap_or_default();
        self.append(json);
    }

    /// Remove the trailing partial line when it contains only spaces/tabs,
    /// and record the removal so a following literal's leading newline gets
    /// dropped.
    ///
    /// This is the blank-line suppression primitive every directive that
    /// produced no content relies on.
    pub fn remove_line_if_empty(&mut self) {
        let line = self.trailing_partial_line();
        if line.chars().all(is_indent_char) {
            let new_len = self.buffer.len() - line.len();
            self.buffer.truncate(new_len);
            self.last_line_was_removed = true;
        }
    }

    /// Finalize the composition.
    ///
    /// When the last directive elided its line and the buffer ends with a
    /// newline, that newline is dropped from the produced content.
    pub fn build(self) -> TemplateString {
        let mut content = self.buffer;
        if self.last_line_was_removed && content.ends_with('\n') {
            content.pop();
        }
        TemplateString::new(content)
    }

    /// The run of spaces/tabs at the start of the line the buffer currently
    /// ends on. Recomputed on demand; never cached.
    fn current_indent(&self) -> &str {
        let line = self.trailing_partial_line();
        let end = line
            .char_indices()
            .find(|(_, c)| !is_indent_char(*c))
            .map_or(line.len(), |(i, _)| i);
        &line[..end]
    }

    /// The buffer's content after its last newline (the whole buffer when it
    /// has none).
    fn trailing_partial_line(&self) -> &str {
        match self.buffer.rfind('\n') {
            Some(i) => &self.buffer[i + 1..],
            None => &self.buffer,
        }
    }
}

/// Spaces and tabs count as indentation; other whitespace does not.
fn is_indent_char(c: char) -> bool {
    c == ' ' || c == '\t'
}

/// Rejoin split lines: first line unchanged, every later non-empty line
/// prefixed with `indent`, empty lines left empty.
fn join_as_lines<'a>(mut lines: impl Iterator<Item = &'a str>, indent: &str) -> String {
    let mut joined = lines.next().unwrap_or_default().to_string();
    for line in lines {
        joined.push('\n');
        if !line.is_empty() {
            joined.push_str(indent);
            joined.push_str(line);
        }
    }
    joined
}
