//! Comment and documentation directives

use itertools::Itertools;

use super::TemplateBuilder;

impl TemplateBuilder {
    /// Append `text` as a `//` line comment block.
    pub fn append_comment(&mut self, text: Option<&str>) {
        self.append_comment_with_prefix(text, "//");
    }

    /// Append `text` as a `///` documentation block.
    pub fn append_documentation(&mut self, text: Option<&str>) {
        self.append_comment_with_prefix(text, "///");
    }

    /// Prefix every line of `text` with `line_prefix` and interpolate the
    /// result, so nested indentation applies to the whole block.
    ///
    /// Non-empty lines get `line_prefix` plus one space before the content;
    /// empty lines become a bare `line_prefix` with no trailing space.
    /// Missing or empty text elides the current line.
    pub fn append_comment_with_prefix(&mut self, text: Option<&str>, line_prefix: &str) {
        let text = match text {
            Some(text) if !text.is_empty() => text,
            _ => {
                self.remove_line_if_empty();
                return;
            }
        };

        let block = text
            .split('\n')
            .map(|line| {
                if line.is_empty() {
                    line_prefix.to_string()
                } else {
                    format!("{} {}", line_prefix, line)
                }
            })
            .join("\n");

        self.append(block);
    }
}
