//! The immutable rendered-text value produced by a template composition

use std::fmt;
use std::ops::Add;

use crate::builder::TemplateBuilder;

/// A finalized piece of formatted source text.
///
/// A `TemplateString` is produced either directly from a literal string or by
/// finalizing a [`TemplateBuilder`]. Once constructed it never changes; an
/// enclosing composition reads it through [`as_str`](Self::as_str) and
/// [`is_empty`](Self::is_empty).
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct TemplateString {
    content: String,
}

impl TemplateString {
    /// Create a template string holding `content` as-is.
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
        }
    }

    /// Run a composition closure against a fresh builder and finalize it.
    ///
    /// # Example
    ///
    /// ```rust
    /// use template_string::TemplateString;
    ///
    /// let greeting = TemplateString::compose(|t| {
    ///     t.append_literal("hello, ");
    ///     t.append("world");
    /// });
    /// assert_eq!(greeting.as_str(), "hello, world");
    /// ```
    pub fn compose(build: impl FnOnce(&mut TemplateBuilder)) -> Self {
        let mut builder = TemplateBuilder::new();
        build(&mut builder);
        builder.build()
    }

    /// The rendered text.
    pub fn as_str(&self) -> &str {
        &self.content
    }

    /// True when the rendered text has no characters.
    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    /// Consume the value, returning the rendered text.
    pub fn into_string(self) -> String {
        self.content
    }
}

impl fmt::Display for TemplateString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.content)
    }
}

impl From<&str> for TemplateString {
    fn from(content: &str) -> Self {
        Self::new(content)
    }
}

impl From<String> for TemplateString {
    fn from(content: String) -> Self {
        Self::new(content)
    }
}

impl AsRef<str> for TemplateString {
    fn as_ref(&self) -> &str {
        &self.content
    }
}

/// Concatenate a raw prefix with a template string.
///
/// This bypasses the builder's interpolation logic entirely: no indentation
/// is computed and no blank line is elided. Use it when the prefix is already
/// formatted and the two pieces just need to be glued together.
pub fn prepend(prefix: &str, template: &TemplateString) -> TemplateString {
    TemplateString::new(format!("{}{}", prefix, template.as_str()))
}

/// `"prefix" + template` concatenation, same semantics as [`prepend`].
impl Add<TemplateString> for &str {
    type Output = TemplateString;

    fn add(self, rhs: TemplateString) -> TemplateString {
        prepend(self, &rhs)
    }
}
