//! Sequence, list, for-each, and while directives

use std::fmt::Display;

use super::TemplateBuilder;
use crate::template::TemplateString;

/// Default separator between sequence elements.
pub const DEFAULT_SEPARATOR: &str = ",\n";

impl TemplateBuilder {
    /// Render every item, join with `separator`, interpolate the joined
    /// block, then append `terminator` if given.
    ///
    /// An empty sequence renders nothing and elides the current line, so no
    /// separator artifacts are left behind.
    pub fn append_sequence<I>(&mut self, items: I, separator: &str, terminator: Option<&str>)
    where
        I: IntoIterator,
        I::Item: Display,
    {
        self.append_for_each(items, separator, terminator, |item| {
            Some(TemplateString::new(item.to_string()))
        });
    }

    /// As [`append_sequence`], but a collection with more than one element
    /// is wrapped in its own indented block: a leading `"\n  "` and a
    /// trailing `"\n"`. Single-element and empty collections render inline.
    ///
    /// [`append_sequence`]: Self::append_sequence
    pub fn append_list<I>(&mut self, items: I, separator: &str, terminator: Option<&str>)
    where
        I: IntoIterator,
        I::Item: Display,
    {
        let rendered: Vec<String> = items.into_iter().map(|item| item.to_string()).collect();
        let wrap_in_newlines = rendered.len() > 1;
        if wrap_in_newlines {
            self.append("\n  ");
        }
        self.append_sequence(&rendered, separator, terminator);
        if wrap_in_newlines {
            self.append("\n");
        }
    }

    /// Map each item through `template`; items mapped to `None` contribute
    /// nothing, not even a separator. When no item produces content the
    /// current line is elided.
    ///
    /// Result order matches iteration order.
    pub fn append_for_each<I, F>(
        &mut self,
        items: I,
        separator: &str,
        terminator: Option<&str>,
        mut template: F,
    ) where
        I: IntoIterator,
        F: FnMut(I::Item) -> Option<TemplateString>,
    {
        let mut joined = String::new();
        for item in items {
            if let Some(rendered) = template(item) {
                if !joined.is_empty() {
                    joined.push_str(separator);
                }
                joined.push_str(rendered.as_str());
            }
        }

        if joined.is_empty() {
            self.remove_line_if_empty();
            return;
        }

        self.append(joined);
        if let Some(terminator) = terminator {
            self.append(terminator);
        }
    }

    /// Fallible [`append_for_each`]: a mapping closure's error aborts the
    /// composition and propagates unmodified. The builder makes no promise
    /// about its buffer after a failure; callers must discard it.
    ///
    /// [`append_for_each`]: Self::append_for_each
    pub fn try_append_for_each<I, F, E>(
        &mut self,
        items: I,
        separator: &str,
        terminator: Option<&str>,
        mut template: F,
    ) -> Result<(), E>
    where
        I: IntoIterator,
        F: FnMut(I::Item) -> Result<Option<TemplateString>, E>,
    {
        let mut joined = String::new();
        for item in items {
            if let Some(rendered) = template(item)? {
                if !joined.is_empty() {
                    joined.push_str(separator);
                }
                joined.push_str(rendered.as_str());
            }
        }

        if joined.is_empty() {
            self.remove_line_if_empty();
            return Ok(());
        }

        self.append(joined);
        if let Some(terminator) = terminator {
            self.append(terminator);
        }
        Ok(())
    }

    /// Collect templates while `condition` holds, then render them as a
    /// sequence.
    pub fn append_while<C, F>(
        &mut self,
        mut condition: C,
        mut template: F,
        separator: &str,
        terminator: Option<&str>,
    ) where
        C: FnMut() -> bool,
        F: FnMut() -> TemplateString,
    {
        let mut collected = Vec::new();
        while condition() {
            collected.push(template());
        }
        self.append_sequence(
            collected.iter().map(TemplateString::as_str),
            separator,
            terminator,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_sequence_joins_with_separator() {
        let mut b = TemplateBuilder::new();
        b.append_sequence(["a", "b", "c"], DEFAULT_SEPARATOR, None);
        assert_eq!(b.build().as_str(), "a,\nb,\nc");
    }

    #[test]
    fn test_sequence_indents_joined_block() {
        let mut b = TemplateBuilder::new();
        b.append_literal("enum E {\n  ");
        b.append_sequence(["A", "B"], DEFAULT_SEPARATOR, None);
        b.append_literal("\n}");
        assert_eq!(b.build().as_str(), "enum E {\n  A,\n  B\n}");
    }

    #[test]
    fn test_sequence_terminator() {
        let mut b = TemplateBuilder::new();
        b.append_sequence(["x", "y"], ", ", Some(";"));
        assert_eq!(b.build().as_str(), "x, y;");
    }

    #[test]
    fn test_empty_sequence_elides_line() {
        let mut b = TemplateBuilder::new();
        b.append_literal("(\n  ");
        b.append_sequence(Vec::<&str>::new(), DEFAULT_SEPARATOR, None);
        b.append_literal("\n)");
        assert_eq!(b.build().as_str(), "(\n)");
    }

    #[test]
    fn test_list_single_element_renders_inline() {
        let mut b = TemplateBuilder::new();
        b.append_literal("f(");
        b.append_list(["x"], DEFAULT_SEPARATOR, None);
        b.append_literal(")");
        assert_eq!(b.build().as_str(), "f(x)");
    }

    #[test]
    fn test_list_multiple_elements_wrap() {
        let mut b = TemplateBuilder::new();
        b.append_literal("f(");
        b.append_list(["x", "y"], DEFAULT_SEPARATOR, None);
        b.append_literal(")");
        assert_eq!(b.build().as_str(), "f(\n  x,\n  y\n)");
    }

    #[test]
    fn test_for_each_skips_none_without_separator() {
        let mut b = TemplateBuilder::new();
        b.append_for_each(["a", "b", "c"], ", ", None, |item| {
            if item == "b" {
                None
            } else {
                Some(TemplateString::new(item))
            }
        });
        assert_eq!(b.build().as_str(), "a, c");
    }

    #[test]
    fn test_for_each_all_skipped_elides_line() {
        let mut b = TemplateBuilder::new();
        b.append_literal("before\n");
        b.append_for_each(["a", "b"], ", ", None, |_| None);
        assert_eq!(b.build().as_str(), "before");
    }

    #[test]
    fn test_for_each_preserves_order() {
        let mut b = TemplateBuilder::new();
        b.append_for_each(1..=4, ", ", None, |n| {
            Some(TemplateString::new(n.to_string()))
        });
        assert_eq!(b.build().as_str(), "1, 2, 3, 4");
    }

    #[test]
    fn test_try_for_each_propagates_error() {
        let mut b = TemplateBuilder::new();
        let result: Result<(), &str> = b.try_append_for_each(["a", "bad", "c"], ", ", None, |item| {
            if item == "bad" {
                Err("mapping failed")
            } else {
                Ok(Some(TemplateString::new(item)))
            }
        });
        assert_eq!(result, Err("mapping failed"));
    }

    #[test]
    fn test_try_for_each_success() {
        let mut b = TemplateBuilder::new();
        let result: Result<(), ()> = b.try_append_for_each(["a", "b"], " | ", None, |item| {
            Ok(Some(TemplateString::new(item)))
        });
        assert!(result.is_ok());
        assert_eq!(b.build().as_str(), "a | b");
    }

    #[test]
    fn test_while_collects_until_false() {
        let n = std::cell::Cell::new(0);
        let mut b = TemplateBuilder::new();
        b.append_while(
            || n.get() < 3,
            || {
                n.set(n.get() + 1);
                TemplateString::new(format!("case{}", n.get()))
            },
            DEFAULT_SEPARATOR,
            None,
        );
        assert_eq!(b.build().as_str(), "case1,\ncase2,\ncase3");
    }

    #[test]
    fn test_while_never_true_elides() {
        let mut b = TemplateBuilder::new();
        b.append_literal("head\n");
        b.append_while(|| false, || TemplateString::new("unused"), ", ", None);
        assert_eq!(b.build().as_str(), "head");
    }
}
