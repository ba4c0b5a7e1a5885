//! Conditional and optional-bind directives
//!
//! Branches are closures so only the taken branch is ever evaluated.

use super::TemplateBuilder;
use crate::template::TemplateString;

impl TemplateBuilder {
    /// Append `then_template()` when `condition` holds; otherwise elide the
    /// current line.
    pub fn append_if<F>(&mut self, condition: bool, then_template: F)
    where
        F: FnOnce() -> TemplateString,
    {
        if condition {
            self.append_template(&then_template());
        } else {
            self.remove_line_if_empty();
        }
    }

    /// Append `then_template()` when `condition` holds, `else_template()`
    /// otherwise. The untaken branch is never evaluated.
    pub fn append_if_else<F, G>(&mut self, condition: bool, then_template: F, else_template: G)
    where
        F: FnOnce() -> TemplateString,
        G: FnOnce() -> TemplateString,
    {
        if condition {
            self.append_template(&then_template());
        } else {
            self.append_template(&else_template());
        }
    }

    /// Bind `value` and append `then_template(value)`; `None` elides the
    /// current line.
    pub fn append_if_let<T, F>(&mut self, value: Option<T>, then_template: F)
    where
        F: FnOnce(T) -> TemplateString,
    {
        match value {
            Some(value) => self.append_template(&then_template(value)),
            None => self.remove_line_if_empty(),
        }
    }

    /// Bind `value` and append `then_template(value)`; `None` renders
    /// `else_template()` instead.
    pub fn append_if_let_else<T, F, G>(&mut self, value: Option<T>, then_template: F, else_template: G)
    where
        F: FnOnce(T) -> TemplateString,
        G: FnOnce() -> TemplateString,
    {
        match value {
            Some(value) => self.append_template(&then_template(value)),
            None => self.append_template(&else_template()),
        }
    }

    /// As [`append_if_let`], with the binding additionally gated on
    /// `predicate`. A present value failing the predicate elides.
    ///
    /// [`append_if_let`]: Self::append_if_let
    pub fn append_if_let_where<T, P, F>(&mut self, value: Option<T>, predicate: P, then_template: F)
    where
        P: FnOnce(&T) -> bool,
        F: FnOnce(T) -> TemplateString,
    {
        self.append_if_let(value.filter(|v| predicate(v)), then_template);
    }

    /// As [`append_if_let_else`], gated on `predicate`: a missing value or
    /// a failing predicate both render the else branch.
    ///
    /// [`append_if_let_else`]: Self::append_if_let_else
    pub fn append_if_let_where_else<T, P, F, G>(
        &mut self,
        value: Option<T>,
        predicate: P,
        then_template: F,
        else_template: G,
    ) where
        P: FnOnce(&T) -> bool,
        F: FnOnce(T) -> TemplateString,
        G: FnOnce() -> TemplateString,
    {
        self.append_if_let_else(value.filter(|v| predicate(v)), then_template, else_template);
    }
}
