//! template-string - indentation-correct source text composition for code generators
//!
//! This library lets a code generator assemble output text from nested
//! template fragments without hand-managing whitespace: multi-line
//! substitutions are re-indented to the line they land on, directives that
//! produce no content collapse the blank line they would have left behind,
//! and a small fixed set of directives covers conditionals, iteration,
//! comments, and list joining.
//!
//! # Example
//!
//! ```rust
//! use template_string::TemplateBuilder;
//!
//! let fields = ["id: ID!", "name: String"];
//!
//! let mut t = TemplateBuilder::new();
//! t.append_literal("struct User {\n  ");
//! t.append_sequence(fields, ",\n", None);
//! t.append_literal("\n}");
//!
//! assert_eq!(
//!     t.build().as_str(),
//!     "struct User {\n  id: ID!,\n  name: String\n}"
//! );
//! ```

pub mod builder;
pub mod template;

pub use builder::{TemplateBuilder, DEFAULT_SEPARATOR};
pub use template::{prepend, TemplateString};
