//! # Restamp - Positional Placeholder Templates
//!
//! `restamp` is a small placeholder-substitution engine: compile a template
//! once, then render it repeatedly with positional values and a repeat
//! count. Placeholders are the fixed keyword `value` wrapped in a delimiter
//! pair (`*(` / `)*` by default, overridable per compile call):
//!
//! ```text
//! See the *( value )* brown fox?
//! ```
//!
//! Every placeholder is one positional slot; values are bound strictly in
//! left-to-right order of occurrence. The engine computes strings only —
//! emitting the result the requested number of times is the caller's job,
//! with helpers in the [`emit`] module.
//!
//! ## Quick Start
//!
//! ```rust
//! use restamp::compile;
//!
//! let template = compile("See the *( value )* brown *( value )*?");
//! assert_eq!(template.placeholder_count(), 2);
//!
//! let out = template.render(&["slow", "bear"], 2).unwrap();
//! assert_eq!(out.text, "See the slow brown bear?");
//! assert_eq!(out.count, 2);
//! ```
//!
//! ## Custom Delimiters
//!
//! ```rust
//! use restamp::{compile_with, DelimiterPair};
//!
//! let delims = DelimiterPair::new("<<!", "!>>").unwrap();
//! let template = compile_with("Is <<! value !>> healthy to <<! value !>>?", delims);
//!
//! let out = template.render(&["ice cream", "consume"], 7).unwrap();
//! assert_eq!(out.text, "Is ice cream healthy to consume?");
//! ```
//!
//! ## Validation
//!
//! Rendering is all-or-nothing. A wrong number of values fails with
//! [`TemplateError::ArityMismatch`]; the trailing-count invocation shape
//! ([`Template::render_args`]) rejects a missing, negative, or non-integer
//! count with [`TemplateError::InvalidCount`]:
//!
//! ```rust
//! use restamp::{compile, TemplateError};
//!
//! let template = compile("See the *( value )* brown fox?");
//!
//! assert!(matches!(
//!     template.render(&["a", "b"], 1),
//!     Err(TemplateError::ArityMismatch { expected: 1, supplied: 2 })
//! ));
//! ```
//!
//! ## Malformed Placeholders
//!
//! Matching is all-or-nothing per occurrence: an unbalanced delimiter or a
//! misspelled keyword is never substituted and passes through as literal
//! text.
//!
//! ```rust
//! use restamp::compile;
//!
//! let template = compile("See the *( value brown fox?");
//! assert_eq!(template.placeholder_count(), 0);
//! assert_eq!(template.render(&[], 1).unwrap().text, "See the *( value brown fox?");
//! ```
//!
//! ## Thread Safety
//!
//! A [`Template`] is immutable after compilation and rendering allocates
//! only its local result, so templates can be shared and rendered
//! concurrently without synchronization.

pub mod emit;
mod error;
mod template;

pub use error::{Result, TemplateError};
pub use restamp_scanner::{DelimiterError, DelimiterPair, DelimiterSide, Segment, KEYWORD};
pub use template::{compile, compile_with, Rendered, Template};
