//! Compiled templates and positional rendering.
//!
//! [`compile`] tokenizes a template once; the resulting [`Template`] is
//! immutable and can be rendered any number of times with different
//! arguments. Rendering is pure: it computes a [`Rendered`] value and leaves
//! the actual emission to the caller (see the [`crate::emit`] module).

use restamp_scanner::{scan, DelimiterPair, Segment};

use crate::error::{Result, TemplateError};

/// Compiles a template with the default `*(` / `)*` delimiters.
///
/// # Example
///
/// ```rust
/// use restamp::compile;
///
/// let template = compile("See the *( value )* brown fox?");
/// let out = template.render(&["quick"], 3).unwrap();
/// assert_eq!(out.text, "See the quick brown fox?");
/// assert_eq!(out.count, 3);
/// ```
pub fn compile(template: &str) -> Template {
    Template::new(template, DelimiterPair::default())
}

/// Compiles a template with a caller-supplied delimiter pair.
///
/// The pair is validated when it is built via [`DelimiterPair::new`];
/// delimiter scope is per compile call, never global.
///
/// # Example
///
/// ```rust
/// use restamp::{compile_with, DelimiterPair};
///
/// let delims = DelimiterPair::new("<<!", "!>>").unwrap();
/// let template = compile_with("Is <<! value !>> healthy to <<! value !>>?", delims);
/// let out = template.render(&["ice cream", "consume"], 7).unwrap();
/// assert_eq!(out.text, "Is ice cream healthy to consume?");
/// ```
pub fn compile_with(template: &str, delims: DelimiterPair) -> Template {
    Template::new(template, delims)
}

/// The outcome of a successful render.
///
/// `text` is the fully substituted string; `count` is how many times the
/// caller asked for it to be emitted. The engine never performs the
/// emission itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rendered {
    pub text: String,
    pub count: usize,
}

/// A template compiled against one delimiter pair.
///
/// Owns the resolved delimiters, the ordered segment sequence, and the
/// cached placeholder count. Immutable after construction: rendering never
/// mutates shared state, so a `Template` may be shared across threads and
/// rendered concurrently without synchronization.
#[derive(Debug, Clone)]
pub struct Template {
    delims: DelimiterPair,
    source: String,
    segments: Vec<Segment>,
    placeholder_count: usize,
}

impl Template {
    fn new(source: &str, delims: DelimiterPair) -> Self {
        let segments = scan(source, &delims);
        let placeholder_count = segments
            .iter()
            .filter(|s| matches!(s, Segment::Placeholder))
            .count();

        Self {
            delims,
            source: source.to_string(),
            segments,
            placeholder_count,
        }
    }

    /// Number of substitution slots this template requires.
    pub fn placeholder_count(&self) -> usize {
        self.placeholder_count
    }

    /// The original template text, unmodified.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// The delimiter pair this template was compiled against.
    pub fn delimiters(&self) -> &DelimiterPair {
        &self.delims
    }

    /// Substitutes `values` positionally and reports the repeat count.
    ///
    /// `values.len()` must equal [`placeholder_count`](Self::placeholder_count);
    /// otherwise the call fails with [`TemplateError::ArityMismatch`] and
    /// produces no partial output. Values are inserted as opaque strings,
    /// never re-escaped or re-parsed. A `count` of 0 is legal and asks the
    /// caller for zero emissions.
    pub fn render(&self, values: &[&str], count: usize) -> Result<Rendered> {
        if values.len() != self.placeholder_count {
            return Err(TemplateError::ArityMismatch {
                expected: self.placeholder_count,
                supplied: values.len(),
            });
        }

        let mut text = String::with_capacity(self.source.len());
        let mut used = 0;

        for segment in &self.segments {
            match segment {
                Segment::Literal(literal) => text.push_str(literal),
                Segment::Placeholder => {
                    text.push_str(values[used]);
                    used += 1;
                }
            }
        }

        Ok(Rendered { text, count })
    }

    /// Renders from a single argument list whose trailing element is the
    /// repeat count.
    ///
    /// This mirrors the call shape of a CLI or script binding: zero or more
    /// substitution values followed by exactly one count. The count is
    /// carved off first, so a missing, non-integer, or negative trailing
    /// argument fails with [`TemplateError::InvalidCount`] before arity is
    /// checked. The remaining arguments then go through [`render`](Self::render).
    ///
    /// # Example
    ///
    /// ```rust
    /// use restamp::{compile, TemplateError};
    ///
    /// let template = compile("See the *( value )* brown fox?");
    ///
    /// let out = template.render_args(&["quick", "3"]).unwrap();
    /// assert_eq!(out.text, "See the quick brown fox?");
    /// assert_eq!(out.count, 3);
    ///
    /// // Forgetting the count makes the value land in the count position.
    /// let err = template.render_args(&["quick"]).unwrap_err();
    /// assert!(matches!(err, TemplateError::InvalidCount(_)));
    /// ```
    pub fn render_args(&self, args: &[&str]) -> Result<Rendered> {
        let (count_arg, values) = match args.split_last() {
            Some(split) => split,
            None => {
                return Err(TemplateError::InvalidCount(
                    "missing trailing repeat count".to_string(),
                ))
            }
        };

        let count: i64 = count_arg.trim().parse().map_err(|_| {
            TemplateError::InvalidCount(format!("'{}' is not an integer", count_arg))
        })?;
        if count < 0 {
            return Err(TemplateError::InvalidCount(format!(
                "{} is negative",
                count
            )));
        }

        self.render(values, count as usize)
    }
}
