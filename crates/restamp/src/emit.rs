//! Emission collaborator for rendered output.
//!
//! Rendering itself is pure: [`crate::Template::render`] only computes a
//! [`Rendered`] value. Whoever owns the output sink performs the actual
//! emissions, exactly `count` of them. These helpers cover the common sinks
//! so callers do not each rewrite the loop.

use std::io::{self, Write};

use crate::template::Rendered;

/// Writes `rendered.text` followed by a newline, `rendered.count` times.
///
/// # Example
///
/// ```rust
/// use restamp::{compile, emit};
///
/// let out = compile("See the *( value )* brown fox?")
///     .render(&["quick"], 2)
///     .unwrap();
///
/// let mut sink = Vec::new();
/// emit::emit(&out, &mut sink).unwrap();
/// assert_eq!(
///     String::from_utf8(sink).unwrap(),
///     "See the quick brown fox?\nSee the quick brown fox?\n"
/// );
/// ```
pub fn emit<W: Write>(rendered: &Rendered, out: &mut W) -> io::Result<()> {
    for _ in 0..rendered.count {
        writeln!(out, "{}", rendered.text)?;
    }
    Ok(())
}

/// Emits to standard output through a single locked handle.
pub fn emit_stdout(rendered: &Rendered) -> io::Result<()> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    emit(rendered, &mut handle)
}
