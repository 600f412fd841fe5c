//! Positional placeholder substitution for phrasings.
//!
//! Phrasings use numbered placeholders (`{0}`, `{1}`, ...) so that the same
//! argument list can feed every variant of a message regardless of word order.
//! `{{` and `}}` produce literal braces. A placeholder whose index has no
//! matching argument is kept verbatim.

use std::fmt::{self, Write};

/// Substitute `{N}` placeholders in `template` with `args[N]`.
///
/// # Examples
///
/// ```
/// use trk_types::format_placeholders;
///
/// let text = format_placeholders("You now have {1} {0}.", &[&"arrows", &30]);
/// assert_eq!(text, "You now have 30 arrows.");
/// ```
pub fn format_placeholders(template: &str, args: &[&dyn fmt::Display]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut chars = template.chars().peekable();

    while let Some(ch) = chars.next() {
        match ch {
            '{' if chars.peek() == Some(&'{') => {
                chars.next();
                out.push('{');
            }
            '}' if chars.peek() == Some(&'}') => {
                chars.next();
                out.push('}');
            }
            '{' => {
                let mut digits = String::new();
                while let Some(d) = chars.peek().copied().filter(char::is_ascii_digit) {
                    digits.push(d);
                    chars.next();
                }

                let closed = chars.peek() == Some(&'}');
                let arg = digits
                    .parse::<usize>()
                    .ok()
                    .filter(|_| closed)
                    .and_then(|index| args.get(index));

                match arg {
                    Some(arg) => {
                        chars.next();
                        // Writing into a String cannot fail.
                        let _ = write!(out, "{arg}");
                    }
                    None => {
                        out.push('{');
                        out.push_str(&digits);
                    }
                }
            }
            other => out.push(other),
        }
    }

    out
}
