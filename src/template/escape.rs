//! Escaping of template metacharacters.
//!
//! [`escape`] rewrites arbitrary text so it parses back as pure literal
//! particles: for any string `s`, evaluating `parse(escape(s))` yields the
//! UTF-8 encoding of `s`.

/// Escape `$` and `\` so the result round-trips through the parser.
pub fn escape(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '$' => out.push_str("\\$"),
            _ => out.push(c),
        }
    }
    out
}
