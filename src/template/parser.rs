//! Recursive-descent parser for the template grammar.
//!
//! The grammar, operating character-by-character over a [`Cursor`]:
//!
//! ```text
//! templateExpression := particle*
//! particle           := escape | expression | text
//! text               := any run of chars not in {'$','\'}
//! escape             := '\' escapeBody
//! escapeBody         := '\' | '$' | 'n' | 'r' | '0' | byteEscape | codepointEscape
//! byteEscape         := 'x' HEXDIGIT HEXDIGIT
//! codepointEscape    := 'u' ( HEXDIGIT{4} | '{' HEXDIGIT{1,6} '}' )
//! expression         := '$' SP* '{' SP* reference SP* '}'
//! reference          := NAME ( '(' SP* args? SP* ')' )?
//! args               := arg (SP* ',' SP* arg)*
//! arg                := (lowercase alnum run)
//! NAME               := one or more ascii letters
//! SP                 := ' '
//! ```
//!
//! Every mismatch aborts the whole parse with an ordered expected-token set
//! and the unconsumed remainder; there is no recovery or backtracking across
//! alternatives. Inner productions know only the cursor state; [`parse`]
//! attaches the original source expression before propagating, so error
//! consumers can render a caret at the absolute position.

use crate::error::{Result, SlingError};
use crate::template::cursor::Cursor;
use crate::template::particle::{Particle, TemplateExpression};

/// Characters that terminate a literal text run.
const SPECIAL: &[char] = &['$', '\\'];

/// A grammar mismatch raised at parser depth, before the source expression
/// is known.
#[derive(Debug)]
struct Mismatch {
    expected: Vec<String>,
    remainder: String,
}

impl Mismatch {
    fn here<I, S>(cursor: &Cursor<'_>, expected: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            expected: expected.into_iter().map(Into::into).collect(),
            remainder: cursor.rest().to_string(),
        }
    }
}

/// Parse a template string into an ordered particle sequence.
///
/// Returns the full sequence on success; on the first mismatch, returns
/// [`SlingError::InvalidTemplateExpression`] carrying the source, the
/// remainder and the expected-token set, with no partial progress.
pub fn parse(source: &str) -> Result<TemplateExpression> {
    let mut cursor = Cursor::new(source);
    let mut particles = Vec::new();

    while !cursor.is_empty() {
        let particle = if cursor.starts_with("\\") {
            escape_particle(&mut cursor)
        } else if cursor.starts_with("$") {
            expression_particle(&mut cursor)
        } else {
            Ok(Particle::Text(cursor.read_until(SPECIAL).to_string()))
        };

        match particle {
            Ok(p) => particles.push(p),
            Err(m) => return Err(SlingError::invalid_template(source, m.remainder, m.expected)),
        }
    }

    Ok(TemplateExpression::new(particles))
}

/// `escape := '\' escapeBody`
///
/// One-character bodies each yield their own `Text` particle; they are not
/// merged with adjacent literal runs.
fn escape_particle(cursor: &mut Cursor<'_>) -> std::result::Result<Particle, Mismatch> {
    cursor.read("\\");

    if cursor.read("\\") {
        return Ok(Particle::Text("\\".into()));
    }
    if cursor.read("$") {
        return Ok(Particle::Text("$".into()));
    }
    if cursor.read("n") {
        return Ok(Particle::Text("\n".into()));
    }
    if cursor.read("r") {
        return Ok(Particle::Text("\r".into()));
    }
    if cursor.read("0") {
        return Ok(Particle::Text("\0".into()));
    }
    if cursor.read("x") {
        return byte_escape(cursor);
    }
    if cursor.read("u") {
        return codepoint_escape(cursor);
    }

    Err(Mismatch::here(
        cursor,
        [
            "\"\\\\\"", "\"$\"", "\"n\"", "\"r\"", "\"0\"", "\"x\"", "\"u\"",
        ],
    ))
}

/// `byteEscape := 'x' HEXDIGIT HEXDIGIT` — the leading `x` is already
/// consumed. Produces a raw byte, not UTF-8 validated.
fn byte_escape(cursor: &mut Cursor<'_>) -> std::result::Result<Particle, Mismatch> {
    let digits = cursor.read_while(|c| c.is_ascii_hexdigit(), Some(2));
    if digits.chars().count() < 2 {
        return Err(Mismatch::here(cursor, ["a hex digit"]));
    }
    let value = u8::from_str_radix(digits, 16)
        .map_err(|_| Mismatch::here(cursor, ["a hex digit"]))?;
    Ok(Particle::Byte(value))
}

/// `codepointEscape := 'u' ( HEXDIGIT{4} | '{' HEXDIGIT{1,6} '}' )` — the
/// leading `u` is already consumed.
fn codepoint_escape(cursor: &mut Cursor<'_>) -> std::result::Result<Particle, Mismatch> {
    if cursor.read("{") {
        let digits = cursor.read_while(|c| c.is_ascii_hexdigit(), Some(6));
        if digits.is_empty() {
            return Err(Mismatch::here(cursor, ["a hex digit"]));
        }
        if !cursor.read("}") {
            let mut expected = Vec::new();
            if digits.chars().count() < 6 {
                expected.push("a hex digit");
            }
            expected.push("\"}\"");
            return Err(Mismatch::here(cursor, expected));
        }
        return scalar_particle(digits, cursor);
    }

    let digits = cursor.read_while(|c| c.is_ascii_hexdigit(), Some(4));
    if digits.chars().count() < 4 {
        let mut expected = Vec::new();
        if digits.is_empty() {
            expected.push("\"{\"");
        }
        expected.push("a hex digit");
        return Err(Mismatch::here(cursor, expected));
    }
    scalar_particle(digits, cursor)
}

/// Convert 1–6 hex digits into a `Codepoint` particle, rejecting values
/// that are not Unicode scalars (surrogates, out-of-range).
fn scalar_particle(
    digits: &str,
    cursor: &Cursor<'_>,
) -> std::result::Result<Particle, Mismatch> {
    let value = u32::from_str_radix(digits, 16)
        .map_err(|_| Mismatch::here(cursor, ["a hex digit"]))?;
    match char::from_u32(value) {
        Some(c) => Ok(Particle::Codepoint(c)),
        None => Err(Mismatch::here(cursor, ["a Unicode scalar value"])),
    }
}

/// `expression := '$' SP* '{' SP* reference SP* '}'`
///
/// A bare `NAME` yields a `Variable` particle; `NAME(...)` yields a
/// `Function` particle.
fn expression_particle(cursor: &mut Cursor<'_>) -> std::result::Result<Particle, Mismatch> {
    cursor.read("$");
    skip_spaces(cursor);
    if !cursor.read("{") {
        return Err(Mismatch::here(cursor, ["\"{\""]));
    }
    skip_spaces(cursor);

    let name = cursor.read_while(|c| c.is_ascii_alphabetic(), None);
    if name.is_empty() {
        return Err(Mismatch::here(cursor, ["an instruction name"]));
    }
    skip_spaces(cursor);

    if cursor.read("(") {
        let args = argument_list(cursor)?;
        skip_spaces(cursor);
        if !cursor.read("}") {
            return Err(Mismatch::here(cursor, ["\"}\""]));
        }
        Ok(Particle::Function {
            name: name.to_string(),
            args,
        })
    } else if cursor.read("}") {
        Ok(Particle::Variable(name.to_string()))
    } else {
        Err(Mismatch::here(cursor, ["\"(\"", "\"}\""]))
    }
}

/// `args := arg (SP* ',' SP* arg)*`, with the closing `)` consumed.
/// The list may be empty.
fn argument_list(cursor: &mut Cursor<'_>) -> std::result::Result<Vec<String>, Mismatch> {
    let mut args = Vec::new();
    loop {
        skip_spaces(cursor);
        if cursor.read(")") {
            return Ok(args);
        }
        if !args.is_empty() {
            if !cursor.read(",") {
                return Err(Mismatch::here(cursor, ["\")\"", "\",\""]));
            }
            skip_spaces(cursor);
        }
        let arg = cursor.read_while(is_argument_char, None);
        if arg.is_empty() {
            return Err(Mismatch::here(cursor, ["an argument", "\")\""]));
        }
        args.push(arg.to_string());
    }
}

fn is_argument_char(c: char) -> bool {
    c.is_ascii_lowercase() || c.is_ascii_digit()
}

fn skip_spaces(cursor: &mut Cursor<'_>) {
    cursor.read_while(|c| c == ' ', None);
}
