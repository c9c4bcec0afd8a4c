// src/format.rs

//! Permissive printf-style interpolation used by [`ErrorKind`] patterns.
//!
//! Directives look like `%[flags][width][.precision]verb`:
//!
//! - `%v`, `%s`, `%d`: the value's `Display` form.
//! - `%q`: the `Display` form, quoted and escaped.
//! - `%%`: a literal percent sign.
//!
//! Formatting never fails. Problems are rendered inline instead:
//!
//! | situation            | output              |
//! |----------------------|---------------------|
//! | not enough values    | `%!s(MISSING)`      |
//! | unsupported verb     | `%!x(value)`        |
//! | trailing lone `%`    | `%!(NOVERB)`        |
//! | too many values      | `%!(EXTRA a, b)`    |
//!
//! [`ErrorKind`]: crate::ErrorKind

use std::fmt::{self, Write};

use tracing::debug;

/// Upper bound for width and precision.
const MAX_WIDTH: usize = 1_000_000;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct Directive {
    left_align: bool,
    zero_pad: bool,
    width: Option<usize>,
    precision: Option<usize>,
    verb: char,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Token<'a> {
    Literal(&'a str),
    Percent,
    NoVerb,
    Directive(Directive),
}

/// Interpolate `values` into `pattern`, positionally.
pub fn format_pattern(pattern: &str, values: &[&dyn fmt::Display]) -> String {
    let mut out = String::with_capacity(pattern.len());
    let mut next = 0;
    let mut degraded = false;

    for token in tokenize(pattern) {
        match token {
            Token::Literal(text) => out.push_str(text),
            Token::Percent => out.push('%'),
            Token::NoVerb => {
                out.push_str("%!(NOVERB)");
                degraded = true;
            }
            Token::Directive(directive) => match values.get(next) {
                None => {
                    let _ = write!(out, "%!{}(MISSING)", directive.verb);
                    degraded = true;
                }
                Some(value) => {
                    next += 1;
                    match render_verb(&directive, *value) {
                        Some(text) => pad_into(&mut out, &directive, &text),
                        None => {
                            let _ = write!(out, "%!{}({})", directive.verb, display(*value));
                            degraded = true;
                        }
                    }
                }
            },
        }
    }

    if next < values.len() {
        out.push_str("%!(EXTRA ");
        for (i, value) in values[next..].iter().enumerate() {
            if i > 0 {
                out.push_str(", ");
            }
            out.push_str(&display(*value));
        }
        out.push(')');
        degraded = true;
    }

    if degraded {
        debug!(pattern, values = values.len(), "pattern interpolation degraded");
    }

    out
}

/// Check that every directive in `pattern` is well formed.
///
/// Returns a human-readable reason for the first malformed directive.
pub fn check_pattern(pattern: &str) -> std::result::Result<(), String> {
    for token in tokenize(pattern) {
        match token {
            Token::NoVerb => return Err("pattern ends with a lone '%'".to_string()),
            Token::Directive(directive) if !is_supported(directive.verb) => {
                return Err(format!("unsupported verb '%{}'", directive.verb));
            }
            _ => {}
        }
    }
    Ok(())
}

/// Number of value slots in `pattern` (`%%` does not count).
pub fn placeholder_count(pattern: &str) -> usize {
    tokenize(pattern)
        .into_iter()
        .filter(|t| matches!(t, Token::Directive(_)))
        .count()
}

fn is_supported(verb: char) -> bool {
    matches!(verb, 'v' | 's' | 'd' | 'q')
}

fn tokenize(pattern: &str) -> Vec<Token<'_>> {
    let mut tokens = Vec::new();
    let mut rest = pattern;

    while let Some(pos) = rest.find('%') {
        if pos > 0 {
            tokens.push(Token::Literal(&rest[..pos]));
        }
        let after = &rest[pos + 1..];
        let (token, consumed) = parse_directive(after);
        tokens.push(token);
        rest = &after[consumed..];
    }

    if !rest.is_empty() {
        tokens.push(Token::Literal(rest));
    }

    tokens
}

/// Parse the directive following a `%`. Returns the token and the number of
/// bytes consumed after the `%`.
fn parse_directive(s: &str) -> (Token<'static>, usize) {
    let mut directive = Directive::default();
    let mut chars = s.char_indices().peekable();

    while let Some(&(_, c)) = chars.peek() {
        match c {
            '-' => directive.left_align = true,
            '0' => directive.zero_pad = true,
            '+' | '#' | ' ' => {}
            _ => break,
        }
        chars.next();
    }

    directive.width = take_number(&mut chars);

    if let Some(&(_, '.')) = chars.peek() {
        chars.next();
        directive.precision = Some(take_number(&mut chars).unwrap_or(0));
    }

    match chars.next() {
        Some((i, '%')) => (Token::Percent, i + 1),
        Some((i, verb)) => {
            directive.verb = verb;
            (Token::Directive(directive), i + verb.len_utf8())
        }
        None => (Token::NoVerb, s.len()),
    }
}

fn take_number(chars: &mut std::iter::Peekable<std::str::CharIndices<'_>>) -> Option<usize> {
    let mut value: Option<usize> = None;
    while let Some(&(_, c)) = chars.peek() {
        let Some(digit) = c.to_digit(10) else {
            break;
        };
        let acc = value.unwrap_or(0);
        value = Some(acc.saturating_mul(10).saturating_add(digit as usize).min(MAX_WIDTH));
        chars.next();
    }
    value
}

fn render_verb(directive: &Directive, value: &dyn fmt::Display) -> Option<String> {
    let text = match directive.verb {
        'v' | 's' => truncate(display(value), directive.precision),
        'd' => display(value),
        'q' => format!("{:?}", truncate(display(value), directive.precision)),
        _ => return None,
    };
    Some(text)
}

// A `Display` impl that reports an error yields whatever it wrote so far.
pub(crate) fn display(value: &dyn fmt::Display) -> String {
    let mut s = String::new();
    let _ = write!(s, "{value}");
    s
}

fn truncate(text: String, precision: Option<usize>) -> String {
    match precision {
        Some(max) if text.chars().count() > max => text.chars().take(max).collect(),
        _ => text,
    }
}

fn pad_into(out: &mut String, directive: &Directive, text: &str) {
    let len = text.chars().count();
    let fill = directive.width.map_or(0, |w| w.saturating_sub(len));

    if directive.left_align {
        out.push_str(text);
        out.extend(std::iter::repeat_n(' ', fill));
    } else {
        let pad = if directive.zero_pad { '0' } else { ' ' };
        out.extend(std::iter::repeat_n(pad, fill));
        out.push_str(text);
    }
}
