use crate::ArgTable;
use crate::trace::{trace_flag, trace_remaining};

/// A single raw token after classification
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Token<'a> {
    /// A flag with its canonical name and value ("" when given bare)
    Flag { name: String, value: &'a str },
    /// Anything that is not a flag
    Remaining(&'a str),
    /// Empty token (from repeated separators)
    Empty,
}

/// Classify a raw token.
///
/// `--x` is folded into `-x` by dropping exactly one dash. The lone `-` and
/// `--` are not flags.
pub(crate) fn classify(raw: &str) -> Token<'_> {
    if raw.is_empty() {
        return Token::Empty;
    }
    if !raw.starts_with('-') || raw == "-" || raw == "--" {
        return Token::Remaining(raw);
    }

    let body = if raw.starts_with("--") { &raw[1..] } else { raw };
    let (name, value) = match body.find('=') {
        Some(pos) => (&body[..pos], &body[pos + 1..]),
        None => (body, ""),
    };

    // "-=v" has no name to key on
    if name == "-" {
        return Token::Remaining(raw);
    }

    Token::Flag {
        name: name.to_string(),
        value,
    }
}

/// Build a table from tokens (program path already removed).
pub(crate) fn parse<I, S>(args: I) -> ArgTable
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut table = ArgTable::new();

    for arg in args {
        match classify(arg.as_ref()) {
            Token::Flag { name, value } => {
                let values = table.values.entry(name.clone()).or_default();
                values.push(value.to_string());
                trace_flag(&name, value, values.len());
            }
            Token::Remaining(token) => {
                trace_remaining(token);
                table.remaining.push(token.to_string());
            }
            Token::Empty => {}
        }
    }

    table
}

/// Canonical form of a lookup name: `x`, `-x` and `--x` all become `-x`.
pub(crate) fn canonical_name(name: &str) -> String {
    if let Some(rest) = name.strip_prefix("--") {
        format!("-{}", rest)
    } else if name.starts_with('-') {
        name.to_string()
    } else {
        format!("-{}", name)
    }
}

/// `-x` becomes `-nox`.
pub(crate) fn negated_name(canonical: &str) -> String {
    format!("-no{}", canonical.strip_prefix('-').unwrap_or(canonical))
}

/// Soft boolean reading of a value: only `"0"` is false.
pub(crate) fn interpret_bool(value: &str) -> bool {
    value != "0"
}

/// Lenient base-10 integer reading.
///
/// Skips leading ASCII whitespace, accepts one sign, then reads the longest run
/// of digits. No digits yields 0. Overflow saturates.
pub(crate) fn atoi(value: &str) -> i64 {
    let s = value.trim_start_matches(|c: char| c.is_ascii_whitespace());
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let mut n: i64 = 0;
    for b in digits.bytes().take_while(u8::is_ascii_digit) {
        let d = i64::from(b - b'0');
        n = if negative {
            n.saturating_mul(10).saturating_sub(d)
        } else {
            n.saturating_mul(10).saturating_add(d)
        };
    }
    n
}

/// Strict base-10 integer reading: the whole value must be a number.
pub(crate) fn parse_strict_int(value: &str) -> Option<i64> {
    value.parse::<i64>().ok()
}
