//! Line parsers for the SPMX text format
//!
//! These work on single, already trimmed lines and never allocate on the
//! success path.

/// Parse a header line of the form `<key><digits>`, e.g. `rows=12`
///
/// Whitespace between the `=` and the number is tolerated.
pub fn parse_header(line: &str, key: &str) -> Option<usize> {
    let value = line.strip_prefix(key)?.trim();
    parse_unsigned(value)
}

/// Parse an entry line of the form `(<row>, <col>, <value>)`
///
/// The parentheses and commas are mandatory. Whitespace is only allowed
/// right after a comma. Row and column are unsigned; the value may carry a
/// leading `-`.
pub fn parse_entry(line: &str) -> Option<(usize, usize, i64)> {
    let inner = line.strip_prefix('(')?.strip_suffix(')')?;

    let mut fields = inner.split(',');
    let row = fields.next()?;
    let col = fields.next()?.trim_start();
    let value = fields.next()?.trim_start();
    if fields.next().is_some() {
        return None;
    }

    Some((parse_unsigned(row)?, parse_unsigned(col)?, parse_signed(value)?))
}

/// Parse a non-empty run of ASCII digits into a `usize`
fn parse_unsigned(s: &str) -> Option<usize> {
    if !is_digits(s) {
        return None;
    }
    s.parse().ok()
}

/// Parse an optionally negative run of ASCII digits into an `i64`
fn parse_signed(s: &str) -> Option<i64> {
    let digits = s.strip_prefix('-').unwrap_or(s);
    if !is_digits(digits) {
        return None;
    }
    s.parse().ok()
}

fn is_digits(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}
