use common::model::table::Table;
use rayon::prelude::*;

/// Whitespace as trimmed around the file and each cell. Includes the byte-order mark
/// so BOM-prefixed exports yield a clean first header.
fn is_blank(c: char) -> bool {
    c.is_whitespace() || c == '\u{feff}'
}

fn trim_cell(cell: &str) -> &str {
    cell.trim_matches(is_blank)
}

/// Decodes header-first comma-separated text into a [`Table`].
///
/// Never fails: short lines are padded with empty values, surplus values are dropped
/// and blank lines become all-empty rows.
pub fn decode(text: &str) -> Table {
    let mut lines = trim_cell(text).split('\n');
    let headers: Vec<String> = lines
        .next()
        .unwrap_or("")
        .split(',')
        .map(|h| trim_cell(h).to_string())
        .collect();
    let width = headers.len();

    let body: Vec<&str> = lines.collect();
    let rows: Vec<Vec<String>> = body
        .par_iter()
        .map(|line| {
            line.split(',')
                .take(width)
                .map(|cell| trim_cell(cell).to_string())
                .collect::<Vec<String>>()
        })
        .collect();

    Table::new(headers, rows)
}

/// Lenient integer coercion for numeric cells.
///
/// Reads an optional sign and the leading run of ASCII digits, ignoring whatever
/// follows (`"12.5"` is 12). Anything without leading digits, or out of `i64`
/// range, is 0.
pub fn parse_int(value: &str) -> i64 {
    let value = trim_cell(value);
    let (negative, rest) = match value.as_bytes().first() {
        Some(b'-') => (true, &value[1..]),
        Some(b'+') => (false, &value[1..]),
        _ => (false, value),
    };
    let end = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());
    let digits = &rest[..end];
    if digits.is_empty() {
        return 0;
    }

    digits
        .bytes()
        .try_fold(0i64, |acc, b| {
            let digit = i64::from(b - b'0');
            let acc = acc.checked_mul(10)?;
            if negative {
                acc.checked_sub(digit)
            } else {
                acc.checked_add(digit)
            }
        })
        .unwrap_or(0)
}
