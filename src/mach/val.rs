//! ## Numeric text
//!
//! G# numbers are plain decimals: digits with an optional decimal point.
//! There is no exponent form.

/// Length of the decimal number at the start of `s`, zero if there is none.
pub fn scan_number(s: &str) -> usize {
    let mut decimal = false;
    let mut len = 0;
    for b in s.bytes() {
        match b {
            b'0'..=b'9' => {}
            b'.' if !decimal => decimal = true,
            _ => break,
        }
        len += 1;
    }
    if len == 1 && decimal {
        0
    } else {
        len
    }
}

/// Formats a value with at most `precision` decimals, dropping
/// insignificant trailing zeros and a trailing point.
/// Negative zero comes out as `0`.
pub fn format_value(value: f64, precision: usize) -> String {
    let mut s = format!("{:.*}", precision, value);
    if s.contains('.') {
        let trimmed = s.trim_end_matches('0').trim_end_matches('.').len();
        s.truncate(trimmed);
    }
    if s == "-0" {
        s.remove(0);
    }
    if s.is_empty() {
        s.push('0');
    }
    s
}
