//! Cell coercion
//!
//! Source cells are raw strings. Coercion never panics and never
//! produces NaN: a cell either parses to a finite number or it is
//! `None`, and callers decide whether that means "default to zero" or
//! "exclude from the mean".

/// Coerce a raw cell to a finite number
///
/// Surrounding whitespace is ignored. Empty cells, non-numeric text,
/// and non-finite results all map to `None`.
pub fn parse_number(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Parse a percentage cell like `"44%"` or `"<1%"`
///
/// Grammar: optional leading minus, digits with an optional decimal
/// point, optional trailing `%`. Any other characters are stripped
/// before parsing, so `"44 %"` and `"≈44%"` both yield `44.0`. A cell
/// with no digits left after stripping yields `None`.
pub fn parse_percent(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }

    let mut cleaned = String::with_capacity(trimmed.len());
    for (i, ch) in trimmed.char_indices() {
        match ch {
            '0'..='9' | '.' => cleaned.push(ch),
            '-' if i == 0 => cleaned.push(ch),
            _ => {}
        }
    }

    cleaned.parse::<f64>().ok().filter(|v| v.is_finite())
}
