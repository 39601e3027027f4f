//! # Text Processing Utilities
//!
//! Formatting helpers shared by the terminal views and the plain-text print
//! commands: value joining, numeric rendering, width-aware truncation and a
//! simple two-column table layout.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Separator placed between the values of a multi-valued cell.
pub const VALUE_SEPARATOR: &str = ", ";

/// Join a sequence of values into a single cell.
///
/// An empty sequence renders as an empty string.
///
/// # Example
/// ```rust
/// use extdash_util::join_values;
///
/// assert_eq!(join_values(&["a".to_string(), "b".to_string()]), "a, b");
/// assert_eq!(join_values(&[]), "");
/// ```
pub fn join_values(values: &[String]) -> String {
    values.join(VALUE_SEPARATOR)
}

/// Render a JSON number in its natural decimal form (`0`, `42`, `12.5`).
pub fn format_number(value: f64) -> String {
    if value == 0.0 {
        // avoid "-0"
        return "0".to_string();
    }
    format!("{value}")
}

/// Truncate `text` to at most `max_width` terminal columns, marking the cut
/// with an ellipsis.
pub fn truncate_to_width(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }
    if max_width == 0 {
        return String::new();
    }
    let mut out = String::new();
    let mut used = 0;
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w + 1 > max_width {
            break;
        }
        out.push(ch);
        used += w;
    }
    out.push('…');
    out
}

fn pad_to_width(text: &str, width: usize) -> String {
    let padding = width.saturating_sub(text.width());
    format!("{text}{}", " ".repeat(padding))
}

/// Lay out a two-column table as plain text.
///
/// Columns are aligned on display width so wide characters line up.
pub fn format_key_value_table(headers: [&str; 2], rows: &[(String, String)]) -> String {
    let first_width = rows
        .iter()
        .map(|(name, _)| name.width())
        .chain(std::iter::once(headers[0].width()))
        .max()
        .unwrap_or_default();
    let second_width = rows
        .iter()
        .map(|(_, value)| value.width())
        .chain(std::iter::once(headers[1].width()))
        .max()
        .unwrap_or_default();

    let mut lines = Vec::with_capacity(rows.len() + 2);
    lines.push(format!("{}  {}", pad_to_width(headers[0], first_width), headers[1]));
    lines.push(format!("{}  {}", "-".repeat(first_width), "-".repeat(second_width)));
    for (name, value) in rows {
        lines.push(format!("{}  {}", pad_to_width(name, first_width), value).trim_end().to_string());
    }
    lines.join("\n")
}
