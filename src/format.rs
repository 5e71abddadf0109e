//! Formatting helpers shared by every renderer
//!
//! Widths are terminal display columns, so CJK and other wide characters
//! count double.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::dataset::Scalar;

/// Ellipsis used when a cell overflows its column
pub const ELLIPSIS: char = '…';

/// Display width of a string in terminal columns
pub fn display_width(s: &str) -> usize {
    UnicodeWidthStr::width(s)
}

/// Keep the longest prefix that fits in `max_width` columns
pub fn truncate(s: &str, max_width: usize) -> String {
    let mut used = 0;
    let mut end_byte = 0;
    for (i, ch) in s.char_indices() {
        let cw = UnicodeWidthChar::width(ch).unwrap_or(0);
        if used + cw > max_width {
            break;
        }
        used += cw;
        end_byte = i + ch.len_utf8();
    }
    s[..end_byte].to_string()
}

/// Truncate to `width` columns, marking the cut with an ellipsis
pub fn truncate_ellipsis(s: &str, width: usize) -> String {
    if display_width(s) <= width {
        return s.to_string();
    }
    if width == 0 {
        return String::new();
    }
    let mut out = truncate(s, width - 1);
    out.push(ELLIPSIS);
    out
}

/// Left-justify in `width` columns, truncating overlong input
pub fn pad_right(s: &str, width: usize) -> String {
    let text = truncate(s, width);
    let gap = width - display_width(&text);
    format!("{}{}", text, " ".repeat(gap))
}

/// Right-justify in `width` columns, truncating overlong input
pub fn pad_left(s: &str, width: usize) -> String {
    let text = truncate(s, width);
    let gap = width - display_width(&text);
    format!("{}{}", " ".repeat(gap), text)
}

/// Center in `width` columns, truncating overlong input; odd padding
/// goes to the right
pub fn center(s: &str, width: usize) -> String {
    let text = truncate(s, width);
    let gap = width - display_width(&text);
    format!("{}{}{}", " ".repeat(gap / 2), text, " ".repeat(gap - gap / 2))
}

/// Group digits in thousands: `1234567` -> `"1,234,567"`
pub fn group_thousands(n: usize) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Byte count as kilobytes with one decimal: `2048` -> `"2.0 KB"`
pub fn format_kilobytes(bytes: usize) -> String {
    format!("{:.1} KB", bytes as f64 / 1024.0)
}

/// Percentage right-aligned to five characters with one decimal
pub fn format_percentage(pct: f64) -> String {
    format!("{:5.1}%", pct)
}

/// True when `v` has no fractional part and fits an `i64`
pub fn is_integral(v: f64) -> bool {
    v.is_finite() && v.fract() == 0.0 && v.abs() < 9.0e15
}

/// Integral values print as integers, everything else as given
pub fn format_value(v: f64) -> String {
    if is_integral(v) {
        format!("{}", v as i64)
    } else {
        format!("{}", v)
    }
}

/// Fixed number of decimals
pub fn format_fixed(v: f64, decimals: usize) -> String {
    format!("{:.prec$}", v, prec = decimals)
}

/// Text for a preview cell: floats with two decimals, integers as-is,
/// long text cut to `max_chars` columns; `None` for null
pub fn format_scalar(value: &Scalar, max_chars: usize) -> Option<String> {
    match value {
        Scalar::Null => None,
        Scalar::Float(v) => Some(format_fixed(*v, 2)),
        Scalar::Int(v) => Some(v.to_string()),
        Scalar::Text(s) => Some(truncate(s, max_chars)),
        Scalar::Timestamp(_) => Some(truncate(&value.to_string(), max_chars)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(3), "3");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(1000), "1,000");
        assert_eq!(group_thousands(1234567), "1,234,567");
    }

    #[test]
    fn test_truncation() {
        assert_eq!(truncate("abcdef", 3), "abc");
        assert_eq!(truncate_ellipsis("abcdef", 4), "abc…");
        assert_eq!(truncate_ellipsis("abc", 4), "abc");
    }

    #[test]
    fn test_wide_characters_use_display_columns() {
        assert_eq!(display_width("東京都庁"), 8);
        assert_eq!(display_width("abc…"), 4);
        assert_eq!(truncate("東京都庁", 5), "東京");
        assert_eq!(truncate_ellipsis("東京都庁", 5), "東京…");
        // a wide char that does not fit is dropped rather than split
        assert_eq!(truncate_ellipsis("東京都庁", 4), "東…");
        assert_eq!(pad_right("東京", 6), "東京  ");
        assert_eq!(pad_left("東京", 6), "  東京");
        assert_eq!(center("東", 5), " 東  ");
        assert_eq!(pad_right("東京都庁", 5), "東京 ");
    }

    #[test]
    fn test_padding() {
        assert_eq!(pad_right("ab", 4), "ab  ");
        assert_eq!(pad_left("ab", 4), "  ab");
        assert_eq!(center("ab", 6), "  ab  ");
        assert_eq!(pad_right("abcdef", 3), "abc");
    }

    #[test]
    fn test_numbers() {
        assert_eq!(format_kilobytes(2048), "2.0 KB");
        assert_eq!(format_percentage(100.0), "100.0%");
        assert_eq!(format_percentage(7.5), "  7.5%");
        assert_eq!(format_value(190.0), "190");
        assert_eq!(format_value(2.5), "2.5");
        assert_eq!(format_fixed(113.333333, 2), "113.33");
    }

    #[test]
    fn test_format_scalar() {
        assert_eq!(format_scalar(&Scalar::Null, 50), None);
        assert_eq!(format_scalar(&Scalar::Float(1.0), 50).unwrap(), "1.00");
        assert_eq!(format_scalar(&Scalar::Int(7), 50).unwrap(), "7");
        assert_eq!(format_scalar(&Scalar::from("abcdef"), 3).unwrap(), "abc");
    }
}
