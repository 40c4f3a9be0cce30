use ratatui::style::Color;

/// Render a countdown as mm:ss.
pub fn format_countdown(total_seconds: u32) -> String {
    let minutes = total_seconds / 60;
    let seconds = total_seconds % 60;
    format!("{minutes:02}:{seconds:02}")
}

/// Render a signed currency amount with thousands separators, e.g.
/// `-18,000,000`. Fractional parts are rounded away for display.
pub fn format_amount(value: f64) -> String {
    let rounded = value.round();
    let negative = rounded < 0.0;
    let digits = format!("{:.0}", rounded.abs());
    let mut grouped = String::new();
    for (index, ch) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    if negative {
        format!("-{grouped}")
    } else {
        grouped
    }
}

/// Render minutes with at most one decimal, dropping ".0".
pub fn format_minutes(minutes: f64) -> String {
    let text = format!("{minutes:.1}");
    text.strip_suffix(".0").map(str::to_string).unwrap_or(text)
}

pub fn clamp_name(value: &str, width: usize) -> String {
    let value_len = value.chars().count();
    if value_len <= width {
        return format!("{value:<width$}", width = width);
    }
    let trimmed = value
        .chars()
        .take(width.saturating_sub(2))
        .collect::<String>();
    format!("{trimmed}..")
}

pub fn hex_to_color(value: &str) -> Option<Color> {
    let hex = value.trim().strip_prefix('#').unwrap_or(value.trim());
    if hex.len() != 6 {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some(Color::Rgb(r, g, b))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn countdown_is_mm_ss() {
        assert_eq!(format_countdown(1200), "20:00");
        assert_eq!(format_countdown(61), "01:01");
        assert_eq!(format_countdown(0), "00:00");
    }

    #[test]
    fn amounts_group_thousands_and_keep_sign() {
        assert_eq!(format_amount(3_000_000.0), "3,000,000");
        assert_eq!(format_amount(-18_000_000.0), "-18,000,000");
        assert_eq!(format_amount(950.0), "950");
        assert_eq!(format_amount(0.0), "0");
    }

    #[test]
    fn minutes_drop_trailing_zero() {
        assert_eq!(format_minutes(20.0), "20");
        assert_eq!(format_minutes(10.5), "10.5");
    }

    #[test]
    fn hex_colors_parse_with_or_without_hash() {
        assert_eq!(hex_to_color("#00f2ea"), Some(Color::Rgb(0, 242, 234)));
        assert_eq!(hex_to_color("1877f2"), Some(Color::Rgb(24, 119, 242)));
        assert_eq!(hex_to_color("zzz"), None);
    }
}
