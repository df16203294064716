//! Hex color helpers for Discord role colors.

/// Neutral gray used when a role color is blank or unparseable.
pub const DEFAULT_ROLE_COLOR: u32 = 0x99AAB5;

/// Parses a `#RRGGBB` (or bare `RRGGBB`) hex string into an RGB integer.
///
/// # Returns
/// - `Some(u32)` - Parsed 24-bit color
/// - `None` - Input is not exactly six hex digits after the optional `#`
pub fn parse_hex_color(value: &str) -> Option<u32> {
    let hex = value.trim();
    let hex = hex.strip_prefix('#').unwrap_or(hex);

    if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }

    u32::from_str_radix(hex, 16).ok()
}

/// Formats an RGB integer as `#RRGGBB`.
pub fn format_hex_color(color: u32) -> String {
    format!("#{:06X}", color & 0xFFFFFF)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_with_and_without_hash() {
        assert_eq!(parse_hex_color("#ff0000"), Some(0xFF0000));
        assert_eq!(parse_hex_color("00FF00"), Some(0x00FF00));
        assert_eq!(parse_hex_color("  #0000ff "), Some(0x0000FF));
    }

    #[test]
    fn rejects_malformed_colors() {
        assert_eq!(parse_hex_color(""), None);
        assert_eq!(parse_hex_color("#fff"), None);
        assert_eq!(parse_hex_color("#gg0000"), None);
        assert_eq!(parse_hex_color("#ff00000"), None);
        assert_eq!(parse_hex_color("red"), None);
    }

    #[test]
    fn formats_uppercase_hex() {
        assert_eq!(format_hex_color(0x99AAB5), "#99AAB5");
        assert_eq!(format_hex_color(0x0000FF), "#0000FF");
    }
}
