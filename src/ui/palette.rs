use ratatui::style::Color;

/// Sundial brand palette.
///
/// Values are hex RGB strings in the `#RRGGBB` format.
pub mod colors {
    /// Body and heading text
    pub const TEXT: &str = "#474B4F";
    /// Back button background
    pub const BACK: &str = "#A1A3A5";
    /// Next button gradient stops
    pub const NEXT_START: &str = "#1D0B77";
    pub const NEXT_END: &str = "#6A5FA2";
    /// Page background
    pub const PAGE: &str = "#F7F6FB";
    /// Placeholder frames for images
    pub const PLACEHOLDER: &str = "#C9C5DD";
    pub const BUTTON_TEXT: &str = "#FFFFFF";
    pub const WARNING: &str = "#C2410C";
}

fn parse_hex_rgb(hex: &str) -> Option<(u8, u8, u8)> {
    let hex = hex.trim_start_matches('#');
    if hex.len() != 6 {
        return None;
    }

    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;

    Some((r, g, b))
}

/// Convert a `#RRGGBB` color to a ratatui true color. Falls back to
/// `Color::Reset` on malformed input.
pub fn color(hex: &str) -> Color {
    match parse_hex_rgb(hex) {
        Some((r, g, b)) => Color::Rgb(r, g, b),
        None => Color::Reset,
    }
}

/// Linear blend between two palette colors, `t` in `0.0..=1.0`.
///
/// Stands in for the Next button's diagonal gradient: the button is drawn
/// with the midpoint, the focused button with the end stop.
pub fn blend(from: &str, to: &str, t: f32) -> Color {
    let (Some(a), Some(b)) = (parse_hex_rgb(from), parse_hex_rgb(to)) else {
        return Color::Reset;
    };
    let t = t.clamp(0.0, 1.0);
    let mix = |x: u8, y: u8| (x as f32 + (y as f32 - x as f32) * t).round() as u8;
    Color::Rgb(mix(a.0, b.0), mix(a.1, b.1), mix(a.2, b.2))
}
