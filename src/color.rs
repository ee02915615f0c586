//! Hex color parsing and the shared gray palette
//!
//! Colors are stored by hosts as hex strings (settings files, style presets).
//! Parsing never fails: anything that is not a recognised 2/4/6/8 digit form
//! falls back to opaque white, which existing call sites rely on.

use iced::Color;

/// `0x45 / 255`, the channel value of `#454545`
const GRAY_CHANNEL: f32 = 69.0 / 255.0;

pub const GRAY_80: Color = Color::from_rgba(GRAY_CHANNEL, GRAY_CHANNEL, GRAY_CHANNEL, 0.8);
pub const GRAY_60: Color = Color::from_rgba(GRAY_CHANNEL, GRAY_CHANNEL, GRAY_CHANNEL, 0.6);
pub const GRAY_40: Color = Color::from_rgba(GRAY_CHANNEL, GRAY_CHANNEL, GRAY_CHANNEL, 0.4);
pub const GRAY_30: Color = Color::from_rgba(GRAY_CHANNEL, GRAY_CHANNEL, GRAY_CHANNEL, 0.3);
pub const GRAY_20: Color = Color::from_rgba(GRAY_CHANNEL, GRAY_CHANNEL, GRAY_CHANNEL, 0.2);

/// System gray used for the static thumb of a disabled slider
pub const SYSTEM_GRAY: Color = Color::from_rgb(142.0 / 255.0, 142.0 / 255.0, 147.0 / 255.0);

/// Thumb color used when none is configured
pub const THUMB_YELLOW: Color = Color::from_rgb(1.0, 0.8, 0.0);

/// Parse a hex color string into a [`Color`]
///
/// Accepted forms (after trimming whitespace and one leading `#`):
/// - `GG` gray
/// - `GGAA` gray with alpha
/// - `RRGGBB`
/// - `RRGGBBAA`
///
/// An odd digit count duplicates the last digit (`"12345"` reads as
/// `"123455"`) and anything past 8 digits is dropped. `opacity`, when given,
/// replaces the alpha of every form.
///
/// # Arguments
/// * `hex` - The color string, e.g. `"#ff8800"`
/// * `opacity` - Optional alpha override in `[0, 1]`
pub fn from_hex(hex: &str, opacity: Option<f32>) -> Color {
    let mut digits: String = hex.trim().strip_prefix('#').unwrap_or(hex.trim()).to_string();

    if digits.chars().count() % 2 != 0 {
        if let Some(last) = digits.chars().last() {
            digits.push(last);
        }
    }

    if digits.chars().count() > 8 {
        digits = digits.chars().take(8).collect();
    }

    // `from_str_radix` alone would also accept a leading sign
    if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return Color::WHITE;
    }
    let Ok(packed) = u32::from_str_radix(&digits, 16) else {
        return Color::WHITE;
    };

    let channel = |shift: u32| ((packed >> shift) & 0xFF) as f32 / 255.0;

    match digits.len() {
        2 => {
            let gray = channel(0);
            Color::from_rgba(gray, gray, gray, opacity.unwrap_or(1.0))
        }
        4 => {
            let gray = channel(8);
            Color::from_rgba(gray, gray, gray, opacity.unwrap_or(channel(0)))
        }
        6 => Color::from_rgba(channel(16), channel(8), channel(0), opacity.unwrap_or(1.0)),
        8 => Color::from_rgba(
            channel(24),
            channel(16),
            channel(8),
            opacity.unwrap_or(channel(0)),
        ),
        _ => Color::WHITE,
    }
}

/// Format a color back into `#RRGGBBAA`
pub fn to_hex(color: Color) -> String {
    let [r, g, b, a] = color.into_rgba8();
    format!("#{r:02x}{g:02x}{b:02x}{a:02x}")
}
