//! Visual configuration of the value slider

use iced::{Color, Font, Pixels};

use crate::color;
use crate::format::LabelFormat;

pub const DEFAULT_THUMB_SIZE: f32 = 20.0;
pub const DEFAULT_THUMB_PADDING: f32 = 5.0;
pub const DEFAULT_BAR_HEIGHT: f32 = 10.0;
pub const DEFAULT_FONT_SIZE: f32 = 11.0;
/// Gap between the thumb and the floating label
pub const LABEL_GAP: f32 = 6.0;

/// Settings for the floating value label
#[derive(Debug, Clone, PartialEq)]
pub struct ValueLabel {
    pub format: LabelFormat,
    pub font: Font,
    pub size: Pixels,
    pub color: Color,
    pub hidden: bool,
}

impl Default for ValueLabel {
    fn default() -> Self {
        Self {
            format: LabelFormat::default(),
            font: Font::default(),
            size: Pixels(DEFAULT_FONT_SIZE),
            color: Color::BLACK,
            hidden: false,
        }
    }
}

impl ValueLabel {
    /// Set the printf-style format, keeping the current one if it is invalid
    pub fn format(mut self, format: &str) -> Self {
        match LabelFormat::parse(format) {
            Ok(parsed) => self.format = parsed,
            Err(e) => {
                tracing::warn!("Invalid value label format {:?}: {}", format, e);
            }
        }
        self
    }

    pub fn font(mut self, font: Font) -> Self {
        self.font = font;
        self
    }

    pub fn size(mut self, size: impl Into<Pixels>) -> Self {
        self.size = size.into();
        self
    }

    pub fn color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    pub fn hidden(mut self, hidden: bool) -> Self {
        self.hidden = hidden;
        self
    }
}

/// Immutable style snapshot used for one layout/draw pass
#[derive(Debug, Clone, PartialEq)]
pub struct Style {
    pub min_track_color: Color,
    pub max_track_color: Color,
    pub disabled_track_color: Color,
    pub thumb_color: Color,
    pub disabled_thumb_color: Color,
    pub thumb_size: f32,
    pub thumb_padding: f32,
    /// Requested bar height, see [`Style::bar_height`]
    pub bar_height: f32,
    pub width: Option<f32>,
    pub label: ValueLabel,
    pub disabled_label_color: Color,
}

impl Default for Style {
    fn default() -> Self {
        Self {
            min_track_color: color::GRAY_80,
            max_track_color: color::GRAY_40,
            disabled_track_color: color::GRAY_60,
            thumb_color: color::THUMB_YELLOW,
            disabled_thumb_color: color::SYSTEM_GRAY,
            thumb_size: DEFAULT_THUMB_SIZE,
            thumb_padding: DEFAULT_THUMB_PADDING,
            bar_height: DEFAULT_BAR_HEIGHT,
            width: None,
            label: ValueLabel::default(),
            disabled_label_color: color::GRAY_60,
        }
    }
}

impl Style {
    /// Effective bar height, shrunk to the thumb size
    pub fn bar_height(&self) -> f32 {
        super::mapper::bar_height(self.bar_height, self.thumb_size)
    }

    /// Vertical distance reserved above the track for the label
    pub fn label_offset(&self) -> f32 {
        self.thumb_size * 2.0 + LABEL_GAP
    }

    /// Track colors as `(min side, max side)`
    pub fn track_colors(&self, disabled: bool) -> (Color, Color) {
        if disabled {
            (self.disabled_track_color, self.disabled_track_color)
        } else {
            (self.min_track_color, self.max_track_color)
        }
    }

    pub fn label_color(&self, disabled: bool) -> Color {
        if disabled {
            self.disabled_label_color
        } else {
            self.label.color
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let style = Style::default();
        assert_eq!(style.thumb_size, 20.0);
        assert_eq!(style.bar_height(), 10.0);
        assert_eq!(style.label.format.as_str(), "%.f");
        assert_eq!(style.label.size, Pixels(11.0));
        assert_eq!(style.label.color, Color::BLACK);
        assert!(!style.label.hidden);
        assert_eq!(style.label_offset(), 46.0);
    }

    #[test]
    fn test_disabled_colors() {
        let style = Style::default();
        assert_eq!(style.track_colors(true), (color::GRAY_60, color::GRAY_60));
        assert_eq!(style.track_colors(false), (color::GRAY_80, color::GRAY_40));
        assert_eq!(style.label_color(true), color::GRAY_60);
    }

    #[test]
    fn test_invalid_label_format_keeps_previous() {
        let label = ValueLabel::default().format("%.2f").format("%s");
        assert_eq!(label.format.as_str(), "%.2f");
    }
}
