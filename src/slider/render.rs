//! Geometry of one rendered slider frame
//!
//! Everything here is pure: the widget feeds in its bounds, the mapped thumb
//! position and the viewport, and draws the resulting [`Scene`] with quads.

use iced::border::Radius;
use iced::{Color, Point, Rectangle, Size};

use super::style::Style;

/// Corner radius of the disabled thumb, as a fraction of the thumb size
const DISABLED_THUMB_ROUNDING: f32 = 0.25;

/// A filled track segment
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub bounds: Rectangle,
    pub radius: Radius,
    pub color: Color,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThumbShape {
    Circle,
    RoundedSquare,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Thumb {
    pub bounds: Rectangle,
    /// Invisible, enlarged region that accepts drag gestures
    pub hit_bounds: Rectangle,
    pub shape: ThumbShape,
    pub radius: f32,
    pub color: Color,
}

/// Everything drawn for one frame, in paint order
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Scene {
    pub max_track: Segment,
    pub min_track: Segment,
    pub thumb: Thumb,
    /// Point the value label is centered on
    pub label_center: Point,
}

/// Inputs that do not come from the style
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frame {
    pub bounds: Rectangle,
    pub track_width: f32,
    /// Thumb offset from the track origin
    pub thumb_pixel: f32,
    pub viewport_height: f32,
    pub disabled: bool,
    /// Height above the track row reserved for the label, see [`label_band`]
    pub label_band: f32,
}

/// Height of the row holding the track and thumb
fn content_height(style: &Style) -> f32 {
    (style.thumb_size + style.thumb_padding).max(style.bar_height())
}

/// Space needed above the track row so a label of `label_height` fits
///
/// The label is centered half the label offset above the track center, so
/// only the part of it that sticks out of the row is reserved. A hidden
/// label reserves nothing.
pub fn label_band(style: &Style, label_height: Option<f32>) -> f32 {
    match label_height {
        Some(height) => {
            (style.label_offset() / 2.0 + height / 2.0 - content_height(style) / 2.0).max(0.0)
        }
        None => 0.0,
    }
}

/// Size of the widget for a given track width
///
/// The track is inset by half a thumb on each side so the thumb never leaves
/// the frame at either end.
pub fn frame_size(style: &Style, track_width: f32, label_band: f32) -> Size {
    Size::new(track_width + style.thumb_size, content_height(style) + label_band)
}

/// Radius for the rounded ends of a segment
pub fn corner_radius(viewport_height: f32, width: f32, height: f32) -> f32 {
    (viewport_height * 0.5).min(height / 2.0).min(width / 2.0).max(0.0)
}

/// Build the scene for one frame
pub fn scene(style: &Style, frame: Frame) -> Scene {
    let Frame {
        bounds,
        track_width,
        thumb_pixel,
        viewport_height,
        disabled,
        label_band,
    } = frame;

    let center_y = bounds.y + label_band + content_height(style) / 2.0;
    let bar_height = style.bar_height();
    let track_x = bounds.x + style.thumb_size / 2.0;
    let thumb_pixel = thumb_pixel.clamp(0.0, track_width.max(0.0));
    let (min_color, max_color) = style.track_colors(disabled);

    let max_width = track_width - thumb_pixel;
    let far = corner_radius(viewport_height, max_width, bar_height);
    let max_track = Segment {
        bounds: Rectangle {
            x: track_x + thumb_pixel,
            y: center_y - bar_height / 2.0,
            width: max_width,
            height: bar_height,
        },
        radius: Radius {
            top_left: 0.0,
            top_right: far,
            bottom_right: far,
            bottom_left: 0.0,
        },
        color: max_color,
    };

    let origin = corner_radius(viewport_height, thumb_pixel, bar_height);
    let min_track = Segment {
        bounds: Rectangle {
            x: track_x,
            y: center_y - bar_height / 2.0,
            width: thumb_pixel,
            height: bar_height,
        },
        radius: Radius {
            top_left: origin,
            top_right: 0.0,
            bottom_right: 0.0,
            bottom_left: origin,
        },
        color: min_color,
    };

    let thumb_center = Point::new(track_x + thumb_pixel, center_y);
    let size = style.thumb_size;
    let hit = style.thumb_size + style.thumb_padding;
    let (shape, radius, color) = if disabled {
        (
            ThumbShape::RoundedSquare,
            size * DISABLED_THUMB_ROUNDING,
            style.disabled_thumb_color,
        )
    } else {
        (ThumbShape::Circle, size / 2.0, style.thumb_color)
    };

    let thumb = Thumb {
        bounds: centered(thumb_center, Size::new(size, size)),
        hit_bounds: centered(thumb_center, Size::new(hit, hit)),
        shape,
        radius,
        color,
    };

    Scene {
        max_track,
        min_track,
        thumb,
        label_center: Point::new(thumb_center.x, center_y - style.label_offset() / 2.0),
    }
}

/// Final bounds of a measured label, centered over the thumb
pub fn place_label(scene: &Scene, measured: Size) -> Rectangle {
    centered(scene.label_center, measured)
}

fn centered(center: Point, size: Size) -> Rectangle {
    Rectangle {
        x: center.x - size.width / 2.0,
        y: center.y - size.height / 2.0,
        width: size.width,
        height: size.height,
    }
}
