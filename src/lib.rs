//! value-slider - a draggable value slider for iced
//!
//! The slider maps a host-owned value onto a horizontal track, lets the user
//! drag the thumb to change it and shows the formatted value above the thumb.
//!
//! ```no_run
//! use value_slider::{ValueLabel, color, value_slider};
//!
//! #[derive(Debug, Clone)]
//! enum Message {
//!     Changed(f64),
//!     DragEnded,
//! }
//!
//! fn view(value: f64) -> iced::Element<'static, Message> {
//!     value_slider(value, Message::Changed)
//!         .range(-5.0..=5.0)
//!         .values(ValueLabel::default().format("%.1f"))
//!         .track_color(color::from_hex("#ff2d55", None), color::GRAY_30)
//!         .on_end(Message::DragEnded)
//!         .into()
//! }
//! ```

pub mod color;
pub mod error;
pub mod format;
pub mod slider;

pub use error::{FormatError, SliderError};
pub use format::LabelFormat;
pub use slider::{Style, ValueLabel, ValueSlider, value_slider};
