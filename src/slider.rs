//! Value slider widget
//!
//! A horizontal slider with a two-colored track, a round thumb and a floating
//! value label centered above the thumb.
//!
//! # Binding
//!
//! The host owns the value. It passes the current value to
//! [`ValueSlider::new`] on every view and receives new values through the
//! `on_change` callback, which is the write half of the binding. `on_start`,
//! `on_dragging` and `on_end` are published around every drag.
//!
//! # Layout
//!
//! The track width is derived from the viewport: `viewport - thumb_size`,
//! or a smaller explicit width set with [`ValueSlider::slider_frame`]. The
//! label is laid out first to measure it, then moved so it is centered on the
//! thumb.

pub mod drag;
pub mod mapper;
pub mod render;
pub mod style;

use std::ops::RangeInclusive;

use iced::advanced::layout;
use iced::advanced::renderer::{self, Renderer as _};
use iced::advanced::widget::tree::{self, Tree};
use iced::advanced::{Clipboard, Layout, Shell, Widget};
use iced::border::Border;
use iced::mouse;
use iced::touch;
use iced::{Background, Color, Element, Event, Length, Point, Rectangle, Renderer, Size, Theme};

pub use drag::{DragController, DragStep, Phase, SliderState};
pub use mapper::Mapper;
pub use render::{Scene, ThumbShape};
pub use style::{Style, ValueLabel};

use crate::error::SliderError;

/// Viewport assumed when neither the host nor the layout limits bound it
pub const FALLBACK_VIEWPORT: Size = Size {
    width: 390.0,
    height: 844.0,
};

/// Default slider range
pub const DEFAULT_RANGE: RangeInclusive<f64> = 0.0..=10.0;

/// A draggable value slider
pub struct ValueSlider<'a, Message> {
    state: SliderState,
    /// Value as passed by the host, re-clamped whenever the range changes
    raw_value: f64,
    style: Style,
    viewport: Option<Size>,
    on_change: Box<dyn Fn(f64) -> Message + 'a>,
    on_start: Option<Message>,
    on_dragging: Option<Message>,
    on_end: Option<Message>,
    label: Option<Element<'a, Message>>,
}

impl<'a, Message> ValueSlider<'a, Message>
where
    Message: Clone,
{
    /// Creates a slider over the default `0.0..=10.0` range
    pub fn new<F>(value: f64, on_change: F) -> Self
    where
        F: 'a + Fn(f64) -> Message,
    {
        Self {
            state: SliderState::new(value, DEFAULT_RANGE),
            raw_value: value,
            style: Style::default(),
            viewport: None,
            on_change: Box::new(on_change),
            on_start: None,
            on_dragging: None,
            on_end: None,
            label: None,
        }
    }

    /// Value label settings (format, font, color, visibility)
    pub fn values(mut self, label: ValueLabel) -> Self {
        self.state.is_value_label_hidden = label.hidden;
        self.style.label = label;
        self
    }

    /// Colors of the track below (`min`) and above (`max`) the thumb
    pub fn track_color(mut self, min: Color, max: Color) -> Self {
        self.style.min_track_color = min;
        self.style.max_track_color = max;
        self
    }

    pub fn thumb(mut self, size: f32, color: Color) -> Self {
        self.style.thumb_size = size.max(0.0);
        self.style.thumb_color = color;
        self
    }

    /// Extra size of the invisible drag target around the thumb
    pub fn thumb_padding(mut self, padding: f32) -> Self {
        self.style.thumb_padding = padding.max(0.0);
        self
    }

    /// Sets the range; the current value is clamped into it
    pub fn range(mut self, range: RangeInclusive<f64>) -> Self {
        if let Err(e) = Mapper::new(&range, 1.0) {
            tracing::warn!("Value slider disabled: {}", e);
        }
        self.state.range = range;
        self.state.set_value(self.raw_value);
        self
    }

    pub fn on_start(mut self, message: Message) -> Self {
        self.on_start = Some(message);
        self
    }

    /// Message published on every drag movement
    pub fn on_dragging(mut self, message: Message) -> Self {
        self.on_dragging = Some(message);
        self
    }

    pub fn on_end(mut self, message: Message) -> Self {
        self.on_end = Some(message);
        self
    }

    /// A disabled slider ignores gestures and renders in gray
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.state.is_disabled = disabled;
        self
    }

    /// Explicit track width and bar height
    ///
    /// The width is still capped by the viewport; the bar height is capped by
    /// the thumb size.
    pub fn slider_frame(mut self, width: Option<f32>, height: Option<f32>) -> Self {
        if let Some(width) = width {
            self.style.width = Some(width);
        }
        if let Some(height) = height {
            self.style.bar_height = height;
        }
        self
    }

    /// Host viewport used for auto-fitting the width and rounding the track
    pub fn viewport(mut self, viewport: Size) -> Self {
        self.viewport = Some(viewport);
        self
    }

    /// Replace the whole style
    pub fn style(mut self, style: Style) -> Self {
        self.state.is_value_label_hidden = style.label.hidden;
        self.style = style;
        self
    }

    /// Check the configuration; a degenerate range leaves the slider inert
    pub fn validate(&self) -> Result<(), SliderError> {
        Mapper::new(&self.state.range, 1.0).map(|_| ())
    }

    pub fn value(&self) -> f64 {
        self.state.value
    }

    /// Track width for a given viewport
    pub fn track_width(&self, viewport: Size) -> f32 {
        mapper::effective_track_width(viewport.width, self.style.thumb_size, self.style.width)
    }

    fn resolve_viewport(&self, max: Size) -> Size {
        let viewport = self.viewport.unwrap_or(max);
        Size::new(
            if viewport.width.is_finite() {
                viewport.width
            } else {
                FALLBACK_VIEWPORT.width
            },
            if viewport.height.is_finite() {
                viewport.height
            } else {
                FALLBACK_VIEWPORT.height
            },
        )
    }

    fn mapper(&self, track_width: f32) -> Option<Mapper> {
        Mapper::new(&self.state.range, f64::from(track_width)).ok()
    }

    fn scene(&self, bounds: Rectangle, geometry: &State) -> Scene {
        let thumb_pixel = self
            .mapper(geometry.track_width)
            .map(|mapper| mapper.value_to_pixel(self.state.value) as f32)
            .unwrap_or(0.0);

        render::scene(
            &self.style,
            render::Frame {
                bounds,
                track_width: geometry.track_width,
                thumb_pixel,
                viewport_height: geometry.viewport_height,
                disabled: self.state.is_disabled,
                label_band: geometry.label_band,
            },
        )
    }

    /// Apply one drag movement to the widget's copy of the value
    fn step(&mut self, drag: &mut DragController, mapper: &Mapper, translation: f32) -> Option<DragStep> {
        drag.drag(&mut self.state, mapper, f64::from(translation))
    }

    fn handle_drag(
        &mut self,
        drag: &mut DragController,
        mapper: &Mapper,
        translation: f32,
        shell: &mut Shell<'_, Message>,
    ) {
        let previous = self.state.value;
        let Some(step) = self.step(drag, mapper, translation) else {
            return;
        };

        if step.started {
            tracing::debug!("Value slider drag started at {}", previous);
            if let Some(on_start) = self.on_start.clone() {
                shell.publish(on_start);
            }
        }

        if (step.value - previous).abs() > f64::EPSILON {
            shell.publish((self.on_change)(step.value));
        }

        if let Some(on_dragging) = self.on_dragging.clone() {
            shell.publish(on_dragging);
        }
    }

    /// Press, move and release handling for one event
    fn on_event(
        &mut self,
        state: &mut State,
        event: &Event,
        bounds: Rectangle,
        label_bounds: Option<Rectangle>,
        cursor: mouse::Cursor,
        shell: &mut Shell<'_, Message>,
    ) {
        if self.state.is_disabled {
            return;
        }
        let Some(mapper) = self.mapper(state.track_width) else {
            return;
        };

        let scene = self.scene(bounds, state);
        let is_target = |position: Point| {
            scene.thumb.hit_bounds.contains(position)
                || label_bounds.is_some_and(|bounds| bounds.contains(position))
        };

        match event {
            Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left))
            | Event::Touch(touch::Event::FingerPressed { .. }) => {
                if let Some(position) = cursor.position().filter(|p| is_target(*p)) {
                    state.press_x = position.x;
                    self.handle_drag(&mut state.drag, &mapper, 0.0, shell);
                    shell.capture_event();
                }
            }
            Event::Mouse(mouse::Event::CursorMoved { .. })
            | Event::Touch(touch::Event::FingerMoved { .. }) => {
                if state.drag.is_dragging() {
                    if let Some(position) = cursor.land().position() {
                        let translation = position.x - state.press_x;
                        self.handle_drag(&mut state.drag, &mapper, translation, shell);
                    }
                    shell.capture_event();
                }
            }
            Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Left))
            | Event::Touch(touch::Event::FingerLifted { .. })
            | Event::Touch(touch::Event::FingerLost { .. }) => {
                if state.drag.release() {
                    tracing::debug!("Value slider drag ended at {}", self.state.value);
                    if let Some(on_end) = self.on_end.clone() {
                        shell.publish(on_end);
                    }
                    shell.capture_event();
                }
            }
            _ => {}
        }
    }

    fn build_label(&self) -> Option<Element<'a, Message>>
    where
        Message: 'a,
    {
        if self.state.is_value_label_hidden {
            return None;
        }

        let label = &self.style.label;
        Some(
            iced::widget::text(label.format.format(self.state.value))
                .font(label.font)
                .size(label.size)
                .color(self.style.label_color(self.state.is_disabled))
                .into(),
        )
    }
}

/// Per-widget state kept in the tree between frames
#[derive(Debug, Clone, Copy, PartialEq, Default)]
struct State {
    drag: DragController,
    /// Pointer x at pointer-down; translations are measured from here
    press_x: f32,
    track_width: f32,
    viewport_height: f32,
    /// Height reserved above the track row for the label
    label_band: f32,
}

impl<Message> Widget<Message, Theme, Renderer> for ValueSlider<'_, Message>
where
    Message: Clone,
{
    fn tag(&self) -> tree::Tag {
        tree::Tag::of::<State>()
    }

    fn state(&self) -> tree::State {
        tree::State::new(State::default())
    }

    fn children(&self) -> Vec<Tree> {
        self.label.iter().map(Tree::new).collect()
    }

    fn diff(&self, tree: &mut Tree) {
        match &self.label {
            Some(label) => tree.diff_children(std::slice::from_ref(label)),
            None => tree.children.clear(),
        }
    }

    fn size(&self) -> Size<Length> {
        Size::new(Length::Shrink, Length::Shrink)
    }

    fn layout(
        &mut self,
        tree: &mut Tree,
        renderer: &Renderer,
        limits: &layout::Limits,
    ) -> layout::Node {
        let viewport = self.resolve_viewport(limits.max());
        let track_width = self.track_width(viewport);

        // Measure the label unconstrained first; its height sizes the band
        let measured = match (self.label.as_mut(), tree.children.first_mut()) {
            (Some(label), Some(label_tree)) => Some(label.as_widget_mut().layout(
                label_tree,
                renderer,
                &layout::Limits::new(Size::ZERO, Size::INFINITE),
            )),
            _ => None,
        };
        let label_band = render::label_band(&self.style, measured.as_ref().map(|node| node.size().height));
        let size = render::frame_size(&self.style, track_width, label_band);

        let geometry = {
            let state = tree.state.downcast_mut::<State>();
            state.track_width = track_width;
            state.viewport_height = viewport.height;
            state.label_band = label_band;
            *state
        };

        let Some(measured) = measured else {
            return layout::Node::new(size);
        };

        let scene = self.scene(Rectangle::new(Point::ORIGIN, size), &geometry);
        let placed = render::place_label(&scene, measured.size());

        layout::Node::with_children(size, vec![measured.move_to(placed.position())])
    }

    fn update(
        &mut self,
        tree: &mut Tree,
        event: &Event,
        layout: Layout<'_>,
        cursor: mouse::Cursor,
        _renderer: &Renderer,
        _clipboard: &mut dyn Clipboard,
        shell: &mut Shell<'_, Message>,
        _viewport: &Rectangle,
    ) {
        let state = tree.state.downcast_mut::<State>();
        let label_bounds = layout.children().next().map(|label| label.bounds());
        self.on_event(state, event, layout.bounds(), label_bounds, cursor, shell);
    }

    fn draw(
        &self,
        tree: &Tree,
        renderer: &mut Renderer,
        theme: &Theme,
        style: &renderer::Style,
        layout: Layout<'_>,
        cursor: mouse::Cursor,
        viewport: &Rectangle,
    ) {
        let state = tree.state.downcast_ref::<State>();
        let scene = self.scene(layout.bounds(), state);

        for segment in [scene.max_track, scene.min_track] {
            if segment.bounds.width <= 0.0 {
                continue;
            }
            renderer.fill_quad(
                renderer::Quad {
                    bounds: segment.bounds,
                    border: Border {
                        radius: segment.radius,
                        ..Border::default()
                    },
                    ..renderer::Quad::default()
                },
                Background::Color(segment.color),
            );
        }

        renderer.fill_quad(
            renderer::Quad {
                bounds: scene.thumb.bounds,
                border: Border::default().rounded(scene.thumb.radius),
                ..renderer::Quad::default()
            },
            Background::Color(scene.thumb.color),
        );

        if let (Some(label), Some(label_tree), Some(label_layout)) =
            (&self.label, tree.children.first(), layout.children().next())
        {
            label
                .as_widget()
                .draw(label_tree, renderer, theme, style, label_layout, cursor, viewport);
        }
    }

    fn mouse_interaction(
        &self,
        tree: &Tree,
        layout: Layout<'_>,
        cursor: mouse::Cursor,
        _viewport: &Rectangle,
        _renderer: &Renderer,
    ) -> mouse::Interaction {
        if self.state.is_disabled {
            return mouse::Interaction::default();
        }

        let state = tree.state.downcast_ref::<State>();
        if state.drag.is_dragging() {
            return mouse::Interaction::Grabbing;
        }

        let scene = self.scene(layout.bounds(), state);
        let over_label = layout
            .children()
            .next()
            .is_some_and(|label| cursor.is_over(label.bounds()));

        if cursor.is_over(scene.thumb.hit_bounds) || over_label {
            mouse::Interaction::Grab
        } else {
            mouse::Interaction::default()
        }
    }
}

impl<'a, Message> From<ValueSlider<'a, Message>> for Element<'a, Message>
where
    Message: Clone + 'a,
{
    fn from(mut slider: ValueSlider<'a, Message>) -> Self {
        slider.label = slider.build_label();
        Element::new(slider)
    }
}

/// Creates a new [`ValueSlider`]
pub fn value_slider<'a, Message>(
    value: f64,
    on_change: impl Fn(f64) -> Message + 'a,
) -> ValueSlider<'a, Message>
where
    Message: Clone,
{
    ValueSlider::new(value, on_change)
}
