//! Demo application showing the value slider in three configurations

pub mod settings;

use iced::widget::{column, container, text};
use iced::{Alignment, Element, Length, Size, Subscription, Task};

use value_slider::{ValueLabel, value_slider};

use settings::Settings;

pub const WINDOW_SIZE: Size = Size {
    width: 480.0,
    height: 420.0,
};

/// Demo messages
#[derive(Debug, Clone)]
pub enum Message {
    BasicChanged(f64),
    BasicStarted,
    StyledChanged(f64),
    StyledDragging,
    StyledEnded,
    WindowResized(Size),
}

/// Demo state; the slider values live here, not in the widgets
pub struct App {
    settings: Settings,
    basic: f64,
    styled: f64,
    viewport: Size,
    drag_events: u64,
    status: String,
}

impl App {
    pub fn new(settings: Settings) -> (Self, Task<Message>) {
        let app = Self {
            basic: settings.basic_value,
            styled: settings.styled.value,
            settings,
            viewport: WINDOW_SIZE,
            drag_events: 0,
            status: "Drag a thumb".to_string(),
        };
        (app, Task::none())
    }

    pub fn title(&self) -> String {
        "Value Slider".to_string()
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::BasicChanged(value) => {
                self.basic = value;
            }
            Message::BasicStarted => {
                tracing::info!("Basic slider drag started at {}", self.basic);
                self.status = format!("Started at {:.2}", self.basic);
            }
            Message::StyledChanged(value) => {
                self.styled = value;
            }
            Message::StyledDragging => {
                self.drag_events += 1;
            }
            Message::StyledEnded => {
                self.status = format!(
                    "Styled slider released at {:.2} after {} moves",
                    self.styled, self.drag_events
                );
                self.drag_events = 0;
                self.persist();
            }
            Message::WindowResized(size) => {
                self.viewport = size;
            }
        }
        Task::none()
    }

    fn persist(&mut self) {
        self.settings.basic_value = self.basic;
        self.settings.styled.value = self.styled;
        if let Err(e) = self.settings.save() {
            tracing::warn!("Failed to save settings: {}", e);
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        let styled = &self.settings.styled;

        let basic = value_slider(self.basic, Message::BasicChanged)
            .viewport(self.viewport)
            .on_start(Message::BasicStarted);

        let custom = value_slider(self.styled, Message::StyledChanged)
            .range(styled.min..=styled.max)
            .style(styled.style())
            .viewport(self.viewport)
            .on_dragging(Message::StyledDragging)
            .on_end(Message::StyledEnded);

        let disabled = value_slider(4.0, Message::BasicChanged)
            .values(ValueLabel::default().format("%.f%%"))
            .disabled(true)
            .viewport(self.viewport)
            .slider_frame(Some(240.0), None);

        let content = column![
            text("Default").size(14),
            basic,
            text("Styled").size(14),
            custom,
            text("Disabled").size(14),
            disabled,
            text(&self.status).size(12),
        ]
        .spacing(12)
        .align_x(Alignment::Center);

        container(content).center(Length::Fill).into()
    }

    pub fn subscription(&self) -> Subscription<Message> {
        iced::window::resize_events().map(|(_id, size)| Message::WindowResized(size))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app() -> App {
        App::new(Settings::default()).0
    }

    #[test]
    fn test_values_follow_messages() {
        let mut app = app();
        let _ = app.update(Message::BasicChanged(6.5));
        let _ = app.update(Message::StyledChanged(-1.0));
        assert_eq!(app.basic, 6.5);
        assert_eq!(app.styled, -1.0);
    }

    #[test]
    fn test_resize_updates_viewport() {
        let mut app = app();
        let _ = app.update(Message::WindowResized(Size::new(300.0, 500.0)));
        assert_eq!(app.viewport, Size::new(300.0, 500.0));
    }

    #[test]
    fn test_drag_events_are_counted_until_release() {
        let mut app = app();
        let _ = app.update(Message::StyledDragging);
        let _ = app.update(Message::StyledDragging);
        assert_eq!(app.drag_events, 2);
    }
}
