//! value-slider demo - three sliders showing the widget's configuration surface

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod demo;

fn main() -> anyhow::Result<()> {
    // Initialize tracing for logging
    tracing_subscriber::fmt::init();

    let settings = demo::settings::Settings::load();

    iced::application(
        move || demo::App::new(settings.clone()),
        demo::App::update,
        demo::App::view,
    )
    .title(demo::App::title)
    .subscription(demo::App::subscription)
    .window_size(demo::WINDOW_SIZE)
    .antialiasing(true)
    .run()?;

    Ok(())
}
