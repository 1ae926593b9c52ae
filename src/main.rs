mod audio;
mod geometry;
mod store;
mod ui;
mod utils;

use ui::app::MixerApp;

fn main() -> iced::Result {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "voldock=info".into()),
        )
        .init();

    iced::application("Volume Mixer", MixerApp::update, MixerApp::view)
        .subscription(MixerApp::subscription)
        .window(iced::window::Settings {
            size: iced::Size::new(geometry::WINDOW_WIDTH, geometry::MIN_HEIGHT),
            resizable: false,
            decorations: false,
            level: iced::window::Level::AlwaysOnTop,
            ..Default::default()
        })
        .run_with(MixerApp::new)
}
