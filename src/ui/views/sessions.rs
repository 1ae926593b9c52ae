use iced::widget::{button, column, container, row, slider, text, Column, Image};
use iced::{Element, Length};

use crate::store::SessionStore;
use crate::ui::app::Message;

pub fn view(store: &SessionStore) -> Element<Message> {
    let mut content: Column<Message> = column![].spacing(10).padding(10);

    if let Some(error) = store.last_error() {
        content = content.push(
            text(error)
                .size(12)
                .color(iced::Color::from_rgb(0.9, 0.3, 0.3)),
        );
    }

    if store.is_empty() {
        let placeholder = if store.loading() {
            "Loading…"
        } else {
            "No audio sessions"
        };
        content = content.push(
            container(
                text(placeholder)
                    .size(14)
                    .color(iced::Color::from_rgb(0.6, 0.6, 0.6)),
            )
            .width(Length::Fill)
            .align_x(iced::Alignment::Center),
        );
        return content.into();
    }

    for session in store.sessions() {
        let pid = session.pid;

        let header = if let Some(icon_path) = &session.icon_path {
            row![
                Image::new(iced::widget::image::Handle::from_path(icon_path))
                    .width(24)
                    .height(24),
                text(&session.name).size(14)
            ]
            .spacing(10)
            .align_y(iced::Alignment::Center)
        } else {
            row![text(&session.name).size(14)]
        };

        let mute_button = button(text(if session.muted { "🔇" } else { "🔊" }).size(12))
            .on_press(Message::ToggleMute(pid))
            .padding([2.0, 6.0]);

        let volume_control = row![
            slider(0.0..=1.0, session.volume, move |v| {
                Message::VolumeChanged(pid, v)
            })
            .step(0.01),
            text(format!("{}%", (session.volume * 100.0).round() as i32))
                .size(12)
                .width(36),
            mute_button,
        ]
        .spacing(8)
        .align_y(iced::Alignment::Center);

        content = content.push(
            container(column![header, volume_control].spacing(5))
                .padding(8)
                .width(Length::Fill)
                .style(|_theme: &iced::Theme| container::Style {
                    background: Some(iced::Background::Color(iced::Color::from_rgb(
                        0.1, 0.1, 0.1,
                    ))),
                    border: iced::Border {
                        radius: 5.0.into(),
                        ..Default::default()
                    },
                    ..Default::default()
                }),
        );
    }

    content.into()
}
