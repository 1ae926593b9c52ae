use iced::widget::{button, container, row, text, Space};
use iced::{Alignment, Element, Length};

use crate::geometry;
use crate::ui::app::Message;

pub fn view() -> Element<'static, Message> {
    let close_button = button(text("✕").size(12))
        .on_press(Message::CloseRequested)
        .padding([2.0, 8.0])
        .style(|_theme: &iced::Theme, _status| button::Style {
            background: Some(iced::Background::Color(iced::Color::from_rgb(0.8, 0.2, 0.2))),
            text_color: iced::Color::WHITE,
            border: iced::Border {
                radius: 6.0.into(),
                ..Default::default()
            },
            ..Default::default()
        });

    container(
        row![
            close_button,
            Space::with_width(Length::Fill),
            text("Volume Mixer").size(14),
            Space::with_width(Length::Fill),
        ]
        .spacing(8)
        .align_y(Alignment::Center),
    )
    .width(Length::Fill)
    .height(geometry::TITLE_BAR_HEIGHT)
    .padding([0.0, 6.0])
    .style(|_theme: &iced::Theme| container::Style {
        background: Some(iced::Background::Color(iced::Color::from_rgb(0.12, 0.12, 0.12))),
        ..Default::default()
    })
    .into()
}
