use iced::widget::{Button, Column, Container, Text};
use iced::{Alignment, Length};
use iced_font_awesome::fa_icon;
use iced_modern_theme::Modern;

/// Centered prompt with an optional call to action.
pub fn empty_state<'a, M: 'a + Clone>(
    icon: &'a str,
    title: String,
    subtitle: String,
    action: Option<(String, M)>,
) -> iced::Element<'a, M> {
    let mut column = Column::new()
        .spacing(20)
        .align_x(Alignment::Center)
        .push(Container::new(fa_icon(icon).size(64.0)))
        .push(Text::new(title).size(18).style(Modern::secondary_text()))
        .push(Text::new(subtitle).size(14).style(Modern::secondary_text()));

    if let Some((label, message)) = action {
        column = column.push(
            Button::new(Text::new(label))
                .style(Modern::primary_button())
                .padding([10, 20])
                .on_press(message),
        );
    }

    Container::new(column)
        .width(Length::Fill)
        .height(Length::Fixed(300.0))
        .align_x(Alignment::Center)
        .align_y(Alignment::Center)
        .into()
}

/// Error panel: what failed, the message, and the recovery action.
pub fn error_panel<'a, M: 'a + Clone>(
    title: String,
    message: &'a str,
    action_label: String,
    on_action: M,
) -> iced::Element<'a, M> {
    let column = Column::new()
        .spacing(16)
        .align_x(Alignment::Center)
        .push(Container::new(fa_icon("circle-xmark").size(48.0)))
        .push(Text::new(title).size(18))
        .push(Text::new(message).size(14).style(Modern::secondary_text()))
        .push(
            Button::new(Text::new(action_label))
                .style(Modern::danger_button())
                .padding([10, 20])
                .on_press(on_action),
        );

    Container::new(column)
        .width(Length::Fill)
        .padding(30)
        .align_x(Alignment::Center)
        .style(Modern::card_container())
        .into()
}

/// Progress indicator shown while a request is pending.
pub fn loading_indicator<'a, M: 'a>(label: String) -> iced::Element<'a, M> {
    Container::new(
        Column::new()
            .spacing(16)
            .align_x(Alignment::Center)
            .push(fa_icon("hourglass-half").size(40.0))
            .push(Text::new(label).size(14).style(Modern::secondary_text())),
    )
    .width(Length::Fill)
    .height(Length::Fixed(300.0))
    .align_x(Alignment::Center)
    .align_y(Alignment::Center)
    .into()
}
