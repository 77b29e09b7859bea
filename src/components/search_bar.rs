use iced::widget::{Button, Container, Row, Text, TextInput};
use iced::{Alignment, Length};
use iced::alignment::{Horizontal, Vertical};
use iced_font_awesome::fa_icon_solid;
use iced_modern_theme::Modern;

pub struct SearchBarConfig<'a, M> {
    pub query: &'a str,
    pub on_query_change: Box<dyn Fn(String) -> M + 'a>,
    pub on_search: M,
    pub on_clear: M,
    /// Disables the search button while a request is pending.
    pub busy: bool,
}

pub fn search_bar<'a, M: 'a + Clone>(config: SearchBarConfig<'a, M>) -> iced::Element<'a, M> {
    let has_query = !config.query.trim().is_empty();

    let search_button = Button::new(
        Container::new(
            Row::new()
                .spacing(8)
                .align_y(Alignment::Center)
                .push(fa_icon_solid("magnifying-glass").size(18.0))
                .push(Text::new(t!("search.button.search")).size(16)),
        )
            .align_x(Horizontal::Center)
            .align_y(Vertical::Center),
    )
        .style(Modern::primary_button())
        .on_press_maybe((has_query && !config.busy).then(|| config.on_search.clone()))
        .width(Length::FillPortion(2))
        .padding([12, 20]);

    let clear_button = Button::new(
        Container::new(
            Row::new()
                .spacing(8)
                .align_y(Alignment::Center)
                .push(fa_icon_solid("xmark").size(18.0))
                .push(Text::new(t!("search.button.clear")).size(16)),
        )
            .align_x(Horizontal::Center)
            .align_y(Vertical::Center),
    )
        .style(Modern::secondary_button())
        .on_press(config.on_clear)
        .width(Length::FillPortion(1))
        .padding([12, 20]);

    Container::new(
        Row::new()
            .spacing(15)
            .push(
                Container::new(
                    TextInput::new(t!("search.input.description").as_ref(), config.query)
                        .on_input(config.on_query_change)
                        .on_submit(config.on_search)
                        .style(Modern::search_input())
                        .padding([12, 16])
                        .size(16),
                )
                    .width(Length::FillPortion(6)),
            )
            .push(search_button)
            .push(clear_button),
    )
        .width(Length::Fill)
        .padding(20)
        .style(Modern::card_container())
        .into()
}
