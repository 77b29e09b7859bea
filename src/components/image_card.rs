use iced::alignment::{Horizontal, Vertical};
use iced::widget::image::Handle;
use iced::widget::{Button, Column, Container, Image, Row, Text};
use iced::{Element, Length};
use iced_font_awesome::fa_icon_solid;
use iced_modern_theme::Modern;

use crate::models::Image as GalleryImage;

const CARD_TAG_LIMIT: usize = 4;

/// Grid card: thumbnail, title, up to four tags, file name and date.
pub fn image_card<'a, M: 'a + Clone>(
    image: &'a GalleryImage,
    thumbnail: Option<&Handle>,
    on_open: M,
) -> Element<'a, M> {
    let picture: Element<'a, M> = match thumbnail {
        Some(handle) => Image::new(handle.clone())
            .width(Length::Fill)
            .height(Length::Fixed(180.0))
            .into(),
        None => Container::new(fa_icon_solid("image").size(48.0))
            .width(Length::Fill)
            .height(Length::Fixed(180.0))
            .align_x(Horizontal::Center)
            .align_y(Vertical::Center)
            .style(Modern::sheet_container())
            .into(),
    };

    let (shown, hidden) = image.visible_tags(CARD_TAG_LIMIT);
    let mut tags = Row::new().spacing(6);
    for tag in shown {
        tags = tags.push(Text::new(format!("#{tag}")).size(12).style(Modern::primary_text()));
    }
    if hidden > 0 {
        tags = tags.push(Text::new(format!("+{hidden}")).size(12).style(Modern::secondary_text()));
    }

    let footer = Row::new()
        .spacing(10)
        .push(
            Text::new(&image.original_filename)
                .size(12)
                .width(Length::Fill)
                .style(Modern::secondary_text()),
        )
        .push(Text::new(image.created_date()).size(12).style(Modern::secondary_text()));

    let content = Column::new()
        .spacing(10)
        .push(picture)
        .push(Text::new(image.title()).size(16))
        .push(tags.wrap())
        .push(footer);

    Button::new(
        Container::new(content)
            .padding(10)
            .width(Length::Fixed(240.0))
            .style(Modern::accent_container()),
    )
    .padding(0)
    .style(Modern::system_button())
    .on_press(on_open)
    .into()
}
