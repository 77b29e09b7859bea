use iced::widget::{Button, Container, Row, Text};
use iced::{Alignment, Length};
use iced::alignment::{Horizontal, Vertical};
use iced_font_awesome::fa_icon_solid;
use iced_modern_theme::Modern;

/// Page picker with 1-based page numbers. Without a known page count only
/// previous/next are offered.
pub fn pagination<'a, M: 'a + Clone>(
    current_page: u32,
    total_pages: Option<u64>,
    on_page_change: impl Fn(u32) -> M + 'a + Copy,
) -> iced::Element<'a, M> {
    let current = u64::from(current_page.max(1));

    if total_pages.is_some_and(|total| total <= 1) {
        return Container::new(Text::new(""))
            .width(Length::Fixed(0.0))
            .height(Length::Fixed(0.0))
            .into();
    }

    let mut pagination_row = Row::new().spacing(8).align_y(Alignment::Center);

    // Previous button
    if current > 1 {
        pagination_row = pagination_row.push(
            Button::new(
                Container::new(
                    Row::new()
                        .spacing(6)
                        .align_y(Alignment::Center)
                        .push(fa_icon_solid("chevron-left").size(14.0))
                        .push(Text::new(t!("gallery.button.previous")).size(14)),
                )
                    .align_x(Horizontal::Center)
                    .align_y(Vertical::Center),
            )
                .style(Modern::secondary_button())
                .on_press(on_page_change(page_number(current - 1)))
                .padding([8, 12]),
        );
    }

    if let Some(total_pages) = total_pages {
        let start_page = current.saturating_sub(2).max(1);
        let end_page = std::cmp::min(start_page + 4, total_pages);

        // First page + ellipsis
        if start_page > 1 {
            pagination_row = pagination_row.push(
                Button::new(Text::new("1").size(14))
                    .style(Modern::blue_tinted_button())
                    .on_press(on_page_change(1))
                    .padding([8, 12]),
            );
            if start_page > 2 {
                pagination_row = pagination_row
                    .push(Text::new("...").size(14).style(Modern::secondary_text()));
            }
        }

        for page in start_page..=end_page {
            let button = if page == current {
                Button::new(Text::new(page.to_string()).size(14))
                    .style(Modern::primary_button())
                    .padding([8, 12])
            } else {
                Button::new(Text::new(page.to_string()).size(14))
                    .style(Modern::blue_tinted_button())
                    .on_press(on_page_change(page_number(page)))
                    .padding([8, 12])
            };

            pagination_row = pagination_row.push(button);
        }

        // Ellipsis + last page
        if end_page < total_pages {
            if end_page < total_pages - 1 {
                pagination_row = pagination_row
                    .push(Text::new("...").size(14).style(Modern::secondary_text()));
            }
            pagination_row = pagination_row.push(
                Button::new(Text::new(total_pages.to_string()).size(14))
                    .style(Modern::blue_tinted_button())
                    .on_press(on_page_change(page_number(total_pages)))
                    .padding([8, 12]),
            );
        }
    }

    // Next button
    if total_pages.is_none_or(|total| current < total) {
        pagination_row = pagination_row.push(
            Button::new(
                Container::new(
                    Row::new()
                        .spacing(6)
                        .align_y(Alignment::Center)
                        .push(Text::new(t!("gallery.button.next")).size(14))
                        .push(fa_icon_solid("chevron-right").size(14.0)),
                )
                    .align_x(Horizontal::Center)
                    .align_y(Vertical::Center),
            )
                .style(Modern::secondary_button())
                .on_press(on_page_change(page_number(current + 1)))
                .padding([8, 12]),
        );
    }

    Container::new(pagination_row)
        .width(Length::Shrink)
        .align_x(Horizontal::Center)
        .padding(20)
        .into()
}

fn page_number(page: u64) -> u32 {
    u32::try_from(page).unwrap_or(u32::MAX)
}
