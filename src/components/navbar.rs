use iced::alignment::Horizontal;
use iced::widget::{Column, Space, button, container, text};
use iced::{Element, Length};
use iced_modern_theme::Modern;
use rust_i18n::t;

pub enum Action {
    Navigate(NavButton),
    None,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavButton {
    Gallery,
    Search,
    Upload,
}

#[derive(Debug, Clone)]
pub enum Message {
    ButtonPressed(NavButton),
}

pub struct Navbar {
    pub selected: NavButton,
}

impl Navbar {
    pub fn new() -> Self {
        Navbar {
            selected: NavButton::Gallery,
        }
    }

    pub fn update(&mut self, message: Message) -> Action {
        match message {
            Message::ButtonPressed(id) if id == self.selected => Action::None,
            Message::ButtonPressed(id) => {
                self.selected = id;
                Action::Navigate(id)
            }
        }
    }

    pub fn view(&self) -> Element<Message> {
        fn styled_button(
            label: String,
            id: NavButton,
            selected: NavButton,
        ) -> iced::widget::Button<'static, Message> {
            let base = button(text(label).width(Length::Fill).align_x(Horizontal::Center))
                .width(Length::Fill)
                .height(Length::Fixed(45.0))
                .padding(10)
                .on_press(Message::ButtonPressed(id));

            if id == selected {
                base.style(Modern::green_tinted_button())
            } else {
                base.style(Modern::blue_tinted_button())
            }
        }

        let navbar = Column::new()
            .push(
                text(t!("app.title"))
                    .size(22)
                    .width(Length::Fill)
                    .align_x(Horizontal::Center),
            )
            .push(Space::with_height(10))
            .push(styled_button(
                t!("navbar.button.gallery").to_string(),
                NavButton::Gallery,
                self.selected,
            ))
            .push(styled_button(
                t!("navbar.button.search").to_string(),
                NavButton::Search,
                self.selected,
            ))
            .push(styled_button(
                t!("navbar.button.upload").to_string(),
                NavButton::Upload,
                self.selected,
            ))
            .spacing(5);

        container(navbar)
            .width(Length::Fixed(220.0))
            .height(Length::Fill)
            .padding(5)
            .style(Modern::sidebar_container())
            .into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pressing_another_tab_navigates() {
        let mut navbar = Navbar::new();
        assert!(matches!(
            navbar.update(Message::ButtonPressed(NavButton::Upload)),
            Action::Navigate(NavButton::Upload)
        ));
        assert_eq!(navbar.selected, NavButton::Upload);
    }

    #[test]
    fn pressing_the_current_tab_does_nothing() {
        let mut navbar = Navbar::new();
        assert!(matches!(
            navbar.update(Message::ButtonPressed(NavButton::Gallery)),
            Action::None
        ));
    }
}
