use crate::components::image_browser::{self, ImageBrowser};
use crate::components::{empty_state, error_panel, loading_indicator, pagination};
use crate::controllers::invalidation::InvalidationReceiver;
use crate::controllers::{FeedController, FeedLoaded};
use crate::models::Status;
use crate::services::api_client::HttpClient;
use crate::utils::image_count;
use iced::alignment::Horizontal;
use iced::widget::{Button, Column, Container, Row, Scrollable, Space, Text, stack};
use iced::{Alignment, Element, Length, Task};
use iced_font_awesome::fa_icon_solid;
use iced_modern_theme::Modern;

pub enum Action {
    None,
    Run(Task<Message>),
    NavigateToUpload,
}

#[derive(Debug, Clone)]
pub enum Message {
    Loaded(FeedLoaded),
    Refresh,
    Retry,
    GoToPage(u32),
    OpenUpload,
    Browser(image_browser::Message),
}

pub struct Gallery {
    feed: FeedController<HttpClient>,
    browser: ImageBrowser<HttpClient>,
}

impl Gallery {
    pub fn new(api: HttpClient, per_page: u32) -> (Self, Task<Message>) {
        let browser = ImageBrowser::new(api.clone(), api.base_url());
        let mut feed = FeedController::new(api, per_page);
        let task = Task::perform(feed.load(1), Message::Loaded);
        (Self { feed, browser }, task)
    }

    /// Picks up uploads that landed since the last call.
    pub fn refresh_if_invalidated(&mut self, signals: &mut InvalidationReceiver) -> Task<Message> {
        match self.feed.poll_invalidation(signals) {
            Some(load) => Task::perform(load, Message::Loaded),
            None => Task::none(),
        }
    }

    pub fn update(&mut self, message: Message) -> Action {
        match message {
            Message::Loaded(loaded) => {
                if !self.feed.apply(loaded) {
                    return Action::None;
                }
                let task = self.browser.sync(self.feed.state().items());
                Action::Run(task.map(Message::Browser))
            }
            Message::Refresh => Action::Run(Task::perform(self.feed.refresh(), Message::Loaded)),
            Message::Retry => Action::Run(Task::perform(self.feed.retry(), Message::Loaded)),
            Message::GoToPage(page) => {
                Action::Run(Task::perform(self.feed.load(page), Message::Loaded))
            }
            Message::OpenUpload => Action::NavigateToUpload,
            Message::Browser(message) => {
                let task = self.browser.update(self.feed.state().items(), message);
                Action::Run(task.map(Message::Browser))
            }
        }
    }

    pub fn view(&self) -> Element<Message> {
        let state = self.feed.state();
        let items = state.items();

        let body: Element<Message> = match (state.status(), items.is_empty()) {
            (Status::Idle, _) => empty_state(
                "images",
                t!("gallery.idle.title").to_string(),
                t!("gallery.idle.subtitle").to_string(),
                Some((t!("gallery.button.refresh").to_string(), Message::Refresh)),
            ),
            (Status::Loading, true) => loading_indicator(t!("gallery.loading").to_string()),
            (Status::Error, true) => error_panel(
                t!("gallery.error.title").to_string(),
                state.error_message().unwrap_or_default(),
                t!("common.button.retry").to_string(),
                Message::Retry,
            ),
            (Status::Ready, true) => empty_state(
                "images",
                t!("gallery.empty.title").to_string(),
                t!("gallery.empty.subtitle").to_string(),
                Some((t!("navbar.button.upload").to_string(), Message::OpenUpload)),
            ),
            _ => self.browser.grid(items).map(Message::Browser),
        };

        let mut content = Column::new()
            .spacing(20)
            .padding(10)
            .push(self.header());

        // Stale items stay on screen; the failure is reported above them.
        if let (Status::Error, false) = (state.status(), items.is_empty()) {
            content = content.push(stale_banner(state.error_message().unwrap_or_default()));
        }

        content = content.push(
            Scrollable::new(body)
                .width(Length::Fill)
                .height(Length::Fill),
        );

        if state.has_previous_page() || state.has_next_page() {
            content = content.push(
                Container::new(pagination(state.page(), state.pages(), Message::GoToPage))
                    .width(Length::Fill)
                    .align_x(Horizontal::Center),
            );
        }

        let layout = Container::new(content)
            .width(Length::Fill)
            .height(Length::Fill);

        match self.browser.modal(items) {
            Some(modal) => stack![layout, modal.map(Message::Browser)].into(),
            None => layout.into(),
        }
    }

    fn header(&self) -> Element<Message> {
        let state = self.feed.state();
        let summary = match (state.is_busy(), state.total()) {
            (true, _) => t!("gallery.loading").to_string(),
            (false, Some(total)) => image_count(total as usize),
            (false, None) => image_count(state.items().len()),
        };

        Container::new(
            Row::new()
                .spacing(15)
                .align_y(Alignment::Center)
                .push(Text::new(t!("gallery.title")).size(24))
                .push(Text::new(summary).size(14).style(Modern::secondary_text()))
                .push(Space::with_width(Length::Fill))
                .push(
                    Button::new(
                        Row::new()
                            .spacing(8)
                            .align_y(Alignment::Center)
                            .push(fa_icon_solid("rotate-right").size(16.0))
                            .push(Text::new(t!("gallery.button.refresh"))),
                    )
                    .style(Modern::secondary_button())
                    .padding([8, 16])
                    .on_press_maybe((!state.is_busy()).then_some(Message::Refresh)),
                ),
        )
        .width(Length::Fill)
        .padding(20)
        .style(Modern::card_container())
        .into()
    }
}

fn stale_banner(message: &str) -> Element<'_, Message> {
    Container::new(
        Row::new()
            .spacing(12)
            .align_y(Alignment::Center)
            .push(fa_icon_solid("triangle-exclamation").size(18.0))
            .push(Text::new(message).width(Length::Fill))
            .push(
                Button::new(Text::new(t!("common.button.retry")))
                    .style(Modern::warning_button())
                    .padding([6, 14])
                    .on_press(Message::Retry),
            ),
    )
    .width(Length::Fill)
    .padding(12)
    .style(Modern::floating_container())
    .into()
}
