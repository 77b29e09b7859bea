use crate::components::image_browser::{self, ImageBrowser};
use crate::components::{SearchBarConfig, empty_state, error_panel, loading_indicator, search_bar};
use crate::controllers::{SearchCompleted, SearchController, SearchPhase};
use crate::services::api_client::HttpClient;
use crate::utils::image_count;
use iced::alignment::Horizontal;
use iced::widget::{Button, Column, Container, Scrollable, Text, stack};
use iced::{Alignment, Element, Length, Task};
use iced_modern_theme::Modern;
use log::debug;

pub enum Action {
    None,
    Run(Task<Message>),
}

#[derive(Debug, Clone)]
pub enum Message {
    QueryChanged(String),
    Submit,
    Clear,
    Retry,
    Completed(SearchCompleted),
    Browser(image_browser::Message),
}

pub struct Search {
    /// Text field contents; the controller only sees it on submit.
    input: String,
    search: SearchController<HttpClient>,
    browser: ImageBrowser<HttpClient>,
}

impl Search {
    pub fn new(api: HttpClient, per_page: u32) -> (Self, Task<Message>) {
        let browser = ImageBrowser::new(api.clone(), api.base_url());
        (
            Self {
                input: String::new(),
                search: SearchController::new(api, per_page),
                browser,
            },
            Task::none(),
        )
    }

    /// Back to the blank prompt. Anything still in flight is ignored on arrival.
    pub fn reset(&mut self) {
        self.input.clear();
        self.search.clear();
        let _ = self.browser.sync(&[]);
    }

    pub fn update(&mut self, message: Message) -> Action {
        match message {
            Message::QueryChanged(query) => {
                self.input = query;
                Action::None
            }
            Message::Submit => match self.search.search(&self.input) {
                Ok(pending) => Action::Run(Task::perform(pending, Message::Completed)),
                Err(err) => {
                    debug!("Search not sent: {}", err);
                    Action::None
                }
            },
            Message::Retry => match self.search.retry() {
                Some(pending) => Action::Run(Task::perform(pending, Message::Completed)),
                None => Action::None,
            },
            Message::Clear => {
                self.reset();
                Action::None
            }
            Message::Completed(completed) => {
                if !self.search.apply(completed) {
                    return Action::None;
                }
                let task = self.browser.sync(self.search.state().items());
                Action::Run(task.map(Message::Browser))
            }
            Message::Browser(message) => {
                let task = self.browser.update(self.search.state().items(), message);
                Action::Run(task.map(Message::Browser))
            }
        }
    }

    pub fn view(&self) -> Element<Message> {
        let state = self.search.state();
        let query = self.search.query().unwrap_or_default();

        let header = Column::new()
            .spacing(8)
            .align_x(Alignment::Center)
            .push(Text::new(t!("search.title")).size(28))
            .push(
                Text::new(t!("search.subtitle"))
                    .size(14)
                    .style(Modern::secondary_text()),
            );

        let bar = search_bar(SearchBarConfig {
            query: &self.input,
            on_query_change: Box::new(Message::QueryChanged),
            on_search: Message::Submit,
            on_clear: Message::Clear,
            busy: state.is_busy(),
        });

        let body: Element<Message> = match self.search.phase() {
            SearchPhase::Blank => empty_state(
                "magnifying-glass",
                t!("search.blank.title").to_string(),
                t!("search.blank.subtitle").to_string(),
                None,
            ),
            SearchPhase::Searching => loading_indicator(t!("search.searching").to_string()),
            SearchPhase::Error => Column::new()
                .spacing(12)
                .align_x(Alignment::Center)
                .push(error_panel(
                    t!("search.error.title").to_string(),
                    state.error_message().unwrap_or_default(),
                    t!("common.button.retry").to_string(),
                    Message::Retry,
                ))
                .push(clear_button(t!("search.button.clear").to_string()))
                .into(),
            SearchPhase::Results if state.items().is_empty() => empty_state(
                "magnifying-glass",
                t!("search.empty.title").to_string(),
                t!("search.empty.subtitle", query = query).to_string(),
                Some((t!("search.button.clear").to_string(), Message::Clear)),
            ),
            SearchPhase::Results => Column::new()
                .spacing(16)
                .align_x(Alignment::Center)
                .push(Text::new(t!("search.results.title", query = query)).size(20))
                .push(
                    Text::new(image_count(state.items().len()))
                        .size(14)
                        .style(Modern::secondary_text()),
                )
                .push(self.browser.grid(state.items()).map(Message::Browser))
                .push(clear_button(t!("search.button.new").to_string()))
                .into(),
        };

        let content = Column::new()
            .spacing(20)
            .padding(10)
            .push(
                Container::new(header)
                    .width(Length::Fill)
                    .align_x(Horizontal::Center),
            )
            .push(bar)
            .push(
                Scrollable::new(
                    Container::new(body)
                        .width(Length::Fill)
                        .align_x(Horizontal::Center),
                )
                .width(Length::Fill)
                .height(Length::Fill),
            );

        let layout = Container::new(content)
            .width(Length::Fill)
            .height(Length::Fill);

        match self.browser.modal(state.items()) {
            Some(modal) => stack![layout, modal.map(Message::Browser)].into(),
            None => layout.into(),
        }
    }
}

fn clear_button<'a>(label: String) -> Element<'a, Message> {
    Button::new(Text::new(label))
        .style(Modern::secondary_button())
        .padding([10, 20])
        .on_press(Message::Clear)
        .into()
}
