#[macro_use]
extern crate rust_i18n;
mod components;
mod config;
mod controllers;
mod error;
mod models;
mod screen;
mod services;
#[cfg(test)]
mod testing;
mod utils;

use crate::components::navbar;
use crate::components::navbar::{NavButton, Navbar};
use crate::config::get_settings;
use crate::controllers::invalidation::{self, InvalidationReceiver};
use crate::screen::{Gallery, Route, Search, Upload, gallery, search, upload};
use crate::services::api_client::HttpClient;
use crate::services::logger_service;
use iced::widget::Row;
use iced::{Element, Task, Theme};
use iced_modern_theme::Modern;
use log::info;
use std::time::Duration;

i18n!("locales", fallback = "en");

#[derive(Debug, Clone)]
pub enum Message {
    Navbar(navbar::Message),
    Gallery(gallery::Message),
    Search(search::Message),
    Upload(upload::Message),
}

pub struct GalleryApp {
    theme: Theme,
    route: Route,
    navbar: Navbar,
    gallery: Gallery,
    search: Search,
    upload: Upload,
    invalidations: InvalidationReceiver,
}

impl GalleryApp {
    pub fn new() -> (Self, Task<Message>) {
        let settings = get_settings();
        let theme = if settings.config.theme == "Dark" {
            Modern::dark_theme()
        } else {
            Modern::light_theme()
        };
        let per_page = settings.config.per_page;
        let success_display = Duration::from_secs(settings.config.success_display_secs);
        let api = HttpClient::new(settings.config.api_base_url.clone());

        let (signals, invalidations) = invalidation::channel();
        let (gallery, gallery_task) = Gallery::new(api.clone(), per_page);
        let (search, search_task) = Search::new(api.clone(), per_page);
        let (upload, upload_task) = Upload::new(api, signals, success_display);

        (
            Self {
                theme,
                route: Route::Gallery,
                navbar: Navbar::new(),
                gallery,
                search,
                upload,
                invalidations,
            },
            Task::batch([
                gallery_task.map(Message::Gallery),
                search_task.map(Message::Search),
                upload_task.map(Message::Upload),
            ]),
        )
    }

    pub fn title(&self) -> String {
        t!("app.title").to_string()
    }

    fn theme(&self) -> Theme {
        self.theme.clone()
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Gallery(message) => match self.gallery.update(message) {
                gallery::Action::None => Task::none(),
                gallery::Action::Run(task) => task.map(Message::Gallery),
                gallery::Action::NavigateToUpload => {
                    self.navbar.selected = NavButton::Upload;
                    self.route = Route::Upload;
                    Task::none()
                }
            },
            Message::Search(message) => match self.search.update(message) {
                search::Action::None => Task::none(),
                search::Action::Run(task) => task.map(Message::Search),
            },
            Message::Upload(message) => match self.upload.update(message) {
                upload::Action::None => Task::none(),
                upload::Action::Run(task) => task.map(Message::Upload),
                upload::Action::Uploaded(task) => {
                    let refresh = self.gallery.refresh_if_invalidated(&mut self.invalidations);
                    Task::batch([task.map(Message::Upload), refresh.map(Message::Gallery)])
                }
            },
            Message::Navbar(message) => match self.navbar.update(message) {
                navbar::Action::Navigate(id) => {
                    self.route = match id {
                        NavButton::Gallery => Route::Gallery,
                        NavButton::Search => {
                            self.search.reset();
                            Route::Search
                        }
                        NavButton::Upload => Route::Upload,
                    };
                    Task::none()
                }
                navbar::Action::None => Task::none(),
            },
        }
    }

    pub fn view(&self) -> Element<Message> {
        let navbar = self.navbar.view().map(Message::Navbar);

        let content = match self.route {
            Route::Gallery => self.gallery.view().map(Message::Gallery),
            Route::Search => self.search.view().map(Message::Search),
            Route::Upload => self.upload.view().map(Message::Upload),
        };

        Row::new().push(navbar).push(content).into()
    }
}

fn main() -> iced::Result {
    dotenv::dotenv().ok();

    if let Err(err) = logger_service::init() {
        eprintln!("Failed to initialize logger: {err}");
    }

    info!("Starting application");
    info!("{:?}", _rust_i18n_available_locales());

    {
        let settings = get_settings();
        rust_i18n::set_locale(settings.config.language.as_str());
    }

    iced::application(GalleryApp::title, GalleryApp::update, GalleryApp::view)
        .theme(GalleryApp::theme)
        .run_with(GalleryApp::new)
}
