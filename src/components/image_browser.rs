use std::collections::{HashMap, HashSet};

use iced::alignment::{Horizontal, Vertical};
use iced::widget::image::Handle;
use iced::widget::{Container, Row};
use iced::{Background, Color, Element, Length, Task};
use log::debug;

use crate::components::image_card::image_card;
use crate::components::image_preview_modal::{PreviewConfig, image_preview_modal};
use crate::models::Image;
use crate::services::api_client::GalleryApi;

#[derive(Debug, Clone)]
pub enum Message {
    ThumbnailLoaded(String, Option<Vec<u8>>),
    OriginalLoaded(String, Option<Vec<u8>>),
    Open(usize),
    Previous,
    Next,
    Close,
}

/// Card grid plus the preview modal for whatever list a screen shows.
/// Thumbnails are cached by image id for as long as the image stays listed.
pub struct ImageBrowser<A> {
    api: A,
    base_url: String,
    thumbnails: HashMap<String, Handle>,
    requested: HashSet<String>,
    /// Position in the shown list and the id found there when opened.
    selected: Option<(usize, String)>,
    original: Option<(String, Handle)>,
}

impl<A: GalleryApi> ImageBrowser<A> {
    pub fn new(api: A, base_url: impl Into<String>) -> Self {
        Self {
            api,
            base_url: base_url.into(),
            thumbnails: HashMap::new(),
            requested: HashSet::new(),
            selected: None,
            original: None,
        }
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected.as_ref().map(|(index, _)| *index)
    }

    /// Call whenever the shown list changes. The open preview follows its
    /// image to its new position, or closes if the image is gone. Thumbnails
    /// of images no longer listed are dropped and missing ones fetched.
    pub fn sync(&mut self, images: &[Image]) -> Task<Message> {
        if let Some((_, id)) = self.selected.take() {
            self.selected = images
                .iter()
                .position(|image| image.id == id)
                .map(|index| (index, id));
            if self.selected.is_none() {
                self.original = None;
            }
        }

        let listed: HashSet<&str> = images.iter().map(|image| image.id.as_str()).collect();
        self.thumbnails.retain(|id, _| listed.contains(id.as_str()));
        self.requested.retain(|id| listed.contains(id.as_str()));

        let mut tasks = Vec::new();
        for image in images {
            if self.requested.insert(image.id.clone()) {
                tasks.push(self.fetch(
                    image.id.clone(),
                    image.thumbnail_url(&self.base_url),
                    Message::ThumbnailLoaded,
                ));
            }
        }

        Task::batch(tasks)
    }

    pub fn update(&mut self, images: &[Image], message: Message) -> Task<Message> {
        match message {
            Message::ThumbnailLoaded(id, Some(bytes)) => {
                // Dropped by a sync while in flight.
                if self.requested.contains(&id) {
                    self.thumbnails.insert(id, Handle::from_bytes(bytes));
                }
                Task::none()
            }
            Message::ThumbnailLoaded(id, None) => {
                // Placeholder stays; a later sync may try again.
                self.requested.remove(&id);
                Task::none()
            }
            Message::OriginalLoaded(id, bytes) => {
                let current = self.selected.as_ref().map(|(_, selected)| selected);
                if let (Some(selected), Some(bytes)) = (current, bytes) {
                    if *selected == id {
                        self.original = Some((id, Handle::from_bytes(bytes)));
                    }
                }
                Task::none()
            }
            Message::Open(index) => self.select(images, index),
            Message::Previous => match self.selected() {
                Some(index) if index > 0 => self.select(images, index - 1),
                _ => Task::none(),
            },
            Message::Next => match self.selected() {
                Some(index) => self.select(images, index + 1),
                None => Task::none(),
            },
            Message::Close => {
                self.close();
                Task::none()
            }
        }
    }

    fn select(&mut self, images: &[Image], index: usize) -> Task<Message> {
        let Some(image) = images.get(index) else {
            return Task::none();
        };

        self.selected = Some((index, image.id.clone()));
        if self.original.as_ref().is_some_and(|(id, _)| *id == image.id) {
            return Task::none();
        }

        self.original = None;
        self.fetch(
            image.id.clone(),
            image.original_url(&self.base_url),
            Message::OriginalLoaded,
        )
    }

    fn close(&mut self) {
        self.selected = None;
        self.original = None;
    }

    fn fetch(
        &self,
        id: String,
        url: String,
        done: fn(String, Option<Vec<u8>>) -> Message,
    ) -> Task<Message> {
        let api = self.api.clone();
        Task::perform(
            async move {
                match api.fetch_asset(&url).await {
                    Ok(bytes) => (id, Some(bytes)),
                    Err(err) => {
                        debug!("Could not load {}: {}", url, err);
                        (id, None)
                    }
                }
            },
            move |(id, bytes)| done(id, bytes),
        )
    }

    pub fn grid<'a>(&'a self, images: &'a [Image]) -> Element<'a, Message> {
        let mut cards = Row::new().spacing(16);
        for (index, image) in images.iter().enumerate() {
            cards = cards.push(image_card(
                image,
                self.thumbnails.get(&image.id),
                Message::Open(index),
            ));
        }

        Container::new(cards.wrap())
            .width(Length::Fill)
            .align_x(Horizontal::Center)
            .padding(10)
            .into()
    }

    /// Overlay for the open image, if any. Meant to be stacked over the screen.
    pub fn modal<'a>(&'a self, images: &'a [Image]) -> Option<Element<'a, Message>> {
        let (index, id) = self.selected.as_ref()?;
        let index = *index;
        let image = images.get(index).filter(|image| image.id == *id)?;

        let handle = self
            .original
            .as_ref()
            .filter(|(id, _)| *id == image.id)
            .map(|(_, handle)| handle.clone());

        let modal = image_preview_modal(PreviewConfig {
            image,
            handle,
            current_index: index,
            total_images: images.len(),
            on_close: Message::Close,
            on_previous: (index > 0).then_some(Message::Previous),
            on_next: (index + 1 < images.len()).then_some(Message::Next),
        });

        Some(
            Container::new(modal)
                .width(Length::Fill)
                .height(Length::Fill)
                .align_x(Horizontal::Center)
                .align_y(Vertical::Center)
                .style(|_| iced::widget::container::Style {
                    background: Some(Background::Color(Color::from_rgba(0.0, 0.0, 0.0, 0.6))),
                    ..Default::default()
                })
                .into(),
        )
    }
}
