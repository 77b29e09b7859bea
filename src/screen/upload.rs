use crate::controllers::invalidation::InvalidationSender;
use crate::controllers::{PreviewReady, ResetDue, UploadCompleted, UploadController};
use crate::models::{FileRef, UploadStatus};
use crate::services::api_client::HttpClient;
use crate::services::file_service;
use iced::alignment::{Horizontal, Vertical};
use iced::widget::image::Handle;
use iced::widget::{Button, Column, Container, Image, Row, Scrollable, Text, TextInput};
use iced::{Alignment, Element, Length, Task};
use iced_font_awesome::{fa_icon, fa_icon_solid};
use iced_modern_theme::Modern;
use log::debug;
use std::time::Duration;

pub enum Action {
    None,
    Run(Task<Message>),
    /// An upload finished; the app should check the feed for invalidations.
    Uploaded(Task<Message>),
}

#[derive(Debug, Clone)]
pub enum Message {
    PickFile,
    FileChosen(Option<FileRef>),
    PreviewReady(PreviewReady),
    CaptionChanged(String),
    TagsChanged(String),
    Submit,
    Uploaded(UploadCompleted),
    ResetDue(ResetDue),
    Clear,
}

pub struct Upload {
    upload: UploadController<HttpClient>,
    /// Decoded once per preview so the view does not re-decode base64.
    preview: Option<Handle>,
}

impl Upload {
    pub fn new(
        api: HttpClient,
        invalidations: InvalidationSender,
        success_display: Duration,
    ) -> (Self, Task<Message>) {
        (
            Self {
                upload: UploadController::new(api, invalidations)
                    .with_success_display(success_display),
                preview: None,
            },
            Task::none(),
        )
    }

    pub fn update(&mut self, message: Message) -> Action {
        match message {
            Message::PickFile => Action::Run(Task::perform(
                file_service::pick_image(),
                Message::FileChosen,
            )),
            Message::FileChosen(Some(file)) => match self.upload.select_file(file) {
                Ok(rendering) => {
                    self.preview = None;
                    Action::Run(Task::perform(rendering, Message::PreviewReady))
                }
                Err(err) => {
                    debug!("File not taken: {}", err);
                    Action::None
                }
            },
            Message::FileChosen(None) => Action::None,
            Message::PreviewReady(ready) => {
                if self.upload.apply_preview(ready) {
                    self.preview = self
                        .upload
                        .draft()
                        .preview
                        .as_ref()
                        .and_then(|preview| preview.to_bytes())
                        .map(Handle::from_bytes);
                }
                Action::None
            }
            Message::CaptionChanged(caption) => {
                if let Err(err) = self.upload.set_caption(caption) {
                    debug!("Caption not changed: {}", err);
                }
                Action::None
            }
            Message::TagsChanged(tags) => {
                if let Err(err) = self.upload.set_tags(tags) {
                    debug!("Tags not changed: {}", err);
                }
                Action::None
            }
            Message::Submit => match self.upload.submit() {
                Ok(pending) => Action::Run(Task::perform(pending, Message::Uploaded)),
                Err(err) => {
                    debug!("Upload not sent: {}", err);
                    Action::None
                }
            },
            Message::Uploaded(completed) => {
                let task = match self.upload.apply_upload(completed) {
                    Some(timer) => Task::perform(timer, Message::ResetDue),
                    None => Task::none(),
                };
                if self.upload.draft().preview.is_none() {
                    self.preview = None;
                }
                Action::Uploaded(task)
            }
            Message::ResetDue(due) => {
                self.upload.apply_reset(due);
                Action::None
            }
            Message::Clear => {
                self.upload.clear();
                self.preview = None;
                Action::None
            }
        }
    }

    pub fn view(&self) -> Element<Message> {
        let draft = self.upload.draft();
        let editable = !draft.is_submitting();

        let header = Column::new()
            .spacing(8)
            .align_x(Alignment::Center)
            .push(Text::new(t!("upload.title")).size(28))
            .push(
                Text::new(t!("upload.subtitle"))
                    .size(14)
                    .style(Modern::secondary_text()),
            );

        let mut form = Column::new().spacing(20).padding(20);

        match draft.status {
            UploadStatus::Succeeded => {
                form = form.push(banner(
                    "circle-check",
                    t!("upload.success.title").to_string(),
                    t!("upload.success.subtitle").to_string(),
                    Modern::accent_container(),
                ));
            }
            UploadStatus::Failed => {
                form = form.push(banner(
                    "circle-xmark",
                    t!("upload.error.title").to_string(),
                    draft.error_message.clone().unwrap_or_default(),
                    Modern::floating_container(),
                ));
            }
            UploadStatus::Editing | UploadStatus::Submitting => {}
        }

        let file_label = match &draft.file {
            Some(file) => file.name.clone(),
            None => t!("upload.file.none").to_string(),
        };

        let picker = Column::new()
            .spacing(10)
            .push(Text::new(t!("upload.file.label")).size(14))
            .push(
                Row::new()
                    .spacing(12)
                    .align_y(Alignment::Center)
                    .push(
                        Button::new(
                            Row::new()
                                .spacing(8)
                                .align_y(Alignment::Center)
                                .push(fa_icon_solid("folder-open").size(16.0))
                                .push(Text::new(t!("upload.button.choose"))),
                        )
                        .style(Modern::secondary_button())
                        .padding([10, 16])
                        .on_press_maybe(editable.then_some(Message::PickFile)),
                    )
                    .push(Text::new(file_label).style(Modern::secondary_text())),
            );
        form = form.push(picker);

        let preview: Element<Message> = match &self.preview {
            Some(handle) => Image::new(handle.clone())
                .width(Length::Fill)
                .height(Length::Fixed(280.0))
                .into(),
            None => Container::new(fa_icon("image").size(64.0))
                .width(Length::Fill)
                .height(Length::Fixed(280.0))
                .align_x(Horizontal::Center)
                .align_y(Vertical::Center)
                .style(Modern::sheet_container())
                .into(),
        };
        form = form.push(preview);

        let mut caption = TextInput::new(t!("upload.caption.placeholder").as_ref(), &draft.caption)
            .style(Modern::text_input())
            .padding([10, 14]);
        let mut tags = TextInput::new(t!("upload.tags.placeholder").as_ref(), &draft.tags_raw)
            .style(Modern::text_input())
            .padding([10, 14]);
        if editable {
            caption = caption.on_input(Message::CaptionChanged);
            tags = tags.on_input(Message::TagsChanged);
        }

        form = form
            .push(
                Column::new()
                    .spacing(8)
                    .push(Text::new(t!("upload.caption.label")).size(14))
                    .push(caption),
            )
            .push(
                Column::new()
                    .spacing(8)
                    .push(Text::new(t!("upload.tags.label")).size(14))
                    .push(tags)
                    .push(
                        Text::new(t!("upload.tags.hint"))
                            .size(12)
                            .style(Modern::secondary_text()),
                    ),
            );

        let submit_label = if draft.is_submitting() {
            t!("upload.button.submitting")
        } else {
            t!("upload.button.submit")
        };

        let actions = Row::new()
            .spacing(15)
            .push(
                Button::new(
                    Text::new(submit_label)
                        .width(Length::Fill)
                        .align_x(Horizontal::Center),
                )
                .style(Modern::success_button())
                .width(Length::FillPortion(3))
                .padding([12, 20])
                .on_press_maybe(draft.can_submit().then_some(Message::Submit)),
            )
            .push(
                Button::new(
                    Text::new(t!("upload.button.clear"))
                        .width(Length::Fill)
                        .align_x(Horizontal::Center),
                )
                .style(Modern::secondary_button())
                .width(Length::FillPortion(1))
                .padding([12, 20])
                .on_press(Message::Clear),
            );
        form = form.push(actions);

        let content = Column::new()
            .spacing(20)
            .padding(10)
            .max_width(720)
            .push(
                Container::new(header)
                    .width(Length::Fill)
                    .align_x(Horizontal::Center),
            )
            .push(Container::new(form).style(Modern::card_container()));

        Scrollable::new(
            Container::new(content)
                .width(Length::Fill)
                .align_x(Horizontal::Center),
        )
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
    }
}

fn banner<'a>(
    icon: &'a str,
    title: String,
    message: String,
    style: impl Fn(&iced::Theme) -> iced::widget::container::Style + 'a,
) -> Element<'a, Message> {
    Container::new(
        Row::new()
            .spacing(12)
            .align_y(Alignment::Center)
            .push(fa_icon_solid(icon).size(24.0))
            .push(
                Column::new()
                    .spacing(4)
                    .push(Text::new(title).size(16))
                    .push(Text::new(message).size(14)),
            ),
    )
    .width(Length::Fill)
    .padding(16)
    .style(style)
    .into()
}
