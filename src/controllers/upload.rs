use crate::controllers::invalidation::InvalidationSender;
use crate::controllers::sequence::{RequestSequence, Ticket};
use crate::error::{ControllerError, ValidationError};
use crate::models::{FileRef, Image, PreviewDataUri, UploadDraft, UploadStatus};
use crate::services::api_client::{GalleryApi, UploadPayload};
use crate::services::preview_service::derive_preview;
use log::{debug, info, warn};
use std::future::Future;
use std::time::Duration;

/// How long the success confirmation stays up before the form is editable.
pub const SUCCESS_DISPLAY: Duration = Duration::from_secs(3);

#[derive(Debug, Clone)]
pub struct UploadCompleted {
    ticket: Ticket,
    result: Result<Image, ControllerError>,
}

#[derive(Debug, Clone)]
pub struct PreviewReady {
    ticket: Ticket,
    preview: Option<PreviewDataUri>,
}

/// The success display window has elapsed.
#[derive(Debug, Clone, Copy)]
pub struct ResetDue {
    ticket: Ticket,
}

/// Drives a single pending upload from draft to server record.
///
/// Three independent sequences guard the asynchronous edges: submissions,
/// preview rendering, and the success auto-reset timer. Bumping one makes
/// whatever is still in flight on that edge a no-op when it lands.
pub struct UploadController<A> {
    api: A,
    draft: UploadDraft,
    invalidations: InvalidationSender,
    success_display: Duration,
    submissions: RequestSequence,
    previews: RequestSequence,
    reset_timer: RequestSequence,
}

impl<A: GalleryApi> UploadController<A> {
    pub fn new(api: A, invalidations: InvalidationSender) -> Self {
        Self {
            api,
            draft: UploadDraft::default(),
            invalidations,
            success_display: SUCCESS_DISPLAY,
            submissions: RequestSequence::default(),
            previews: RequestSequence::default(),
            reset_timer: RequestSequence::default(),
        }
    }

    pub fn with_success_display(mut self, success_display: Duration) -> Self {
        self.success_display = success_display;
        self
    }

    pub fn draft(&self) -> &UploadDraft {
        &self.draft
    }

    /// Stores the selection and renders its preview in the background.
    /// A preview that cannot be rendered is simply left out.
    pub fn select_file(
        &mut self,
        file: FileRef,
    ) -> Result<impl Future<Output = PreviewReady> + Send + use<A>, ValidationError> {
        self.edited()?;
        self.draft.file = Some(file.clone());
        self.draft.preview = None;
        let ticket = self.previews.issue();

        Ok(async move {
            let preview = match derive_preview(file.path.clone()).await {
                Ok(preview) => Some(preview),
                Err(err) => {
                    debug!("No preview for {}: {}", file.path.display(), err);
                    None
                }
            };
            PreviewReady { ticket, preview }
        })
    }

    pub fn apply_preview(&mut self, ready: PreviewReady) -> bool {
        if !self.previews.is_current(ready.ticket) || self.draft.file.is_none() {
            return false;
        }
        self.draft.preview = ready.preview;
        true
    }

    pub fn set_caption(&mut self, caption: String) -> Result<(), ValidationError> {
        self.edited()?;
        self.draft.caption = caption;
        Ok(())
    }

    pub fn set_tags(&mut self, tags_raw: String) -> Result<(), ValidationError> {
        self.edited()?;
        self.draft.tags_raw = tags_raw;
        Ok(())
    }

    /// Starts the upload. Local precondition failures never hit the network;
    /// a missing file is also reported through the draft's failed state.
    pub fn submit(
        &mut self,
    ) -> Result<impl Future<Output = UploadCompleted> + Send + use<A>, ValidationError> {
        if self.draft.is_submitting() {
            return Err(ValidationError::SubmitInProgress);
        }

        let Some(file) = self.draft.file.clone() else {
            let err = ValidationError::MissingFile;
            self.draft.status = UploadStatus::Failed;
            self.draft.error_message = Some(err.to_string());
            return Err(err);
        };

        self.reset_timer.invalidate();
        let ticket = self.submissions.issue();
        self.draft.status = UploadStatus::Submitting;
        self.draft.error_message = None;
        info!("Uploading {} ({:?})", file.name, ticket);

        let api = self.api.clone();
        let caption = self.draft.caption.clone();
        let tags = self.draft.tags_raw.clone();

        Ok(async move {
            let result = match tokio::fs::read(&file.path).await {
                Ok(bytes) => {
                    let payload = UploadPayload {
                        file_name: file.name.clone(),
                        mime_type: file.mime_type().to_string(),
                        bytes,
                        caption,
                        tags,
                    };
                    api.upload(payload).await.map_err(ControllerError::from)
                }
                Err(err) => {
                    warn!("Could not read {}: {}", file.path.display(), err);
                    Err(ValidationError::UnreadableFile(file.name.clone()).into())
                }
            };
            UploadCompleted { ticket, result }
        })
    }

    /// Commits an upload outcome. On success returns the auto-reset timer,
    /// whose [`ResetDue`] goes back through [`UploadController::apply_reset`].
    ///
    /// A success always invalidates the feed, even when the draft was cleared
    /// meanwhile: the server-side collection changed either way.
    pub fn apply_upload(
        &mut self,
        completed: UploadCompleted,
    ) -> Option<impl Future<Output = ResetDue> + Send + use<A>> {
        if let Ok(image) = &completed.result {
            info!("Uploaded {} as {}", image.original_filename, image.id);
            self.invalidations.notify();
        }

        if !self.submissions.is_current(completed.ticket) {
            debug!("Discarding stale upload outcome ({:?})", completed.ticket);
            return None;
        }

        match completed.result {
            Ok(_) => {
                self.previews.invalidate();
                self.draft = UploadDraft {
                    status: UploadStatus::Succeeded,
                    ..UploadDraft::default()
                };

                let ticket = self.reset_timer.issue();
                let delay = self.success_display;
                Some(async move {
                    tokio::time::sleep(delay).await;
                    ResetDue { ticket }
                })
            }
            Err(err) => {
                warn!("Upload failed: {}", err);
                self.draft.status = UploadStatus::Failed;
                self.draft.error_message = Some(err.to_string());
                None
            }
        }
    }

    pub fn apply_reset(&mut self, due: ResetDue) -> bool {
        if !self.reset_timer.is_current(due.ticket) || self.draft.status != UploadStatus::Succeeded {
            return false;
        }
        self.draft.status = UploadStatus::Editing;
        true
    }

    /// Empties the form whatever its status; cancels the pending reset and
    /// detaches any in-flight upload or preview from the draft.
    pub fn clear(&mut self) {
        self.submissions.invalidate();
        self.previews.invalidate();
        self.reset_timer.invalidate();
        self.draft = UploadDraft::default();
    }

    /// Any input change dismisses a failure message. The fields are frozen
    /// while an upload is in flight so a failure keeps what was sent.
    fn edited(&mut self) -> Result<(), ValidationError> {
        match self.draft.status {
            UploadStatus::Submitting => Err(ValidationError::SubmitInProgress),
            UploadStatus::Failed => {
                self.draft.status = UploadStatus::Editing;
                self.draft.error_message = None;
                Ok(())
            }
            UploadStatus::Editing | UploadStatus::Succeeded => Ok(()),
        }
    }
}
