//! Upload composition
//!
//! Validates a partner's draft, owns the preview object URL, and submits.

use crate::gateway::{FoodGateway, NewFood, VideoFile};
use crate::notify::{Notifier, Toast};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UploadError {
    #[error("Please select a video to upload.")]
    VideoRequired,

    #[error("Please select a video file.")]
    NotAVideo,

    #[error("Please give your dish a name.")]
    MissingName,

    #[error("Please describe your dish.")]
    MissingDescription,
}

impl UploadError {
    pub fn title(&self) -> &'static str {
        match self {
            UploadError::VideoRequired => "Video required",
            UploadError::NotAVideo => "Invalid file type",
            UploadError::MissingName | UploadError::MissingDescription => "Missing details",
        }
    }

    pub fn toast(&self) -> Toast {
        Toast::error(self.title(), self.to_string())
    }
}

pub fn is_video_mime(mime: &str) -> bool {
    mime.trim().to_ascii_lowercase().starts_with("video/")
}

/// Reject a picked file before it becomes the draft's video
pub fn check_selection(mime: &str) -> Result<(), UploadError> {
    if is_video_mime(mime) {
        Ok(())
    } else {
        Err(UploadError::NotAVideo)
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct UploadDraft {
    pub name: String,
    pub description: String,
    pub video: Option<VideoFile>,
}

impl UploadDraft {
    pub fn into_new_food(self) -> Result<NewFood, UploadError> {
        let video = self.video.ok_or(UploadError::VideoRequired)?;
        check_selection(&video.mime)?;
        if self.name.trim().is_empty() {
            return Err(UploadError::MissingName);
        }
        if self.description.trim().is_empty() {
            return Err(UploadError::MissingDescription);
        }
        Ok(NewFood {
            name: self.name.trim().to_string(),
            description: self.description.trim().to_string(),
            video,
        })
    }
}

/// Releases a locally created object URL
pub trait ReleaseUrl {
    fn release(&self, url: &str);
}

/// At most one live preview URL; the previous one is released on replace,
/// on clear, and when the slot is dropped.
#[derive(Debug, Default)]
pub struct PreviewSlot<R: ReleaseUrl> {
    current: Option<String>,
    releaser: R,
}

impl<R: ReleaseUrl> PreviewSlot<R> {
    pub fn new(releaser: R) -> Self {
        Self {
            current: None,
            releaser,
        }
    }

    pub fn url(&self) -> Option<&str> {
        self.current.as_deref()
    }

    pub fn replace(&mut self, url: String) {
        self.clear();
        self.current = Some(url);
    }

    pub fn clear(&mut self) {
        if let Some(url) = self.current.take() {
            log::debug!("[upload] releasing preview {}", url);
            self.releaser.release(&url);
        }
    }
}

impl<R: ReleaseUrl> Drop for PreviewSlot<R> {
    fn drop(&mut self) {
        self.clear();
    }
}

/// Validate and send. `true` once the backend accepted the reel.
pub async fn submit_upload<G: FoodGateway, N: Notifier>(
    gateway: &G,
    notifier: &N,
    draft: UploadDraft,
) -> bool {
    let upload = match draft.into_new_food() {
        Ok(upload) => upload,
        Err(e) => {
            notifier.notify(e.toast());
            return false;
        }
    };

    match gateway.upload_food(upload).await {
        Ok(()) => {
            notifier.notify(Toast::info(
                "Upload successful!",
                "Your food reel has been published.",
            ));
            true
        }
        Err(e) => {
            log::warn!("[upload] failed: {}", e);
            notifier.notify(Toast::error(
                "Upload failed",
                e.user_message().unwrap_or("Could not upload your food reel."),
            ));
            false
        }
    }
}
