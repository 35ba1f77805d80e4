//! Media Helpers
//!
//! Video element control, object URLs, and reading picked files.

use leptos::task::spawn_local;
use reels_core::gateway::VideoFile;
use reels_core::playback::PlaybackCommand;
use reels_core::upload::ReleaseUrl;
use wasm_bindgen_futures::JsFuture;
use web_sys::{File, HtmlVideoElement};

/// Apply a playback decision to a video element. `on_blocked` runs when the
/// browser refuses to start playback.
pub fn run_playback(
    video: &HtmlVideoElement,
    command: PlaybackCommand,
    on_blocked: impl FnOnce() + 'static,
) {
    match command {
        PlaybackCommand::Play => match video.play() {
            Ok(promise) => spawn_local(async move {
                if let Err(e) = JsFuture::from(promise).await {
                    log::warn!("[video] play rejected: {:?}", e);
                    on_blocked();
                }
            }),
            Err(e) => {
                log::warn!("[video] play failed: {:?}", e);
                on_blocked();
            }
        },
        PlaybackCommand::Pause => {
            let _ = video.pause();
        }
        PlaybackCommand::PauseAndRewind => {
            let _ = video.pause();
            video.set_current_time(0.0);
        }
    }
}

pub fn create_object_url(file: &File) -> Option<String> {
    match web_sys::Url::create_object_url_with_blob(file) {
        Ok(url) => Some(url),
        Err(e) => {
            log::warn!("[media] object url failed: {:?}", e);
            None
        }
    }
}

/// Revokes object URLs created in this document
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserUrls;

impl ReleaseUrl for BrowserUrls {
    fn release(&self, url: &str) {
        if let Err(e) = web_sys::Url::revoke_object_url(url) {
            log::warn!("[media] revoke {} failed: {:?}", url, e);
        }
    }
}

/// Read a picked file into memory for the multipart upload
pub async fn read_video_file(file: &File) -> Result<VideoFile, String> {
    let buffer = JsFuture::from(file.array_buffer())
        .await
        .map_err(|e| format!("{:?}", e))?;
    let bytes = js_sys::Uint8Array::new(&buffer).to_vec();
    Ok(VideoFile {
        file_name: file.name(),
        mime: file.type_(),
        bytes,
    })
}
