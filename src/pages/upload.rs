//! Partner Upload
//!
//! Pick a video, preview it locally, name and describe it, publish.

use leptos::html::Input;
use leptos::prelude::*;
use leptos::task::spawn_local;
use reels_core::upload::{self, PreviewSlot, UploadDraft};
use reels_core::gateway::VideoFile;
use reels_core::Route;

use crate::commands::{self, media};
use crate::commands::media::BrowserUrls;
use crate::components::Layout;
use crate::context::use_app_context;

#[component]
pub fn PartnerUpload() -> impl IntoView {
    let ctx = use_app_context();
    let file_input = NodeRef::<Input>::new();

    let name = RwSignal::new(String::new());
    let description = RwSignal::new(String::new());
    let video = RwSignal::new(None::<VideoFile>);
    let preview = RwSignal::new(PreviewSlot::new(BrowserUrls));
    let preview_url = move || preview.with(|slot| slot.url().map(str::to_string));
    // Bumped on every pick so a slow read can't overwrite a newer choice
    let selection = RwSignal::new(0u32);
    let uploading = RwSignal::new(false);

    on_cleanup(move || {
        preview.try_update(|slot| slot.clear());
    });

    let on_file_change = move |_| {
        let Some(file) = file_input
            .get_untracked()
            .and_then(|input| input.files())
            .and_then(|files| files.get(0))
        else {
            return;
        };
        if let Err(e) = upload::check_selection(&file.type_()) {
            ctx.notify(e.toast());
            return;
        }
        let Some(url) = media::create_object_url(&file) else {
            return;
        };
        preview.update(|slot| slot.replace(url));
        video.set(None);
        selection.update(|n| *n += 1);
        let ticket = selection.get_untracked();

        spawn_local(async move {
            match media::read_video_file(&file).await {
                Ok(read) if selection.try_get_untracked() == Some(ticket) => {
                    log::debug!("[upload] read {} bytes of {}", read.bytes.len(), read.file_name);
                    video.set(Some(read));
                }
                Ok(_) => {}
                Err(e) => log::warn!("[upload] could not read {}: {}", file.name(), e),
            }
        });
    };

    let remove_video = move |_| {
        selection.update(|n| *n += 1);
        video.set(None);
        preview.update(|slot| slot.clear());
        if let Some(input) = file_input.get_untracked() {
            input.set_value("");
        }
    };

    let pick_file = move |_| {
        if let Some(input) = file_input.get_untracked() {
            input.click();
        }
    };

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if uploading.get_untracked() {
            return;
        }
        let draft = UploadDraft {
            name: name.get_untracked(),
            description: description.get_untracked(),
            video: video.get_untracked(),
        };
        uploading.set(true);
        spawn_local(async move {
            let published = upload::submit_upload(&commands::api(), &ctx.notifier(), draft).await;
            uploading.try_set(false);
            if published {
                ctx.navigate(Route::PartnerDashboard);
            }
        });
    };

    let back = move |ev: web_sys::MouseEvent| {
        ev.prevent_default();
        ctx.navigate(Route::PartnerDashboard);
    };

    view! {
        <Layout>
            <div class="upload-page">
                <a class="back-link" href="/partner/dashboard" on:click=back>"← Back to Dashboard"</a>
                <h1>"Upload Food Reel"</h1>
                <p class="muted">"Share your delicious creation with food lovers"</p>

                <form class="upload-form" on:submit=on_submit>
                    <span class="field-label">"Video"</span>
                    {move || match preview_url() {
                        Some(url) => view! {
                            <div class="upload-preview">
                                <video src=url controls=true preload="metadata"></video>
                                <button type="button" class="upload-remove" on:click=remove_video>"✕"</button>
                            </div>
                        }
                        .into_any(),
                        None => view! {
                            <div class="upload-drop" on:click=pick_file>
                                <p>"Click to upload video"</p>
                                <p class="muted">"MP4, MOV, or WebM"</p>
                            </div>
                        }
                        .into_any(),
                    }}
                    <input
                        node_ref=file_input
                        class="hidden"
                        type="file"
                        accept="video/*"
                        on:change=on_file_change
                    />

                    <label class="field">
                        <span class="field-label">"Food Name"</span>
                        <input
                            class="field-input"
                            type="text"
                            placeholder="e.g., Spicy Korean Ramen"
                            prop:value=move || name.get()
                            on:input=move |ev| name.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="field">
                        <span class="field-label">"Description"</span>
                        <textarea
                            class="field-input"
                            rows="4"
                            placeholder="Tell food lovers what makes this dish special..."
                            prop:value=move || description.get()
                            on:input=move |ev| description.set(event_target_value(&ev))
                        ></textarea>
                    </label>

                    <button class="button primary" type="submit" disabled=move || uploading.get()>
                        {move || if uploading.get() { "Uploading..." } else { "Publish Reel" }}
                    </button>
                </form>
            </div>
        </Layout>
    }
}
