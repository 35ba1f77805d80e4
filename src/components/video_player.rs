//! Reel Video Player
//!
//! Plays while its reel is active, stops and rewinds otherwise. Starts muted
//! and loops. Tap toggles play; the corner button toggles sound.

use leptos::html::Video;
use leptos::prelude::*;
use reels_core::playback::PlayerState;

use crate::commands::media;

#[component]
pub fn VideoPlayer(#[prop(into)] src: String, is_active: Signal<bool>) -> impl IntoView {
    let video_ref = NodeRef::<Video>::new();
    let player = RwSignal::new(PlayerState::default());

    let blocked = move || {
        player.try_update(|p| p.autoplay_blocked());
    };

    // Drive the element from the active index
    Effect::new(move |_| {
        let active = is_active.get();
        let Some(video) = video_ref.get() else {
            return;
        };
        video.set_loop(true);
        if let Some(command) = player.try_update(|p| p.on_activation(active)) {
            media::run_playback(&video, command, blocked);
        }
    });

    let on_tap = move |_| {
        let Some(video) = video_ref.get_untracked() else {
            return;
        };
        if let Some(command) = player.try_update(|p| p.toggle_play()) {
            media::run_playback(&video, command, blocked);
        }
    };

    let on_mute = move |ev: web_sys::MouseEvent| {
        ev.stop_propagation();
        player.update(|p| {
            p.toggle_mute();
        });
    };

    let playing = move || player.with(|p| p.playing);
    let muted = move || player.with(|p| p.muted);

    view! {
        <div class="video-player" on:click=on_tap>
            <video
                node_ref=video_ref
                class="video"
                src=src
                playsinline=true
                preload="auto"
                prop:muted=muted
            ></video>
            <div class="play-indicator" class:hidden=playing>"▶"</div>
            <button class="mute-button" on:click=on_mute>
                {move || if muted() { "🔇" } else { "🔊" }}
            </button>
        </div>
    }
}
