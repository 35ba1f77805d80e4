//! Per-reel playback decisions driven by the active index.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackCommand {
    /// Try to start; the runtime may refuse autoplay
    Play,
    /// Stop and seek back to 0
    PauseAndRewind,
    Pause,
}

/// What one video element should be doing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayerState {
    pub playing: bool,
    pub muted: bool,
}

impl Default for PlayerState {
    fn default() -> Self {
        Self {
            playing: false,
            muted: true,
        }
    }
}

impl PlayerState {
    /// The active reel plays, every other reel stops and rewinds
    pub fn on_activation(&mut self, active: bool) -> PlaybackCommand {
        self.playing = active;
        if active {
            PlaybackCommand::Play
        } else {
            PlaybackCommand::PauseAndRewind
        }
    }

    /// Autoplay was rejected; stay paused until the viewer taps
    pub fn autoplay_blocked(&mut self) {
        self.playing = false;
    }

    /// Viewer tapped the video
    pub fn toggle_play(&mut self) -> PlaybackCommand {
        self.playing = !self.playing;
        if self.playing {
            PlaybackCommand::Play
        } else {
            PlaybackCommand::Pause
        }
    }

    /// Returns the new muted flag
    pub fn toggle_mute(&mut self) -> bool {
        self.muted = !self.muted;
        self.muted
    }
}
