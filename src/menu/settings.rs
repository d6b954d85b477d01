//! In-memory settings values. Nothing is persisted; every run starts from the defaults.

use crate::math::{Rect, normalized_offset};
use tracing::info;

pub const DEFAULT_VOLUME: u8 = 80;
pub const MAX_VOLUME: u8 = 100;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SettingsValues {
    music_on: bool,
    volume: u8,
    fullscreen: bool,
}

impl SettingsValues {
    pub fn new(fullscreen: bool) -> Self {
        Self {
            music_on: true,
            volume: DEFAULT_VOLUME,
            fullscreen,
        }
    }

    pub fn music_on(&self) -> bool {
        self.music_on
    }

    pub fn volume(&self) -> u8 {
        self.volume
    }

    pub fn fullscreen(&self) -> bool {
        self.fullscreen
    }

    /// Flips music on/off and returns the new state.
    pub fn toggle_music(&mut self) -> bool {
        self.music_on = !self.music_on;
        info!(music_on = self.music_on, "Music toggled");
        self.music_on
    }

    /// Sets the volume, saturating into `0..=100`.
    pub fn set_volume(&mut self, volume: i32) {
        self.volume = volume.clamp(0, i32::from(MAX_VOLUME)) as u8;
        info!(volume = self.volume, "Volume set");
    }

    /// Flips fullscreen and returns the new state.
    pub fn toggle_fullscreen(&mut self) -> bool {
        self.fullscreen = !self.fullscreen;
        info!(fullscreen = self.fullscreen, "Fullscreen toggled");
        self.fullscreen
    }
}

/// Volume for a pointer at horizontal position `x` over `track`: linear from the left edge (0) to
/// the right edge (100), truncated.
pub fn volume_at(x: f32, track: Rect) -> i32 {
    (normalized_offset(x, track.left(), track.width) * f32::from(MAX_VOLUME)) as i32
}
