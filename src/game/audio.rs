use kira::sound::static_sound::StaticSoundData;
use kira::{AudioManager, AudioManagerSettings, DefaultBackend};
use std::error::Error;
use std::path::Path;
use tracing::{info, warn};

/// Fire-and-forget sound played on every accepted hit.
pub struct ClickSound {
    audio_manager: AudioManager<DefaultBackend>,
    click_data: StaticSoundData,
}

impl ClickSound {
    /// Opens the default audio device and decodes `path`.
    pub fn new(path: &Path) -> Result<Self, Box<dyn Error>> {
        let audio_manager = AudioManager::<DefaultBackend>::new(AudioManagerSettings::default())?;
        let click_data = StaticSoundData::from_file(path)?;

        Ok(ClickSound {
            audio_manager,
            click_data,
        })
    }

    /// Like [`ClickSound::new`], but a missing file or audio device only costs the sound.
    pub fn load_optional(path: &Path) -> Option<Self> {
        match Self::new(path) {
            Ok(sound) => {
                info!(path = %path.display(), "Loaded click sound");
                Some(sound)
            }
            Err(e) => {
                warn!(path = %path.display(), error = %e, "Click sound unavailable, playing silently");
                None
            }
        }
    }

    pub fn play(&mut self) {
        if let Err(e) = self.audio_manager.play(self.click_data.clone()) {
            warn!(error = %e, "Failed to play click sound");
        }
    }
}
