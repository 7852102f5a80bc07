//! Audio playback surface.
//!
//! Playback never feeds back into presentation state: every failure is
//! swallowed. The web build drives two `<audio>` elements; native builds have
//! no audio backend and only log what would have played.

use crate::domain::presentation::AudioConfig;

#[cfg(debug_assertions)]
use crate::config::DEBUG_FLAGS;

pub trait AudioSurface {
    /// Points the cue and the music at new sources (no-op when unchanged).
    fn set_sources(&mut self, audio: &AudioConfig);
    /// Restarts the slide cue from the beginning.
    fn play_cue(&mut self);
    /// Starts the background music looping at `volume` (0.0..=1.0).
    fn start_music(&mut self, volume: f64);
    fn pause_music(&mut self);
    fn set_muted(&mut self, muted: bool);
}

/// The surface for the current target
pub fn default_surface() -> Box<dyn AudioSurface> {
    #[cfg(target_arch = "wasm32")]
    {
        Box::new(web::WebAudio::default())
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        Box::new(LoggingAudio::default())
    }
}

/// Records calls instead of playing anything.
#[derive(Debug, Default, Clone)]
pub struct LoggingAudio {
    pub sources: Option<AudioConfig>,
    pub cues_played: usize,
    pub music_playing: bool,
    pub volume: f64,
    pub muted: bool,
}

impl AudioSurface for LoggingAudio {
    fn set_sources(&mut self, audio: &AudioConfig) {
        if self.sources.as_ref() != Some(audio) {
            self.sources = Some(audio.clone());
        }
    }

    fn play_cue(&mut self) {
        self.cues_played += 1;
        #[cfg(debug_assertions)]
        if DEBUG_FLAGS.print_audio {
            let src = self.sources.as_ref().map(|s| s.slide_sound.as_str()).unwrap_or("");
            log::info!("[audio] cue {}", src);
        }
    }

    fn start_music(&mut self, volume: f64) {
        self.music_playing = true;
        self.volume = volume;
        #[cfg(debug_assertions)]
        if DEBUG_FLAGS.print_audio {
            let src = self.sources.as_ref().map(|s| s.bg_music.as_str()).unwrap_or("");
            log::info!("[audio] music {} at volume {:.2}", src, volume);
        }
    }

    fn pause_music(&mut self) {
        self.music_playing = false;
    }

    fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
        #[cfg(debug_assertions)]
        if DEBUG_FLAGS.print_audio {
            log::info!("[audio] muted = {}", muted);
        }
    }
}

#[cfg(target_arch = "wasm32")]
mod web {
    use web_sys::HtmlAudioElement;

    use super::AudioSurface;
    use crate::domain::presentation::AudioConfig;

    #[derive(Default)]
    pub struct WebAudio {
        cue: Option<HtmlAudioElement>,
        music: Option<HtmlAudioElement>,
        cue_src: String,
        music_src: String,
        muted: bool,
    }

    fn element(src: &str) -> Option<HtmlAudioElement> {
        HtmlAudioElement::new_with_src(src).ok()
    }

    impl AudioSurface for WebAudio {
        fn set_sources(&mut self, audio: &AudioConfig) {
            if self.cue.is_none() || self.cue_src != audio.slide_sound {
                self.cue = element(&audio.slide_sound);
                self.cue_src = audio.slide_sound.clone();
            }
            if self.music.is_none() || self.music_src != audio.bg_music {
                match self.music.as_ref() {
                    // Keep the element (and its playback state); swap only the source
                    Some(music) => music.set_src(&audio.bg_music),
                    None => {
                        self.music = element(&audio.bg_music);
                        if let Some(music) = &self.music {
                            music.set_loop(true);
                            music.set_muted(self.muted);
                        }
                    }
                }
                self.music_src = audio.bg_music.clone();
            }
        }

        fn play_cue(&mut self) {
            if let Some(cue) = &self.cue {
                cue.set_current_time(0.0);
                // Rejected playback (autoplay policy, broken url) is ignored
                let _ = cue.play();
            }
        }

        fn start_music(&mut self, volume: f64) {
            if let Some(music) = &self.music {
                music.set_volume(volume);
                let _ = music.play();
            }
        }

        fn pause_music(&mut self) {
            if let Some(music) = &self.music {
                let _ = music.pause();
            }
        }

        fn set_muted(&mut self, muted: bool) {
            self.muted = muted;
            if let Some(music) = &self.music {
                music.set_muted(muted);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn logging_surface_tracks_calls() {
        let mut audio = LoggingAudio::default();
        audio.set_sources(&AudioConfig::default());
        audio.play_cue();
        audio.play_cue();
        audio.start_music(0.35);
        audio.set_muted(true);

        assert_eq!(audio.cues_played, 2);
        assert!(audio.music_playing);
        assert_eq!(audio.volume, 0.35);
        assert!(audio.muted);
        assert_eq!(audio.sources, Some(AudioConfig::default()));

        audio.pause_music();
        assert!(!audio.music_playing);
    }
}
