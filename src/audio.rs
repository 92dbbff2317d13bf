//! Sound cues for game events
//!
//! The simulation never plays audio itself. This module turns the events of
//! a tick into fire-and-forget cues (sample file plus gain) for whatever
//! mixer the front end uses. Each cue also carries a simple tone so a mixer
//! without the sample files can still make a sound.

use crate::settings::Settings;
use crate::sim::GameEvent;

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundEffect {
    /// Player leaves the plane
    Jump,
    /// Canopy opens
    ParachuteOpen,
    /// Obstacle hit or hard landing
    Crash,
    /// Safe touchdown
    Landing,
    /// Wind changes direction
    Wind,
    /// Looping background track
    Music,
}

/// Fallback waveform
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tone {
    /// Frequency in Hz
    pub frequency: f32,
    /// Duration in seconds
    pub duration: f32,
}

impl SoundEffect {
    /// Sample file name inside the sounds directory
    pub fn file_name(&self) -> &'static str {
        match self {
            SoundEffect::Jump => "jump.wav",
            SoundEffect::ParachuteOpen => "parachute_open.wav",
            SoundEffect::Crash => "crash.wav",
            SoundEffect::Landing => "landing.wav",
            SoundEffect::Wind => "wind.wav",
            SoundEffect::Music => "background.wav",
        }
    }

    pub fn tone(&self) -> Tone {
        let (frequency, duration) = match self {
            SoundEffect::Jump => (400.0, 0.2),
            SoundEffect::ParachuteOpen => (300.0, 0.5),
            SoundEffect::Crash => (100.0, 0.8),
            SoundEffect::Landing => (500.0, 0.3),
            SoundEffect::Wind => (200.0, 1.0),
            SoundEffect::Music => (350.0, 3.0),
        };
        Tone {
            frequency,
            duration,
        }
    }

    /// Effect for a simulation event
    pub fn for_event(event: &GameEvent) -> Self {
        match event {
            GameEvent::Jump => SoundEffect::Jump,
            GameEvent::ParachuteDeployed { .. } => SoundEffect::ParachuteOpen,
            GameEvent::Crash { .. } => SoundEffect::Crash,
            GameEvent::SafeLanding { .. } => SoundEffect::Landing,
            GameEvent::WindChanged { .. } => SoundEffect::Wind,
        }
    }
}

/// A request for the mixer to play something once (or loop, for music)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SoundCue {
    pub effect: SoundEffect,
    pub gain: f32,
    pub looping: bool,
}

impl SoundCue {
    pub fn file_name(&self) -> &'static str {
        self.effect.file_name()
    }
}

/// Audio cue mixer for the game
#[derive(Debug, Clone)]
pub struct AudioManager {
    sfx_gain: f32,
    music_gain: f32,
}

impl AudioManager {
    pub fn new(settings: &Settings) -> Self {
        Self {
            sfx_gain: settings.effective_sfx_gain(),
            music_gain: settings.effective_music_gain(),
        }
    }

    /// Pick up changed volume or mute settings
    pub fn apply_settings(&mut self, settings: &Settings) {
        *self = Self::new(settings);
    }

    /// Cues for the events of one tick. Silent when muted.
    pub fn cues(&self, events: &[GameEvent]) -> Vec<SoundCue> {
        if self.sfx_gain <= 0.0 {
            return Vec::new();
        }
        events
            .iter()
            .map(|event| SoundCue {
                effect: SoundEffect::for_event(event),
                gain: self.sfx_gain,
                looping: false,
            })
            .collect()
    }

    /// Background track cue, if music is audible
    pub fn music(&self) -> Option<SoundCue> {
        (self.music_gain > 0.0).then_some(SoundCue {
            effect: SoundEffect::Music,
            gain: self.music_gain,
            looping: true,
        })
    }
}
