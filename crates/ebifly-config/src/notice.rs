//! Per-occasion notification effects and their composition
//!
//! Each occasion (flight enabled, disabled, timed out, paid) configures an
//! optional particle and an optional sound:
//!
//! ```yaml
//! enable:
//!   particle:
//!     type: CLOUD
//!     count: 20
//!     extra: 0.0
//!     offset: 0.5        # or offset: {x: 0.5, y: 0.5, z: 0.5}
//!   sound:
//!     type: ENTITY_ENDER_DRAGON_FLAP
//!     volume: 1.0
//!     pitch: 1.0
//! ```

use std::sync::OnceLock;

use serde::Serialize;

use crate::diagnostics::Diagnostics;
use crate::document::Section;
use crate::effect::{Effect, ParticleEffect, SoundEffect};
use crate::kind::{Particle, Sound, SoundCategory, resolve_kind};

const DEFAULT_OFFSET: f64 = 0.5;

/// The particle and sound for one notification occasion.
#[derive(Debug, Clone, Default, Serialize)]
pub struct NoticeConfig {
    pub particle: Effect,
    pub sound: Effect,
    #[serde(skip)]
    merged: OnceLock<Effect>,
}

impl NoticeConfig {
    pub fn new(particle: Effect, sound: Effect) -> Self {
        Self {
            particle,
            sound,
            merged: OnceLock::new(),
        }
    }

    /// Build both channels from an occasion's section.
    ///
    /// Unknown kinds are reported and disable only their own channel.
    pub fn from_section(section: &Section<'_>, diagnostics: &mut Diagnostics) -> Self {
        let particle = match resolve_kind::<Particle>(section, "particle", diagnostics) {
            Some(kind) => Effect::Particle(read_particle(section, kind, diagnostics)),
            None => Effect::Disabled,
        };

        let sound = match resolve_kind::<Sound>(section, "sound", diagnostics) {
            Some(kind) => Effect::Sound(SoundEffect {
                kind,
                category: SoundCategory::Players,
                volume: section.get_double_or("sound.volume", 1.0) as f32,
                pitch: section.get_double_or("sound.pitch", 1.0) as f32,
            }),
            None => Effect::Disabled,
        };

        Self::new(particle, sound)
    }

    /// Particle then sound, computed on first use and cached.
    pub fn merge(&self) -> &Effect {
        self.merged
            .get_or_init(|| self.particle.clone().then(self.sound.clone()))
    }

    /// Like [`merge`](Self::merge), but each disabled channel is taken from
    /// `fallback`.
    pub fn merge_with(&self, fallback: &NoticeConfig) -> Effect {
        let particle = pick(&self.particle, &fallback.particle);
        let sound = pick(&self.sound, &fallback.sound);
        particle.clone().then(sound.clone())
    }

    /// True when neither channel does anything.
    pub fn is_disabled(&self) -> bool {
        !self.particle.is_active() && !self.sound.is_active()
    }
}

impl PartialEq for NoticeConfig {
    fn eq(&self, other: &Self) -> bool {
        self.particle == other.particle && self.sound == other.sound
    }
}

fn pick<'a>(primary: &'a Effect, fallback: &'a Effect) -> &'a Effect {
    if primary.is_active() { primary } else { fallback }
}

fn read_particle(
    section: &Section<'_>,
    kind: Particle,
    diagnostics: &mut Diagnostics,
) -> ParticleEffect {
    let (offset_x, offset_y, offset_z) = if section.is_number("particle.offset") {
        let offset = section.get_double_or("particle.offset", DEFAULT_OFFSET);
        (offset, offset, offset)
    } else {
        (
            section.get_double_or("particle.offset.x", DEFAULT_OFFSET),
            section.get_double_or("particle.offset.y", DEFAULT_OFFSET),
            section.get_double_or("particle.offset.z", DEFAULT_OFFSET),
        )
    };

    ParticleEffect {
        kind,
        count: particle_count(section, diagnostics),
        extra: section.get_double_or("particle.extra", 0.0),
        offset_x,
        offset_y,
        offset_z,
    }
}

fn particle_count(section: &Section<'_>, diagnostics: &mut Diagnostics) -> i32 {
    let key = section.full_path("particle.count");
    let count = section.get_int_or("particle.count", 1);
    let max = i64::from(i32::MAX);

    if count > max {
        diagnostics.severe(
            Some(&key),
            format!("{} is greater than {} in config.yml", key, max),
        );
        diagnostics.severe(Some(&key), format!("Using {}", max));
    } else if count < 0 {
        diagnostics.severe(Some(&key), format!("{} is less than 0 in config.yml", key));
        diagnostics.severe(Some(&key), "Using 0");
    }

    count.clamp(0, max) as i32
}
