//! A [`Presenter`] test double that records every call in order.

use std::cell::RefCell;

use ebifly_config::{Location, ParticleEffect, Presenter, SoundEffect};

/// One call made against a [`RecordingPresenter`].
#[derive(Debug, Clone, PartialEq)]
pub enum PresentedCall {
    Particle {
        world: String,
        at: Location,
        particle: ParticleEffect,
    },
    Sound {
        world: String,
        at: Location,
        sound: SoundEffect,
    },
}

/// Records particle and sound calls instead of rendering them.
#[derive(Debug, Default)]
pub struct RecordingPresenter {
    calls: RefCell<Vec<PresentedCall>>,
}

impl RecordingPresenter {
    pub fn new() -> Self {
        Self::default()
    }

    /// All calls so far, oldest first.
    pub fn calls(&self) -> Vec<PresentedCall> {
        self.calls.borrow().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.borrow().len()
    }

    /// Short labels like `particle:CLOUD` or `sound:UI_TOAST_IN`, in order.
    pub fn labels(&self) -> Vec<String> {
        self.calls
            .borrow()
            .iter()
            .map(|call| match call {
                PresentedCall::Particle { particle, .. } => format!("particle:{}", particle.kind),
                PresentedCall::Sound { sound, .. } => format!("sound:{}", sound.kind),
            })
            .collect()
    }
}

impl Presenter for RecordingPresenter {
    fn spawn_particle(&self, world: &str, at: &Location, particle: &ParticleEffect) {
        self.calls.borrow_mut().push(PresentedCall::Particle {
            world: world.to_string(),
            at: at.clone(),
            particle: particle.clone(),
        });
    }

    fn play_sound(&self, world: &str, at: &Location, sound: &SoundEffect) {
        self.calls.borrow_mut().push(PresentedCall::Sound {
            world: world.to_string(),
            at: at.clone(),
            sound: sound.clone(),
        });
    }
}
