//! Location-triggered notification effects
//!
//! An [`Effect`] is plain data: a particle burst, a sound, a sequence of
//! two effects, or nothing. [`Effect::invoke`] walks it and drives a
//! [`Presenter`], so composition can be inspected without a renderer.

use serde::Serialize;

use crate::kind::{Particle, Sound, SoundCategory};
use crate::{Error, Result};

/// A point in a world.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Location {
    /// `None` when the location is not bound to a loaded world
    pub world: Option<String>,
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Location {
    pub fn new(world: impl Into<String>, x: f64, y: f64, z: f64) -> Self {
        Self {
            world: Some(world.into()),
            x,
            y,
            z,
        }
    }

    /// A location with no world; invoking an active effect here fails.
    pub fn detached(x: f64, y: f64, z: f64) -> Self {
        Self {
            world: None,
            x,
            y,
            z,
        }
    }
}

/// Parameters for spawning a particle burst.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParticleEffect {
    pub kind: Particle,
    pub count: i32,
    pub extra: f64,
    pub offset_x: f64,
    pub offset_y: f64,
    pub offset_z: f64,
}

/// Parameters for playing a sound.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SoundEffect {
    pub kind: Sound,
    pub category: SoundCategory,
    pub volume: f32,
    pub pitch: f32,
}

/// The rendering side of an effect.
pub trait Presenter {
    fn spawn_particle(&self, world: &str, at: &Location, particle: &ParticleEffect);

    fn play_sound(&self, world: &str, at: &Location, sound: &SoundEffect);
}

/// A composable notification effect.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Effect {
    /// Does nothing; the identity for [`Effect::then`]
    #[default]
    Disabled,
    Particle(ParticleEffect),
    Sound(SoundEffect),
    /// Runs the first effect, then the second
    Sequence(Box<Effect>, Box<Effect>),
}

impl Effect {
    pub fn is_active(&self) -> bool {
        !matches!(self, Effect::Disabled)
    }

    /// Compose two effects so `self` fires before `next`.
    ///
    /// A disabled side is dropped, so two disabled effects stay disabled.
    pub fn then(self, next: Effect) -> Effect {
        match (self.is_active(), next.is_active()) {
            (true, true) => Effect::Sequence(Box::new(self), Box::new(next)),
            (true, false) => self,
            (false, _) => next,
        }
    }

    /// Trigger the effect at `at`.
    ///
    /// Fails with [`Error::MissingWorld`] before touching the presenter if
    /// an active effect is invoked at a location without a world.
    pub fn invoke(&self, at: &Location, presenter: &dyn Presenter) -> Result<()> {
        match self {
            Effect::Disabled => Ok(()),
            Effect::Particle(particle) => {
                presenter.spawn_particle(world_of(at)?, at, particle);
                Ok(())
            }
            Effect::Sound(sound) => {
                presenter.play_sound(world_of(at)?, at, sound);
                Ok(())
            }
            Effect::Sequence(first, second) => {
                first.invoke(at, presenter)?;
                second.invoke(at, presenter)
            }
        }
    }

    /// Number of presenter calls one invocation makes.
    pub fn len(&self) -> usize {
        match self {
            Effect::Disabled => 0,
            Effect::Particle(_) | Effect::Sound(_) => 1,
            Effect::Sequence(first, second) => first.len() + second.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn world_of(at: &Location) -> Result<&str> {
    at.world.as_deref().ok_or(Error::MissingWorld)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[derive(Default)]
    struct Calls(RefCell<Vec<String>>);

    impl Presenter for Calls {
        fn spawn_particle(&self, world: &str, _at: &Location, particle: &ParticleEffect) {
            self.0.borrow_mut().push(format!("{world}:{}", particle.kind));
        }

        fn play_sound(&self, world: &str, _at: &Location, sound: &SoundEffect) {
            self.0.borrow_mut().push(format!("{world}:{}", sound.kind));
        }
    }

    fn particle() -> Effect {
        Effect::Particle(ParticleEffect {
            kind: Particle::Cloud,
            count: 1,
            extra: 0.0,
            offset_x: 0.5,
            offset_y: 0.5,
            offset_z: 0.5,
        })
    }

    fn sound() -> Effect {
        Effect::Sound(SoundEffect {
            kind: Sound::EntityBatTakeoff,
            category: SoundCategory::Players,
            volume: 1.0,
            pitch: 1.0,
        })
    }

    #[test]
    fn test_then_identity() {
        assert_eq!(Effect::Disabled.then(particle()), particle());
        assert_eq!(particle().then(Effect::Disabled), particle());
        assert_eq!(Effect::Disabled.then(Effect::Disabled), Effect::Disabled);
    }

    #[test]
    fn test_then_sequences_in_order() {
        let calls = Calls::default();
        let at = Location::new("world", 0.0, 64.0, 0.0);

        particle().then(sound()).invoke(&at, &calls).unwrap();

        assert_eq!(
            *calls.0.borrow(),
            vec!["world:CLOUD", "world:ENTITY_BAT_TAKEOFF"]
        );
    }

    #[test]
    fn test_then_is_associative_in_behavior() {
        let at = Location::new("world", 0.0, 0.0, 0.0);
        let left = Calls::default();
        let right = Calls::default();

        particle()
            .then(sound())
            .then(particle())
            .invoke(&at, &left)
            .unwrap();
        particle()
            .then(sound().then(particle()))
            .invoke(&at, &right)
            .unwrap();

        assert_eq!(*left.0.borrow(), *right.0.borrow());
    }

    #[test]
    fn test_missing_world_fails_before_presenting() {
        let calls = Calls::default();
        let at = Location::detached(1.0, 2.0, 3.0);

        let result = particle().then(sound()).invoke(&at, &calls);

        assert!(matches!(result, Err(Error::MissingWorld)));
        assert!(calls.0.borrow().is_empty());
    }

    #[test]
    fn test_disabled_ignores_missing_world() {
        let calls = Calls::default();
        Effect::Disabled
            .invoke(&Location::detached(0.0, 0.0, 0.0), &calls)
            .unwrap();
        assert!(calls.0.borrow().is_empty());
    }

    #[test]
    fn test_len() {
        assert_eq!(Effect::Disabled.len(), 0);
        assert!(Effect::Disabled.is_empty());
        assert_eq!(particle().then(sound()).len(), 2);
    }
}
