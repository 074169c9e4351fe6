//! Integration tests for notice composition against a recording presenter

use ebifly_config::{ConfigDocument, Diagnostics, Effect, Error, Location, NoticeConfig};
use ebifly_test_utils::{PresentedCall, RecordingPresenter};
use pretty_assertions::assert_eq;

fn notice(source: &str) -> NoticeConfig {
    let document = ConfigDocument::from_yaml(source, "").unwrap();
    let mut diagnostics = Diagnostics::new();
    NoticeConfig::from_section(&document.root(), &mut diagnostics)
}

fn spawn() -> Location {
    Location::new("world", 12.5, 70.0, -3.0)
}

const BOTH: &str = "particle:\n  type: CLOUD\n  count: 5\nsound:\n  type: ENTITY_PHANTOM_FLAP\n";
const PARTICLE_ONLY: &str = "particle:\n  type: FLAME\n";
const SOUND_ONLY: &str = "sound:\n  type: UI_TOAST_IN\n  pitch: 0.5\n";

#[test]
fn test_merge_fires_particle_before_sound() {
    let presenter = RecordingPresenter::new();

    notice(BOTH).merge().invoke(&spawn(), &presenter).unwrap();

    assert_eq!(
        presenter.labels(),
        vec!["particle:CLOUD", "sound:ENTITY_PHANTOM_FLAP"]
    );
    for call in presenter.calls() {
        match call {
            PresentedCall::Particle { world, at, particle } => {
                assert_eq!(world, "world");
                assert_eq!(at, spawn());
                assert_eq!(particle.count, 5);
            }
            PresentedCall::Sound { world, at, .. } => {
                assert_eq!(world, "world");
                assert_eq!(at, spawn());
            }
        }
    }
}

#[test]
fn test_merge_with_only_sound() {
    let presenter = RecordingPresenter::new();

    notice(SOUND_ONLY).merge().invoke(&spawn(), &presenter).unwrap();

    assert_eq!(presenter.labels(), vec!["sound:UI_TOAST_IN"]);
}

#[test]
fn test_merge_with_nothing_is_silent() {
    let presenter = RecordingPresenter::new();
    let notice = notice("particle:\n  type: false\nsound:\n  type: null\n");

    assert_eq!(*notice.merge(), Effect::Disabled);
    notice.merge().invoke(&spawn(), &presenter).unwrap();

    assert_eq!(presenter.call_count(), 0);
}

#[test]
fn test_merge_is_computed_once() {
    let notice = notice(BOTH);
    let presenter = RecordingPresenter::new();

    let first = notice.merge();
    first.invoke(&spawn(), &presenter).unwrap();
    let second = notice.merge();
    second.invoke(&spawn(), &presenter).unwrap();

    assert!(std::ptr::eq(first, second));
    assert_eq!(presenter.call_count(), 4);
    assert_eq!(presenter.labels()[..2], presenter.labels()[2..]);
}

#[test]
fn test_merge_with_fallback_is_per_channel() {
    let timeout = notice(PARTICLE_ONLY);
    let disable = notice(SOUND_ONLY);
    let presenter = RecordingPresenter::new();

    timeout
        .merge_with(&disable)
        .invoke(&spawn(), &presenter)
        .unwrap();

    assert_eq!(presenter.labels(), vec!["particle:FLAME", "sound:UI_TOAST_IN"]);
}

#[test]
fn test_merge_with_prefers_own_channels() {
    let own = notice(BOTH);
    let fallback = notice("particle:\n  type: FLAME\nsound:\n  type: UI_TOAST_IN\n");

    assert_eq!(own.merge_with(&fallback), own.merge().clone());
}

#[test]
fn test_merge_with_both_disabled() {
    let empty = NoticeConfig::default();
    assert_eq!(empty.merge_with(&NoticeConfig::default()), Effect::Disabled);
}

#[test]
fn test_missing_world_aborts_only_that_invocation() {
    let notice = notice(BOTH);
    let presenter = RecordingPresenter::new();

    let result = notice.merge().invoke(&Location::detached(0.0, 0.0, 0.0), &presenter);
    assert!(matches!(result, Err(Error::MissingWorld)));
    assert_eq!(presenter.call_count(), 0);

    notice.merge().invoke(&spawn(), &presenter).unwrap();
    assert_eq!(presenter.call_count(), 2);
}
