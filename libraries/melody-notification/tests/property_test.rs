//! Property-based tests for the presenter
//!
//! Uses proptest to check display invariants across random call sequences.

use melody_notification::{
    ActionTag, MemoryBackend, NotificationIcon, NotificationPresenter, PlaybackDisplayState,
    NOTIFICATION_ID,
};
use proptest::prelude::*;

// ===== Helpers =====

#[derive(Debug, Clone)]
enum Op {
    Show(String, String, bool),
    Update(Option<String>, Option<String>, Option<bool>),
    Hide,
}

fn arbitrary_text() -> impl Strategy<Value = String> {
    "[A-Za-z0-9 ]{0,24}"
}

fn arbitrary_op() -> impl Strategy<Value = Op> {
    prop_oneof![
        (arbitrary_text(), arbitrary_text(), any::<bool>())
            .prop_map(|(t, a, p)| Op::Show(t, a, p)),
        (
            proptest::option::of(arbitrary_text()),
            proptest::option::of(arbitrary_text()),
            proptest::option::of(any::<bool>()),
        )
            .prop_map(|(t, a, p)| Op::Update(t, a, p)),
        Just(Op::Hide),
    ]
}

/// Reference model: what should be on screen after each op
fn apply(model: &mut Option<PlaybackDisplayState>, op: &Op) {
    match op {
        Op::Show(t, a, p) => *model = Some(PlaybackDisplayState::new(t.clone(), a.clone(), *p)),
        Op::Update(t, a, p) => {
            if let Some(state) = model.as_mut() {
                if let Some(t) = t {
                    state.title = t.clone();
                }
                if let Some(a) = a {
                    state.artist = a.clone();
                }
                if let Some(p) = p {
                    state.is_playing = *p;
                }
            }
        }
        Op::Hide => *model = None,
    }
}

fn run(p: &mut NotificationPresenter<MemoryBackend>, op: &Op) {
    match op.clone() {
        Op::Show(t, a, playing) => p.show(t, a, playing),
        Op::Update(t, a, playing) => p.update(t, a, playing),
        Op::Hide => p.hide(),
    }
}

// ===== Property Tests =====

proptest! {
    /// Property: show followed by read-back yields exactly the inputs
    #[test]
    fn show_reads_back_inputs(
        title in arbitrary_text(),
        artist in arbitrary_text(),
        playing in any::<bool>()
    ) {
        let mut p = NotificationPresenter::new(MemoryBackend::new());
        p.show(title.clone(), artist.clone(), playing);

        let posted = p.backend().get(NOTIFICATION_ID).unwrap();
        prop_assert_eq!(posted.display_state(), PlaybackDisplayState::new(title, artist, playing));
    }

    /// Property: the displayed notification always matches the reference model
    #[test]
    fn display_matches_model(ops in prop::collection::vec(arbitrary_op(), 1..40)) {
        let mut p = NotificationPresenter::new(MemoryBackend::new());
        let mut model = None;

        for op in &ops {
            run(&mut p, op);
            apply(&mut model, op);

            prop_assert_eq!(p.state().cloned(), model.clone());
            prop_assert_eq!(
                p.backend().get(NOTIFICATION_ID).map(|n| n.display_state()),
                model.clone()
            );
            prop_assert!(p.backend().live_count() <= 1);
        }
    }

    /// Property: controls always reflect the playing flag
    #[test]
    fn controls_track_playing_flag(ops in prop::collection::vec(arbitrary_op(), 1..40)) {
        let mut p = NotificationPresenter::new(MemoryBackend::new());

        for op in &ops {
            run(&mut p, op);

            if let Some(posted) = p.rendered() {
                let tags: Vec<_> = posted.actions.iter().map(|a| a.tag()).collect();
                prop_assert_eq!(tags, vec![ActionTag::Previous, ActionTag::PlayPause, ActionTag::Next]);

                let expected = if posted.ongoing { NotificationIcon::Pause } else { NotificationIcon::Play };
                prop_assert_eq!(posted.play_pause_action().map(|a| a.icon()), Some(expected));
            }
        }
    }
}
