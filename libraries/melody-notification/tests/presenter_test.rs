//! Integration tests for the notification presenter
//!
//! Each test drives the presenter through the in-memory backend and checks
//! what the OS would actually display.

use melody_notification::{
    ActionTag, MemoryBackend, NotificationIcon, NotificationPresenter, PlaybackDisplayState,
    Visibility, NOTIFICATION_ID,
};

// ===== Test Helpers =====

fn presenter() -> NotificationPresenter<MemoryBackend> {
    NotificationPresenter::new(MemoryBackend::new())
}

fn displayed(p: &NotificationPresenter<MemoryBackend>) -> Option<PlaybackDisplayState> {
    p.backend().get(NOTIFICATION_ID).map(|n| n.display_state())
}

fn control_tags(p: &NotificationPresenter<MemoryBackend>) -> Vec<ActionTag> {
    p.backend()
        .get(NOTIFICATION_ID)
        .map(|n| n.actions.iter().map(|a| a.tag()).collect())
        .unwrap_or_default()
}

// ===== Show =====

#[test]
fn show_renders_requested_state() {
    let mut p = presenter();
    p.show("Blue in Green", "Miles Davis", false);

    assert_eq!(
        displayed(&p),
        Some(PlaybackDisplayState::new("Blue in Green", "Miles Davis", false))
    );
    let posted = p.backend().get(NOTIFICATION_ID).unwrap();
    assert_eq!(posted.visibility, Visibility::Public);
    assert_eq!(posted.compact_actions, vec![0, 1, 2]);
    assert_eq!(posted.small_icon, NotificationIcon::Play);
}

#[test]
fn controls_are_previous_play_pause_next() {
    let mut p = presenter();
    p.show("Song", "Artist", true);

    assert_eq!(
        control_tags(&p),
        vec![ActionTag::Previous, ActionTag::PlayPause, ActionTag::Next]
    );
}

#[test]
fn ongoing_only_while_playing() {
    let mut p = presenter();
    p.show("Song", "Artist", true);
    assert!(p.rendered().unwrap().ongoing);

    p.show("Song", "Artist", false);
    assert!(!p.rendered().unwrap().ongoing);
}

#[test]
fn second_show_replaces_without_merging() {
    let mut p = presenter();
    p.show("A", "B", true);
    p.show("C", "D", false);

    assert_eq!(displayed(&p), Some(PlaybackDisplayState::new("C", "D", false)));
    assert_eq!(p.backend().live_count(), 1);
    assert_eq!(p.backend().notify_calls(), 2);
}

// ===== Update =====

#[test]
fn update_with_nothing_keeps_rendered_state() {
    let mut p = presenter();
    p.show("Song", "Artist", true);
    let before = p.rendered();

    p.update(None, None, None);

    assert_eq!(p.rendered(), before);
    assert_eq!(p.backend().get(NOTIFICATION_ID).cloned(), before);
}

#[test]
fn update_merges_supplied_fields() {
    let mut p = presenter();
    p.show("Song", "Artist", true);
    p.update(Some("Next Song".to_string()), None, None);

    assert_eq!(
        displayed(&p),
        Some(PlaybackDisplayState::new("Next Song", "Artist", true))
    );
}

#[test]
fn update_playing_flips_control_and_ongoing() {
    let mut p = presenter();
    p.show("Song", "Artist", false);
    p.update(None, None, Some(true));

    let posted = p.backend().get(NOTIFICATION_ID).unwrap();
    assert!(posted.ongoing);
    let play_pause = posted.play_pause_action().unwrap();
    assert_eq!(play_pause.icon(), NotificationIcon::Pause);
    assert_eq!(play_pause.label(), "Pause");
    assert_eq!(posted.title, "Song");
    assert_eq!(posted.artist, "Artist");
    assert_eq!(posted.actions.len(), 3);
}

// ===== Hide =====

#[test]
fn hide_removes_notification() {
    let mut p = presenter();
    p.show("Song", "Artist", true);
    p.hide();

    assert!(!p.is_visible());
    assert_eq!(p.backend().live_count(), 0);
}

#[test]
fn hide_when_nothing_shown_is_safe() {
    let mut p = presenter();
    p.hide();
    p.hide();

    assert!(!p.is_visible());
    assert_eq!(p.backend().live_count(), 0);
}

#[test]
fn update_after_hide_does_not_resurrect() {
    let mut p = presenter();
    p.show("Song", "Artist", true);
    p.hide();
    p.update(Some("Ghost".to_string()), None, Some(true));

    assert!(p.state().is_none());
    assert_eq!(p.backend().live_count(), 0);
}

#[test]
fn show_after_hide_starts_fresh() {
    let mut p = presenter();
    p.show("Song", "Artist", true);
    p.update(Some("Edited".to_string()), None, None);
    p.hide();
    p.show("New", "Band", false);

    assert_eq!(displayed(&p), Some(PlaybackDisplayState::new("New", "Band", false)));
}
