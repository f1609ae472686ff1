//! Retained notification representation
//!
//! Mirrors the OS builder: fields are set one at a time and `build()`
//! snapshots them. Actions can only be cleared and re-added, never edited.

use crate::types::{
    ContentIntent, NotificationAction, NotificationIcon, PlaybackDisplayState,
    RenderedNotification, Visibility,
};

/// Mutable notification under construction
#[derive(Debug, Clone)]
pub struct NotificationBuilder {
    channel_id: String,
    state: PlaybackDisplayState,
    content_intent: ContentIntent,
    visibility: Visibility,
    actions: Vec<NotificationAction>,
    compact_actions: Vec<usize>,
}

impl NotificationBuilder {
    /// Media notification for `state` with the three playback controls
    pub fn media(channel_id: impl Into<String>, state: PlaybackDisplayState) -> Self {
        let mut builder = Self {
            channel_id: channel_id.into(),
            state,
            content_intent: ContentIntent::OpenApp,
            visibility: Visibility::Public,
            actions: Vec::with_capacity(3),
            compact_actions: vec![0, 1, 2],
        };
        builder.rebuild_controls();
        builder
    }

    pub fn set_title(&mut self, title: impl Into<String>) -> &mut Self {
        self.state.title = title.into();
        self
    }

    pub fn set_artist(&mut self, artist: impl Into<String>) -> &mut Self {
        self.state.artist = artist.into();
        self
    }

    /// Sets the ongoing flag and replaces the whole action list
    pub fn set_playing(&mut self, is_playing: bool) -> &mut Self {
        self.state.is_playing = is_playing;
        self.rebuild_controls();
        self
    }

    pub fn clear_actions(&mut self) -> &mut Self {
        self.actions.clear();
        self
    }

    pub fn add_action(&mut self, action: NotificationAction) -> &mut Self {
        self.actions.push(action);
        self
    }

    pub fn state(&self) -> &PlaybackDisplayState {
        &self.state
    }

    pub fn actions(&self) -> &[NotificationAction] {
        &self.actions
    }

    /// Snapshot the builder into a postable notification
    pub fn build(&self, id: i32) -> RenderedNotification {
        RenderedNotification {
            id,
            channel_id: self.channel_id.clone(),
            small_icon: NotificationIcon::Play,
            title: self.state.title.clone(),
            artist: self.state.artist.clone(),
            content_intent: self.content_intent,
            ongoing: self.state.is_playing,
            auto_cancel: false,
            visibility: self.visibility,
            actions: self.actions.clone(),
            compact_actions: self.compact_actions.clone(),
        }
    }

    fn rebuild_controls(&mut self) {
        self.clear_actions();
        for action in NotificationAction::playback_controls(self.state.is_playing) {
            self.add_action(action);
        }
    }
}
