//! Fixed identifiers and notification-category configuration
//!
//! Everything here is a process-lifetime constant. `ChannelConfig` only
//! groups the category metadata the OS asks for when the category is
//! registered; it cannot be changed by callers.

use serde::Serialize;

/// Name of the method channel the host UI talks to
pub const METHOD_CHANNEL: &str = "melody/notification";

/// Handle of the single playback notification
pub const NOTIFICATION_ID: i32 = 1001;

/// Identifier of the notification category (Android "channel")
pub const CHANNEL_ID: &str = "melody_music_channel";

/// User-visible category name
pub const CHANNEL_NAME: &str = "Music Playback";

/// User-visible category description
pub const CHANNEL_DESCRIPTION: &str = "Music playback controls";

/// Title shown when `showMusicNotification` omits one
pub const DEFAULT_TITLE: &str = "Unknown Title";

/// Artist shown when `showMusicNotification` omits one
pub const DEFAULT_ARTIST: &str = "Unknown Artist";

/// Category importance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Importance {
    /// Shown everywhere, no sound
    Low,
}

/// Notification category registered once per process
///
/// Built only from the constants above; the category is always silent and
/// low priority.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChannelConfig {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub importance: Importance,

    /// Launcher badge for active notifications
    pub show_badge: bool,

    /// Play a sound when posting
    pub sound: bool,
}

impl Default for ChannelConfig {
    fn default() -> Self {
        Self {
            id: CHANNEL_ID,
            name: CHANNEL_NAME,
            description: CHANNEL_DESCRIPTION,
            importance: Importance::Low,
            show_badge: false,
            sound: false,
        }
    }
}
