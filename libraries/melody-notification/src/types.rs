//! Core types for the playback notification

use serde::{Deserialize, Serialize};
use std::fmt;

/// What the notification currently shows
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlaybackDisplayState {
    /// Track title (content title)
    pub title: String,

    /// Artist name (content text)
    pub artist: String,

    /// Whether playback is running; drives the Play/Pause control and the
    /// ongoing flag
    pub is_playing: bool,
}

impl PlaybackDisplayState {
    pub fn new(title: impl Into<String>, artist: impl Into<String>, is_playing: bool) -> Self {
        Self {
            title: title.into(),
            artist: artist.into(),
            is_playing,
        }
    }
}

/// Identifier carried by an OS button-press event
///
/// `Stop` is routable but the presenter never renders a button for it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ActionTag {
    #[serde(rename = "PLAY_PAUSE")]
    PlayPause,
    #[serde(rename = "NEXT")]
    Next,
    #[serde(rename = "PREVIOUS")]
    Previous,
    #[serde(rename = "STOP")]
    Stop,
}

impl ActionTag {
    /// All tags, in declaration order
    pub const ALL: [ActionTag; 4] = [
        ActionTag::PlayPause,
        ActionTag::Next,
        ActionTag::Previous,
        ActionTag::Stop,
    ];

    /// Wire string attached to the OS intent
    pub fn as_str(self) -> &'static str {
        match self {
            ActionTag::PlayPause => "PLAY_PAUSE",
            ActionTag::Next => "NEXT",
            ActionTag::Previous => "PREVIOUS",
            ActionTag::Stop => "STOP",
        }
    }

    /// Exact-match parse; anything else is unrecognized
    pub fn parse(tag: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.as_str() == tag)
    }

    /// The command this tag routes to
    pub fn command(self) -> PlaybackCommand {
        match self {
            ActionTag::PlayPause => PlaybackCommand::PlayPause,
            ActionTag::Next => PlaybackCommand::Next,
            ActionTag::Previous => PlaybackCommand::Previous,
            ActionTag::Stop => PlaybackCommand::Stop,
        }
    }
}

impl fmt::Display for ActionTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Argument-less command sent back to the application controller
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlaybackCommand {
    PlayPause,
    Next,
    Previous,
    Stop,
}

impl PlaybackCommand {
    /// Method name invoked on the host channel
    pub fn method_name(self) -> &'static str {
        match self {
            PlaybackCommand::PlayPause => "onPlayPause",
            PlaybackCommand::Next => "onNext",
            PlaybackCommand::Previous => "onPrevious",
            PlaybackCommand::Stop => "onStop",
        }
    }
}

/// Stock media icons provided by the OS
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum NotificationIcon {
    Play,
    Pause,
    Previous,
    Next,
}

/// A control button attached to the notification
///
/// Immutable once built: toggling play/pause means building a new action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NotificationAction {
    icon: NotificationIcon,
    label: &'static str,
    tag: ActionTag,
}

impl NotificationAction {
    pub fn previous() -> Self {
        Self {
            icon: NotificationIcon::Previous,
            label: "Previous",
            tag: ActionTag::Previous,
        }
    }

    pub fn next() -> Self {
        Self {
            icon: NotificationIcon::Next,
            label: "Next",
            tag: ActionTag::Next,
        }
    }

    /// Shows the action the button will perform: Pause while playing
    pub fn play_pause(is_playing: bool) -> Self {
        let (icon, label) = if is_playing {
            (NotificationIcon::Pause, "Pause")
        } else {
            (NotificationIcon::Play, "Play")
        };
        Self {
            icon,
            label,
            tag: ActionTag::PlayPause,
        }
    }

    /// Previous, Play/Pause, Next (left to right)
    pub fn playback_controls(is_playing: bool) -> [Self; 3] {
        [Self::previous(), Self::play_pause(is_playing), Self::next()]
    }

    pub fn icon(&self) -> NotificationIcon {
        self.icon
    }

    pub fn label(&self) -> &'static str {
        self.label
    }

    pub fn tag(&self) -> ActionTag {
        self.tag
    }
}

/// Where a tap on the notification body leads
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ContentIntent {
    /// Bring the host application to the foreground
    OpenApp,
}

/// Lock screen visibility
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Visibility {
    /// Full content on the lock screen
    Public,
}

/// A fully built notification, ready to post
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderedNotification {
    pub id: i32,
    pub channel_id: String,
    pub small_icon: NotificationIcon,
    pub title: String,
    pub artist: String,
    pub content_intent: ContentIntent,
    /// Non-dismissible while set
    pub ongoing: bool,
    pub auto_cancel: bool,
    pub visibility: Visibility,
    pub actions: Vec<NotificationAction>,
    /// Indices into `actions` shown in the collapsed media view
    pub compact_actions: Vec<usize>,
}

impl RenderedNotification {
    /// The Play/Pause control, if attached
    pub fn play_pause_action(&self) -> Option<&NotificationAction> {
        self.actions.iter().find(|a| a.tag() == ActionTag::PlayPause)
    }

    /// Display state this notification was rendered from
    pub fn display_state(&self) -> PlaybackDisplayState {
        PlaybackDisplayState {
            title: self.title.clone(),
            artist: self.artist.clone(),
            is_playing: self.ongoing,
        }
    }
}
