//! Melody - Playback Notification Bridge
//!
//! Presents the current track as a single media-style system notification
//! and routes taps on its controls back to the application.
//!
//! This crate provides:
//! - `NotificationPresenter`: show / update / hide one notification with
//!   Previous, Play/Pause and Next controls
//! - `ActionRouter`: maps OS button-press tags to playback commands
//! - `NotificationBridge`: the method-call surface the host UI talks to
//!
//! # Architecture
//!
//! The OS notification manager sits behind [`NotificationBackend`]; the
//! application controller sits behind [`CommandSink`]. Routers reach the
//! sink through a weak [`CommandChannelRef`] handed out by the bridge that
//! owns it, so there is no process-wide channel to set.
//!
//! # Example
//!
//! ```rust
//! use melody_notification::{
//!     MemoryBackend, MethodCall, NotificationBridge, PlaybackCommand, NOTIFICATION_ID,
//! };
//! use serde_json::json;
//!
//! let (mut bridge, mut commands) = NotificationBridge::with_command_channel(MemoryBackend::new());
//!
//! bridge.handle(&MethodCall::new(
//!     "showMusicNotification",
//!     json!({"title": "Song", "artist": "Artist", "isPlaying": true}),
//! ));
//! bridge.handle(&MethodCall::new("updateNotification", json!({"isPlaying": false})));
//!
//! let posted = bridge.presenter().backend().get(NOTIFICATION_ID).unwrap();
//! assert_eq!(posted.title, "Song");
//! assert!(!posted.ongoing);
//!
//! // The OS delivers a button press
//! let router = bridge.router();
//! router.on_receive(Some("NEXT"));
//! assert_eq!(commands.try_recv().unwrap(), PlaybackCommand::Next);
//! ```

pub mod backend;
pub mod bridge;
mod builder;
pub mod config;
mod error;
mod presenter;
mod router;
pub mod sink;
pub mod types;

// Public exports
pub use backend::{MemoryBackend, NotificationBackend};
pub use bridge::{MethodCall, MethodResponse, NotificationBridge};
pub use builder::NotificationBuilder;
pub use config::{ChannelConfig, Importance, CHANNEL_ID, METHOD_CHANNEL, NOTIFICATION_ID};
pub use error::{NotificationError, Result};
pub use presenter::NotificationPresenter;
pub use router::ActionRouter;
pub use sink::{CommandChannelRef, CommandSink};
pub use types::{
    ActionTag, ContentIntent, NotificationAction, NotificationIcon, PlaybackCommand,
    PlaybackDisplayState, RenderedNotification, Visibility,
};
