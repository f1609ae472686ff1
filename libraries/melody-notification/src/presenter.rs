//! Notification presenter
//!
//! Projects a [`PlaybackDisplayState`] onto the single media notification.
//! The presenter keeps the builder it posted last so partial updates can be
//! applied on top of it.
//!
//! Nothing here reports failure to the caller. Backend errors are logged and
//! dropped; the OS is the one place display problems surface.

use crate::backend::NotificationBackend;
use crate::builder::NotificationBuilder;
use crate::config::{ChannelConfig, NOTIFICATION_ID};
use crate::types::{PlaybackDisplayState, RenderedNotification};
use tracing::{debug, trace, warn};

/// Owns the playback notification
///
/// Calls must be serialized by the caller (`&mut self`); the host
/// dispatches method calls one at a time.
pub struct NotificationPresenter<B: NotificationBackend> {
    backend: B,
    channel: ChannelConfig,
    channel_ready: bool,
    current: Option<NotificationBuilder>,
}

impl<B: NotificationBackend> NotificationPresenter<B> {
    /// Create a presenter posting into the fixed notification category
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            channel: ChannelConfig::default(),
            channel_ready: false,
            current: None,
        }
    }

    /// Register the notification category
    ///
    /// Idempotent. Skipped on platforms without categories. A failed
    /// registration is retried on the next call.
    pub fn initialize(&mut self) {
        if self.channel_ready {
            return;
        }
        if !self.backend.supports_channels() {
            trace!("Notification categories unsupported, skipping registration");
            return;
        }

        match self.backend.create_channel(&self.channel) {
            Ok(()) => {
                debug!("Registered notification category {}", self.channel.id);
                self.channel_ready = true;
            }
            Err(e) => warn!("Failed to register notification category: {}", e),
        }
    }

    /// Post a fresh notification for this state, replacing any previous one
    pub fn show(&mut self, title: impl Into<String>, artist: impl Into<String>, is_playing: bool) {
        self.initialize();

        let state = PlaybackDisplayState::new(title, artist, is_playing);
        debug!(
            "Showing notification: {} - {} (playing: {})",
            state.title, state.artist, state.is_playing
        );

        self.current = Some(NotificationBuilder::media(self.channel.id, state));
        self.post();
    }

    /// Apply the supplied fields to the shown notification
    ///
    /// Absent fields stay unchanged. Supplying `is_playing` rebuilds every
    /// control. Without a shown notification this does nothing.
    pub fn update(&mut self, title: Option<String>, artist: Option<String>, is_playing: Option<bool>) {
        let Some(builder) = self.current.as_mut() else {
            trace!("No notification shown, ignoring update");
            return;
        };

        if let Some(title) = title {
            builder.set_title(title);
        }
        if let Some(artist) = artist {
            builder.set_artist(artist);
        }
        if let Some(is_playing) = is_playing {
            builder.set_playing(is_playing);
        }

        self.post();
    }

    /// Remove the notification and forget its state
    ///
    /// The state is kept when the OS refuses the cancel, so the notification
    /// still on screen stays updatable.
    pub fn hide(&mut self) {
        if let Err(e) = self.backend.cancel(NOTIFICATION_ID) {
            warn!("Failed to cancel notification: {}", e);
            return;
        }
        if self.current.take().is_some() {
            debug!("Hid notification");
        }
    }

    /// State currently shown, if any
    pub fn state(&self) -> Option<&PlaybackDisplayState> {
        self.current.as_ref().map(NotificationBuilder::state)
    }

    /// Notification as it would be posted now
    pub fn rendered(&self) -> Option<RenderedNotification> {
        self.current.as_ref().map(|b| b.build(NOTIFICATION_ID))
    }

    pub fn is_visible(&self) -> bool {
        self.current.is_some()
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn backend_mut(&mut self) -> &mut B {
        &mut self.backend
    }

    fn post(&mut self) {
        let Some(builder) = self.current.as_ref() else {
            return;
        };
        let notification = builder.build(NOTIFICATION_ID);
        if let Err(e) = self.backend.notify(NOTIFICATION_ID, &notification) {
            warn!("Failed to post notification: {}", e);
        }
    }
}
