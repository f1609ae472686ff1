//! Platform notification backend trait
//!
//! Abstracts the OS notification manager so the presenter can run against
//! Android, a desktop shim, or the in-memory backend used in tests.

use crate::config::ChannelConfig;
use crate::error::{NotificationError, Result};
use crate::types::RenderedNotification;
use std::collections::BTreeMap;

/// OS notification manager
///
/// Implementors must not block for long: calls arrive on the UI control path.
pub trait NotificationBackend: Send {
    /// Whether the OS groups notifications into categories (Android 8+)
    fn supports_channels(&self) -> bool;

    /// Register a notification category
    ///
    /// Only called when [`supports_channels`](Self::supports_channels)
    /// returns true. Registering an existing id again must be harmless.
    fn create_channel(&mut self, channel: &ChannelConfig) -> Result<()>;

    /// Post a notification, replacing any live one with the same id
    fn notify(&mut self, id: i32, notification: &RenderedNotification) -> Result<()>;

    /// Remove the notification with this id; unknown ids are ignored
    fn cancel(&mut self, id: i32) -> Result<()>;
}

/// In-memory backend
///
/// Keeps live notifications keyed by id and counts every call, which is
/// enough to observe replace-not-duplicate semantics.
#[derive(Debug, Default)]
pub struct MemoryBackend {
    channels_supported: bool,
    channels: Vec<ChannelConfig>,
    live: BTreeMap<i32, RenderedNotification>,
    notify_calls: usize,
    cancel_calls: usize,
    fail_next: Option<String>,
}

impl MemoryBackend {
    /// Backend with notification-category support
    pub fn new() -> Self {
        Self {
            channels_supported: true,
            ..Self::default()
        }
    }

    /// Backend emulating an OS without notification categories
    pub fn without_channels() -> Self {
        Self::default()
    }

    /// Make the next call fail with a backend error
    pub fn fail_next(&mut self, msg: impl Into<String>) {
        self.fail_next = Some(msg.into());
    }

    /// Registered categories, in registration order
    pub fn channels(&self) -> &[ChannelConfig] {
        &self.channels
    }

    /// Live notification with this id
    pub fn get(&self, id: i32) -> Option<&RenderedNotification> {
        self.live.get(&id)
    }

    /// Number of live notifications
    pub fn live_count(&self) -> usize {
        self.live.len()
    }

    pub fn notify_calls(&self) -> usize {
        self.notify_calls
    }

    pub fn cancel_calls(&self) -> usize {
        self.cancel_calls
    }

    fn take_failure(&mut self) -> Result<()> {
        match self.fail_next.take() {
            Some(msg) => Err(NotificationError::backend(msg)),
            None => Ok(()),
        }
    }
}

impl NotificationBackend for MemoryBackend {
    fn supports_channels(&self) -> bool {
        self.channels_supported
    }

    fn create_channel(&mut self, channel: &ChannelConfig) -> Result<()> {
        self.take_failure()?;
        // Re-registering updates the existing category in place
        if let Some(existing) = self.channels.iter_mut().find(|c| c.id == channel.id) {
            *existing = channel.clone();
        } else {
            self.channels.push(channel.clone());
        }
        Ok(())
    }

    fn notify(&mut self, id: i32, notification: &RenderedNotification) -> Result<()> {
        self.notify_calls += 1;
        self.take_failure()?;
        self.live.insert(id, notification.clone());
        Ok(())
    }

    fn cancel(&mut self, id: i32) -> Result<()> {
        self.cancel_calls += 1;
        self.take_failure()?;
        self.live.remove(&id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn channel_registration_is_idempotent() {
        let mut backend = MemoryBackend::new();
        let channel = ChannelConfig::default();
        backend.create_channel(&channel).unwrap();
        backend.create_channel(&channel).unwrap();
        assert_eq!(backend.channels().len(), 1);
    }

    #[test]
    fn cancel_unknown_id_is_harmless() {
        let mut backend = MemoryBackend::new();
        backend.cancel(42).unwrap();
        assert_eq!(backend.live_count(), 0);
        assert_eq!(backend.cancel_calls(), 1);
    }

    #[test]
    fn injected_failure_applies_once() {
        let mut backend = MemoryBackend::new();
        backend.fail_next("denied");
        assert!(matches!(
            backend.cancel(1),
            Err(NotificationError::Backend(msg)) if msg == "denied"
        ));
        assert!(backend.cancel(1).is_ok());
    }
}
