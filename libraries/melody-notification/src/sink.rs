//! Outbound command channel
//!
//! The application controller receives commands through a [`CommandSink`].
//! Components that only forward commands hold a [`CommandChannelRef`], a weak
//! handle that never keeps the sink alive on its own.

use crate::types::PlaybackCommand;
use std::sync::{Arc, Weak};
use tokio::sync::mpsc::UnboundedSender;

/// Receives argument-less playback commands
///
/// `invoke` runs on the OS event-delivery context: it must return
/// immediately and must not block on I/O.
pub trait CommandSink: Send + Sync {
    /// Deliver one command
    ///
    /// Returns false when the command could not be delivered (receiver gone).
    fn invoke(&self, command: PlaybackCommand) -> bool;
}

impl CommandSink for UnboundedSender<PlaybackCommand> {
    fn invoke(&self, command: PlaybackCommand) -> bool {
        self.send(command).is_ok()
    }
}

/// Weak reference to the application's command sink
///
/// Cloning shares the same target. An unset or dangling reference turns
/// every delivery into a no-op.
#[derive(Clone, Default)]
pub struct CommandChannelRef {
    target: Option<Weak<dyn CommandSink>>,
}

impl CommandChannelRef {
    /// Reference the given sink without owning it
    pub fn new(sink: &Arc<dyn CommandSink>) -> Self {
        Self {
            target: Some(Arc::downgrade(sink)),
        }
    }

    /// A reference that points nowhere
    pub fn unset() -> Self {
        Self::default()
    }

    /// The sink, if it is still alive
    pub fn get(&self) -> Option<Arc<dyn CommandSink>> {
        self.target.as_ref().and_then(Weak::upgrade)
    }

    pub fn is_available(&self) -> bool {
        self.get().is_some()
    }
}

impl std::fmt::Debug for CommandChannelRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CommandChannelRef")
            .field("available", &self.is_available())
            .finish()
    }
}
