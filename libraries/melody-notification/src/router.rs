//! Action router
//!
//! Turns OS button-press events into playback commands. Stateless apart from
//! the channel reference it was built with.

use crate::sink::CommandChannelRef;
use crate::types::{ActionTag, PlaybackCommand};
use tracing::{debug, trace};

/// Forwards notification button presses to the application controller
#[derive(Debug, Clone)]
pub struct ActionRouter {
    channel: CommandChannelRef,
}

impl ActionRouter {
    pub fn new(channel: CommandChannelRef) -> Self {
        Self { channel }
    }

    /// Handle one OS event carrying an optional action tag
    ///
    /// Returns the command that was delivered. Unknown or absent tags, and
    /// events arriving while no sink is available, deliver nothing.
    pub fn on_receive(&self, action: Option<&str>) -> Option<PlaybackCommand> {
        let Some(action) = action else {
            trace!("Dropping notification event without action");
            return None;
        };
        let Some(tag) = ActionTag::parse(action) else {
            trace!("Dropping unrecognized notification action {:?}", action);
            return None;
        };
        self.dispatch(tag)
    }

    /// Deliver the command for `tag` exactly once
    pub fn dispatch(&self, tag: ActionTag) -> Option<PlaybackCommand> {
        let Some(sink) = self.channel.get() else {
            trace!("No command sink for {}, dropping", tag);
            return None;
        };

        let command = tag.command();
        if sink.invoke(command) {
            debug!("Routed {} to {}", tag, command.method_name());
            Some(command)
        } else {
            trace!("Command sink closed, dropped {}", command.method_name());
            None
        }
    }
}
