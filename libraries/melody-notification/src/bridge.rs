//! Method-call surface
//!
//! The host UI drives the presenter through named method calls carrying a
//! loosely typed argument bag, and receives button presses back as commands.
//! [`NotificationBridge`] owns both ends: the presenter and the strong
//! handle of the command sink every router it hands out points at.

use crate::backend::NotificationBackend;
use crate::config::{DEFAULT_ARTIST, DEFAULT_TITLE};
use crate::error::Result;
use crate::presenter::NotificationPresenter;
use crate::router::ActionRouter;
use crate::sink::{CommandChannelRef, CommandSink};
use crate::types::PlaybackCommand;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::sync::Arc;
use tokio::sync::mpsc::{self, UnboundedReceiver};
use tracing::{debug, warn};

pub const METHOD_INITIALIZE: &str = "initialize";
pub const METHOD_SHOW: &str = "showMusicNotification";
pub const METHOD_UPDATE: &str = "updateNotification";
pub const METHOD_HIDE: &str = "hideNotification";

/// One inbound call from the host UI
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct MethodCall {
    pub method: String,

    /// Key/value bag; `null` or a non-object means "no arguments"
    #[serde(default)]
    pub arguments: Value,
}

impl MethodCall {
    pub fn new(method: impl Into<String>, arguments: Value) -> Self {
        Self {
            method: method.into(),
            arguments,
        }
    }

    /// String argument; missing, `null` or mistyped values are absent
    pub fn string(&self, key: &str) -> Option<String> {
        self.typed(key, Value::as_str).map(str::to_owned)
    }

    /// Boolean argument; missing, `null` or mistyped values are absent
    pub fn bool(&self, key: &str) -> Option<bool> {
        self.typed(key, Value::as_bool)
    }

    fn typed<'a, T>(&'a self, key: &str, cast: impl Fn(&'a Value) -> Option<T>) -> Option<T> {
        let value = self.arguments.get(key).filter(|v| !v.is_null())?;
        let parsed = cast(value);
        if parsed.is_none() {
            warn!("Ignoring argument {} of {} with unexpected type", key, self.method);
        }
        parsed
    }
}

/// Reply to a method call
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MethodResponse {
    /// Handled; there is never a payload
    Success,
    /// The method name is unknown
    NotImplemented,
}

/// Presenter plus the command sink shared with its routers
pub struct NotificationBridge<B: NotificationBackend> {
    presenter: NotificationPresenter<B>,
    sink: Arc<dyn CommandSink>,
}

impl<B: NotificationBackend> NotificationBridge<B> {
    pub fn new(backend: B, sink: Arc<dyn CommandSink>) -> Self {
        Self {
            presenter: NotificationPresenter::new(backend),
            sink,
        }
    }

    /// Bridge delivering commands into a fresh unbounded channel
    pub fn with_command_channel(backend: B) -> (Self, UnboundedReceiver<PlaybackCommand>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self::new(backend, Arc::new(tx)), rx)
    }

    /// Router wired to this bridge's sink
    ///
    /// Routers only hold a weak reference: once the bridge is dropped they
    /// stop delivering.
    pub fn router(&self) -> ActionRouter {
        ActionRouter::new(CommandChannelRef::new(&self.sink))
    }

    /// Answer one method call
    pub fn handle(&mut self, call: &MethodCall) -> MethodResponse {
        debug!("Method call {}", call.method);
        match call.method.as_str() {
            METHOD_INITIALIZE => self.presenter.initialize(),
            METHOD_SHOW => {
                let title = call.string("title").unwrap_or_else(|| DEFAULT_TITLE.to_string());
                let artist = call.string("artist").unwrap_or_else(|| DEFAULT_ARTIST.to_string());
                let is_playing = call.bool("isPlaying").unwrap_or(false);
                self.presenter.show(title, artist, is_playing);
            }
            METHOD_UPDATE => self.presenter.update(
                call.string("title"),
                call.string("artist"),
                call.bool("isPlaying"),
            ),
            METHOD_HIDE => self.presenter.hide(),
            _ => return MethodResponse::NotImplemented,
        }
        MethodResponse::Success
    }

    /// Decode a JSON-encoded call and answer it
    pub fn handle_json(&mut self, json: &str) -> Result<MethodResponse> {
        let call: MethodCall = serde_json::from_str(json)?;
        Ok(self.handle(&call))
    }

    pub fn presenter(&self) -> &NotificationPresenter<B> {
        &self.presenter
    }

    pub fn presenter_mut(&mut self) -> &mut NotificationPresenter<B> {
        &mut self.presenter
    }
}
