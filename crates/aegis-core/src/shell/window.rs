//! Host window control channel.
//!
//! Window controls are fire-and-forget one-way signals with no response
//! contract; the host window manager is an external collaborator.

use serde::{Deserialize, Serialize};
use tracing::debug;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum WindowCommand {
    Minimize,
    ToggleMaximize,
    Close,
}

/// Sink for window control signals.
pub trait HostWindow: Send + Sync {
    fn minimize(&self);
    fn toggle_maximize(&self);
    fn close(&self);
}

/// Default headless sink: signals are only traced.
#[derive(Debug, Default)]
pub struct LoggingWindow;

impl HostWindow for LoggingWindow {
    fn minimize(&self) {
        debug!("window-minimize signal");
    }

    fn toggle_maximize(&self) {
        debug!("window-maximize signal");
    }

    fn close(&self) {
        debug!("window-close signal");
    }
}
