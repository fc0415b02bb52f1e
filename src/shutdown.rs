//! Wait for the process to be told to stop
//!
//! After a note is generated the process stays in the foreground until it
//! receives an interrupt or hangup, or the caller cancels the wait.

use std::future::Future;
use tracing::info;

use crate::error::{NoteError, Result};

/// Exit status after an interrupt or hangup
pub const SIGNAL_EXIT: i32 = 1;

/// Why the wait ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShutdownReason {
    /// SIGINT / Ctrl+C
    Interrupt,
    /// SIGHUP
    Hangup,
    /// The cancellation future completed first
    Cancelled,
}

impl ShutdownReason {
    pub fn exit_code(&self) -> i32 {
        match self {
            ShutdownReason::Interrupt | ShutdownReason::Hangup => SIGNAL_EXIT,
            ShutdownReason::Cancelled => 0,
        }
    }
}

/// Installed interrupt and hangup handlers.
///
/// Handlers are registered by [`Shutdown::install`], so a signal that
/// arrives between installing and waiting is not lost.
pub struct Shutdown {
    #[cfg(unix)]
    interrupt: tokio::signal::unix::Signal,
    #[cfg(unix)]
    hangup: tokio::signal::unix::Signal,
}

impl Shutdown {
    /// Register the handlers. Must be called inside a tokio runtime.
    #[cfg(unix)]
    pub fn install() -> Result<Self> {
        use tokio::signal::unix::{signal, SignalKind};

        Ok(Self {
            interrupt: signal(SignalKind::interrupt()).map_err(NoteError::Signal)?,
            hangup: signal(SignalKind::hangup()).map_err(NoteError::Signal)?,
        })
    }

    #[cfg(not(unix))]
    pub fn install() -> Result<Self> {
        Ok(Self {})
    }

    /// Block until an interrupt, a hangup, or `cancel` resolves
    #[cfg(unix)]
    pub async fn wait<F>(mut self, cancel: F) -> Result<ShutdownReason>
    where
        F: Future<Output = ()>,
    {
        let reason = tokio::select! {
            _ = self.interrupt.recv() => ShutdownReason::Interrupt,
            _ = self.hangup.recv() => ShutdownReason::Hangup,
            _ = cancel => ShutdownReason::Cancelled,
        };

        info!(reason = ?reason, "exit");
        Ok(reason)
    }

    #[cfg(not(unix))]
    pub async fn wait<F>(self, cancel: F) -> Result<ShutdownReason>
    where
        F: Future<Output = ()>,
    {
        let reason = tokio::select! {
            result = tokio::signal::ctrl_c() => {
                result.map_err(NoteError::Signal)?;
                ShutdownReason::Interrupt
            }
            _ = cancel => ShutdownReason::Cancelled,
        };

        info!(reason = ?reason, "exit");
        Ok(reason)
    }
}
