//! Report channel to the external scorer.
//!
//! The scoring algorithm itself lives outside this repository and is treated
//! as an opaque oracle: the shell only depends on the [`Scorer`] capability.
//! [`process::ProcessScorer`] delegates to a spawned process in production;
//! [`fixed::StaticScorer`] answers in-process for tests and offline use.

use async_trait::async_trait;
use std::time::Duration;
use thiserror::Error;

use crate::report::model::Report;

pub mod fixed;
pub mod process;

/// Failures that escape the report channel.
///
/// Malformed or non-zero-exit scorer output is NOT an error: the channel
/// substitutes the fail-closed report instead. Only failures to obtain any
/// output at all surface here.
#[derive(Debug, Error)]
pub enum ChannelError {
    #[error("failed to spawn scorer `{program}`: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("scorer did not respond within {0:?}")]
    Timeout(Duration),

    #[error("failed to collect scorer output: {0}")]
    Io(#[from] std::io::Error),
}

/// One-operation capability for evaluating a target.
///
/// `content` is a snapshot of the rendered page; callers must pass a
/// placeholder when no real snapshot exists (see
/// [`crate::PLACEHOLDER_CONTENT`]).
#[async_trait]
pub trait Scorer: Send + Sync {
    async fn evaluate(&self, target: &str, content: &str) -> Result<Report, ChannelError>;
}
