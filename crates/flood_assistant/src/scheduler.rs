//! Delayed assistant replies.
//!
//! A reply is a one-shot tokio task that sleeps for a fixed delay and then
//! appends to the session log. The sequence number is taken when the task
//! fires, not when it is armed, so replies to back-to-back questions can land
//! in a different order than the questions if their timers differ.
//!
//! Every armed reply is tracked by its session; `close()` aborts them.

use crate::session::ConversationSession;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tokio::time::Instant;
use tracing::debug;

/// Default "thinking" delay before a reply is appended
pub const DEFAULT_REPLY_DELAY_MS: u64 = 400;

/// Handle for a scheduled reply, unique within its session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ReplyTicket(pub(crate) u64);

impl ReplyTicket {
    pub fn id(&self) -> u64 {
        self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResponseScheduler {
    delay: Duration,
}

impl Default for ResponseScheduler {
    fn default() -> Self {
        Self::new(Duration::from_millis(DEFAULT_REPLY_DELAY_MS))
    }
}

impl ResponseScheduler {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }

    /// Fixed delay applied by [`ConversationSession::submit`].
    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Arm a one-shot timer that appends `content` as an assistant message
    /// after `delay`. Must be called from within a tokio runtime.
    pub fn schedule_reply(
        &self,
        session: &ConversationSession,
        content: impl Into<String>,
        delay: Duration,
    ) -> ReplyTicket {
        let content = content.into();
        let target = session.clone();
        let deadline = Instant::now() + delay;
        let ticket = session.arm_reply(move |ticket| {
            tokio::spawn(async move {
                tokio::time::sleep_until(deadline).await;
                target.deliver_reply(ticket, content);
            })
        });
        debug!(
            session = %session.id(),
            ticket = ticket.id(),
            delay_ms = delay.as_millis() as u64,
            "reply scheduled"
        );
        ticket
    }
}
