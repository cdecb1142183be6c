//! Conversation session - open/closed lifecycle and the message log.
//!
//! The session is the only writer of its log. User messages are appended
//! synchronously inside `submit`; assistant replies are appended later by the
//! [`ResponseScheduler`]. Closing the session cancels every reply that has not
//! fired yet; the log itself survives and is shown again on the next `open()`.

use crate::knowledge::{KnowledgeBase, KnowledgeEntry, WELCOME_MESSAGE};
use crate::matcher::IntentMatcher;
use crate::message::{ConversationMessage, MessageLog, Sender};
use crate::scheduler::{ReplyTicket, ResponseScheduler};
use std::collections::BTreeMap;
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;
use tokio::sync::Notify;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};
use uuid::Uuid;

/// Per-session settings
#[derive(Debug, Clone)]
pub struct SessionOptions {
    pub reply_delay: Duration,
    pub welcome: String,
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self {
            reply_delay: Duration::from_millis(crate::scheduler::DEFAULT_REPLY_DELAY_MS),
            welcome: WELCOME_MESSAGE.to_string(),
        }
    }
}

/// Result of an accepted `submit`
#[derive(Debug, Clone)]
pub struct Submission {
    /// Sequence number of the appended user message
    pub user_sequence: u64,
    /// Entry the text resolved to
    pub intent: KnowledgeEntry,
    /// Pending assistant reply
    pub ticket: ReplyTicket,
}

#[derive(Debug, Default)]
struct SessionState {
    log: MessageLog,
    is_open: bool,
    pending: BTreeMap<ReplyTicket, JoinHandle<()>>,
    next_ticket: u64,
}

/// Shared handle to a conversation. Clones refer to the same session.
#[derive(Debug, Clone)]
pub struct ConversationSession {
    id: Uuid,
    state: Arc<Mutex<SessionState>>,
    idle: Arc<Notify>,
    matcher: IntentMatcher,
    scheduler: ResponseScheduler,
    welcome: Arc<str>,
}

impl ConversationSession {
    /// Create a closed, empty session over a validated knowledge base.
    pub fn new(knowledge: Arc<KnowledgeBase>, options: SessionOptions) -> Self {
        Self {
            id: Uuid::new_v4(),
            state: Arc::new(Mutex::new(SessionState::default())),
            idle: Arc::new(Notify::new()),
            matcher: IntentMatcher::new(knowledge),
            scheduler: ResponseScheduler::new(options.reply_delay),
            welcome: options.welcome.into(),
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn matcher(&self) -> &IntentMatcher {
        &self.matcher
    }

    pub fn scheduler(&self) -> &ResponseScheduler {
        &self.scheduler
    }

    fn state(&self) -> MutexGuard<'_, SessionState> {
        self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// closed -> open. Appends the welcome message if the log is empty.
    /// No-op when already open.
    pub fn open(&self) {
        let mut state = self.state();
        if state.is_open {
            return;
        }
        state.is_open = true;
        if state.log.is_empty() {
            state.log.append(Sender::Assistant, &*self.welcome);
        }
        info!(session = %self.id, messages = state.log.len(), "session opened");
    }

    /// open -> closed. Keeps the log; cancels replies that have not fired.
    pub fn close(&self) {
        let cancelled = {
            let mut state = self.state();
            if !state.is_open {
                return;
            }
            state.is_open = false;
            let pending = std::mem::take(&mut state.pending);
            for handle in pending.values() {
                handle.abort();
            }
            pending.len()
        };
        if cancelled > 0 {
            warn!(session = %self.id, cancelled, "session closed with pending replies");
            self.idle.notify_waiters();
        } else {
            info!(session = %self.id, "session closed");
        }
    }

    pub fn is_open(&self) -> bool {
        self.state().is_open
    }

    /// Submit typed or suggestion text with the scheduler's fixed delay.
    ///
    /// Blank text, or any text while the session is closed, is ignored and
    /// returns `None`. Must be called from within a tokio runtime.
    pub fn submit(&self, raw: &str) -> Option<Submission> {
        self.submit_with_delay(raw, self.scheduler.delay())
    }

    /// Like [`submit`](Self::submit) with an explicit reply delay.
    pub fn submit_with_delay(&self, raw: &str, delay: Duration) -> Option<Submission> {
        let text = raw.trim();
        if text.is_empty() {
            return None;
        }

        let user_sequence = {
            let mut state = self.state();
            if !state.is_open {
                debug!(session = %self.id, "submit on closed session ignored");
                return None;
            }
            state.log.append(Sender::User, text).sequence
        };
        let intent = self.matcher.resolve(text);
        let ticket = self
            .scheduler
            .schedule_reply(self, intent.answer_body(), delay);

        Some(Submission {
            user_sequence,
            intent,
            ticket,
        })
    }

    /// Snapshot of the full log in append order.
    pub fn messages(&self) -> Vec<ConversationMessage> {
        self.state().log.messages().to_vec()
    }

    /// Messages appended after `sequence`.
    pub fn messages_since(&self, sequence: u64) -> Vec<ConversationMessage> {
        self.state().log.since(sequence).to_vec()
    }

    pub fn last_sequence(&self) -> u64 {
        self.state().log.last_sequence()
    }

    /// Number of armed replies that have not fired or been cancelled.
    pub fn pending_replies(&self) -> usize {
        self.state().pending.len()
    }

    /// Wait until no replies are pending.
    pub async fn wait_idle(&self) {
        loop {
            let notified = self.idle.notified();
            if self.pending_replies() == 0 {
                return;
            }
            notified.await;
        }
    }

    /// Register a reply task. `spawn` runs under the session lock so the
    /// task cannot deliver before it is tracked. Nothing is spawned once the
    /// session is closed.
    pub(crate) fn arm_reply<F>(&self, spawn: F) -> ReplyTicket
    where
        F: FnOnce(ReplyTicket) -> JoinHandle<()>,
    {
        let mut state = self.state();
        state.next_ticket += 1;
        let ticket = ReplyTicket(state.next_ticket);
        if !state.is_open {
            // closed after the user message was appended; treat as cancelled
            debug!(session = %self.id, ticket = ticket.id(), "reply not armed, session closed");
            return ticket;
        }
        let handle = spawn(ticket);
        state.pending.insert(ticket, handle);
        ticket
    }

    /// Append a fired reply unless it was cancelled in the meantime.
    pub(crate) fn deliver_reply(&self, ticket: ReplyTicket, content: String) {
        let now_idle = {
            let mut state = self.state();
            if state.pending.remove(&ticket).is_none() {
                debug!(session = %self.id, ticket = ticket.id(), "reply cancelled before delivery");
                return;
            }
            let sequence = state.log.append(Sender::Assistant, content).sequence;
            debug!(session = %self.id, ticket = ticket.id(), sequence, "reply appended");
            state.pending.is_empty()
        };
        if now_idle {
            self.idle.notify_waiters();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session() -> ConversationSession {
        let kb = Arc::new(KnowledgeBase::builtin().unwrap());
        ConversationSession::new(kb, SessionOptions::default())
    }

    #[test]
    fn test_starts_closed_and_empty() {
        let s = session();
        assert!(!s.is_open());
        assert!(s.messages().is_empty());
    }

    #[test]
    fn test_open_twice_single_welcome() {
        let s = session();
        s.open();
        s.open();
        let messages = s.messages();
        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0].sender, Sender::Assistant);
        assert_eq!(messages[0].content, WELCOME_MESSAGE);
    }

    #[test]
    fn test_reopen_keeps_log() {
        let s = session();
        s.open();
        s.close();
        assert!(!s.is_open());
        s.open();
        assert_eq!(s.messages().len(), 1);
    }

    #[test]
    fn test_blank_submit_is_ignored() {
        let s = session();
        s.open();
        assert!(s.submit("").is_none());
        assert!(s.submit("   \t ").is_none());
        assert_eq!(s.messages().len(), 1);
        assert_eq!(s.pending_replies(), 0);
    }

    #[test]
    fn test_closed_session_arms_nothing() {
        let s = session();
        s.open();
        s.close();
        s.arm_reply(|_| unreachable!("closed session spawned a reply"));
        assert_eq!(s.pending_replies(), 0);
    }

    #[test]
    fn test_clones_share_state() {
        let s = session();
        let other = s.clone();
        s.open();
        assert!(other.is_open());
        assert_eq!(other.id(), s.id());
    }
}
