use crate::constants::{defaults, fallback};
use crate::error::ImpactError;
use crate::llm::{PromptRelay, PromptRequest};
use uuid::Uuid;

use super::history::{Conversation, Message, Sender};

/// How much of the conversation accompanies each query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HistoryMode {
    /// Only the latest query plus the fixed system context.
    #[default]
    Stateless,
    /// Recent prior turns are appended to the system context. Turns that
    /// ended in fallback text are left out.
    Transcript,
}

/// A turn whose user message has been recorded and whose reply is
/// outstanding. Hand it back to [`ConversationSession::finish_turn`].
#[derive(Debug)]
pub struct PendingTurn {
    session: Uuid,
    id: u64,
    request: PromptRequest,
}

impl PendingTurn {
    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn request(&self) -> &PromptRequest {
        &self.request
    }
}

/// The transcript and pending state behind one chat widget.
///
/// At most one turn is in flight at a time. `submit` drives a whole turn;
/// event-loop callers that render between the user bubble and the reply use
/// `begin_turn` / `finish_turn` instead. There is no cancellation: a caller
/// that gives up on a pending turn drops the session.
pub struct ConversationSession {
    id: Uuid,
    relay: PromptRelay,
    system_context: String,
    history_mode: HistoryMode,
    transcript_limit: usize,
    conversation: Conversation,
    pending: Option<u64>,
}

impl ConversationSession {
    pub fn new(relay: PromptRelay, system_context: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            relay,
            system_context: system_context.into(),
            history_mode: HistoryMode::Stateless,
            transcript_limit: defaults::TRANSCRIPT_MESSAGES,
            conversation: Conversation::new(),
            pending: None,
        }
    }

    pub fn with_history_mode(mut self, mode: HistoryMode) -> Self {
        self.history_mode = mode;
        self
    }

    /// Cap on prior messages replayed in `HistoryMode::Transcript`.
    pub fn with_transcript_limit(mut self, limit: usize) -> Self {
        self.transcript_limit = limit;
        self
    }

    /// Reset the transcript to a single assistant greeting. A reply still
    /// outstanding from before the reset is discarded when it arrives.
    pub fn initialize(&mut self, greeting: impl Into<String>) {
        self.conversation.clear();
        self.pending = None;
        self.conversation.add_assistant_message(greeting);
    }

    /// Run one full turn. Blank queries are ignored and return `None`;
    /// otherwise the assistant's reply (or fallback text) is returned.
    pub async fn submit(&mut self, user_query: &str) -> Option<&Message> {
        let turn = match self.begin_turn(user_query) {
            Ok(turn) => turn,
            Err(ImpactError::Busy) => {
                tracing::debug!(session = %self.id, "Submit ignored while a reply is pending");
                return None;
            }
            Err(_) => return None,
        };

        let reply = self.relay.generate_request(turn.request()).await;
        if self.finish_turn(turn, reply) {
            self.conversation.last_message()
        } else {
            None
        }
    }

    /// Record the user message and enter the pending state.
    pub fn begin_turn(&mut self, user_query: &str) -> Result<PendingTurn, ImpactError> {
        if user_query.trim().is_empty() {
            return Err(ImpactError::InvalidInput);
        }
        if self.pending.is_some() {
            return Err(ImpactError::Busy);
        }

        let system_context = self.context_for_next_turn();
        let id = self.conversation.add_user_message(user_query);
        self.pending = Some(id);
        tracing::debug!(session = %self.id, turn = id, "Turn started");

        Ok(PendingTurn {
            session: self.id,
            id,
            request: PromptRequest::new(user_query, system_context),
        })
    }

    /// Append the reply for `turn` and leave the pending state. Returns false
    /// and discards the reply if `turn` is not this session's outstanding one.
    pub fn finish_turn(&mut self, turn: PendingTurn, reply: String) -> bool {
        if turn.session != self.id || self.pending != Some(turn.id) {
            tracing::debug!(session = %self.id, turn = turn.id, "Discarding stale reply");
            return false;
        }

        let reply = if reply.is_empty() {
            fallback::EMPTY_GENERATION.to_string()
        } else {
            reply
        };
        self.conversation.add_assistant_message(reply);
        self.pending = None;
        true
    }

    fn context_for_next_turn(&self) -> String {
        if self.history_mode == HistoryMode::Stateless {
            return self.system_context.clone();
        }
        let lines = self.transcript_lines();
        if lines.is_empty() {
            return self.system_context.clone();
        }
        format!(
            "{}\n\nConversation so far:\n{}",
            self.system_context,
            lines.join("\n")
        )
    }

    /// The most recent `transcript_limit` messages, skipping every turn that
    /// ended in fallback text along with the query that produced it.
    fn transcript_lines(&self) -> Vec<String> {
        let mut kept: Vec<&Message> = Vec::new();
        for message in self.conversation.messages() {
            if message.role() == Sender::Assistant && is_fallback(message.text()) {
                if kept.last().is_some_and(|m| m.role() == Sender::User) {
                    kept.pop();
                }
                continue;
            }
            kept.push(message);
        }
        let skip = kept.len().saturating_sub(self.transcript_limit);
        kept[skip..].iter().map(|m| m.transcript_line()).collect()
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn relay(&self) -> &PromptRelay {
        &self.relay
    }

    pub fn system_context(&self) -> &str {
        &self.system_context
    }

    pub fn history_mode(&self) -> HistoryMode {
        self.history_mode
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    pub fn messages(&self) -> &[Message] {
        self.conversation.messages()
    }

    pub fn len(&self) -> usize {
        self.conversation.len()
    }

    pub fn is_empty(&self) -> bool {
        self.conversation.is_empty()
    }

    pub fn last_message(&self) -> Option<&Message> {
        self.conversation.last_message()
    }
}

fn is_fallback(text: &str) -> bool {
    text == fallback::EMPTY_GENERATION || text == fallback::HIGH_TRAFFIC
}
