use serde::{Deserialize, Serialize};

/// Who sent a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    User,
    Assistant,
}

impl Sender {
    pub fn label(&self) -> &'static str {
        match self {
            Sender::User => "User",
            Sender::Assistant => "Assistant",
        }
    }
}

/// One chat bubble. `seq` is a per-conversation rendering key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    seq: u64,
    role: Sender,
    text: String,
}

impl Message {
    pub fn seq(&self) -> u64 {
        self.seq
    }

    pub fn role(&self) -> Sender {
        self.role
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// `Role: text`, as used when replaying a transcript to the model.
    pub fn transcript_line(&self) -> String {
        format!("{}: {}", self.role.label(), self.text)
    }
}

/// Ordered, append-only transcript.
#[derive(Debug, Clone, Default)]
pub struct Conversation {
    messages: Vec<Message>,
    next_seq: u64,
}

impl Conversation {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a message and return its sequence number.
    pub fn push(&mut self, role: Sender, text: impl Into<String>) -> u64 {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.messages.push(Message {
            seq,
            role,
            text: text.into(),
        });
        seq
    }

    pub fn add_user_message(&mut self, text: impl Into<String>) -> u64 {
        self.push(Sender::User, text)
    }

    pub fn add_assistant_message(&mut self, text: impl Into<String>) -> u64 {
        self.push(Sender::Assistant, text)
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    /// Drop all messages. Sequence numbers keep counting so rendering keys
    /// stay unique for the lifetime of the conversation.
    pub fn clear(&mut self) {
        self.messages.clear();
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn last_message(&self) -> Option<&Message> {
        self.messages.last()
    }
}
