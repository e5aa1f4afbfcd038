mod history;
mod session;

pub use history::{Conversation, Message, Sender};
pub use session::{ConversationSession, HistoryMode, PendingTurn};
