//! Interactive chat transcript.
//!
//! The session lives on the client side of the engine: it records every
//! turn and forwards the most recent ones as `conversationHistory`. The
//! engine itself never sees the session.

use crate::chat::{now_timestamp, ChatEngine, ChatReply, ChatRequest, ConversationTurn, Role};

/// Assistant turn every session opens with.
pub const WELCOME: &str = "Hi! I'm your college assistant. How can I help you today?";

/// Ordered transcript of one conversation.
#[derive(Debug, Clone)]
pub struct Session {
    turns: Vec<ConversationTurn>,
    history_limit: usize,
}

impl Session {
    /// Start a session that forwards at most `history_limit` earlier turns.
    pub fn new(history_limit: usize) -> Self {
        Self {
            turns: vec![ConversationTurn {
                role: Role::Assistant,
                content: WELCOME.to_owned(),
                timestamp: Some(now_timestamp()),
            }],
            history_limit,
        }
    }

    /// Every turn so far, oldest first.
    pub fn turns(&self) -> &[ConversationTurn] {
        &self.turns
    }

    /// Most recent turns to send as context, without timestamps.
    pub fn history(&self) -> Vec<ConversationTurn> {
        let start = self.turns.len().saturating_sub(self.history_limit);
        self.turns
            .get(start..)
            .unwrap_or_default()
            .iter()
            .map(|turn| ConversationTurn {
                role: turn.role,
                content: turn.content.clone(),
                timestamp: None,
            })
            .collect()
    }

    /// Send `input` to the engine and record both sides of the exchange.
    ///
    /// Blank input is ignored and returns `None`. Otherwise returns the
    /// assistant turn that was appended; failures become an assistant turn
    /// carrying the error text.
    pub fn send(&mut self, engine: &ChatEngine, input: &str) -> Option<&ConversationTurn> {
        if input.trim().is_empty() {
            return None;
        }

        let request = ChatRequest::new(input).with_history(self.history());
        self.turns.push(ConversationTurn {
            role: Role::User,
            content: input.to_owned(),
            timestamp: Some(now_timestamp()),
        });

        let assistant = match engine.handle(&request) {
            ChatReply::Success(response) => ConversationTurn {
                role: Role::Assistant,
                content: response.response,
                timestamp: Some(response.timestamp),
            },
            ChatReply::Failure { body, .. } => ConversationTurn {
                role: Role::Assistant,
                content: format!("⚠️ Error: {}", body.details.unwrap_or(body.error)),
                timestamp: Some(now_timestamp()),
            },
        };
        self.turns.push(assistant);
        self.turns.last()
    }
}
