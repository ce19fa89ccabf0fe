//! Keyword-routed campus assistant.
//!
//! A message flows through four stages:
//! 1. [`normalize`] lower-cases it.
//! 2. [`rules::RuleTable`] walks its ordered rules; the first match decides
//!    the [`Intent`].
//! 3. [`templates::render`] turns the intent into text. Only the greeting is
//!    dynamic (a randomly picked synonym).
//! 4. Anything unmatched gets [`templates::FALLBACK`].
//!
//! [`ChatEngine`] wraps the stages, validates requests and stamps responses.
//! It holds no per-conversation state and is safe to share between tasks.

pub mod normalize;
pub mod random;
pub mod rules;
pub mod templates;

use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, error, info};

use crate::config::ChatConfig;

pub use normalize::normalize;
pub use random::{FixedRandom, RandomSource, ThreadRandom};
pub use rules::{Intent, RuleTable};

/// Body text for a missing or empty message.
pub const INVALID_INPUT_MESSAGE: &str = "Message is required";
/// Body text for any unexpected failure.
pub const INTERNAL_FAILURE_MESSAGE: &str = "Something went wrong";
/// Retry hint attached to internal failures.
pub const RETRY_HINT: &str = "Please try again";

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Errors from the chat engine.
#[derive(Debug, thiserror::Error)]
pub enum ChatError {
    /// The message was missing or empty.
    #[error("Message is required")]
    InvalidInput,

    /// Matching or formatting failed unexpectedly.
    #[error("internal chat failure: {0}")]
    Internal(String),

    /// The rule table could not be built.
    #[error("failed to build rule table: {0}")]
    RuleTable(#[from] regex::Error),
}

impl ChatError {
    /// HTTP status an HTTP host should answer with.
    pub fn status_code(&self) -> u16 {
        match self {
            Self::InvalidInput => 400,
            Self::Internal(_) | Self::RuleTable(_) => 500,
        }
    }
}

// ---------------------------------------------------------------------------
// Wire types
// ---------------------------------------------------------------------------

/// Author of a conversation turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// The student.
    User,
    /// The assistant.
    Assistant,
}

/// One prior message supplied as context.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversationTurn {
    /// Who wrote it.
    pub role: Role,
    /// Message text.
    pub content: String,
    /// ISO 8601 time the turn was produced, if known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
}

/// Inbound chat request.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatRequest {
    /// The student's message. `None` when the field was absent.
    #[serde(default)]
    pub message: Option<String>,
    /// Earlier turns. Accepted but not consulted when matching.
    #[serde(default)]
    pub conversation_history: Vec<ConversationTurn>,
}

impl ChatRequest {
    /// Request with a message and no history.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: Some(message.into()),
            conversation_history: Vec::new(),
        }
    }

    /// Attach prior turns.
    #[must_use]
    pub fn with_history(mut self, history: Vec<ConversationTurn>) -> Self {
        self.conversation_history = history;
        self
    }
}

/// Successful reply.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChatResponse {
    /// Always `true`.
    pub success: bool,
    /// Reply text.
    pub response: String,
    /// ISO 8601 time the reply was produced.
    pub timestamp: String,
}

/// Failure body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorBody {
    /// Human-readable error.
    pub error: String,
    /// Secondary hint, present for internal failures.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl From<&ChatError> for ErrorBody {
    fn from(err: &ChatError) -> Self {
        match err {
            ChatError::InvalidInput => Self {
                error: INVALID_INPUT_MESSAGE.to_owned(),
                details: None,
            },
            ChatError::Internal(_) | ChatError::RuleTable(_) => Self {
                error: INTERNAL_FAILURE_MESSAGE.to_owned(),
                details: Some(RETRY_HINT.to_owned()),
            },
        }
    }
}

/// Either body, serialized without a tag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ChatReply {
    /// The engine produced a reply.
    Success(ChatResponse),
    /// The request failed.
    Failure {
        /// HTTP status an HTTP host should use.
        #[serde(skip)]
        status: u16,
        /// Serialized body.
        #[serde(flatten)]
        body: ErrorBody,
    },
}

impl ChatReply {
    /// HTTP status for this reply.
    pub fn status_code(&self) -> u16 {
        match self {
            Self::Success(_) => 200,
            Self::Failure { status, .. } => *status,
        }
    }

    /// Whether the engine produced a reply.
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }
}

impl From<ChatError> for ChatReply {
    fn from(err: ChatError) -> Self {
        Self::Failure {
            status: err.status_code(),
            body: ErrorBody::from(&err),
        }
    }
}

impl From<Result<ChatResponse, ChatError>> for ChatReply {
    fn from(result: Result<ChatResponse, ChatError>) -> Self {
        match result {
            Ok(response) => Self::Success(response),
            Err(err) => Self::from(err),
        }
    }
}

/// Current time as an ISO 8601 string with millisecond precision.
pub fn now_timestamp() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

// ---------------------------------------------------------------------------
// Engine
// ---------------------------------------------------------------------------

/// Stateless chat engine.
#[derive(Debug)]
pub struct ChatEngine {
    rules: RuleTable,
    greetings: Vec<String>,
    random: Box<dyn RandomSource>,
    preview_chars: usize,
}

impl ChatEngine {
    /// Engine with the standard rules and default configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ChatError::RuleTable`] if the rule table fails to build.
    pub fn new() -> Result<Self, ChatError> {
        Self::from_config(&ChatConfig::default())
    }

    /// Engine with the standard rules and the given configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ChatError::RuleTable`] if the rule table fails to build.
    pub fn from_config(config: &ChatConfig) -> Result<Self, ChatError> {
        Ok(Self {
            rules: RuleTable::standard()?,
            greetings: config.greetings.clone(),
            random: Box::new(ThreadRandom),
            preview_chars: config.log_preview_chars,
        })
    }

    /// Replace the random source used for greeting synonyms.
    #[must_use]
    pub fn with_random(mut self, random: Box<dyn RandomSource>) -> Self {
        self.random = random;
        self
    }

    /// The rule table in use.
    pub fn rules(&self) -> &RuleTable {
        &self.rules
    }

    /// Classify a raw message.
    ///
    /// # Errors
    ///
    /// Returns [`ChatError::InvalidInput`] for an empty message.
    pub fn classify(&self, message: &str) -> Result<Intent, ChatError> {
        let normalized = normalize(message)?;
        Ok(self.rules.classify(&normalized))
    }

    /// Reply text for a raw message.
    ///
    /// # Errors
    ///
    /// Returns [`ChatError::InvalidInput`] for an empty message and
    /// [`ChatError::Internal`] if the greeting cannot be formatted.
    pub fn reply(&self, message: &str) -> Result<String, ChatError> {
        let intent = self.classify(message)?;
        debug!(%intent, "matched intent");
        templates::render(intent, &self.greetings, self.random.as_ref())
    }

    /// Answer a request with a timestamped response.
    ///
    /// # Errors
    ///
    /// Same as [`ChatEngine::reply`]; a missing message is
    /// [`ChatError::InvalidInput`].
    pub fn respond(&self, request: &ChatRequest) -> Result<ChatResponse, ChatError> {
        let message = request.message.as_deref().ok_or(ChatError::InvalidInput)?;

        info!(
            preview = %normalize::preview(message, self.preview_chars),
            history_turns = request.conversation_history.len(),
            "processing chat request"
        );

        match self.reply(message) {
            Ok(response) => {
                debug!("response generated");
                Ok(ChatResponse {
                    success: true,
                    response,
                    timestamp: now_timestamp(),
                })
            }
            Err(ChatError::InvalidInput) => Err(ChatError::InvalidInput),
            Err(e) => {
                error!(error = %e, "chatbot error");
                Err(e)
            }
        }
    }

    /// Answer a request, folding errors into a [`ChatReply`].
    pub fn handle(&self, request: &ChatRequest) -> ChatReply {
        ChatReply::from(self.respond(request))
    }
}
