//! Newline-delimited JSON request loop.
//!
//! Each input line is one `ChatRequest`; each output line is the matching
//! success or error body. Lines are answered in order.

use anyhow::Context;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tracing::{debug, info};

use crate::chat::{ChatEngine, ChatError, ChatReply, ChatRequest};

/// Serialized internal-failure body, used if a reply cannot be serialized.
const INTERNAL_FAILURE_BODY: &str = r#"{"error":"Something went wrong","details":"Please try again"}"#;

/// Parse one request line and produce the reply.
///
/// Malformed JSON, or a `message` that is not a string, counts as invalid
/// input.
pub fn handle_line(engine: &ChatEngine, line: &str) -> ChatReply {
    match serde_json::from_str::<ChatRequest>(line) {
        Ok(request) => engine.handle(&request),
        Err(e) => {
            debug!(error = %e, "rejecting malformed request line");
            ChatReply::from(ChatError::InvalidInput)
        }
    }
}

/// Serialize a reply as a single JSON line (without the newline).
pub fn encode_reply(reply: &ChatReply) -> String {
    serde_json::to_string(reply).unwrap_or_else(|_| INTERNAL_FAILURE_BODY.to_owned())
}

/// Answer every non-blank line from `reader` on `writer` until EOF.
///
/// Returns the number of requests answered.
///
/// # Errors
///
/// Returns an error if reading or writing fails.
pub async fn run<R, W>(engine: &ChatEngine, reader: R, mut writer: W) -> anyhow::Result<u64>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut lines = reader.lines();
    let mut answered: u64 = 0;

    while let Some(line) = lines.next_line().await.context("failed to read request")? {
        if line.trim().is_empty() {
            continue;
        }

        let reply = handle_line(engine, &line);
        let mut encoded = encode_reply(&reply);
        encoded.push('\n');
        writer
            .write_all(encoded.as_bytes())
            .await
            .context("failed to write reply")?;
        writer.flush().await.context("failed to flush reply")?;
        answered = answered.saturating_add(1);
    }

    info!(answered, "request stream closed");
    Ok(answered)
}
