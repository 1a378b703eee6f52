//! Provider trait for streaming chat-completion backends.

use crate::ChatMessage;
use futures_core::Stream;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::future::Future;
use std::pin::Pin;

/// Tag distinguishing kinds of streamed content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContentLabel {
    /// A fragment of the assistant's answer text.
    Content,
    /// A fragment of reasoning/thinking output.
    Reasoning,
    /// A fragment of a tool-call request.
    ToolCall,
}

impl ContentLabel {
    pub fn as_str(&self) -> &'static str {
        match self {
            ContentLabel::Content => "content",
            ContentLabel::Reasoning => "reasoning",
            ContentLabel::ToolCall => "tool_call",
        }
    }
}

impl fmt::Display for ContentLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A boxed async stream of labeled content fragments from a provider.
pub type LabeledStream = Pin<Box<dyn Stream<Item = (ContentLabel, String)> + Send>>;

/// Trait for streaming chat-completion providers.
///
/// Implementations own the protocol-specific parsing: they consume the raw
/// chunk sequence produced by the relay and emit `(label, content)` pairs in
/// the order the information became available. The stream carries no error
/// items; a request that fails simply ends the stream early, matching the
/// relay's termination semantics. Dyn-compatible so callers can hold an
/// `Arc<dyn ChatProvider>`.
pub trait ChatProvider: Send + Sync {
    /// Stream a chat completion for `messages` against `model`.
    fn stream_chat<'a>(
        &'a self,
        messages: &'a [ChatMessage],
        model: &'a str,
    ) -> Pin<Box<dyn Future<Output = LabeledStream> + Send + 'a>>;

    /// Provider name for logging/display (e.g., "anthropic").
    fn name(&self) -> &str;
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[test]
    fn provider_is_dyn_compatible() {
        // Compile-time check: ChatProvider can be used as a trait object.
        fn _accept(_p: &dyn ChatProvider) {}
    }

    #[test]
    fn arc_provider_is_send_sync() {
        // Compile-time assert: Arc<dyn ChatProvider> is Send + Sync.
        fn _assert_send_sync<T: Send + Sync>() {}
        _assert_send_sync::<Arc<dyn ChatProvider>>();
    }

    #[test]
    fn label_as_str() {
        assert_eq!(ContentLabel::Content.as_str(), "content");
        assert_eq!(ContentLabel::Reasoning.as_str(), "reasoning");
        assert_eq!(ContentLabel::ToolCall.as_str(), "tool_call");
    }

    #[test]
    fn label_serializes_snake_case() {
        assert_eq!(
            serde_json::to_string(&ContentLabel::ToolCall).unwrap(),
            "\"tool_call\""
        );
    }
}
