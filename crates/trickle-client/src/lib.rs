//! Streaming HTTP request relay for chat-completion providers.
//!
//! [`RelayClient`] issues one POST per call and exposes the response body as
//! a lazy stream of byte chunks. Provider implementations layer protocol
//! parsing on top via the `ChatProvider` trait from `trickle-types`, with
//! [`SseDecoder`] handling the common server-sent-events framing.

mod config;
mod relay;
mod sse;
mod stream;

pub use config::ClientConfig;
pub use relay::RelayClient;
pub use sse::{SseDecoder, SseFrame};
pub use stream::{ChunkStream, StreamOutcome};
