//! Shared chat types, provider trait, and error hierarchy for Trickle.

pub mod error;
pub mod message;
pub mod provider;

pub use error::RelayError;
pub use message::{ChatMessage, Role};
pub use provider::{ChatProvider, ContentLabel, LabeledStream};
