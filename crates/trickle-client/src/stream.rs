//! Lazy byte-chunk stream over one streaming HTTP response.

use bytes::Bytes;
use futures_core::Stream;
use std::future::Future;
use std::mem;
use std::pin::Pin;
use std::task::{Context, Poll};
use trickle_types::RelayError;

type ConnectFuture =
    Pin<Box<dyn Future<Output = Result<reqwest::Response, reqwest::Error>> + Send>>;
type DrainFuture = Pin<Box<dyn Future<Output = Result<String, reqwest::Error>> + Send>>;
type BodyStream = Pin<Box<dyn Stream<Item = Result<Bytes, reqwest::Error>> + Send>>;

/// Why a [`ChunkStream`] stopped yielding chunks.
///
/// Iteration itself does not distinguish these: HTTP and transport failures
/// are logged and the sequence just ends. The outcome is recorded so callers
/// that need to can tell "empty response" from "request failed" after the
/// fact.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StreamOutcome {
    /// The response body was streamed to completion.
    Completed,
    /// The server answered with a status other than 200 OK; the error body
    /// was logged and no chunks were yielded.
    HttpError { status: u16 },
    /// The connection failed before or during streaming; chunks received
    /// before the fault were yielded.
    TransportFailed,
}

enum State {
    Idle { request: reqwest::RequestBuilder },
    Connecting { connect: ConnectFuture },
    Draining { status: u16, body: DrainFuture },
    Streaming { body: BodyStream },
    Closed,
}

/// A lazy stream of raw response-body chunks from one POST request.
///
/// The request is issued on first poll. Dropping the stream at any point
/// drops the underlying response and closes the connection.
pub struct ChunkStream {
    state: State,
    outcome: Option<StreamOutcome>,
}

impl ChunkStream {
    pub(crate) fn new(request: reqwest::RequestBuilder) -> Self {
        Self {
            state: State::Idle { request },
            outcome: None,
        }
    }

    /// The termination cause, or `None` while the stream is still live.
    pub fn outcome(&self) -> Option<StreamOutcome> {
        self.outcome
    }

    fn finish(&mut self, outcome: StreamOutcome) {
        self.outcome = Some(outcome);
        self.state = State::Closed;
    }
}

impl Stream for ChunkStream {
    type Item = Bytes;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let this = self.get_mut();

        loop {
            match mem::replace(&mut this.state, State::Closed) {
                State::Idle { request } => {
                    this.state = State::Connecting {
                        connect: Box::pin(request.send()),
                    };
                }
                State::Connecting { mut connect } => match connect.as_mut().poll(cx) {
                    Poll::Ready(Ok(response)) => {
                        let status = response.status();
                        if status == reqwest::StatusCode::OK {
                            this.state = State::Streaming {
                                body: Box::pin(response.bytes_stream()),
                            };
                        } else {
                            this.state = State::Draining {
                                status: status.as_u16(),
                                body: Box::pin(response.text()),
                            };
                        }
                    }
                    Poll::Ready(Err(e)) => {
                        let err = RelayError::Network(e.to_string());
                        tracing::error!("API request failed: {err}");
                        this.finish(StreamOutcome::TransportFailed);
                        return Poll::Ready(None);
                    }
                    Poll::Pending => {
                        this.state = State::Connecting { connect };
                        return Poll::Pending;
                    }
                },
                State::Draining { status, mut body } => match body.as_mut().poll(cx) {
                    Poll::Ready(result) => {
                        let body = result.unwrap_or_else(|e| format!("<failed to read body: {e}>"));
                        let err = RelayError::Http { status, body };
                        tracing::error!("API request failed: {err}");
                        this.finish(StreamOutcome::HttpError { status });
                        return Poll::Ready(None);
                    }
                    Poll::Pending => {
                        this.state = State::Draining { status, body };
                        return Poll::Pending;
                    }
                },
                State::Streaming { mut body } => match body.as_mut().poll_next(cx) {
                    Poll::Ready(Some(Ok(chunk))) => {
                        this.state = State::Streaming { body };
                        return Poll::Ready(Some(chunk));
                    }
                    Poll::Ready(Some(Err(e))) => {
                        let err = RelayError::Network(e.to_string());
                        tracing::error!("error while streaming response: {err}");
                        this.finish(StreamOutcome::TransportFailed);
                        return Poll::Ready(None);
                    }
                    Poll::Ready(None) => {
                        this.finish(StreamOutcome::Completed);
                        return Poll::Ready(None);
                    }
                    Poll::Pending => {
                        this.state = State::Streaming { body };
                        return Poll::Pending;
                    }
                },
                State::Closed => return Poll::Ready(None),
            }
        }
    }
}
