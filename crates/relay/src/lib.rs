//! HTTP client for the external assistant (inference) service.
//!
//! The relay is a single synchronous call per chat query: the caller's own
//! bearer token travels with the request so the assistant can apply its own
//! policy, and a bounded timeout keeps a wedged upstream from hanging the
//! inbound request.

mod client;

pub use client::{AssistantClient, AssistantError, AssistantReply};
