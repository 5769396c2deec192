//! Utility modules for HTTP, framing, and log hygiene

pub mod http;
pub mod json_codec;
pub mod masking;
pub mod streaming;

pub use json_codec::JsonObjectCodec;
pub use streaming::{
    JsonObjectConverter, NdjsonConverter, SseEventConverter, SseEventFuture, StreamFactory,
};
