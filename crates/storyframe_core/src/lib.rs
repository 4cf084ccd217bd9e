//! Core data types for storyframe.
//!
//! This crate holds the plain data exchanged between the script parser, the
//! completion drivers and callers: frame records, completion requests and completion settings.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod frame;
mod request;
mod role;
mod settings;

pub use frame::FrameRecord;
pub use request::{CompletionRequest, CompletionRequestBuilder, CompletionResponse};
pub use role::Role;
pub use settings::{CompletionSettings, DEFAULT_BASE_URL, DEFAULT_MODEL};
