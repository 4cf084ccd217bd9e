//! Driver for OpenAI-compatible chat completions APIs.
//!
//! Works with OpenAI itself and with any provider exposing the same
//! `/chat/completions` endpoint (Groq, local servers, gateways).

mod client;
mod conversion;
mod dto;

pub use client::{API_KEY_ENV, OpenAICompatibleClient};
pub use conversion::{from_chat_response, status_error, to_chat_request};
pub use dto::{
    ChatChoice, ChatMessage, ChatMessageBuilder, ChatRequest, ChatRequestBuilder, ChatResponse,
    ChatResponseMessage,
};
