//! Completion service drivers for storyframe.
//!
//! # Example
//!
//! ```no_run
//! use storyframe_core::{CompletionRequest, CompletionSettings};
//! use storyframe_interface::CompletionDriver;
//! use storyframe_models::OpenAICompatibleClient;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let client = OpenAICompatibleClient::from_config(&CompletionSettings::default())?;
//! let request = CompletionRequest::from_prompt("List three shots of a harbor.\n1.");
//! let response = client.complete(&request).await?;
//! println!("{}", response.text);
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod openai_compat;

pub use openai_compat::{
    API_KEY_ENV, ChatChoice, ChatMessage, ChatMessageBuilder, ChatRequest, ChatRequestBuilder,
    ChatResponse, ChatResponseMessage, OpenAICompatibleClient, from_chat_response, status_error,
    to_chat_request,
};
