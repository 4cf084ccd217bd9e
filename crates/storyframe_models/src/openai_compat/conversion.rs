//! Conversions between storyframe and chat completions types.

use super::{ChatMessage, ChatRequest, ChatResponse};
use storyframe_core::{CompletionRequest, CompletionResponse};
use storyframe_error::{CompletionError, CompletionErrorKind};

/// Builds the wire request, filling unset parameters from the client's
/// defaults.
pub fn to_chat_request(
    req: &CompletionRequest,
    default_model: &str,
    default_max_tokens: u32,
    default_temperature: f32,
) -> Result<ChatRequest, CompletionError> {
    let message = ChatMessage::builder()
        .role(*req.role())
        .content(req.prompt().clone())
        .build()
        .map_err(|e| CompletionError::new(CompletionErrorKind::InvalidRequest(e.to_string())))?;

    ChatRequest::builder()
        .model(req.model().clone().unwrap_or_else(|| default_model.to_string()))
        .messages(vec![message])
        .max_tokens(req.max_tokens().or(Some(default_max_tokens)))
        .temperature(req.temperature().or(Some(default_temperature)))
        .build()
        .map_err(|e| CompletionError::new(CompletionErrorKind::InvalidRequest(e.to_string())))
}

/// Takes the first choice's text, trimmed.
pub fn from_chat_response(resp: &ChatResponse) -> Result<CompletionResponse, CompletionError> {
    let text = resp
        .choices()
        .first()
        .and_then(|choice| choice.message().content().as_deref())
        .map(str::trim)
        .filter(|text| !text.is_empty())
        .ok_or_else(|| CompletionError::new(CompletionErrorKind::EmptyResponse))?;
    Ok(CompletionResponse::new(text))
}

/// Classifies a non-success HTTP status.
pub fn status_error(status: u16, message: String) -> CompletionErrorKind {
    match status {
        429 => CompletionErrorKind::RateLimited,
        _ => CompletionErrorKind::Api { status, message },
    }
}
