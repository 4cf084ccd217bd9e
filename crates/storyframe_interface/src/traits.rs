//! Trait definitions for text completion backends.

use async_trait::async_trait;
use std::sync::Arc;
use storyframe_core::{CompletionRequest, CompletionResponse};
use storyframe_error::StoryframeResult;

/// Core trait that every completion backend implements.
///
/// A backend takes one prompt and returns free text. Failures (network,
/// timeout, quota, malformed responses) are reported as
/// [`storyframe_error::CompletionError`] wrapped in the result.
#[async_trait]
pub trait CompletionDriver: Send + Sync {
    /// Complete the prompt carried by `req`.
    async fn complete(&self, req: &CompletionRequest) -> StoryframeResult<CompletionResponse>;

    /// Provider name (e.g., "openai", "groq", "mock").
    fn provider_name(&self) -> &'static str;

    /// Model identifier (e.g., "gpt-3.5-turbo").
    fn model_name(&self) -> &str;
}

#[async_trait]
impl<T: CompletionDriver + ?Sized> CompletionDriver for Box<T> {
    async fn complete(&self, req: &CompletionRequest) -> StoryframeResult<CompletionResponse> {
        (**self).complete(req).await
    }

    fn provider_name(&self) -> &'static str {
        (**self).provider_name()
    }

    fn model_name(&self) -> &str {
        (**self).model_name()
    }
}

#[async_trait]
impl<T: CompletionDriver + ?Sized> CompletionDriver for Arc<T> {
    async fn complete(&self, req: &CompletionRequest) -> StoryframeResult<CompletionResponse> {
        (**self).complete(req).await
    }

    fn provider_name(&self) -> &'static str {
        (**self).provider_name()
    }

    fn model_name(&self) -> &str {
        (**self).model_name()
    }
}
