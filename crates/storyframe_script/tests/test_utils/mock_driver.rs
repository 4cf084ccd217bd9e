//! Mock completion driver for testing.

use async_trait::async_trait;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use storyframe_core::{CompletionRequest, CompletionResponse};
use storyframe_error::{CompletionError, CompletionErrorKind, StoryframeError, StoryframeResult};
use storyframe_interface::CompletionDriver;

/// Behavior configuration for mock responses.
#[derive(Debug, Clone)]
pub enum MockBehavior {
    /// Always return success with the given text
    Success(String),
    /// Always return the specified error
    Error(CompletionErrorKind),
    /// Return responses in call order
    Sequence(Vec<MockResponse>),
    /// Pick the response by the segment number named in the prompt
    /// (single-set prompts count as segment 1)
    BySegment(Vec<MockResponse>),
}

/// A single mock response (success or error).
#[derive(Debug, Clone)]
pub enum MockResponse {
    Success(String),
    Error(CompletionErrorKind),
}

/// Mock completion driver for testing.
///
/// Records every prompt it receives so tests can check call counts and
/// prompt text without a real API.
pub struct MockCompletionDriver {
    behavior: MockBehavior,
    call_count: Arc<Mutex<usize>>,
    prompts: Arc<Mutex<Vec<String>>>,
    segment_delays: Vec<Duration>,
    model_name: String,
}

impl MockCompletionDriver {
    /// Create a mock driver with custom behavior.
    pub fn new_with_behavior(behavior: MockBehavior) -> Self {
        Self {
            behavior,
            call_count: Arc::new(Mutex::new(0)),
            prompts: Arc::new(Mutex::new(Vec::new())),
            segment_delays: Vec::new(),
            model_name: "mock-model".to_string(),
        }
    }

    /// Create a mock driver that always succeeds with the given text.
    pub fn new_success(text: impl Into<String>) -> Self {
        Self::new_with_behavior(MockBehavior::Success(text.into()))
    }

    /// Create a mock driver that always fails with the given error.
    #[allow(dead_code)]
    pub fn new_error(error: CompletionErrorKind) -> Self {
        Self::new_with_behavior(MockBehavior::Error(error))
    }

    /// Create a mock driver that answers each segment with its own response.
    #[allow(dead_code)]
    pub fn new_by_segment(responses: Vec<MockResponse>) -> Self {
        Self::new_with_behavior(MockBehavior::BySegment(responses))
    }

    /// Delay the response for segment `i + 1` by `delays[i]`.
    #[allow(dead_code)]
    pub fn with_segment_delays(mut self, delays: Vec<Duration>) -> Self {
        self.segment_delays = delays;
        self
    }

    /// Get the number of times complete() was called.
    pub fn call_count(&self) -> usize {
        *self.call_count.lock().unwrap()
    }

    /// Every prompt received, in call order.
    #[allow(dead_code)]
    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }

    fn segment_of(prompt: &str) -> usize {
        prompt
            .split("This is segment ")
            .nth(1)
            .and_then(|rest| rest.split_whitespace().next())
            .and_then(|n| n.parse().ok())
            .unwrap_or(1)
    }

    fn respond(response: &MockResponse) -> StoryframeResult<CompletionResponse> {
        match response {
            MockResponse::Success(text) => Ok(CompletionResponse::new(text.clone())),
            MockResponse::Error(kind) => Err(StoryframeError::from(CompletionError::new(kind.clone()))),
        }
    }

    fn exhausted(what: &str, position: usize, len: usize) -> StoryframeResult<CompletionResponse> {
        Err(StoryframeError::from(CompletionError::new(
            CompletionErrorKind::Http(format!(
                "Mock {} exhausted ({} beyond {} responses)",
                what, position, len
            )),
        )))
    }

    fn next_response(&self, segment: usize) -> StoryframeResult<CompletionResponse> {
        let mut count = self.call_count.lock().unwrap();
        let current_count = *count;
        *count += 1;

        match &self.behavior {
            MockBehavior::Success(text) => Ok(CompletionResponse::new(text.clone())),
            MockBehavior::Error(kind) => {
                Err(StoryframeError::from(CompletionError::new(kind.clone())))
            }
            MockBehavior::Sequence(responses) => match responses.get(current_count) {
                Some(response) => Self::respond(response),
                None => Self::exhausted("sequence", current_count + 1, responses.len()),
            },
            MockBehavior::BySegment(responses) => match responses.get(segment - 1) {
                Some(response) => Self::respond(response),
                None => Self::exhausted("segment list", segment, responses.len()),
            },
        }
    }
}

#[async_trait]
impl CompletionDriver for MockCompletionDriver {
    async fn complete(&self, req: &CompletionRequest) -> StoryframeResult<CompletionResponse> {
        self.prompts.lock().unwrap().push(req.prompt().clone());
        let segment = Self::segment_of(req.prompt());

        let delay = self
            .segment_delays
            .get(segment - 1)
            .copied()
            .unwrap_or(Duration::from_millis(1));
        tokio::time::sleep(delay).await;

        self.next_response(segment)
    }

    fn provider_name(&self) -> &'static str {
        "mock"
    }

    fn model_name(&self) -> &str {
        &self.model_name
    }
}
