//! End-to-end frame extraction over a completion driver.

use crate::{
    SegmentationConfig, StoryframeConfig, ScriptShape, assemble, is_preformatted, parse,
    parse_markers, segment_prompt, single_set_prompt,
};
use futures_util::{StreamExt, stream};
use serde::Serialize;
use std::future::Future;
use std::pin::pin;
use storyframe_core::{CompletionRequest, CompletionSettings, FrameRecord, Role};
use storyframe_error::{CompletionError, CompletionErrorKind, StoryframeResult};
use storyframe_interface::CompletionDriver;
use tracing::{debug, error, info, instrument, warn};

/// What an extraction run produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Extraction {
    /// Frames in generation order
    pub frames: Vec<FrameRecord>,
    /// 1-based indices of segments whose completion call failed
    pub skipped_segments: Vec<usize>,
    /// How the script was classified
    pub shape: ScriptShape,
    /// Whether the run was cancelled before every segment finished
    pub cancelled: bool,
}

impl Extraction {
    fn finished(frames: Vec<FrameRecord>, shape: ScriptShape) -> Self {
        Self {
            frames,
            skipped_segments: Vec::new(),
            shape,
            cancelled: false,
        }
    }
}

/// Turns scripts into frame records, calling the completion service once per
/// segment.
///
/// Scripts that look pre-formatted (`"Frame "` plus a colon) are parsed
/// for markers directly and never reach the driver, even when no marker
/// parses.
///
/// # Example
///
/// ```rust,ignore
/// use storyframe_script::FrameExtractor;
///
/// let extractor = FrameExtractor::new(driver);
/// let frames = extractor.extract(&script, 6).await?;
/// ```
pub struct FrameExtractor<D: CompletionDriver> {
    driver: D,
    segmentation: SegmentationConfig,
    completion: CompletionSettings,
}

impl<D: CompletionDriver> FrameExtractor<D> {
    /// Create an extractor with default settings.
    pub fn new(driver: D) -> Self {
        Self {
            driver,
            segmentation: SegmentationConfig::default(),
            completion: CompletionSettings::default(),
        }
    }

    /// Create an extractor using loaded configuration.
    pub fn with_config(driver: D, config: &StoryframeConfig) -> Self {
        Self {
            driver,
            segmentation: config.segmentation.clone(),
            completion: config.completion.clone(),
        }
    }

    /// Replace the segmentation settings.
    pub fn with_segmentation(mut self, segmentation: SegmentationConfig) -> Self {
        self.segmentation = segmentation;
        self
    }

    /// Get a reference to the driver.
    pub fn driver(&self) -> &D {
        &self.driver
    }

    /// Get the segmentation settings.
    pub fn segmentation(&self) -> &SegmentationConfig {
        &self.segmentation
    }

    /// Extract frames from a script, `requested_frames_per_set` per set.
    ///
    /// # Errors
    ///
    /// Returns the completion error when the script is extracted as a single
    /// set and that call fails. Failed segments of a multi-set script are
    /// skipped instead.
    pub async fn extract(
        &self,
        script: &str,
        requested_frames_per_set: usize,
    ) -> StoryframeResult<Vec<FrameRecord>> {
        self.run(script, requested_frames_per_set)
            .await
            .map(|extraction| extraction.frames)
    }

    /// Like [`extract`](Self::extract), but reports skipped segments and the
    /// script's shape as well.
    pub async fn run(
        &self,
        script: &str,
        requested_frames_per_set: usize,
    ) -> StoryframeResult<Extraction> {
        self.run_until(script, requested_frames_per_set, std::future::pending::<()>())
            .await
    }

    /// Runs an extraction that stops early once `cancel` resolves.
    ///
    /// In-flight segment calls are dropped on cancellation; frames from
    /// segments that already finished are returned with `cancelled` set.
    #[instrument(
        skip(self, script, cancel),
        fields(
            provider = self.driver.provider_name(),
            model = self.driver.model_name(),
            script_len = script.len(),
        )
    )]
    pub async fn run_until<C>(
        &self,
        script: &str,
        requested_frames_per_set: usize,
        cancel: C,
    ) -> StoryframeResult<Extraction>
    where
        C: Future<Output = ()>,
    {
        let requested = requested_frames_per_set.max(1);

        if script.trim().is_empty() {
            debug!("Blank script, nothing to extract");
            return Ok(Extraction::finished(Vec::new(), ScriptShape::Prose));
        }

        if is_preformatted(script) {
            let frames: Vec<FrameRecord> = parse_markers(script)
                .into_iter()
                .take(self.segmentation.preformatted_max_frames)
                .map(FrameRecord::from)
                .collect();
            if frames.is_empty() {
                warn!("Script looked pre-formatted but had no usable frame markers");
            } else {
                info!(frames = frames.len(), "Using frame markers already in script");
            }
            return Ok(Extraction::finished(frames, ScriptShape::PreFormatted));
        }

        let plan = self.segmentation.planner().plan(script, requested);
        let shape = ScriptShape::layout(script, plan.num_sets);
        let single = plan.num_sets == 1;
        let total = plan.segments.len();

        let calls = plan.segments.iter().enumerate().map(|(i, segment)| {
            let prompt = if single {
                single_set_prompt(segment, requested)
            } else {
                segment_prompt(segment, requested, i + 1, total)
            };
            async move { (i + 1, self.complete(prompt).await) }
        });

        let mut results = pin!(
            stream::iter(calls)
                .buffered(self.segmentation.max_concurrent_segments.max(1))
                .take_until(cancel)
        );

        let mut frames = Vec::new();
        let mut skipped_segments = Vec::new();
        let mut finished = 0;

        while let Some((index, outcome)) = results.next().await {
            finished += 1;
            match outcome {
                Ok(text) => {
                    let descriptions = parse(&text, requested);
                    debug!(segment = index, frames = descriptions.len(), "Segment extracted");
                    frames.extend(FrameRecord::numbered(descriptions, index as u32));
                }
                Err(e) if single => {
                    error!(error = %e, "Frame extraction failed");
                    return Err(e);
                }
                Err(e) => {
                    warn!(segment = index, total, error = %e, "Skipping segment");
                    skipped_segments.push(index);
                }
            }
        }

        let cancelled = finished < total;
        if cancelled {
            warn!(finished, total, "Extraction cancelled");
        }
        info!(
            frames = frames.len(),
            skipped = skipped_segments.len(),
            %shape,
            "Extraction complete"
        );

        Ok(Extraction {
            frames,
            skipped_segments,
            shape,
            cancelled,
        })
    }

    /// Rebuilds the frame list for an edited script.
    ///
    /// Marked scripts keep their `Part N` pages and marker numbers; anything
    /// else is extracted with the default frames per set. The result is
    /// ordered by page and position.
    #[instrument(skip(self, script), fields(script_len = script.len()))]
    pub async fn revise(&self, script: &str) -> StoryframeResult<Vec<FrameRecord>> {
        let marked: Vec<FrameRecord> = parse_markers(script)
            .into_iter()
            .map(FrameRecord::from)
            .collect();

        let frames = if marked.is_empty() {
            debug!("No frame markers, extracting");
            self.extract(script, self.segmentation.default_frames_per_set)
                .await?
        } else {
            marked
        };
        Ok(assemble(frames))
    }

    async fn complete(&self, prompt: String) -> StoryframeResult<String> {
        let request = CompletionRequest::builder()
            .prompt(prompt)
            .role(Role::System)
            .max_tokens(Some(self.completion.max_tokens))
            .temperature(Some(self.completion.temperature))
            .build()
            .map_err(|e| {
                CompletionError::new(CompletionErrorKind::InvalidRequest(format!(
                    "Failed to build request: {}",
                    e
                )))
            })?;

        let response = self.driver.complete(&request).await?;
        Ok(response.text)
    }
}
