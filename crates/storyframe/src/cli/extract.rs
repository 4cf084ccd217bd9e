//! Handlers that call the completion service.

use super::commands::OutputFormat;
use super::output::{emit, render_extraction, render_frames, to_json};
use super::read_script;
use std::path::Path;
use storyframe::{FrameExtractor, OpenAICompatibleClient, StoryframeConfig, StoryframeResult};
use tracing::{info, warn};

fn extractor(config: &StoryframeConfig) -> StoryframeResult<FrameExtractor<OpenAICompatibleClient>> {
    let client = OpenAICompatibleClient::from_config(&config.completion)?;
    Ok(FrameExtractor::with_config(client, config))
}

/// Extract frames from a script file and print them.
///
/// Ctrl-C stops outstanding segment calls; frames gathered so far are still
/// printed.
pub async fn extract(
    path: &Path,
    frames: Option<usize>,
    format: OutputFormat,
    config: &StoryframeConfig,
) -> StoryframeResult<()> {
    let script = read_script(path)?;
    let requested = frames.unwrap_or(config.segmentation.default_frames_per_set);
    let extractor = extractor(config)?;

    info!(path = %path.display(), requested, "Extracting frames");
    let cancel = async {
        if tokio::signal::ctrl_c().await.is_err() {
            // No signal handler available; never cancel.
            std::future::pending::<()>().await;
        }
    };
    let extraction = extractor.run_until(&script, requested, cancel).await?;
    if extraction.cancelled {
        warn!("Interrupted, printing partial results");
    }

    match format {
        OutputFormat::Json => emit(&to_json(&extraction)?),
        OutputFormat::Human => emit(&render_extraction(&extraction)),
    }
}

/// Rebuild the frame list for an edited script and print it.
pub async fn revise(
    path: &Path,
    format: OutputFormat,
    config: &StoryframeConfig,
) -> StoryframeResult<()> {
    let script = read_script(path)?;
    let extractor = extractor(config)?;

    let frames = extractor.revise(&script).await?;

    match format {
        OutputFormat::Json => emit(&to_json(&frames)?),
        OutputFormat::Human => emit(&render_frames(&frames)),
    }
}
