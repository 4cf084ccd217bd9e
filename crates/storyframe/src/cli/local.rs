//! Handlers that never call the completion service.

use super::output::{emit, render_descriptions, render_frames, render_plan};
use super::read_script;
use std::path::Path;
use storyframe::{
    ScriptShape, StoryframeConfig, StoryframeResult, paginate, parse_with_strategy,
};
use tracing::info;

/// Print the segmentation plan for a script.
pub fn plan_file(
    path: &Path,
    frames: Option<usize>,
    config: &StoryframeConfig,
) -> StoryframeResult<()> {
    let script = read_script(path)?;
    let requested = frames.unwrap_or(config.segmentation.default_frames_per_set);

    let plan = config.segmentation.planner().plan(&script, requested);
    let shape = ScriptShape::classify(&script, plan.num_sets);

    emit(&render_plan(&plan, &shape.to_string()))
}

/// Parse a frame list or marked script and print the descriptions.
///
/// With `per_page`, the descriptions are printed as numbered pages.
pub fn parse_file(path: &Path, max: usize, per_page: Option<usize>) -> StoryframeResult<()> {
    let text = read_script(path)?;

    match parse_with_strategy(&text, max) {
        Some((strategy, descriptions)) => {
            info!(%strategy, count = descriptions.len(), "Parsed descriptions");
            match per_page {
                Some(per_page) => emit(&render_frames(&paginate(descriptions, per_page))),
                None => emit(&render_descriptions(&descriptions)),
            }
        }
        None => Ok(()),
    }
}
