//! Script segmentation and frame extraction for storyframe.
//!
//! This crate turns a screenplay or free-text script into an ordered list of
//! storyboard frames.
//!
//! # Features
//!
//! - **Response parsing**: frame markers, numbered lists, loose numbering, sentences
//! - **Segment planning**: word-count sizing, scene-heading and paragraph splits
//! - **Extraction pipeline**: one completion call per segment with failure isolation
//! - **Page assembly**: regroup frames by page and position
//! - **Layered configuration**: bundled defaults, user files and environment
//!
//! # Example
//!
//! ```rust,ignore
//! use storyframe_script::{FrameExtractor, StoryframeConfig};
//! use storyframe_models::OpenAICompatibleClient;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = StoryframeConfig::load()?;
//! let client = OpenAICompatibleClient::from_config(&config.completion)?;
//! let extractor = FrameExtractor::with_config(client, &config);
//!
//! let frames = extractor.extract(&std::fs::read_to_string("script.txt")?, 6).await?;
//! for frame in &frames {
//!     println!("{}", frame);
//! }
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod pages;
mod parser;
mod pipeline;
mod planner;
mod prompt;

pub use config::{SegmentationConfig, StoryframeConfig};
pub use pages::{assemble, frames_on_page, page_numbers, paginate};
pub use parser::{ParseStrategy, ParsedFrame, parse, parse_markers, parse_with_strategy};
pub use pipeline::{Extraction, FrameExtractor};
pub use planner::{
    MAX_SETS, PlannerSettings, SINGLE_SET_WORD_THRESHOLD, ScriptShape, SegmentPlan,
    WORDS_PER_FRAME, is_preformatted, plan, split_segments, word_count,
};
pub use prompt::{segment_prompt, single_set_prompt};
