//! storyframe - screenplays in, storyboard frames out.
//!
//! storyframe reads a script and produces an ordered list of frames, each a
//! short visual description with a page and a position on that page. Scripts
//! that already mark their frames are parsed directly; anything else is
//! segmented and sent to a text completion service one segment at a time.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use storyframe::{FrameExtractor, OpenAICompatibleClient, StoryframeConfig};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = StoryframeConfig::load()?;
//!     let client = OpenAICompatibleClient::from_config(&config.completion)?;
//!     let extractor = FrameExtractor::with_config(client, &config);
//!
//!     let script = std::fs::read_to_string("pilot.txt")?;
//!     for frame in extractor.extract(&script, 6).await? {
//!         println!("{}", frame);
//!     }
//!     Ok(())
//! }
//! ```
//!
//! # Architecture
//!
//! - `storyframe_core` - Frame records and completion request types
//! - `storyframe_error` - Error types
//! - `storyframe_interface` - The `CompletionDriver` trait
//! - `storyframe_script` - Parsing, planning, extraction and configuration
//! - `storyframe_models` - OpenAI-compatible completion driver
//!
//! This crate re-exports everything for convenience.

pub use storyframe_core::*;
pub use storyframe_error::*;
pub use storyframe_interface::*;
pub use storyframe_models::*;
pub use storyframe_script::*;
