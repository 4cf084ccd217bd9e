//! Error types for storyframe.
//!
//! Every error follows the `ErrorKind` + wrapper struct pattern:
//! - `*ErrorKind` enum names the specific condition
//! - `*Error` struct wraps the kind with the source location that created it
//! - constructors use `#[track_caller]` so the location is captured automatically
//!
//! # Examples
//!
//! ```
//! use storyframe_error::{CompletionError, CompletionErrorKind, StoryframeResult};
//!
//! fn call_model() -> StoryframeResult<String> {
//!     Err(CompletionError::new(CompletionErrorKind::Timeout))?
//! }
//!
//! match call_model() {
//!     Ok(text) => println!("Got: {}", text),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod completion;
mod config;
mod error;
mod output;
mod script;

pub use completion::{CompletionError, CompletionErrorKind};
pub use config::{ConfigError, ConfigErrorKind};
pub use error::{StoryframeError, StoryframeErrorKind, StoryframeResult};
pub use output::{OutputError, OutputErrorKind};
pub use script::{ScriptError, ScriptErrorKind};
