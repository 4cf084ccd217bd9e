//! Trait definitions for storyframe.
//!
//! The script parser never talks to a model directly; it goes through the
//! [`CompletionDriver`] trait defined here so that any text completion
//! backend (or a test double) can be plugged in.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod traits;

pub use traits::CompletionDriver;
