//! Test utilities for storyframe_script tests.
//!
//! This module provides a mock completion driver and script builders.

pub mod mock_driver;

#[allow(unused_imports)]
pub use mock_driver::{MockBehavior, MockCompletionDriver, MockResponse};

/// A screenplay of `scenes` scenes, each with a heading and `sentences`
/// two-word sentences.
#[allow(dead_code)]
pub fn scene_script(scenes: usize, sentences: usize) -> String {
    (1..=scenes)
        .map(|n| format!("INT. ROOM {} - DAY\n\n{}", n, "Rain falls. ".repeat(sentences)))
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// Prose of `paragraphs` blank-line separated paragraphs, each with
/// `sentences` two-word sentences and no scene headings.
#[allow(dead_code)]
pub fn prose_script(paragraphs: usize, sentences: usize) -> String {
    (0..paragraphs)
        .map(|_| "Wind howls. ".repeat(sentences).trim_end().to_string())
        .collect::<Vec<_>>()
        .join("\n\n")
}
