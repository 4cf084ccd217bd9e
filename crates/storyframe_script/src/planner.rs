//! Sizing and segmentation of scripts into frame-sets.
//!
//! Long scripts are split so that each completion call sees a manageable
//! segment. The planner estimates how many sets of frames the script needs
//! from its word count, then cuts the script at scene headings when there are
//! enough of them and at paragraph breaks otherwise.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;
use tracing::{debug, info, instrument};

/// Roughly one frame per this many words of script.
pub const WORDS_PER_FRAME: usize = 175;

/// Scripts shorter than this always produce a single set.
pub const SINGLE_SET_WORD_THRESHOLD: usize = 1000;

/// Upper bound on the number of sets for very long scripts.
pub const MAX_SETS: usize = 50;

const PARAGRAPH_BREAK: &str = "\n\n";

static SCENE_HEADING: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(?:INT\.|EXT\.|INT/EXT\.|I/E\.)\s+[\w\s\-]+").expect("Valid scene heading regex")
});

/// How a script is laid out, as far as extraction is concerned.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display,
)]
#[serde(rename_all = "snake_case")]
pub enum ScriptShape {
    /// Already carries `Frame N:` markers
    #[display("pre-formatted")]
    PreFormatted,
    /// Has enough scene headings to drive segmentation
    #[display("scene-structured")]
    SceneStructured,
    /// Neither
    #[display("prose")]
    Prose,
}

impl ScriptShape {
    /// Classifies a script planned into `num_sets` sets.
    ///
    /// # Examples
    ///
    /// ```
    /// use storyframe_script::ScriptShape;
    ///
    /// assert_eq!(ScriptShape::classify("Frame 1: Opening", 1), ScriptShape::PreFormatted);
    /// assert_eq!(ScriptShape::classify("INT. OFFICE - DAY\nShe types.", 1), ScriptShape::SceneStructured);
    /// assert_eq!(ScriptShape::classify("Once upon a time.", 1), ScriptShape::Prose);
    /// ```
    pub fn classify(script: &str, num_sets: usize) -> Self {
        if is_preformatted(script) {
            ScriptShape::PreFormatted
        } else {
            Self::layout(script, num_sets)
        }
    }

    /// Classifies by scene headings alone, ignoring frame markers.
    pub fn layout(script: &str, num_sets: usize) -> Self {
        let headings = SCENE_HEADING.find_iter(script).count();
        if headings > 0 && headings >= num_sets {
            ScriptShape::SceneStructured
        } else {
            ScriptShape::Prose
        }
    }
}

/// Whether a script already looks like frame-marked output.
pub fn is_preformatted(script: &str) -> bool {
    script.contains("Frame ") && script.contains(':')
}

/// Number of whitespace-delimited words.
pub fn word_count(script: &str) -> usize {
    script.split_whitespace().count()
}

/// Tunable sizing knobs for [`PlannerSettings::plan`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlannerSettings {
    /// Words of script per estimated frame
    pub words_per_frame: usize,
    /// Below this word count a script is a single set
    pub single_set_word_threshold: usize,
    /// Maximum number of sets
    pub max_sets: usize,
}

impl Default for PlannerSettings {
    fn default() -> Self {
        Self {
            words_per_frame: WORDS_PER_FRAME,
            single_set_word_threshold: SINGLE_SET_WORD_THRESHOLD,
            max_sets: MAX_SETS,
        }
    }
}

/// The outcome of planning a script.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SegmentPlan {
    /// Whitespace-delimited words in the script
    pub word_count: usize,
    /// Frames the whole script is expected to need
    pub estimated_total_frames: usize,
    /// Number of frame-sets to extract
    pub num_sets: usize,
    /// Script text for each set, at most `num_sets` of them
    pub segments: Vec<String>,
}

impl PlannerSettings {
    /// Number of sets for a script of `words` words.
    ///
    /// Returns `(estimated_total_frames, num_sets)`.
    pub fn size(&self, words: usize, requested_frames_per_set: usize) -> (usize, usize) {
        let requested = requested_frames_per_set.max(1);
        let estimated = requested.max(words / self.words_per_frame.max(1));
        let mut num_sets = (estimated / requested).max(1);
        if words < self.single_set_word_threshold {
            num_sets = 1;
        }
        (estimated, num_sets.min(self.max_sets.max(1)))
    }

    /// Plans extraction of `requested_frames_per_set` frames per set.
    ///
    /// A single-set plan has the entire script as its only segment.
    #[instrument(skip(self, script), fields(script_len = script.len()))]
    pub fn plan(&self, script: &str, requested_frames_per_set: usize) -> SegmentPlan {
        let words = word_count(script);
        let (estimated_total_frames, num_sets) = self.size(words, requested_frames_per_set);

        info!(
            words,
            estimated_total_frames, num_sets, "Planned script segmentation"
        );

        let segments = if num_sets == 1 {
            vec![script.to_string()]
        } else {
            split_segments(script, num_sets)
        };

        SegmentPlan {
            word_count: words,
            estimated_total_frames,
            num_sets,
            segments,
        }
    }
}

/// Plans a script with the default [`PlannerSettings`].
///
/// # Examples
///
/// ```
/// use storyframe_script::plan;
///
/// let plan = plan("A short scene. Nothing more.", 6);
/// assert_eq!(plan.num_sets, 1);
/// assert_eq!(plan.segments, vec!["A short scene. Nothing more."]);
/// ```
pub fn plan(script: &str, requested_frames_per_set: usize) -> SegmentPlan {
    PlannerSettings::default().plan(script, requested_frames_per_set)
}

/// Splits a script into at most `num_sets` segments.
pub fn split_segments(script: &str, num_sets: usize) -> Vec<String> {
    let num_sets = num_sets.max(1);
    let headings: Vec<usize> = SCENE_HEADING.find_iter(script).map(|m| m.start()).collect();

    let mut segments = if headings.len() >= num_sets {
        debug!(headings = headings.len(), "Segmenting on scene headings");
        split_on_headings(script, &headings, num_sets)
    } else {
        debug!(headings = headings.len(), "Too few scene headings, segmenting on paragraphs");
        split_on_paragraphs(script, num_sets)
    };
    segments.truncate(num_sets);
    segments
}

/// Cuts at every `bucket`-th heading, so uneven heading counts give more
/// boundaries than sets. The caller truncates.
fn split_on_headings(script: &str, headings: &[usize], num_sets: usize) -> Vec<String> {
    let bucket = (headings.len() / num_sets).max(1);

    let mut boundaries = vec![0];
    boundaries.extend(headings.iter().step_by(bucket).copied());
    boundaries.push(script.len());
    // A heading at offset 0 duplicates the leading boundary. Merging them
    // keeps the first bucket as its own segment instead of skipping it.
    boundaries.dedup();

    boundaries
        .windows(2)
        .map(|pair| script[pair[0]..pair[1]].trim())
        .filter(|segment| !segment.is_empty())
        .map(str::to_string)
        .collect()
}

fn split_on_paragraphs(script: &str, num_sets: usize) -> Vec<String> {
    let paragraphs: Vec<&str> = script
        .split(PARAGRAPH_BREAK)
        .filter(|p| !p.trim().is_empty())
        .collect();
    let group = (paragraphs.len() / num_sets).max(1);

    paragraphs
        .chunks(group)
        .map(|chunk| chunk.join(PARAGRAPH_BREAK))
        .collect()
}
