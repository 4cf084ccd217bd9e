//! Layered configuration for segmentation and completion.
//!
//! Sources, later ones overriding earlier ones:
//! - Bundled defaults (include_str! from storyframe.toml)
//! - `~/.config/storyframe/storyframe.toml`
//! - `./storyframe.toml`
//! - `STORYFRAME__<SECTION>__<KEY>` environment variables

use crate::PlannerSettings;
use config::builder::DefaultState;
use config::{Config, ConfigBuilder, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use storyframe_core::CompletionSettings;
use storyframe_error::{ConfigError, ConfigErrorKind, StoryframeResult};
use tracing::{debug, instrument};

const DEFAULT_CONFIG: &str = include_str!("../../../storyframe.toml");

/// Segmentation and extraction knobs, the `[segmentation]` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SegmentationConfig {
    /// Words of script per estimated frame
    pub words_per_frame: usize,
    /// Below this word count a script is a single set
    pub single_set_word_threshold: usize,
    /// Maximum number of sets
    pub max_sets: usize,
    /// Frames per set when the caller does not say
    pub default_frames_per_set: usize,
    /// Frame cap for pre-formatted scripts
    pub preformatted_max_frames: usize,
    /// Segment completion calls allowed in flight at once
    pub max_concurrent_segments: usize,
}

impl Default for SegmentationConfig {
    fn default() -> Self {
        let planner = PlannerSettings::default();
        Self {
            words_per_frame: planner.words_per_frame,
            single_set_word_threshold: planner.single_set_word_threshold,
            max_sets: planner.max_sets,
            default_frames_per_set: 6,
            preformatted_max_frames: 100,
            max_concurrent_segments: 1,
        }
    }
}

impl SegmentationConfig {
    /// The sizing subset used by the planner.
    pub fn planner(&self) -> PlannerSettings {
        PlannerSettings {
            words_per_frame: self.words_per_frame,
            single_set_word_threshold: self.single_set_word_threshold,
            max_sets: self.max_sets,
        }
    }
}

/// Top-level storyframe configuration.
///
/// # Example
///
/// ```no_run
/// use storyframe_script::StoryframeConfig;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let config = StoryframeConfig::load()?;
/// println!("Frames per set: {}", config.segmentation.default_frames_per_set);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct StoryframeConfig {
    /// Segmentation settings
    #[serde(default)]
    pub segmentation: SegmentationConfig,
    /// Completion service settings
    #[serde(default)]
    pub completion: CompletionSettings,
}

impl StoryframeConfig {
    /// Loads the bundled defaults with `path` layered on top.
    ///
    /// The file may set any subset of keys.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed, or if the
    /// merged values fail [`validate`](Self::validate).
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<std::path::Path>) -> StoryframeResult<Self> {
        debug!("Loading configuration from file");
        let builder = bundled().add_source(File::from(path.as_ref()).format(FileFormat::Toml));
        finish(builder)
    }

    /// Loads configuration from every source, most specific last.
    ///
    /// User config files are optional and skipped silently when absent.
    #[instrument]
    pub fn load() -> StoryframeResult<Self> {
        debug!("Loading configuration: env > current dir > home dir > bundled defaults");

        let mut builder = bundled();
        if let Some(home) = dirs::home_dir() {
            let home_config = home.join(".config/storyframe/storyframe.toml");
            builder = builder.add_source(File::from(home_config).required(false));
        }
        builder = builder
            .add_source(File::with_name("storyframe").required(false))
            .add_source(
                Environment::with_prefix("STORYFRAME")
                    .separator("__")
                    .try_parsing(true),
            );

        finish(builder)
    }

    /// Rejects values the pipeline cannot work with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let seg = &self.segmentation;
        let non_zero = [
            ("segmentation.words_per_frame", seg.words_per_frame),
            ("segmentation.max_sets", seg.max_sets),
            ("segmentation.default_frames_per_set", seg.default_frames_per_set),
            ("segmentation.max_concurrent_segments", seg.max_concurrent_segments),
        ];
        if let Some((key, _)) = non_zero.iter().find(|(_, value)| *value == 0) {
            return Err(ConfigError::invalid(*key, "must be at least 1"));
        }

        let temperature = self.completion.temperature;
        if !(0.0..=2.0).contains(&temperature) {
            return Err(ConfigError::invalid(
                "completion.temperature",
                format!("must be between 0.0 and 2.0, got {}", temperature),
            ));
        }
        Ok(())
    }
}

fn bundled() -> ConfigBuilder<DefaultState> {
    Config::builder().add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml))
}

fn finish(builder: ConfigBuilder<DefaultState>) -> StoryframeResult<StoryframeConfig> {
    let config: StoryframeConfig = builder
        .build()
        .map_err(|e| ConfigError::new(ConfigErrorKind::Load(e.to_string())))?
        .try_deserialize()
        .map_err(|e| ConfigError::new(ConfigErrorKind::Parse(e.to_string())))?;
    config.validate()?;
    Ok(config)
}
