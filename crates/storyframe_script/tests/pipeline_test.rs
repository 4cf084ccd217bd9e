//! Tests for the frame extraction pipeline.

mod test_utils;

use std::time::Duration;
use storyframe_core::FrameRecord;
use storyframe_error::CompletionErrorKind;
use storyframe_script::{FrameExtractor, ScriptShape, SegmentationConfig, single_set_prompt};
use test_utils::{MockCompletionDriver, MockResponse, prose_script, scene_script};

fn success(text: &str) -> MockResponse {
    MockResponse::Success(text.to_string())
}

fn descriptions(frames: &[FrameRecord]) -> Vec<&str> {
    frames.iter().map(|f| f.description.as_str()).collect()
}

fn pages(frames: &[FrameRecord]) -> Vec<(u32, u32)> {
    frames.iter().map(|f| (f.page, f.frame_on_page)).collect()
}

#[tokio::test]
async fn test_preformatted_script_skips_completion() {
    let extractor = FrameExtractor::new(MockCompletionDriver::new_success("1. unused"));

    let extraction = extractor
        .run("Frame 1: Intro\nHello.\nFrame 2: Middle\nWorld.", 6)
        .await
        .unwrap();

    assert_eq!(descriptions(&extraction.frames), vec!["Intro\nHello.", "Middle\nWorld."]);
    assert_eq!(pages(&extraction.frames), vec![(1, 1), (1, 2)]);
    assert_eq!(extraction.shape, ScriptShape::PreFormatted);
    assert_eq!(extractor.driver().call_count(), 0);
}

#[tokio::test]
async fn test_preformatted_frames_are_capped() {
    let segmentation = SegmentationConfig {
        preformatted_max_frames: 2,
        ..SegmentationConfig::default()
    };
    let extractor = FrameExtractor::new(MockCompletionDriver::new_success("1. unused"))
        .with_segmentation(segmentation);

    let frames = extractor
        .extract("Frame 1: a\nFrame 2: b\nFrame 3: c", 6)
        .await
        .unwrap();

    assert_eq!(descriptions(&frames), vec!["a", "b"]);
}

#[tokio::test]
async fn test_colon_without_markers_makes_no_calls() {
    let extractor = FrameExtractor::new(MockCompletionDriver::new_success("1. A reel spins."));

    let extraction = extractor
        .run("Frame rate: 24fps. The hero runs.", 6)
        .await
        .unwrap();

    assert!(extraction.frames.is_empty());
    assert_eq!(extraction.shape, ScriptShape::PreFormatted);
    assert_eq!(extractor.driver().call_count(), 0);
}

#[tokio::test]
async fn test_single_set_extraction() {
    let script = "A knight rides out. The castle burns behind him.";
    let extractor = FrameExtractor::new(MockCompletionDriver::new_success(
        "1. Knight on horseback\n2. Castle in flames\n3. Smoke over the hills\n4. Extra",
    ));

    let extraction = extractor.run(script, 3).await.unwrap();

    assert_eq!(
        descriptions(&extraction.frames),
        vec!["Knight on horseback", "Castle in flames", "Smoke over the hills"]
    );
    assert_eq!(pages(&extraction.frames), vec![(1, 1), (1, 2), (1, 3)]);
    assert_eq!(extraction.shape, ScriptShape::Prose);
    assert_eq!(extractor.driver().prompts(), vec![single_set_prompt(script, 3)]);
}

#[tokio::test]
async fn test_single_set_failure_is_surfaced() {
    let extractor =
        FrameExtractor::new(MockCompletionDriver::new_error(CompletionErrorKind::Timeout));

    let err = extractor
        .extract("A short script. Nothing else.", 6)
        .await
        .unwrap_err();

    let completion = err.as_completion().expect("completion error");
    assert_eq!(completion.kind, CompletionErrorKind::Timeout);
}

#[tokio::test]
async fn test_failed_segment_is_skipped_without_renumbering() {
    let extractor = FrameExtractor::new(MockCompletionDriver::new_by_segment(vec![
        success("1. First arrives\n2. First leaves"),
        MockResponse::Error(CompletionErrorKind::RateLimited),
        success("1. Third arrives\n2. Third leaves"),
    ]));

    let extraction = extractor.run(&scene_script(3, 175), 2).await.unwrap();

    assert_eq!(
        descriptions(&extraction.frames),
        vec!["First arrives", "First leaves", "Third arrives", "Third leaves"]
    );
    assert_eq!(pages(&extraction.frames), vec![(1, 1), (1, 2), (3, 1), (3, 2)]);
    assert_eq!(extraction.skipped_segments, vec![2]);
    assert_eq!(extraction.shape, ScriptShape::SceneStructured);
    assert!(!extraction.cancelled);
    assert_eq!(extractor.driver().call_count(), 3);
}

#[tokio::test]
async fn test_every_segment_failing_is_empty_success() {
    let extractor =
        FrameExtractor::new(MockCompletionDriver::new_error(CompletionErrorKind::Timeout));

    let extraction = extractor.run(&prose_script(4, 150), 3).await.unwrap();

    assert!(extraction.frames.is_empty());
    assert_eq!(extraction.skipped_segments, vec![1, 2]);
}

#[tokio::test]
async fn test_segment_prompts_name_their_position() {
    let extractor = FrameExtractor::new(MockCompletionDriver::new_success("1. Frame"));

    extractor.extract(&scene_script(3, 175), 2).await.unwrap();

    let prompts = extractor.driver().prompts();
    assert_eq!(prompts.len(), 3);
    for (i, prompt) in prompts.iter().enumerate() {
        assert!(prompt.contains(&format!("This is segment {} of 3 from a longer script.", i + 1)));
        assert!(prompt.contains(&format!("Script Segment {}:\nINT. ROOM {}", i + 1, i + 1)));
        assert!(prompt.contains("divide it into 2 key visual scenes"));
    }
}

#[tokio::test]
async fn test_concurrent_segments_keep_order() {
    let driver = MockCompletionDriver::new_by_segment(vec![
        success("1. one"),
        success("1. two"),
        success("1. three"),
    ])
    .with_segment_delays(vec![
        Duration::from_millis(60),
        Duration::from_millis(20),
        Duration::from_millis(1),
    ]);
    let segmentation = SegmentationConfig {
        max_concurrent_segments: 3,
        ..SegmentationConfig::default()
    };
    let extractor = FrameExtractor::new(driver).with_segmentation(segmentation);

    let frames = extractor.extract(&scene_script(3, 175), 2).await.unwrap();

    assert_eq!(descriptions(&frames), vec!["one", "two", "three"]);
    assert_eq!(pages(&frames), vec![(1, 1), (2, 1), (3, 1)]);
}

#[tokio::test]
async fn test_cancellation_returns_finished_segments() {
    let driver = MockCompletionDriver::new_by_segment(vec![
        success("1. one"),
        success("1. two"),
        success("1. three"),
    ])
    .with_segment_delays(vec![
        Duration::from_millis(1),
        Duration::from_secs(30),
        Duration::from_millis(1),
    ]);
    let extractor = FrameExtractor::new(driver);

    let extraction = extractor
        .run_until(
            &scene_script(3, 175),
            2,
            tokio::time::sleep(Duration::from_millis(100)),
        )
        .await
        .unwrap();

    assert!(extraction.cancelled);
    assert_eq!(descriptions(&extraction.frames), vec!["one"]);
    assert_eq!(extractor.driver().call_count(), 1);
}

#[tokio::test]
async fn test_blank_script_makes_no_calls() {
    let extractor = FrameExtractor::new(MockCompletionDriver::new_success("1. unused"));

    let frames = extractor.extract("  \n\n ", 6).await.unwrap();

    assert!(frames.is_empty());
    assert_eq!(extractor.driver().call_count(), 0);
}

#[tokio::test]
async fn test_revise_orders_marked_frames_by_part() {
    let extractor = FrameExtractor::new(MockCompletionDriver::new_success("1. unused"));
    let script = "Part 2\nFrame 2: Chase\nFrame 1: Alarm\nPart 1\nFrame 1: Heist";

    let frames = extractor.revise(script).await.unwrap();

    assert_eq!(descriptions(&frames), vec!["Heist", "Alarm", "Chase"]);
    assert_eq!(pages(&frames), vec![(1, 1), (2, 1), (2, 2)]);
    assert_eq!(extractor.driver().call_count(), 0);
}

#[tokio::test]
async fn test_revise_extracts_unmarked_script() {
    let extractor = FrameExtractor::new(MockCompletionDriver::new_success(
        "1. Dawn\n2. Noon\n3. Dusk",
    ));

    let frames = extractor.revise("The day passes slowly.").await.unwrap();

    assert_eq!(descriptions(&frames), vec!["Dawn", "Noon", "Dusk"]);
    let prompts = extractor.driver().prompts();
    assert!(prompts[0].contains("divide it into 6 key visual scenes"));
}

#[tokio::test]
async fn test_revise_propagates_completion_failure() {
    let extractor =
        FrameExtractor::new(MockCompletionDriver::new_error(CompletionErrorKind::EmptyResponse));

    assert!(extractor.revise("No markers here.").await.is_err());
}
