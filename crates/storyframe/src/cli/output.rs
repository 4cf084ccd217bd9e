//! Rendering results for the terminal.

use serde::Serialize;
use std::io::Write;
use storyframe::{
    Extraction, FrameRecord, OutputError, OutputErrorKind, SegmentPlan, StoryframeResult,
    frames_on_page, page_numbers,
};

const PREVIEW_CHARS: usize = 72;

/// Writes `text` to stdout.
pub fn emit(text: &str) -> StoryframeResult<()> {
    let mut stdout = std::io::stdout().lock();
    stdout
        .write_all(text.as_bytes())
        .and_then(|_| stdout.flush())
        .map_err(|e| OutputError::new(OutputErrorKind::Write(e.to_string())))?;
    Ok(())
}

/// Pretty JSON with a trailing newline.
pub fn to_json<T: Serialize + ?Sized>(value: &T) -> StoryframeResult<String> {
    let mut json = serde_json::to_string_pretty(value)
        .map_err(|e| OutputError::new(OutputErrorKind::Serialize(e.to_string())))?;
    json.push('\n');
    Ok(json)
}

/// Frames grouped under page headings, continuation lines indented.
pub fn render_frames(frames: &[FrameRecord]) -> String {
    let mut out = String::new();
    for page in page_numbers(frames) {
        out.push_str(&format!("Page {}\n", page));
        for frame in frames_on_page(frames, page) {
            let mut lines = frame.description.lines();
            let first = lines.next().unwrap_or_default();
            out.push_str(&format!("  {:>2}. {}\n", frame.frame_on_page, first));
            for line in lines {
                out.push_str(&format!("      {}\n", line));
            }
        }
    }
    out.push_str(&format!("Total: {} frames\n", frames.len()));
    out
}

/// Frames followed by a summary of skipped segments and cancellation.
pub fn render_extraction(extraction: &Extraction) -> String {
    let mut out = render_frames(&extraction.frames);
    out.push_str(&format!("Script shape: {}\n", extraction.shape));
    if !extraction.skipped_segments.is_empty() {
        let skipped: Vec<String> = extraction
            .skipped_segments
            .iter()
            .map(ToString::to_string)
            .collect();
        out.push_str(&format!("Skipped segments: {}\n", skipped.join(", ")));
    }
    if extraction.cancelled {
        out.push_str("Cancelled before all segments finished\n");
    }
    out
}

/// Sizing numbers plus a one-line preview of each segment.
pub fn render_plan(plan: &SegmentPlan, shape: &str) -> String {
    let mut lines = vec![
        format!("Script shape: {}", shape),
        format!("Words: {}", plan.word_count),
        format!("Estimated frames: {}", plan.estimated_total_frames),
        format!("Sets: {}", plan.num_sets),
    ];
    lines.extend(plan.segments.iter().enumerate().map(|(i, segment)| {
        format!(
            "  {:>2}. [{} words] {}",
            i + 1,
            segment.split_whitespace().count(),
            preview(segment)
        )
    }));
    lines.iter().map(|line| format!("{}\n", line)).collect()
}

/// Numbered list of parsed descriptions.
pub fn render_descriptions(descriptions: &[String]) -> String {
    descriptions
        .iter()
        .enumerate()
        .map(|(i, description)| format!("{}. {}\n", i + 1, description))
        .collect()
}

fn preview(text: &str) -> String {
    let flat = text.split_whitespace().collect::<Vec<_>>().join(" ");
    if flat.chars().count() <= PREVIEW_CHARS {
        flat
    } else {
        let cut: String = flat.chars().take(PREVIEW_CHARS).collect();
        format!("{}...", cut)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use storyframe::ScriptShape;

    #[test]
    fn test_render_frames_groups_pages() {
        let frames = vec![
            FrameRecord::new("Harbor at dawn\nGulls circle", 1, 1),
            FrameRecord::new("Boat leaves", 2, 1),
        ];
        let text = render_frames(&frames);
        assert_eq!(
            text,
            "Page 1\n   1. Harbor at dawn\n      Gulls circle\nPage 2\n   1. Boat leaves\nTotal: 2 frames\n"
        );
    }

    #[test]
    fn test_render_extraction_reports_skips() {
        let extraction = Extraction {
            frames: vec![FrameRecord::new("a", 1, 1)],
            skipped_segments: vec![2, 4],
            shape: ScriptShape::SceneStructured,
            cancelled: true,
        };
        let text = render_extraction(&extraction);
        assert!(text.contains("Script shape: scene-structured"));
        assert!(text.contains("Skipped segments: 2, 4"));
        assert!(text.contains("Cancelled"));
    }

    #[test]
    fn test_preview_truncates() {
        let long = "word ".repeat(40);
        let shown = preview(&long);
        assert!(shown.ends_with("..."));
        assert_eq!(shown.chars().count(), PREVIEW_CHARS + 3);
        assert_eq!(preview("a\n\nb"), "a b");
    }

    #[test]
    fn test_render_plan_lists_segments() {
        let plan = SegmentPlan {
            word_count: 4,
            estimated_total_frames: 6,
            num_sets: 2,
            segments: vec!["Rain falls.".to_string(), "Wind\n\nhowls.".to_string()],
        };
        assert_eq!(
            render_plan(&plan, "prose"),
            "Script shape: prose\nWords: 4\nEstimated frames: 6\nSets: 2\n   1. [2 words] Rain falls.\n   2. [2 words] Wind howls.\n"
        );
    }

    #[test]
    fn test_render_descriptions_numbers_lines() {
        let descriptions = vec!["Dock".to_string(), "Gulls".to_string()];
        assert_eq!(render_descriptions(&descriptions), "1. Dock\n2. Gulls\n");
        assert_eq!(render_descriptions(&[]), "");
    }

    #[test]
    fn test_json_frames_field_names() {
        let json = to_json(&[FrameRecord::new("a", 1, 2)]).unwrap();
        assert!(json.contains("\"frame_on_page\": 2"));
        assert!(json.ends_with('\n'));
    }
}
