//! Page grouping for frame records.

use std::collections::BTreeMap;
use storyframe_core::FrameRecord;

/// Orders frames by page, then by position within the page.
///
/// Frames sharing a page and position keep their relative order, so
/// assembling an already assembled list changes nothing.
///
/// # Examples
///
/// ```
/// use storyframe_core::FrameRecord;
/// use storyframe_script::assemble;
///
/// let frames = vec![
///     FrameRecord::new("second page", 2, 1),
///     FrameRecord::new("first page, later", 1, 2),
///     FrameRecord::new("first page, opening", 1, 1),
/// ];
/// let ordered = assemble(frames);
///
/// assert_eq!(ordered[0].description, "first page, opening");
/// assert_eq!(ordered[2].description, "second page");
/// ```
pub fn assemble(frames: Vec<FrameRecord>) -> Vec<FrameRecord> {
    let mut pages: BTreeMap<u32, Vec<FrameRecord>> = BTreeMap::new();
    for frame in frames {
        pages.entry(frame.page).or_default().push(frame);
    }
    pages
        .into_values()
        .flat_map(|mut page| {
            page.sort_by_key(|frame| frame.frame_on_page);
            page
        })
        .collect()
}

/// Lays a flat list of descriptions out as pages of `frames_per_page`.
///
/// A `frames_per_page` of 0 puts everything on page 1.
///
/// # Examples
///
/// ```
/// use storyframe_script::paginate;
///
/// let frames = paginate(vec!["a".into(), "b".into(), "c".into()], 2);
/// assert_eq!((frames[2].page, frames[2].frame_on_page), (2, 1));
/// ```
pub fn paginate(descriptions: Vec<String>, frames_per_page: usize) -> Vec<FrameRecord> {
    let per_page = if frames_per_page == 0 {
        descriptions.len().max(1)
    } else {
        frames_per_page
    };
    descriptions
        .into_iter()
        .enumerate()
        .map(|(i, description)| {
            FrameRecord::new(description, (i / per_page) as u32 + 1, (i % per_page) as u32 + 1)
        })
        .collect()
}

/// Distinct pages present, ascending.
pub fn page_numbers(frames: &[FrameRecord]) -> Vec<u32> {
    let mut pages: Vec<u32> = frames.iter().map(|frame| frame.page).collect();
    pages.sort_unstable();
    pages.dedup();
    pages
}

/// The frames of one page, ordered by position.
pub fn frames_on_page(frames: &[FrameRecord], page: u32) -> Vec<FrameRecord> {
    let mut on_page: Vec<FrameRecord> = frames
        .iter()
        .filter(|frame| frame.page == page)
        .cloned()
        .collect();
    on_page.sort_by_key(|frame| frame.frame_on_page);
    on_page
}
