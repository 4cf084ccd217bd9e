//! Frame records, the unit of storyboard output.

use serde::{Deserialize, Serialize};

/// One storyboard panel: a description plus its page and position on that page.
///
/// Global identity and sequence numbers belong to whoever stores the frames;
/// a record only knows where it sits within its page.
///
/// # Examples
///
/// ```
/// use storyframe_core::FrameRecord;
///
/// let frame = FrameRecord::new("Wide shot of the harbor", 2, 1);
/// assert_eq!(frame.page, 2);
/// assert_eq!(frame.frame_on_page, 1);
/// assert_eq!(format!("{}", frame), "[2.1] Wide shot of the harbor");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
#[display("[{}.{}] {}", page, frame_on_page, description)]
pub struct FrameRecord {
    /// Free-form panel description
    pub description: String,
    /// Logical page (screenplay part or segment), starting at 1
    #[serde(default = "first")]
    pub page: u32,
    /// Position within the page, starting at 1
    #[serde(default = "first")]
    pub frame_on_page: u32,
}

fn first() -> u32 {
    1
}

impl FrameRecord {
    /// Creates a frame record.
    pub fn new(description: impl Into<String>, page: u32, frame_on_page: u32) -> Self {
        Self {
            description: description.into(),
            page,
            frame_on_page,
        }
    }

    /// Numbers a page's descriptions 1, 2, 3, ... in the order given.
    ///
    /// # Examples
    ///
    /// ```
    /// use storyframe_core::FrameRecord;
    ///
    /// let frames = FrameRecord::numbered(vec!["a".to_string(), "b".to_string()], 3);
    /// assert_eq!(frames[1], FrameRecord::new("b", 3, 2));
    /// ```
    pub fn numbered(descriptions: Vec<String>, page: u32) -> Vec<Self> {
        descriptions
            .into_iter()
            .enumerate()
            .map(|(i, description)| Self::new(description, page, i as u32 + 1))
            .collect()
    }
}
