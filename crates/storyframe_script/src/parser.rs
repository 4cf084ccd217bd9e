//! Frame description parsing for completion responses and user-authored scripts.
//!
//! Text reaches this module in one of several shapes: a script the user has
//! already broken into `Frame N:` blocks, a model response written as a
//! numbered list, or plain prose. [`parse`] tries a fixed chain of
//! strategies and keeps the first one that produces anything:
//!
//! 1. `Frame N:` markers (with `Part N` page markers)
//! 2. A numbered list (`1. ...`, `2) ...`) starting at line beginnings
//! 3. Loose numbered sections (indented or unspaced numbering)
//! 4. Sentence splitting
//!
//! Each strategy is a pure `fn(&str) -> Option<Vec<String>>`; `None` hands
//! over to the next one.

use regex::Regex;
use std::sync::LazyLock;
use storyframe_core::FrameRecord;

/// "frame" somewhere before a colon on the same line.
static MARKER_TRIGGER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?im)frame[^\n]*:").expect("Valid marker trigger regex"));

static FRAME_MARKER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:Frame|FRAME)\s+(\d+)(?::|\.|\s|$)(.*)$").expect("Valid frame marker regex")
});

static PART_MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?i:part)\s+(\d+)").expect("Valid part marker regex"));

static BARE_NUMBER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d+)\.(.*)$").expect("Valid bare number regex"));

static NUMBERED_ITEM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^\d+[.)]\s+").expect("Valid numbered item regex"));

/// Where a numbered item ends: a newline followed by the next number.
static NUMBERED_BREAK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n\d+[.)]").expect("Valid numbered break regex"));

static SECTION_PREFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d+[.)]\s*(.*)$").expect("Valid section prefix regex"));

/// The strategy that produced a parse result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
pub enum ParseStrategy {
    /// Explicit `Frame N:` markers
    #[display("frame markers")]
    Markers,
    /// Line-start numbered list
    #[display("numbered list")]
    NumberedList,
    /// Loosely numbered sections
    #[display("numbered sections")]
    NumberedSections,
    /// Sentence splitting
    #[display("sentences")]
    Sentences,
}

type Strategy = fn(&str) -> Option<Vec<String>>;

const STRATEGIES: [(ParseStrategy, Strategy); 4] = [
    (ParseStrategy::Markers, marker_descriptions),
    (ParseStrategy::NumberedList, numbered_list),
    (ParseStrategy::NumberedSections, numbered_sections),
    (ParseStrategy::Sentences, sentences),
];

/// Parses text into at most `max_count` frame descriptions.
///
/// Never fails. Only text without any non-whitespace character yields an
/// empty list (or `max_count == 0`).
///
/// # Examples
///
/// ```
/// use storyframe_script::parse;
///
/// let response = "1. The hero wakes up.\n2. She finds the map.\n3. The storm hits.";
/// let frames = parse(response, 2);
/// assert_eq!(frames, vec!["The hero wakes up.", "She finds the map."]);
/// ```
pub fn parse(text: &str, max_count: usize) -> Vec<String> {
    parse_with_strategy(text, max_count)
        .map(|(_, items)| items)
        .unwrap_or_default()
}

/// Like [`parse`], but also reports which strategy matched.
///
/// Returns `None` when no strategy found anything, which only happens for
/// blank text.
#[tracing::instrument(skip(text), fields(text_len = text.len()))]
pub fn parse_with_strategy(text: &str, max_count: usize) -> Option<(ParseStrategy, Vec<String>)> {
    STRATEGIES.iter().find_map(|(name, strategy)| {
        strategy(text).map(|items| {
            tracing::debug!(strategy = %name, found = items.len(), "Parsed frame descriptions");
            (*name, items.into_iter().take(max_count).collect())
        })
    })
}

/// A frame recovered from explicit `Frame N:` markers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedFrame {
    /// Title and body joined by a newline
    pub description: String,
    /// Page set by the most recent `Part N` line, 1 before any
    pub page: u32,
    /// The number written in the frame's marker (at least 1)
    pub frame_on_page: u32,
}

impl From<ParsedFrame> for FrameRecord {
    fn from(frame: ParsedFrame) -> Self {
        FrameRecord::new(frame.description, frame.page, frame.frame_on_page)
    }
}

/// Parses `Frame N:` blocks, tracking `Part N` page markers.
///
/// Lines before the first marker are ignored. A bare `N.` line also opens a
/// new frame once a frame is in progress. Frames that end up with neither a
/// title nor a body are dropped.
///
/// # Examples
///
/// ```
/// use storyframe_script::parse_markers;
///
/// let script = "Part 2\nFrame 1: Dawn\nThe camp stirs.\nFrame 2: Departure";
/// let frames = parse_markers(script);
///
/// assert_eq!(frames.len(), 2);
/// assert_eq!(frames[0].description, "Dawn\nThe camp stirs.");
/// assert_eq!(frames[0].page, 2);
/// assert_eq!(frames[1].description, "Departure");
/// ```
pub fn parse_markers(text: &str) -> Vec<ParsedFrame> {
    text.lines()
        .map(str::trim)
        .fold(MarkerScan::default(), MarkerScan::step)
        .finish()
}

/// What a single trimmed line means to the marker scanner.
enum MarkerLine<'a> {
    Frame { number: u32, title: &'a str },
    Part(u32),
    Numbered { number: u32, title: &'a str },
    Text(&'a str),
    Blank,
}

impl<'a> MarkerLine<'a> {
    fn classify(line: &'a str, frame_in_progress: bool) -> Self {
        if line.is_empty() {
            return MarkerLine::Blank;
        }
        if let Some(caps) = FRAME_MARKER.captures(line) {
            return MarkerLine::Frame {
                number: parse_number(&caps[1]),
                title: caps.get(2).map_or("", |m| m.as_str().trim()),
            };
        }
        if let Some(caps) = PART_MARKER.captures(line) {
            return MarkerLine::Part(parse_number(&caps[1]));
        }
        match BARE_NUMBER.captures(line) {
            Some(caps) if frame_in_progress => MarkerLine::Numbered {
                number: parse_number(&caps[1]),
                title: caps.get(2).map_or("", |m| m.as_str().trim()),
            },
            _ => MarkerLine::Text(line),
        }
    }
}

fn parse_number(digits: &str) -> u32 {
    digits.parse::<u32>().unwrap_or(u32::MAX).max(1)
}

/// A frame whose end has not been seen yet.
struct FrameDraft {
    title: String,
    body: Vec<String>,
    page: u32,
    number: u32,
}

impl FrameDraft {
    fn new(title: &str, page: u32, number: u32) -> Self {
        Self {
            title: title.to_string(),
            body: Vec::new(),
            page,
            number,
        }
    }

    fn finish(self) -> Option<ParsedFrame> {
        let body = self.body.join("\n");
        let description = match (self.title.is_empty(), body.is_empty()) {
            (true, true) => return None,
            (false, true) => self.title,
            (true, false) => body,
            (false, false) => format!("{}\n{}", self.title, body),
        };
        Some(ParsedFrame {
            description,
            page: self.page,
            frame_on_page: self.number,
        })
    }
}

/// Fold state for [`parse_markers`].
struct MarkerScan {
    finished: Vec<ParsedFrame>,
    current: Option<FrameDraft>,
    page: u32,
}

impl Default for MarkerScan {
    fn default() -> Self {
        Self {
            finished: Vec::new(),
            current: None,
            page: 1,
        }
    }
}

impl MarkerScan {
    fn step(mut self, line: &str) -> Self {
        match MarkerLine::classify(line, self.current.is_some()) {
            MarkerLine::Frame { number, title } | MarkerLine::Numbered { number, title } => {
                self.flush();
                self.current = Some(FrameDraft::new(title, self.page, number));
            }
            MarkerLine::Part(page) => self.page = page,
            MarkerLine::Text(text) => {
                if let Some(draft) = self.current.as_mut() {
                    draft.body.push(text.to_string());
                }
            }
            MarkerLine::Blank => {}
        }
        self
    }

    fn flush(&mut self) {
        if let Some(frame) = self.current.take().and_then(FrameDraft::finish) {
            self.finished.push(frame);
        }
    }

    fn finish(mut self) -> Vec<ParsedFrame> {
        self.flush();
        self.finished
    }
}

/// Keeps the non-empty items, or `None` if there are none.
fn non_empty(items: Vec<String>) -> Option<Vec<String>> {
    let items: Vec<String> = items
        .into_iter()
        .map(|item| item.trim().to_string())
        .filter(|item| !item.is_empty())
        .collect();
    (!items.is_empty()).then_some(items)
}

fn marker_descriptions(text: &str) -> Option<Vec<String>> {
    if !MARKER_TRIGGER.is_match(text) {
        return None;
    }
    non_empty(
        parse_markers(text)
            .into_iter()
            .map(|frame| frame.description)
            .collect(),
    )
}

/// Items start at a line-start number followed by whitespace and run until
/// the next line-start number.
fn numbered_list(text: &str) -> Option<Vec<String>> {
    let mut items = Vec::new();
    let mut pos = 0;
    while let Some(item) = NUMBERED_ITEM.find_at(text, pos) {
        let end = NUMBERED_BREAK
            .find_at(text, item.end())
            .map_or(text.len(), |brk| brk.start());
        items.push(text[item.end()..end].to_string());
        pos = end;
    }
    non_empty(items)
}

/// Line-based sections opened by any line that starts with `N.` or `N)`
/// once trimmed. Text before the first numbered line forms its own section.
fn numbered_sections(text: &str) -> Option<Vec<String>> {
    if !text.lines().any(|line| SECTION_PREFIX.is_match(line.trim())) {
        return None;
    }

    let mut sections = Vec::new();
    let mut current = String::new();
    for line in text.lines().map(str::trim) {
        if let Some(caps) = SECTION_PREFIX.captures(line) {
            if !current.is_empty() {
                sections.push(std::mem::take(&mut current));
            }
            current = caps[1].trim().to_string();
        } else if current.is_empty() {
            current = line.to_string();
        } else {
            current.push('\n');
            current.push_str(line);
        }
    }
    if !current.is_empty() {
        sections.push(current);
    }
    non_empty(sections)
}

/// Splits after `.`, `!` or `?` wherever whitespace follows.
fn sentences(text: &str) -> Option<Vec<String>> {
    let mut pieces = Vec::new();
    let mut start = 0;
    let mut prev = None;
    let mut chars = text.char_indices().peekable();

    while let Some((i, c)) = chars.next() {
        if c.is_whitespace() && matches!(prev, Some('.' | '!' | '?')) {
            pieces.push(text[start..i].to_string());
            while chars.next_if(|(_, w)| w.is_whitespace()).is_some() {}
            start = chars.peek().map_or(text.len(), |(j, _)| *j);
        }
        prev = Some(c);
    }
    pieces.push(text[start..].to_string());
    non_empty(pieces)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_marker_title_only() {
        let frames = parse_markers("Frame 1: Establishing shot");
        assert_eq!(frames.len(), 1);
        assert_eq!(frames[0].description, "Establishing shot");
        assert_eq!(frames[0].frame_on_page, 1);
    }

    #[test]
    fn test_marker_without_colon() {
        let frames = parse_markers("FRAME 3 Night falls\nStars appear.\nFrame 4. Morning");
        assert_eq!(frames.len(), 2);
        assert_eq!(frames[0].description, "Night falls\nStars appear.");
        assert_eq!(frames[0].frame_on_page, 3);
        assert_eq!(frames[1].description, "Morning");
    }

    #[test]
    fn test_marker_empty_frame_discarded() {
        let frames = parse_markers("Frame 1:\nFrame 2: Kept");
        assert_eq!(frames.len(), 1);
        assert_eq!(frames[0].description, "Kept");
    }

    #[test]
    fn test_marker_body_without_title() {
        let frames = parse_markers("Frame 1:\nOnly body text");
        assert_eq!(frames[0].description, "Only body text");
    }

    #[test]
    fn test_text_before_first_marker_ignored() {
        let frames = parse_markers("Preamble line\n\nFrame 1: Start");
        assert_eq!(frames.len(), 1);
        assert_eq!(frames[0].description, "Start");
    }

    #[test]
    fn test_bare_number_opens_frame_after_start() {
        let frames = parse_markers("Frame 1: First\n2. Second\nmore");
        assert_eq!(frames.len(), 2);
        assert_eq!(frames[1].description, "Second\nmore");
        assert_eq!(frames[1].frame_on_page, 2);
    }

    #[test]
    fn test_bare_number_before_any_frame_is_ignored() {
        let frames = parse_markers("1. stray\nFrame 1: Real");
        assert_eq!(frames.len(), 1);
        assert_eq!(frames[0].description, "Real");
    }

    #[test]
    fn test_part_sets_page_for_later_frames() {
        let text = "Frame 1: A\nPart 2\nbody after part\nFrame 1: B";
        let frames = parse_markers(text);
        assert_eq!(frames[0].page, 1);
        assert_eq!(frames[0].description, "A\nbody after part");
        assert_eq!(frames[1].page, 2);
    }

    #[test]
    fn test_marker_trigger_requires_colon_on_line() {
        assert!(marker_descriptions("The frame rate is high\nnothing: here").is_none());
        assert!(marker_descriptions("Frame 1: ok").is_some());
    }

    #[test]
    fn test_numbered_list_multiline_items() {
        let items = numbered_list("1. First line\ncontinues\n2) Second").unwrap();
        assert_eq!(items, vec!["First line\ncontinues", "Second"]);
    }

    #[test]
    fn test_numbered_list_requires_line_start() {
        assert!(numbered_list("  1. indented\n  2. also indented").is_none());
    }

    #[test]
    fn test_numbered_sections_handles_indentation() {
        let items = numbered_sections("  1. indented\n  2.no space\n  tail").unwrap();
        assert_eq!(items, vec!["indented", "no space\ntail"]);
    }

    #[test]
    fn test_numbered_sections_keeps_leading_text() {
        let items = numbered_sections("Intro\n 1. one").unwrap();
        assert_eq!(items, vec!["Intro", "one"]);
    }

    #[test]
    fn test_numbered_sections_needs_a_number() {
        assert!(numbered_sections("no numbers at all").is_none());
    }

    #[test]
    fn test_sentences_split_on_terminal_punctuation() {
        let items = sentences("He runs. She hides!  Who knows?\nThe end").unwrap();
        assert_eq!(items, vec!["He runs.", "She hides!", "Who knows?", "The end"]);
    }

    #[test]
    fn test_sentences_blank_text() {
        assert!(sentences("   \n\t ").is_none());
    }

    #[test]
    fn test_prose_falls_through_to_sentences() {
        let (strategy, items) = parse_with_strategy("A door opens. A man enters.", 10).unwrap();
        assert_eq!(strategy, ParseStrategy::Sentences);
        assert_eq!(items.len(), 2);
    }

    #[test]
    fn test_empty_text_yields_nothing() {
        assert!(parse("", 5).is_empty());
        assert!(parse_with_strategy("", 5).is_none());
    }
}
