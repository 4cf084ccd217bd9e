//! Prompt text sent to the completion service.
//!
//! The wording is a compatibility contract: responses are expected to
//! continue the trailing `1.` as a numbered list.

/// Prompt asking for `frames` key scenes from a whole script.
///
/// # Examples
///
/// ```
/// use storyframe_script::single_set_prompt;
///
/// let prompt = single_set_prompt("FADE IN.", 4);
/// assert!(prompt.contains("divide it into 4 key visual scenes"));
/// assert!(prompt.ends_with("Script:\nFADE IN.\n\nFrames:\n1."));
/// ```
pub fn single_set_prompt(script: &str, frames: usize) -> String {
    format!(
        "You are a film storyboard assistant. Read the script below and divide it into \
         {frames} key visual scenes. Provide a brief description for each of the frames, \
         focusing on distinct important moments, with any key characters and actions.\
         \n\nScript:\n{script}\n\nFrames:\n1."
    )
}

/// Prompt for segment `index` (1-based) of `total` segments.
pub fn segment_prompt(segment: &str, frames: usize, index: usize, total: usize) -> String {
    format!(
        "You are a film storyboard assistant. Read the script segment below and divide it \
         into {frames} key visual scenes. This is segment {index} of {total} from a longer \
         script. Provide a brief description for each frame, focusing on distinct important \
         moments, with any key characters and actions.\
         \n\nScript Segment {index}:\n{segment}\n\nFrames:\n1."
    )
}
