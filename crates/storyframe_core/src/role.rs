//! Role types for prompt messages.

use serde::{Deserialize, Serialize};

/// Who a prompt message is attributed to.
///
/// # Examples
///
/// ```
/// use storyframe_core::Role;
///
/// assert_ne!(Role::System, Role::User);
/// assert_eq!(format!("{}", Role::System), "System");
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Instructions framing the whole exchange
    #[default]
    System,
    /// Messages from the human
    User,
    /// Messages from the model
    Assistant,
}
