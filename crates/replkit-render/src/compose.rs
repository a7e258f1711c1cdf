//! Block composition, alignment and rules.

use serde::{Deserialize, Serialize};

use crate::util::{pad_center, pad_left, pad_right};

/// Horizontal alignment for [`align`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Align {
    #[default]
    Left,
    Center,
    Right,
}

/// Joins rendered blocks with `spacing` blank lines between them.
///
/// Nothing is added before the first block or after the last; an empty block
/// still occupies its slot.
///
/// ```rust
/// use replkit_render::compose;
///
/// assert_eq!(compose(&["a", "b"], 0), "a\nb");
/// assert_eq!(compose(&["a", "b"], 1), "a\n\nb");
/// ```
pub fn compose<S: AsRef<str>>(blocks: &[S], spacing: usize) -> String {
    let sep = "\n".repeat(spacing + 1);
    blocks
        .iter()
        .map(|b| b.as_ref())
        .collect::<Vec<_>>()
        .join(&sep)
}

/// Aligns every line of `text` within `width` columns.
///
/// Lines already wider than `width` are left as they are.
pub fn align(text: &str, mode: Align, width: usize) -> String {
    text.split('\n')
        .map(|line| match mode {
            Align::Left => pad_right(line, width),
            Align::Center => pad_center(line, width),
            Align::Right => pad_left(line, width),
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// A rule of `ch` repeated `width` times.
pub fn hr(ch: char, width: usize) -> String {
    std::iter::repeat(ch).take(width).collect()
}
