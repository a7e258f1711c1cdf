use crate::glyphs::{Glyphs, ListStyle};

/// Renders one item per line, prefixed by a style glyph or a 1-based index.
///
/// Numbered indices are right-aligned to the width of the largest index and
/// followed by `". "`.
///
/// ```rust
/// use replkit_render::{list_display, Glyphs, ListStyle};
///
/// let items: Vec<String> = (1..=10).map(|i| format!("item {i}")).collect();
/// let out = list_display(&items, ListStyle::Bullet, true, &Glyphs::ASCII);
/// assert!(out.starts_with(" 1. item 1\n"));
/// assert!(out.ends_with("\n10. item 10"));
/// ```
pub fn list_display<T: AsRef<str>>(
    items: &[T],
    style: ListStyle,
    numbered: bool,
    glyphs: &Glyphs,
) -> String {
    if numbered {
        let width = items.len().to_string().len();
        items
            .iter()
            .enumerate()
            .map(|(i, item)| format!("{:>width$}. {}", i + 1, item.as_ref()))
            .collect::<Vec<_>>()
            .join("\n")
    } else {
        let marker = glyphs.marker(style);
        items
            .iter()
            .map(|item| format!("{}{}", marker, item.as_ref()))
            .collect::<Vec<_>>()
            .join("\n")
    }
}
