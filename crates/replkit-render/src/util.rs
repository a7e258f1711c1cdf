//! Display-width aware text measurement, padding, truncation and wrapping.
//!
//! Every renderer measures text through [`display_width`] so that wide
//! characters (CJK, most emoji) occupy two columns and never break the
//! fixed-width layout of a block.

use console::{measure_text_width, pad_str, Alignment};
use unicode_width::UnicodeWidthChar;

/// Returns the display width of a string in terminal columns.
///
/// # Example
///
/// ```rust
/// use replkit_render::display_width;
///
/// assert_eq!(display_width("hello"), 5);
/// assert_eq!(display_width("日本"), 4);
/// ```
pub fn display_width(s: &str) -> usize {
    measure_text_width(s)
}

/// Pads a string on the left (right-aligns) to reach the target width.
///
/// Strings already at or beyond `width` are returned unchanged.
pub fn pad_left(s: &str, width: usize) -> String {
    pad_str(s, width, Alignment::Right, None).into_owned()
}

/// Pads a string on the right (left-aligns) to reach the target width.
///
/// ```rust
/// use replkit_render::pad_right;
///
/// assert_eq!(pad_right("42", 5), "42   ");
/// assert_eq!(pad_right("hello", 3), "hello");
/// ```
pub fn pad_right(s: &str, width: usize) -> String {
    pad_str(s, width, Alignment::Left, None).into_owned()
}

/// Pads a string on both sides. An odd remainder goes to the right.
pub fn pad_center(s: &str, width: usize) -> String {
    pad_str(s, width, Alignment::Center, None).into_owned()
}

/// Truncates a string from the end to fit `max_width`, appending `ellipsis`.
///
/// ```rust
/// use replkit_render::truncate_end;
///
/// assert_eq!(truncate_end("Hello World", 8, "…"), "Hello W…");
/// assert_eq!(truncate_end("Short", 10, "…"), "Short");
/// ```
pub fn truncate_end(s: &str, max_width: usize, ellipsis: &str) -> String {
    if display_width(s) <= max_width {
        return s.to_string();
    }

    let ellipsis_width = display_width(ellipsis);
    if max_width <= ellipsis_width {
        return take_width(ellipsis, max_width);
    }

    let mut result = take_width(s, max_width - ellipsis_width);
    result.push_str(ellipsis);
    result
}

/// Greedy word wrap.
///
/// Words are separated by whitespace and re-joined with single spaces. A line
/// is filled with as many words as fit in `width`; a word that is wider than
/// `width` on its own is hard-broken into `width`-sized pieces, and the last
/// piece keeps accepting the words that follow it.
///
/// Text without any words yields a single empty line. A `width` of zero
/// yields no lines at all.
///
/// ```rust
/// use replkit_render::wrap;
///
/// assert_eq!(wrap("hello world foo bar", 11), vec!["hello world", "foo bar"]);
/// assert_eq!(wrap("abcdefgh", 3), vec!["abc", "def", "gh"]);
/// ```
pub fn wrap(text: &str, width: usize) -> Vec<String> {
    if width == 0 {
        return Vec::new();
    }

    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_width = 0;

    for word in text.split_whitespace() {
        let word_width = display_width(word);

        if word_width > width {
            if !current.is_empty() {
                lines.push(std::mem::take(&mut current));
            }
            let mut pieces = hard_break(word, width);
            // hard_break never returns an empty vec for a non-empty word
            current = pieces.pop().unwrap_or_default();
            current_width = display_width(&current);
            lines.extend(pieces);
            continue;
        }

        if current.is_empty() {
            current.push_str(word);
            current_width = word_width;
        } else if current_width + 1 + word_width <= width {
            current.push(' ');
            current.push_str(word);
            current_width += 1 + word_width;
        } else {
            lines.push(std::mem::replace(&mut current, word.to_string()));
            current_width = word_width;
        }
    }

    if !current.is_empty() || lines.is_empty() {
        lines.push(current);
    }
    lines
}

/// Splits a single word into pieces of at most `width` columns.
///
/// A character wider than `width` is placed on a piece of its own.
fn hard_break(word: &str, width: usize) -> Vec<String> {
    let mut pieces = Vec::new();
    let mut piece = String::new();
    let mut piece_width = 0;

    for c in word.chars() {
        let w = c.width().unwrap_or(0);
        if piece_width + w > width && !piece.is_empty() {
            pieces.push(std::mem::take(&mut piece));
            piece_width = 0;
        }
        piece.push(c);
        piece_width += w;
    }
    if !piece.is_empty() {
        pieces.push(piece);
    }
    pieces
}

/// Keeps characters from the start of `s` while they fit in `max_width`.
fn take_width(s: &str, max_width: usize) -> String {
    let mut result = String::new();
    let mut used = 0;
    for c in s.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > max_width {
            break;
        }
        result.push(c);
        used += w;
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_width_ascii_and_wide() {
        assert_eq!(display_width(""), 0);
        assert_eq!(display_width("abc"), 3);
        assert_eq!(display_width("日本語"), 6);
    }

    #[test]
    fn pad_helpers() {
        assert_eq!(pad_left("42", 5), "   42");
        assert_eq!(pad_right("42", 5), "42   ");
        assert_eq!(pad_center("hi", 6), "  hi  ");
        assert_eq!(pad_center("hi", 5), " hi  ");
    }

    #[test]
    fn truncate_end_tiny_widths() {
        assert_eq!(truncate_end("hello", 1, "…"), "…");
        assert_eq!(truncate_end("hello", 0, "…"), "");
        assert_eq!(truncate_end("hello world", 8, "..."), "hello...");
    }

    #[test]
    fn wrap_fills_lines_greedily() {
        assert_eq!(
            wrap("the quick brown fox jumps", 10),
            vec!["the quick", "brown fox", "jumps"]
        );
    }

    #[test]
    fn wrap_collapses_whitespace() {
        assert_eq!(wrap("  a   b  ", 10), vec!["a b"]);
    }

    #[test]
    fn wrap_hard_breaks_long_words() {
        assert_eq!(wrap("ab abcdefg cd", 4), vec!["ab", "abcd", "efg", "cd"]);
    }

    #[test]
    fn wrap_last_piece_accepts_following_words() {
        assert_eq!(wrap("abcdefg h", 5), vec!["abcde", "fg h"]);
    }

    #[test]
    fn wrap_empty_text_is_one_empty_line() {
        assert_eq!(wrap("", 10), vec![String::new()]);
        assert_eq!(wrap("   ", 10), vec![String::new()]);
    }

    #[test]
    fn wrap_zero_width_is_empty() {
        assert!(wrap("anything", 0).is_empty());
    }

    #[test]
    fn wrap_wide_characters() {
        assert_eq!(wrap("日本語", 4), vec!["日本", "語"]);
    }
}
