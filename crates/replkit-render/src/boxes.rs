//! Bordered boxes with an optional title in the top border.
//!
//! ```text
//! +-- Status -------------+
//! | cpu: 12%              |
//! | memory: 3.1 GiB       |
//! +-----------------------+
//! ```

use crate::util::{display_width, pad_right, truncate_end, wrap};

/// Columns taken by the left and right border plus their padding.
const FRAME: usize = 4;

/// How wide a box should be.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoxWidth {
    /// Exactly this many columns, borders included.
    Fixed(usize),
    /// Shrink to fit the content, but never wider than `max` columns.
    Auto { max: usize },
}

/// Draws a box around `content`.
///
/// Content is split into lines; a line longer than the inner width is word
/// wrapped, shorter lines keep their spacing. Every emitted line has the same
/// display width. Widths below 4 are raised to 4.
///
/// ```rust
/// use replkit_render::{boxed, BoxWidth};
///
/// let out = boxed("hello", Some("Hi"), BoxWidth::Fixed(14));
/// assert_eq!(out, "+-- Hi ------+\n| hello      |\n+------------+");
/// ```
pub fn boxed(content: &str, title: Option<&str>, width: BoxWidth) -> String {
    let limit = match width {
        BoxWidth::Fixed(w) => w,
        BoxWidth::Auto { max } => max,
    }
    .max(FRAME);
    let wrap_width = limit - FRAME;

    let lines = content_lines(content, wrap_width);

    let inner = match width {
        BoxWidth::Fixed(_) => wrap_width,
        BoxWidth::Auto { .. } => {
            let longest = lines.iter().map(|l| display_width(l)).max().unwrap_or(0);
            let title_width = title.map(|t| display_width(t) + 2).unwrap_or(0);
            longest.max(title_width).min(wrap_width)
        }
    };

    let mut out = Vec::with_capacity(lines.len() + 2);
    out.push(top_border(title, inner));
    for line in &lines {
        let line = truncate_end(line, inner, "");
        out.push(format!("| {} |", pad_right(&line, inner)));
    }
    out.push(format!("+{}+", "-".repeat(inner + 2)));
    out.join("\n")
}

fn content_lines(content: &str, width: usize) -> Vec<String> {
    let cleaned = content.replace('\r', "").replace('\t', "    ");
    let mut lines = Vec::new();
    for line in cleaned.trim_matches('\n').split('\n') {
        if display_width(line) > width {
            lines.extend(wrap(line, width));
        } else {
            lines.push(line.to_string());
        }
    }
    lines
}

fn top_border(title: Option<&str>, inner: usize) -> String {
    // "+--" + " title " + dashes + "+" needs the title to fit in inner - 2.
    let title = match title {
        Some(t) if !t.is_empty() && inner >= 3 => truncate_end(t, inner - 2, "..."),
        _ => return format!("+{}+", "-".repeat(inner + 2)),
    };
    let right = inner - 2 - display_width(&title);
    format!("+-- {} {}+", title, "-".repeat(right))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn widths(s: &str) -> Vec<usize> {
        s.lines().map(display_width).collect()
    }

    #[test]
    fn fixed_width_is_rectangular() {
        let out = boxed("one\ntwo three four five six", None, BoxWidth::Fixed(12));
        assert!(widths(&out).iter().all(|w| *w == 12), "{out}");
        assert_eq!(
            out,
            "+----------+\n\
             | one      |\n\
             | two      |\n\
             | three    |\n\
             | four     |\n\
             | five six |\n\
             +----------+"
        );
    }

    #[test]
    fn short_lines_keep_their_spacing() {
        let out = boxed("a   b", None, BoxWidth::Fixed(20));
        assert!(out.contains("| a   b"));
    }

    #[test]
    fn title_is_truncated_when_too_long() {
        let out = boxed("x", Some("a very long title"), BoxWidth::Fixed(12));
        assert!(widths(&out).iter().all(|w| *w == 12), "{out}");
        assert!(out.starts_with("+-- a v... +"));
    }

    #[test]
    fn tiny_widths_are_clamped() {
        let out = boxed("content", Some("t"), BoxWidth::Fixed(1));
        assert!(widths(&out).iter().all(|w| *w == 4), "{out}");
    }

    #[test]
    fn auto_width_fits_content_and_title() {
        let out = boxed("hi", Some("Title"), BoxWidth::Auto { max: 80 });
        assert_eq!(out, "+-- Title +\n| hi      |\n+---------+");
    }

    #[test]
    fn auto_width_wraps_at_the_maximum() {
        let text = "word ".repeat(30);
        let out = boxed(&text, None, BoxWidth::Auto { max: 30 });
        assert!(widths(&out).iter().all(|w| *w <= 30));
        assert!(out.lines().count() > 3);
    }

    #[test]
    fn tabs_and_carriage_returns_are_normalized() {
        let out = boxed("a\tb\r\n", None, BoxWidth::Fixed(14));
        assert_eq!(out.lines().nth(1), Some("| a    b     |"));
    }
}
