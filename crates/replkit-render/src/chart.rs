//! Horizontal bar charts, progress bars and sparklines.
//!
//! All three scale into a fixed number of columns and treat non-finite or
//! negative magnitudes as zero, so degenerate input yields empty bars rather
//! than an error.

use crate::glyphs::Glyphs;
use crate::util::{display_width, pad_left, pad_right};

const GAP: &str = "  ";

/// Formats a number the way charts print it: integers without a fraction,
/// everything else with one decimal.
pub fn format_number(v: f64) -> String {
    if v.is_finite() && v.fract() == 0.0 && v.abs() < 1e15 {
        format!("{:.0}", v)
    } else {
        format!("{:.1}", v)
    }
}

/// Renders one bar per `(label, value)` pair, scaled to the largest value.
///
/// Each line is the label padded to the widest label, two spaces, then the
/// bar. With `show_values` the value follows the bar, right-aligned.
///
/// ```rust
/// use replkit_render::{bar_chart, Glyphs};
///
/// let data = [("high", 4.0), ("low", 2.0)];
/// let out = bar_chart(&data, 14, false, &Glyphs::ASCII);
/// assert_eq!(out, "high  ########\nlow   ####----");
/// ```
pub fn bar_chart<L: AsRef<str>>(
    data: &[(L, f64)],
    width: usize,
    show_values: bool,
    glyphs: &Glyphs,
) -> String {
    if data.is_empty() {
        return String::new();
    }

    let label_width = data
        .iter()
        .map(|(l, _)| display_width(l.as_ref()))
        .max()
        .unwrap_or(0);
    let values: Vec<String> = data.iter().map(|(_, v)| format_number(*v)).collect();
    let value_width = if show_values {
        values.iter().map(|v| v.len()).max().unwrap_or(0)
    } else {
        0
    };

    let reserved = label_width + GAP.len() + if show_values { GAP.len() + value_width } else { 0 };
    let bar_width = width.saturating_sub(reserved);
    let max = data.iter().map(|(_, v)| magnitude(*v)).fold(0.0, f64::max);

    data.iter()
        .zip(values.iter())
        .map(|((label, v), text)| {
            let filled = scaled(magnitude(*v), max, bar_width);
            let mut line = format!(
                "{}{}{}",
                pad_right(label.as_ref(), label_width),
                GAP,
                bar(filled, bar_width, glyphs)
            );
            if show_values {
                line.push_str(GAP);
                line.push_str(&pad_left(text, value_width));
            }
            line
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Renders a single progress bar: `label: [####----]  50%`.
///
/// The ratio is clamped to `0..=1`; a non-positive `total` counts as zero
/// progress.
pub fn progress(
    value: f64,
    total: f64,
    width: usize,
    label: Option<&str>,
    glyphs: &Glyphs,
) -> String {
    let ratio = if total > 0.0 && value.is_finite() {
        (value / total).clamp(0.0, 1.0)
    } else {
        0.0
    };
    let percent = format!("{:>3}%", (ratio * 100.0).round() as u32);

    let prefix = match label {
        Some(l) if !l.is_empty() => format!("{}: ", l),
        _ => String::new(),
    };
    let reserved = display_width(&prefix) + 2 + GAP.len() + percent.len();
    let bar_width = width.saturating_sub(reserved);
    let filled = (ratio * bar_width as f64).round() as usize;

    format!("{}[{}]{}{}", prefix, bar(filled, bar_width, glyphs), GAP, percent)
}

/// Renders values as a one-line sparkline.
///
/// With `width` set only the last `width` values are drawn. A flat series is
/// drawn at the middle level.
///
/// ```rust
/// use replkit_render::{sparkline, Glyphs};
///
/// assert_eq!(sparkline(&[0.0, 7.0], None, &Glyphs::ASCII), "_#");
/// assert_eq!(sparkline(&[1.0, 2.0, 3.0], Some(2), &Glyphs::ASCII), "_#");
/// ```
pub fn sparkline(values: &[f64], width: Option<usize>, glyphs: &Glyphs) -> String {
    let levels = glyphs.spark_levels;
    if levels.is_empty() {
        return String::new();
    }
    let start = width.map_or(0, |w| values.len().saturating_sub(w));
    let window = &values[start..];

    let finite = window.iter().copied().filter(|v| v.is_finite());
    let (min, max) = finite.fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
        (lo.min(v), hi.max(v))
    });
    let top = levels.len() - 1;

    window
        .iter()
        .map(|v| {
            let idx = if !v.is_finite() {
                0
            } else if max > min {
                (((v - min) / (max - min)) * top as f64).round() as usize
            } else {
                levels.len() / 2
            };
            levels[idx.min(top)]
        })
        .collect()
}

fn magnitude(v: f64) -> f64 {
    if v.is_finite() && v > 0.0 {
        v
    } else {
        0.0
    }
}

fn scaled(v: f64, max: f64, width: usize) -> usize {
    if max <= 0.0 {
        return 0;
    }
    ((v / max) * width as f64).round() as usize
}

fn bar(filled: usize, width: usize, glyphs: &Glyphs) -> String {
    let filled = filled.min(width);
    let mut s = String::with_capacity(width * glyphs.bar_fill.len_utf8());
    s.extend(std::iter::repeat(glyphs.bar_fill).take(filled));
    s.extend(std::iter::repeat(glyphs.bar_empty).take(width - filled));
    s
}
