//! Plain-text column tables.

use crate::util::{display_width, pad_right};

const COLUMN_GAP: &str = "  ";

/// Renders rows as left-justified columns.
///
/// With headers, every row is fitted to the header count: short rows gain
/// empty cells and extra cells are dropped. Without headers the column count
/// is the longest row and short rows are left short. An empty header slice
/// counts as no headers.
///
/// Column width is the widest of the header and every cell in the column.
/// Every cell is padded to its column width, so with headers all lines have
/// the same display width. Columns are separated by two spaces and the header
/// is underlined with a dash rule per column.
///
/// ```rust
/// use replkit_render::table;
///
/// let rows = vec![vec!["1", "Buy milk"], vec!["12", "Walk"]];
/// let out = table(&rows, Some(&["ID", "Task"]));
/// let lines: Vec<&str> = out.lines().collect();
/// assert_eq!(lines[0], "ID  Task    ");
/// assert_eq!(lines[1], "--  --------");
/// assert_eq!(lines[3], "12  Walk    ");
/// ```
pub fn table<R, C>(rows: &[R], headers: Option<&[&str]>) -> String
where
    R: AsRef<[C]>,
    C: AsRef<str>,
{
    if rows.is_empty() {
        return String::new();
    }

    let headers = headers.filter(|h| !h.is_empty());

    let body: Vec<Vec<&str>> = rows
        .iter()
        .map(|row| {
            let cells = row.as_ref().iter().map(|c| c.as_ref());
            match headers {
                Some(h) => {
                    let mut cells: Vec<&str> = cells.take(h.len()).collect();
                    cells.resize(h.len(), "");
                    cells
                }
                None => cells.collect(),
            }
        })
        .collect();

    let columns = match headers {
        Some(h) => h.len(),
        None => body.iter().map(Vec::len).max().unwrap_or(0),
    };

    let mut widths = vec![0usize; columns];
    if let Some(h) = headers {
        for (w, cell) in widths.iter_mut().zip(h.iter()) {
            *w = display_width(cell);
        }
    }
    for row in &body {
        for (w, cell) in widths.iter_mut().zip(row.iter()) {
            *w = (*w).max(display_width(cell));
        }
    }

    let mut lines = Vec::with_capacity(body.len() + 2);
    if let Some(h) = headers {
        lines.push(format_row(h, &widths));
        let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
        lines.push(rule.join(COLUMN_GAP));
    }
    for row in &body {
        lines.push(format_row(row, &widths));
    }
    lines.join("\n")
}

fn format_row(cells: &[&str], widths: &[usize]) -> String {
    let padded: Vec<String> = cells
        .iter()
        .zip(widths.iter())
        .map(|(cell, w)| pad_right(cell, *w))
        .collect();
    padded.join(COLUMN_GAP)
}
