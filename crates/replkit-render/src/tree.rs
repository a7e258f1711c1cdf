//! Nested mappings drawn as an indented tree.
//!
//! ```text
//! work
//! |   |-- Write report
//! |   `-- Review PR
//! home
//!     `-- Buy milk
//! ```
//!
//! Top-level keys carry no glyph. Their children are indented by a
//! continuation column (a pipe when more top-level keys follow, blank for the
//! last one) and from there every level uses branch glyphs, with the terminal
//! glyph on the last sibling.

use serde_json::{Map, Value};

use crate::glyphs::Glyphs;
use crate::value::cell_text;

/// Renders a nested mapping.
///
/// Object values recurse, array values become leaf lines, and any other value
/// is appended to its key's line as `key: value`.
pub fn tree(data: &Map<String, Value>, glyphs: &Glyphs) -> String {
    let mut lines = Vec::new();
    let count = data.len();
    for (i, (key, value)) in data.iter().enumerate() {
        let last = i + 1 == count;
        let child_prefix = if last { glyphs.tree_space } else { glyphs.tree_pipe };
        emit(&mut lines, key.clone(), value, child_prefix, glyphs);
    }
    lines.join("\n")
}

/// Pushes `head` (the key line) and then whatever `value` contributes.
fn emit(lines: &mut Vec<String>, head: String, value: &Value, prefix: &str, glyphs: &Glyphs) {
    match value {
        Value::Object(map) => {
            lines.push(head);
            branch(lines, map, prefix, glyphs);
        }
        Value::Array(items) => {
            lines.push(head);
            let count = items.len();
            for (i, item) in items.iter().enumerate() {
                let glyph = if i + 1 == count { glyphs.tree_last } else { glyphs.tree_branch };
                lines.push(format!("{}{}{}", prefix, glyph, cell_text(item)));
            }
        }
        scalar => lines.push(format!("{}: {}", head, cell_text(scalar))),
    }
}

fn branch(lines: &mut Vec<String>, map: &Map<String, Value>, prefix: &str, glyphs: &Glyphs) {
    let count = map.len();
    for (i, (key, value)) in map.iter().enumerate() {
        let last = i + 1 == count;
        let (glyph, cont) = if last {
            (glyphs.tree_last, glyphs.tree_space)
        } else {
            (glyphs.tree_branch, glyphs.tree_pipe)
        };
        let head = format!("{}{}{}", prefix, glyph, key);
        let child_prefix = format!("{}{}", prefix, cont);
        emit(lines, head, value, &child_prefix, glyphs);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn render(v: Value) -> String {
        match v {
            Value::Object(map) => tree(&map, &Glyphs::ASCII),
            _ => unreachable!(),
        }
    }

    #[test]
    fn single_nested_scalar() {
        let out = render(json!({"a": {"b": 1}}));
        assert_eq!(out, "a\n    `-- b: 1");
    }

    #[test]
    fn empty_map_is_empty_string() {
        assert_eq!(render(json!({})), "");
    }

    #[test]
    fn top_level_scalars_are_inline() {
        assert_eq!(render(json!({"name": "x", "n": 2})), "name: x\nn: 2");
    }

    #[test]
    fn continuation_pipes_hold_at_every_depth() {
        let out = render(json!({
            "root": {
                "left": {"x": 1, "y": 2},
                "right": {"z": 3}
            }
        }));
        let expected = [
            "root",
            "    |-- left",
            "    |   |-- x: 1",
            "    |   `-- y: 2",
            "    `-- right",
            "        `-- z: 3",
        ]
        .join("\n");
        assert_eq!(out, expected);
    }

    #[test]
    fn arrays_become_leaves() {
        let out = render(json!({"work": ["a", "b"], "home": ["c"]}));
        assert_eq!(out, "work\n|   |-- a\n|   `-- b\nhome\n    `-- c");
    }

    #[test]
    fn empty_containers_emit_only_the_key() {
        assert_eq!(render(json!({"a": [], "b": {}})), "a\nb");
    }

    #[test]
    fn unicode_glyphs() {
        let v = json!({"a": {"b": 1, "c": 2}});
        let out = match v {
            Value::Object(map) => tree(&map, &Glyphs::UNICODE),
            _ => unreachable!(),
        };
        assert_eq!(out, "a\n    ├── b: 1\n    └── c: 2");
    }
}
