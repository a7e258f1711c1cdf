//! Command metadata.

use replkit_render::DisplayKind;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// How a command's result should be presented, plus the names it answers to.
///
/// Metadata is fixed once the command is registered. Every alias of a command
/// shares the same `CommandMeta` instance.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CommandMeta {
    /// Renderer for text output. `None` means default stringification.
    #[serde(default)]
    pub display: Option<DisplayKind>,

    /// Renderer options, such as `headers` for tables or `title` for boxes.
    #[serde(default)]
    pub display_opts: Map<String, Value>,

    #[serde(default)]
    pub aliases: Vec<String>,
}

impl CommandMeta {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn display(mut self, kind: impl Into<DisplayKind>) -> Self {
        self.display = Some(kind.into());
        self
    }

    /// Sets one display option.
    pub fn opt(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.display_opts.insert(key.into(), value.into());
        self
    }

    pub fn alias(mut self, alias: impl Into<String>) -> Self {
        self.aliases.push(alias.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn builder_collects_fields() {
        let meta = CommandMeta::new()
            .display("table")
            .opt("headers", json!(["id", "task"]))
            .alias("ls");
        assert_eq!(meta.display, Some(DisplayKind::Table));
        assert_eq!(meta.display_opts["headers"], json!(["id", "task"]));
        assert_eq!(meta.aliases, vec!["ls"]);
    }

    #[test]
    fn deserializes_with_defaults() {
        let meta: CommandMeta = serde_json::from_value(json!({"display": "bar_chart"})).unwrap();
        assert_eq!(meta.display, Some(DisplayKind::BarChart));
        assert!(meta.display_opts.is_empty());
        assert!(meta.aliases.is_empty());
    }
}
