//! The synthesized `help` command.

use std::cell::RefCell;
use std::rc::Weak;

use anyhow::anyhow;
use replkit_dispatch::{ArgValues, Command, CommandMeta, Handler};
use serde::Serialize;
use serde_json::json;

use crate::registry::Registry;

pub(crate) const HELP: &str = "help";

/// One row of the help table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub(crate) struct HelpRow {
    #[serde(rename = "Command")]
    command: String,
    #[serde(rename = "Description")]
    description: String,
}

/// Signature and first doc line of every listed command, sorted by
/// signature.
pub(crate) fn help_rows<S>(registry: &Registry<S>) -> Vec<HelpRow> {
    let mut rows: Vec<HelpRow> = registry
        .commands()
        .iter()
        .map(|c| HelpRow {
            command: c.signature(),
            description: c.summary().to_string(),
        })
        .collect();
    rows.sort_by(|a, b| a.command.cmp(&b.command));
    rows
}

/// Builds the `help` command. It holds the registry weakly so the registry
/// can own it.
pub(crate) fn help_command<S: 'static>(registry: Weak<RefCell<Registry<S>>>) -> Command<S> {
    let handler = Handler::new(move |_: &mut S, _: &ArgValues| {
        let registry = registry
            .upgrade()
            .ok_or_else(|| anyhow!("application was dropped"))?;
        let rows = help_rows(&registry.borrow());
        Ok::<_, anyhow::Error>(rows)
    });
    let meta = CommandMeta::new()
        .display("table")
        .opt("headers", json!(["Command", "Description"]));
    Command::new(HELP, handler, meta, vec![], Some("Show available commands.".into()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use replkit_dispatch::Param;

    fn command(name: &str, params: Vec<Param>, about: Option<&str>) -> Command<()> {
        let handler = Handler::new(|_: &mut (), _: &ArgValues| Ok::<_, anyhow::Error>(()));
        Command::new(name, handler, CommandMeta::new(), params, about.map(String::from))
    }

    #[test]
    fn rows_are_sorted_by_signature() {
        let mut registry = Registry::default();
        registry
            .insert(command("stats", vec![], Some("Show statistics.\n\nMore.")))
            .unwrap();
        registry
            .insert(command(
                "add",
                vec![Param::required("task"), Param::optional("priority", "medium")],
                Some("  Add a task.  "),
            ))
            .unwrap();
        registry.insert(command("done", vec![Param::required("id")], None)).unwrap();

        let rows = help_rows(&registry);
        let commands: Vec<&str> = rows.iter().map(|r| r.command.as_str()).collect();
        assert_eq!(
            commands,
            vec!["add(task, priority=\"medium\")", "done(id)", "stats()"]
        );
        assert_eq!(rows[0].description, "Add a task.");
        assert_eq!(rows[1].description, "");
        assert_eq!(rows[2].description, "Show statistics.");
    }

    #[test]
    fn rows_serialize_with_table_headers() {
        let row = HelpRow {
            command: "f()".into(),
            description: "Does f.".into(),
        };
        assert_eq!(
            serde_json::to_value(row).unwrap(),
            json!({"Command": "f()", "Description": "Does f."})
        );
    }
}
