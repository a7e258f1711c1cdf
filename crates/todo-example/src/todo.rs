//! The todo list state and the commands that operate on it.
//!
//! Handlers only produce data. Each command declares how its data is shown
//! under the text strategy (table, checklist, tree, chart...), so the same
//! commands also serve JSON, YAML, CSV and raw output unchanged.

use std::collections::VecDeque;

use anyhow::bail;
use replkit::{
    boxed, compose, hr, list_display, truncate_end, App, ArgValues, BoxWidth, ListStyle,
    SetupError, TextSettings,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};

/// Completion samples kept for `trend`.
pub const HISTORY_LIMIT: usize = 50;

const TASK_COLUMN: usize = 30;
const TREE_TASK: usize = 40;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    #[default]
    Normal,
    High,
}

impl Priority {
    /// Highest first, as shown by `organize`.
    pub const ALL: [Priority; 3] = [Priority::High, Priority::Normal, Priority::Low];

    pub fn as_str(self) -> &'static str {
        match self {
            Priority::Low => "low",
            Priority::Normal => "normal",
            Priority::High => "high",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Todo {
    pub task: String,
    pub priority: Priority,
    pub done: bool,
}

/// One row of the `list` table.
#[derive(Debug, Serialize)]
struct Row {
    id: usize,
    task: String,
    priority: Priority,
    done: &'static str,
}

#[derive(Debug, Default)]
pub struct TodoList {
    pub todos: Vec<Todo>,
    pub completed_count: usize,
    /// Width and glyphs for blocks the handlers compose themselves.
    pub text: TextSettings,
    history: VecDeque<f64>,
}

impl TodoList {
    /// Appends a todo and returns its id.
    pub fn add(&mut self, task: impl Into<String>, priority: Priority) -> usize {
        self.todos.push(Todo {
            task: task.into(),
            priority,
            done: false,
        });
        self.todos.len() - 1
    }

    pub fn complete(&mut self, id: usize) -> anyhow::Result<&Todo> {
        let Some(todo) = self.todos.get_mut(id) else {
            bail!("invalid id: {}", id);
        };
        if !todo.done {
            todo.done = true;
            self.completed_count += 1;
        }
        Ok(todo)
    }

    pub fn pending(&self) -> impl Iterator<Item = (usize, &Todo)> {
        self.todos.iter().enumerate().filter(|(_, t)| !t.done)
    }

    pub fn done_count(&self) -> usize {
        self.todos.iter().filter(|t| t.done).count()
    }

    /// Share of completed todos, 0 to 100. An empty list counts as 0.
    pub fn completion_percent(&self) -> f64 {
        if self.todos.is_empty() {
            return 0.0;
        }
        self.done_count() as f64 * 100.0 / self.todos.len() as f64
    }

    /// Samples the current completion into the bounded history.
    pub fn record_completion(&mut self) -> Vec<f64> {
        self.history.push_back(self.completion_percent());
        while self.history.len() > HISTORY_LIMIT {
            self.history.pop_front();
        }
        self.history.iter().copied().collect()
    }

    fn checklist(&self) -> Vec<String> {
        self.pending()
            .map(|(i, t)| format!("{}: {}", i, t.task))
            .collect()
    }

    fn report(&self) -> String {
        let layout = self.text.layout();
        let width = layout.width;
        let total = self.todos.len();
        let done = self.done_count();

        let summary = boxed(
            &format!("Total: {}\nCompleted: {}\nPending: {}", total, done, total - done),
            Some("Todo Summary"),
            BoxWidth::Auto { max: width },
        );
        let pending = self.checklist();
        let pending = if pending.is_empty() {
            "  No pending tasks!".to_string()
        } else {
            list_display(&pending, ListStyle::Uncheck, false, &layout.glyphs)
        };

        compose(
            &[
                summary,
                hr('-', width),
                "Pending Tasks:".to_string(),
                pending,
                hr('-', width),
                format!("Overall Progress: {}/{}", done, total),
            ],
            0,
        )
    }
}

/// Builds the todo application with all of its commands.
pub fn app() -> Result<App<TodoList>, SetupError> {
    let app = App::builder("todo")
        .command_with(
            "list",
            |s: &mut TodoList, _: &ArgValues| {
                let rows: Vec<Row> = s
                    .todos
                    .iter()
                    .enumerate()
                    .map(|(id, t)| Row {
                        id,
                        task: truncate_end(&t.task, TASK_COLUMN, "..."),
                        priority: t.priority,
                        done: if t.done { "[x]" } else { "[ ]" },
                    })
                    .collect();
                Ok::<_, anyhow::Error>(rows)
            },
            |c| {
                c.display("table")
                    .opt("headers", json!(["id", "task", "priority", "done"]))
                    .alias("ls")
                    .about("Show all todos in a table.")
            },
        )?
        .command_with(
            "add",
            |s: &mut TodoList, args: &ArgValues| {
                let task: String = args.get("task")?;
                let priority: Priority = args.get("priority")?;
                s.add(task.clone(), priority);
                Ok::<_, anyhow::Error>(format!("Added: {} (priority: {})", task, priority.as_str()))
            },
            |c| {
                c.arg("task")
                    .arg_default("priority", "normal")
                    .about("Add a new todo with optional priority (low/normal/high).")
            },
        )?
        .command_with(
            "done",
            |s: &mut TodoList, args: &ArgValues| {
                let todo = s.complete(args.get("task_id")?)?;
                Ok::<_, anyhow::Error>(format!("Completed: {}", todo.task))
            },
            |c| c.arg("task_id").about("Mark a todo as done."),
        )?
        .command_with(
            "pending",
            |s: &mut TodoList, _: &ArgValues| Ok::<_, anyhow::Error>(s.checklist()),
            |c| {
                c.display("list")
                    .opt("style", "uncheck")
                    .about("Show only pending todos as a checklist.")
            },
        )?
        .command_with(
            "stats",
            |s: &mut TodoList, _: &ArgValues| {
                let total = s.todos.len();
                let done = s.done_count();
                let by_priority = |p: Priority| s.pending().filter(|(_, t)| t.priority == p).count();
                Ok::<_, anyhow::Error>(json!({
                    "Total": total,
                    "Done": done,
                    "Pending": total - done,
                    "High Priority": by_priority(Priority::High),
                    "Normal Priority": by_priority(Priority::Normal),
                    "Low Priority": by_priority(Priority::Low),
                }))
            },
            |c| c.display("bar_chart").about("Show todo statistics as a bar chart."),
        )?
        .command_with(
            "organize",
            |s: &mut TodoList, _: &ArgValues| {
                let mut tree = Map::new();
                for priority in Priority::ALL {
                    let items: Vec<Value> = s
                        .pending()
                        .filter(|(_, t)| t.priority == priority)
                        .map(|(i, t)| Value::String(format!("{}: {}", i, truncate_end(&t.task, TREE_TASK, "..."))))
                        .collect();
                    if !items.is_empty() {
                        tree.insert(priority.as_str().to_string(), Value::Array(items));
                    }
                }
                Ok::<_, anyhow::Error>(tree)
            },
            |c| c.display("tree").about("Organize todos by priority in a tree view."),
        )?
        .command_with(
            "completion",
            |s: &mut TodoList, _: &ArgValues| {
                Ok::<_, anyhow::Error>(json!({
                    "value": s.done_count(),
                    "total": s.todos.len(),
                    "label": "Completion",
                }))
            },
            |c| c.display("progress").about("Show overall completion progress."),
        )?
        .command_with(
            "report",
            |s: &mut TodoList, _: &ArgValues| Ok::<_, anyhow::Error>(s.report()),
            |c| c.about("Generate a full report."),
        )?
        .command_with(
            "trend",
            |s: &mut TodoList, _: &ArgValues| Ok::<_, anyhow::Error>(s.record_completion()),
            |c| {
                c.display("sparkline")
                    .opt("label", "Completion trend")
                    .opt("width", 40)
                    .about("Sample completion and show its trend.\n\nKeeps the most recent samples only.")
            },
        )?
        .build();
    Ok(app)
}
