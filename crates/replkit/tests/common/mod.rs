#![allow(dead_code)]

use anyhow::bail;
use replkit::{App, ArgValues, SetupError};
use serde::Serialize;
use serde_json::json;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Todo {
    pub id: u64,
    pub task: String,
    pub priority: String,
    pub done: bool,
}

#[derive(Debug, Default)]
pub struct Todos {
    pub items: Vec<Todo>,
    pub next_id: u64,
}

pub fn todo_app() -> Result<App<Todos>, SetupError> {
    let app = App::builder("todo")
        .command_with(
            "add",
            |s: &mut Todos, args: &ArgValues| {
                let task: String = args.get("task")?;
                let priority: String = args.get("priority")?;
                s.next_id += 1;
                s.items.push(Todo {
                    id: s.next_id,
                    task: task.clone(),
                    priority,
                    done: false,
                });
                Ok::<_, anyhow::Error>(format!("Added #{}: {}", s.next_id, task))
            },
            |c| {
                c.arg("task")
                    .arg_default("priority", "medium")
                    .about("Add a task.")
            },
        )?
        .command_with(
            "list",
            |s: &mut Todos, _: &ArgValues| Ok::<_, anyhow::Error>(s.items.clone()),
            |c| {
                c.display("table")
                    .opt("headers", json!(["id", "task", "priority", "done"]))
                    .alias("ls")
                    .about("List tasks.")
            },
        )?
        .command_with(
            "done",
            |s: &mut Todos, args: &ArgValues| {
                let id: u64 = args.get("id")?;
                let Some(todo) = s.items.iter_mut().find(|t| t.id == id) else {
                    bail!("no task with id {}", id);
                };
                todo.done = true;
                Ok(format!("Completed: {}", todo.task))
            },
            |c| c.arg("id").about("Mark a task as done."),
        )?
        .command_with(
            "pending",
            |s: &mut Todos, _: &ArgValues| {
                let tasks: Vec<String> = s
                    .items
                    .iter()
                    .filter(|t| !t.done)
                    .map(|t| t.task.clone())
                    .collect();
                Ok::<_, anyhow::Error>(tasks)
            },
            |c| c.display("list").opt("style", "uncheck").about("Pending tasks."),
        )?
        .build();
    Ok(app)
}
