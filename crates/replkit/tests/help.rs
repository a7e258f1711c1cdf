mod common;

use common::todo_app;
use replkit::{App, ArgValues, Args, Namespace, Strategy};
use serde_json::json;

#[test]
fn test_help_is_synthesized_at_bind_time() {
    let app = todo_app().unwrap();
    assert!(app.execute("help", Args::new()).unwrap_err().is_unknown_command());

    app.bind(&mut Namespace::new());
    assert!(app.execute("help", Args::new()).is_ok());
    assert_eq!(app.list_commands(), vec!["add", "list", "done", "pending"]);
}

#[test]
fn test_help_table_lists_signatures_sorted() {
    let app = todo_app().unwrap();
    app.ensure_help();

    let out = app.execute("help", Args::new()).unwrap();
    let text = out.text().unwrap();
    let lines: Vec<&str> = text.lines().collect();

    assert!(lines[0].starts_with("Command "));
    assert!(lines[0].ends_with("Description "));
    assert!(lines[2].starts_with("add(task, priority=\"medium\")  Add a task."));
    assert!(lines[3].starts_with("done(id)"));
    assert!(lines[4].starts_with("list()"));
    assert!(lines[5].starts_with("pending()"));
    assert_eq!(lines.len(), 6);
}

#[test]
fn test_help_exact_layout() {
    let app = App::builder("mini")
        .command_with(
            "list",
            |_: &mut (), _: &ArgValues| Ok::<_, anyhow::Error>(()),
            |c| c.about("List tasks.\n\nShows everything."),
        )
        .unwrap()
        .command_with(
            "add",
            |_: &mut (), _: &ArgValues| Ok::<_, anyhow::Error>(()),
            |c| c.arg("task").arg_default("priority", "medium").about("Add a task."),
        )
        .unwrap()
        .build();
    app.ensure_help();

    let out = app.execute("help", Args::new()).unwrap();
    assert_eq!(
        out.text(),
        Some(
            "Command                       Description\n\
             ----------------------------  -----------\n\
             add(task, priority=\"medium\")  Add a task.\n\
             list()                        List tasks."
        )
    );
}

#[test]
fn test_help_data_under_passthrough() {
    let app = todo_app().unwrap();
    app.ensure_help();

    let data = app
        .using(Strategy::Passthrough)
        .execute("help", Args::new())
        .unwrap()
        .into_data()
        .unwrap();
    assert_eq!(
        data[0],
        json!({"Command": "add(task, priority=\"medium\")", "Description": "Add a task."})
    );
}

#[test]
fn test_explicit_help_is_kept() {
    let app = App::builder("custom")
        .command("help", |_: &mut (), _: &ArgValues| Ok::<_, anyhow::Error>("my help"))
        .unwrap()
        .build();
    app.ensure_help();

    let out = app.execute("help", Args::new()).unwrap();
    assert_eq!(out.text(), Some("my help"));
    assert_eq!(app.list_commands(), vec!["help"]);
}

#[test]
fn test_help_survives_view_creation() {
    let app = todo_app().unwrap();
    let view = app.using(Strategy::json());
    view.ensure_help();
    assert!(app.execute("help", Args::new()).is_ok());
}
