use insta::assert_snapshot;
use replkit::{
    bar_chart, boxed, compose, App, ArgValues, Args, BoxWidth, Glyphs, Strategy, TextSettings,
};
use serde_json::json;

fn dashboard() -> App {
    App::builder("dashboard")
        .command_with(
            "organize",
            |_: &mut (), _: &ArgValues| {
                Ok::<_, anyhow::Error>(json!({
                    "work": ["Write report", "Review PR"],
                    "home": {"chores": ["Buy milk"], "errands": 2}
                }))
            },
            |c| c.display("tree"),
        )
        .unwrap()
        .command_with(
            "status",
            |_: &mut (), _: &ArgValues| Ok::<_, anyhow::Error>("3 tasks\n1 done"),
            |c| c.display("box").opt("title", "Status").opt("width", 24),
        )
        .unwrap()
        .command_with(
            "stats",
            |_: &mut (), _: &ArgValues| Ok::<_, anyhow::Error>(json!({"done": 1, "pending": 3})),
            |c| c.display("bar_chart").opt("width", 20).opt("show_values", true),
        )
        .unwrap()
        .command("report", |_: &mut (), _: &ArgValues| {
            let summary = boxed("3 tasks\n1 done", Some("Summary"), BoxWidth::Fixed(20));
            let chart = bar_chart(&[("done", 1.0), ("pending", 3.0)], 20, true, &Glyphs::ASCII);
            Ok::<_, anyhow::Error>(compose(&[summary, chart], 1))
        })
        .unwrap()
        .build()
}

fn text(app: &App, name: &str) -> String {
    app.execute(name, Args::new()).unwrap().into_text().unwrap()
}

#[test]
fn test_tree_snapshot() {
    assert_snapshot!(text(&dashboard(), "organize"), @r"
    work
    |   |-- Write report
    |   `-- Review PR
    home
        |-- chores
        |   `-- Buy milk
        `-- errands: 2
    ");
}

#[test]
fn test_box_snapshot() {
    assert_snapshot!(text(&dashboard(), "status"), @r"
    +-- Status ------------+
    | 3 tasks              |
    | 1 done               |
    +----------------------+
    ");
}

#[test]
fn test_bar_chart_snapshot() {
    assert_snapshot!(text(&dashboard(), "stats"), @r"
    done     ###-----  1
    pending  ########  3
    ");
}

#[test]
fn test_composed_report_snapshot() {
    assert_snapshot!(text(&dashboard(), "report"), @r"
    +-- Summary -------+
    | 3 tasks          |
    | 1 done           |
    +------------------+

    done     ###-----  1
    pending  ########  3
    ");
}

#[test]
fn test_unicode_tree_snapshot() {
    let settings = TextSettings {
        width: Some(40),
        glyphs: replkit::GlyphMode::Unicode,
    };
    let app = dashboard().using(Strategy::Text(settings));
    assert_snapshot!(text(&app, "organize"), @r"
    work
    │   ├── Write report
    │   └── Review PR
    home
        ├── chores
        │   └── Buy milk
        └── errands: 2
    ");
}

#[test]
fn test_banner_centers_title() {
    let settings = TextSettings {
        width: Some(30),
        ..TextSettings::default()
    };
    let app = dashboard().using(Strategy::Text(settings));
    let banner = app.banner("Dashboard");
    let lines: Vec<&str> = banner.split('\n').collect();
    assert_eq!(
        lines,
        vec![
            "=".repeat(30).as_str(),
            "          Dashboard           ",
            "-".repeat(30).as_str(),
            "Type help() for available commands",
            "",
        ]
    );
}
