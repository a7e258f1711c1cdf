//! Command line interface and the script runner.
//!
//! `tdoo` runs todo commands written one per line, shell style:
//!
//! ```text
//! add "Write documentation" high
//! add "Buy milk"
//! done 1
//! list
//! ```
//!
//! Lines come from `-c` flags, a script file, or stdin. `name=value` tokens
//! are keyword arguments. Blank lines and `#` comments are skipped.

use std::fs;
use std::io::{BufRead, Write};
use std::path::PathBuf;

use anyhow::{bail, Context};
use clap::{ArgAction, Parser, ValueEnum};
use replkit::{set_page_width, Args, Format, GlyphMode, Namespace, Strategy, TextSettings};
use tracing::{debug, warn};

use crate::todo;

/// How command results are printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputArg {
    /// Tables, trees, charts and boxes
    Text,
    Json,
    Yaml,
    Csv,
    /// The underlying data as compact JSON
    Raw,
}

impl OutputArg {
    pub fn strategy(self, text: TextSettings) -> Strategy {
        match self {
            OutputArg::Text => Strategy::Text(text),
            OutputArg::Json => Strategy::Structured(Format::Json),
            OutputArg::Yaml => Strategy::Structured(Format::Yaml),
            OutputArg::Csv => Strategy::Structured(Format::Csv),
            OutputArg::Raw => Strategy::Passthrough,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum GlyphArg {
    Ascii,
    Unicode,
    /// Unicode when REPLKIT_GLYPHS=unicode, ASCII otherwise
    Auto,
}

impl From<GlyphArg> for GlyphMode {
    fn from(arg: GlyphArg) -> Self {
        match arg {
            GlyphArg::Ascii => GlyphMode::Ascii,
            GlyphArg::Unicode => GlyphMode::Unicode,
            GlyphArg::Auto => GlyphMode::Auto,
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "tdoo", version, about = "A todo list manager built on replkit")]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputArg::Text)]
    pub output: OutputArg,

    /// Page width for text output [default: terminal width, or 80]
    #[arg(short, long)]
    pub width: Option<usize>,

    /// Glyph set for lists, trees and charts
    #[arg(long, value_enum, default_value_t = GlyphArg::Auto)]
    pub glyphs: GlyphArg,

    /// A command line to run; repeatable
    #[arg(short = 'c', long = "command", value_name = "LINE")]
    pub commands: Vec<String>,

    /// Read command lines from a file
    #[arg(short, long, conflicts_with = "commands")]
    pub file: Option<PathBuf>,

    /// Print a banner before running
    #[arg(long)]
    pub banner: bool,

    /// More diagnostics on stderr (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Script lines from `-c`, `--file`, or `input`, in that order of
    /// preference.
    fn script<R: BufRead>(&self, input: R) -> anyhow::Result<Vec<String>> {
        if !self.commands.is_empty() {
            return Ok(self.commands.clone());
        }
        if let Some(path) = &self.file {
            let text = fs::read_to_string(path)
                .with_context(|| format!("cannot read script {}", path.display()))?;
            return Ok(text.lines().map(str::to_string).collect());
        }
        input
            .lines()
            .collect::<Result<Vec<_>, _>>()
            .context("cannot read commands from stdin")
    }
}

/// Splits a script line into a command name and its arguments. Blank lines
/// and comments yield `None`.
pub fn parse_line(line: &str) -> anyhow::Result<Option<(String, Args)>> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return Ok(None);
    }
    let mut tokens =
        shell_words::split(line).with_context(|| format!("cannot parse line: {}", line))?;
    if tokens.is_empty() {
        return Ok(None);
    }
    let name = tokens.remove(0);
    Ok(Some((name, Args::from_tokens(tokens))))
}

/// Runs every script line against a fresh todo list.
///
/// Results go to `out`; failures are reported on `err` and do not stop the
/// script. The run fails at the end if any line failed.
pub fn run<R, W, E>(cli: &Cli, input: R, out: &mut W, err: &mut E) -> anyhow::Result<()>
where
    R: BufRead,
    W: Write,
    E: Write,
{
    if let Some(width) = cli.width {
        set_page_width(width);
    }
    let text = TextSettings {
        width: cli.width,
        glyphs: GlyphMode::from(cli.glyphs),
    };

    let app = todo::app()?;
    app.state_mut().text = text;
    let view = app.using(cli.output.strategy(text));

    if cli.banner {
        writeln!(out, "{}", view.banner("Todo List Manager"))?;
    }

    let mut namespace = Namespace::new();
    view.bind(&mut namespace);

    let mut failures = 0usize;
    for line in cli.script(input)? {
        let (name, args) = match parse_line(&line) {
            Ok(Some(parsed)) => parsed,
            Ok(None) => continue,
            Err(e) => {
                failures += 1;
                writeln!(err, "error: {:#}", e)?;
                continue;
            }
        };
        // aliases are not bound; resolve them to the primary name
        let target = view
            .command(&name)
            .map(|c| c.name().to_string())
            .unwrap_or(name);
        debug!(command = %target, "running script line");

        match namespace.call(&target, args, out) {
            Ok(Some(value)) => writeln!(out, "{}", serde_json::to_string(&value)?)?,
            Ok(None) => {}
            Err(e) => {
                failures += 1;
                warn!(command = %target, error = %e, "command failed");
                writeln!(err, "error: {}", e)?;
            }
        }
    }

    if failures > 0 {
        bail!("{} command(s) failed", failures);
    }
    Ok(())
}
