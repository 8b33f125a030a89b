//! `psrewrite`: rewrite a serialized syntax tree.
//!
//! Reads a tree as JSON (as produced by a parsing front end), runs one of the
//! bundled rewriters over it and writes the result as JSON.

use std::fs;
use std::io::{self, Read, Write};
use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, ValueEnum};
use tracing::info;

use ps_syntax_rewriter::ir::ps_node::Node;
use ps_syntax_rewriter::ir::visitor::{rewrite_tree, Identity};
use ps_syntax_rewriter::logging::init_logger;
use ps_syntax_rewriter::rewriters::TraceRewriter;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum RewriterChoice {
    /// Copy the tree unchanged
    Identity,
    /// Wrap every expression in a `[Tracer]` conversion
    Trace,
}

#[derive(Debug, Parser)]
#[command(name = "psrewrite", version, about = "Rewrite a PowerShell syntax tree serialized as JSON")]
struct Args {
    /// Tree to read (defaults to stdin)
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Where to write the rewritten tree (defaults to stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    #[arg(short, long, value_enum, default_value_t = RewriterChoice::Identity)]
    rewriter: RewriterChoice,

    /// Leave assignment targets unwrapped when tracing
    #[arg(long)]
    skip_assignment_targets: bool,

    /// Pretty-print the output
    #[arg(long)]
    pretty: bool,

    /// Log level filter (otherwise uses RUST_LOG or defaults to "info")
    #[arg(long)]
    log_level: Option<String>,

    /// Disable ANSI colors in log output
    #[arg(long)]
    no_color: bool,
}

fn read_input(path: Option<&PathBuf>) -> anyhow::Result<String> {
    match path {
        Some(path) => fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display())),
        None => {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer).context("failed to read stdin")?;
            Ok(buffer)
        }
    }
}

fn write_output(path: Option<&PathBuf>, json: &str) -> anyhow::Result<()> {
    match path {
        Some(path) => fs::write(path, json).with_context(|| format!("failed to write {}", path.display())),
        None => {
            let mut stdout = io::stdout().lock();
            writeln!(stdout, "{json}").context("failed to write stdout")
        }
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_logger(args.no_color, args.log_level.as_deref())?;

    let source = read_input(args.input.as_ref())?;
    let tree: Node = serde_json::from_str(&source).context("input is not a serialized syntax tree")?;
    info!(root = %tree.kind(), rewriter = ?args.rewriter, "rewriting");

    let rewritten = match args.rewriter {
        RewriterChoice::Identity => rewrite_tree(&tree, &mut Identity, None)?,
        RewriterChoice::Trace => {
            let mut tracer = if args.skip_assignment_targets {
                TraceRewriter::skipping_assignment_targets()
            } else {
                TraceRewriter::new()
            };
            let rewritten = rewrite_tree(&tree, &mut tracer, None)?;
            info!(wrapped = tracer.wrapped(), "traced expressions");
            rewritten
        }
    };

    let json = if args.pretty {
        serde_json::to_string_pretty(&rewritten)?
    } else {
        serde_json::to_string(&rewritten)?
    };
    write_output(args.output.as_ref(), &json)
}
