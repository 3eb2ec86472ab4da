//! `tinct` - color expressions for the terminal.
//!
//! One invocation is a straight line: parse arguments, negotiate a color
//! depth, resolve every statement, format for the selected mode, write to
//! stdout. Any failure along the way aborts before the first output byte.

mod args;
mod help;
mod output;
mod spectrum;

use std::io::{self, Write};
use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;

use args::Cli;
use tinct::{render, Capability, RenderOptions};

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    let depth = tinct::resolve_depth(cli.depth_request());

    if cli.help {
        let capability = Capability::from_env();
        let page = help::page(depth, capability.enhanced_fonts, help::terminal_width())?;
        io::stderr().write_all(page.as_bytes())?;
        return Ok(());
    }

    let statements = tinct::parse(&cli.expression.join(" "))?;
    let options = RenderOptions { depth };
    let colors = statements
        .iter()
        .map(|statement| render(statement, &options))
        .collect::<tinct::Result<Vec<_>>>()?;

    let rendered = output::format(&cli.mode(), cli.style, &colors)?;
    io::stdout().write_all(rendered.as_bytes())?;
    Ok(())
}
