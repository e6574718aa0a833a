// src/bin/cli.rs
use clap::Parser;
use client_ids::cli;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    cli::init_tracing();

    let args = cli::Args::parse();
    let stdout = std::io::stdout();
    cli::run(&args, &mut stdout.lock())
}
