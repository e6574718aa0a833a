// src/cli.rs
use std::{
    fs,
    io::{self, Read, Write},
    path::{Path, PathBuf},
};

use clap::{ArgGroup, Parser, ValueEnum};
use color_eyre::eyre::{Result, WrapErr, eyre};
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::config::ExtractOptions;
use crate::specs::clients::{extract_from_html, index_by_name};

/// Pull client ids out of a saved client list page.
#[derive(Parser, Debug)]
#[command(name = "cli", version, about = "Extract client ids and names from a saved HTML page")]
#[command(group(ArgGroup::new("names_src").required(true).args(["names", "names_file"])))]
pub struct Args {
    /// Saved page to read; `-` reads stdin.
    #[arg(long, value_name = "PATH")]
    pub html: PathBuf,

    /// Wanted client names as a JSON array, e.g. '["Acme Corp","Initech"]'.
    #[arg(long, value_name = "JSON")]
    pub names: Option<String>,

    /// File holding the JSON array of wanted names.
    #[arg(long, value_name = "PATH")]
    pub names_file: Option<PathBuf>,

    /// CSS selector for client rows.
    #[arg(long, value_name = "CSS")]
    pub row_selector: Option<String>,

    /// Row attribute holding the client id.
    #[arg(long, value_name = "NAME")]
    pub id_attr: Option<String>,

    /// CSS selector for the name element inside a row.
    #[arg(long, value_name = "CSS")]
    pub name_selector: Option<String>,

    /// Name reported for rows with no name element.
    #[arg(long, value_name = "TEXT")]
    pub placeholder: Option<String>,

    #[arg(long, value_enum, default_value_t = OutputFormat::Records)]
    pub format: OutputFormat,

    /// Pretty-print the JSON.
    #[arg(long)]
    pub pretty: bool,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// `[{"id": …, "name": …}, …]` in page order.
    Records,
    /// `{"<name>": "<id>", …}`; later rows win on repeated names.
    Index,
}

impl Args {
    pub fn options(&self) -> ExtractOptions {
        let mut opts = ExtractOptions::default();
        if let Some(attr) = &self.id_attr {
            opts.set_id_attr(attr);
        }
        if let Some(sel) = &self.row_selector {
            opts.row_selector = sel.clone();
        }
        if let Some(sel) = &self.name_selector {
            opts.name_selector = sel.clone();
        }
        if let Some(p) = &self.placeholder {
            opts.placeholder = p.clone();
        }
        opts
    }

    fn names_json(&self) -> Result<String> {
        match (&self.names, &self.names_file) {
            (Some(json), _) => Ok(json.clone()),
            (None, Some(path)) => read_file(path)
                .wrap_err_with(|| format!("reading names from {}", path.display())),
            (None, None) => Err(eyre!("no client names given; pass --names or --names-file")),
        }
    }
}

pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();
}

fn read_file(path: &Path) -> crate::Result<String> {
    Ok(fs::read_to_string(path)?)
}

/// Drain a page from `reader`; the `--html -` path.
pub fn read_page<R: Read>(mut reader: R) -> crate::Result<String> {
    let mut buf = String::new();
    reader.read_to_string(&mut buf)?;
    Ok(buf)
}

/// Run one extraction and write the JSON result to `out`.
pub fn run<W: Write>(args: &Args, out: &mut W) -> Result<()> {
    run_with_input(args, io::stdin().lock(), out)
}

/// As [`run`], with `stdin` standing in for the process's standard input.
pub fn run_with_input<R: Read, W: Write>(args: &Args, stdin: R, out: &mut W) -> Result<()> {
    let names_json = args.names_json()?;
    let html = if args.html.as_os_str() == "-" {
        read_page(stdin).wrap_err("reading page from stdin")?
    } else {
        read_file(&args.html)
            .wrap_err_with(|| format!("reading page from {}", args.html.display()))?
    };
    let opts = args.options();

    let records = extract_from_html(&html, &names_json, &opts)?;
    info!(matched = records.len(), page = %args.html.display(), "extraction done");

    match (args.format, args.pretty) {
        (OutputFormat::Records, false) => serde_json::to_writer(&mut *out, &records)?,
        (OutputFormat::Records, true) => serde_json::to_writer_pretty(&mut *out, &records)?,
        (OutputFormat::Index, false) => serde_json::to_writer(&mut *out, &index_by_name(records))?,
        (OutputFormat::Index, true) => {
            serde_json::to_writer_pretty(&mut *out, &index_by_name(records))?
        }
    }
    writeln!(out)?;
    out.flush()?;
    Ok(())
}
