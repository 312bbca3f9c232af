//! `hocon` CLI — merge configuration documents with HOCON fallback semantics,
//! query typed values and render the result.
//!
//! Input documents are JSON (every JSON document is valid HOCON). When several
//! inputs are given they are merged in order: later documents win per key,
//! nested objects are merged key by key.
//!
//! ## Usage
//!
//! ```sh
//! # Render a document (stdin → stdout)
//! echo '{"name":"svc","port":80}' | hocon render
//!
//! # Merge an overlay onto a base config and render
//! hocon render -i base.json -i overlay.json
//!
//! # Print the merged document as JSON
//! hocon json -i base.json -i overlay.json -o merged.json
//!
//! # Read a typed value by path
//! hocon get server.timeout --as duration -i base.json
//! hocon get server.idle --as duration --allow-infinite -i base.json
//!
//! # Trace merge decisions
//! RUST_LOG=hocon_value=trace hocon render -i a.json -i b.json
//! ```

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use hocon_value::{is_infinite, HoconElement, HoconObject, HoconRoot, HoconValue};
use std::io::{self, Read};
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(
    name = "hocon",
    version,
    about = "Merge, query and render HOCON configuration values"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Log merge decisions and coercion fallbacks to stderr
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Render the merged document in HOCON text form
    Render {
        /// Input files, merged in order (reads stdin if omitted)
        #[arg(short, long)]
        input: Vec<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
    },
    /// Print the merged document as pretty-printed JSON
    Json {
        /// Input files, merged in order (reads stdin if omitted)
        #[arg(short, long)]
        input: Vec<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
    },
    /// Look up a dot-separated path and print it as the requested type
    Get {
        /// Path such as `server.timeout`
        path: String,
        /// Input files, merged in order (reads stdin if omitted)
        #[arg(short, long)]
        input: Vec<String>,
        /// Type to coerce the value into
        #[arg(long = "as", value_enum, default_value_t = ValueType::String)]
        as_type: ValueType,
        /// Accept `infinite` for durations
        #[arg(long)]
        allow_infinite: bool,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum ValueType {
    String,
    Bool,
    Int,
    Float,
    /// Byte count, optional `b` suffix
    Bytes,
    /// Printed in milliseconds, or `infinite`
    Duration,
    /// Array of strings, one per line
    List,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Render { input, output } => {
            let root = load_document(&input)?;
            write_output(output.as_deref(), &root.value().render(0))?;
        }
        Commands::Json { input, output } => {
            let root = load_document(&input)?;
            let pretty = serde_json::to_string_pretty(&root.value().to_json())?;
            write_output(output.as_deref(), &pretty)?;
        }
        Commands::Get {
            path,
            input,
            as_type,
            allow_infinite,
        } => {
            let root = load_document(&input)?;
            let value = root
                .get(&path)
                .with_context(|| format!("Path not found: {}", path))?;
            let text = coerce(value, as_type, allow_infinite)
                .with_context(|| format!("Failed to read '{}'", path))?;
            write_output(None, &text)?;
        }
    }

    Ok(())
}

/// Default filter keeps the binary quiet; `-v` or `RUST_LOG` opens it up.
fn init_logging(verbose: bool) {
    let default = if verbose {
        "hocon_cli=debug,hocon_value=trace"
    } else {
        "hocon_cli=warn,hocon_value=warn"
    };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}

/// Read every input (or stdin) and merge them into one document, later
/// inputs taking precedence.
fn load_document(inputs: &[String]) -> Result<HoconRoot> {
    let mut sources = Vec::new();
    if inputs.is_empty() {
        sources.push(("<stdin>".to_string(), read_input(None)?));
    } else {
        for path in inputs {
            sources.push((path.clone(), read_input(Some(path))?));
        }
    }

    let mut doc = HoconObject::new();
    for (label, text) in sources {
        let value = HoconValue::from_json_str(&text)
            .with_context(|| format!("Failed to parse {}", label))?;
        let Some(obj) = value.into_object() else {
            bail!("{}: top-level value must be an object", label);
        };
        debug!(source = %label, keys = obj.len(), "merging document");
        doc.merge(obj);
    }

    Ok(HoconRoot::new(HoconValue::from(HoconElement::Object(doc))))
}

fn coerce(value: &HoconValue, as_type: ValueType, allow_infinite: bool) -> Result<String> {
    let text = match as_type {
        ValueType::String => value.get_string(),
        ValueType::Bool => value.get_bool()?.to_string(),
        ValueType::Int => value.get_i64()?.to_string(),
        ValueType::Float => value.get_f64()?.to_string(),
        ValueType::Bytes => value.get_byte_size()?.to_string(),
        ValueType::Duration => {
            let duration = value.get_duration(allow_infinite)?;
            if is_infinite(&duration) {
                "infinite".to_string()
            } else {
                duration.num_milliseconds().to_string()
            }
        }
        ValueType::List => value.get_string_list().join("\n"),
    };
    Ok(text)
}

fn read_input(path: Option<&str>) -> Result<String> {
    match path {
        Some(path) => {
            std::fs::read_to_string(path).with_context(|| format!("Failed to read file: {}", path))
        }
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read from stdin")?;
            Ok(buf)
        }
    }
}

fn write_output(path: Option<&str>, content: &str) -> Result<()> {
    match path {
        Some(path) => {
            std::fs::write(path, content)
                .with_context(|| format!("Failed to write file: {}", path))?;
        }
        None => {
            println!("{}", content);
        }
    }
    Ok(())
}
