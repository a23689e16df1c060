//! `laxjson` CLI: query and reformat JSON from the command line.
//!
//! ## Usage
//!
//! ```sh
//! # Extract a value by path (stdin → stdout)
//! echo '{"user":{"name":"Ada"}}' | laxjson get user.name --as string
//!
//! # Extract from a file, as compact JSON
//! laxjson get -i weather.json 'weather[0].id'
//!
//! # Strict mode: malformed input, missing paths, and undefined coercions
//! # fail instead of defaulting
//! laxjson get -i weather.json main.temp --as int --strict
//!
//! # Pretty-print (or compact) a document
//! laxjson fmt -i data.json
//! laxjson fmt --compact -i data.json -o min.json
//!
//! # List object keys at a path
//! laxjson keys -i data.json main
//! ```

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use laxjson_core::{parse_str, try_parse_str, JsonValue};
use std::io::{self, Read};

#[derive(Parser)]
#[command(name = "laxjson", version, about = "Forgiving JSON extraction CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Extract the value at a path
    Get {
        /// Dotted path with [n] index groups, e.g. weather[0].id
        path: String,
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output coercion for the extracted value
        #[arg(long = "as", value_enum, default_value = "json")]
        as_kind: OutputKind,
        /// Fail on malformed input, missing paths, and undefined coercions
        /// instead of printing a default
        #[arg(long)]
        strict: bool,
    },
    /// Reformat a document (pretty-printed by default)
    Fmt {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
        /// Emit compact JSON instead of pretty-printed
        #[arg(long)]
        compact: bool,
    },
    /// List object keys at a path, one per line, in document order
    Keys {
        /// Dotted path (the document root if omitted)
        path: Option<String>,
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputKind {
    /// Compact JSON text (strings stay quoted)
    Json,
    /// String coercion (unquoted; numbers format as text)
    String,
    /// Integer coercion
    Int,
    /// Double coercion
    Double,
    /// Bool coercion
    Bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Get {
            path,
            input,
            as_kind,
            strict,
        } => {
            let text = read_input(input.as_deref())?;
            let doc = if strict {
                try_parse_str(&text).context("Input is not valid JSON")?
            } else {
                parse_str(&text)
            };
            let value = if strict {
                doc.try_path(&path)
                    .with_context(|| format!("No value at path: {path}"))?
            } else {
                doc.path(&path)
            };
            println!("{}", render(value, as_kind, strict)?);
        }
        Commands::Fmt {
            input,
            output,
            compact,
        } => {
            let text = read_input(input.as_deref())?;
            let doc = try_parse_str(&text).context("Input is not valid JSON")?;
            let rendered = if compact {
                doc.to_json()
            } else {
                serde_json::to_string_pretty(&doc).context("Failed to render JSON")?
            };
            write_output(output.as_deref(), &rendered)?;
        }
        Commands::Keys { path, input } => {
            let text = read_input(input.as_deref())?;
            let doc = try_parse_str(&text).context("Input is not valid JSON")?;
            let node = match path.as_deref() {
                Some(p) => doc.path(p),
                None => &doc,
            };
            for key in node.object_value().keys() {
                println!("{key}");
            }
        }
    }

    Ok(())
}

/// Render a value under the selected coercion.
///
/// Lenient mode uses the defaulting accessors, so a `Null` or mismatched
/// value prints its zero form (`""`, `0`, `0.0`, `false`). Strict mode uses
/// the optional accessors and fails where the coercion is undefined.
fn render(value: &JsonValue, kind: OutputKind, strict: bool) -> Result<String> {
    if strict {
        let rendered = match kind {
            OutputKind::Json => Some(value.to_json()),
            OutputKind::String => value.as_string(),
            OutputKind::Int => value.as_int().map(|n| n.to_string()),
            OutputKind::Double => value.as_double().map(double_text),
            OutputKind::Bool => value.as_bool().map(|b| b.to_string()),
        };
        rendered.with_context(|| {
            format!(
                "Cannot read a {} value as {}",
                value.type_name(),
                kind_name(kind)
            )
        })
    } else {
        Ok(match kind {
            OutputKind::Json => value.to_json(),
            OutputKind::String => value.string_value(),
            OutputKind::Int => value.int_value().to_string(),
            OutputKind::Double => double_text(value.double_value()),
            OutputKind::Bool => value.bool_value().to_string(),
        })
    }
}

/// Doubles print in their JSON form, so a whole value keeps its point
/// (`0.0`, not `0`).
fn double_text(value: f64) -> String {
    JsonValue::from(value).to_json()
}

fn kind_name(kind: OutputKind) -> &'static str {
    match kind {
        OutputKind::Json => "json",
        OutputKind::String => "string",
        OutputKind::Int => "int",
        OutputKind::Double => "double",
        OutputKind::Bool => "bool",
    }
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
            print!("{}", content);
        }
    }
    Ok(())
}
