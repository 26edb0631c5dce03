use clap::{Parser, Subcommand};
use std::fs;
use std::io::Write;
use std::process;

use lesson_io::document_json::{document_from_blocks, to_minified_json, to_pretty_json};
use lesson_io::prelude::*;
use tabwriter::TabWriter;
use tracing_subscriber::EnvFilter;

mod render;
mod table;

#[derive(Debug, Parser)]
#[command(name = "lesson", version, about = "Lesson content builder CLI")]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print a new lesson document holding freshly created blocks.
    New {
        /// Block kind to append, by tag or label (repeatable)
        #[arg(long = "kind", value_parser = parse_kind)]
        kinds: Vec<BlockKind>,
        /// Output minified canonical JSON
        #[arg(long)]
        min: bool,
    },
    /// List the kinds offered by the "add block" palette.
    Palette,
    /// Show one row per block.
    Inspect {
        /// Lesson document JSON path
        document: String,
        /// Only blocks of this kind (tag or label)
        #[arg(long, value_parser = parse_kind)]
        kind: Option<BlockKind>,
        /// Only the block with this exact id
        #[arg(long)]
        id: Option<String>,
        /// Only blocks whose title or content contains this text
        #[arg(long)]
        grep: Option<String>,
    },
    /// Render the builder view as indented text.
    Render {
        /// Lesson document JSON path
        document: String,
    },
    /// Run authoring checks; exits 2 when anything is reported.
    Check {
        /// Lesson document JSON path
        document: String,
    },
    /// Run a builder script against a document and print the result.
    Apply {
        /// Lesson document JSON path
        document: String,
        /// Script JSON path ({ "v": 1, "ops": [...] })
        script: String,
        /// Fail on operations aimed at unknown block ids
        #[arg(long)]
        strict: bool,
        /// Output minified canonical JSON
        #[arg(long)]
        min: bool,
        /// Print session telemetry JSON to stderr
        #[arg(long)]
        telemetry: bool,
    },
    /// Print the content fingerprint of a document.
    Fingerprint {
        /// Lesson document JSON path
        document: String,
    },
}

fn parse_kind(s: &str) -> Result<BlockKind, String> {
    lesson_io::palette::lookup(s).ok_or_else(|| {
        format!("unknown block kind '{s}' (expected one of: text, video, code, quiz, puzzle)")
    })
}

/// Read and parse a document, or exit 1 with a single message on stderr.
fn load_document(path: &str) -> LessonDocument {
    let s = match fs::read_to_string(path) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("{path}: {e}");
            process::exit(1);
        }
    };
    match lesson_io::document_json::parse_document_json_str(&s) {
        Ok(doc) => {
            tracing::debug!(path, blocks = doc.blocks.len(), fingerprint = %doc.fingerprint, "loaded document");
            doc
        }
        Err(e) => {
            eprintln!("{e}");
            process::exit(1);
        }
    }
}

fn load_script(path: &str) -> ScriptV1 {
    let s = match fs::read_to_string(path) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("{path}: {e}");
            process::exit(1);
        }
    };
    match serde_json::from_str(&s) {
        Ok(script) => script,
        Err(e) => {
            eprintln!("Invalid script JSON: {e}");
            process::exit(1);
        }
    }
}

fn print_document(doc: &LessonDocument, min: bool) -> anyhow::Result<()> {
    let out = if min {
        to_minified_json(doc)?
    } else {
        to_pretty_json(doc)?
    };
    println!("{out}");
    Ok(())
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();

    let cli = Cli::parse();

    match cli.cmd {
        Command::New { kinds, min } => {
            let mut builder = Builder::new(BlockList::new());
            for kind in kinds {
                builder.add(kind);
            }
            print_document(&document_from_blocks(builder.into_blocks()), min)?;
        }
        Command::Palette => {
            let mut tw = TabWriter::new(std::io::stdout());
            writeln!(tw, "kind\tlabel\tcategory\tdescription")?;
            for entry in lesson_io::palette::palette() {
                writeln!(
                    tw,
                    "{}\t{}\t{}\t{}",
                    entry.kind, entry.label, entry.category, entry.description
                )?;
            }
            tw.flush()?;
        }
        Command::Inspect {
            document,
            kind,
            id,
            grep,
        } => {
            let doc = load_document(&document);
            let filter = table::RowFilter { kind, id, grep };
            print!("{}", table::inspect(&doc.blocks, &filter));
        }
        Command::Render { document } => {
            let doc = load_document(&document);
            print!("{}", render::render_view(&Builder::new(doc.blocks).view()));
        }
        Command::Check { document } => {
            let doc = load_document(&document);
            let diagnostics = check(&doc.blocks);
            if diagnostics.is_empty() {
                println!("OK");
            } else {
                for d in &diagnostics {
                    println!("{d}");
                }
                process::exit(2);
            }
        }
        Command::Apply {
            document,
            script,
            strict,
            min,
            telemetry,
        } => {
            let doc = load_document(&document);
            let script = load_script(&script);

            let options = BuilderOptions {
                strict_targets: strict,
                ..BuilderOptions::default()
            };
            let mut builder = Builder::with_options(doc.blocks, options);
            let result = apply_script(&mut builder, &script);

            if telemetry {
                eprintln!("{}", serde_json::to_string(builder.telemetry())?);
            }
            if let Err(e) = result {
                // Exact error string, stable for CI / integrations.
                eprintln!("{e}");
                process::exit(2);
            }

            print_document(&document_from_blocks(builder.into_blocks()), min)?;
        }
        Command::Fingerprint { document } => {
            let doc = load_document(&document);
            println!("{}", doc.fingerprint);
        }
    }

    Ok(())
}
