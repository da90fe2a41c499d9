//! scripd CLI - Main entry point
//!
//! Reads a JSON structure document and prints the SQL script it describes.

mod logging;

use anyhow::Context;
use clap::Parser;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use scripd_core::ScripdConfig;
use scripd_structure::{JsonDbStructure, StructureDocument};

/// Input path that reads the structure document from stdin
const STDIN_PATH: &str = "-";

/// scripd - generate SQL scripts from JSON structure documents
#[derive(Parser, Debug)]
#[command(name = "scripd")]
#[command(author, version, about = "Generate SQL scripts from JSON structure documents", long_about = None)]
struct Cli {
    /// Structure document to read (`-` for stdin)
    #[arg(value_name = "INPUT")]
    input: PathBuf,

    /// Vendor variant to select from each template (e.g. mysql, sqlite)
    #[arg(long, env = "SCRIPD_VENDOR")]
    vendor: Option<String>,

    /// Directory of template documents (default: built-in templates)
    #[arg(short, long, value_name = "DIR", env = "SCRIPD_TEMPLATES")]
    templates: Option<PathBuf>,

    /// Extension of template documents inside the template directory
    #[arg(long, value_name = "EXT")]
    extension: Option<String>,

    /// Delimiter between statements; `\n` and `\t` escapes are understood
    #[arg(short, long)]
    delimiter: Option<String>,

    /// Path to config file (default: <config dir>/scripd/scripd.toml)
    #[arg(short, long, value_name = "PATH", env = "SCRIPD_CONFIG")]
    config: Option<PathBuf>,

    /// Treat an input that is not a JSON object as an empty document
    #[arg(long)]
    lenient: bool,

    /// Write the script to a file instead of stdout
    #[arg(short, long, value_name = "PATH")]
    output: Option<PathBuf>,

    /// Increase log verbosity (repeatable)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    /// Config file settings with command line overrides applied on top
    fn resolve_config(&self) -> anyhow::Result<ScripdConfig> {
        let mut config = match &self.config {
            Some(path) => ScripdConfig::load(path)
                .with_context(|| format!("failed to load config {}", path.display()))?,
            None => ScripdConfig::load_or_default().context("failed to load user config")?,
        };

        if let Some(vendor) = &self.vendor {
            config = config.with_vendor(vendor.as_str());
        }
        if let Some(dir) = &self.templates {
            config = config.with_template_dir(dir);
        }
        if let Some(extension) = &self.extension {
            config.template_extension = extension.trim_start_matches('.').to_string();
        }
        if let Some(delimiter) = &self.delimiter {
            config = config.with_delimiter(unescape(delimiter));
        }

        Ok(config)
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(e) = logging::init(logging::LoggingConfig::from_verbosity(cli.verbose)) {
        eprintln!("warning: {e}");
    }

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let config = cli.resolve_config()?;
    let document = read_document(&cli.input, cli.lenient)?;
    let script = generate(document, &cli.input, &config)?;

    match &cli.output {
        Some(path) => {
            std::fs::write(path, with_trailing_newline(script))
                .with_context(|| format!("failed to write {}", path.display()))?;
            tracing::info!(path = %path.display(), "wrote script");
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(with_trailing_newline(script).as_bytes())?;
            stdout.flush()?;
        }
    }

    Ok(())
}

fn generate(
    document: StructureDocument,
    input: &Path,
    config: &ScripdConfig,
) -> anyhow::Result<String> {
    let mut structure = JsonDbStructure::from_config(document, config);
    if structure.document().is_empty() {
        tracing::warn!(input = %input.display(), "structure document is empty");
    }
    structure
        .parse_structure()
        .with_context(|| format!("failed to generate SQL from {}", input.display()))?;

    tracing::info!(
        vendor = %config.vendor,
        statement_count = structure.generated().len(),
        "generated script"
    );
    Ok(structure.generated_sql(&config.delimiter))
}

fn read_document(input: &Path, lenient: bool) -> anyhow::Result<StructureDocument> {
    let source = if input.as_os_str() == STDIN_PATH {
        std::io::read_to_string(std::io::stdin()).context("failed to read stdin")?
    } else {
        std::fs::read_to_string(input)
            .with_context(|| format!("failed to read structure document {}", input.display()))?
    };

    if lenient {
        return Ok(StructureDocument::decode_lenient(&source));
    }
    StructureDocument::from_json_str(&source)
        .with_context(|| format!("failed to decode structure document {}", input.display()))
}

fn with_trailing_newline(mut script: String) -> String {
    if !script.is_empty() && !script.ends_with('\n') {
        script.push('\n');
    }
    script
}

/// Expands the backslash escapes a shell passes through literally
fn unescape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut chars = raw.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('n') => out.push('\n'),
            Some('t') => out.push('\t'),
            Some('r') => out.push('\r'),
            Some('\\') => out.push('\\'),
            Some(other) => {
                out.push('\\');
                out.push(other);
            }
            None => out.push('\\'),
        }
    }
    out
}
