//! docsift CLI - DOCX and PDF text extraction and keyword search

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use clap::{Parser, Subcommand};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};

use docsift::{
    detect_format_from_path, extract_document, extract_pdf_batch, find_matches, ErrorMode,
    ExtractedText, JsonFormat, KeywordSet, PageSelection, ParseOptions, PdfParser,
};

#[derive(Parser)]
#[command(name = "docsift")]
#[command(version)]
#[command(about = "Extract text from DOCX and PDF documents and search it for keywords", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Extract document text, one paragraph per line
    Text {
        /// Input DOCX or PDF file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file, overwritten if present (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },

    /// Print the lines containing any keyword, ignoring case
    #[command(alias = "grep")]
    Search {
        /// Input DOCX or PDF file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Keyword to look for (repeatable, or comma-separated)
        #[arg(
            short,
            long = "keyword",
            value_name = "KEYWORD",
            env = "DOCSIFT_KEYWORDS",
            value_delimiter = ',',
            required = true
        )]
        keywords: Vec<String>,

        /// Text printed before each matching line
        #[arg(long, default_value = "")]
        prefix: String,

        /// Show line numbers
        #[arg(short = 'n', long)]
        line_numbers: bool,

        /// Output matches as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the text of each page of one or more PDFs
    Pdf {
        /// Input PDF files
        #[arg(value_name = "FILES", required = true)]
        inputs: Vec<PathBuf>,

        /// Page range (e.g., "1-10", "1,3,5")
        #[arg(long)]
        pages: Option<String>,

        /// Fail a document on the first unreadable page
        #[arg(long)]
        strict: bool,
    },

    /// Extract document text as JSON
    Json {
        /// Input DOCX or PDF file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Output compact JSON
        #[arg(long)]
        compact: bool,
    },

    /// Show document information
    Info {
        /// Input DOCX or PDF file
        #[arg(value_name = "FILE")]
        input: PathBuf,
    },

    /// Show version information
    Version,
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Text { input, output } => cmd_text(&input, output.as_deref()),
        Commands::Search {
            input,
            keywords,
            prefix,
            line_numbers,
            json,
        } => cmd_search(&input, keywords, &prefix, line_numbers, json),
        Commands::Pdf {
            inputs,
            pages,
            strict,
        } => cmd_pdf(&inputs, pages.as_deref(), strict),
        Commands::Json {
            input,
            output,
            compact,
        } => cmd_json(&input, output.as_deref(), compact),
        Commands::Info { input } => cmd_info(&input),
        Commands::Version => {
            cmd_version();
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn load(input: &Path) -> Result<ExtractedText, Box<dyn std::error::Error>> {
    let text = extract_document(input, &ParseOptions::new().lenient())?;
    log::debug!("{}: {} lines", input.display(), text.len());
    Ok(text)
}

fn cmd_text(input: &Path, output: Option<&Path>) -> Result<(), Box<dyn std::error::Error>> {
    let text = load(input)?;

    if let Some(path) = output {
        docsift::write_text(path, &text)?;
        println!("{} {}", "Saved to".green(), path.display());
    } else {
        println!("{}", docsift::to_text(&text));
    }

    Ok(())
}

fn cmd_search(
    input: &Path,
    keywords: Vec<String>,
    prefix: &str,
    line_numbers: bool,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    // Empty keywords from stray commas would select every line.
    let keywords: KeywordSet = keywords.into_iter().filter(|k| !k.is_empty()).collect();
    if keywords.is_empty() {
        return Err("no non-empty keywords given".into());
    }

    let text = load(input)?;
    let matches = find_matches(text.lines(), &keywords);

    if json {
        let report = serde_json::json!({
            "file": input.display().to_string(),
            "matches": matches,
        });
        println!("{}", docsift::to_json(&report, JsonFormat::Pretty)?);
        return Ok(());
    }

    for m in &matches {
        if line_numbers {
            println!(
                "{}{}{} {}",
                prefix,
                m.line_number.to_string().green(),
                ":".dimmed(),
                m.line
            );
        } else {
            println!("{}{}", prefix, m.line);
        }
    }

    if matches.is_empty() {
        eprintln!("{}", "No matching lines".yellow());
    }

    Ok(())
}

fn cmd_pdf(
    inputs: &[PathBuf],
    pages: Option<&str>,
    strict: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let page_selection = if let Some(p) = pages {
        PageSelection::parse(p)?
    } else {
        PageSelection::All
    };

    let mode = if strict {
        ErrorMode::Strict
    } else {
        ErrorMode::Lenient
    };
    let options = ParseOptions::new()
        .with_error_mode(mode)
        .with_pages(page_selection);

    let pb = if inputs.len() > 1 {
        let pb = ProgressBar::new_spinner();
        pb.set_style(ProgressStyle::default_spinner().template("{spinner:.green} {msg}")?);
        pb.set_message(format!("Reading {} documents...", inputs.len()));
        pb.enable_steady_tick(Duration::from_millis(100));
        Some(pb)
    } else {
        None
    };

    let reports = extract_pdf_batch(inputs, &options);

    if let Some(pb) = pb {
        pb.finish_and_clear();
    }

    let mut failed = 0;
    for report in &reports {
        println!(
            "{}",
            format!("--- Text from {} ---", report.path.display()).cyan()
        );
        match &report.outcome {
            Ok(pages) => {
                for page in pages {
                    println!("{}", page.text);
                }
            }
            Err(e) => {
                failed += 1;
                println!(
                    "{} {}: {}",
                    "Error reading".red(),
                    report.path.display(),
                    e
                );
            }
        }
    }

    if failed > 0 {
        return Err(format!("{} of {} documents failed", failed, reports.len()).into());
    }

    Ok(())
}

fn cmd_json(
    input: &Path,
    output: Option<&Path>,
    compact: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let text = load(input)?;

    let format = if compact {
        JsonFormat::Compact
    } else {
        JsonFormat::Pretty
    };

    let json = docsift::to_json(&text, format)?;

    if let Some(path) = output {
        fs::write(path, &json)?;
        println!("{} {}", "Saved to".green(), path.display());
    } else {
        println!("{}", json);
    }

    Ok(())
}

fn cmd_info(input: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let format = detect_format_from_path(input)?;

    println!("{}", "Document Information".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());

    println!("{}: {}", "File".bold(), input.display());
    println!("{}: {}", "Format".bold(), format);

    if format.is_pdf() {
        let parser = PdfParser::open(input)?;
        println!("{}: {}", "Pages".bold(), parser.page_count());
    }

    let text = load(input)?;

    println!();
    println!("{}", "Content Statistics".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());

    let label = if format.is_pdf() { "Lines" } else { "Paragraphs" };
    println!("{}: {}", label.bold(), text.len());
    println!("{}: {}", "Words".bold(), text.word_count());
    println!("{}: {}", "Characters".bold(), text.char_count());

    Ok(())
}

fn cmd_version() {
    println!("{} {}", "docsift".cyan().bold(), env!("CARGO_PKG_VERSION"));
    println!("DOCX and PDF text extraction and keyword search tool");
    println!();
    println!("License: MIT");
}
