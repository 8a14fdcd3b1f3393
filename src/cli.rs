//! CLI module - Command-line interface definitions and the analysis pipeline

use anyhow::{Context, Result};
use clap::Parser;
use std::io::Write;
use std::num::NonZeroUsize;
use std::path::PathBuf;

use crate::core::counter::WordCounter;
use crate::core::error::WordStatsError;
use crate::core::file_reader::read_input;
use crate::core::range::parse_range_spec;
use crate::core::tally::{tally_lengths, ProgressSink};
use crate::core::tokenizer::tokenize;
use crate::render::{detect_terminal_size, render_report, GraphMode, OutputFormat, RenderConfig};

/// wordstats - count word occurrences by length ranges in a text file.
#[derive(Parser, Debug)]
#[command(name = "wordstats")]
#[command(
    author,
    version,
    about,
    long_about = r#"wordstats counts words in a text file by character length, buckets the
counts into length ranges, and renders the distribution as a table and
optionally an ASCII bar chart.

Ranges may overlap; a word length matching several ranges is credited to the
first one listed. Words matching no range are reported under "Other" when
--other is given.

Examples:
    wordstats --input text.txt --ranges 2-3,4-5,6-8
    wordstats --input dictionary.dic --ranges auto --delim ' ' --progress
    wordstats --input book.txt --ranges auto --graph v --color --other
    wordstats --input book.txt --ranges auto --format json > buckets.json
"#
)]
pub struct Cli {
    /// Input text file to analyze.
    #[arg(short, long, value_name = "FILE")]
    pub input: PathBuf,

    /// Length ranges, or 'auto' to derive them from the data.
    #[arg(
        short,
        long,
        value_name = "RANGES",
        long_help = "Length ranges in the form a-b[,c[,d-e...]], or the literal 'auto'.\n\n\
Single integers are singleton ranges (4 means 4-4). With 'auto', one bucket\n\
per word length from 1 to the maximum observed length is created; if the\n\
maximum exceeds 1000, only the lengths actually observed get buckets."
    )]
    pub ranges: String,

    /// Write the rendered output to a file as well as stdout.
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Word delimiter character (default: word-boundary detection).
    #[arg(
        long,
        value_name = "CHAR",
        long_help = "Single character separating words. ' ' treats any whitespace run as a\n\
separator (useful for dictionary files). Any other character splits on that\n\
character; newlines always act as implicit delimiters so a multi-line file\n\
is never counted as one word."
    )]
    pub delim: Option<String>,

    /// Append a text bar chart: h=horizontal, v=vertical.
    #[arg(long, value_name = "MODE")]
    pub graph: Option<String>,

    /// Hand the bucketed counts to a graphical chart backend (requires --graph).
    #[arg(
        long,
        long_help = "Request a graphical chart of the bucketed counts. Requires --graph.\n\n\
No graphical backend is compiled into this build; the flag degrades to a\n\
warning while the text output is still produced. Use --format json to feed\n\
an external charting tool."
    )]
    pub gui: bool,

    /// Color table rows and bars by rank (red = highest count).
    #[arg(long)]
    pub color: bool,

    /// Include the "Other" bucket for words matching no range.
    #[arg(long)]
    pub other: bool,

    /// Number of threads for the length tally.
    #[arg(short = 't', long, default_value = "1", value_name = "N")]
    pub threads: usize,

    /// Show progress percentage on stderr while tallying.
    #[arg(long)]
    pub progress: bool,

    /// Output format (text/json).
    #[arg(
        long,
        default_value = "text",
        value_name = "FORMAT",
        long_help = "Select the output format.\n\n\
Supported values:\n\
- text (default): rendered table plus optional chart\n\
- json: machine-readable bucket report for external chart renderers"
    )]
    pub format: String,

    /// Quiet mode (suppress warnings).
    #[arg(short, long)]
    pub quiet: bool,

    /// Verbose mode (more diagnostics on stderr).
    #[arg(short, long)]
    pub verbose: bool,
}

/// Validate `--delim`: absent, or exactly one character.
fn parse_delimiter(delim: Option<&str>) -> Result<Option<char>, WordStatsError> {
    match delim {
        None => Ok(None),
        Some(s) => {
            let mut chars = s.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) => Ok(Some(c)),
                _ => Err(WordStatsError::InvalidDelimiter {
                    value: s.to_string(),
                }),
            }
        }
    }
}

fn parse_graph_mode(graph: Option<&str>) -> Result<Option<GraphMode>, WordStatsError> {
    match graph {
        None => Ok(None),
        Some(s) => s
            .parse::<GraphMode>()
            .map(Some)
            .map_err(|_| WordStatsError::InvalidGraphMode {
                value: s.to_string(),
            }),
    }
}

/// Run the CLI with parsed arguments
pub fn run(cli: Cli) -> Result<()> {
    // All configuration errors surface before any processing begins.
    let format: OutputFormat =
        cli.format
            .parse()
            .map_err(|_| WordStatsError::InvalidOutputFormat {
                value: cli.format.clone(),
            })?;
    let graph = parse_graph_mode(cli.graph.as_deref())?;
    let delimiter = parse_delimiter(cli.delim.as_deref())?;
    let threads = NonZeroUsize::new(cli.threads).ok_or(WordStatsError::InvalidThreadCount)?;
    let ranges = parse_range_spec(&cli.ranges)?;

    if cli.gui && graph.is_none() {
        return Err(WordStatsError::GuiRequiresGraph.into());
    }

    let input = read_input(&cli.input)
        .with_context(|| format!("failed to read input file '{}'", cli.input.display()))?;
    if input.lossy && !cli.quiet {
        eprintln!("Warning: input contained invalid UTF-8; offending bytes were replaced");
    }

    let words = tokenize(&input.content, delimiter);
    if cli.verbose {
        eprintln!(
            "Tokenized {} words from '{}' ({} threads)",
            words.len(),
            cli.input.display(),
            threads
        );
    }

    let sink = |pct: f64| {
        if pct >= 100.0 {
            eprintln!("Progress: 100.0%");
        } else {
            eprint!("Progress: {:.1}%\r", pct);
            let _ = std::io::stderr().flush();
        }
    };
    let progress: Option<ProgressSink> = if cli.progress { Some(&sink) } else { None };

    let tally = tally_lengths(&words, threads, progress)?;
    let counter = WordCounter::from_tally(&tally, ranges);

    // Color capability is resolved once here and injected into the renderer.
    // The override keeps ANSI output on even when stdout is not a tty,
    // matching the explicit --color request.
    let color_capable = if cli.color {
        colored::control::set_override(true);
        true
    } else {
        false
    };

    let render_config = RenderConfig {
        use_color: cli.color,
        color_capable,
        show_other: cli.other,
        graph,
        term_size: detect_terminal_size(),
    };

    let output = match format {
        OutputFormat::Text => render_report(&counter, &render_config),
        OutputFormat::Json => serde_json::to_string_pretty(&counter.report(cli.other))
            .context("failed to serialize bucket report")?,
    };

    println!("{}", output);

    if let Some(path) = &cli.output {
        std::fs::write(path, &output)
            .with_context(|| format!("failed to write output file '{}'", path.display()))?;
    }

    if cli.gui && !cli.quiet {
        eprintln!(
            "Warning: no graphical chart backend is available in this build; \
             skipping GUI chart (use --format json with an external charting tool)"
        );
    }

    Ok(())
}
