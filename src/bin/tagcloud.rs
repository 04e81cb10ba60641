use std::io::{self, BufRead};
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum};
use env_logger::Env;
use log::info;
use serde_json::json;
use tagcloud::cloud::source_name;
use tagcloud::config::{CloudConfig, CloudConfigBuilder};
use tagcloud::{render, CloudGenerator, FrequencyMap, Ranking, Vocabulary};

const INPUT_PROMPT: &str = "Input File: ";
const OUTPUT_PROMPT: &str = "Output File: ";
const COUNT_PROMPT: &str = "Number of words in cloud tag: ";

#[derive(Parser, Debug)]
#[command(author, version, about = "Word-frequency tag cloud generator", long_about = None)]
struct Cli {
    /// Increase verbosity (-v, -vv)
    #[arg(short = 'v', long, global = true, action = ArgAction::Count)]
    verbose: u8,

    /// Decrease verbosity (-q, -qq)
    #[arg(short = 'q', long, global = true, action = ArgAction::Count)]
    quiet: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Build a tag cloud of the most frequent words in a text file
    Generate(GenerateArgs),
    /// Print word counts of a text file, most frequent first
    Count(CountArgs),
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    /// Standalone HTML document
    Html,
    /// JSON list of words with counts and font sizes
    Json,
}

#[derive(Args, Debug)]
struct GenerateArgs {
    /// Text file to read (prompted for when omitted)
    input: Option<PathBuf>,

    /// Output path (prompted for when omitted)
    #[arg(short, long, value_name = "PATH")]
    output: Option<PathBuf>,

    /// Number of words in the cloud (prompted for when omitted)
    #[arg(
        short = 'n',
        long = "words",
        value_name = "COUNT",
        allow_negative_numbers = true
    )]
    words: Option<i64>,

    /// JSON configuration file; flags below override its values
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Stylesheet URL linked from the document
    #[arg(long, value_name = "URL", conflicts_with = "no_stylesheet")]
    stylesheet: Option<String>,

    /// Omit the stylesheet link
    #[arg(long)]
    no_stylesheet: bool,

    /// Embed a <style> block defining every font size class
    #[arg(long)]
    inline_styles: bool,

    /// Emit words verbatim without HTML escaping
    #[arg(long)]
    no_escape: bool,

    /// Smallest font size
    #[arg(long, value_name = "SIZE")]
    min_font: Option<u32>,

    /// Largest font size
    #[arg(long, value_name = "SIZE")]
    max_font: Option<u32>,

    /// Fail when the input has fewer distinct words than requested
    #[arg(long)]
    strict: bool,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Html)]
    format: OutputFormat,

    /// Emit pretty JSON (with --format json)
    #[arg(long)]
    pretty: bool,
}

#[derive(Args, Debug)]
struct CountArgs {
    /// Text file to read
    input: PathBuf,

    /// Only list the N most frequent words
    #[arg(long, value_name = "N")]
    top: Option<usize>,

    /// Emit JSON instead of a table
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.quiet);

    match cli.command {
        Commands::Generate(args) => run_generate(args),
        Commands::Count(args) => run_count(args),
    }
}

fn init_logging(verbose: u8, quiet: u8) {
    use log::LevelFilter;

    // without -v/-q the RUST_LOG filter (or "info") stays in charge
    let level = match (quiet, verbose) {
        (0, 0) => None,
        (0, 1) => Some(LevelFilter::Debug),
        (0, _) => Some(LevelFilter::Trace),
        (1, _) => Some(LevelFilter::Warn),
        _ => Some(LevelFilter::Error),
    };

    let mut builder = env_logger::Builder::from_env(Env::default().default_filter_or("info"));
    builder.format_timestamp_millis();
    if let Some(level) = level {
        builder.filter_level(level);
    }
    let _ = builder.try_init();
}

fn prompt<R: BufRead>(label: &str, input: &mut R) -> Result<String> {
    eprintln!("{label}");
    let mut line = String::new();
    let read = input
        .read_line(&mut line)
        .context("failed to read from standard input")?;
    let value = line.trim();
    if read == 0 || value.is_empty() {
        bail!("no value given for '{}'", label.trim_end_matches([':', ' ']));
    }
    Ok(value.to_owned())
}

fn parse_word_count(raw: &str) -> Result<i64> {
    raw.trim()
        .parse::<i64>()
        .with_context(|| format!("number of words must be an integer, got '{raw}'"))
}

fn build_config(args: &GenerateArgs) -> Result<CloudConfig> {
    let base = match &args.config {
        Some(path) => CloudConfig::from_json_file(path)
            .with_context(|| format!("failed to load configuration {}", path.display()))?,
        None => CloudConfig::default(),
    };
    let mut cfg = CloudConfigBuilder::from_config(base);
    if let Some(min) = args.min_font {
        cfg = cfg.min_font_size(min);
    }
    if let Some(max) = args.max_font {
        cfg = cfg.max_font_size(max);
    }
    if args.no_stylesheet {
        cfg = cfg.stylesheet(None);
    } else if let Some(href) = &args.stylesheet {
        cfg = cfg.stylesheet(Some(href.clone()));
    }
    if args.inline_styles {
        cfg = cfg.inline_styles(true);
    }
    if args.no_escape {
        cfg = cfg.escape_words(false);
    }
    if args.strict {
        cfg = cfg.strict_vocabulary(true);
    }
    cfg.build().context("invalid tag cloud configuration")
}

fn run_generate(args: GenerateArgs) -> Result<()> {
    let mut stdin = io::stdin().lock();
    let input = match &args.input {
        Some(path) => path.clone(),
        None => PathBuf::from(prompt(INPUT_PROMPT, &mut stdin)?),
    };
    let frequencies = FrequencyMap::from_path(&input)
        .with_context(|| format!("failed to read {}", input.display()))?;
    let output = match &args.output {
        Some(path) => path.clone(),
        None => PathBuf::from(prompt(OUTPUT_PROMPT, &mut stdin)?),
    };
    let words = match args.words {
        Some(words) => words,
        None => parse_word_count(&prompt(COUNT_PROMPT, &mut stdin)?)?,
    };
    drop(stdin);

    let generator = CloudGenerator::new(build_config(&args)?);
    let artifacts = generator
        .generate_from_frequencies(frequencies, &source_name(&input), words)
        .with_context(|| format!("failed to build tag cloud from {}", input.display()))?;

    let written = match args.format {
        OutputFormat::Html => render::save_html(&artifacts.cloud, generator.config(), &output),
        OutputFormat::Json => render::save_json(&artifacts.cloud, &output, args.pretty),
    };
    written.with_context(|| format!("failed to write {}", output.display()))?;

    let stats = &artifacts.stats;
    info!(
        "generation complete: words={} distinct={} duration={:.2?}",
        stats.selected, stats.distinct_words, stats.elapsed
    );
    println!(
        "✅ wrote tag cloud of {} words to {}",
        stats.selected,
        output.display()
    );
    println!(
        "   {} words read | {} distinct | coverage {:.1}%",
        stats.total_words,
        stats.distinct_words,
        stats.coverage() * 100.0
    );
    if let Vocabulary::Insufficient {
        requested,
        available,
    } = stats.vocabulary
    {
        println!("   ⚠ requested {requested} words but only {available} were available");
    }
    Ok(())
}

fn run_count(args: CountArgs) -> Result<()> {
    let frequencies = FrequencyMap::from_path(&args.input)
        .with_context(|| format!("failed to read {}", args.input.display()))?;
    let total_words = frequencies.total_words();
    let distinct_words = frequencies.len();
    let ranking = Ranking::from_frequencies(frequencies);
    let limit = args.top.unwrap_or(ranking.len());
    let entries = ranking.iter().take(limit).collect::<Vec<_>>();

    if args.json {
        let summary = json!({
            "path": args.input.display().to_string(),
            "total_words": total_words,
            "distinct_words": distinct_words,
            "words": entries,
        });
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        println!("Total words   : {total_words}");
        println!("Distinct words: {distinct_words}");
        for entry in entries {
            println!("{:>8}  {}", entry.count, entry.word);
        }
    }

    Ok(())
}
