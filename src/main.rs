mod ui;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use phrasegen::catalog::parse_custom_words;
use phrasegen::config::{DEFAULT_WORDS, MAX_WORDS, MIN_WORDS};
use phrasegen::{
    Capitalization, KeystreamRandom, PassphraseConfig, PassphraseEngine, RandomSource, Separator,
    ThreadRandom, WordCatalog, derive_seed,
};
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::level_filters::LevelFilter;

const MAX_COUNT: usize = 100;
const MAX_CUSTOM_FILE_BYTES: u64 = 1024 * 1024;

#[derive(Parser)]
#[command(
    name = "phrasegen",
    version,
    author,
    about = "Memorable passphrase generator with strength rating"
)]
struct Cli {
    #[arg(
        short,
        long,
        env = "PHRASEGEN_WORDS",
        default_value_t = DEFAULT_WORDS as u8,
        value_parser = clap::value_parser!(u8).range(MIN_WORDS as i64..=MAX_WORDS as i64)
    )]
    words: u8,

    /// dash, underscore, dot, space or none
    #[arg(
        short,
        long,
        env = "PHRASEGEN_SEPARATOR",
        default_value = "dash",
        value_parser = str::parse::<Separator>
    )]
    separator: Separator,

    /// none, first, all or random
    #[arg(
        short,
        long,
        env = "PHRASEGEN_CAPS",
        default_value = "none",
        value_parser = str::parse::<Capitalization>
    )]
    caps: Capitalization,

    /// Leave out the random 2-3 digit number
    #[arg(long, env = "PHRASEGEN_NO_NUMBERS")]
    no_numbers: bool,

    /// Insert one random symbol
    #[arg(short = 'y', long, env = "PHRASEGEN_SYMBOLS")]
    symbols: bool,

    /// Extra whitespace-separated words to draw from
    #[arg(long, env = "PHRASEGEN_CUSTOM", default_value = "")]
    custom: String,

    /// File of extra words, whitespace separated
    #[arg(long, value_name = "PATH")]
    custom_file: Option<PathBuf>,

    /// Number of passphrases to generate
    #[arg(short = 'n', long, default_value_t = 1)]
    count: usize,

    /// Seed phrase for reproducible output; repeat to add layers
    #[arg(long, value_name = "PHRASE")]
    seed: Vec<String>,

    /// Print passphrases only
    #[arg(short, long)]
    quiet: bool,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(level)
        .with_target(false)
        .init();
}

fn collect_custom_words(cli: &Cli) -> Result<String> {
    let mut text = cli.custom.clone();

    if let Some(path) = &cli.custom_file {
        let contents = read_custom_file(path)?;
        text.push('\n');
        text.push_str(&contents);
    }

    Ok(text)
}

fn read_custom_file(path: &Path) -> Result<String> {
    let byte_length = std::fs::metadata(path)
        .with_context(|| format!("Failed to read custom words from {}", path.display()))?
        .len();
    if byte_length > MAX_CUSTOM_FILE_BYTES {
        anyhow::bail!(
            "Custom words file too large ({} bytes, maximum is {})",
            byte_length,
            MAX_CUSTOM_FILE_BYTES
        );
    }

    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read custom words from {}", path.display()))?;
    tracing::info!(path = %path.display(), bytes = byte_length, "loaded custom words");
    Ok(contents)
}

fn run<R: RandomSource>(
    cli: &Cli,
    config: &PassphraseConfig,
    info: &ui::RunInfo,
    rng: &mut R,
) -> Result<()> {
    let options = ui::DisplayOptions {
        unicode_support: ui::detect_unicode_support(),
        color_support: ui::detect_color_support(),
        quiet: cli.quiet,
    };

    let engine = PassphraseEngine::new(WordCatalog::standard());

    let start = Instant::now();
    let results = engine.generate_batch(config, cli.count, rng);
    let elapsed = start.elapsed();

    for (index, result) in results.iter().enumerate() {
        ui::display_output(index, result, config, info, &options);
    }
    ui::display_elapsed(results.len(), elapsed, &options);

    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if cli.count == 0 || cli.count > MAX_COUNT {
        anyhow::bail!("Count must be between 1 and {} (got {})", MAX_COUNT, cli.count);
    }

    let custom_text = collect_custom_words(&cli)?;
    let custom_words = parse_custom_words(&custom_text).count();
    let skipped = custom_text.split_whitespace().count() - custom_words;
    if skipped > 0 {
        tracing::warn!(skipped, "ignoring custom words that contain control characters");
    }

    let config = PassphraseConfig::new(usize::from(cli.words))?
        .separator(cli.separator)
        .capitalization(cli.caps)
        .include_numbers(!cli.no_numbers)
        .include_symbols(cli.symbols)
        .custom_words(custom_text);

    let info = ui::RunInfo {
        base_words: WordCatalog::standard().base_len(),
        custom_words,
        seeded: !cli.seed.is_empty(),
        seed_layers: cli.seed.len(),
    };

    if cli.seed.is_empty() {
        run(&cli, &config, &info, &mut ThreadRandom)
    } else {
        let key = derive_seed(cli.seed.as_slice()).context("Failed to derive seed")?;
        let mut rng = KeystreamRandom::new(&key);
        run(&cli, &config, &info, &mut rng)
    }
}
