use std::io::Read;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use substring_cover::{
    find_minimum_cover_with, format_solution, format_stats, load_word_list, read_word_list,
    verify_cover, MaskWidth, Result, SearchConfig,
};

#[derive(Parser)]
#[command(
    name = "substring_cover",
    about = "Shortest sequence of dictionary words containing every search key",
    version
)]
struct Cli {
    /// Search keys that must each appear in the concatenated words
    #[arg(required = true)]
    keys: Vec<String>,

    /// Word list, one word per line (reads stdin when omitted)
    #[arg(long, short = 'w')]
    words: Option<PathBuf>,

    /// Bitmask width bounding the number of keys (32 or 64)
    #[arg(long, default_value_t = 64, value_parser = parse_width)]
    mask_width: u32,

    /// Scan every candidate instead of stopping at the bound
    #[arg(long)]
    no_prune: bool,

    /// Start the search unbounded instead of from the greedy cover
    #[arg(long)]
    no_greedy: bool,

    /// Print the solution as JSON
    #[arg(long)]
    json: bool,

    /// Enable verbose output
    #[arg(long, short = 'v', conflicts_with = "quiet")]
    verbose: bool,

    /// Suppress logs
    #[arg(long, short = 'q', conflicts_with = "verbose")]
    quiet: bool,
}

fn parse_width(arg: &str) -> std::result::Result<u32, String> {
    let bits: u32 = arg.parse().map_err(|e| format!("{e}"))?;
    match MaskWidth::from_bits(bits) {
        Some(_) => Ok(bits),
        None => Err("mask width must be 32 or 64".to_string()),
    }
}

fn init_tracing(cli: &Cli) {
    let filter = if cli.quiet {
        tracing_subscriber::EnvFilter::new("off")
    } else if cli.verbose {
        tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into())
    } else {
        tracing_subscriber::EnvFilter::new("off")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: &Cli) -> Result<()> {
    let vocabulary = match &cli.words {
        Some(path) => load_word_list(path)?,
        None => {
            let mut text = String::new();
            std::io::stdin().read_to_string(&mut text)?;
            read_word_list(text.as_bytes())?
        }
    };
    let keys: Vec<String> = cli.keys.iter().map(|k| k.to_lowercase()).collect();

    let config = SearchConfig {
        mask_width: MaskWidth::from_bits(cli.mask_width).unwrap_or_default(),
        prune: !cli.no_prune,
        seed_with_greedy: !cli.no_greedy,
    };
    let solution = find_minimum_cover_with(&keys, &vocabulary, &config)?;
    debug_assert!(verify_cover(&solution.terms, &keys));

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&solution)?);
    } else {
        print!("{}", format_solution(&solution));
        if cli.verbose {
            println!("{}", format_stats(&solution));
        }
    }
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(&cli);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
