// Removes words with no valid clue combination from a word pool.
// Run with: cargo run --bin clean_words -- --words data/all_words.json
use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::error::Error;
use std::path::PathBuf;
use synonym_core::cleaning::PoolCleaner;
use synonym_core::persistence::{load_corpus, save_snapshot};
use synonym_core::{CombinationGenerator, GameConfig, WordPool};

#[derive(Parser, Debug)]
#[command(name = "clean_words", about = "Drop unplayable words from a word pool")]
struct Args {
    /// TOML config file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Word pool to clean (defaults to the config's words_path)
    #[arg(long)]
    words: Option<PathBuf>,

    /// Synset corpus, JSON or .bin snapshot (defaults to the config's synsets_path)
    #[arg(long)]
    synsets: Option<PathBuf>,

    /// Open Multilingual Wordnet `.tab` files to merge into the corpus (repeatable)
    #[arg(long)]
    omw: Vec<PathBuf>,

    /// Language for OMW lines whose relation carries no language prefix
    #[arg(long, default_value = "eng")]
    omw_lang: String,

    /// Where to write the cleaned pool
    #[arg(long, default_value = "data/new_words.json")]
    output: PathBuf,

    /// Also write a binary snapshot of the corpus, OMW merges included, here
    #[arg(long)]
    snapshot: Option<PathBuf>,

    /// Seed for synset sampling, for reproducible output
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let config = GameConfig::load_or_default(args.config.as_deref())?;
    let words_path = args.words.unwrap_or_else(|| config.words_path.clone());
    let synsets_path = args.synsets.unwrap_or_else(|| config.synsets_path.clone());

    let pool = WordPool::load(&words_path)?;
    let mut store = load_corpus(&synsets_path)?;
    for tab in &args.omw {
        store.merge_omw_file(tab, &args.omw_lang)?;
    }
    if let Some(snapshot) = &args.snapshot {
        save_snapshot(&store, snapshot)?;
    }

    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let cleaner = PoolCleaner::new(&store, CombinationGenerator::from_config(&config));
    let (cleaned, report) = cleaner.clean(&pool, &mut rng)?;
    cleaned.save(&args.output)?;

    println!(
        "Kept {} words, removed {}. Cleaned pool written to '{}'",
        report.kept,
        report.removed.len(),
        args.output.display()
    );
    Ok(())
}
