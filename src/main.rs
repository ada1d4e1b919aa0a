//! CLI for tweet sentiment trends
//!
//! Usage:
//! ```bash
//! cargo run -- --help
//! cargo run -- sentiment "Are you virtuous or verminous?"
//! cargo run -- centered --center TX --count 10
//! cargo run -- map my job
//! cargo run -- by-hour my job
//! cargo run -- talkative texas
//! ```

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::info;

use tweet_trends::{
    aggregation::{group_by_region, most_populated, HOURS_PER_DAY},
    utils::{setup_logging, AppConfig},
    CenterMode, DataLoader, RecordSource, RegionCenters, SentimentAggregator, SentimentLexicon,
    SentimentScorer, TweetFile,
};

const DEFAULT_SENTIMENT_TEXT: &str = "Are you virtuous or verminous?";

#[derive(Parser)]
#[command(name = "tweet_trends")]
#[command(version)]
#[command(about = "Tweet sentiment by US state and hour of day", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Configuration file (.toml or .json)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Log level, overrides the configuration file
    #[arg(short, long, global = true)]
    log_level: Option<String>,

    /// Center multi-part states on all their polygons, weighted by area
    #[arg(long, global = true)]
    weighted_centers: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the words of a text annotated with their sentiment
    Sentiment {
        /// Text to analyze
        text: Vec<String>,
    },

    /// List the states closest to a given state
    Centered {
        /// State the distances are measured from
        #[arg(long)]
        center: Option<String>,

        /// Number of states to list
        #[arg(short = 'n', long)]
        count: Option<usize>,
    },

    /// Average sentiment per state for tweets containing a term
    Map {
        /// Search term
        term: Vec<String>,
    },

    /// Average sentiment per state for each hour of the day
    ByHour {
        /// Search term
        term: Vec<String>,
    },

    /// State with the most tweets containing a term
    Talkative {
        /// Search term
        term: Vec<String>,
    },
}

/// Exit status for malformed input data (sysexits `EX_DATAERR`)
const EXIT_DATA_ERROR: i32 = 65;

fn main() {
    if let Err(err) = run(Cli::parse()) {
        eprintln!("Error: {:#}", err);
        std::process::exit(exit_code(&err));
    }
}

fn exit_code(err: &anyhow::Error) -> i32 {
    match err.downcast_ref::<tweet_trends::Error>() {
        Some(e) if e.is_input_error() => EXIT_DATA_ERROR,
        _ => 1,
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = AppConfig::resolve(cli.config.as_deref()).context("Failed to load configuration")?;
    let level = cli.log_level.as_deref().unwrap_or(config.logging.level.as_str());
    setup_logging(level)?;

    let mode = if cli.weighted_centers || config.display.weighted_centers {
        CenterMode::AreaWeighted
    } else {
        CenterMode::PrimaryPolygon
    };

    match cli.command {
        Commands::Sentiment { text } => {
            let text = if text.is_empty() {
                DEFAULT_SENTIMENT_TEXT.to_string()
            } else {
                text.join(" ")
            };
            run_sentiment(&config, &text)
        }
        Commands::Centered { center, count } => {
            let center = center.unwrap_or_else(|| config.display.center_region.clone());
            let count = count.unwrap_or(config.display.nearest_count);
            run_centered(&config, &center, count, mode)
        }
        Commands::Map { term } => run_map(&config, &search_term(&config, &term), mode),
        Commands::ByHour { term } => run_by_hour(&config, &search_term(&config, &term), mode),
        Commands::Talkative { term } => run_talkative(&config, &search_term(&config, &term), mode),
    }
}

fn search_term(config: &AppConfig, words: &[String]) -> String {
    if words.is_empty() {
        config.display.default_term.clone()
    } else {
        words.join(" ")
    }
}

fn load_lexicon(config: &AppConfig) -> Result<SentimentLexicon> {
    let path = &config.data.sentiments_path;
    DataLoader::load_lexicon(path).with_context(|| format!("Failed to load sentiments from {:?}", path))
}

fn load_centers(config: &AppConfig, mode: CenterMode) -> Result<RegionCenters> {
    let path = &config.data.states_path;
    let regions = DataLoader::load_regions(path)
        .with_context(|| format!("Failed to load states from {:?}", path))?;
    Ok(RegionCenters::from_regions(&regions, mode))
}

fn run_sentiment(config: &AppConfig, text: &str) -> Result<()> {
    let lexicon = load_lexicon(config)?;
    let scorer = SentimentScorer::new(&lexicon);

    let lowered = text.to_lowercase();
    let words = scorer.tokenizer().tokenize(&lowered);
    if words.is_empty() {
        bail!("No words extracted from {:?}", text);
    }

    let width = words.iter().map(|w| w.len()).max().unwrap_or(0);
    for (word, value) in scorer.word_sentiments(&lowered) {
        println!("{:>width$}: {:+}", word, value, width = width);
    }

    Ok(())
}

fn run_centered(config: &AppConfig, center: &str, count: usize, mode: CenterMode) -> Result<()> {
    let centers = load_centers(config, mode)?;
    let center = center.to_uppercase();

    info!("Listing {} states closest to {}", count, center);
    for (name, distance) in centers.nearest_to(&center, count)? {
        println!("{:>4}  {:>8.1} mi", name, distance);
    }

    Ok(())
}

fn run_map(config: &AppConfig, term: &str, mode: CenterMode) -> Result<()> {
    let lexicon = load_lexicon(config)?;
    let centers = load_centers(config, mode)?;
    let tweets = TweetFile::new(&config.data.tweets_path).search(term)?;
    info!("Loaded {} tweets matching {:?}", tweets.len(), term);

    let aggregator = SentimentAggregator::new(SentimentScorer::new(&lexicon), &centers);
    let sentiments = aggregator.region_sentiments(&tweets)?;

    println!("Sentiment by state for {:?}", term);
    for (name, _) in centers.iter() {
        match sentiments.get(name) {
            Some(value) => println!("{:>4}  {:+.4}", name, value),
            None => println!("{:>4}  {:>7}", name, "-"),
        }
    }

    let scored = aggregator.scored_points(&tweets);
    println!("{} of {} tweets carry sentiment", scored.len(), tweets.len());

    Ok(())
}

fn run_by_hour(config: &AppConfig, term: &str, mode: CenterMode) -> Result<()> {
    let lexicon = load_lexicon(config)?;
    let centers = load_centers(config, mode)?;
    let tweets = TweetFile::new(&config.data.tweets_path).search(term)?;
    info!("Loaded {} tweets matching {:?}", tweets.len(), term);

    let aggregator = SentimentAggregator::new(SentimentScorer::new(&lexicon), &centers);
    let hourly = aggregator.hourly_region_sentiments(&tweets)?;

    for hour in 0..HOURS_PER_DAY {
        println!("{0:02}:00-{0:02}:59", hour);
        match hourly.get(&hour) {
            Some(sentiments) => {
                for (name, value) in sentiments {
                    println!("  {:>4}  {:+.4}", name, value);
                }
            }
            None => println!("  no sentiment"),
        }
    }

    Ok(())
}

fn run_talkative(config: &AppConfig, term: &str, mode: CenterMode) -> Result<()> {
    let centers = load_centers(config, mode)?;
    let tweets = TweetFile::new(&config.data.tweets_path).search(term)?;

    let by_state = group_by_region(&tweets, &centers)?;
    match most_populated(&by_state) {
        Some((name, count)) => println!("{} ({} tweets)", name, count),
        None => println!("No tweets found for {:?}", term),
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::anyhow;

    #[test]
    fn test_exit_code() {
        let bad_data = anyhow::Error::new(tweet_trends::Error::InvalidSentimentValue(2.0))
            .context("Failed to load sentiments");
        assert_eq!(exit_code(&bad_data), EXIT_DATA_ERROR);

        let no_regions = anyhow::Error::new(tweet_trends::Error::NoRegionsAvailable);
        assert_eq!(exit_code(&no_regions), 1);

        assert_eq!(exit_code(&anyhow!("No words extracted")), 1);
    }
}
