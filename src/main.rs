use std::path::PathBuf;
use std::time::Duration;

use chrono::Local;
use clap::{Args, Parser, Subcommand};
use tracing::info;

use job_board_scrape::classifier::{self, ClassifierConfig, ClassifyError, EarlyCareerClassifier};
use job_board_scrape::extractor::{Extractor, DEFAULT_CANDIDATE_LIMIT};
use job_board_scrape::fetcher::{Fetcher, FetcherConfig, DEFAULT_JOBS_URL, DEFAULT_REFERER};
use job_board_scrape::{export, logging, report};

/// Scrape a job board for postings and optionally flag early-career roles.
#[derive(Parser)]
#[command(name = "job-board-scrape", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,

    #[command(flatten)]
    scrape: ScrapeArgs,

    #[command(flatten)]
    llm: LlmArgs,

    /// Log at debug level (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Command {
    /// Fetch the job board and print every listing (the default)
    Scrape(ScrapeArgs),

    /// Ask the model whether each title is an early-career role
    Classify {
        #[arg(required = true)]
        titles: Vec<String>,
    },
}

#[derive(Args)]
struct ScrapeArgs {
    /// Job search page to fetch
    #[arg(long, default_value = DEFAULT_JOBS_URL)]
    url: String,

    /// Referer header sent with the request
    #[arg(long, default_value = DEFAULT_REFERER)]
    referer: String,

    /// How many candidate elements to inspect (0 = all)
    #[arg(long, default_value_t = DEFAULT_CANDIDATE_LIMIT)]
    max_candidates: usize,

    /// Request timeout; unbounded when omitted
    #[arg(long)]
    timeout_secs: Option<u64>,

    /// Classify every extracted title
    #[arg(long)]
    classify: bool,

    /// Also write the listings to this CSV file
    #[arg(long)]
    csv: Option<PathBuf>,
}

#[derive(Args)]
struct LlmArgs {
    #[arg(long, env = "OPENAI_API_KEY", hide_env_values = true, global = true)]
    api_key: Option<String>,

    #[arg(long, env = "OPENAI_MODEL", default_value = classifier::DEFAULT_MODEL, global = true)]
    model: String,

    #[arg(long, env = "OPENAI_API_BASE", default_value = classifier::DEFAULT_API_BASE, global = true)]
    api_base: String,
}

impl LlmArgs {
    fn classifier_config(&self) -> Result<ClassifierConfig, ClassifyError> {
        let api_key = self.api_key.clone().ok_or(ClassifyError::MissingApiKey)?;
        Ok(ClassifierConfig::new(api_key)
            .with_model(&self.model)
            .with_base_url(&self.api_base))
    }
}

fn main() -> anyhow::Result<()> {
    // A missing .env is fine; the key may come from the real environment.
    dotenvy::dotenv().ok();
    let cli = Cli::parse();
    logging::init_logging(if cli.verbose { "debug" } else { "info" })?;

    match &cli.command {
        Some(Command::Scrape(args)) => scrape(args, &cli.llm),
        Some(Command::Classify { titles }) => classify_titles(titles, &cli.llm),
        None => scrape(&cli.scrape, &cli.llm),
    }
}

fn scrape(args: &ScrapeArgs, llm: &LlmArgs) -> anyhow::Result<()> {
    let classifier = if args.classify {
        Some(EarlyCareerClassifier::from_config(&llm.classifier_config()?)?)
    } else {
        None
    };

    let fetcher = Fetcher::new(FetcherConfig {
        referer: args.referer.clone(),
        timeout: args.timeout_secs.map(Duration::from_secs),
    })?;
    let page = fetcher.fetch(&args.url)?;

    let listings = Extractor::with_limit(args.max_candidates).extract(&page.body);
    info!("Extracted {} listings", listings.len());

    let records = report::write_listings(
        &listings,
        classifier.as_ref(),
        Local::now(),
        &mut std::io::stdout().lock(),
    )?;

    if let Some(path) = &args.csv {
        export::write_csv(path, &records)?;
    }
    Ok(())
}

fn classify_titles(titles: &[String], llm: &LlmArgs) -> anyhow::Result<()> {
    let classifier = EarlyCareerClassifier::from_config(&llm.classifier_config()?)?;
    for title in titles {
        let answer = if classifier.classify_job_title(title)? { "Yes" } else { "No" };
        println!("{title}: {answer}");
    }
    Ok(())
}
