use clap::Parser;
use linkrank::{
    rank_detached, CancellationToken, CandidateRanker, FeatureRegistry, LogisticModel, Model,
    RankerConfig, RankingJob,
};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{error, info, Level};
use tracing_subscriber::FmtSubscriber;

/// Score and rank entity-linking candidates for every table cell
#[derive(Parser, Debug)]
#[command(name = "linkrank")]
#[command(about = "Score and rank entity-linking candidates", long_about = None)]
struct Args {
    /// Job file with the dataset and its feature columns
    #[arg(short, long)]
    input: PathBuf,

    /// Logistic model weights; enables supervised scoring
    #[arg(short, long)]
    model: Option<PathBuf>,

    /// JSON list of heuristic feature names for unsupervised scoring
    #[arg(long)]
    registry: Option<PathBuf>,

    /// Candidate field the score is written to
    #[arg(short, long, default_value = "rank")]
    field: String,

    /// Score columns one at a time
    #[arg(long)]
    sequential: bool,

    /// Where to write the ranked dataset (stdout if omitted)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Log level
    #[arg(long, default_value = "info")]
    log_level: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let log_level = match args.log_level.as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    info!("Starting linkrank v{}", env!("CARGO_PKG_VERSION"));
    info!("Job file: {:?}", args.input);

    let (dataset, features) = RankingJob::from_path(&args.input)?.into_parts()?;
    info!(
        "Loaded {} rows, {} candidates",
        dataset.rows.len(),
        dataset.total_candidates()
    );

    let model: Option<Arc<dyn Model>> = match &args.model {
        Some(path) => {
            let model: LogisticModel = linkrank::job::read_json(path)?;
            info!("Supervised scoring with {} model weights", model.weights.len());
            Some(Arc::new(model))
        }
        None => None,
    };

    let registry = match &args.registry {
        Some(path) => linkrank::job::read_json::<FeatureRegistry>(path)?,
        None => FeatureRegistry::default(),
    };

    let config = if args.sequential {
        RankerConfig::sequential()
    } else {
        RankerConfig::default()
    };
    let ranker = Arc::new(CandidateRanker::new(model, registry, config));

    let cancel = CancellationToken::new();
    let cancel_on_signal = cancel.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            info!("Shutdown signal received, cancelling");
            cancel_on_signal.cancel();
        }
    });

    let result = rank_detached(ranker, dataset, Arc::new(features), args.field.clone(), cancel).await;

    let (dataset, summary) = match result {
        Ok(done) => done,
        Err(e) => {
            error!("Ranking failed: {}", e);
            return Err(e.into());
        }
    };
    info!("Summary: {}", serde_json::to_string(&summary)?);

    let json = serde_json::to_string_pretty(&dataset)?;
    match &args.output {
        Some(path) => {
            std::fs::write(path, json)?;
            info!("Ranked dataset written to {:?}", path);
        }
        None => println!("{}", json),
    }

    Ok(())
}
