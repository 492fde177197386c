//! Bulk repository creation tool
//!
//! Reads repository names, one per line, and creates them through the batch
//! coordinator with a bounded number of requests in flight.

use anyhow::{Context, Result};
use clap::Parser;
use repo_gateway::config::{BatchConfig, Validate};
use repo_gateway::{
    ApiError, BatchCoordinator, BatchOutcome, Config, CreateRepoRequest, CreateRepoResponse,
    ReposService, RepositoryService,
};
use std::num::NonZeroUsize;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Create GitHub repositories in bulk
#[derive(Parser, Debug)]
#[command(name = "bulk-create")]
#[command(version, about, long_about = None)]
struct Cli {
    /// File with one repository name per line
    #[arg(default_value = "requests.txt")]
    input: PathBuf,

    /// Maximum number of creations in flight
    #[arg(long, short = 'c', default_value = "10", env = "BULK_CONCURRENCY")]
    concurrency: NonZeroUsize,

    /// Gateway configuration file, used when present
    #[arg(long, default_value = "config/gateway.yaml")]
    config: PathBuf,
}

impl Cli {
    fn batch_config(&self) -> Result<BatchConfig> {
        let batch = BatchConfig::with_max_concurrency(self.concurrency.get());
        batch
            .validate()
            .map_err(|e| anyhow::anyhow!("invalid --concurrency: {}", e))?;
        Ok(batch)
    }
}

/// One creation, tagged with its position in the input
struct Outcome {
    index: usize,
    result: std::result::Result<CreateRepoResponse, ApiError>,
}

impl BatchOutcome for Outcome {
    fn task_failed(index: usize, message: &str) -> Self {
        Self {
            index,
            result: Err(ApiError::internal_server_error(message)),
        }
    }
}

/// Successes and failures in input order, labelled by the requested name
#[derive(Debug, Default)]
struct Summary {
    total: usize,
    success: Vec<(String, String)>,
    failure: Vec<(String, ApiError)>,
}

impl Summary {
    fn collect(names: &[String], mut outcomes: Vec<Outcome>) -> Self {
        outcomes.sort_by_key(|outcome| outcome.index);

        let mut summary = Self {
            total: outcomes.len(),
            ..Self::default()
        };
        for outcome in outcomes {
            let name = names.get(outcome.index).cloned().unwrap_or_default();
            match outcome.result {
                Ok(created) => summary.success.push((name, created.name)),
                Err(error) => summary.failure.push((name, error)),
            }
        }
        summary
    }

    fn print(&self) {
        println!("{} requests", self.total);
        println!("{} created", self.success.len());
        for (requested, created) in &self.success {
            println!("  {:?} -> {}", requested, created);
        }
        println!("{} failed", self.failure.len());
        for (requested, error) in &self.failure {
            println!("  {:?} -> {}: {}", requested, error.status(), error.message());
        }
    }
}

fn read_names(content: &str) -> Vec<String> {
    content.lines().map(str::to_string).collect()
}

#[tokio::main]
async fn main() -> Result<()> {
    let _ = dotenvy::dotenv();
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    let cli = Cli::parse();
    let batch = cli.batch_config()?;

    let content = tokio::fs::read_to_string(&cli.input)
        .await
        .with_context(|| format!("failed to read {}", cli.input.display()))?;
    let names = read_names(&content);
    info!("{} requests from {}", names.len(), cli.input.display());

    let config = Config::load(&cli.config)
        .await
        .context("failed to load configuration")?;
    let service = Arc::new(ReposService::from_config(&config)?);
    let coordinator = BatchCoordinator::new(batch);

    let items: Vec<(usize, CreateRepoRequest)> = names
        .iter()
        .enumerate()
        .map(|(index, name)| (index, CreateRepoRequest::new(name.as_str(), "")))
        .collect();

    let outcomes = coordinator
        .run(items, move |(index, request)| {
            let service = Arc::clone(&service);
            async move {
                Outcome {
                    index,
                    result: service.create_repo(request).await,
                }
            }
        })
        .await;

    Summary::collect(&names, outcomes).print();
    Ok(())
}
