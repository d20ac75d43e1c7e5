use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::Context;
use assess_api::{init_tracing, AssessmentService, EngineConfig, RandomIds};
use assess_core::{Category, Response};
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "assess", about = "Score workplace self-assessments and build team lenses")]
struct Cli {
    /// Path to a TOML, YAML or JSON config file. Without one, settings
    /// come from `ASSESS__*` environment variables.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Pretty-print JSON output.
    #[arg(long, global = true)]
    pretty: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Score one respondent's answers and print the results payload.
    Score {
        /// Category (ocean, culture, values).
        #[arg(long)]
        category: Category,

        /// JSON array of `{"questionId": .., "value": ..}` objects.
        #[arg(long)]
        responses: PathBuf,
    },

    /// Build a team dashboard from several respondents' answers.
    Team {
        /// Category (ocean, culture, values).
        #[arg(long)]
        category: Category,

        /// JSON array with one response array per member.
        #[arg(long)]
        members: PathBuf,

        /// Team display name.
        #[arg(long, default_value = "Team")]
        name: String,
    },

    /// Print the active question registry for a category.
    Registry {
        #[arg(long)]
        category: Category,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => EngineConfig::from_file(&path.to_string_lossy())
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => EngineConfig::from_env().context("loading config from environment")?,
    };
    init_tracing(&config.logging)?;

    let service = AssessmentService::new(
        Arc::new(config.build_engine()?),
        Arc::new(config.build_recommender(None)?),
        Arc::new(RandomIds),
    );

    let output = match cli.command {
        Commands::Score { category, responses } => {
            let responses: Vec<Response> = read_json(&responses)?;
            let respondent = service.new_respondent();
            service.submit(respondent, category, responses).await?;
            serde_json::to_value(service.results(respondent, category).await?)?
        }
        Commands::Team { category, members, name } => {
            let members: Vec<Vec<Response>> = read_json(&members)?;
            let code = service.create_team(&name).await;
            for (index, responses) in members.into_iter().enumerate() {
                let respondent = service.new_respondent();
                service.join_team(&code, respondent).await?;
                service
                    .submit(respondent, category, responses)
                    .await
                    .with_context(|| format!("member #{}", index + 1))?;
            }
            serde_json::to_value(service.team_dashboard(&code, category).await?)?
        }
        Commands::Registry { category } => {
            let json = service.engine().registry(category)?.to_json()?;
            serde_json::from_str(&json)?
        }
    };

    let rendered = if cli.pretty {
        serde_json::to_string_pretty(&output)?
    } else {
        serde_json::to_string(&output)?
    };
    println!("{rendered}");
    Ok(())
}

fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> anyhow::Result<T> {
    let raw = std::fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    serde_json::from_str(&raw).with_context(|| format!("parsing {}", path.display()))
}
