mod filters;
mod output;

use clap::{Args, Parser, Subcommand};
use gdeltdoc_client::service::{article_filters, timeline_filters};
use gdeltdoc_client::{ArticleSearchRequest, GdeltClient, TimelineRequest};
use tracing_subscriber::EnvFilter;

use crate::filters::FilterArgs;

#[derive(Debug, Parser)]
#[command(name = "gdeltdoc")]
#[command(about = "Search the GDELT DOC 2.0 news index")]
struct Cli {
    /// Print results as JSON instead of text
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// List matching articles
    Articles {
        #[command(flatten)]
        window: WindowArgs,

        /// Number of articles to return (max 250)
        #[arg(long)]
        max_records: Option<u32>,

        #[command(flatten)]
        filters: FilterArgs,
    },
    /// Coverage timeline for the query
    Timeline {
        #[command(flatten)]
        window: WindowArgs,

        /// timelinevol, timelinevolraw, timelinetone, timelinelang or timelinesourcecountry
        #[arg(long)]
        mode: Option<String>,

        #[command(flatten)]
        filters: FilterArgs,
    },
}

#[derive(Debug, Args)]
struct WindowArgs {
    /// Keyword or phrase to search for
    query: String,

    /// Relative window, e.g. 24h, 7d, 3m
    #[arg(long)]
    timespan: Option<String>,

    /// Start date (YYYY-MM-DD)
    #[arg(long)]
    start: Option<String>,

    /// End date (YYYY-MM-DD)
    #[arg(long)]
    end: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = gdeltdoc_core::load_app_config()?;

    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let client = GdeltClient::from_config(&config)?;

    match cli.command {
        Commands::Articles {
            window,
            max_records,
            filters,
        } => {
            let request = ArticleSearchRequest {
                query: window.query,
                timespan: window.timespan,
                start_date: window.start,
                end_date: window.end,
                max_records,
            };
            let mut filter_set = article_filters(&request)?;
            filters.apply(&mut filter_set)?;

            let articles = client.article_search(&filter_set).await?;
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&articles)?);
            } else {
                print!("{}", output::render_articles(&articles));
            }
        }
        Commands::Timeline {
            window,
            mode,
            filters,
        } => {
            let request = TimelineRequest {
                query: window.query,
                mode,
                timespan: window.timespan,
                start_date: window.start,
                end_date: window.end,
            };
            let (mode, mut filter_set) = timeline_filters(&request)?;
            filters.apply(&mut filter_set)?;

            let timeline = client.timeline_search(mode, &filter_set).await?;
            tracing::info!(
                %mode,
                rows = timeline.rows.len(),
                title = %timeline.query_details.title,
                "timeline fetched"
            );
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&timeline)?);
            } else {
                print!("{}", output::render_timeline(&timeline));
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests;
