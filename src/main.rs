use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use channel_views::commands;
use channel_views::commands::dashboard::CsvTarget;
use channel_views::config::load_env;
use channel_views::report::DEFAULT_TEXT_REPORT;

#[derive(Parser)]
#[command(name = "channel-views")]
#[command(about = "Rank a YouTube channel's videos by view count")]
#[command(version)]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Save the YouTube Data API key
    Init {
        /// YouTube Data API key
        #[arg(short = 'k', long)]
        api_key: Option<String>,

        /// Overwrite existing config
        #[arg(short, long)]
        force: bool,
    },

    /// Write every video of a channel, most viewed first, to a text file
    Export {
        /// Channel URL (e.g., https://www.youtube.com/@CHANNEL or /channel/UC...)
        channel: String,

        /// Output file
        #[arg(short, long, default_value = DEFAULT_TEXT_REPORT)]
        output: PathBuf,

        /// API key (overrides YOUTUBE_API_KEY)
        #[arg(short = 'k', long)]
        api_key: Option<String>,
    },

    /// Show summary metrics, top videos and upload timeline for a channel
    Dashboard {
        /// Channel URL; prompted for when omitted
        channel: Option<String>,

        /// Number of top videos to show (default: 10)
        #[arg(short = 'n', long, default_value = "10")]
        top: usize,

        /// Also save a CSV export, optionally to the given file
        #[arg(long, num_args = 0..=1, value_name = "FILE")]
        csv: Option<Option<PathBuf>>,

        /// API key (overrides YOUTUBE_API_KEY)
        #[arg(short = 'k', long)]
        api_key: Option<String>,
    },
}

#[tokio::main]
async fn main() {
    // Load environment variables
    load_env();

    let cli = Cli::parse();

    let default_level = if cli.verbose { "channel_views=debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        Commands::Init { api_key, force } => commands::init::run(api_key, force),
        Commands::Export {
            channel,
            output,
            api_key,
        } => commands::export::run(&channel, &output, api_key).await,
        Commands::Dashboard {
            channel,
            top,
            csv,
            api_key,
        } => {
            let csv = match csv {
                None => CsvTarget::None,
                Some(None) => CsvTarget::DefaultName,
                Some(Some(path)) => CsvTarget::Path(path),
            };
            commands::dashboard::run(channel, top, csv, api_key).await
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
