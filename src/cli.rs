use std::path::PathBuf;

use clap::{Parser, Subcommand};
use log::info;
use rtopfm::{
    app::{self, App, ConfigBuilder},
    clients::errors::Result,
};

#[derive(Parser)]
#[command(name = "rtopfm")]
#[command(version, about = "Show your top Last.fm artist and track on a pixel display", long_about = None)]
struct Cli {
    /// Last.fm account to look up
    #[arg(long, env = "LASTFM_USERNAME", global = true)]
    username: Option<String>,

    /// One of overall, 7day, 1month, 3month, 6month, 12month
    #[arg(long, env = "LASTFM_PERIOD", global = true)]
    period: Option<String>,

    /// Last.fm API key
    #[arg(long, env = "LASTFM_API_KEY", global = true, hide_env_values = true)]
    api_key: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render the slides as JSON
    Render {
        /// Write to this file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Reference artwork by URL instead of inlining the images
        #[arg(long)]
        no_artwork: bool,
    },
}

pub async fn run() -> Result<()> {
    // .env values must be in place before clap reads the environment
    app::load_env_files();
    let cli = Cli::parse();

    match cli.command {
        Commands::Render { output, no_artwork } => {
            let config = ConfigBuilder::new()
                .username(cli.username)
                .period(cli.period)
                .api_key(cli.api_key)
                .build()?;
            render(App::new(config), output, no_artwork).await?;
        }
    }
    Ok(())
}

async fn render(app: App, output: Option<PathBuf>, no_artwork: bool) -> Result<()> {
    let root = if no_artwork {
        app.render().await
    } else {
        app.render_with_artwork().await
    };
    let json = serde_json::to_string_pretty(&root)?;
    match output {
        Some(path) => {
            tokio::fs::write(&path, json).await?;
            info!("Wrote slides to {}", path.display());
        }
        None => println!("{json}"),
    }
    Ok(())
}
