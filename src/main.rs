use std::sync::Arc;

use clap::{
    Args, CommandFactory, Parser, Subcommand,
    builder::{
        Styles,
        styling::{AnsiColor, Effects},
    },
};
use clap_complete::{Shell, generate};

use sporlist::{
    cli, config,
    curation::{Count, SeedKind},
    error,
    types::PkceToken,
};
use tokio::sync::Mutex;

fn styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::White.on_default() | Effects::BOLD)
        .usage(AnsiColor::White.on_default() | Effects::BOLD)
        .literal(AnsiColor::BrightBlue.on_default())
        .placeholder(AnsiColor::BrightGreen.on_default())
}

#[derive(Parser, Debug, Clone)]
#[clap(
  version = env!("CARGO_PKG_VERSION"),
  name=env!("CARGO_PKG_NAME"),
  bin_name=env!("CARGO_PKG_NAME"),
  author=env!("CARGO_PKG_AUTHORS"),
  about=env!("CARGO_PKG_DESCRIPTION"),
  styles=styles(),
)]
struct Cli {
    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Authorize with Spotify API
    Auth,

    /// List your playlists
    Playlists,

    /// Show the most common genres of a playlist
    Genres(RankingOptions),

    /// Show the most common artists of a playlist
    Artists(RankingOptions),

    /// Search for recommended tracks and add them to a playlist
    Recommend(RecommendOptions),

    /// Get shell completions
    Completions(CompletionsOption),
}

#[derive(Args, Debug, Clone)]
pub struct PlaylistArg {
    /// Playlist ID; pick interactively when omitted
    #[clap(long)]
    pub playlist: Option<String>,
}

#[derive(Args, Debug, Clone)]
pub struct RankingOptions {
    #[clap(flatten)]
    pub playlist: PlaylistArg,

    /// Number of top entries to show
    #[clap(long, conflicts_with = "all", value_parser = clap::value_parser!(u32).range(1..))]
    pub top: Option<u32>,

    /// Show every entry
    #[clap(long)]
    pub all: bool,
}

impl RankingOptions {
    fn count(&self) -> Option<Count> {
        if self.all {
            return Some(Count::All);
        }
        self.top.map(|n| Count::Top(n as usize))
    }
}

#[derive(Args, Debug, Clone)]
pub struct RecommendOptions {
    #[clap(flatten)]
    pub playlist: PlaylistArg,

    /// Seed recommendations by artists, genres or tracks
    #[clap(long)]
    pub seed: Option<SeedKind>,
}

#[derive(Parser, Debug, Clone)]
pub struct CompletionsOption {
    shell: Shell,
}

#[tokio::main]
async fn main() {
    if let Err(e) = config::load_env().await {
        error!("Cannot load environment. Err: {}", e);
    }

    let cli = Cli::parse();

    match cli.command {
        Command::Auth => {
            let oauth_result: Arc<Mutex<Option<PkceToken>>> = Arc::new(Mutex::new(None));
            cli::auth(Arc::clone(&oauth_result)).await;
        }
        Command::Playlists => cli::list_playlists().await,
        Command::Genres(opt) => cli::genres(opt.playlist.playlist.clone(), opt.count()).await,
        Command::Artists(opt) => cli::artists(opt.playlist.playlist.clone(), opt.count()).await,
        Command::Recommend(opt) => cli::recommend(opt.playlist.playlist, opt.seed).await,
        Command::Completions(opt) => {
            let mut cmd = Cli::command();
            let name = cmd.get_name().to_string();
            generate(opt.shell, &mut cmd, name, &mut std::io::stdout())
        }
    }
}
