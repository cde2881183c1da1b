use clap::{
    CommandFactory, Parser, Subcommand,
    builder::{
        Styles,
        styling::{AnsiColor, Effects},
    },
};
use clap_complete::{Shell, generate};

use sporecli::{cli, config, error, types::AttributeInput};

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
    /// Generate track recommendations from musical attributes
    Recommend(RecommendOptions),

    /// Browse and search the seed-genre catalog
    Genres(GenresOptions),

    /// Show catalog and configuration status
    Info(InfoOptions),

    /// Get shell completions
    Completions(CompletionsOption),
}

#[derive(Parser, Debug, Clone)]
pub struct RecommendOptions {
    /// Seed genre for the recommendation query
    #[clap(long)]
    pub genre: Option<String>,

    /// Target acousticness (0.0 - 1.0)
    #[clap(long, default_value_t = 0.5)]
    pub acousticness: f64,

    /// Target danceability (0.0 - 1.0)
    #[clap(long, default_value_t = 0.5)]
    pub danceability: f64,

    /// Target energy (0.0 - 1.0)
    #[clap(long, default_value_t = 0.5)]
    pub energy: f64,

    /// Target instrumentalness (0.0 - 1.0)
    #[clap(long, default_value_t = 0.5)]
    pub instrumentalness: f64,

    /// Target liveness (0.0 - 1.0)
    #[clap(long, default_value_t = 0.5)]
    pub liveness: f64,

    /// Target speechiness (0.0 - 1.0)
    #[clap(long, default_value_t = 0.5)]
    pub speechiness: f64,

    /// Target popularity (0 - 100)
    #[clap(long, default_value_t = 50.0)]
    pub popularity: f64,

    /// Target valence (0.0 - 1.0)
    #[clap(long, default_value_t = 0.5)]
    pub valence: f64,

    /// Playlist length (1 - 50, defaults to 20)
    #[clap(long)]
    pub length: Option<String>,

    /// Fill in the form interactively
    #[clap(long, short)]
    pub interactive: bool,
}

#[derive(Parser, Debug, Clone)]
#[command(
    about = "Browse and search the seed-genre catalog",
    args_conflicts_with_subcommands = true // disallow mixing --search with subcommands
)]
pub struct GenresOptions {
    /// Search the catalog like the form's suggestion dropdown
    #[clap(long)]
    pub search: Option<String>,

    /// Subcommands under `genres` (e.g., `update`)
    #[command(subcommand)]
    pub command: Option<GenresSubcommand>,
}

#[derive(Subcommand, Debug, Clone)]
pub enum GenresSubcommand {
    /// Refresh the cached catalog from the API
    Update,
}

#[derive(Parser, Debug, Clone)]
pub struct InfoOptions {
    /// Show genre catalog status
    #[clap(long)]
    genres: bool,

    /// Show configuration status
    #[clap(long)]
    config: bool,
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
        Command::Recommend(opt) => {
            let input = AttributeInput {
                genre: opt.genre.unwrap_or_default(),
                acousticness: opt.acousticness,
                danceability: opt.danceability,
                energy: opt.energy,
                instrumentalness: opt.instrumentalness,
                liveness: opt.liveness,
                speechiness: opt.speechiness,
                popularity: opt.popularity,
                valence: opt.valence,
                playlist_length: opt.length,
            };
            cli::recommend(input, opt.interactive).await
        }

        Command::Genres(opt) => match opt.command {
            Some(GenresSubcommand::Update) => cli::update_genres().await,
            None => cli::list_genres(opt.search).await,
        },

        Command::Info(opt) => cli::info(opt.genres, opt.config).await,

        Command::Completions(opt) => {
            let mut cmd = Cli::command_for_update();
            let name = cmd.get_name().to_string();
            generate(opt.shell, &mut cmd, name, &mut std::io::stdout())
        }
    }
}
