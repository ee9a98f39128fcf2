use clap::{
    Args, CommandFactory, Parser, Subcommand,
    builder::{
        Styles,
        styling::{AnsiColor, Effects},
    },
};
use clap_complete::{Shell, generate};

use chronolist::{
    cli::{self, Destination},
    config,
    consolidate::PipelineOptions,
    error,
};

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
  about=env!("CARGO_PKG_DESCRIPTION"),
  styles=styles(),
)]
struct Cli {
    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Merge playlists into one chronologically ordered playlist
    Consolidate(ConsolidateOptions),

    /// List your own playlists and their ids
    Playlists(PlaylistsOptions),

    /// Get shell completions
    Completions(CompletionsOption),
}

#[derive(Parser, Debug, Clone)]
pub struct ConsolidateOptions {
    /// Source playlist id; repeat for more, order is kept
    #[clap(long = "source", required = true, num_args = 1)]
    sources: Vec<String>,

    #[clap(flatten)]
    destination: DestinationOptions,

    /// Also include the saved tracks of your library
    #[clap(long)]
    saved: bool,

    /// Keep only the earliest added copy of each artist/title
    #[clap(long)]
    dedup: bool,

    /// Tracks per append request (1-100)
    #[clap(long)]
    chunk_size: Option<usize>,
}

#[derive(Args, Debug, Clone)]
#[group(required = true, multiple = false)]
pub struct DestinationOptions {
    /// Id of an existing playlist to append to
    #[clap(long)]
    destination: Option<String>,

    /// Name of a new private playlist to create and append to
    #[clap(long)]
    create: Option<String>,
}

#[derive(Parser, Debug, Clone)]
pub struct PlaylistsOptions {
    /// Only show playlists whose name contains this term
    #[clap(long)]
    search: Option<String>,
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

    let result = match cli.command {
        Command::Consolidate(opt) => {
            // clap guarantees exactly one of the two
            let destination = match opt.destination.destination {
                Some(id) => Destination::Existing(id),
                None => Destination::New(opt.destination.create.unwrap_or_default()),
            };
            let options = PipelineOptions {
                include_saved_tracks: opt.saved,
                deduplicate: opt.dedup,
                chunk_size: opt.chunk_size.unwrap_or_else(config::chunk_size),
            };
            cli::consolidate(opt.sources, destination, options).await
        }
        Command::Playlists(opt) => cli::list_playlists(opt.search).await,
        Command::Completions(opt) => {
            let mut cmd = Cli::command_for_update();
            let name = cmd.get_name().to_string();
            generate(opt.shell, &mut cmd, name, &mut std::io::stdout());
            Ok(())
        }
    };

    if let Err(e) = result {
        error!("{}", e);
    }
}
