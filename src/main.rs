use clap::{
    CommandFactory, Parser, Subcommand,
    builder::{
        Styles,
        styling::{AnsiColor, Effects},
    },
};
use clap_complete::{Shell, generate};

use tunegate::{cli, config, config::SessionMode};

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
    /// Run the OAuth login server
    Serve(ServeOptions),

    /// Look up an artist's top tracks (no user login required)
    TopTracks(TopTracksOptions),

    /// Get shell completions
    Completions(CompletionsOption),
}

#[derive(Parser, Debug, Clone)]
pub struct ServeOptions {
    /// Bind port (overrides the PORT environment variable)
    #[clap(long)]
    pub port: Option<u16>,

    /// Token storage mode: stateless or server-session
    #[clap(long)]
    pub session_mode: Option<SessionMode>,
}

#[derive(Parser, Debug, Clone)]
pub struct TopTracksOptions {
    /// Artist name to search for
    pub artist: String,

    /// Market to resolve track availability against
    #[clap(long, default_value = "US")]
    pub market: String,
}

#[derive(Parser, Debug, Clone)]
pub struct CompletionsOption {
    shell: Shell,
}

#[tokio::main]
async fn main() {
    config::load_env();

    let cli = Cli::parse();

    match cli.command {
        Command::Serve(opt) => cli::serve(opt.port, opt.session_mode).await,
        Command::TopTracks(opt) => cli::top_tracks(&opt.artist, &opt.market).await,
        Command::Completions(opt) => {
            let mut cmd = Cli::command_for_update();
            let name = cmd.get_name().to_string();
            generate(opt.shell, &mut cmd, name, &mut std::io::stdout())
        }
    }
}
