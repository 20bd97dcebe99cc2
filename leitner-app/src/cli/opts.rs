use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser, Clone)]
#[command(name = "leitner", version, about = "Leitner-box flashcard review: CLI and HTTP API")]
pub struct Cli {
    /// Deck file (.json or .csv); defaults to the app data dir deck, then the built-in deck
    #[arg(long, env = "LEITNER_DECK", global = true)]
    pub deck: Option<PathBuf>,

    /// Log filter, e.g. "info" or "leitner_core=debug"
    #[arg(long, env = "LEITNER_LOG", default_value = "info", global = true)]
    pub log: String,

    #[command(subcommand)]
    pub cmd: Command,
}

#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Launch the HTTP API
    Serve(ServeCmd),
    /// Interactive review loop in the terminal
    Practice(PracticeCmd),
    /// List cards in the deck with their current bucket
    Cards(CardsCmd),
}

#[derive(Debug, Args, Clone)]
pub struct ServeCmd {
    /// Bind address (host:port)
    #[arg(long, env = "LEITNER_ADDR", default_value = "127.0.0.1:3001")]
    pub addr: String,
}

#[derive(Debug, Args, Clone)]
pub struct PracticeCmd {
    /// Number of days to run through
    #[arg(long, default_value_t = 1)]
    pub days: u64,
}

#[derive(Debug, Args, Clone)]
pub struct CardsCmd {
    #[arg(long)]
    pub tag: Option<String>,
    /// Substring match on front, back, hint and tags
    #[arg(long = "query", short = 'q')]
    pub query: Option<String>,
}
