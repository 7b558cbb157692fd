use clap::{Parser, Subcommand};

/// Administer a remote indexer management server
#[derive(Parser, Debug)]
#[command(name = "graph-indexer", author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Manage queued actions on the management server
    Actions(ActionsCommand),
}

#[derive(Parser, Debug, Clone)]
pub struct ActionsCommand {
    #[command(subcommand)]
    pub command: ActionsSubcommand,
}

#[derive(Subcommand, Debug, Clone)]
pub enum ActionsSubcommand {
    /// Cancel one or more queued actions
    Cancel(CancelCommand),
}

#[derive(Parser, Debug, Clone)]
pub struct CancelCommand {
    /// The ids of the queued actions to cancel
    pub action_ids: Vec<String>,
    /// Choose the output format: table (default), JSON, or YAML
    #[clap(short, long, default_value = "table")]
    pub output: String,
}
