use clap::Parser;
use indexer_core::error::CoreError;
use owo_colors::{OwoColorize, Style};

mod cli;
mod commands;
mod config;
mod spinner;
mod views;

#[tokio::main]
async fn main() {
    let cli = cli::Cli::parse();

    let result = match cli.command {
        cli::Commands::Actions(actions) => match actions.command {
            cli::ActionsSubcommand::Cancel(command) => commands::cancel::run(command).await,
        },
    };

    if let Err(e) = result {
        handle_error(e);
    }
}

fn handle_error(err: anyhow::Error) -> ! {
    let error_style = Style::new().red().bold();

    if let Some(core_error) = err.downcast_ref::<CoreError>() {
        match core_error {
            CoreError::NotFound(s) => {
                eprintln!("{} {}", "Error:".style(error_style), s);
            }
            CoreError::InvalidEndpoint(url) => {
                eprintln!(
                    "{} Invalid management API endpoint '{}'. Check the 'api' setting in indexer.toml or INDEXER_API.",
                    "Error:".style(error_style),
                    url.yellow()
                );
            }
            CoreError::Network(e) => {
                eprintln!(
                    "{} Could not reach the management API: {}",
                    "Error:".style(error_style),
                    e
                );
            }
            _ => eprintln!("{} {}", "Error:".style(error_style), err),
        }
    } else {
        eprintln!("{} {}", "Error:".style(error_style), err);
    }

    std::process::exit(1);
}
