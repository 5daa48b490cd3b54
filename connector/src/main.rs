//! Command-line front end for prompting the remote assistant.

use anyhow::Context;
use clap::{Parser, Subcommand};
use thread_relay::{Connector, ThreadId};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Send a one-shot prompt to the response model
    Ask {
        /// The prompt text
        prompt: String,
    },
    /// Converse with the assistant on a persisted thread
    Chat {
        /// The message to send
        message: String,
        /// Existing thread id (a new thread is created when omitted)
        #[arg(long)]
        thread: Option<String>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .with_target(false)
        .init();

    let connector = Connector::from_env().context("connector is not fully configured")?;

    match cli.command {
        Commands::Ask { prompt } => {
            let answer = connector.prompt(&prompt).await?;
            println!("{answer}");
        }
        Commands::Chat { message, thread } => {
            let thread = match thread {
                Some(id) => ThreadId::from(id),
                None => {
                    let id = connector.create_thread().await?;
                    tracing::info!(thread = %id, "created new thread");
                    id
                }
            };
            let reply = connector.prompt_thread(&message, &thread).await?;
            tracing::info!(
                thread = %thread,
                run = %reply.run_id,
                waited_ms = reply.waited_ms,
                "assistant run finished"
            );
            println!("{}", reply.text);
        }
    }

    Ok(())
}
