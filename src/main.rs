use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};

use tourism_ai::api::AppState;
use tourism_ai::{TourismAgent, TourismAiConfig, TourismAiError, logging, web};

const EXAMPLE_QUERIES: [&str; 3] = [
    "I'm going to go to Bangalore, let's plan my trip.",
    "I'm going to go to Bangalore, what is the temperature there",
    "I'm going to go to Bangalore, what is the temperature there? And what are the places I can visit?",
];

#[derive(Parser)]
#[command(name = "tourism-ai", version, about = "Natural-language travel assistant: weather and places to visit")]
struct Cli {
    /// Path to a TOML configuration file
    #[arg(long, global = true, env = "TOURISM_AI_CONFIG")]
    config: Option<PathBuf>,

    /// Debug logging
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Answer a single query and exit
    Ask {
        /// e.g. "I'm visiting Delhi, what is the weather"
        query: Vec<String>,
    },
    /// Interactive conversation loop
    Chat,
    /// Run the HTTP API
    Serve {
        #[arg(long)]
        port: Option<u16>,
    },
}

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        match e.downcast_ref::<TourismAiError>() {
            Some(err) => eprintln!("Error: {}", err.user_message()),
            None => eprintln!("Error: {e:#}"),
        }
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let cli = Cli::parse();

    let config = TourismAiConfig::load_from_path(cli.config.clone())?;
    logging::init(&config.logging, cli.verbose);

    let agent = TourismAgent::from_config(&config)?;

    match cli.command {
        Command::Ask { query } => {
            let query = query.join(" ");
            if query.trim().is_empty() {
                return Err(TourismAiError::validation("Query cannot be empty").into());
            }
            println!("{}", agent.process(&query).await);
        }
        Command::Chat => chat(&agent).await?,
        Command::Serve { port } => {
            let port = port.unwrap_or(config.web.port);
            web::run(AppState::new(agent, config.web.history_size), port).await?;
        }
    }

    Ok(())
}

async fn chat(agent: &TourismAgent) -> Result<()> {
    let mut stdout = tokio::io::stdout();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    let rule = "=".repeat(60);
    let mut banner = format!("{rule}\nWelcome to Tourism AI\n{rule}\n\n");
    banner.push_str("Enter a place you want to visit and ask about weather or places to visit.\nExamples:\n");
    for example in EXAMPLE_QUERIES {
        banner.push_str(&format!("  - \"{example}\"\n"));
    }
    banner.push_str("\nType 'exit' or 'quit' to stop.\n");
    stdout.write_all(banner.as_bytes()).await?;

    loop {
        stdout.write_all(b"\nYou: ").await?;
        stdout.flush().await?;

        let Some(line) = lines.next_line().await? else {
            break;
        };
        let input = line.trim();

        if matches!(input.to_lowercase().as_str(), "exit" | "quit" | "q") {
            break;
        }
        if input.is_empty() {
            stdout.write_all(b"Please enter a valid query.\n").await?;
            continue;
        }

        let reply = agent.process(input).await;
        stdout
            .write_all(format!("\nTourism AI: {reply}\n").as_bytes())
            .await?;
    }

    stdout
        .write_all(b"\nThank you for using Tourism AI. Goodbye!\n")
        .await?;
    stdout.flush().await?;
    Ok(())
}
