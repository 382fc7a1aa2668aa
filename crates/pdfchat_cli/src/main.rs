use std::path::{Path, PathBuf};
use std::sync::Arc;

use clap::{Parser, Subcommand};
use colored::Colorize;
use doc_core::{Config, Turn, TurnPresentation};
use document_client::DocumentClient;
use session_manager::{SessionError, SessionManager};
use tokio::io::{AsyncBufReadExt, BufReader};

#[derive(Parser)]
#[command(name = "pdfchat")]
#[command(about = "Chat with a PDF through the document service")]
#[command(version)]
struct Cli {
    /// Base URL of the document service
    #[arg(long, default_value = "http://127.0.0.1:8000")]
    server_url: String,

    /// Per-request timeout in seconds
    #[arg(long, default_value_t = 60)]
    timeout_secs: u64,

    /// TOML config file; takes precedence over the flags above
    #[arg(long)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Upload a PDF and chat interactively
    Chat {
        /// Path to the PDF
        file: PathBuf,
    },
    /// Upload a PDF and ask a single question
    Ask {
        /// Path to the PDF
        file: PathBuf,
        /// Question content
        question: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load(path)?,
        None => Config {
            api_base: cli.server_url.clone(),
            request_timeout_secs: cli.timeout_secs,
        },
    };

    let client = DocumentClient::new(&config)?;
    let manager = SessionManager::new(Arc::new(client));

    match cli.command {
        Commands::Chat { file } => run_chat(&manager, &file).await,
        Commands::Ask { file, question } => {
            upload(&manager, &file).await?;
            ask(&manager, &question).await;
            Ok(())
        }
    }
}

async fn upload(manager: &SessionManager, file: &Path) -> anyhow::Result<()> {
    let file_name = file
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| anyhow::anyhow!("invalid file path: {}", file.display()))?
        .to_string();
    let bytes = tokio::fs::read(file).await?;

    println!("{}", format!("Uploading {file_name}...").cyan());
    let points = manager.upload(&file_name, bytes).await?;

    println!("{}", "Main insights:".bold());
    for point in &points {
        println!("  - {point}");
    }
    Ok(())
}

async fn run_chat(manager: &SessionManager, file: &Path) -> anyhow::Result<()> {
    upload(manager, file).await?;
    println!(
        "{}",
        "Ask something about the PDF (/highlight <page> <snippet>, /quit to exit)".dimmed()
    );

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let input = line.trim();
        if input.is_empty() {
            continue;
        }
        if input == "/quit" {
            break;
        }
        if let Some(rest) = input.strip_prefix("/highlight") {
            highlight(manager, rest).await;
            continue;
        }
        ask(manager, input).await;
    }
    Ok(())
}

async fn ask(manager: &SessionManager, question: &str) {
    match manager.ask(question).await {
        Ok(Some(turn)) => print_answer(&turn),
        Ok(None) => println!("{}", "Answer discarded (session changed).".dimmed()),
        Err(err) => print_error(&err),
    }
}

fn print_answer(turn: &Turn) {
    println!("{}", turn.text);
    match turn.presentation() {
        TurnPresentation::Grounded { snippet } => {
            println!("  {}", format!("\"{snippet}\"").yellow().italic());
        }
        TurnPresentation::NotFound => {
            println!("  {}", "Not found in document.".red());
        }
        TurnPresentation::User => {}
    }
}

async fn highlight(manager: &SessionManager, args: &str) {
    let mut parts = args.trim().splitn(2, ' ');
    let page = match parts.next().and_then(|p| p.parse::<u32>().ok()) {
        Some(page) => page,
        None => {
            println!("{}", "Usage: /highlight <page> <snippet>".red());
            return;
        }
    };
    let snippet = parts.next().unwrap_or("").trim();

    match manager.highlight(page, snippet).await {
        Ok(bytes) => {
            let out = format!("highlight_p{page}.pdf");
            match tokio::fs::write(&out, &bytes).await {
                Ok(()) => println!("{}", format!("Saved highlighted page to {out}").green()),
                Err(err) => println!("{}", format!("Failed to write {out}: {err}").red()),
            }
        }
        Err(err) => print_error(&err),
    }
}

fn print_error(err: &SessionError) {
    match err {
        SessionError::Validation(reason) => println!("{}", reason.as_str().red()),
        SessionError::Service(err) => println!("{}", format!("{err}").red()),
    }
}
