//! DocSage — chat with the documents in a folder through a local Ollama model.
//!
//! Reads the documents folder path from `folder.txt`, loads every readable
//! file into a single corpus, then answers queries from stdin by sending
//! the corpus to Ollama in fixed-size chunks.

use std::io::Write;
use std::path::Path;

use clap::Parser;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::info;
use tracing_subscriber::EnvFilter;

use docsage_chat::{Dispatcher, OllamaClient};
use docsage_core::{read_folder_path, FOLDER_FILE};
use docsage_ingest::{load_corpus, DEFAULT_CHUNK_SIZE};

#[derive(Parser)]
#[command(
    name = "docsage",
    about = "Ask a local Ollama model about the documents in a folder"
)]
struct Cli {
    /// Ollama model to use for chat requests
    #[arg(short = 'l', long = "model")]
    model: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    // Exit immediately on Ctrl-C, even mid-request.
    tokio::spawn(async {
        if tokio::signal::ctrl_c().await.is_ok() {
            println!("\nAborted by the user.");
            std::process::exit(0);
        }
    });

    let docs_dir = match read_folder_path(Path::new(FOLDER_FILE)) {
        Ok(dir) => dir,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };
    info!("Documents folder: {}", docs_dir.display());

    let corpus = match load_corpus(&docs_dir) {
        Ok(corpus) => corpus,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };
    corpus.print_summary();

    let dispatcher = Dispatcher::new(OllamaClient::from_env(), cli.model, DEFAULT_CHUNK_SIZE);

    println!("\nAI Assistant is ready. Type your query or 'exit' to quit.");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        print!("AI Assistant: ");
        std::io::stdout().flush()?;

        let Some(line) = lines.next_line().await? else {
            break; // stdin closed
        };
        let input = line.trim();

        if input.eq_ignore_ascii_case("exit") || input.eq_ignore_ascii_case("bye") {
            println!("Goodbye!");
            break;
        }

        match dispatcher.dispatch(&corpus.text, input).await {
            Ok(answer) => println!("\nResponse:\n{}\n", answer),
            Err(e) => eprintln!("Error: {}", e),
        }
    }

    Ok(())
}
