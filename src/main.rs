//! Codebox - multi-language code execution sandbox with HTTP API.
//!
//! Usage:
//!   codebox serve [--port 8080]                      # Start HTTP server
//!   codebox --run --language python --file sol.py \
//!       --test-input "nums = [2,7,11,15], target = 9"  # One-shot CLI mode

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use codebox::{AppState, ExecuteRequest, ExecuteResponse, Executor, ExecutorConfig};

#[derive(Parser, Debug)]
#[command(name = "codebox")]
#[command(about = "Multi-language code execution sandbox with HTTP API")]
struct Args {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Run a local source file directly (one-shot mode)
    #[arg(long)]
    run: bool,

    /// Language of the submission (python, javascript, cpp, java, rust)
    #[arg(long)]
    language: Option<String>,

    /// Path to the source file to execute
    #[arg(long)]
    file: Option<PathBuf>,

    /// Test input, e.g. "nums = [2,7,11,15], target = 9"
    #[arg(long, default_value = "")]
    test_input: String,

    /// Wall-clock budget per submission in milliseconds
    #[arg(long, default_value = "5000")]
    timeout_ms: u64,

    /// Maximum concurrent executions
    #[arg(long, default_value = "16")]
    max_concurrency: usize,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Start the HTTP server
    Serve {
        /// Port to listen on
        #[arg(long, default_value = "8080")]
        port: u16,
    },
}

#[tokio::main]
async fn main() {
    use std::process::exit;

    tracing_subscriber::fmt::init();

    let args = Args::parse();

    let executor = Executor::new(ExecutorConfig {
        timeout_ms: args.timeout_ms,
        max_concurrency: args.max_concurrency,
    });

    match args.command {
        Some(Commands::Serve { port }) => {
            codebox::server::run_server(port, AppState::new(executor)).await;
        }
        None if args.run => {
            let (Some(language), Some(file)) = (args.language, args.file) else {
                eprintln!("Error: --run needs --language and --file");
                exit(1);
            };
            let code = match std::fs::read_to_string(&file) {
                Ok(code) => code,
                Err(e) => {
                    eprintln!("Error reading {}: {}", file.display(), e);
                    exit(1);
                }
            };
            let request = ExecuteRequest {
                code,
                language,
                test_input: args.test_input,
            };
            match executor.execute(&request).await {
                Ok(ExecuteResponse::Success { output }) => print!("{}", output),
                Ok(failure) => {
                    eprintln!("{}", serde_json::to_string(&failure).unwrap_or_default());
                    exit(1);
                }
                Err(e) => {
                    eprintln!("Error: {}", e);
                    exit(1);
                }
            }
        }
        None => {
            eprintln!("Error: Use 'serve' subcommand or --run flag");
            exit(1);
        }
    }
}
