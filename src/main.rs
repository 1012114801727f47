use clap::Parser;

use appellate_triage::config::Args;

#[tokio::main]
async fn main() {
    // Load environment variables from .env file if present
    let _ = dotenvy::dotenv();

    let args = Args::parse();

    if let Err(e) = args.validate() {
        eprintln!("Configuration error: {e}");
        std::process::exit(2);
    }

    if let Err(e) = appellate_triage::run(args).await {
        eprintln!("Fatal: {e}");
        std::process::exit(1);
    }
}
