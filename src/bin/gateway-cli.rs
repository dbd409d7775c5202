use clap::{Parser, Subcommand};
use serde_json::Value;

#[derive(Parser)]
#[command(name = "gateway-cli")]
#[command(about = "Command-line client for the console gateway", long_about = None)]
struct Cli {
    #[arg(short, long, default_value = "http://localhost:3000")]
    url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Ask the gateway to reprocess a query
    Reprocess {
        /// Query identifier
        id: String,
    },
    /// Show backend system diagnostics
    Diagnostics,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let client = reqwest::Client::new();
    let base = cli.url.trim_end_matches('/');

    let res = match cli.command {
        Commands::Reprocess { id } => {
            client
                .patch(format!("{}/api/queries/{}/reprocess", base, id))
                .send()
                .await?
        }
        Commands::Diagnostics => {
            client
                .get(format!("{}/api/system/diagnostics", base))
                .send()
                .await?
        }
    };

    print_response(res).await
}

async fn print_response(res: reqwest::Response) -> Result<(), Box<dyn std::error::Error>> {
    let status = res.status();
    let json: Value = res.json().await?;

    if !status.is_success() {
        eprintln!("Error: gateway returned status {}", status);
        eprintln!("{}", serde_json::to_string_pretty(&json)?);
        std::process::exit(1);
    }

    println!("{}", serde_json::to_string_pretty(&json)?);
    Ok(())
}
