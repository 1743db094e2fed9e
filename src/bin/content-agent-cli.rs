use clap::{Parser, Subcommand};
use content_agent::models::Platform;
use serde_json::{json, Value};

#[derive(Parser)]
#[command(name = "content-agent-cli")]
#[command(about = "Command-line client for the content-agent JSON API", long_about = None)]
struct Cli {
    #[arg(short, long, default_value = "http://localhost:3000")]
    url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Research a topic
    Research {
        topic: String,
    },
    /// Find trending topics in a niche
    Topics {
        niche: String,
    },
    /// Generate a script for a topic
    Script {
        #[arg(long)]
        niche: String,
        #[arg(long)]
        topic: String,
        /// youtube, tiktok, instagram or twitter
        #[arg(long, default_value = "youtube")]
        platform: Platform,
    },
    /// Check that the gateway is up
    Health,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let client = reqwest::Client::new();
    let base = cli.url.trim_end_matches('/');

    let res = match cli.command {
        Commands::Research { topic } => {
            client
                .post(format!("{}/api/research", base))
                .json(&json!({ "topic": topic }))
                .send()
                .await?
        }
        Commands::Topics { niche } => {
            client
                .post(format!("{}/api/topics", base))
                .json(&json!({ "niche": niche }))
                .send()
                .await?
        }
        Commands::Script {
            niche,
            topic,
            platform,
        } => {
            client
                .post(format!("{}/api/script", base))
                .json(&json!({ "niche": niche, "topic": topic, "platform": platform.as_str() }))
                .send()
                .await?
        }
        Commands::Health => client.get(format!("{}/health", base)).send().await?,
    };

    print_response(res).await
}

async fn print_response(res: reqwest::Response) -> Result<(), Box<dyn std::error::Error>> {
    let status = res.status();
    if !status.is_success() {
        eprintln!("Error: gateway returned status {}", status);
        if let Ok(text) = res.text().await {
            eprintln!("Response: {}", text);
        }
        return Ok(());
    }

    let json: Value = res.json().await?;
    if json.get("success") == Some(&Value::Bool(false)) {
        eprintln!(
            "Upstream rejected the request: {}",
            json.get("message").and_then(Value::as_str).unwrap_or("no message")
        );
    }
    println!("{}", serde_json::to_string_pretty(&json)?);
    Ok(())
}
