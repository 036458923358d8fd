use std::io::{IsTerminal, Read};
use std::process::ExitCode;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use lib::analysis::dispatcher::{Analyzer, RequestMode};
use lib::analysis::transport::{ClientConfig, HttpTransport, Transport};
use lib::env_keys::{DEFAULT_DETECTOR_URL, DEFAULT_TIMEOUT_SECS, EMOTION_DETECTOR_URL, REQUEST_TIMEOUT_SECS};
use tracing_subscriber::EnvFilter;


/// Send text to the emotion detector and print the scores.
#[derive(Parser, Debug)]
#[command(name = "analyze", version)]
struct Args {
    /// Text to analyze; read from stdin when omitted
    text: Vec<String>,

    /// Base url of the detector service
    #[arg(long, env = EMOTION_DETECTOR_URL, default_value = DEFAULT_DETECTOR_URL)]
    url: String,

    /// Request timeout in seconds
    #[arg(long, env = REQUEST_TIMEOUT_SECS, default_value_t = DEFAULT_TIMEOUT_SECS)]
    timeout: u64,

    /// Use the json endpoint instead of the text one
    #[arg(long)]
    structured: bool,

    /// Print the analyzer state as json
    #[arg(long)]
    json: bool,

    /// Only check the service health
    #[arg(long)]
    health: bool,
}

impl Args {
    fn client_config(&self) -> ClientConfig {
        ClientConfig {
            base_url: self.url.clone(),
            timeout: Duration::from_secs(self.timeout),
        }
    }

    fn request_mode(&self) -> RequestMode {
        if self.structured { RequestMode::Structured } else { RequestMode::Text }
    }

    fn input(&self) -> Result<String> {
        if !self.text.is_empty() {
            return Ok(self.text.join(" "));
        }
        let mut stdin = std::io::stdin();
        if stdin.is_terminal() {
            return Ok(String::new());
        }
        let mut buffer = String::new();
        stdin.read_to_string(&mut buffer).context("Error reading stdin")?;
        Ok(buffer)
    }
}


#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    match run(&args).await {
        Ok(code) => code,
        Err(error) => {
            eprintln!("{:#}", error);
            ExitCode::FAILURE
        },
    }
}

async fn run(args: &Args) -> Result<ExitCode> {
    let config = args.client_config();
    let transport = Arc::new(HttpTransport::new(&config)?);

    if args.health {
        let body = transport.get_text(&config.endpoint("/health")).await?;
        println!("{}", body);
        return Ok(ExitCode::SUCCESS);
    }

    let analyzer = Analyzer::new(transport, config, args.request_mode());
    let outcome = analyzer.submit(&args.input()?).await;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&analyzer.state())?);
    }

    match outcome {
        Ok(view) => {
            if !args.json {
                for line in view.to_lines() {
                    println!("{}", line);
                }
            }
            Ok(ExitCode::SUCCESS)
        },
        Err(error) => {
            tracing::debug!("analysis failed: {:?}", error);
            eprintln!("{}", error.user_message());
            Ok(ExitCode::FAILURE)
        },
    }
}
