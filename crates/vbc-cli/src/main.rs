//! VerificaBC CLI

mod repl;

use clap::{Parser, Subcommand};
use tracing::{error, info, Level};
use tracing_subscriber::FmtSubscriber;
use vbc_client::{CheckClient, ClientConfig, BASE_URL_ENV, DEFAULT_BASE_URL};
use vbc_core::report::{self, ReportFormat};
use vbc_core::{Session, SubmitError};

#[derive(Parser)]
#[command(name = "vbc")]
#[command(about = "Check \"valores a receber\" links against the VerificaBC analysis API")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Base URL of the analysis API
    #[arg(long, global = true, env = BASE_URL_ENV, default_value = DEFAULT_BASE_URL)]
    api_url: String,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Check a single URL
    Check {
        /// URL to analyse (must start with http:// or https://)
        url: String,

        /// Print the raw result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Interactive session with history and dashboard
    Session,

    /// Describe the antifraud rules
    Regras,

    /// Describe the solution architecture
    Arquitetura,
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let cli = Cli::parse();

    // Logs go to stderr so stdout stays machine readable
    let log_level = if cli.verbose { Level::DEBUG } else { Level::INFO };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();
    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Failed to set subscriber: {}", e);
    }

    match cli.command {
        Commands::Check { url, json } => {
            let client = build_client(&cli.api_url);
            cmd_check(&client, url, json).await;
        }
        Commands::Session => {
            let client = build_client(&cli.api_url);
            if let Err(e) = repl::run(&client).await {
                error!("Session aborted: {}", e);
                std::process::exit(1);
            }
        }
        Commands::Regras => print!("{}", report::rules_panel()),
        Commands::Arquitetura => print!("{}", report::architecture_panel()),
    }
}

fn build_client(api_url: &str) -> CheckClient {
    match CheckClient::new(&ClientConfig::new(api_url)) {
        Ok(client) => {
            info!("Using analysis API at {}", client.endpoint());
            client
        }
        Err(e) => {
            error!("Cannot use API address: {}", e);
            std::process::exit(2);
        }
    }
}

async fn cmd_check(client: &CheckClient, url: String, json: bool) {
    let mut session = Session::new();
    session.set_input(url);

    match session.submit(client).await {
        Ok(()) => {
            let Some(result) = session.result() else {
                return;
            };
            let format = if json { ReportFormat::Json } else { ReportFormat::Text };

            match report::generate(result, format) {
                Ok(content) => println!("{}", content),
                Err(e) => {
                    error!("Failed to render result: {}", e);
                    std::process::exit(1);
                }
            }
        }
        Err(SubmitError::Invalid(e)) => {
            eprintln!("{}", e);
            std::process::exit(2);
        }
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_api_url_flag() {
        let cli = Cli::try_parse_from(["vbc", "regras", "--api-url", "http://10.0.0.5:8080"]).unwrap();
        assert_eq!(cli.api_url, "http://10.0.0.5:8080");
        assert!(matches!(cli.command, Commands::Regras));

        let cli = Cli::try_parse_from(["vbc", "check", "https://x.com", "--json"]).unwrap();
        assert!(matches!(cli.command, Commands::Check { json: true, .. }));
    }
}
