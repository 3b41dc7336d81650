use std::env;
use std::process::ExitCode;

use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let raw_args: Vec<String> = env::args().collect();
    let command = raw_args.get(1).cloned();
    match command.as_deref() {
        Some("serve") => {
            let port = raw_args
                .get(2)
                .and_then(|s| s.parse::<u16>().ok())
                .unwrap_or(8080);
            if let Err(e) = taxtrap::api::run_http_server(port).await {
                tracing::error!("Server error: {e}");
                return ExitCode::FAILURE;
            }
            ExitCode::SUCCESS
        }
        Some("series") => {
            let args =
                std::iter::once("taxtrap series".to_string()).chain(raw_args.into_iter().skip(2));
            match taxtrap::api::run_cli(args) {
                Ok(json) => {
                    println!("{json}");
                    ExitCode::SUCCESS
                }
                Err(e) => {
                    tracing::error!("{e}");
                    ExitCode::FAILURE
                }
            }
        }
        _ => {
            eprintln!("Usage: taxtrap serve [port]");
            eprintln!(
                "       taxtrap series [--state NAME] [--max-income N] [--dependents N] \
                 [--credit ID]... [--no-danger-zones]"
            );
            ExitCode::FAILURE
        }
    }
}
