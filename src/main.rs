//! healops - Kubernetes diagnostics and LLM chat proxy

use anyhow::Result;
use clap::Parser;
use healops::cli::{Cli, Command};
use healops::commands;
use healops::config::{load_config, load_config_from};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Setup tracing
    setup_tracing(cli.verbose);

    // Handle color settings
    if cli.no_color {
        owo_colors::set_override(false);
    }

    // kube and the AWS SDK both link rustls; pick one provider up front
    let _ = rustls::crypto::ring::default_provider().install_default();

    let config = match &cli.config {
        Some(path) => load_config_from(path)?,
        None => load_config()?,
    }
    .with_overrides(&cli.overrides());

    let result = match cli.command {
        Command::Serve(ref args) => {
            commands::serve(cli.context.as_deref(), config, args).await
        }
        Command::ChatProxy(ref args) => commands::chat_proxy(config, args).await,
        Command::Pods => {
            commands::show_pods(cli.context.as_deref(), &config, cli.output).await
        }
        Command::Analyze(ref args) => commands::analyze(&config, &args.pod, cli.output).await,
        Command::Classify(ref args) => commands::classify_text(&args.text.join(" "), cli.output),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    Ok(())
}

fn setup_tracing(verbose: u8) {
    let filter = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()))
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();
}
