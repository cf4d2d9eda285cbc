//! CLI command definitions using clap

use crate::config::ConfigOverrides;
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::net::IpAddr;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "healops",
    version,
    about = "Kubernetes diagnostics and LLM chat proxy for HealOps",
    long_about = None,
)]
pub struct Cli {
    /// Kubernetes context to use
    #[arg(long, global = true, env = "HEALOPS_CONTEXT")]
    pub context: Option<String>,

    /// Namespace to inspect
    #[arg(short = 'n', long, global = true, env = "HEALOPS_NAMESPACE")]
    pub namespace: Option<String>,

    /// Config file (defaults to ~/.healops/config.toml)
    #[arg(long, global = true, env = "HEALOPS_CONFIG")]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(short = 'o', long, global = true, value_enum, default_value = "table")]
    pub output: OutputFormat,

    /// Enable verbose logging
    #[arg(short = 'v', long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
    Yaml,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run the diagnostics API (/pods, /analyze, /run_kubectl)
    Serve(ServeArgs),

    /// Run the Bedrock chat proxy (/api/chat, /api/models)
    #[command(name = "chat-proxy", alias = "chat")]
    ChatProxy(ChatProxyArgs),

    /// Show ready and not-ready pods
    #[command(alias = "po")]
    Pods,

    /// Analyze a pod with k8sgpt and classify the findings
    Analyze(AnalyzeArgs),

    /// Classify free text as Developer, DevOps or Unknown
    Classify(ClassifyArgs),
}

#[derive(Args)]
pub struct ServeArgs {
    /// Port to listen on
    #[arg(short = 'p', long, default_value = "8000")]
    pub port: u16,

    /// Address to bind
    #[arg(long, default_value = "127.0.0.1")]
    pub bind: IpAddr,

    /// Analyzer binary
    #[arg(long, env = "HEALOPS_ANALYZER")]
    pub analyzer: Option<String>,

    /// The one program /run_kubectl may execute
    #[arg(long)]
    pub allowed_command: Option<String>,
}

#[derive(Args)]
pub struct ChatProxyArgs {
    /// Port to listen on
    #[arg(short = 'p', long, default_value = "8001")]
    pub port: u16,

    /// Address to bind
    #[arg(long, default_value = "127.0.0.1")]
    pub bind: IpAddr,

    /// AWS region for Bedrock
    #[arg(long, env = "AWS_REGION")]
    pub region: Option<String>,

    /// Answer access-denied errors with a canned troubleshooting reply
    #[arg(long, env = "HEALOPS_DEMO_MODE")]
    pub demo_mode: bool,
}

#[derive(Args)]
pub struct AnalyzeArgs {
    /// Pod name (substring match against analyzer results)
    pub pod: String,

    /// Analyzer binary
    #[arg(long, env = "HEALOPS_ANALYZER")]
    pub analyzer: Option<String>,
}

#[derive(Args)]
pub struct ClassifyArgs {
    /// Text to classify
    #[arg(required = true)]
    pub text: Vec<String>,
}

impl Cli {
    /// Config overrides implied by the global flags and the chosen command
    pub fn overrides(&self) -> ConfigOverrides {
        let mut overrides = ConfigOverrides {
            namespace: self.namespace.clone(),
            ..Default::default()
        };

        match &self.command {
            Command::Serve(args) => {
                overrides.analyzer_bin = args.analyzer.clone();
                overrides.allowed_command = args.allowed_command.clone();
            }
            Command::ChatProxy(args) => {
                overrides.bedrock_region = args.region.clone();
                overrides.demo_mode = args.demo_mode;
            }
            Command::Analyze(args) => {
                overrides.analyzer_bin = args.analyzer.clone();
            }
            Command::Pods | Command::Classify(_) => {}
        }

        overrides
    }
}
