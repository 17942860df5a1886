use clap::{Parser, Subcommand};
use clap_complete::Shell;

#[derive(Parser, Debug)]
#[command(name = "acm-lookup")]
#[command(version = "1.0.0")]
#[command(about = "Find the ARN of an AWS Certificate Manager certificate by domain")]
#[command(long_about = None)]
pub struct Cli {
    /// AWS region of the certificate manager
    #[arg(long, env = "AWS_REGION", global = true)]
    pub region: Option<String>,

    /// Override the service endpoint (e.g. a local emulator)
    #[arg(long, env = "AWS_ENDPOINT_URL_ACM", global = true)]
    pub endpoint_url: Option<String>,

    /// Config file path (default: ~/.config/acm-lookup/config.yaml)
    #[arg(long, global = true)]
    pub config: Option<String>,

    /// Enable verbose logging (repeat for more verbosity: -v INFO, -vv DEBUG, -vvv TRACE)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Output raw tab-separated values (no formatting)
    #[arg(short, long, global = true)]
    pub raw: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Resolve a domain to exactly one certificate ARN
    Lookup {
        /// Domain name to match exactly
        #[arg(long, short = 'd')]
        domain: String,
        /// Certificate statuses to search (comma-separated, default: ISSUED)
        #[arg(long, value_delimiter = ',')]
        statuses: Vec<String>,
        /// Certificate types to accept (comma-separated): AMAZON_ISSUED,IMPORTED,PRIVATE.
        /// Without any type no certificate is ever selected.
        #[arg(long, value_delimiter = ',')]
        types: Vec<String>,
        /// Pick the newest certificate when several match
        #[arg(long)]
        most_recent: bool,
    },
    /// List certificate summaries
    List {
        /// Certificate statuses to list (comma-separated, default: ISSUED)
        #[arg(long, value_delimiter = ',')]
        statuses: Vec<String>,
        /// Only show certificates for this exact domain
        #[arg(long, short = 'd')]
        domain: Option<String>,
        /// Columns to display (comma-separated): domain,status,arn
        #[arg(long)]
        columns: Option<String>,
    },
    /// Generate shell completion scripts
    Completion {
        #[command(subcommand)]
        command: CompletionCommands,
    },
    /// Internal completion helpers (hidden)
    #[command(hide = true)]
    CompletionHelper {
        #[command(subcommand)]
        command: CompletionHelperCommands,
    },
}

#[derive(Subcommand, Debug)]
pub enum CompletionCommands {
    /// Generate bash completion script
    Bash,
    /// Generate zsh completion script
    Zsh,
    /// Generate fish completion script
    Fish,
    /// Generate PowerShell completion script
    PowerShell,
}

impl CompletionCommands {
    pub fn shell(&self) -> Shell {
        match self {
            CompletionCommands::Bash => Shell::Bash,
            CompletionCommands::Zsh => Shell::Zsh,
            CompletionCommands::Fish => Shell::Fish,
            CompletionCommands::PowerShell => Shell::PowerShell,
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum CompletionHelperCommands {
    /// List certificate statuses for completion
    Statuses,
    /// List certificate types for completion
    Types,
    /// List columns for completion
    Columns,
}
