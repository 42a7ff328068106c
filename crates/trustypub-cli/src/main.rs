//! trustypub CLI - sign, check, publish, and fetch nanopublications.

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;
mod output;

use commands::{check, fetch, keygen, publish, sign};

#[derive(Parser)]
#[command(name = "trustypub")]
#[command(version)]
#[command(about = "Sign, check, publish, and fetch nanopublications")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Sign a nanopublication file and write the signed copy next to it
    Sign {
        /// Path to a TriG file holding one nanopublication
        file: String,
        /// Path to a private key used to sign
        #[arg(short, long)]
        key: Option<String>,
        /// Path to a profile.toml file (default: ~/.trustypub/profile.toml)
        #[arg(short, long)]
        profile: Option<String>,
    },
    /// Check integrity and authenticity of a nanopublication file
    Check {
        /// Path to a TriG file holding one nanopublication
        file: String,
        /// Output the report as JSON
        #[arg(long)]
        json: bool,
    },
    /// Sign (if needed) and publish a nanopublication
    Publish {
        /// Path to a TriG file holding one nanopublication
        file: String,
        /// Path to a private key used to sign
        #[arg(short, long)]
        key: Option<String>,
        /// Path to a profile.toml file (default: ~/.trustypub/profile.toml)
        #[arg(short, long)]
        profile: Option<String>,
        /// Registry server URL (default: the test server)
        #[arg(short, long)]
        server: Option<String>,
    },
    /// Fetch a nanopublication by trusty identifier or URI
    Fetch {
        /// Trusty identifier or full URI
        identity: String,
        /// Registry server URL (default: the test server)
        #[arg(short, long)]
        server: Option<String>,
    },
    /// Generate a key pair and profile skeleton
    Keygen {
        /// Directory to write id_rsa, id_rsa.pub, and profile.toml into
        /// (default: ~/.trustypub)
        #[arg(short, long)]
        dir: Option<String>,
    },
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Sign { file, key, profile } => sign::run(file, key, profile),
        Commands::Check { file, json } => check::run(file, json),
        Commands::Publish {
            file,
            key,
            profile,
            server,
        } => publish::run(file, key, profile, server).await,
        Commands::Fetch { identity, server } => fetch::run(identity, server).await,
        Commands::Keygen { dir } => keygen::run(dir),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
