use anyhow::Result;
use clap::{Parser, Subcommand};
mod auth;
use lockbox::{Direction, process_file};
use std::path::PathBuf;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

#[derive(Debug, Parser)]
#[command(name = "lockbox")]
#[command(
    version,
    about = "Password-based single-file encryption tool with streaming I/O."
)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Encrypts a file, writing <file>.enc next to it
    #[command(arg_required_else_help = true)]
    Encrypt { path: PathBuf },

    /// Decrypts a .enc file, restoring the original name next to it
    #[command(arg_required_else_help = true)]
    Decrypt { path: PathBuf },
}

fn main() -> Result<()> {
    let args = Cli::parse();

    let level = if args.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let password = auth::read_password()?;

    match args.command {
        Commands::Encrypt { path } => {
            let output = process_file(&path, &password, Direction::Encrypt)?;
            println!("encrypted to {}", output.display());
        }
        Commands::Decrypt { path } => {
            let output = process_file(&path, &password, Direction::Decrypt)?;
            println!("decrypted to {}", output.display());
        }
    }

    Ok(())
}
