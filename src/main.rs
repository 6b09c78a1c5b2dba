use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::{debug, error};

/// Two-pass map/reduce matrix multiplication
#[derive(Parser)]
#[command(name = "matpass")]
#[command(about = "Multiply matrices as two chained map/reduce passes", long_about = None)]
struct Cli {
    /// Enable verbose output (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Pair A and B cells per (i,k,j) position and multiply them
    Pass1 {
        /// Directory of replicated cell records
        input: PathBuf,
        /// Fresh directory for the (i,k,j) products
        output: PathBuf,
    },
    /// Project (i,k,j) down to (i,j) and sum the partial products
    Pass2 {
        /// Directory holding pass 1 output
        input: PathBuf,
        /// Fresh directory for the final C(i,j) cells
        output: PathBuf,
    },
}

fn main() {
    let cli = Cli::parse();

    let log_level = match cli.verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(log_level)
        .with_target(cli.verbose >= 2)
        .init();

    debug!("matpass started with verbosity level: {}", cli.verbose);

    if let Err(e) = run(cli.command) {
        error!("Fatal error: {}", e);
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run(command: Commands) -> anyhow::Result<()> {
    match command {
        Commands::Pass1 { input, output } => matpass::job::pass1().run(&input, &output)?,
        Commands::Pass2 { input, output } => matpass::job::pass2().run(&input, &output)?,
    }
    Ok(())
}
