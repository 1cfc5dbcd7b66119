use clap::{Parser, Subcommand};

mod commands;
mod output;

#[derive(Parser)]
#[command(name = "corr-check")]
#[command(about = "Pearson correlation significance checker", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze one or more JSON dataset files
    Analyze {
        /// Dataset files to analyze
        #[arg(short, long, num_args = 1.., required = true)]
        files: Vec<String>,
    },
    /// Analyze the built-in reference dataset
    Demo {
        /// Confidence probability override (defaults to the fixture's 0.95)
        #[arg(long)]
        confidence: Option<f64>,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    match cli.command {
        Commands::Analyze { files } => commands::run_analyze(&files)?,
        Commands::Demo { confidence } => commands::run_demo(confidence)?,
    }

    Ok(())
}
