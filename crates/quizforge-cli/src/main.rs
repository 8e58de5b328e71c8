//! quizforge CLI — the user-facing command-line interface.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "quizforge", version, about = "Randomized training assessment generator")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a randomized assessment
    Generate {
        /// Assessment type: module, final, practice
        #[arg(long = "type", default_value = "module")]
        assessment_type: String,

        /// Module tags to draw questions from (comma-separated)
        #[arg(long, default_value = "introduction,deployment")]
        modules: String,

        /// Number of questions to select
        #[arg(long, default_value = "20")]
        questions: usize,

        /// Difficulty mix as level=fraction pairs (comma-separated)
        #[arg(long, default_value = "easy=0.3,medium=0.5,hard=0.2")]
        mix: String,

        /// Output format: json, html
        #[arg(long, default_value = "json")]
        format: String,

        /// Explicit output filename
        #[arg(long)]
        output: Option<PathBuf>,

        /// Question bank TOML file or directory (built-in bank if omitted)
        #[arg(long)]
        bank: Option<PathBuf>,
    },

    /// Validate question bank TOML files
    Validate {
        /// Path to bank file or directory
        #[arg(long)]
        bank: PathBuf,
    },

    /// List module tags available in a question bank
    ListModules {
        /// Question bank TOML file or directory (built-in bank if omitted)
        #[arg(long)]
        bank: Option<PathBuf>,
    },

    /// Create a starter question bank
    Init,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("quizforge=info".parse().unwrap()),
        )
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Generate {
            assessment_type,
            modules,
            questions,
            mix,
            format,
            output,
            bank,
        } => commands::generate::execute(
            assessment_type,
            modules,
            questions,
            mix,
            format,
            output,
            bank,
        ),
        Commands::Validate { bank } => commands::validate::execute(bank),
        Commands::ListModules { bank } => commands::list_modules::execute(bank),
        Commands::Init => commands::init::execute(),
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
