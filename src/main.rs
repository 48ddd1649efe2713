use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use sacredfw::{AppError, FrameworkPaths, RunOptions};

#[derive(Parser)]
#[command(name = "sacredfw")]
#[command(version)]
#[command(
    about = "Deploy the sacred AI framework workspace and run its modules",
    long_about = None
)]
struct Cli {
    /// Framework root directory (defaults to ./sacred_framework)
    #[arg(long, global = true)]
    root: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Create the framework directories, module scripts, and documentation
    #[clap(visible_alias = "i")]
    Init,
    /// Initialize the workspace and run all framework modules
    #[clap(visible_alias = "r")]
    Run {
        /// Interpreter used to invoke module scripts
        #[arg(long)]
        interpreter: Option<String>,
    },
    /// Validate the deployed framework workspace
    #[clap(visible_alias = "d")]
    Doctor {
        /// Output format
        #[arg(long, value_enum, default_value = "text")]
        format: OutputFormat,
    },
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

const BANNER: &str = r#"
  =============================================
       S A C R E D   A I   F R A M E W O R K
                  · 3 · 6 · 9 ·
  =============================================
"#;

fn print_banner() {
    print!("\x1B[2J\x1B[1;1H");
    println!("{BANNER}");
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = execute(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn execute(cli: Cli) -> Result<(), AppError> {
    let paths = match cli.root {
        Some(root) => FrameworkPaths::new(root),
        None => FrameworkPaths::current()?,
    };

    match cli.command {
        None => {
            print_banner();
            sacredfw::run(&paths, RunOptions::default())
        }
        Some(Commands::Init) => sacredfw::init(&paths),
        Some(Commands::Run { interpreter }) => {
            print_banner();
            sacredfw::run(&paths, RunOptions { interpreter })
        }
        Some(Commands::Doctor { format }) => run_doctor(&paths, format),
    }
}

fn run_doctor(paths: &FrameworkPaths, format: OutputFormat) -> Result<(), AppError> {
    let diagnostics = sacredfw::doctor(paths);

    match format {
        OutputFormat::Text => {
            if diagnostics.is_healthy() {
                println!("✅ Framework workspace is healthy");
            } else {
                for issue in diagnostics.issues() {
                    println!("✗ {}: {}", issue.path, issue.message);
                }
            }
        }
        OutputFormat::Json => println!("{}", diagnostics.to_json()?),
    }

    if diagnostics.is_healthy() {
        Ok(())
    } else {
        Err(AppError::Unhealthy(diagnostics.issue_count()))
    }
}
