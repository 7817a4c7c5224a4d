//! gradebook CLI — the user-facing command-line interface.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

mod commands;
mod config;

#[derive(Parser)]
#[command(name = "gradebook", version, about = "Student grade tracker")]
struct Cli {
    /// Config file path
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive menu (the default)
    Menu,

    /// Print every student's grades
    View {
        /// Roster JSON file (default: data_file from config)
        #[arg(long)]
        file: Option<PathBuf>,
    },

    /// Print averages for all students, or one
    Average {
        /// Roster JSON file (default: data_file from config)
        #[arg(long)]
        file: Option<PathBuf>,

        /// Only this student
        #[arg(long)]
        student: Option<String>,
    },

    /// Record grades for a student and save
    Add {
        /// Student name
        #[arg(long)]
        student: String,

        /// Grade entry as SUBJECT=VALUE (repeatable)
        #[arg(long = "grade", value_name = "SUBJECT=VALUE")]
        grades: Vec<String>,

        /// Roster JSON file (default: data_file from config)
        #[arg(long)]
        file: Option<PathBuf>,
    },

    /// Create a starter gradebook.toml
    Init,
}

fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("gradebook=info".parse().unwrap()),
        )
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let load_config = || config::load_config_from(cli.config.as_deref());

    match cli.command.unwrap_or(Commands::Menu) {
        Commands::Init => commands::init::execute(),
        Commands::Menu => commands::menu::execute(&load_config()?),
        Commands::View { file } => {
            let config = load_config()?;
            commands::view::execute(&file.unwrap_or(config.data_file))
        }
        Commands::Average { file, student } => {
            let config = load_config()?;
            commands::average::execute(&file.unwrap_or(config.data_file), student)
        }
        Commands::Add {
            student,
            grades,
            file,
        } => {
            let config = load_config()?;
            let file = file.unwrap_or_else(|| config.data_file.clone());
            commands::add::execute(&file, student, grades, &config)
        }
    }
}
