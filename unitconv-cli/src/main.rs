//! unitconv CLI - interactive unit converter with conversion history

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use unitconv_core::prelude::*;

#[derive(Parser)]
#[command(name = "unitconv")]
#[command(about = "Convert length, volume, temperature and weight units", long_about = None)]
#[command(version)]
struct Cli {
    /// Configuration file, read on its own without env layering
    /// (defaults to unitconv.toml, UNITCONV_CONFIG_PATH and UNITCONV_* variables)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// History file to read and append to
    #[arg(long, global = true)]
    history_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive menu (the default)
    Menu,
    /// Convert a single value and log it
    Convert {
        /// Category: length, volume, temperature or weight
        category: Category,
        /// Unit to convert from
        from: String,
        /// Unit to convert to
        to: String,
        /// Value to convert
        #[arg(allow_negative_numbers = true)]
        value: f64,
    },
    /// List the available units
    Units {
        /// Only this category
        category: Option<Category>,
    },
    /// Conversion history commands
    History {
        #[command(subcommand)]
        command: HistoryCommands,
    },
    /// Version information
    Version,
}

#[derive(Subcommand)]
enum HistoryCommands {
    /// Show recorded conversions, newest first
    Show {
        /// Only the N most recent entries
        #[arg(short, long)]
        limit: Option<usize>,
        /// Only one category
        #[arg(short, long)]
        category: Option<Category>,
        /// Print records as JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Empty the history file
    Clear {
        /// Do not ask for confirmation
        #[arg(short, long)]
        yes: bool,
    },
    /// Export the history to a CSV file
    Export {
        /// Destination CSV file
        path: PathBuf,
    },
}

fn load_config(cli: &Cli) -> Result<ConverterConfig> {
    let mut config = match cli.config {
        Some(ref path) => ConverterConfig::from_file(path)?,
        None => ConverterConfig::load()?,
    };
    if let Some(ref path) = cli.history_file {
        config.history.path = path.clone();
    }
    config.validate()?;
    Ok(config)
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = load_config(&cli).context("Failed to load configuration")?;

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.log.level)),
        )
        .init();

    tracing::debug!(history = %config.history.path.display(), "Configuration loaded");
    let session = Session::from_config(&config);

    match cli.command.unwrap_or(Commands::Menu) {
        Commands::Menu => {
            let mut console = Console::stdio();
            run_main_menu(&mut console, &session)?;
        }
        Commands::Convert {
            category,
            from,
            to,
            value,
        } => {
            let mut out = std::io::stdout();
            convert_once(&mut out, &session.history, category, &from, &to, value)?;
        }
        Commands::Units { category } => {
            let categories = match category {
                Some(category) => vec![category],
                None => Category::ALL.to_vec(),
            };
            for category in categories {
                println!("{}:", category);
                for unit in unit_system(category).unit_names() {
                    println!("  {}", unit);
                }
            }
        }
        Commands::History { command } => match command {
            HistoryCommands::Show {
                limit,
                category,
                json,
            } => {
                let mut query = HistoryQuery::all();
                if let Some(limit) = limit {
                    query = query.with_limit(limit);
                }
                if let Some(category) = category {
                    query = query.with_category(category.name());
                }

                if json {
                    let records = match session.history.query(&query) {
                        Ok(page) => page.records,
                        Err(ConvertError::EmptyHistory) => Vec::new(),
                        Err(e) => return Err(e.into()),
                    };
                    println!("{}", serde_json::to_string_pretty(&records)?);
                } else {
                    show_history(&mut std::io::stdout(), &session.history, &query)?;
                }
            }
            HistoryCommands::Clear { yes } => {
                let mut console = Console::stdio();
                let confirm = session.confirm_clear && !yes;
                if clear_history(&mut console, &session.history, confirm)? == ClearOutcome::Failed {
                    std::process::exit(1);
                }
            }
            HistoryCommands::Export { path } => {
                if !export_history(&mut std::io::stdout(), &session.history, &path)? {
                    std::process::exit(1);
                }
            }
        },
        Commands::Version => {
            println!("unitconv {}", env!("CARGO_PKG_VERSION"));
            println!("unitconv-core {}", unitconv_core::VERSION);
        }
    }

    Ok(())
}
