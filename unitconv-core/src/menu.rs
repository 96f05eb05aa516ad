//! Interactive menus
//!
//! Two read-eval loops: the main menu picks a conversion category or opens
//! the history menu; the history menu views, filters, clears or exports
//! the log. An unrecognised choice re-prompts. Exit (main) and Return
//! (history) leave their loops, as does the end of input.

use std::io::Write;
use std::path::PathBuf;

use crate::config::ConverterConfig;
use crate::console::{Console, InputProvider};
use crate::convert::{parse_index, run_conversion};
use crate::error::Result;
use crate::history::{HistoryLog, HistoryQuery};
use crate::units::{Category, unit_system};
use crate::views::{clear_history, export_history, show_history};

/// Main menu entries
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MainChoice {
    Convert(Category),
    History,
    Exit,
}

impl MainChoice {
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            "1" => Some(MainChoice::Convert(Category::Length)),
            "2" => Some(MainChoice::Convert(Category::Volume)),
            "3" => Some(MainChoice::Convert(Category::Temperature)),
            "4" => Some(MainChoice::Convert(Category::Weight)),
            "5" => Some(MainChoice::History),
            "6" => Some(MainChoice::Exit),
            _ => None,
        }
    }
}

/// History menu entries
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HistoryChoice {
    ViewAll,
    ViewLimited,
    FilterByCategory,
    Clear,
    Export,
    Return,
}

impl HistoryChoice {
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            "1" => Some(HistoryChoice::ViewAll),
            "2" => Some(HistoryChoice::ViewLimited),
            "3" => Some(HistoryChoice::FilterByCategory),
            "4" => Some(HistoryChoice::Clear),
            "5" => Some(HistoryChoice::Export),
            "6" => Some(HistoryChoice::Return),
            _ => None,
        }
    }
}

/// Settings shared by every menu action
#[derive(Debug, Clone)]
pub struct Session {
    pub history: HistoryLog,
    pub confirm_clear: bool,
}

impl Session {
    pub fn new(history: HistoryLog) -> Self {
        Self {
            history,
            confirm_clear: true,
        }
    }

    pub fn from_config(config: &ConverterConfig) -> Self {
        Self {
            history: HistoryLog::from_config(&config.history),
            confirm_clear: config.history.confirm,
        }
    }
}

/// Run the main menu until Exit or end of input
pub fn run_main_menu<I, W>(console: &mut Console<I, W>, session: &Session) -> Result<()>
where
    I: InputProvider,
    W: Write,
{
    loop {
        writeln!(console.out(), "\n=== Unit Converter ===")?;
        writeln!(console.out(), "1. Length")?;
        writeln!(console.out(), "2. Volume")?;
        writeln!(console.out(), "3. Temperature")?;
        writeln!(console.out(), "4. Weight")?;
        writeln!(console.out(), "5. History Options")?;
        writeln!(console.out(), "6. Exit")?;

        let Some(choice) = console.prompt("Select an option (1-6): ")? else {
            tracing::debug!("Input closed at main menu");
            return Ok(());
        };

        match MainChoice::parse(&choice) {
            Some(MainChoice::Convert(category)) => {
                run_conversion(console, &session.history, unit_system(category))?;
            }
            Some(MainChoice::History) => run_history_menu(console, session)?,
            Some(MainChoice::Exit) => {
                writeln!(console.out(), "Goodbye!")?;
                return Ok(());
            }
            None => writeln!(console.out(), "Invalid choice. Please try again.")?,
        }
    }
}

/// Run the history menu until Return or end of input
pub fn run_history_menu<I, W>(console: &mut Console<I, W>, session: &Session) -> Result<()>
where
    I: InputProvider,
    W: Write,
{
    let history = &session.history;
    loop {
        writeln!(console.out(), "\n=== History Options ===")?;
        writeln!(console.out(), "1. View All History")?;
        writeln!(console.out(), "2. View Limited History")?;
        writeln!(console.out(), "3. Filter History by Category")?;
        writeln!(console.out(), "4. Clear History")?;
        writeln!(console.out(), "5. Export History to CSV")?;
        writeln!(console.out(), "6. Return to Main Menu")?;

        let Some(choice) = console.prompt("Select an option (1-6): ")? else {
            return Ok(());
        };

        match HistoryChoice::parse(&choice) {
            Some(HistoryChoice::ViewAll) => {
                show_history(console.out(), history, &HistoryQuery::all())?;
            }
            Some(HistoryChoice::ViewLimited) => {
                let Some(answer) = console.prompt("Enter number of entries to show: ")? else {
                    return Ok(());
                };
                match parse_index(&answer) {
                    Ok(limit) => {
                        // Zero or negative shows everything
                        let query = match usize::try_from(limit) {
                            Ok(limit) => HistoryQuery::all().with_limit(limit),
                            Err(_) => HistoryQuery::all(),
                        };
                        show_history(console.out(), history, &query)?;
                    }
                    Err(_) => writeln!(console.out(), "Invalid input. Please enter a number.")?,
                }
            }
            Some(HistoryChoice::FilterByCategory) => {
                writeln!(console.out(), "Available categories:")?;
                for (i, category) in Category::ALL.iter().enumerate() {
                    writeln!(console.out(), "{}. {}", i + 1, category)?;
                }
                let Some(answer) = console.prompt("Select category (1-4): ")? else {
                    return Ok(());
                };
                let category = answer
                    .trim()
                    .parse::<usize>()
                    .ok()
                    .and_then(Category::from_menu_index);
                match category {
                    Some(category) => {
                        let query = HistoryQuery::all().with_category(category.name());
                        show_history(console.out(), history, &query)?;
                    }
                    None => writeln!(console.out(), "Invalid category selection.")?,
                }
            }
            Some(HistoryChoice::Clear) => {
                clear_history(console, history, session.confirm_clear)?;
            }
            Some(HistoryChoice::Export) => {
                let Some(filename) = console.prompt("Enter CSV filename to export to: ")? else {
                    return Ok(());
                };
                match csv_filename(&filename) {
                    Some(path) => {
                        export_history(console.out(), history, &path)?;
                    }
                    None => writeln!(console.out(), "Export cancelled.")?,
                }
            }
            Some(HistoryChoice::Return) => return Ok(()),
            None => writeln!(console.out(), "Invalid choice. Please try again.")?,
        }
    }
}

/// Export target for a user-entered name; `.csv` is appended when missing.
/// An empty name cancels.
pub fn csv_filename(input: &str) -> Option<PathBuf> {
    let name = input.trim();
    if name.is_empty() {
        return None;
    }
    if name.to_lowercase().ends_with(".csv") {
        Some(PathBuf::from(name))
    } else {
        Some(PathBuf::from(format!("{}.csv", name)))
    }
}
