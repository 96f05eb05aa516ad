//! # unitconv - interactive unit conversion with a conversion history
//!
//! Converts length, volume, weight and temperature values and keeps a
//! plain-text log of every conversion that can be listed, filtered,
//! cleared or exported to CSV.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use unitconv_core::prelude::*;
//!
//! fn main() -> Result<()> {
//!     let config = ConverterConfig::load()?;
//!     let session = Session::from_config(&config);
//!
//!     let mut console = Console::stdio();
//!     run_main_menu(&mut console, &session)
//! }
//! ```
//!
//! ## Architecture
//!
//! - **Units**: scalar tables pivoting through a base unit, plus an affine
//!   temperature converter, both behind [`units::UnitSystem`]
//! - **History**: append-only `" | "`-delimited log scanned lazily
//! - **Console**: prompts go through [`console::InputProvider`], so every
//!   flow runs against canned input in tests
//! - **Menus**: the main and history read-eval loops

pub mod config;
pub mod console;
pub mod convert;
pub mod error;
pub mod history;
pub mod menu;
pub mod table;
pub mod units;
pub mod views;

/// Current library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Re-export commonly used types
pub mod prelude {
    pub use crate::config::{ConfigBuilder, ConverterConfig, HistoryConfig, LogConfig};
    pub use crate::console::{Console, InputProvider, ScriptedInput, StdinInput};
    pub use crate::convert::{ConversionOutcome, convert_once, print_result, run_conversion};
    pub use crate::error::{ConvertError, Result};
    pub use crate::history::{ConversionRecord, HistoryLog, HistoryPage, HistoryQuery};
    pub use crate::menu::{HistoryChoice, MainChoice, Session, run_history_menu, run_main_menu};
    pub use crate::units::{Category, TemperatureScale, UnitSystem, UnitTable, unit_system};
    pub use crate::views::{ClearOutcome, clear_history, export_history, show_history};
}
