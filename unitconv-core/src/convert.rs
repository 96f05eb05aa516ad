//! Interactive and one-shot conversions

use std::io::Write;

use crate::console::{Console, InputProvider};
use crate::error::{ConvertError, Result};
use crate::history::{ConversionRecord, DISPLAY_HEADERS, HistoryLog};
use crate::table;
use crate::units::{Category, UnitSystem, unit_system};

/// How an interactive conversion ended
#[derive(Debug, Clone, PartialEq)]
pub enum ConversionOutcome {
    /// Result shown; `logged` is false if the history append failed
    Converted {
        record: ConversionRecord,
        logged: bool,
    },
    /// A unit index or value was not a number
    InvalidInput,
    /// A unit index was out of range
    InvalidSelection,
    /// Input ended before all answers were given
    Aborted,
}

/// Walk the user through one conversion in `system`.
///
/// Reads the "from" index, the "to" index and the value, in that order.
/// A non-numeric answer stops the flow at once; the indices are range
/// checked only after all three answers are in.
pub fn run_conversion<I, W>(
    console: &mut Console<I, W>,
    history: &HistoryLog,
    system: &dyn UnitSystem,
) -> Result<ConversionOutcome>
where
    I: InputProvider,
    W: Write,
{
    let units = system.unit_names();
    let max_choice = units.len();

    writeln!(console.out(), "\n=== {} Conversion ===", system.category())?;
    writeln!(console.out(), "Available units:")?;
    for (i, unit) in units.iter().enumerate() {
        writeln!(console.out(), "{}. {}", i + 1, unit)?;
    }

    // Each answer is checked as soon as it is read; a bad one ends the flow
    let from_prompt = format!("Select 'from' unit (1-{}): ", max_choice);
    let from_index = match read_answer(console, &from_prompt, parse_index)? {
        Answer::Value(index) => index,
        Answer::Rejected => return Ok(ConversionOutcome::InvalidInput),
        Answer::Closed => return Ok(ConversionOutcome::Aborted),
    };
    let to_prompt = format!("Select 'to' unit (1-{}): ", max_choice);
    let to_index = match read_answer(console, &to_prompt, parse_index)? {
        Answer::Value(index) => index,
        Answer::Rejected => return Ok(ConversionOutcome::InvalidInput),
        Answer::Closed => return Ok(ConversionOutcome::Aborted),
    };
    let value = match read_answer(console, system.value_prompt(), parse_value)? {
        Answer::Value(value) => value,
        Answer::Rejected => return Ok(ConversionOutcome::InvalidInput),
        Answer::Closed => return Ok(ConversionOutcome::Aborted),
    };

    let selected = select(system, from_index)
        .and_then(|from| select(system, to_index).map(|to| (from, to)));
    let (from_unit, to_unit) = match selected {
        Ok(units) => units,
        Err(e) => {
            tracing::debug!(error = %e, from_index, to_index, "Rejected unit selection");
            writeln!(console.out(), "Invalid unit selection.")?;
            return Ok(ConversionOutcome::InvalidSelection);
        }
    };

    let result = system.convert(from_unit, to_unit, value)?;
    let record = ConversionRecord::now(system.category(), from_unit, to_unit, value, result);
    print_result(console.out(), &record)?;
    let logged = record_conversion(console.out(), history, &record)?;

    Ok(ConversionOutcome::Converted { record, logged })
}

/// Convert by unit names without prompting, print the result and log it.
///
/// Unit names match case-insensitively; the record carries the canonical
/// names.
pub fn convert_once<W: Write>(
    out: &mut W,
    history: &HistoryLog,
    category: Category,
    from_unit: &str,
    to_unit: &str,
    value: f64,
) -> Result<ConversionRecord> {
    let system = unit_system(category);
    let from_unit = system.resolve_unit(from_unit)?;
    let to_unit = system.resolve_unit(to_unit)?;

    let result = system.convert(from_unit, to_unit, value)?;
    let record = ConversionRecord::now(category, from_unit, to_unit, value, result);
    print_result(out, &record)?;
    record_conversion(out, history, &record)?;
    Ok(record)
}

/// Print the one-row result table
pub fn print_result<W: Write>(out: &mut W, record: &ConversionRecord) -> Result<()> {
    writeln!(out, "\n=== Conversion Result ===")?;
    write!(out, "{}", table::render(&DISPLAY_HEADERS, [record.fields()]))?;
    Ok(())
}

/// Append to history; a failure is reported as a warning, never returned
fn record_conversion<W: Write>(
    out: &mut W,
    history: &HistoryLog,
    record: &ConversionRecord,
) -> Result<bool> {
    match history.append(record) {
        Ok(()) => Ok(true),
        Err(e) => {
            tracing::warn!(path = %history.path().display(), error = %e, "Could not log conversion");
            writeln!(out, "Warning: Could not log conversion: {}", e)?;
            Ok(false)
        }
    }
}

/// One prompted answer
enum Answer<T> {
    Value(T),
    Rejected,
    Closed,
}

/// Prompt once and parse the reply, reporting a non-numeric entry
fn read_answer<I, W, T>(
    console: &mut Console<I, W>,
    prompt: &str,
    parse: fn(&str) -> Result<T>,
) -> Result<Answer<T>>
where
    I: InputProvider,
    W: Write,
{
    let Some(text) = console.prompt(prompt)? else {
        return Ok(Answer::Closed);
    };
    match parse(&text) {
        Ok(value) => Ok(Answer::Value(value)),
        Err(e) => {
            tracing::debug!(error = %e, "Rejected conversion input");
            writeln!(console.out(), "Invalid input. Please enter numbers only.")?;
            Ok(Answer::Rejected)
        }
    }
}

fn select(system: &dyn UnitSystem, index: i64) -> Result<&'static str> {
    usize::try_from(index)
        .ok()
        .and_then(|i| system.unit_at(i))
        .ok_or(ConvertError::InvalidSelection)
}

pub(crate) fn parse_index(text: &str) -> Result<i64> {
    text.trim()
        .parse::<i64>()
        .map_err(|_| ConvertError::InvalidInput(format!("not a whole number: {:?}", text)))
}

pub(crate) fn parse_value(text: &str) -> Result<f64> {
    text.trim()
        .parse::<f64>()
        .map_err(|_| ConvertError::InvalidInput(format!("not a number: {:?}", text)))
}
