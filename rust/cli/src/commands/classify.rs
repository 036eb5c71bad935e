//! Classify command handler: pattern and category of user-supplied cards.

use std::io::Write;

use handsim_engine::hand::analyze_cards;

use crate::error::CliError;
use crate::formatters::format_classification;
use crate::ui;
use crate::validation::parse_cards;

/// Handle the classify command.
///
/// Every malformed or duplicate label is reported on `err` before failing
/// with `CliError::InvalidInput`.
pub fn handle_classify_command(
    labels: &[String],
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<(), CliError> {
    let cards = match parse_cards(labels) {
        Ok(cards) => cards,
        Err(errors) => {
            for e in &errors {
                ui::write_error(err, &e.to_string())?;
            }
            return Err(CliError::InvalidInput(format!(
                "{} invalid card label(s)",
                errors.len()
            )));
        }
    };
    let analysis = analyze_cards(&cards);
    writeln!(out, "{}", format_classification(&cards, &analysis, false))?;
    Ok(())
}
