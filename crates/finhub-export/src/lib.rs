//! finhub-export
//!
//! One-way CSV serialization of a full projection: one row per plan day.
//! The engine has no import or parsing responsibility for this format.

use std::{fs, io, path::Path};

use thiserror::Error;

use finhub_domain::{PlanDay, PlanProjection};

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

const CSV_HEADER: &str =
    "Date,Week,Income,Expenses,Pot Contributions,Balance,Status,Recommendations";

/// Renders plan days as comma-separated rows with quoted text columns.
pub struct CsvExporter;

impl CsvExporter {
    /// Serializes the whole projection, header row first, days in date
    /// order.
    pub fn render(projection: &PlanProjection) -> String {
        let mut out = String::with_capacity(projection.day_count() * 96);
        out.push_str(CSV_HEADER);
        out.push('\n');
        for day in projection.days() {
            out.push_str(&Self::render_day(day));
            out.push('\n');
        }
        out
    }

    /// Writes the rendered CSV to disk.
    pub fn write_to_path(projection: &PlanProjection, path: &Path) -> Result<(), ExportError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, Self::render(projection))?;
        Ok(())
    }

    fn render_day(day: &PlanDay) -> String {
        let expenses = join_pairs(day.expenses.iter().map(|c| (c.name.as_str(), c.amount)));
        let pots = join_pairs(
            day.pot_contributions
                .iter()
                .map(|c| (c.pot_name.as_str(), c.amount)),
        );
        let recommendations = day.recommendations.join("; ");

        format!(
            "{},{},{:.2},{},{},{:.2},{},{}",
            day.date,
            day.week_of_month,
            day.income,
            quote(&expenses),
            quote(&pots),
            day.balance_after,
            quote(&day.status.to_string()),
            quote(&recommendations),
        )
    }
}

/// Semicolon-joined `name:amount` pairs for a row's list column.
fn join_pairs<'a>(pairs: impl Iterator<Item = (&'a str, f64)>) -> String {
    pairs
        .map(|(name, amount)| format!("{}:{:.2}", name, amount))
        .collect::<Vec<_>>()
        .join(";")
}

/// Double-quotes a text field, doubling any embedded quotes.
fn quote(field: &str) -> String {
    format!("\"{}\"", field.replace('"', "\"\""))
}
