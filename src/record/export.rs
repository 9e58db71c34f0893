//! Flattening a move log into a table.
//!
//! The column layout is the historical one used for analysis: final
//! positions, initial positions, acting player, acting token.

use super::log::MoveLog;
use super::move_record::MoveRecord;

/// A move log as column headers plus one integer row per move.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MoveTable {
    /// Column headers.
    pub columns: Vec<String>,
    /// One row per move, oldest first.
    pub rows: Vec<Vec<u32>>,
}

impl MoveTable {
    /// Flatten `log`.
    #[must_use]
    pub fn from_log(log: &MoveLog) -> Self {
        Self {
            columns: MoveRecord::column_names(log.player_count(), log.tokens_per_player()),
            rows: log.iter().map(MoveRecord::to_row).collect(),
        }
    }

    /// Render as comma-separated text with a header line.
    #[must_use]
    pub fn to_csv(&self) -> String {
        let mut out = self.columns.join(",");
        out.push('\n');
        for row in &self.rows {
            let cells: Vec<String> = row.iter().map(u32::to_string).collect();
            out.push_str(&cells.join(","));
            out.push('\n');
        }
        out
    }

    /// Render as a right-aligned text table with a row index column.
    #[must_use]
    pub fn to_text(&self) -> String {
        let index_width = self.rows.len().saturating_sub(1).to_string().len();
        let widths: Vec<usize> = self
            .columns
            .iter()
            .enumerate()
            .map(|(i, name)| {
                self.rows
                    .iter()
                    .map(|row| row[i].to_string().len())
                    .chain(std::iter::once(name.len()))
                    .max()
                    .unwrap_or(0)
            })
            .collect();

        let mut out = format!("{:index_width$}", "");
        for (name, width) in self.columns.iter().zip(&widths) {
            out.push_str(&format!("  {name:>width$}"));
        }
        out.push('\n');

        for (index, row) in self.rows.iter().enumerate() {
            out.push_str(&format!("{index:>index_width$}"));
            for (value, width) in row.iter().zip(&widths) {
                out.push_str(&format!("  {value:>width$}"));
            }
            out.push('\n');
        }
        out
    }
}
