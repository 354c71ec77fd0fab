//! Grid layout tables for the roll composer.
//!
//! A layout is a plain owned value: rows of cells, the row that shows the
//! edit buffer instead of a selection, and a per-row bias marking the
//! centered column. Alternate layouts can be swapped in without touching
//! composer logic.

use super::errors::{LayoutError, LayoutResult};
use serde::{Deserialize, Serialize};

/// One selectable grid cell: a literal character or an editing command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Cell {
    Char(char),
    Tab,
    Shift,
    Backspace,
    Space,
    Enter,
    Delete,
    CapsLock,
}

impl Cell {
    /// The label shown when the cell's row is rendered.
    pub fn label(&self) -> String {
        match self {
            Cell::Char(ch) => ch.to_string(),
            Cell::Tab => "Tab".to_string(),
            Cell::Shift => "SHFT".to_string(),
            Cell::Backspace => "BS".to_string(),
            Cell::Space => " ".to_string(),
            Cell::Enter => "Enter".to_string(),
            Cell::Delete => "DEL".to_string(),
            Cell::CapsLock => "CL".to_string(),
        }
    }
}

/// A character grid for the roll composer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Layout {
    /// Rows of selectable cells, top to bottom.
    pub rows: Vec<Vec<Cell>>,
    /// Index of the row that displays the buffer and cursor.
    pub text_row: usize,
    /// Per-row index of the visually centered column.
    pub bias: Vec<i32>,
}

impl Layout {
    /// Checks the structural invariants the composers rely on. Called
    /// once at composer start so malformed tables fail before any event
    /// is consumed.
    pub fn validate(&self) -> LayoutResult<()> {
        if self.bias.len() != self.rows.len() {
            return Err(LayoutError::BiasMismatch {
                biases: self.bias.len(),
                rows: self.rows.len(),
            });
        }
        if self.text_row >= self.rows.len() {
            return Err(LayoutError::TextRowOutOfBounds {
                text_row: self.text_row,
                rows: self.rows.len(),
            });
        }
        for (row, cells) in self.rows.iter().enumerate() {
            if cells.is_empty() {
                return Err(LayoutError::EmptyRow(row));
            }
            let bias = self.bias[row];
            if bias < 0 || bias as usize >= cells.len() {
                return Err(LayoutError::BiasOutOfRange {
                    row,
                    bias,
                    width: cells.len(),
                });
            }
        }
        Ok(())
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn row(&self, row: usize) -> &[Cell] {
        &self.rows[row]
    }

    /// Clamps a bias-relative column into the valid range for `row`.
    pub fn clamp_col(&self, row: usize, col: i32) -> i32 {
        let bias = self.bias[row];
        let width = self.rows[row].len() as i32;
        col.min(width - bias - 1).max(-bias)
    }

    /// The absolute cell index addressed by a bias-relative column.
    pub fn absolute_col(&self, row: usize, col: i32) -> usize {
        (self.bias[row] + col) as usize
    }

    /// Widest possible rendered row: label widths plus joining spaces,
    /// selection markers, and one column of slack.
    pub fn max_display_width(&self) -> usize {
        self.rows
            .iter()
            .map(|cells| {
                let labels: usize = cells.iter().map(|c| c.label().chars().count()).sum();
                labels + cells.len() + 1
            })
            .max()
            .unwrap_or(0)
    }
}

/// The built-in layout: symbol and digit rows above the text row, the
/// command row directly below it, then the letter rows, ordered roughly
/// by frequency so common letters sit nearest the text row.
pub fn reference_layout() -> Layout {
    let chars = |s: &str| s.chars().map(Cell::Char).collect::<Vec<_>>();
    Layout {
        rows: vec![
            chars("`#+*\\^~"),
            chars("%[!'/]@"),
            chars("&{?(\")=}<"),
            chars("|$_-,.;:>"),
            chars("8432015967"),
            chars(" "),
            vec![
                Cell::Tab,
                Cell::Shift,
                Cell::Backspace,
                Cell::Space,
                Cell::Enter,
                Cell::Delete,
                Cell::CapsLock,
            ],
            chars("hoeti"),
            chars("mrand"),
            chars("kgcslfp"),
            chars("zqvwuybxj"),
        ],
        text_row: 5,
        bias: vec![3, 3, 4, 4, 4, 0, 3, 2, 2, 3, 4],
    }
}
