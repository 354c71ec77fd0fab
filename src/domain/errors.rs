#[derive(Debug, Clone, PartialEq)]
pub enum LayoutError {
    TextRowOutOfBounds { text_row: usize, rows: usize },
    BiasMismatch { biases: usize, rows: usize },
    EmptyRow(usize),
    BiasOutOfRange { row: usize, bias: i32, width: usize },
}

impl std::fmt::Display for LayoutError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LayoutError::TextRowOutOfBounds { text_row, rows } => {
                write!(f, "Text row {} out of bounds for {} rows", text_row, rows)
            }
            LayoutError::BiasMismatch { biases, rows } => {
                write!(f, "{} bias entries for {} rows", biases, rows)
            }
            LayoutError::EmptyRow(row) => {
                write!(f, "Row {} is empty", row)
            }
            LayoutError::BiasOutOfRange { row, bias, width } => {
                write!(f, "Bias {} out of range for row {} of width {}", bias, row, width)
            }
        }
    }
}

impl std::error::Error for LayoutError {}

pub type LayoutResult<T> = Result<T, LayoutError>;
