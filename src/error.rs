use thiserror::Error;

/// Reasons why two trees cannot be compared.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// The [CostMatrix][crate::CostMatrix] does not have one row per node of the first tree
    /// plus the insertion row, and one column per node of the second tree plus the deletion
    /// column.
    #[error("expected a {}x{} cost matrix, found {}x{}", .expected.0, .expected.1, .found.0, .found.1)]
    Dimensions {
        expected: (usize, usize),
        found: (usize, usize),
    },

    /// The rows of a [CostMatrix][crate::CostMatrix] differ in length.
    #[error("the rows of the cost matrix differ in length")]
    Ragged,

    /// A cost is negative, infinite or not a number.
    #[error("invalid cost {cost} at row {row}, column {column}")]
    InvalidCost { row: usize, column: usize, cost: f64 },

    /// A label does not index a node of its tree.
    #[error("label {label} is out of range for a tree of {size} nodes")]
    LabelOutOfRange { label: usize, size: usize },

    /// Two nodes of the same tree share a label.
    #[error("label {0} is used more than once")]
    DuplicateLabel(usize),

    /// The fixed-point scale is zero, negative or not finite.
    #[error("invalid scale factor {0}")]
    InvalidScale(f64),

    /// Scaled costs would overflow the integers the search runs on.
    #[error("scaled costs overflow, choose a smaller scale factor")]
    Overflow,

    /// The search was not allowed to evaluate a single ordering.
    #[error("the ordering budget must allow at least one ordering")]
    EmptyBudget,
}
