//! Error types for tabulated functions.

use thiserror::Error;

/// Errors raised by tabulated function constructors and mutators.
///
/// A mutator that returns one of these leaves the function exactly as it was
/// before the call.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FunctionError {
    /// The constructor arguments cannot describe a function with at least
    /// two ascending points.
    #[error("cannot construct tabulated function: {reason}")]
    Construction { reason: ConstructionReason },

    /// An index-taking accessor or mutator received an index outside
    /// `[0, count)`.
    #[error("index {index} is out of bounds for points count {count}")]
    IndexOutOfBounds { index: usize, count: usize },

    /// The update or insertion would break strictly ascending x order.
    #[error("point breaks ascending order: {reason}")]
    Ordering { reason: OrderingReason },

    /// Deletion attempted while the function holds only the minimum number
    /// of points.
    #[error("cannot delete from a function with {count} points: at least two are required")]
    MinimumSize { count: usize },
}

impl FunctionError {
    pub fn is_construction_error(&self) -> bool {
        matches!(self, FunctionError::Construction { .. })
    }

    pub fn is_index_error(&self) -> bool {
        matches!(self, FunctionError::IndexOutOfBounds { .. })
    }

    pub fn is_ordering_error(&self) -> bool {
        matches!(self, FunctionError::Ordering { .. })
    }

    pub fn is_state_error(&self) -> bool {
        matches!(self, FunctionError::MinimumSize { .. })
    }
}

impl From<ConstructionReason> for FunctionError {
    fn from(reason: ConstructionReason) -> Self {
        FunctionError::Construction { reason }
    }
}

impl From<OrderingReason> for FunctionError {
    fn from(reason: OrderingReason) -> Self {
        FunctionError::Ordering { reason }
    }
}

/// Why a constructor refused its arguments.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConstructionReason {
    #[error("points count {got} is less than 2")]
    TooFewPoints { got: usize },

    /// Also covers an empty values slice.
    #[error("values array has {got} items, at least 2 are required")]
    TooFewValues { got: usize },

    /// Right border not strictly greater than left border, or either is not finite.
    #[error("right border {right_x} must be greater than left border {left_x}")]
    InvalidBorders { left_x: f64, right_x: f64 },
}

/// Which ordering rule a point violated.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum OrderingReason {
    #[error("x {x} is not greater than previous x {previous}")]
    NotAbovePrevious { x: f64, previous: f64 },

    #[error("x {x} is not less than next x {next}")]
    NotBelowNext { x: f64, next: f64 },

    #[error("x {x} duplicates existing point x {existing}")]
    DuplicateX { x: f64, existing: f64 },

    #[error("x {x} is not finite")]
    NonFinite { x: f64 },
}

pub type Result<T> = std::result::Result<T, FunctionError>;
