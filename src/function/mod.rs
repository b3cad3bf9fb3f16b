//! # Tabulated Functions
//!
//! A real-valued function known only at a finite set of strictly ascending
//! x-coordinates, evaluated between them by linear interpolation. Two storage
//! strategies implement the same [`TabulatedFunction`] contract:
//!
//! - [`ArrayTabulatedFunction`]: contiguous buffer, O(1) index lookup, O(n)
//!   shifting on insert and delete.
//! - [`LinkedListTabulatedFunction`]: circular doubly-linked list, O(n) index
//!   lookup (walking from the nearer end), O(1) splicing once located.
//!
//! ## Quick Start
//!
//! ```rust
//! use tabfn::{ArrayTabulatedFunction, Point, TabulatedFunction};
//!
//! let mut function = ArrayTabulatedFunction::from_values(0.0, 2.0, &[0.0, 10.0, 0.0]).unwrap();
//! assert_eq!(function.value_at(0.5), 5.0);
//!
//! function.add_point(Point::new(1.5, 2.0)).unwrap();
//! assert_eq!(function.count(), 4);
//! assert_eq!(function.point_x(2).unwrap(), 1.5);
//!
//! assert!(function.value_at(3.0).is_nan());
//! ```
//!
//! ## Invariants
//!
//! - x-coordinates strictly ascend with index.
//! - A constructed function always holds at least two points.
//! - A mutator that fails leaves the function unchanged.

pub mod array;
pub mod errors;
pub mod interpolation;
pub mod linked;
pub mod point;
pub mod validation;

use std::{fmt, str::FromStr};

use thiserror::Error;

use crate::types::{Validate, ValidationResult};

pub use array::ArrayTabulatedFunction;
pub use errors::{ConstructionReason, FunctionError, OrderingReason, Result};
pub use linked::LinkedListTabulatedFunction;
pub use point::Point;

/// Tolerance for treating two x-coordinates as the same.
///
/// Used for exact-point lookup during evaluation, duplicate detection on
/// insertion, and the domain border check.
pub const EPSILON: f64 = 1e-9;

/// Smallest buffer the array store allocates.
pub const DEFAULT_CAPACITY: usize = 8;

/// Behaviour shared by every tabulated function store.
///
/// Callers should program against this trait (usually as
/// `Box<dyn TabulatedFunction>`) rather than a concrete store. Points cross
/// this boundary by value only.
pub trait TabulatedFunction: fmt::Debug {
    /// x of the first point, or NaN when there are no points.
    fn left_border(&self) -> f64;

    /// x of the last point, or NaN when there are no points.
    fn right_border(&self) -> f64;

    /// Evaluates the function at `x`.
    ///
    /// Returns NaN outside `[left_border - EPSILON, right_border + EPSILON]`.
    /// Inside, a stored point within [`EPSILON`] of `x` yields its y exactly;
    /// anything else is linearly interpolated on the containing segment.
    fn value_at(&self, x: f64) -> f64;

    fn count(&self) -> usize;

    /// A copy of the point at `index`.
    ///
    /// # Errors
    /// [`FunctionError::IndexOutOfBounds`] if `index >= count()`.
    fn point(&self, index: usize) -> Result<Point>;

    /// Replaces the point at `index`.
    ///
    /// # Errors
    /// - [`FunctionError::IndexOutOfBounds`] if `index >= count()`.
    /// - [`FunctionError::Ordering`] if `point.x()` is not finite or not strictly
    ///   between the x-coordinates of the immediate neighbours.
    fn set_point(&mut self, index: usize, point: Point) -> Result<()>;

    fn point_x(&self, index: usize) -> Result<f64>;

    /// Moves the point at `index` to a new x, keeping its y.
    ///
    /// Same checks as [`TabulatedFunction::set_point`].
    fn set_point_x(&mut self, index: usize, x: f64) -> Result<()>;

    fn point_y(&self, index: usize) -> Result<f64>;

    /// Changes the y of the point at `index`. Never affects ordering.
    fn set_point_y(&mut self, index: usize, y: f64) -> Result<()>;

    /// Removes the point at `index`; later points move down one index.
    ///
    /// # Errors
    /// - [`FunctionError::MinimumSize`] if only two points remain (checked first).
    /// - [`FunctionError::IndexOutOfBounds`] if `index >= count()`.
    fn delete_point(&mut self, index: usize) -> Result<()>;

    /// Copies of all points in ascending order.
    fn points(&self) -> Vec<Point>;

    /// Inserts `point` at the index that keeps x ascending.
    ///
    /// # Errors
    /// [`FunctionError::Ordering`] if a stored x lies within [`EPSILON`] of
    /// `point.x()`, or if `point.x()` is not finite.
    fn add_point(&mut self, point: Point) -> Result<()>;

    fn is_empty(&self) -> bool {
        self.count() == 0
    }

    /// `(left_border, right_border)`.
    fn domain(&self) -> (f64, f64) {
        (self.left_border(), self.right_border())
    }

    fn value_at_many(&self, xs: &[f64]) -> Vec<f64> {
        xs.iter().map(|&x| self.value_at(x)).collect()
    }
}

impl Validate for dyn TabulatedFunction + '_ {
    fn validate(&self) -> ValidationResult {
        validation::validate_points(&self.points())
    }
}

/// Storage strategy behind a tabulated function.
///
/// Lets an application pick the store from its own configuration and hold
/// the result as `Box<dyn TabulatedFunction>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StorageKind {
    /// Contiguous buffer.
    #[default]
    Array,
    /// Circular doubly-linked list.
    LinkedList,
}

impl StorageKind {
    /// Builds a zero-filled function of `count` evenly spaced points.
    pub fn tabulate(
        self,
        left_x: f64,
        right_x: f64,
        count: usize,
    ) -> Result<Box<dyn TabulatedFunction>> {
        let function: Box<dyn TabulatedFunction> = match self {
            StorageKind::Array => Box::new(ArrayTabulatedFunction::new(left_x, right_x, count)?),
            StorageKind::LinkedList => {
                Box::new(LinkedListTabulatedFunction::new(left_x, right_x, count)?)
            }
        };
        Ok(function)
    }

    /// Builds a function whose y-values are `values`, evenly spaced in x.
    pub fn from_values(
        self,
        left_x: f64,
        right_x: f64,
        values: &[f64],
    ) -> Result<Box<dyn TabulatedFunction>> {
        let function: Box<dyn TabulatedFunction> = match self {
            StorageKind::Array => Box::new(ArrayTabulatedFunction::from_values(
                left_x, right_x, values,
            )?),
            StorageKind::LinkedList => Box::new(LinkedListTabulatedFunction::from_values(
                left_x, right_x, values,
            )?),
        };
        Ok(function)
    }
}

impl fmt::Display for StorageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorageKind::Array => write!(f, "array"),
            StorageKind::LinkedList => write!(f, "linked-list"),
        }
    }
}

#[derive(Debug, Error)]
pub enum StorageKindParseError {
    /// Error when parsing an unknown storage name.
    #[error("Invalid StorageKind: {0}")]
    InvalidValue(String),
}

impl FromStr for StorageKind {
    type Err = StorageKindParseError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "array" => Ok(StorageKind::Array),
            "linked-list" | "linked_list" | "list" => Ok(StorageKind::LinkedList),
            _ => Err(StorageKindParseError::InvalidValue(s.to_string())),
        }
    }
}
