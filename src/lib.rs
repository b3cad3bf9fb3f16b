pub mod function;

pub mod types;
mod validation_utils;

pub use crate::function::{
    ArrayTabulatedFunction, EPSILON, FunctionError, LinkedListTabulatedFunction, Point,
    StorageKind, TabulatedFunction,
};
pub use crate::types::{Validate, ValidationResult};
