use super::{EPSILON, Point};
use crate::{
    types::ValidationResult,
    validation_utils::{
        _chain, _return, validate_finite, validate_min_len, validate_spacing,
        validate_strictly_ascending,
    },
};

/// Audits an ordered run of points against the tabulated function invariants.
///
/// Errors: fewer than two points, non-finite x, x not strictly ascending.
/// Warnings: non-finite y, neighbours closer than [`EPSILON`].
pub fn validate_points(points: &[Point]) -> ValidationResult {
    let mut warnings = Vec::new();
    let mut errors = Vec::new();

    let w = &mut warnings;
    let e = &mut errors;

    let xs: Vec<f64> = points.iter().map(Point::x).collect();
    let ys: Vec<f64> = points.iter().map(Point::y).collect();

    _chain(validate_min_len(points, 2), w, e);
    _chain(validate_finite(&xs, "x", true), w, e);
    _chain(validate_strictly_ascending(&xs), w, e);
    _chain(validate_finite(&ys, "y", false), w, e);
    _chain(validate_spacing(&xs, EPSILON), w, e);

    _return(warnings, errors)
}
