use std::fmt;

use crate::types::ValidationResult;

pub fn _chain<T>(
    result: ValidationResult<T>,
    warnings: &mut Vec<String>,
    errors: &mut Vec<String>,
) {
    match result {
        ValidationResult::Valid(_) => {}
        ValidationResult::Warnings(_, warns) => {
            warnings.extend(warns);
        }
        ValidationResult::Invalid(warns, errs) => {
            warnings.extend(warns);
            errors.extend(errs);
        }
    }
}

pub fn _return(warnings: Vec<String>, errors: Vec<String>) -> ValidationResult {
    if !errors.is_empty() {
        ValidationResult::Invalid(warnings, errors)
    } else if !warnings.is_empty() {
        ValidationResult::Warnings((), warnings)
    } else {
        ValidationResult::Valid(())
    }
}

pub fn validate_strictly_ascending<V: PartialOrd + fmt::Display>(values: &[V]) -> ValidationResult {
    let warnings = Vec::new();
    let mut errors = Vec::new();

    for i in 1..values.len() {
        if !(values[i] > values[i - 1]) {
            errors.push(format!(
                "values are not strictly ascending: {} >= {} at index {}",
                values[i - 1],
                values[i],
                i
            ));
        }
    }

    _return(warnings, errors)
}

pub fn validate_min_len<V>(values: &[V], min: usize) -> ValidationResult {
    let warnings = Vec::new();
    let mut errors = Vec::new();

    if values.len() < min {
        errors.push(format!(
            "expected at least {} values, found {}.",
            min,
            values.len()
        ));
    }

    _return(warnings, errors)
}

/// Reports every non-finite entry. `as_error` decides which list receives them.
pub fn validate_finite(values: &[f64], label: &str, as_error: bool) -> ValidationResult {
    let mut found = Vec::new();

    for (i, &value) in values.iter().enumerate() {
        if !value.is_finite() {
            found.push(format!(
                "{} at index {} is not a finite number: {}",
                label, i, value
            ));
        }
    }

    if as_error {
        _return(Vec::new(), found)
    } else {
        _return(found, Vec::new())
    }
}

/// Warns about adjacent values closer than `tolerance`.
pub fn validate_spacing(values: &[f64], tolerance: f64) -> ValidationResult {
    let mut warnings = Vec::new();

    for i in 1..values.len() {
        if (values[i] - values[i - 1]).abs() <= tolerance {
            warnings.push(format!(
                "values at index {} and {} are closer than {}: {} and {}",
                i - 1,
                i,
                tolerance,
                values[i - 1],
                values[i]
            ));
        }
    }

    _return(warnings, Vec::new())
}
