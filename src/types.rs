/// Outcome of an invariant audit.
///
/// A result may be clean, clean with warnings, or invalid. Warnings describe
/// states that are legal but likely to surprise a caller (for example a
/// non-finite y-value); errors describe broken invariants.
///
/// # Type Parameters
///
/// * `T` - The value carried by a passing audit (usually `()`)
///
/// # Examples
///
/// ```rust
/// use tabfn::types::ValidationResult;
///
/// let result: ValidationResult = ValidationResult::Warnings((), vec!["y is NaN".to_string()]);
/// assert!(result.is_valid());
/// assert_eq!(result.warnings().len(), 1);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationResult<T = ()> {
    /// Passed without remarks
    Valid(T),
    /// Passed with warnings
    Warnings(T, Vec<String>),
    /// Failed; carries (warnings, errors)
    Invalid(Vec<String>, Vec<String>),
}

impl<T> ValidationResult<T> {
    /// Returns true unless the audit found errors.
    pub fn is_valid(&self) -> bool {
        !self.is_invalid()
    }

    /// Returns true if the audit found at least one error.
    pub fn is_invalid(&self) -> bool {
        matches!(self, ValidationResult::Invalid(_, _))
    }

    /// Extracts the warnings, discarding everything else.
    pub fn warnings(self) -> Vec<String> {
        match self {
            ValidationResult::Valid(_) => Vec::new(),
            ValidationResult::Warnings(_, warnings) => warnings,
            ValidationResult::Invalid(warnings, _) => warnings,
        }
    }

    /// Extracts the errors. Empty for passing audits.
    pub fn errors(self) -> Vec<String> {
        match self {
            ValidationResult::Invalid(_, errors) => errors,
            _ => Vec::new(),
        }
    }
}

/// Types that can audit their own invariants.
pub trait Validate {
    fn validate(&self) -> ValidationResult;
}
