//! Layout and evaluation shared by both storage strategies.
//!
//! Both stores feed their points through the same helpers, so identical
//! constructor arguments give bit-identical x sequences and identical
//! evaluation results regardless of storage.

use itertools::Itertools;
use log::warn;

use super::{
    EPSILON, Point,
    errors::{ConstructionReason, OrderingReason, Result},
};

fn validate_borders(left_x: f64, right_x: f64) -> Result<()> {
    // Written as a negation so that NaN borders are rejected too. Infinite
    // borders leave no usable step.
    if !(right_x > left_x) || !left_x.is_finite() || !right_x.is_finite() {
        return Err(ConstructionReason::InvalidBorders { left_x, right_x }.into());
    }
    Ok(())
}

/// Evenly spaced x-coordinates over `[left_x, right_x]`.
///
/// The last coordinate is `right_x` itself rather than `left_x + step * (count - 1)`
/// so the right border never drifts.
fn spaced_xs(left_x: f64, right_x: f64, count: usize) -> impl ExactSizeIterator<Item = f64> {
    let step = (right_x - left_x) / (count - 1) as f64;
    (0..count).map(move |i| {
        if i == count - 1 {
            right_x
        } else {
            left_x + step * i as f64
        }
    })
}

/// Points for the `(left_x, right_x, count)` constructor, all y-values zero.
pub(crate) fn zero_filled(
    left_x: f64,
    right_x: f64,
    count: usize,
) -> Result<impl ExactSizeIterator<Item = Point>> {
    if count < 2 {
        return Err(ConstructionReason::TooFewPoints { got: count }.into());
    }
    validate_borders(left_x, right_x)?;

    Ok(spaced_xs(left_x, right_x, count).map(|x| Point::new(x, 0.0)))
}

/// Points for the `(left_x, right_x, values)` constructor.
pub(crate) fn with_values(
    left_x: f64,
    right_x: f64,
    values: &[f64],
) -> Result<impl ExactSizeIterator<Item = Point> + '_> {
    if values.len() < 2 {
        return Err(ConstructionReason::TooFewValues { got: values.len() }.into());
    }
    validate_borders(left_x, right_x)?;

    Ok(spaced_xs(left_x, right_x, values.len())
        .zip(values.iter().copied())
        .map(|(x, y)| Point::new(x, y)))
}

/// Checks a replacement x against its immediate neighbours only.
///
/// `previous` and `next` are `None` at the respective end of the sequence.
pub(crate) fn check_neighbours(x: f64, previous: Option<f64>, next: Option<f64>) -> Result<()> {
    if let Some(previous) = previous {
        if !(x > previous) {
            warn!("rejected x {} at or below previous x {}", x, previous);
            return Err(OrderingReason::NotAbovePrevious { x, previous }.into());
        }
    }
    if let Some(next) = next {
        if !(x < next) {
            warn!("rejected x {} at or above next x {}", x, next);
            return Err(OrderingReason::NotBelowNext { x, next }.into());
        }
    }
    Ok(())
}

/// Stored x values must be finite: NaN has no place in any ordering and two
/// equal infinities cannot be told apart.
pub(crate) fn check_finite(x: f64) -> Result<()> {
    if !x.is_finite() {
        warn!("rejected non-finite x {}", x);
        return Err(OrderingReason::NonFinite { x }.into());
    }
    Ok(())
}

pub(crate) fn duplicate_of(x: f64, existing: &Point) -> Result<()> {
    if (x - existing.x()).abs() <= EPSILON {
        warn!("rejected x {}: duplicates {}", x, existing);
        return Err(OrderingReason::DuplicateX {
            x,
            existing: existing.x(),
        }
        .into());
    }
    Ok(())
}

pub(crate) fn in_domain(x: f64, left: f64, right: f64) -> bool {
    x >= left - EPSILON && x <= right + EPSILON
}

#[inline]
fn lerp(left: &Point, right: &Point, x: f64) -> f64 {
    let ratio = (x - left.x()) / (right.x() - left.x());
    left.y() + ratio * (right.y() - left.y())
}

/// Evaluates ascending `points` at an `x` already known to lie in the domain.
///
/// A stored point within [`EPSILON`] of `x` yields its y exactly; otherwise the
/// first segment whose right end lies beyond `x` is interpolated. An `x` that
/// slips past the last point within tolerance yields the last y.
pub(crate) fn evaluate<'a, I>(points: I, x: f64) -> f64
where
    I: Iterator<Item = &'a Point> + Clone,
{
    if let Some(hit) = points.clone().find(|p| (x - p.x()).abs() <= EPSILON) {
        return hit.y();
    }

    let mut last = None;
    for (left, right) in points.tuple_windows() {
        if x < right.x() {
            return lerp(left, right, x);
        }
        last = Some(right);
    }

    last.map_or(f64::NAN, Point::y)
}
