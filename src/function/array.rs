use log::{debug, warn};

use super::{
    DEFAULT_CAPACITY, EPSILON, Point, TabulatedFunction,
    errors::{FunctionError, Result},
    interpolation, validation,
};
use crate::types::{Validate, ValidationResult};

/// Tabulated function backed by a contiguous buffer.
///
/// The buffer is allocated with spare room; `size` tracks how many leading
/// slots hold live points. Index lookup is a direct offset. Inserting or
/// deleting shifts the tail of the buffer by one slot.
///
/// # Examples
///
/// ```rust
/// use tabfn::{ArrayTabulatedFunction, TabulatedFunction};
///
/// let function = ArrayTabulatedFunction::new(0.0, 3.0, 4).unwrap();
/// assert_eq!(function.count(), 4);
/// assert_eq!(function.point_x(1).unwrap(), 1.0);
/// assert_eq!(function.value_at(1.5), 0.0);
/// ```
#[derive(Debug, Clone)]
pub struct ArrayTabulatedFunction {
    /// Slots `[size..]` are spare and never read.
    points: Box<[Point]>,
    size: usize,
}

impl ArrayTabulatedFunction {
    /// Creates `count` evenly spaced points over `[left_x, right_x]`, all with y = 0.
    ///
    /// # Errors
    /// [`FunctionError::Construction`] if `count < 2` or the borders are non-finite or `right_x <= left_x`.
    pub fn new(left_x: f64, right_x: f64, count: usize) -> Result<Self> {
        Ok(Self::from_points(interpolation::zero_filled(left_x, right_x, count)?))
    }

    /// Creates one evenly spaced point per entry of `values` over `[left_x, right_x]`.
    ///
    /// # Errors
    /// [`FunctionError::Construction`] if `values.len() < 2` or the borders are non-finite or `right_x <= left_x`.
    pub fn from_values(left_x: f64, right_x: f64, values: &[f64]) -> Result<Self> {
        Ok(Self::from_points(interpolation::with_values(left_x, right_x, values)?))
    }

    fn from_points(points: impl ExactSizeIterator<Item = Point>) -> Self {
        let size = points.len();
        let mut buffer = vec![Point::default(); size.max(DEFAULT_CAPACITY)].into_boxed_slice();
        for (slot, point) in buffer.iter_mut().zip(points) {
            *slot = point;
        }
        ArrayTabulatedFunction {
            points: buffer,
            size,
        }
    }

    /// Number of points the buffer holds before it has to grow.
    pub fn capacity(&self) -> usize {
        self.points.len()
    }

    fn live(&self) -> &[Point] {
        &self.points[..self.size]
    }

    fn check_index(&self, index: usize) -> Result<()> {
        if index >= self.size {
            return Err(FunctionError::IndexOutOfBounds {
                index,
                count: self.size,
            });
        }
        Ok(())
    }

    /// Rejects `x` unless it is finite and lies strictly between the neighbours of `index`.
    fn ensure_correct_order(&self, x: f64, index: usize) -> Result<()> {
        interpolation::check_finite(x)?;
        let previous = index.checked_sub(1).map(|i| self.points[i].x());
        let next = (index + 1 < self.size).then(|| self.points[index + 1].x());
        interpolation::check_neighbours(x, previous, next)
    }

    fn ensure_capacity(&mut self, min_capacity: usize) {
        let capacity = self.points.len();
        if capacity >= min_capacity {
            return;
        }

        let new_capacity = (capacity + (capacity >> 1)).max(min_capacity);
        debug!("growing point buffer from {} to {}", capacity, new_capacity);

        let mut grown = vec![Point::default(); new_capacity].into_boxed_slice();
        grown[..self.size].copy_from_slice(self.live());
        self.points = grown;
    }
}

impl TabulatedFunction for ArrayTabulatedFunction {
    fn left_border(&self) -> f64 {
        self.live().first().map_or(f64::NAN, Point::x)
    }

    fn right_border(&self) -> f64 {
        self.live().last().map_or(f64::NAN, Point::x)
    }

    fn value_at(&self, x: f64) -> f64 {
        if !interpolation::in_domain(x, self.left_border(), self.right_border()) {
            return f64::NAN;
        }
        interpolation::evaluate(self.live().iter(), x)
    }

    fn count(&self) -> usize {
        self.size
    }

    fn point(&self, index: usize) -> Result<Point> {
        self.check_index(index)?;
        Ok(self.points[index])
    }

    fn set_point(&mut self, index: usize, point: Point) -> Result<()> {
        self.check_index(index)?;
        self.ensure_correct_order(point.x(), index)?;
        self.points[index] = point;
        Ok(())
    }

    fn point_x(&self, index: usize) -> Result<f64> {
        self.check_index(index)?;
        Ok(self.points[index].x())
    }

    fn set_point_x(&mut self, index: usize, x: f64) -> Result<()> {
        self.check_index(index)?;
        self.ensure_correct_order(x, index)?;
        self.points[index].set_x(x);
        Ok(())
    }

    fn point_y(&self, index: usize) -> Result<f64> {
        self.check_index(index)?;
        Ok(self.points[index].y())
    }

    fn set_point_y(&mut self, index: usize, y: f64) -> Result<()> {
        self.check_index(index)?;
        self.points[index].set_y(y);
        Ok(())
    }

    fn delete_point(&mut self, index: usize) -> Result<()> {
        if self.size <= 2 {
            warn!("refusing to delete from a function of {} points", self.size);
            return Err(FunctionError::MinimumSize { count: self.size });
        }
        self.check_index(index)?;

        self.points.copy_within(index + 1..self.size, index);
        self.size -= 1;
        debug!("deleted point {} ({} left)", index, self.size);
        Ok(())
    }

    fn add_point(&mut self, point: Point) -> Result<()> {
        interpolation::check_finite(point.x())?;

        // Lowest point not clearly below the new x is the only duplicate candidate.
        let candidate = self.live().partition_point(|p| point.x() - p.x() > EPSILON);
        if candidate < self.size {
            interpolation::duplicate_of(point.x(), &self.points[candidate])?;
        }
        let index = candidate + self.live()[candidate..].partition_point(|p| p.x() < point.x());

        self.ensure_capacity(self.size + 1);
        self.points.copy_within(index..self.size, index + 1);
        self.points[index] = point;
        self.size += 1;
        debug!("inserted {} at index {}", point, index);
        Ok(())
    }

    fn points(&self) -> Vec<Point> {
        self.live().to_vec()
    }
}

impl Validate for ArrayTabulatedFunction {
    fn validate(&self) -> ValidationResult {
        validation::validate_points(self.live())
    }
}
