//! Circular doubly-linked list store.
//!
//! Nodes live in an arena and refer to each other by slot index. Slot 0 is the
//! sentinel: it never carries a point, its `next` is the first data node and
//! its `prev` the last, so the ring has no special cases at either end. Slots
//! released by deletion go on a free list and are reused by later insertions.

use log::{debug, trace, warn};

use super::{
    Point, TabulatedFunction,
    errors::{FunctionError, Result},
    interpolation, validation,
};
use crate::types::{Validate, ValidationResult};

const SENTINEL: usize = 0;

#[derive(Debug, Clone, Copy)]
struct Node {
    /// Unused for the sentinel.
    point: Point,
    prev: usize,
    next: usize,
}

impl Node {
    fn detached(slot: usize, point: Point) -> Self {
        Node {
            point,
            prev: slot,
            next: slot,
        }
    }
}

/// Tabulated function backed by a circular doubly-linked list.
///
/// Index lookup walks from whichever end is closer. Insertion and deletion
/// relink two neighbours once the position is found.
///
/// # Examples
///
/// ```rust
/// use tabfn::{LinkedListTabulatedFunction, Point, TabulatedFunction};
///
/// let mut function = LinkedListTabulatedFunction::from_values(0.0, 2.0, &[0.0, 10.0, 0.0]).unwrap();
/// function.delete_point(0).unwrap();
/// function.add_point(Point::new(0.5, 1.0)).unwrap();
/// assert_eq!(function.point_x(0).unwrap(), 0.5);
/// assert_eq!(function.count(), 3);
/// ```
#[derive(Debug, Clone)]
pub struct LinkedListTabulatedFunction {
    nodes: Vec<Node>,
    free: Vec<usize>,
    size: usize,
}

impl LinkedListTabulatedFunction {
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
        let mut nodes = Vec::with_capacity(points.len().saturating_add(1));
        nodes.push(Node::detached(SENTINEL, Point::default()));

        let mut function = LinkedListTabulatedFunction {
            nodes,
            free: Vec::new(),
            size: 0,
        };
        for point in points {
            function.insert_before(SENTINEL, point);
        }
        function
    }

    fn first(&self) -> usize {
        self.nodes[SENTINEL].next
    }

    fn last(&self) -> usize {
        self.nodes[SENTINEL].prev
    }

    /// Points from first to last.
    fn iter(&self) -> Iter<'_> {
        Iter {
            nodes: &self.nodes,
            slot: self.first(),
            remaining: self.size,
        }
    }

    fn neighbour_x(&self, slot: usize) -> Option<f64> {
        (slot != SENTINEL).then(|| self.nodes[slot].point.x())
    }

    /// Slot of the node at `index`, walking from the nearer end of the ring.
    fn node_by_index(&self, index: usize) -> Result<usize> {
        if index >= self.size {
            return Err(FunctionError::IndexOutOfBounds {
                index,
                count: self.size,
            });
        }

        let mut slot;
        if index < self.size / 2 {
            trace!("walking forward {} nodes", index);
            slot = self.first();
            for _ in 0..index {
                slot = self.nodes[slot].next;
            }
        } else {
            let steps = self.size - 1 - index;
            trace!("walking backward {} nodes", steps);
            slot = self.last();
            for _ in 0..steps {
                slot = self.nodes[slot].prev;
            }
        }
        debug_assert_ne!(slot, SENTINEL);
        Ok(slot)
    }

    /// Rejects `x` unless it is finite and lies strictly between the neighbours of `slot`.
    fn ensure_correct_order(&self, x: f64, slot: usize) -> Result<()> {
        interpolation::check_finite(x)?;
        let node = &self.nodes[slot];
        interpolation::check_neighbours(
            x,
            self.neighbour_x(node.prev),
            self.neighbour_x(node.next),
        )
    }

    /// Links a new node carrying `point` in front of `next`.
    fn insert_before(&mut self, next: usize, point: Point) {
        let slot = match self.free.pop() {
            Some(slot) => {
                trace!("reusing slot {}", slot);
                self.nodes[slot] = Node::detached(slot, point);
                slot
            }
            None => {
                self.nodes.push(Node::detached(self.nodes.len(), point));
                self.nodes.len() - 1
            }
        };

        let prev = self.nodes[next].prev;
        self.nodes[slot].prev = prev;
        self.nodes[slot].next = next;
        self.nodes[prev].next = slot;
        self.nodes[next].prev = slot;
        self.size += 1;
    }

    fn unlink(&mut self, slot: usize) {
        debug_assert_ne!(slot, SENTINEL);
        let Node { prev, next, .. } = self.nodes[slot];
        self.nodes[prev].next = next;
        self.nodes[next].prev = prev;
        self.nodes[slot].prev = slot;
        self.nodes[slot].next = slot;
        self.free.push(slot);
        self.size -= 1;
    }
}

impl TabulatedFunction for LinkedListTabulatedFunction {
    fn left_border(&self) -> f64 {
        self.neighbour_x(self.first()).unwrap_or(f64::NAN)
    }

    fn right_border(&self) -> f64 {
        self.neighbour_x(self.last()).unwrap_or(f64::NAN)
    }

    fn value_at(&self, x: f64) -> f64 {
        if !interpolation::in_domain(x, self.left_border(), self.right_border()) {
            return f64::NAN;
        }
        interpolation::evaluate(self.iter(), x)
    }

    fn count(&self) -> usize {
        self.size
    }

    fn point(&self, index: usize) -> Result<Point> {
        let slot = self.node_by_index(index)?;
        Ok(self.nodes[slot].point)
    }

    fn set_point(&mut self, index: usize, point: Point) -> Result<()> {
        let slot = self.node_by_index(index)?;
        self.ensure_correct_order(point.x(), slot)?;
        self.nodes[slot].point = point;
        Ok(())
    }

    fn point_x(&self, index: usize) -> Result<f64> {
        Ok(self.point(index)?.x())
    }

    fn set_point_x(&mut self, index: usize, x: f64) -> Result<()> {
        let slot = self.node_by_index(index)?;
        self.ensure_correct_order(x, slot)?;
        self.nodes[slot].point.set_x(x);
        Ok(())
    }

    fn point_y(&self, index: usize) -> Result<f64> {
        Ok(self.point(index)?.y())
    }

    fn set_point_y(&mut self, index: usize, y: f64) -> Result<()> {
        let slot = self.node_by_index(index)?;
        self.nodes[slot].point.set_y(y);
        Ok(())
    }

    fn delete_point(&mut self, index: usize) -> Result<()> {
        if self.size <= 2 {
            warn!("refusing to delete from a function of {} points", self.size);
            return Err(FunctionError::MinimumSize { count: self.size });
        }
        let slot = self.node_by_index(index)?;

        self.unlink(slot);
        debug!("deleted point {} ({} left)", index, self.size);
        Ok(())
    }

    fn add_point(&mut self, point: Point) -> Result<()> {
        interpolation::check_finite(point.x())?;

        // Stops at the first node whose x exceeds the new one; appending
        // means linking in front of the sentinel.
        let mut next = SENTINEL;
        let mut index = 0;
        let mut slot = self.first();
        while slot != SENTINEL {
            let existing = &self.nodes[slot].point;
            interpolation::duplicate_of(point.x(), existing)?;
            if point.x() < existing.x() {
                next = slot;
                break;
            }
            slot = self.nodes[slot].next;
            index += 1;
        }

        self.insert_before(next, point);
        debug!("inserted {} at index {}", point, index);
        Ok(())
    }

    fn points(&self) -> Vec<Point> {
        self.iter().copied().collect()
    }
}

impl Validate for LinkedListTabulatedFunction {
    fn validate(&self) -> ValidationResult {
        validation::validate_points(&self.points())
    }
}

/// Forward iterator over the stored points.
#[derive(Clone)]
struct Iter<'a> {
    nodes: &'a [Node],
    slot: usize,
    remaining: usize,
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a Point;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let node = &self.nodes[self.slot];
        self.slot = node.next;
        self.remaining -= 1;
        Some(&node.point)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for Iter<'_> {}
