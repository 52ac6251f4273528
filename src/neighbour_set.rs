//! Bounded, distance-ordered collection of candidate neighbours shared by the
//! k-nearest-neighbour searches of both tree types.
use ordered_float::OrderedFloat;
use sorted_vec::SortedVec;
use std::cmp::Ordering;

use crate::nearest_neighbour::NearestNeighbour;
use crate::point::Point;
use crate::traits::Axis;

/// A candidate kept by a [`NeighbourSet`].
///
/// Ordered by distance, then by the order in which candidates were considered,
/// so that among equal distances the earlier candidate keeps its place.
#[derive(Debug, Clone, Copy)]
struct Ranked<A> {
    distance: OrderedFloat<A>,
    rank: usize,
    point: Point<A>,
}

impl<A: Axis> Ord for Ranked<A> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.distance
            .cmp(&other.distance)
            .then(self.rank.cmp(&other.rank))
    }
}

impl<A: Axis> PartialOrd for Ranked<A> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<A: Axis> Eq for Ranked<A> {}

impl<A: Axis> PartialEq for Ranked<A> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

/// Holds at most `capacity` points, sorted ascending by their distance to a
/// query point.
///
/// The k-NN searches thread one of these through their recursion. Every call to
/// [`consider`](NeighbourSet::consider) returns the current pruning threshold:
/// the `capacity`-th smallest distance once the set is full, `+∞` before that.
///
/// # Examples
///
/// ```rust
/// use cgl::{NeighbourSet, Point};
///
/// let query = Point::new(0.0, 0.0);
/// let mut set = NeighbourSet::new(2);
///
/// assert_eq!(set.consider(Point::new(3.0, 4.0), &query), f64::INFINITY);
/// assert_eq!(set.consider(Point::new(1.0, 0.0), &query), 5.0);
/// assert_eq!(set.consider(Point::new(0.0, 2.0), &query), 2.0);
///
/// let found: Vec<_> = set.iter().map(|n| n.point).collect();
/// assert_eq!(found, vec![Point::new(1.0, 0.0), Point::new(0.0, 2.0)]);
/// ```
#[derive(Debug, Clone)]
pub struct NeighbourSet<A: Axis = f64> {
    entries: SortedVec<Ranked<A>>,
    capacity: usize,
    considered: usize,
}

impl<A: Axis> NeighbourSet<A> {
    /// Creates an empty set that keeps at most `capacity` neighbours
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: SortedVec::with_capacity(capacity.saturating_add(1)),
            capacity,
            considered: 0,
        }
    }

    /// Folds `candidate` into the set and returns the new pruning threshold.
    ///
    /// `candidate` is placed after every kept entry whose distance to `query`
    /// is less than or equal to its own; the set is then cut back to capacity.
    /// A full set only admits candidates strictly closer than its current
    /// threshold.
    pub fn consider(&mut self, candidate: Point<A>, query: &Point<A>) -> A {
        let distance = candidate.distance(query);
        let rank = self.considered;
        self.considered += 1;

        if self.entries.len() < self.capacity || distance < self.threshold() {
            self.entries.insert(Ranked {
                distance: OrderedFloat(distance),
                rank,
                point: candidate,
            });
            while self.entries.len() > self.capacity {
                self.entries.pop();
            }
        }

        self.threshold()
    }

    /// The `capacity`-th smallest distance seen so far, or `+∞` while the set
    /// is not yet full.
    pub fn threshold(&self) -> A {
        if self.entries.len() < self.capacity {
            A::infinity()
        } else {
            self.entries
                .last()
                .map_or(A::infinity(), |entry| entry.distance.into_inner())
        }
    }

    /// maximum number of neighbours kept
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// number of neighbours currently kept
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// `true` if nothing has been kept yet
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over the kept neighbours, nearest first
    pub fn iter(&self) -> impl Iterator<Item = NearestNeighbour<A>> + '_ {
        self.entries.iter().map(|entry| NearestNeighbour {
            distance: entry.distance.into_inner(),
            point: entry.point,
        })
    }

    /// Consumes the set, returning the kept neighbours nearest first
    pub fn into_sorted_vec(self) -> Vec<NearestNeighbour<A>> {
        self.entries
            .into_vec()
            .into_iter()
            .map(|entry| NearestNeighbour {
                distance: entry.distance.into_inner(),
                point: entry.point,
            })
            .collect()
    }
}
