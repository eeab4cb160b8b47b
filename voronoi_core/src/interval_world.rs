//! The "INTERVAL" Engine - sorted points on [0, 1] and their Voronoi weights
//!
//! Each point owns the part of the line closer to it than to either neighbour.
//! The two edge points also own everything out to the boundary, so the weights
//! always partition `[0, 1]`.
//!
//! Removal is incremental: deleting a point perturbs at most the two intervals
//! adjacent to it, so only those weights are recomputed.

use crate::error::{Result, WorldError};
use serde::{Deserialize, Serialize};
use voronoi_env::RandomSource;

/// Scale applied to standard-normal draws before folding them into [0, 1].
pub const NORMAL_SCALE: f64 = 0.2;

/// Distribution used to draw an initial population.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PointDistribution {
    /// Uniform on [0, 1)
    #[default]
    Uniform,

    /// N(0, 1) scaled by [`NORMAL_SCALE`], folded into [0, 1) modulo 1.0
    Normal,
}

impl PointDistribution {
    /// Returns the distribution name.
    pub fn name(&self) -> &'static str {
        match self {
            PointDistribution::Uniform => "uniform",
            PointDistribution::Normal => "normal",
        }
    }

    /// Draws a single point.
    pub fn draw<R: RandomSource + ?Sized>(&self, rng: &mut R) -> f64 {
        match self {
            PointDistribution::Uniform => rng.uniform(),
            PointDistribution::Normal => (rng.standard_normal() * NORMAL_SCALE).rem_euclid(1.0),
        }
    }
}

impl std::fmt::Display for PointDistribution {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl std::str::FromStr for PointDistribution {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "uniform" | "u" => Ok(PointDistribution::Uniform),
            "normal" | "gaussian" | "n" => Ok(PointDistribution::Normal),
            _ => Err(format!("Unknown distribution: {}", s)),
        }
    }
}

/// One eliminated point and the weight it held when it was removed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RemovalRecord {
    pub point: f64,
    pub weight: f64,
}

/// A sorted point set on [0, 1] with index-aligned interval weights.
///
/// A world always holds at least one point; `weights[i]` belongs to `points[i]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IntervalWorld {
    points: Vec<f64>,
    weights: Vec<f64>,
}

impl IntervalWorld {
    /// Builds a world from explicit points.
    ///
    /// Points are sorted ascending and every weight is computed from scratch.
    ///
    /// # Errors
    /// `InvalidArgument` if `points` is empty or holds a value outside [0, 1]
    /// (NaN included).
    pub fn from_points(mut points: Vec<f64>) -> Result<Self> {
        if points.is_empty() {
            return Err(WorldError::invalid_argument("point set must not be empty"));
        }
        if let Some(bad) = points.iter().find(|p| !(0.0..=1.0).contains(*p)) {
            return Err(WorldError::invalid_argument(format!(
                "point {} lies outside [0, 1]",
                bad
            )));
        }

        points.sort_by(f64::total_cmp);
        let weights = full_weights(&points);

        Ok(Self { points, weights })
    }

    /// Draws `count` independent points from `distribution` and builds a world.
    ///
    /// # Errors
    /// `InvalidArgument` if `count` < 1.
    pub fn generate<R: RandomSource + ?Sized>(
        count: usize,
        distribution: PointDistribution,
        rng: &mut R,
    ) -> Result<Self> {
        if count < 1 {
            return Err(WorldError::invalid_argument("point count must be at least 1"));
        }

        let points = (0..count).map(|_| distribution.draw(rng)).collect();
        Self::from_points(points)
    }

    /// Number of points.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Always false; a world never holds zero points.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Sorted points.
    pub fn points(&self) -> &[f64] {
        &self.points
    }

    /// Weights, index-aligned with [`points`](Self::points).
    pub fn weights(&self) -> &[f64] {
        &self.weights
    }

    /// Consumes the world, returning its sorted points (the run result).
    pub fn into_points(self) -> Vec<f64> {
        self.points
    }

    /// Sum of all weights. Equals 1.0 up to rounding.
    pub fn total_weight(&self) -> f64 {
        self.weights.iter().sum()
    }

    /// Index of the smallest weight; exact ties go to the lowest index.
    pub fn global_minimum(&self) -> usize {
        let mut best = 0;
        for (i, w) in self.weights.iter().enumerate().skip(1) {
            if *w < self.weights[best] {
                best = i;
            }
        }
        best
    }

    /// Returns a new world with `point` added, plus the index it landed at.
    ///
    /// Weights of the new world are recomputed in full. The point is placed
    /// before any existing equal value.
    ///
    /// # Errors
    /// `InvalidArgument` if `point` lies outside [0, 1].
    pub fn with_inserted(&self, point: f64) -> Result<(Self, usize)> {
        if !(0.0..=1.0).contains(&point) {
            return Err(WorldError::invalid_argument(format!(
                "point {} lies outside [0, 1]",
                point
            )));
        }

        let position = self.points.partition_point(|p| *p < point);
        let mut points = Vec::with_capacity(self.points.len() + 1);
        points.extend_from_slice(&self.points[..position]);
        points.push(point);
        points.extend_from_slice(&self.points[position..]);
        let weights = full_weights(&points);

        Ok((Self { points, weights }, position))
    }

    /// Removes the point at `index` (0-based) and repairs the affected weights.
    ///
    /// Only the intervals that bordered the removed point are recomputed, so
    /// the cost does not depend on the population size. Both values of the
    /// returned record are captured before mutation.
    ///
    /// # Errors
    /// - `InvalidState` if the world holds a single point
    /// - `InvalidArgument` if `index` is out of range
    pub fn remove(&mut self, index: usize) -> Result<RemovalRecord> {
        let n = self.points.len();
        if n <= 1 {
            return Err(WorldError::invalid_state(
                "cannot remove the last remaining point",
            ));
        }
        if index >= n {
            return Err(WorldError::invalid_argument(format!(
                "index {} out of range for world of size {}",
                index, n
            )));
        }

        let record = RemovalRecord {
            point: self.points.remove(index),
            weight: self.weights.remove(index),
        };

        let m = n - 1;
        match m {
            1 => self.weights[0] = 1.0,
            2 => {
                self.weights[0] = self.leftmost();
                self.weights[1] = self.rightmost();
            }
            _ if index == 0 => self.weights[0] = self.leftmost(),
            _ if index == n - 1 => self.weights[m - 1] = self.rightmost(),
            _ if index == n - 2 => {
                self.weights[m - 2] = self.interior(m - 2);
                self.weights[m - 1] = self.rightmost();
            }
            _ if index == 1 => {
                self.weights[0] = self.leftmost();
                self.weights[1] = self.interior(1);
            }
            _ => {
                self.weights[index] = self.interior(index);
                self.weights[index - 1] = self.interior(index - 1);
            }
        }

        Ok(record)
    }

    fn leftmost(&self) -> f64 {
        leftmost_weight(&self.points)
    }

    fn rightmost(&self) -> f64 {
        rightmost_weight(&self.points)
    }

    fn interior(&self, i: usize) -> f64 {
        interior_weight(&self.points, i)
    }
}

// ============================================================================
// PARTITION RULE
// ============================================================================

/// Computes every weight of a sorted point sequence from scratch.
///
/// `points` must be non-empty and sorted.
pub fn full_weights(points: &[f64]) -> Vec<f64> {
    let n = points.len();
    if n == 1 {
        return vec![1.0];
    }

    let mut weights = Vec::with_capacity(n);
    weights.push(leftmost_weight(points));
    weights.extend((1..n - 1).map(|i| interior_weight(points, i)));
    weights.push(rightmost_weight(points));
    weights
}

fn leftmost_weight(points: &[f64]) -> f64 {
    points[0] + 0.5 * (points[1] - points[0])
}

fn rightmost_weight(points: &[f64]) -> f64 {
    let n = points.len();
    1.0 - points[n - 1] + 0.5 * (points[n - 1] - points[n - 2])
}

fn interior_weight(points: &[f64], i: usize) -> f64 {
    0.5 * (points[i + 1] - points[i - 1])
}
