//! Recursive-backtracker carving with longest-path tracking.
//!
//! The walk keeps an explicit stack instead of recursing, so grid size is
//! not limited by call depth:
//!
//! 1. Carve the start cell at distance 0 and push it.
//! 2. While the stack is non-empty, shuffle the four directions and take the
//!    first neighbour that is not the border, not carved, and unmade. If one
//!    exists, carve it one deeper, push the current cell and move onto it;
//!    otherwise pop the stack into the current cell.
//! 3. Every time the depth exceeds the previous maximum, the stack chain plus
//!    the new cell is remembered. That chain is marked once the walk ends.
//!
//! Direction choices draw from a ChaCha8 generator seeded once per run, so a
//! seed and a topology fully determine the result.

use crate::error::CarveError;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::iter;
use tracing::{debug, trace, warn};
use warren_space::{CellId, Direction, Neighbour, Topology};

/// A seeded recursive-backtracker carver.
///
/// Constructed with [`RecursiveBacktracker::new`] or, to set a step limit,
/// via [`RecursiveBacktracker::builder`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RecursiveBacktracker {
    seed: u64,
    step_limit: Option<u64>,
}

/// Builder for [`RecursiveBacktracker`].
pub struct RecursiveBacktrackerBuilder {
    seed: u64,
    step_limit: Option<u64>,
}

/// Emitted just before each cell is carved.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CarveEvent {
    /// The cell about to be carved.
    pub cell: CellId,
    /// Its coordinate.
    pub coord: (i32, i32),
    /// The distance it will be carved at.
    pub distance: u32,
    /// How many of its neighbours were carved at that moment.
    pub carved_neighbours: usize,
}

/// Summary of a completed run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CarveReport {
    /// The start cell.
    pub start: CellId,
    /// Number of cells carved.
    pub carved: usize,
    /// Deepest carve distance reached.
    pub max_distance: u32,
    /// Cells of the marked path, from the start to the deepest cell.
    pub longest_path: Vec<CellId>,
    /// Move/backtrack iterations taken.
    pub steps: u64,
}

impl RecursiveBacktracker {
    /// A carver with the given seed and no step limit.
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            step_limit: None,
        }
    }

    /// Create a new builder (seed 0, no step limit).
    pub fn builder() -> RecursiveBacktrackerBuilder {
        RecursiveBacktrackerBuilder {
            seed: 0,
            step_limit: None,
        }
    }

    /// The generator seed.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// The configured step limit, if any.
    pub fn step_limit(&self) -> Option<u64> {
        self.step_limit
    }

    /// Carve `topology` from the cell at `start` and mark the longest path.
    ///
    /// Existing carve state is cleared first. On error the topology is left
    /// with no carved cells.
    ///
    /// # Errors
    ///
    /// - [`CarveError::InvalidStart`] if `start` is a hole or out of range.
    /// - [`CarveError::Space`] with `NotLinked` if the topology is unlinked.
    /// - [`CarveError::StepLimitExceeded`] if a step limit is set and hit.
    pub fn run(
        &self,
        topology: &mut Topology,
        start: (i32, i32),
    ) -> Result<CarveReport, CarveError> {
        self.run_observed(topology, start, |_| {})
    }

    /// Like [`run`](Self::run), calling `observer` just before every carve.
    pub fn run_observed<F>(
        &self,
        topology: &mut Topology,
        start: (i32, i32),
        mut observer: F,
    ) -> Result<CarveReport, CarveError>
    where
        F: FnMut(&CarveEvent),
    {
        let start_id = topology
            .cell_id(start.0, start.1)
            .ok_or(CarveError::InvalidStart {
                x: start.0,
                y: start.1,
            })?;
        if !topology.is_linked() {
            return Err(warren_space::SpaceError::NotLinked.into());
        }
        topology.reset_carving();
        debug!(seed = self.seed, start = ?start, "carving maze");

        match self.walk(topology, start_id, &mut observer) {
            Ok(report) => {
                for &id in &report.longest_path {
                    topology.mark(id)?;
                }
                debug!(
                    carved = report.carved,
                    max_distance = report.max_distance,
                    steps = report.steps,
                    "carving finished"
                );
                Ok(report)
            }
            Err(e) => {
                topology.reset_carving();
                Err(e)
            }
        }
    }

    fn walk<F>(
        &self,
        topology: &mut Topology,
        start: CellId,
        observer: &mut F,
    ) -> Result<CarveReport, CarveError>
    where
        F: FnMut(&CarveEvent),
    {
        let mut rng = ChaCha8Rng::seed_from_u64(self.seed);
        let mut stack: Vec<CellId> = Vec::new();
        let mut distance: u32 = 0;
        let mut max_distance: u32 = 0;
        let mut longest_path = vec![start];
        let mut carved = 0usize;
        let mut steps = 0u64;

        carve(topology, Neighbour::Cell(start), 0, observer)?;
        carved += 1;
        stack.push(start);
        let mut current = start;

        while !stack.is_empty() {
            steps += 1;
            if let Some(limit) = self.step_limit {
                if steps > limit {
                    warn!(limit, carved, "step limit exceeded, discarding maze");
                    return Err(CarveError::StepLimitExceeded { limit });
                }
            }

            match find_move(topology, current, &mut rng) {
                Some(target) => {
                    let next = carve(topology, target, distance + 1, observer)?;
                    carved += 1;
                    stack.push(current);
                    distance += 1;
                    if distance > max_distance {
                        max_distance = distance;
                        // stack[0] is the initial push of the start cell,
                        // repeated at stack[1] once the walk left it.
                        longest_path = stack[1..]
                            .iter()
                            .copied()
                            .chain(iter::once(next))
                            .collect();
                    }
                    current = next;
                }
                None => {
                    if let Some(prev) = stack.pop() {
                        trace!(from = %current, to = %prev, distance, "backtrack");
                        current = prev;
                    }
                    distance = distance.saturating_sub(1);
                }
            }
        }

        Ok(CarveReport {
            start,
            carved,
            max_distance,
            longest_path,
            steps,
        })
    }
}

/// First neighbour of `current`, in a freshly shuffled direction order,
/// that can be carved without closing a cycle.
fn find_move(topology: &Topology, current: CellId, rng: &mut ChaCha8Rng) -> Option<Neighbour> {
    let mut dirs = Direction::ALL;
    dirs.shuffle(rng);
    dirs.into_iter()
        .map(|dir| topology.neighbour(current, dir))
        .find(|&n| !n.is_border() && !topology.is_carved(n) && topology.is_unmade(n))
}

fn carve<F>(
    topology: &mut Topology,
    target: Neighbour,
    distance: u32,
    observer: &mut F,
) -> Result<CellId, CarveError>
where
    F: FnMut(&CarveEvent),
{
    if let Neighbour::Cell(id) = target {
        observer(&CarveEvent {
            cell: id,
            coord: topology.coord(id),
            distance,
            carved_neighbours: topology.carved_neighbours(id),
        });
    }
    Ok(topology.carve(target, distance)?)
}

impl RecursiveBacktrackerBuilder {
    /// Set the generator seed (default: 0).
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Abort after `limit` move/backtrack iterations (default: unlimited).
    ///
    /// A well-formed topology needs `2 * carved - 1` iterations; the limit
    /// only matters for inconsistent rewiring.
    pub fn step_limit(mut self, limit: u64) -> Self {
        self.step_limit = Some(limit);
        self
    }

    /// Build the carver, validating the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`CarveError::InvalidConfig`] if the step limit is 0.
    pub fn build(self) -> Result<RecursiveBacktracker, CarveError> {
        if self.step_limit == Some(0) {
            return Err(CarveError::InvalidConfig {
                reason: "step_limit must be at least 1".to_string(),
            });
        }
        Ok(RecursiveBacktracker {
            seed: self.seed,
            step_limit: self.step_limit,
        })
    }
}
