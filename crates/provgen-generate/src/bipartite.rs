//! Degree-regular bipartite assignment between entities and activities.
//!
//! Configuration-model construction: every entity contributes `degree`
//! stubs, the stubs are shuffled and cut into one block of `degree` per
//! activity. A shuffle is accepted only when no block names the same entity
//! twice; otherwise the whole partition is discarded and redrawn.

use rand::Rng;
use rand::seq::SliceRandom;
use tracing::{debug, trace};

use crate::errors::GenerationError;
use crate::model::DEFAULT_MAX_ATTEMPTS;

/// Accepted assignment: `groups()[a]` lists the (0-based) entities chosen by
/// activity `a`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assignment {
    groups: Vec<Vec<usize>>,
    degree: usize,
    attempts: u32,
}

impl Assignment {
    fn empty(partite_size: usize) -> Self {
        Self {
            groups: vec![Vec::new(); partite_size],
            degree: 0,
            attempts: 0,
        }
    }

    pub fn groups(&self) -> &[Vec<usize>] {
        &self.groups
    }

    pub fn partite_size(&self) -> usize {
        self.groups.len()
    }

    pub fn degree(&self) -> usize {
        self.degree
    }

    /// Number of shuffles drawn until acceptance (0 when nothing was drawn).
    pub fn attempts(&self) -> u32 {
        self.attempts
    }

    /// Total number of `(activity, entity)` pairs.
    pub fn pair_count(&self) -> usize {
        self.groups.iter().map(Vec::len).sum()
    }

    /// Number of activities that chose `entity`.
    pub fn entity_degree(&self, entity: usize) -> usize {
        self.groups
            .iter()
            .flat_map(|group| group.iter())
            .filter(|candidate| **candidate == entity)
            .count()
    }

    /// `(activity, entity)` pairs in activity order, then block order.
    pub fn pairs(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.groups
            .iter()
            .enumerate()
            .flat_map(|(activity, group)| group.iter().map(move |entity| (activity, *entity)))
    }
}

/// Draws degree-regular assignments for a fixed `(partite_size, degree)`.
///
/// Inputs are trusted: callers validate them through `provgen_core::input`.
#[derive(Debug, Clone)]
pub struct BipartiteGenerator {
    partite_size: usize,
    degree: usize,
    max_attempts: u32,
}

impl BipartiteGenerator {
    pub fn new(partite_size: usize, degree: usize) -> Self {
        Self {
            partite_size,
            degree,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }

    pub fn with_max_attempts(mut self, max_attempts: u32) -> Self {
        self.max_attempts = max_attempts;
        self
    }

    pub fn generate<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Assignment, GenerationError> {
        if self.degree == 0 {
            return Ok(Assignment::empty(self.partite_size));
        }
        if self.max_attempts == 0 {
            return Err(GenerationError::InvalidOptions(
                "max_attempts must be at least 1".to_string(),
            ));
        }
        // A block of `degree` distinct entities needs at least `degree` entities.
        if self.degree > self.partite_size {
            return Err(self.infeasible(0));
        }

        let mut stubs: Vec<usize> = (0..self.partite_size)
            .flat_map(|entity| std::iter::repeat_n(entity, self.degree))
            .collect();

        for attempt in 1..=self.max_attempts {
            stubs.shuffle(rng);
            match partition(&stubs, self.degree) {
                Some(groups) => {
                    debug!(
                        partite_size = self.partite_size,
                        degree = self.degree,
                        attempts = attempt,
                        "assignment accepted"
                    );
                    return Ok(Assignment {
                        groups,
                        degree: self.degree,
                        attempts: attempt,
                    });
                }
                None => trace!(attempt, "assignment rejected"),
            }
        }

        Err(self.infeasible(self.max_attempts))
    }

    fn infeasible(&self, attempts: u32) -> GenerationError {
        GenerationError::Infeasible {
            partite_size: self.partite_size,
            degree: self.degree,
            attempts,
        }
    }
}

fn partition(stubs: &[usize], degree: usize) -> Option<Vec<Vec<usize>>> {
    stubs
        .chunks(degree)
        .map(|block| all_distinct(block).then(|| block.to_vec()))
        .collect()
}

fn all_distinct(block: &[usize]) -> bool {
    block
        .iter()
        .enumerate()
        .all(|(index, entity)| !block[..index].contains(entity))
}
