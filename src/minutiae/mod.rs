//! Minutiae storage and the detection/pruning/annotation stages.
//!
//! A [`Minutiae`] list is allocated once per pipeline run at a fixed
//! capacity; the detection stage appends, the pruning stage filters in
//! place and the ridge-count stage annotates survivors with neighbor
//! references.

mod detect;
mod prune;
mod ridges;

pub use detect::StandardMinutiaeFinder;
pub use prune::StandardPruner;
pub use ridges::StandardRidgeCounter;

use crate::error::DetectError;
use serde::Serialize;

/// Kind of ridge feature a minutia marks.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum MinutiaKind {
    /// A ridge terminates.
    Ending,
    /// A ridge splits in two.
    Bifurcation,
}

/// One detected minutia.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Minutia {
    pub x: usize,
    pub y: usize,
    pub kind: MinutiaKind,
    /// Ridge-flow direction index of the enclosing block.
    pub direction: i32,
    /// Detection reliability in [0, 1].
    pub reliability: f64,
    /// Indices of annotated neighbors within the list.
    pub neighbors: Vec<usize>,
    /// Ridge crossings toward each entry of `neighbors`.
    pub ridge_counts: Vec<i32>,
}

/// Growable minutiae list bounded by a fixed capacity.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Minutiae {
    capacity: usize,
    items: Vec<Minutia>,
}

impl Minutiae {
    /// Allocate an empty list. A zero capacity is a construction failure:
    /// the pipeline requires room for at least one minutia.
    pub fn with_capacity(capacity: usize) -> Result<Self, DetectError> {
        if capacity == 0 {
            return Err(DetectError::Allocation {
                what: "minutiae list with zero capacity",
            });
        }
        Ok(Self {
            capacity,
            items: Vec::with_capacity(capacity),
        })
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.items.len() >= self.capacity
    }

    /// Append a minutia; returns false (and drops it) once the list is full.
    pub fn push(&mut self, minutia: Minutia) -> bool {
        if self.is_full() {
            return false;
        }
        self.items.push(minutia);
        true
    }

    #[inline]
    pub fn get(&self, index: usize) -> &Minutia {
        &self.items[index]
    }

    #[inline]
    pub fn get_mut(&mut self, index: usize) -> &mut Minutia {
        &mut self.items[index]
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Minutia> {
        self.items.iter()
    }

    pub fn as_slice(&self) -> &[Minutia] {
        &self.items
    }

    /// Keep only minutiae satisfying `keep`. Neighbor annotations become
    /// stale and are cleared.
    pub fn retain(&mut self, keep: impl FnMut(&Minutia) -> bool) {
        self.items.retain(keep);
        for m in &mut self.items {
            m.neighbors.clear();
            m.ridge_counts.clear();
        }
    }
}
