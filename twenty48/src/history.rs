use std::collections::VecDeque;

use twenty48_types::Grid;

/// Bounded stack of previous grids. Pushing past the bound drops the oldest snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct History {
    snapshots: VecDeque<Grid>,
    capacity: usize,
}

impl History {
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self {
            snapshots: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    pub fn push(&mut self, grid: Grid) {
        if self.capacity == 0 {
            return;
        }
        if self.snapshots.len() == self.capacity {
            self.snapshots.pop_front();
        }
        self.snapshots.push_back(grid);
    }

    pub fn pop(&mut self) -> Option<Grid> {
        self.snapshots.pop_back()
    }

    pub fn clear(&mut self) {
        self.snapshots.clear();
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Most recent snapshot, the one `pop` would return.
    #[must_use]
    pub fn last(&self) -> Option<&Grid> {
        self.snapshots.back()
    }
}
