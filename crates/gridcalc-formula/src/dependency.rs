//! Dependency tracking for cell recalculation
//!
//! Every walk keeps its own work stack on the heap, so chains and cycles of
//! any length are handled without deep recursion.

use ahash::{AHashMap, AHashSet};
use gridcalc_core::CellAddress;

/// Edges between formula cells and the cells they read
#[derive(Debug, Default, Clone)]
pub struct DependencyGraph {
    /// Cell → formula cells that read it
    readers: AHashMap<CellAddress, AHashSet<CellAddress>>,
    /// Formula cell → cells it reads
    sources: AHashMap<CellAddress, AHashSet<CellAddress>>,
}

impl DependencyGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record that `dependent` reads `precedent`
    pub fn add_dependency(&mut self, precedent: CellAddress, dependent: CellAddress) {
        self.readers.entry(precedent).or_default().insert(dependent);
        self.sources.entry(dependent).or_default().insert(precedent);
    }

    /// Forget everything a cell reads
    ///
    /// Cells that read `cell` keep their edges, so they are still
    /// recalculated when it changes.
    pub fn clear_precedents(&mut self, cell: CellAddress) {
        let Some(sources) = self.sources.remove(&cell) else {
            return;
        };
        for source in sources {
            if let Some(readers) = self.readers.get_mut(&source) {
                readers.remove(&cell);
                if readers.is_empty() {
                    self.readers.remove(&source);
                }
            }
        }
    }

    /// Cells whose formulas read `cell`
    pub fn dependents(&self, cell: CellAddress) -> impl Iterator<Item = CellAddress> + '_ {
        self.readers
            .get(&cell)
            .into_iter()
            .flat_map(|set| set.iter().copied())
    }

    /// Cells the formula in `cell` reads
    pub fn precedents(&self, cell: CellAddress) -> impl Iterator<Item = CellAddress> + '_ {
        self.sources
            .get(&cell)
            .into_iter()
            .flat_map(|set| set.iter().copied())
    }

    /// Transitive dependents of `origin` in evaluation order
    ///
    /// Every cell comes after all the cells it reads within the result.
    /// `origin` itself is excluded, and each cell appears once even when a
    /// cycle leads back to it.
    pub fn recalc_order(&self, origin: CellAddress) -> Vec<CellAddress> {
        let mut finished = Vec::new();
        let mut done = AHashSet::new();
        let mut on_path = AHashSet::new();

        // Depth-first post-order; a frame is a cell and its unvisited readers
        on_path.insert(origin);
        let mut stack = vec![(origin, self.dependents(origin))];
        while let Some((cell, readers)) = stack.last_mut() {
            match readers.next() {
                Some(reader) => {
                    if !done.contains(&reader) && on_path.insert(reader) {
                        stack.push((reader, self.dependents(reader)));
                    }
                }
                None => {
                    let cell = *cell;
                    stack.pop();
                    on_path.remove(&cell);
                    done.insert(cell);
                    finished.push(cell);
                }
            }
        }

        // The origin finishes last
        finished.pop();
        finished.reverse();
        finished
    }

    /// Whether `cell` can reach itself by following what it reads
    pub fn has_circular_reference(&self, cell: CellAddress) -> bool {
        let mut seen = AHashSet::new();
        let mut pending: Vec<CellAddress> = self.precedents(cell).collect();

        while let Some(current) = pending.pop() {
            if current == cell {
                return true;
            }
            if seen.insert(current) {
                pending.extend(self.precedents(current));
            }
        }

        false
    }
}
