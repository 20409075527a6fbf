//! Feasibility oracle: does a removal set break every cycle?
//!
//! The stop set is the union of the candidate removal set and the free
//! words. Every other live vertex starts white. The oracle repeatedly picks
//! a white root and runs a depth-first search along `in` edges (from a word
//! to the words of its own definition):
//!
//! - a stop vertex is a hard boundary and is never entered;
//! - a black neighbour has been fully explored and is skipped;
//! - a gray neighbour is on the current path, so a cycle exists.
//!
//! The search uses an explicit stack; its depth is bounded only by the
//! number of live vertices. Every white vertex eventually serves as a root,
//! so the answer does not depend on the order in which roots are chosen.
//!
//! [`verify_by_cascade`] answers the same question independently, by
//! deleting the removal set from a copy of the graph and checking that the
//! zero in-degree cascade empties it.

use crate::fvs::cascade_strip;
use crate::graph::{DefinitionGraph, VertexId};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Color {
    Stop,
    White,
    Gray,
    Black,
}

/// Cycle-detection oracle bound to one graph and one free-word set.
///
/// Construction resolves the free words once; each query only resolves the
/// removal set.
#[derive(Debug, Clone)]
pub struct Oracle<'g> {
    graph: &'g DefinitionGraph,
    free: Vec<VertexId>,
}

impl<'g> Oracle<'g> {
    /// Binds the oracle to `graph`. Free words unknown to the graph are
    /// ignored.
    pub fn new(graph: &'g DefinitionGraph, free_words: &[String]) -> Self {
        let free = free_words
            .iter()
            .filter_map(|k| graph.vertex_id(k))
            .collect();
        Self { graph, free }
    }

    /// The graph this oracle inspects.
    pub fn graph(&self) -> &'g DefinitionGraph {
        self.graph
    }

    /// Returns `true` if removing `removal` (plus the free words) leaves the
    /// graph acyclic.
    pub fn is_feasible(&self, removal: &[String]) -> bool {
        self.check(removal.iter().map(String::as_str), std::iter::empty())
    }

    /// Like [`Oracle::is_feasible`], but ignores `removal[skip]`.
    ///
    /// Lets refiners test "the current set minus one member" without
    /// building the reduced set.
    pub fn is_feasible_without(&self, removal: &[String], skip: usize) -> bool {
        let reduced = removal
            .iter()
            .enumerate()
            .filter(|&(i, _)| i != skip)
            .map(|(_, k)| k.as_str());
        self.check(reduced, std::iter::empty())
    }

    /// Like [`Oracle::is_feasible`], but tries `roots` as DFS roots first (in
    /// the given order) before falling back to slot order.
    pub fn is_feasible_with_roots(&self, removal: &[String], roots: &[String]) -> bool {
        let root_ids = roots.iter().filter_map(|k| self.graph.vertex_id(k));
        self.check(removal.iter().map(String::as_str), root_ids)
    }

    fn check<'a>(
        &self,
        removal: impl Iterator<Item = &'a str>,
        preferred_roots: impl Iterator<Item = VertexId>,
    ) -> bool {
        let mut colors = self.initial_colors(removal);

        let roots = preferred_roots.chain(self.graph.live_ids());
        for root in roots {
            if colors[root.index()] != Color::White {
                continue;
            }
            if self.has_cycle_from(root, &mut colors) {
                return false;
            }
        }
        true
    }

    fn initial_colors<'a>(&self, removal: impl Iterator<Item = &'a str>) -> Vec<Color> {
        let mut colors = vec![Color::Stop; self.graph.slot_count()];
        for id in self.graph.live_ids() {
            colors[id.index()] = Color::White;
        }
        for id in removal.filter_map(|k| self.graph.vertex_id(k)) {
            colors[id.index()] = Color::Stop;
        }
        for id in &self.free {
            colors[id.index()] = Color::Stop;
        }
        colors
    }

    /// Iterative DFS along `in` edges from a white `root`.
    fn has_cycle_from(&self, root: VertexId, colors: &mut [Color]) -> bool {
        // Each frame: (vertex, index of the next in-list entry to examine).
        let mut stack: Vec<(VertexId, usize)> = vec![(root, 0)];
        colors[root.index()] = Color::Gray;

        while let Some(frame) = stack.last_mut() {
            let (node, cursor) = *frame;
            let preds = self.graph.raw_in(node);

            let Some(&next) = preds.get(cursor) else {
                colors[node.index()] = Color::Black;
                stack.pop();
                continue;
            };
            frame.1 += 1;

            // Tombstoned slots are colored Stop, so dead entries fall through.
            match colors.get(next.index()).copied().unwrap_or(Color::Stop) {
                Color::Stop | Color::Black => {}
                Color::Gray => return true,
                Color::White => {
                    colors[next.index()] = Color::Gray;
                    stack.push((next, 0));
                }
            }
        }
        false
    }
}

/// One-shot form of [`Oracle::is_feasible`].
pub fn verify(graph: &DefinitionGraph, removal: &[String], free_words: &[String]) -> bool {
    Oracle::new(graph, free_words).is_feasible(removal)
}

/// One-shot form of [`Oracle::is_feasible_with_roots`].
pub fn verify_with_roots(
    graph: &DefinitionGraph,
    removal: &[String],
    free_words: &[String],
    roots: &[String],
) -> bool {
    Oracle::new(graph, free_words).is_feasible_with_roots(removal, roots)
}

/// Independent feasibility check by deletion and cascade.
///
/// Deletes the removal set and the free words from a copy of `graph`, then
/// strips zero in-degree vertices until none remain. The residual graph was
/// acyclic exactly when nothing is left.
pub fn verify_by_cascade(
    graph: &DefinitionGraph,
    removal: &[String],
    free_words: &[String],
) -> bool {
    cascade_residue(graph, removal, free_words) == 0
}

/// Number of vertices the cascade cannot strip once `removal` and
/// `free_words` are deleted from a copy of `graph`. Those vertices lie on, or
/// downstream of, a cycle the removal set misses.
pub fn cascade_residue(graph: &DefinitionGraph, removal: &[String], free_words: &[String]) -> usize {
    let mut scratch = graph.clone();
    for key in removal.iter().chain(free_words) {
        scratch.delete_vertex(key);
    }
    cascade_strip(&mut scratch);
    scratch.size()
}
