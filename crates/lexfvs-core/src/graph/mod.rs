//! Vertex/edge store for definition graphs.
//!
//! An edge `a → b` means "word `a` occurs in the definition of word `b`".
//! Every vertex carries two adjacency lists: `out` (the words it helps
//! define) and `in` (the words used in its own definition).
//!
//! # Tombstones
//!
//! Vertices live in an arena of slots addressed by a stable [`VertexId`].
//! [`DefinitionGraph::delete_vertex`] clears the slot in place (empty key,
//! empty adjacency) and drops the key from the lookup map, but it never
//! splices the id out of its neighbours' adjacency lists. Neighbours may
//! therefore hold ids of dead slots; every degree count and traversal in
//! this crate goes through [`DefinitionGraph::live_out`] /
//! [`DefinitionGraph::live_in`], which filter them.
//!
//! # Scheduling
//!
//! The graph also owns the [`Scheduler`] used by the greedy constructor.
//! Deleting a vertex removes its queue item and refreshes the priority of
//! every live vertex that pointed at it, so queue priorities always reflect
//! live out-degree.
pub mod export;
pub mod scheduler;

pub use export::{Link, NodeLinkGraph, NodeName, SccSummary};
pub use scheduler::Scheduler;

use std::collections::HashMap;

/// Stable arena index of a vertex slot.
///
/// Ids are never reused: re-adding a deleted key allocates a fresh slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VertexId(usize);

impl VertexId {
    /// Returns the raw slot index.
    pub fn index(self) -> usize {
        self.0
    }
}

/// A single arena slot.
///
/// A slot whose key is empty is a tombstone.
#[derive(Debug, Clone, Default)]
pub struct Vertex {
    key: String,
    out: Vec<VertexId>,
    incoming: Vec<VertexId>,
}

impl Vertex {
    /// The word this vertex stands for; empty for a tombstone.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Returns `true` unless the slot has been tombstoned.
    pub fn is_live(&self) -> bool {
        !self.key.is_empty()
    }
}

/// Directed definition graph with lazy (tombstoned) deletion.
#[derive(Debug, Clone, Default)]
pub struct DefinitionGraph {
    slots: Vec<Vertex>,
    index: HashMap<String, VertexId>,
    scheduler: Scheduler,
}

impl DefinitionGraph {
    /// Creates an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty graph with room for `vertices` slots.
    pub fn with_capacity(vertices: usize) -> Self {
        Self {
            slots: Vec::with_capacity(vertices),
            index: HashMap::with_capacity(vertices),
            scheduler: Scheduler::new(),
        }
    }

    // -----------------------------------------------------------------------
    // Population
    // -----------------------------------------------------------------------

    /// Adds a vertex for `key`. No-op if it already exists or `key` is empty.
    pub fn add_vertex(&mut self, key: &str) {
        if key.is_empty() || self.index.contains_key(key) {
            return;
        }
        let id = VertexId(self.slots.len());
        self.slots.push(Vertex {
            key: key.to_owned(),
            out: Vec::new(),
            incoming: Vec::new(),
        });
        self.index.insert(key.to_owned(), id);
    }

    /// Adds the edge `from → to`.
    ///
    /// No-op when either endpoint is unknown, when `from == to`, or when the
    /// edge already exists. Otherwise both adjacency lists are extended, so
    /// the edge is always stored symmetrically.
    pub fn add_edge(&mut self, from: &str, to: &str) {
        if from == to {
            return;
        }
        let (Some(&src), Some(&dst)) = (self.index.get(from), self.index.get(to)) else {
            return;
        };
        if self.has_edge_ids(src, dst) {
            return;
        }
        debug_assert!(
            !self.slots[dst.0].incoming.contains(&src),
            "in-list of {to:?} already references {from:?} without a matching out entry"
        );
        self.slots[src.0].out.push(dst);
        self.slots[dst.0].incoming.push(src);
    }

    // -----------------------------------------------------------------------
    // Lookup
    // -----------------------------------------------------------------------

    /// Returns `true` if a live vertex with this key exists.
    pub fn contains(&self, key: &str) -> bool {
        self.index.contains_key(key)
    }

    /// Looks up the slot id for a live key.
    pub fn vertex_id(&self, key: &str) -> Option<VertexId> {
        self.index.get(key).copied()
    }

    /// Returns the key of a live vertex, or `None` for tombstones and
    /// out-of-range ids.
    pub fn key_of(&self, id: VertexId) -> Option<&str> {
        self.slots
            .get(id.0)
            .filter(|v| v.is_live())
            .map(Vertex::key)
    }

    /// Returns `true` if `id` names a live slot.
    pub fn is_live(&self, id: VertexId) -> bool {
        self.slots.get(id.0).is_some_and(Vertex::is_live)
    }

    /// Number of live vertices.
    pub fn size(&self) -> usize {
        self.index.len()
    }

    /// Returns `true` when no live vertex remains.
    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// Number of arena slots, live or dead. Valid ids are `0..slot_count()`.
    pub fn slot_count(&self) -> usize {
        self.slots.len()
    }

    /// Number of edges whose endpoints are both live.
    pub fn edge_count(&self) -> usize {
        self.live_ids().map(|id| self.out_degree(id)).sum()
    }

    /// Ids of all live vertices, in insertion order.
    pub fn live_ids(&self) -> impl Iterator<Item = VertexId> + '_ {
        self.slots
            .iter()
            .enumerate()
            .filter(|(_, v)| v.is_live())
            .map(|(i, _)| VertexId(i))
    }

    /// Keys of all live vertices, in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> + '_ {
        self.slots.iter().filter(|v| v.is_live()).map(Vertex::key)
    }

    /// Live successors of `id` (the words it helps define).
    pub fn live_out(&self, id: VertexId) -> impl Iterator<Item = VertexId> + '_ {
        self.raw_out(id)
            .iter()
            .copied()
            .filter(|&n| self.is_live(n))
    }

    /// Live predecessors of `id` (the words in its definition).
    pub fn live_in(&self, id: VertexId) -> impl Iterator<Item = VertexId> + '_ {
        self.raw_in(id)
            .iter()
            .copied()
            .filter(|&n| self.is_live(n))
    }

    /// Live out-degree of `id`; zero for tombstones.
    pub fn out_degree(&self, id: VertexId) -> usize {
        self.live_out(id).count()
    }

    /// Live in-degree of `id`; zero for tombstones.
    pub fn in_degree(&self, id: VertexId) -> usize {
        self.live_in(id).count()
    }

    /// Keys of the live successors of `key`. Empty for unknown keys.
    pub fn out_neighbors(&self, key: &str) -> Vec<&str> {
        self.vertex_id(key)
            .map(|id| self.live_out(id).filter_map(|n| self.key_of(n)).collect())
            .unwrap_or_default()
    }

    /// Keys of the live predecessors of `key`. Empty for unknown keys.
    pub fn in_neighbors(&self, key: &str) -> Vec<&str> {
        self.vertex_id(key)
            .map(|id| self.live_in(id).filter_map(|n| self.key_of(n)).collect())
            .unwrap_or_default()
    }

    /// Returns `true` if the live edge `from → to` exists.
    pub fn has_edge(&self, from: &str, to: &str) -> bool {
        match (self.vertex_id(from), self.vertex_id(to)) {
            (Some(src), Some(dst)) => self.has_edge_ids(src, dst),
            _ => false,
        }
    }

    /// Words with zero live in-degree, in insertion order.
    ///
    /// Called on an intact graph this is the free-word set: words that never
    /// occur inside another word's definition.
    pub fn free_words(&self) -> Vec<String> {
        self.live_ids()
            .filter(|&id| self.in_degree(id) == 0)
            .filter_map(|id| self.key_of(id).map(str::to_owned))
            .collect()
    }

    // -----------------------------------------------------------------------
    // Deletion
    // -----------------------------------------------------------------------

    /// Tombstones the vertex for `key` and returns the keys of its live
    /// successors as they were just before deletion.
    ///
    /// Unknown keys return an empty list.
    pub fn delete_vertex(&mut self, key: &str) -> Vec<String> {
        let Some(id) = self.vertex_id(key) else {
            return Vec::new();
        };
        self.remove_vertex(id)
            .into_iter()
            .filter_map(|n| self.key_of(n).map(str::to_owned))
            .collect()
    }

    /// Id-level deletion used by the cascade. Returns the snapshot of live
    /// successors captured before the slot was cleared.
    pub(crate) fn remove_vertex(&mut self, id: VertexId) -> Vec<VertexId> {
        if !self.is_live(id) {
            return Vec::new();
        }
        let successors: Vec<VertexId> = self.live_out(id).collect();
        let predecessors: Vec<VertexId> = self.live_in(id).collect();

        let slot = &mut self.slots[id.0];
        let key = std::mem::take(&mut slot.key);
        slot.out = Vec::new();
        slot.incoming = Vec::new();
        self.index.remove(&key);
        self.scheduler.remove(id);

        // Predecessors just lost an out-edge.
        self.refresh_priorities(&predecessors);
        successors
    }

    // -----------------------------------------------------------------------
    // Scheduler plumbing
    // -----------------------------------------------------------------------

    /// Seeds the scheduler with one item per live vertex, keyed by live
    /// out-degree. Any previous queue content is discarded.
    pub fn seed_scheduler(&mut self) {
        let items: Vec<(VertexId, usize)> =
            self.live_ids().map(|id| (id, self.out_degree(id))).collect();
        self.scheduler.seed(items, self.slots.len());
    }

    /// Recomputes queue priorities for the given vertices. Dead or unqueued
    /// ids are skipped.
    pub fn refresh_priorities(&mut self, ids: &[VertexId]) {
        for &id in ids {
            if self.is_live(id) {
                let degree = self.out_degree(id);
                self.scheduler.update(id, degree);
            }
        }
    }

    /// Removes and returns the queued vertex with the highest priority.
    pub fn pop_max(&mut self) -> Option<VertexId> {
        self.scheduler.pop_max().map(|(id, _)| id)
    }

    /// Read access to the scheduler.
    pub fn scheduler(&self) -> &Scheduler {
        &self.scheduler
    }

    // -----------------------------------------------------------------------
    // Internal accessors
    // -----------------------------------------------------------------------

    /// Unfiltered in-list of `id`; may contain tombstoned ids.
    pub(crate) fn raw_in(&self, id: VertexId) -> &[VertexId] {
        self.slots
            .get(id.0)
            .map(|v| v.incoming.as_slice())
            .unwrap_or(&[])
    }

    /// Unfiltered out-list of `id`; may contain tombstoned ids.
    pub(crate) fn raw_out(&self, id: VertexId) -> &[VertexId] {
        self.slots
            .get(id.0)
            .map(|v| v.out.as_slice())
            .unwrap_or(&[])
    }

    fn has_edge_ids(&self, src: VertexId, dst: VertexId) -> bool {
        self.raw_out(src).contains(&dst)
    }
}
