//! End-to-end pipeline over a [`GraphSource`].
//!
//! Construction consumes the graph it runs on, while verification and the
//! refiners need the full graph intact. The [`Solver`] therefore asks its
//! source for a freshly populated graph at the start of every pass.

use std::time::Instant;

use rand::Rng;
use tracing::{debug, info};

use crate::anneal::{AnnealConfig, AnnealConfigError, AnnealResult, anneal};
use crate::cull::{CullMode, cull};
use crate::dictionary::GraphSource;
use crate::fvs::construct_fvs;
use crate::graph::DefinitionGraph;
use crate::oracle::{Oracle, verify_by_cascade};

/// Runs the engine's passes against graphs built from one source.
#[derive(Debug, Clone)]
pub struct Solver<S> {
    source: S,
}

impl<S: GraphSource> Solver<S> {
    /// Wraps `source`.
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// The wrapped source.
    pub fn source(&self) -> &S {
        &self.source
    }

    /// Populates and returns a fresh graph.
    pub fn build_graph(&self) -> DefinitionGraph {
        let started = Instant::now();
        let mut graph = DefinitionGraph::new();
        self.source.populate(&mut graph);
        debug!(
            vertices = graph.size(),
            edges = graph.edge_count(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "graph populated"
        );
        graph
    }

    /// Words with no definition words of their own.
    pub fn free_words(&self) -> Vec<String> {
        self.build_graph().free_words()
    }

    /// Builds a graph and runs the greedy constructor on it.
    pub fn construct(&self) -> Vec<String> {
        let mut graph = self.build_graph();
        let started = Instant::now();
        let removal = construct_fvs(&mut graph);
        info!(
            size = removal.len(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "construction pass done"
        );
        removal
    }

    /// Checks `removal` with the depth-first oracle, using the graph's own
    /// free words.
    pub fn verify(&self, removal: &[String]) -> bool {
        let graph = self.build_graph();
        let free = graph.free_words();
        Oracle::new(&graph, &free).is_feasible(removal)
    }

    /// Checks `removal` by deletion and cascade.
    pub fn verify_by_cascade(&self, removal: &[String]) -> bool {
        let graph = self.build_graph();
        let free = graph.free_words();
        verify_by_cascade(&graph, removal, &free)
    }

    /// Culls `removal` against a fresh graph.
    pub fn cull(&self, removal: &[String], mode: CullMode) -> Vec<String> {
        let graph = self.build_graph();
        let free = graph.free_words();
        let started = Instant::now();
        let culled = cull(&Oracle::new(&graph, &free), removal, mode);
        info!(
            before = removal.len(),
            after = culled.len(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "cull pass done"
        );
        culled
    }

    /// Anneals `removal` against a fresh graph.
    ///
    /// # Errors
    ///
    /// [`AnnealConfigError`] if `config` describes a schedule that never
    /// ends. The graph is not built in that case.
    pub fn anneal<R: Rng>(
        &self,
        removal: &[String],
        config: AnnealConfig,
        rng: R,
    ) -> Result<AnnealResult, AnnealConfigError> {
        config.validate()?;
        let graph = self.build_graph();
        let free = graph.free_words();
        let started = Instant::now();
        let result = anneal(Oracle::new(&graph, &free), removal, config, rng)?;
        info!(
            before = removal.len(),
            after = result.solution.len(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "anneal pass done"
        );
        Ok(result)
    }
}
