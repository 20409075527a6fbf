//! Read-only views of a [`DefinitionGraph`]: a serde node-link document and
//! a `petgraph` copy used for strongly-connected-component statistics.

use std::collections::HashMap;

use petgraph::algo::tarjan_scc;
use petgraph::graph::{DiGraph, NodeIndex};
use serde::{Deserialize, Serialize};

use super::DefinitionGraph;

/// A vertex entry in a [`NodeLinkGraph`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeName {
    /// The word.
    pub name: String,
}

/// A directed link in a [`NodeLinkGraph`]: `source` occurs in the
/// definition of `target`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    /// Defining word.
    pub source: String,
    /// Defined word.
    pub target: String,
}

/// Node-link document of the live part of a graph, in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeLinkGraph {
    /// Live vertices.
    pub nodes: Vec<NodeName>,
    /// Live edges.
    pub links: Vec<Link>,
}

/// Cycle structure of a graph, computed with Tarjan's SCC algorithm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SccSummary {
    /// Strongly connected components with more than one vertex.
    pub cyclic_components: usize,
    /// Vertices belonging to some cyclic component.
    pub vertices_on_cycles: usize,
    /// Size of the largest component.
    pub largest_component: usize,
}

impl DefinitionGraph {
    /// Builds the node-link view of every live vertex and edge.
    pub fn to_node_link(&self) -> NodeLinkGraph {
        let mut doc = NodeLinkGraph::default();
        for id in self.live_ids() {
            let Some(source) = self.key_of(id) else {
                continue;
            };
            doc.nodes.push(NodeName {
                name: source.to_owned(),
            });
            for succ in self.live_out(id) {
                if let Some(target) = self.key_of(succ) {
                    doc.links.push(Link {
                        source: source.to_owned(),
                        target: target.to_owned(),
                    });
                }
            }
        }
        doc
    }

    /// Copies the live part of the graph into a `petgraph` [`DiGraph`] whose
    /// node weights are the vertex keys.
    pub fn to_petgraph(&self) -> DiGraph<String, ()> {
        let mut pg = DiGraph::with_capacity(self.size(), self.edge_count());
        let mut mapping: HashMap<usize, NodeIndex> = HashMap::with_capacity(self.size());

        for id in self.live_ids() {
            if let Some(key) = self.key_of(id) {
                mapping.insert(id.index(), pg.add_node(key.to_owned()));
            }
        }
        for id in self.live_ids() {
            let Some(&src) = mapping.get(&id.index()) else {
                continue;
            };
            for succ in self.live_out(id) {
                if let Some(&dst) = mapping.get(&succ.index()) {
                    pg.add_edge(src, dst, ());
                }
            }
        }
        pg
    }

    /// Summarises the strongly connected components of the live graph.
    ///
    /// Self-loops are never stored, so only components of two or more
    /// vertices contain cycles.
    pub fn scc_summary(&self) -> SccSummary {
        let components = tarjan_scc(&self.to_petgraph());
        let cyclic: Vec<usize> = components
            .iter()
            .map(Vec::len)
            .filter(|&len| len > 1)
            .collect();
        SccSummary {
            cyclic_components: cyclic.len(),
            vertices_on_cycles: cyclic.iter().sum(),
            largest_component: components.iter().map(Vec::len).max().unwrap_or(0),
        }
    }
}
