//! The reaction graph derived from a substance list and an equation list.
//!
//! Nodes are substances, addressed by [`SubstanceId`] (their position in
//! the substance list). Edges are either [`Relation::CoReactant`], between
//! two substances that react together, or [`Relation::Produces`], from a
//! reactant to one of its products. Parallel edges are kept: every time an
//! equation names a pair, the pair gets another edge.
//!
//! Formulas are resolved to substances by a linear first-match scan, so a
//! rebuild costs O(equations × reactants² × substances). The graph is
//! small enough in practice that no index is kept.

use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::EdgeRef;
use petgraph::Direction;

use crate::equation::Equation;
use crate::formula::Formula;
use crate::store::Substance;

/// Position of a substance in the store's substance list.
///
/// Removing a substance shifts the ids of every substance after it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubstanceId(usize);

impl SubstanceId {
    pub fn new(index: usize) -> Self {
        Self(index)
    }

    pub fn index(self) -> usize {
        self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Relation {
    /// The source appears as a reactant alongside the target.
    CoReactant,
    /// The source is a reactant in an equation that yields the target.
    Produces,
}

#[derive(Debug, Clone, Default)]
pub struct ReactionGraph {
    graph: DiGraph<SubstanceId, Relation>,
}

impl ReactionGraph {
    /// Build the graph from scratch.
    ///
    /// Reactants and products with no matching substance are skipped
    /// without error; equations may mention substances that are not
    /// tracked.
    pub fn build(substances: &[Substance], equations: &[Equation]) -> Self {
        let mut graph = DiGraph::with_capacity(substances.len(), 0);
        for i in 0..substances.len() {
            graph.add_node(SubstanceId(i));
        }

        for equation in equations {
            let reactants = equation.reactants();
            for (i, r1) in reactants.iter().enumerate() {
                let Some(a) = find_substance(substances, &r1.formula) else {
                    continue;
                };
                for (j, r2) in reactants.iter().enumerate() {
                    if i == j {
                        continue;
                    }
                    let Some(b) = find_substance(substances, &r2.formula) else {
                        continue;
                    };
                    graph.add_edge(node(a), node(b), Relation::CoReactant);
                    graph.add_edge(node(b), node(a), Relation::CoReactant);
                }
                for p in equation.products() {
                    if let Some(c) = find_substance(substances, &p.formula) {
                        graph.add_edge(node(a), node(c), Relation::Produces);
                    }
                }
            }
        }

        log::trace!(
            "rebuilt reaction graph: {} substances, {} edges",
            graph.node_count(),
            graph.edge_count()
        );
        Self { graph }
    }

    pub fn inner(&self) -> &DiGraph<SubstanceId, Relation> {
        &self.graph
    }

    pub fn substance_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Substances that react together with `id`, one entry per edge, in
    /// the order the edges were created.
    pub fn co_reactants(&self, id: SubstanceId) -> Vec<SubstanceId> {
        self.targets(id, Relation::CoReactant)
    }

    /// Substances produced by reactions that consume `id`, one entry per
    /// edge, in the order the edges were created.
    pub fn products(&self, id: SubstanceId) -> Vec<SubstanceId> {
        self.targets(id, Relation::Produces)
    }

    /// Every edge as `(source, target, relation)`, in creation order.
    pub fn edges(&self) -> impl Iterator<Item = (SubstanceId, SubstanceId, Relation)> + '_ {
        self.graph.edge_indices().filter_map(|e| {
            let (s, t) = self.graph.edge_endpoints(e)?;
            Some((self.graph[s], self.graph[t], self.graph[e]))
        })
    }

    fn targets(&self, id: SubstanceId, relation: Relation) -> Vec<SubstanceId> {
        if id.0 >= self.graph.node_count() {
            return Vec::new();
        }
        // petgraph walks a node's edges newest first.
        let mut edges: Vec<_> = self
            .graph
            .edges_directed(node(id), Direction::Outgoing)
            .filter(|e| *e.weight() == relation)
            .map(|e| (e.id(), self.graph[e.target()]))
            .collect();
        edges.sort_by_key(|(e, _)| *e);
        edges.into_iter().map(|(_, target)| target).collect()
    }
}

/// First substance whose formula is structurally equal to `formula`.
pub fn find_substance(substances: &[Substance], formula: &Formula) -> Option<SubstanceId> {
    substances
        .iter()
        .position(|s| s.formula == *formula)
        .map(SubstanceId)
}

fn node(id: SubstanceId) -> NodeIndex {
    NodeIndex::new(id.0)
}
