//! Process flow diagram.
//!
//! A directed chain of stage nodes, each labelled with its hourly rate.
//! Rendering is limited to Graphviz DOT text and a one-line summary; drawing
//! is left to whatever consumes the DOT output.

use petgraph::algo::toposort;
use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::EdgeRef;
use serde::Serialize;
use std::collections::HashMap;
use tea_core::Real;

use crate::flow::FlowRates;
use crate::stage::ProcessStage;

/// A labelled stage on the diagram.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DiagramNode {
    pub stage: ProcessStage,
    pub rate: Real,
}

impl DiagramNode {
    /// `"<Stage>\n<rate> <unit>"` with two decimals.
    pub fn label(&self) -> String {
        format!(
            "{}\n{:.2} {}",
            self.stage.name(),
            self.rate,
            self.stage.rate_unit()
        )
    }
}

#[derive(Debug, Clone)]
pub struct ProcessFlowDiagram {
    graph: DiGraph<DiagramNode, ()>,
}

impl ProcessFlowDiagram {
    /// Build the stage chain from one evaluation of the flow model.
    pub fn from_flow_rates(flows: &FlowRates) -> Self {
        let mut graph = DiGraph::new();
        let mut index: HashMap<ProcessStage, NodeIndex> = HashMap::new();

        for stage in ProcessStage::ALL {
            let node = graph.add_node(DiagramNode {
                stage,
                rate: flows.stage_rate(stage),
            });
            index.insert(stage, node);
        }

        for stage in ProcessStage::ALL {
            let Some(next) = stage.downstream() else {
                continue;
            };
            if let (Some(&from), Some(&to)) = (index.get(&stage), index.get(&next)) {
                graph.add_edge(from, to, ());
            }
        }

        Self { graph }
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Nodes upstream first.
    pub fn ordered_nodes(&self) -> Vec<DiagramNode> {
        let order = toposort(&self.graph, None)
            .unwrap_or_else(|_| self.graph.node_indices().collect());
        order.into_iter().map(|ix| self.graph[ix]).collect()
    }

    /// Stage name pairs for every edge.
    pub fn edges(&self) -> Vec<(ProcessStage, ProcessStage)> {
        self.graph
            .edge_references()
            .map(|e| (self.graph[e.source()].stage, self.graph[e.target()].stage))
            .collect()
    }

    /// Graphviz DOT, left to right, filled boxes.
    pub fn to_dot(&self) -> String {
        let mut out = String::from("digraph {\n");
        out.push_str("    rankdir=LR\n");
        out.push_str("    node [shape=box, style=filled, fillcolor=lightblue]\n");
        for node in self.ordered_nodes() {
            let label = node.label().replace('\n', "\\n");
            out.push_str(&format!("    {} [label=\"{}\"]\n", node.stage.name(), label));
        }
        for (from, to) in self.edges() {
            out.push_str(&format!("    {} -> {}\n", from.name(), to.name()));
        }
        out.push_str("}\n");
        out
    }

    /// `Feedstock (125.00 kg/hr) -> Pretreatment (100.00 kg/hr) -> ...`
    pub fn chain_text(&self) -> String {
        self.ordered_nodes()
            .iter()
            .map(|n| format!("{} ({:.2} {})", n.stage.name(), n.rate, n.stage.rate_unit()))
            .collect::<Vec<_>>()
            .join(" -> ")
    }
}
