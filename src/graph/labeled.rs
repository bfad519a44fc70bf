//! This module describes the node data we use in petgraph.
//! Each node has one discrete label, a String, and possibly the name it had in the data file
//! it was loaded from (a function name in a call graph for example).
//!
//! Edges are directed, carry no label and no weight. Adding an edge twice keeps one edge.
//!

use petgraph::graph::{Graph, NodeIndex};
use petgraph::stable_graph::DefaultIx;
use petgraph::visit::EdgeRef;
use petgraph::Directed;

use crate::error::*;


/// Data attached to a node. Called Nweight as petgraph items attached to an entity are called weights.
#[derive(Clone, Debug)]
pub struct Nweight {
    /// the label hashed in features
    label : String,
    /// original identification of the node, if any
    name : Option<String>,
}

impl Nweight {
    ///
    pub fn new(label : String, name : Option<String>) -> Self {
        Nweight{label, name}
    }

    pub fn get_label(&self) -> &str {
        &self.label
    }

    /// original name of the node in its data file
    pub fn get_name(&self) -> Option<&str> {
        self.name.as_deref()
    }
} // end of Nweight


//=============================================================================


/// A directed graph with a string label on each node.
/// Node identifiers are petgraph NodeIndex, i.e ranks of insertion.
#[derive(Clone, Debug, Default)]
pub struct LabeledGraph {
    graph : Graph<Nweight, (), Directed, DefaultIx>,
} // end of LabeledGraph


impl LabeledGraph {

    pub fn new() -> Self {
        LabeledGraph{ graph : Graph::default() }
    }

    pub fn with_capacity(nb_nodes : usize, nb_edges : usize) -> Self {
        LabeledGraph{ graph : Graph::with_capacity(nb_nodes, nb_edges) }
    }

    /// builds a graph from a list of labels (node i gets labels\[i\]) and a list of edges given as couple of ranks
    pub fn from_parts<S : AsRef<str>>(labels : &[S], edges : &[(usize, usize)]) -> SigResult<Self> {
        let mut graph = LabeledGraph::with_capacity(labels.len(), edges.len());
        for label in labels {
            graph.add_node(label.as_ref());
        }
        for (src, dst) in edges {
            graph.add_edge(NodeIndex::new(*src), NodeIndex::new(*dst))?;
        }
        Ok(graph)
    } // end of from_parts

    /// adds a node and returns its index
    pub fn add_node(&mut self, label : &str) -> NodeIndex {
        self.graph.add_node(Nweight::new(label.to_string(), None))
    }

    /// adds a node from a raw label. Labels are hashed as utf-8 so raw bytes must be valid utf-8.
    pub fn add_node_bytes(&mut self, label : &[u8], name : Option<&str>) -> SigResult<NodeIndex> {
        match std::str::from_utf8(label) {
            Ok(label) => {
                let name = name.map(|s| s.to_string());
                Ok(self.graph.add_node(Nweight::new(label.to_string(), name)))
            }
            Err(e) => {
                log::error!("add_node_bytes : label {:?} is not utf-8", label);
                Err(SigError::Encoding(format!("{:?} : {}", label, e)))
            }
        }
    } // end of add_node_bytes

    /// adds directed edge src -> dst. An already present edge is not duplicated.
    pub fn add_edge(&mut self, src : NodeIndex, dst : NodeIndex) -> SigResult<()> {
        let nb_nodes = self.graph.node_count();
        for node in [src, dst] {
            if node.index() >= nb_nodes {
                return Err(SigError::parameter("edge", format!("node {} not in graph of {} nodes", node.index(), nb_nodes)));
            }
        }
        self.graph.update_edge(src, dst, ());
        Ok(())
    } // end of add_edge

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// label of a node. The node must belong to the graph.
    pub fn get_label(&self, node : NodeIndex) -> &str {
        self.graph[node].get_label()
    }

    pub fn get_name(&self, node : NodeIndex) -> Option<&str> {
        self.graph[node].get_name()
    }

    /// iterator over node indexes in ascending order
    pub fn node_indices(&self) -> impl Iterator<Item = NodeIndex> + '_ {
        self.graph.node_indices()
    }

    /// iterator over edges as couples (source, target)
    pub fn edges(&self) -> impl Iterator<Item = (NodeIndex, NodeIndex)> + '_ {
        self.graph.edge_references().map(|e| (e.source(), e.target()))
    }

    /// access to the underlying petgraph structure
    pub fn get_graph(&self) -> &Graph<Nweight, (), Directed, DefaultIx> {
        &self.graph
    }

} // end of impl LabeledGraph



#[cfg(test)]
mod tests {

use super::*;

fn log_init_test() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[test]
fn edges_are_not_duplicated() {
    log_init_test();
    //
    let mut graph = LabeledGraph::from_parts(&["A", "B"], &[(0, 1)]).unwrap();
    graph.add_edge(NodeIndex::new(0), NodeIndex::new(1)).unwrap();
    assert_eq!(graph.edge_count(), 1);
    // the reverse edge is another edge
    graph.add_edge(NodeIndex::new(1), NodeIndex::new(0)).unwrap();
    assert_eq!(graph.edge_count(), 2);
    assert_eq!(graph.get_label(NodeIndex::new(1)), "B");
} // end of edges_are_not_duplicated


#[test]
fn edge_to_unknown_node() {
    log_init_test();
    //
    let res = LabeledGraph::from_parts(&["A"], &[(0, 3)]);
    assert!(matches!(res, Err(SigError::InvalidParameter{ .. })));
}


#[test]
fn raw_labels_must_be_utf8() {
    log_init_test();
    //
    let mut graph = LabeledGraph::new();
    let node = graph.add_node_bytes("fopen".as_bytes(), Some("0x401000")).unwrap();
    assert_eq!(graph.get_label(node), "fopen");
    assert_eq!(graph.get_name(node), Some("0x401000"));
    let res = graph.add_node_bytes(&[0x66, 0xff, 0xfe], None);
    assert!(matches!(res, Err(SigError::Encoding(_))));
    assert_eq!(graph.node_count(), 1);
}

}  // end of mod tests
