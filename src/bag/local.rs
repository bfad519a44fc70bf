//! Bags built from single nodes and single edges. No graph algorithm needed.


use crate::graph::LabeledGraph;

use super::*;


/// one feature per node : its label
pub fn bag_of_nodes(graph : &LabeledGraph) -> Bag<i64> {
    let mut bag = Bag::<i64>::new();
    for node in graph.node_indices() {
        bag.add(graph.get_label(node).to_string());
    }
    bag
} // end of bag_of_nodes


/// one feature per directed edge : "source label-target label"
pub fn bag_of_edges(graph : &LabeledGraph) -> Bag<i64> {
    let mut bag = Bag::<i64>::new();
    for (src, dst) in graph.edges() {
        bag.add(format!("{}-{}", graph.get_label(src), graph.get_label(dst)));
    }
    bag
} // end of bag_of_edges



// end of mod tests
