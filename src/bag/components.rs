//! Bags of components. A component is described by the sorted labels of its nodes joined by '-',
//! components with the same description accumulate.


use crate::error::*;
use crate::graph::{Component, GraphAlgorithms, LabeledGraph};

use super::*;


fn bag_of_components(graph : &LabeledGraph, components : &[Component]) -> Bag<i64> {
    let mut bag = Bag::<i64>::new();
    for comp in components {
        if comp.is_empty() {
            continue;
        }
        bag.add(sorted_join(comp.iter().map(|n| graph.get_label(*n))));
    }
    bag
} // end of bag_of_components


pub fn bag_of_weakly_connected_components(graph : &LabeledGraph, algos : &dyn GraphAlgorithms) -> SigResult<Bag<i64>> {
    let components = algos.weakly_connected_components(graph)?;
    Ok(bag_of_components(graph, &components))
}


pub fn bag_of_strongly_connected_components(graph : &LabeledGraph, algos : &dyn GraphAlgorithms) -> SigResult<Bag<i64>> {
    let components = algos.strongly_connected_components(graph)?;
    Ok(bag_of_components(graph, &components))
}


pub fn bag_of_attracting_components(graph : &LabeledGraph, algos : &dyn GraphAlgorithms) -> SigResult<Bag<i64>> {
    let components = algos.attracting_components(graph)?;
    Ok(bag_of_components(graph, &components))
}



// end of mod tests
