//! Bags built on shortest paths with a hop cutoff : neighborhoods, reachabilities and shortest paths.
//!
//! A node always reaches itself with a path of length 0, so the cutoff 0 gives one feature per node
//! (or per couple (i,i)).
//! All these bags have real weights.


use crate::error::*;
use crate::graph::{GraphAlgorithms, LabeledGraph};

use super::*;


/// For each node i : "label(i):" followed by the sorted labels of the nodes reached within size hops, i included.
pub fn bag_of_neighborhoods(graph : &LabeledGraph, algos : &dyn GraphAlgorithms, size : usize) -> SigResult<Bag<f64>> {
    let paths = algos.shortest_paths_within(graph, size)?;
    let mut bag = Bag::<f64>::new();
    for (source, reachable) in &paths {
        if reachable.is_empty() {
            continue;
        }
        let neighbours = sorted_join(reachable.keys().map(|n| graph.get_label(*n)));
        bag.add(format!("{}:{}", graph.get_label(*source), neighbours));
    }
    Ok(bag)
} // end of bag_of_neighborhoods


/// For each node i and each node j reached from i within depth hops (j = i included) : "label(i):label(j)".
pub fn bag_of_reachabilities(graph : &LabeledGraph, algos : &dyn GraphAlgorithms, depth : usize) -> SigResult<Bag<f64>> {
    let paths = algos.shortest_paths_within(graph, depth)?;
    let mut bag = Bag::<f64>::new();
    for (source, reachable) in &paths {
        let source_label = graph.get_label(*source);
        for target in reachable.keys() {
            bag.add(format!("{}:{}", source_label, graph.get_label(*target)));
        }
    }
    Ok(bag)
} // end of bag_of_reachabilities


/// For each couple (i,j) joined by a path of at most maxlen hops : labels along one shortest path, joined by '-'.
/// The shortest path retained among equal length ones is the choice of algos.
pub fn bag_of_shortest_paths(graph : &LabeledGraph, algos : &dyn GraphAlgorithms, maxlen : usize) -> SigResult<Bag<f64>> {
    let paths = algos.shortest_paths_within(graph, maxlen)?;
    let mut bag = Bag::<f64>::new();
    for reachable in paths.values() {
        for path in reachable.values() {
            if path.is_empty() {
                continue;
            }
            let labels : Vec<&str> = path.iter().map(|n| graph.get_label(*n)).collect();
            bag.add(labels.join("-"));
        }
    }
    Ok(bag)
} // end of bag_of_shortest_paths



// end of mod tests
