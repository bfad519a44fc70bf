//! Graph algorithms needed by the bag builders.
//!
//! The bag builders only see this interface, they do not walk the graph themselves
//! except for node labels and edges.
//!
//! Shortest paths : with [PetgraphAlgorithms] when many shortest paths of the same length
//! join two nodes, the one retained is the lexicographically smallest sequence of node indexes.
//! This comes from a breadth first search expanding successors in ascending index order, a node
//! keeping the path it was first discovered with. The choice does not depend on edge insertion order.
//!
//! Components : members are sorted by index and components are sorted by their smallest member.


use indexmap::IndexMap;

use petgraph::algo::tarjan_scc;
use petgraph::graph::NodeIndex;
use petgraph::unionfind::UnionFind;
use petgraph::Direction;

use super::labeled::*;
use crate::error::*;


/// for one source, maps each reachable node to a path from the source to it (both ends included).
/// The source itself is always present with the path \[source\].
pub type PathMap = IndexMap<NodeIndex, Vec<NodeIndex>>;

/// maps each source node to its [PathMap]
pub type AllPaths = IndexMap<NodeIndex, PathMap>;

/// a set of nodes
pub type Component = Vec<NodeIndex>;


/// The graph algorithms consumed by bag builders.
/// Implementations must be deterministic : the same graph must always give the same answer.
/// Errors are propagated unchanged to the caller of bag building.
pub trait GraphAlgorithms : Send + Sync {
    /// for each node, the nodes reachable within cutoff hops and a shortest path to each of them.
    fn shortest_paths_within(&self, graph : &LabeledGraph, cutoff : usize) -> SigResult<AllPaths>;
    /// partition of nodes ignoring edge direction
    fn weakly_connected_components(&self, graph : &LabeledGraph) -> SigResult<Vec<Component>>;
    /// partition of nodes in classes of mutual reachability
    fn strongly_connected_components(&self, graph : &LabeledGraph) -> SigResult<Vec<Component>>;
    /// strongly connected components that no edge leaves
    fn attracting_components(&self, graph : &LabeledGraph) -> SigResult<Vec<Component>>;
} // end of trait GraphAlgorithms



/// Implementation of [GraphAlgorithms] on top of petgraph.
#[derive(Copy, Clone, Debug, Default)]
pub struct PetgraphAlgorithms;


impl PetgraphAlgorithms {

    // bfs from source, successors in ascending index order, stops after cutoff hops
    fn paths_from(&self, graph : &LabeledGraph, source : NodeIndex, cutoff : usize) -> PathMap {
        let pgraph = graph.get_graph();
        let mut paths = PathMap::new();
        paths.insert(source, vec![source]);
        let mut frontier = vec![source];
        let mut depth = 0;
        while depth < cutoff && !frontier.is_empty() {
            let mut next = Vec::<NodeIndex>::new();
            for node in &frontier {
                let mut successors : Vec<NodeIndex> = pgraph.neighbors_directed(*node, Direction::Outgoing).collect();
                successors.sort_unstable();
                successors.dedup();
                for succ in successors {
                    if paths.contains_key(&succ) {
                        continue;
                    }
                    let mut path = paths[node].clone();
                    path.push(succ);
                    log::trace!("paths_from {:?} reached {:?} at depth {}", source, succ, depth + 1);
                    paths.insert(succ, path);
                    next.push(succ);
                }
            }
            frontier = next;
            depth += 1;
        }
        paths
    } // end of paths_from

} // end of impl PetgraphAlgorithms



// sorts members of each component and components by their first member
fn normalize(mut components : Vec<Component>) -> Vec<Component> {
    for comp in components.iter_mut() {
        comp.sort_unstable();
    }
    components.retain(|c| !c.is_empty());
    components.sort_unstable_by_key(|c| c[0]);
    components
}



impl GraphAlgorithms for PetgraphAlgorithms {

    fn shortest_paths_within(&self, graph : &LabeledGraph, cutoff : usize) -> SigResult<AllPaths> {
        let mut all = AllPaths::with_capacity(graph.node_count());
        for source in graph.node_indices() {
            all.insert(source, self.paths_from(graph, source, cutoff));
        }
        Ok(all)
    } // end of shortest_paths_within


    fn weakly_connected_components(&self, graph : &LabeledGraph) -> SigResult<Vec<Component>> {
        let nb_nodes = graph.node_count();
        let mut uf = UnionFind::<usize>::new(nb_nodes);
        for (src, dst) in graph.edges() {
            uf.union(src.index(), dst.index());
        }
        let labeling = uf.into_labeling();
        let mut components = IndexMap::<usize, Component>::new();
        for node in graph.node_indices() {
            components.entry(labeling[node.index()]).or_insert_with(Vec::new).push(node);
        }
        Ok(normalize(components.into_values().collect()))
    } // end of weakly_connected_components


    fn strongly_connected_components(&self, graph : &LabeledGraph) -> SigResult<Vec<Component>> {
        Ok(normalize(tarjan_scc(graph.get_graph())))
    }


    fn attracting_components(&self, graph : &LabeledGraph) -> SigResult<Vec<Component>> {
        let sccs = self.strongly_connected_components(graph)?;
        let mut comp_of = vec![0usize; graph.node_count()];
        for (rank, comp) in sccs.iter().enumerate() {
            for node in comp {
                comp_of[node.index()] = rank;
            }
        }
        let pgraph = graph.get_graph();
        let attracting : Vec<Component> = sccs.into_iter().enumerate()
            .filter(|(rank, comp)| {
                comp.iter().all(|n| pgraph.neighbors_directed(*n, Direction::Outgoing).all(|m| comp_of[m.index()] == *rank))
            })
            .map(|(_, comp)| comp)
            .collect();
        log::debug!("attracting_components : {} attracting components", attracting.len());
        Ok(attracting)
    } // end of attracting_components

} // end of impl GraphAlgorithms for PetgraphAlgorithms




// end of mod tests
