//! Bag modes and their parameters.
//!
//! Modes are identified by an integer in 0..=7, the registry [MODE_NAMES] is built once and never modified.
//! A mode is resolved to a [BagMode] which carries its validated parameter and dispatches to one builder.


use std::fmt;

use crate::error::*;
use crate::graph::{GraphAlgorithms, LabeledGraph};

use super::*;


lazy_static! {
    /// mode id to mode name, ranked by id
    pub static ref MODE_NAMES : Vec<(i64, &'static str)> = vec![
        (0, "bag_of_nodes"),
        (1, "bag_of_edges"),
        (2, "bag_of_weakly_connected_components"),
        (3, "bag_of_strongly_connected_components"),
        (4, "bag_of_attracting_components"),
        (5, "bag_of_neighborhoods"),
        (6, "bag_of_reachabilities"),
        (7, "bag_of_shortest_paths"),
    ];
}


/// Parameters of bag modes, as received from a caller.
/// Values are signed so that negative values can be detected and rejected.
/// Only the parameter of the requested mode is required.
#[derive(Debug, Copy, Clone, Default)]
pub struct BagParams {
    /// number of hops defining a neighborhood (mode 5)
    pub size : Option<i64>,
    /// number of hops for reachability (mode 6)
    pub depth : Option<i64>,
    /// maximal shortest path length in hops (mode 7)
    pub maxlen : Option<i64>,
} // end of BagParams


impl BagParams {
    pub fn new(size : Option<i64>, depth : Option<i64>, maxlen : Option<i64>) -> Self {
        BagParams{size, depth, maxlen}
    }
}


// checks a hop count parameter
fn hops(name : &'static str, value : Option<i64>) -> SigResult<usize> {
    match value {
        Some(v) if v >= 0 => Ok(v as usize),
        Some(v) => Err(SigError::parameter(name, format!("must be non negative, got {}", v))),
        None => Err(SigError::parameter(name, "required by mode")),
    }
}


/// The eight bag building strategies.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BagMode {
    Nodes,
    Edges,
    WeaklyConnectedComponents,
    StronglyConnectedComponents,
    AttractingComponents,
    Neighborhoods { size : usize },
    Reachabilities { depth : usize },
    ShortestPaths { maxlen : usize },
} // end of BagMode


impl BagMode {

    /// resolves a mode id, validating the parameter this mode requires
    pub fn from_id(id : i64, params : &BagParams) -> SigResult<Self> {
        let mode = match id {
            0 => BagMode::Nodes,
            1 => BagMode::Edges,
            2 => BagMode::WeaklyConnectedComponents,
            3 => BagMode::StronglyConnectedComponents,
            4 => BagMode::AttractingComponents,
            5 => BagMode::Neighborhoods { size : hops("size", params.size)? },
            6 => BagMode::Reachabilities { depth : hops("depth", params.depth)? },
            7 => BagMode::ShortestPaths { maxlen : hops("maxlen", params.maxlen)? },
            _ => {
                log::error!("BagMode::from_id unknown mode {}", id);
                return Err(SigError::InvalidMode(id));
            }
        };
        Ok(mode)
    } // end of from_id

    /// the registry id of the mode
    pub fn get_id(&self) -> i64 {
        match self {
            BagMode::Nodes => 0,
            BagMode::Edges => 1,
            BagMode::WeaklyConnectedComponents => 2,
            BagMode::StronglyConnectedComponents => 3,
            BagMode::AttractingComponents => 4,
            BagMode::Neighborhoods { .. } => 5,
            BagMode::Reachabilities { .. } => 6,
            BagMode::ShortestPaths { .. } => 7,
        }
    }

    /// snake case name as found in the registry
    pub fn get_name(&self) -> &'static str {
        let id = self.get_id();
        MODE_NAMES.iter().find(|(i, _)| *i == id).map(|(_, name)| *name).unwrap_or("")
    }

    /// true if the bag produced by this mode has real weights
    pub fn is_real(&self) -> bool {
        matches!(self, BagMode::Neighborhoods{..} | BagMode::Reachabilities{..} | BagMode::ShortestPaths{..})
    }

    /// builds the bag of graph
    pub fn build(&self, graph : &LabeledGraph, algos : &dyn GraphAlgorithms) -> SigResult<AnyBag> {
        log::debug!("building {} on graph with {} nodes {} edges", self, graph.node_count(), graph.edge_count());
        let bag : AnyBag = match *self {
            BagMode::Nodes => local::bag_of_nodes(graph).into(),
            BagMode::Edges => local::bag_of_edges(graph).into(),
            BagMode::WeaklyConnectedComponents => components::bag_of_weakly_connected_components(graph, algos)?.into(),
            BagMode::StronglyConnectedComponents => components::bag_of_strongly_connected_components(graph, algos)?.into(),
            BagMode::AttractingComponents => components::bag_of_attracting_components(graph, algos)?.into(),
            BagMode::Neighborhoods { size } => paths::bag_of_neighborhoods(graph, algos, size)?.into(),
            BagMode::Reachabilities { depth } => paths::bag_of_reachabilities(graph, algos, depth)?.into(),
            BagMode::ShortestPaths { maxlen } => paths::bag_of_shortest_paths(graph, algos, maxlen)?.into(),
        };
        log::debug!("{} : {} distinct features", self.get_name(), bag.len());
        Ok(bag)
    } // end of build

} // end of impl BagMode


/// display name of the mode, with its parameter when it has one
impl fmt::Display for BagMode {
    fn fmt(&self, f : &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.get_name().replace('_', " "))?;
        match self {
            BagMode::Neighborhoods { size } => write!(f, " (size: {})", size),
            BagMode::Reachabilities { depth } => write!(f, " (depth: {})", depth),
            BagMode::ShortestPaths { maxlen } => write!(f, " (maxlen: {})", maxlen),
            _ => Ok(()),
        }
    }
}


/// description of a mode id with its parameters, as displayed to users
pub fn mode_name(id : i64, params : &BagParams) -> SigResult<String> {
    Ok(BagMode::from_id(id, params)?.to_string())
}


/// builds the bag of graph for mode id.
/// Fails on unknown mode, on a missing or negative parameter, and on failure of algos.
pub fn build_bag(graph : &LabeledGraph, id : i64, params : &BagParams, algos : &dyn GraphAlgorithms) -> SigResult<AnyBag> {
    BagMode::from_id(id, params)?.build(graph, algos)
}



// end of mod tests
