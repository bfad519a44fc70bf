//! Feature extraction of one graph and of a corpus of graphs.
//!
//! Graphs of a corpus are processed independently on the rayon thread pool, each one reads only its graph
//! and produces only its own vector. There is no aggregation across graphs : results are
//! associated to the identifier of their graph.


use cpu_time::ProcessTime;
use rayon::prelude::*;
use std::time::SystemTime;

use crate::bag::BagMode;
use crate::error::*;
use crate::graph::{GraphAlgorithms, LabeledGraph};
use crate::hasher::{FeatureVector, HasherParams, ReverseIndex};


/// result of feature extraction for one graph
#[derive(Clone, Debug, PartialEq)]
pub struct Extraction {
    /// the hashed vector
    pub vector : FeatureVector,
    /// labels to dimension if requested
    pub reverse_index : Option<ReverseIndex>,
    /// number of distinct features in the bag before hashing
    pub nb_features : usize,
} // end of Extraction


/// bag building followed by hashing for one graph
pub fn extract(graph : &LabeledGraph, mode : &BagMode, hparams : &HasherParams, algos : &dyn GraphAlgorithms) -> SigResult<Extraction> {
    let bag = mode.build(graph, algos)?;
    let (vector, reverse_index) = hparams.hash(&bag)?;
    Ok(Extraction{vector, reverse_index, nb_features : bag.len()})
} // end of extract


/// extraction on all graphs of a corpus, in parallel.
/// Returns one result per graph with the graph identifier, a failing graph does not stop the others.
pub fn extract_corpus<Id>(graphs : &[(Id, LabeledGraph)], mode : &BagMode, hparams : &HasherParams,
                    algos : &dyn GraphAlgorithms) -> Vec<(Id, SigResult<Extraction>)>
    where Id : Clone + Send + Sync + std::fmt::Debug {
    //
    log::info!("extract_corpus : {} graphs, mode : {}, bits : {}, nb cpus : {}", graphs.len(), mode, hparams.get_bits(), num_cpus::get());
    let cpu_start = ProcessTime::now();
    let sys_start = SystemTime::now();
    //
    let results : Vec<(Id, SigResult<Extraction>)> = graphs.par_iter()
        .map(|(id, graph)| {
            let res = extract(graph, mode, hparams, algos);
            if let Err(e) = &res {
                log::error!("extraction failed for graph {:?} : {}", id, e);
            }
            (id.clone(), res)
        })
        .collect();
    //
    log::info!("extract_corpus sys time(s) {:.2e} cpu time(s) {:.2e}",
            sys_start.elapsed().map(|d| d.as_secs_f64()).unwrap_or(0.),
            cpu_start.elapsed().as_secs_f64());
    results
} // end of extract_corpus



#[cfg(test)]
mod tests {

use super::*;
use crate::bag::{BagParams, MODE_NAMES};
use crate::graph::PetgraphAlgorithms;

fn log_init_test() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn corpus() -> Vec<(String, LabeledGraph)> {
    (0..20).map(|i| {
        let labels : Vec<String> = (0..(3 + i % 5)).map(|j| format!("fn{}", (i * j) % 4)).collect();
        let nb = labels.len();
        let edges : Vec<(usize, usize)> = (0..nb).map(|j| (j, (j * 3 + i) % nb)).collect();
        (format!("graph{}", i), LabeledGraph::from_parts(&labels, &edges).unwrap())
    }).collect()
}


#[test]
fn corpus_matches_sequential() {
    log_init_test();
    //
    let graphs = corpus();
    let algos = PetgraphAlgorithms;
    let params = BagParams::new(Some(1), Some(2), Some(3));
    let hparams = HasherParams::new(12, true);
    for (id, _) in MODE_NAMES.iter() {
        let mode = BagMode::from_id(*id, &params).unwrap();
        let results = extract_corpus(&graphs, &mode, &hparams, &algos);
        assert_eq!(results.len(), graphs.len());
        for (name, res) in results {
            let graph = &graphs.iter().find(|(g, _)| *g == name).unwrap().1;
            let expected = extract(graph, &mode, &hparams, &algos).unwrap();
            let got = res.unwrap();
            assert_eq!(got, expected);
            assert!(got.vector.len() <= got.nb_features);
            assert!(got.reverse_index.is_some());
        }
    }
} // end of corpus_matches_sequential


#[test]
fn failures_stay_per_graph() {
    log_init_test();
    //
    let graphs = corpus();
    let hparams = HasherParams::new(40, false);
    let results = extract_corpus(&graphs, &BagMode::Nodes, &hparams, &PetgraphAlgorithms);
    assert_eq!(results.len(), graphs.len());
    assert!(results.iter().all(|(_, r)| matches!(r, Err(SigError::InvalidParameter{ name : "bits", .. }))));
}

}  // end of mod tests
