//! Construct a labeled graph from csv files.
//!
//! A graph is stored in a directory with 2 files :
//! - nodes.csv : one record per node, fields *id* and *label*.
//! - edges.csv : one record per directed edge, fields *source* and *target* refering to node ids.
//!
//! Both files have a header line. Node ids can be any string (a function address or name in a call graph),
//! they are remapped to node indexes in order of appearance and kept as node names.
//! Labels must be valid utf-8 as they are hashed as utf-8 bytes.


use anyhow::anyhow;

use std::fs::OpenOptions;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use csv::ReaderBuilder;
use indexmap::IndexMap;
use petgraph::graph::NodeIndex;
use serde::Deserialize;

use crate::graph::LabeledGraph;


/// name of the node file in a graph directory
pub const NODES_FILE : &str = "nodes.csv";
/// name of the edge file in a graph directory
pub const EDGES_FILE : &str = "edges.csv";


#[derive(Debug, Deserialize)]
struct EdgeRecord {
    source : String,
    target : String,
}


fn open_reader(filepath : &Path, delim : u8) -> anyhow::Result<csv::Reader<BufReader<std::fs::File>>> {
    let fileres = OpenOptions::new().read(true).open(filepath);
    if fileres.is_err() {
        log::error!("graph_from_csv : could not open file {:?}", filepath.as_os_str());
        return Err(anyhow!("graph_from_csv could not open file {}", filepath.display()));
    }
    let bufreader = BufReader::new(fileres?);
    Ok(ReaderBuilder::new().delimiter(delim).flexible(false).has_headers(true).from_reader(bufreader))
}


/// loads the graph stored in directory dir, delim is the field delimiter of both files
pub fn graph_from_csv(dir : &Path, delim : u8) -> anyhow::Result<LabeledGraph> {
    //
    // first we read nodes, as raw bytes to catch labels not in utf-8
    //
    let mut rdr = open_reader(&dir.join(NODES_FILE), delim)?;
    let mut graph = LabeledGraph::new();
    let mut idmap = IndexMap::<String, NodeIndex>::new();
    let mut nb_record = 0;
    for result in rdr.byte_records() {
        let record = result?;
        nb_record += 1;
        if record.len() != 2 {
            return Err(anyhow!("{} : record {} has {} fields, expecting id and label", NODES_FILE, nb_record, record.len()));
        }
        let id = match std::str::from_utf8(&record[0]) {
            Ok(id) => id.to_string(),
            Err(_) => { return Err(anyhow!("{} : node id of record {} is not utf-8", NODES_FILE, nb_record)); }
        };
        if idmap.contains_key(&id) {
            return Err(anyhow!("{} : node id {} defined twice", NODES_FILE, id));
        }
        let node = graph.add_node_bytes(&record[1], Some(&id))?;
        idmap.insert(id, node);
    }
    log::debug!("graph_from_csv read {} nodes in {:?}", nb_record, dir);
    //
    // now edges
    //
    let mut rdr = open_reader(&dir.join(EDGES_FILE), delim)?;
    let mut nb_record = 0;
    for result in rdr.deserialize() {
        let record : EdgeRecord = result?;
        nb_record += 1;
        let src = idmap.get(&record.source).ok_or_else(|| anyhow!("{} : record {} unknown source {}", EDGES_FILE, nb_record, record.source))?;
        let dst = idmap.get(&record.target).ok_or_else(|| anyhow!("{} : record {} unknown target {}", EDGES_FILE, nb_record, record.target))?;
        graph.add_edge(*src, *dst)?;
    }
    log::info!("graph_from_csv {:?} : {} nodes, {} edges", dir, graph.node_count(), graph.edge_count());
    Ok(graph)
} // end of graph_from_csv


/// loads all graphs, each one being identified by the name of its directory
pub fn corpus_from_csv(dirs : &[PathBuf], delim : u8) -> anyhow::Result<Vec<(String, LabeledGraph)>> {
    let mut graphs = Vec::<(String, LabeledGraph)>::with_capacity(dirs.len());
    for dir in dirs {
        let id = dir.file_name().map(|s| s.to_string_lossy().to_string()).unwrap_or_else(|| dir.display().to_string());
        let graph = graph_from_csv(dir, delim)?;
        graphs.push((id, graph));
    }
    Ok(graphs)
} // end of corpus_from_csv



#[cfg(test)]
mod tests {

use super::*;
use crate::error::SigError;

use std::fs;
use std::io::Write;

fn log_init_test() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn write_graph(name : &str, nodes : &[u8], edges : &[u8]) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("graphsig_csv_{}_{}", name, std::process::id()));
    let _ = fs::remove_dir_all(&dir);
    fs::create_dir_all(&dir).unwrap();
    fs::File::create(dir.join(NODES_FILE)).unwrap().write_all(nodes).unwrap();
    fs::File::create(dir.join(EDGES_FILE)).unwrap().write_all(edges).unwrap();
    dir
}


#[test]
fn load_call_graph() {
    log_init_test();
    //
    let dir = write_graph("call", b"id,label\n0x400,main\n0x4a0,printf\n0x500,helper\n",
                    b"source,target\n0x400,0x4a0\n0x400,0x500\n0x500,0x4a0\n0x400,0x4a0\n");
    let graph = graph_from_csv(&dir, b',').unwrap();
    assert_eq!(graph.node_count(), 3);
    assert_eq!(graph.edge_count(), 3);
    assert_eq!(graph.get_label(NodeIndex::new(1)), "printf");
    assert_eq!(graph.get_name(NodeIndex::new(2)), Some("0x500"));
    //
    let corpus = corpus_from_csv(&[dir.clone()], b',').unwrap();
    assert_eq!(corpus.len(), 1);
    assert!(corpus[0].0.starts_with("graphsig_csv_call"));
    let _ = fs::remove_dir_all(&dir);
} // end of load_call_graph


#[test]
fn unknown_edge_endpoint() {
    log_init_test();
    //
    let dir = write_graph("unknown", b"id,label\na,x\n", b"source,target\na,b\n");
    let res = graph_from_csv(&dir, b',');
    assert!(res.is_err());
    let _ = fs::remove_dir_all(&dir);
}


#[test]
fn label_not_utf8() {
    log_init_test();
    //
    let dir = write_graph("latin1", b"id,label\na,caf\xe9\n", b"source,target\n");
    let err = graph_from_csv(&dir, b',').unwrap_err();
    assert!(matches!(err.downcast_ref::<SigError>(), Some(SigError::Encoding(_))));
    let _ = fs::remove_dir_all(&dir);
}

}  // end of mod tests
