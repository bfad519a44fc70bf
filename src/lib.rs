//! Feature hashing of labeled directed graphs.
//!
//! Structural features of a graph (nodes, edges, components, neighborhoods, reachabilities, shortest paths)
//! are enumerated as strings and counted in a [bag](crate::bag::Bag). The bag is then folded into
//! a signed sparse vector of dimension 2^bits with MurmurHash3, see [hasher].
//! The vectors are suitable for linear classifiers.
//!
//! ```
//! use graphsig::prelude::*;
//!
//! fn main() -> Result<(), SigError> {
//!     let graph = LabeledGraph::from_parts(&["main", "printf"], &[(0, 1)])?;
//!     let bag = build_bag(&graph, 1, &BagParams::default(), &PetgraphAlgorithms)?;
//!     let (vector, _) = HasherParams::default().hash(&bag)?;
//!     assert_eq!(vector.len(), 1);
//!     Ok(())
//! }
//! ```


use env_logger::{Builder};

#[macro_use]
extern crate  lazy_static;

lazy_static! {
    static ref LOG: u64 = {
        let res = init_log();
        res
    };
}

// install a logger facility
fn init_log() -> u64 {
    let _ = Builder::from_default_env().try_init();
    log::info!("logger initialized");
    return 1;
}

/// initializes logging from RUST_LOG, once per process
pub fn init_logger() {
    lazy_static::initialize(&LOG);
}

pub mod error;

pub mod graph;

pub mod bag;

pub mod hasher;

pub mod corpus;

pub mod io;

pub mod prelude;
