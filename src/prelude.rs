//! To ease access to most frequently items
//! 


pub use crate::error::*;

pub use crate::graph::*;

pub use crate::bag::{AnyBag, Bag, BagMode, BagParams, Weight, build_bag, mode_name, MODE_NAMES};

pub use crate::hasher::*;

pub use crate::corpus::*;

pub use crate::io::csv::*;
pub use crate::io::output::*;
