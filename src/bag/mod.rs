//! Bags of structural features.
//!
//! A bag maps a feature label, a string built from node labels, to the number of times this
//! feature occurs in a graph. Eight strategies, see [BagMode], enumerate different families of
//! features: nodes, edges, components of 3 kinds, neighborhoods, reachabilities, shortest paths.
//!
//! Node, edge and component bags count with integers, neighborhood, reachability and
//! shortest path bags with reals. Both are carried by [AnyBag].


use indexmap::IndexMap;
use num_traits::Signed;

use std::fmt::Debug;
use std::ops::AddAssign;

/// the registry of modes and their parameters
pub mod mode;

/// nodes and edges
pub mod local;

/// the 3 component based bags
pub mod components;

/// bags relying on shortest paths within a cutoff
pub mod paths;

pub use mode::*;


/// The weights a bag (and a hashed vector) can accumulate.
/// Signed as hashing multiplies weights by +1 or -1.
pub trait Weight : Signed + Copy + AddAssign + PartialOrd + Debug + std::fmt::Display + Send + Sync {}

impl Weight for i64 {}
impl Weight for f64 {}



/// Feature label to weight.
/// Iteration is done in order of first insertion so that accumulating a bag is deterministic.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Bag<W : Weight> {
    counts : IndexMap<String, W, ahash::RandomState>,
} // end of Bag


impl <W> Bag<W>
    where W : Weight {

    pub fn new() -> Self {
        Bag{counts : IndexMap::default()}
    }

    /// add one occurrence of label
    pub fn add(&mut self, label : String) {
        self.add_weight(label, W::one());
    }

    /// accumulate weight on label
    pub fn add_weight(&mut self, label : String, weight : W) {
        match self.counts.get_mut(&label) {
            Some(val) => {
                *val += weight;
                log::trace!("augmenting {} new weight {}", label, *val);
            }
            None => {
                log::trace!("adding {} with weight {}", label, weight);
                self.counts.insert(label, weight);
            }
        }
    } // end of add_weight

    /// returns weight of label, 0 if absent
    pub fn get(&self, label : &str) -> W {
        self.counts.get(label).copied().unwrap_or_else(W::zero)
    }

    /// number of distinct labels
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, W)> + '_ {
        self.counts.iter().map(|(k, w)| (k.as_str(), *w))
    }

} // end of impl Bag


impl <W : Weight> FromIterator<(String, W)> for Bag<W> {
    fn from_iter<T : IntoIterator<Item = (String, W)>>(iter : T) -> Self {
        let mut bag = Bag::new();
        for (label, weight) in iter {
            bag.add_weight(label, weight);
        }
        bag
    }
}



/// The output of a bag builder, integer or real weighted.
#[derive(Clone, Debug, PartialEq)]
pub enum AnyBag {
    Counts(Bag<i64>),
    Reals(Bag<f64>),
}

impl AnyBag {
    pub fn len(&self) -> usize {
        match self {
            AnyBag::Counts(bag) => bag.len(),
            AnyBag::Reals(bag) => bag.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// weight of label converted to f64, 0. if absent
    pub fn get_f64(&self, label : &str) -> f64 {
        match self {
            AnyBag::Counts(bag) => bag.get(label) as f64,
            AnyBag::Reals(bag) => bag.get(label),
        }
    }
} // end of impl AnyBag


impl From<Bag<i64>> for AnyBag {
    fn from(bag : Bag<i64>) -> Self {
        AnyBag::Counts(bag)
    }
}

impl From<Bag<f64>> for AnyBag {
    fn from(bag : Bag<f64>) -> Self {
        AnyBag::Reals(bag)
    }
}



/// labels of nodes sorted and joined by '-'
pub(crate) fn sorted_join<'a, I>(labels : I) -> String
    where I : Iterator<Item = &'a str> {
    let mut labels : Vec<&str> = labels.collect();
    labels.sort_unstable();
    labels.join("-")
}



#[cfg(test)]
mod tests {

use super::*;

#[test]
fn bag_accumulates() {
    let mut bag = Bag::<i64>::new();
    bag.add("A".to_string());
    bag.add("B".to_string());
    bag.add_weight("A".to_string(), 3);
    assert_eq!(bag.len(), 2);
    assert_eq!(bag.get("A"), 4);
    assert_eq!(bag.get("C"), 0);
    // equality does not depend on insertion order
    let other : Bag<i64> = vec![("B".to_string(), 1), ("A".to_string(), 4)].into_iter().collect();
    assert_eq!(bag, other);
}

#[test]
fn join_is_sorted() {
    assert_eq!(sorted_join(["c", "a", "b", "a"].into_iter()), "a-a-b-c");
    assert_eq!(sorted_join(std::iter::empty()), "");
}

}  // end of mod tests
