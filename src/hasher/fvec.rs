//! Hashing a bag into a signed sparse vector of dimension 2^bits.


use sprs::CsVecI;

use std::collections::{BTreeMap, BTreeSet};

use crate::bag::{AnyBag, Bag, Weight};
use crate::error::*;

use super::murmur3::murmur3_32;


/// default number of bits, i.e 16_777_216 dimensions
pub const DEFAULT_BITS : u32 = 24;

/// seed used for all feature hashing
pub const HASH_SEED : u32 = 0;


/// Hashing parameters
#[derive(Debug, Copy, Clone)]
pub struct HasherParams {
    /// vectors have dimension 2^bits. Must be in 1..=32
    pub bits : u32,
    /// do we collect the reverse index
    pub reverse_index : bool,
} // end of HasherParams


impl HasherParams {
    pub fn new(bits : u32, reverse_index : bool) -> Self {
        HasherParams{bits, reverse_index}
    }

    ///
    pub fn get_bits(&self) -> u32 { self.bits }

    ///
    pub fn want_reverse_index(&self) -> bool { self.reverse_index }

    /// checks bits is in 1..=32, so that a bad value is reported before any graph is processed
    pub fn check(&self) -> SigResult<()> {
        check_bits(self.bits)
    }

    /// hashes a bag of any weight type
    pub fn hash(&self, bag : &AnyBag) -> SigResult<(FeatureVector, Option<ReverseIndex>)> {
        let res = match bag {
            AnyBag::Counts(bag) => {
                let (v, index) = hash_bag(bag, self.bits, self.reverse_index)?;
                (FeatureVector::Counts(v), index)
            }
            AnyBag::Reals(bag) => {
                let (v, index) = hash_bag(bag, self.bits, self.reverse_index)?;
                (FeatureVector::Reals(v), index)
            }
        };
        Ok(res)
    } // end of hash
} // end of impl HasherParams


impl Default for HasherParams {
    fn default() -> Self {
        HasherParams{bits : DEFAULT_BITS, reverse_index : false}
    }
}



/// dimension to the set of labels hashed into it. Diagnostic only.
pub type ReverseIndex = BTreeMap<u32, BTreeSet<String>>;


/// A vector of dimension 2^bits, absent dimensions are 0.
/// Dimensions are iterated in ascending order.
/// A dimension where contributions cancel is kept with an explicit 0.
#[derive(Clone, Debug, PartialEq)]
pub struct SparseVector<W : Weight> {
    bits : u32,
    entries : BTreeMap<u32, W>,
} // end of SparseVector


impl <W> SparseVector<W>
    where W : Weight {

    pub fn new(bits : u32) -> Self {
        SparseVector{bits, entries : BTreeMap::new()}
    }

    ///
    pub fn get_bits(&self) -> u32 { self.bits }

    /// the dimension of the space, 2^bits
    pub fn get_dimension(&self) -> u64 {
        1u64 << self.bits
    }

    /// value at dim, 0 if not stored
    pub fn get(&self, dim : u32) -> W {
        self.entries.get(&dim).copied().unwrap_or_else(W::zero)
    }

    /// number of stored dimensions
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (u32, W)> + '_ {
        self.entries.iter().map(|(d, w)| (*d, *w))
    }

    fn accumulate(&mut self, dim : u32, weight : W) {
        *self.entries.entry(dim).or_insert_with(W::zero) += weight;
    }

    /// conversion to a sprs sparse vector of dimension 2^bits
    pub fn to_csvec(&self) -> CsVecI<W, usize> {
        let indices : Vec<usize> = self.entries.keys().map(|d| *d as usize).collect();
        let data : Vec<W> = self.entries.values().copied().collect();
        CsVecI::new(1usize << self.bits, indices, data)
    }

} // end of impl SparseVector



/// A hashed bag, keeping the weight type of the bag it comes from
#[derive(Clone, Debug, PartialEq)]
pub enum FeatureVector {
    Counts(SparseVector<i64>),
    Reals(SparseVector<f64>),
}

impl FeatureVector {
    pub fn len(&self) -> usize {
        match self {
            FeatureVector::Counts(v) => v.len(),
            FeatureVector::Reals(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// entries converted to f64, in ascending dimension
    pub fn to_f64_entries(&self) -> Vec<(u32, f64)> {
        match self {
            FeatureVector::Counts(v) => v.iter().map(|(d, w)| (d, w as f64)).collect(),
            FeatureVector::Reals(v) => v.iter().collect(),
        }
    }
} // end of impl FeatureVector



fn check_bits(bits : u32) -> SigResult<()> {
    if bits == 0 || bits > 32 {
        return Err(SigError::parameter("bits", format!("must be in 1..=32, got {}", bits)));
    }
    Ok(())
}


/// Maps bag to a sparse vector of dimension 2^bits.
/// If want_reverse_index is true, the labels contributing to each dimension are also returned.
pub fn hash_bag<W>(bag : &Bag<W>, bits : u32, want_reverse_index : bool) -> SigResult<(SparseVector<W>, Option<ReverseIndex>)>
    where W : Weight {
    //
    check_bits(bits)?;
    let mask = ((1u64 << bits) - 1) as u32;
    let mut fvec = SparseVector::<W>::new(bits);
    let mut reverse = if want_reverse_index { Some(ReverseIndex::new()) } else { None };
    //
    for (label, weight) in bag.iter() {
        let hash = murmur3_32(label.as_bytes(), HASH_SEED);
        let dim = hash & mask;
        let sign = if hash >> 31 == 1 { W::one() } else { -W::one() };
        log::trace!("label {} hash {:#010x} dim {} sign {}", label, hash, dim, sign);
        fvec.accumulate(dim, sign * weight);
        if let Some(index) = reverse.as_mut() {
            index.entry(dim).or_insert_with(BTreeSet::new).insert(label.to_string());
        }
    }
    log::debug!("hash_bag : {} labels into {} dimensions (bits : {})", bag.len(), fvec.len(), bits);
    Ok((fvec, reverse))
} // end of hash_bag



#[cfg(test)]
mod tests {

use super::*;

fn log_init_test() {
    let _ = env_logger::builder().is_test(true).try_init();
}


#[test]
fn single_entries() {
    log_init_test();
    // murmur3("A") = 0x54dcf7ce, high bit 0, murmur3("B") = 0xcca66a8a, high bit 1
    let bag : Bag<i64> = vec![("A".to_string(), 3)].into_iter().collect();
    let (v, index) = hash_bag(&bag, 24, false).unwrap();
    assert!(index.is_none());
    assert_eq!(v.len(), 1);
    assert_eq!(v.get(0x54dcf7ce & 0xffffff), -3);
    //
    let bag : Bag<f64> = vec![("B".to_string(), 2.5)].into_iter().collect();
    let (v, _) = hash_bag(&bag, 24, false).unwrap();
    assert_eq!(v.get(0xcca66a8a & 0xffffff), 2.5);
} // end of single_entries


#[test]
fn dimensions_are_bounded() {
    log_init_test();
    //
    let bag : Bag<i64> = (0..500).map(|i| (format!("f{}-g{}", i, i % 7), 1 + i % 3)).collect();
    for bits in [1u32, 3, 8, 16, 24, 32] {
        let (v, _) = hash_bag(&bag, bits, false).unwrap();
        assert!(v.iter().all(|(d, _)| (d as u64) < (1u64 << bits)));
        assert_eq!(v.get_dimension(), 1u64 << bits);
    }
    // with 32 bits no collision is expected on so few labels
    let (v, _) = hash_bag(&bag, 32, false).unwrap();
    assert_eq!(v.len(), 500);
    for (label, w) in bag.iter() {
        let h = murmur3_32(label.as_bytes(), 0);
        assert_eq!(v.get(h).abs(), w);
    }
} // end of dimensions_are_bounded


#[test]
fn collisions_cancel() {
    log_init_test();
    // with 4 bits "f1" and "f11" both go to dimension 1, "f1" with sign -1 and "f11" with sign +1
    let bag : Bag<i64> = vec![("f1".to_string(), 2), ("f11".to_string(), 2)].into_iter().collect();
    let (v, index) = hash_bag(&bag, 4, true).unwrap();
    assert_eq!(v.len(), 1);
    assert_eq!(v.get(1), 0);
    let index = index.unwrap();
    let labels : Vec<&str> = index[&1].iter().map(|s| s.as_str()).collect();
    assert_eq!(labels, vec!["f1", "f11"]);
} // end of collisions_cancel


#[test]
fn empty_bag_and_bad_bits() {
    log_init_test();
    //
    let bag = Bag::<f64>::new();
    let (v, index) = hash_bag(&bag, 24, true).unwrap();
    assert!(v.is_empty());
    assert!(index.unwrap().is_empty());
    assert!(matches!(hash_bag(&bag, 0, false), Err(SigError::InvalidParameter{ name : "bits", .. })));
    assert!(matches!(hash_bag(&bag, 33, false), Err(SigError::InvalidParameter{ name : "bits", .. })));
    // the same check is available before hashing anything
    assert!(HasherParams::new(1, false).check().is_ok());
    assert!(HasherParams::new(32, true).check().is_ok());
    assert!(matches!(HasherParams::new(0, false).check(), Err(SigError::InvalidParameter{ name : "bits", .. })));
    assert!(matches!(HasherParams::new(33, false).check(), Err(SigError::InvalidParameter{ name : "bits", .. })));
}


#[test]
fn csvec_conversion() {
    log_init_test();
    //
    let bag : Bag<i64> = vec![("A".to_string(), 1), ("B".to_string(), 4)].into_iter().collect();
    let (v, _) = hash_bag(&bag, 24, false).unwrap();
    let csvec = v.to_csvec();
    assert_eq!(csvec.dim(), 1 << 24);
    assert_eq!(csvec.nnz(), 2);
    assert_eq!(csvec.get(0xcca66a8a & 0xffffff), Some(&4));
    assert_eq!(csvec.get(0x54dcf7ce & 0xffffff), Some(&-1));
}


#[test]
fn hasher_params_keep_weight_type() {
    log_init_test();
    //
    let params = HasherParams::default();
    assert_eq!(params.get_bits(), 24);
    let bag = AnyBag::Reals(vec![("A:A".to_string(), 2.)].into_iter().collect());
    let (v, index) = params.hash(&bag).unwrap();
    assert!(index.is_none());
    match v {
        FeatureVector::Reals(v) => assert_eq!(v.get(0x7cf97ce7 & 0xffffff), -2.),
        _ => panic!("expected real vector"),
    }
}

}  // end of mod tests
