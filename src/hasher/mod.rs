//! Feature hashing of bags.
//!
//! A bag of arbitrary cardinality is folded into a vector of dimension 2^bits (default 24 bits).
//! Each label is hashed with MurmurHash3 x86 32 bits, seed 0, on its utf-8 bytes.
//! The low bits of the hash give the dimension, the highest bit gives the sign (+1 if set, -1 otherwise)
//! applied to the weight before accumulation. This keeps collisions from biasing the vector towards positive values.
//!
//! A reverse index, mapping dimensions to the labels hashed into them, can be collected for inspection of collisions.


/// MurmurHash3 x86 32 bits
pub mod murmur3;

/// Sparse vectors and the hashing of bags
pub mod fvec;

pub use murmur3::murmur3_32;
pub use fvec::*;
