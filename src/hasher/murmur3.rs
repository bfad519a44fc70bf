//! MurmurHash3, x86 variant with 32 bits output.
//!
//! Implemented here rather than taken from a crate as feature vectors must be bit compatible
//! with vectors produced by other implementations of the reference algorithm.
//! All arithmetic is on u32 with explicit wrapping.


const C1 : u32 = 0xcc9e2d51;
const C2 : u32 = 0x1b873593;


#[inline]
fn mix_k1(mut k1 : u32) -> u32 {
    k1 = k1.wrapping_mul(C1);
    k1 = k1.rotate_left(15);
    k1.wrapping_mul(C2)
}


#[inline]
fn fmix32(mut h : u32) -> u32 {
    h ^= h >> 16;
    h = h.wrapping_mul(0x85ebca6b);
    h ^= h >> 13;
    h = h.wrapping_mul(0xc2b2ae35);
    h ^= h >> 16;
    h
}


/// hash of data with seed
pub fn murmur3_32(data : &[u8], seed : u32) -> u32 {
    let mut h1 = seed;
    let mut blocks = data.chunks_exact(4);
    for block in &mut blocks {
        // little endian load
        let k1 = u32::from_le_bytes([block[0], block[1], block[2], block[3]]);
        h1 ^= mix_k1(k1);
        h1 = h1.rotate_left(13);
        h1 = h1.wrapping_mul(5).wrapping_add(0xe6546b64);
    }
    // tail, 0 to 3 bytes
    let tail = blocks.remainder();
    let mut k1 : u32 = 0;
    for (i, b) in tail.iter().enumerate() {
        k1 |= (*b as u32) << (8 * i);
    }
    if !tail.is_empty() {
        h1 ^= mix_k1(k1);
    }
    // length is taken modulo 2^32 as in the reference
    h1 ^= data.len() as u32;
    fmix32(h1)
} // end of murmur3_32



#[cfg(test)]
mod tests {

use super::*;

#[test]
fn reference_vectors() {
    assert_eq!(murmur3_32(b"", 0), 0);
    assert_eq!(murmur3_32(b"", 1), 0x514e28b7);
    assert_eq!(murmur3_32(b"test", 0), 0xba6bd213);
    assert_eq!(murmur3_32(b"hello", 0), 0x248bfa47);
    assert_eq!(murmur3_32(b"hello, world", 0), 0x149bbb7f);
    assert_eq!(murmur3_32(b"The quick brown fox jumps over the lazy dog.", 0), 0xd5c48bfc);
}

#[test]
fn tails() {
    // lengths 1, 2, 3 exercise each tail size
    assert_eq!(murmur3_32(b"a", 0), 0x3c2569b2);
    assert_eq!(murmur3_32(b"ab", 0), 0x9bbfd75f);
    assert_eq!(murmur3_32(b"abc", 0), 0xb3dd93fa);
}

#[test]
fn multibyte_labels_hash_utf8() {
    assert_eq!(murmur3_32("é".as_bytes(), 0), 0x10110787);
}

}  // end of mod tests
