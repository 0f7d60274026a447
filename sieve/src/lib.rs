//! A Sieve of Eratosthenes over a fixed, exclusive upper bound.
//!
//! The sieve owns a marker sequence of `N` bits, one per index in `0..N`. Once constructed, the
//! bit at index `i` is set if and only if `i` is prime. Indices `0` and `1` are never set.
//!
//! ## Example
//!
//! ```
//! use primes_sieve::Sieve;
//!
//! let sieve = Sieve::new(10);
//! assert_eq!(sieve.primes().collect::<Vec<_>>(), [2, 3, 5, 7]);
//! assert_eq!(sieve.count(), 4);
//! ```
#![deny(warnings)]

use bitvec::prelude::{BitSlice, BitVec, Lsb0};

/// The bound used when none is provided
pub const DEFAULT_BOUND: usize = 1000;

/// The marker sequence produced by sieving every index below a bound
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sieve {
    markers: BitVec<usize, Lsb0>,
}

impl Sieve {
    /// Sieve all indices in `0..bound`.
    ///
    /// A bound of `0` or `1` produces a sieve with no primes.
    pub fn new(bound: usize) -> Self {
        let mut markers = BitVec::<usize, Lsb0>::repeat(true, bound);
        if bound > 0 {
            markers.set(0, false);
        }
        if bound > 1 {
            markers.set(1, false);
        }

        // Multiples of `p` below `p * p` were already cleared by a smaller prime factor
        let mut p = 2usize;
        while p.checked_mul(p).is_some_and(|square| square < bound) {
            if markers[p] {
                log::trace!(target: "sieve", "clearing multiples of {p}");
                for composite in (p * p..bound).step_by(p) {
                    markers.set(composite, false);
                }
            }
            p += 1;
        }

        let sieve = Self { markers };
        log::debug!(target: "sieve", "sieved {bound} indices, {} primes remain", sieve.count());
        sieve
    }

    /// The exclusive upper bound this sieve was built for
    #[inline]
    pub fn bound(&self) -> usize {
        self.markers.len()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.markers.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.markers.is_empty()
    }

    /// Returns true if `n` is prime. Anything at or beyond the bound is reported as not prime.
    pub fn is_prime(&self, n: usize) -> bool {
        self.markers.get(n).is_some_and(|marker| *marker)
    }

    /// Iterate over the primes below the bound, in increasing order
    pub fn primes(&self) -> impl DoubleEndedIterator<Item = usize> + '_ {
        self.markers.iter_ones()
    }

    /// The number of primes below the bound
    pub fn count(&self) -> usize {
        self.markers.count_ones()
    }

    /// The largest prime below the bound, if any
    pub fn largest(&self) -> Option<usize> {
        self.markers.last_one()
    }

    pub fn as_bitslice(&self) -> &BitSlice<usize, Lsb0> {
        self.markers.as_bitslice()
    }
}

impl Default for Sieve {
    fn default() -> Self {
        Self::new(DEFAULT_BOUND)
    }
}
