//! Multi-precision integer arithmetic for public-key cryptography.
//!
//! This crate provides the arbitrary-precision signed integer type [`Mpi`]
//! together with the number-theoretic operations RSA, DH and DSA are built
//! from: addition, subtraction, multiplication, division with remainder,
//! bitwise shifts, Montgomery modular exponentiation, binary GCD, modular
//! inversion, Miller-Rabin primality testing and (safe) prime generation.
//!
//! Values are kept in sign-magnitude form: a [`Sign`] plus a little-endian
//! vector of machine-word limbs. Fallible operations return [`Result`];
//! the operator traits (`+`, `-`, `*`, `/`, `%`, `<<`, `>>`) are thin
//! wrappers that panic on the rare failure cases (the [`MAX_LIMBS`] cap,
//! division by zero), mirroring how the primitive integer operators behave.
//!
//! Randomness is supplied by the caller through [`rand::Rng`]; the
//! [`RandMpi`] extension trait adds [`gen_mpi`](RandMpi::gen_mpi),
//! [`gen_prime`](RandMpi::gen_prime) and
//! [`gen_safe_prime`](RandMpi::gen_safe_prime) to every RNG.
//!
//! Limb buffers are wiped on release ([`zeroize`]), including the buffers of
//! all internal temporaries. Apart from the balanced final subtraction in
//! Montgomery multiplication, operations are *not* constant-time; callers
//! that need timing resistance must add blinding on top.
//!
//! # Example
//!
//! ```
//! use mpint::{Mpi, RandMpi};
//!
//! let p = Mpi::from_str_radix("e95e4a5f737059dc60dfc7ad95b3d8139515620f", 16).unwrap();
//! let g = Mpi::from(2u64);
//! let mut rng = rand::rng();
//! let x = rng.gen_mpi(16).unwrap();
//! let y = g.exp_mod(&x, &p).unwrap();
//! assert!(y < p);
//! ```

mod error;
#[macro_use]
mod macros;
mod mpi;

pub mod algorithms;
mod mpirand;
mod prime;

pub use crate::error::{Error, Result};
pub use crate::mpi::monty::ExpModCache;
pub use crate::mpi::{Mpi, Sign};
pub use crate::mpirand::RandMpi;
pub use crate::prime::{gen_prime, is_prime};

/// Hard cap on the number of limbs a single [`Mpi`] may hold.
///
/// Growing past this limit fails with [`Error::AllocFailed`].
pub const MAX_LIMBS: usize = 10_000;

/// Maximum size of an [`Mpi`] in bits.
pub const MAX_BITS: usize = MAX_LIMBS * big_digit::BITS;

/// Maximum size of an [`Mpi`] in bytes.
pub const MAX_BYTES: usize = MAX_LIMBS * big_digit::BYTES;

/// The limb word and its double-width companion.
pub mod big_digit {
    /// A single limb of an [`Mpi`](crate::Mpi) magnitude.
    pub type BigDigit = u64;

    /// A `BigDigit` pair, used for intermediate products and carries.
    pub type DoubleBigDigit = u128;

    /// Signed variant of `DoubleBigDigit`, used to track borrows.
    pub type SignedDoubleBigDigit = i128;

    /// Width of a limb in bits.
    pub const BITS: usize = 64;

    /// Width of a limb in bytes.
    pub const BYTES: usize = BITS / 8;

    const LO_MASK: DoubleBigDigit = (1 << BITS) - 1;

    #[inline]
    fn get_hi(n: DoubleBigDigit) -> BigDigit {
        (n >> BITS) as BigDigit
    }

    #[inline]
    fn get_lo(n: DoubleBigDigit) -> BigDigit {
        (n & LO_MASK) as BigDigit
    }

    /// Join two limbs into a `DoubleBigDigit`.
    #[inline]
    pub fn to_doublebigdigit(hi: BigDigit, lo: BigDigit) -> DoubleBigDigit {
        ((hi as DoubleBigDigit) << BITS) | (lo as DoubleBigDigit)
    }

    /// Split a `DoubleBigDigit` into `(hi, lo)` limbs.
    #[inline]
    pub fn from_doublebigdigit(n: DoubleBigDigit) -> (BigDigit, BigDigit) {
        (get_hi(n), get_lo(n))
    }
}
