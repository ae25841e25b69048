//! Randomization of multi-precision integers.

use rand::Rng;
use zeroize::Zeroize;

use crate::{prime, Error, Mpi, Result, MAX_BYTES};

/// A trait for sampling random [`Mpi`] values and primes from any RNG.
///
/// *Warning*: the quality of the results is entirely dependent on the
/// provided random number generator; use a CSPRNG for key material.
///
/// # Example
///
/// ```
/// use mpint::RandMpi;
///
/// let mut rng = rand::rng();
/// let p = rng.gen_prime(256).unwrap();
/// assert_eq!(p.bits(), 256);
/// ```
pub trait RandMpi {
    /// Generate a random [`Mpi`] from `size` bytes of RNG output.
    ///
    /// The bytes are interpreted big-endian, so a deterministic RNG yields
    /// the same value on every platform. The result is uniform in
    /// `[0, 2^(8 * size))`.
    fn gen_mpi(&mut self, size: usize) -> Result<Mpi>;

    /// Generate a random prime with exactly `bit_size` bits.
    fn gen_prime(&mut self, bit_size: usize) -> Result<Mpi>;

    /// Generate a random safe prime `p` (one where `(p - 1) / 2` is also
    /// prime) with exactly `bit_size` bits.
    ///
    /// Safe primes are sparse; expect this to take orders of magnitude
    /// longer than [`gen_prime`](RandMpi::gen_prime).
    fn gen_safe_prime(&mut self, bit_size: usize) -> Result<Mpi>;
}

impl<R: Rng + ?Sized> RandMpi for R {
    fn gen_mpi(&mut self, size: usize) -> Result<Mpi> {
        if size > MAX_BYTES {
            return Err(Error::BadInput);
        }

        let mut buf = vec![0u8; size];
        self.fill_bytes(&mut buf);
        let x = Mpi::from_bytes_be(&buf);
        buf.zeroize();
        x
    }

    #[inline]
    fn gen_prime(&mut self, bit_size: usize) -> Result<Mpi> {
        prime::gen_prime(self, bit_size, false)
    }

    #[inline]
    fn gen_safe_prime(&mut self, bit_size: usize) -> Result<Mpi> {
        prime::gen_prime(self, bit_size, true)
    }
}
